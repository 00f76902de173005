//! chained-hashmap: a single-threaded, separate-chaining hash table with
//! string keys, arena-backed chains and load-factor driven growth.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: one small core, `ChainTable`, that every other type delegates
//!   to, so the chaining and growth invariants live in one place.
//! - Layers:
//!   - HashOracle: the key -> `u64` function. `FnvRotate` is the default;
//!     `BuildHasherOracle` adapts any std `BuildHasher`.
//!   - ChainTable<V, H>: bucket array of chain heads over a `SlotMap`
//!     arena of entries. Each entry links to its successor by handle.
//!   - ChainDict / ChainSet: pass-through façades (dictionary with
//!     heterogeneous values by default; set over `ChainTable<()>`).
//!
//! Constraints
//! - Single owner, no internal synchronization. Share behind a lock if
//!   needed (a reader/writer lock permits concurrent `get`/`iter`).
//! - Bucket index is `hash(key) % capacity`; capacity is never zero.
//! - `len()` always equals the number of entries reachable through the
//!   chains; overwrites never change it.
//! - Unknown keys are not errors: `get` returns `None`, `delete` is a
//!   no-op.
//!
//! Growth
//! - After an insert adds a key, if `len / capacity > load_factor` the
//!   bucket array doubles (repeatedly, until it covers `len`) and every
//!   entry is relinked into the new array. Entries are not moved or
//!   recreated; only `next` handles and bucket heads change.
//! - `insert_many` grows once up front for the whole batch.
//! - Deletes never shrink the table.
//! - Allocation failure aborts, like any std collection. Bucket-count
//!   overflow panics from `insert`/`reserve` and is returned as
//!   `Error::CapacityOverflow` from `try_reserve`.
//!
//! Notes and non-goals
//! - Iteration order follows bucket then chain order and changes with
//!   resizes; do not rely on it.
//! - Keys are immutable once inserted; there is no `key_mut`.
//! - No shrinking, no `Sync` story, no persistence.

mod config;
mod dict;
mod error;
pub mod hash;
mod set;
mod table;
mod table_proptest;

// Public surface
pub use config::{Config, DEFAULT_CAPACITY, DEFAULT_LOAD_FACTOR, GROWTH_FACTOR};
pub use dict::ChainDict;
pub use error::{Error, Result};
pub use hash::{BuildHasherOracle, FnvRotate, HashOracle};
pub use set::ChainSet;
pub use table::{AnyValue, ChainTable, Iter};
