/// Errors surfaced by table configuration and explicit reservation.
///
/// Regular table operations (insert, get, delete, iteration) never fail.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Error {
    /// Load factor must be finite and strictly positive
    InvalidLoadFactor(f64),

    /// Doubling the bucket count would overflow `usize`
    CapacityOverflow,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ChainTableError: {self:?}")
    }
}

impl std::error::Error for Error {}

/// Table result
pub type Result<T> = std::result::Result<T, Error>;
