// ChainDict suite: the dictionary only forwards to ChainTable, so these
// tests check the forwarding and the heterogeneous-value helpers.
use chained_hashmap::{AnyValue, ChainDict};
use std::collections::BTreeSet;

#[test]
fn set_get_delete() {
    let mut d: ChainDict<&str> = ChainDict::new();
    d.set("key1", "value1");
    assert_eq!(d.get("key1"), Some(&"value1"));

    d.delete("key1");
    assert_eq!(d.get("key1"), None);
    assert!(d.is_empty());
}

// Test: keys and values views.
// Verifies: both list every entry once, in matching traversal order.
#[test]
fn keys_and_values() {
    let mut d: ChainDict<i32> = ChainDict::new();
    d.set("a", 1);
    d.set("b", 2);
    assert_eq!(d.len(), 2);

    let keys = d.keys();
    let values = d.values();
    assert_eq!(keys.len(), 2);
    assert_eq!(values.len(), 2);
    for (k, v) in keys.iter().zip(values) {
        assert_eq!(d.get(k), Some(v));
    }
    let keys: BTreeSet<_> = keys.into_iter().collect();
    assert_eq!(keys, BTreeSet::from(["a".to_string(), "b".to_string()]));
}

#[test]
fn with_capacity_starts_empty_and_grows() {
    let mut d: ChainDict<usize> = ChainDict::with_capacity(100);
    assert_eq!(d.len(), 0);
    assert_eq!(d.as_table().capacity(), 100);
    for i in 0..100 {
        d.set(format!("key{i}"), i);
    }
    assert_eq!(d.len(), 100);
    assert!(d.as_table().capacity() > 100);
}

#[test]
fn set_many_and_delete_many() {
    let mut d: ChainDict<i32> = ChainDict::new();
    d.set_many([("key1", 1), ("key2", 2), ("key3", 3)]);
    assert_eq!(d.len(), 3);
    for (k, v) in [("key1", 1), ("key2", 2), ("key3", 3)] {
        assert_eq!(d.get(k), Some(&v));
    }

    d.set("key4", 4);
    d.delete_many(["key1", "key3"]);
    assert_eq!(d.len(), 2);
    assert!(!d.contains_key("key1"));
    assert!(!d.contains_key("key3"));
    assert!(d.contains_key("key2"));
    assert!(d.contains_key("key4"));
}

// Test: mixed value types in the default dictionary.
// Verifies: each key keeps its own type; a wrong type reads as absent.
#[test]
fn heterogeneous_values() {
    let mut d: ChainDict = ChainDict::new();
    d.set_any("count", 3usize);
    d.set_any("name", String::from("chain"));
    d.set("raw", Box::new(1.5f64) as AnyValue);

    assert_eq!(d.get_as::<usize>("count"), Some(&3));
    assert_eq!(d.get_as::<String>("name").map(String::as_str), Some("chain"));
    assert_eq!(d.get_as::<f64>("raw"), Some(&1.5));
    assert_eq!(d.get_as::<String>("count"), None);

    // Overwriting may change the stored type.
    d.set_any("count", "three");
    assert_eq!(d.get_as::<usize>("count"), None);
    assert_eq!(d.get_as::<&str>("count"), Some(&"three"));
    assert_eq!(d.len(), 3);
}

#[test]
fn get_mut_and_debug() {
    let mut d: ChainDict<Vec<u8>> = ChainDict::new();
    d.set("bytes", vec![1]);
    d.get_mut("bytes").unwrap().push(2);
    assert_eq!(d.get("bytes"), Some(&vec![1, 2]));
    assert_eq!(format!("{d:?}"), r#"{"bytes": [1, 2]}"#);
}
