//! Key/value mapping transforms.
//!
//! Helpers for building and reshaping `im::HashMap`s. The transforms never
//! mutate their input; each returns a freshly built map. Where a transform
//! can produce colliding keys, the entry applied last (in iteration order,
//! which `im::HashMap` leaves unspecified) wins.

use std::hash::Hash;

use im::HashMap;

use crate::errors::{UtilError, UtilResult};
use crate::value::Value;

/// Builds a string-keyed map from a sequence of two-element key/value lists.
///
/// Each element must be a [`Value::List`] of exactly two items whose first
/// item is a `String` or `Symbol`; anything else fails with
/// [`UtilError::MalformedPair`], naming the offending index. When two pairs
/// carry the same key, the later pair wins.
///
/// # Examples
///
/// ```rust
/// use weft_util::mapping::to_map;
/// use weft_util::value::Value;
///
/// let pairs = vec![
///     Value::List(vec![Value::symbol("title"), Value::from("Weft")]),
///     Value::List(vec![Value::symbol("depth"), Value::from(3_i64)]),
/// ];
/// let map = to_map(&pairs).unwrap();
/// assert_eq!(map.get("depth"), Some(&Value::Number(3.0)));
/// ```
pub fn to_map(pairs: &[Value]) -> UtilResult<HashMap<String, Value>> {
    let mut map = HashMap::new();
    for (index, pair) in pairs.iter().enumerate() {
        let items = match pair {
            Value::List(items) if items.len() == 2 => items,
            other => {
                return Err(UtilError::MalformedPair {
                    index,
                    found: found_text(other),
                })
            }
        };
        let key = match &items[0] {
            Value::String(s) | Value::Symbol(s) => s.clone(),
            other => {
                return Err(UtilError::MalformedPair {
                    index,
                    found: found_text(other),
                })
            }
        };
        map.insert(key, items[1].clone());
    }
    Ok(map)
}

fn found_text(value: &Value) -> String {
    format!("{} `{}`", value.type_name(), value)
}

/// Returns a new map with every key replaced by `f(key)`, values unchanged.
pub fn map_keys<K, V, K2, F>(map: &HashMap<K, V>, mut f: F) -> HashMap<K2, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
    K2: Hash + Eq + Clone,
    F: FnMut(&K) -> K2,
{
    map.iter().map(|(k, v)| (f(k), v.clone())).collect()
}

/// Returns a new map with every value replaced by `f(value)`, keys unchanged.
pub fn map_vals<K, V, V2, F>(map: &HashMap<K, V>, mut f: F) -> HashMap<K, V2>
where
    K: Hash + Eq + Clone,
    V: Clone,
    V2: Clone,
    F: FnMut(&V) -> V2,
{
    map.iter().map(|(k, v)| (k.clone(), f(v))).collect()
}

/// Returns a new map built from `f(key, value)` applied to every entry.
pub fn map_entries<K, V, K2, V2, F>(map: &HashMap<K, V>, mut f: F) -> HashMap<K2, V2>
where
    K: Hash + Eq + Clone,
    V: Clone,
    K2: Hash + Eq + Clone,
    V2: Clone,
    F: FnMut(&K, &V) -> (K2, V2),
{
    map.iter().map(|(k, v)| f(k, v)).collect()
}
