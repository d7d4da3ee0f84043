//! Field-level merging of caller values over defaults.
//!
//! Objects merge key by key, recursively. Any other value in the overlay
//! replaces the base. An explicit `null` in the overlay removes the key,
//! which is how an operator drops a default field.

use serde_json::Value;

use crate::schema::Stanza;

/// Merge `overlay` into `base` in place.
pub fn merge_stanza(base: &mut Stanza, overlay: Stanza) {
    for (key, value) in overlay {
        match value {
            Value::Null => {
                base.remove(&key);
            }
            Value::Object(next) => match base.get_mut(&key) {
                Some(Value::Object(inner)) => merge_stanza(inner, next),
                _ => {
                    base.insert(key, Value::Object(next));
                }
            },
            value => {
                base.insert(key, value);
            }
        }
    }
}

/// Combine a backend-style stanza (`storage`, `ha_storage`, `seal`) with its
/// default.
///
/// When the caller names the same backend kind as the default, options are
/// merged field by field. A different kind replaces the default outright so
/// two backends never end up in one stanza.
#[must_use]
pub fn merge_backend(default: Option<&Stanza>, caller: Option<Stanza>) -> Option<Stanza> {
    match (default, caller) {
        (None, caller) => caller,
        (Some(default), None) => Some(default.clone()),
        (Some(default), Some(caller)) => {
            if same_kind(default, &caller) {
                let mut merged = default.clone();
                merge_stanza(&mut merged, caller);
                Some(merged)
            } else {
                Some(caller)
            }
        }
    }
}

/// Combine a caller listener list with the default list.
///
/// A single caller listener of the same type as a single default listener
/// is merged into it field by field. Any other non-empty caller list
/// replaces the defaults.
#[must_use]
pub fn merge_listeners(defaults: &[Stanza], caller: &[Stanza]) -> Vec<Stanza> {
    match (defaults, caller) {
        (_, []) => defaults.to_vec(),
        ([default], [single]) if same_kind(default, single) => {
            let mut merged = default.clone();
            merge_stanza(&mut merged, single.clone());
            vec![merged]
        }
        _ => caller.to_vec(),
    }
}

fn same_kind(default: &Stanza, caller: &Stanza) -> bool {
    caller.keys().all(|kind| default.contains_key(kind))
}

/// Copy of `stanza` with `null` values removed at every depth.
#[must_use]
pub fn without_nulls(stanza: &Stanza) -> Stanza {
    let mut value = Value::Object(stanza.clone());
    strip_nulls(&mut value);
    match value {
        Value::Object(map) => map,
        _ => Stanza::new(),
    }
}

/// Remove `null` values at every depth.
pub fn strip_nulls(value: &mut Value) {
    match value {
        Value::Object(map) => {
            map.retain(|_, v| !v.is_null());
            map.values_mut().for_each(strip_nulls);
        }
        Value::Array(items) => items.iter_mut().for_each(strip_nulls),
        _ => {}
    }
}
