use std::time::{Duration, Instant};

use bytes::Bytes;

use crate::resp::Value;
use crate::store::{Store, StringEntry};

pub fn ping(request: &Value, _store: &Store) -> Value {
    let args = request.args();
    if args.is_empty() {
        return Value::SimpleString("PONG".to_string());
    }
    let text = args[0].as_bulk_str().unwrap_or_default().to_string();
    Value::SimpleString(text)
}

pub fn set(request: &Value, store: &Store) -> Value {
    let args = request.args();
    let key = args[0].as_bulk().unwrap().clone();
    let value = args[1].as_bulk().unwrap().clone();

    let mut duration: Option<Duration> = None;
    let mut recognized = false;
    let mut i = 2;
    while i < args.len() {
        let keyword = args[i].as_bulk_str().unwrap_or_default().to_uppercase();
        let is_expiry_option = keyword == "EX" || keyword == "PX";
        if recognized || !is_expiry_option {
            i += 1;
            continue;
        }
        // The final token can't carry a partner value, so a trailing
        // EX/PX with nothing after it is silently ignored.
        if i + 1 >= args.len() {
            break;
        }
        let raw = match args[i + 1].as_bulk_str() {
            Some(s) => s,
            None => return Value::error("ERR value is not an integer or out of range"),
        };
        let amount: u64 = match raw.parse() {
            Ok(n) => n,
            Err(_) => return Value::error("ERR value is not an integer or out of range"),
        };
        duration = if amount > 0 {
            Some(if keyword == "EX" { Duration::from_secs(amount) } else { Duration::from_millis(amount) })
        } else {
            None
        };
        recognized = true;
        i += 2;
    }

    let entry = match duration {
        Some(d) => StringEntry::with_expiry(value, Instant::now() + d),
        None => StringEntry::new(value),
    };

    match store.save_string(request, key, entry) {
        Ok(()) => Value::ok(),
        Err(e) => Value::error(format!("ERR {}", e)),
    }
}

pub fn get(request: &Value, store: &Store) -> Value {
    let key = request.args()[0].as_bulk().unwrap();
    match store.get_string(key) {
        Some(entry) if !entry.is_expired() => Value::Bulk(Some(entry.value)),
        _ => Value::null_bulk(),
    }
}

pub fn del(request: &Value, store: &Store) -> Value {
    let keys: Vec<Bytes> = request.args().iter().filter_map(|v| v.as_bulk().cloned()).collect();
    match store.delete_strings(request, &keys) {
        Ok(count) => Value::Integer(count as i64),
        Err(e) => Value::error(format!("ERR {}", e)),
    }
}

pub fn incr(request: &Value, store: &Store) -> Value {
    let key = request.args()[0].as_bulk().unwrap().clone();

    let existing = store.get_string(&key).filter(|e| !e.is_expired());
    let current: i64 = match &existing {
        Some(entry) => match std::str::from_utf8(&entry.value).ok().and_then(|s| s.parse().ok()) {
            Some(n) => n,
            None => return Value::error("ERR value is not an integer or out of range"),
        },
        None => 0,
    };

    let next = current + 1;
    let entry = StringEntry { value: Bytes::from(next.to_string()), expires_at: existing.and_then(|e| e.expires_at) };

    match store.save_string(request, key, entry) {
        Ok(()) => Value::Integer(next),
        Err(e) => Value::error(format!("ERR {}", e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn req(tokens: &[&str]) -> Value {
        Value::array(tokens.iter().map(|t| Value::bulk(*t)).collect())
    }

    #[test]
    fn ping_with_no_args_is_pong() {
        let store = Store::new();
        assert_eq!(ping(&req(&["PING"]), &store), Value::SimpleString("PONG".into()));
    }

    #[test]
    fn ping_echoes_its_argument() {
        let store = Store::new();
        assert_eq!(ping(&req(&["PING", "Tiramisu"]), &store), Value::SimpleString("Tiramisu".into()));
    }

    #[test]
    fn set_then_get_roundtrips() {
        let store = Store::new();
        assert_eq!(set(&req(&["SET", "Tira", "Misu"]), &store), Value::ok());
        assert_eq!(get(&req(&["GET", "Tira"]), &store), Value::bulk("Misu"));
    }

    #[test]
    fn get_missing_key_is_null_bulk() {
        let store = Store::new();
        assert_eq!(get(&req(&["GET", "nope"]), &store), Value::null_bulk());
    }

    #[test]
    fn del_on_absent_keys_returns_zero() {
        let store = Store::new();
        assert_eq!(del(&req(&["DEL", "a", "b"]), &store), Value::Integer(0));
    }

    #[test]
    fn incr_absent_key_starts_at_one() {
        let store = Store::new();
        assert_eq!(incr(&req(&["INCR", "c"]), &store), Value::Integer(1));
        assert_eq!(incr(&req(&["INCR", "c"]), &store), Value::Integer(2));
    }

    #[test]
    fn incr_non_numeric_value_errors_and_leaves_store_untouched() {
        let store = Store::new();
        set(&req(&["SET", "k", "nope"]), &store);
        let result = incr(&req(&["INCR", "k"]), &store);
        assert!(matches!(result, Value::Error(_)));
        assert_eq!(get(&req(&["GET", "k"]), &store), Value::bulk("nope"));
    }

    #[test]
    fn set_with_ex_expires_after_duration() {
        let store = Store::new();
        set(&req(&["SET", "k", "v", "EX", "100"]), &store);
        let entry = store.get_string(b"k").unwrap();
        assert!(entry.expires_at.is_some());
        assert!(!entry.is_expired());
    }

    #[test]
    fn set_with_zero_ex_means_no_expiration() {
        let store = Store::new();
        set(&req(&["SET", "k", "v", "EX", "0"]), &store);
        let entry = store.get_string(b"k").unwrap();
        assert!(entry.expires_at.is_none());
    }

    #[test]
    fn set_with_non_numeric_expiry_errors() {
        let store = Store::new();
        let result = set(&req(&["SET", "k", "v", "EX", "soon"]), &store);
        assert!(matches!(result, Value::Error(_)));
    }

    #[test]
    fn set_with_dangling_ex_token_is_ignored() {
        let store = Store::new();
        let result = set(&req(&["SET", "k", "v", "EX"]), &store);
        assert_eq!(result, Value::ok());
        let entry = store.get_string(b"k").unwrap();
        assert!(entry.expires_at.is_none());
    }

    #[test]
    fn incr_preserves_existing_expiration() {
        let store = Store::new();
        set(&req(&["SET", "c", "1", "EX", "100"]), &store);
        incr(&req(&["INCR", "c"]), &store);
        let entry = store.get_string(b"c").unwrap();
        assert!(entry.expires_at.is_some());
    }
}
