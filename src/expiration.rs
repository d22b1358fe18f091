use std::sync::Arc;
use std::time::Duration;

use crate::resp::Value;
use crate::store::Store;

const KEYS_PER_SWEEP: usize = 10;

pub async fn run(store: Arc<Store>, period: Duration) {
    loop {
        sweep_once(&store);
        tokio::time::sleep(period).await;
    }
}

// eviction goes through delete_strings with a synthetic DEL, same as a client-issued one
fn sweep_once(store: &Store) {
    for _ in 0..KEYS_PER_SWEEP {
        let Some((key, entry)) = store.random_string() else {
            break;
        };
        if entry.is_expired() {
            let request = del_request(&key);
            let _ = store.delete_strings(&request, std::slice::from_ref(&key));
        }
    }
}

fn del_request(key: &[u8]) -> Value {
    Value::array(vec![Value::bulk("DEL"), Value::Bulk(Some(key.to_vec().into()))])
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use std::time::Instant;

    use crate::store::StringEntry;

    #[test]
    fn sweep_evicts_an_expired_key() {
        let store = Store::new();
        let req = Value::array(vec![Value::bulk("SET"), Value::bulk("k"), Value::bulk("v")]);
        let past = Instant::now().checked_sub(Duration::from_secs(1)).unwrap();
        store.save_string(&req, Bytes::from("k"), StringEntry::with_expiry(Bytes::from("v"), past)).unwrap();

        sweep_once(&store);

        assert!(store.get_string(b"k").is_none());
    }

    #[test]
    fn sweep_leaves_unexpired_keys_alone() {
        let store = Store::new();
        let req = Value::array(vec![Value::bulk("SET"), Value::bulk("k"), Value::bulk("v")]);
        store.save_string(&req, Bytes::from("k"), StringEntry::new(Bytes::from("v"))).unwrap();

        sweep_once(&store);

        assert!(store.get_string(b"k").is_some());
    }

    #[test]
    fn sweep_on_empty_store_does_nothing() {
        let store = Store::new();
        sweep_once(&store);
    }
}
