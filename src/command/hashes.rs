use bytes::Bytes;

use crate::resp::Value;
use crate::store::Store;

pub fn hset(request: &Value, store: &Store) -> Value {
    let args = request.args();
    let hash = args[0].as_bulk().unwrap().clone();
    let field = args[1].as_bulk().unwrap().clone();
    let value = args[2].as_bulk().unwrap().clone();

    match store.save_hash(request, hash, field, value) {
        Ok(()) => Value::ok(),
        Err(e) => Value::error(format!("ERR {}", e)),
    }
}

pub fn hget(request: &Value, store: &Store) -> Value {
    let args = request.args();
    let hash = args[0].as_bulk().unwrap();
    let field = args[1].as_bulk().unwrap();

    match store.get_hash(hash) {
        Some(map) => match map.get(field.as_ref()) {
            Some(value) => Value::Bulk(Some(value.clone())),
            None => Value::null_bulk(),
        },
        None => Value::null_bulk(),
    }
}

pub fn hdel(request: &Value, store: &Store) -> Value {
    let args = request.args();
    let hash = args[0].as_bulk().unwrap().clone();
    let fields: Vec<Bytes> = args[1..].iter().filter_map(|v| v.as_bulk().cloned()).collect();

    match store.delete_hash_fields(request, &hash, &fields) {
        Ok(count) => Value::Integer(count as i64),
        Err(e) => Value::error(format!("ERR {}", e)),
    }
}

pub fn hgetall(request: &Value, store: &Store) -> Value {
    let hash = request.args()[0].as_bulk().unwrap();
    match store.get_hash(hash) {
        Some(map) => {
            let mut items = Vec::with_capacity(map.len() * 2);
            for (field, value) in map {
                items.push(Value::Bulk(Some(field)));
                items.push(Value::Bulk(Some(value)));
            }
            Value::array(items)
        }
        None => Value::null_bulk(),
    }
}
