use bytes::Bytes;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    SimpleString(String),
    Error(String),
    Integer(i64),
    Bulk(Option<Bytes>),
    Array(Option<Vec<Value>>),
}

impl Value {
    pub fn ok() -> Value {
        Value::SimpleString("OK".to_string())
    }

    pub fn null_bulk() -> Value {
        Value::Bulk(None)
    }

    pub fn null_array() -> Value {
        Value::Array(None)
    }

    pub fn bulk(data: impl Into<Bytes>) -> Value {
        Value::Bulk(Some(data.into()))
    }

    pub fn error(message: impl Into<String>) -> Value {
        Value::Error(message.into())
    }

    pub fn array(items: Vec<Value>) -> Value {
        Value::Array(Some(items))
    }

    pub fn args(&self) -> &[Value] {
        match self {
            Value::Array(Some(items)) if !items.is_empty() => &items[1..],
            _ => &[],
        }
    }

    pub fn as_bulk(&self) -> Option<&Bytes> {
        match self {
            Value::Bulk(Some(b)) => Some(b),
            _ => None,
        }
    }

    pub fn as_bulk_str(&self) -> Option<&str> {
        self.as_bulk().and_then(|b| std::str::from_utf8(b).ok())
    }

    pub fn encode(&self, buf: &mut Vec<u8>) {
        match self {
            Value::SimpleString(s) => {
                buf.push(b'+');
                buf.extend_from_slice(s.as_bytes());
                buf.extend_from_slice(b"\r\n");
            }
            Value::Error(s) => {
                buf.push(b'-');
                buf.extend_from_slice(s.as_bytes());
                buf.extend_from_slice(b"\r\n");
            }
            Value::Integer(n) => {
                buf.push(b':');
                buf.extend_from_slice(n.to_string().as_bytes());
                buf.extend_from_slice(b"\r\n");
            }
            Value::Bulk(None) => {
                buf.extend_from_slice(b"$-1\r\n");
            }
            Value::Bulk(Some(data)) => {
                buf.push(b'$');
                buf.extend_from_slice(data.len().to_string().as_bytes());
                buf.extend_from_slice(b"\r\n");
                buf.extend_from_slice(data);
                buf.extend_from_slice(b"\r\n");
            }
            Value::Array(None) => {
                buf.extend_from_slice(b"*-1\r\n");
            }
            Value::Array(Some(items)) => {
                buf.push(b'*');
                buf.extend_from_slice(items.len().to_string().as_bytes());
                buf.extend_from_slice(b"\r\n");
                for item in items {
                    item.encode(buf);
                }
            }
        }
    }

    pub fn encode_to_vec(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        self.encode(&mut buf);
        buf
    }
}
