use std::time::Instant;

use bytes::Bytes;

#[derive(Debug, Clone)]
pub struct StringEntry {
    pub value: Bytes,
    pub expires_at: Option<Instant>,
}

impl StringEntry {
    pub fn new(value: Bytes) -> Self {
        Self { value, expires_at: None }
    }

    pub fn with_expiry(value: Bytes, expires_at: Instant) -> Self {
        Self { value, expires_at: Some(expires_at) }
    }

    pub fn is_expired(&self) -> bool {
        match self.expires_at {
            Some(t) => Instant::now() > t,
            None => false,
        }
    }
}
