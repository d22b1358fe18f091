use std::future::Future;
use std::pin::Pin;

use bytes::Bytes;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt};

use super::error::DecodeError;
use super::value::Value;

const MAX_BULK_LEN: i64 = 512 * 1024 * 1024;

pub struct Reader<R> {
    inner: R,
}

impl<R> Reader<R>
where
    R: AsyncBufRead + Unpin + Send,
{
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    pub async fn read(&mut self) -> Result<Option<Value>, DecodeError> {
        let mut tag = [0u8; 1];
        let n = self.inner.read(&mut tag).await?;
        if n == 0 {
            return Ok(None);
        }
        self.read_body(tag[0]).await.map(Some)
    }

    fn read_value(&mut self) -> Pin<Box<dyn Future<Output = Result<Value, DecodeError>> + Send + '_>> {
        Box::pin(async move {
            let mut tag = [0u8; 1];
            let n = self.inner.read(&mut tag).await?;
            if n == 0 {
                return Err(DecodeError::UnexpectedEof);
            }
            self.read_body(tag[0]).await
        })
    }

    async fn read_body(&mut self, tag: u8) -> Result<Value, DecodeError> {
        match tag {
            b'+' => Ok(Value::SimpleString(self.read_line().await?)),
            b'-' => Ok(Value::Error(self.read_line().await?)),
            b':' => {
                let line = self.read_line().await?;
                let n: i64 = line.parse().map_err(|_| DecodeError::BadInteger)?;
                Ok(Value::Integer(n))
            }
            b'$' => self.read_bulk().await,
            b'*' => self.read_array().await,
            other => Err(DecodeError::UnknownType(other)),
        }
    }

    async fn read_line(&mut self) -> Result<String, DecodeError> {
        let mut raw = Vec::new();
        let n = self.inner.read_until(b'\n', &mut raw).await?;
        if n == 0 || !raw.ends_with(b"\n") {
            return Err(DecodeError::UnexpectedEof);
        }
        raw.pop(); // \n
        if raw.last() == Some(&b'\r') {
            raw.pop();
        }
        String::from_utf8(raw).map_err(|_| DecodeError::BadInteger)
    }

    async fn read_length(&mut self) -> Result<i64, DecodeError> {
        let line = self.read_line().await?;
        line.parse().map_err(|_| DecodeError::BadInteger)
    }

    async fn read_bulk(&mut self) -> Result<Value, DecodeError> {
        let len = self.read_length().await?;
        if len == -1 {
            return Ok(Value::Bulk(None));
        }
        if len < 0 {
            return Err(DecodeError::BadInteger);
        }
        if len > MAX_BULK_LEN {
            return Err(DecodeError::TooLarge(len));
        }
        let mut data = vec![0u8; len as usize];
        self.inner.read_exact(&mut data).await.map_err(|e| match e.kind() {
            std::io::ErrorKind::UnexpectedEof => DecodeError::UnexpectedEof,
            _ => DecodeError::Io(e),
        })?;
        self.consume_optional_crlf().await?;
        Ok(Value::Bulk(Some(Bytes::from(data))))
    }

    async fn read_array(&mut self) -> Result<Value, DecodeError> {
        let len = self.read_length().await?;
        if len == -1 {
            return Ok(Value::Array(None));
        }
        if len < 0 {
            return Err(DecodeError::BadInteger);
        }
        let mut items = Vec::new();
        for _ in 0..len {
            items.push(self.read_value().await?);
        }
        Ok(Value::Array(Some(items)))
    }

    // tolerates the terminator being partially or entirely absent at EOF
    async fn consume_optional_crlf(&mut self) -> Result<(), DecodeError> {
        for expected in [b'\r', b'\n'] {
            let buf = self.inner.fill_buf().await?;
            if buf.is_empty() || buf[0] != expected {
                return Ok(());
            }
            self.inner.consume(1);
        }
        Ok(())
    }
}
