use tokio::io::{AsyncWrite, AsyncWriteExt};

use super::value::Value;

pub struct Writer<W> {
    inner: W,
}

impl<W> Writer<W>
where
    W: AsyncWrite + Unpin,
{
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub async fn write(&mut self, value: &Value) -> std::io::Result<()> {
        let buf = value.encode_to_vec();
        self.inner.write_all(&buf).await
    }
}
