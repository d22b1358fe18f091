use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use thiserror::Error;
use tokio::io::BufReader;

use crate::resp::{DecodeError, Reader, Value};

#[derive(Error, Debug)]
pub enum ReplayError {
    #[error("failed to open AOF file: {0}")]
    Open(#[source] std::io::Error),
    #[error("AOF record is truncated")]
    Truncated,
    #[error("failed to decode AOF record: {0}")]
    Decode(#[from] DecodeError),
}

pub struct Aof {
    path: PathBuf,
    file: Mutex<File>,
}

impl Aof {
    pub fn open(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let mut options = OpenOptions::new();
        options.create(true).read(true).write(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o666);
        }
        let file = options.open(&path)?;
        Ok(Self { path, file: Mutex::new(file) })
    }

    // no per-call fsync; a background task flushes on a cadence
    pub fn append(&self, value: &Value) -> std::io::Result<()> {
        let buf = value.encode_to_vec();
        let mut file = self.file.lock().unwrap();
        file.write_all(&buf)
    }

    pub fn flush(&self) -> std::io::Result<()> {
        self.file.lock().unwrap().sync_all()
    }

    // reopens the path independently so replay never contends with the live append handle
    pub async fn read_all(path: impl AsRef<Path>) -> Result<Vec<Value>, ReplayError> {
        let file = tokio::fs::File::open(path.as_ref()).await.map_err(ReplayError::Open)?;
        let mut reader = Reader::new(BufReader::new(file));
        let mut values = Vec::new();
        loop {
            match reader.read().await {
                Ok(Some(value)) => values.push(value),
                Ok(None) => break,
                Err(DecodeError::UnexpectedEof) => return Err(ReplayError::Truncated),
                Err(DecodeError::Io(e)) if e.kind() == std::io::ErrorKind::UnexpectedEof => {
                    return Err(ReplayError::Truncated)
                }
                Err(other) => return Err(ReplayError::Decode(other)),
            }
        }
        Ok(values)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resp::Value;

    fn temp_path(name: &str) -> PathBuf {
        let mut p = std::env::temp_dir();
        p.push(format!("gritcache-aof-test-{}-{}", std::process::id(), name));
        p
    }

    #[test]
    fn append_writes_canonical_bytes() {
        let path = temp_path("append");
        let _ = std::fs::remove_file(&path);
        let aof = Aof::open(&path).unwrap();
        let request = Value::array(vec![Value::bulk("SET"), Value::bulk("Tira"), Value::bulk("Misu")]);
        aof.append(&request).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(bytes, b"*3\r\n$3\r\nSET\r\n$4\r\nTira\r\n$4\r\nMisu\r\n");
        std::fs::remove_file(&path).unwrap();
    }

    #[tokio::test]
    async fn read_all_replays_in_commit_order() {
        let path = temp_path("replay");
        let _ = std::fs::remove_file(&path);
        {
            let aof = Aof::open(&path).unwrap();
            aof.append(&Value::array(vec![Value::bulk("SET"), Value::bulk("a"), Value::bulk("1")])).unwrap();
            aof.append(&Value::array(vec![Value::bulk("SET"), Value::bulk("b"), Value::bulk("2")])).unwrap();
        }
        let values = Aof::read_all(&path).await.unwrap();
        assert_eq!(values.len(), 2);
        assert_eq!(values[0].args()[0].as_bulk_str(), Some("a"));
        assert_eq!(values[1].args()[0].as_bulk_str(), Some("b"));
        std::fs::remove_file(&path).unwrap();
    }

    #[tokio::test]
    async fn read_all_rejects_truncated_trailing_record() {
        let path = temp_path("truncated");
        let _ = std::fs::remove_file(&path);
        std::fs::write(&path, b"*2\r\n$3\r\nSET\r\n$4\r\nTi").unwrap();
        let err = Aof::read_all(&path).await.unwrap_err();
        assert!(matches!(err, ReplayError::Truncated));
        std::fs::remove_file(&path).unwrap();
    }
}
