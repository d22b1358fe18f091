use std::sync::Arc;

use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};

use crate::command::{self, Dispatch};
use crate::resp::{Reader, Value, Writer};
use crate::store::Store;

pub async fn handle<S>(stream: S, store: Arc<Store>)
where
    S: AsyncRead + AsyncWrite + Unpin + Send,
{
    let (read_half, write_half) = tokio::io::split(stream);
    let mut reader = Reader::new(BufReader::new(read_half));
    let mut writer = Writer::new(write_half);

    loop {
        let request = match reader.read().await {
            Ok(Some(value)) => value,
            Ok(None) => return,
            Err(e) => {
                let _ = writer.write(&Value::error(format!("ERR {e}"))).await;
                return;
            }
        };

        let response = match validate(&request) {
            Some(error) => error,
            None => match command::dispatch(&request, &store) {
                Dispatch::Ran(value) => value,
                Dispatch::UnknownCommand(_) => Value::error("ERR Command is unknown"),
                Dispatch::WrongArity(name) => {
                    Value::error(format!("ERR wrong number of arguments for '{}' command", name.to_lowercase()))
                }
            },
        };

        if writer.write(&response).await.is_err() {
            return;
        }
    }
}

fn validate(request: &Value) -> Option<Value> {
    match request {
        Value::Array(Some(items)) if !items.is_empty() && items.iter().all(|v| matches!(v, Value::Bulk(Some(_)))) => None,
        _ => Some(Value::error("ERR request must be a non-empty array of bulk strings")),
    }
}
