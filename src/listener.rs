use std::sync::Arc;

use tokio::net::TcpListener;

use crate::connection;
use crate::store::Store;

pub async fn run(listener: TcpListener, store: Arc<Store>) -> std::io::Result<()> {
    loop {
        let (stream, _addr) = listener.accept().await?;
        let store = Arc::clone(&store);
        tokio::spawn(connection::handle(stream, store));
    }
}
