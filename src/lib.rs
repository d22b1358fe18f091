pub mod command;
pub mod config;
pub mod connection;
pub mod expiration;
pub mod listener;
pub mod persistence;
pub mod resp;
pub mod store;

use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;

use crate::config::Config;
use crate::persistence::Aof;
use crate::resp::Value;
use crate::store::Store;

const SWEEP_PERIOD: Duration = Duration::from_millis(250);

pub async fn run(config: Config) -> anyhow::Result<()> {
    let store = Arc::new(Store::new());
    replay(&store, &config.aof_path).await?;

    let aof = Aof::open(&config.aof_path)?;
    store.enable_persistence(aof);

    tokio::spawn(flush_loop(Arc::clone(&store)));
    tokio::spawn(expiration::run(Arc::clone(&store), SWEEP_PERIOD));

    let listener = TcpListener::bind(("0.0.0.0", config.port)).await?;
    println!("gritcache listening on port {}", config.port);
    listener::run(listener, store).await?;
    Ok(())
}

// persistence is still disabled on store here, so replay is never re-appended to the log
async fn replay(store: &Store, aof_path: &std::path::Path) -> anyhow::Result<()> {
    if !aof_path.exists() {
        return Ok(());
    }
    let requests = Aof::read_all(aof_path).await?;
    for request in requests {
        match command::dispatch(&request, store) {
            command::Dispatch::Ran(Value::Error(message)) => {
                anyhow::bail!("AOF replay failed: {message}");
            }
            command::Dispatch::Ran(_) => {}
            command::Dispatch::UnknownCommand(name) => {
                anyhow::bail!("AOF replay failed: unknown command '{name}'");
            }
            command::Dispatch::WrongArity(name) => {
                anyhow::bail!("AOF replay failed: wrong number of arguments for '{name}'");
            }
        }
    }
    Ok(())
}

async fn flush_loop(store: Arc<Store>) {
    loop {
        tokio::time::sleep(Duration::from_secs(1)).await;
        let _ = store.close();
    }
}
