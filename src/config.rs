use std::path::PathBuf;

const DEFAULT_PORT: u16 = 6379;
const DEFAULT_AOF_PATH: &str = "./database.aof";

pub struct Config {
    pub port: u16,
    pub aof_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        let port = std::env::var("GC_PORT").ok().and_then(|v| v.parse().ok()).unwrap_or(DEFAULT_PORT);
        let aof_path = std::env::var("GC_DATABASE_PATH").map(PathBuf::from).unwrap_or_else(|_| PathBuf::from(DEFAULT_AOF_PATH));
        Self { port, aof_path }
    }
}
