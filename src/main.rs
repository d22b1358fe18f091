use gritcache::config::Config;

#[tokio::main]
async fn main() {
    let config = Config::from_env();

    if let Err(e) = gritcache::run(config).await {
        eprintln!("gritcache: {e:#}");
        std::process::exit(1);
    }
}
