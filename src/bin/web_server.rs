use pathladder::web::server::{start_server_with_config, ServerConfig};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    // Usage: web_server [PORT] [DICTIONARY]
    let args: Vec<String> = env::args().collect();
    let mut config = ServerConfig::from_env();
    if let Some(port) = args.get(1) {
        config.port = port.parse()?;
    }
    if let Some(path) = args.get(2) {
        config.dictionary_path = path.clone();
    }

    log::info!(
        "starting with port {}, dictionary {}, CORS {}",
        config.port,
        config.dictionary_path,
        config.enable_cors
    );

    start_server_with_config(config).await?;

    Ok(())
}
