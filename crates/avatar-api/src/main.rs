use avatar_core::Config;

// Use mimalloc as the global allocator for lower fragmentation when large
// upload bodies are buffered and released.
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize the application (telemetry, storage, routes)
    let (_state, router) = avatar_api::setup::initialize_app(config.clone()).await?;

    // Start the server
    avatar_api::setup::server::start_server(&config, router).await?;

    Ok(())
}
