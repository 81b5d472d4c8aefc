pub mod routes;
pub mod shared;
pub mod system;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use std::net::SocketAddr;
    use tokio::net::TcpListener;

    system::tracing::initialize()?;

    let config = shared::config::load_config()?;
    let static_dir = shared::config::get_static_dir(&config);
    let port = config.server.port;

    tracing::info!("Console bundle directory: {}", static_dir.display());
    tracing::info!("Rule engine API: {}", config.console.api_base_path);
    if !static_dir.join("index.html").exists() {
        tracing::warn!(
            "index.html not found in {}; build the frontend with trunk first",
            static_dir.display()
        );
    }

    let app = routes::configure_routes(config.console, &static_dir);

    let addr: SocketAddr = ([0, 0, 0, 0], port).into();

    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Error: Port {} is already in use. Please ensure no other process is using this port.",
                    port
                );
            } else {
                tracing::error!("Failed to bind to port {}. Error: {}", port, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
