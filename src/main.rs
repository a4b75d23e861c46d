mod config;
mod handlers;
mod logger;
mod models;
mod routes;

use config::ServerConfig;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() {

    let config = ServerConfig::from_env();

    let app = routes::build_router();

    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr).await
        .unwrap_or_else(|e| panic!("Failed to bind to {}: {}", addr, e));
    println!("listening on {}", listener.local_addr()
        .expect("Failed to get local address"));
    axum::serve(listener, app).await
        .expect("Server failed");

}
