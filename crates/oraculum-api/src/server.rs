//! Server bootstrap.

use std::net::SocketAddr;

use oraculum_content::Catalog;

use crate::routes::router;

/// Bind and serve the API until the process is stopped.
pub async fn serve(addr: SocketAddr, catalog: &'static Catalog) -> std::io::Result<()> {
    let app = router(catalog);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("oraculum-api listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await
}
