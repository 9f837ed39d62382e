//! Oraculum API server
//!
//! HTTP API for the Oraculum content fabric.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use std::net::SocketAddr;

use anyhow::Result;
use clap::Parser;

use oraculum_content::Catalog;

/// Oraculum API - content fabric HTTP server
#[derive(Parser, Debug)]
#[command(name = "oraculum-api")]
#[command(about = "HTTP API server for the Oraculum content fabric", long_about = None)]
struct Args {
    /// Address to bind
    #[arg(short, long, env = "ORACULUM_ADDR", default_value = "127.0.0.1:8080")]
    addr: SocketAddr,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let args = Args::parse();
    oraculum_api::server::serve(args.addr, Catalog::builtin()).await?;
    Ok(())
}
