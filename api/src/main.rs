use std::{net::SocketAddr, sync::Arc};

use clap::Parser;
use tracing::info;

use crate::{
    application::{
        http::server::http_server::{router, state},
        logging::init_logger,
    },
    args::Args,
};

mod application;
mod args;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv::dotenv().ok();

    let args = Arc::new(Args::parse());
    init_logger(&args.log)?;

    let addr: SocketAddr = format!("{}:{}", args.server.host, args.server.port).parse()?;

    let app_state = state(args.clone()).await?;
    let router = router(app_state)?;

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Leafdoc API listening on {}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
