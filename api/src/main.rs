use std::sync::Arc;

use clap::Parser;
use storefront_api::{
    application::{
        http::server::http_server::{router, state},
        logging::init_logger,
    },
    args::Args,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv::dotenv().ok();

    let args = Arc::new(Args::parse());
    init_logger(&args.log);

    let state = state(args.clone()).await?;
    let app = router(state)?;

    let addr = format!("{}:{}", args.server.host, args.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Storefront API listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
