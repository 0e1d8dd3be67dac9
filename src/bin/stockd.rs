//! stockd — inventory counter server over an in-memory store.
//!
//! Listens on `STOCKCOUNT_ADDR` (default `0.0.0.0:3000`).

use std::sync::Arc;

use stockcount::service;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    tracing_subscriber::fmt::init();

    let addr =
        std::env::var("STOCKCOUNT_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let svc = Arc::new(service::in_memory());
    service::serve(svc, &addr).await
}
