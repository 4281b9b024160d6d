use std::{net::SocketAddr, sync::Arc};

use axum_server::Handle;
use clap::Parser;

#[cfg(debug_assertions)]
use tower_livereload::LiveReloadLayer;

use expense_manager::{
    AppState, Args, HttpExpenseStore, add_tracing_layer, build_router, graceful_shutdown,
    setup_logging,
};

#[tokio::main]
async fn main() {
    let args = Args::parse();

    setup_logging(&args.log_path).expect("Could not create log file");

    let store = Arc::new(HttpExpenseStore::new(&args.store_url));
    let state = AppState::new(store, &args.timezone).unwrap_or_else(|error| {
        tracing::error!("{error}");
        std::process::exit(1);
    });

    let addr = SocketAddr::from(([127, 0, 0, 1], args.port));

    let handle = Handle::new();
    tokio::spawn(graceful_shutdown(handle.clone()));

    let router = add_tracing_layer(build_router(state));

    #[cfg(debug_assertions)]
    let router = router.layer(LiveReloadLayer::new());

    tracing::info!(
        "HTTP server listening on {addr}, using the expense store at {}",
        args.store_url
    );
    axum_server::bind(addr)
        .handle(handle)
        .serve(router.into_make_service())
        .await
        .expect("Server stopped unexpectedly");
}
