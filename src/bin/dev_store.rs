//! A stand-in for the expense store that keeps expenses in memory.
//!
//! Everything is lost when the process exits.

use std::net::SocketAddr;

use axum_server::Handle;
use clap::Parser;
use time::{Duration, OffsetDateTime};
use tracing_subscriber::{filter, layer::SubscriberExt, util::SubscriberInitExt, Layer};

use expense_manager::{
    Category, MemoryStore, NewExpense, PaymentMode, add_tracing_layer, graceful_shutdown,
    remote_store_router,
};

/// Serve the expense store API from memory for local development.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The port to serve the expense store API from.
    #[arg(short, long, env = "PORT", default_value_t = 5000)]
    port: u16,

    /// Start with a few months of sample expenses.
    #[arg(long)]
    seed: bool,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_filter(filter::LevelFilter::DEBUG))
        .init();

    let args = Args::parse();

    let store = if args.seed {
        MemoryStore::with_expenses(sample_expenses())
    } else {
        MemoryStore::default()
    };

    let addr = SocketAddr::from(([127, 0, 0, 1], args.port));

    let handle = Handle::new();
    tokio::spawn(graceful_shutdown(handle.clone()));

    let router = add_tracing_layer(remote_store_router(store));

    tracing::info!("Expense store listening on {addr}");
    axum_server::bind(addr)
        .handle(handle)
        .serve(router.into_make_service())
        .await
        .expect("Server stopped unexpectedly");
}

fn sample_expenses() -> Vec<NewExpense> {
    let today = OffsetDateTime::now_utc().date();

    let samples = [
        (12000.0, Category::Rental, 0, PaymentMode::NetBanking, "Rent"),
        (2350.5, Category::Groceries, 3, PaymentMode::Upi, "Weekly shop"),
        (799.0, Category::Entertainment, 9, PaymentMode::CreditCard, "Concert tickets"),
        (12000.0, Category::Rental, 31, PaymentMode::NetBanking, "Rent"),
        (4800.0, Category::Travel, 40, PaymentMode::CreditCard, "Train to Jaipur"),
        (180.0, Category::Others, 45, PaymentMode::Cash, ""),
        (1875.25, Category::Groceries, 52, PaymentMode::Upi, "Monthly stock up"),
        (12000.0, Category::Rental, 62, PaymentMode::NetBanking, "Rent"),
        (350.0, Category::Entertainment, 75, PaymentMode::Upi, "Movie night"),
        (15600.0, Category::Travel, 95, PaymentMode::CreditCard, "Flights to Goa"),
    ];

    samples
        .into_iter()
        .map(|(amount, category, days_ago, payment_mode, notes)| NewExpense {
            amount,
            category,
            date: today - Duration::days(days_ago),
            payment_mode,
            notes: notes.to_owned(),
        })
        .collect()
}
