//! Command line and environment configuration for the server.

use std::path::PathBuf;

use clap::Parser;

/// A web app for recording and reviewing personal expenses.
///
/// Expenses are stored by a separate expense store that is reached over HTTP.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// The base URL of the expense store, e.g. "http://localhost:5000".
    #[arg(long, env = "EXPENSE_STORE_URL", default_value = "http://localhost:5000")]
    pub store_url: String,

    /// The port to serve the app from.
    #[arg(short, long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// The canonical timezone used to decide what "today" is, e.g. "Asia/Kolkata".
    #[arg(long, env = "TIMEZONE", default_value = "Etc/UTC")]
    pub timezone: String,

    /// The file to write debug logs to.
    #[arg(long, env = "LOG_PATH", default_value = "debug.log")]
    pub log_path: PathBuf,
}
