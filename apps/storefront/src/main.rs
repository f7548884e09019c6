//! # Storefront Entry Point
//!
//! ```text
//! storefront [CONFIG_PATH]
//! ```
//!
//! Loads the configuration (from `CONFIG_PATH` or the platform config
//! directory), composes the home page and writes its plan to stdout.
//! The setup lives in lib.rs for testability.

use std::path::PathBuf;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let config_path = std::env::args().nth(1).map(PathBuf::from);

    match storefront_app::run(config_path).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("storefront: {}", e);
            ExitCode::FAILURE
        }
    }
}
