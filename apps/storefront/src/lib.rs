//! # Storefront Application Library
//!
//! Wires configuration, logging, content and the cart store together.
//!
//! ## Module Organization
//! ```text
//! storefront_app/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── cart.rs     ◄─── CartStore (snapshot publishing)
//! │   ├── content.rs  ◄─── ContentState (content store + base URL)
//! │   └── config.rs   ◄─── StorefrontConfig (toml + env)
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── cart.rs     ◄─── Cart and drawer commands
//! │   └── page.rs     ◄─── Layout and home page plans
//! └── error.rs        ◄─── API error type for commands
//! ```

use std::path::PathBuf;

use serde::Serialize;
use storefront_content::{HomePagePlan, LayoutPlan};
use tracing::info;
use tracing_subscriber::EnvFilter;

pub mod commands;
pub mod error;
pub mod state;

pub use error::{ApiError, ErrorCode};
pub use state::{CartStore, ConfigError, ContentState, StorefrontConfig};

use commands::CartResponse;

/// What a render of the home page receives.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomePageRender {
    pub layout: LayoutPlan,
    pub page: HomePagePlan,
    pub cart: CartResponse,
}

/// Runs the storefront.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Load Configuration ───────────────────────────────────────────────► │
/// │     • defaults → storefront.toml → STOREFRONT_* env → validate          │
/// │                                                                         │
/// │  2. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter                                │
/// │     • Default from [logging] filter, RUST_LOG overrides                 │
/// │                                                                         │
/// │  3. Initialize State ─────────────────────────────────────────────────► │
/// │     • ContentState: content store rooted at the public root             │
/// │     • CartStore: empty cart, new session id                             │
/// │                                                                         │
/// │  4. Compose Pages ────────────────────────────────────────────────────► │
/// │     • layout and home page plans, loaded concurrently                   │
/// │     • written to stdout as JSON for the renderer                        │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run(config_path: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let config = StorefrontConfig::load(config_path)?;

    init_tracing(&config.logging.filter);

    info!(
        public_root = %config.content.public_root.display(),
        base_url = %config.site.base_url,
        "Starting storefront"
    );

    let content = ContentState::from_config(&config);
    let cart = CartStore::new();
    info!(session_id = %cart.session_id(), "State initialized");

    let render = render_home_page(&content, &cart).await?;
    info!(
        sections = render.page.sections.len(),
        products = render.page.products.len(),
        "Home page composed"
    );

    serde_json::to_writer_pretty(std::io::stdout().lock(), &render)?;
    println!();

    Ok(())
}

/// Composes everything a home page render needs.
pub async fn render_home_page(
    content: &ContentState,
    cart: &CartStore,
) -> Result<HomePageRender, ApiError> {
    let (layout, page) = tokio::join!(
        commands::page::get_layout(content),
        commands::page::get_home_page(content),
    );

    Ok(HomePageRender {
        layout,
        page: page?,
        cart: commands::cart::get_cart(cart),
    })
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=storefront_content=trace` - Trace content loading only
/// - Default: the configured filter
fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
