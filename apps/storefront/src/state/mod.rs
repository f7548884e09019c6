//! # Application State
//!
//! Each piece of state is a focused type; commands take only what they need.
//!
//! ```text
//! ┌──────────────────┐ ┌──────────────────┐ ┌──────────────────────┐
//! │    CartStore     │ │   ContentState   │ │   StorefrontConfig   │
//! │                  │ │                  │ │                      │
//! │  • Session id    │ │  • ContentStore  │ │  • Public root       │
//! │  • Cart snapshot │ │  • Base URL      │ │  • Base URL          │
//! │  • Subscribers   │ │                  │ │  • Log filter        │
//! └──────────────────┘ └──────────────────┘ └──────────────────────┘
//! ```

pub mod cart;
pub mod config;
pub mod content;

pub use cart::CartStore;
pub use config::{ConfigError, StorefrontConfig};
pub use content::ContentState;
