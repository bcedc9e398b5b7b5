// Allow panic/unwrap/expect in tests (denied globally via Cargo.toml lints)
#![cfg_attr(
    test,
    allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic_in_result_fn,
        clippy::unwrap_in_result,
        clippy::arithmetic_side_effects,
        clippy::indexing_slicing
    )
)]

pub mod catalog;
pub mod config;
pub mod cors;
pub mod http_logging;
pub mod logging;
pub mod metrics;
pub mod query;
pub mod server;
pub mod service;
pub mod state;

// Re-export commonly used types
pub use catalog::{Catalog, Item, ItemId, DEFAULT_ITEM_COUNT};
pub use config::{load_config, ConfigError, FileConfig, Overrides, Settings};
pub use query::{ListParams, ListQuery};
pub use server::{build_router, shutdown_signal, ApiError, RouterConfig};
pub use service::{ItemPage, ItemService, ListedItem};
pub use state::ViewState;
