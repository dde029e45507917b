//! Kino page: host glue between page events, the core state machine and the DOM.
mod platform;

pub use platform::app::{EventOutcome, PageController};
pub use platform::config::{
    load_config, open_store, parse_config, read_config, ConfigError, PageConfig,
};
pub use platform::logging::{initialize as init_logging, LogDestination};
pub use platform::memory::{MemoryPage, MemoryPlayer, MemoryRow, MemoryVideo};
pub use platform::ui::constants;
pub use platform::ui::dom::{display_value, ControlId, DomCommand, PageEvent, PageHost};
