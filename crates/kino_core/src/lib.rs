//! Kino core: pure state machine behind the board page controllers.
mod effect;
mod filter;
mod msg;
mod preference;
mod state;
mod update;
mod view_model;

pub use effect::{Effect, Preload};
pub use filter::{matches_query, normalize_search_key};
pub use msg::Msg;
pub use preference::{
    format_preference, parse_preference, DEFAULT_USE_CUSTOM_PLAYER, PREFERENCE_KEY,
};
pub use state::{PageState, SettingsPanel, ThreadRow, VideoItem};
pub use update::update;
pub use view_model::{LightboxView, PageViewModel};
