/// Storage key of the player preference.
pub const PREFERENCE_KEY: &str = "js-player";

/// Native controls unless the user opted into the custom player.
pub const DEFAULT_USE_CUSTOM_PLAYER: bool = false;

/// Only the exact string `"true"` enables the custom player.
pub fn parse_preference(raw: &str) -> bool {
    raw == "true"
}

pub fn format_preference(use_custom_player: bool) -> String {
    use_custom_player.to_string()
}
