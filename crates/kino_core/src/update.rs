use kino_logging::{kino_info, kino_trace};

use crate::{Effect, Msg, PageState};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: PageState, msg: Msg) -> (PageState, Vec<Effect>) {
    kino_trace!("update {:?}", msg);
    let effects = match msg {
        Msg::PageLoaded { rows, videos } => state.load_page(rows, videos),
        Msg::PreferenceLoaded(use_custom_player) => state.apply_preference(use_custom_player),
        Msg::SettingsOpened => {
            state.open_settings();
            Vec::new()
        }
        Msg::SettingsBackdropClicked | Msg::SettingsCloseClicked => {
            state.close_settings();
            Vec::new()
        }
        Msg::CustomPlayerToggled(checked) => {
            state.set_custom_player_checked(checked);
            Vec::new()
        }
        Msg::SettingsSaved => {
            let effects = state.save_settings();
            kino_info!(
                "Settings saved: use_custom_player={}",
                state.use_custom_player()
            );
            effects
        }
        Msg::FilterInputChanged(value) => {
            state.set_filter_input(value);
            Vec::new()
        }
        Msg::FilterReset => {
            state.set_filter_input(String::new());
            Vec::new()
        }
        Msg::VideoClicked(index) => {
            if state.use_custom_player() {
                state.open_lightbox(index)
            } else {
                Vec::new()
            }
        }
        Msg::VideoPlayed { index, unpaused } => state.video_played(index, &unpaused),
        Msg::LightboxOpen(index) => state.open_lightbox(index),
        Msg::LightboxPrev => state.step_lightbox(false),
        Msg::LightboxNext => state.step_lightbox(true),
        Msg::LightboxClosed => state.close_lightbox(),
    };

    (state, effects)
}
