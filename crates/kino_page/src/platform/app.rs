use kino_core::{
    format_preference, parse_preference, update, Msg, PageState, PageViewModel, ThreadRow,
};
use kino_logging::{kino_debug, kino_info};
use kino_prefs::{KeyValueStore, PreferenceStore};

use super::config::PageConfig;
use super::effects::EffectRunner;
use super::ui;
use super::ui::constants::*;
use super::ui::dom::{PageEvent, PageHost};

/// What the host should do with the DOM event after the controller handled it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EventOutcome {
    pub prevent_default: bool,
    pub stop_propagation: bool,
}

impl EventOutcome {
    const PASS: Self = Self {
        prevent_default: false,
        stop_propagation: false,
    };
    const PREVENT: Self = Self {
        prevent_default: true,
        stop_propagation: false,
    };
    const CAPTURE: Self = Self {
        prevent_default: true,
        stop_propagation: true,
    };
}

/// One controller per page: owns the state machine and drives the injected host.
pub struct PageController<H, S> {
    host: H,
    state: PageState,
    effects: EffectRunner<S>,
    config: PageConfig,
    rendered: Option<PageViewModel>,
}

impl<H: PageHost, S: KeyValueStore> PageController<H, S> {
    pub fn new(host: H, store: S, config: PageConfig) -> Self {
        let effects = EffectRunner::new(PreferenceStore::new(store), config.preference_key.clone());
        Self {
            host,
            state: PageState::new(),
            effects,
            config,
            rendered: None,
        }
    }

    /// Scans the page, applies the stored preference and renders everything.
    pub fn load(&mut self) {
        let rows: Vec<ThreadRow> = self
            .host
            .row_search_keys()
            .iter()
            .map(|key| ThreadRow::new(key))
            .collect();
        let videos = self.host.video_sources();
        kino_info!(
            "Page loaded: {} rows ({}), {} videos ({})",
            rows.len(),
            FILTER_ROWS,
            videos.len(),
            VIDEOS
        );

        let default = format_preference(self.config.default_use_custom_player);
        let raw = self
            .effects
            .store()
            .get(self.effects.preference_key(), &default);
        let use_custom_player = parse_preference(&raw);

        self.rendered = None;
        self.dispatch_msg(Msg::PageLoaded { rows, videos });
        self.dispatch_msg(Msg::PreferenceLoaded(use_custom_player));
    }

    pub fn handle_event(&mut self, event: PageEvent) -> EventOutcome {
        let (msgs, outcome) = self.map_event(event);
        for msg in msgs {
            self.dispatch_msg(msg);
        }
        outcome
    }

    fn map_event(&self, event: PageEvent) -> (Vec<Msg>, EventOutcome) {
        match event {
            PageEvent::Clicked { control, .. } if control == SETTINGS_BUTTON => {
                (vec![Msg::SettingsOpened], EventOutcome::PREVENT)
            }
            PageEvent::Clicked {
                control,
                on_self: true,
            } if control == SETTINGS_OVERLAY => {
                (vec![Msg::SettingsBackdropClicked], EventOutcome::PASS)
            }
            PageEvent::Clicked { control, .. } if control == SETTINGS_CLOSE => {
                (vec![Msg::SettingsCloseClicked], EventOutcome::PASS)
            }
            PageEvent::Clicked { control, .. } if control == BUTTON_SAVE_SETTINGS => {
                let checked = self.host.is_checked(CHECKBOX_CUSTOM_PLAYER);
                (
                    vec![Msg::CustomPlayerToggled(checked), Msg::SettingsSaved],
                    EventOutcome::PASS,
                )
            }
            PageEvent::Clicked { control, .. } if control == BUTTON_RESET_FILTER => {
                (vec![Msg::FilterReset], EventOutcome::PREVENT)
            }
            PageEvent::Clicked { control, .. } if control == BUTTON_PREV => {
                (vec![Msg::LightboxPrev], EventOutcome::CAPTURE)
            }
            PageEvent::Clicked { control, .. } if control == BUTTON_NEXT => {
                (vec![Msg::LightboxNext], EventOutcome::CAPTURE)
            }
            PageEvent::Clicked {
                control,
                on_self: true,
            } if control == LIGHTBOX => (vec![Msg::LightboxClosed], EventOutcome::PASS),
            PageEvent::Clicked { control, .. } if control == LIGHTBOX_CLOSE => {
                (vec![Msg::LightboxClosed], EventOutcome::PASS)
            }
            PageEvent::InputChanged { control, value } if control == INPUT_FILTER => {
                (vec![Msg::FilterInputChanged(value)], EventOutcome::PASS)
            }
            PageEvent::VideoClicked { index } => {
                let outcome = if self.state.use_custom_player() {
                    EventOutcome::PREVENT
                } else {
                    EventOutcome::PASS
                };
                (vec![Msg::VideoClicked(index)], outcome)
            }
            PageEvent::MediaPlay { index } => {
                let unpaused = (0..self.state.video_count())
                    .filter(|&other| !self.host.is_paused(other))
                    .collect();
                (vec![Msg::VideoPlayed { index, unpaused }], EventOutcome::PASS)
            }
            other => {
                kino_debug!("Unhandled page event {:?}", other);
                (Vec::new(), EventOutcome::PASS)
            }
        }
    }

    fn dispatch_msg(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;

        for command in self.effects.run(effects) {
            self.host.execute(command);
        }

        if self.state.consume_dirty() {
            let view = self.state.view();
            for command in ui::render::render(self.rendered.as_ref(), &view) {
                self.host.execute(command);
            }
            self.rendered = Some(view);
        }
    }

    pub fn state(&self) -> &PageState {
        &self.state
    }

    pub fn store(&self) -> &PreferenceStore<S> {
        self.effects.store()
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }
}
