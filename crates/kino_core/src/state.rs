use kino_logging::kino_debug;

use crate::filter::{matches_query, normalize_search_key};
use crate::view_model::{LightboxView, PageViewModel};
use crate::{Effect, Preload, DEFAULT_USE_CUSTOM_PLAYER};

/// One filterable checkbox row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreadRow {
    search_key: String,
}

impl ThreadRow {
    pub fn new(search: &str) -> Self {
        Self {
            search_key: normalize_search_key(search),
        }
    }

    pub fn search_key(&self) -> &str {
        &self.search_key
    }
}

/// One inline video source. Its index is its position in the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoItem {
    pub src: String,
    pub name: String,
}

impl VideoItem {
    pub fn new(src: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SettingsPanel {
    #[default]
    Closed,
    Open,
}

/// Exists only while the lightbox overlay is visible; owns the shared player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LightboxSession {
    current: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
    rows: Vec<ThreadRow>,
    videos: Vec<VideoItem>,
    use_custom_player: bool,
    settings: SettingsPanel,
    custom_player_checked: bool,
    filter_input: String,
    lightbox: Option<LightboxSession>,
    dirty: bool,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            videos: Vec::new(),
            use_custom_player: DEFAULT_USE_CUSTOM_PLAYER,
            settings: SettingsPanel::Closed,
            custom_player_checked: DEFAULT_USE_CUSTOM_PLAYER,
            filter_input: String::new(),
            lightbox: None,
            dirty: false,
        }
    }
}

impl PageState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> PageViewModel {
        PageViewModel {
            settings_open: self.settings == SettingsPanel::Open,
            custom_player_checked: self.custom_player_checked,
            filter_input: self.filter_input.clone(),
            row_visibility: self
                .rows
                .iter()
                .map(|row| matches_query(row.search_key(), &self.filter_input))
                .collect(),
            lightbox: self.lightbox.and_then(|session| self.lightbox_view(session)),
        }
    }

    fn lightbox_view(&self, session: LightboxSession) -> Option<LightboxView> {
        let count = self.videos.len();
        let item = self.videos.get(session.current)?;
        Some(LightboxView {
            index: session.current,
            counter: format!("{}/{}", session.current + 1, count),
            name: item.name.clone(),
            prev_visible: session.current >= 1,
            next_visible: session.current + 1 < count,
        })
    }

    pub fn use_custom_player(&self) -> bool {
        self.use_custom_player
    }

    pub fn settings(&self) -> SettingsPanel {
        self.settings
    }

    pub fn video_count(&self) -> usize {
        self.videos.len()
    }

    /// Index shown in the lightbox, `None` while it is closed.
    pub fn current_index(&self) -> Option<usize> {
        self.lightbox.map(|session| session.current)
    }

    /// True while the shared playback element exists.
    pub fn player_mounted(&self) -> bool {
        self.lightbox.is_some()
    }

    /// Returns whether a render is pending and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// A reload drops any open lightbox session along with its player.
    pub(crate) fn load_page(
        &mut self,
        rows: Vec<ThreadRow>,
        videos: Vec<VideoItem>,
    ) -> Vec<Effect> {
        self.rows = rows;
        self.videos = videos;
        self.mark_dirty();
        match self.lightbox.take() {
            Some(_) => vec![Effect::RemovePlayer],
            None => Vec::new(),
        }
    }

    pub(crate) fn apply_preference(&mut self, use_custom_player: bool) -> Vec<Effect> {
        self.use_custom_player = use_custom_player;
        self.custom_player_checked = use_custom_player;
        self.mark_dirty();
        self.control_effects()
    }

    pub(crate) fn open_settings(&mut self) {
        if self.settings == SettingsPanel::Closed {
            self.settings = SettingsPanel::Open;
            self.mark_dirty();
        }
    }

    pub(crate) fn close_settings(&mut self) {
        if self.settings == SettingsPanel::Open {
            self.settings = SettingsPanel::Closed;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_custom_player_checked(&mut self, checked: bool) {
        if self.custom_player_checked != checked {
            self.custom_player_checked = checked;
            self.mark_dirty();
        }
    }

    pub(crate) fn save_settings(&mut self) -> Vec<Effect> {
        self.use_custom_player = self.custom_player_checked;
        self.settings = SettingsPanel::Closed;
        self.mark_dirty();

        let mut effects = Vec::with_capacity(1 + self.videos.len());
        effects.push(Effect::PersistPreference {
            use_custom_player: self.use_custom_player,
        });
        effects.extend(self.control_effects());
        effects
    }

    /// Inline controls follow the preference: custom player hides them and defers loading.
    fn control_effects(&self) -> Vec<Effect> {
        let (native_controls, preload) = if self.use_custom_player {
            (false, Preload::None)
        } else {
            (true, Preload::Metadata)
        };
        (0..self.videos.len())
            .map(|index| Effect::ConfigureVideo {
                index,
                native_controls,
                preload,
            })
            .collect()
    }

    pub(crate) fn set_filter_input(&mut self, value: String) {
        self.filter_input = value;
        self.mark_dirty();
    }

    /// `unpaused` lists the inline videos the page reports as playing right now.
    pub(crate) fn video_played(&self, index: usize, unpaused: &[usize]) -> Vec<Effect> {
        if index >= self.videos.len() {
            kino_debug!("Ignoring play event for unknown video {}", index);
            return Vec::new();
        }
        if self.use_custom_player {
            return Vec::new();
        }
        unpaused
            .iter()
            .copied()
            .filter(|&other| other != index && other < self.videos.len())
            .map(|other| Effect::PauseVideo { index: other })
            .collect()
    }

    pub(crate) fn open_lightbox(&mut self, index: usize) -> Vec<Effect> {
        let Some(item) = self.videos.get(index) else {
            kino_debug!(
                "Ignoring lightbox open at {} (have {} videos)",
                index,
                self.videos.len()
            );
            return Vec::new();
        };

        let mut effects = Vec::with_capacity(3);
        if self.lightbox.is_some() {
            effects.push(Effect::PausePlayer);
        } else {
            effects.push(Effect::CreatePlayer);
        }
        effects.push(Effect::LoadPlayer {
            src: item.src.clone(),
        });
        effects.push(Effect::PlayPlayer);

        self.lightbox = Some(LightboxSession { current: index });
        self.mark_dirty();
        effects
    }

    pub(crate) fn step_lightbox(&mut self, forward: bool) -> Vec<Effect> {
        let Some(current) = self.current_index() else {
            return Vec::new();
        };
        let target = if forward {
            current.checked_add(1).filter(|&next| next < self.videos.len())
        } else {
            current.checked_sub(1)
        };
        match target {
            Some(index) => self.open_lightbox(index),
            None => Vec::new(),
        }
    }

    pub(crate) fn close_lightbox(&mut self) -> Vec<Effect> {
        if self.lightbox.take().is_none() {
            return Vec::new();
        }
        self.mark_dirty();
        vec![Effect::RemovePlayer]
    }
}
