use std::collections::BTreeMap;

use kino_core::{Preload, VideoItem};
use kino_logging::kino_trace;

use super::ui::constants::LIGHTBOX_PLAYER;
use super::ui::dom::{display_value, ControlId, DomCommand, PageHost};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryRow {
    pub search: String,
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryVideo {
    pub item: VideoItem,
    pub controls: bool,
    pub preload: Option<Preload>,
    pub paused: bool,
}

/// The dynamically created lightbox `<video>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryPlayer {
    pub id: ControlId,
    pub src: Option<String>,
    pub paused: bool,
}

/// In-memory page: applies commands to a plain model of the markup.
///
/// Elements carry no display value until a command writes one; rows start shown
/// and inline videos start paused.
#[derive(Debug, Clone, Default)]
pub struct MemoryPage {
    displays: BTreeMap<ControlId, bool>,
    checked: BTreeMap<ControlId, bool>,
    input_values: BTreeMap<ControlId, String>,
    texts: BTreeMap<ControlId, String>,
    rows: Vec<MemoryRow>,
    videos: Vec<MemoryVideo>,
    players: Vec<MemoryPlayer>,
    history: Vec<DomCommand>,
}

impl MemoryPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_row(mut self, search: &str) -> Self {
        self.rows.push(MemoryRow {
            search: search.to_string(),
            visible: true,
        });
        self
    }

    pub fn with_video(mut self, src: &str, name: &str) -> Self {
        self.videos.push(MemoryVideo {
            item: VideoItem::new(src, name),
            controls: true,
            preload: None,
            paused: true,
        });
        self
    }

    /// Simulates the user ticking or clearing a checkbox.
    pub fn set_checked(&mut self, control: ControlId, checked: bool) {
        self.checked.insert(control, checked);
    }

    /// Simulates the user typing into an input.
    pub fn set_input_value(&mut self, control: ControlId, value: &str) {
        self.input_values.insert(control, value.to_string());
    }

    /// Simulates the user starting an inline video with its native controls.
    pub fn start_video(&mut self, index: usize) {
        if let Some(video) = self.videos.get_mut(index) {
            video.paused = false;
        }
    }

    pub fn is_visible(&self, control: ControlId) -> Option<bool> {
        self.displays.get(&control).copied()
    }

    /// The CSS `display` value last written for `control`, if any.
    pub fn display(&self, control: ControlId) -> Option<&'static str> {
        self.is_visible(control).map(display_value)
    }

    pub fn input_value(&self, control: ControlId) -> &str {
        self.input_values.get(&control).map_or("", String::as_str)
    }

    pub fn text(&self, control: ControlId) -> Option<&str> {
        self.texts.get(&control).map(String::as_str)
    }

    pub fn rows(&self) -> &[MemoryRow] {
        &self.rows
    }

    pub fn visible_rows(&self) -> Vec<&str> {
        self.rows
            .iter()
            .filter(|row| row.visible)
            .map(|row| row.search.as_str())
            .collect()
    }

    pub fn videos(&self) -> &[MemoryVideo] {
        &self.videos
    }

    pub fn players(&self) -> &[MemoryPlayer] {
        &self.players
    }

    pub fn player(&self) -> Option<&MemoryPlayer> {
        self.players.first()
    }

    /// Every command executed so far, oldest first.
    pub fn history(&self) -> &[DomCommand] {
        &self.history
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    fn player_mut(&mut self) -> Option<&mut MemoryPlayer> {
        self.players.first_mut()
    }
}

impl PageHost for MemoryPage {
    fn execute(&mut self, command: DomCommand) {
        kino_trace!("execute {:?}", command);
        match &command {
            DomCommand::SetDisplay { control, visible } => {
                self.displays.insert(*control, *visible);
            }
            DomCommand::SetRowDisplay { index, visible } => {
                if let Some(row) = self.rows.get_mut(*index) {
                    row.visible = *visible;
                }
            }
            DomCommand::SetChecked { control, checked } => {
                self.checked.insert(*control, *checked);
            }
            DomCommand::SetInputValue { control, value } => {
                self.input_values.insert(*control, value.clone());
            }
            DomCommand::SetText { control, text } => {
                self.texts.insert(*control, text.clone());
            }
            DomCommand::ConfigureVideo {
                index,
                controls,
                preload,
            } => {
                if let Some(video) = self.videos.get_mut(*index) {
                    video.controls = *controls;
                    video.preload = Some(*preload);
                }
            }
            DomCommand::PauseVideo { index } => {
                if let Some(video) = self.videos.get_mut(*index) {
                    video.paused = true;
                }
            }
            DomCommand::CreatePlayer => self.players.push(MemoryPlayer {
                id: LIGHTBOX_PLAYER,
                src: None,
                paused: true,
            }),
            DomCommand::LoadPlayer { src } => {
                if let Some(player) = self.player_mut() {
                    player.src = Some(src.clone());
                    player.paused = true;
                }
            }
            DomCommand::PlayPlayer => {
                if let Some(player) = self.player_mut() {
                    player.paused = false;
                }
            }
            DomCommand::PausePlayer => {
                if let Some(player) = self.player_mut() {
                    player.paused = true;
                }
            }
            DomCommand::RemovePlayer => {
                if !self.players.is_empty() {
                    self.players.remove(0);
                }
            }
        }
        self.history.push(command);
    }

    fn is_checked(&self, control: ControlId) -> bool {
        self.checked.get(&control).copied().unwrap_or(false)
    }

    fn is_paused(&self, index: usize) -> bool {
        self.videos.get(index).map_or(true, |video| video.paused)
    }

    fn row_search_keys(&self) -> Vec<String> {
        self.rows.iter().map(|row| row.search.clone()).collect()
    }

    fn video_sources(&self) -> Vec<VideoItem> {
        self.videos.iter().map(|video| video.item.clone()).collect()
    }
}
