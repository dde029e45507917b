use std::fmt;

use kino_core::{Preload, VideoItem};

/// CSS selector naming one element, or a class of equivalent elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ControlId(&'static str);

impl ControlId {
    pub const fn new(selector: &'static str) -> Self {
        Self(selector)
    }

    pub const fn selector(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for ControlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// CSS `display` value for a visibility flag.
pub fn display_value(visible: bool) -> &'static str {
    if visible {
        "block"
    } else {
        "none"
    }
}

/// DOM events the host forwards to the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    /// A click handled by `control`; `on_self` is true when the event target is
    /// the control itself rather than a descendant.
    Clicked { control: ControlId, on_self: bool },
    /// A click on the inline video at `index`.
    VideoClicked { index: usize },
    InputChanged { control: ControlId, value: String },
    MediaPlay { index: usize },
}

/// DOM mutations the controller asks the host to perform, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomCommand {
    SetDisplay { control: ControlId, visible: bool },
    SetRowDisplay { index: usize, visible: bool },
    SetChecked { control: ControlId, checked: bool },
    SetInputValue { control: ControlId, value: String },
    SetText { control: ControlId, text: String },
    ConfigureVideo {
        index: usize,
        controls: bool,
        preload: Preload,
    },
    PauseVideo { index: usize },
    /// Append a `<video id="video-item" controls>` to the lightbox.
    CreatePlayer,
    LoadPlayer { src: String },
    PlayPlayer,
    PausePlayer,
    RemovePlayer,
}

/// The page the controller drives: executes commands and answers DOM queries.
pub trait PageHost {
    fn execute(&mut self, command: DomCommand);

    fn is_checked(&self, control: ControlId) -> bool;

    /// Current `paused` flag of the inline video at `index`.
    fn is_paused(&self, index: usize) -> bool;

    /// Search attribute of every filterable row, in document order.
    fn row_search_keys(&self) -> Vec<String>;

    /// Every inline video source, in document order.
    fn video_sources(&self) -> Vec<VideoItem>;
}
