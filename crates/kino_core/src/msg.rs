#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Page markup scanned: filterable rows and inline videos, in document order.
    PageLoaded {
        rows: Vec<crate::ThreadRow>,
        videos: Vec<crate::VideoItem>,
    },
    /// Player preference read from storage at load.
    PreferenceLoaded(bool),
    /// User activated the settings trigger.
    SettingsOpened,
    /// User clicked the dimming overlay itself (not a child of it).
    SettingsBackdropClicked,
    /// User clicked one of the settings close controls.
    SettingsCloseClicked,
    /// User toggled the "use custom player" checkbox.
    CustomPlayerToggled(bool),
    /// User clicked save in the settings dialog.
    SettingsSaved,
    /// Filter input changed (current field value).
    FilterInputChanged(String),
    /// User clicked the filter reset control.
    FilterReset,
    /// User clicked an inline video.
    VideoClicked(usize),
    /// An inline video started playing; `unpaused` is every inline video
    /// not paused at that moment, as read from the page.
    VideoPlayed { index: usize, unpaused: Vec<usize> },
    /// Open the lightbox at an index.
    LightboxOpen(usize),
    LightboxPrev,
    LightboxNext,
    /// Close control or backdrop of the lightbox clicked.
    LightboxClosed,
}
