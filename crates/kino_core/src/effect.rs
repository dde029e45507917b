/// Side effects requested by `update`, executed in order by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Write the player preference to durable storage.
    PersistPreference { use_custom_player: bool },
    /// Reconfigure one inline video element.
    ConfigureVideo {
        index: usize,
        native_controls: bool,
        preload: Preload,
    },
    /// Pause one inline video element.
    PauseVideo { index: usize },
    /// Append the shared playback element to the lightbox.
    CreatePlayer,
    PausePlayer,
    LoadPlayer { src: String },
    PlayPlayer,
    /// Remove the shared playback element from the lightbox.
    RemovePlayer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preload {
    None,
    Metadata,
}

impl Preload {
    pub fn as_str(self) -> &'static str {
        match self {
            Preload::None => "none",
            Preload::Metadata => "metadata",
        }
    }
}
