//! Selectors of the page elements the controllers read and write.
use super::dom::ControlId;

pub const SETTINGS_BUTTON: ControlId = ControlId::new("#settings-btn");
pub const SETTINGS_DIALOG: ControlId = ControlId::new("#settings-dialog");
pub const SETTINGS_OVERLAY: ControlId = ControlId::new("#settings-overlay");
pub const SETTINGS_CLOSE: ControlId = ControlId::new(".settings-close");
pub const CHECKBOX_CUSTOM_PLAYER: ControlId = ControlId::new("#use-js-player");
pub const BUTTON_SAVE_SETTINGS: ControlId = ControlId::new("#save-settings");

pub const INPUT_FILTER: ControlId = ControlId::new("#thread-input");
pub const BUTTON_RESET_FILTER: ControlId = ControlId::new("#reset-thread");
pub const FILTER_ROWS: ControlId = ControlId::new("#thread-filter div.form-check");

pub const VIDEOS: ControlId = ControlId::new(".video");
pub const LIGHTBOX: ControlId = ControlId::new("#lightbox");
pub const LIGHTBOX_CLOSE: ControlId = ControlId::new("#lightbox .close");
pub const LIGHTBOX_PLAYER: ControlId = ControlId::new("#video-item");
pub const LABEL_COUNTER: ControlId = ControlId::new("#video-counter");
pub const LABEL_NAME: ControlId = ControlId::new("#video-name");
pub const BUTTON_PREV: ControlId = ControlId::new("#prev");
pub const BUTTON_NEXT: ControlId = ControlId::new("#next");
