#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageViewModel {
    pub settings_open: bool,
    pub custom_player_checked: bool,
    pub filter_input: String,
    /// Visibility of each filterable row, in page order.
    pub row_visibility: Vec<bool>,
    /// Present only while the lightbox is open.
    pub lightbox: Option<LightboxView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightboxView {
    pub index: usize,
    /// `"{index+1}/{count}"`.
    pub counter: String,
    pub name: String,
    pub prev_visible: bool,
    pub next_visible: bool,
}
