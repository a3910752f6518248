//! View model types representing renderable UI state.
//!
//! View models are computed from `AppState` by `AppState::compute_viewmodel()`
//! and consumed by the renderer. They hold display-ready data only: labels,
//! focus flags, highlight ranges. All decisions about what to show are made
//! while computing them, which keeps the renderer free of logic and lets the
//! tests assert on plain values.

/// Complete UI view model for one frame.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// Title bar with the menu hint.
    pub top_bar: TopBarInfo,

    /// Content of the current destination.
    pub screen: ScreenView,

    /// Bottom navigation bar entries.
    pub bottom_bar: BottomBarInfo,

    /// The side drawer, present only while it is open.
    pub drawer: Option<DrawerInfo>,

    /// Keybinding hints for the current mode.
    pub footer: FooterInfo,
}

/// Content area, one variant per destination.
#[derive(Debug, Clone)]
pub enum ScreenView {
    /// Draft and search fields above the filtered items.
    List(ListScreenView),
    /// Static facts about the session.
    Profile(ProfileView),
    /// The dark mode switch.
    Settings(SettingsView),
}

/// Title line at the top of every screen.
#[derive(Debug, Clone)]
pub struct TopBarInfo {
    pub title: String,
    /// Key that opens the drawer, shown at the left edge.
    pub menu_hint: String,
}

/// The shopping list screen.
#[derive(Debug, Clone)]
pub struct ListScreenView {
    /// Heading with item counts.
    pub title: String,

    /// Field for composing a new item.
    pub draft: InputBoxInfo,

    /// Field for the search query.
    pub search: InputBoxInfo,

    /// Visible window of the filtered items.
    pub display_items: Vec<DisplayItem>,

    /// Selected row within `display_items`.
    pub selected_index: usize,

    /// Shown instead of rows when nothing passes the filter.
    pub empty_state: Option<EmptyState>,
}

/// A labelled single-line text field.
#[derive(Debug, Clone)]
pub struct InputBoxInfo {
    /// Shown before the text, e.g. `Search`.
    pub label: String,
    /// Current value of the field.
    pub text: String,
    /// Whether keys are currently typed into this field.
    pub is_focused: bool,
}

/// One row of the item list.
#[derive(Debug, Clone)]
pub struct DisplayItem {
    /// Label, truncated with `...` when too wide.
    pub text: String,

    pub is_selected: bool,

    /// Search matches as `(start, end)` character indices, end exclusive.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Message shown when the list has nothing to display.
#[derive(Debug, Clone)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

/// The profile screen: a heading and one line per fact.
#[derive(Debug, Clone)]
pub struct ProfileView {
    pub heading: String,
    pub lines: Vec<String>,
}

/// The settings screen.
#[derive(Debug, Clone)]
pub struct SettingsView {
    pub heading: String,
    pub dark_mode_label: String,
    /// Position of the dark mode switch.
    pub dark_mode: bool,
}

/// Tabs of the bottom navigation bar, in display order.
#[derive(Debug, Clone)]
pub struct BottomBarInfo {
    pub entries: Vec<NavEntry>,
}

/// A bottom bar entry and the digit key that selects it.
#[derive(Debug, Clone)]
pub struct NavEntry {
    pub key: char,
    pub label: String,
    /// Whether this entry is the destination on screen.
    pub is_active: bool,
}

/// The open side drawer.
#[derive(Debug, Clone)]
pub struct DrawerInfo {
    pub entries: Vec<DrawerEntry>,
}

/// A drawer row and the key that selects it.
#[derive(Debug, Clone)]
pub struct DrawerEntry {
    pub key: char,
    pub label: String,
}

/// Keybinding hints for the bottom line.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    pub keybindings: String,
}
