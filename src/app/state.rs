//! Application state management and view model computation.
//!
//! [`AppState`] is the single owner of everything the session remembers: the
//! item store, the filtered view, the draft and search text, navigation and the
//! dark mode flag. Only the event handler mutates it; screens get a shared
//! reference and ask for changes by emitting events.
//!
//! # Derived state
//!
//! `filtered_items` is derived from `items` and `search_query`. It is never
//! patched: every mutation of either input is followed by a full
//! [`AppState::apply_search_filter`] call, so the view can not go stale.
//!
//! # Example
//!
//! ```rust
//! use shopping_list::app::AppState;
//! use shopping_list::ui::theme::ThemeSet;
//!
//! let mut state = AppState::new(ThemeSet::default(), true);
//! state.set_field_text(shopping_list::TextField::Draft, "Milk");
//! assert!(state.add_draft_item());
//! assert_eq!(state.filtered_items().len(), 1);
//! let viewmodel = state.compute_viewmodel(24, 80);
//! # let _ = viewmodel;
//! ```

use super::modes::{InputMode, TextField};
use super::navigation::{Destination, Navigator, BOTTOM_BAR};
use crate::domain::filter::{filter_items, is_blank_query, match_ranges};
use crate::domain::{Item, ItemStore};
use crate::ui::theme::{Theme, ThemeSet};
use crate::ui::viewmodel::{
    BottomBarInfo, DisplayItem, DrawerEntry, DrawerInfo, EmptyState, FooterInfo, InputBoxInfo,
    ListScreenView, NavEntry, ProfileView, ScreenView, SettingsView, TopBarInfo, UIViewModel,
};

/// Rows used by everything on the list screen except the item rows: the
/// blank first line, top bar, border, screen title, two three-line input boxes
/// and the border, bottom bar and footer at the bottom.
const LIST_CHROME_ROWS: usize = 14;

/// Widest item label shown before truncation.
const MAX_ITEM_WIDTH: usize = 60;

/// Session dark mode flag.
///
/// The host's preference is sampled once when the session starts. After that
/// only explicit user choices change the flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Appearance {
    system_dark_mode: bool,
    dark_mode: bool,
}

impl Appearance {
    #[must_use]
    pub const fn new(system_dark_mode: bool) -> Self {
        Self {
            system_dark_mode,
            dark_mode: system_dark_mode,
        }
    }

    #[must_use]
    pub const fn is_dark_mode(self) -> bool {
        self.dark_mode
    }

    /// The host value captured at session start.
    #[must_use]
    pub const fn system_dark_mode(self) -> bool {
        self.system_dark_mode
    }

    pub fn set_dark_mode(&mut self, dark_mode: bool) {
        self.dark_mode = dark_mode;
    }

    pub fn toggle(&mut self) {
        self.dark_mode = !self.dark_mode;
    }
}

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Every item the user added, newest first.
    pub(crate) items: ItemStore,

    /// Items passing the current search query, in store order.
    pub(crate) filtered_items: Vec<Item>,

    /// Zero-based cursor into `filtered_items`, clamped by
    /// `apply_search_filter()` and wrapping on movement.
    pub selected_index: usize,

    /// Which text field receives typed characters, if any.
    pub input_mode: InputMode,

    pub(crate) search_query: String,

    /// The item being composed. Cleared only when it is added.
    pub(crate) draft_text: String,

    pub(crate) navigator: Navigator,

    pub(crate) appearance: Appearance,

    /// Dark and light palettes; the flag in `appearance` picks one.
    pub themes: ThemeSet,
}

impl AppState {
    /// Creates an empty session.
    ///
    /// # Parameters
    ///
    /// * `themes` - Palettes for dark and light mode
    /// * `system_dark_mode` - Host appearance, sampled once here
    #[must_use]
    pub fn new(themes: ThemeSet, system_dark_mode: bool) -> Self {
        Self {
            items: ItemStore::new(),
            filtered_items: Vec::new(),
            selected_index: 0,
            input_mode: InputMode::Normal,
            search_query: String::new(),
            draft_text: String::new(),
            navigator: Navigator::new(),
            appearance: Appearance::new(system_dark_mode),
            themes,
        }
    }

    #[must_use]
    pub fn items(&self) -> &[Item] {
        self.items.all()
    }

    #[must_use]
    pub fn filtered_items(&self) -> &[Item] {
        &self.filtered_items
    }

    #[must_use]
    pub fn draft_text(&self) -> &str {
        &self.draft_text
    }

    #[must_use]
    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    #[must_use]
    pub fn destination(&self) -> Destination {
        self.navigator.current()
    }

    #[must_use]
    pub const fn is_drawer_open(&self) -> bool {
        self.navigator.is_drawer_open()
    }

    #[must_use]
    pub const fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    #[must_use]
    pub const fn is_dark_mode(&self) -> bool {
        self.appearance.is_dark_mode()
    }

    #[must_use]
    pub const fn appearance(&self) -> Appearance {
        self.appearance
    }

    /// Palette matching the current dark mode flag.
    #[must_use]
    pub const fn active_theme(&self) -> &Theme {
        if self.appearance.is_dark_mode() {
            &self.themes.dark
        } else {
            &self.themes.light
        }
    }

    pub fn set_dark_mode(&mut self, dark_mode: bool) {
        self.appearance.set_dark_mode(dark_mode);
        tracing::debug!(dark_mode, "dark mode set");
    }

    pub fn toggle_dark_mode(&mut self) {
        self.appearance.toggle();
        tracing::debug!(dark_mode = self.appearance.is_dark_mode(), "dark mode toggled");
    }

    /// Moves the cursor down, wrapping to the top. No-op on an empty view.
    pub fn move_selection_down(&mut self) {
        if self.filtered_items.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + 1) % self.filtered_items.len();
    }

    /// Moves the cursor up, wrapping to the bottom. No-op on an empty view.
    pub fn move_selection_up(&mut self) {
        if self.filtered_items.is_empty() {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = self.filtered_items.len() - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    #[must_use]
    pub fn selected_item(&self) -> Option<&Item> {
        self.filtered_items.get(self.selected_index)
    }

    /// Recomputes `filtered_items` from the store and query and clamps the
    /// cursor. Must run after every change to either input.
    pub fn apply_search_filter(&mut self) {
        let _span = tracing::debug_span!(
            "apply_search_filter",
            total_items = self.items.len(),
            query_len = self.search_query.len()
        )
        .entered();

        self.filtered_items = filter_items(self.items.all(), &self.search_query);

        if self.filtered_items.is_empty() {
            self.selected_index = 0;
        } else {
            self.selected_index = self.selected_index.min(self.filtered_items.len() - 1);
        }

        tracing::debug!(
            filtered_count = self.filtered_items.len(),
            "search filter applied"
        );
    }

    /// Adds the draft to the store.
    ///
    /// On success the draft is cleared and the filter re-run. A blank draft is
    /// left as it is and nothing else changes.
    pub fn add_draft_item(&mut self) -> bool {
        if !self.items.add(&self.draft_text) {
            return false;
        }
        self.draft_text.clear();
        self.apply_search_filter();
        true
    }

    #[must_use]
    pub fn field_text(&self, field: TextField) -> &str {
        match field {
            TextField::Draft => &self.draft_text,
            TextField::Search => &self.search_query,
        }
    }

    /// Replaces a field's whole value.
    pub fn set_field_text(&mut self, field: TextField, value: &str) {
        self.edit_field(field, |text| {
            text.clear();
            text.push_str(value);
        });
    }

    pub fn push_char(&mut self, field: TextField, c: char) {
        self.edit_field(field, |text| text.push(c));
    }

    pub fn pop_char(&mut self, field: TextField) {
        self.edit_field(field, |text| {
            text.pop();
        });
    }

    pub fn clear_field(&mut self, field: TextField) {
        self.edit_field(field, String::clear);
    }

    fn edit_field(&mut self, field: TextField, edit: impl FnOnce(&mut String)) {
        match field {
            TextField::Draft => edit(&mut self.draft_text),
            TextField::Search => {
                edit(&mut self.search_query);
                tracing::trace!(query = %self.search_query, "search query updated");
                self.apply_search_filter();
            }
        }
    }

    /// Navigates and drops text focus when the list screen is left.
    pub fn navigate_to(&mut self, destination: Destination) -> bool {
        let moved = self.navigator.navigate_to(destination);
        self.release_focus_off_list();
        moved
    }

    pub fn navigate_back(&mut self) -> bool {
        let moved = self.navigator.navigate_back();
        self.release_focus_off_list();
        moved
    }

    pub fn select_settings_from_drawer(&mut self) {
        self.navigator.select_settings_from_drawer();
        self.release_focus_off_list();
    }

    fn release_focus_off_list(&mut self) {
        if self.navigator.current() != Destination::List {
            self.input_mode = InputMode::Normal;
        }
    }

    /// Computes a renderable view model for a terminal of `rows` x `cols`.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let screen = match self.navigator.current() {
            Destination::List => ScreenView::List(self.compute_list_screen(rows, cols)),
            Destination::Profile => ScreenView::Profile(self.compute_profile_screen()),
            Destination::Settings => ScreenView::Settings(SettingsView {
                heading: "Pengaturan".to_string(),
                dark_mode_label: "Mode Gelap (Dark Mode)".to_string(),
                dark_mode: self.appearance.is_dark_mode(),
            }),
        };

        UIViewModel {
            top_bar: TopBarInfo {
                title: "ShoppingList App".to_string(),
                menu_hint: "[m] Menu".to_string(),
            },
            screen,
            bottom_bar: self.compute_bottom_bar(),
            drawer: self.compute_drawer(),
            footer: self.compute_footer(),
        }
    }

    fn compute_list_screen(&self, rows: usize, cols: usize) -> ListScreenView {
        let focused = self.input_mode.focused_field();
        let draft = InputBoxInfo {
            label: "New item".to_string(),
            text: self.draft_text.clone(),
            is_focused: focused == Some(TextField::Draft),
        };
        let search = InputBoxInfo {
            label: "Search".to_string(),
            text: self.search_query.clone(),
            is_focused: focused == Some(TextField::Search),
        };

        if self.filtered_items.is_empty() {
            let empty_state = if self.items.is_empty() {
                EmptyState {
                    message: "Your shopping list is empty".to_string(),
                    subtitle: "Press 'a' to add an item".to_string(),
                }
            } else {
                EmptyState {
                    message: format!("No items match \"{}\"", self.search_query),
                    subtitle: "Press '/' to change the search".to_string(),
                }
            };
            return ListScreenView {
                title: Self::list_title(0, self.items.len(), &self.search_query),
                draft,
                search,
                display_items: vec![],
                selected_index: 0,
                empty_state: Some(empty_state),
            };
        }

        let available_rows = rows.saturating_sub(LIST_CHROME_ROWS).max(1);

        let mut visible_start = self.selected_index.saturating_sub(available_rows / 2);
        let visible_end = (visible_start + available_rows).min(self.filtered_items.len());
        if visible_end - visible_start < available_rows
            && self.filtered_items.len() >= available_rows
        {
            visible_start = visible_end.saturating_sub(available_rows);
        }

        let max_width = cols.saturating_sub(4).min(MAX_ITEM_WIDTH);
        let display_items = self.filtered_items[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(relative_idx, item)| {
                let absolute_idx = visible_start + relative_idx;
                self.compute_display_item(item, absolute_idx == self.selected_index, max_width)
            })
            .collect();

        ListScreenView {
            title: Self::list_title(
                self.filtered_items.len(),
                self.items.len(),
                &self.search_query,
            ),
            draft,
            search,
            display_items,
            selected_index: self.selected_index.saturating_sub(visible_start),
            empty_state: None,
        }
    }

    fn list_title(shown: usize, total: usize, query: &str) -> String {
        if is_blank_query(query) {
            format!(" Shopping List ({total}) ")
        } else {
            format!(" Shopping List ({shown} of {total}) ")
        }
    }

    fn compute_display_item(&self, item: &Item, is_selected: bool, max_width: usize) -> DisplayItem {
        let char_count = item.text().chars().count();
        let (text, highlight_ranges) = if max_width > 3 && char_count > max_width {
            let keep = max_width - 3;
            let truncated: String = item.text().chars().take(keep).collect();
            // Clip highlights to the part that is still visible.
            let ranges = match_ranges(item.text(), &self.search_query)
                .into_iter()
                .filter(|&(start, _)| start < keep)
                .map(|(start, end)| (start, end.min(keep)))
                .collect();
            (format!("{truncated}..."), ranges)
        } else {
            (
                item.text().to_string(),
                match_ranges(item.text(), &self.search_query),
            )
        };

        DisplayItem {
            text,
            is_selected,
            highlight_ranges,
        }
    }

    fn compute_profile_screen(&self) -> ProfileView {
        let theme_name = if self.appearance.is_dark_mode() {
            "dark"
        } else {
            "light"
        };
        ProfileView {
            heading: "Profile".to_string(),
            lines: vec![
                format!("Items on your list: {}", self.items.len()),
                format!("Theme: {theme_name} ({})", self.active_theme().name),
            ],
        }
    }

    fn compute_bottom_bar(&self) -> BottomBarInfo {
        let current = self.navigator.current();
        BottomBarInfo {
            entries: BOTTOM_BAR
                .iter()
                .enumerate()
                .map(|(idx, &destination)| NavEntry {
                    key: char::from_digit(idx as u32 + 1, 10).unwrap_or('?'),
                    label: destination.label().to_string(),
                    is_active: destination == current,
                })
                .collect(),
        }
    }

    fn compute_drawer(&self) -> Option<DrawerInfo> {
        self.navigator.is_drawer_open().then(|| DrawerInfo {
            entries: vec![DrawerEntry {
                key: 's',
                label: Destination::Settings.label().to_string(),
            }],
        })
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = if self.navigator.is_drawer_open() {
            "s/Enter: settings  Esc/m: close menu  q: quit"
        } else {
            match (self.input_mode, self.navigator.current()) {
                (InputMode::Editing(TextField::Draft), _) => {
                    "Enter: add item  Ctrl+u: clear  Esc: done"
                }
                (InputMode::Editing(TextField::Search), _) => {
                    "Type to filter  Ctrl+u: clear  Enter/Esc: done"
                }
                (InputMode::Normal, Destination::List) => {
                    "a: add  /: search  j/k: move  1/2: screens  m: menu  q: quit"
                }
                (InputMode::Normal, Destination::Profile) => {
                    "1/2: screens  m: menu  Esc: back  q: quit"
                }
                (InputMode::Normal, Destination::Settings) => {
                    "t/Space: toggle dark mode  1/2: screens  Esc: back  q: quit"
                }
            }
        };
        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }
}
