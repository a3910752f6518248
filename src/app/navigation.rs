//! Screen navigation and the side drawer.
//!
//! The plugin has three flat destinations. [`Navigator`] tracks which one is
//! showing, a launch-single-top history for the back action, and whether the
//! side drawer is open. The drawer flag is independent of the destination.
//! Returning to a screen already in the history pops back to it, so the
//! history holds each destination at most once.

/// A screen the user can navigate to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Destination {
    /// The shopping list with the add and search fields. Start destination.
    List,
    /// The profile screen.
    Profile,
    /// The settings screen holding the dark mode switch.
    Settings,
}

impl Destination {
    /// Human readable label used in the bottom bar and drawer.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::List => "Shopping List",
            Self::Profile => "Profile",
            Self::Settings => "Settings",
        }
    }
}

/// Entries shown in the bottom navigation bar, in display order.
///
/// Settings is deliberately absent; it lives in the drawer.
pub const BOTTOM_BAR: [Destination; 2] = [Destination::List, Destination::Profile];

/// Navigation state machine.
///
/// # Invariants
///
/// - `history` is never empty and its last entry is the current destination.
/// - Each destination appears at most once, so the history never grows past
///   the number of destinations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    history: Vec<Destination>,
    drawer_open: bool,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    /// Starts on the list screen with the drawer closed.
    #[must_use]
    pub fn new() -> Self {
        Self {
            history: vec![Destination::List],
            drawer_open: false,
        }
    }

    /// The destination on screen.
    #[must_use]
    pub fn current(&self) -> Destination {
        self.history
            .last()
            .copied()
            .unwrap_or(Destination::List)
    }

    /// Whether the side drawer covers the screen.
    #[must_use]
    pub const fn is_drawer_open(&self) -> bool {
        self.drawer_open
    }

    /// Visited destinations, oldest first. The last entry is current.
    #[must_use]
    pub fn history(&self) -> &[Destination] {
        &self.history
    }

    /// Makes `destination` current.
    ///
    /// Re-entering the current destination does nothing and returns `false`,
    /// so repeated taps never stack duplicate history entries. A destination
    /// visited earlier is returned to by dropping everything above it.
    ///
    /// # Examples
    ///
    /// ```
    /// use shopping_list::app::navigation::{Destination, Navigator};
    ///
    /// let mut nav = Navigator::new();
    /// assert!(nav.navigate_to(Destination::Profile));
    /// assert!(!nav.navigate_to(Destination::Profile));
    /// assert_eq!(nav.history(), [Destination::List, Destination::Profile]);
    ///
    /// assert!(nav.navigate_to(Destination::List));
    /// assert_eq!(nav.history(), [Destination::List]);
    /// ```
    pub fn navigate_to(&mut self, destination: Destination) -> bool {
        if self.current() == destination {
            tracing::debug!(?destination, "already at destination");
            return false;
        }
        match self.history.iter().position(|&d| d == destination) {
            Some(idx) => self.history.truncate(idx + 1),
            None => self.history.push(destination),
        }
        tracing::debug!(?destination, depth = self.history.len(), "navigated");
        true
    }

    /// Returns to the previous destination. No-op on the start screen.
    pub fn navigate_back(&mut self) -> bool {
        if self.history.len() <= 1 {
            return false;
        }
        self.history.pop();
        tracing::debug!(destination = ?self.current(), "navigated back");
        true
    }

    /// Shows the drawer over the current screen.
    pub fn open_drawer(&mut self) {
        self.drawer_open = true;
    }

    /// Hides the drawer. The destination is unchanged.
    pub fn close_drawer(&mut self) {
        self.drawer_open = false;
    }

    /// Handles the drawer's settings entry.
    ///
    /// The drawer is closed before navigating so it never stays open over the
    /// settings screen.
    pub fn select_settings_from_drawer(&mut self) {
        self.close_drawer();
        self.navigate_to(Destination::Settings);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_list_with_drawer_closed() {
        let nav = Navigator::new();
        assert_eq!(nav.current(), Destination::List);
        assert!(!nav.is_drawer_open());
        assert_eq!(nav.history(), [Destination::List]);
    }

    #[test]
    fn navigating_twice_is_idempotent() {
        let mut nav = Navigator::new();
        for destination in [Destination::List, Destination::Profile, Destination::Settings] {
            nav.navigate_to(destination);
            let snapshot = nav.clone();
            assert!(!nav.navigate_to(destination));
            assert_eq!(nav, snapshot);
            assert_eq!(nav.current(), destination);
        }
    }

    #[test]
    fn revisiting_pops_back_instead_of_stacking() {
        let mut nav = Navigator::new();
        let taps = [
            Destination::Profile,
            Destination::Profile,
            Destination::Settings,
            Destination::Profile,
            Destination::Settings,
        ];
        for tap in taps {
            nav.navigate_to(tap);
        }
        assert_eq!(
            nav.history(),
            [Destination::List, Destination::Profile, Destination::Settings]
        );
    }

    #[test]
    fn switching_tabs_keeps_history_bounded() {
        let mut nav = Navigator::new();
        for _ in 0..500 {
            assert!(nav.navigate_to(Destination::Profile));
            assert!(nav.navigate_to(Destination::List));
        }
        assert_eq!(nav.history(), [Destination::List]);

        nav.navigate_to(Destination::Profile);
        assert!(nav.navigate_back());
        assert!(!nav.navigate_back());
    }

    #[test]
    fn back_pops_until_start() {
        let mut nav = Navigator::new();
        nav.navigate_to(Destination::Profile);
        nav.navigate_to(Destination::Settings);

        assert!(nav.navigate_back());
        assert_eq!(nav.current(), Destination::Profile);
        assert!(nav.navigate_back());
        assert_eq!(nav.current(), Destination::List);
        assert!(!nav.navigate_back());
        assert_eq!(nav.current(), Destination::List);
    }

    #[test]
    fn drawer_is_independent_of_destination() {
        let mut nav = Navigator::new();
        nav.open_drawer();
        nav.navigate_to(Destination::Profile);
        assert!(nav.is_drawer_open());
        nav.close_drawer();
        assert_eq!(nav.current(), Destination::Profile);
    }

    #[test]
    fn drawer_settings_ends_closed_on_settings() {
        for start_open in [false, true] {
            let mut nav = Navigator::new();
            if start_open {
                nav.open_drawer();
            }
            nav.select_settings_from_drawer();
            assert_eq!(nav.current(), Destination::Settings);
            assert!(!nav.is_drawer_open());
        }
    }
}
