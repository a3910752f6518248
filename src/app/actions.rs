//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The handler mutates [`AppState`](crate::app::AppState) directly and only
//! reports effects that need the host, such as hiding the plugin pane. The
//! runtime executes the returned actions in order.

/// Commands executed by the plugin runtime after an event is handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane. Sent when the user presses `q`.
    ///
    /// In-memory state survives a hide but not a plugin reload.
    CloseFocus,
}
