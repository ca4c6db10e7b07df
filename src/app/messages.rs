//! Messages posted to the UI loop from listeners and spawned tasks.

use crate::routes::Route;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    /// A container the screen renders from changed.
    Redraw,
    /// A finished action asks to show another route.
    Navigate(Route),
    /// The shared current user changed; route guards run again.
    UserChanged,
}
