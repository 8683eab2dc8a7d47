//! The capability interface every control implements.
//!
//! Frontends (the GTK window, the `--list` text dump, tests) only talk to
//! controls through [`Control`]: ask for a [`RowView`] to draw, read the
//! current value, and forward user edits.

use crate::controls::{ControlError, RowView};
use crate::tracker::Value;

/// An interactive element bound to one schema option.
///
/// # Contract
///
/// * [`on_user_edit`](Control::on_user_edit) updates the control's own
///   displayed state **first**, then calls
///   [`ChangeTracker::record`](crate::tracker::ChangeTracker::record)
///   exactly once.
/// * A rejected edit leaves both the control and the tracker untouched.
pub trait Control {
    /// The option name this control edits (the tracker key).
    fn name(&self) -> &str;

    /// Describe what to draw for this control right now.
    fn render(&self) -> RowView;

    /// The value the user currently sees, or `None` for read-only rows.
    fn current_value(&self) -> Option<Value>;

    /// Apply a new value coming from the user.
    fn on_user_edit(&mut self, value: Value) -> Result<(), ControlError>;
}
