//! Collaborators injected into the search form.
//!
//! The form never reaches for a global alert channel or a shared admin
//! client. Whoever owns the form hands it a [`Notifier`] for user-visible
//! messages and a [`SearchPort`] for running the actual search.

use crate::commands::CmdMessage;
use crate::filters::ActiveFilterSet;

/// Receives non-blocking, user-visible messages.
pub trait Notifier {
    fn notify(&mut self, message: CmdMessage);
}

impl Notifier for Vec<CmdMessage> {
    fn notify(&mut self, message: CmdMessage) {
        self.push(message);
    }
}

/// Executes a search for the given filters.
///
/// Any `FnMut(&ActiveFilterSet) -> T` closure is a search port.
pub trait SearchPort {
    type Output;

    fn search(&mut self, filters: &ActiveFilterSet) -> Self::Output;
}

impl<F, T> SearchPort for F
where
    F: FnMut(&ActiveFilterSet) -> T,
{
    type Output = T;

    fn search(&mut self, filters: &ActiveFilterSet) -> T {
        self(filters)
    }
}
