//! Shared rendering capability for validated fields.

use std::fmt;

/// A validated, immutable, single-value wrapper with a string rendering.
///
/// Implemented independently by [`Name`](super::Name), [`Phone`](super::Phone)
/// and [`Birthday`](super::Birthday); the three validation rules are otherwise
/// unrelated, so there is no shared storage.
pub trait Field: fmt::Display {
    /// Human-readable label for the kind of field.
    const KIND: &'static str;

    /// Render the field the way it is shown to users.
    fn render(&self) -> String {
        self.to_string()
    }
}
