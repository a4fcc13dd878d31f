//! [`Previous`] values of an amended booking.

use std::collections::BTreeMap;

use common::{format_currency, Amount};

use super::Field;

/// Values the server knew for the [`Field`]s of a booking before it's
/// amended.
///
/// Used only to show the user what changed, never modified.
#[derive(Clone, Debug, Default)]
pub struct Previous(BTreeMap<Field, String>);

impl Previous {
    /// Creates new [`Previous`] values.
    #[must_use]
    pub fn new(values: impl IntoIterator<Item = (Field, String)>) -> Self {
        Self(values.into_iter().collect())
    }

    /// Indicates whether the provided [`Field`] has a previous value.
    #[must_use]
    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    /// Returns the label to show next to the provided [`Field`] holding the
    /// `current` text.
    ///
    /// [`None`] means the label is hidden: the [`Field`] has no previous
    /// value, or the previous value reads the same as the current one once
    /// both are formatted.
    #[must_use]
    pub fn label(&self, field: Field, current: &str) -> Option<String> {
        let previous = display(field, self.0.get(&field)?);
        (display(field, current) != previous)
            .then(|| format!("Previous: {previous}"))
    }
}

/// Formats the provided [`Field`] text for comparison and display.
fn display(field: Field, text: &str) -> String {
    if field.is_currency() {
        format_currency(Amount::parse(text))
    } else {
        text.to_owned()
    }
}
