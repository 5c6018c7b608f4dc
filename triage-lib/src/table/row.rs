//! TableRow trait and row eligibility.

use std::fmt::Debug;

/// Whether a row may be selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Eligibility {
    Eligible,
    /// Fail-safe default for anything not explicitly selectable.
    #[default]
    Ineligible,
}

impl Eligibility {
    pub fn is_eligible(self) -> bool {
        matches!(self, Eligibility::Eligible)
    }
}

impl From<bool> for Eligibility {
    fn from(eligible: bool) -> Self {
        if eligible {
            Eligibility::Eligible
        } else {
            Eligibility::Ineligible
        }
    }
}

/// Trait for items that can be displayed as rows of a selectable table.
///
/// The engine only reads the three values below; every other field of the
/// row is opaque display data for the presentation layer.
///
/// # Examples
///
/// ```ignore
/// impl TableRow for Invoice {
///     type Id = u64;
///
///     fn id(&self) -> &u64 { &self.number }
///     fn eligibility(&self) -> Eligibility { (!self.paid).into() }
///     fn weight(&self) -> f64 { self.amount }
/// }
/// ```
pub trait TableRow {
    /// Identifier type, unique within one dataset snapshot.
    type Id: PartialEq + Debug;

    /// Stable identifier of this row.
    ///
    /// Never used as the key into the selection vector; rows are addressed
    /// by position within the current dataset.
    fn id(&self) -> &Self::Id;

    /// Whether this row may be selected.
    fn eligibility(&self) -> Eligibility;

    /// Non-negative contribution to the selected weight total.
    fn weight(&self) -> f64;
}
