//! Append-only ledger of recorded computations.
//!
//! Entries are immutable once recorded. The only way to drop an entry is
//! [`History::clear`], which drops all of them.

use std::slice;

use crate::computation::Computation;
use crate::enums::CalculationKind;

/// One recorded computation with its result and rendered formula.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    computation: Computation,
    result: f64,
    formula: String,
}

impl HistoryEntry {
    #[must_use]
    pub const fn computation(&self) -> &Computation {
        &self.computation
    }

    #[must_use]
    pub const fn kind(&self) -> CalculationKind {
        self.computation.kind()
    }

    #[must_use]
    pub const fn result(&self) -> f64 {
        self.result
    }

    /// The substituted formula as it was rendered when recorded.
    #[must_use]
    pub fn formula(&self) -> &str {
        &self.formula
    }
}

/// Ordered calculation history for one session.
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append a new entry.
    pub fn record(&mut self, computation: Computation, result: f64, formula: String) {
        self.entries.push(HistoryEntry {
            computation,
            result,
            formula,
        });
    }

    /// All entries in insertion order.
    #[must_use]
    pub fn list(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn iter(&self) -> slice::Iter<'_, HistoryEntry> {
        self.entries.iter()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a HistoryEntry;
    type IntoIter = slice::Iter<'a, HistoryEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
