//! `SubstitutionTable` — literal search/replace pairs applied to every field
//! value before encoding conversion.

use crate::error::{TabexError, TabexResult};

/// Ordered search→replacement pairs, unique by search value.
///
/// Pairs apply in registration order, each over the full result of the
/// previous one.  There is no removal operation.
#[derive(Debug, Clone, Default)]
pub struct SubstitutionTable {
    pairs: Vec<(String, String)>,
}

impl SubstitutionTable {
    /// Register one pair.  Fails with
    /// [`TabexError::DuplicateSubstitution`] if `search` is already present;
    /// the table is unchanged on failure.
    pub fn register(
        &mut self,
        search: impl Into<String>,
        replace: impl Into<String>,
    ) -> TabexResult<()> {
        let search = search.into();
        if self.pairs.iter().any(|(existing, _)| *existing == search) {
            return Err(TabexError::DuplicateSubstitution(search));
        }
        self.pairs.push((search, replace.into()));
        Ok(())
    }

    /// Apply every registered pair to `value`.
    pub fn apply(&self, value: &str) -> String {
        let mut out = value.to_owned();
        for (search, replace) in &self.pairs {
            // `str::replace` with an empty needle matches between every
            // character; an empty search value matches nothing instead.
            if search.is_empty() {
                continue;
            }
            out = out.replace(search.as_str(), replace.as_str());
        }
        out
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
