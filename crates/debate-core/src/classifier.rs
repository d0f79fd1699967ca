//! Keyword classifier - maps argument text to an evidence category

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::DebateError;
use crate::evidence::{EvidenceCategory, EvidenceTable};
use crate::random::RandomSource;

/// Winning category for a piece of text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub category: String,
    /// Full base weight of the category
    pub weight: u32,
}

/// Stateless lookup over a shared [`EvidenceTable`]
#[derive(Debug, Clone)]
pub struct Classifier {
    table: Arc<EvidenceTable>,
}

impl Classifier {
    pub fn new(table: Arc<EvidenceTable>) -> Self {
        Self { table }
    }

    /// The underlying evidence table
    pub fn table(&self) -> &Arc<EvidenceTable> {
        &self.table
    }

    /// Classify an argument.
    ///
    /// Every category whose keyword occurs in the lowercased text is a
    /// candidate; the strictly heaviest wins, and equal weights keep the
    /// category declared first.
    pub fn classify(&self, text: &str) -> Option<Classification> {
        let lowered = text.to_lowercase();
        let mut best: Option<&EvidenceCategory> = None;

        for category in self.table.iter() {
            if !category.matches(&lowered) {
                continue;
            }
            if best.map_or(true, |b| category.weight > b.weight) {
                best = Some(category);
            }
        }

        let result = best.map(|c| Classification {
            category: c.id.clone(),
            weight: c.weight,
        });
        tracing::debug!(
            category = result.as_ref().map(|c| c.category.as_str()),
            "Classified argument"
        );
        result
    }

    /// Draw a rebuttal from the category's own pool
    pub fn rebuttal_for(
        &self,
        category_id: &str,
        random: &mut dyn RandomSource,
    ) -> Result<&str, DebateError> {
        let category = self.lookup(category_id)?;
        let idx = random.pick(category.rebuttals.len());
        Ok(category.rebuttals[idx].as_str())
    }

    /// Human-readable label of a category
    pub fn description_for(&self, category_id: &str) -> Result<&str, DebateError> {
        Ok(self.lookup(category_id)?.description.as_str())
    }

    fn lookup(&self, category_id: &str) -> Result<&EvidenceCategory, DebateError> {
        self.table
            .get(category_id)
            .ok_or_else(|| DebateError::UnknownCategory(category_id.to_string()))
    }
}
