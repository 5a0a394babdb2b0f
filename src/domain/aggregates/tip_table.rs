//! Tip Table Aggregate - The reference table of pre-authored tips
//!
//! Loaded once at startup and read-only afterwards, so a single instance can
//! be shared by every session without locking.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::domain::entities::{BaseTip, TipRecord};
use crate::domain::value_objects::{AgeGroup, Routine};

#[derive(Debug, Clone, Default)]
pub struct TipTable {
    records: Vec<TipRecord>,
}

impl TipTable {
    pub fn new(records: Vec<TipRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All rows for an (age band, routine) pair, in table order
    pub fn matching(&self, age_group: AgeGroup, routine: Routine) -> Vec<&TipRecord> {
        self.records
            .iter()
            .filter(|record| record.matches(age_group, routine))
            .collect()
    }

    /// Pick one matching row uniformly at random, or the default pair when
    /// nothing matches.
    pub fn choose<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        age_group: AgeGroup,
        routine: Routine,
    ) -> BaseTip {
        self.matching(age_group, routine)
            .choose(rng)
            .map(|record| BaseTip::from(*record))
            .unwrap_or_else(BaseTip::fallback)
    }
}
