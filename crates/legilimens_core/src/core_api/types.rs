use serde::Serialize;

use crate::catalog::Grouping;
use crate::container::SaveInfo;
use crate::reconcile::{BugFlags, MissingGroup, Reconciliation};

/// Everything one run produces, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub save: SaveInfo,
    pub grouping: Grouping,
    pub groups: Vec<MissingGroup>,
    pub bugs: BugFlags,
    /// Collectible types (and checks) skipped because their table failed.
    pub unreliable_types: Vec<&'static str>,
    pub missing_count: usize,
}

impl Report {
    pub fn new(
        save: SaveInfo,
        reconciliation: Reconciliation,
        unreliable_types: Vec<&'static str>,
    ) -> Self {
        let missing_count = reconciliation.missing_count();
        Self {
            save,
            grouping: reconciliation.grouping,
            groups: reconciliation.groups,
            bugs: reconciliation.bugs,
            unreliable_types,
            missing_count,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.groups.is_empty()
    }
}
