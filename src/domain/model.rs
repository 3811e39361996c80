use serde::{Deserialize, Serialize};

/// One spreadsheet row that passed the presence check: all three fields are
/// non-empty and trimmed. Immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutletRecord {
    /// The outlet's unique business code (e.g. "0001").
    pub store_code: String,
    /// Short code (e.g. "JKJSTT1"); doubles as the outlet user's login name.
    pub short_name: String,
    /// Display name; doubles as the outlet user's full name.
    pub store_name: String,
}

/// Loader output: surviving records in spreadsheet row order, plus how many
/// data rows were dropped for missing one of the three required cells.
#[derive(Debug, Clone)]
pub struct LoadedOutlets {
    pub records: Vec<OutletRecord>,
    pub skipped_rows: usize,
}

/// Classification of a single creation call, switched on the numeric HTTP
/// status. A conflict means the record is already present and counts as
/// success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpsertOutcome {
    Created,
    AlreadyExists,
    Failed(String),
}

/// Aggregate counters for one import run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportStats {
    pub outlets_created: usize,
    pub outlets_exists: usize,
    pub outlets_failed: usize,
    pub users_created: usize,
    pub users_exists: usize,
    pub users_failed: usize,
    pub processed: usize,
}

impl ImportStats {
    pub fn record_outlet(&mut self, outcome: &UpsertOutcome) {
        match outcome {
            UpsertOutcome::Created => self.outlets_created += 1,
            UpsertOutcome::AlreadyExists => self.outlets_exists += 1,
            UpsertOutcome::Failed(_) => self.outlets_failed += 1,
        }
    }

    pub fn record_user(&mut self, outcome: &UpsertOutcome) {
        match outcome {
            UpsertOutcome::Created => self.users_created += 1,
            UpsertOutcome::AlreadyExists => self.users_exists += 1,
            UpsertOutcome::Failed(_) => self.users_failed += 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_count_each_outcome_once() {
        let mut stats = ImportStats::default();
        stats.record_outlet(&UpsertOutcome::Created);
        stats.record_outlet(&UpsertOutcome::AlreadyExists);
        stats.record_outlet(&UpsertOutcome::Failed("500 - boom".to_string()));
        stats.record_user(&UpsertOutcome::Created);

        assert_eq!(stats.outlets_created, 1);
        assert_eq!(stats.outlets_exists, 1);
        assert_eq!(stats.outlets_failed, 1);
        assert_eq!(stats.users_created, 1);
        assert_eq!(stats.users_exists, 0);
        assert_eq!(stats.users_failed, 0);
    }
}
