//! Splits classification outcomes into the two reportable sets.

use crate::classify::{Classification, ClassificationOutcome};

/// One row of the attached table.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AttachedRow {
    pub snapshot_id: String,
    pub image_ids: Vec<String>,
}

/// Outcomes split by attachment. Failed lookups are counted but appear in
/// neither table.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Partition {
    pub attached: Vec<AttachedRow>,
    pub unattached: Vec<String>,
    pub failed: usize,
}

/// Deterministic for a fixed outcome set; within each output the rows keep
/// the order the outcomes were collected in.
pub fn partition(outcomes: Vec<ClassificationOutcome>) -> Partition {
    let mut split = Partition::default();
    for outcome in outcomes {
        match outcome.result {
            Classification::Attached(image_ids) => split.attached.push(AttachedRow {
                snapshot_id: outcome.snapshot_id,
                image_ids,
            }),
            Classification::Unattached => split.unattached.push(outcome.snapshot_id),
            Classification::LookupFailed(_) => split.failed += 1,
        }
    }
    split
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn attached(id: &str, amis: &[&str]) -> ClassificationOutcome {
        ClassificationOutcome {
            snapshot_id: id.to_string(),
            result: Classification::Attached(amis.iter().map(|a| a.to_string()).collect()),
        }
    }

    fn unattached(id: &str) -> ClassificationOutcome {
        ClassificationOutcome {
            snapshot_id: id.to_string(),
            result: Classification::Unattached,
        }
    }

    fn failed(id: &str) -> ClassificationOutcome {
        ClassificationOutcome {
            snapshot_id: id.to_string(),
            result: Classification::LookupFailed("boom".to_string()),
        }
    }

    #[test]
    fn splits_by_image_presence() {
        let split = partition(vec![
            attached("snap-1", &["ami-1"]),
            unattached("snap-2"),
            attached("snap-3", &["ami-2", "ami-3"]),
        ]);

        assert_eq!(split.attached.len(), 2);
        assert_eq!(split.unattached, vec!["snap-2".to_string()]);
        assert_eq!(split.failed, 0);
    }

    #[test]
    fn attached_and_unattached_are_disjoint_and_exhaustive() {
        let outcomes = vec![
            attached("snap-1", &["ami-1"]),
            unattached("snap-2"),
            failed("snap-3"),
            unattached("snap-4"),
        ];
        let total = outcomes.len();
        let split = partition(outcomes);

        let attached_ids: HashSet<&str> = split
            .attached
            .iter()
            .map(|row| row.snapshot_id.as_str())
            .collect();
        let unattached_ids: HashSet<&str> =
            split.unattached.iter().map(String::as_str).collect();

        assert!(attached_ids.is_disjoint(&unattached_ids));
        assert_eq!(
            attached_ids.len() + unattached_ids.len() + split.failed,
            total
        );
    }

    #[test]
    fn failed_outcomes_are_excluded_from_both_tables() {
        let split = partition(vec![failed("snap-1"), failed("snap-2")]);
        assert!(split.attached.is_empty());
        assert!(split.unattached.is_empty());
        assert_eq!(split.failed, 2);
    }

    #[test]
    fn invariant_under_outcome_permutation() {
        let outcomes = vec![
            attached("snap-1", &["ami-1"]),
            unattached("snap-2"),
            failed("snap-3"),
            attached("snap-4", &["ami-2"]),
        ];
        let mut reversed = outcomes.clone();
        reversed.reverse();

        let forward = partition(outcomes);
        let backward = partition(reversed);

        let as_sets = |p: &Partition| {
            (
                p.attached
                    .iter()
                    .cloned()
                    .collect::<HashSet<AttachedRow>>(),
                p.unattached.iter().cloned().collect::<HashSet<String>>(),
                p.failed,
            )
        };
        assert_eq!(as_sets(&forward), as_sets(&backward));
    }

    #[test]
    fn empty_outcomes_yield_empty_partition() {
        let split = partition(Vec::new());
        assert!(split.attached.is_empty());
        assert!(split.unattached.is_empty());
        assert_eq!(split.failed, 0);
    }
}
