//! Completion analysis for language collections.

use std::collections::BTreeSet;

use crate::domain::{CompletionReport, LanguageInventory};
use crate::links::display_title;

/// Highest completion bucket; buckets range over `0..=MAX_BUCKET`.
pub const MAX_BUCKET: usize = 4;

/// Compute the completion report for one language collection.
///
/// The approved set governs the totals and the missing list; the completed
/// list is the inventory itself, in the scanner's order. Pure function of
/// its inputs.
pub fn analyze(inventory: &LanguageInventory, approved: &BTreeSet<String>) -> CompletionReport {
    let implemented: BTreeSet<&str> = inventory
        .programs
        .iter()
        .map(|program| program.name.as_str())
        .collect();

    let mut missing: Vec<String> = approved
        .iter()
        .filter(|slug| !implemented.contains(slug.as_str()))
        .cloned()
        .collect();
    missing.sort_by_key(|slug| display_title(slug));

    let completed_count = inventory.programs.len();
    let total_approved = approved.len();

    CompletionReport {
        completed_count,
        total_approved,
        bucket: status_bucket(completed_count, total_approved),
        missing,
    }
}

/// Map a completion ratio onto one of five discrete buckets.
///
/// Integer arithmetic keeps `completed == total` exactly on the top bucket;
/// the result is clamped to `0..=MAX_BUCKET`. An empty total maps to 0.
pub fn status_bucket(completed: usize, total: usize) -> usize {
    if total == 0 {
        return 0;
    }
    ((completed * MAX_BUCKET) / total).min(MAX_BUCKET)
}
