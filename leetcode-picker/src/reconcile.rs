//! Combines per-plan extraction results and folds them into the store.

use indexmap::{map::Entry, IndexMap};
use log::{debug, info};

use crate::{
    extractor::{PlanExtraction, Provenance},
    problem::{Problem, ProblemMap},
    problem_url::ProblemUrl,
    store::ProgressStore,
};

#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub struct MergeReport {
    pub inserted: usize,
    pub updated: usize,
}

/// One problem per URL across all plans, in order of first appearance.
///
/// Plan memberships are unioned.
/// Title and difficulty come from the most recent occurrence,
/// except that a derived one never replaces one from a payload or a canonical list.
pub fn merge_plans(extractions: &[PlanExtraction]) -> IndexMap<ProblemUrl, (Problem, Provenance)> {
    let mut merged = IndexMap::<ProblemUrl, (Problem, Provenance)>::new();
    for extraction in extractions {
        for extracted in extraction.problems() {
            let fresh = extracted.to_problem(extraction.plan_url());
            match merged.entry(fresh.url().clone()) {
                Entry::Vacant(entry) => {
                    entry.insert((fresh, extracted.provenance()));
                }
                Entry::Occupied(mut entry) => {
                    let (problem, provenance) = entry.get_mut();
                    let derived_over_trusted = extracted.provenance() == Provenance::Derived
                        && *provenance != Provenance::Derived;
                    if derived_over_trusted {
                        problem.add_study_plan(extraction.plan_url());
                    } else {
                        problem.refresh_from(&fresh);
                        *provenance = extracted.provenance();
                    }
                }
            }
        }
    }
    merged
}

/// The records to write so that `existing` reflects `merged`.
///
/// Stored progress, overrides and memberships are kept; title and difficulty are refreshed.
pub fn reconcile(
    existing: &ProblemMap,
    merged: IndexMap<ProblemUrl, (Problem, Provenance)>,
) -> (Vec<Problem>, MergeReport) {
    let mut changes = vec![];
    let mut report = MergeReport::default();
    for (url, (fresh, _)) in merged {
        match existing.get(&url) {
            Some(stored) => {
                let mut updated = stored.clone();
                updated.refresh_from(&fresh);
                if &updated != stored {
                    debug!("Updating {url}");
                    changes.push(updated);
                    report.updated += 1;
                }
            }
            None => {
                debug!("Inserting {url}");
                changes.push(fresh);
                report.inserted += 1;
            }
        }
    }
    (changes, report)
}

pub fn merge_into_store<S: ProgressStore>(
    store: &mut S,
    extractions: &[PlanExtraction],
) -> anyhow::Result<MergeReport> {
    let merged = merge_plans(extractions);
    let existing = store.load_all()?;
    let (changes, report) = reconcile(&existing, merged);
    if !changes.is_empty() {
        store.upsert_all(changes)?;
    }
    info!(
        "Inserted {} new problems, updated {} problems",
        report.inserted, report.updated
    );
    Ok(report)
}
