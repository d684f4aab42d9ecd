//! What each subcommand does, apart from printing.

use chrono::{Days, NaiveDate};
use itertools::Itertools;
use log::info;
use strum::IntoEnumIterator;

use crate::{
    api::PageSource,
    chrono_util::parse_date,
    extractor::{ExtractionEngine, PlanExtraction},
    problem::{CompletionOutcome, Difficulty, Problem, ProblemMap},
    problem_url::ProblemUrl,
    reconcile::{merge_into_store, MergeReport},
    store::ProgressStore,
    study_plan::StudyPlanId,
};

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("Problem not found: {0}\nMake sure the URL is correct and the problem is in the database.")]
    ProblemNotFound(ProblemUrl),
    #[error("Invalid date {0:?}. Please use YYYY-MM-DD.")]
    InvalidDate(String),
}

/// Scrapes every known plan and merges the result into the store.
pub async fn update<P: PageSource, S: ProgressStore>(
    engine: &ExtractionEngine<'_, P>,
    store: &mut S,
) -> anyhow::Result<MergeReport> {
    let extractions = engine.extract_all(StudyPlanId::all()).await;
    merge_into_store(store, &extractions)
}

/// Loads the store, scraping first if it is empty.
pub async fn load_or_update<P: PageSource, S: ProgressStore>(
    engine: &ExtractionEngine<'_, P>,
    store: &mut S,
) -> anyhow::Result<ProblemMap> {
    let problems = store.load_all()?;
    if !problems.is_empty() {
        return Ok(problems);
    }
    info!("No problems found in the store. Scraping study plans...");
    update(engine, store).await?;
    store.load_all()
}

fn in_any_plan(problem: &Problem, plan: Option<StudyPlanId>) -> bool {
    match plan {
        Some(id) => problem.is_member_of(id.plan().url.as_str()),
        None => StudyPlanId::all().any(|plan| problem.is_member_of(plan.url.as_str())),
    }
}

/// Unsolved problems of known plans, optionally narrowed down by difficulty and plan.
pub fn unsolved_candidates(
    problems: &ProblemMap,
    difficulty: Option<Difficulty>,
    plan: Option<StudyPlanId>,
) -> Vec<&Problem> {
    problems
        .values()
        .filter(|p| !p.is_completed())
        .filter(|p| difficulty.map_or(true, |d| p.effective_difficulty() == d))
        .filter(|p| in_any_plan(p, plan))
        .collect()
}

/// Completed problems last passed at least `weeks_ago` weeks before `today`.
pub fn review_candidates(
    problems: &ProblemMap,
    weeks_ago: Option<u32>,
    difficulty: Option<Difficulty>,
    today: NaiveDate,
) -> Vec<&Problem> {
    let cutoff = weeks_ago.and_then(|w| today.checked_sub_days(Days::new(7 * u64::from(w))));
    problems
        .values()
        .filter(|p| p.is_completed())
        .filter(|p| difficulty.map_or(true, |d| p.effective_difficulty() == d))
        .filter(|p| match (weeks_ago, cutoff) {
            (None, _) => true,
            (Some(_), Some(cutoff)) => p.last_pass_date().is_some_and(|d| d <= cutoff),
            (Some(_), None) => false,
        })
        .collect()
}

fn find<S: ProgressStore>(store: &S, url: &str) -> anyhow::Result<Problem> {
    let url = ProblemUrl::from_user_input(url);
    match store.get(&url)? {
        Some(problem) => Ok(problem),
        None => Err(CommandError::ProblemNotFound(url).into()),
    }
}

pub struct CompletionReport {
    pub problem: Problem,
    pub outcome: CompletionOutcome,
}

/// Records a pass on `date` (`YYYY-MM-DD`), or on `today` if omitted.
pub fn mark_complete<S: ProgressStore>(
    store: &mut S,
    url: &str,
    date: Option<&str>,
    today: NaiveDate,
) -> anyhow::Result<CompletionReport> {
    let mut problem = find(store, url)?;
    let date = match date {
        Some(date) => parse_date(date).map_err(|_| CommandError::InvalidDate(date.to_owned()))?,
        None => today,
    };
    let outcome = problem.mark_completed(date);
    if let CompletionOutcome::Recorded { .. } = outcome {
        store.upsert(problem.clone())?;
    }
    Ok(CompletionReport { problem, outcome })
}

/// Returns the problem and its effective difficulty before the change.
pub fn override_difficulty<S: ProgressStore>(
    store: &mut S,
    url: &str,
    difficulty: Difficulty,
) -> anyhow::Result<(Problem, Difficulty)> {
    let mut problem = find(store, url)?;
    let old = problem.override_difficulty(difficulty);
    store.upsert(problem.clone())?;
    Ok((problem, old))
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct PlanProgress {
    pub plan: StudyPlanId,
    pub completed: usize,
    pub total: usize,
}

impl PlanProgress {
    pub fn remaining(&self) -> usize {
        self.total - self.completed
    }

    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.completed as f64 * 100.0 / self.total as f64
        }
    }
}

/// Per-plan completion counts; plans with no known problems are left out.
pub fn progress(problems: &ProblemMap) -> Vec<PlanProgress> {
    StudyPlanId::iter()
        .map(|plan| {
            let members = problems
                .values()
                .filter(|p| p.is_member_of(plan.plan().url.as_str()))
                .collect_vec();
            PlanProgress {
                plan,
                completed: members.iter().filter(|p| p.is_completed()).count(),
                total: members.len(),
            }
        })
        .filter(|progress| progress.total > 0)
        .collect()
}

/// Completed problems as `(1-based position in the plan, title)`, in plan order.
pub fn completed_in_plan_order<'a>(
    extraction: &'a PlanExtraction,
    problems: &ProblemMap,
) -> Vec<(usize, &'a str)> {
    extraction
        .problems()
        .iter()
        .enumerate()
        .filter(|(_, extracted)| {
            problems
                .get(&extracted.url())
                .is_some_and(|p| p.is_completed())
        })
        .map(|(i, extracted)| (i + 1, extracted.title().as_str()))
        .collect()
}
