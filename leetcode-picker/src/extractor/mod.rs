//! Recovers the ordered problem list of a study plan from pages that do not expose one.
//!
//! A plan page is fetched once, then [`Strategy::CHAIN`] is walked in order.
//! Each strategy decides from the result so far whether it applies,
//! and a strategy that finds something replaces the result.
//!
//! 1. [`Strategy::EmbeddedPayload`]: slug/title/difficulty triples inside inlined scripts.
//! 2. [`Strategy::ProblemLinks`]: plain links to problems in the raw body, titles humanized.
//! 3. [`Strategy::ScriptBundles`]: for client-rendered plans, the referenced script bundles.
//! 4. [`Strategy::CanonicalList`]: the shipped list, when the plan is still incomplete.
//!
//! Only a failure to fetch the plan page itself is an error.

pub mod bundles;
pub mod links;
pub mod payload;

use std::time::Duration;

use getset::{CopyGetters, Getters};
use indexmap::{map::Entry, IndexMap, IndexSet};
use log::{debug, info, warn};
use strum::Display;
use tokio::time::sleep;

use crate::{
    api::PageSource,
    canonical_list::CanonicalEntry,
    problem::{Difficulty, Problem},
    problem_url::{ProblemUrl, Slug},
    study_plan::StudyPlan,
};

/// How much an extracted title/difficulty can be trusted.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum Provenance {
    /// Title humanized from the slug, difficulty defaulted or guessed.
    Derived,
    /// Taken from a shipped canonical list.
    Canonical,
    /// Read from structured data on the page.
    Payload,
}

#[derive(Clone, PartialEq, Eq, Debug, Getters, CopyGetters)]
pub struct ExtractedProblem {
    #[getset(get = "pub")]
    slug: Slug,
    #[getset(get = "pub")]
    title: String,
    #[getset(get_copy = "pub")]
    difficulty: Difficulty,
    #[getset(get_copy = "pub")]
    provenance: Provenance,
}

impl ExtractedProblem {
    pub fn new(slug: Slug, title: String, difficulty: Difficulty, provenance: Provenance) -> Self {
        Self {
            slug,
            title,
            difficulty,
            provenance,
        }
    }

    pub fn url(&self) -> ProblemUrl {
        ProblemUrl::from_slug(&self.slug)
    }

    pub fn to_problem(&self, plan_url: &str) -> Problem {
        Problem::builder()
            .url(self.url())
            .title(self.title.clone())
            .difficulty(self.difficulty)
            .study_plan_urls(IndexSet::from([plan_url.to_owned()]))
            .build()
    }
}

impl ExtractedProblem {
    fn from_canonical(entry: &CanonicalEntry) -> Option<Self> {
        Some(Self {
            slug: Slug::parse(entry.slug)?,
            title: entry.title.to_owned(),
            difficulty: entry.difficulty,
            provenance: Provenance::Canonical,
        })
    }
}

/// Keeps the first occurrence of each slug, in order of first appearance.
#[derive(Default, Debug)]
pub struct Collector(IndexMap<Slug, ExtractedProblem>);

impl Collector {
    /// Returns `false` if the slug was already collected.
    pub fn push(&mut self, problem: ExtractedProblem) -> bool {
        match self.0.entry(problem.slug.clone()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(entry) => {
                entry.insert(problem);
                true
            }
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `None` when nothing was collected, so that the next strategy gets a chance.
    pub fn into_result(self) -> Option<Vec<ExtractedProblem>> {
        (!self.0.is_empty()).then(|| self.0.into_values().collect())
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Display)]
pub enum Strategy {
    EmbeddedPayload,
    ProblemLinks,
    ScriptBundles,
    CanonicalList,
}

impl Strategy {
    pub const CHAIN: [Strategy; 4] = [
        Strategy::EmbeddedPayload,
        Strategy::ProblemLinks,
        Strategy::ScriptBundles,
        Strategy::CanonicalList,
    ];

    fn applies(self, plan: &StudyPlan, found: &[ExtractedProblem]) -> bool {
        match self {
            Strategy::EmbeddedPayload => true,
            Strategy::ProblemLinks => found.is_empty(),
            Strategy::ScriptBundles => found.is_empty() && plan.client_rendered,
            Strategy::CanonicalList => {
                found.len() < plan.expected_count && plan.canonical_list.is_some()
            }
        }
    }

    async fn run<S: PageSource>(
        self,
        source: &S,
        plan: &StudyPlan,
        page: &str,
    ) -> Option<Vec<ExtractedProblem>> {
        match self {
            Strategy::EmbeddedPayload => payload::extract(page),
            Strategy::ProblemLinks => links::extract(page),
            Strategy::ScriptBundles => bundles::extract(source, plan, page).await,
            Strategy::CanonicalList => plan
                .canonical_list
                .map(|list| list.iter().filter_map(ExtractedProblem::from_canonical).collect()),
        }
    }
}

/// The outcome of extracting one plan.
#[derive(Debug, Getters, CopyGetters)]
pub struct PlanExtraction {
    #[getset(get = "pub")]
    plan_url: String,
    #[getset(get = "pub")]
    problems: Vec<ExtractedProblem>,
    /// The strategy whose result was kept, if any.
    #[getset(get_copy = "pub")]
    strategy: Option<Strategy>,
    #[getset(get_copy = "pub")]
    expected_count: usize,
}

impl PlanExtraction {
    pub fn new(plan_url: impl Into<String>, problems: Vec<ExtractedProblem>) -> Self {
        let expected_count = problems.len();
        Self {
            plan_url: plan_url.into(),
            problems,
            strategy: None,
            expected_count,
        }
    }

    fn empty(plan: &StudyPlan) -> Self {
        Self {
            plan_url: plan.url.to_string(),
            problems: vec![],
            strategy: None,
            expected_count: plan.expected_count,
        }
    }

    /// `(found, expected)` if the count is off.
    pub fn count_mismatch(&self) -> Option<(usize, usize)> {
        (self.problems.len() != self.expected_count)
            .then_some((self.problems.len(), self.expected_count))
    }

    pub fn position_of(&self, url: &ProblemUrl) -> Option<usize> {
        self.problems.iter().position(|p| &p.url() == url)
    }
}

pub struct ExtractionEngine<'s, S> {
    source: &'s S,
    politeness_delay: Duration,
}

impl<'s, S: PageSource> ExtractionEngine<'s, S> {
    pub fn new(source: &'s S, politeness_delay: Duration) -> Self {
        Self {
            source,
            politeness_delay,
        }
    }

    /// Fails only if the plan page itself cannot be fetched.
    pub async fn extract(&self, plan: &StudyPlan) -> anyhow::Result<PlanExtraction> {
        let page = self.source.fetch_text(&plan.fetch_url).await?;
        debug!("Fetched {} ({} bytes)", plan.fetch_url, page.len());

        let mut extraction = PlanExtraction::empty(plan);
        for strategy in Strategy::CHAIN {
            if !strategy.applies(plan, &extraction.problems) {
                continue;
            }
            match strategy.run(self.source, plan, &page).await {
                Some(problems) => {
                    info!("  {strategy} found {} problems", problems.len());
                    extraction.problems = problems;
                    extraction.strategy = Some(strategy);
                }
                None => debug!("  {strategy} found nothing"),
            }
        }

        if let Some((found, expected)) = extraction.count_mismatch() {
            warn!("{} yielded {found} problems (expected {expected})", plan.id);
        }
        Ok(extraction)
    }

    /// Extracts every plan in turn, pausing between plans.
    /// A plan whose page cannot be fetched contributes nothing.
    pub async fn extract_all<'p>(
        &self,
        plans: impl IntoIterator<Item = &'p StudyPlan>,
    ) -> Vec<PlanExtraction> {
        let mut ret = vec![];
        for (i, plan) in plans.into_iter().enumerate() {
            if i > 0 {
                sleep(self.politeness_delay).await;
            }
            info!("Scraping {}...", plan.id);
            match self.extract(plan).await {
                Ok(extraction) => ret.push(extraction),
                Err(e) => {
                    warn!("Error scraping {}: {e:#}", plan.id);
                    ret.push(PlanExtraction::empty(plan));
                }
            }
        }
        ret
    }
}
