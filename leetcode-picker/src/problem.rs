use chrono::NaiveDate;
use getset::{CopyGetters, Getters};
use indexmap::{IndexMap, IndexSet};
use serde_with::{DeserializeFromStr, SerializeDisplay};
use strum::{Display, EnumIter, EnumString};
use typed_builder::TypedBuilder;

use crate::problem_url::ProblemUrl;

#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Debug,
    Display,
    EnumString,
    EnumIter,
    SerializeDisplay,
    DeserializeFromStr,
    clap::ValueEnum,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// All problems in the store, in file order.
pub type ProblemMap = IndexMap<ProblemUrl, Problem>;

/// One practice problem together with what the user has done with it.
///
/// Fields are private so that `submissions >= completions` holds after every mutation.
#[derive(Clone, PartialEq, Eq, Debug, TypedBuilder, Getters, CopyGetters)]
pub struct Problem {
    #[getset(get = "pub")]
    url: ProblemUrl,
    #[getset(get = "pub")]
    #[builder(setter(into))]
    title: String,
    #[getset(get_copy = "pub")]
    difficulty: Difficulty,
    #[getset(get = "pub")]
    study_plan_urls: IndexSet<String>,
    #[getset(get_copy = "pub")]
    #[builder(default)]
    last_pass_date: Option<NaiveDate>,
    #[getset(get_copy = "pub")]
    #[builder(default)]
    completions: u32,
    #[getset(get_copy = "pub")]
    #[builder(default)]
    submissions: u32,
    #[getset(get_copy = "pub")]
    #[builder(default)]
    overridden_difficulty: Option<Difficulty>,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CompletionOutcome {
    Recorded { previous_completions: u32 },
    /// The given date is already the last pass date; nothing changed.
    AlreadyRecorded,
}

impl Problem {
    pub fn effective_difficulty(&self) -> Difficulty {
        self.overridden_difficulty.unwrap_or(self.difficulty)
    }

    pub fn is_completed(&self) -> bool {
        self.completions > 0
    }

    pub fn is_member_of(&self, plan_url: &str) -> bool {
        self.study_plan_urls.contains(plan_url)
    }

    /// One-way transition to "completed". Marking the same date twice is a no-op.
    pub fn mark_completed(&mut self, date: NaiveDate) -> CompletionOutcome {
        if self.last_pass_date == Some(date) {
            return CompletionOutcome::AlreadyRecorded;
        }
        let previous_completions = self.completions;
        self.last_pass_date = Some(date);
        self.completions += 1;
        self.submissions += 1;
        CompletionOutcome::Recorded {
            previous_completions,
        }
    }

    pub fn record_failed_attempt(&mut self) {
        self.submissions += 1;
    }

    /// Returns the effective difficulty before the override.
    pub fn override_difficulty(&mut self, difficulty: Difficulty) -> Difficulty {
        let old = self.effective_difficulty();
        self.overridden_difficulty = Some(difficulty);
        old
    }

    /// Takes scrape-time fields from a fresh extraction; user-tracked state is left alone.
    pub fn refresh_from(&mut self, fresh: &Problem) {
        self.title.clone_from(&fresh.title);
        self.difficulty = fresh.difficulty;
        self.study_plan_urls
            .extend(fresh.study_plan_urls.iter().cloned());
    }

    pub fn add_study_plan(&mut self, plan_url: &str) -> bool {
        self.study_plan_urls.insert(plan_url.to_owned())
    }

    /// Back-fills progress from accepted submissions. Neither the counters nor the date go back.
    pub fn apply_accepted(&mut self, last_accepted: NaiveDate, total_accepted: u32) {
        self.last_pass_date = self.last_pass_date.max(Some(last_accepted));
        self.completions = self.completions.max(total_accepted);
        self.submissions = self.submissions.max(self.completions);
    }

    /// Restores `submissions >= completions` for records built from untrusted input.
    pub(crate) fn repair_counters(&mut self) -> bool {
        let broken = self.submissions < self.completions;
        if broken {
            self.submissions = self.completions;
        }
        broken
    }
}
