use once_cell::sync::Lazy;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};
use typed_builder::TypedBuilder;
use url::Url;

use crate::canonical_list::{CanonicalEntry, GRIND_75, LEETCODE_75};

#[derive(
    Clone, Copy, PartialEq, Eq, Hash, Debug, Display, EnumString, EnumIter, clap::ValueEnum,
)]
pub enum StudyPlanId {
    #[strum(serialize = "leetcode-75")]
    #[value(name = "leetcode-75")]
    Leetcode75,
    #[strum(serialize = "top-interview-150")]
    #[value(name = "top-interview-150")]
    TopInterview150,
    #[strum(serialize = "grind75")]
    #[value(name = "grind75")]
    Grind75,
}

/// Where a plan lives and what a complete scrape of it looks like.
#[derive(Debug, TypedBuilder)]
pub struct StudyPlan {
    pub id: StudyPlanId,
    /// Identifies the plan in a problem's memberships.
    pub url: Url,
    /// The page actually downloaded; may differ from `url` by query parameters.
    pub fetch_url: Url,
    pub expected_count: usize,
    /// The problem list is rendered in the browser from script bundles.
    #[builder(default)]
    pub client_rendered: bool,
    #[builder(default)]
    pub canonical_list: Option<&'static [CanonicalEntry]>,
}

impl StudyPlan {
    /// Last non-empty path segment of the plan URL, e.g. `grind75`.
    pub fn slug(&self) -> &str {
        self.url
            .path_segments()
            .and_then(|segments| segments.filter(|s| !s.is_empty()).last())
            .unwrap_or_default()
    }
}

fn url(s: &str) -> Url {
    Url::parse(s).expect("study plan urls are valid")
}

static STUDY_PLANS: Lazy<Vec<StudyPlan>> = Lazy::new(|| {
    StudyPlanId::iter()
        .map(|id| match id {
            StudyPlanId::Leetcode75 => StudyPlan::builder()
                .id(id)
                .url(url("https://leetcode.com/studyplan/leetcode-75/"))
                .fetch_url(url("https://leetcode.com/studyplan/leetcode-75/"))
                .expected_count(75)
                .canonical_list(Some(LEETCODE_75))
                .build(),
            StudyPlanId::TopInterview150 => StudyPlan::builder()
                .id(id)
                .url(url("https://leetcode.com/studyplan/top-interview-150/"))
                .fetch_url(url("https://leetcode.com/studyplan/top-interview-150/"))
                .expected_count(150)
                .build(),
            // The "no grouping" view keeps the list in a stable order.
            StudyPlanId::Grind75 => StudyPlan::builder()
                .id(id)
                .url(url("https://www.techinterviewhandbook.org/grind75/"))
                .fetch_url(url(
                    "https://www.techinterviewhandbook.org/grind75/?grouping=none",
                ))
                .expected_count(75)
                .client_rendered(true)
                .canonical_list(Some(GRIND_75))
                .build(),
        })
        .collect()
});

impl StudyPlanId {
    pub fn plan(self) -> &'static StudyPlan {
        STUDY_PLANS
            .iter()
            .find(|plan| plan.id == self)
            .expect("every id has a plan")
    }

    pub fn all() -> impl Iterator<Item = &'static StudyPlan> {
        STUDY_PLANS.iter()
    }

    /// The plan whose URL is exactly `plan_url`, if it is a known one.
    pub fn of_url(plan_url: &str) -> Option<Self> {
        Self::all()
            .find(|plan| plan.url.as_str() == plan_url)
            .map(|plan| plan.id)
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::StudyPlanId;

    #[test]
    fn table_is_consistent() {
        for id in StudyPlanId::iter() {
            let plan = id.plan();
            assert_eq!(plan.id, id);
            assert_eq!(plan.slug(), id.to_string());
            assert_eq!(StudyPlanId::of_url(plan.url.as_str()), Some(id));
            if let Some(list) = plan.canonical_list {
                assert_eq!(list.len(), plan.expected_count);
            }
        }
        assert_eq!("grind75".parse::<StudyPlanId>().unwrap(), StudyPlanId::Grind75);
        assert!(StudyPlanId::Grind75.plan().client_rendered);
    }
}
