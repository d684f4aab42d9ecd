//! Back-fills progress from the user's accepted submissions on LeetCode.

use std::collections::BTreeSet;

use chrono::TimeZone;
use indexmap::IndexMap;
use log::{debug, info, warn};
use serde::Deserialize;
use serde_json::json;
use serde_with::{serde_as, DisplayFromStr, PickFirst};

use crate::{
    api::LeetcodeClient,
    chrono_util::date_of_timestamp,
    problem::Problem,
    problem_url::{ProblemUrl, Slug},
    store::ProgressStore,
};

/// `status` of an accepted submission.
pub const ACCEPTED: i32 = 10;
pub const PAGE_SIZE: u32 = 100;

const SUBMISSIONS_QUERY: &str = "
query userSubmissions($offset: Int, $limit: Int) {
    submissionList(offset: $offset, limit: $limit) {
        submissions { title titleSlug status lang timestamp }
        hasNext
    }
}";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPage {
    pub submissions: Vec<Submission>,
    #[serde(default)]
    pub has_next: bool,
}

#[serde_as]
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    #[serde(default)]
    pub title: String,
    pub title_slug: Option<String>,
    pub status: i32,
    pub lang: Option<String>,
    /// Seconds since the UNIX epoch. The API sends it as a string.
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub timestamp: i64,
}

/// Paginated access to the submission history.
#[allow(async_fn_in_trait)]
pub trait SubmissionSource {
    async fn submission_page(&self, offset: u32, limit: u32) -> anyhow::Result<SubmissionPage>;
}

impl SubmissionSource for LeetcodeClient {
    async fn submission_page(&self, offset: u32, limit: u32) -> anyhow::Result<SubmissionPage> {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct Data {
            submission_list: SubmissionPage,
        }
        let data: Data = self
            .graphql(
                SUBMISSIONS_QUERY,
                json!({ "offset": offset, "limit": limit }),
            )
            .await?;
        Ok(data.submission_list)
    }
}

pub async fn fetch_all_submissions<S: SubmissionSource>(
    source: &S,
) -> anyhow::Result<Vec<Submission>> {
    let mut submissions = vec![];
    let mut offset = 0;
    loop {
        let page = source.submission_page(offset, PAGE_SIZE).await?;
        if page.submissions.is_empty() {
            break;
        }
        submissions.extend(page.submissions);
        info!("Fetched {} submissions so far...", submissions.len());
        if !page.has_next {
            break;
        }
        offset += PAGE_SIZE;
    }
    info!("Total submissions found: {}", submissions.len());
    Ok(submissions)
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct AcceptedProblem {
    pub title: String,
    pub first_accepted: i64,
    pub last_accepted: i64,
    pub total_accepted: u32,
    pub languages: BTreeSet<String>,
}

/// Accepted submissions grouped by problem, in order of first appearance.
pub fn aggregate_accepted<'a>(
    submissions: impl IntoIterator<Item = &'a Submission>,
) -> IndexMap<ProblemUrl, AcceptedProblem> {
    let mut accepted = IndexMap::<ProblemUrl, AcceptedProblem>::new();
    for submission in submissions {
        if submission.status != ACCEPTED {
            continue;
        }
        let Some(slug) = submission.title_slug.as_deref().and_then(Slug::parse) else {
            debug!("Accepted submission without a usable slug: {submission:?}");
            continue;
        };
        let t = submission.timestamp;
        let entry = accepted
            .entry(ProblemUrl::from_slug(&slug))
            .or_insert_with(|| AcceptedProblem {
                title: submission.title.clone(),
                first_accepted: t,
                last_accepted: t,
                total_accepted: 0,
                languages: BTreeSet::new(),
            });
        entry.first_accepted = entry.first_accepted.min(t);
        entry.last_accepted = entry.last_accepted.max(t);
        entry.total_accepted += 1;
        if let Some(lang) = submission.lang.as_ref().filter(|l| !l.is_empty()) {
            entry.languages.insert(lang.clone());
        }
    }
    accepted
}

#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct SyncReport {
    pub updated: usize,
    /// Titles of accepted problems that are not in the store.
    pub outside_plans: Vec<String>,
}

/// Raises the counters of stored problems to what the submission history shows.
/// Problems that are not in the store are only reported.
pub fn apply_accepted<S: ProgressStore, Tz: TimeZone>(
    store: &mut S,
    accepted: &IndexMap<ProblemUrl, AcceptedProblem>,
    tz: &Tz,
) -> anyhow::Result<SyncReport> {
    let existing = store.load_all()?;
    let mut report = SyncReport::default();
    let mut changes: Vec<Problem> = vec![];
    for (url, problem) in accepted {
        let Some(stored) = existing.get(url) else {
            report.outside_plans.push(problem.title.clone());
            continue;
        };
        let Some(date) = date_of_timestamp(problem.last_accepted, tz) else {
            warn!("{url}: timestamp {} is out of range", problem.last_accepted);
            continue;
        };
        let mut updated = stored.clone();
        updated.apply_accepted(date, problem.total_accepted);
        changes.push(updated);
        report.updated += 1;
    }
    if !changes.is_empty() {
        store.upsert_all(changes)?;
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, Utc};
    use indexmap::IndexSet;

    use super::{
        aggregate_accepted, apply_accepted, fetch_all_submissions, Submission, SubmissionPage,
        SubmissionSource, ACCEPTED,
    };
    use crate::{
        problem::{Difficulty, Problem, ProblemMap},
        problem_url::ProblemUrl,
        store::ProgressStore,
    };

    struct FakeHistory(Vec<Submission>);

    impl SubmissionSource for FakeHistory {
        async fn submission_page(&self, offset: u32, limit: u32) -> anyhow::Result<SubmissionPage> {
            let (offset, limit) = (offset as usize, limit as usize);
            let submissions = self.0.iter().skip(offset).take(limit).cloned().collect();
            Ok(SubmissionPage {
                submissions,
                has_next: offset + limit < self.0.len(),
            })
        }
    }

    fn submission(slug: &str, status: i32, timestamp: i64) -> Submission {
        Submission {
            title: slug.to_uppercase(),
            title_slug: Some(slug.to_owned()),
            status,
            lang: Some("rust".to_owned()),
            timestamp,
        }
    }

    #[test]
    fn page_deserialization() {
        let page: SubmissionPage = serde_json::from_str(
            r#"{"submissions":[
                {"title":"Two Sum","titleSlug":"two-sum","status":10,"lang":"rust","timestamp":"1709335800"},
                {"title":"Two Sum","titleSlug":"two-sum","status":11,"lang":null,"timestamp":1709335000}
            ],"hasNext":false}"#,
        )
        .unwrap();
        assert_eq!(page.submissions[0].timestamp, 1_709_335_800);
        assert_eq!(page.submissions[1].timestamp, 1_709_335_000);
        assert!(!page.has_next);
    }

    #[tokio::test]
    async fn pagination() {
        let history = FakeHistory(
            (0..250)
                .map(|i| submission(&format!("p-{}", i % 7), ACCEPTED, i))
                .collect(),
        );
        let all = fetch_all_submissions(&history).await.unwrap();
        assert_eq!(all.len(), 250);
        assert!(fetch_all_submissions(&FakeHistory(vec![]))
            .await
            .unwrap()
            .is_empty());
    }

    #[test]
    fn aggregation() {
        let submissions = [
            submission("two-sum", ACCEPTED, 300),
            submission("two-sum", 11, 400),
            submission("two-sum", ACCEPTED, 100),
            submission("3sum", ACCEPTED, 200),
            submission("Two-Sum", ACCEPTED, 200),
        ];
        let accepted = aggregate_accepted(&submissions);
        assert_eq!(accepted.len(), 2);
        let two_sum = &accepted[&ProblemUrl::from_user_input("two-sum")];
        assert_eq!(two_sum.first_accepted, 100);
        assert_eq!(two_sum.last_accepted, 300);
        assert_eq!(two_sum.total_accepted, 3);
        assert_eq!(two_sum.languages.len(), 1);
    }

    #[test]
    fn counters_never_decrease() {
        let url = ProblemUrl::from_user_input("two-sum");
        let mut store = ProblemMap::new();
        let mut two_sum = Problem::builder()
            .url(url.clone())
            .title("Two Sum")
            .difficulty(Difficulty::Easy)
            .study_plan_urls(IndexSet::new())
            .build();
        for day in 1..=4 {
            two_sum.mark_completed(NaiveDate::from_ymd_opt(2024, 1, day).unwrap());
        }
        store.upsert(two_sum).unwrap();

        // 2024-03-01T23:30:00Z
        let submissions = [
            submission("two-sum", ACCEPTED, 1_709_335_800),
            submission("two-sum", ACCEPTED, 1_709_000_000),
            submission("outside", ACCEPTED, 1_709_000_000),
        ];
        let accepted = aggregate_accepted(&submissions);
        let report = apply_accepted(&mut store, &accepted, &Utc).unwrap();
        assert_eq!(report.updated, 1);
        assert_eq!(report.outside_plans, ["OUTSIDE"]);

        let two_sum = ProgressStore::get(&store, &url).unwrap().unwrap();
        assert_eq!(two_sum.completions(), 4);
        assert_eq!(two_sum.submissions(), 4);
        assert_eq!(
            two_sum.last_pass_date(),
            NaiveDate::from_ymd_opt(2024, 3, 1)
        );
        assert!(!store.contains_key(&ProblemUrl::from_user_input("outside")));
    }
}
