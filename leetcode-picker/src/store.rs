//! Persistence of [`Problem`]s.
//!
//! The on-disk format is a CSV file with the header
//! `url,title,difficulty,study_plan_urls,last_pass_date,completions,submissions,overridden_difficulty`.
//! `study_plan_urls` holds a JSON array.
//! Files written by older versions, which had a single `study_plan_url` column, are still readable.

use std::{
    io::{self, BufReader, BufWriter},
    path::{Path, PathBuf},
};

use anyhow::Context;
use chrono::NaiveDate;
use fs_err::File;
use indexmap::IndexSet;
use leetcode_picker_utils::fs_json_util::create_parent_dir;
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::{
    problem::{Difficulty, Problem, ProblemMap},
    problem_url::ProblemUrl,
};

/// Whole-record persistence keyed by problem URL.
pub trait ProgressStore {
    fn load_all(&self) -> anyhow::Result<ProblemMap>;

    fn get(&self, url: &ProblemUrl) -> anyhow::Result<Option<Problem>> {
        Ok(self.load_all()?.swap_remove(url))
    }

    fn upsert(&mut self, problem: Problem) -> anyhow::Result<()> {
        self.upsert_all(vec![problem])
    }

    /// Replaces or appends every given record. Unmentioned records are left as they are.
    fn upsert_all(&mut self, problems: Vec<Problem>) -> anyhow::Result<()>;
}

/// An in-memory store.
impl ProgressStore for ProblemMap {
    fn load_all(&self) -> anyhow::Result<ProblemMap> {
        Ok(self.clone())
    }

    fn get(&self, url: &ProblemUrl) -> anyhow::Result<Option<Problem>> {
        Ok(ProblemMap::get(self, url).cloned())
    }

    fn upsert_all(&mut self, problems: Vec<Problem>) -> anyhow::Result<()> {
        for problem in problems {
            self.insert(problem.url().clone(), problem);
        }
        Ok(())
    }
}

pub struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save_all(&self, problems: &ProblemMap) -> anyhow::Result<()> {
        create_parent_dir(&self.path)?;
        let tmp_path = self.path.with_extension("csv.tmp");
        {
            let mut writer = csv::Writer::from_writer(BufWriter::new(File::create(&tmp_path)?));
            for problem in problems.values() {
                writer.serialize(Row::from(problem))?;
            }
            if problems.is_empty() {
                writer.write_record(Row::HEADER)?;
            }
            writer.flush()?;
        }
        fs_err::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}

impl ProgressStore for CsvStore {
    fn load_all(&self) -> anyhow::Result<ProblemMap> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!("{:?} was not found. Starting with an empty store.", self.path);
                return Ok(ProblemMap::new());
            }
            Err(e) => return Err(e.into()),
        };
        let mut reader = csv::Reader::from_reader(BufReader::new(file));
        let mut problems = ProblemMap::new();
        for (i, row) in reader.deserialize::<StoredRow>().enumerate() {
            let row = row.with_context(|| format!("While reading row {} of {:?}", i + 1, self.path))?;
            let mut problem = row.into_problem();
            if problem.repair_counters() {
                warn!(
                    "{}: submissions was below completions; raised to {}",
                    problem.url(),
                    problem.submissions()
                );
            }
            problems.insert(problem.url().clone(), problem);
        }
        Ok(problems)
    }

    fn upsert_all(&mut self, problems: Vec<Problem>) -> anyhow::Result<()> {
        let mut all = self.load_all()?;
        for problem in problems {
            all.insert(problem.url().clone(), problem);
        }
        self.save_all(&all)
    }
}

#[derive(Serialize)]
struct Row<'a> {
    url: &'a str,
    title: &'a str,
    difficulty: Difficulty,
    study_plan_urls: String,
    last_pass_date: Option<NaiveDate>,
    completions: u32,
    submissions: u32,
    overridden_difficulty: Option<Difficulty>,
}

impl Row<'_> {
    const HEADER: [&'static str; 8] = [
        "url",
        "title",
        "difficulty",
        "study_plan_urls",
        "last_pass_date",
        "completions",
        "submissions",
        "overridden_difficulty",
    ];
}

impl<'a> From<&'a Problem> for Row<'a> {
    fn from(problem: &'a Problem) -> Self {
        Self {
            url: problem.url().as_str(),
            title: problem.title(),
            difficulty: problem.difficulty(),
            study_plan_urls: serde_json::to_string(problem.study_plan_urls())
                .unwrap_or_else(|_| "[]".to_owned()),
            last_pass_date: problem.last_pass_date(),
            completions: problem.completions(),
            submissions: problem.submissions(),
            overridden_difficulty: problem.overridden_difficulty(),
        }
    }
}

#[derive(Deserialize)]
struct StoredRow {
    url: String,
    title: String,
    difficulty: Difficulty,
    #[serde(default)]
    study_plan_urls: Option<String>,
    /// Column of older files.
    #[serde(default)]
    study_plan_url: Option<String>,
    #[serde(default)]
    last_pass_date: Option<NaiveDate>,
    #[serde(default)]
    completions: Option<u32>,
    #[serde(default)]
    submissions: Option<u32>,
    #[serde(default)]
    overridden_difficulty: Option<Difficulty>,
}

/// Plan membership as found on disk.
#[derive(Debug, PartialEq, Eq)]
enum Membership {
    List(Vec<String>),
    Single(String),
}

impl Membership {
    fn decode(list: Option<&str>, single: Option<&str>) -> Self {
        let list = list.map(str::trim).filter(|s| !s.is_empty());
        let single = single.map(str::trim).filter(|s| !s.is_empty());
        match (list, single) {
            (Some(list), _) if list.starts_with('[') => match serde_json::from_str(list) {
                Ok(urls) => Self::List(urls),
                Err(e) => {
                    warn!("Could not parse plan list {list:?}: {e}");
                    Self::List(vec![])
                }
            },
            (Some(value), _) | (None, Some(value)) => Self::Single(value.to_owned()),
            (None, None) => Self::List(vec![]),
        }
    }

    fn into_set(self) -> IndexSet<String> {
        match self {
            Self::List(urls) => urls.into_iter().collect(),
            Self::Single(url) => IndexSet::from([url]),
        }
    }
}

impl StoredRow {
    fn into_problem(self) -> Problem {
        let memberships =
            Membership::decode(self.study_plan_urls.as_deref(), self.study_plan_url.as_deref());
        Problem::builder()
            .url(ProblemUrl::from(self.url))
            .title(self.title)
            .difficulty(self.difficulty)
            .study_plan_urls(memberships.into_set())
            .last_pass_date(self.last_pass_date)
            .completions(self.completions.unwrap_or_default())
            .submissions(self.submissions.unwrap_or_default())
            .overridden_difficulty(self.overridden_difficulty)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use indexmap::IndexSet;

    use super::{CsvStore, Membership, ProgressStore};
    use crate::{
        problem::{Difficulty, Problem},
        problem_url::ProblemUrl,
    };

    const LC75: &str = "https://leetcode.com/studyplan/leetcode-75/";
    const GRIND: &str = "https://www.techinterviewhandbook.org/grind75/";

    fn problem(slug: &str, plans: &[&str]) -> Problem {
        Problem::builder()
            .url(ProblemUrl::from_user_input(slug))
            .title(slug.to_uppercase())
            .difficulty(Difficulty::Medium)
            .study_plan_urls(plans.iter().map(|s| s.to_string()).collect::<IndexSet<_>>())
            .build()
    }

    #[test]
    fn missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = CsvStore::new(dir.path().join("nested/problems.csv"));
        assert!(store.load_all().unwrap().is_empty());
    }

    #[test]
    fn upsert_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = CsvStore::new(dir.path().join("nested/problems.csv"));

        let mut two_sum = problem("two-sum", &[LC75, GRIND]);
        two_sum.mark_completed(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        two_sum.override_difficulty(Difficulty::Hard);
        store.upsert(two_sum.clone()).unwrap();
        store.upsert(problem("3sum", &[])).unwrap();
        store.upsert(problem("lru-cache", &[GRIND])).unwrap();

        let mut renamed = problem("3sum", &[GRIND]);
        renamed.record_failed_attempt();
        store.upsert(renamed.clone()).unwrap();

        let loaded = CsvStore::new(store.path()).load_all().unwrap();
        let keys = loaded.keys().map(|k| k.as_str()).collect::<Vec<_>>();
        assert_eq!(
            keys,
            [
                "https://leetcode.com/problems/two-sum/",
                "https://leetcode.com/problems/3sum/",
                "https://leetcode.com/problems/lru-cache/",
            ]
        );
        assert_eq!(loaded[0], two_sum);
        assert_eq!(loaded[1], renamed);
        assert_eq!(
            store.get(two_sum.url()).unwrap().unwrap().effective_difficulty(),
            Difficulty::Hard
        );
        assert!(!dir.path().join("nested/problems.csv.tmp").exists());
    }

    #[test]
    fn legacy_single_column() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("problems.csv");
        fs_err::write(
            &path,
            "url,title,difficulty,study_plan_url,last_pass_date,completions,submissions,overridden_difficulty\n\
             https://leetcode.com/problems/two-sum/,Two Sum,easy,https://leetcode.com/studyplan/leetcode-75/,2024-01-05,2,1,\n\
             https://leetcode.com/problems/3sum/,3Sum,Medium,,,,,hard\n",
        )
        .unwrap();
        let loaded = CsvStore::new(&path).load_all().unwrap();
        let two_sum = &loaded[0];
        assert!(two_sum.is_member_of(LC75));
        assert_eq!(two_sum.completions(), 2);
        // repaired on load
        assert_eq!(two_sum.submissions(), 2);
        let three_sum = &loaded[1];
        assert!(three_sum.study_plan_urls().is_empty());
        assert_eq!(three_sum.last_pass_date(), None);
        assert_eq!(three_sum.effective_difficulty(), Difficulty::Hard);
    }

    #[test]
    fn membership_decoding() {
        assert_eq!(
            Membership::decode(Some(r#"["a","b"]"#), None),
            Membership::List(vec!["a".to_owned(), "b".to_owned()])
        );
        assert_eq!(
            Membership::decode(None, Some("a")),
            Membership::Single("a".to_owned())
        );
        assert_eq!(
            Membership::decode(Some("a"), None),
            Membership::Single("a".to_owned())
        );
        assert_eq!(Membership::decode(Some(""), Some(" ")), Membership::List(vec![]));
    }

    #[test]
    fn bad_row_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("problems.csv");
        fs_err::write(&path, "url,title,difficulty\nhttps://x/,X,impossible\n").unwrap();
        assert!(CsvStore::new(&path).load_all().is_err());
    }
}
