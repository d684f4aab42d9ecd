use derive_more::{AsRef, Display};
use leetcode_picker_utils::regex;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use url::Url;

/// The path segment that precedes a slug in every problem URL.
pub const PROBLEMS_SEGMENT: &str = "problems";

static LEETCODE_ORIGIN: Lazy<Url> =
    Lazy::new(|| Url::parse("https://leetcode.com/").expect("static url is valid"));

/// URL-safe short identifier of a problem, e.g. `two-sum`.
#[derive(
    Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Display, AsRef, Serialize, Deserialize,
)]
#[as_ref(forward)]
pub struct Slug(String);

impl Slug {
    /// Lowercases `s` and accepts it only if it looks like a slug.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim().to_ascii_lowercase();
        regex!(r"^[a-z0-9][a-z0-9-]*$")
            .is_match(&s)
            .then_some(Self(s))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Key of a problem in the store.
///
/// Values built by [`ProblemUrl::from_slug`] or [`ProblemUrl::canonicalize`] are always of the form
/// `https://leetcode.com/problems/<slug>/`. Values read back from disk or built by
/// [`ProblemUrl::unverified`] are kept as they are.
#[derive(
    Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Display, AsRef, Serialize, Deserialize,
)]
#[as_ref(forward)]
pub struct ProblemUrl(String);

impl ProblemUrl {
    pub fn from_slug(slug: &Slug) -> Self {
        Self(format!(
            "{}{PROBLEMS_SEGMENT}/{slug}/",
            LEETCODE_ORIGIN.as_str()
        ))
    }

    /// Collapses trailing slashes, query strings, fragments, host-relative paths and scheme
    /// differences into the canonical form.
    /// Returns `None` if there is no `problems/<slug>` pair in the path.
    pub fn canonicalize(raw: &str) -> Option<Self> {
        let url = LEETCODE_ORIGIN.join(raw.trim()).ok()?;
        let mut segments = url.path_segments()?;
        segments.find(|&segment| segment == PROBLEMS_SEGMENT)?;
        let slug = Slug::parse(segments.next()?)?;
        Some(Self::from_slug(&slug))
    }

    /// Normalized form for inputs that could not be canonicalized.
    /// It must not be treated as equivalent to a canonical URL.
    pub fn unverified(raw: &str) -> Self {
        Self(raw.trim().trim_end_matches('/').to_owned())
    }

    /// Accepts a URL in any spelling, or a bare slug.
    pub fn from_user_input(raw: &str) -> Self {
        Self::canonicalize(raw)
            .or_else(|| Slug::parse(raw).map(|slug| Self::from_slug(&slug)))
            .unwrap_or_else(|| Self::unverified(raw))
    }

    pub fn is_canonical(&self) -> bool {
        Self::canonicalize(&self.0).as_ref() == Some(self)
    }

    pub fn slug(&self) -> Option<Slug> {
        let url = Url::parse(&self.0).ok()?;
        let mut segments = url.path_segments()?;
        segments.find(|&segment| segment == PROBLEMS_SEGMENT)?;
        Slug::parse(segments.next()?)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ProblemUrl {
    fn from(s: String) -> Self {
        Self(s)
    }
}

#[cfg(test)]
mod tests {
    use super::{ProblemUrl, Slug};

    fn canonical(raw: &str) -> Option<String> {
        ProblemUrl::canonicalize(raw).map(|url| url.as_str().to_owned())
    }

    #[test]
    fn variants_collapse() {
        let expected = Some("https://leetcode.com/problems/two-sum/".to_owned());
        for raw in [
            "https://leetcode.com/problems/two-sum/",
            "https://leetcode.com/problems/two-sum",
            "http://leetcode.com/problems/two-sum/",
            "https://www.leetcode.com/problems/two-sum/description/",
            "https://leetcode.com/problems/two-sum/?envType=study-plan-v2&envId=leetcode-75",
            "https://leetcode.com/problems/Two-Sum#solution",
            "/problems/two-sum/",
            "problems/two-sum",
            "leetcode.com/problems/two-sum",
            "  https://leetcode.com/problems/two-sum/  ",
        ] {
            assert_eq!(canonical(raw), expected, "{raw:?}");
        }
    }

    #[test]
    fn marker_absent() {
        for raw in [
            "two-sum",
            "https://leetcode.com/studyplan/leetcode-75/",
            "https://leetcode.com/problems/",
            "https://leetcode.com/problemset/all/",
            "",
        ] {
            assert_eq!(canonical(raw), None, "{raw:?}");
        }
    }

    #[test]
    fn idempotent() {
        for slug in ["two-sum", "3sum", "01-matrix", "lru-cache", "string-to-integer-atoi"] {
            let once = ProblemUrl::from_slug(&Slug::parse(slug).unwrap());
            let twice = ProblemUrl::canonicalize(once.as_str()).unwrap();
            let thrice = ProblemUrl::canonicalize(twice.as_str()).unwrap();
            assert_eq!(once, twice);
            assert_eq!(twice, thrice);
            assert!(once.is_canonical());
            assert_eq!(once.slug().unwrap().as_str(), slug);
        }
    }

    #[test]
    fn user_input() {
        let expected = "https://leetcode.com/problems/valid-anagram/";
        assert_eq!(ProblemUrl::from_user_input("valid-anagram").as_str(), expected);
        assert_eq!(
            ProblemUrl::from_user_input("https://leetcode.com/problems/valid-anagram").as_str(),
            expected
        );
        let fallback = ProblemUrl::from_user_input("https://example.com/foo bar/");
        assert_eq!(fallback.as_str(), "https://example.com/foo bar");
        assert!(!fallback.is_canonical());
    }

    #[test]
    fn slug_validation() {
        assert_eq!(Slug::parse(" Two-Sum ").unwrap().as_str(), "two-sum");
        assert!(Slug::parse("").is_none());
        assert!(Slug::parse("-leading").is_none());
        assert!(Slug::parse("has space").is_none());
        assert!(Slug::parse("under_score").is_none());
    }
}
