//! Slug/title/difficulty triples embedded in inline scripts.

use leetcode_picker_utils::{regex, selector};
use log::trace;
use regex::Captures;
use scraper::Html;

use super::{Collector, ExtractedProblem, Provenance};
use crate::{problem::Difficulty, problem_url::Slug};

pub fn extract(page: &str) -> Option<Vec<ExtractedProblem>> {
    let html = Html::parse_document(page);
    let mut collector = Collector::default();
    for script in html.select(selector!("script")) {
        let text = script.text().collect::<String>();
        if !text.contains("titleSlug") {
            continue;
        }
        // Plain JSON first; streamed framework payloads carry the same JSON inside a string.
        // Each gap stays inside one object so a triple never borrows from its neighbour.
        let plain = regex!(
            r#""titleSlug"\s*:\s*"([^"]+)"[^{}]*?"title"\s*:\s*"((?:[^"\\]|\\.)*)"[^{}]*?"difficulty"\s*:\s*"([A-Za-z]+)""#
        );
        let escaped = regex!(
            r#"\\"titleSlug\\"\s*:\s*\\"([^"\\]+)\\"[^{}]*?\\"title\\"\s*:\s*\\"((?:[^"\\]|\\\\\\.|\\\\[^"\\])*)\\"[^{}]*?\\"difficulty\\"\s*:\s*\\"([A-Za-z]+)\\""#
        );
        let before = collector.len();
        for captures in plain.captures_iter(&text) {
            push_triple(&mut collector, &captures, 1);
        }
        if collector.len() == before {
            for captures in escaped.captures_iter(&text) {
                push_triple(&mut collector, &captures, 2);
            }
        }
    }
    collector.into_result()
}

/// `depth` is how many layers of string escaping wrap the title.
fn push_triple(collector: &mut Collector, captures: &Captures, depth: usize) {
    let (slug, title, difficulty) = (&captures[1], &captures[2], &captures[3]);
    let (Some(slug), Ok(difficulty)) = (Slug::parse(slug), difficulty.parse::<Difficulty>()) else {
        trace!("Skipping malformed triple {slug:?} / {difficulty:?}");
        return;
    };
    collector.push(ExtractedProblem::new(
        slug,
        (0..depth).fold(title.to_owned(), |title, _| unescape(&title)),
        difficulty,
        Provenance::Payload,
    ));
}

/// Resolves JSON string escapes such as `\"`; returns the input if it is not a valid body.
fn unescape(raw: &str) -> String {
    serde_json::from_str(&format!("\"{raw}\"")).unwrap_or_else(|_| raw.to_owned())
}

#[cfg(test)]
mod tests {
    use super::extract;
    use crate::problem::Difficulty;

    #[test]
    fn plain_json() {
        let page = r#"<html><body>
            <script>var x = 1;</script>
            <script id="__NEXT_DATA__" type="application/json">{"props":{"studyPlan":{"groups":[
                {"questions":[
                    {"titleSlug":"merge-strings-alternately","title":"Merge Strings Alternately","difficulty":"EASY"},
                    {"titleSlug":"reverse-words-in-a-string","title":"Reverse Words in a String","difficulty":"MEDIUM"},
                    {"titleSlug":"trapping-rain-water","title":"Trapping \"Rain\" Water !","difficulty":"HARD"}
                ]}
            ]}}}</script>
        </body></html>"#;
        let problems = extract(page).unwrap();
        let slugs = problems.iter().map(|p| p.slug().as_str()).collect::<Vec<_>>();
        assert_eq!(
            slugs,
            [
                "merge-strings-alternately",
                "reverse-words-in-a-string",
                "trapping-rain-water"
            ]
        );
        assert_eq!(problems[0].difficulty(), Difficulty::Easy);
        assert_eq!(problems[2].title(), "Trapping \"Rain\" Water !");
        assert_eq!(problems[2].difficulty(), Difficulty::Hard);
    }

    #[test]
    fn escaped_stream() {
        let page = r#"<script>self.__next_f.push([1,"{\"titleSlug\":\"two-sum\",\"title\":\"Two Sum\",\"difficulty\":\"Easy\"},{\"titleSlug\":\"3sum\",\"title\":\"3Sum\",\"difficulty\":\"Medium\"}"])</script>"#;
        let problems = extract(page).unwrap();
        assert_eq!(problems.len(), 2);
        assert_eq!(problems[1].title(), "3Sum");
        assert_eq!(problems[1].difficulty(), Difficulty::Medium);
    }

    #[test]
    fn escaped_title_stays_with_its_slug() {
        let page = r#"<script>self.__next_f.push([1,"{\"titleSlug\":\"a-one\",\"title\":\"Say \\\"Hi\\\"\",\"difficulty\":\"Easy\"},{\"titleSlug\":\"b-two\",\"title\":\"B Two\",\"difficulty\":\"Hard\"}"])</script>"#;
        let problems = extract(page).unwrap();
        let triples = problems
            .iter()
            .map(|p| (p.slug().as_str(), p.title().as_str(), p.difficulty()))
            .collect::<Vec<_>>();
        assert_eq!(
            triples,
            [
                ("a-one", "Say \"Hi\"", Difficulty::Easy),
                ("b-two", "B Two", Difficulty::Hard)
            ]
        );
    }

    #[test]
    fn object_without_title_does_not_borrow_the_next_one() {
        let page = r#"<script>[
            {"titleSlug":"no-title","difficulty":"Easy"},
            {"titleSlug":"valid-anagram","title":"Valid Anagram","difficulty":"Easy"}
        ]</script>"#;
        let problems = extract(page).unwrap();
        assert_eq!(problems.len(), 1);
        assert_eq!(problems[0].slug().as_str(), "valid-anagram");
        assert_eq!(problems[0].title(), "Valid Anagram");
    }

    #[test]
    fn malformed_triples_are_skipped() {
        let page = r#"<script>[
            {"titleSlug":"two-sum","title":"Two Sum","difficulty":"Unknown"},
            {"titleSlug":"valid-anagram","title":"Valid Anagram","difficulty":"Easy"}
        ]</script>"#;
        let problems = extract(page).unwrap();
        assert_eq!(problems.len(), 1);
        assert_eq!(problems[0].slug().as_str(), "valid-anagram");
    }

    #[test]
    fn nothing_found() {
        assert!(extract("<html><script>{}</script><p>titleSlug</p></html>").is_none());
    }
}
