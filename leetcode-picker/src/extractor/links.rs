//! Problem links in the raw page body.
//!
//! Only the slug is reliable here.
//! Titles are humanized from it and the difficulty is guessed from the surrounding text.

use itertools::Itertools;
use leetcode_picker_utils::regex;

use super::{Collector, ExtractedProblem, Provenance};
use crate::{problem::Difficulty, problem_url::Slug};

/// How far past a link a difficulty label may appear.
const DIFFICULTY_WINDOW: usize = 400;

const WORD_CORRECTIONS: &[(&str, &str)] = &[
    ("ii", "II"),
    ("iii", "III"),
    ("iv", "IV"),
    ("bst", "BST"),
    ("lru", "LRU"),
    ("atoi", "atoi"),
];

const TITLE_OVERRIDES: &[(&str, &str)] = &[("01-matrix", "01 Matrix"), ("3sum", "3Sum")];

pub fn extract(page: &str) -> Option<Vec<ExtractedProblem>> {
    let links = regex!(
        r#"(?i)(?:https?://(?:www\.)?leetcode\.com|href=["'])/problems/([a-z0-9][a-z0-9-]*)"#
    )
    .captures_iter(page)
    .filter_map(|captures| {
        let whole = captures.get(0)?;
        Some((whole.start(), whole.end(), Slug::parse(&captures[1])?))
    })
    .collect_vec();

    let mut collector = Collector::default();
    for (i, (_, end, slug)) in links.iter().enumerate() {
        let next_start = links.get(i + 1).map_or(page.len(), |&(start, _, _)| start);
        let difficulty = difficulty_near(page, *end, next_start);
        collector.push(ExtractedProblem::new(
            slug.clone(),
            humanize_slug(slug.as_str()),
            difficulty,
            Provenance::Derived,
        ));
    }
    collector.into_result()
}

/// The first difficulty label in `text[from..to]`, looking at most [`DIFFICULTY_WINDOW`] bytes ahead.
/// Defaults to medium.
pub fn difficulty_near(text: &str, from: usize, to: usize) -> Difficulty {
    let to = floor_char_boundary(text, to.min(from + DIFFICULTY_WINDOW));
    text.get(from..to)
        .and_then(|window| regex!(r"\b(Easy|Medium|Hard)\b").find(window))
        .and_then(|label| label.as_str().parse().ok())
        .unwrap_or(Difficulty::Medium)
}

fn floor_char_boundary(text: &str, mut index: usize) -> usize {
    index = index.min(text.len());
    while !text.is_char_boundary(index) {
        index -= 1;
    }
    index
}

/// `best-time-to-buy-and-sell-stock-ii` becomes `Best Time To Buy And Sell Stock II`.
pub fn humanize_slug(slug: &str) -> String {
    if let Some(&(_, title)) = TITLE_OVERRIDES.iter().find(|&&(s, _)| s == slug) {
        return title.to_owned();
    }
    slug.split(['-', '_'])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let lower = word.to_ascii_lowercase();
            WORD_CORRECTIONS
                .iter()
                .find(|&&(w, _)| w == lower)
                .map_or_else(|| capitalize(&lower), |&(_, fixed)| fixed.to_owned())
        })
        .join(" ")
}

/// Uppercases the first letter, which need not be the first character (`3sum` -> `3Sum`).
fn capitalize(word: &str) -> String {
    let mut done = false;
    word.chars()
        .map(|c| {
            if !done && c.is_alphabetic() {
                done = true;
                c.to_ascii_uppercase()
            } else {
                c
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{difficulty_near, extract, humanize_slug};
    use crate::problem::Difficulty;

    #[test]
    fn humanize() {
        assert_eq!(humanize_slug("two-sum"), "Two Sum");
        assert_eq!(humanize_slug("lru-cache"), "LRU Cache");
        assert_eq!(
            humanize_slug("best-time-to-buy-and-sell-stock-ii"),
            "Best Time To Buy And Sell Stock II"
        );
        assert_eq!(humanize_slug("string-to-integer-atoi"), "String To Integer atoi");
        assert_eq!(
            humanize_slug("lowest-common-ancestor-of-a-bst"),
            "Lowest Common Ancestor Of A BST"
        );
        assert_eq!(humanize_slug("01-matrix"), "01 Matrix");
        assert_eq!(humanize_slug("3sum"), "3Sum");
        assert_eq!(humanize_slug("4sum"), "4Sum");
    }

    #[test]
    fn difficulty_is_searched_up_to_the_next_link() {
        let text = "a <b>Hard</b> z";
        assert_eq!(difficulty_near(text, 0, text.len()), Difficulty::Hard);
        assert_eq!(difficulty_near(text, 0, 3), Difficulty::Medium);
        assert_eq!(difficulty_near("Hardly easy", 0, 11), Difficulty::Medium);
        assert_eq!(difficulty_near("ééé Easy", 0, 3), Difficulty::Medium);
    }

    #[test]
    fn absolute_and_relative_links() {
        let page = r#"
            <a href="https://leetcode.com/problems/two-sum/description/">Two Sum</a> Easy
            <a href='/problems/lru-cache'>LRU Cache</a>
            <a href="https://www.leetcode.com/problems/two-sum/">again</a> Hard
            <a href="/problemset/all/">all</a>
        "#;
        let problems = extract(page).unwrap();
        assert_eq!(problems.len(), 2);
        assert_eq!(problems[0].difficulty(), Difficulty::Easy);
        assert_eq!(problems[1].slug().as_str(), "lru-cache");
        assert_eq!(problems[1].difficulty(), Difficulty::Medium);
        assert!(extract("<p>no links</p>").is_none());
    }
}
