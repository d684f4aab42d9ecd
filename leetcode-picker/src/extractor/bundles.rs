//! Script bundles referenced by a client-rendered page.

use itertools::Itertools;
use leetcode_picker_utils::{regex, selector};
use log::{debug, warn};
use regex::Regex;
use scraper::Html;
use url::Url;

use super::{
    links::{difficulty_near, humanize_slug},
    Collector, ExtractedProblem, Provenance,
};
use crate::{api::PageSource, problem_url::Slug, study_plan::StudyPlan};

pub async fn extract<S: PageSource>(
    source: &S,
    plan: &StudyPlan,
    page: &str,
) -> Option<Vec<ExtractedProblem>> {
    let mut collector = Collector::default();
    for asset in script_assets(plan, page) {
        if collector.len() >= plan.expected_count {
            debug!("Reached {} problems, skipping remaining bundles", collector.len());
            break;
        }
        let body = match source.fetch_text(&asset).await {
            Ok(body) => body,
            Err(e) => {
                warn!("Skipping bundle {asset}: {e:#}");
                continue;
            }
        };
        let before = collector.len();
        collect_slugs(&body, &mut collector);
        debug!("{asset}: {} new problems", collector.len() - before);
    }
    collector.into_result()
}

/// Script URLs referenced by `page`, most promising first.
fn script_assets(plan: &StudyPlan, page: &str) -> Vec<Url> {
    let html = Html::parse_document(page);
    let mut assets = html
        .select(selector!("script[src]"))
        .filter_map(|script| script.value().attr("src"))
        .filter_map(|src| plan.fetch_url.join(src).ok())
        .unique()
        .collect_vec();
    let plan_slug = plan.slug();
    assets.sort_by_key(|asset| {
        let path = asset.path();
        if !plan_slug.is_empty() && path.contains(plan_slug) {
            0
        } else if path.contains("/pages/") || path.contains("/app/") {
            1
        } else {
            2
        }
    });
    assets
}

/// Adds every problem URL spelled in `body`, in order of appearance.
fn collect_slugs(body: &str, collector: &mut Collector) {
    let patterns: [&Regex; 3] = [
        regex!(r"https?://(?:www\.)?leetcode\.com/problems/([a-z0-9][a-z0-9-]*)"),
        regex!(r"https?:\\/\\/(?:www\.)?leetcode\.com\\/problems\\/([a-z0-9][a-z0-9-]*)"),
        regex!(r#"["'](?:\\?/)problems(?:\\?/)([a-z0-9][a-z0-9-]*)(?:\\?/)?["']"#),
    ];
    let matches = patterns
        .into_iter()
        .flat_map(|pattern| {
            pattern.captures_iter(body).filter_map(|captures| {
                let slug = captures.get(1)?;
                Some((slug.start(), slug.end(), slug.as_str()))
            })
        })
        .sorted_by_key(|&(start, _, _)| start)
        .collect_vec();

    for (i, &(_, end, slug)) in matches.iter().enumerate() {
        let Some(slug) = Slug::parse(slug) else {
            continue;
        };
        let next_start = matches.get(i + 1).map_or(body.len(), |&(start, _, _)| start);
        collector.push(ExtractedProblem::new(
            slug.clone(),
            humanize_slug(slug.as_str()),
            difficulty_near(body, end, next_start),
            Provenance::Derived,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::{collect_slugs, script_assets};
    use crate::{
        extractor::Collector,
        problem::Difficulty,
        study_plan::StudyPlanId,
    };

    #[test]
    fn assets_are_prioritized() {
        let plan = StudyPlanId::Grind75.plan();
        let page = r#"
            <script src="https://cdn.example.com/analytics.js"></script>
            <script src="/_next/static/chunks/pages/_app-1.js"></script>
            <script>inline()</script>
            <script src="/_next/static/chunks/pages/grind75-2.js"></script>
            <script src="/_next/static/chunks/pages/_app-1.js"></script>
        "#;
        let assets = script_assets(plan, page)
            .into_iter()
            .map(String::from)
            .collect::<Vec<_>>();
        assert_eq!(
            assets,
            [
                "https://www.techinterviewhandbook.org/_next/static/chunks/pages/grind75-2.js",
                "https://www.techinterviewhandbook.org/_next/static/chunks/pages/_app-1.js",
                "https://cdn.example.com/analytics.js",
            ]
        );
    }

    #[test]
    fn all_spellings_in_file_order() {
        let body = r#"
            a={slug:"x",url:"https:\/\/leetcode.com\/problems\/two-sum\/",difficulty:"Easy"};
            b={href:"/problems/valid-parentheses/"};
            c="https://leetcode.com/problems/merge-two-sorted-lists/ Hard";
            d='https://leetcode.com/problems/two-sum';
        "#;
        let mut collector = Collector::default();
        collect_slugs(body, &mut collector);
        let problems = collector.into_result().unwrap();
        let slugs = problems.iter().map(|p| p.slug().as_str()).collect::<Vec<_>>();
        assert_eq!(
            slugs,
            ["two-sum", "valid-parentheses", "merge-two-sorted-lists"]
        );
        assert_eq!(problems[0].difficulty(), Difficulty::Easy);
        assert_eq!(problems[1].difficulty(), Difficulty::Medium);
        assert_eq!(problems[2].difficulty(), Difficulty::Hard);
    }
}
