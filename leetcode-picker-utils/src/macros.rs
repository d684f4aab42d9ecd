/// Compiles a CSS selector once and hands out a `&'static Selector`.
#[macro_export]
macro_rules! selector {
    ($e: expr) => {{
        use ::once_cell::sync::Lazy;
        use ::scraper::Selector;
        static SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse($e).unwrap());
        &*SELECTOR
    }};
}

/// Compiles a regex once and hands out a `&'static Regex`.
#[macro_export]
macro_rules! regex {
    ($e: expr) => {{
        use ::once_cell::sync::Lazy;
        use ::regex::Regex;
        static PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new($e).unwrap());
        &*PATTERN
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn regex_is_reused() {
        let slug = |s: &str| {
            regex!(r"/problems/([a-z0-9-]+)")
                .captures(s)
                .map(|c| c[1].to_owned())
        };
        assert_eq!(slug("/problems/two-sum/"), Some("two-sum".to_owned()));
        assert_eq!(slug("/studyplan/leetcode-75/"), None);
    }

    #[test]
    fn selector_matches_scripts() {
        let html = scraper::Html::parse_document(
            r#"<html><body><script src="/a.js"></script><script>var x;</script></body></html>"#,
        );
        assert_eq!(html.select(selector!("script[src]")).count(), 1);
        assert_eq!(html.select(selector!("script")).count(), 2);
    }
}
