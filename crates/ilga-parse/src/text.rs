use scraper::{ElementRef, Selector};

pub fn select_all_text(root: &ElementRef<'_>, selector: &Selector) -> Vec<String> {
    root.select(selector)
        .map(|el| normalize_whitespace(&el.text().collect::<String>()))
        .collect()
}

pub fn select_first_text(root: &ElementRef<'_>, selector: &Selector) -> Option<String> {
    root.select(selector)
        .next()
        .map(|el| normalize_whitespace(&el.text().collect::<String>()))
        .filter(|s| !s.is_empty())
}

pub fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ").trim().to_string()
}

pub fn sel(css: &str) -> Selector {
    Selector::parse(css).unwrap_or_else(|_| Selector::parse("*").expect("universal selector parses"))
}
