//! Selector-driven result extraction shared by every provider.
//!
//! Each provider describes its result markup as an [`ExtractionProfile`]:
//! CSS selectors for the result block, title link, snippet and displayed
//! URL, plus a link resolver and a fallback source label. A single
//! extractor applies any profile to a parsed document, so provider
//! differences live in data rather than in parsing code.

use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::error::SearchError;
use crate::types::{SearchResult, MAX_SNIPPET_CHARS, MAX_TITLE_CHARS};

/// Markup description for one provider's result page.
#[derive(Clone, Copy)]
pub struct ExtractionProfile {
    /// Provider name, for logging.
    pub provider: &'static str,
    /// Selector matching one organic result block.
    pub result: &'static str,
    /// Selector (inside a block) for the title anchor carrying the `href`.
    pub title_link: &'static str,
    /// Selector (inside a block) for the snippet text.
    pub snippet: &'static str,
    /// Selector (inside a block) for a displayed URL or host label.
    pub display_url: Option<&'static str>,
    /// Turns a raw `href` into an absolute URL, or `None` to drop the block.
    pub resolve_url: fn(&str) -> Option<String>,
    /// Source label used when neither a display label nor a host is available.
    pub fallback_source: &'static str,
}

struct CompiledProfile {
    result: Selector,
    title_link: Selector,
    snippet: Selector,
    display_url: Option<Selector>,
}

fn compile(selector: &str, what: &str) -> Result<Selector, SearchError> {
    Selector::parse(selector)
        .map_err(|e| SearchError::Parse(format!("invalid {what} selector: {e:?}")))
}

impl ExtractionProfile {
    fn compile(&self) -> Result<CompiledProfile, SearchError> {
        Ok(CompiledProfile {
            result: compile(self.result, "result")?,
            title_link: compile(self.title_link, "title")?,
            snippet: compile(self.snippet, "snippet")?,
            display_url: self
                .display_url
                .map(|sel| compile(sel, "display URL"))
                .transpose()?,
        })
    }
}

/// Extract results from the first `max_results` result blocks of `html`.
///
/// Blocks without a title or a resolvable URL are skipped; the remaining
/// blocks keep page order. Only the leading blocks are examined, so a page
/// with malformed blocks near the top yields fewer than `max_results`.
///
/// # Errors
///
/// Returns [`SearchError::Parse`] if a profile selector does not compile.
pub fn extract_results(
    html: &str,
    profile: &ExtractionProfile,
    max_results: usize,
) -> Result<Vec<SearchResult>, SearchError> {
    let selectors = profile.compile()?;
    let document = Html::parse_document(html);

    let mut results = Vec::new();
    let mut skipped = 0usize;

    // Skipped blocks still count toward the limit.
    for block in document.select(&selectors.result).take(max_results) {
        match extract_one(block, &selectors, profile) {
            Some(result) => results.push(result),
            None => skipped += 1,
        }
    }

    tracing::debug!(
        provider = profile.provider,
        count = results.len(),
        skipped,
        "results parsed"
    );
    Ok(results)
}

fn extract_one(
    block: ElementRef<'_>,
    selectors: &CompiledProfile,
    profile: &ExtractionProfile,
) -> Option<SearchResult> {
    let title_el = block.select(&selectors.title_link).next()?;

    let title = clean_text(&element_text(title_el));
    if title.is_empty() {
        return None;
    }

    let href = title_el.value().attr("href")?.trim();
    if href.is_empty() {
        return None;
    }
    let url = (profile.resolve_url)(href)?;

    let snippet = block
        .select(&selectors.snippet)
        .next()
        .map(|el| clean_text(&element_text(el)))
        .unwrap_or_default();

    let display = selectors
        .display_url
        .as_ref()
        .and_then(|sel| block.select(sel).next())
        .map(|el| clean_text(&element_text(el)));

    Some(SearchResult {
        title: truncate_chars(&title, MAX_TITLE_CHARS),
        source: derive_source(display.as_deref(), &url, profile.fallback_source),
        url,
        snippet: truncate_chars(&snippet, MAX_SNIPPET_CHARS),
    })
}

fn element_text(el: ElementRef<'_>) -> String {
    el.text().collect::<String>()
}

/// Trim surrounding whitespace and collapse inner whitespace runs.
pub fn clean_text(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Keep at most `max_chars` characters of `text`. Never pads.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}

/// Choose a short origin label for a result.
///
/// Prefers the provider's displayed URL label, then the URL's host, then
/// `fallback`. Scheme, path and a leading `www.` are removed from labels.
pub fn derive_source(display: Option<&str>, url: &str, fallback: &str) -> String {
    if let Some(label) = display.and_then(display_label) {
        return label;
    }
    if let Some(host) = host_label(url) {
        return host;
    }
    fallback.to_string()
}

fn display_label(display: &str) -> Option<String> {
    let display = display.trim();
    let without_scheme = display
        .strip_prefix("https://")
        .or_else(|| display.strip_prefix("http://"))
        .unwrap_or(display);
    let head = without_scheme
        .split(['/', ' ', '›'])
        .next()
        .unwrap_or_default()
        .trim();
    let head = head.strip_prefix("www.").unwrap_or(head);
    (!head.is_empty()).then(|| head.to_string())
}

/// Hostname of `url` without a leading `www.`, if it parses.
pub fn host_label(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let host = parsed.host_str()?;
    let host = host.strip_prefix("www.").unwrap_or(host);
    (!host.is_empty()).then(|| host.to_string())
}
