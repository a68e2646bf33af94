//! Comparison between the AI answer and the retrieved results.
//!
//! The statements are templated: they depend only on the query and on
//! which kinds of sites appear among the result sources.

use crate::types::{ComparisonSummary, SearchResult};

/// Number of leading results that contribute a highlight phrase.
const HIGHLIGHT_RESULTS: usize = 3;

/// Length of the fallback highlight when a title has no delimiter.
const HIGHLIGHT_FALLBACK_CHARS: usize = 20;

/// Source substring marking an encyclopedia entry.
const ENCYCLOPEDIA_MARKER: &str = "wiki";

/// Source substrings marking technical or code-hosting sites.
const TECHNICAL_MARKERS: &[&str] = &["github", "stackoverflow", "csdn", "juejin"];

const DIFFERENCES: [&str; 3] = [
    "AI回答更加简洁和直接",
    "搜索结果包含更多来源和参考链接",
    "搜索结果可能包含更新的时效性信息",
];

/// Build the comparison summary for `query` and its final result set.
pub fn analyze(query: &str, results: &[SearchResult]) -> ComparisonSummary {
    let mut similarities = Vec::new();

    if !results.is_empty() {
        similarities.push(format!("AI和搜索结果都认为\"{query}\"是一个重要的话题"));

        if results.iter().any(|r| r.source.contains(ENCYCLOPEDIA_MARKER)) {
            similarities.push("两者都提供了基础概念的解释".to_string());
        }
        let technical = results
            .iter()
            .any(|r| TECHNICAL_MARKERS.iter().any(|m| r.source.contains(m)));
        if technical {
            similarities.push("都涉及到了实际应用场景".to_string());
        }
    }

    ComparisonSummary {
        similarities,
        differences: DIFFERENCES.iter().map(|d| d.to_string()).collect(),
        highlighted_ai: vec![query.to_string()],
        highlighted_search: results
            .iter()
            .take(HIGHLIGHT_RESULTS)
            .map(|r| leading_clause(&r.title))
            .collect(),
    }
}

/// The part of `title` before the first `-`, `–` or `—`, trimmed.
///
/// Titles without a delimiter, or starting with one, yield their first
/// [`HIGHLIGHT_FALLBACK_CHARS`] characters instead.
fn leading_clause(title: &str) -> String {
    if let Some(idx) = title.find(['-', '–', '—']) {
        let clause = title[..idx].trim();
        if !clause.is_empty() {
            return clause.to_string();
        }
    }
    title.chars().take(HIGHLIGHT_FALLBACK_CHARS).collect()
}
