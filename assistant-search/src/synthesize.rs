//! Offline result synthesis for when every live provider comes back empty.
//!
//! Results are built from fixed templates pointing at well-known sites.
//! Keyword categories are checked in priority order (programming, image
//! processing, AI) and a generic category is always appended. The output
//! is deduplicated by `source`, first occurrence winning, and capped at
//! [`MAX_SYNTHESIZED_RESULTS`]. The same query always produces the same
//! results.

use std::collections::HashSet;

use crate::types::SearchResult;

/// Upper bound on synthesized results.
pub const MAX_SYNTHESIZED_RESULTS: usize = 8;

/// A templated result. `{query}` in `title` and `snippet` is replaced with
/// the raw query; in `url` it is replaced with the percent-encoded query.
struct Template {
    title: &'static str,
    url: &'static str,
    snippet: &'static str,
    source: &'static str,
}

/// A keyword-triggered group of templates.
struct Category {
    name: &'static str,
    /// Lowercase substrings; any match against the lowercased query triggers.
    /// An empty list always triggers.
    keywords: &'static [&'static str],
    templates: &'static [Template],
}

impl Category {
    fn matches(&self, query_lower: &str) -> bool {
        self.keywords.is_empty() || self.keywords.iter().any(|kw| query_lower.contains(kw))
    }
}

static CATEGORIES: &[Category] = &[
    Category {
        name: "programming",
        keywords: &["python", "javascript", "java", "代码", "编程"],
        templates: &[
            Template {
                title: "{query} - 菜鸟教程",
                url: "https://www.runoob.com/search?q={query}",
                snippet: "{query}的详细教程和示例代码，适合初学者和进阶开发者学习参考。",
                source: "runoob.com",
            },
            Template {
                title: "{query} - Stack Overflow",
                url: "https://stackoverflow.com/search?q={query}",
                snippet: "开发者社区关于{query}的问答和解决方案，包含大量实用代码示例。",
                source: "stackoverflow.com",
            },
            Template {
                title: "{query} - GitHub",
                url: "https://github.com/search?q={query}",
                snippet: "GitHub上与{query}相关的开源项目、代码仓库和技术资源。",
                source: "github.com",
            },
        ],
    },
    Category {
        name: "image",
        keywords: &["图片", "png", "jpg", "转换", "image"],
        templates: &[
            Template {
                title: "Python图像处理 - Pillow库官方文档",
                url: "https://pillow.readthedocs.io/en/stable/",
                snippet: "Pillow是Python最流行的图像处理库，支持图片格式转换、裁剪、滤镜等操作。",
                source: "pillow.readthedocs.io",
            },
            Template {
                title: "图片格式转换教程 - 知乎",
                url: "https://www.zhihu.com/search?type=content&q={query}",
                snippet: "关于{query}的详细教程和最佳实践，包含多种实现方式和工具推荐。",
                source: "zhihu.com",
            },
        ],
    },
    Category {
        name: "ai",
        keywords: &["ai", "人工智能", "机器学习", "深度学习"],
        templates: &[
            Template {
                title: "{query} - 机器之心",
                url: "https://www.jiqizhixin.com/search?q={query}",
                snippet: "AI领域专业资讯，包含{query}的最新研究进展、应用案例和技术解析。",
                source: "jiqizhixin.com",
            },
            Template {
                title: "{query} - Towards Data Science",
                url: "https://towardsdatascience.com/search?q={query}",
                snippet: "数据科学和机器学习领域的专业文章，深入讲解{query}的原理和实践。",
                source: "towardsdatascience.com",
            },
        ],
    },
    Category {
        name: "generic",
        keywords: &[],
        templates: &[
            Template {
                title: "{query} - 维基百科",
                url: "https://zh.wikipedia.org/wiki/{query}",
                snippet: "{query}的百科全书式介绍，包含定义、历史、分类和相关概念。",
                source: "wikipedia.org",
            },
            Template {
                title: "{query} - 知乎专栏",
                url: "https://www.zhihu.com/search?type=content&q={query}",
                snippet: "知乎用户对{query}的深度讨论和专业回答，涵盖多角度观点。",
                source: "zhihu.com",
            },
            Template {
                title: "{query} - 掘金",
                url: "https://juejin.cn/search?query={query}",
                snippet: "技术社区关于{query}的优质文章和开发经验分享。",
                source: "juejin.cn",
            },
            Template {
                title: "{query} - CSDN",
                url: "https://so.csdn.net/so/search?q={query}",
                snippet: "CSDN技术博客中关于{query}的教程、笔记和问题解答。",
                source: "csdn.net",
            },
            Template {
                title: "{query} - 博客园",
                url: "https://www.cnblogs.com/search?q={query}",
                snippet: "博客园开发者分享的{query}相关技术文章和学习笔记。",
                source: "cnblogs.com",
            },
        ],
    },
];

impl Template {
    fn render(&self, query: &str, encoded: &str) -> SearchResult {
        SearchResult {
            title: self.title.replace("{query}", query),
            url: self.url.replace("{query}", encoded),
            snippet: self.snippet.replace("{query}", query),
            source: self.source.to_string(),
        }
    }
}

/// Generate plausible results for `query` without touching the network.
///
/// Pure and deterministic. Returns between 1 and
/// [`MAX_SYNTHESIZED_RESULTS`] results, one per distinct `source`.
pub fn synthesize(query: &str) -> Vec<SearchResult> {
    let query_lower = query.to_lowercase();
    let encoded = urlencoding::encode(query);

    let mut seen_sources: HashSet<&'static str> = HashSet::new();
    let mut results = Vec::with_capacity(MAX_SYNTHESIZED_RESULTS);

    'categories: for category in CATEGORIES.iter().filter(|c| c.matches(&query_lower)) {
        tracing::trace!(category = category.name, "synthesis category matched");
        for template in category.templates {
            if !seen_sources.insert(template.source) {
                continue;
            }
            results.push(template.render(query, &encoded));
            if results.len() >= MAX_SYNTHESIZED_RESULTS {
                break 'categories;
            }
        }
    }

    results
}
