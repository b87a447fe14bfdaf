use std::{collections::BTreeSet, sync::LazyLock};

use regex::Regex;

use super::keywords::{HEURISTIC_TAGS, KEYWORD_TAGS};

pub(crate) const FALLBACK_DESCRIPTION: &str =
    "Technical blog post about networking and system administration.";

const DESCRIPTION_MAX_CHARS: usize = 200;
const DESCRIPTION_MIN_CHARS: usize = 20;
const DRAFT_SCAN_LINES: usize = 5;

static BLANK_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n[ \t\r]*\n").unwrap());
static MARKDOWN_MARKERS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[#*`]").unwrap());
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static SLUG_INVALID: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z0-9\s-]").unwrap());
static SLUG_SEPARATORS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\s-]+").unwrap());
static DRAFT_MARKER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)#\s*DRAFT").unwrap());

fn strip_md_extension(filename: &str) -> &str {
    filename.strip_suffix(".md").unwrap_or(filename)
}

/// `wireguard-setup.md` -> `Wireguard Setup`
pub(crate) fn derive_title(filename: &str) -> String {
    let mut title = String::with_capacity(filename.len());
    let mut previous_is_cased = false;
    for c in strip_md_extension(filename).chars() {
        let c = if c == '-' || c == '_' { ' ' } else { c };
        let is_cased = c.is_lowercase() || c.is_uppercase();
        if is_cased && previous_is_cased {
            title.extend(c.to_lowercase());
        } else if is_cased {
            title.extend(c.to_uppercase());
        } else {
            title.push(c);
        }
        previous_is_cased = is_cased;
    }
    title
}

/// Sorted, deduplicated tags for a post body.
pub(crate) fn derive_tags(content: &str) -> Vec<String> {
    let content = content.to_lowercase();
    let mut tags = BTreeSet::new();

    for (keyword, keyword_tags) in KEYWORD_TAGS {
        if content.contains(keyword) {
            tags.extend(keyword_tags.iter().copied());
        }
    }
    for (tag, triggers) in HEURISTIC_TAGS {
        if triggers.iter().any(|t| content.contains(t)) {
            tags.insert(*tag);
        }
    }

    tags.into_iter().map(str::to_string).collect()
}

/// First real paragraph of the post with markdown markers removed.
/// Never longer than 200 characters plus a trailing `...`.
pub(crate) fn derive_description(content: &str) -> String {
    let Some(paragraph) = BLANK_LINE
        .split(content)
        .map(str::trim)
        .find(|p| {
            !p.is_empty() && !p.starts_with('#') && p.chars().count() > DESCRIPTION_MIN_CHARS
        })
    else {
        return FALLBACK_DESCRIPTION.to_string();
    };

    let cleaned = MARKDOWN_MARKERS.replace_all(paragraph, "");
    let cleaned = WHITESPACE.replace_all(&cleaned, " ");
    let cleaned = cleaned.trim();

    if cleaned.chars().count() > DESCRIPTION_MAX_CHARS {
        let mut truncated: String = cleaned.chars().take(DESCRIPTION_MAX_CHARS).collect();
        truncated.push_str("...");
        truncated
    } else {
        cleaned.to_string()
    }
}

pub(crate) fn derive_slug(filename: &str) -> String {
    let slug = strip_md_extension(filename).to_lowercase();
    let slug = SLUG_INVALID.replace_all(&slug, "");
    let slug = SLUG_SEPARATORS.replace_all(&slug, "-");
    slug.trim_matches('-').to_string()
}

/// A post is a draft when one of its first lines carries `# DRAFT` (any case).
pub(crate) fn is_draft(content: &str) -> bool {
    content
        .split('\n')
        .take(DRAFT_SCAN_LINES)
        .any(|line| DRAFT_MARKER.is_match(line))
}
