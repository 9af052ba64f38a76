//! Link reference extraction from note content.
//!
//! Recognizes wikilinks (`[[Target]]`, `[[Target|alias]]`) and inline
//! markdown links to local markdown files (`[text](target.md)`). External
//! URLs and asset links are not note references. Extraction is advisory:
//! it never fails, and content with no recognizable links yields an empty
//! list.

use std::sync::LazyLock;

use regex::Regex;

/// A single reference found in note content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRef {
    /// Referenced note title, as written (trimmed). May not exist yet.
    pub target: String,
    /// The raw reference text as it appears in the source.
    pub raw: String,
}

static WIKILINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    // Matches [[target]] or [[target|alias]]
    Regex::new(r"\[\[([^\]|]+)(?:\|([^\]]+))?\]\]").unwrap()
});

static MARKDOWN_LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    // Matches [text](url)
    Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap()
});

/// Extract references in order of appearance, duplicates preserved.
/// Callers needing uniqueness dedupe themselves.
pub fn extract_refs(content: &str) -> Vec<LinkRef> {
    let mut found: Vec<(usize, LinkRef)> = Vec::new();

    for cap in WIKILINK_RE.captures_iter(content) {
        let whole = match cap.get(0) {
            Some(m) => m,
            None => continue,
        };
        let target = cap.get(1).map(|m| m.as_str().trim()).unwrap_or("");
        if target.is_empty() {
            continue;
        }
        found.push((
            whole.start(),
            LinkRef { target: target.to_string(), raw: whole.as_str().to_string() },
        ));
    }

    for cap in MARKDOWN_LINK_RE.captures_iter(content) {
        let whole = match cap.get(0) {
            Some(m) => m,
            None => continue,
        };
        let url = cap.get(2).map(|m| m.as_str().trim()).unwrap_or("");
        if let Some(target) = note_target_from_url(url) {
            found.push((
                whole.start(),
                LinkRef { target, raw: whole.as_str().to_string() },
            ));
        }
    }

    found.sort_by_key(|(pos, _)| *pos);
    found.into_iter().map(|(_, link)| link).collect()
}

/// Referenced titles only, in order of appearance.
pub fn extract_targets(content: &str) -> Vec<String> {
    extract_refs(content).into_iter().map(|l| l.target).collect()
}

/// Map a markdown link url to a sibling note title, if it is one.
/// Notes live flat in the vault, so anything with a path component,
/// a scheme, or a non-markdown extension is not a note reference.
fn note_target_from_url(url: &str) -> Option<String> {
    if url.starts_with("http://") || url.starts_with("https://") {
        return None;
    }

    let local = url.strip_prefix("./").unwrap_or(url);
    if local.contains('/') || local.contains('\\') {
        return None;
    }

    let stem = local.strip_suffix(".md")?;
    if stem.is_empty() {
        return None;
    }
    Some(stem.to_string())
}
