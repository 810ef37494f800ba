/// Canonical form of a navigation target used for matching and for comparing intents.
///
/// Query strings and fragments are dropped (a fragment-only change is not a page change),
/// repeated and trailing slashes collapse, `.`/`..` segments are resolved, and any
/// leading `scheme://authority` is removed. The result always starts with `/`.
pub fn normalize_path(raw: &str) -> String {
    let raw = strip_origin(raw.trim());
    let end = raw.find(['?', '#']).unwrap_or(raw.len());

    let mut segments: Vec<&str> = Vec::new();
    for seg in raw[..end].split('/') {
        match seg {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            s => segments.push(s),
        }
    }

    if segments.is_empty() {
        return "/".to_owned();
    }
    let mut out = String::with_capacity(end + 1);
    for seg in segments {
        out.push('/');
        out.push_str(seg);
    }
    out
}

/// Drops a leading `scheme://authority`. A `://` appearing after the first `/`, `?`, or `#`
/// belongs to the path, query, or fragment and is left alone.
fn strip_origin(raw: &str) -> &str {
    let Some(i) = raw.find("://") else {
        return raw;
    };
    let scheme = &raw[..i];
    let mut chars = scheme.chars();
    let valid = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    if !valid {
        return raw;
    }
    let rest = &raw[i + 3..];
    match rest.find(['/', '?', '#']) {
        Some(j) => &rest[j..],
        None => "",
    }
}

/// Non-empty segments of an already-normalized path.
pub(crate) fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

#[cfg(test)]
#[path = "../../tests/unit/routing/path.rs"]
mod tests;
