use smallvec::SmallVec;

use crate::{
    foundation::error::{PagewipeError, PagewipeResult},
    routing::path::segments,
};

/// Values captured by `:name` segments, and by a trailing `*` under the key `"*"`.
pub type Params = SmallVec<[(String, String); 2]>;

#[derive(Clone, Debug, PartialEq, Eq)]
enum Segment {
    /// Stored lowercased; compared ASCII case-insensitively.
    Static(String),
    Param(String),
}

/// Parsed path pattern.
///
/// Supported forms: static segments (`/about`), single-segment captures (`/blog/:slug`), a
/// trailing splat (`/files/*`), and the bare catch-all `*` which matches every path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoutePattern {
    raw: String,
    segments: SmallVec<[Segment; 4]>,
    splat: bool,
}

impl RoutePattern {
    pub const CATCH_ALL: &'static str = "*";

    pub fn parse(raw: &str) -> PagewipeResult<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(PagewipeError::validation("route pattern must be non-empty"));
        }
        if raw == Self::CATCH_ALL {
            return Ok(Self::catch_all());
        }
        if !raw.starts_with('/') {
            return Err(PagewipeError::validation(format!(
                "route pattern '{raw}' must start with '/'"
            )));
        }
        if raw.contains(['?', '#']) {
            return Err(PagewipeError::validation(format!(
                "route pattern '{raw}' must not contain a query or fragment"
            )));
        }

        let parts: Vec<&str> = segments(raw).collect();
        let mut out: SmallVec<[Segment; 4]> = SmallVec::new();
        let mut splat = false;
        for (i, part) in parts.iter().enumerate() {
            if *part == "*" {
                if i + 1 != parts.len() {
                    return Err(PagewipeError::validation(format!(
                        "route pattern '{raw}': '*' is only allowed as the last segment"
                    )));
                }
                splat = true;
            } else if let Some(name) = part.strip_prefix(':') {
                if name.is_empty() {
                    return Err(PagewipeError::validation(format!(
                        "route pattern '{raw}': parameter name must be non-empty"
                    )));
                }
                if out
                    .iter()
                    .any(|s| matches!(s, Segment::Param(n) if n == name))
                {
                    return Err(PagewipeError::validation(format!(
                        "route pattern '{raw}': duplicate parameter ':{name}'"
                    )));
                }
                out.push(Segment::Param(name.to_owned()));
            } else {
                out.push(Segment::Static(part.to_ascii_lowercase()));
            }
        }

        Ok(Self {
            raw: raw.to_owned(),
            segments: out,
            splat,
        })
    }

    /// The `*` pattern.
    pub fn catch_all() -> Self {
        Self {
            raw: Self::CATCH_ALL.to_owned(),
            segments: SmallVec::new(),
            splat: true,
        }
    }

    /// Pattern made only of static segments, e.g. `/about`.
    pub(crate) fn literal(path: &str) -> Self {
        Self {
            raw: path.to_owned(),
            segments: segments(path)
                .map(|s| Segment::Static(s.to_ascii_lowercase()))
                .collect(),
            splat: false,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn is_catch_all(&self) -> bool {
        self.splat && self.segments.is_empty()
    }

    /// Structural key: two patterns with the same shape match exactly the same paths.
    pub fn shape(&self) -> String {
        let mut out = String::new();
        for seg in &self.segments {
            out.push('/');
            match seg {
                Segment::Static(s) => out.push_str(s),
                Segment::Param(_) => out.push(':'),
            }
        }
        if self.splat {
            out.push_str("/*");
        }
        if out.is_empty() {
            out.push('/');
        }
        out
    }

    /// Match a normalized path, returning captured values on success.
    pub fn matches(&self, path: &str) -> Option<Params> {
        let mut parts = segments(path);
        let mut params = Params::new();

        for seg in &self.segments {
            let part = parts.next()?;
            match seg {
                Segment::Static(s) => {
                    if !part.eq_ignore_ascii_case(s) {
                        return None;
                    }
                }
                Segment::Param(name) => params.push((name.clone(), part.to_owned())),
            }
        }

        let rest: Vec<&str> = parts.collect();
        if self.splat {
            params.push(("*".to_owned(), rest.join("/")));
            Some(params)
        } else if rest.is_empty() {
            Some(params)
        } else {
            None
        }
    }
}

impl std::fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/routing/pattern.rs"]
mod tests;
