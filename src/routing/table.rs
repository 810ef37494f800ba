use std::collections::BTreeSet;

use crate::{
    foundation::error::{PagewipeError, PagewipeResult},
    routing::{
        path::normalize_path,
        pattern::{Params, RoutePattern},
    },
};

/// Opaque key of a renderable page.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct ContentUnit(pub String);

impl ContentUnit {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ContentUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Serialized form of a route entry: `{ "pattern": "/about", "content": "about" }`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RouteDef {
    pub pattern: String,
    pub content: ContentUnit,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Route {
    pub pattern: RoutePattern,
    pub content: ContentUnit,
}

impl Route {
    pub fn new(pattern: &str, content: impl Into<String>) -> PagewipeResult<Self> {
        Ok(Self {
            pattern: RoutePattern::parse(pattern)?,
            content: ContentUnit::new(content),
        })
    }
}

/// Outcome of [`RouteTable::resolve`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolved<'a> {
    pub route: &'a Route,
    /// Normalized form of the requested path.
    pub path: String,
    pub params: Params,
}

impl Resolved<'_> {
    pub fn content(&self) -> &ContentUnit {
        &self.route.content
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_fallback(&self) -> bool {
        self.route.pattern.is_catch_all()
    }
}

/// Ordered, immutable route table whose last entry is the catch-all.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    pub fn new(routes: Vec<Route>) -> PagewipeResult<Self> {
        let Some(last) = routes.last() else {
            return Err(PagewipeError::validation("route table must not be empty"));
        };
        if !last.pattern.is_catch_all() {
            return Err(PagewipeError::validation(format!(
                "last route must be the catch-all '*' (found '{}')",
                last.pattern
            )));
        }
        let catch_alls = routes.iter().filter(|r| r.pattern.is_catch_all()).count();
        if catch_alls != 1 {
            return Err(PagewipeError::validation(format!(
                "route table must contain exactly one catch-all (found {catch_alls})"
            )));
        }

        let mut seen = BTreeSet::new();
        for r in &routes {
            if !seen.insert(r.pattern.shape()) {
                return Err(PagewipeError::validation(format!(
                    "route pattern '{}' duplicates an earlier route",
                    r.pattern
                )));
            }
        }

        Ok(Self { routes })
    }

    pub fn from_defs(defs: Vec<RouteDef>) -> PagewipeResult<Self> {
        let routes = defs
            .into_iter()
            .map(|d| {
                Ok(Route {
                    pattern: RoutePattern::parse(&d.pattern)?,
                    content: d.content,
                })
            })
            .collect::<PagewipeResult<Vec<_>>>()?;
        Self::new(routes)
    }

    pub fn from_json_str(s: &str) -> PagewipeResult<Self> {
        let defs: Vec<RouteDef> = serde_json::from_str(s)?;
        Self::from_defs(defs)
    }

    /// The portfolio site's pages.
    pub fn portfolio() -> Self {
        let entry = |path: &str, content: &str| Route {
            pattern: RoutePattern::literal(path),
            content: ContentUnit::new(content),
        };
        Self {
            routes: vec![
                entry("/", "index"),
                entry("/about", "about"),
                entry("/projects", "projects"),
                entry("/skills", "skills"),
                entry("/achievements", "achievements"),
                entry("/contact", "contact"),
                Route {
                    pattern: RoutePattern::catch_all(),
                    content: ContentUnit::new("not-found"),
                },
            ],
        }
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn fallback(&self) -> &Route {
        // `new` guarantees a trailing catch-all.
        &self.routes[self.routes.len() - 1]
    }

    /// Total: every input resolves, unmatched paths land on the catch-all.
    pub fn resolve(&self, path: &str) -> Resolved<'_> {
        let path = normalize_path(path);
        for route in &self.routes {
            if let Some(params) = route.pattern.matches(&path) {
                return Resolved {
                    route,
                    path,
                    params,
                };
            }
        }
        Resolved {
            route: self.fallback(),
            path,
            params: Params::new(),
        }
    }

    pub fn defs(&self) -> Vec<RouteDef> {
        self.routes
            .iter()
            .map(|r| RouteDef {
                pattern: r.pattern.as_str().to_owned(),
                content: r.content.clone(),
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/routing/table.rs"]
mod tests;
