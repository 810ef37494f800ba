use super::*;

#[test]
fn portfolio_resolves_every_page() {
    let table = RouteTable::portfolio();
    for (path, unit) in [
        ("/", "index"),
        ("/about", "about"),
        ("/projects", "projects"),
        ("/skills", "skills"),
        ("/achievements", "achievements"),
        ("/contact", "contact"),
    ] {
        assert_eq!(table.resolve(path).content().as_str(), unit, "{path}");
    }
}

#[test]
fn resolution_is_total() {
    let table = RouteTable::portfolio();
    for path in ["", "nope", "/about/team", "/a/b/c/d/e/f", "?", "#", "/\u{1F600}"] {
        let r = table.resolve(path);
        assert!(!r.content().as_str().is_empty());
    }
    let r = table.resolve("/a/b/c/d/e/f");
    assert!(r.is_fallback());
    assert_eq!(r.content().as_str(), "not-found");
}

#[test]
fn resolve_normalizes_and_ignores_fragments() {
    let table = RouteTable::portfolio();
    let r = table.resolve("/Projects/?sort=new#top");
    assert_eq!(r.path, "/Projects");
    assert_eq!(r.content().as_str(), "projects");
    assert_eq!(table.resolve("/#about").content().as_str(), "index");
}

#[test]
fn urls_in_query_strings_do_not_change_the_route() {
    let table = RouteTable::portfolio();
    let r = table.resolve("/projects?ref=https://example.com/about");
    assert_eq!(r.path, "/projects");
    assert_eq!(r.content().as_str(), "projects");
}

#[test]
fn first_match_wins_and_params_are_exposed() {
    let table = RouteTable::new(vec![
        Route::new("/projects/featured", "featured").unwrap(),
        Route::new("/projects/:slug", "project").unwrap(),
        Route::new("*", "missing").unwrap(),
    ])
    .unwrap();
    assert_eq!(
        table.resolve("/projects/featured").content().as_str(),
        "featured"
    );
    let r = table.resolve("/projects/orbit");
    assert_eq!(r.content().as_str(), "project");
    assert_eq!(r.param("slug"), Some("orbit"));
    assert_eq!(r.param("nope"), None);
}

#[test]
fn rejects_tables_without_trailing_catch_all() {
    assert!(RouteTable::new(vec![]).is_err());
    assert!(RouteTable::new(vec![Route::new("/", "index").unwrap()]).is_err());
    assert!(
        RouteTable::new(vec![
            Route::new("*", "a").unwrap(),
            Route::new("/", "index").unwrap(),
        ])
        .is_err()
    );
    assert!(
        RouteTable::new(vec![
            Route::new("*", "a").unwrap(),
            Route::new("*", "b").unwrap(),
        ])
        .is_err()
    );
}

#[test]
fn rejects_duplicate_shapes() {
    let err = RouteTable::new(vec![
        Route::new("/About", "a").unwrap(),
        Route::new("/about", "b").unwrap(),
        Route::new("*", "nf").unwrap(),
    ])
    .unwrap_err();
    assert!(err.to_string().contains("duplicates"));
}

#[test]
fn json_defs_load_and_round_trip() {
    let table = RouteTable::from_json_str(
        r#"[
            { "pattern": "/", "content": "index" },
            { "pattern": "/contact", "content": "contact" },
            { "pattern": "*", "content": "not-found" }
        ]"#,
    )
    .unwrap();
    assert_eq!(table.routes().len(), 3);
    assert_eq!(table.resolve("/contact").content().as_str(), "contact");
    assert_eq!(RouteTable::from_defs(table.defs()).unwrap(), table);
}

#[test]
fn portfolio_passes_validation() {
    let table = RouteTable::portfolio();
    assert_eq!(RouteTable::new(table.routes().to_vec()).unwrap(), table);
}
