//! Integration tests for simplemvc-router
//!
//! Organized by feature area:
//! - Route compilation
//! - First-match-wins ordering
//! - Placeholder extraction
//! - Static, dynamic and default-action targets
//! - Resolver hand-off and error propagation
//! - Strict compile mode

use pretty_assertions::assert_eq;
use rstest::rstest;
use simplemvc_router::*;
use std::collections::HashMap;
use std::sync::Arc;
use std::thread;

/// Resolver that echoes what it was asked for
fn echo(controller: &str, action: &str) -> Result<(String, String), String> {
    Ok((controller.to_string(), action.to_string()))
}

type EchoFn = fn(&str, &str) -> Result<(String, String), String>;
type EchoRouter = Router<EchoFn>;

fn echo_router<F>(block: F) -> EchoRouter
where
    F: FnOnce(&mut RouteMapper),
{
    Router::draw(echo as EchoFn, block).unwrap()
}

fn resolved(controller: &str, action: &str) -> Option<(String, String)> {
    Some((controller.to_string(), action.to_string()))
}

fn params(pairs: &[(&str, &str)]) -> Params {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

// ============================================================================
// Compilation
// ============================================================================

#[test]
fn test_compile_dynamic_template() {
    let route = Route::compile("/:controller/:action", RouteTarget::Dynamic).unwrap();
    assert_eq!(route.pattern(), "^/([A-Za-z0-9_]+)/([A-Za-z0-9_]+)$");
    assert_eq!(route.placeholders(), ["controller", "action"]);
    assert_eq!(route.static_target(), None);
    assert_eq!(route.default_suffix(), None);
}

#[test]
fn test_compile_static_template() {
    let route = Route::compile("/ping", RouteTarget::Static("Health#check".into())).unwrap();
    assert_eq!(route.pattern(), "^/ping$");
    assert!(route.placeholders().is_empty());
    assert_eq!(route.static_target(), Some("Health#check"));
}

#[test]
fn test_compile_default_template_drops_static_target() {
    let route = Route::compile(
        "/posts",
        RouteTarget::Default(DefaultTarget::new("Posts", "index")),
    )
    .unwrap();
    assert_eq!(route.pattern(), "^/posts/([A-Za-z0-9_]+)$");
    assert_eq!(route.placeholders(), ["action"]);
    assert_eq!(route.static_target(), None);
    assert_eq!(route.default_suffix(), Some("/index"));
}

#[rstest]
#[case("/", "^/$")]
#[case("", "^/$")]
#[case("users", "^/users$")]
#[case("/users/", "^/users$")]
#[case("//users//:id//", "^/users/([A-Za-z0-9_]+)$")]
fn test_compile_normalizes_slashes(#[case] template: &str, #[case] pattern: &str) {
    let route = Route::compile(template, RouteTarget::Dynamic).unwrap();
    assert_eq!(route.pattern(), pattern);
}

#[test]
fn test_placeholder_count_matches_capture_groups() {
    for template in ["/", "/a", "/:a", "/a/:b/c/:d", "/:a/:b/:c/:d/:e"] {
        let route = Route::compile(template, RouteTarget::Dynamic).unwrap();
        let groups = route.pattern().matches("([A-Za-z0-9_]+)").count();
        assert_eq!(route.placeholders().len(), groups, "template {template}");
    }
}

// ============================================================================
// Ordering
// ============================================================================

#[test]
fn test_first_match_wins() {
    let router = echo_router(|map| {
        map.static_route("/users/:id", "accounts#show");
        map.static_route("/users/:id", "people#show");
    });

    assert_eq!(router.lookup("/users/7").unwrap(), resolved("Accounts", "show"));
}

#[test]
fn test_specific_route_declared_first_shadows_dynamic() {
    let router = echo_router(|map| {
        map.static_route("/posts/new", "posts#build");
        map.route("/:controller/:action");
    });

    assert_eq!(router.lookup("/posts/new").unwrap(), resolved("Posts", "build"));
    assert_eq!(router.lookup("/posts/edit").unwrap(), resolved("Posts", "edit"));
}

#[test]
fn test_dynamic_route_declared_first_shadows_specific() {
    let router = echo_router(|map| {
        map.route("/:controller/:action");
        map.static_route("/posts/new", "posts#build");
    });

    assert_eq!(router.lookup("/posts/new").unwrap(), resolved("Posts", "new"));
}

#[test]
fn test_routes_keep_registration_order() {
    let router = echo_router(|map| {
        map.route("/b");
        map.route("/a");
        map.route("/c");
    });

    let templates: Vec<&str> = router.routes().iter().map(Route::template).collect();
    assert_eq!(templates, vec!["/b", "/a", "/c"]);
    assert_eq!(router.len(), 3);
}

// ============================================================================
// Placeholders
// ============================================================================

#[test]
fn test_placeholder_extraction() {
    let router = echo_router(|map| {
        map.static_route("/users/:id", "users#show");
    });

    let m = router.match_route("/users/42").unwrap();
    assert_eq!(m.params, params(&[("id", "42")]));

    assert!(router.match_route("/users/").is_none());
    assert!(router.match_route("/users").is_none());
}

#[rstest]
#[case("/posts/:id", &["42"])]
#[case("/:controller/:action", &["posts", "show"])]
#[case("/:a/x/:b/y/:c", &["one", "Two_2", "THREE"])]
#[case("/archive/:year/:month/:slug", &["2024", "05", "hello_world"])]
fn test_substituted_template_round_trips(#[case] template: &str, #[case] values: &[&str]) {
    let route = Route::compile(template, RouteTarget::Dynamic).unwrap();

    let mut remaining = values.iter();
    let path: String = template
        .split('/')
        .filter(|s| !s.is_empty())
        .map(|segment| match segment.strip_prefix(':') {
            Some(_) => remaining.next().unwrap().to_string(),
            None => segment.to_string(),
        })
        .fold(String::new(), |path, segment| path + "/" + &segment);

    let matched = route.matches(&path).unwrap();
    let recovered: Vec<&str> = route
        .placeholders()
        .iter()
        .map(|name| matched[name].as_str())
        .collect();
    assert_eq!(recovered, values.to_vec());
}

#[test]
fn test_duplicate_placeholder_name_last_wins() {
    let route = Route::compile("/:id/:id", RouteTarget::Dynamic).unwrap();
    assert_eq!(route.matches("/first/second"), Some(params(&[("id", "second")])));
}

#[test]
fn test_empty_placeholder_name_is_captured() {
    let route = Route::compile("/files/:", RouteTarget::Dynamic).unwrap();
    assert_eq!(route.matches("/files/readme"), Some(params(&[("", "readme")])));
}

// ============================================================================
// Targets
// ============================================================================

#[test]
fn test_static_target() {
    let router = echo_router(|map| {
        map.static_route("/ping", "Health#check");
    });

    assert_eq!(router.lookup("/ping").unwrap(), resolved("Health", "check"));
}

#[test]
fn test_static_target_ignores_placeholders() {
    let router = echo_router(|map| {
        map.static_route("/:controller/:action", "pages#show");
    });

    let m = router.match_route("/posts/edit").unwrap();
    assert_eq!(m.target, Target::parse("pages#show"));
    assert_eq!(router.lookup("/posts/edit").unwrap(), resolved("Pages", "show"));
}

#[test]
fn test_dynamic_target_is_camel_cased() {
    let router = echo_router(|map| {
        map.route("/:controller/:action");
    });

    let m = router.match_route("/posts/show").unwrap();
    assert_eq!(m.target.as_ref().map(ToString::to_string), Some("posts#show".to_string()));
    assert_eq!(router.lookup("/posts/show").unwrap(), resolved("Posts", "show"));
    assert_eq!(router.lookup("/user_posts/index").unwrap(), resolved("UserPosts", "index"));
}

#[test]
fn test_default_route_on_root() {
    let router = echo_router(|map| {
        map.default_route("/", "Home", "index");
    });

    let m = router.match_route("/").unwrap();
    assert_eq!(m.params, params(&[("action", "index")]));

    let m = router.match_route("").unwrap();
    assert_eq!(m.params, params(&[("action", "index")]));
}

#[test]
fn test_default_route_without_controller_placeholder_is_unresolved() {
    let router = echo_router(|map| {
        map.default_route("/", "Home", "index");
        map.static_route("/", "home#index");
    });

    // The default route matches first but only supplies `action`
    let m = router.match_route("/").unwrap();
    assert!(!m.is_resolved());
    assert_eq!(router.lookup("/").unwrap(), None);
}

#[test]
fn test_default_route_with_controller_placeholder() {
    let router = echo_router(|map| {
        map.default_route(":controller", "home", "index");
    });

    assert_eq!(router.lookup("/posts").unwrap(), resolved("Posts", "index"));
    assert_eq!(router.lookup("/posts/").unwrap(), resolved("Posts", "index"));
    // An explicit action adds a segment, so the rewrite no longer fits
    assert_eq!(router.lookup("/posts/show").unwrap(), None);
}

#[test]
fn test_default_rewrite_does_not_leak_into_later_routes() {
    let router = echo_router(|map| {
        map.default_route("/admin", "admin", "dashboard");
        map.static_route("/reports/", "reports#index");
    });

    // The first route sees `/reports/dashboard`; the second sees the original path
    assert_eq!(router.lookup("/reports").unwrap(), resolved("Reports", "index"));
}

// ============================================================================
// Unresolved targets and no-match
// ============================================================================

#[test]
fn test_no_match_returns_none() {
    let router = echo_router(|map| {
        map.route("/:controller/:action");
    });

    assert!(router.match_route("/only").is_none());
    assert_eq!(router.lookup("/only").unwrap(), None);
    assert_eq!(router.lookup("/a/b/c").unwrap(), None);
}

#[test]
fn test_unresolved_target_does_not_fall_through() {
    let router = echo_router(|map| {
        map.route("/:controller/:id");
        map.static_route("/posts/:id", "posts#show");
    });

    // First route matches, but without `:action` the target is `posts#`
    let m = router.match_route("/posts/1").unwrap();
    assert_eq!(m.route.template(), "/:controller/:id");
    assert_eq!(m.target, None);
    assert_eq!(router.lookup("/posts/1").unwrap(), None);
}

#[test]
fn test_malformed_static_target_is_unresolved() {
    let router = echo_router(|map| {
        map.static_route("/broken", "no_hash_here");
    });

    assert!(router.match_route("/broken").is_some());
    assert_eq!(router.lookup("/broken").unwrap(), None);
}

#[test]
fn test_empty_table() {
    let router = echo_router(|_| {});
    assert!(router.is_empty());
    assert_eq!(router.lookup("/").unwrap(), None);
}

// ============================================================================
// Resolver hand-off
// ============================================================================

#[test]
fn test_resolver_error_propagates() {
    let resolver = |controller: &str, _action: &str| -> Result<(), String> {
        Err(format!("{controller}Controller not found"))
    };
    let router = Router::draw(resolver, |map| {
        map.route("/:controller/:action");
    })
    .unwrap();

    assert_eq!(router.lookup("/ghosts/show"), Err("GhostsController not found".to_string()));
}

#[test]
fn test_resolver_not_called_without_match() {
    use std::cell::Cell;

    let calls = Cell::new(0);
    let resolver = |_: &str, _: &str| -> Result<(), ()> {
        calls.set(calls.get() + 1);
        Ok(())
    };
    let router = Router::draw(resolver, |map| {
        map.route("/:controller/:id");
    })
    .unwrap();

    assert_eq!(router.lookup("/nothing/here/at/all"), Ok(None));
    assert_eq!(router.lookup("/posts/1"), Ok(None));
    assert_eq!(calls.get(), 0);
}

#[test]
fn test_registry_backed_resolver() {
    let mut registry: HashMap<&'static str, &'static str> = HashMap::new();
    registry.insert("Posts", "PostsController");

    let resolver = move |controller: &str, action: &str| -> Result<String, String> {
        registry
            .get(controller)
            .map(|name| format!("{name}::{action}"))
            .ok_or_else(|| format!("uninitialized constant {controller}Controller"))
    };
    let router = Router::draw(resolver, |map| {
        map.route("/:controller/:action");
    })
    .unwrap();

    assert_eq!(router.lookup("/posts/index").unwrap(), Some("PostsController::index".to_string()));
    assert!(router.lookup("/users/index").is_err());
}

// ============================================================================
// Lookups are read-only
// ============================================================================

#[test]
fn test_repeated_lookups_are_idempotent() {
    let router = echo_router(|map| {
        map.default_route(":controller", "home", "index");
        map.route("/:controller/:action");
    });

    let paths = ["/posts", "/posts/", "/posts/show", "/", "/x/y/z"];
    let first: Vec<_> = paths.iter().map(|p| router.lookup(p)).collect();
    for _ in 0..3 {
        let again: Vec<_> = paths.iter().map(|p| router.lookup(p)).collect();
        assert_eq!(again, first);
    }
    assert_eq!(router.len(), 2);
}

#[test]
fn test_concurrent_lookups() {
    let router = Arc::new(echo_router(|map| {
        map.route("/:controller/:action");
    }));

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let router = Arc::clone(&router);
            thread::spawn(move || router.lookup(&format!("/posts_{i}/show")).unwrap())
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), resolved(&format!("Posts{i}"), "show"));
    }
}

// ============================================================================
// Declarative specs and strict mode
// ============================================================================

#[test]
fn test_from_specs_preserves_order() {
    let specs = vec![
        RouteSpec::new("/ping").to("health#check"),
        RouteSpec::new(":controller").with_default("home", "index"),
        RouteSpec::new("/:controller/:action"),
    ];
    let router = Router::from_specs(echo as EchoFn, specs, CompileMode::Permissive).unwrap();

    assert_eq!(router.len(), 3);
    assert_eq!(router.lookup("/ping").unwrap(), resolved("Health", "check"));
    assert_eq!(router.lookup("/ping/").unwrap(), resolved("Ping", "index"));
    assert_eq!(router.lookup("/posts/show").unwrap(), resolved("Posts", "show"));
}

#[test]
fn test_strict_mode_rejects_malformed_templates() {
    let err = Router::draw_with_mode(echo as EchoFn, CompileMode::Strict, |map| {
        map.route("/ok/:id");
        map.route("/files/:");
    })
    .unwrap_err();
    assert!(matches!(err, RouteError::EmptyPlaceholder { .. }));

    let err = Router::draw_with_mode(echo as EchoFn, CompileMode::Strict, |map| {
        map.static_route("/feed.xml", "feeds#show");
    })
    .unwrap_err();
    assert!(err.to_string().contains("feed.xml"));
}

#[test]
fn test_permissive_literal_is_regex_text() {
    let router = echo_router(|map| {
        map.static_route("/feed.xml", "feeds#show");
    });

    // `.` is not escaped, so it matches any character
    assert_eq!(router.lookup("/feed.xml").unwrap(), resolved("Feeds", "show"));
    assert_eq!(router.lookup("/feedAxml").unwrap(), resolved("Feeds", "show"));
}

#[test]
fn test_invalid_regex_literal_fails_in_both_modes() {
    for mode in [CompileMode::Permissive, CompileMode::Strict] {
        let result = Router::draw_with_mode(echo as EchoFn, mode, |map| {
            map.route("/a(b");
        });
        assert!(result.is_err());
    }
}

#[test]
fn test_register_precompiled_route() {
    let mut router: EchoRouter = Router::new(echo as EchoFn);
    router.register(Route::compile("/health", RouteTarget::Static("health#show".into())).unwrap());

    assert_eq!(router.lookup("/health").unwrap(), resolved("Health", "show"));
}
