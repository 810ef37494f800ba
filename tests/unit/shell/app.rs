use super::*;
use crate::transition::phase::Phase;

fn settle(shell: &mut AppShell, mut t: f64) -> f64 {
    for _ in 0..2000 {
        if shell.orchestrator().is_idle() {
            break;
        }
        t += 1.0 / 60.0;
        shell.frame(t);
    }
    t
}

#[test]
fn link_push_and_back_round_trip() {
    let mut shell = AppShell::portfolio("/").unwrap();
    assert!(shell.dispatch(Navigation::Link("/projects".into()), 0.0));
    assert_eq!(shell.orchestrator().phase(), Phase::Exiting);
    let t = settle(&mut shell, 0.0);
    assert_eq!(shell.orchestrator().displayed().content.as_str(), "projects");
    assert!(shell.is_settled());

    assert!(shell.dispatch(Navigation::Back, t));
    assert_eq!(shell.current_url(), "/");
    settle(&mut shell, t);
    assert_eq!(shell.orchestrator().displayed().content.as_str(), "index");
    assert!(shell.history().can_go_forward());
}

#[test]
fn back_at_oldest_entry_is_ignored() {
    let mut shell = AppShell::portfolio("/").unwrap();
    assert!(!shell.dispatch(Navigation::Back, 0.0));
    assert!(!shell.dispatch(Navigation::Forward, 0.0));
    assert!(shell.orchestrator().is_idle());
}

#[test]
fn hash_links_do_not_transition() {
    let mut shell = AppShell::portfolio("/").unwrap();
    assert!(shell.dispatch(Navigation::Link("/#about".into()), 0.0));
    assert!(shell.orchestrator().is_idle());
    assert_eq!(shell.current_url(), "/#about");
    assert_eq!(shell.history().len(), 2);
    assert!(shell.is_settled());
}

#[test]
fn link_to_current_url_replaces() {
    let mut shell = AppShell::portfolio("/about").unwrap();
    shell.dispatch(Navigation::Link("/about".into()), 0.0);
    assert_eq!(shell.history().len(), 1);
}

#[test]
fn redirect_replaces_and_transitions() {
    let mut shell = AppShell::portfolio("/old-page").unwrap();
    assert_eq!(
        shell.orchestrator().displayed().content.as_str(),
        "not-found"
    );
    shell.dispatch(Navigation::Redirect("/contact".into()), 0.0);
    assert_eq!(shell.history().len(), 1);
    assert!(!shell.is_settled());
    settle(&mut shell, 0.0);
    assert_eq!(shell.orchestrator().displayed().content.as_str(), "contact");
}

#[test]
fn navigation_json_shape() {
    let nav: Navigation = serde_json::from_str(r#"{ "kind": "link", "to": "/skills" }"#).unwrap();
    assert_eq!(nav, Navigation::Link("/skills".into()));
    let back: Navigation = serde_json::from_str(r#"{ "kind": "back" }"#).unwrap();
    assert_eq!(back, Navigation::Back);
}
