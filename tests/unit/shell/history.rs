use super::*;

#[test]
fn push_back_forward() {
    let mut h = History::new("/");
    h.push("/about");
    h.push("/projects");
    assert_eq!(h.current(), "/projects");
    assert!(h.back());
    assert_eq!(h.current(), "/about");
    assert!(h.back());
    assert!(!h.back());
    assert_eq!(h.current(), "/");
    assert!(h.forward());
    assert!(h.forward());
    assert!(!h.forward());
    assert_eq!(h.current(), "/projects");
}

#[test]
fn push_discards_forward_entries() {
    let mut h = History::new("/");
    h.push("/about");
    h.push("/projects");
    h.back();
    h.push("/contact");
    assert_eq!(h.len(), 3);
    assert!(!h.can_go_forward());
    assert_eq!(h.current(), "/contact");
}

#[test]
fn replace_keeps_length() {
    let mut h = History::new("/old");
    h.replace("/new");
    assert_eq!(h.len(), 1);
    assert_eq!(h.current(), "/new");
    assert!(!h.is_empty());
}
