use super::*;

fn ids(location: &str) -> Vec<u32> {
    matching_pages(PAGES, location).map(|p| p.id).collect()
}

// =============================================================
// path_matches
// =============================================================

#[test]
fn exact_root_matches_only_root() {
    assert!(path_matches("/", true, "/"));
    assert!(path_matches("/", true, ""));
    assert!(!path_matches("/", true, "/logout"));
}

#[test]
fn non_exact_root_matches_everything() {
    assert!(path_matches("/", false, "/"));
    assert!(path_matches("/", false, "/hotels/42"));
}

#[test]
fn non_exact_matches_nested_paths_on_segment_boundary() {
    assert!(path_matches("/logout", false, "/logout"));
    assert!(path_matches("/logout", false, "/logout/now"));
    assert!(!path_matches("/logout", false, "/logoutx"));
    assert!(!path_matches("/logout", false, "/"));
}

#[test]
fn exact_rejects_nested_paths() {
    assert!(path_matches("/hotels", true, "/hotels"));
    assert!(!path_matches("/hotels", true, "/hotels/42"));
}

#[test]
fn trailing_slashes_are_ignored() {
    assert!(path_matches("/logout", true, "/logout/"));
    assert!(path_matches("/logout/", false, "/logout"));
}

#[test]
fn matching_ignores_ascii_case() {
    assert!(path_matches("/logout", false, "/Logout"));
    assert!(path_matches("/logout", true, "/LOGOUT/"));
    assert!(path_matches("/rooms", false, "/Rooms/7"));
    assert!(!path_matches("/rooms", false, "/Roomsx"));
}

#[test]
fn non_ascii_location_does_not_panic() {
    assert!(!path_matches("/logout", false, "/lögout"));
    assert!(!path_matches("/ab", false, "/é"));
}

// =============================================================
// PAGES table
// =============================================================

#[test]
fn pages_table_lists_home_then_logout() {
    let table: Vec<_> = PAGES.iter().map(|p| (p.id, p.title, p.link, p.exact)).collect();
    assert_eq!(table, vec![(0, "Home", "/", true), (100, "Logout", "/logout", false)]);
}

#[test]
fn root_location_selects_home_only() {
    assert_eq!(ids("/"), vec![0]);
}

#[test]
fn logout_location_selects_logout_only() {
    assert_eq!(ids("/logout"), vec![100]);
}

#[test]
fn mixed_case_logout_location_selects_logout() {
    assert_eq!(ids("/Logout"), vec![100]);
}

#[test]
fn unknown_location_selects_nothing() {
    assert!(ids("/bookings").is_empty());
}

#[test]
fn matching_keeps_table_order() {
    let pages = [
        PageDescriptor { id: 1, title: "All", link: "/", exact: false, view: PAGES[0].view },
        PageDescriptor { id: 2, title: "Rooms", link: "/rooms", exact: false, view: PAGES[0].view },
    ];
    let found: Vec<u32> = matching_pages(&pages, "/rooms/7").map(|p| p.id).collect();
    assert_eq!(found, vec![1, 2]);
}
