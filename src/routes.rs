//! Page descriptor table and location matching for the authenticated shell.
//!
//! DESIGN
//! ======
//! Every descriptor whose pattern matches the current location renders, in
//! table order, rather than only the first hit. Trailing slashes and ASCII
//! case are ignored; non-exact patterns also match deeper paths on a
//! segment boundary.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::fmt;

use leptos::prelude::*;

use crate::pages::{home::HomePage, logout::LogoutPage};

/// One navigable console page.
#[derive(Clone, Copy)]
pub struct PageDescriptor {
    pub id: u32,
    /// Menu label.
    pub title: &'static str,
    /// Path pattern, e.g. `/logout`.
    pub link: &'static str,
    /// Match only the exact path instead of the path and everything below it.
    pub exact: bool,
    pub view: fn() -> AnyView,
}

impl PageDescriptor {
    pub fn matches(&self, location: &str) -> bool {
        path_matches(self.link, self.exact, location)
    }
}

impl fmt::Debug for PageDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageDescriptor")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("link", &self.link)
            .field("exact", &self.exact)
            .finish_non_exhaustive()
    }
}

/// Console pages in menu order.
pub static PAGES: &[PageDescriptor] = &[
    PageDescriptor { id: 0, title: "Home", link: "/", exact: true, view: home_view },
    PageDescriptor { id: 100, title: "Logout", link: "/logout", exact: false, view: logout_view },
];

fn home_view() -> AnyView {
    view! { <HomePage/> }.into_any()
}

fn logout_view() -> AnyView {
    view! { <LogoutPage/> }.into_any()
}

/// Whether `link` matches `location`, ignoring ASCII case.
pub fn path_matches(link: &str, exact: bool, location: &str) -> bool {
    let link = trim_trailing_slash(link);
    let location = trim_trailing_slash(location);
    if link.eq_ignore_ascii_case(location) {
        return true;
    }
    if exact {
        return false;
    }
    if link == "/" {
        return true;
    }
    match (location.get(..link.len()), location.get(link.len()..)) {
        (Some(head), Some(rest)) => head.eq_ignore_ascii_case(link) && rest.starts_with('/'),
        _ => false,
    }
}

/// Descriptors matching `location`, in table order.
pub fn matching_pages<'a>(pages: &'a [PageDescriptor], location: &'a str) -> impl Iterator<Item = &'a PageDescriptor> + 'a {
    pages.iter().filter(move |page| page.matches(location))
}

fn trim_trailing_slash(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}
