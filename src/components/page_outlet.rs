//! Renders the pages matching the current location.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::routes::{PageDescriptor, matching_pages};

/// Outlet rendering every descriptor that matches the current path.
#[component]
pub fn PageOutlet(pages: &'static [PageDescriptor]) -> impl IntoView {
    let location = use_location();

    move || {
        let path = location.pathname.get();
        matching_pages(pages, &path).map(|page| (page.view)()).collect_view()
    }
}
