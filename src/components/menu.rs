//! Navigation menu listing every console page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes::PageDescriptor;

/// Top navigation bar with one link per page descriptor.
#[component]
pub fn Menu(pages: &'static [PageDescriptor]) -> impl IntoView {
    view! {
        <nav class="menu">
            <span class="menu__brand">"Console"</span>
            <ul class="menu__items">
                {pages
                    .iter()
                    .map(|page| {
                        view! {
                            <li class="menu__item">
                                <A href=page.link>{page.title}</A>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}
