pub mod navbar;

use leptos::prelude::*;
use navbar::Navbar;

/// Application shell.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                    |
/// +------------------------------------------+
/// |  Navbar   |           Content             |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    let left_open = RwSignal::new(true);

    view! {
        <div class="app-layout">
            <header class="top-header">
                <button
                    class="top-header__toggle"
                    title="Toggle navigation"
                    on:click=move |_| left_open.update(|open| *open = !*open)
                >
                    "☰"
                </button>
                <span class="top-header__title">"Workforce Admin"</span>
            </header>

            <div class="app-body">
                <aside class="app-left" class:app-left--collapsed=move || !left_open.get()>
                    <Navbar />
                </aside>
                <main class="app-main">{children()}</main>
            </div>
        </div>
    }
}
