use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;

const ITEMS: [(&str, &str, &str); 3] = [
    ("/", "activity", "Dashboard"),
    ("/shift-slot-types", "clock", "Shift slot types"),
    ("/warranty", "shield", "Warranty lookup"),
];

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="main-nav-bar">
            <ul>
                {ITEMS
                    .into_iter()
                    .map(|(href, icon_name, title)| {
                        view! {
                            <li>
                                <A href=href>
                                    {icon(icon_name)}
                                    <span>{title}</span>
                                </A>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}
