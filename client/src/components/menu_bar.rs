//! Top navigation bar with the user dropdown.

#[cfg(test)]
#[path = "menu_bar_test.rs"]
mod menu_bar_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::routing::{ADMIN_PATH, HOME_PATH, LOGIN_PATH};
use crate::state::session::SessionStore;

/// Navigation entries visible for the given role. The admin entry is
/// listed only for admins; the guard still blocks the route for others.
fn menu_links(is_admin: bool) -> Vec<(&'static str, &'static str)> {
    let mut links = vec![(HOME_PATH, "게시판"), ("/gall", "이미지게시판")];
    if is_admin {
        links.push((ADMIN_PATH, "관리자페이지"));
    }
    links
}

fn display_name(user_name: Option<String>) -> String {
    user_name.filter(|name| !name.is_empty()).unwrap_or_else(|| "사용자".to_owned())
}

/// Navigation list. Plain anchors are enough: the router intercepts clicks
/// on same-origin links.
#[component]
pub fn MenuLinks(#[prop(into)] is_admin: Signal<bool>) -> impl IntoView {
    view! {
        <ul class="menu-bar__links">
            {move || {
                menu_links(is_admin.get())
                    .into_iter()
                    .map(|(href, label)| view! { <li><a href=href>{label}</a></li> })
                    .collect_view()
            }}
        </ul>
    }
}

#[component]
pub fn MenuBar() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let navigate = use_navigate();
    let dropdown_open = RwSignal::new(false);

    let on_logout = move |_| {
        dropdown_open.set(false);
        session.logout();
        navigate(LOGIN_PATH, NavigateOptions { replace: true, ..NavigateOptions::default() });
    };

    view! {
        <nav class="menu-bar">
            <A href=HOME_PATH attr:class="menu-bar__brand">"Notice Board"</A>
            <MenuLinks is_admin=Signal::derive(move || session.is_admin())/>
            <div class="menu-bar__user">
                <button
                    class="menu-bar__user-toggle"
                    on:click=move |_| dropdown_open.update(|open| *open = !*open)
                >
                    {move || display_name(session.user_name())}
                </button>
                <Show when=move || dropdown_open.get()>
                    <div class="menu-bar__dropdown">
                        <button class="menu-bar__logout" on:click=on_logout.clone()>"로그아웃"</button>
                    </div>
                </Show>
            </div>
        </nav>
    }
}
