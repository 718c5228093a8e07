//! Protected route frame: guard, menu bar, and the routed page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every route except `/login` renders inside this component, so the guard
//! decision runs on each navigation before the page mounts.
//!
//! DESIGN
//! ======
//! The server has no access to browser storage and always renders the empty
//! frame. The guarded content appears only after mount, once the session has
//! been rehydrated, which keeps SSR and hydration output identical.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Outlet;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::menu_bar::MenuBar;
use crate::routing::{GuardDecision, HOME_PATH, access_for, decide, guard_redirect};
use crate::state::session::SessionStore;

#[component]
pub fn Layout() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let location = use_location();
    let navigate = use_navigate();

    let mounted = RwSignal::new(false);
    Effect::new(move || mounted.set(true));

    let decision = Memo::new(move |_| {
        let path = location.pathname.get();
        let search = location.search.get();
        let search = search.trim_start_matches('?');
        let target = if search.is_empty() { path.clone() } else { format!("{path}?{search}") };
        decide(&session.session(), &access_for(&path), &target)
    });

    Effect::new(move |signed_in_before: Option<bool>| {
        let signed_in = session.is_authenticated();
        if mounted.get() {
            if let GuardDecision::RedirectToLogin { next } = decision.get() {
                let session_ended = signed_in_before == Some(true) && !signed_in;
                navigate(
                    &guard_redirect(&next, session_ended),
                    NavigateOptions { replace: true, ..NavigateOptions::default() },
                );
            }
        }
        signed_in
    });

    view! {
        <Show when=move || mounted.get()>
            {move || match decision.get() {
                GuardDecision::Allow => view! {
                    <MenuBar/>
                    <main class="page">
                        <Outlet/>
                    </main>
                }
                .into_any(),
                GuardDecision::Forbidden => view! {
                    <MenuBar/>
                    <main class="page page--forbidden">
                        <h2>"접근 권한이 없습니다."</h2>
                        <a href=HOME_PATH>"게시판으로 돌아가기"</a>
                    </main>
                }
                .into_any(),
                GuardDecision::RedirectToLogin { .. } => ().into_any(),
            }}
        </Show>
    }
}
