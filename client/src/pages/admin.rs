//! Administrator landing page. Reached only through the `ROLE_ADMIN` guard.

use leptos::prelude::*;

use crate::state::session::SessionStore;

#[component]
pub fn AdminPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();

    view! {
        <div class="container">
            <header>
                <h2>"관리자페이지"</h2>
            </header>
            <section class="admin">
                <p>{move || format!("{} 님, 관리자 권한으로 로그인했습니다.", session.user_name().unwrap_or_default())}</p>
                <p class="text-muted">
                    {move || session.get_user_role().map(|role| role.as_str().to_owned()).unwrap_or_default()}
                </p>
            </section>
        </div>
    }
}
