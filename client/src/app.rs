//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::components::layout::Layout;
use crate::net::pipeline::ApiClient;
use crate::pages::{
    admin::AdminPage, board_detail::BoardDetailPage, board_list::BoardListPage, board_write::BoardWritePage,
    gallery::GalleryPage, login::LoginPage,
};
use crate::state::query::QueryClient;
use crate::state::session::SessionStore;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="ko">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the session store, request pipeline, and query cache, and hands
/// them to every route through context.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = SessionStore::rehydrate();
    provide_context(session);
    provide_context(ApiClient::new(session));
    provide_context(QueryClient::new());

    view! {
        <Stylesheet id="leptos" href="/pkg/noticeboard.css"/>
        <Title text="Notice Board"/>

        <Router>
            <Routes fallback=|| "페이지를 찾을 수 없습니다.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <ParentRoute path=StaticSegment("") view=Layout>
                    <Route path=StaticSegment("") view=BoardListPage/>
                    <Route path=StaticSegment("board") view=BoardListPage/>
                    <Route path=(StaticSegment("board"), StaticSegment("add")) view=BoardWritePage/>
                    <Route path=(StaticSegment("board"), ParamSegment("brd_id")) view=BoardDetailPage/>
                    <Route path=StaticSegment("gall") view=GalleryPage/>
                    <Route path=StaticSegment("admin") view=AdminPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}
