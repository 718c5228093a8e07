//! Paginated board list.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::pagination::Pagination;
use crate::net::api;
use crate::net::cancel::CancelToken;
use crate::net::pipeline::ApiClient;
use crate::net::types::BoardSummary;
use crate::state::query::{QueryClient, QueryKey};

#[component]
pub fn BoardListPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let query = expect_context::<QueryClient>();
    let cancel = CancelToken::scoped();
    let page = RwSignal::new(0_usize);
    query.hold(move || Some(QueryKey::BoardList(page.get())));

    let boards = LocalResource::new(move || {
        let page = page.get();
        query.track(&QueryKey::BoardList(page));
        let cancel = cancel.clone();
        async move { api::list_boards(client, page, &cancel).await }
    });

    let total_rows = Signal::derive(move || {
        boards
            .get()
            .and_then(Result::ok)
            .map_or(0, |list| list.total)
    });
    let on_move = Callback::new(move |target: usize| page.set(target));

    view! {
        <div class="container">
            <header class="header">
                <h2>"게시글 리스트"</h2>
                <A href="/board/add" attr:class="btn btn-outline-primary">"글쓰기"</A>
            </header>
            <section class="contents">
                <table class="table">
                    <thead class="table-dark">
                        <tr>
                            <th>"번호"</th>
                            <th>"제목"</th>
                            <th>"글쓴이"</th>
                            <th>"조회 수"</th>
                            <th>"생성일"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <Suspense fallback=move || view! { <tr><td colspan="5">"Loading..."</td></tr> }>
                            {move || {
                                boards
                                    .get()
                                    .map(|result| match result {
                                        Ok(list) if list.content.is_empty() => {
                                            view! { <tr><td colspan="5">"등록된 게시글이 없습니다."</td></tr> }
                                                .into_any()
                                        }
                                        Ok(list) => list.content.into_iter().map(board_row).collect_view().into_any(),
                                        Err(err) => {
                                            leptos::logging::warn!("board list failed: {err}");
                                            view! { <tr><td colspan="5">"게시글을 불러오지 못했습니다."</td></tr> }
                                                .into_any()
                                        }
                                    })
                            }}
                        </Suspense>
                    </tbody>
                </table>
            </section>
            <section>
                <Pagination page=page total_rows=total_rows on_move=on_move/>
            </section>
        </div>
    }
}

fn board_row(row: BoardSummary) -> impl IntoView {
    let href = format!("/board/{}", row.brd_id);
    view! {
        <tr>
            <td>{row.brd_id}</td>
            <td>
                <A href=href attr:class="board-link">{row.title}</A>
            </td>
            <td>{row.writer}</td>
            <td>{row.read_count}</td>
            <td>{row.create_date}</td>
        </tr>
    }
}
