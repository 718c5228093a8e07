//! Image gallery with search, category filter, and infinite scroll.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages are appended to a single `GalleryState`. A window scroll listener
//! asks for the next page when the viewport nears the bottom; the same check
//! runs after each render so a short first page still fills the screen.
//! Switching the query parks the current result in a `GalleryCache`, so going
//! back to a recent search shows its pages again without refetching.

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

use leptos::prelude::*;

use crate::net::api;
use crate::net::cancel::CancelToken;
use crate::net::pipeline::ApiClient;
use crate::net::types::GalleryImage;
use crate::state::gallery::{CATEGORIES, GalleryCache, GalleryQuery, GalleryState, GalleryStatus, category_label};

fn summary_text(total: usize, shown: usize, search: &str) -> String {
    if search.is_empty() {
        format!("총 {total}개 이미지 중 {shown}개 표시")
    } else {
        format!("총 {total}개 이미지 중 {shown}개 표시 - \"{search}\" 검색 결과")
    }
}

fn category_class(selected: bool) -> &'static str {
    if selected { "btn btn-sm btn-primary" } else { "btn btn-sm btn-outline-primary" }
}

#[cfg(feature = "hydrate")]
fn viewport_near_bottom() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let viewport_height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let document_height = window
        .document()
        .and_then(|d| d.document_element())
        .map_or(0.0, |el| f64::from(el.scroll_height()));
    crate::state::gallery::near_bottom(scroll_y, viewport_height, document_height)
}

/// Milliseconds on the page clock; parked results age against it.
fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().and_then(|w| w.performance()).map_or(0.0, |p| p.now())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

fn scroll_to_top() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    }
}

#[component]
pub fn GalleryPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let cancel = CancelToken::scoped();

    let state = RwSignal::new(GalleryState::default());
    let cache = StoredValue::new(GalleryCache::default());
    let search_input = RwSignal::new(String::new());
    let search = RwSignal::new(String::new());
    let category = RwSignal::new("all".to_owned());

    let load_next = Callback::new(move |()| {
        let Some(ticket) = state.try_update(GalleryState::begin_fetch).flatten() else {
            return;
        };
        let query = state.with_untracked(|s| s.query.clone());
        let cancel = cancel.clone();
        leptos::task::spawn_local(async move {
            let result = api::fetch_gallery(client, &query, ticket.page, &cancel).await;
            if cancel.is_cancelled() {
                return;
            }
            if let Err(err) = &result {
                leptos::logging::warn!("gallery page {} failed: {err}", ticket.page);
            }
            state.update(|s| {
                s.finish_fetch(ticket, result.map_err(|e| e.to_string()));
            });
        });
    });

    Effect::new(move || {
        let query = GalleryQuery { search: search.get(), category: category.get() };
        let now = now_ms();
        let outgoing = state.get_untracked();
        let mut parked = None;
        cache.update_value(|cache| {
            cache.park(outgoing, now);
            parked = cache.take(&query, now);
        });
        match parked {
            Some(parked) => state.update(|s| s.restore(parked)),
            None => {
                state.update(|s| s.reset(query));
                load_next.run(());
            }
        }
    });

    #[cfg(feature = "hydrate")]
    {
        let check = move || {
            let near = viewport_near_bottom();
            if state.with_untracked(|s| s.should_load_more(near)) {
                load_next.run(());
            }
        };
        let handle = window_event_listener(leptos::ev::scroll, move |_| check());
        on_cleanup(move || handle.remove());
        Effect::new(move || {
            state.track();
            request_animation_frame(check);
        });
    }

    let status = Memo::new(move |_| state.with(GalleryState::status));

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        search.set(search_input.get_untracked().trim().to_owned());
    };
    let clear_search = move |()| {
        search_input.set(String::new());
        search.set(String::new());
    };

    view! {
        <div class="container gallery">
            <h1 class="gallery__title">"이미지 갤러리"</h1>
            <form class="gallery__search" on:submit=on_search>
                <input
                    type="text"
                    name="search"
                    class="form-control"
                    placeholder="이미지 검색..."
                    prop:value=move || search_input.get()
                    on:input=move |ev| search_input.set(event_target_value(&ev))
                />
                <button class="btn btn-primary" type="submit">"검색"</button>
            </form>
            <div class="gallery__filters">
                {CATEGORIES
                    .into_iter()
                    .map(|value| {
                        view! {
                            <button
                                class=move || category_class(category.get() == value)
                                on:click=move |_| category.set(value.to_owned())
                            >
                                {category_label(value).to_owned()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            {move || match status.get() {
                GalleryStatus::Loading => view! {
                    <div class="gallery__status">
                        <p>"이미지를 불러오는 중..."</p>
                    </div>
                }
                .into_any(),
                GalleryStatus::Error => view! {
                    <div class="gallery__status gallery__status--error" role="alert">
                        <h4>"오류가 발생했습니다"</h4>
                        <p>"이미지를 불러오는 중 문제가 발생했습니다."</p>
                        <p class="text-muted small">{move || state.with(|s| s.error.clone().unwrap_or_default())}</p>
                        <button class="btn btn-primary" on:click=move |_| load_next.run(())>"다시 시도"</button>
                    </div>
                }
                .into_any(),
                GalleryStatus::Success => view! {
                    <GalleryResults state=state on_retry=load_next on_clear_search=Callback::new(clear_search)/>
                }
                .into_any(),
            }}
        </div>
    }
}

/// Loaded images plus the summary and end-of-list affordances. Mounted once
/// per query; new pages are appended by key.
#[component]
fn GalleryResults(
    state: RwSignal<GalleryState>,
    on_retry: Callback<()>,
    on_clear_search: Callback<()>,
) -> impl IntoView {
    let images = Memo::new(move |_| state.with(GalleryState::images));
    let searched = Memo::new(move |_| state.with(|s| !s.query.search.is_empty()));
    let summary = move || state.with(|s| summary_text(s.total_count(), s.image_count(), &s.query.search));
    let empty = Memo::new(move |_| state.with(|s| s.image_count() == 0));
    let fetching = Memo::new(move |_| state.with(|s| s.fetching));
    let failed = Memo::new(move |_| state.with(|s| s.error.is_some()));
    let end_of_list = Memo::new(move |_| state.with(|s| s.image_count() > 0 && !s.has_next_page()));

    view! {
        <div class="gallery__summary">
            <small class="text-muted">{summary}</small>
            <Show when=move || searched.get()>
                <button class="btn btn-sm btn-outline-secondary" on:click=move |_| on_clear_search.run(())>
                    "검색 초기화"
                </button>
            </Show>
        </div>
        <Show
            when=move || !empty.get()
            fallback=move || {
                view! {
                    <div class="gallery__status">
                        <p class="text-muted">"검색 결과가 없습니다."</p>
                        <button class="btn btn-outline-primary" on:click=move |_| on_clear_search.run(())>
                            "전체 이미지 보기"
                        </button>
                    </div>
                }
            }
        >
            <div class="gallery__grid">
                <For each=move || images.get() key=|image| image.id.clone() children=image_card/>
            </div>
        </Show>
        <Show when=move || fetching.get()>
            <div class="gallery__status">
                <p>"더 많은 이미지를 불러오는 중..."</p>
            </div>
        </Show>
        <Show when=move || failed.get()>
            <div class="gallery__status gallery__status--error" role="alert">
                <p>"이미지를 불러오는 중 문제가 발생했습니다."</p>
                <button class="btn btn-primary btn-sm" on:click=move |_| on_retry.run(())>"다시 시도"</button>
            </div>
        </Show>
        <Show when=move || end_of_list.get()>
            <div class="gallery__status">
                <p class="text-muted">"모든 이미지를 불러왔습니다."</p>
                <button class="btn btn-outline-primary btn-sm" on:click=move |_| scroll_to_top()>"맨 위로"</button>
            </div>
        </Show>
    }
}

fn image_card(image: GalleryImage) -> impl IntoView {
    let id = image.id.clone();
    view! {
        <div class="gallery-card">
            <div class="gallery-card__media">
                <img src=image.image_url alt=image.title.clone() loading="lazy"/>
                <span class="gallery-card__badge">{image.category}</span>
            </div>
            <div class="gallery-card__body">
                <h5>{image.title}</h5>
                <p class="small">{image.description}</p>
                <div class="gallery-card__stats">
                    <span>{format!("❤️ {}", image.likes)}</span>
                    <span>{format!("👁️ {}", image.views)}</span>
                </div>
                <button class="btn btn-primary btn-sm" on:click=move |_| leptos::logging::log!("view image {id}")>
                    "보기"
                </button>
            </div>
        </div>
    }
}
