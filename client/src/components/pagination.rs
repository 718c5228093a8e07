//! Block-based page links for the board list.

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

use std::ops::Range;

use leptos::prelude::*;

/// Rows the backend returns per board list page.
pub const ROWS_PER_PAGE: usize = 10;
/// Page links shown at once.
pub const PAGES_PER_BLOCK: usize = 10;

/// Zero-based page links to render around the current page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageWindow {
    pub pages: Range<usize>,
    /// Last page of the previous block.
    pub prev_block: Option<usize>,
    /// First page of the next block.
    pub next_block: Option<usize>,
}

pub fn total_pages(total_rows: usize) -> usize {
    total_rows.div_ceil(ROWS_PER_PAGE)
}

pub fn page_window(current: usize, total_pages: usize) -> PageWindow {
    if total_pages == 0 {
        return PageWindow { pages: 0..0, prev_block: None, next_block: None };
    }
    let current = current.min(total_pages - 1);
    let start = current / PAGES_PER_BLOCK * PAGES_PER_BLOCK;
    let end = (start + PAGES_PER_BLOCK).min(total_pages);
    PageWindow {
        pages: start..end,
        prev_block: start.checked_sub(1),
        next_block: (end < total_pages).then_some(end),
    }
}

#[component]
pub fn Pagination(
    #[prop(into)] page: Signal<usize>,
    #[prop(into)] total_rows: Signal<usize>,
    on_move: Callback<usize>,
) -> impl IntoView {
    let window = Memo::new(move |_| page_window(page.get(), total_pages(total_rows.get())));

    view! {
        <nav class="pagination" aria-label="pages">
            {move || {
                window
                    .get()
                    .prev_block
                    .map(|target| {
                        view! {
                            <button class="pagination__arrow" on:click=move |_| on_move.run(target)>
                                "«"
                            </button>
                        }
                    })
            }}
            {move || {
                window
                    .get()
                    .pages
                    .map(|target| {
                        view! {
                            <button
                                class="pagination__page"
                                class:pagination__page--active=move || page.get() == target
                                on:click=move |_| on_move.run(target)
                            >
                                {target + 1}
                            </button>
                        }
                    })
                    .collect_view()
            }}
            {move || {
                window
                    .get()
                    .next_block
                    .map(|target| {
                        view! {
                            <button class="pagination__arrow" on:click=move |_| on_move.run(target)>
                                "»"
                            </button>
                        }
                    })
            }}
        </nav>
    }
}
