//! ページネーションバー
//!
//! ページモデルの計算はcommon側（Pagination::compute）に寄せ、ここでは
//! ボタン列への展開とクリックの配線だけを行う。total=0のときは何も出さない。

use leptos::prelude::*;

use inventario_common::{format_number, PageItem, Pagination};

use crate::search::SearchController;

#[component]
pub fn PaginationBar(search: SearchController) -> impl IntoView {
    let result = search.result;
    let filters = search.filters;

    move || {
        let response = result.get()?;
        let page_size = filters.get().page_size;
        let pagination = Pagination::compute(response.total, page_size, response.page)?;

        let range_label = format!(
            "Mostrando {}-{} de {}",
            format_number(pagination.start as i64),
            format_number(pagination.end as i64),
            format_number(pagination.total as i64)
        );

        let prev = {
            let search = search.clone();
            let page = pagination.current - 1;
            move |_| search.search(page)
        };
        let next = {
            let search = search.clone();
            let page = pagination.current + 1;
            move |_| search.search(page)
        };

        let buttons = pagination
            .window()
            .into_iter()
            .map(|item| match item {
                PageItem::Ellipsis => {
                    view! { <span class="page-ellipsis">"..."</span> }.into_any()
                }
                PageItem::Page(page) => {
                    let search = search.clone();
                    let class = if page == pagination.current {
                        "page-button active"
                    } else {
                        "page-button"
                    };
                    view! {
                        <button class=class on:click=move |_| search.search(page)>
                            {page.to_string()}
                        </button>
                    }
                        .into_any()
                }
            })
            .collect_view();

        Some(view! {
            <div class="pagination-bar">
                <span class="pagination-range">{range_label}</span>
                <div class="pagination-buttons">
                    <button
                        class="page-button"
                        disabled=!pagination.prev_enabled()
                        on:click=prev
                    >
                        "Anterior"
                    </button>
                    {buttons}
                    <button
                        class="page-button"
                        disabled=!pagination.next_enabled()
                        on:click=next
                    >
                        "Siguiente"
                    </button>
                </div>
            </div>
        })
    }
}
