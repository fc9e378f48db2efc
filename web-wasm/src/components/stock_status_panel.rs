//! 在庫ステータスカードパネル
//!
//! クリックで該当ステータスの絞り込みをトグルする。カードの強調は
//! FilterState.statusだけから毎回計算し直す（差分更新はしない）。

use leptos::prelude::*;

use inventario_common::{format_number, StockStatusSlice};

use crate::search::SearchController;

#[component]
pub fn StockStatusPanel(slices: Vec<StockStatusSlice>, search: SearchController) -> impl IntoView {
    let filters = search.filters;
    let bars = slices.clone();

    view! {
        <div class="card">
            <h3>"Estado del Stock"</h3>
            <div class="stock-status-grid">
                {slices
                    .into_iter()
                    .map(|slice| {
                        let status = slice.status;
                        let search = search.clone();
                        let card_class = move || {
                            if filters.get().status == Some(status) {
                                "stock-status-card active"
                            } else {
                                "stock-status-card"
                            }
                        };
                        let label = if slice.label.is_empty() {
                            status.label().to_string()
                        } else {
                            slice.label.clone()
                        };

                        view! {
                            <div class=card_class on:click=move |_| search.toggle_status(status)>
                                <div class="stock-status-icon">{slice.icon.clone()}</div>
                                <p class="stock-status-count">
                                    {format_number(slice.count as i64)}
                                </p>
                                <p class="stock-status-label">{label}</p>
                                <p
                                    class="stock-status-pct"
                                    style=format!("color: {}", slice.color)
                                >
                                    {format!("{}%", slice.percentage)}
                                </p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="status-bar-track">
                {bars
                    .into_iter()
                    .map(|slice| {
                        view! {
                            <div
                                class="status-bar"
                                style=format!(
                                    "width: {}%; background-color: {};",
                                    slice.percentage,
                                    slice.color
                                )
                                title=format!("{}: {} productos", slice.label, slice.count)
                            ></div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
