//! 検索結果テーブル
//!
//! SearchResponseをそのまま行に描画する。並び替え・絞り込みはサーバー側の
//! 仕事で、ここでは一切加工しない。

use leptos::prelude::*;

use inventario_common::{format_currency, format_number, ProductRow};

use crate::components::badges::{brand_badge, status_badge};
use crate::search::SearchController;

fn row_view(row: ProductRow) -> impl IntoView {
    let created_at = if row.created_at.is_empty() {
        "-".to_string()
    } else {
        row.created_at.clone()
    };
    let stock_class = if row.stock < 0 {
        "text-right stock-negative"
    } else {
        "text-right"
    };

    view! {
        <tr>
            <td class="date-cell">{created_at}</td>
            <td class="sku-cell">{row.sku.clone()}</td>
            <td>
                <p class="product-name" title=row.product.clone()>{row.product.clone()}</p>
            </td>
            <td>{row.category.clone()}</td>
            <td>{brand_badge(&row.brand)}</td>
            <td class=stock_class>{format_number(row.stock)}</td>
            <td class="text-right value-cell">{format_currency(row.value)}</td>
            <td>{status_badge(row.status)}</td>
        </tr>
    }
}

#[component]
pub fn ResultsTable(search: SearchController) -> impl IntoView {
    let result = search.result;

    view! {
        <div class="card results-card">
            <div class="results-header">
                <h3>"Productos"</h3>
                <Show when=move || result.get().is_some()>
                    <span class="results-count">
                        {move || {
                            result
                                .get()
                                .map(|r| {
                                    format!(
                                        "Mostrando {} de {} productos",
                                        format_number(r.showing as i64),
                                        format_number(r.total as i64)
                                    )
                                })
                                .unwrap_or_default()
                        }}
                    </span>
                </Show>
            </div>
            {move || {
                let rows = result.get().map(|r| r.results).unwrap_or_default();
                if rows.is_empty() {
                    view! {
                        <p class="results-empty">"No se encontraron productos"</p>
                    }
                        .into_any()
                } else {
                    view! {
                        <div class="table-scroll">
                            <table class="data-table">
                                <thead>
                                    <tr>
                                        <th class="text-left">"Fecha Ingreso"</th>
                                        <th class="text-left">"SKU"</th>
                                        <th class="text-left">"Producto"</th>
                                        <th class="text-left">"Categoría"</th>
                                        <th class="text-left">"Marca"</th>
                                        <th class="text-right">"Stock"</th>
                                        <th class="text-right">"Valor"</th>
                                        <th class="text-left">"Estado"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {rows.into_iter().map(row_view).collect_view()}
                                </tbody>
                            </table>
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
