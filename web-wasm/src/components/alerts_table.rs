//! 在庫アラートテーブル（上位15件）

use leptos::prelude::*;

use inventario_common::{format_number, ProductRow};

use crate::components::badges::status_badge;

#[component]
pub fn AlertsTable(alerts: Vec<ProductRow>) -> impl IntoView {
    view! {
        <div class="card">
            <h3>"Alertas de Stock"</h3>
            {if alerts.is_empty() {
                view! { <p class="results-empty">"Sin alertas de stock"</p> }.into_any()
            } else {
                view! {
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th class="text-left">"Producto"</th>
                                <th class="text-right">"Stock"</th>
                                <th class="text-left">"Estado"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {alerts
                                .into_iter()
                                .take(15)
                                .map(|row| {
                                    let stock_class = if row.stock < 0 {
                                        "text-right stock-negative"
                                    } else {
                                        "text-right"
                                    };
                                    view! {
                                        <tr>
                                            <td>
                                                <p class="product-name" title=row.product.clone()>
                                                    {row.product.clone()}
                                                </p>
                                                <p class="product-category">{row.sku.clone()}</p>
                                            </td>
                                            <td class=stock_class>{format_number(row.stock)}</td>
                                            <td>{status_badge(row.status)}</td>
                                        </tr>
                                    }
                                })
                                .collect_view()}
                        </tbody>
                    </table>
                }
                    .into_any()
            }}
        </div>
    }
}
