//! トップ商品テーブル（在庫価値の上位10件）

use leptos::prelude::*;

use inventario_common::{format_currency, format_number, ProductRow};

#[component]
pub fn TopProductsTable(products: Vec<ProductRow>) -> impl IntoView {
    view! {
        <div class="card">
            <h3>"Top Productos por Valor"</h3>
            <table class="data-table">
                <thead>
                    <tr>
                        <th class="text-left">"Producto"</th>
                        <th class="text-right">"Stock"</th>
                        <th class="text-right">"Valor"</th>
                    </tr>
                </thead>
                <tbody>
                    {products
                        .into_iter()
                        .take(10)
                        .map(|row| {
                            view! {
                                <tr>
                                    <td>
                                        <p class="product-name" title=row.product.clone()>
                                            {row.product.clone()}
                                        </p>
                                        <p class="product-category">{row.category.clone()}</p>
                                    </td>
                                    <td class="text-right">{format_number(row.stock)}</td>
                                    <td class="text-right value-cell">
                                        {format_currency(row.value)}
                                    </td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
}
