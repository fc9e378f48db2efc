//! チャートパネル
//!
//! プロベドール・カテゴリ・マーカの3つの棒グラフ。描画そのものは
//! ブリッジ（charts.rs）経由でJavaScript側に委譲する。

use leptos::prelude::*;

use inventario_common::{BrandValue, CategoryValue, SupplierValue};

use crate::charts;

#[component]
pub fn ChartsPanel(
    suppliers: Vec<SupplierValue>,
    categories: Vec<CategoryValue>,
    brands: Vec<BrandValue>,
) -> impl IntoView {
    // カテゴリは全件表示するため縦に伸ばす
    let categories_height = 280.max(categories.len() * 40);

    // canvasがDOMに載ってから描画する
    Effect::new(move |_| {
        charts::render_series("suppliers-chart", &charts::suppliers_series(&suppliers));
        charts::render_series("categories-chart", &charts::categories_series(&categories));
        charts::render_series("brands-chart", &charts::brands_series(&brands));
    });

    view! {
        <div class="charts-grid">
            <div class="card chart-card">
                <h3>"Valor por Proveedor"</h3>
                <div class="chart-container">
                    <canvas id="suppliers-chart"></canvas>
                </div>
            </div>
            <div class="card chart-card">
                <h3>"Valor por Categoría"</h3>
                <div class="chart-container chart-scroll">
                    <div style=format!("height: {}px; min-height: {}px;", categories_height, categories_height)>
                        <canvas id="categories-chart"></canvas>
                    </div>
                </div>
            </div>
            <div class="card chart-card">
                <h3>"Valor por Marca"</h3>
                <div class="chart-container">
                    <canvas id="brands-chart"></canvas>
                </div>
            </div>
        </div>
    }
}
