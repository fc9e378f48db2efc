//! チャート描画ブリッジ
//!
//! 描画はJavaScript側（Chart.js）に委譲する。Rust側はラベル付き数値系列を
//! JSONで渡すだけの純粋なシンクとして扱う。同じキャンバスへの再描画は
//! ブリッジ側が前のインスタンスを破棄してから作り直す。

use serde::Serialize;
use wasm_bindgen::prelude::*;

use inventario_common::{BrandValue, CategoryValue, SupplierValue};

/// JavaScript側に渡す棒グラフ系列
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub color: String,
    /// 横棒グラフかどうか
    pub horizontal: bool,
}

#[wasm_bindgen(module = "/js/charts-bridge.js")]
extern "C" {
    /// JavaScript側で棒グラフを描画
    ///
    /// # Arguments
    /// * `canvas_id` - 描画先canvasのid
    /// * `series_json` - ChartSeriesのJSON文字列
    #[wasm_bindgen(js_name = "renderBarChart")]
    pub fn render_bar_chart_js(canvas_id: &str, series_json: &str);
}

/// 文字数でラベルを切り詰める（チャートの軸が潰れないように）
fn truncate_label(label: &str, max_chars: usize) -> String {
    label.chars().take(max_chars).collect()
}

/// プロベドール上位8件の系列
pub fn suppliers_series(suppliers: &[SupplierValue]) -> ChartSeries {
    let top = &suppliers[..suppliers.len().min(8)];
    ChartSeries {
        labels: top
            .iter()
            .map(|s| truncate_label(&s.supplier, 15))
            .collect(),
        values: top.iter().map(|s| s.value).collect(),
        color: "#0c4a6e".to_string(),
        horizontal: true,
    }
}

/// カテゴリ全件の系列
pub fn categories_series(categories: &[CategoryValue]) -> ChartSeries {
    ChartSeries {
        labels: categories
            .iter()
            .map(|c| truncate_label(&c.category, 12))
            .collect(),
        values: categories.iter().map(|c| c.value).collect(),
        color: "#f97316".to_string(),
        horizontal: true,
    }
}

/// マーカ上位10件の系列
pub fn brands_series(brands: &[BrandValue]) -> ChartSeries {
    let top = &brands[..brands.len().min(10)];
    ChartSeries {
        labels: top.iter().map(|b| truncate_label(&b.brand, 15)).collect(),
        values: top.iter().map(|b| b.value).collect(),
        color: "#22c55e".to_string(),
        horizontal: false,
    }
}

/// 系列をJSONにしてブリッジへ渡す
pub fn render_series(canvas_id: &str, series: &ChartSeries) {
    match serde_json::to_string(series) {
        Ok(json) => render_bar_chart_js(canvas_id, &json),
        Err(error) => {
            gloo::console::error!(format!("error serializando serie de gráfico: {}", error))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn supplier(name: &str, value: f64) -> SupplierValue {
        SupplierValue {
            supplier: name.to_string(),
            value,
            ..Default::default()
        }
    }

    #[test]
    fn test_suppliers_series_top_8() {
        let suppliers: Vec<SupplierValue> = (0..12)
            .map(|i| supplier(&format!("Proveedor {}", i), f64::from(i)))
            .collect();

        let series = suppliers_series(&suppliers);
        assert_eq!(series.labels.len(), 8);
        assert_eq!(series.values.len(), 8);
        assert!(series.horizontal);
    }

    #[test]
    fn test_suppliers_series_fewer_than_8() {
        let suppliers = vec![supplier("Backus", 1200.0), supplier("Gloria", 800.0)];
        let series = suppliers_series(&suppliers);
        assert_eq!(series.labels, vec!["Backus", "Gloria"]);
        assert_eq!(series.values, vec![1200.0, 800.0]);
    }

    #[test]
    fn test_truncate_label_respects_char_boundaries() {
        // マルチバイト文字でもパニックしない
        assert_eq!(truncate_label("Panadería y Pastelería", 12), "Panadería y ");
        assert_eq!(truncate_label("corto", 15), "corto");
    }

    #[test]
    fn test_brands_series_top_10() {
        let brands: Vec<BrandValue> = (0..15)
            .map(|i| BrandValue {
                brand: format!("Marca {}", i),
                value: f64::from(i) * 10.0,
                ..Default::default()
            })
            .collect();

        let series = brands_series(&brands);
        assert_eq!(series.labels.len(), 10);
        assert!(!series.horizontal);
    }

    #[test]
    fn test_series_serialize_camel_case() {
        let series = ChartSeries {
            labels: vec!["Bebidas".to_string()],
            values: vec![123.4],
            color: "#f97316".to_string(),
            horizontal: true,
        };

        let json = serde_json::to_string(&series).expect("シリアライズ失敗");
        assert!(json.contains("\"labels\":[\"Bebidas\"]"));
        assert!(json.contains("\"values\":[123.4]"));
        assert!(json.contains("\"horizontal\":true"));
    }
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn wasm_series_json_parses_in_browser() {
        // ブリッジに渡すJSONがJS側のJSON.parseでそのまま読めること
        let categories = vec![CategoryValue {
            category: "Bebidas".to_string(),
            value: 4500.0,
            ..Default::default()
        }];
        let json =
            serde_json::to_string(&categories_series(&categories)).expect("シリアライズ失敗");

        let parsed = js_sys::JSON::parse(&json).expect("JSON.parse failed");
        let labels = js_sys::Reflect::get(&parsed, &"labels".into()).expect("labels missing");
        let labels: js_sys::Array = labels.dyn_into().expect("labels is not an array");
        assert_eq!(labels.length(), 1);
        assert_eq!(labels.get(0).as_string().as_deref(), Some("Bebidas"));

        let horizontal =
            js_sys::Reflect::get(&parsed, &"horizontal".into()).expect("horizontal missing");
        assert_eq!(horizontal.as_bool(), Some(true));
    }
}
