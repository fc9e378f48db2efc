//! APIレスポンスの型定義
//!
//! バックエンドのJSONコントラクト（/api/*）をそのまま写した読み取り専用の射影。
//! 欠けたフィールドはデフォルト値に落ちるよう全て `#[serde(default)]` を付ける。

use serde::{Deserialize, Serialize};

use crate::status::StockStatus;

/// /api/kpis のアラート内訳
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertCounts {
    pub out_of_stock: u64,
    pub negative_stock: u64,
    pub critical: u64,
    pub low: u64,
    pub overstock: u64,
    pub total_alerts: u64,
}

/// /api/kpis
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Kpis {
    pub total_skus: u64,
    pub active_skus: u64,
    pub inactive_skus: u64,
    pub total_stock: i64,
    pub total_value: f64,
    pub avg_stock: f64,
    pub avg_margin_pct: f64,
    pub diferencias_count: u64,
    pub diferencias_units: i64,
    pub diferencias_value: f64,
    pub alerts: AlertCounts,
}

/// /api/stock-status の1区分
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockStatusSlice {
    pub status: StockStatus,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub percentage: f64,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub icon: String,
}

/// /api/suppliers の1行
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SupplierValue {
    pub supplier: String,
    pub products: u64,
    pub stock: i64,
    pub value: f64,
    pub value_pct: f64,
}

/// /api/categories の1行
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryValue {
    pub category: String,
    pub products: u64,
    pub stock: i64,
    pub value: f64,
    pub value_pct: f64,
}

/// /api/brands の1行
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BrandValue {
    pub brand: String,
    pub products: u64,
    pub stock: i64,
    pub value: f64,
    pub value_pct: f64,
}

/// 商品1行の読み取り専用射影
///
/// stockは符号付き: 負値は在庫差異（エラーではなくデータの事実）。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductRow {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub sku: String,
    #[serde(default)]
    pub product: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub stock: i64,
    #[serde(default)]
    pub value: f64,
    #[serde(default)]
    pub price: f64,
    pub status: StockStatus,
    #[serde(default)]
    pub abc_class: String,
    #[serde(default)]
    pub created_at: String,
}

/// /api/search
///
/// 毎回丸ごと置き換えるエフェメラルな結果。マージ・追記はしない。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchResponse {
    pub results: Vec<ProductRow>,
    pub total: u64,
    pub showing: u64,
    pub page: u32,
    pub pages: u32,
}

/// /api/metadata
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Metadata {
    pub store_name: String,
    pub upload_date: String,
}

/// /api/health
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthStatus {
    pub status: String,
    pub data_loaded: bool,
    pub total_products: u64,
}

/// /api/upload 成功レスポンス
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadResponse {
    pub success: bool,
    pub message: String,
    pub columns: Vec<String>,
    pub total_rows: u64,
    pub file_size_mb: f64,
}

/// 非2xxレスポンスのボディ
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiErrorBody {
    pub error: String,
}
