//! APIクライアント
//!
//! バックエンド(/api)へのfetchラッパー。全リクエストでクレデンシャルを送る。
//! タイムアウト・キャンセル・自動リトライは持たない（この層の設計どおり）。

use gloo::console;
use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, Request, RequestCredentials, RequestInit, Response};

use inventario_common::{
    brands_query, AggregateSnapshot, ApiErrorBody, BrandValue, CategoryValue, Error,
    HealthStatus, Kpis, Metadata, ProductRow, Result, SearchResponse, StockStatusSlice,
    SupplierValue, UploadResponse,
};

/// APIベースURL（常に相対: クロスオリジン問題を避ける）
const API_URL: &str = "/api";

fn js_err(value: JsValue) -> Error {
    Error::Network(format!("{:?}", value))
}

/// fetchを発行してResponseを得る
async fn run_request(request: Request) -> Result<Response> {
    let window =
        web_sys::window().ok_or_else(|| Error::Network("window no disponible".to_string()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_err)?;
    resp_value
        .dyn_into::<Response>()
        .map_err(|_| Error::Network("respuesta no válida".to_string()))
}

/// 非2xxレスポンスを`error`フィールド付きのApiエラーへ変換する
async fn api_error(resp: Response) -> Error {
    let status = resp.status();
    let message = match resp.text() {
        Ok(promise) => match JsFuture::from(promise).await {
            Ok(value) => value
                .as_string()
                .and_then(|body| serde_json::from_str::<ApiErrorBody>(&body).ok())
                .map(|body| body.error)
                .unwrap_or_default(),
            Err(_) => String::new(),
        },
        Err(_) => String::new(),
    };
    Error::Api { status, message }
}

/// GETしてJSONボディをデコードする
async fn get_json<T: DeserializeOwned>(path_and_query: &str) -> Result<T> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_credentials(RequestCredentials::Include);

    let url = format!("{}{}", API_URL, path_and_query);
    let request = Request::new_with_str_and_init(&url, &opts).map_err(js_err)?;

    let resp = run_request(request).await?;
    if !resp.ok() {
        return Err(api_error(resp).await);
    }

    let json = JsFuture::from(resp.json().map_err(js_err)?)
        .await
        .map_err(js_err)?;
    serde_wasm_bindgen::from_value(json).map_err(|e| Error::Decode(e.to_string()))
}

/// GET /api/health（ページロード時に1回だけ）
pub async fn health() -> Result<HealthStatus> {
    get_json("/health").await
}

/// GET /api/search?q=&category=&brand=&status=&sort=&page=&limit=
pub async fn search(query: &str) -> Result<SearchResponse> {
    get_json(&format!("/search?{}", query)).await
}

/// GET /api/unique-brands?category=<opcional>
pub async fn unique_brands(category: &str) -> Result<Vec<String>> {
    let query = brands_query(category);
    if query.is_empty() {
        get_json("/unique-brands").await
    } else {
        get_json(&format!("/unique-brands?{}", query)).await
    }
}

/// POST /api/upload（multipart、フィールド名`file`）
pub async fn upload(form: &FormData) -> Result<UploadResponse> {
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_credentials(RequestCredentials::Include);
    opts.set_body(form.as_ref());

    let url = format!("{}/upload", API_URL);
    let request = Request::new_with_str_and_init(&url, &opts).map_err(js_err)?;

    let resp = run_request(request).await?;
    if !resp.ok() {
        return Err(api_error(resp).await);
    }

    let json = JsFuture::from(resp.json().map_err(js_err)?)
        .await
        .map_err(js_err)?;
    serde_wasm_bindgen::from_value(json).map_err(|e| Error::Decode(e.to_string()))
}

/// 失敗したエンドポイント名を診断ログに残す（ユーザーには見せない）
fn tag<T>(endpoint: &str, result: Result<T>) -> Result<T> {
    if let Err(error) = &result {
        console::error!(format!("fallo en /api/{}: {}", endpoint, error));
    }
    result
}

/// 8つの集計エンドポイントをまとめて取得する（all-or-nothing join）
///
/// 8本を同時に発行し、全て完了してから畳み込む。1本でも失敗すれば全体が
/// 失敗で、最初のエラーを返す。
pub async fn load_snapshot() -> Result<AggregateSnapshot> {
    let (kpis, stock_status, suppliers, categories, brands, top_products, alerts, metadata) =
        futures::join!(
            get_json::<Kpis>("/kpis"),
            get_json::<Vec<StockStatusSlice>>("/stock-status"),
            get_json::<Vec<SupplierValue>>("/suppliers"),
            get_json::<Vec<CategoryValue>>("/categories"),
            get_json::<Vec<BrandValue>>("/brands"),
            get_json::<Vec<ProductRow>>("/top-products"),
            get_json::<Vec<ProductRow>>("/alerts"),
            get_json::<Metadata>("/metadata"),
        );

    AggregateSnapshot::from_parts(
        tag("kpis", kpis),
        tag("stock-status", stock_status),
        tag("suppliers", suppliers),
        tag("categories", categories),
        tag("brands", brands),
        tag("top-products", top_products),
        tag("alerts", alerts),
        tag("metadata", metadata),
    )
}
