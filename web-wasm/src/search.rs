//! 検索コントローラ
//!
//! FilterStateへの全変更をここに集約し、正規クエリを1本のリクエストに
//! シリアライズして発行する。レスポンスはSearchResultを丸ごと置き換える。
//!
//! 競合の扱い: リクエストはキャンセルしない。発行ごとに単調増加の
//! シーケンス番号を振り、完了時に自分がまだ最新の発行でなければ結果を
//! 捨てる（最後の意図が勝つ）。失敗はログに残し、直前の表示を維持する。

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use gloo::console;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use inventario_common::{search_query, FilterState, SearchResponse, SortDir, StockStatus};

use crate::api;

/// 検索状態のオーナー
///
/// FilterStateとSearchResultはこのコントローラの公開メソッド経由でのみ
/// 書き換えられる。描画コードは読み取り専用。
#[derive(Clone)]
pub struct SearchController {
    pub filters: RwSignal<FilterState>,
    pub result: RwSignal<Option<SearchResponse>>,
    /// カテゴリに依存するマーカ選択肢（/api/unique-brands）
    pub brand_options: RwSignal<Vec<String>>,
    seq: Arc<AtomicU64>,
}

impl Default for SearchController {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchController {
    pub fn new() -> Self {
        Self {
            filters: RwSignal::new(FilterState::default()),
            result: RwSignal::new(None),
            brand_options: RwSignal::new(Vec::new()),
            seq: Arc::new(AtomicU64::new(0)),
        }
    }

    /// 指定ページで検索を発行する
    ///
    /// 現在のFilterStateを読み、空のフィールドを省いたクエリを組み立てて
    /// 1本のリクエストを投げる。完了時、自分より新しい検索が発行済みなら
    /// 結果を破棄する。
    pub fn search(&self, page: u32) {
        self.filters.update(|filters| filters.set_page(page));
        let query = search_query(&self.filters.get_untracked());

        let issued = self.seq.fetch_add(1, Ordering::SeqCst) + 1;
        let seq = Arc::clone(&self.seq);
        let result = self.result;

        spawn_local(async move {
            match api::search(&query).await {
                Ok(response) => {
                    if seq.load(Ordering::SeqCst) == issued {
                        result.set(Some(response));
                    } else {
                        console::debug!("respuesta de búsqueda obsoleta descartada");
                    }
                }
                // 失敗時はユーザーへ黙って劣化: 直前の結果を残す
                Err(error) => console::error!(format!("error de búsqueda: {}", error)),
            }
        });
    }

    /// フィルターを初期状態へ戻し、1ページ目を検索する
    ///
    /// ダッシュボードロード成功時のシード。マーカ選択肢も全件に戻す。
    pub fn seed(&self) {
        self.filters.set(FilterState::default());
        self.refresh_brand_options();
        self.search(1);
    }

    /// テキスト検索の確定（Enter）
    pub fn submit_query(&self, query: String) {
        self.filters.update(|filters| filters.set_query(query));
        self.search(1);
    }

    pub fn set_category(&self, category: String) {
        self.filters.update(|filters| filters.set_category(category));
        self.refresh_brand_options();
        self.search(1);
    }

    pub fn set_brand(&self, brand: String) {
        self.filters.update(|filters| filters.set_brand(brand));
        self.search(1);
    }

    pub fn set_status(&self, status: Option<StockStatus>) {
        self.filters.update(|filters| filters.set_status(status));
        self.search(1);
    }

    /// ステータスカードのトグル（同じカードで解除）
    pub fn toggle_status(&self, status: StockStatus) {
        self.filters.update(|filters| filters.toggle_status(status));
        self.search(1);
    }

    pub fn set_sort_date(&self, dir: Option<SortDir>) {
        self.filters.update(|filters| filters.set_sort_date(dir));
        self.search(1);
    }

    pub fn set_sort_stock(&self, dir: Option<SortDir>) {
        self.filters.update(|filters| filters.set_sort_stock(dir));
        self.search(1);
    }

    pub fn set_sort_value(&self, dir: Option<SortDir>) {
        self.filters.update(|filters| filters.set_sort_value(dir));
        self.search(1);
    }

    pub fn set_page_size(&self, page_size: u32) {
        self.filters
            .update(|filters| filters.set_page_size(page_size));
        self.search(1);
    }

    /// カテゴリ変更に追随してマーカ選択肢を取り直す
    ///
    /// 現在選択中のマーカが新しいリストに残っていればそのまま、
    /// 消えていれば選択を外す。外した場合は絞り込み条件が変わって
    /// いるので1ページ目の検索を発行し直す（先行して発行済みの検索は
    /// 古いマーカを含んでおり、シーケンス番号で上書きされる）。
    fn refresh_brand_options(&self) {
        let category = self.filters.get_untracked().category;
        let controller = self.clone();

        spawn_local(async move {
            match api::unique_brands(&category).await {
                Ok(brands) => {
                    let mut cleared = false;
                    controller
                        .filters
                        .update(|f| cleared = f.retain_brand(&brands));
                    controller.brand_options.set(brands);
                    if cleared {
                        controller.search(1);
                    }
                }
                Err(error) => console::error!(format!("error al cargar marcas: {}", error)),
            }
        });
    }
}
