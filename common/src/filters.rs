//! 検索フィルター状態
//!
//! ユーザーのクエリ意図（テキスト・カテゴリ・マーカ・ステータス・ソート・
//! ページ）を1箇所に持つ。変更はUIハンドラ経由のセッターのみ。描画コードは
//! 読むだけで書かない。
//!
//! 不変条件:
//! - `page >= 1`
//! - `page_size` は `PAGE_SIZE_OPTIONS` のいずれか
//! - フィルター/ソート/ページサイズの変更は必ずページを1に戻す
//!   （絞り込み前の古いページ番号を再利用してはならない）

use crate::status::StockStatus;

/// ページサイズの選択肢
pub const PAGE_SIZE_OPTIONS: [u32; 4] = [10, 20, 50, 100];

/// デフォルトのページサイズ
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// ソート方向
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDir {
    Asc,
    Desc,
}

impl SortDir {
    /// select要素の値（"asc"/"desc"、空文字は未選択）から変換
    pub fn from_value(value: &str) -> Option<SortDir> {
        match value {
            "asc" => Some(SortDir::Asc),
            "desc" => Some(SortDir::Desc),
            _ => None,
        }
    }

    fn suffix(self) -> &'static str {
        match self {
            SortDir::Asc => "asc",
            SortDir::Desc => "desc",
        }
    }
}

/// 検索フィルター状態
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    pub query: String,
    pub category: String,
    pub brand: String,
    pub status: Option<StockStatus>,
    pub sort_date: Option<SortDir>,
    pub sort_stock: Option<SortDir>,
    pub sort_value: Option<SortDir>,
    pub page: u32,
    pub page_size: u32,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            query: String::new(),
            category: String::new(),
            brand: String::new(),
            status: None,
            sort_date: None,
            sort_stock: None,
            sort_value: None,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl FilterState {
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.page = 1;
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
        self.page = 1;
    }

    pub fn set_brand(&mut self, brand: impl Into<String>) {
        self.brand = brand.into();
        self.page = 1;
    }

    pub fn set_status(&mut self, status: Option<StockStatus>) {
        self.status = status;
        self.page = 1;
    }

    /// ステータスカードのトグル
    ///
    /// 既に選択中のステータスなら解除、それ以外なら選択する。
    /// 同じ値で2回適用すると元のFilterStateに戻る（冪等な2状態トグル）。
    pub fn toggle_status(&mut self, status: StockStatus) {
        if self.status == Some(status) {
            self.status = None;
        } else {
            self.status = Some(status);
        }
        self.page = 1;
    }

    pub fn set_sort_date(&mut self, dir: Option<SortDir>) {
        self.sort_date = dir;
        self.page = 1;
    }

    pub fn set_sort_stock(&mut self, dir: Option<SortDir>) {
        self.sort_stock = dir;
        self.page = 1;
    }

    pub fn set_sort_value(&mut self, dir: Option<SortDir>) {
        self.sort_value = dir;
        self.page = 1;
    }

    /// ページサイズ変更（不正値は無視）
    ///
    /// 変更すると以前のページのバイト範囲が無効になるため必ず1ページ目へ戻す。
    pub fn set_page_size(&mut self, page_size: u32) {
        if !PAGE_SIZE_OPTIONS.contains(&page_size) {
            return;
        }
        self.page_size = page_size;
        self.page = 1;
    }

    pub fn set_page(&mut self, page: u32) {
        self.page = page.max(1);
    }

    /// マーカ選択肢の更新に追随する
    ///
    /// 選択中のマーカが新しい選択肢に残っていなければ選択を外して
    /// 1ページ目へ戻す。外した場合はtrueを返す（呼び出し側は検索を
    /// 発行し直して表示と状態を一致させる）。
    pub fn retain_brand(&mut self, options: &[String]) -> bool {
        if self.brand.is_empty() || options.iter().any(|option| option == &self.brand) {
            return false;
        }
        self.brand.clear();
        self.page = 1;
        true
    }

    /// ソートパラメータのシリアライズ
    ///
    /// date→stock→value の固定優先順でカンマ結合。未選択のセレクタは飛ばし、
    /// 全て未選択ならNone（サーバーデフォルト順に任せる）。
    pub fn sort_param(&self) -> Option<String> {
        let mut parts: Vec<String> = Vec::with_capacity(3);
        if let Some(dir) = self.sort_date {
            parts.push(format!("date_{}", dir.suffix()));
        }
        if let Some(dir) = self.sort_stock {
            parts.push(format!("stock_{}", dir.suffix()));
        }
        if let Some(dir) = self.sort_value {
            parts.push(format!("value_{}", dir.suffix()));
        }
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(","))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =============================================
    // トグルの冪等性
    // =============================================

    #[test]
    fn test_toggle_status_on_off() {
        let mut filters = FilterState::default();

        filters.toggle_status(StockStatus::Critical);
        assert_eq!(filters.status, Some(StockStatus::Critical));

        filters.toggle_status(StockStatus::Critical);
        assert_eq!(filters.status, None);
    }

    #[test]
    fn test_toggle_status_twice_is_identity() {
        let mut filters = FilterState {
            query: "arroz".to_string(),
            category: "Abarrotes".to_string(),
            brand: "Costeño".to_string(),
            status: Some(StockStatus::Low),
            sort_value: Some(SortDir::Desc),
            ..Default::default()
        };
        let original = filters.clone();

        filters.toggle_status(StockStatus::Low);
        filters.toggle_status(StockStatus::Low);
        assert_eq!(filters, original);
    }

    #[test]
    fn test_toggle_status_switch() {
        let mut filters = FilterState::default();
        filters.toggle_status(StockStatus::Critical);
        filters.toggle_status(StockStatus::Negative);
        assert_eq!(filters.status, Some(StockStatus::Negative));
    }

    // =============================================
    // ページリセット
    // =============================================

    #[test]
    fn test_filter_changes_reset_page() {
        let mut filters = FilterState::default();
        filters.page = 7;
        filters.set_query("gaseosa");
        assert_eq!(filters.page, 1);

        filters.page = 7;
        filters.set_category("Bebidas");
        assert_eq!(filters.page, 1);

        filters.page = 7;
        filters.set_brand("Inka Kola");
        assert_eq!(filters.page, 1);

        filters.page = 7;
        filters.set_status(Some(StockStatus::Optimal));
        assert_eq!(filters.page, 1);

        filters.page = 7;
        filters.set_sort_date(Some(SortDir::Desc));
        assert_eq!(filters.page, 1);

        filters.page = 7;
        filters.set_sort_stock(Some(SortDir::Asc));
        assert_eq!(filters.page, 1);

        filters.page = 7;
        filters.set_sort_value(None);
        assert_eq!(filters.page, 1);
    }

    #[test]
    fn test_page_size_change_resets_page() {
        let mut filters = FilterState::default();
        filters.page = 4;
        filters.set_page_size(50);
        assert_eq!(filters.page_size, 50);
        assert_eq!(filters.page, 1);
    }

    #[test]
    fn test_page_size_invalid_ignored() {
        let mut filters = FilterState::default();
        filters.page = 4;
        filters.set_page_size(33);
        assert_eq!(filters.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(filters.page, 4); // 変更なしなのでページも動かない
    }

    #[test]
    fn test_set_page_clamps_to_one() {
        let mut filters = FilterState::default();
        filters.set_page(0);
        assert_eq!(filters.page, 1);
        filters.set_page(3);
        assert_eq!(filters.page, 3);
    }

    // =============================================
    // マーカ選択肢への追随
    // =============================================

    #[test]
    fn test_retain_brand_kept_when_present() {
        let mut filters = FilterState::default();
        filters.set_brand("Gloria");
        filters.set_page(3);

        let options = vec!["Gloria".to_string(), "Laive".to_string()];
        assert!(!filters.retain_brand(&options));
        assert_eq!(filters.brand, "Gloria");
        assert_eq!(filters.page, 3);
    }

    #[test]
    fn test_retain_brand_cleared_when_absent() {
        let mut filters = FilterState::default();
        filters.set_brand("Costeño");
        filters.set_page(3);

        let options = vec!["Gloria".to_string(), "Laive".to_string()];
        assert!(filters.retain_brand(&options));
        assert_eq!(filters.brand, "");
        assert_eq!(filters.page, 1);
    }

    #[test]
    fn test_retain_brand_noop_when_unselected() {
        let mut filters = FilterState::default();
        filters.set_page(3);
        assert!(!filters.retain_brand(&[]));
        assert_eq!(filters.page, 3);
    }

    // =============================================
    // ソートのシリアライズ
    // =============================================

    #[test]
    fn test_sort_param_none_when_unselected() {
        let filters = FilterState::default();
        assert_eq!(filters.sort_param(), None);
    }

    #[test]
    fn test_sort_param_single() {
        let mut filters = FilterState::default();
        filters.set_sort_stock(Some(SortDir::Desc));
        assert_eq!(filters.sort_param(), Some("stock_desc".to_string()));
    }

    #[test]
    fn test_sort_param_fixed_priority_order() {
        // 選択した順序に関係なく date→stock→value の固定順で結合する
        let mut filters = FilterState::default();
        filters.set_sort_value(Some(SortDir::Asc));
        filters.set_sort_date(Some(SortDir::Desc));
        filters.set_sort_stock(Some(SortDir::Desc));
        assert_eq!(
            filters.sort_param(),
            Some("date_desc,stock_desc,value_asc".to_string())
        );
    }

    #[test]
    fn test_sort_param_skips_absent() {
        let mut filters = FilterState::default();
        filters.set_sort_date(Some(SortDir::Asc));
        filters.set_sort_value(Some(SortDir::Desc));
        assert_eq!(
            filters.sort_param(),
            Some("date_asc,value_desc".to_string())
        );
    }

    #[test]
    fn test_sort_dir_from_value() {
        assert_eq!(SortDir::from_value("asc"), Some(SortDir::Asc));
        assert_eq!(SortDir::from_value("desc"), Some(SortDir::Desc));
        assert_eq!(SortDir::from_value(""), None);
        assert_eq!(SortDir::from_value("other"), None);
    }

    #[test]
    fn test_set_filter_leaves_other_fields_untouched() {
        let mut filters = FilterState {
            query: "arroz".to_string(),
            category: "Abarrotes".to_string(),
            brand: "Costeño".to_string(),
            status: Some(StockStatus::Low),
            ..Default::default()
        };
        filters.set_category("Bebidas");

        assert_eq!(filters.category, "Bebidas");
        assert_eq!(filters.query, "arroz");
        assert_eq!(filters.brand, "Costeño");
        assert_eq!(filters.status, Some(StockStatus::Low));
    }
}
