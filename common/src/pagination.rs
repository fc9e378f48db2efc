//! ページネーション計算
//!
//! サーバーが返す総件数からページ数・表示範囲・ページボタン窓を導出する。
//! `total = 0` はページネーションUIなし（縮退した1ページではなくNone）。

/// ページボタン窓の幅
const MAX_VISIBLE: u32 = 5;

/// ページボタン列の1要素
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(u32),
    Ellipsis,
}

/// 1回の検索結果に対するページネーションモデル
#[derive(Debug, Clone, PartialEq)]
pub struct Pagination {
    pub current: u32,
    pub total_pages: u32,
    /// 表示中の先頭行番号（1始まり）
    pub start: u64,
    /// 表示中の末尾行番号
    pub end: u64,
    pub total: u64,
}

impl Pagination {
    /// 総件数・ページサイズ・現在ページからモデルを計算する
    ///
    /// # Returns
    /// `total == 0` のときはNone（UIを出さない）
    pub fn compute(total: u64, page_size: u32, current: u32) -> Option<Pagination> {
        if total == 0 || page_size == 0 {
            return None;
        }
        let page_size_u64 = u64::from(page_size);
        let total_pages = total.div_ceil(page_size_u64) as u32;
        let current = current.clamp(1, total_pages);

        let start = u64::from(current - 1) * page_size_u64 + 1;
        let end = (u64::from(current) * page_size_u64).min(total);

        Some(Pagination {
            current,
            total_pages,
            start,
            end,
            total,
        })
    }

    /// 「Anterior」は1ページ目でのみ無効
    pub fn prev_enabled(&self) -> bool {
        self.current > 1
    }

    /// 「Siguiente」は最終ページでのみ無効
    pub fn next_enabled(&self) -> bool {
        self.current < self.total_pages
    }

    /// 現在ページを中心とした幅5のページボタン窓
    ///
    /// 窓が1ページ目を含まない場合は先頭に「1」を置き、2ページ以上飛ぶなら
    /// 省略記号を挟む。末尾側も対称に扱う。
    pub fn window(&self) -> Vec<PageItem> {
        let start_page = self.current.saturating_sub(2).max(1);
        let end_page = (start_page + MAX_VISIBLE - 1).min(self.total_pages);

        let mut items = Vec::new();
        if start_page > 1 {
            items.push(PageItem::Page(1));
        }
        if start_page > 2 {
            items.push(PageItem::Ellipsis);
        }
        for page in start_page..=end_page {
            items.push(PageItem::Page(page));
        }
        if end_page + 1 < self.total_pages {
            items.push(PageItem::Ellipsis);
        }
        if end_page < self.total_pages {
            items.push(PageItem::Page(self.total_pages));
        }
        items
    }
}
