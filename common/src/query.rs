//! 検索クエリのシリアライズ
//!
//! FilterStateを正規のクエリ文字列へ変換する。空のフィールドはキーごと
//! 省略する（空文字のパラメータを送らない）。pageとlimitは常に送る。

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::filters::FilterState;

/// encodeURIComponent相当のエンコードセット
/// （英数字と - _ . ! ~ * ' ( ) を素通しする）
const QUERY_ENCODE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

fn encode(value: &str) -> String {
    utf8_percent_encode(value, QUERY_ENCODE).to_string()
}

/// /api/search 用のクエリ文字列を組み立てる
///
/// # Returns
/// `?`を含まないクエリ部分（例: "category=Bebidas&page=1&limit=20"）
pub fn search_query(filters: &FilterState) -> String {
    let mut pairs: Vec<(&str, String)> = Vec::with_capacity(7);

    if !filters.query.is_empty() {
        pairs.push(("q", encode(&filters.query)));
    }
    if !filters.category.is_empty() {
        pairs.push(("category", encode(&filters.category)));
    }
    if !filters.brand.is_empty() {
        pairs.push(("brand", encode(&filters.brand)));
    }
    if let Some(status) = filters.status {
        pairs.push(("status", status.as_str().to_string()));
    }
    if let Some(sort) = filters.sort_param() {
        pairs.push(("sort", encode(&sort)));
    }
    pairs.push(("page", filters.page.to_string()));
    pairs.push(("limit", filters.page_size.to_string()));

    pairs
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join("&")
}

/// /api/unique-brands 用のクエリ文字列
///
/// カテゴリ未選択（空）ならクエリなし = 全マーカ。
pub fn brands_query(category: &str) -> String {
    if category.is_empty() {
        String::new()
    } else {
        format!("category={}", encode(category))
    }
}
