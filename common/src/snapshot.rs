//! 集計スナップショット
//!
//! ダッシュボードロード時に8つの集計エンドポイントをまとめて取得した結果。
//! ロードごとに丸ごと作り直す不変のバンドルで、検索ループからは更新されない。

use crate::types::{
    BrandValue, CategoryValue, Kpis, Metadata, ProductRow, StockStatusSlice, SupplierValue,
};

/// 8エンドポイント分の集計結果バンドル
#[derive(Debug, Clone, Default)]
pub struct AggregateSnapshot {
    pub kpis: Kpis,
    pub stock_status: Vec<StockStatusSlice>,
    pub suppliers: Vec<SupplierValue>,
    pub categories: Vec<CategoryValue>,
    pub brands: Vec<BrandValue>,
    pub top_products: Vec<ProductRow>,
    pub alerts: Vec<ProductRow>,
    pub metadata: Metadata,
}

impl AggregateSnapshot {
    /// 8つの独立した取得結果を1つの成否へ畳み込む（all-or-nothing join）
    ///
    /// 1つでも失敗していれば全体を失敗とし、エンドポイント固定順
    /// （kpis, stock-status, suppliers, categories, brands, top-products,
    /// alerts, metadata）で最初に遭遇したエラーを返す。
    #[allow(clippy::too_many_arguments)]
    pub fn from_parts<E>(
        kpis: Result<Kpis, E>,
        stock_status: Result<Vec<StockStatusSlice>, E>,
        suppliers: Result<Vec<SupplierValue>, E>,
        categories: Result<Vec<CategoryValue>, E>,
        brands: Result<Vec<BrandValue>, E>,
        top_products: Result<Vec<ProductRow>, E>,
        alerts: Result<Vec<ProductRow>, E>,
        metadata: Result<Metadata, E>,
    ) -> Result<AggregateSnapshot, E> {
        Ok(AggregateSnapshot {
            kpis: kpis?,
            stock_status: stock_status?,
            suppliers: suppliers?,
            categories: categories?,
            brands: brands?,
            top_products: top_products?,
            alerts: alerts?,
            metadata: metadata?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok_parts() -> (
        Result<Kpis, String>,
        Result<Vec<StockStatusSlice>, String>,
        Result<Vec<SupplierValue>, String>,
        Result<Vec<CategoryValue>, String>,
        Result<Vec<BrandValue>, String>,
        Result<Vec<ProductRow>, String>,
        Result<Vec<ProductRow>, String>,
        Result<Metadata, String>,
    ) {
        (
            Ok(Kpis::default()),
            Ok(vec![]),
            Ok(vec![]),
            Ok(vec![]),
            Ok(vec![]),
            Ok(vec![]),
            Ok(vec![]),
            Ok(Metadata::default()),
        )
    }

    #[test]
    fn test_from_parts_all_ok() {
        let (a, b, c, d, e, f, g, h) = ok_parts();
        let snapshot = AggregateSnapshot::from_parts(a, b, c, d, e, f, g, h);
        assert!(snapshot.is_ok());
    }

    #[test]
    fn test_from_parts_single_failure_fails_all() {
        // 7成功 + 1失敗 = 全体失敗
        let (a, _, c, d, e, f, g, h) = ok_parts();
        let snapshot = AggregateSnapshot::from_parts(
            a,
            Err("stock-status caído".to_string()),
            c,
            d,
            e,
            f,
            g,
            h,
        );
        assert_eq!(snapshot.unwrap_err(), "stock-status caído");
    }

    #[test]
    fn test_from_parts_first_error_wins() {
        // 複数失敗時はエンドポイント固定順で最初のエラーを返す
        let (a, b, _, d, e, f, _, h) = ok_parts();
        let snapshot = AggregateSnapshot::from_parts(
            a,
            b,
            Err("suppliers".to_string()),
            d,
            e,
            f,
            Err("alerts".to_string()),
            h,
        );
        assert_eq!(snapshot.unwrap_err(), "suppliers");
    }

    #[test]
    fn test_from_parts_metadata_failure() {
        let (a, b, c, d, e, f, g, _) = ok_parts();
        let snapshot =
            AggregateSnapshot::from_parts(a, b, c, d, e, f, g, Err("metadata".to_string()));
        assert!(snapshot.is_err());
    }
}
