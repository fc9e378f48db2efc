//! 在庫ステータス分類
//!
//! サーバー側で付与される閉じた分類。クライアントは新しい値を発明しない。

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 在庫ステータス（閉集合）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    Negative,
    OutOfStock,
    Critical,
    Low,
    Optimal,
    Overstock,
}

impl StockStatus {
    /// APIクエリ・DOMで使うワイヤー表現
    pub fn as_str(&self) -> &'static str {
        match self {
            StockStatus::Negative => "negative",
            StockStatus::OutOfStock => "out_of_stock",
            StockStatus::Critical => "critical",
            StockStatus::Low => "low",
            StockStatus::Optimal => "optimal",
            StockStatus::Overstock => "overstock",
        }
    }

    /// サーバーと揃えた表示ラベル（es）
    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::Negative => "Stock Negativo",
            StockStatus::OutOfStock => "Sin Stock",
            StockStatus::Critical => "Crítico (1-5)",
            StockStatus::Low => "Bajo (6-20)",
            StockStatus::Optimal => "Óptimo (21-100)",
            StockStatus::Overstock => "Exceso (>100)",
        }
    }

    /// 全バリアント（表示順 = サーバーのソート順）
    pub fn all() -> [StockStatus; 6] {
        [
            StockStatus::Negative,
            StockStatus::OutOfStock,
            StockStatus::Critical,
            StockStatus::Low,
            StockStatus::Optimal,
            StockStatus::Overstock,
        ]
    }
}

impl fmt::Display for StockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StockStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "negative" => Ok(StockStatus::Negative),
            "out_of_stock" => Ok(StockStatus::OutOfStock),
            "critical" => Ok(StockStatus::Critical),
            "low" => Ok(StockStatus::Low),
            "optimal" => Ok(StockStatus::Optimal),
            "overstock" => Ok(StockStatus::Overstock),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_str_roundtrip() {
        for status in StockStatus::all() {
            let parsed: StockStatus = status.as_str().parse().expect("パース失敗");
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn test_from_str_unknown() {
        assert!("unknown_status".parse::<StockStatus>().is_err());
        assert!("".parse::<StockStatus>().is_err());
    }

    #[test]
    fn test_serde_snake_case() {
        let json = serde_json::to_string(&StockStatus::OutOfStock).expect("シリアライズ失敗");
        assert_eq!(json, "\"out_of_stock\"");

        let status: StockStatus =
            serde_json::from_str("\"critical\"").expect("デシリアライズ失敗");
        assert_eq!(status, StockStatus::Critical);
    }

    #[test]
    fn test_label() {
        assert_eq!(StockStatus::Negative.label(), "Stock Negativo");
        assert_eq!(StockStatus::Overstock.label(), "Exceso (>100)");
    }
}
