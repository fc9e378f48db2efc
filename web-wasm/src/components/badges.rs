//! テーブル行用のバッジ

use leptos::prelude::*;

use inventario_common::StockStatus;

/// 在庫ステータスのバッジ
pub fn status_badge(status: StockStatus) -> impl IntoView {
    let (class, text) = match status {
        StockStatus::Negative => ("badge badge-negative", "🔴 Negativo"),
        StockStatus::OutOfStock => ("badge badge-out-of-stock", "🟠 Sin Stock"),
        StockStatus::Critical => ("badge badge-critical", "🟡 Crítico"),
        StockStatus::Low => ("badge badge-low", "🟢 Bajo"),
        StockStatus::Optimal => ("badge badge-optimal", "🟢 Óptimo"),
        StockStatus::Overstock => ("badge badge-overstock", "🔵 Exceso"),
    };
    view! { <span class=class>{text}</span> }
}

/// マーカのバッジ（空・nanは「Sin marca」扱い）
pub fn brand_badge(brand: &str) -> impl IntoView {
    let trimmed = brand.trim();
    let missing = trimmed.is_empty() || trimmed == "nan" || trimmed == "None";
    let (class, text) = if missing {
        ("badge badge-no-brand", "Sin marca".to_string())
    } else {
        ("badge badge-brand", trimmed.to_string())
    };
    view! { <span class=class>{text}</span> }
}
