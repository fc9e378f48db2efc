//! KPIカードグリッド
//!
//! /api/kpis の集計値を6枚のカードへ射影するだけの純粋な描画。

use leptos::prelude::*;

use inventario_common::{format_currency, format_number, Kpis};

struct KpiCard {
    label: &'static str,
    value: String,
    subtitle: String,
    icon: &'static str,
    bg: &'static str,
}

fn cards(kpis: &Kpis) -> Vec<KpiCard> {
    vec![
        KpiCard {
            label: "Valor Total",
            value: format_currency(kpis.total_value),
            subtitle: "Inversión en inventario".to_string(),
            icon: "💰",
            bg: "bg-emerald",
        },
        KpiCard {
            label: "Total SKUs",
            value: format_number(kpis.total_skus as i64),
            subtitle: format!("{} SKUs con stock", format_number(kpis.active_skus as i64)),
            icon: "📦",
            bg: "bg-blue",
        },
        KpiCard {
            label: "Stock Total",
            value: format_number(kpis.total_stock),
            subtitle: format!("Promedio: {} uds/SKU", kpis.avg_stock),
            icon: "📊",
            bg: "bg-purple",
        },
        KpiCard {
            label: "Alertas",
            value: format_number(kpis.alerts.total_alerts as i64),
            subtitle: format!(
                "{} productos sin stock",
                format_number(kpis.alerts.out_of_stock as i64)
            ),
            icon: "⚠️",
            bg: "bg-amber",
        },
        KpiCard {
            label: "Diferencias",
            value: format_number(kpis.diferencias_count as i64),
            subtitle: format!(
                "{} SKUs afectados",
                format_number(kpis.diferencias_count as i64)
            ),
            icon: "🔻",
            bg: "bg-red",
        },
        KpiCard {
            label: "Valorizado Negativo",
            value: format_currency(kpis.diferencias_value.abs()),
            subtitle: format!(
                "{} unidades",
                format_number(kpis.diferencias_units.abs())
            ),
            icon: "💸",
            bg: "bg-rose",
        },
    ]
}

#[component]
pub fn KpiGrid(kpis: Kpis) -> impl IntoView {
    view! {
        <div class="kpi-grid">
            {cards(&kpis)
                .into_iter()
                .map(|card| {
                    view! {
                        <div class="card kpi-card">
                            <div>
                                <p class="kpi-label">{card.label}</p>
                                <p class="kpi-value">{card.value}</p>
                                <p class="kpi-subtitle">{card.subtitle}</p>
                            </div>
                            <div class=format!("kpi-icon {}", card.bg)>{card.icon}</div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
