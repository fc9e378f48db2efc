//! 検索・フィルターパネル
//!
//! テキスト入力はEnter確定のみ（入力ごとの発行はしない）。セレクト類は
//! 変更即時にSearchControllerへ流す。選択肢の状態はFilterStateが唯一の
//! 真実で、このパネルは毎回そこから描画し直す。

use leptos::prelude::*;

use inventario_common::{CategoryValue, SortDir, StockStatus, PAGE_SIZE_OPTIONS};

use crate::search::SearchController;

/// マーカ未設定を表すサーバー側のセンチネル値
const SIN_MARCA: &str = "SIN_MARCA";

fn brand_display(brand: &str) -> String {
    if brand == SIN_MARCA {
        "(Sin Marca)".to_string()
    } else {
        brand.to_string()
    }
}

/// ソート用セレクト（空文字 = 未選択）
#[component]
fn SortSelect<F>(label: &'static str, current: Option<SortDir>, on_change: F) -> impl IntoView
where
    F: Fn(Option<SortDir>) + 'static + Clone + Send,
{
    let value = match current {
        None => "",
        Some(SortDir::Desc) => "desc",
        Some(SortDir::Asc) => "asc",
    };

    view! {
        <label class="filter-field">
            <span class="filter-label">{label}</span>
            <select
                prop:value=value
                on:change=move |ev| on_change(SortDir::from_value(&event_target_value(&ev)))
            >
                <option value="" selected=current.is_none()>"Sin orden"</option>
                <option value="desc" selected=current == Some(SortDir::Desc)>
                    "Mayor a menor"
                </option>
                <option value="asc" selected=current == Some(SortDir::Asc)>
                    "Menor a mayor"
                </option>
            </select>
        </label>
    }
}

#[component]
pub fn SearchPanel(search: SearchController, categories: Vec<CategoryValue>) -> impl IntoView {
    let filters = search.filters;
    let brand_options = search.brand_options;

    let on_keydown = {
        let search = search.clone();
        move |ev: leptos::ev::KeyboardEvent| {
            if ev.key() == "Enter" {
                search.submit_query(event_target_value(&ev));
            }
        }
    };

    let on_category = {
        let search = search.clone();
        move |ev: leptos::ev::Event| search.set_category(event_target_value(&ev))
    };
    let on_brand = {
        let search = search.clone();
        move |ev: leptos::ev::Event| search.set_brand(event_target_value(&ev))
    };
    let on_status = {
        let search = search.clone();
        move |ev: leptos::ev::Event| {
            search.set_status(event_target_value(&ev).parse::<StockStatus>().ok())
        }
    };
    let on_page_size = {
        let search = search.clone();
        move |ev: leptos::ev::Event| {
            if let Ok(size) = event_target_value(&ev).parse::<u32>() {
                search.set_page_size(size);
            }
        }
    };

    let sort_date = {
        let search = search.clone();
        move |dir| search.set_sort_date(dir)
    };
    let sort_stock = {
        let search = search.clone();
        move |dir| search.set_sort_stock(dir)
    };
    let sort_value = {
        let search = search.clone();
        move |dir| search.set_sort_value(dir)
    };

    view! {
        <div class="card search-panel">
            <div class="search-row">
                <input
                    type="text"
                    class="search-input"
                    placeholder="Buscar por SKU o nombre de producto... (Enter para buscar)"
                    prop:value=move || filters.get().query
                    on:keydown=on_keydown
                />
            </div>
            <div class="filter-row">
                <label class="filter-field">
                    <span class="filter-label">"Categoría"</span>
                    <select
                        prop:value=move || filters.get().category
                        on:change=on_category
                    >
                        <option value="">"Todas las categorías"</option>
                        {categories
                            .into_iter()
                            .map(|category| {
                                let name = category.category;
                                view! {
                                    <option value=name.clone()>{name.clone()}</option>
                                }
                            })
                            .collect_view()}
                    </select>
                </label>
                <label class="filter-field">
                    <span class="filter-label">"Marca"</span>
                    <select
                        prop:value=move || filters.get().brand
                        on:change=on_brand
                    >
                        <option value="">"Todas las marcas"</option>
                        {move || {
                            brand_options
                                .get()
                                .into_iter()
                                .map(|brand| {
                                    let display = brand_display(&brand);
                                    view! {
                                        <option value=brand.clone()>{display}</option>
                                    }
                                })
                                .collect_view()
                        }}
                    </select>
                </label>
                <label class="filter-field">
                    <span class="filter-label">"Estado"</span>
                    <select
                        prop:value=move || {
                            filters
                                .get()
                                .status
                                .map(|status| status.as_str().to_string())
                                .unwrap_or_default()
                        }
                        on:change=on_status
                    >
                        <option value="">"Todos los estados"</option>
                        {StockStatus::all()
                            .into_iter()
                            .map(|status| {
                                view! {
                                    <option value=status.as_str()>{status.label()}</option>
                                }
                            })
                            .collect_view()}
                    </select>
                </label>
            </div>
            <div class="filter-row">
                <SortSelect
                    label="Fecha ingreso"
                    current=filters.get_untracked().sort_date
                    on_change=sort_date
                />
                <SortSelect
                    label="Stock"
                    current=filters.get_untracked().sort_stock
                    on_change=sort_stock
                />
                <SortSelect
                    label="Valor"
                    current=filters.get_untracked().sort_value
                    on_change=sort_value
                />
                <label class="filter-field">
                    <span class="filter-label">"Por página"</span>
                    <select
                        prop:value=move || filters.get().page_size.to_string()
                        on:change=on_page_size
                    >
                        {PAGE_SIZE_OPTIONS
                            .into_iter()
                            .map(|size| {
                                view! {
                                    <option value=size.to_string()>{size.to_string()}</option>
                                }
                            })
                            .collect_view()}
                    </select>
                </label>
            </div>
        </div>
    }
}
