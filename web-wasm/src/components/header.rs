//! ヘッダーコンポーネント
//!
//! タイトル・ストアメタデータ・接続ステータス・アップロードボタン。

use leptos::prelude::*;
use web_sys::{File, HtmlInputElement};

use inventario_common::AggregateSnapshot;

use crate::app::ConnectionStatus;

#[component]
pub fn Header<F>(
    status: RwSignal<ConnectionStatus>,
    snapshot: RwSignal<Option<AggregateSnapshot>>,
    on_file: F,
) -> impl IntoView
where
    F: Fn(File) + 'static + Clone + Send,
{
    let on_change = move |ev: web_sys::Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            on_file(file);
        }
        // 同じファイルをもう一度選べるようにリセット
        input.set_value("");
    };

    view! {
        <header class="header">
            <div class="header-title">
                <h1>"Inventario Dashboard"</h1>
                {move || {
                    snapshot
                        .get()
                        .map(|snap| snap.metadata)
                        .filter(|metadata| !metadata.store_name.is_empty())
                        .map(|metadata| {
                            view! {
                                <p class="store-metadata">
                                    {metadata.store_name}" · "{metadata.upload_date}
                                </p>
                            }
                        })
                }}
            </div>
            <div class="header-actions">
                <span class="status-indicator">
                    <span class=move || {
                        if status.get().connected { "status-dot connected" } else { "status-dot" }
                    } />
                    <span class=move || {
                        if status.get().connected { "status-text connected" } else { "status-text" }
                    }>
                        {move || status.get().message}
                    </span>
                </span>
                <label class="btn btn-primary upload-label">
                    "Subir Excel"
                    <input
                        type="file"
                        accept=".xlsx,.xls"
                        style="display: none"
                        on:change=on_change
                    />
                </label>
            </div>
        </header>
    }
}
