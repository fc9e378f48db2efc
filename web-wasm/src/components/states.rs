//! 空・ロード中・エラーの各状態表示

use leptos::prelude::*;

#[component]
pub fn EmptyState() -> impl IntoView {
    view! {
        <div class="empty-state">
            <div class="empty-icon">"📊"</div>
            <h3>"Sin datos de inventario"</h3>
            <p class="text-muted">"Sube un archivo Excel para comenzar el análisis"</p>
        </div>
    }
}

#[component]
pub fn LoadingState() -> impl IntoView {
    view! {
        <div class="loading-state">
            <div class="loader"></div>
            <p class="text-muted">"Cargando análisis de inventario..."</p>
        </div>
    }
}

/// ロード失敗時の表示。再試行は明示的なユーザー操作でのみ行う。
#[component]
pub fn ErrorState<F>(message: String, on_retry: F) -> impl IntoView
where
    F: Fn(()) + 'static + Clone + Send,
{
    view! {
        <div class="error-state">
            <div class="error-icon">"⚠️"</div>
            <h3>"No se pudo cargar los datos"</h3>
            <p class="text-muted">{message}</p>
            <button
                class="btn btn-primary"
                on:click=move |_| on_retry(())
            >
                "Reintentar"
            </button>
        </div>
    }
}
