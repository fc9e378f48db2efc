//! アップロード進捗モーダル
//!
//! セッションが進行中か完了直後の間だけ表示する。失敗時はモーダルを閉じ、
//! メッセージはヘッダーのステータスインジケーター側に出る。

use leptos::prelude::*;

use inventario_common::{UploadPhase, UploadSession};

#[component]
pub fn UploadModal(session: RwSignal<UploadSession>) -> impl IntoView {
    let visible = move || {
        let current = session.get();
        current.is_active() || current.phase == UploadPhase::Done
    };

    view! {
        <Show when=visible>
            <div class="upload-modal-backdrop">
                <div class="upload-modal">
                    <h3>{move || session.get().title}</h3>
                    <div class="progress-bar">
                        <div
                            class="progress-fill"
                            style=move || format!("width: {}%", session.get().percent)
                        />
                    </div>
                    <p class="progress-percent">{move || format!("{}%", session.get().percent)}</p>
                    <p class="progress-status">{move || session.get().label}</p>
                </div>
            </div>
        </Show>
    }
}
