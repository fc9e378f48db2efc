//! メインアプリケーションコンポーネント
//!
//! ダッシュボードローダー（8エンドポイントの一括取得）とアップロード
//! オーケストレーションをここで束ねる。ロードは成功アップロード時と
//! ページロード時（サーバーに既存データがある場合）に1回走り、以降の
//! 更新は全てSearchController経由の検索ループ。

use gloo::console;
use gloo::timers::callback::Interval;
use gloo::timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{File, FormData};

use inventario_common::upload::MSG_DISPLAY_FAILED;
use inventario_common::{format_number, AggregateSnapshot, Error, UploadSession};

use crate::api;
use crate::components::header::Header;
use crate::components::states::{EmptyState, ErrorState, LoadingState};
use crate::components::upload_modal::UploadModal;
use crate::components::{
    alerts_table::AlertsTable, charts_panel::ChartsPanel, kpi_grid::KpiGrid,
    pagination::PaginationBar, results_table::ResultsTable, search_panel::SearchPanel,
    stock_status_panel::StockStatusPanel, top_products::TopProductsTable,
};
use crate::search::SearchController;

/// 接続ステータスインジケーターの状態
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectionStatus {
    pub connected: bool,
    pub message: String,
}

impl ConnectionStatus {
    pub fn connected(message: impl Into<String>) -> Self {
        Self {
            connected: true,
            message: message.into(),
        }
    }

    pub fn disconnected(message: impl Into<String>) -> Self {
        Self {
            connected: false,
            message: message.into(),
        }
    }
}

impl Default for ConnectionStatus {
    fn default() -> Self {
        Self::disconnected("Sin datos")
    }
}

/// ダッシュボードの表示状態
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardState {
    Empty,
    Loading,
    Error(String),
    Ready,
}

/// ダッシュボード全体の状態オーナー
#[derive(Clone)]
pub struct Dashboard {
    pub state: RwSignal<DashboardState>,
    pub snapshot: RwSignal<Option<AggregateSnapshot>>,
    pub status: RwSignal<ConnectionStatus>,
    pub search: SearchController,
}

impl Dashboard {
    fn new() -> Self {
        Self {
            state: RwSignal::new(DashboardState::Empty),
            snapshot: RwSignal::new(None),
            status: RwSignal::new(ConnectionStatus::default()),
            search: SearchController::new(),
        }
    }

    /// 集計スナップショットの一括ロード
    ///
    /// 8本全て成功したときだけダッシュボードを表示し、フィルターなしの
    /// 1ページ目で検索ビューをシードする。部分表示はしない。
    pub async fn load(&self) -> bool {
        self.state.set(DashboardState::Loading);

        match api::load_snapshot().await {
            Ok(snapshot) => {
                let total_skus = snapshot.kpis.total_skus;
                self.snapshot.set(Some(snapshot));
                self.state.set(DashboardState::Ready);
                self.status.set(ConnectionStatus::connected(format!(
                    "{} productos",
                    format_number(total_skus as i64)
                )));
                self.search.seed();
                true
            }
            Err(error) => {
                console::error!(format!("error cargando datos: {}", error));
                self.state.set(DashboardState::Error(error.user_message()));
                self.status
                    .set(ConnectionStatus::disconnected("Error al cargar datos"));
                false
            }
        }
    }
}

fn build_form(file: &File) -> inventario_common::Result<FormData> {
    let form = FormData::new().map_err(|e| Error::Network(format!("{:?}", e)))?;
    form.append_with_blob("file", file)
        .map_err(|e| Error::Network(format!("{:?}", e)))?;
    Ok(form)
}

/// アップロードの二段階フロー
///
/// 演出進捗（固定タイマー、上限30%）→ 実アップロード → パース →
/// ダッシュボード再ロード。再ロードに失敗した場合はアップロード成功とは
/// 区別された文言でfailedへ落とす。
fn start_upload(dashboard: Dashboard, upload: RwSignal<UploadSession>, file: File) {
    let mut begin = Ok(());
    upload.update(|session| begin = session.begin(&file.name()));
    if begin.is_err() {
        // 単一スロット: 進行中の開始要求は受け付けない
        console::warn!("subida ya en curso, ignorada");
        return;
    }

    spawn_local(async move {
        let form = match build_form(&file) {
            Ok(form) => form,
            Err(error) => {
                let message = error.user_message();
                upload.update(|session| session.fail(&message));
                dashboard
                    .status
                    .set(ConnectionStatus::disconnected(message));
                return;
            }
        };

        // 転送量とは無関係の演出進捗。レスポンス到着で打ち切る。
        let ticker = Interval::new(100, move || upload.update(|session| session.tick()));
        let response = api::upload(&form).await;
        drop(ticker);

        match response {
            Ok(data) => {
                upload.update(|session| {
                    session.received();
                    session.processing();
                    session.processed(&data.message);
                    session.loading();
                });

                if dashboard.load().await {
                    upload.update(|session| session.complete());
                    TimeoutFuture::new(500).await;
                    upload.set(UploadSession::new());
                    dashboard
                        .status
                        .set(ConnectionStatus::connected(data.message));
                } else {
                    upload.update(|session| session.fail(MSG_DISPLAY_FAILED));
                    dashboard
                        .status
                        .set(ConnectionStatus::disconnected(MSG_DISPLAY_FAILED));
                }
            }
            Err(error) => {
                let message = error.user_message();
                upload.update(|session| session.fail(&message));
                dashboard
                    .status
                    .set(ConnectionStatus::disconnected(message));
            }
        }
    });
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let dashboard = Dashboard::new();
    let upload = RwSignal::new(UploadSession::new());

    // サーバー側に既にデータがあるかを1回だけ確認する
    {
        let dashboard = dashboard.clone();
        spawn_local(async move {
            match api::health().await {
                Ok(health) if health.data_loaded => {
                    dashboard.load().await;
                }
                Ok(_) => {}
                // サーバー不在なら空状態のまま
                Err(error) => console::debug!(format!("health: {}", error)),
            }
        });
    }

    let on_file = {
        let dashboard = dashboard.clone();
        move |file: File| start_upload(dashboard.clone(), upload, file)
    };

    let retry = {
        let dashboard = dashboard.clone();
        move |_: ()| {
            let dashboard = dashboard.clone();
            spawn_local(async move {
                dashboard.load().await;
            });
        }
    };

    let state = dashboard.state;
    let snapshot = dashboard.snapshot;
    let search = dashboard.search.clone();

    view! {
        <div class="container">
            <Header status=dashboard.status snapshot=snapshot on_file=on_file />
            <UploadModal session=upload />

            {move || match state.get() {
                DashboardState::Empty => view! { <EmptyState /> }.into_any(),
                DashboardState::Loading => view! { <LoadingState /> }.into_any(),
                DashboardState::Error(message) => {
                    view! { <ErrorState message=message on_retry=retry.clone() /> }.into_any()
                }
                DashboardState::Ready => match snapshot.get() {
                    Some(snap) => view! {
                        <div class="dashboard-content">
                            <KpiGrid kpis=snap.kpis.clone() />
                            <StockStatusPanel
                                slices=snap.stock_status.clone()
                                search=search.clone()
                            />
                            <ChartsPanel
                                suppliers=snap.suppliers.clone()
                                categories=snap.categories.clone()
                                brands=snap.brands.clone()
                            />
                            <div class="tables-grid">
                                <TopProductsTable products=snap.top_products.clone() />
                                <AlertsTable alerts=snap.alerts.clone() />
                            </div>
                            <SearchPanel
                                search=search.clone()
                                categories=snap.categories.clone()
                            />
                            <ResultsTable search=search.clone() />
                            <PaginationBar search=search.clone() />
                        </div>
                    }
                    .into_any(),
                    None => view! { <LoadingState /> }.into_any(),
                },
            }}
        </div>
    }
}
