//! アップロードセッションの状態機械
//!
//! idle → preparing → uploading → processing → loading → done。
//! failedは非idleの任意の状態から到達できる吸収状態。
//!
//! uploading中の進捗は演出で、固定タイマーで+5ずつ上限30まで進む。実際の
//! 転送量とは無関係で、レスポンス到着の瞬間に打ち切られる（上限到達は保証
//! されない）。セッションは同時に1つだけ: 非終端状態中の`begin`は拒否する。

use crate::error::Error;

/// 演出進捗の1ステップ
pub const TICK_STEP: u8 = 5;

/// 演出進捗の上限（アップロード段階は0-30%）
pub const TICK_CEILING: u8 = 30;

/// アップロード成功後にダッシュボード表示へ失敗した場合の文言
///
/// データはサーバー側に載っているため「アップロード失敗」とは区別する。
pub const MSG_DISPLAY_FAILED: &str = "Datos subidos pero error al procesar";

/// アップロードセッションの段階
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadPhase {
    Idle,
    Preparing,
    Uploading,
    Processing,
    Loading,
    Done,
    Failed,
}

/// アップロードセッション（単一スロット）
#[derive(Debug, Clone, PartialEq)]
pub struct UploadSession {
    pub phase: UploadPhase,
    pub percent: u8,
    pub label: String,
    pub title: String,
    file_name: String,
}

impl Default for UploadSession {
    fn default() -> Self {
        Self::new()
    }
}

impl UploadSession {
    pub fn new() -> Self {
        Self {
            phase: UploadPhase::Idle,
            percent: 0,
            label: String::new(),
            title: String::new(),
            file_name: String::new(),
        }
    }

    /// 非終端状態（進行中）かどうか
    pub fn is_active(&self) -> bool {
        matches!(
            self.phase,
            UploadPhase::Preparing
                | UploadPhase::Uploading
                | UploadPhase::Processing
                | UploadPhase::Loading
        )
    }

    /// 新しいセッションを開始する
    ///
    /// idle/done/failedからのみ開始できる。進行中なら拒否。
    pub fn begin(&mut self, file_name: &str) -> Result<(), Error> {
        if self.is_active() {
            return Err(Error::UploadInProgress);
        }
        self.phase = UploadPhase::Preparing;
        self.percent = 0;
        self.label = "Preparando archivo...".to_string();
        self.title = "Subiendo archivo...".to_string();
        self.file_name = file_name.to_string();
        Ok(())
    }

    /// 固定タイマーによる演出進捗の1ティック
    ///
    /// preparing/uploading以外では何もしない。上限30で止まる。
    pub fn tick(&mut self) {
        match self.phase {
            UploadPhase::Preparing | UploadPhase::Uploading => {
                self.phase = UploadPhase::Uploading;
                if self.percent < TICK_CEILING {
                    self.percent = (self.percent + TICK_STEP).min(TICK_CEILING);
                }
                self.label = format!("Subiendo {}", self.file_name);
            }
            _ => {}
        }
    }

    /// アップロードレスポンス到着（演出タイマーはここで打ち切る）
    pub fn received(&mut self) {
        if !matches!(self.phase, UploadPhase::Preparing | UploadPhase::Uploading) {
            return;
        }
        self.phase = UploadPhase::Processing;
        self.percent = TICK_CEILING;
        self.label = "Archivo recibido".to_string();
    }

    /// レスポンスボディのパース中
    pub fn processing(&mut self) {
        if self.phase != UploadPhase::Processing {
            return;
        }
        self.percent = 40;
        self.label = "Procesando datos...".to_string();
        self.title = "Procesando Excel...".to_string();
    }

    /// パース完了（サーバー提供メッセージを表示）
    pub fn processed(&mut self, message: &str) {
        if self.phase != UploadPhase::Processing {
            return;
        }
        self.percent = 70;
        self.label = message.to_string();
    }

    /// ダッシュボード再ロード中
    pub fn loading(&mut self) {
        if self.phase != UploadPhase::Processing {
            return;
        }
        self.phase = UploadPhase::Loading;
        self.percent = 80;
        self.label = "Actualizando dashboard...".to_string();
        self.title = "Cargando datos...".to_string();
    }

    /// 完了（ロード成功時のみ）
    pub fn complete(&mut self) {
        if self.phase != UploadPhase::Loading {
            return;
        }
        self.phase = UploadPhase::Done;
        self.percent = 100;
        self.label = "¡Completado!".to_string();
    }

    /// 失敗（非idleの任意の状態から）
    pub fn fail(&mut self, message: &str) {
        if self.phase == UploadPhase::Idle {
            return;
        }
        self.phase = UploadPhase::Failed;
        self.label = message.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =============================================
    // 正常系の遷移
    // =============================================

    #[test]
    fn test_happy_path_phases() {
        let mut session = UploadSession::new();
        assert_eq!(session.phase, UploadPhase::Idle);

        session.begin("inventario.xlsx").expect("開始失敗");
        assert_eq!(session.phase, UploadPhase::Preparing);
        assert_eq!(session.label, "Preparando archivo...");

        session.tick();
        assert_eq!(session.phase, UploadPhase::Uploading);
        assert_eq!(session.percent, 5);
        assert_eq!(session.label, "Subiendo inventario.xlsx");

        session.received();
        assert_eq!(session.phase, UploadPhase::Processing);
        assert_eq!(session.percent, 30);

        session.processing();
        assert_eq!(session.percent, 40);

        session.processed("Cargados 4,812 productos (2.3 MB)");
        assert_eq!(session.percent, 70);
        assert_eq!(session.label, "Cargados 4,812 productos (2.3 MB)");

        session.loading();
        assert_eq!(session.phase, UploadPhase::Loading);
        assert_eq!(session.percent, 80);

        session.complete();
        assert_eq!(session.phase, UploadPhase::Done);
        assert_eq!(session.percent, 100);
        assert_eq!(session.label, "¡Completado!");
    }

    #[test]
    fn test_tick_stops_at_ceiling() {
        let mut session = UploadSession::new();
        session.begin("datos.xlsx").expect("開始失敗");
        for _ in 0..20 {
            session.tick();
        }
        assert_eq!(session.percent, TICK_CEILING);
        assert_eq!(session.phase, UploadPhase::Uploading);
    }

    #[test]
    fn test_tick_ignored_after_response() {
        // レスポンス到着後はタイマーが遅れて発火しても進捗を動かさない
        let mut session = UploadSession::new();
        session.begin("datos.xlsx").expect("開始失敗");
        session.tick();
        session.received();
        session.processing();
        let percent = session.percent;
        session.tick();
        assert_eq!(session.percent, percent);
        assert_eq!(session.phase, UploadPhase::Processing);
    }

    #[test]
    fn test_received_before_any_tick() {
        // 上限30に届く前に打ち切られてよい
        let mut session = UploadSession::new();
        session.begin("datos.xlsx").expect("開始失敗");
        session.received();
        assert_eq!(session.phase, UploadPhase::Processing);
        assert_eq!(session.percent, 30);
    }

    // =============================================
    // 失敗系
    // =============================================

    #[test]
    fn test_fail_with_server_message() {
        let mut session = UploadSession::new();
        session.begin("datos.xlsx").expect("開始失敗");
        session.tick();
        session.received();
        session.fail("formato inválido");
        assert_eq!(session.phase, UploadPhase::Failed);
        assert_eq!(session.label, "formato inválido");
    }

    #[test]
    fn test_fail_from_loading_display_failure() {
        // アップロード自体は成功、表示だけ失敗したケース
        let mut session = UploadSession::new();
        session.begin("datos.xlsx").expect("開始失敗");
        session.received();
        session.processing();
        session.loading();
        session.fail(MSG_DISPLAY_FAILED);
        assert_eq!(session.phase, UploadPhase::Failed);
        assert_eq!(session.label, "Datos subidos pero error al procesar");
    }

    #[test]
    fn test_fail_from_idle_ignored() {
        let mut session = UploadSession::new();
        session.fail("no debería pasar");
        assert_eq!(session.phase, UploadPhase::Idle);
    }

    // =============================================
    // 単一スロットのガード
    // =============================================

    #[test]
    fn test_begin_rejected_while_active() {
        let mut session = UploadSession::new();
        session.begin("a.xlsx").expect("開始失敗");
        assert!(matches!(
            session.begin("b.xlsx"),
            Err(Error::UploadInProgress)
        ));

        session.received();
        assert!(session.begin("b.xlsx").is_err());

        session.processing();
        session.loading();
        assert!(session.begin("b.xlsx").is_err());
    }

    #[test]
    fn test_begin_allowed_from_terminal_states() {
        let mut session = UploadSession::new();
        session.begin("a.xlsx").expect("開始失敗");
        session.received();
        session.processing();
        session.loading();
        session.complete();
        assert!(session.begin("b.xlsx").is_ok());

        session.fail("formato inválido");
        assert!(session.begin("c.xlsx").is_ok());
    }

    #[test]
    fn test_complete_only_from_loading() {
        let mut session = UploadSession::new();
        session.begin("a.xlsx").expect("開始失敗");
        session.complete();
        assert_eq!(session.phase, UploadPhase::Preparing);
    }
}
