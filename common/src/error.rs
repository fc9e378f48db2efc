//! エラー型定義

use thiserror::Error;

/// 共通エラー型
///
/// 失敗の分類:
/// - Network: トランスポート障害（サーバー到達不能）
/// - Api: サーバーが返したエラー（非2xx + `error`フィールド）
/// - Decode: レスポンスボディのデコード失敗
/// - UploadInProgress: アップロードセッションの多重開始
#[derive(Error, Debug)]
pub enum Error {
    #[error("network error: {0}")]
    Network(String),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("decode error: {0}")]
    Decode(String),

    #[error("upload already in progress")]
    UploadInProgress,
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Decode(e.to_string())
    }
}

impl Error {
    /// ステータスインジケーターに表示するユーザー向けメッセージ（es）
    ///
    /// サーバーが`error`フィールドを返した場合はそのまま表示し、
    /// それ以外は汎用の接続エラー文言に落とす。
    pub fn user_message(&self) -> String {
        match self {
            Error::Api { message, .. } if !message.is_empty() => message.clone(),
            Error::Api { .. } => "Error al cargar".to_string(),
            _ => "Error de conexión".to_string(),
        }
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
