//! エラーハンドリング
//!
//! 種別ごとに終了コード（sysexits 準拠）を持つ。

use thiserror::Error as ThisError;

/// エラー型
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// 通信・HTTP ステータス・応答構造の異常（リモート呼び出し失敗）
    #[error("remote call failed: {0}")]
    Http(String),
    /// JSON のシリアライズ/パース失敗
    #[error("json error: {0}")]
    Json(String),
    /// 引数不正（usage を表示する）
    #[error("{0}")]
    InvalidArgument(String),
    /// ファイル入出力
    #[error("io error: {0}")]
    Io(String),
    /// 環境変数の解決失敗
    #[error("environment error: {0}")]
    Env(String),
    /// 設定値の不正（メニュー価格など）
    #[error("config error: {0}")]
    Config(String),
}

impl Error {
    pub fn http(msg: impl Into<String>) -> Self {
        Error::Http(msg.into())
    }

    pub fn json(msg: impl Into<String>) -> Self {
        Error::Json(msg.into())
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }

    pub fn io_msg(msg: impl Into<String>) -> Self {
        Error::Io(msg.into())
    }

    pub fn env(msg: impl Into<String>) -> Self {
        Error::Env(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    /// プロセス終了コード
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::InvalidArgument(_) => 64,
            Error::Json(_) => 65,
            Error::Http(_) => 69,
            Error::Io(_) => 74,
            Error::Env(_) | Error::Config(_) => 78,
        }
    }

    /// usage を表示すべきエラーか
    pub fn is_usage(&self) -> bool {
        matches!(self, Error::InvalidArgument(_))
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Json(e.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e.to_string())
    }
}
