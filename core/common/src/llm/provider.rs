//! チャットプロバイダのトレイト定義

use crate::error::Error;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// チャットプロバイダのトレイト
///
/// ペイロード生成・HTTP 実行・応答テキスト抽出の 3 段に分けて実装する。
/// 組み立ては `LlmDriver` が行う。
pub trait ChatProvider {
    /// プロバイダ名を返す
    fn name(&self) -> &str;

    /// リクエストペイロードを生成
    ///
    /// # Arguments
    /// * `messages` - system / user / assistant のメッセージ列（空でないこと）
    /// * `temperature` - サンプリング温度
    fn make_request_payload(&self, messages: &[Message], temperature: f64) -> Result<Value, Error>;

    /// HTTPリクエストを実行してレスポンスJSON文字列を取得
    fn make_http_request(&self, request_json: &str) -> Result<String, Error>;

    /// レスポンスからテキストを抽出
    ///
    /// # Returns
    /// * `Ok(Some(String))` - 先頭 choice のテキスト
    /// * `Ok(None)` - テキストが存在しない
    fn parse_response_text(&self, response_json: &str) -> Result<Option<String>, Error>;
}

/// メッセージのロール
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// メッセージ構造体
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }
}
