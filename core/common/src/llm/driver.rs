//! LLMドライバーの実装
//!
//! プロバイダに依存しない共通処理を提供します。

use crate::error::Error;
use crate::llm::provider::{ChatProvider, Message};

/// LLMドライバー
pub struct LlmDriver<P: ChatProvider> {
    provider: P,
}

impl<P: ChatProvider> LlmDriver<P> {
    /// 新しいドライバーを作成
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// メッセージ列を送信して先頭 choice のテキストを取得
    ///
    /// # Arguments
    /// * `messages` - 送信するメッセージ列（空は不可）
    /// * `temperature` - サンプリング温度
    ///
    /// # Returns
    /// * `Ok(String)` - LLMからの応答テキスト（加工なし）
    /// * `Err(Error)` - 引数不正、またはリモート呼び出し失敗
    pub fn complete(&self, messages: &[Message], temperature: f64) -> Result<String, Error> {
        if messages.is_empty() {
            return Err(Error::invalid_argument("message list must not be empty"));
        }

        let payload = self.provider.make_request_payload(messages, temperature)?;

        let request_json = serde_json::to_string(&payload)
            .map_err(|e| Error::json(format!("Failed to serialize request: {}", e)))?;

        let response_json = self.provider.make_http_request(&request_json)?;

        let text = self
            .provider
            .parse_response_text(&response_json)?
            .ok_or_else(|| Error::http("No text in response"))?;

        Ok(text)
    }

    /// プロバイダを取得
    pub fn provider(&self) -> &P {
        &self.provider
    }
}
