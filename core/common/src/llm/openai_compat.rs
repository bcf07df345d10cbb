//! OpenAI Chat Completions 互換 (/chat/completions) プロバイダ
//!
//! base_url で任意のエンドポイントを指定可能（既定は OpenRouter）。
//! 1 リクエスト 1 応答の同期呼び出しのみ。リトライは行わない。

use crate::domain::{ApiKey, ModelName};
use crate::error::Error;
use crate::llm::provider::{ChatProvider, Message};
use serde_json::{json, Value};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";

/// リクエストの締め切り（秒）
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// OpenAI Chat Completions 互換プロバイダ
pub struct OpenAiCompatProvider {
    client: reqwest::blocking::Client,
    model: ModelName,
    base_url: String,
    api_key: Option<ApiKey>,
    referer: Option<String>,
}

impl OpenAiCompatProvider {
    /// 新しいプロバイダを作成
    ///
    /// * `model` - モデル名
    /// * `base_url` - ベース URL（None のとき DEFAULT_BASE_URL）
    /// * `api_key` - Bearer トークン（None のとき Authorization を付けない）
    /// * `referer` - HTTP-Referer ヘッダ（利用状況トラッキング用、任意）
    pub fn new(
        model: ModelName,
        base_url: Option<String>,
        api_key: Option<ApiKey>,
        referer: Option<String>,
    ) -> Result<Self, Error> {
        let base_url = base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| Error::http(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self {
            client,
            model,
            base_url,
            api_key,
            referer,
        })
    }

    pub fn url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    pub fn model(&self) -> &ModelName {
        &self.model
    }
}

impl ChatProvider for OpenAiCompatProvider {
    fn name(&self) -> &str {
        "openai_compat"
    }

    fn make_request_payload(&self, messages: &[Message], temperature: f64) -> Result<Value, Error> {
        let messages: Vec<Value> = messages
            .iter()
            .map(|m| json!({ "role": m.role.as_str(), "content": m.content }))
            .collect();
        Ok(json!({
            "model": self.model.as_ref(),
            "messages": messages,
            "temperature": temperature,
        }))
    }

    fn make_http_request(&self, request_json: &str) -> Result<String, Error> {
        let mut builder = self
            .client
            .post(self.url())
            .header("Content-Type", "application/json")
            .body(request_json.to_string());

        if let Some(ref key) = self.api_key {
            builder = builder.header("Authorization", format!("Bearer {}", key.expose()));
        }
        if let Some(ref referer) = self.referer {
            builder = builder.header("HTTP-Referer", referer.as_str());
        }

        let response = builder
            .send()
            .map_err(|e| Error::http(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        let response_text = response
            .text()
            .map_err(|e| Error::http(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            let error_msg = if let Ok(v) = serde_json::from_str::<Value>(&response_text) {
                v["error"]["message"]
                    .as_str()
                    .map(|s| format!("HTTP {}: {}", status, s))
                    .unwrap_or_else(|| format!("HTTP {}: {}", status, response_text))
            } else {
                format!("HTTP {}: {}", status, response_text)
            };
            return Err(Error::http(format!("Chat completions error: {}", error_msg)));
        }

        Ok(response_text)
    }

    fn parse_response_text(&self, response_json: &str) -> Result<Option<String>, Error> {
        let v: Value = serde_json::from_str(response_json)
            .map_err(|e| Error::http(format!("Failed to parse response JSON: {}", e)))?;

        if let Some(err) = v.get("error") {
            let msg = err["message"].as_str().unwrap_or("Unknown error");
            return Err(Error::http(format!("API error: {}", msg)));
        }

        let first = v["choices"]
            .as_array()
            .and_then(|choices| choices.first())
            .ok_or_else(|| Error::http("Unexpected API response format"))?;

        Ok(first["message"]["content"].as_str().map(|s| s.to_string()))
    }
}
