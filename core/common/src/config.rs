//! config.json 用の設定型と読み込み
//!
//! モデル・エンドポイント・API キーの環境変数名・メニューを解決する。
//! 全フィールド省略可。省略時は既定値を使う。

use crate::error::Error;
use crate::llm::openai_compat::DEFAULT_BASE_URL;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

pub const DEFAULT_MODEL: &str = "meta-llama/llama-3.2-3b-instruct:free";
pub const DEFAULT_API_KEY_ENV: &str = "OPENROUTER_API_KEY";
pub const DEFAULT_REFERER: &str = "http://localhost:8501";

/// 既定メニュー（品名, 単価）
pub const DEFAULT_MENU: &[(&str, f64)] = &[("Big Mac", 5.0), ("Large Fry", 3.0), ("Coke", 2.0)];

/// config.json のルート
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AssistantConfig {
    /// モデル名（省略時は DEFAULT_MODEL）
    #[serde(default, alias = "default_model")]
    pub model: Option<String>,
    /// API のベース URL（省略時は OpenRouter）
    #[serde(default)]
    pub base_url: Option<String>,
    /// API キーを読む環境変数名（省略時は DEFAULT_API_KEY_ENV）
    #[serde(default)]
    pub api_key_env: Option<String>,
    /// HTTP-Referer ヘッダ。空文字なら付けない
    #[serde(default)]
    pub referer: Option<String>,
    /// 品名 -> 単価
    #[serde(default)]
    pub menu: Option<BTreeMap<String, f64>>,
}

impl AssistantConfig {
    /// JSON 文字列からパース
    pub fn parse(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// ファイルから読み込む。
    ///
    /// `required` が false のときファイルが無ければ既定値、true のときは Err。
    /// JSON が壊れていれば Err（メッセージにパスを含める）。
    pub fn load(path: &Path, required: bool) -> Result<Self, Error> {
        if !path.exists() {
            if required {
                return Err(Error::config(format!("{}: file not found", path.display())));
            }
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)
            .map_err(|e| Error::io_msg(format!("{}: {}", path.display(), e)))?;
        Self::parse(&contents).map_err(|e| Error::config(format!("{}: {}", path.display(), e)))
    }

    pub fn model_or_default(&self) -> String {
        self.model.clone().unwrap_or_else(|| DEFAULT_MODEL.to_string())
    }

    pub fn base_url_or_default(&self) -> String {
        self.base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
    }

    pub fn api_key_env_or_default(&self) -> String {
        self.api_key_env
            .clone()
            .unwrap_or_else(|| DEFAULT_API_KEY_ENV.to_string())
    }

    pub fn referer_or_default(&self) -> Option<String> {
        match self.referer.as_deref() {
            Some("") => None,
            Some(r) => Some(r.to_string()),
            None => Some(DEFAULT_REFERER.to_string()),
        }
    }

    pub fn menu_or_default(&self) -> BTreeMap<String, f64> {
        self.menu.clone().unwrap_or_else(|| {
            DEFAULT_MENU
                .iter()
                .map(|(name, price)| (name.to_string(), *price))
                .collect()
        })
    }
}
