//! 注文アシスタント（注文状態の更新ループ）
//!
//! 1 ターン = 発話を履歴に積む → prompt を作る → LLM を呼ぶ → 応答を解釈 → メニューで絞り込む → 注文を置き換える。
//! 失敗はすべてここで吸収し、呼び出し側には (注文, 表示文) だけを返す。

use std::sync::Arc;

use common::adapter::NoopLog;
use common::config::DEFAULT_REFERER;
use common::domain::{ApiKey, ModelName};
use common::error::Error;
use common::llm::provider::Message;
use common::llm::OpenAiCompatProvider;
use common::ports::outbound::{Log, LogLevel, LogRecord};

use crate::adapter::DriverCompletion;
use crate::domain::{History, Menu, ModelReply, Order, OrderError};
use crate::ports::outbound::CompletionClient;
use crate::usecase::prompt::build_system_prompt;

/// LLM に渡す履歴の件数
pub const HISTORY_WINDOW: usize = 3;

/// サンプリング温度（固定）
pub const ORDER_TEMPERATURE: f64 = 0.1;

/// 応答が JSON として読めなかったときの表示文
pub const PARSE_APOLOGY: &str = "Sorry, I had trouble processing that. Please try again.";

/// それ以外の失敗時の表示文
pub const ERROR_APOLOGY: &str = "Sorry, I encountered an error. Please try again.";

/// 1 ターンの失敗理由（運用ログ用。利用者には出さない）
#[derive(Debug, thiserror::Error)]
enum TurnError {
    #[error(transparent)]
    Remote(#[from] Error),
    #[error("model reply is not valid JSON: {source}")]
    Parse {
        raw: String,
        source: serde_json::Error,
    },
    #[error(transparent)]
    InvalidOrder(#[from] OrderError),
}

impl TurnError {
    fn apology(&self) -> &'static str {
        match self {
            TurnError::Parse { .. } => PARSE_APOLOGY,
            TurnError::Remote(_) | TurnError::InvalidOrder(_) => ERROR_APOLOGY,
        }
    }
}

/// 注文アシスタント。1 セッション 1 インスタンス
pub struct OrderAssistant {
    menu: Arc<Menu>,
    order: Order,
    history: History,
    client: Arc<dyn CompletionClient>,
    logger: Arc<dyn Log>,
}

impl OrderAssistant {
    /// OpenRouter（既定エンドポイント）に接続するアシスタントを作る
    #[allow(dead_code)] // CLI は with_client で配線する。公開APIとして保持
    pub fn new(api_key: ApiKey, model: ModelName, menu: Menu) -> Result<Self, Error> {
        let provider =
            OpenAiCompatProvider::new(model, None, Some(api_key), Some(DEFAULT_REFERER.to_string()))?;
        Ok(Self::with_client(
            Arc::new(DriverCompletion::new(provider)),
            menu,
            Arc::new(NoopLog),
        ))
    }

    /// 任意のクライアントとログで作る（配線・テスト用）
    pub fn with_client(client: Arc<dyn CompletionClient>, menu: impl Into<Arc<Menu>>, logger: Arc<dyn Log>) -> Self {
        Self {
            menu: menu.into(),
            order: Order::new(),
            history: History::new(),
            client,
            logger,
        }
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    pub fn order(&self) -> &Order {
        &self.order
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// 1 ターン処理する。戻り値は (新しい注文, 表示文)。
    ///
    /// 成否にかかわらず履歴は user と assistant の 2 件だけ増える。
    /// 失敗時は注文を変えず、固定の謝罪文を返す。
    pub fn process_turn(&mut self, user_text: &str) -> (Order, String) {
        self.history.push_user(user_text);
        self.log(
            LogRecord::new(LogLevel::Info, "turn started")
                .kind("turn")
                .field("history_len", serde_json::json!(self.history.len())),
        );

        let message = match self.run_turn() {
            Ok((order, message, dropped)) => {
                if !dropped.is_empty() {
                    self.log(
                        LogRecord::new(LogLevel::Info, "dropped items not on the menu")
                            .kind("validate")
                            .field("dropped", serde_json::json!(dropped)),
                    );
                }
                self.order = order;
                self.log(
                    LogRecord::new(LogLevel::Info, "turn finished")
                        .kind("turn")
                        .field("order", self.order.to_json()),
                );
                message
            }
            Err(e) => {
                self.log_failure(&e);
                e.apology().to_string()
            }
        };

        self.history.push_assistant(message.as_str());
        (self.order.clone(), message)
    }

    /// 注文を変えずに新しい注文と表示文を求める
    fn run_turn(&self) -> Result<(Order, String, Vec<String>), TurnError> {
        let mut messages = Vec::with_capacity(HISTORY_WINDOW + 1);
        messages.push(Message::system(build_system_prompt(&self.menu, &self.order)));
        messages.extend_from_slice(self.history.tail(HISTORY_WINDOW));

        let raw = self.client.complete(&messages, ORDER_TEMPERATURE)?;

        let reply = ModelReply::parse(&raw).map_err(|source| TurnError::Parse {
            raw: raw.clone(),
            source,
        })?;

        let (order, dropped) = Order::from_model_value(&reply.order, &self.menu)?;
        Ok((order, reply.message, dropped))
    }

    fn log_failure(&self, e: &TurnError) {
        let rec = match e {
            TurnError::Remote(err) => LogRecord::new(LogLevel::Error, err.to_string()).kind("llm"),
            TurnError::Parse { raw, .. } => LogRecord::new(LogLevel::Warn, e.to_string())
                .kind("parse")
                .field("raw", serde_json::json!(raw)),
            TurnError::InvalidOrder(_) => LogRecord::new(LogLevel::Warn, e.to_string()).kind("validate"),
        };
        self.log(rec);
    }

    fn log(&self, rec: LogRecord) {
        let _ = self.logger.log(&rec.layer("usecase"));
    }

    /// 合計金額 = Σ 単価 × 数量（メニューに無い品は単価 0）
    pub fn calculate_total(&self) -> f64 {
        self.order
            .iter()
            .map(|(item, qty)| self.menu.price(item).unwrap_or(0.0) * qty as f64)
            .sum()
    }

    /// 注文と履歴を空にする。メニューと接続設定はそのまま
    pub fn clear_order(&mut self) {
        self.order = Order::new();
        self.history.clear();
    }
}
