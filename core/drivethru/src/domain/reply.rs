//! LLM 応答（{"message": ..., "order": {...}}）の解釈
//!
//! モデル出力は信用しない。ここでは形の解釈だけを行い、メニューでの絞り込みは Order 側で行う。

use serde_json::Value;

/// message が無いときの表示文
pub const DEFAULT_REPLY_MESSAGE: &str = "Order updated.";

/// Markdown のコードフェンス（```json と ```）をすべて取り除き、前後の空白を落とす
pub fn strip_code_fences(raw: &str) -> String {
    raw.replace("```json", "").replace("```", "").trim().to_string()
}

/// 解釈済みのモデル応答
#[derive(Debug, Clone, PartialEq)]
pub struct ModelReply {
    /// 利用者に見せる文
    pub message: String,
    /// 新しい注文全体（未検証）
    pub order: Value,
}

impl ModelReply {
    /// 生テキストを解釈する。JSON として読めなければ Err。
    ///
    /// - オブジェクトで `order` あり: order はその値
    /// - オブジェクトで `order` なし: オブジェクト全体を order とみなす（旧形式）
    /// - オブジェクト以外: 値そのものを order とみなす
    ///
    /// message は `message` キーがあればその値、無ければ DEFAULT_REPLY_MESSAGE。
    pub fn parse(raw: &str) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_str(&strip_code_fences(raw))?;
        Ok(Self::from_value(value))
    }

    fn from_value(value: Value) -> Self {
        let mut obj = match value {
            Value::Object(obj) => obj,
            other => {
                return Self {
                    message: DEFAULT_REPLY_MESSAGE.to_string(),
                    order: other,
                }
            }
        };

        let message = obj
            .get("message")
            .map(message_text)
            .unwrap_or_else(|| DEFAULT_REPLY_MESSAGE.to_string());

        let order = match obj.remove("order") {
            Some(order) => order,
            None => Value::Object(obj),
        };
        Self { message, order }
    }
}

fn message_text(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
