//! 単発チャット完了の Outbound ポート
//!
//! ストリーミングではなく 1 回の呼び出しで全文応答を取得する。

use common::error::Error;
use common::llm::provider::Message;

/// 単発のチャット完了（メッセージ列で応答文字列を取得）
///
/// 失敗はすべて Error::Http（リモート呼び出し失敗）にまとめる。
pub trait CompletionClient: Send + Sync {
    fn complete(&self, messages: &[Message], temperature: f64) -> Result<String, Error>;
}
