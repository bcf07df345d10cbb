//! テスト用: 台本どおりの応答を返し、送られたメッセージ列を記録する CompletionClient 実装


#[cfg(test)]
pub use stub::ScriptedCompletion;
