//! 会話履歴のドメイン型
//!
//! user/assistant のメッセージ列を追記のみで保持する。
//! LLM へは末尾の数件だけを渡す。

use common::llm::provider::Message as LlmMessage;

/// 会話履歴（会話のメッセージ列）
#[derive(Debug, Clone, Default)]
pub struct History {
    messages: Vec<LlmMessage>,
}

impl History {
    pub fn new() -> Self {
        History {
            messages: Vec::new(),
        }
    }

    pub fn push_user(&mut self, content: impl Into<String>) {
        self.messages.push(LlmMessage::user(content));
    }

    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.messages.push(LlmMessage::assistant(content));
    }

    pub fn messages(&self) -> &[LlmMessage] {
        &self.messages
    }

    /// 末尾 n 件（n が件数より多ければ全件）
    pub fn tail(&self, n: usize) -> &[LlmMessage] {
        let start = self.messages.len().saturating_sub(n);
        &self.messages[start..]
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }
}
