//! LLMドライバーとプロバイダの実装
//!
//! Chat Completions 互換エンドポイントへの同期呼び出しを提供します。

pub mod driver;
pub mod openai_compat;
pub mod provider;

pub use driver::LlmDriver;
pub use openai_compat::OpenAiCompatProvider;
pub use provider::{ChatProvider, Message, Role};
