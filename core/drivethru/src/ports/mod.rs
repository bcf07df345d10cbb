//! Ports & Adapters のポート定義
//!
//! - outbound: 注文エンジンが外界（LLM）に依頼するための trait

pub mod outbound;
