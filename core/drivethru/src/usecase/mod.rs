//! ユースケース（注文状態の更新ループ）

pub mod assistant;
pub mod prompt;

pub use assistant::OrderAssistant;
