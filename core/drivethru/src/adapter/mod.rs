//! 標準アダプタ（ports の trait 実装）

pub mod llm_completion;
pub mod sigint;
pub mod stub_completion;

pub use llm_completion::DriverCompletion;
pub use sigint::install_sigint_handler;
#[cfg(test)]
pub use stub_completion::ScriptedCompletion;
