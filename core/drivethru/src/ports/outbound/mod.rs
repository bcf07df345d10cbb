//! Outbound ポート: 注文エンジンが外界を使うための trait

pub mod completion_client;

pub use completion_client::CompletionClient;
