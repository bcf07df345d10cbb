//! drivethru 共通ライブラリ
//!
//! 注文アシスタント本体（drivethru）から使う LLM クライアント・ログ・設定を提供します。

/// 外界の I/O 実装（ログ・環境変数）
pub mod adapter;

/// 設定ファイル
pub mod config;

/// ドメイン型（Newtype）
pub mod domain;

/// エラーハンドリング
pub mod error;

/// LLMドライバーとプロバイダ
pub mod llm;

/// Outbound ポート
pub mod ports;
