//! アダプター（外界の I/O を trait で実装）
//!
//! usecase は ports の trait 経由でのみログ・環境変数に触れる。
//! 実装は標準実装（Std*）やテスト用の Noop を注入する。

pub mod file_json_log;
pub mod stderr_log;
pub mod std_env_resolver;

pub use file_json_log::{FileJsonLog, NoopLog};
pub use stderr_log::StderrLog;
pub use std_env_resolver::StdEnvResolver;
