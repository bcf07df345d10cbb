//! CLI（引数解析と REPL）

pub mod args;
pub mod repl;

pub use args::{parse_args, print_completion, Config, ParseOutcome};
pub use repl::run_repl;
