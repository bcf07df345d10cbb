//! REPL の 1 行入力を表す enum（Command Pattern）
//!
//! 注文ターン vs スラッシュコマンドの分岐を enum で明示する。

/// REPL の 1 行分の指示
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    /// 注文の発話（LLM に渡す）
    Turn(String),
    /// /menu
    Menu,
    /// /order: 注文と合計
    Order,
    /// /history
    History,
    /// /clear: 注文と履歴を消す
    Clear,
    /// /help
    Help,
    /// /quit, /exit
    Quit,
    /// 空行
    Empty,
    /// 未知のスラッシュコマンド
    Unknown(String),
}

impl ReplCommand {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return ReplCommand::Empty;
        }
        if !line.starts_with('/') {
            return ReplCommand::Turn(line.to_string());
        }
        match line.to_ascii_lowercase().as_str() {
            "/menu" => ReplCommand::Menu,
            "/order" | "/total" => ReplCommand::Order,
            "/history" => ReplCommand::History,
            "/clear" => ReplCommand::Clear,
            "/help" | "/?" => ReplCommand::Help,
            "/quit" | "/exit" => ReplCommand::Quit,
            _ => ReplCommand::Unknown(line.to_string()),
        }
    }
}
