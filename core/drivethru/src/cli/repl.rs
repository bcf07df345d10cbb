//! 端末 REPL（チャット画面の代わり）
//!
//! 1 行 = 1 ターン。スラッシュコマンドで表示と消去を行う。
//! アシスタントの公開操作だけを使い、状態には直接触れない。

use std::io::{BufRead, Write};
use std::sync::Mutex;

use anyhow::Result;
use common::llm::provider::Role;

use crate::domain::ReplCommand;
use crate::usecase::OrderAssistant;

const PROMPT: &str = "> ";

fn money(amount: f64) -> String {
    format!("${:.2}", amount)
}

pub fn render_menu(assistant: &OrderAssistant) -> String {
    let mut out = String::from("Menu:\n");
    for (name, price) in assistant.menu().iter() {
        out.push_str(&format!("  {:<20} {}\n", name, money(price)));
    }
    out
}

pub fn render_order(assistant: &OrderAssistant) -> String {
    let order = assistant.order();
    if order.is_empty() {
        return "Your order is empty.\n".to_string();
    }
    let mut out = String::from("Current order:\n");
    for (name, qty) in order.iter() {
        let line_total = assistant.menu().price(name).unwrap_or(0.0) * qty as f64;
        out.push_str(&format!("  {:>3} x {:<20} {}\n", qty, name, money(line_total)));
    }
    out.push_str(&format!("Total: {}\n", money(assistant.calculate_total())));
    out
}

pub fn render_history(assistant: &OrderAssistant) -> String {
    if assistant.history().is_empty() {
        return "No conversation yet.\n".to_string();
    }
    let mut out = String::new();
    for m in assistant.history().messages() {
        let who = match m.role {
            Role::User => "you",
            Role::Assistant => "cashier",
            Role::System => "system",
        };
        out.push_str(&format!("{:>8}: {}\n", who, m.content));
    }
    out
}

fn help_text() -> &'static str {
    "Type what you would like to order, e.g. \"two Big Macs and a Coke\".\n\
     Commands:\n\
     \x20 /menu      Show the menu\n\
     \x20 /order     Show the current order and total\n\
     \x20 /history   Show the conversation so far\n\
     \x20 /clear     Start a new order (clears order and conversation)\n\
     \x20 /help      Show this help\n\
     \x20 /quit      Leave (Ctrl+D also works)\n"
}

/// 入力が尽きるか /quit まで REPL を回す。
///
/// `summary` があれば、各ターン後の注文表示をそこへ写す（SIGINT ハンドラが終了時に出す）。
pub fn run_repl<R: BufRead, W: Write>(
    assistant: &mut OrderAssistant,
    input: R,
    out: &mut W,
    summary: Option<&Mutex<String>>,
) -> Result<()> {
    write!(out, "{}", render_menu(assistant))?;
    writeln!(out, "Type /help for commands.")?;

    let mut lines = input.lines();
    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;
        let Some(line) = lines.next() else {
            writeln!(out)?;
            break;
        };
        match ReplCommand::parse(&line?) {
            ReplCommand::Empty => {}
            ReplCommand::Turn(text) => {
                let (_, message) = assistant.process_turn(&text);
                writeln!(out, "{}", message)?;
                write!(out, "{}", render_order(assistant))?;
            }
            ReplCommand::Menu => write!(out, "{}", render_menu(assistant))?,
            ReplCommand::Order => write!(out, "{}", render_order(assistant))?,
            ReplCommand::History => write!(out, "{}", render_history(assistant))?,
            ReplCommand::Clear => {
                assistant.clear_order();
                writeln!(out, "Order cleared.")?;
            }
            ReplCommand::Help => write!(out, "{}", help_text())?,
            ReplCommand::Quit => break,
            ReplCommand::Unknown(cmd) => writeln!(out, "Unknown command: {} (try /help)", cmd)?,
        }
        if let Some(summary) = summary {
            if let Ok(mut s) = summary.lock() {
                *s = render_order(assistant);
            }
        }
    }

    write!(out, "{}", render_order(assistant))?;
    Ok(())
}
