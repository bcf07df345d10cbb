//! Ctrl+C（SIGINT）でセッションを終える
//!
//! ハンドラは別スレッドで動くため、アシスタント本体には触れない。
//! REPL が更新する注文サマリの写しを出力して終了する。

use std::process;
use std::sync::{Arc, Mutex};

/// SIGINT 時の終了コード（128 + SIGINT）
const SIGINT_EXIT_CODE: i32 = 130;

/// SIGINT ハンドラを登録する。
/// 複数回呼んでもハンドラは初回のみ登録される（ctrlc の仕様、2 回目以降は Err）。
pub fn install_sigint_handler(summary: Arc<Mutex<String>>) -> Result<(), ctrlc::Error> {
    ctrlc::set_handler(move || {
        let text = summary
            .lock()
            .map(|s| s.clone())
            .unwrap_or_default();
        eprintln!();
        if !text.is_empty() {
            println!("{}", text);
        }
        process::exit(SIGINT_EXIT_CODE);
    })
}
