//! 人間向けログ（LogRecord → stderr への要点のみ出力）
//!
//! 既存のロガー（tracing / log）に接続せず、stderr に整形して出力する。
//! fields の全量は出さず要点のみ（巨大化防止）。

use crate::error::Error;
use crate::ports::outbound::{Log, LogLevel, LogRecord};
use serde_json::Value;
use std::collections::BTreeMap;

const FIELDS_SUMMARY_MAX: usize = 400;

/// fields の要点だけを短い文字列にする（巨大化防止）
fn fields_summary(fields: Option<&BTreeMap<String, Value>>) -> String {
    let Some(fields) = fields.filter(|f| !f.is_empty()) else {
        return String::new();
    };
    let s = serde_json::to_string(fields).unwrap_or_default();
    if s.chars().count() <= FIELDS_SUMMARY_MAX {
        return s;
    }
    let truncated = s.chars().take(FIELDS_SUMMARY_MAX).collect::<String>();
    format!("{}... (len={})", truncated, s.len())
}

/// 1 レコードを 1 行に整形する
fn format_line(rec: &LogRecord) -> String {
    let mut line = format!("[{}] {}", rec.level.as_str(), rec.message);
    if let Some(ref kind) = rec.kind {
        line = format!("[{}] {}: {}", rec.level.as_str(), kind, rec.message);
    }
    let summary = fields_summary(rec.fields.as_ref());
    if !summary.is_empty() {
        line.push(' ');
        line.push_str(&summary);
    }
    line
}

/// 人間向けログ（stderr）。min_level より詳細なレコードは捨てる
pub struct StderrLog {
    min_level: LogLevel,
}

impl StderrLog {
    pub fn new(min_level: LogLevel) -> Self {
        Self { min_level }
    }

    fn enabled(&self, level: LogLevel) -> bool {
        rank(level) <= rank(self.min_level)
    }
}

impl Default for StderrLog {
    fn default() -> Self {
        Self::new(LogLevel::Info)
    }
}

fn rank(level: LogLevel) -> u8 {
    match level {
        LogLevel::Error => 0,
        LogLevel::Warn => 1,
        LogLevel::Info => 2,
        LogLevel::Debug => 3,
    }
}

impl Log for StderrLog {
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        if self.enabled(record.level) {
            eprintln!("{}", format_line(record));
        }
        Ok(())
    }
}
