//! ファイルへ JSONL で追記する Log 実装
//!
//! ログの出力先はファイルのみ。利用者への応答（stdout）とは別。

use crate::error::Error;
use crate::ports::outbound::{Log, LogRecord};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// ファイルへ JSONL を追記する Log 実装
pub struct FileJsonLog {
    path: PathBuf,
}

impl FileJsonLog {
    /// ログファイルパスへ追記する logger を生成する。
    /// 親ディレクトリが無ければ作成する（初回書き込み時）。
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Log for FileJsonLog {
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|e| Error::io_msg(format!("{}: {}", parent.display(), e)))?;
            }
        }
        let line = serde_json::to_string(record).map_err(|e| Error::json(e.to_string()))?;
        let mut w = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| Error::io_msg(format!("{}: {}", self.path.display(), e)))?;
        w.write_all(line.as_bytes())?;
        w.write_all(b"\n")?;
        w.flush()?;
        Ok(())
    }
}

/// 何も出力しない Log 実装（テスト用）
#[derive(Debug, Clone, Default)]
pub struct NoopLog;

impl Log for NoopLog {
    fn log(&self, _record: &LogRecord) -> Result<(), Error> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::LogLevel;

    #[test]
    fn test_noop_log() {
        let log = NoopLog;
        assert!(log.log(&LogRecord::new(LogLevel::Info, "test")).is_ok());
    }

    #[test]
    fn test_file_json_log_appends_lines_and_creates_parent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("drivethru.jsonl");
        let log = FileJsonLog::new(&path);

        log.log(&LogRecord::new(LogLevel::Info, "first").kind("turn"))
            .unwrap();
        log.log(&LogRecord::new(LogLevel::Warn, "second").field("raw", serde_json::json!("x")))
            .unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["message"], "first");
        assert_eq!(first["kind"], "turn");
        let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second["level"], "warn");
        assert_eq!(second["fields"]["raw"], "x");
    }
}
