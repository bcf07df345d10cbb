//! ユースケース・REPL・配線のテスト

mod assistant_tests;

use std::collections::BTreeMap;
use std::sync::Mutex;

use common::error::Error;
use common::ports::outbound::{Log, LogRecord};

use crate::domain::Menu;

/// テスト用: レコードをメモリに溜める Log
#[derive(Default)]
pub(crate) struct MemoryLog {
    records: Mutex<Vec<LogRecord>>,
}

impl MemoryLog {
    pub(crate) fn records(&self) -> Vec<LogRecord> {
        self.records.lock().unwrap().clone()
    }

    pub(crate) fn with_kind(&self, kind: &str) -> Vec<LogRecord> {
        self.records()
            .into_iter()
            .filter(|r| r.kind.as_deref() == Some(kind))
            .collect()
    }
}

impl Log for MemoryLog {
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }
}

/// Big Mac 5 / Large Fry 3 / Coke 2
pub(crate) fn sample_menu() -> Menu {
    let items: BTreeMap<String, f64> = [("Big Mac", 5.0), ("Large Fry", 3.0), ("Coke", 2.0)]
        .iter()
        .map(|(k, v)| (k.to_string(), *v))
        .collect();
    Menu::new(items).unwrap()
}
