//! メニュー（品名 -> 単価）のドメイン型
//!
//! アシスタント生成時に固定され、以後変更されない。

use common::error::Error;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// メニュー。品名は一意、単価は非負の有限値
#[derive(Debug, Clone, PartialEq)]
pub struct Menu {
    items: BTreeMap<String, f64>,
}

impl Menu {
    /// 品名と単価から作る。空の品名・負数・非有限の単価は Error::Config
    pub fn new(items: BTreeMap<String, f64>) -> Result<Self, Error> {
        for (name, price) in &items {
            if name.trim().is_empty() {
                return Err(Error::config("menu item name must not be empty"));
            }
            if !price.is_finite() || *price < 0.0 {
                return Err(Error::config(format!(
                    "menu price for {:?} must be a non-negative number, got {}",
                    name, price
                )));
            }
        }
        Ok(Self { items })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.items.contains_key(name)
    }

    pub fn price(&self, name: &str) -> Option<f64> {
        self.items.get(name).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.items.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.items.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[allow(dead_code)] // Menu の公開APIとして保持
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// プロンプト埋め込み用の JSON。整数の単価は整数として出す
    pub fn to_json(&self) -> Value {
        let map: Map<String, Value> = self
            .items
            .iter()
            .map(|(name, price)| (name.clone(), price_value(*price)))
            .collect();
        Value::Object(map)
    }
}

fn price_value(price: f64) -> Value {
    if price.fract() == 0.0 && price.abs() < 1e15 {
        Value::from(price as i64)
    } else {
        Value::from(price)
    }
}
