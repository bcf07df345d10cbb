//! 注文（品名 -> 数量）のドメイン型
//!
//! 不変条件: すべてのキーはメニューに存在する。
//! 数量の正負は検証しない（モデルが返した値をそのまま受け入れる）。

use crate::domain::Menu;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// モデル出力から注文を作れなかった理由
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OrderError {
    #[error("order must be a JSON object, got {0}")]
    NotAMapping(String),
    #[error("quantity for {item:?} must be an integer, got {value}")]
    InvalidQuantity { item: String, value: String },
}

/// 注文
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Order(BTreeMap<String, i64>);

impl Order {
    pub fn new() -> Self {
        Self::default()
    }

    /// モデルが返した注文 JSON をメニューで絞り込む。
    ///
    /// メニューに無いキーは黙って捨て、捨てた品名を返す（ログ用）。
    /// 残したキーの数量が整数でなければ Err。部分的な注文は作らない。
    pub fn from_model_value(value: &Value, menu: &Menu) -> Result<(Order, Vec<String>), OrderError> {
        let obj = value
            .as_object()
            .ok_or_else(|| OrderError::NotAMapping(json_kind(value).to_string()))?;

        let mut items = BTreeMap::new();
        let mut dropped = Vec::new();
        for (name, qty) in obj {
            if !menu.contains(name) {
                dropped.push(name.clone());
                continue;
            }
            let qty = quantity(qty).ok_or_else(|| OrderError::InvalidQuantity {
                item: name.clone(),
                value: qty.to_string(),
            })?;
            items.insert(name.clone(), qty);
        }
        Ok((Order(items), dropped))
    }

    #[allow(dead_code)] // テストで使用。公開APIとして保持
    pub fn quantity(&self, name: &str) -> Option<i64> {
        self.0.get(name).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    #[allow(dead_code)] // テストで使用。公開APIとして保持
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_json(&self) -> Value {
        serde_json::to_value(&self.0).unwrap_or_else(|_| Value::Object(Default::default()))
    }
}

impl FromIterator<(String, i64)> for Order {
    fn from_iter<I: IntoIterator<Item = (String, i64)>>(iter: I) -> Self {
        Order(iter.into_iter().collect())
    }
}

/// 2 や 2.0 は整数として受け入れる。1.5 や "2" は不可
fn quantity(v: &Value) -> Option<i64> {
    if let Some(n) = v.as_i64() {
        return Some(n);
    }
    v.as_f64()
        .filter(|f| f.fract() == 0.0 && f.abs() < 9.0e15)
        .map(|f| f as i64)
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
