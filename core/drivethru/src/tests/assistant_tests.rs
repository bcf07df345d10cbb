//! OrderAssistant のテスト（ScriptedCompletion で LLM 応答を台本化）

use std::sync::Arc;

use common::adapter::NoopLog;
use common::domain::{ApiKey, ModelName};
use common::error::Error;
use common::llm::provider::Role;
use common::ports::outbound::LogLevel;

use super::{sample_menu, MemoryLog};
use crate::adapter::ScriptedCompletion;
use crate::usecase::assistant::{ERROR_APOLOGY, ORDER_TEMPERATURE, PARSE_APOLOGY};
use crate::usecase::OrderAssistant;

fn assistant_with(client: Arc<ScriptedCompletion>) -> (OrderAssistant, Arc<MemoryLog>) {
    let log = Arc::new(MemoryLog::default());
    let assistant = OrderAssistant::with_client(client, sample_menu(), log.clone());
    (assistant, log)
}

#[test]
fn test_turn_replaces_order_and_returns_message() {
    let client = Arc::new(ScriptedCompletion::texts(&[
        r#"{"message":"Added 2 Big Macs and 1 Large Fry to your order","order":{"Big Mac":2,"Large Fry":1}}"#,
    ]));
    let (mut a, _) = assistant_with(client);

    let (order, message) = a.process_turn("two big macs and a large fry");

    assert_eq!(message, "Added 2 Big Macs and 1 Large Fry to your order");
    assert_eq!(order.quantity("Big Mac"), Some(2));
    assert_eq!(order.quantity("Large Fry"), Some(1));
    assert_eq!(&order, a.order());
    assert_eq!(a.history().len(), 2);
    assert_eq!(a.history().messages()[0].role, Role::User);
    assert_eq!(a.history().messages()[0].content, "two big macs and a large fry");
    assert_eq!(a.history().messages()[1].role, Role::Assistant);
    assert_eq!(a.history().messages()[1].content, message);
}

#[test]
fn test_turn_drops_items_not_on_menu() {
    let client = Arc::new(ScriptedCompletion::texts(&[
        r#"{"message":"ok","order":{"Big Mac":2,"Pizza":1}}"#,
    ]));
    let (mut a, log) = assistant_with(client);

    let (order, message) = a.process_turn("two big macs and a pizza");

    assert_eq!(message, "ok");
    assert_eq!(order.len(), 1);
    assert_eq!(order.quantity("Big Mac"), Some(2));
    assert_eq!(order.quantity("Pizza"), None);
    let dropped = log.with_kind("validate");
    assert_eq!(dropped.len(), 1);
    assert_eq!(
        dropped[0].fields.as_ref().unwrap()["dropped"],
        serde_json::json!(["Pizza"])
    );
}

#[test]
fn test_full_replacement_not_merge() {
    let client = Arc::new(ScriptedCompletion::texts(&[
        r#"{"message":"a","order":{"Big Mac":1,"Coke":1}}"#,
        r#"{"message":"b","order":{"Large Fry":2}}"#,
    ]));
    let (mut a, _) = assistant_with(client);
    a.process_turn("big mac and coke");
    let (order, _) = a.process_turn("actually just two fries");
    assert_eq!(order.len(), 1);
    assert_eq!(order.quantity("Large Fry"), Some(2));
    assert_eq!(order.quantity("Big Mac"), None);
}

#[test]
fn test_calculate_total() {
    let client = Arc::new(ScriptedCompletion::texts(&[
        r#"{"message":"ok","order":{"Big Mac":2,"Coke":1}}"#,
        r#"{"message":"ok","order":{"Coke":1,"Big Mac":2}}"#,
    ]));
    let (mut a, _) = assistant_with(client);
    assert_eq!(a.calculate_total(), 0.0);

    a.process_turn("two big macs and a coke");
    assert_eq!(a.calculate_total(), 12.0);

    a.process_turn("same again");
    assert_eq!(a.calculate_total(), 12.0);
}

#[test]
fn test_calculate_total_is_pure() {
    let client = Arc::new(ScriptedCompletion::texts(&[
        r#"{"message":"ok","order":{"Large Fry":3}}"#,
    ]));
    let (mut a, _) = assistant_with(client);
    a.process_turn("three fries");
    let first = a.calculate_total();
    let second = a.calculate_total();
    assert_eq!(first, 9.0);
    assert_eq!(first, second);
    assert_eq!(a.history().len(), 2);
}

#[test]
fn test_clear_order_is_idempotent() {
    let client = Arc::new(ScriptedCompletion::texts(&[
        r#"{"message":"ok","order":{"Coke":1}}"#,
    ]));
    let (mut a, _) = assistant_with(client);
    a.process_turn("a coke");

    a.clear_order();
    assert!(a.order().is_empty());
    assert!(a.history().is_empty());

    a.clear_order();
    assert!(a.order().is_empty());
    assert!(a.history().is_empty());
    assert_eq!(a.menu().len(), 3);
}

#[test]
fn test_malformed_reply_keeps_order_and_apologizes() {
    let client = Arc::new(ScriptedCompletion::texts(&[
        r#"{"message":"ok","order":{"Coke":2}}"#,
        "Sure, I added that!",
    ]));
    let (mut a, log) = assistant_with(client);
    a.process_turn("two cokes");
    let before = a.order().clone();

    let (order, message) = a.process_turn("and a big mac");

    assert_eq!(message, PARSE_APOLOGY);
    assert_eq!(order, before);
    assert_eq!(a.order(), &before);
    assert_eq!(a.history().len(), 4);
    assert_eq!(a.history().messages()[2].content, "and a big mac");
    assert_eq!(a.history().messages()[3].role, Role::Assistant);
    assert_eq!(a.history().messages()[3].content, PARSE_APOLOGY);

    // 生テキストは運用ログにだけ残る
    let parse = log.with_kind("parse");
    assert_eq!(parse.len(), 1);
    assert_eq!(parse[0].level, LogLevel::Warn);
    assert_eq!(
        parse[0].fields.as_ref().unwrap()["raw"],
        serde_json::json!("Sure, I added that!")
    );
    assert!(!message.contains("Sure, I added that!"));
}

#[test]
fn test_bare_order_fallback_uses_default_message() {
    let client = Arc::new(ScriptedCompletion::texts(&[r#"{"Big Mac":1}"#]));
    let (mut a, _) = assistant_with(client);

    let (order, message) = a.process_turn("one big mac");

    assert_eq!(message, "Order updated.");
    assert_eq!(order.len(), 1);
    assert_eq!(order.quantity("Big Mac"), Some(1));
    assert_eq!(a.history().messages()[1].content, "Order updated.");
}

#[test]
fn test_order_without_message_uses_default_message() {
    let client = Arc::new(ScriptedCompletion::texts(&[r#"{"order":{"Coke":1}}"#]));
    let (mut a, _) = assistant_with(client);
    let (order, message) = a.process_turn("coke");
    assert_eq!(message, "Order updated.");
    assert_eq!(order.quantity("Coke"), Some(1));
}

#[test]
fn test_code_fenced_reply_parses_like_plain() {
    let client = Arc::new(ScriptedCompletion::texts(&[
        "```json\n{\"message\":\"x\",\"order\":{}}\n```",
        "{\"message\":\"x\",\"order\":{}}",
    ]));
    let (mut a, _) = assistant_with(client);
    let fenced = a.process_turn("nothing");
    let plain = a.process_turn("nothing");
    assert_eq!(fenced, plain);
    assert_eq!(fenced.1, "x");
    assert!(fenced.0.is_empty());
}

#[test]
fn test_history_window_after_ten_turns() {
    let client = Arc::new(ScriptedCompletion::repeat(
        r#"{"message":"ok","order":{"Coke":1}}"#,
        11,
    ));
    let (mut a, _) = assistant_with(Arc::clone(&client));

    for i in 1..=10 {
        a.process_turn(&format!("turn {}", i));
    }
    assert_eq!(a.history().len(), 20);

    a.process_turn("turn 11");
    let sent = client.last_request().unwrap();
    assert_eq!(sent.len(), 4);
    assert_eq!(sent[0].role, Role::System);
    assert_eq!(sent[1].role, Role::User);
    assert_eq!(sent[1].content, "turn 10");
    assert_eq!(sent[2].role, Role::Assistant);
    assert_eq!(sent[2].content, "ok");
    assert_eq!(sent[3].role, Role::User);
    assert_eq!(sent[3].content, "turn 11");
    assert_eq!(a.history().len(), 22);
}

#[test]
fn test_request_carries_system_prompt_with_current_order() {
    let client = Arc::new(ScriptedCompletion::texts(&[
        r#"{"message":"ok","order":{"Coke":2}}"#,
        r#"{"message":"ok","order":{"Coke":2}}"#,
    ]));
    let (mut a, _) = assistant_with(Arc::clone(&client));

    a.process_turn("two cokes");
    a.process_turn("that's all");

    let requests = client.requests();
    assert_eq!(requests.len(), 2);
    let (first, temp) = &requests[0];
    assert_eq!(*temp, ORDER_TEMPERATURE);
    assert_eq!(first.len(), 2);
    assert!(first[0].content.contains("CURRENT ORDER STATE:\n{}"));
    assert_eq!(first[1].content, "two cokes");

    let (second, _) = &requests[1];
    assert!(second[0].content.contains("\"Coke\": 2"));
    assert_eq!(second.len(), 4);
}

#[test]
fn test_remote_failure_keeps_order_and_apologizes() {
    let client = Arc::new(ScriptedCompletion::new(vec![
        Ok(r#"{"message":"ok","order":{"Big Mac":1}}"#.to_string()),
        Err(Error::http("HTTP 503: upstream unavailable")),
    ]));
    let (mut a, log) = assistant_with(client);
    a.process_turn("big mac");

    let (order, message) = a.process_turn("and a coke");

    assert_eq!(message, ERROR_APOLOGY);
    assert_eq!(order.quantity("Big Mac"), Some(1));
    assert_eq!(order.len(), 1);
    assert_eq!(a.history().len(), 4);
    assert_eq!(a.history().messages()[3].content, ERROR_APOLOGY);
    let llm = log.with_kind("llm");
    assert_eq!(llm.len(), 1);
    assert_eq!(llm[0].level, LogLevel::Error);
    assert!(llm[0].message.contains("upstream unavailable"));
}

#[test]
fn test_invalid_quantity_is_generic_error() {
    let client = Arc::new(ScriptedCompletion::texts(&[
        r#"{"message":"ok","order":{"Coke":"two"}}"#,
    ]));
    let (mut a, _) = assistant_with(client);
    let (order, message) = a.process_turn("two cokes");
    assert_eq!(message, ERROR_APOLOGY);
    assert!(order.is_empty());
    assert_eq!(a.history().len(), 2);
}

#[test]
fn test_non_mapping_json_is_generic_error() {
    let client = Arc::new(ScriptedCompletion::texts(&[r#""Big Mac""#, "[1, 2]"]));
    let (mut a, _) = assistant_with(client);
    assert_eq!(a.process_turn("x").1, ERROR_APOLOGY);
    assert_eq!(a.process_turn("y").1, ERROR_APOLOGY);
    assert!(a.order().is_empty());
    assert_eq!(a.history().len(), 4);
}

#[test]
fn test_zero_and_negative_quantities_pass_through() {
    let client = Arc::new(ScriptedCompletion::texts(&[
        r#"{"message":"ok","order":{"Coke":0,"Big Mac":-1}}"#,
    ]));
    let (mut a, _) = assistant_with(client);
    let (order, _) = a.process_turn("weird");
    assert_eq!(order.quantity("Coke"), Some(0));
    assert_eq!(order.quantity("Big Mac"), Some(-1));
    assert_eq!(a.calculate_total(), -5.0);
}

#[test]
fn test_message_and_filtered_order_may_disagree() {
    let client = Arc::new(ScriptedCompletion::texts(&[
        r#"{"message":"Added Pizza to your order","order":{"Pizza":1}}"#,
    ]));
    let (mut a, _) = assistant_with(client);
    let (order, message) = a.process_turn("a pizza");
    assert_eq!(message, "Added Pizza to your order");
    assert!(order.is_empty());
}

#[test]
fn test_new_connects_lazily() {
    let a = OrderAssistant::new(
        ApiKey::new("sk-test"),
        ModelName::new("meta-llama/llama-3.2-3b-instruct:free"),
        sample_menu(),
    )
    .unwrap();
    assert!(a.order().is_empty());
    assert!(a.history().is_empty());
    assert_eq!(a.menu().price("Big Mac"), Some(5.0));
}

#[test]
fn test_noop_logger_is_accepted() {
    let client = Arc::new(ScriptedCompletion::texts(&[r#"{"message":"ok","order":{}}"#]));
    let mut a = OrderAssistant::with_client(client, sample_menu(), Arc::new(NoopLog));
    assert_eq!(a.process_turn("hi").1, "ok");
}
