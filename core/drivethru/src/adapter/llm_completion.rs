//! 単発完了の標準実装（LlmDriver に委譲）

use common::error::Error;
use common::llm::provider::{ChatProvider, Message};
use common::llm::LlmDriver;

use crate::ports::outbound::CompletionClient;

/// 標準の単発完了アダプタ（プロバイダ非依存の LlmDriver を包む）
pub struct DriverCompletion<P: ChatProvider> {
    driver: LlmDriver<P>,
}

impl<P: ChatProvider> DriverCompletion<P> {
    pub fn new(provider: P) -> Self {
        Self {
            driver: LlmDriver::new(provider),
        }
    }
}

impl<P: ChatProvider + Send + Sync> CompletionClient for DriverCompletion<P> {
    fn complete(&self, messages: &[Message], temperature: f64) -> Result<String, Error> {
        self.driver.complete(messages, temperature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    struct FixedProvider;

    impl ChatProvider for FixedProvider {
        fn name(&self) -> &str {
            "fixed"
        }

        fn make_request_payload(&self, messages: &[Message], temperature: f64) -> Result<Value, Error> {
            Ok(serde_json::json!({ "n": messages.len(), "temperature": temperature }))
        }

        fn make_http_request(&self, request_json: &str) -> Result<String, Error> {
            let v: Value = serde_json::from_str(request_json)?;
            Ok(format!(
                r#"{{"choices":[{{"message":{{"content":"n={} t={}"}}}}]}}"#,
                v["n"], v["temperature"]
            ))
        }

        fn parse_response_text(&self, response_json: &str) -> Result<Option<String>, Error> {
            let v: Value = serde_json::from_str(response_json)?;
            Ok(v["choices"][0]["message"]["content"].as_str().map(String::from))
        }
    }

    #[test]
    fn test_driver_completion_delegates() {
        let client = DriverCompletion::new(FixedProvider);
        let text = client
            .complete(&[Message::system("s"), Message::user("u")], 0.1)
            .unwrap();
        assert_eq!(text, "n=2 t=0.1");
    }
}
