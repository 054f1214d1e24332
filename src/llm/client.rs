//! CompletionClient trait definition

use async_trait::async_trait;

use super::{LlmError, Message};

/// Capability interface over a text-completion provider
///
/// Takes the ordered transcript and returns exactly one reply message or a
/// classified failure. Each call is one network round trip; retry policy,
/// if any, belongs to the caller (this tool performs none - a failure
/// aborts the run).
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send the ordered message list and return the reply text.
    async fn complete(&self, messages: &[Message]) -> Result<String, LlmError>;
}

#[cfg(test)]
pub mod mock {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use super::*;

    /// Scripted completion client for unit tests
    ///
    /// Pops one scripted result per call and records every message list it
    /// receives, so tests can assert on the exact transcript rendered for
    /// each request.
    pub struct MockCompletionClient {
        responses: Mutex<VecDeque<Result<String, LlmError>>>,
        requests: Mutex<Vec<Vec<Message>>>,
    }

    impl MockCompletionClient {
        pub fn new(responses: Vec<Result<String, LlmError>>) -> Self {
            Self {
                responses: Mutex::new(responses.into_iter().collect()),
                requests: Mutex::new(Vec::new()),
            }
        }

        /// Convenience constructor for a run of successful replies
        pub fn replies(texts: &[&str]) -> Self {
            Self::new(texts.iter().map(|t| Ok(t.to_string())).collect())
        }

        pub fn call_count(&self) -> usize {
            self.requests.lock().unwrap().len()
        }

        /// Message lists received so far, in call order
        pub fn requests(&self) -> Vec<Vec<Message>> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl CompletionClient for MockCompletionClient {
        async fn complete(&self, messages: &[Message]) -> Result<String, LlmError> {
            self.requests.lock().unwrap().push(messages.to_vec());
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Err(LlmError::NoCompletion))
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[tokio::test]
        async fn test_mock_client_returns_scripted_replies() {
            let client = MockCompletionClient::replies(&["first", "second"]);

            let reply = client.complete(&[Message::user("hi")]).await.unwrap();
            assert_eq!(reply, "first");

            let reply = client.complete(&[Message::user("hi")]).await.unwrap();
            assert_eq!(reply, "second");

            assert_eq!(client.call_count(), 2);
        }

        #[tokio::test]
        async fn test_mock_client_records_requests() {
            let client = MockCompletionClient::replies(&["ok"]);
            let messages = vec![Message::user("a"), Message::assistant("b")];

            client.complete(&messages).await.unwrap();

            let requests = client.requests();
            assert_eq!(requests.len(), 1);
            assert_eq!(requests[0], messages);
        }

        #[tokio::test]
        async fn test_mock_client_errors_when_exhausted() {
            let client = MockCompletionClient::new(vec![]);
            let result = client.complete(&[Message::user("hi")]).await;
            assert!(matches!(result, Err(LlmError::NoCompletion)));
        }
    }
}
