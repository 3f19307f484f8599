/*!
 * Mock provider implementations for testing.
 *
 * This module provides mock providers that simulate different behaviors:
 * - `MockProvider::working()` - echoes every numbered input line translated
 * - `MockProvider::failing()` - always fails with an error
 * - `MockProvider::fail_first(n)` - fails the first n requests, then works
 * - `MockProvider::scripted(replies)` - plays back a queue of replies
 */

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::ProviderError;
use crate::providers::{CompletionProvider, CompletionRequest};

// Numbered input lines in a batch user message
static NUMBERED_LINE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^(\d+)[.)]\s*(.*)$").unwrap());

/// Behavior mode for the mock provider
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockBehavior {
    /// Echoes every numbered line with a translation marker
    Working,
    /// Always fails with an error
    Failing,
    /// Fails the first n requests, then behaves like Working
    FailFirst {
        /// Number of leading requests that fail
        n: usize,
    },
    /// Plays back scripted replies in order
    Scripted,
    /// Returns an empty reply
    Empty,
    /// Simulates a slow reply (for timeout testing)
    Slow {
        /// Delay before replying, in milliseconds
        delay_ms: u64,
    },
}

/// Mock provider for testing engine behavior
#[derive(Debug)]
pub struct MockProvider {
    /// Behavior mode
    behavior: MockBehavior,
    /// Request counter, shared across clones
    request_count: Arc<AtomicUsize>,
    /// Scripted replies, consumed front to back
    scripted: Arc<Mutex<VecDeque<Result<String, ProviderError>>>>,
    /// Every request received, shared across clones
    recorded: Arc<Mutex<Vec<CompletionRequest>>>,
}

impl MockProvider {
    /// Create a new mock provider with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            request_count: Arc::new(AtomicUsize::new(0)),
            scripted: Arc::new(Mutex::new(VecDeque::new())),
            recorded: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a working mock provider that always succeeds
    pub fn working() -> Self {
        Self::new(MockBehavior::Working)
    }

    /// Create a failing mock provider that always errors
    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    /// Create a mock provider that fails the first n requests
    pub fn fail_first(n: usize) -> Self {
        Self::new(MockBehavior::FailFirst { n })
    }

    /// Create a mock provider that plays back scripted replies
    ///
    /// Once the script runs dry the provider errors.
    pub fn scripted(replies: Vec<Result<String, ProviderError>>) -> Self {
        let provider = Self::new(MockBehavior::Scripted);
        provider.scripted.lock().unwrap().extend(replies);
        provider
    }

    /// Create a mock that returns empty replies
    pub fn empty() -> Self {
        Self::new(MockBehavior::Empty)
    }

    /// Number of requests received so far
    pub fn request_count(&self) -> usize {
        self.request_count.load(Ordering::SeqCst)
    }

    /// All requests received so far
    pub fn recorded_requests(&self) -> Vec<CompletionRequest> {
        self.recorded.lock().unwrap().clone()
    }

    /// Render a translated echo of a request
    ///
    /// Numbered batch lines come back with the same numbering; a single
    /// prompt comes back as one translated line without numbering.
    fn echo_translation(request: &CompletionRequest) -> String {
        let numbered: Vec<String> = NUMBERED_LINE_REGEX
            .captures_iter(&request.user)
            .map(|caps| format!("{}. [MOCK] {}", &caps[1], &caps[2]))
            .collect();

        if numbered.is_empty() {
            let payload = request
                .user
                .rsplit("\n\n")
                .next()
                .unwrap_or(&request.user)
                .trim();
            format!("[MOCK] {}", payload)
        } else {
            numbered.join("\n")
        }
    }
}

impl Clone for MockProvider {
    fn clone(&self) -> Self {
        Self {
            behavior: self.behavior,
            request_count: Arc::clone(&self.request_count),
            scripted: Arc::clone(&self.scripted),
            recorded: Arc::clone(&self.recorded),
        }
    }
}

#[async_trait]
impl CompletionProvider for MockProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<String, ProviderError> {
        let count = self.request_count.fetch_add(1, Ordering::SeqCst);
        self.recorded.lock().unwrap().push(request.clone());

        match self.behavior {
            MockBehavior::Working => Ok(Self::echo_translation(&request)),

            MockBehavior::Failing => Err(ProviderError::ApiError {
                status_code: 500,
                message: "Simulated provider failure".to_string(),
            }),

            MockBehavior::FailFirst { n } => {
                if count < n {
                    Err(ProviderError::ApiError {
                        status_code: 503,
                        message: format!("Simulated failure (request #{})", count + 1),
                    })
                } else {
                    Ok(Self::echo_translation(&request))
                }
            }

            MockBehavior::Scripted => self
                .scripted
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| {
                    Err(ProviderError::RequestFailed(
                        "scripted replies exhausted".to_string(),
                    ))
                }),

            MockBehavior::Empty => Ok(String::new()),

            MockBehavior::Slow { delay_ms } => {
                tokio::time::sleep(tokio::time::Duration::from_millis(delay_ms)).await;
                Ok(Self::echo_translation(&request))
            }
        }
    }
}
