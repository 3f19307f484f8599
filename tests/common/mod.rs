/*!
 * Common test utilities shared across the test suite
 */

use std::sync::Arc;

use subtrans::app_config::TranslationConfig;
use subtrans::providers::mock::MockProvider;
use subtrans::translation::TranslationService;

/// Initialize logging for tests that exercise the fallback paths
///
/// Safe to call repeatedly; only the first call installs the logger.
pub fn init_test_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Build a valid test configuration with pacing disabled
pub fn test_config() -> TranslationConfig {
    TranslationConfig {
        model: "gpt-5-mini".to_string(),
        api_key: "sk-test123".to_string(),
        target_language: "Chinese (Traditional)".to_string(),
        endpoint: String::new(),
        batch_size: 12,
        rate_limit_delay_ms: 0,
        timeout_secs: 5,
    }
}

/// Build a translation service backed by the given mock provider
///
/// Returns the service and a clone of the mock sharing its request counter,
/// so tests can assert how many backend calls were made.
pub fn service_with_mock(provider: MockProvider) -> (TranslationService, MockProvider) {
    service_with_mock_and_config(provider, test_config())
}

/// Build a translation service with a custom configuration
pub fn service_with_mock_and_config(
    provider: MockProvider,
    config: TranslationConfig,
) -> (TranslationService, MockProvider) {
    let handle = provider.clone();
    let service = TranslationService::with_provider(config, Arc::new(provider))
        .expect("test configuration should be valid");
    (service, handle)
}

/// Convert string literals into owned texts
pub fn texts(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
