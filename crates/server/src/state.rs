use crate::config::ServerConfig;
use crate::error::ServerResult;
use crate::ocr::{OcrEngine, TesseractCli};
use comprova::{RandomPool, ReceiptValidator};
use dashmap::DashMap;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// Rate limit tracking: API key -> (count, window_start)
    pub rate_limiter: Arc<DashMap<String, (u32, std::time::Instant)>>,

    /// Validation pipeline (shared across requests)
    pub validator: Arc<ReceiptValidator>,

    /// OCR engine (shared across requests)
    pub ocr: Arc<dyn OcrEngine>,
}

impl ServerState {
    /// Create new server state
    pub fn new(config: ServerConfig) -> ServerResult<Self> {
        let credentials = Arc::new(RandomPool::new(config.ai_api_keys.clone()));
        let validator = Arc::new(ReceiptValidator::new(
            config.validator.clone(),
            credentials,
        ));
        let ocr: Arc<dyn OcrEngine> = Arc::new(TesseractCli::new(
            config.ocr_command.clone(),
            config.ocr_language.clone(),
        ));

        Ok(Self {
            config: Arc::new(config),
            rate_limiter: Arc::new(DashMap::new()),
            validator,
            ocr,
        })
    }

    /// Check if API key is valid
    pub fn is_valid_api_key(&self, key: &str) -> bool {
        self.config.api_keys.contains(key)
    }

    /// Check rate limit for API key
    pub fn check_rate_limit(&self, key: &str) -> bool {
        let now = std::time::Instant::now();
        let window = std::time::Duration::from_secs(60);
        let limit = self.config.rate_limit_per_minute;

        let mut entry = self.rate_limiter.entry(key.to_string()).or_insert((0, now));
        let (count, window_start) = entry.value_mut();

        // Reset if window has passed
        if now.duration_since(*window_start) > window {
            *count = 0;
            *window_start = now;
        }

        // Check limit
        if *count >= limit {
            return false;
        }

        *count += 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_state() -> ServerState {
        let mut config = ServerConfig::default();
        config.api_keys.insert("test-key".to_string());
        config.rate_limit_per_minute = 2;
        ServerState::new(config).expect("state")
    }

    #[test]
    fn api_key_validation() {
        let state = test_state();
        assert!(state.is_valid_api_key("test-key"));
        assert!(!state.is_valid_api_key("other-key"));
    }

    #[test]
    fn rate_limit_blocks_after_window_budget() {
        let state = test_state();
        assert!(state.check_rate_limit("test-key"));
        assert!(state.check_rate_limit("test-key"));
        assert!(!state.check_rate_limit("test-key"));
    }
}
