use std::time::Duration;
use reqwest::header::HeaderMap;
use crate::config::constants::sleep_duration_millis;

pub struct RetryHelper;

impl RetryHelper {
    pub fn is_retryable_status(status: u16) -> bool {
        matches!(status, 408 | 429 | 500 | 502 | 503 | 504)
    }

    pub fn is_retryable_transport_error(error: &reqwest::Error) -> bool {
        error.is_timeout() || error.is_connect()
    }

    /// Only the delay-seconds form is honored; HTTP dates fall back to backoff.
    pub fn parse_retry_after(headers: &HeaderMap) -> Option<Duration> {
        let raw = headers.get(reqwest::header::RETRY_AFTER)?.to_str().ok()?.trim();
        raw.parse::<u64>().ok().map(Duration::from_secs)
    }

    pub fn retry_delay(base_delay_ms: u64, attempt: usize, retry_after: Option<Duration>) -> Duration {
        if let Some(retry_after) = retry_after {
            return retry_after;
        }
        let exponent = attempt.saturating_sub(1).min(10) as u32;
        sleep_duration_millis(base_delay_ms.saturating_mul(1_u64 << exponent))
    }

    pub fn truncate_for_error(body: &str, max_chars: usize) -> String {
        if body.chars().count() <= max_chars {
            return body.to_string();
        }
        let truncated: String = body.chars().take(max_chars).collect();
        format!("{}...", truncated)
    }
}
