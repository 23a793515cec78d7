//! Per-chunk execution with retry and exponential backoff.

use std::time::Duration;

use tracing::warn;

use fgalink_transport::{TupleTransport, WriteRequestBody};

use crate::result::{ChunkFailure, ChunkOutcome};

/// Backoff before retry `attempt` (0-indexed): `base * 2^attempt`.
pub(crate) fn backoff_delay(base: Duration, attempt: u32) -> Duration {
    base.saturating_mul(2u32.saturating_pow(attempt))
}

/// Sends one chunk, retrying failed attempts up to `max_retries` times.
///
/// A persistently failing chunk is attempted exactly `max_retries + 1`
/// times. The backoff sleep is skipped when `retry_delay` is zero and
/// after the final attempt. The same payload is re-sent on every attempt.
pub(crate) async fn execute_with_retry<T: TupleTransport>(
    transport: &T,
    store_id: &str,
    chunk_index: usize,
    request: &WriteRequestBody,
    max_retries: u32,
    retry_delay: Duration,
) -> ChunkOutcome {
    let mut attempt = 0u32;
    loop {
        match transport.send(store_id, request).await {
            Ok(response) => return ChunkOutcome::Success(response),
            Err(error) => {
                if attempt == max_retries {
                    return ChunkOutcome::Failure(ChunkFailure {
                        chunk_index,
                        attempts: attempt + 1,
                        source: error,
                    });
                }
                warn!(
                    store_id = %store_id,
                    chunk_index,
                    attempt,
                    error = %error,
                    "chunk write failed, retrying"
                );
                if !retry_delay.is_zero() {
                    tokio::time::sleep(backoff_delay(retry_delay, attempt)).await;
                }
                attempt += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backoff_doubles_per_attempt() {
        let base = Duration::from_secs(1);
        assert_eq!(backoff_delay(base, 0), Duration::from_secs(1));
        assert_eq!(backoff_delay(base, 1), Duration::from_secs(2));
        assert_eq!(backoff_delay(base, 2), Duration::from_secs(4));
        assert_eq!(backoff_delay(base, 3), Duration::from_secs(8));
    }

    #[test]
    fn test_backoff_zero_base_stays_zero() {
        assert_eq!(backoff_delay(Duration::ZERO, 5), Duration::ZERO);
    }

    #[test]
    fn test_backoff_saturates_instead_of_overflowing() {
        let delay = backoff_delay(Duration::from_secs(1), 64);
        assert!(delay >= Duration::from_secs(u32::MAX as u64));
    }

    #[test]
    fn test_fractional_base_delay() {
        let base = Duration::from_millis(250);
        assert_eq!(backoff_delay(base, 2), Duration::from_secs(1));
    }
}
