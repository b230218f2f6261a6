//! Artificial response latency per content shape

use std::time::Duration;

use quantdeck_core::ContentShape;

pub const DEFAULT_TEXT_MS: u64 = 500;
pub const DEFAULT_STRATEGIES_MS: u64 = 800;
pub const DEFAULT_RESULTS_MS: u64 = 1000;

/// How long a provider waits before resolving each kind of content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Latency {
    pub text: Duration,
    pub strategies: Duration,
    pub results: Duration,
}

impl Default for Latency {
    fn default() -> Self {
        Self::from_millis(DEFAULT_TEXT_MS, DEFAULT_STRATEGIES_MS, DEFAULT_RESULTS_MS)
    }
}

impl Latency {
    pub fn from_millis(text: u64, strategies: u64, results: u64) -> Self {
        Self {
            text: Duration::from_millis(text),
            strategies: Duration::from_millis(strategies),
            results: Duration::from_millis(results),
        }
    }

    /// No artificial delay; fetches still suspend once before resolving
    pub fn none() -> Self {
        Self::from_millis(0, 0, 0)
    }

    pub fn for_shape(&self, shape: ContentShape) -> Duration {
        match shape {
            ContentShape::Text => self.text,
            ContentShape::StrategyList => self.strategies,
            ContentShape::ReplicationResult => self.results,
        }
    }

    /// Wait out the delay for `shape`
    pub async fn wait(&self, shape: ContentShape) {
        let delay = self.for_shape(shape);
        if delay.is_zero() {
            tokio::task::yield_now().await;
        } else {
            tokio::time::sleep(delay).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_latency_is_positive_for_every_shape() {
        let latency = Latency::default();
        for shape in [
            ContentShape::Text,
            ContentShape::StrategyList,
            ContentShape::ReplicationResult,
        ] {
            assert!(!latency.for_shape(shape).is_zero());
        }
    }

    #[test]
    fn test_for_shape_maps_fields() {
        let latency = Latency::from_millis(1, 2, 3);
        assert_eq!(latency.for_shape(ContentShape::Text), Duration::from_millis(1));
        assert_eq!(
            latency.for_shape(ContentShape::StrategyList),
            Duration::from_millis(2)
        );
        assert_eq!(
            latency.for_shape(ContentShape::ReplicationResult),
            Duration::from_millis(3)
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_wait_sleeps_for_shape_delay() {
        let latency = Latency::from_millis(10, 20, 30);
        let start = tokio::time::Instant::now();
        latency.wait(ContentShape::ReplicationResult).await;
        assert!(start.elapsed() >= Duration::from_millis(30));
    }

    #[tokio::test]
    async fn test_zero_latency_completes() {
        Latency::none().wait(ContentShape::Text).await;
    }
}
