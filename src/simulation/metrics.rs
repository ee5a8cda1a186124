//! Waiting-time statistics
//!
//! Tracks the mean wait of queued vehicles, one sample per non-empty tick.

use ordered_float::OrderedFloat;

use super::intersection::SimIntersection;

/// Aggregates over the recorded history
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MetricsSummary {
    pub samples: usize,
    pub latest: Option<f64>,
    pub average: Option<f64>,
    pub peak: Option<f64>,
}

/// Time series of mean waiting time
#[derive(Debug, Clone, Default)]
pub struct Metrics {
    history: Vec<f64>,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the mean wait of everything currently queued.
    /// An empty intersection records nothing and returns `None`.
    pub fn update(&mut self, intersection: &SimIntersection) -> Option<f64> {
        let mut total_wait: u64 = 0;
        let mut vehicles: usize = 0;
        for vehicle in intersection.all_vehicles() {
            total_wait += u64::from(vehicle.wait_time);
            vehicles += 1;
        }

        if vehicles == 0 {
            return None;
        }

        let mean_wait = total_wait as f64 / vehicles as f64;
        self.history.push(mean_wait);
        Some(mean_wait)
    }

    pub fn reset(&mut self) {
        self.history.clear();
    }

    pub fn history(&self) -> &[f64] {
        &self.history
    }

    pub fn latest(&self) -> Option<f64> {
        self.history.last().copied()
    }

    pub fn summary(&self) -> MetricsSummary {
        let samples = self.history.len();
        let average = if samples > 0 {
            Some(self.history.iter().sum::<f64>() / samples as f64)
        } else {
            None
        };
        let peak = self
            .history
            .iter()
            .copied()
            .map(OrderedFloat)
            .max()
            .map(|peak| peak.0);

        MetricsSummary {
            samples,
            latest: self.latest(),
            average,
            peak,
        }
    }
}
