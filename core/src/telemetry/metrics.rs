use std::sync::Mutex;

/// Counts good-set rebuilds and bound reconfigurations.
#[derive(Debug)]
pub struct MetricsRecorder {
    inner: Mutex<Metrics>,
}

#[derive(Debug, Default)]
struct Metrics {
    rebuilds: usize,
    reconfigurations: usize,
}

/// Point-in-time copy of the counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub rebuilds: usize,
    pub reconfigurations: usize,
}

impl MetricsRecorder {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Metrics::default()),
        }
    }

    pub fn record_rebuild(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.rebuilds += 1;
        }
    }

    pub fn record_reconfiguration(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.reconfigurations += 1;
        }
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        if let Ok(metrics) = self.inner.lock() {
            MetricsSnapshot {
                rebuilds: metrics.rebuilds,
                reconfigurations: metrics.reconfigurations,
            }
        } else {
            MetricsSnapshot::default()
        }
    }
}

impl Default for MetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}
