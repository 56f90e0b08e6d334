use std::io::{stderr, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio::time::{interval, Duration, Instant};

#[derive(Default)]
pub struct Metrics {
    pub total: AtomicU64,
    pub fetched: AtomicU64,
    pub failed: AtomicU64,
    pub words: AtomicU64,
}

impl Metrics {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn finished(&self) -> u64 {
        self.fetched.load(Ordering::Relaxed) + self.failed.load(Ordering::Relaxed)
    }
}

/// Periodic stderr progress line for list mode. Aborted by the caller before
/// final output so the \r line never interleaves with results.
pub fn spawn_reporter(m: Arc<Metrics>, interval_secs: u64) -> JoinHandle<()> {
    tokio::spawn(async move {
        let start = Instant::now();
        let mut last_finished = 0u64;
        let mut tick = interval(Duration::from_secs(interval_secs.max(1)));
        loop {
            tick.tick().await;
            let total = m.total.load(Ordering::Relaxed);
            let fetched = m.fetched.load(Ordering::Relaxed);
            let failed = m.failed.load(Ordering::Relaxed);
            let words = m.words.load(Ordering::Relaxed);
            let finished = fetched + failed;
            let d_fin = finished.saturating_sub(last_finished);
            last_finished = finished;

            let rate = d_fin as f64 / (interval_secs.max(1) as f64);
            let remain = total.saturating_sub(finished) as f64;
            let eta_secs = if rate > 0.0 { (remain / rate) as u64 } else { 0 };
            let percent = if total > 0 {
                (finished as f64 / total as f64) * 100.0
            } else {
                0.0
            };
            let elapsed = start.elapsed().as_secs();

            let mut err = stderr();
            let _ = write!(
                err,
                "\r[stat] {:>5.1}% | total={} fin={} ok={} fail={} words={} rate/s={:.0} ETA={}s elapsed={}s",
                percent, total, finished, fetched, failed, words, rate, eta_secs, elapsed
            );
            let _ = err.flush();
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finished_counts_both_outcomes() {
        let m = Metrics::new();
        m.total.store(3, Ordering::Relaxed);
        m.fetched.fetch_add(2, Ordering::Relaxed);
        m.failed.fetch_add(1, Ordering::Relaxed);
        assert_eq!(m.finished(), 3);
    }
}
