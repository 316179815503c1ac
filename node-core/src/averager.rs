// Running mean with a bounded raw-sample trace for debugging

use heapless::Vec;

/// Number of raw samples kept per window for the debug trace.
pub const TRACE_CAPACITY: usize = 80;

/// Accumulates samples for one sampling window.
///
/// Every sample counts toward the mean. Only the first [`TRACE_CAPACITY`]
/// samples of a window are kept in the trace; later ones are counted in
/// [`Averager::dropped`] instead of being written past the buffer.
#[derive(Debug, Clone, Default)]
pub struct Averager {
    sum: f64,
    count: usize,
    trace: Vec<f64, TRACE_CAPACITY>,
    dropped: usize,
}

impl Averager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn submit(&mut self, value: f64) {
        self.sum += value;
        self.count += 1;

        if self.trace.push(value).is_err() {
            self.dropped += 1;
        }
    }

    /// Mean of the current window, `None` before the first sample.
    pub fn mean(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(self.sum / self.count as f64)
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Raw samples of the current window in submission order.
    pub fn trace(&self) -> &[f64] {
        &self.trace
    }

    /// Samples of the current window that did not fit in the trace.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    pub fn reset(&mut self) {
        self.sum = 0.0;
        self.count = 0;
        self.trace.clear();
        self.dropped = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_window_has_no_mean() {
        let avg = Averager::new();
        assert_eq!(avg.mean(), None);
        assert_eq!(avg.count(), 0);
        assert!(avg.trace().is_empty());
    }

    #[test]
    fn test_mean_and_trace() {
        let mut avg = Averager::new();
        avg.submit(1.0);
        avg.submit(2.0);
        avg.submit(6.0);

        assert_eq!(avg.mean(), Some(3.0));
        assert_eq!(avg.trace(), &[1.0, 2.0, 6.0]);
    }

    #[test]
    fn test_reset_starts_a_new_window() {
        let mut avg = Averager::new();
        avg.submit(100.0);
        avg.submit(200.0);
        avg.reset();
        avg.submit(7.5);

        assert_eq!(avg.mean(), Some(7.5));
        assert_eq!(avg.count(), 1);
        assert_eq!(avg.trace(), &[7.5]);
    }

    #[test]
    fn test_trace_full_at_capacity() {
        let mut avg = Averager::new();
        for i in 0..TRACE_CAPACITY {
            avg.submit(i as f64);
        }

        assert_eq!(avg.trace().len(), TRACE_CAPACITY);
        assert_eq!(avg.dropped(), 0);
    }

    #[test]
    fn test_trace_overflow_is_dropped_but_still_averaged() {
        let mut avg = Averager::new();
        for _ in 0..TRACE_CAPACITY {
            avg.submit(1.0);
        }
        avg.submit(1.0 + TRACE_CAPACITY as f64);

        assert_eq!(avg.count(), TRACE_CAPACITY + 1);
        assert_eq!(avg.trace().len(), TRACE_CAPACITY);
        assert_eq!(avg.dropped(), 1);
        // sum = C + (1 + C) = 2C + 1 over C + 1 samples
        let expected = (2 * TRACE_CAPACITY + 1) as f64 / (TRACE_CAPACITY + 1) as f64;
        assert!((avg.mean().unwrap() - expected).abs() < 1e-9);
    }

    proptest! {
        #[test]
        fn prop_mean_matches_average(values in prop::collection::vec(-1.0e6f64..1.0e6, 1..200)) {
            let mut avg = Averager::new();
            for &v in &values {
                avg.submit(v);
            }
            let expected = values.iter().sum::<f64>() / values.len() as f64;
            let mean = avg.mean().unwrap();
            prop_assert!((mean - expected).abs() <= 1e-6 * expected.abs().max(1.0));
        }

        #[test]
        fn prop_reset_then_single_value(values in prop::collection::vec(-1.0e6f64..1.0e6, 0..100), v in -1.0e6f64..1.0e6) {
            let mut avg = Averager::new();
            for &x in &values {
                avg.submit(x);
            }
            avg.reset();
            avg.submit(v);
            prop_assert_eq!(avg.mean(), Some(v));
        }
    }
}
