//! Batch computation over many independent series.
//!
//! Indicators are pure functions of their inputs, so a batch of symbols can
//! be fanned out across threads without coordination. With the `parallel`
//! feature enabled, batches at or above the processor's threshold run on
//! Rayon's global pool; smaller batches, and every batch without the
//! feature, run sequentially. Results keep the order of the inputs, and the
//! first failing series aborts the batch with its error.
//!
//! ```toml
//! [dependencies]
//! tacalc = { version = "0.1", features = ["parallel"] }
//! ```
//!
//! # Example
//!
//! ```
//! use tacalc::batch::BatchProcessor;
//! use tacalc::indicators::sma;
//!
//! let series = vec![
//!     vec![1.0_f64, 2.0, 3.0, 4.0, 5.0],
//!     vec![5.0, 4.0, 3.0, 2.0, 1.0],
//!     vec![2.0, 4.0, 6.0, 8.0, 10.0],
//! ];
//!
//! let results: Vec<Vec<f64>> = BatchProcessor::new()
//!     .process(&series, |s| sma(s, 3))
//!     .unwrap();
//! assert_eq!(results[2][2], 4.0);
//! ```

use crate::error::Result;
use crate::traits::SeriesElement;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Default number of series below which a batch is processed sequentially.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 8;

/// One symbol's aligned price bars.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OhlcSeries<T> {
    /// Opening prices.
    pub open: Vec<T>,
    /// High prices.
    pub high: Vec<T>,
    /// Low prices.
    pub low: Vec<T>,
    /// Closing prices.
    pub close: Vec<T>,
    /// Traded volume; empty when the source has none.
    pub volume: Vec<T>,
}

impl<T: SeriesElement> OhlcSeries<T> {
    /// Creates a bar set without volume.
    #[must_use]
    pub const fn new(open: Vec<T>, high: Vec<T>, low: Vec<T>, close: Vec<T>) -> Self {
        Self {
            open,
            high,
            low,
            close,
            volume: Vec::new(),
        }
    }

    /// Attaches a volume series.
    #[must_use]
    pub fn with_volume(mut self, volume: Vec<T>) -> Self {
        self.volume = volume;
        self
    }

    /// Number of bars, taken from the close series.
    #[must_use]
    pub fn len(&self) -> usize {
        self.close.len()
    }

    /// Returns `true` if there are no bars.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.close.is_empty()
    }
}

/// Fans indicator computations out over a batch of series.
#[derive(Debug, Clone)]
pub struct BatchProcessor {
    min_parallel_threshold: usize,
}

impl Default for BatchProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl BatchProcessor {
    /// Creates a processor with [`DEFAULT_PARALLEL_THRESHOLD`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            min_parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }

    /// Sets the minimum batch size for parallel dispatch.
    ///
    /// Has no effect unless the `parallel` feature is enabled.
    #[must_use]
    pub const fn min_parallel_threshold(mut self, threshold: usize) -> Self {
        self.min_parallel_threshold = threshold;
        self
    }

    /// Returns `true` if a batch of `count` items would run in parallel.
    #[must_use]
    pub const fn is_parallel(&self, count: usize) -> bool {
        cfg!(feature = "parallel") && count >= self.min_parallel_threshold
    }

    /// Applies `indicator_fn` to every single-input series.
    ///
    /// Accepts owned vectors or borrowed slices alike.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `indicator_fn`.
    pub fn process<T, S, F, R>(&self, series: &[S], indicator_fn: F) -> Result<Vec<R>>
    where
        T: SeriesElement,
        S: AsRef<[T]> + Sync,
        F: Fn(&[T]) -> Result<R> + Send + Sync,
        R: Send,
    {
        self.dispatch(series, |s| indicator_fn(s.as_ref()))
    }

    /// Applies `indicator_fn` to every symbol's bars.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `indicator_fn`.
    pub fn process_bars<T, F, R>(&self, bars: &[OhlcSeries<T>], indicator_fn: F) -> Result<Vec<R>>
    where
        T: SeriesElement,
        F: Fn(&OhlcSeries<T>) -> Result<R> + Send + Sync,
        R: Send,
    {
        self.dispatch(bars, indicator_fn)
    }

    fn dispatch<I, F, R>(&self, items: &[I], f: F) -> Result<Vec<R>>
    where
        I: Sync,
        F: Fn(&I) -> Result<R> + Send + Sync,
        R: Send,
    {
        log::trace!(
            "batch of {} items, parallel: {}",
            items.len(),
            self.is_parallel(items.len())
        );
        #[cfg(feature = "parallel")]
        {
            if self.is_parallel(items.len()) {
                return items.par_iter().map(&f).collect();
            }
        }
        items.iter().map(f).collect()
    }
}

/// Shorthand for [`BatchProcessor::process`] with default settings.
///
/// # Errors
///
/// Returns the first error produced by `indicator_fn`.
pub fn process_batch<T, S, F, R>(series: &[S], indicator_fn: F) -> Result<Vec<R>>
where
    T: SeriesElement,
    S: AsRef<[T]> + Sync,
    F: Fn(&[T]) -> Result<R> + Send + Sync,
    R: Send,
{
    BatchProcessor::new().process(series, indicator_fn)
}

/// Shorthand for [`BatchProcessor::process_bars`] with default settings.
///
/// # Example
///
/// ```
/// use tacalc::batch::{process_ohlc_batch, OhlcSeries};
/// use tacalc::indicators::atr;
///
/// let symbols = vec![
///     OhlcSeries::new(
///         vec![9.5_f64, 10.5, 11.5],
///         vec![10.0, 11.0, 12.0],
///         vec![9.0, 10.0, 11.0],
///         vec![9.5, 10.5, 11.5],
///     ),
///     OhlcSeries::new(
///         vec![19.5_f64, 20.5, 21.5],
///         vec![20.0, 21.0, 22.0],
///         vec![19.0, 20.0, 21.0],
///         vec![19.5, 20.5, 21.5],
///     ),
/// ];
///
/// let results = process_ohlc_batch(&symbols, |b| atr(&b.high, &b.low, &b.close, 2)).unwrap();
/// assert_eq!(results.len(), 2);
/// ```
///
/// # Errors
///
/// Returns the first error produced by `indicator_fn`.
pub fn process_ohlc_batch<T, F, R>(bars: &[OhlcSeries<T>], indicator_fn: F) -> Result<Vec<R>>
where
    T: SeriesElement,
    F: Fn(&OhlcSeries<T>) -> Result<R> + Send + Sync,
    R: Send,
{
    BatchProcessor::new().process_bars(bars, indicator_fn)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::candlestick::cdl_engulfing;
    use crate::indicators::sma;

    #[test]
    fn test_batch_processor_sequential() {
        let series = vec![
            vec![1.0_f64, 2.0, 3.0, 4.0, 5.0],
            vec![5.0, 4.0, 3.0, 2.0, 1.0],
            vec![2.0, 4.0, 6.0, 8.0, 10.0],
        ];

        let processor = BatchProcessor::new().min_parallel_threshold(100);
        assert!(!processor.is_parallel(series.len()));
        let results = processor.process(&series, |s| sma(s, 3)).unwrap();

        assert_eq!(results.len(), 3);
        assert!(results.iter().all(|r| r.len() == 5));
        assert!((results[0][2] - 2.0).abs() < 1e-10);
        assert!((results[1][2] - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_process_accepts_slices() {
        let s1 = [1.0_f64, 2.0, 3.0, 4.0, 5.0];
        let s2 = [5.0_f64, 4.0, 3.0, 2.0, 1.0];
        let series: Vec<&[f64]> = vec![&s1, &s2];

        let results = process_batch(&series, |s| sma(s, 3)).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(&results[0][2..], &[2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_batch_error_propagation() {
        let series = vec![vec![1.0_f64, 2.0], vec![1.0, 2.0, 3.0, 4.0, 5.0]];

        let err = process_batch(&series, |s| sma(s, 0)).unwrap_err();
        assert!(err.is_usage());
        // Short series are not errors, they are all-NaN.
        let results = process_batch(&series, |s| sma(s, 3)).unwrap();
        assert!(results[0].iter().all(|v| v.is_nan()));
    }

    #[test]
    fn test_process_bars_candles() {
        let bars = OhlcSeries::new(
            vec![10.0_f64, 10.0, 8.5],
            vec![10.3, 10.2, 10.6],
            vec![9.8, 8.9, 8.4],
            vec![10.1, 9.0, 10.5],
        );
        assert_eq!(bars.len(), 3);
        let results = process_ohlc_batch(&[bars.clone(), bars], |b| {
            cdl_engulfing(&b.open, &b.high, &b.low, &b.close)
        })
        .unwrap();
        assert_eq!(results, vec![vec![0, 0, 100], vec![0, 0, 100]]);
    }

    #[test]
    fn test_with_volume() {
        let bars = OhlcSeries::new(vec![1.0_f32], vec![1.0], vec![1.0], vec![1.0])
            .with_volume(vec![10.0]);
        assert_eq!(bars.volume, vec![10.0]);
        assert!(!bars.is_empty());
        assert!(OhlcSeries::<f64>::default().is_empty());
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_batch_processor_parallel() {
        let series: Vec<Vec<f64>> = (0..100)
            .map(|i| (0..10).map(|j| f64::from(i * 10 + j)).collect())
            .collect();

        let processor = BatchProcessor::new().min_parallel_threshold(10);
        assert!(processor.is_parallel(series.len()));
        let results = processor.process(&series, |s| sma(s, 3)).unwrap();

        assert_eq!(results.len(), 100);
        for (i, result) in results.iter().enumerate() {
            assert_eq!(result.len(), 10);
            assert!((result[2] - f64::from(i as u32 * 10 + 1)).abs() < 1e-10);
        }
    }
}
