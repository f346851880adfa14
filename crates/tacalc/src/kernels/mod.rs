//! Sliding-window kernels shared by the indicator families.
//!
//! - [`rolling_extrema`]: monotonic deque for O(n) rolling max/min positions
//! - [`rolling_sum`]: sliding window sums and sums of squares

pub mod rolling_extrema;
pub mod rolling_sum;

pub use rolling_extrema::{rolling_extrema_positions, Extremum, MonotonicDeque};
pub use rolling_sum::{linear_window_sums, window_sums, SlidingSums, WindowMoments};
