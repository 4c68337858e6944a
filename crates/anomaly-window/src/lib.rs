//! Rolling window statistics
//!
//! A bounded FIFO of the most recent stream values with population mean and
//! standard deviation recomputed on demand.
//!
//! ```rust
//! use anomaly_window::RollingWindow;
//!
//! let mut window = RollingWindow::new(3).unwrap();
//! for value in [1.0, 2.0, 3.0, 4.0] {
//!     window.push(value);
//! }
//!
//! let (mean, _stddev) = window.mean_and_stddev();
//! assert_eq!(window.len(), 3);
//! assert_eq!(mean, 3.0);
//! ```

pub mod rolling;

pub use rolling::{RollingWindow, WindowStats};
