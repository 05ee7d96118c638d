//! Mean, median, and mode with textbook derivations.
//!
//! This crate computes the three measures of central tendency for two kinds
//! of data and records every intermediate quantity a student would write down:
//!
//! - **Grouped data**: class intervals with frequencies. The mean by the
//!   direct, assumed-mean, and step-deviation methods, the interpolated median
//!   and the grouped mode formula.
//! - **Individual data**: raw observations. The mean `Σx / n`, the
//!   order-statistic median and the modal values by frequency count.
//!
//! Results carry their derivation steps as numbers; rounding and formatting
//! are left to the caller.
//!
//! # Modules
//!
//! - [`interval`]: Parsing of `lower-upper` and bare-value class interval tokens
//! - [`input`]: Splitting comma-separated text into tokens, frequencies, and values
//! - [`distribution`]: Frequency distributions with class width auto-detection
//! - [`individual`]: Sorted individual observations
//! - [`counts`]: Distinct values with occurrence counts, for order statistics and modes
//! - [`mean`], [`median`], [`mode`]: The algorithms of each measure
//! - [`dataset`]: Dispatch over grouped and individual data, with fallbacks
//! - [`descriptive`]: Count, sum, and range of observations
//! - [`summary`]: All three measures at once
//! - [`result`]: Result values, derivation steps, and diagnostics
//!
//! # Examples
//!
//! ## Grouped data
//!
//! ```
//! use tendency_stats::{dataset::Dataset, distribution::Distribution, mean::MeanMethod};
//!
//! let dist = Distribution::parse("0-10, 10-20, 20-30, 30-40, 40-50", "5, 8, 12, 7, 3").unwrap();
//! assert_eq!(dist.class_width(), 10.0);
//!
//! let data = Dataset::from(dist);
//! let mean = data.mean(MeanMethod::StepDeviation { assumed: None }).unwrap();
//! assert!((mean.value.as_single().unwrap() - 825.0 / 35.0).abs() < 1e-12);
//! assert_eq!(data.median().unwrap().value.as_single(), Some(23.75));
//! ```
//!
//! ## Individual data
//!
//! ```
//! use tendency_stats::{dataset::Dataset, individual::IndividualDataset};
//!
//! let data = IndividualDataset::parse("12, 15, 18, 22, 25, 25, 28, 30, 32, 35, 35, 35, 40, 42, 45")
//!     .unwrap();
//! let data = Dataset::from(data);
//! assert_eq!(data.median().unwrap().value.as_single(), Some(30.0));
//! assert_eq!(data.mode().unwrap().value.values(), [35.0]);
//! ```

pub use self::error::{Computation, ParseError, ShapeError, StatsError};

pub mod counts;
pub mod dataset;
pub mod descriptive;
pub mod distribution;
mod error;
pub mod individual;
pub mod input;
pub mod interval;
pub mod mean;
pub mod median;
pub mod mode;
pub mod result;
pub mod summary;
