//! Statistical helpers for the Oxivey survey-analysis project.
//!
//! This crate provides the small set of numeric tools the analysis layer is
//! built on:
//!
//! - **Histograms**: Count values into caller-supplied inclusive bin ranges
//! - **Descriptive statistics**: Arithmetic mean over possibly-empty data
//! - **Decimal rounding**: Round to a fixed number of decimals with ties to even
//!
//! # Modules
//!
//! - [`histogram`]: Histogram construction over explicit bin ranges
//! - [`descriptive`]: Mean and decimal-rounding helpers
//!
//! # Examples
//!
//! ## Counting values into bins
//!
//! ```
//! use oxivey_stats::histogram::Histogram;
//!
//! let bins = vec![0.0..=9.0, 10.0..=19.0];
//! let histogram = Histogram::from_ranges(bins, [4.0, 11.0, 17.0]);
//! assert_eq!(histogram.bins[0].count, 1);
//! assert_eq!(histogram.bins[1].count, 2);
//! ```
//!
//! ## Computing a mean
//!
//! ```
//! use oxivey_stats::descriptive::mean;
//!
//! assert_eq!(mean([2.0, 4.0, 6.0, 8.0]), Some(5.0));
//!
//! let unanswered: Vec<f64> = Vec::new();
//! assert_eq!(mean(unanswered), None);
//! ```

pub mod descriptive;
pub mod histogram;
