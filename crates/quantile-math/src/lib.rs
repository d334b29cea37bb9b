//! # Quantile Math
//!
//! Statistics primitives for the Quantile portfolio risk analytics library.
//!
//! This crate provides:
//!
//! - **Moments**: mean, sample variance/std, bias-corrected skewness and
//!   excess kurtosis
//! - **Quantiles**: linear-interpolation percentile, standard-normal
//!   quantile
//! - **Matrices**: sample covariance and Pearson correlation over column
//!   variables
//!
//! ## Design Philosophy
//!
//! - **Explicit undefinedness**: quantities that need a minimum sample size
//!   return `Option`/`MathError` instead of NaN; the engine maps these to
//!   its documented fallbacks
//! - **Fixed conventions**: estimators follow the NumPy/pandas ddof = 1 /
//!   bias-corrected conventions so the dashboard's numbers stay stable
//!   across stack changes

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::similar_names)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod statistics;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::statistics::{
        correlation_matrix, covariance_matrix, excess_kurtosis, mean, normal_quantile, percentile,
        sample_std, sample_variance, skewness,
    };
}

pub use error::{MathError, MathResult};
