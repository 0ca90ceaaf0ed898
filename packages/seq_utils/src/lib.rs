#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Small extension traits for iterators and sequences.
//!
//! ```
//! use seq_utils::Unanimous;
//!
//! assert!([3, 3, 3].unanimous());
//! assert!(!vec!["a", "b"].unanimous());
//! assert!(["Yes", "YES"].unanimous_by(|a, b| a.eq_ignore_ascii_case(b)));
//! ```

mod unanimous;

pub use unanimous::*;
