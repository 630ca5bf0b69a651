#![forbid(unsafe_code)]

//! Rule-based conversational intent matching.
//!
//! The site's assistant widget is not a language model: it lower-cases the
//! visitor's message, scans an ordered list of keyword sets, and answers
//! with the first matching category. Numeric input short-circuits keyword
//! lookup into a small deterministic tax estimate. The matcher is stateless
//! between calls; response *copy* is the host's concern, and this crate only
//! returns typed [`matcher::Reply`] values.

pub mod matcher;
pub mod tax;

pub use matcher::{Intent, IntentMatcher, Reply, Rule};
pub use tax::{TaxBreakdown, TaxRates};
