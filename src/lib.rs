//! Vigorish - American odds conversion and parlay fair-line calculation.
//!
//! This crate prices a parlay from its individual legs: it combines the legs
//! into the American line the book should offer, then computes the "fair"
//! line that keeps the house's proportional take on the whole parlay equal
//! to the take embedded in each leg. Books that quote a parlay below the
//! fair line are compounding their margin across the legs.
//!
//! # Modules
//!
//! - [`cli`] - Command-line definitions and the pricing handler
//! - [`domain`] - Pure odds math: line conversions and parlay pricing
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```
//! use vigorish::domain::ParlayQuote;
//!
//! // Two standard -110 legs with a 10% house take on each.
//! let quote = ParlayQuote::try_new(&[-110.0, -110.0], None, 0.1).unwrap();
//!
//! assert_eq!(quote.total.round(), 264.0);
//! assert_eq!(quote.fair.round(), 274.0);
//! ```

pub mod cli;
pub mod domain;
pub mod error;
