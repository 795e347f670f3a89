//! Fuzzy matching and classification engine for program reconciliation.
//!
//! Pipeline: raw rows are deduplicated into distinct input values with
//! occurrence counts ([`counts`]), each distinct value is scored against the
//! canonical catalog ([`score`], [`engine`]), the result is bucketed by the
//! fixed confidence thresholds ([`engine::classify`]), and the decisions are
//! held in an insertion-ordered store ([`store`]) that supports manual
//! override. [`session::MappingSession`] ties the pieces together for one
//! reconciliation session.

pub mod counts;
pub mod engine;
pub mod error;
pub mod normalize;
pub mod score;
pub mod session;
pub mod store;

pub use counts::{OccurrenceCounts, count_occurrences};
pub use engine::{CONFIDENT_MIN, REVIEW_MIN, classify, find_best_match};
pub use error::MapError;
pub use normalize::normalize;
pub use score::similarity;
pub use session::{MappingRow, MappingSession};
pub use store::MappingStore;
