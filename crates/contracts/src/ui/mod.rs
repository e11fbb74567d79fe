//! Contracts for UI-helper endpoints.
//!
//! These endpoints serve presentation concerns of the chat frontend rather
//! than a domain aggregate, hence their own module.

pub mod suggested_questions;

pub use suggested_questions::{SuggestedQuestionsRequest, SuggestedQuestionsResponse};
