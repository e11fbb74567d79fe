//! Suggested Questions UI Module (MVVM Standard)
//!
//! Structure:
//! - model.rs: API functions for the suggestion endpoint
//! - view_model.rs: SuggestedQuestionsVm with RwSignals
//! - view.rs: Main component SuggestedQuestions

mod model;
mod view;
mod view_model;

pub use view::SuggestedQuestions;
pub use view_model::SuggestedQuestionsVm;
