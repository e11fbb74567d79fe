//! Suggested Questions - View Model

use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct SuggestedQuestionsVm {
    pub questions: RwSignal<Vec<String>>,
    pub is_loading: RwSignal<bool>,
    request_seq: RwSignal<u64>,
}

impl SuggestedQuestionsVm {
    pub fn new() -> Self {
        Self {
            questions: RwSignal::new(Vec::new()),
            is_loading: RwSignal::new(false),
            request_seq: RwSignal::new(0),
        }
    }

    /// Start a new request: bump the sequence so completions of older
    /// requests are recognized as stale, and raise the loading flag.
    pub fn begin_request(&self) -> u64 {
        let seq = self.request_seq.get_untracked() + 1;
        self.request_seq.set(seq);
        self.is_loading.set(true);
        seq
    }

    /// Apply a settled request.
    ///
    /// Only the latest issued sequence may write; anything older is a stale
    /// completion and is dropped, as is a completion that lands after the
    /// owning scope was disposed (`try_*` writes). Failures are logged and
    /// leave an empty list.
    pub fn finish_request(&self, seq: u64, result: Result<Vec<String>, String>) {
        if self.request_seq.try_get_untracked() != Some(seq) {
            return;
        }

        match result {
            Ok(questions) => {
                self.questions.try_set(questions);
            }
            Err(err) => {
                log::error!("Failed to load suggested questions: {}", err);
                self.questions.try_set(Vec::new());
            }
        }
        self.is_loading.try_set(false);
    }
}
