use crate::shared::api_utils::SuggestionsConfig;
use crate::suggestions::SuggestedQuestions;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the suggestion endpoint to the whole app via context.
    provide_context(SuggestionsConfig::default());

    let latest_question = RwSignal::new(String::new());
    let assistant_answer = RwSignal::new(String::new());

    // Picking a suggestion becomes the next question of the exchange; the
    // surrounding chat UI owns these signals in a full deployment.
    let on_select_question = Callback::new(move |question: String| {
        latest_question.set(question);
        assistant_answer.set(String::new());
    });

    view! {
        <SuggestedQuestions
            on_select_question=on_select_question
            latest_question=latest_question
            assistant_answer=assistant_answer
        />
    }
}
