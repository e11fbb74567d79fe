//! Suggested Questions - View Component

use super::model::fetch_suggested_questions;
use super::view_model::SuggestedQuestionsVm;
use crate::shared::api_utils::suggestion_endpoint;
use crate::shared::viewport::{is_compact, use_window_width};
use leptos::prelude::*;
use thaw::*;

/// Panel of clickable follow-up questions for the latest exchange.
///
/// Issues one request to the suggestion endpoint on mount and whenever the
/// question/answer pair changes. Failures render as an empty list: the
/// suggestions are a non-critical enhancement and never surface errors to
/// the user.
#[component]
#[allow(non_snake_case)]
pub fn SuggestedQuestions(
    /// Invoked with the literal text of a suggestion when the user clicks it
    on_select_question: Callback<String>,
    /// Latest user question of the exchange
    #[prop(into)]
    latest_question: Signal<String>,
    /// Assistant answer the suggestions should follow up on
    #[prop(into)]
    assistant_answer: Signal<String>,
) -> impl IntoView {
    let vm = SuggestedQuestionsVm::new();
    let endpoint = suggestion_endpoint();
    let width = use_window_width();

    // Fetch on mount and on every change of the question/answer pair.
    Effect::new(move |_| {
        let latest_question = latest_question.get();
        let assistant_answer = assistant_answer.get();
        let endpoint = endpoint.clone();
        let seq = vm.begin_request();

        wasm_bindgen_futures::spawn_local(async move {
            let result =
                fetch_suggested_questions(&endpoint, &latest_question, &assistant_answer).await;
            vm.finish_request(seq, result);
        });
    });

    view! {
        <div
            class="suggested-questions"
            style=move || {
                if is_compact(width.get()) {
                    "padding: 16px; border-radius: 8px; background: var(--colorNeutralBackground1); max-width: 100%;"
                } else {
                    "padding: 16px; border-radius: 8px; background: var(--colorNeutralBackground1); max-width: 90%;"
                }
            }
        >
            <h3 style="font-weight: bold; margin: 0 0 8px 0;">"Suggested Questions:"</h3>
            {move || {
                if vm.is_loading.get() {
                    view! {
                        <Flex justify=FlexJustify::Center align=FlexAlign::Center>
                            <Spinner />
                        </Flex>
                    }
                        .into_any()
                } else {
                    view! {
                        <ul style="list-style: none; display: flex; flex-direction: column; gap: 8px; margin: 0; padding: 0;">
                            <For
                                each=move || vm.questions.get().into_iter().enumerate()
                                key=|(index, _)| *index
                                let:entry
                            >
                                {{
                                    let (_, question) = entry;
                                    let label = question.clone();
                                    view! {
                                        <li
                                            style="background: var(--colorNeutralBackground2); padding: 8px 12px; border-radius: 6px; cursor: pointer; overflow-wrap: break-word;"
                                            on:click=move |_| on_select_question.run(question.clone())
                                        >
                                            {label}
                                        </li>
                                    }
                                }}
                            </For>
                        </ul>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
