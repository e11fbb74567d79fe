//! Suggested Questions - Model (API functions)

use contracts::ui::suggested_questions::{SuggestedQuestionsRequest, SuggestedQuestionsResponse};
use gloo_net::http::Request;

/// Fetch follow-up suggestions for the latest question/answer pair.
pub async fn fetch_suggested_questions(
    endpoint: &str,
    latest_question: &str,
    assistant_answer: &str,
) -> Result<Vec<String>, String> {
    let request = SuggestedQuestionsRequest {
        latest_question: latest_question.to_string(),
        assistant_answer: assistant_answer.to_string(),
    };

    let response = Request::post(&format!("{}/ui/suggestedQuestions", endpoint))
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let text = response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))?;

    parse_suggested_questions(&text)
}

/// Extract the suggestion list from a response body.
///
/// An absent or null `suggested_questions` field is a valid empty answer,
/// not an error.
pub fn parse_suggested_questions(body: &str) -> Result<Vec<String>, String> {
    let data: SuggestedQuestionsResponse =
        serde_json::from_str(body).map_err(|e| format!("Failed to parse response: {}", e))?;
    Ok(data.into_questions())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_questions_in_server_order() {
        let body = r#"{"suggested_questions": ["Why is Y true?", "How does X relate to Z?"]}"#;
        assert_eq!(
            parse_suggested_questions(body).unwrap(),
            vec![
                "Why is Y true?".to_string(),
                "How does X relate to Z?".to_string()
            ]
        );
    }

    #[test]
    fn missing_field_yields_empty_list() {
        assert!(parse_suggested_questions("{}").unwrap().is_empty());
    }

    #[test]
    fn null_field_yields_empty_list() {
        assert!(parse_suggested_questions(r#"{"suggested_questions": null}"#)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn malformed_body_is_an_error() {
        let err = parse_suggested_questions("not json").unwrap_err();
        assert!(err.starts_with("Failed to parse response"));
    }
}
