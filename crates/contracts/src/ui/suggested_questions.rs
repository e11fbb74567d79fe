use serde::{Deserialize, Serialize};

/// Request body for `POST /ui/suggestedQuestions`.
///
/// The proxy expects camelCase field names on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestedQuestionsRequest {
    /// Latest user question of the exchange
    #[serde(rename = "latestQuestion")]
    pub latest_question: String,

    /// Assistant answer the suggestions should follow up on
    #[serde(rename = "assistantAnswer")]
    pub assistant_answer: String,
}

/// Response body of the suggestion endpoint.
///
/// The field may be absent or null when the service has nothing to offer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestedQuestionsResponse {
    #[serde(default)]
    pub suggested_questions: Option<Vec<String>>,
}

impl SuggestedQuestionsResponse {
    /// Suggestions in server order; absent or null collapses to empty.
    pub fn into_questions(self) -> Vec<String> {
        self.suggested_questions.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_uses_camel_case_wire_names() {
        let request = SuggestedQuestionsRequest {
            latest_question: "What is X?".to_string(),
            assistant_answer: "X is Y.".to_string(),
        };
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(
            json,
            r#"{"latestQuestion":"What is X?","assistantAnswer":"X is Y."}"#
        );
    }

    #[test]
    fn response_preserves_server_order() {
        let body = r#"{"suggested_questions": ["Why is Y true?", "How does X relate to Z?"]}"#;
        let response: SuggestedQuestionsResponse = serde_json::from_str(body).unwrap();
        assert_eq!(
            response.into_questions(),
            vec![
                "Why is Y true?".to_string(),
                "How does X relate to Z?".to_string()
            ]
        );
    }

    #[test]
    fn missing_field_collapses_to_empty() {
        let response: SuggestedQuestionsResponse = serde_json::from_str("{}").unwrap();
        assert!(response.into_questions().is_empty());
    }

    #[test]
    fn null_field_collapses_to_empty() {
        let response: SuggestedQuestionsResponse =
            serde_json::from_str(r#"{"suggested_questions": null}"#).unwrap();
        assert!(response.into_questions().is_empty());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let body = r#"{"suggested_questions": ["A"], "model": "gpt", "latency_ms": 120}"#;
        let response: SuggestedQuestionsResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.into_questions(), vec!["A".to_string()]);
    }
}
