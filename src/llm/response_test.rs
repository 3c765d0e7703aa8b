#[cfg(test)]
mod tests {
    use crate::llm::types::CompletionResponse;

    #[test]
    fn test_parse_openai_response() {
        let json_response = r#"{
            "id": "chatcmpl-8xYZ123",
            "object": "chat.completion",
            "created": 1677652288,
            "model": "gpt-4-turbo",
            "choices": [
                {
                    "index": 0,
                    "message": {
                        "role": "assistant",
                        "content": "from crewai import Agent, Task, Crew"
                    },
                    "finish_reason": "stop"
                }
            ],
            "usage": {
                "prompt_tokens": 150,
                "completion_tokens": 45,
                "total_tokens": 195
            }
        }"#;

        let response: CompletionResponse = serde_json::from_str(json_response).unwrap();
        assert_eq!(response.choices.len(), 1);
        assert!(response.choices[0].message.content.contains("crewai"));
    }

    #[test]
    fn test_parse_empty_choices() {
        let json_response = r#"{"choices": []}"#;
        let response: CompletionResponse = serde_json::from_str(json_response).unwrap();
        assert!(response.choices.is_empty());
    }
}
