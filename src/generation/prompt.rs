use crate::framework::{profile, Framework};
use crate::llm::Message;

/// Build the system/user message pair for an agent-generation request.
/// Deterministic: identical inputs produce byte-identical messages. An empty
/// task description passes through untouched.
pub fn build_messages(framework: Framework, task_description: &str) -> Vec<Message> {
    let profile = profile(framework);

    let user_turn = format!(
        "Create a {} agent for: {}\n\nMake sure to include: {}",
        framework, task_description, profile.hint
    );

    vec![Message::system(profile.system_prompt), Message::user(user_turn)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::Role;

    #[test]
    fn test_message_pair_shape() {
        let messages = build_messages(Framework::CrewAI, "build a support triage agent");
        assert_eq!(messages.len(), 2);
        assert!(matches!(messages[0].role, Role::System));
        assert!(matches!(messages[1].role, Role::User));
    }

    #[test]
    fn test_user_turn_interpolation() {
        let messages = build_messages(Framework::LangGraph, "route refund requests");
        let user = &messages[1].content;
        assert!(user.contains("Create a LangGraph agent for: route refund requests"));
        assert!(user.contains("Make sure to include: Use from langgraph.graph import StateGraph"));
    }

    #[test]
    fn test_system_turn_is_framework_prompt() {
        let messages = build_messages(Framework::AutoGen, "anything");
        assert!(messages[0].content.contains("import autogen"));
        assert!(messages[0].content.contains("Return ONLY the Python code"));
    }

    #[test]
    fn test_deterministic() {
        let a = build_messages(Framework::CrewAI, "same task");
        let b = build_messages(Framework::CrewAI, "same task");
        assert_eq!(a[0].content, b[0].content);
        assert_eq!(a[1].content, b[1].content);
    }

    #[test]
    fn test_empty_task_passes_through() {
        let messages = build_messages(Framework::CrewAI, "");
        assert!(messages[1].content.contains("Create a CrewAI agent for: \n"));
    }
}
