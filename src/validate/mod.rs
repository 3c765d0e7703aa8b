use tracing::debug;

use crate::framework::{profile, Framework};

/// Structural acceptance rules for a framework, evaluated against a
/// normalized copy of the generated code. Substring containment only,
/// not a parse; a real parser could replace this without touching callers.
pub enum StructuralRules {
    /// Every token must appear somewhere in the normalized code
    AllOf { tokens: &'static [&'static str] },
    /// At least one import marker and at least one construction marker
    ImportAndConstruct {
        imports: &'static [&'static str],
        constructs: &'static [&'static str],
    },
}

impl StructuralRules {
    fn matches(&self, normalized: &str) -> bool {
        match self {
            StructuralRules::AllOf { tokens } => {
                tokens.iter().all(|token| normalized.contains(token))
            }
            StructuralRules::ImportAndConstruct {
                imports,
                constructs,
            } => {
                imports.iter().any(|token| normalized.contains(token))
                    && constructs.iter().any(|token| normalized.contains(token))
            }
        }
    }
}

/// Strip all whitespace and lowercase, so rule tokens match regardless of
/// the model's formatting choices
fn normalize(code: &str) -> String {
    code.chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase()
}

/// Check the sanitized code against the framework's structural rules.
/// Pure and deterministic; a failed check is a `false`, never an error.
pub fn validate(framework: Framework, code: &str) -> bool {
    let normalized = normalize(code);
    let passed = profile(framework).rules.matches(&normalized);
    debug!(
        framework = %framework,
        passed,
        code_len = code.len(),
        "structural validation"
    );
    passed
}

/// Validate against a framework given by name. Unknown names fail the
/// check instead of erroring, mirroring the closed-set contract.
pub fn validate_named(framework: &str, code: &str) -> bool {
    match framework.parse::<Framework>() {
        Ok(framework) => validate(framework, code),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CREWAI_SNIPPET: &str = r#"
from crewai import Agent, Task, Crew

researcher = Agent(role="Researcher", goal="Dig up facts")
write_up = Task(description="Summarize findings", agent=researcher)
crew = Crew(agents=[researcher], tasks=[write_up])
"#;

    const LANGGRAPH_SNIPPET: &str = r#"
from langgraph.graph import StateGraph

class AgentState(dict):
    pass

workflow = StateGraph(AgentState)
workflow.set_entry_point("start")
"#;

    const AUTOGEN_SNIPPET: &str = r#"
import autogen

user_proxy = autogen.UserProxyAgent(name="user")
assistant = autogen.AssistantAgent(name="helper")
"#;

    #[test]
    fn test_crewai_accepts_tokens_in_any_order() {
        // Order-independent: tokens scattered across unrelated text still pass
        let scrambled = "crew = Crew()\n# Task( placeholder\nAgent(\nuses CrewAI";
        assert!(validate(Framework::CrewAI, CREWAI_SNIPPET));
        assert!(validate(Framework::CrewAI, scrambled));
    }

    #[test]
    fn test_crewai_rejects_missing_token() {
        assert!(!validate(Framework::CrewAI, "from crewai import Agent\nagent = Agent()"));
    }

    #[test]
    fn test_langgraph_accepts_both_construction_forms() {
        assert!(validate(Framework::LangGraph, LANGGRAPH_SNIPPET));

        let assignment_form = "import langgraph\nworkflow = StateGraph";
        assert!(validate(Framework::LangGraph, assignment_form));
    }

    #[test]
    fn test_langgraph_rejects_autogen_code() {
        assert!(!validate(Framework::LangGraph, "import autogen"));
    }

    #[test]
    fn test_langgraph_requires_construction() {
        // Import alone is not enough
        assert!(!validate(Framework::LangGraph, "from langgraph.graph import StateGraph"));
    }

    #[test]
    fn test_autogen_accepts_agent_or_manager() {
        assert!(validate(Framework::AutoGen, AUTOGEN_SNIPPET));

        let manager_only = "import autogen\nmanager = autogen.GroupChatManager()";
        assert!(validate(Framework::AutoGen, manager_only));
    }

    #[test]
    fn test_autogen_requires_import() {
        assert!(!validate(Framework::AutoGen, "agent = UserProxyAgent()"));
    }

    #[test]
    fn test_validation_is_deterministic() {
        for _ in 0..3 {
            assert!(validate(Framework::CrewAI, CREWAI_SNIPPET));
            assert!(!validate(Framework::CrewAI, ""));
        }
    }

    #[test]
    fn test_normalization_ignores_spacing_and_case() {
        let spaced = "FROM   langgraph.graph   IMPORT StateGraph\nWF = STATEGRAPH ( state )";
        assert!(validate(Framework::LangGraph, spaced));
    }

    #[test]
    fn test_unknown_framework_name_fails_closed() {
        assert!(!validate_named("smolagents", CREWAI_SNIPPET));
        assert!(!validate_named("", CREWAI_SNIPPET));
    }

    #[test]
    fn test_named_lookup_matches_enum_path() {
        assert!(validate_named("crewai", CREWAI_SNIPPET));
        assert!(validate_named("CrewAI", CREWAI_SNIPPET));
    }

    #[test]
    fn test_placeholder_text_fails_all_frameworks() {
        let placeholder = "Anthropic integration not yet implemented";
        for framework in Framework::ALL {
            assert!(!validate(framework, placeholder));
        }
    }
}
