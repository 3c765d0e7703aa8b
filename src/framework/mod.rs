use std::fmt;
use std::str::FromStr;

use crate::validate::StructuralRules;

/// Agent frameworks the generator can target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Framework {
    LangGraph,
    CrewAI,
    AutoGen,
}

impl Framework {
    /// All supported frameworks, in display order
    pub const ALL: [Framework; 3] = [Framework::LangGraph, Framework::CrewAI, Framework::AutoGen];

    /// File name for the downloadable source artifact
    pub fn artifact_file_name(&self) -> String {
        format!("{}_system.py", self.to_string().to_lowercase())
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Framework::LangGraph => write!(f, "LangGraph"),
            Framework::CrewAI => write!(f, "CrewAI"),
            Framework::AutoGen => write!(f, "AutoGen"),
        }
    }
}

impl FromStr for Framework {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "langgraph" => Ok(Framework::LangGraph),
            "crewai" => Ok(Framework::CrewAI),
            "autogen" | "pyautogen" => Ok(Framework::AutoGen),
            other => Err(format!("Unknown framework: {}", other)),
        }
    }
}

/// Quick-start template shipped with a framework profile
#[derive(Debug, Clone, Copy)]
pub struct Template {
    pub name: &'static str,
    pub description: &'static str,
}

/// Static, read-only description of one target framework: the system prompt,
/// the user-turn hint, the structural acceptance rules and the pip packages.
pub struct FrameworkProfile {
    pub framework: Framework,
    pub system_prompt: &'static str,
    pub hint: &'static str,
    pub rules: StructuralRules,
    pub package: &'static str,
    pub info: &'static str,
    pub templates: &'static [Template],
}

/// Packages appended to every dependency list
const AUX_PACKAGES: &[&str] = &["python-dotenv", "google-generativeai"];

impl FrameworkProfile {
    /// Ordered package list: the framework package followed by the fixed
    /// auxiliary packages
    pub fn dependencies(&self) -> Vec<&'static str> {
        let mut packages = vec![self.package];
        packages.extend_from_slice(AUX_PACKAGES);
        packages
    }

    /// One-line, shell-style requirements manifest
    pub fn requirements(&self) -> String {
        let mut line = self.dependencies().join(" ");
        line.push('\n');
        line
    }
}

static LANGGRAPH: FrameworkProfile = FrameworkProfile {
    framework: Framework::LangGraph,
    system_prompt: r#"Generate a LangGraph agent system that:
1. Defines clear state machines with nodes/edges
2. Includes error handling and state management
3. Uses appropriate LangGraph primitives
4. Has well-defined entry points and transitions

IMPORTANT: Your code MUST include these exact imports and class usage:
- from langgraph.graph import StateGraph
- workflow = StateGraph(AgentState)  # NOT StateGraph({...}) - use proper class definition

CRITICAL: Define a proper state class as follows:
```python
class AgentState(dict):
    # This is a proper state class
    def __init__(self, input=None, outputs=None):
        self.input = input
        self.outputs = outputs or []
```

Return ONLY executable Python code with no explanations."#,
    hint: "Use from langgraph.graph import StateGraph and define a workflow = StateGraph(...)",
    rules: StructuralRules::ImportAndConstruct {
        imports: &["fromlanggraph.graphimport", "importlanggraph"],
        constructs: &["stategraph(", "=stategraph"],
    },
    package: "langgraph",
    info: "Best for stateful workflows and complex decision trees",
    templates: &[
        Template {
            name: "Customer Support",
            description: "Create a customer support workflow with initial triage and escalation",
        },
        Template {
            name: "Document Processing",
            description: "Build a document processing pipeline with validation and approval stages",
        },
    ],
};

static CREWAI: FrameworkProfile = FrameworkProfile {
    framework: Framework::CrewAI,
    system_prompt: r#"Create a CrewAI agent setup that:
1. Defines clear roles and goals
2. Sets up proper task delegation
3. Includes collaboration mechanisms
4. Uses CrewAI best practices

IMPORTANT: Your code MUST include these exact imports and class usage:
- from crewai import Agent, Task, Crew
- agent = Agent(...)
- task = Task(...)

Return ONLY valid Python code with crewai imports."#,
    hint: "Use from crewai import Agent, Task, Crew and create instances of each",
    rules: StructuralRules::AllOf {
        tokens: &["crewai", "agent", "task", "crew"],
    },
    package: "crewai",
    info: "Ideal for collaborative agent teams with specialized roles",
    templates: &[
        Template {
            name: "Research Team",
            description: "Set up a research team with analyst and writer roles",
        },
        Template {
            name: "Marketing Crew",
            description: "Create a marketing team for content creation and social media",
        },
    ],
};

static AUTOGEN: FrameworkProfile = FrameworkProfile {
    framework: Framework::AutoGen,
    system_prompt: r#"Develop an AutoGen conversational agent system that:
1. Configures multiple agents with distinct roles
2. Sets up proper chat workflows
3. Includes termination conditions
4. Follows AutoGen conventions

IMPORTANT: Your code MUST include these exact imports and class usage:
- import autogen
- autogen.UserProxyAgent(...)
- autogen.AssistantAgent(...) or autogen.GroupChatManager(...)

Return ONLY the Python code with required configs."#,
    hint: "Use import autogen and create instances of autogen.UserProxyAgent and autogen.AssistantAgent",
    rules: StructuralRules::ImportAndConstruct {
        imports: &["importautogen", "fromautogenimport"],
        constructs: &[
            "userproxyagent",
            "assistantagent",
            "groupchatmanager",
            "agent=",
        ],
    },
    package: "pyautogen",
    info: "Perfect for conversational agents and chat-based systems",
    templates: &[
        Template {
            name: "Code Review",
            description: "Build a code review system with reviewer and QA agents",
        },
        Template {
            name: "Data Analysis",
            description: "Create a data analysis system with analyst and visualization agents",
        },
    ],
};

/// Look up the static profile for a framework. Total over the closed enum.
pub fn profile(framework: Framework) -> &'static FrameworkProfile {
    match framework {
        Framework::LangGraph => &LANGGRAPH,
        Framework::CrewAI => &CREWAI,
        Framework::AutoGen => &AUTOGEN,
    }
}
