use tracing::{info, warn};

use crate::core::{ForgeError, Result, StageTimer};
use crate::framework::Framework;
use crate::generation::{build_messages, sanitize};
use crate::llm::{ProviderKind, ProviderRegistry};
use crate::syntax::{SyntaxCheck, SyntaxChecker};
use crate::validate::validate;

/// One user submission. Consumed by exactly one pipeline run; never
/// persisted. The credential lives only as long as the request.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub task_description: String,
    pub framework: Framework,
    pub provider: ProviderKind,
    pub model: String,
    pub temperature: f32,
    pub api_key: String,
}

impl GenerationRequest {
    /// Reject missing required inputs before any provider call happens
    pub fn validate(&self) -> Result<()> {
        if self.task_description.trim().is_empty() {
            return Err(ForgeError::missing_input("task description"));
        }
        if self.api_key.is_empty() {
            return Err(ForgeError::missing_input("API key"));
        }
        if !(0.0..=1.0).contains(&self.temperature) {
            return Err(ForgeError::config(format!(
                "temperature must be within [0, 1], got {}",
                self.temperature
            )));
        }
        Ok(())
    }
}

/// Everything one pipeline run produced. `validation_passed` is computed
/// from `sanitized_text` only; `syntax` is `None` when the structural gate
/// stopped the run before the checker ran.
#[derive(Debug)]
pub struct GeneratedArtifact {
    pub raw_text: String,
    pub sanitized_text: String,
    pub validation_passed: bool,
    pub syntax: Option<SyntaxCheck>,
}

/// The prompt-to-validated-artifact pipeline: prompt construction, model
/// invocation, sanitization, structural validation and syntax verification,
/// run sequentially within one call.
pub struct Pipeline {
    registry: ProviderRegistry,
    checker: SyntaxChecker,
    check_syntax: bool,
}

impl Pipeline {
    pub fn new() -> Result<Self> {
        Ok(Self {
            registry: ProviderRegistry::new()?,
            checker: SyntaxChecker::new(),
            check_syntax: true,
        })
    }

    /// Build a pipeline around a pre-assembled registry (tests swap in
    /// mock-backed providers this way)
    pub fn with_registry(registry: ProviderRegistry) -> Self {
        Self {
            registry,
            checker: SyntaxChecker::new(),
            check_syntax: true,
        }
    }

    pub fn with_syntax_checker(mut self, checker: SyntaxChecker) -> Self {
        self.checker = checker;
        self
    }

    /// Disable the syntax-verification stage; the artifact's `syntax` field
    /// stays `None`
    pub fn with_syntax_check(mut self, enabled: bool) -> Self {
        self.check_syntax = enabled;
        self
    }

    /// Run one request through every stage. Structural and syntax failures
    /// are states on the artifact; only missing inputs and provider errors
    /// surface as `Err`.
    pub async fn run(&self, request: &GenerationRequest) -> Result<GeneratedArtifact> {
        request.validate()?;

        let messages = build_messages(request.framework, &request.task_description);

        info!(
            framework = %request.framework,
            provider = %request.provider,
            model = %request.model,
            "invoking provider"
        );

        let timer = StageTimer::start("model_invocation");
        let raw_text = self
            .registry
            .get(request.provider)
            .invoke(
                &messages,
                &request.model,
                request.temperature,
                &request.api_key,
            )
            .await?;
        timer.stop();

        let sanitized_text = sanitize(&raw_text);
        let validation_passed = validate(request.framework, &sanitized_text);

        if !validation_passed {
            warn!(framework = %request.framework, "generated code failed structural validation");
            return Ok(GeneratedArtifact {
                raw_text,
                sanitized_text,
                validation_passed: false,
                syntax: None,
            });
        }

        let syntax = if self.check_syntax {
            let timer = StageTimer::start("syntax_check");
            let syntax = self.checker.check(&sanitized_text).await;
            timer.stop();
            Some(syntax)
        } else {
            None
        };

        Ok(GeneratedArtifact {
            raw_text,
            sanitized_text,
            validation_passed: true,
            syntax,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> GenerationRequest {
        GenerationRequest {
            task_description: "build a support triage agent".to_string(),
            framework: Framework::CrewAI,
            provider: ProviderKind::Gemini,
            model: "gemini-1.5-pro".to_string(),
            temperature: 0.5,
            api_key: "key".to_string(),
        }
    }

    #[test]
    fn test_request_validation_accepts_complete_request() {
        assert!(request().validate().is_ok());
    }

    #[test]
    fn test_request_validation_rejects_missing_fields() {
        let mut missing_task = request();
        missing_task.task_description = "   ".to_string();
        assert!(missing_task.validate().is_err());

        let mut missing_key = request();
        missing_key.api_key = String::new();
        assert!(missing_key.validate().is_err());
    }

    #[test]
    fn test_request_validation_rejects_out_of_range_temperature() {
        let mut hot = request();
        hot.temperature = 1.2;
        assert!(hot.validate().is_err());
    }
}
