use once_cell::sync::Lazy;
use regex::Regex;

/// Matches a code-fence marker, optionally tagged `python`/`py`, together
/// with any trailing whitespace
static FENCE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"```(?:python|py)?\s*").unwrap());

/// Strip markdown code-fence artifacts from raw model output and trim
/// surrounding whitespace. Idempotent; nothing else in the code is altered.
pub fn sanitize(raw: &str) -> String {
    FENCE_RE.replace_all(raw, "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removes_tagged_fences() {
        assert_eq!(sanitize("```python\ncode()\n```"), "code()");
        assert_eq!(sanitize("```py\ncode()\n```"), "code()");
    }

    #[test]
    fn test_removes_bare_fences() {
        assert_eq!(sanitize("```\nx = 1\n```"), "x = 1");
    }

    #[test]
    fn test_removes_fences_mid_text() {
        let raw = "Here is the code:\n```python\nx = 1\n```\nDone.";
        assert_eq!(sanitize(raw), "Here is the code:\nx = 1\nDone.");
    }

    #[test]
    fn test_trims_whitespace() {
        assert_eq!(sanitize("  \n x = 1 \n  "), "x = 1");
    }

    #[test]
    fn test_plain_code_unchanged() {
        let code = "def main():\n    return 42";
        assert_eq!(sanitize(code), code);
    }

    #[test]
    fn test_idempotent() {
        let inputs = [
            "```python\ncode()\n```",
            "plain text",
            "``` \nfenced\n```",
            "",
            "   spaced   ",
        ];
        for input in inputs {
            let once = sanitize(input);
            assert_eq!(sanitize(&once), once);
        }
    }
}
