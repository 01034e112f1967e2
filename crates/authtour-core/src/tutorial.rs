//! Tutorial content model.
//!
//! Step bodies are markdown embedded at compile time. Fenced code blocks are
//! extractable so the UI can offer copy-to-clipboard per block.

use pulldown_cmark::{CodeBlockKind, Event, Parser, Tag, TagEnd};

/// One tutorial step: a numbered card with a title, a one-line summary and a
/// markdown body.
#[derive(Debug, Clone, Copy)]
pub struct Step {
    pub number: usize,
    pub title: &'static str,
    pub summary: &'static str,
    pub body: &'static str,
}

/// All tutorial steps, in reading order.
pub fn steps() -> &'static [Step] {
    const STEPS: &[Step] = &[
        Step {
            number: 1,
            title: "Project Setup",
            summary: "Initialize your authentication project",
            body: include_str!("../tutorial/01-project-setup.md"),
        },
        Step {
            number: 2,
            title: "Environment Configuration",
            summary: "Set up environment variables and configuration",
            body: include_str!("../tutorial/02-environment-configuration.md"),
        },
        Step {
            number: 3,
            title: "Choose Your Backend Approach",
            summary: "Select between FastAPI server or serverless functions",
            body: include_str!("../tutorial/03-backend-approach.md"),
        },
        Step {
            number: 4,
            title: "FastAPI Authentication Implementation",
            summary: "Build the complete authentication system with FastAPI",
            body: include_str!("../tutorial/04-fastapi-authentication.md"),
        },
        Step {
            number: 5,
            title: "Testing Your Implementation",
            summary: "Verify everything works correctly",
            body: include_str!("../tutorial/05-testing.md"),
        },
    ];
    STEPS
}

/// A fenced code block extracted from a step body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock {
    /// Language tag of the fence ("bash", "python", ...); empty if untagged.
    pub language: String,
    pub code: String,
}

/// Extracts fenced code blocks from markdown, in document order.
pub fn code_blocks(markdown: &str) -> Vec<CodeBlock> {
    let mut blocks = Vec::new();
    let mut current: Option<CodeBlock> = None;

    for event in Parser::new(markdown) {
        match event {
            Event::Start(Tag::CodeBlock(kind)) => {
                let language = match kind {
                    CodeBlockKind::Fenced(lang) => lang.to_string(),
                    CodeBlockKind::Indented => String::new(),
                };
                current = Some(CodeBlock {
                    language,
                    code: String::new(),
                });
            }
            Event::Text(text) => {
                if let Some(block) = current.as_mut() {
                    block.code.push_str(&text);
                }
            }
            Event::End(TagEnd::CodeBlock) => {
                if let Some(mut block) = current.take() {
                    // Fences keep a trailing newline; drop it for clipboard use.
                    while block.code.ends_with('\n') {
                        block.code.pop();
                    }
                    blocks.push(block);
                }
            }
            _ => {}
        }
    }

    blocks
}

/// Code blocks across every step, in tutorial order.
pub fn all_code_blocks() -> Vec<CodeBlock> {
    steps()
        .iter()
        .flat_map(|step| code_blocks(step.body))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_five_steps_in_order() {
        let steps = steps();
        assert_eq!(steps.len(), 5);
        for (i, step) in steps.iter().enumerate() {
            assert_eq!(step.number, i + 1);
            assert!(!step.title.is_empty());
            assert!(!step.body.trim().is_empty());
        }
    }

    #[test]
    fn test_code_block_extraction() {
        let blocks = code_blocks("intro\n\n```bash\nnpm install\n```\n\ntext\n");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].language, "bash");
        assert_eq!(blocks[0].code, "npm install");
    }

    #[test]
    fn test_setup_step_has_frontend_and_backend_snippets() {
        let blocks = code_blocks(steps()[0].body);
        assert_eq!(blocks.len(), 2);
        assert!(blocks[0].code.contains("npm create vite@latest"));
        assert!(blocks[1].code.contains("pip install fastapi"));
    }

    #[test]
    fn test_every_tagged_block_has_known_language() {
        for block in all_code_blocks() {
            assert!(
                matches!(block.language.as_str(), "bash" | "python"),
                "unexpected language: {}",
                block.language
            );
        }
    }

    #[test]
    fn test_tutorial_has_copyable_blocks() {
        assert!(all_code_blocks().len() >= 6);
    }
}
