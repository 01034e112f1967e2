//! Markdown parsing and rendering for tutorial content.
//!
//! Parses step bodies with pulldown-cmark into styled ratatui lines:
//! headings, paragraphs, lists and fenced code blocks. Code blocks are
//! numbered so the tutorial tab can select and copy them; the selected
//! block gets a highlighted frame and an optional "copied!" tag.

use pulldown_cmark::{CodeBlockKind, Event, Parser, Tag, TagEnd};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

/// Rendering options for one markdown document.
#[derive(Debug, Clone, Default)]
pub struct MarkdownOptions {
    /// Maximum display width for wrapped text.
    pub width: usize,
    /// Index of the first code block in this document (selection is global
    /// across the whole tutorial).
    pub block_base: usize,
    /// Globally selected code block, if any.
    pub selected_block: Option<usize>,
    /// Whether the selected block was just copied.
    pub copied: bool,
}

/// Accent color per fence language, matching the reference UI.
fn language_accent(language: &str) -> Color {
    match language {
        "python" => Color::Blue,
        "javascript" => Color::Yellow,
        "bash" => Color::Green,
        _ => Color::Gray,
    }
}

/// Renders markdown into styled lines. Returns the lines and the number of
/// code blocks encountered.
pub fn render_markdown(text: &str, opts: &MarkdownOptions) -> (Vec<Line<'static>>, usize) {
    let width = opts.width.max(10);
    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut block_count = 0usize;

    let mut bold_depth = 0u32;
    let mut italic_depth = 0u32;
    let mut heading_depth = 0u32;
    let mut in_code_block = false;
    let mut code_accent = Color::Gray;
    let mut list_item = false;

    let inline_style = |bold: u32, italic: u32, heading: u32| {
        let mut style = Style::default();
        if heading > 0 {
            style = style.fg(Color::Cyan).add_modifier(Modifier::BOLD);
        }
        if bold > 0 {
            style = style.add_modifier(Modifier::BOLD);
        }
        if italic > 0 {
            style = style.add_modifier(Modifier::ITALIC);
        }
        style
    };

    for event in Parser::new(text) {
        match event {
            Event::Start(Tag::Heading { .. }) => {
                flush(&mut lines, &mut spans, width, None);
                heading_depth += 1;
            }
            Event::End(TagEnd::Heading(_)) => {
                heading_depth = heading_depth.saturating_sub(1);
                flush(&mut lines, &mut spans, width, None);
                lines.push(Line::default());
            }
            Event::Start(Tag::Paragraph) => {}
            Event::End(TagEnd::Paragraph) => {
                let prefix = list_item.then_some("  ");
                flush(&mut lines, &mut spans, width, prefix);
                if !list_item {
                    lines.push(Line::default());
                }
            }
            Event::Start(Tag::List(_)) => {}
            Event::End(TagEnd::List(_)) => {
                lines.push(Line::default());
            }
            Event::Start(Tag::Item) => {
                list_item = true;
                spans.push(Span::styled("- ", Style::default().fg(Color::Cyan)));
            }
            Event::End(TagEnd::Item) => {
                flush(&mut lines, &mut spans, width, Some("  "));
                list_item = false;
            }
            Event::Start(Tag::Strong) => bold_depth += 1,
            Event::End(TagEnd::Strong) => bold_depth = bold_depth.saturating_sub(1),
            Event::Start(Tag::Emphasis) => italic_depth += 1,
            Event::End(TagEnd::Emphasis) => italic_depth = italic_depth.saturating_sub(1),
            Event::Start(Tag::CodeBlock(kind)) => {
                flush(&mut lines, &mut spans, width, None);
                let language = match kind {
                    CodeBlockKind::Fenced(lang) => lang.to_string(),
                    CodeBlockKind::Indented => String::new(),
                };
                code_accent = language_accent(&language);
                in_code_block = true;

                let index = opts.block_base + block_count;
                let selected = opts.selected_block == Some(index);
                lines.push(code_header(&language, index, selected, opts.copied, width));
            }
            Event::End(TagEnd::CodeBlock) => {
                in_code_block = false;
                let index = opts.block_base + block_count;
                let selected = opts.selected_block == Some(index);
                lines.push(code_footer(selected, width));
                lines.push(Line::default());
                block_count += 1;
            }
            Event::Text(text) => {
                if in_code_block {
                    for code_line in text.lines() {
                        lines.push(Line::from(vec![
                            Span::styled("│ ", Style::default().fg(Color::DarkGray)),
                            Span::styled(
                                code_line.to_string(),
                                Style::default().fg(code_accent),
                            ),
                        ]));
                    }
                } else {
                    spans.push(Span::styled(
                        text.to_string(),
                        inline_style(bold_depth, italic_depth, heading_depth),
                    ));
                }
            }
            Event::Code(code) => {
                spans.push(Span::styled(
                    code.to_string(),
                    Style::default().fg(Color::Yellow),
                ));
            }
            Event::SoftBreak => spans.push(Span::raw(" ")),
            Event::HardBreak => flush(&mut lines, &mut spans, width, None),
            Event::Rule => {
                flush(&mut lines, &mut spans, width, None);
                lines.push(Line::from(Span::styled(
                    "─".repeat(width),
                    Style::default().fg(Color::DarkGray),
                )));
            }
            _ => {}
        }
    }

    flush(&mut lines, &mut spans, width, None);
    (lines, block_count)
}

fn code_header(
    language: &str,
    index: usize,
    selected: bool,
    copied: bool,
    width: usize,
) -> Line<'static> {
    let frame_style = if selected {
        Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut spans = vec![
        Span::styled("┌─ ", frame_style),
        Span::styled(
            if language.is_empty() {
                "code".to_string()
            } else {
                language.to_string()
            },
            Style::default().fg(language_accent(language)),
        ),
        Span::styled(format!(" ─ [{}]", index + 1), frame_style),
    ];
    if selected && copied {
        spans.push(Span::styled(
            " copied!",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ));
    }

    let used: usize = spans.iter().map(|s| s.content.width()).sum();
    if width > used {
        spans.push(Span::styled("─".repeat(width - used), frame_style));
    }
    Line::from(spans)
}

fn code_footer(selected: bool, width: usize) -> Line<'static> {
    let frame_style = if selected {
        Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Line::from(Span::styled(
        format!("└{}", "─".repeat(width.saturating_sub(1))),
        frame_style,
    ))
}

/// Wraps buffered spans into lines no wider than `width` and appends them.
/// `rest_prefix` indents continuation lines (used for list items).
fn flush(
    lines: &mut Vec<Line<'static>>,
    spans: &mut Vec<Span<'static>>,
    width: usize,
    rest_prefix: Option<&str>,
) {
    if spans.is_empty() {
        return;
    }
    let buffered = std::mem::take(spans);
    lines.extend(wrap_spans(buffered, width, rest_prefix.unwrap_or("")));
}

/// Word-wraps styled spans, keeping each word's style.
fn wrap_spans(
    spans: Vec<Span<'static>>,
    width: usize,
    rest_prefix: &str,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let mut current: Vec<Span<'static>> = Vec::new();
    let mut current_width = 0usize;

    for span in spans {
        let style = span.style;
        for word in split_keeping_spaces(&span.content) {
            let word_width = word.width();
            if current_width + word_width > width && current_width > 0 {
                lines.push(Line::from(std::mem::take(&mut current)));
                current_width = 0;
                if !rest_prefix.is_empty() {
                    current.push(Span::raw(rest_prefix.to_string()));
                    current_width = rest_prefix.width();
                }
                // Skip leading whitespace on continuation lines
                if word.trim().is_empty() {
                    continue;
                }
            }
            current.push(Span::styled(word.to_string(), style));
            current_width += word_width;
        }
    }
    if !current.is_empty() {
        lines.push(Line::from(current));
    }

    lines
}

/// Splits text into alternating word/space chunks so wrapping can break at
/// word boundaries without losing inter-word spacing.
fn split_keeping_spaces(text: &str) -> Vec<&str> {
    let mut chunks = Vec::new();
    let mut start = 0;
    let mut in_space = None;

    for (i, c) in text.char_indices() {
        let is_space = c == ' ';
        match in_space {
            None => in_space = Some(is_space),
            Some(prev) if prev != is_space => {
                chunks.push(&text[start..i]);
                start = i;
                in_space = Some(is_space);
            }
            _ => {}
        }
    }
    if start < text.len() {
        chunks.push(&text[start..]);
    }
    chunks
}
