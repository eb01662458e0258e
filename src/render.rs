//! Lightweight markup rendering for the terminal.
//!
//! The advice service tends to answer in simple markdown (bold headings,
//! bullet lists). This handles just that subset with ANSI escapes and
//! passes everything else through verbatim.

const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Render markdown-flavoured text for terminal display
pub fn render_markdown(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for (i, line) in text.lines().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&render_line(line));
    }
    // Preserve a trailing newline if the source had one
    if text.ends_with('\n') {
        out.push('\n');
    }
    out
}

fn render_line(line: &str) -> String {
    let trimmed = line.trim_start();

    // Headings render whole-line bold with the hashes stripped
    if let Some(heading) = strip_heading(trimmed) {
        return format!("{}{}{}", BOLD, render_inline(heading), RESET);
    }

    // Bullet markers become a proper bullet glyph
    if let Some(item) = trimmed.strip_prefix("* ").or_else(|| trimmed.strip_prefix("- ")) {
        return format!("  \u{2022} {}", render_inline(item));
    }

    render_inline(line)
}

fn strip_heading(line: &str) -> Option<&str> {
    for prefix in ["### ", "## ", "# "] {
        if let Some(rest) = line.strip_prefix(prefix) {
            return Some(rest);
        }
    }
    None
}

/// Convert `**bold**` spans to ANSI bold
fn render_inline(line: &str) -> String {
    if !line.contains("**") {
        return line.to_string();
    }

    let segments: Vec<&str> = line.split("**").collect();
    let mut out = String::with_capacity(line.len());
    for (i, segment) in segments.iter().enumerate() {
        out.push_str(segment);
        if i + 1 < segments.len() {
            out.push_str(if i % 2 == 0 { BOLD } else { RESET });
        }
    }
    // An odd number of markers leaves a span open; close it so styling
    // cannot leak into following lines
    if segments.len() % 2 == 0 {
        out.push_str(RESET);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(render_markdown("hello there"), "hello there");
    }

    #[test]
    fn bold_spans_get_ansi_codes() {
        let out = render_markdown("a **b** c");
        assert_eq!(out, format!("a {}b{} c", BOLD, RESET));
    }

    #[test]
    fn headings_render_bold_without_hashes() {
        let out = render_markdown("## Architect");
        assert!(out.contains("Architect"));
        assert!(!out.contains('#'));
        assert!(out.starts_with(BOLD));
    }

    #[test]
    fn bullets_get_a_glyph() {
        let out = render_markdown("* first\n- second");
        assert_eq!(out, "  \u{2022} first\n  \u{2022} second");
    }

    #[test]
    fn unbalanced_bold_marker_does_not_leak() {
        let out = render_markdown("**Architect");
        assert!(out.ends_with(RESET));
        assert!(out.contains("Architect"));
    }

    #[test]
    fn multiline_answer_keeps_line_structure() {
        let out = render_markdown("**Architect**\nDesign buildings.\n");
        assert!(out.contains("Architect"));
        assert!(out.contains("\nDesign buildings.\n"));
    }
}
