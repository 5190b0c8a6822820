//! Terminal rendering of the markdown produced by the core display types.
//!
//! Rich output goes through termimad; `--no-color` prints the markdown as is.

use anyhow::Result;
use termimad::{MadSkin, crossterm::style::Color};

/// Marks shown for completed and pending tasks in plan views.
const DONE_MARK: &str = "✓";
const PENDING_MARK: &str = "○";

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render markdown text to the terminal
    pub fn render(&self, markdown: &str) -> Result<()> {
        if !self.rich_enabled {
            print!("{markdown}");
            return Ok(());
        }

        for line in markdown.lines() {
            println!("{}", self.styled_line(line));
        }
        Ok(())
    }

    /// Styles one markdown line. Headers keep their hashes so week and day
    /// levels stay distinguishable; task marks are colored by state.
    fn styled_line(&self, line: &str) -> String {
        if line.starts_with('#') {
            return format!("\x1b[34m{line}\x1b[0m");
        }
        if let Some(rest) = line.strip_prefix("- ") {
            if let Some(task) = rest.strip_prefix(DONE_MARK) {
                return format!("- \x1b[32m{DONE_MARK}\x1b[0m{}", self.skin.inline(task));
            }
            if let Some(task) = rest.strip_prefix(PENDING_MARK) {
                return format!("- \x1b[33m{PENDING_MARK}\x1b[0m{}", self.skin.inline(task));
            }
        }
        self.skin.inline(line).to_string()
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_renderer() {
        let renderer = TerminalRenderer::new(false);
        assert!(!renderer.rich_enabled);
    }

    #[test]
    fn test_default_is_rich() {
        let renderer = TerminalRenderer::default();
        assert!(renderer.rich_enabled);
    }

    #[test]
    fn test_headers_keep_hashes() {
        let renderer = TerminalRenderer::new(true);
        let styled = renderer.styled_line("## Week 1");
        assert!(styled.contains("## Week 1"));
        assert!(styled.starts_with("\x1b[34m"));
    }

    #[test]
    fn test_task_marks_are_colored() {
        let renderer = TerminalRenderer::new(true);
        assert!(
            renderer
                .styled_line("- ✓ Walk (20 min, ID: t-1)")
                .starts_with("- \x1b[32m✓")
        );
        assert!(
            renderer
                .styled_line("- ○ Jog (5 min, ID: t-2)")
                .starts_with("- \x1b[33m○")
        );
    }
}
