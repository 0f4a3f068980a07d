use terminal_size::{Width, terminal_size};
use yansi::Paint;

/// Color palette for consistent theming
pub struct ColorPalette {
    pub heading: (u8, u8, u8), // Section banners
    pub success: (u8, u8, u8), // Completed operations
    pub error: (u8, u8, u8),   // Failures and rejected input
    pub muted: (u8, u8, u8),   // Hints, timestamps
}

impl ColorPalette {
    pub const CATPPUCCIN: Self = Self {
        heading: (148, 226, 213), // Teal
        success: (166, 227, 161), // Green
        error: (243, 139, 168),   // Pink
        muted: (108, 112, 134),   // Gray
    };
}

/// Styling applied to dialogue lines. Plain text passes through untouched
/// when color is off, so output stays byte-stable for tests.
pub struct FormatContext {
    pub use_color: bool,
    pub palette: ColorPalette,
    pub columns: Option<usize>,
}

impl FormatContext {
    pub fn new(use_color: bool) -> Self {
        Self { use_color, palette: ColorPalette::CATPPUCCIN, columns: None }
    }

    pub fn with_columns(mut self, columns: Option<usize>) -> Self {
        self.columns = columns;
        self
    }

    fn paint(&self, text: &str, rgb: (u8, u8, u8), bold: bool) -> String {
        if !self.use_color {
            return text.to_string();
        }
        let (r, g, b) = rgb;
        let painted = Paint::rgb(text, r, g, b);
        if bold { painted.bold().to_string() } else { painted.to_string() }
    }

    pub fn header(&self, text: &str) -> String {
        self.paint(text, self.palette.heading, true)
    }

    pub fn success(&self, text: &str) -> String {
        self.paint(text, self.palette.success, false)
    }

    pub fn error(&self, text: &str) -> String {
        self.paint(text, self.palette.error, false)
    }

    pub fn muted(&self, text: &str) -> String {
        self.paint(text, self.palette.muted, false)
    }

    /// Fit a list entry to the terminal width, if one is known.
    pub fn fit(&self, text: &str) -> String {
        match self.columns {
            Some(cols) => truncate_with_ellipsis(text, cols),
            None => text.to_string(),
        }
    }
}

/// Width of the attached terminal, if stdout is one.
pub fn terminal_columns() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize).filter(|w| *w > 0)
}

/// Truncate text to a width, appending an ellipsis when needed.
pub fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    let len = text.chars().count();
    if len <= max_width {
        return text.to_string();
    }
    if max_width == 1 {
        return "…".to_string();
    }
    let mut out =
        text.chars().take(max_width.saturating_sub(1)).collect::<String>();
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_context_no_color() {
        let ctx = FormatContext::new(false);
        assert_eq!(ctx.header("=== MAIN MENU ==="), "=== MAIN MENU ===");
        assert_eq!(ctx.error("oops"), "oops");
        assert_eq!(ctx.success("ok"), "ok");
    }

    #[test]
    fn test_format_context_with_color() {
        let ctx = FormatContext::new(true);
        let header = ctx.header("Header");
        assert!(header.contains("Header"));
        assert!(header.len() > "Header".len()); // Has ANSI codes
    }

    #[test]
    fn test_fit_only_with_known_width() {
        let ctx = FormatContext::new(false);
        assert_eq!(ctx.fit("1. a-very-long-name.txt"), "1. a-very-long-name.txt");
        let ctx = ctx.with_columns(Some(8));
        assert_eq!(ctx.fit("1. a-very-long-name.txt"), "1. a-ve…");
    }

    #[test]
    fn test_truncate_edges() {
        assert_eq!(truncate_with_ellipsis("abc", 0), "");
        assert_eq!(truncate_with_ellipsis("abc", 1), "…");
        assert_eq!(truncate_with_ellipsis("abc", 3), "abc");
        assert_eq!(truncate_with_ellipsis("héllo", 4), "hél…");
    }
}
