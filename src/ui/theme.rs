use owo_colors::{OwoColorize, Style};

/// Colors for status lines. A disabled theme paints nothing, so output
/// written to pipes and test buffers stays free of escape codes.
#[derive(Debug, Clone)]
pub struct Theme {
    pub enabled: bool,
    pub header: Style,
    pub success: Style,
    pub error: Style,
}

impl Theme {
    pub fn detect() -> Self {
        if !console::Term::stdout().is_term() {
            return Self::plain();
        }
        Self::colored()
    }

    pub fn colored() -> Self {
        Self {
            enabled: true,
            header: Style::new().cyan().bold(),
            success: Style::new().green().bold(),
            error: Style::new().red().bold(),
        }
    }

    pub fn plain() -> Self {
        Self {
            enabled: false,
            header: Style::new(),
            success: Style::new(),
            error: Style::new(),
        }
    }

    pub fn paint(&self, text: &str, style: &Style) -> String {
        if self.enabled {
            text.style(style.clone()).to_string()
        } else {
            text.to_string()
        }
    }
}
