pub mod console;
pub mod prompt;
pub mod table;
pub mod theme;

pub use console::{Console, OutputFormat};
pub use prompt::Prompter;
pub use theme::Theme;
