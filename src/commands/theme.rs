use crate::command::{Command, CommandOutput, CommandResult};
use crate::context::TerminalContext;
use crate::events::TerminalEvent;

/// Theme names the presentation layer knows how to render.
pub const THEMES: &[&str] = &["matrix", "amber", "blue", "classic"];

pub struct ThemeCommand;

impl Command for ThemeCommand {
    fn execute(&self, arg: &str, ctx: &mut TerminalContext) -> CommandResult {
        let wanted = arg.to_ascii_lowercase();
        match THEMES.iter().find(|t| **t == wanted) {
            Some(theme) => {
                ctx.theme = theme.to_string();
                Ok(CommandOutput::line(format!("Theme changed to: {}", theme))
                    .with_event(TerminalEvent::ThemeChanged { theme: theme.to_string() }))
            }
            // missing or invalid name both fall back to the list
            None => {
                let mut lines = vec!["Available themes:".to_string()];
                lines.extend(THEMES.iter().map(|t| format!("• {}", t)));
                Ok(CommandOutput::lines(lines))
            }
        }
    }
}
