use crate::ascii::DEFAULT_FONT;
use crate::command::{Command, CommandOutput, CommandResult};
use crate::context::TerminalContext;
use crate::error::CommandError;

pub struct AsciiCommand;

impl Command for AsciiCommand {
    fn execute(&self, arg: &str, ctx: &mut TerminalContext) -> CommandResult {
        if arg.is_empty() {
            return Err(CommandError::MissingArgument { command: "ascii", what: "text" });
        }
        // first token is the text, the rest names a font
        let (text, font) = match arg.split_once(char::is_whitespace) {
            Some((text, font)) => (text, font.trim()),
            None => (arg, DEFAULT_FONT),
        };
        match ctx.renderer().render(text, font) {
            Ok(art) => Ok(CommandOutput::line(art)),
            Err(cause) => {
                // collaborator failures reach the user as one generic line
                tracing::warn!(%cause, text, font, "ascii rendering failed");
                Err(CommandError::Collaborator { command: "ascii", what: "art" })
            }
        }
    }
}
