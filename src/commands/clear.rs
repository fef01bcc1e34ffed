use crate::command::{Command, CommandOutput, CommandResult};
use crate::context::TerminalContext;

pub struct ClearCommand;

impl Command for ClearCommand {
    fn execute(&self, _arg: &str, ctx: &mut TerminalContext) -> CommandResult {
        // history and cwd survive, only the display buffer goes
        ctx.clear_output();
        Ok(CommandOutput::none())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empties_output_only() {
        let mut ctx = TerminalContext::new();
        ctx.output.push("something".into());
        ctx.history.push("ls".into());
        ClearCommand.execute("", &mut ctx).unwrap();
        assert!(ctx.output.is_empty());
        assert_eq!(ctx.history, vec!["ls".to_string()]);
        assert_eq!(ctx.cwd, crate::context::HOME);
    }
}
