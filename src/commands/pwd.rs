use crate::command::{Command, CommandOutput, CommandResult};
use crate::context::TerminalContext;

pub struct PwdCommand;

impl Command for PwdCommand {
    fn execute(&self, _arg: &str, ctx: &mut TerminalContext) -> CommandResult {
        Ok(CommandOutput::line(ctx.cwd.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::HOME;

    #[test]
    fn prints_cwd_without_touching_it() {
        let mut ctx = TerminalContext::new();
        for _ in 0..3 {
            let out = PwdCommand.execute("", &mut ctx).unwrap();
            assert_eq!(out.lines, vec![HOME.to_string()]);
        }
        assert_eq!(ctx.cwd, HOME);
    }
}
