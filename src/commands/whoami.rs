use crate::command::{Command, CommandOutput, CommandResult};
use crate::context::TerminalContext;

pub struct WhoamiCommand;

impl Command for WhoamiCommand {
    fn execute(&self, _arg: &str, ctx: &mut TerminalContext) -> CommandResult {
        let personal = &ctx.portfolio.personal;
        Ok(CommandOutput::lines(vec![
            format!("Name: {}", personal.name),
            format!("Title: {}", personal.title),
            format!("Location: {}", personal.location),
            format!("Bio: {}", personal.bio),
        ]))
    }
}
