use crate::command::{Command, CommandOutput, CommandResult};
use crate::context::TerminalContext;
use crate::error::CommandError;
use crate::path;

pub struct CatCommand;

impl Command for CatCommand {
    fn execute(&self, arg: &str, ctx: &mut TerminalContext) -> CommandResult {
        if arg.is_empty() {
            return Err(CommandError::MissingArgument { command: "cat", what: "file" });
        }
        let target = path::resolve_target(&ctx.cwd, arg);
        match ctx.vfs.read_file(&target) {
            Some(content) => Ok(CommandOutput::lines(
                content.split('\n').map(str::to_string).collect(),
            )),
            None => Err(CommandError::FileNotFound(arg.to_string())),
        }
    }
}
