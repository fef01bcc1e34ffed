use crate::command::{Command, CommandOutput, CommandResult};
use crate::context::TerminalContext;
use crate::error::CommandError;
use crate::path;

pub struct CdCommand;

impl Command for CdCommand {
    fn execute(&self, arg: &str, ctx: &mut TerminalContext) -> CommandResult {
        if arg.is_empty() {
            return Err(CommandError::MissingArgument { command: "cd", what: "directory" });
        }
        let target = path::resolve_target(&ctx.cwd, arg);
        if ctx.vfs.is_dir(&target) {
            // the only place cwd is ever committed
            ctx.cwd = target;
            Ok(CommandOutput::none())
        } else {
            Err(CommandError::DirectoryNotFound(arg.to_string()))
        }
    }
}
