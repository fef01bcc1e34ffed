use crate::ascii::render_tree;
use crate::command::{Command, CommandOutput, CommandResult};
use crate::context::TerminalContext;

pub struct TreeCommand;

impl Command for TreeCommand {
    fn execute(&self, _arg: &str, ctx: &mut TerminalContext) -> CommandResult {
        Ok(CommandOutput::line(render_tree(ctx.vfs.root())))
    }
}
