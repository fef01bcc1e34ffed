use crate::command::{Command, CommandOutput, CommandResult};
use crate::context::TerminalContext;

pub struct HelpCommand;

impl Command for HelpCommand {
    fn execute(&self, arg: &str, ctx: &mut TerminalContext) -> CommandResult {
        if arg.is_empty() {
            let mut lines = vec!["Available Commands:".to_string(), "═".repeat(50)];
            for spec in &ctx.catalog {
                lines.push(format!("{:<12} - {}", spec.name, spec.description));
            }
            return Ok(CommandOutput::lines(lines));
        }

        // detailed view, matched by name or alias
        match ctx.catalog.iter().find(|spec| spec.matches(arg)) {
            Some(spec) => {
                let mut lines = vec![
                    format!("Command: {}", spec.name),
                    format!("Description: {}", spec.description),
                    format!("Usage: {}", spec.usage),
                ];
                if !spec.aliases.is_empty() {
                    lines.push(format!("Aliases: {}", spec.aliases.join(", ")));
                }
                Ok(CommandOutput::lines(lines))
            }
            None => Ok(CommandOutput::line(format!("Help: No such command: {}", arg))),
        }
    }
}
