use crate::command::{Command, CommandOutput, CommandResult};
use crate::context::TerminalContext;

pub struct ContactCommand;

impl Command for ContactCommand {
    fn execute(&self, _arg: &str, ctx: &mut TerminalContext) -> CommandResult {
        let contact = &ctx.portfolio.personal.contact;
        let mut lines = vec![
            "Contact Information:".to_string(),
            "═".repeat(30),
            format!("Email: {}", contact.email),
            format!("GitHub: {}", contact.github),
            format!("LinkedIn: {}", contact.linkedin),
        ];
        if let Some(website) = &contact.website {
            lines.push(format!("Website: {}", website));
        }
        Ok(CommandOutput::lines(lines))
    }
}
