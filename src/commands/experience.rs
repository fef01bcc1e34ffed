use crate::command::{Command, CommandOutput, CommandResult};
use crate::context::TerminalContext;

pub struct ExperienceCommand;

impl Command for ExperienceCommand {
    fn execute(&self, _arg: &str, ctx: &mut TerminalContext) -> CommandResult {
        let mut lines = vec!["Work Experience:".to_string(), "═".repeat(50)];
        for exp in &ctx.portfolio.experience {
            lines.push(String::new());
            lines.push(format!("{} at {}", exp.position, exp.company));
            lines.push(format!("Duration: {}", exp.duration));
            lines.push(String::new());
            lines.push("Responsibilities:".to_string());
            lines.extend(exp.description.iter().map(|d| format!("• {}", d)));
            lines.push(String::new());
            lines.push(format!("Technologies: {}", exp.technologies.join(", ")));
        }
        Ok(CommandOutput::lines(lines))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_each_position_with_duration() {
        let mut ctx = TerminalContext::new();
        let out = ExperienceCommand.execute("", &mut ctx).unwrap();
        for exp in &ctx.portfolio.experience {
            assert!(out.lines.contains(&format!("{} at {}", exp.position, exp.company)));
            assert!(out.lines.contains(&format!("Duration: {}", exp.duration)));
        }
    }
}
