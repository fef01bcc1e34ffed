use crate::ascii::skill_bar;
use crate::command::{Command, CommandOutput, CommandResult};
use crate::context::TerminalContext;
use crate::error::CommandError;

pub struct SkillsCommand;

impl Command for SkillsCommand {
    fn execute(&self, arg: &str, ctx: &mut TerminalContext) -> CommandResult {
        let portfolio = &ctx.portfolio;
        let categories: Vec<&str> = if arg.is_empty() {
            portfolio.skill_categories()
        } else {
            portfolio
                .skill_categories()
                .into_iter()
                .filter(|c| c.eq_ignore_ascii_case(arg))
                .collect()
        };
        if categories.is_empty() {
            return Err(CommandError::FilterNotFound(format!(
                "No skills found for category: {}",
                arg
            )));
        }

        let mut lines = vec!["Technical Skills:".to_string(), "═".repeat(50)];
        for category in categories {
            lines.push(String::new());
            lines.push(format!("{}:", category));
            for skill in portfolio.skills.iter().filter(|s| s.category == category) {
                lines.push(skill_bar(&skill.name, skill.level));
            }
        }
        Ok(CommandOutput::lines(lines))
    }
}
