use crate::command::{Command, CommandOutput, CommandResult};
use crate::context::TerminalContext;
use crate::path;

pub struct LsCommand;

impl Command for LsCommand {
    fn execute(&self, arg: &str, ctx: &mut TerminalContext) -> CommandResult {
        let target = if arg.is_empty() {
            ctx.cwd.clone()
        } else {
            path::resolve_target(&ctx.cwd, arg)
        };
        match ctx.vfs.list(&target) {
            None => Ok(CommandOutput::line("Directory not found")),
            Some(entries) if entries.is_empty() => Ok(CommandOutput::line("Empty directory")),
            Some(entries) => Ok(CommandOutput::lines(entries)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_current_directory() {
        let mut ctx = TerminalContext::new();
        let out = LsCommand.execute("", &mut ctx).unwrap();
        assert!(out.lines.contains(&"projects/".to_string()));
        assert!(out.lines.contains(&"skills/".to_string()));
        assert!(out.lines.contains(&"contact.txt".to_string()));
    }

    #[test]
    fn accepts_relative_and_absolute_paths() {
        let mut ctx = TerminalContext::new();
        let rel = LsCommand.execute("projects", &mut ctx).unwrap();
        let abs = LsCommand.execute("/home/portfolio/projects", &mut ctx).unwrap();
        assert_eq!(rel, abs);
        assert!(rel.lines.contains(&"ascii-portfolio/".to_string()));
    }

    #[test]
    fn missing_or_file_target_reports_not_found() {
        let mut ctx = TerminalContext::new();
        let out = LsCommand.execute("nowhere", &mut ctx).unwrap();
        assert_eq!(out.lines, vec!["Directory not found"]);
        let out = LsCommand.execute("contact.txt", &mut ctx).unwrap();
        assert_eq!(out.lines, vec!["Directory not found"]);
    }
}
