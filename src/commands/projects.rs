use crate::command::{Command, CommandOutput, CommandResult};
use crate::context::TerminalContext;
use crate::error::CommandError;

pub struct ProjectsCommand;

impl Command for ProjectsCommand {
    fn execute(&self, arg: &str, ctx: &mut TerminalContext) -> CommandResult {
        if arg.is_empty() {
            let mut lines = vec!["Projects:".to_string(), "═".repeat(50)];
            for project in &ctx.portfolio.projects {
                lines.push(format!("{:<20} - {}", project.id, project.name));
                lines.push(format!("  {}", truncate(&project.description, 80)));
            }
            lines.push(String::new());
            lines.push("Use \"projects <project-id>\" to view details".to_string());
            return Ok(CommandOutput::lines(lines));
        }

        let project = ctx
            .portfolio
            .project(arg)
            .ok_or_else(|| CommandError::FilterNotFound(format!("Project not found: {}", arg)))?;

        let mut lines = vec![
            format!("Project: {}", project.name),
            "═".repeat(50),
            format!("Description: {}", project.description),
            String::new(),
            "Technologies:".to_string(),
        ];
        lines.extend(project.technologies.iter().map(|t| format!("• {}", t)));
        lines.push(String::new());
        lines.push("Features:".to_string());
        lines.extend(project.features.iter().map(|f| format!("• {}", f)));
        lines.push(String::new());
        lines.push("Links:".to_string());
        if let Some(url) = &project.github_url {
            lines.push(format!("GitHub: {}", url));
        }
        if let Some(url) = &project.live_url {
            lines.push(format!("Live Demo: {}", url));
        }
        lines.push(String::new());
        lines.push("Architecture:".to_string());
        lines.push(
            project
                .architecture
                .clone()
                .unwrap_or_else(|| "No architecture diagram available".to_string()),
        );
        Ok(CommandOutput::lines(lines))
    }
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        format!("{}...", text.chars().take(max).collect::<String>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_shows_every_project_id() {
        let mut ctx = TerminalContext::new();
        let out = ProjectsCommand.execute("", &mut ctx).unwrap();
        for project in &ctx.portfolio.projects {
            assert!(out.lines.iter().any(|l| l.contains(&project.id)));
        }
    }

    #[test]
    fn detail_view_includes_links_and_features() {
        let mut ctx = TerminalContext::new();
        let out = ProjectsCommand.execute("ascii-portfolio", &mut ctx).unwrap();
        assert!(out.lines[0].starts_with("Project: "));
        assert!(out.lines.iter().any(|l| l.starts_with("GitHub: ")));
        assert!(out.lines.iter().any(|l| l.starts_with("• ")));
    }

    #[test]
    fn missing_architecture_gets_a_placeholder() {
        let mut ctx = TerminalContext::new();
        let out = ProjectsCommand.execute("ml-classifier", &mut ctx).unwrap();
        assert!(out
            .lines
            .contains(&"No architecture diagram available".to_string()));
    }

    #[test]
    fn unknown_id_is_an_error() {
        let mut ctx = TerminalContext::new();
        assert_eq!(
            ProjectsCommand.execute("warpdrive", &mut ctx),
            Err(CommandError::FilterNotFound("Project not found: warpdrive".into()))
        );
    }
}
