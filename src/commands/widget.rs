//! Feature toggles: each of these commands flips the visibility flag of one
//! host-owned widget panel. The interpreter keeps only the flag; the widget
//! itself (chat window, games canvas, analytics overlay, ...) lives in the
//! presentation layer and reacts to the `WidgetToggled` event.

use crate::achievements;
use crate::command::{Command, CommandOutput, CommandResult};
use crate::context::TerminalContext;
use crate::events::TerminalEvent;

pub struct WidgetCommand {
    widget: &'static str,
    label: &'static str,
}

impl WidgetCommand {
    pub const fn new(widget: &'static str, label: &'static str) -> Self {
        Self { widget, label }
    }
}

impl Command for WidgetCommand {
    fn execute(&self, _arg: &str, ctx: &mut TerminalContext) -> CommandResult {
        let visible = ctx.toggle_widget(self.widget);
        let line = if visible {
            format!("{} opened. Run '{}' again to close it.", self.label, self.widget)
        } else {
            format!("{} closed.", self.label)
        };
        Ok(CommandOutput::line(line).with_event(TerminalEvent::WidgetToggled {
            widget: self.widget.to_string(),
            visible,
        }))
    }
}

/// Like the other toggles, but opening the panel also prints the badges the
/// session has earned so far.
pub struct AchievementsCommand;

impl Command for AchievementsCommand {
    fn execute(&self, _arg: &str, ctx: &mut TerminalContext) -> CommandResult {
        let visible = ctx.toggle_widget("achievements");
        let mut lines = Vec::new();
        if visible {
            lines.push("Achievements panel opened.".to_string());
            let earned = achievements::unlocked(&ctx.history, &ctx.catalog);
            lines.push(format!(
                "Unlocked {} of {}:",
                earned.len(),
                achievements::ALL.len()
            ));
            for badge in earned {
                lines.push(format!("★ {} - {}", badge.name, badge.description));
            }
        } else {
            lines.push("Achievements panel closed.".to_string());
        }
        Ok(CommandOutput::lines(lines).with_event(TerminalEvent::WidgetToggled {
            widget: "achievements".to_string(),
            visible,
        }))
    }
}
