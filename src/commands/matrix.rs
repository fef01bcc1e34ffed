use crate::ascii::matrix_effect;
use crate::command::{Command, CommandOutput, CommandResult};
use crate::context::TerminalContext;
use crate::events::TerminalEvent;

pub struct MatrixCommand;

impl Command for MatrixCommand {
    fn execute(&self, _arg: &str, ctx: &mut TerminalContext) -> CommandResult {
        let rain = matrix_effect(ctx.next_seed());
        Ok(CommandOutput::lines(vec![
            "Welcome to the Matrix...".to_string(),
            String::new(),
            rain,
            String::new(),
            "Red pill or blue pill?".to_string(),
        ])
        .with_event(TerminalEvent::EasterEggFound { name: "matrix".to_string() }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_the_rain_in_flavor_text() {
        let mut ctx = TerminalContext::new();
        ctx.set_seed(99);
        let out = MatrixCommand.execute("", &mut ctx).unwrap();
        assert_eq!(out.lines.first().unwrap(), "Welcome to the Matrix...");
        assert_eq!(out.lines.last().unwrap(), "Red pill or blue pill?");
        assert!(out.lines[2].lines().count() == 20);
        assert_eq!(
            out.events,
            vec![TerminalEvent::EasterEggFound { name: "matrix".into() }]
        );
    }

    #[test]
    fn repeated_invocations_vary() {
        let mut ctx = TerminalContext::new();
        ctx.set_seed(99);
        let first = MatrixCommand.execute("", &mut ctx).unwrap();
        let second = MatrixCommand.execute("", &mut ctx).unwrap();
        assert_ne!(first.lines[2], second.lines[2]);
    }
}
