use crate::context::TerminalContext;
use crate::error::CommandError;
use crate::events::TerminalEvent;

pub type CommandResult = Result<CommandOutput, CommandError>;

/// What a handler hands back to the dispatcher: display lines plus any
/// events for the bus. Handlers never write to the output buffer directly
/// (except `clear`, which resets it through the context).
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CommandOutput {
    pub lines: Vec<String>,
    pub events: Vec<TerminalEvent>,
}

impl CommandOutput {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn line(line: impl Into<String>) -> Self {
        Self { lines: vec![line.into()], events: Vec::new() }
    }

    pub fn lines(lines: Vec<String>) -> Self {
        Self { lines, events: Vec::new() }
    }

    pub fn with_event(mut self, event: TerminalEvent) -> Self {
        self.events.push(event);
        self
    }
}

pub trait Command {
    fn execute(&self, arg: &str, ctx: &mut TerminalContext) -> CommandResult;
}

/// Static metadata for one registered command, shown by `help` and used for
/// completion matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub usage: &'static str,
    pub aliases: &'static [&'static str],
}

impl CommandSpec {
    /// Case-insensitive match on the primary name or any alias.
    pub fn matches(&self, token: &str) -> bool {
        self.name.eq_ignore_ascii_case(token)
            || self.aliases.iter().any(|a| a.eq_ignore_ascii_case(token))
    }

    fn matches_prefix(&self, partial: &str) -> bool {
        let partial = partial.to_ascii_lowercase();
        self.name.starts_with(&partial) || self.aliases.iter().any(|a| a.starts_with(&partial))
    }
}

struct Registered {
    spec: CommandSpec,
    handler: Box<dyn Command + Send + Sync>,
}

/// Ordered catalog of commands. Registration order is help-listing order.
/// Primary names are unique and aliases are globally disjoint from every
/// name and every other alias.
#[derive(Default)]
pub struct CommandRegistry {
    entries: Vec<Registered>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, spec: CommandSpec, handler: Box<dyn Command + Send + Sync>) {
        debug_assert!(
            !std::iter::once(spec.name)
                .chain(spec.aliases.iter().copied())
                .any(|token| self.entries.iter().any(|e| e.spec.matches(token))),
            "duplicate command name or alias: {}",
            spec.name
        );
        self.entries.push(Registered { spec, handler });
    }

    pub fn spec(&self, token: &str) -> Option<&CommandSpec> {
        self.find(token).map(|e| &e.spec)
    }

    pub fn all(&self) -> impl Iterator<Item = &CommandSpec> {
        self.entries.iter().map(|e| &e.spec)
    }

    /// Every definition whose primary name or any alias starts with
    /// `partial` (case-insensitive), in registration order.
    pub fn match_prefix(&self, partial: &str) -> Vec<&CommandSpec> {
        self.entries
            .iter()
            .filter(|e| e.spec.matches_prefix(partial))
            .map(|e| &e.spec)
            .collect()
    }

    /// Tab-completion contract: exactly one prefix match completes to the
    /// primary name plus a trailing space, anything else leaves the input
    /// alone.
    pub fn complete(&self, partial: &str) -> Option<String> {
        match self.match_prefix(partial).as_slice() {
            [only] => Some(format!("{} ", only.name)),
            _ => None,
        }
    }

    /// Run the handler bound to `verb` (name or alias). `None` means the
    /// verb matched nothing.
    pub fn dispatch(
        &self,
        verb: &str,
        arg: &str,
        ctx: &mut TerminalContext,
    ) -> Option<CommandResult> {
        self.find(verb).map(|e| e.handler.execute(arg, ctx))
    }

    fn find(&self, token: &str) -> Option<&Registered> {
        self.entries.iter().find(|e| e.spec.matches(token))
    }
}

/// Split a raw line into a case-folded verb and a trimmed argument string.
/// `None` for empty/whitespace-only lines.
pub fn parse_line(raw: &str) -> Option<(String, String)> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.split_once(char::is_whitespace) {
        Some((verb, rest)) => Some((verb.to_ascii_lowercase(), rest.trim().to_string())),
        None => Some((trimmed.to_ascii_lowercase(), String::new())),
    }
}
