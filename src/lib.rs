//! Terminal-style portfolio engine.
//!
//! The `Terminal` owns the whole interpreter: a static virtual filesystem,
//! a command registry, per-session state, and an event bus for collaborator
//! notifications. Hosts feed it raw input lines and render the output buffer;
//! everything visual stays on their side of the fence.

pub mod achievements;
pub mod ascii;
pub mod command;
pub mod commands;
pub mod context;
pub mod data;
pub mod error;
pub mod events;
pub mod path;
pub mod vfs;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

use command::{parse_line, CommandRegistry};
use context::TerminalContext;
use error::CommandError;
use events::{EventBus, EventSink, TerminalEvent};

pub struct Terminal {
    ctx: TerminalContext,
    registry: CommandRegistry,
    bus: EventBus,
}

impl Terminal {
    pub fn new() -> Self {
        Self::with_context(TerminalContext::new())
    }

    /// Build around a caller-supplied context (fixture data, fake renderer).
    pub fn with_context(ctx: TerminalContext) -> Self {
        Self { ctx, registry: commands::default_registry(), bus: EventBus::new() }
    }

    pub fn register_sink(&mut self, sink: Box<dyn EventSink>) {
        self.bus.register(sink);
    }

    pub fn context(&self) -> &TerminalContext {
        &self.ctx
    }

    pub fn context_mut(&mut self) -> &mut TerminalContext {
        &mut self.ctx
    }

    pub fn output(&self) -> &[String] {
        &self.ctx.output
    }

    pub fn history(&self) -> &[String] {
        &self.ctx.history
    }

    pub fn current_path(&self) -> &str {
        &self.ctx.cwd
    }

    pub fn is_loading(&self) -> bool {
        self.ctx.is_loading
    }

    /// Push the welcome banner onto the output buffer. Hosts call this once
    /// after mounting.
    pub fn greet(&mut self) {
        let name = self.ctx.portfolio.personal.name.clone();
        let title = self.ctx.portfolio.personal.title.clone();
        let art = self
            .ctx
            .renderer()
            .render(&name, ascii::DEFAULT_FONT)
            .unwrap_or_else(|_| name.clone());
        self.ctx.output.extend([
            art,
            String::new(),
            format!("Welcome to {}'s ASCII Portfolio!", name),
            title,
            String::new(),
            "Type \"help\" to see available commands.".to_string(),
            "Use \"ls\" to explore the file system.".to_string(),
            "Type \"theme <name>\" to change themes (matrix, amber, blue, classic)".to_string(),
            String::new(),
            "═".repeat(80),
        ]);
    }

    /// Run one submitted line to completion. Empty/whitespace-only input is
    /// ignored without any state change; everything else lands in history,
    /// is echoed with the prompt, and is routed to its handler. Handler
    /// failures come back as normal output lines; the terminal is always
    /// idle again when this returns.
    #[tracing::instrument(level = "debug", skip(self), fields(input_len = raw.len()))]
    pub fn execute(&mut self, raw: &str) {
        let Some((verb, arg)) = parse_line(raw) else {
            return;
        };
        self.ctx.history.push(raw.to_string());
        self.ctx.output.push(format!("{} $ {}", self.ctx.cwd, raw));
        self.ctx.is_loading = true;

        let mut events = Vec::new();
        let is_error = match self.registry.dispatch(&verb, &arg, &mut self.ctx) {
            None => {
                tracing::warn!(%verb, "unknown command");
                self.ctx
                    .output
                    .push(CommandError::UnknownCommand(verb.clone()).to_string());
                true
            }
            Some(Ok(out)) => {
                self.ctx.output.extend(out.lines);
                events = out.events;
                false
            }
            Some(Err(err)) => {
                tracing::debug!(%verb, %err, "command failed");
                self.ctx.output.push(err.to_string());
                true
            }
        };

        self.ctx.is_loading = false;
        for event in events {
            self.bus.emit(event);
        }
        self.bus.emit(TerminalEvent::CommandExecuted { verb, is_error });
    }

    /// Tab completion over command names and aliases. Returns the rewritten
    /// input on a unique match (primary name plus a trailing space), or the
    /// input unchanged otherwise. Never touches output or cwd.
    pub fn complete(&mut self, input: &str) -> String {
        match self.registry.complete(input) {
            Some(done) => {
                self.bus.emit(TerminalEvent::TabCompletion {
                    completed: done.trim_end().to_string(),
                });
                done
            }
            None => input.to_string(),
        }
    }

    /// Most recent history entry, for up-arrow recall.
    pub fn recall_last(&self) -> Option<&str> {
        self.ctx.history.last().map(String::as_str)
    }
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new()
    }
}
