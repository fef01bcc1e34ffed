use std::collections::BTreeMap;

use crate::ascii::{AsciiRenderer, BannerRenderer};
use crate::command::CommandSpec;
use crate::data::{build_filesystem, Portfolio};
use crate::vfs::VirtualFileSystem;

pub const HOME: &str = "/home/portfolio";

/// Per-session interpreter state. Created at terminal mount, thrown away on
/// unmount; nothing here is persisted. Owned and mutated exclusively by the
/// dispatcher, one command at a time.
pub struct TerminalContext {
    pub vfs: VirtualFileSystem,
    pub portfolio: Portfolio,
    /// Always a directory that exists in the vfs; committed only by a
    /// successful `cd`.
    pub cwd: String,
    /// Raw submitted lines, append-only, in entry order.
    pub history: Vec<String>,
    /// Display lines, append-only except for `clear`.
    pub output: Vec<String>,
    /// True only while a command is in flight.
    pub is_loading: bool,
    pub theme: String,
    /// Visibility flags for host-owned widget panels (ai, games, ...).
    pub widgets: BTreeMap<String, bool>,
    /// Metadata for every registered command; `help` and the achievement
    /// computation read this instead of reaching into the registry.
    pub catalog: Vec<CommandSpec>,
    ascii: Box<dyn AsciiRenderer + Send + Sync>,
    rng_seed: u64,
}

impl TerminalContext {
    pub fn new() -> Self {
        Self::with_portfolio(Portfolio::sample())
    }

    /// The dataset is injected rather than read from a global so tests can
    /// run against fixture trees.
    pub fn with_portfolio(portfolio: Portfolio) -> Self {
        let vfs = build_filesystem(&portfolio);
        Self {
            vfs,
            portfolio,
            cwd: HOME.to_string(),
            history: Vec::new(),
            output: Vec::new(),
            is_loading: false,
            theme: "matrix".to_string(),
            widgets: BTreeMap::new(),
            catalog: crate::commands::catalog(),
            ascii: Box::new(BannerRenderer),
            rng_seed: chrono::Utc::now().timestamp_millis() as u64,
        }
    }

    pub fn set_renderer(&mut self, renderer: Box<dyn AsciiRenderer + Send + Sync>) {
        self.ascii = renderer;
    }

    pub fn renderer(&self) -> &(dyn AsciiRenderer + Send + Sync) {
        self.ascii.as_ref()
    }

    pub fn clear_output(&mut self) {
        self.output.clear();
    }

    pub fn widget_visible(&self, name: &str) -> bool {
        self.widgets.get(name).copied().unwrap_or(false)
    }

    /// Flip a widget flag, returning the new visibility.
    pub fn toggle_widget(&mut self, name: &str) -> bool {
        let flag = self.widgets.entry(name.to_string()).or_insert(false);
        *flag = !*flag;
        *flag
    }

    /// Seed for decorative randomness; advancing it keeps repeated `matrix`
    /// invocations visually distinct while staying reproducible in tests.
    pub fn next_seed(&mut self) -> u64 {
        let seed = self.rng_seed;
        self.rng_seed = self.rng_seed.wrapping_add(0x9e3779b97f4a7c15);
        seed
    }

    #[cfg(test)]
    pub fn set_seed(&mut self, seed: u64) {
        self.rng_seed = seed;
    }
}

impl Default for TerminalContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_context_starts_in_home() {
        let ctx = TerminalContext::new();
        assert_eq!(ctx.cwd, HOME);
        assert!(ctx.vfs.is_dir(&ctx.cwd));
        assert!(ctx.history.is_empty());
        assert!(ctx.output.is_empty());
        assert!(!ctx.is_loading);
    }

    #[test]
    fn widget_toggle_round_trips() {
        let mut ctx = TerminalContext::new();
        assert!(!ctx.widget_visible("games"));
        assert!(ctx.toggle_widget("games"));
        assert!(ctx.widget_visible("games"));
        assert!(!ctx.toggle_widget("games"));
    }

    #[test]
    fn seeds_advance_but_stay_reproducible() {
        let mut ctx = TerminalContext::new();
        ctx.set_seed(1);
        let a = ctx.next_seed();
        let b = ctx.next_seed();
        assert_ne!(a, b);
        ctx.set_seed(1);
        assert_eq!(ctx.next_seed(), a);
    }
}
