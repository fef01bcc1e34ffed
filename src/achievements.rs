//! Badge bookkeeping for the `achievements` widget.
//!
//! Unlocks are a pure function over the command history: nothing here keeps
//! incrementally mutated counters, so the badge set can never drift from
//! what the session actually did. The host persists whatever it wants via
//! the recording event sink.

use chrono::{DateTime, Utc};

use crate::command::{parse_line, CommandSpec};
use crate::events::{EventSink, TerminalEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Achievement {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

const FIRST_COMMAND: Achievement = Achievement {
    id: "first_command",
    name: "Hello, World",
    description: "Run your first command",
};
const HELP_SEEKER: Achievement = Achievement {
    id: "help_seeker",
    name: "Help Seeker",
    description: "Ask for help",
};
const CURIOUS_CAT: Achievement = Achievement {
    id: "curious_cat",
    name: "Curious Cat",
    description: "Find out who lives here",
};
const SKILL_CHECKER: Achievement = Achievement {
    id: "skill_checker",
    name: "Skill Checker",
    description: "Inspect the skill list",
};
const PROJECT_EXPLORER: Achievement = Achievement {
    id: "project_explorer",
    name: "Project Explorer",
    description: "Browse the projects",
};
const CONTACT_FINDER: Achievement = Achievement {
    id: "contact_finder",
    name: "Contact Finder",
    description: "Look up contact details",
};
const MATRIX_LOVER: Achievement = Achievement {
    id: "matrix_lover",
    name: "Matrix Lover",
    description: "Take the red pill",
};
const NAVIGATOR: Achievement = Achievement {
    id: "navigator",
    name: "Navigator",
    description: "Change directory five times",
};
const FILE_READER: Achievement = Achievement {
    id: "file_reader",
    name: "File Reader",
    description: "Read three files",
};
const COMMAND_MASTER: Achievement = Achievement {
    id: "command_master",
    name: "Command Master",
    description: "Use ten distinct commands",
};

pub const ALL: &[Achievement] = &[
    FIRST_COMMAND,
    HELP_SEEKER,
    CURIOUS_CAT,
    SKILL_CHECKER,
    PROJECT_EXPLORER,
    CONTACT_FINDER,
    MATRIX_LOVER,
    NAVIGATOR,
    FILE_READER,
    COMMAND_MASTER,
];

/// Compute the unlocked set from the raw history. Verbs are resolved through
/// the command catalog so aliases count toward their primary command.
pub fn unlocked(history: &[String], catalog: &[CommandSpec]) -> Vec<Achievement> {
    let verbs: Vec<String> = history
        .iter()
        .filter_map(|line| parse_line(line))
        .map(|(verb, _)| {
            catalog
                .iter()
                .find(|spec| spec.matches(&verb))
                .map(|spec| spec.name.to_string())
                .unwrap_or(verb)
        })
        .collect();

    let count = |name: &str| verbs.iter().filter(|v| *v == name).count();
    let used = |name: &str| count(name) > 0;
    let unique = {
        let mut names = verbs.clone();
        names.sort();
        names.dedup();
        names.len()
    };

    let mut out = Vec::new();
    if !verbs.is_empty() {
        out.push(FIRST_COMMAND);
    }
    if used("help") {
        out.push(HELP_SEEKER);
    }
    if used("whoami") {
        out.push(CURIOUS_CAT);
    }
    if used("skills") {
        out.push(SKILL_CHECKER);
    }
    if used("projects") {
        out.push(PROJECT_EXPLORER);
    }
    if used("contact") {
        out.push(CONTACT_FINDER);
    }
    if used("matrix") {
        out.push(MATRIX_LOVER);
    }
    if count("cd") >= 5 {
        out.push(NAVIGATOR);
    }
    if count("cat") >= 3 {
        out.push(FILE_READER);
    }
    if unique >= 10 {
        out.push(COMMAND_MASTER);
    }
    out
}

/// Fire-and-forget sink that timestamps every event for the host to persist
/// (or ignore). The interpreter never reads this back.
#[derive(Debug, Default)]
pub struct AchievementTracker {
    records: Vec<(DateTime<Utc>, TerminalEvent)>,
}

impl AchievementTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[(DateTime<Utc>, TerminalEvent)] {
        &self.records
    }

    pub fn error_count(&self) -> usize {
        self.records
            .iter()
            .filter(|(_, e)| matches!(e, TerminalEvent::CommandExecuted { is_error: true, .. }))
            .count()
    }
}

impl EventSink for AchievementTracker {
    fn on_event(&mut self, event: &TerminalEvent) {
        self.records.push((Utc::now(), event.clone()));
    }
}
