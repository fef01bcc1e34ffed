//! One module per builtin, plus the static command catalog. Registration
//! order here is the order `help` lists commands in.

pub mod ascii;
pub mod cat;
pub mod cd;
pub mod clear;
pub mod contact;
pub mod experience;
pub mod help;
pub mod ls;
pub mod matrix;
pub mod projects;
pub mod pwd;
pub mod skills;
pub mod theme;
pub mod tree;
pub mod whoami;
pub mod widget;

use crate::command::{CommandRegistry, CommandSpec};
use widget::WidgetCommand;

const fn spec(
    name: &'static str,
    description: &'static str,
    usage: &'static str,
    aliases: &'static [&'static str],
) -> CommandSpec {
    CommandSpec { name, description, usage, aliases }
}

const HELP: CommandSpec = spec("help", "Show available commands", "help [command]", &["h", "?"]);
const LS: CommandSpec = spec("ls", "List directory contents", "ls [path]", &["list", "dir"]);
const CD: CommandSpec = spec("cd", "Change directory", "cd <path>", &["chdir"]);
const CAT: CommandSpec = spec("cat", "Display file contents", "cat <filename>", &["view", "show"]);
const PWD: CommandSpec = spec("pwd", "Print working directory", "pwd", &["path"]);
const WHOAMI: CommandSpec =
    spec("whoami", "Display user information", "whoami", &["user", "info"]);
const SKILLS: CommandSpec =
    spec("skills", "Show technical skills", "skills [category]", &["tech", "stack"]);
const PROJECTS: CommandSpec = spec(
    "projects",
    "List all projects",
    "projects [project-id]",
    &["work", "portfolio"],
);
const EXPERIENCE: CommandSpec =
    spec("experience", "Show work experience", "experience", &["career", "jobs"]);
const CONTACT: CommandSpec =
    spec("contact", "Display contact information", "contact", &["reach", "connect"]);
const CLEAR: CommandSpec = spec("clear", "Clear terminal screen", "clear", &["cls", "clean"]);
const THEME: CommandSpec =
    spec("theme", "Change terminal theme", "theme <theme-name>", &["color", "style"]);
const MATRIX: CommandSpec =
    spec("matrix", "Show matrix effect (Easter egg)", "matrix", &["hack", "neo"]);
const ASCII: CommandSpec =
    spec("ascii", "Generate ASCII art", "ascii <text> [font]", &["art", "figlet"]);
const TREE: CommandSpec = spec("tree", "Show the portfolio file tree", "tree", &[]);
const AI: CommandSpec = spec("ai", "Toggle the AI assistant panel", "ai", &[]);
const CODE: CommandSpec = spec("code", "Toggle the code sandbox", "code", &[]);
const GAMES: CommandSpec = spec("games", "Toggle the mini-games arcade", "games", &[]);
const STUDIO: CommandSpec = spec("studio", "Toggle the ASCII art studio", "studio", &[]);
const SOUND: CommandSpec = spec("sound", "Toggle sound effects", "sound", &[]);
const ANALYTICS: CommandSpec = spec("analytics", "Toggle the analytics overlay", "analytics", &[]);
const ACHIEVEMENTS: CommandSpec =
    spec("achievements", "Toggle the achievements panel", "achievements", &[]);
const TUTORIAL: CommandSpec = spec("tutorial", "Toggle the guided tutorial", "tutorial", &[]);
const DEBUG: CommandSpec = spec("debug", "Toggle the debug console", "debug", &[]);

const ALL: &[CommandSpec] = &[
    HELP,
    LS,
    CD,
    CAT,
    PWD,
    WHOAMI,
    SKILLS,
    PROJECTS,
    EXPERIENCE,
    CONTACT,
    CLEAR,
    THEME,
    MATRIX,
    ASCII,
    TREE,
    AI,
    CODE,
    GAMES,
    STUDIO,
    SOUND,
    ANALYTICS,
    ACHIEVEMENTS,
    TUTORIAL,
    DEBUG,
];

/// Metadata for every builtin, in help-listing order.
pub fn catalog() -> Vec<CommandSpec> {
    ALL.to_vec()
}

pub fn default_registry() -> CommandRegistry {
    let mut reg = CommandRegistry::new();
    reg.register(HELP, Box::new(help::HelpCommand));
    reg.register(LS, Box::new(ls::LsCommand));
    reg.register(CD, Box::new(cd::CdCommand));
    reg.register(CAT, Box::new(cat::CatCommand));
    reg.register(PWD, Box::new(pwd::PwdCommand));
    reg.register(WHOAMI, Box::new(whoami::WhoamiCommand));
    reg.register(SKILLS, Box::new(skills::SkillsCommand));
    reg.register(PROJECTS, Box::new(projects::ProjectsCommand));
    reg.register(EXPERIENCE, Box::new(experience::ExperienceCommand));
    reg.register(CONTACT, Box::new(contact::ContactCommand));
    reg.register(CLEAR, Box::new(clear::ClearCommand));
    reg.register(THEME, Box::new(theme::ThemeCommand));
    reg.register(MATRIX, Box::new(matrix::MatrixCommand));
    reg.register(ASCII, Box::new(ascii::AsciiCommand));
    reg.register(TREE, Box::new(tree::TreeCommand));
    reg.register(AI, Box::new(WidgetCommand::new("ai", "AI assistant")));
    reg.register(CODE, Box::new(WidgetCommand::new("code", "Code sandbox")));
    reg.register(GAMES, Box::new(WidgetCommand::new("games", "Mini-games arcade")));
    reg.register(STUDIO, Box::new(WidgetCommand::new("studio", "ASCII art studio")));
    reg.register(SOUND, Box::new(WidgetCommand::new("sound", "Sound effects")));
    reg.register(ANALYTICS, Box::new(WidgetCommand::new("analytics", "Analytics overlay")));
    reg.register(ACHIEVEMENTS, Box::new(widget::AchievementsCommand));
    reg.register(TUTORIAL, Box::new(WidgetCommand::new("tutorial", "Guided tutorial")));
    reg.register(DEBUG, Box::new(WidgetCommand::new("debug", "Debug console")));
    reg
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_matches_registry() {
        let reg = default_registry();
        let from_registry: Vec<_> = reg.all().map(|s| s.name).collect();
        let from_catalog: Vec<_> = catalog().iter().map(|s| s.name).collect();
        assert_eq!(from_registry, from_catalog);
    }

    #[test]
    fn names_and_aliases_are_globally_unique() {
        let mut tokens: Vec<&str> = Vec::new();
        for spec in ALL {
            tokens.push(spec.name);
            tokens.extend(spec.aliases);
        }
        let mut deduped = tokens.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(tokens.len(), deduped.len(), "duplicate command token");
    }
}
