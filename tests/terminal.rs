//! End-to-end interpreter scenarios driven through the public `Terminal` API.

use termfolio::achievements;
use termfolio::commands::catalog;
use termfolio::Terminal;

#[test]
fn ls_from_home_lists_the_portfolio() {
    let mut term = Terminal::new();
    term.execute("ls");
    let output = term.output();
    assert!(output.contains(&"projects/".to_string()));
    assert!(output.contains(&"skills/".to_string()));
    assert!(output.contains(&"contact.txt".to_string()));
    assert!(output.contains(&"about.txt".to_string()));
}

#[test]
fn cd_then_pwd_reports_the_new_directory() {
    let mut term = Terminal::new();
    term.execute("cd projects");
    term.execute("pwd");
    assert_eq!(term.output().last().unwrap(), "/home/portfolio/projects");
}

#[test]
fn cat_of_a_missing_file_reports_and_keeps_cwd() {
    let mut term = Terminal::new();
    term.execute("cat missing.txt");
    assert_eq!(
        term.output().last().unwrap(),
        "cat: missing.txt: No such file or directory"
    );
    assert_eq!(term.current_path(), "/home/portfolio");
}

#[test]
fn unknown_command_points_at_help() {
    let mut term = Terminal::new();
    term.execute("unknowncmd");
    assert_eq!(
        term.output().last().unwrap(),
        "Command not found: unknowncmd. Type 'help' for available commands."
    );
}

#[test]
fn invalid_theme_lists_the_valid_names() {
    let mut term = Terminal::new();
    let before = term.context().theme.clone();
    term.execute("theme neon");
    let output = term.output();
    assert!(output.contains(&"Available themes:".to_string()));
    for name in ["matrix", "amber", "blue", "classic"] {
        assert!(output.contains(&format!("• {}", name)));
    }
    assert_eq!(term.context().theme, before);
}

#[test]
fn help_cat_shows_usage_and_aliases() {
    let mut term = Terminal::new();
    term.execute("help cat");
    let output = term.output();
    assert!(output.contains(&"Usage: cat <filename>".to_string()));
    assert!(output.contains(&"Aliases: view, show".to_string()));
}

#[test]
fn cd_roundtrip_restores_the_previous_directory() {
    let mut term = Terminal::new();
    let start = term.current_path().to_string();
    term.execute("cd skills");
    assert_ne!(term.current_path(), start);
    term.execute("cd ..");
    assert_eq!(term.current_path(), start);
}

#[test]
fn clear_empties_output_but_not_history_or_cwd() {
    let mut term = Terminal::new();
    term.execute("cd projects");
    term.execute("ls");
    assert!(!term.output().is_empty());
    term.execute("clear");
    assert!(term.output().is_empty());
    assert_eq!(term.history().len(), 3);
    assert_eq!(term.current_path(), "/home/portfolio/projects");
}

#[test]
fn repeated_pwd_is_idempotent() {
    let mut term = Terminal::new();
    term.execute("pwd");
    let path = term.current_path().to_string();
    let per_call = term.output().len();
    term.execute("pwd");
    term.execute("pwd");
    assert_eq!(term.current_path(), path);
    // echo plus one result line per call, nothing else accumulates
    assert_eq!(term.output().len(), per_call * 3);
}

#[test]
fn deep_navigation_and_cat_read_project_files() {
    let mut term = Terminal::new();
    term.execute("cd projects/ascii-portfolio");
    term.execute("cat tech-stack.txt");
    assert!(term.output().last().unwrap().contains("Rust"));
    term.execute("cat features.txt");
    assert!(term
        .output()
        .iter()
        .any(|l| l.contains("tab completion")));
}

#[test]
fn is_loading_is_false_between_commands() {
    let mut term = Terminal::new();
    for line in ["ls", "cat resume.txt", "bogus", "matrix"] {
        term.execute(line);
        assert!(!term.is_loading());
    }
}

#[test]
fn a_session_accumulates_achievements() {
    let mut term = Terminal::new();
    for line in ["help", "whoami", "skills", "projects", "contact", "matrix"] {
        term.execute(line);
    }
    let earned = achievements::unlocked(term.history(), &catalog());
    let ids: Vec<_> = earned.iter().map(|a| a.id).collect();
    for id in [
        "first_command",
        "help_seeker",
        "curious_cat",
        "skill_checker",
        "project_explorer",
        "contact_finder",
        "matrix_lover",
    ] {
        assert!(ids.contains(&id), "missing badge {}", id);
    }
}

#[test]
fn widget_toggles_confirm_and_track_visibility() {
    let mut term = Terminal::new();
    term.execute("games");
    assert!(term.context().widget_visible("games"));
    assert!(term.output().last().unwrap().contains("opened"));
    term.execute("games");
    assert!(!term.context().widget_visible("games"));
    assert!(term.output().last().unwrap().contains("closed"));
}

#[test]
fn ascii_command_renders_and_fails_gracefully() {
    let mut term = Terminal::new();
    term.execute("ascii hello");
    assert!(term.output().iter().any(|l| l.contains("hello")));
    term.execute("ascii hello gothic");
    assert_eq!(term.output().last().unwrap(), "ascii: error generating art");
    term.execute("ascii");
    assert_eq!(term.output().last().unwrap(), "ascii: missing text argument");
}

#[test]
fn tree_renders_the_static_structure() {
    let mut term = Terminal::new();
    term.execute("tree");
    let tree = term.output().last().unwrap();
    assert!(tree.contains("portfolio/"));
    assert!(tree.contains("resume.txt"));
}
