//! ASCII rendering collaborators: banner art, skill bars, tree views and the
//! matrix easter egg. The banner renderer sits behind a trait so a browser
//! host can swap in a FIGlet-backed implementation; the rest are plain
//! formatting helpers.

use thiserror::Error;

use crate::vfs::VfsNode;

pub const DEFAULT_FONT: &str = "shadow";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("unknown font: {0}")]
    UnknownFont(String),
    #[error("nothing to render")]
    EmptyInput,
}

/// Text + font name in, finished art out. Implementations must not block on
/// anything the dispatcher can't wait out; failures surface as a single
/// user-facing error line.
pub trait AsciiRenderer {
    fn render(&self, text: &str, font: &str) -> Result<String, RenderError>;
}

/// Built-in renderer: boxes the text in a border. Supported fonts are
/// `shadow` (double-line box with a drop shadow) and `plain` (ASCII box).
#[derive(Debug, Default, Clone, Copy)]
pub struct BannerRenderer;

impl AsciiRenderer for BannerRenderer {
    fn render(&self, text: &str, font: &str) -> Result<String, RenderError> {
        if text.trim().is_empty() {
            return Err(RenderError::EmptyInput);
        }
        match font {
            "shadow" => Ok(shadow_box(text)),
            "plain" => Ok(plain_box(text)),
            other => Err(RenderError::UnknownFont(other.to_string())),
        }
    }
}

fn shadow_box(text: &str) -> String {
    let width = text.chars().count() + 2;
    let top = format!("╔{}╗", "═".repeat(width));
    let mid = format!("║ {} ║", text);
    let bottom = format!("╚{}╝▒", "═".repeat(width));
    let shadow = format!(" {}▒", "▒".repeat(width + 1));
    format!("{}\n{}\n{}\n{}", top, mid, bottom, shadow)
}

fn plain_box(text: &str) -> String {
    let width = text.chars().count() + 2;
    format!(
        "+{line}+\n| {text} |\n+{line}+",
        line = "-".repeat(width),
        text = text
    )
}

/// `name  ████████░░  80%` - the bar is 20 cells wide.
pub fn skill_bar(name: &str, level: u8) -> String {
    const WIDTH: usize = 20;
    let level = level.min(100) as usize;
    let filled = level * WIDTH / 100;
    format!(
        "{:<15} {}{} {}%",
        name,
        "█".repeat(filled),
        "░".repeat(WIDTH - filled),
        level
    )
}

/// Connector-style rendering of a directory node, one line per entry.
pub fn render_tree(node: &VfsNode) -> String {
    let mut out = String::new();
    walk_tree(node, "", &mut out);
    out
}

fn walk_tree(node: &VfsNode, prefix: &str, out: &mut String) {
    let VfsNode::Directory { children } = node else {
        return;
    };
    let last = children.len().saturating_sub(1);
    for (idx, (name, child)) in children.iter().enumerate() {
        let connector = if idx == last { "└── " } else { "├── " };
        let label = if child.is_dir() { format!("{}/", name) } else { name.clone() };
        out.push_str(prefix);
        out.push_str(connector);
        out.push_str(&label);
        out.push('\n');
        let next_prefix = format!("{}{}", prefix, if idx == last { "    " } else { "│   " });
        walk_tree(child, &next_prefix, out);
    }
}

/// 80x20 rain of digits and katakana. Seeded so tests can pin the output.
pub fn matrix_effect(seed: u64) -> String {
    const CHARS: &[char] = &[
        '0', '1', 'ア', 'イ', 'ウ', 'エ', 'オ', 'カ', 'キ', 'ク', 'ケ', 'コ', 'サ', 'シ', 'ス',
        'セ', 'ソ', 'タ', 'チ', 'ツ', 'テ', 'ト', 'ナ', 'ニ', 'ヌ', 'ネ', 'ノ', 'ハ', 'ヒ', 'フ',
    ];
    const WIDTH: usize = 80;
    const HEIGHT: usize = 20;

    // small multiplicative congruential generator, good enough for rain
    let mut state = seed | 1;
    let mut next = move || {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (state >> 33) as usize
    };

    let mut out = String::with_capacity((WIDTH + 1) * HEIGHT);
    for _ in 0..HEIGHT {
        for _ in 0..WIDTH {
            let roll = next();
            if roll % 100 < 15 {
                out.push(CHARS[roll % CHARS.len()]);
            } else {
                out.push(' ');
            }
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vfs::VfsNode;

    #[test]
    fn banner_renders_known_fonts_and_rejects_unknown() {
        let renderer = BannerRenderer;
        let art = renderer.render("hello", DEFAULT_FONT).unwrap();
        assert!(art.contains("║ hello ║"));
        assert!(renderer.render("hello", "plain").unwrap().contains("| hello |"));
        assert_eq!(
            renderer.render("hello", "gothic"),
            Err(RenderError::UnknownFont("gothic".into()))
        );
        assert_eq!(renderer.render("  ", "shadow"), Err(RenderError::EmptyInput));
    }

    #[test]
    fn skill_bar_scales_with_level() {
        let bar = skill_bar("Rust", 50);
        assert_eq!(bar.matches('█').count(), 10);
        assert_eq!(bar.matches('░').count(), 10);
        assert!(bar.ends_with("50%"));
        assert_eq!(skill_bar("X", 200).matches('█').count(), 20);
    }

    #[test]
    fn tree_uses_connectors_and_marks_directories() {
        let root = VfsNode::dir([
            ("docs", VfsNode::dir([("a.txt", VfsNode::file(""))])),
            ("z.txt", VfsNode::file("")),
        ]);
        let tree = render_tree(&root);
        assert_eq!(tree, "├── docs/\n│   └── a.txt\n└── z.txt\n");
    }

    #[test]
    fn matrix_effect_is_deterministic_per_seed() {
        let a = matrix_effect(42);
        let b = matrix_effect(42);
        assert_eq!(a, b);
        assert_eq!(a.lines().count(), 20);
        assert!(a.lines().all(|l| l.chars().count() == 80));
        assert_ne!(a, matrix_effect(7));
    }
}
