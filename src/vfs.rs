use std::collections::BTreeMap;

/// One node of the virtual tree. Files hold pre-rendered text; directories
/// hold uniquely-named children. There is no mutating API: the tree is built
/// once at session start and only read after that.
#[derive(Debug, Clone, PartialEq)]
pub enum VfsNode {
    File { content: String },
    Directory { children: BTreeMap<String, VfsNode> },
}

impl VfsNode {
    pub fn file(content: impl Into<String>) -> Self {
        Self::File { content: content.into() }
    }

    pub fn dir<S: Into<String>>(entries: impl IntoIterator<Item = (S, VfsNode)>) -> Self {
        Self::Directory {
            children: entries
                .into_iter()
                .map(|(name, node)| (name.into(), node))
                .collect(),
        }
    }

    pub fn empty_dir() -> Self {
        Self::Directory { children: BTreeMap::new() }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, Self::Directory { .. })
    }
}

#[derive(Debug, Clone)]
pub struct VirtualFileSystem {
    root: VfsNode,
}

impl VirtualFileSystem {
    /// Takes ownership of a pre-built tree. The root must be a directory.
    pub fn new(root: VfsNode) -> Self {
        debug_assert!(root.is_dir(), "vfs root must be a directory");
        Self { root }
    }

    pub fn root(&self) -> &VfsNode {
        &self.root
    }

    // walk the tree one segment at a time - a File mid-path ends the walk
    pub fn resolve(&self, path: &str) -> Option<&VfsNode> {
        let mut node = &self.root;
        for comp in path.split('/').filter(|c| !c.is_empty()) {
            match node {
                VfsNode::Directory { children } => {
                    node = children.get(comp)?;
                }
                VfsNode::File { .. } => return None,
            }
        }
        Some(node)
    }

    pub fn is_dir(&self, path: &str) -> bool {
        matches!(self.resolve(path), Some(VfsNode::Directory { .. }))
    }

    /// Child names in sorted order, directories marked with a trailing `/`.
    /// `None` when the path is missing or names a file.
    pub fn list(&self, path: &str) -> Option<Vec<String>> {
        match self.resolve(path)? {
            VfsNode::Directory { children } => Some(
                children
                    .iter()
                    .map(|(name, node)| match node {
                        VfsNode::Directory { .. } => format!("{}/", name),
                        VfsNode::File { .. } => name.clone(),
                    })
                    .collect(),
            ),
            VfsNode::File { .. } => None,
        }
    }

    pub fn read_file(&self, path: &str) -> Option<&str> {
        match self.resolve(path)? {
            VfsNode::File { content } => Some(content),
            VfsNode::Directory { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> VirtualFileSystem {
        VirtualFileSystem::new(VfsNode::dir([
            (
                "home",
                VfsNode::dir([(
                    "notes",
                    VfsNode::dir([
                        ("a.txt", VfsNode::file("alpha\nbeta")),
                        ("sub", VfsNode::empty_dir()),
                    ]),
                )]),
            ),
            ("readme.txt", VfsNode::file("hi")),
        ]))
    }

    #[test]
    fn resolves_root_and_nested_paths() {
        let fs = fixture();
        assert!(fs.resolve("/").is_some());
        assert!(fs.is_dir("/"));
        assert!(fs.is_dir("/home/notes"));
        assert!(fs.resolve("/home/notes/a.txt").is_some());
        assert!(fs.resolve("/home/missing").is_none());
    }

    #[test]
    fn file_mid_path_terminates_resolution() {
        let fs = fixture();
        assert!(fs.resolve("/readme.txt/deeper").is_none());
    }

    #[test]
    fn list_marks_directories() {
        let fs = fixture();
        let entries = fs.list("/home/notes").unwrap();
        assert_eq!(entries, vec!["a.txt".to_string(), "sub/".to_string()]);
        assert!(fs.list("/readme.txt").is_none());
    }

    #[test]
    fn read_file_rejects_directories() {
        let fs = fixture();
        assert_eq!(fs.read_file("/home/notes/a.txt"), Some("alpha\nbeta"));
        assert!(fs.read_file("/home/notes").is_none());
        assert!(fs.read_file("/nope").is_none());
    }
}
