use thiserror::Error;

/// Everything a handler can fail with. None of these are fatal: the
/// dispatcher renders the `Display` string as a normal output line and
/// flags the command as an error outcome for the event bus.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Command not found: {0}. Type 'help' for available commands.")]
    UnknownCommand(String),

    #[error("{command}: missing {what} argument")]
    MissingArgument { command: &'static str, what: &'static str },

    #[error("cd: {0}: No such directory")]
    DirectoryNotFound(String),

    #[error("cat: {0}: No such file or directory")]
    FileNotFound(String),

    /// A filter/id on `skills`/`projects` matched nothing. The message is
    /// command-specific so it is carried whole.
    #[error("{0}")]
    FilterNotFound(String),

    /// An external collaborator call failed. The underlying cause is logged
    /// but never shown to the user.
    #[error("{command}: error generating {what}")]
    Collaborator { command: &'static str, what: &'static str },
}
