use std::io;
use thiserror::Error;

/// Failures surfaced to the user. The `Display` text of each variant is the
/// exact line printed in the terminal dialogue.
#[derive(Error, Debug)]
pub enum NoteError {
    #[error("Error creating/accessing folder: {0}")]
    Folder(#[source] io::Error),

    #[error("Error saving note: {0}")]
    Save(#[source] io::Error),

    #[error("Error reading note: {0}")]
    Read(#[source] io::Error),

    #[error("Error editing note: {0}")]
    Edit(#[source] io::Error),

    #[error("Error deleting note: {0}")]
    Delete(#[source] io::Error),

    #[error("Error accessing notes: {0}")]
    List(#[source] io::Error),

    #[error("Console error: {0}")]
    Console(#[from] io::Error),

    #[error("Input closed")]
    InputClosed,
}

impl NoteError {
    /// Errors that end the session instead of returning to a menu.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            NoteError::Folder(_) | NoteError::Console(_) | NoteError::InputClosed
        )
    }
}

pub type Result<T> = std::result::Result<T, NoteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_failing_operation() {
        let err = NoteError::Delete(io::Error::other("busy"));
        assert_eq!(err.to_string(), "Error deleting note: busy");
        let err = NoteError::List(io::Error::other("gone"));
        assert_eq!(err.to_string(), "Error accessing notes: gone");
    }

    #[test]
    fn only_folder_and_console_errors_are_fatal() {
        assert!(NoteError::Folder(io::Error::other("x")).is_fatal());
        assert!(NoteError::InputClosed.is_fatal());
        assert!(!NoteError::Save(io::Error::other("x")).is_fatal());
        assert!(!NoteError::Read(io::Error::other("x")).is_fatal());
    }
}
