use chrono::{DateTime, Local};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::{NoteError, Result};

pub const NOTE_EXT: &str = ".txt";
pub const TIME_FMT: &str = "%d%b%y %H:%M %:z";

/// A note file directly under the notes root.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Note {
    pub path: PathBuf,
}

impl Note {
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Last-modified time formatted for display, when the filesystem has one.
    pub fn modified(&self) -> Option<String> {
        let mtime = fs::metadata(&self.path).ok()?.modified().ok()?;
        let local: DateTime<Local> = mtime.into();
        Some(local.format(TIME_FMT).to_string())
    }
}

/// Normalise user input into a note file name. Returns `None` for blank
/// input; appends `.txt` unless some case variant of it is already there.
pub fn note_file_name(input: &str) -> Option<String> {
    let name = input.trim();
    if name.is_empty() {
        return None;
    }
    if has_note_ext(name) {
        Some(name.to_string())
    } else {
        Some(format!("{name}{NOTE_EXT}"))
    }
}

pub fn has_note_ext(name: &str) -> bool {
    name.to_lowercase().ends_with(NOTE_EXT)
}

pub fn has_path_separator(name: &str) -> bool {
    name.contains('/') || name.contains('\\')
}

/// The directory holding every note, fixed for the lifetime of a session.
#[derive(Debug, Clone)]
pub struct NotesRoot {
    dir: PathBuf,
}

/// Outcome of establishing the notes root.
#[derive(Debug)]
pub struct Opened {
    pub root: NotesRoot,
    pub created: bool,
}

impl NotesRoot {
    /// Use `input` as the notes directory, creating it (and parents) when
    /// missing. An empty input means the current directory.
    pub fn open(input: &str) -> Result<Opened> {
        let raw = input.trim();
        let raw = if raw.is_empty() { "." } else { raw };
        let dir = std::path::absolute(raw).map_err(NoteError::Folder)?;
        let created = ensure_dir(&dir).map_err(NoteError::Folder)?;
        info!(dir = %dir.display(), created, "notes folder ready");
        Ok(Opened { root: NotesRoot { dir }, created })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn note(&self, file_name: &str) -> Note {
        Note { path: self.dir.join(file_name) }
    }

    /// Every note file under the root, sorted by full path. Read fresh on
    /// each call.
    pub fn list(&self) -> Result<Vec<Note>> {
        let mut notes = list_note_files(&self.dir).map_err(NoteError::List)?;
        notes.sort();
        debug!(count = notes.len(), "listed notes");
        Ok(notes)
    }
}

pub fn ensure_dir(path: &Path) -> io::Result<bool> {
    if path.exists() {
        if !path.is_dir() {
            return Err(io::Error::other(format!(
                "{} is not a directory",
                path.display()
            )));
        }
        // Fail early on an unreadable directory.
        fs::read_dir(path)?;
        return Ok(false);
    }
    debug!(dir = %path.display(), "creating notes folder");
    fs::create_dir_all(path)?;
    Ok(true)
}

fn list_note_files(dir: &Path) -> io::Result<Vec<Note>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        // `Path::is_file` follows symlinks, so linked notes are listed too.
        if entry.path().is_file()
            && has_note_ext(&entry.file_name().to_string_lossy())
        {
            files.push(Note { path: entry.path() });
        }
    }
    Ok(files)
}

pub fn read_note(note: &Note) -> io::Result<String> {
    debug!(path = %note.path.display(), "reading note");
    fs::read_to_string(&note.path)
}

/// Replace the whole content of a note, creating the file if needed.
pub fn write_note(note: &Note, body: &str) -> io::Result<()> {
    debug!(path = %note.path.display(), bytes = body.len(), "writing note");
    fs::write(&note.path, body)
}

pub fn delete_note(note: &Note) -> io::Result<()> {
    debug!(path = %note.path.display(), "deleting note");
    fs::remove_file(&note.path)
}
