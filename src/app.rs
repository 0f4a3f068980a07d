//! The interactive session: startup folder prompt, the three menu loops and
//! the create/view/edit/delete operations they dispatch to.

use std::io::{self, BufRead, Write};
use tracing::{error, warn};

use crate::console::Console;
use crate::error::{NoteError, Result};
use crate::formatting::FormatContext;
use crate::menu::{Choice, ListAction, MainAction, ManageAction, parse_choice};
use crate::note::{
    Note, NotesRoot, delete_note, has_path_separator, note_file_name, read_note,
    write_note,
};
use crate::paging::Page;

const SELECT_PROMPT: &str = "Select an option: ";
const NOT_A_NUMBER: &str = "Please enter a valid number.";
const INVALID_OPTION: &str = "Invalid option. Please try again.";

/// Ask for the notes folder and make sure it exists. Failure is printed and
/// returned; the caller ends the process.
pub fn open_root<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    fmt: &FormatContext,
) -> Result<NotesRoot> {
    console.say(&fmt.header("=== Welcome to the Notes Application ==="))?;
    console.prompt("Enter the folder location for notes: ")?;
    // No answer at all is a folder failure, not a clean exit.
    let opened = console
        .read_line()
        .and_then(|input| NotesRoot::open(&input))
        .map_err(|err| match err {
            NoteError::InputClosed => NoteError::Folder(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "no folder location given",
            )),
            other => other,
        });
    match opened {
        Ok(opened) => {
            let shown = opened.root.dir().display().to_string();
            if opened.created {
                console.say(&fmt.success(&format!("Folder created at: {shown}")))?;
            }
            console.say(&format!("Notes folder: {shown}"))?;
            Ok(opened.root)
        }
        Err(err) => {
            error!(error = %err, "cannot use notes folder");
            console.say(&fmt.error(&err.to_string()))?;
            Err(err)
        }
    }
}

pub struct App<'c, R, W> {
    root: NotesRoot,
    console: &'c mut Console<R, W>,
    fmt: FormatContext,
}

impl<'c, R: BufRead, W: Write> App<'c, R, W> {
    pub fn new(
        root: NotesRoot,
        console: &'c mut Console<R, W>,
        fmt: FormatContext,
    ) -> Self {
        Self { root, console, fmt }
    }

    fn header(&mut self, text: &str) -> Result<()> {
        let line = self.fmt.header(text);
        self.console.say("")?;
        self.console.say(&line)
    }

    fn success(&mut self, text: &str) -> Result<()> {
        let line = self.fmt.success(text);
        self.console.say(&line)
    }

    fn problem(&mut self, text: &str) -> Result<()> {
        let line = self.fmt.error(text);
        self.console.say(&line)
    }

    /// Print a recoverable failure and carry on. Fatal errors propagate.
    fn report(&mut self, err: NoteError) -> Result<()> {
        if err.is_fatal() {
            return Err(err);
        }
        warn!(error = %err, "operation failed");
        self.problem(&err.to_string())
    }

    fn read_choice<T>(&mut self, map: impl FnOnce(i32) -> T) -> Result<Choice<T>> {
        self.console.prompt(SELECT_PROMPT)?;
        let line = self.console.read_line()?;
        Ok(parse_choice(&line, map))
    }

    /// Top-level loop. Returns when the user picks Exit.
    pub fn main_menu(&mut self) -> Result<()> {
        loop {
            self.header("=== MAIN MENU ===")?;
            self.console.say("1. Create new note")?;
            self.console.say("2. View notes list")?;
            self.console.say("3. Exit")?;

            match self.read_choice(MainAction::from_number)? {
                Choice::Pick(MainAction::Create) => self.create_note()?,
                Choice::Pick(MainAction::List) => self.list_notes()?,
                Choice::Pick(MainAction::Exit) => {
                    self.console.say("Goodbye!")?;
                    return Ok(());
                }
                Choice::Pick(MainAction::Invalid) => self.problem(INVALID_OPTION)?,
                Choice::NotANumber => self.problem(NOT_A_NUMBER)?,
            }
        }
    }

    fn create_note(&mut self) -> Result<()> {
        self.header("=== CREATE NEW NOTE ===")?;
        self.console.say("Enter file name (without .txt extension): ")?;
        let input = self.console.read_line()?;

        let Some(name) = note_file_name(&input) else {
            return self.problem("Filename cannot be empty.");
        };
        if has_path_separator(&name) {
            return self.problem("Filename cannot contain path separators.");
        }

        let note = self.root.note(&name);
        if note.path.exists()
            && !self.console.confirm(
                "A note with this name already exists. Overwrite? (y/n): ",
            )?
        {
            return self.console.say("Note not overwritten.");
        }

        self.console
            .say("Enter note content (press Enter on an empty line to finish):")?;
        let body = self.console.read_body()?;
        match write_note(&note, &body) {
            Ok(()) => self.success(&format!("Note saved successfully: {name}")),
            Err(e) => self.report(NoteError::Save(e)),
        }
    }

    /// Fresh sorted listing; a listing failure is reported and treated as
    /// an empty collection.
    fn fetch_notes(&mut self) -> Result<Vec<Note>> {
        match self.root.list() {
            Ok(notes) => Ok(notes),
            Err(err) => {
                self.report(err)?;
                Ok(Vec::new())
            }
        }
    }

    fn list_notes(&mut self) -> Result<()> {
        let mut current = 0;
        loop {
            let notes = self.fetch_notes()?;
            if notes.is_empty() {
                return self.console.say("No notes found.");
            }

            // The page index survives deletions, so it may now point past
            // the end; that page renders as empty until the user moves back.
            let page = Page::new(current, notes.len());
            self.render_page(&notes, page)?;
            self.console.say("")?;
            self.console.say("1-5: Select note to view/edit/delete")?;
            self.console.say("6: Next page")?;
            self.console.say("7: Previous page")?;
            self.console.say("8: Back to main menu")?;

            match self.read_choice(ListAction::from_number)? {
                Choice::Pick(ListAction::Select(slot)) => match page.slot(slot) {
                    Some(idx) => self.manage_note(&notes[idx])?,
                    None => self.problem("Invalid note selection.")?,
                },
                Choice::Pick(ListAction::Next) => {
                    if page.has_next() {
                        current += 1;
                    } else {
                        self.console.say("No more pages.")?;
                    }
                }
                Choice::Pick(ListAction::Prev) => {
                    if page.has_prev() {
                        current -= 1;
                    } else {
                        self.console.say("Already at the first page.")?;
                    }
                }
                Choice::Pick(ListAction::Back) => return Ok(()),
                Choice::Pick(ListAction::Invalid) => self.problem(INVALID_OPTION)?,
                Choice::NotANumber => self.problem(NOT_A_NUMBER)?,
            }
        }
    }

    fn render_page(&mut self, notes: &[Note], page: Page) -> Result<()> {
        self.header(&format!("=== NOTES LIST (Page {}) ===", page.number()))?;
        if page.is_past_end() {
            return self.console.say("No notes to display.");
        }

        for (slot, idx) in page.range().enumerate() {
            let line = self.fmt.fit(&format!("{}. {}", slot + 1, notes[idx].name()));
            self.console.say(&line)?;
        }
        if page.has_next() {
            let hint = self.fmt.muted("6. Next page");
            self.console.say(&hint)?;
        }
        if page.has_prev() {
            let hint = self.fmt.muted("7. Previous page");
            self.console.say(&hint)?;
        }
        Ok(())
    }

    fn manage_note(&mut self, note: &Note) -> Result<()> {
        loop {
            self.header(&format!("=== MANAGE NOTE: {} ===", note.name()))?;
            if let Some(modified) = note.modified() {
                let line = self.fmt.muted(&format!("Modified: {modified}"));
                self.console.say(&line)?;
            }
            self.console.say("1. View content")?;
            self.console.say("2. Edit note")?;
            self.console.say("3. Delete note")?;
            self.console.say("4. Back to list")?;

            match self.read_choice(ManageAction::from_number)? {
                Choice::Pick(ManageAction::View) => self.view_note(note)?,
                Choice::Pick(ManageAction::Edit) => self.edit_note(note)?,
                Choice::Pick(ManageAction::Delete) => return self.delete_note(note),
                Choice::Pick(ManageAction::Back) => return Ok(()),
                Choice::Pick(ManageAction::Invalid) => self.problem(INVALID_OPTION)?,
                Choice::NotANumber => self.problem(NOT_A_NUMBER)?,
            }
        }
    }

    fn view_note(&mut self, note: &Note) -> Result<()> {
        let content = match read_note(note) {
            Ok(content) => content,
            Err(e) => return self.report(NoteError::Read(e)),
        };
        self.header(&format!("=== CONTENT OF: {} ===", note.name()))?;
        self.console.say(&content)?;
        let footer = self.fmt.header("=== END OF NOTE ===");
        self.console.say(&footer)
    }

    /// Show the current body, then replace it wholesale with new input.
    fn edit_note(&mut self, note: &Note) -> Result<()> {
        let current = match read_note(note) {
            Ok(content) => content,
            Err(e) => return self.report(NoteError::Edit(e)),
        };
        self.header(&format!("=== EDIT NOTE: {} ===", note.name()))?;
        self.console.say("Current content:")?;
        self.console.say(&current)?;
        let banner = self.fmt.header("=== ENTER NEW CONTENT ===");
        self.console.say(&banner)?;
        self.console.say("(Press Enter on an empty line to finish)")?;

        let body = self.console.read_body()?;
        match write_note(note, &body) {
            Ok(()) => self.success("Note updated successfully."),
            Err(e) => self.report(NoteError::Edit(e)),
        }
    }

    fn delete_note(&mut self, note: &Note) -> Result<()> {
        let question = format!("Are you sure you want to delete {}? (y/n): ", note.name());
        if !self.console.confirm(&question)? {
            return self.console.say("Deletion cancelled.");
        }
        match delete_note(note) {
            Ok(()) => self.success("Note deleted successfully."),
            Err(e) => self.report(NoteError::Delete(e)),
        }
    }
}
