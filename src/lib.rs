//! Menu-driven terminal notes: one plain `.txt` file per note inside a
//! folder chosen at startup.

pub mod app;
pub mod config;
pub mod console;
pub mod error;
pub mod formatting;
pub mod logging;
pub mod menu;
pub mod note;
pub mod paging;

use std::io::{BufRead, Write};
use std::process::ExitCode;
use tracing::error;

use crate::app::{App, open_root};
use crate::config::Config;
use crate::console::Console;
use crate::error::{NoteError, Result};
use crate::formatting::{FormatContext, terminal_columns};

/// Run a full session over the given console: folder prompt, then the main
/// menu until the user exits.
pub fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    fmt: FormatContext,
) -> Result<()> {
    let root = open_root(console, &fmt)?;
    App::new(root, console, fmt).main_menu()
}

pub fn entry() -> ExitCode {
    let config = Config::from_env();
    logging::init(&config);
    let fmt = FormatContext::new(config.use_color).with_columns(terminal_columns());

    let mut console = Console::stdio();
    match run(&mut console, fmt) {
        Ok(()) | Err(NoteError::InputClosed) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "session aborted");
            ExitCode::FAILURE
        }
    }
}
