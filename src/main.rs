use std::process::ExitCode;

fn main() -> ExitCode {
    text_notes::entry()
}
