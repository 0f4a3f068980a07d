//! Option numbers for each menu, mapped explicitly. Anything outside a
//! menu's table lands in its `Invalid` branch.

/// Result of reading a menu answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice<T> {
    Pick(T),
    /// The line was not an integer at all.
    NotANumber,
}

/// Parse an answer as an integer, without trimming: `" 1"` is not a number.
pub fn parse_choice<T>(line: &str, map: impl FnOnce(i32) -> T) -> Choice<T> {
    match line.parse::<i32>() {
        Ok(n) => Choice::Pick(map(n)),
        Err(_) => Choice::NotANumber,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainAction {
    Create,
    List,
    Exit,
    Invalid,
}

impl MainAction {
    pub fn from_number(n: i32) -> Self {
        match n {
            1 => MainAction::Create,
            2 => MainAction::List,
            3 => MainAction::Exit,
            _ => MainAction::Invalid,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListAction {
    /// 1-based slot on the current page.
    Select(usize),
    Next,
    Prev,
    Back,
    Invalid,
}

impl ListAction {
    pub fn from_number(n: i32) -> Self {
        match n {
            1..=5 => ListAction::Select(n as usize),
            6 => ListAction::Next,
            7 => ListAction::Prev,
            8 => ListAction::Back,
            _ => ListAction::Invalid,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManageAction {
    View,
    Edit,
    Delete,
    Back,
    Invalid,
}

impl ManageAction {
    pub fn from_number(n: i32) -> Self {
        match n {
            1 => ManageAction::View,
            2 => ManageAction::Edit,
            3 => ManageAction::Delete,
            4 => ManageAction::Back,
            _ => ManageAction::Invalid,
        }
    }
}
