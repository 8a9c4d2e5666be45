//! View projection: maps the application state to plain renderable data.
//! No business logic lives here; the ui layer consumes the result and owns
//! all styling, scrolling, and cursor mechanics.

use super::{AddField, App, Mode};
use crate::models::ListEntry;
use crate::utils::money::{format_money, format_rate};

pub const LIST_HELP: &str =
    "[a] add  [d] delete  [i] clock in  [o] clock out  [v] view sessions  [q] quit";
pub const ADD_HELP: &str = "[enter/tab] next [shift+tab] previous [esc] cancel";
pub const SESSIONS_HELP: &str = "[esc/q] back";
pub const CONFIRM_HELP: &str = "[y/enter] yes  [n/esc] no";

/// One row of a selectable list: title line over a description line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub title: String,
    pub description: String,
}

impl Row {
    fn from_entry(entry: &dyn ListEntry) -> Self {
        Self {
            title: entry.title(),
            description: entry.description(),
        }
    }
}

/// A labeled form field with its current text and focus flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub label: &'static str,
    pub value: String,
    pub focused: bool,
}

/// Everything the terminal layer needs to draw one frame.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewModel {
    List {
        title: String,
        rows: Vec<Row>,
        selected: Option<usize>,
        help: &'static str,
        error: Option<String>,
        wage_message: Option<String>,
    },
    AddEmployee {
        title: String,
        fields: Vec<Field>,
        /// Display column of the cursor within the focused field.
        cursor_column: u16,
        help: &'static str,
        error: Option<String>,
    },
    ViewSessions {
        title: String,
        summary: String,
        rows: Vec<Row>,
        selected: Option<usize>,
        help: &'static str,
    },
    ConfirmDelete {
        title: String,
        prompt: String,
        help: &'static str,
    },
}

pub fn project(app: &App) -> ViewModel {
    match app.mode() {
        Mode::List => project_list(app),
        Mode::AddEmployee => project_add(app),
        Mode::ViewSessions => project_sessions(app),
        Mode::ConfirmDelete => project_confirm(app),
    }
}

fn project_list(app: &App) -> ViewModel {
    let rows = app
        .roster
        .iter()
        .map(|e| Row::from_entry(e))
        .collect();
    ViewModel::List {
        title: "Employee Management System".to_string(),
        rows,
        selected: app.selected_employee_index(),
        help: LIST_HELP,
        error: app.error_message(),
        wage_message: app.wage_message.clone(),
    }
}

fn project_add(app: &App) -> ViewModel {
    let form = app.form();
    let field = |label, which| Field {
        label,
        value: form.value(which).to_string(),
        focused: form.field() == which,
    };
    ViewModel::AddEmployee {
        title: "Add Employee".to_string(),
        fields: vec![
            field("First name*:", AddField::FirstName),
            field("Middle name:", AddField::MiddleName),
            field("Last name*:", AddField::LastName),
            field("Hourly rate*:", AddField::Rate),
        ],
        cursor_column: form.cursor_column(),
        help: ADD_HELP,
        error: app.error_message(),
    }
}

fn project_sessions(app: &App) -> ViewModel {
    let (title, summary) = match app.viewed_employee.and_then(|idx| app.roster.get(idx)) {
        Some(e) => (
            format!("Session History: {}", e.full_name()),
            format!(
                "ID: {} | Rate: {} | Total Sessions: {} | Total Wage: {}",
                e.id,
                format_rate(e.hourly_rate),
                e.sessions.len(),
                format_money(e.total_wage()),
            ),
        ),
        None => ("Session History".to_string(), String::new()),
    };
    let rows = app
        .session_view()
        .iter()
        .map(|entry| Row::from_entry(entry))
        .collect();
    ViewModel::ViewSessions {
        title,
        summary,
        rows,
        selected: app.session_cursor.selection(app.session_view().len()),
        help: SESSIONS_HELP,
    }
}

fn project_confirm(app: &App) -> ViewModel {
    let name = app
        .pending_delete()
        .and_then(|idx| app.roster.get(idx))
        .map(|e| e.full_name())
        .unwrap_or_else(|| "selected employee".to_string());
    ViewModel::ConfirmDelete {
        title: "Confirm Delete".to_string(),
        prompt: format!("Delete {}? (y/n)", name),
        help: CONFIRM_HELP,
    }
}
