//! Application state machine.
//!
//! One authoritative state object, driven one key event at a time. The
//! current [`Mode`] decides which commands are live; everything else is
//! delegated to the focused widget (list cursor or text field). Rendering
//! reads a projection of this state (see [`view`]) and never mutates it.

pub mod view;
pub mod widgets;

use crate::core::{clock, Roster};
use crate::errors::AppError;
use crate::models::SessionEntry;
use crate::utils::money::format_money;
use chrono::{DateTime, Local};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use widgets::{ListCursor, TextField};

/// Exclusive top-level UI state. `List` is initial; the other three only
/// ever transition back to `List`, never to each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    List,
    AddEmployee,
    ViewSessions,
    ConfirmDelete,
}

/// Focused field within the add-employee form. Advancing past `Rate`
/// submits instead of wrapping; retreating before `FirstName` is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddField {
    FirstName,
    MiddleName,
    LastName,
    Rate,
}

impl Default for AddField {
    fn default() -> Self {
        Self::FirstName
    }
}

impl AddField {
    fn next(self) -> Option<Self> {
        match self {
            Self::FirstName => Some(Self::MiddleName),
            Self::MiddleName => Some(Self::LastName),
            Self::LastName => Some(Self::Rate),
            Self::Rate => None,
        }
    }

    fn prev(self) -> Option<Self> {
        match self {
            Self::FirstName => None,
            Self::MiddleName => Some(Self::FirstName),
            Self::LastName => Some(Self::MiddleName),
            Self::Rate => Some(Self::LastName),
        }
    }
}

/// In-progress add-employee form: four text fields plus the focus.
#[derive(Debug, Default)]
pub struct AddForm {
    field: AddField,
    first_name: TextField,
    middle_name: TextField,
    last_name: TextField,
    rate: TextField,
}

impl AddForm {
    fn reset(&mut self) {
        self.field = AddField::FirstName;
        self.first_name.clear();
        self.middle_name.clear();
        self.last_name.clear();
        self.rate.clear();
    }

    pub fn field(&self) -> AddField {
        self.field
    }

    pub fn value(&self, field: AddField) -> &str {
        match field {
            AddField::FirstName => self.first_name.value(),
            AddField::MiddleName => self.middle_name.value(),
            AddField::LastName => self.last_name.value(),
            AddField::Rate => self.rate.value(),
        }
    }

    fn focused_mut(&mut self) -> &mut TextField {
        match self.field {
            AddField::FirstName => &mut self.first_name,
            AddField::MiddleName => &mut self.middle_name,
            AddField::LastName => &mut self.last_name,
            AddField::Rate => &mut self.rate,
        }
    }

    fn focused(&self) -> &TextField {
        match self.field {
            AddField::FirstName => &self.first_name,
            AddField::MiddleName => &self.middle_name,
            AddField::LastName => &self.last_name,
            AddField::Rate => &self.rate,
        }
    }

    /// Display column of the cursor within the focused field.
    pub fn cursor_column(&self) -> u16 {
        self.focused().cursor_column()
    }
}

pub struct App {
    pub roster: Roster,
    mode: Mode,
    form: AddForm,
    employee_cursor: ListCursor,
    session_cursor: ListCursor,
    /// Built on entry to ViewSessions, most recent session first.
    session_view: Vec<SessionEntry>,
    /// Employee whose sessions are on screen; cleared on back.
    viewed_employee: Option<usize>,
    /// Employee awaiting deletion while in ConfirmDelete.
    pending_delete: Option<usize>,
    error: Option<AppError>,
    wage_message: Option<String>,
    should_quit: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            roster: Roster::new(),
            mode: Mode::List,
            form: AddForm::default(),
            employee_cursor: ListCursor::default(),
            session_cursor: ListCursor::default(),
            session_view: Vec::new(),
            viewed_employee: None,
            pending_delete: None,
            error: None,
            wage_message: None,
            should_quit: false,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn form(&self) -> &AddForm {
        &self.form
    }

    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(|e| e.to_string())
    }

    pub fn wage_message(&self) -> Option<&str> {
        self.wage_message.as_deref()
    }

    pub fn pending_delete(&self) -> Option<usize> {
        self.pending_delete
    }

    pub fn session_view(&self) -> &[SessionEntry] {
        &self.session_view
    }

    pub fn selected_employee_index(&self) -> Option<usize> {
        self.employee_cursor.selection(self.roster.len())
    }

    /// Called by the event loop after each draw. The error line is
    /// one-shot: it survives exactly one render pass and is consumed
    /// here, as part of the event contract rather than inside rendering.
    /// The wage confirmation line is not one-shot; it persists until a
    /// later command explicitly clears it.
    pub fn notify_rendered(&mut self) {
        self.error = None;
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match self.mode {
            Mode::List => self.handle_list_key(key),
            Mode::AddEmployee => self.handle_add_key(key),
            Mode::ViewSessions => self.handle_sessions_key(key),
            Mode::ConfirmDelete => self.handle_confirm_key(key),
        }
    }

    fn handle_list_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('a') => {
                self.wage_message = None;
                self.form.reset();
                self.mode = Mode::AddEmployee;
            }
            KeyCode::Char('d') => match self.selected_employee_index() {
                Some(idx) => {
                    self.pending_delete = Some(idx);
                    self.mode = Mode::ConfirmDelete;
                }
                None => self.error = Some(AppError::NoSelection),
            },
            KeyCode::Char('i') => {
                self.wage_message = None;
                self.clock_in_selected(Local::now());
            }
            KeyCode::Char('o') => self.clock_out_selected(Local::now()),
            KeyCode::Char('v') => self.view_sessions(),
            KeyCode::Up | KeyCode::Char('k') => self.employee_cursor.up(),
            KeyCode::Down | KeyCode::Char('j') => self.employee_cursor.down(self.roster.len()),
            _ => {}
        }
    }

    fn handle_sessions_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => {
                self.viewed_employee = None;
                self.session_view.clear();
                self.mode = Mode::List;
            }
            KeyCode::Up | KeyCode::Char('k') => self.session_cursor.up(),
            KeyCode::Down | KeyCode::Char('j') => {
                self.session_cursor.down(self.session_view.len())
            }
            _ => {}
        }
    }

    fn handle_confirm_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('y') | KeyCode::Enter => {
                if let Some(idx) = self.pending_delete.take() {
                    self.roster.remove_at(idx);
                }
                self.employee_cursor.clamp(self.roster.len());
                self.wage_message = None;
                self.mode = Mode::List;
            }
            KeyCode::Char('n') | KeyCode::Esc => {
                self.pending_delete = None;
                self.mode = Mode::List;
            }
            _ => {}
        }
    }

    fn handle_add_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.mode = Mode::List,
            KeyCode::Enter | KeyCode::Tab => self.advance_field(),
            KeyCode::BackTab => self.retreat_field(),
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.form.focused_mut().insert(c);
            }
            KeyCode::Backspace => self.form.focused_mut().backspace(),
            KeyCode::Delete => self.form.focused_mut().delete(),
            KeyCode::Left => self.form.focused_mut().move_left(),
            KeyCode::Right => self.form.focused_mut().move_right(),
            KeyCode::Home => self.form.focused_mut().move_home(),
            KeyCode::End => self.form.focused_mut().move_end(),
            _ => {}
        }
    }

    fn advance_field(&mut self) {
        match self.form.field.next() {
            Some(next) => self.form.field = next,
            None => self.submit_form(),
        }
    }

    fn retreat_field(&mut self) {
        if let Some(prev) = self.form.field.prev() {
            self.form.field = prev;
        }
    }

    fn submit_form(&mut self) {
        let result = self.roster.add(
            self.form.first_name.value(),
            self.form.last_name.value(),
            self.form.middle_name.value(),
            self.form.rate.value(),
        );
        match result {
            Ok(_) => {
                self.error = None;
                self.mode = Mode::List;
            }
            Err(e) => self.error = Some(e),
        }
    }

    pub fn clock_in_selected(&mut self, now: DateTime<Local>) {
        let Some(idx) = self.selected_employee_index() else {
            self.error = Some(AppError::NoSelection);
            return;
        };
        if let Some(employee) = self.roster.get_mut(idx) {
            if let Err(e) = clock::clock_in(employee, now) {
                self.error = Some(e);
            }
        }
    }

    pub fn clock_out_selected(&mut self, now: DateTime<Local>) {
        let Some(idx) = self.selected_employee_index() else {
            self.error = Some(AppError::NoSelection);
            return;
        };
        if let Some(employee) = self.roster.get_mut(idx) {
            match clock::clock_out(employee, now) {
                Ok(session) => {
                    self.wage_message = Some(format!(
                        "{} clocked out — Session wage: {}",
                        employee.full_name(),
                        format_money(session.wage),
                    ));
                }
                Err(e) => self.error = Some(e),
            }
        }
    }

    /// Builds the reverse-chronological history view for the selected
    /// employee and switches modes. Numbering counts from the oldest
    /// session, so the newest row is "Session #N".
    pub fn view_sessions(&mut self) {
        let Some(idx) = self.selected_employee_index() else {
            self.error = Some(AppError::NoSelection);
            return;
        };
        if let Some(employee) = self.roster.get(idx) {
            let total = employee.sessions.len();
            self.session_view = employee
                .sessions
                .iter()
                .rev()
                .enumerate()
                .map(|(i, &session)| SessionEntry {
                    session,
                    number: total - i,
                })
                .collect();
            self.viewed_employee = Some(idx);
            self.session_cursor.reset();
            self.mode = Mode::ViewSessions;
        }
    }
}
