#![allow(dead_code)]
use chrono::{DateTime, Local, TimeZone};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use punchcard::app::App;

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn press(app: &mut App, code: KeyCode) {
    app.handle_key(key(code));
}

pub fn type_str(app: &mut App, s: &str) {
    for c in s.chars() {
        press(app, KeyCode::Char(c));
    }
}

/// Fixed-date timestamp helper so wage math is deterministic.
pub fn at(hour: u32, min: u32) -> DateTime<Local> {
    Local.with_ymd_and_hms(2026, 3, 14, hour, min, 0).unwrap()
}

/// Drive the add-employee form end to end: a, fields, submit.
pub fn add_employee(app: &mut App, first: &str, middle: &str, last: &str, rate: &str) {
    press(app, KeyCode::Char('a'));
    type_str(app, first);
    press(app, KeyCode::Tab);
    type_str(app, middle);
    press(app, KeyCode::Tab);
    type_str(app, last);
    press(app, KeyCode::Tab);
    type_str(app, rate);
    press(app, KeyCode::Enter);
}
