use crossterm::event::KeyCode;
use punchcard::app::{AddField, App, Mode};

mod common;
use common::{add_employee, at, press, type_str};

#[test]
fn starts_in_list_mode() {
    let app = App::new();
    assert_eq!(app.mode(), Mode::List);
    assert!(!app.should_quit());
    assert!(app.error_message().is_none());
    assert!(app.wage_message().is_none());
}

#[test]
fn q_quits_from_list_mode() {
    let mut app = App::new();
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit());
}

#[test]
fn add_command_enters_the_form_on_the_first_field() {
    let mut app = App::new();
    press(&mut app, KeyCode::Char('a'));
    assert_eq!(app.mode(), Mode::AddEmployee);
    assert_eq!(app.form().field(), AddField::FirstName);
}

#[test]
fn escape_cancels_the_form_without_mutation() {
    let mut app = App::new();
    press(&mut app, KeyCode::Char('a'));
    type_str(&mut app, "Ana");
    press(&mut app, KeyCode::Esc);

    assert_eq!(app.mode(), Mode::List);
    assert_eq!(app.roster.len(), 0);

    // Re-entering the form starts from blank inputs.
    press(&mut app, KeyCode::Char('a'));
    assert_eq!(app.form().value(AddField::FirstName), "");
}

#[test]
fn full_add_flow_registers_an_employee() {
    let mut app = App::new();
    add_employee(&mut app, "Ana", "", "Lee", "20.00");

    assert_eq!(app.mode(), Mode::List);
    assert_eq!(app.roster.len(), 1);
    let e = app.roster.get(0).unwrap();
    assert_eq!(e.id, 1);
    assert_eq!(e.full_name(), "Ana Lee");
    assert_eq!(e.hourly_rate, 20.00);
}

#[test]
fn tab_advances_and_backtab_retreats() {
    let mut app = App::new();
    press(&mut app, KeyCode::Char('a'));

    press(&mut app, KeyCode::Tab);
    assert_eq!(app.form().field(), AddField::MiddleName);
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.form().field(), AddField::LastName);
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.form().field(), AddField::Rate);

    press(&mut app, KeyCode::BackTab);
    assert_eq!(app.form().field(), AddField::LastName);
}

#[test]
fn backtab_at_the_first_field_is_a_no_op() {
    let mut app = App::new();
    press(&mut app, KeyCode::Char('a'));
    press(&mut app, KeyCode::BackTab);
    assert_eq!(app.form().field(), AddField::FirstName);
    assert_eq!(app.mode(), Mode::AddEmployee);
}

#[test]
fn invalid_submit_stays_in_the_form_with_a_composite_error() {
    let mut app = App::new();
    add_employee(&mut app, "", "", "Lee", "");

    assert_eq!(app.mode(), Mode::AddEmployee);
    assert_eq!(app.roster.len(), 0);
    let msg = app.error_message().unwrap();
    assert!(msg.contains("first name"), "got: {msg}");
    assert!(msg.contains("hourly rate"), "got: {msg}");
}

#[test]
fn error_line_is_consumed_after_one_render() {
    let mut app = App::new();
    press(&mut app, KeyCode::Char('d'));
    assert!(app.error_message().is_some());

    app.notify_rendered();
    assert!(app.error_message().is_none());
}

#[test]
fn wage_message_survives_renders_until_cleared() {
    let mut app = App::new();
    add_employee(&mut app, "Ana", "", "Lee", "20.00");
    app.clock_in_selected(at(9, 0));
    app.clock_out_selected(at(17, 0));
    assert!(app.wage_message().is_some());

    app.notify_rendered();
    assert!(app.wage_message().is_some());

    // The add command clears it.
    press(&mut app, KeyCode::Char('a'));
    assert!(app.wage_message().is_none());
}

#[test]
fn selection_commands_on_an_empty_roster_report_no_selection() {
    let mut app = App::new();
    for code in ['d', 'i', 'o', 'v'] {
        press(&mut app, KeyCode::Char(code));
        assert_eq!(app.mode(), Mode::List, "mode changed on '{code}'");
        let msg = app.error_message().unwrap();
        assert!(msg.contains("No employee selected"), "got: {msg}");
        app.notify_rendered();
    }
}

#[test]
fn clock_cycle_produces_the_wage_confirmation() {
    let mut app = App::new();
    add_employee(&mut app, "Ana", "", "Lee", "20.00");

    app.clock_in_selected(at(9, 0));
    assert!(app.roster.get(0).unwrap().is_clocked_in());

    app.clock_out_selected(at(17, 0));
    let msg = app.wage_message().unwrap();
    assert_eq!(msg, "Ana Lee clocked out — Session wage: $160.00");
    assert!(!app.roster.get(0).unwrap().is_clocked_in());
    assert_eq!(app.roster.get(0).unwrap().total_wage(), 160.0);
}

#[test]
fn double_clock_in_reports_the_error_and_keeps_state() {
    let mut app = App::new();
    add_employee(&mut app, "Ana", "", "Lee", "20.00");

    app.clock_in_selected(at(9, 0));
    app.clock_in_selected(at(10, 0));

    let msg = app.error_message().unwrap();
    assert!(msg.contains("already clocked in"), "got: {msg}");
    assert_eq!(app.roster.get(0).unwrap().active_clock_in, Some(at(9, 0)));
}

#[test]
fn clock_out_without_clock_in_reports_the_error() {
    let mut app = App::new();
    add_employee(&mut app, "Ana", "", "Lee", "20.00");

    app.clock_out_selected(at(17, 0));
    let msg = app.error_message().unwrap();
    assert!(msg.contains("not clocked in"), "got: {msg}");
    assert!(app.wage_message().is_none());
}

#[test]
fn delete_flow_confirm_removes_exactly_the_pending_employee() {
    let mut app = App::new();
    add_employee(&mut app, "Ana", "", "Lee", "20");
    add_employee(&mut app, "Ben", "", "Kim", "15");

    press(&mut app, KeyCode::Char('d'));
    assert_eq!(app.mode(), Mode::ConfirmDelete);
    assert_eq!(app.pending_delete(), Some(0));

    press(&mut app, KeyCode::Char('y'));
    assert_eq!(app.mode(), Mode::List);
    assert_eq!(app.pending_delete(), None);
    assert_eq!(app.roster.len(), 1);
    assert_eq!(app.roster.get(0).unwrap().full_name(), "Ben Kim");
}

#[test]
fn delete_flow_decline_leaves_the_roster_unchanged() {
    let mut app = App::new();
    add_employee(&mut app, "Ana", "", "Lee", "20");

    press(&mut app, KeyCode::Char('d'));
    press(&mut app, KeyCode::Char('n'));

    assert_eq!(app.mode(), Mode::List);
    assert_eq!(app.pending_delete(), None);
    assert_eq!(app.roster.len(), 1);
}

#[test]
fn unrelated_keys_in_confirm_mode_are_ignored() {
    let mut app = App::new();
    add_employee(&mut app, "Ana", "", "Lee", "20");
    press(&mut app, KeyCode::Char('d'));

    press(&mut app, KeyCode::Char('x'));
    assert_eq!(app.mode(), Mode::ConfirmDelete);
    assert_eq!(app.roster.len(), 1);
}

#[test]
fn view_sessions_and_back() {
    let mut app = App::new();
    add_employee(&mut app, "Ana", "", "Lee", "20");

    press(&mut app, KeyCode::Char('v'));
    assert_eq!(app.mode(), Mode::ViewSessions);

    press(&mut app, KeyCode::Char('q'));
    assert_eq!(app.mode(), Mode::List);
    assert!(!app.should_quit(), "q in the session view must not quit");
}

#[test]
fn session_view_is_reverse_chronological() {
    let mut app = App::new();
    add_employee(&mut app, "Ana", "", "Lee", "10");
    for hour in [9, 11, 13] {
        app.clock_in_selected(at(hour, 0));
        app.clock_out_selected(at(hour + 1, 0));
    }

    press(&mut app, KeyCode::Char('v'));
    let numbers: Vec<usize> = app.session_view().iter().map(|e| e.number).collect();
    assert_eq!(numbers, [3, 2, 1]);
    assert_eq!(app.session_view()[0].session.clock_in_at, at(13, 0));
}

#[test]
fn list_navigation_selects_between_employees() {
    let mut app = App::new();
    add_employee(&mut app, "Ana", "", "Lee", "20");
    add_employee(&mut app, "Ben", "", "Kim", "15");
    add_employee(&mut app, "Cara", "", "Diaz", "30");
    assert_eq!(app.selected_employee_index(), Some(0));

    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down);
    assert_eq!(app.selected_employee_index(), Some(2));

    // Bounded at the ends.
    press(&mut app, KeyCode::Down);
    assert_eq!(app.selected_employee_index(), Some(2));
    press(&mut app, KeyCode::Up);
    assert_eq!(app.selected_employee_index(), Some(1));
}

#[test]
fn selection_is_clamped_after_deleting_the_last_employee() {
    let mut app = App::new();
    add_employee(&mut app, "Ana", "", "Lee", "20");
    add_employee(&mut app, "Ben", "", "Kim", "15");
    press(&mut app, KeyCode::Down);

    press(&mut app, KeyCode::Char('d'));
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.roster.len(), 1);
    assert_eq!(app.selected_employee_index(), Some(0));
}

#[test]
fn second_employee_can_clock_while_first_is_clocked_in() {
    let mut app = App::new();
    add_employee(&mut app, "Ana", "", "Lee", "20");
    add_employee(&mut app, "Ben", "", "Kim", "10");

    app.clock_in_selected(at(9, 0));
    press(&mut app, KeyCode::Down);
    app.clock_in_selected(at(10, 0));
    app.clock_out_selected(at(12, 0));

    assert!(app.roster.get(0).unwrap().is_clocked_in());
    assert_eq!(app.roster.get(1).unwrap().total_wage(), 20.0);
}
