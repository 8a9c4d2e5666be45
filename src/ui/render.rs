//! Draws a [`ViewModel`] with ratatui. All styling and cursor placement
//! lives here; the view model carries only data.

use crate::app::view::{Row, ViewModel};
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Text};
use ratatui::widgets::{List, ListItem, ListState, Paragraph};
use ratatui::Frame;

fn title_style() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

fn help_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

fn error_style() -> Style {
    Style::default().fg(Color::Red)
}

fn confirm_style() -> Style {
    Style::default().add_modifier(Modifier::BOLD).bg(Color::Red)
}

pub fn draw(frame: &mut Frame, vm: &ViewModel) {
    match vm {
        ViewModel::List {
            title,
            rows,
            selected,
            help,
            error,
            wage_message,
        } => {
            let mut footer = vec![Line::styled(*help, help_style())];
            if let Some(err) = error {
                for line in err.lines() {
                    footer.push(Line::styled(line.to_string(), error_style()));
                }
            }
            if let Some(msg) = wage_message {
                footer.push(Line::styled(msg.clone(), title_style()));
            }

            let [title_area, list_area, footer_area] = Layout::vertical([
                Constraint::Length(2),
                Constraint::Min(1),
                Constraint::Length(footer.len() as u16),
            ])
            .areas(frame.area());

            frame.render_widget(
                Paragraph::new(Line::styled(title.clone(), title_style())),
                title_area,
            );
            draw_rows(frame, list_area, rows, *selected);
            frame.render_widget(Paragraph::new(footer), footer_area);
        }

        ViewModel::AddEmployee {
            title,
            fields,
            cursor_column,
            help,
            error,
        } => {
            let mut lines = vec![Line::styled(title.clone(), title_style()), Line::raw("")];
            let mut cursor: Option<Position> = None;
            let area = frame.area();

            for field in fields {
                lines.push(Line::raw(field.label));
                lines.push(Line::raw(format!("> {}", field.value)));
                if field.focused {
                    cursor = Some(Position::new(
                        area.x + 2 + cursor_column,
                        area.y + lines.len() as u16 - 1,
                    ));
                }
                lines.push(Line::raw(""));
            }

            lines.push(Line::raw("* = required field"));
            lines.push(Line::raw(""));
            lines.push(Line::styled(*help, help_style()));
            if let Some(err) = error {
                for line in err.lines() {
                    lines.push(Line::styled(line.to_string(), error_style()));
                }
            }

            frame.render_widget(Paragraph::new(lines), area);
            if let Some(pos) = cursor {
                frame.set_cursor_position(pos);
            }
        }

        ViewModel::ViewSessions {
            title,
            summary,
            rows,
            selected,
            help,
        } => {
            let [header_area, list_area, footer_area] = Layout::vertical([
                Constraint::Length(3),
                Constraint::Min(1),
                Constraint::Length(1),
            ])
            .areas(frame.area());

            let header = vec![
                Line::styled(title.clone(), title_style()),
                Line::raw(summary.clone()),
            ];
            frame.render_widget(Paragraph::new(header), header_area);
            draw_rows(frame, list_area, rows, *selected);
            frame.render_widget(
                Paragraph::new(Line::styled(*help, help_style())),
                footer_area,
            );
        }

        ViewModel::ConfirmDelete {
            title,
            prompt,
            help,
        } => {
            let lines = vec![
                Line::styled(title.clone(), confirm_style()),
                Line::raw(""),
                Line::raw(prompt.clone()),
                Line::raw(""),
                Line::styled(*help, help_style()),
            ];
            frame.render_widget(Paragraph::new(lines), frame.area());
        }
    }
}

/// Two-line rows (title over dimmed description), selection highlighted
/// by reversing the video.
fn draw_rows(frame: &mut Frame, area: Rect, rows: &[Row], selected: Option<usize>) {
    let items: Vec<ListItem> = rows
        .iter()
        .map(|row| {
            ListItem::new(Text::from(vec![
                Line::raw(row.title.clone()),
                Line::styled(row.description.clone(), help_style()),
            ]))
        })
        .collect();

    let list = List::new(items).highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    let mut state = ListState::default().with_selected(selected);
    frame.render_stateful_widget(list, area, &mut state);
}
