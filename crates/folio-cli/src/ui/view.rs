//! Drawing for the interactive editor.

use crate::ui::app::{App, FormTab, InputTarget, LoginFocus, Screen};
use crate::views::portfolio::{self, LineStyle};
use folio_runtime::gate;
use folio_types::Theme;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Tabs, Wrap};

const KEY_HINTS: &str =
    "Tab switch · Enter edit · a add · d delete · t theme · y layout · p preview · e export · i import · q quit";

pub fn draw(frame: &mut Frame, app: &App) {
    match app.screen {
        Screen::Login => draw_login(frame, app),
        Screen::Editor => draw_editor(frame, app),
    }
}

fn draw_login(frame: &mut Frame, app: &App) {
    let area = centered_rect(54, 16, frame.area());

    let cursor = |focused: bool| if focused { "▏" } else { "" };
    let masked = "•".repeat(app.login.password.chars().count());

    let mut lines = vec![
        Line::from(Span::styled(
            "Create your stunning portfolio website",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(format!(
            "Email:    {}{}",
            app.login.email,
            cursor(app.login.focus == LoginFocus::Email)
        )),
        Line::from(format!(
            "Password: {}{}",
            masked,
            cursor(app.login.focus == LoginFocus::Password)
        )),
        Line::from(""),
    ];

    // Live strength feedback, shown once the user starts typing a password.
    if !app.login.password.is_empty() {
        let missing = gate::validate_password(&app.login.password);
        if missing.is_empty() {
            lines.push(Line::from(Span::styled(
                "✓ Strong password!",
                Style::default().fg(Color::Green),
            )));
        } else {
            lines.push(Line::from(Span::styled(
                "Password must include:",
                Style::default().fg(Color::Yellow),
            )));
            for criterion in gate::PasswordCriterion::ALL {
                let met = criterion.met(&app.login.password);
                let (mark, color) = if met {
                    ("✓", Color::Green)
                } else {
                    ("✗", Color::DarkGray)
                };
                lines.push(Line::from(Span::styled(
                    format!(" {} {}", mark, criterion.requirement()),
                    Style::default().fg(color),
                )));
            }
        }
        lines.push(Line::from(""));
    }

    if let Some(error) = &app.login.error {
        lines.push(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(Color::Red),
        )));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        "Enter sign in · Tab switch field · Esc quit",
        Style::default().fg(Color::DarkGray),
    )));

    let card = Paragraph::new(Text::from(lines))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Portfolio Builder "),
        );
    frame.render_widget(card, area);
}

fn draw_editor(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    draw_tabs(frame, app, chunks[0]);
    draw_body(frame, app, chunks[1]);
    draw_status(frame, app, chunks[2]);
}

fn draw_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = FormTab::ALL.iter().map(|t| Line::from(t.title())).collect();
    let tabs = Tabs::new(titles)
        .select(app.tab.index())
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(tabs, area);
}

fn draw_body(frame: &mut Frame, app: &App, area: Rect) {
    if app.show_preview {
        let panes = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);
        draw_form(frame, app, panes[0]);
        draw_preview(frame, app, panes[1]);
    } else {
        draw_form(frame, app, area);
    }
}

fn draw_form(frame: &mut Frame, app: &App, area: Rect) {
    let rows = app.rows();

    let items: Vec<ListItem> = if rows.is_empty() {
        let hint = match app.tab {
            FormTab::Experience | FormTab::Projects => "No entries yet. Press 'a' to add one",
            _ => "",
        };
        vec![ListItem::new(Span::styled(
            hint,
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        rows.iter()
            .enumerate()
            .map(|(i, row)| {
                // An active row edit shows the input buffer in place of the value.
                let value = match (&app.input, i == app.cursor) {
                    (Some(input), true) if matches!(input.target, InputTarget::Row(_)) => {
                        format!("{}▏", input.buffer)
                    }
                    _ => row.value.clone(),
                };

                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("{:<26}", row.label),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(value, Style::default().fg(Color::Gray)),
                ]))
            })
            .collect()
    };

    let list = List::new(items)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("› ")
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", app.tab.title())),
        );

    let mut state = ListState::default();
    if !rows.is_empty() {
        state.select(Some(app.cursor.min(rows.len() - 1)));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_preview(frame: &mut Frame, app: &App, area: Rect) {
    let doc = folio_engine::render(&app.record);
    let dark = doc.theme == Theme::Dark;

    let lines: Vec<Line> = portfolio::document_view_lines(&doc)
        .into_iter()
        .map(|line| {
            let style = match line.style {
                LineStyle::Normal => Style::default(),
                LineStyle::Heading => Style::default().add_modifier(Modifier::BOLD),
                LineStyle::Subheading => Style::default()
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
                LineStyle::Accent => Style::default().fg(Color::Blue),
                LineStyle::Banner | LineStyle::Tag => Style::default().fg(Color::Cyan),
                LineStyle::Muted => {
                    if dark {
                        Style::default().fg(Color::DarkGray)
                    } else {
                        Style::default().fg(Color::Gray)
                    }
                }
            };
            Line::from(Span::styled(line.text, style))
        })
        .collect();

    let title = format!(
        " Live Preview — {} / {} ",
        app.record.layout, app.record.theme
    );
    let preview = Paragraph::new(Text::from(lines))
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(preview, area);
}

fn draw_status(frame: &mut Frame, app: &App, area: Rect) {
    let (text, style) = match (&app.input, &app.status) {
        (Some(input), _) if input.target == InputTarget::ImportPath => (
            format!("Import path: {}▏  (Enter to load, Esc to cancel)", input.buffer),
            Style::default().fg(Color::Yellow),
        ),
        (_, Some(status)) => (status.clone(), Style::default().fg(Color::Green)),
        _ => (KEY_HINTS.to_string(), Style::default().fg(Color::DarkGray)),
    };

    frame.render_widget(Paragraph::new(Span::styled(text, style)), area);
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}
