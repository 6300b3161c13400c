//! Editor application state.
//!
//! Key handling is a pure reduce step: it updates state and may hand one
//! [`Action`] back to the host loop, which owns every effect (gate writes,
//! file IO, quitting). Record edits go through `folio_engine::editor`, so
//! the preview pane only ever sees complete records.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use folio_engine::editor::{self, ExperienceField, Field, ProjectField};
use folio_types::{Portfolio, SocialPlatform};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Editor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginFocus {
    Email,
    Password,
}

#[derive(Debug, Default)]
pub struct LoginState {
    pub email: String,
    pub password: String,
    pub focus: LoginFocus,
    pub error: Option<String>,
}

impl Default for LoginFocus {
    fn default() -> Self {
        LoginFocus::Email
    }
}

/// Form tabs, mirroring the dashboard's section split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormTab {
    Basic,
    Contact,
    Experience,
    Projects,
    Customize,
}

impl FormTab {
    pub const ALL: [FormTab; 5] = [
        FormTab::Basic,
        FormTab::Contact,
        FormTab::Experience,
        FormTab::Projects,
        FormTab::Customize,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            FormTab::Basic => "Basic",
            FormTab::Contact => "Contact",
            FormTab::Experience => "Experience",
            FormTab::Projects => "Projects",
            FormTab::Customize => "Customize",
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|t| t == self).unwrap_or(0)
    }

    fn next(&self) -> FormTab {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    fn prev(&self) -> FormTab {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// What committing an input line writes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditTarget {
    Scalar(Field),
    Skills,
    Social(SocialPlatform),
    Experience(usize, ExperienceField),
    Project(usize, ProjectField),
    Theme,
    Layout,
}

/// One editable line of the form pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormRow {
    pub label: String,
    pub value: String,
    pub target: EditTarget,
}

fn row(label: impl Into<String>, value: impl Into<String>, target: EditTarget) -> FormRow {
    FormRow {
        label: label.into(),
        value: value.into(),
        target,
    }
}

/// The form is a pure view over the record: rows are recomputed from the
/// current value on every draw, never cached.
pub fn rows_for_tab(record: &Portfolio, tab: FormTab) -> Vec<FormRow> {
    match tab {
        FormTab::Basic => vec![
            row("Full Name", record.name.as_str(), EditTarget::Scalar(Field::Name)),
            row(
                "Professional Title",
                record.title.as_str(),
                EditTarget::Scalar(Field::Title),
            ),
            row("Bio", record.bio.as_str(), EditTarget::Scalar(Field::Bio)),
            row(
                "Location",
                record.location.as_str(),
                EditTarget::Scalar(Field::Location),
            ),
            row(
                "Skills (comma-separated)",
                editor::skills_text(record),
                EditTarget::Skills,
            ),
        ],

        FormTab::Contact => {
            let mut rows = vec![
                row("Email", record.email.as_str(), EditTarget::Scalar(Field::Email)),
                row("Phone", record.phone.as_str(), EditTarget::Scalar(Field::Phone)),
            ];
            for platform in SocialPlatform::ALL {
                rows.push(row(
                    platform.label(),
                    record.social.get(platform).unwrap_or(""),
                    EditTarget::Social(platform),
                ));
            }
            rows
        }

        FormTab::Experience => record
            .experience
            .iter()
            .enumerate()
            .flat_map(|(i, entry)| {
                vec![
                    row(
                        format!("Experience {} · Company", i + 1),
                        entry.company.as_str(),
                        EditTarget::Experience(i, ExperienceField::Company),
                    ),
                    row(
                        "  Position",
                        entry.position.as_str(),
                        EditTarget::Experience(i, ExperienceField::Position),
                    ),
                    row(
                        "  Duration",
                        entry.duration.as_str(),
                        EditTarget::Experience(i, ExperienceField::Duration),
                    ),
                    row(
                        "  Description",
                        entry.description.as_str(),
                        EditTarget::Experience(i, ExperienceField::Description),
                    ),
                ]
            })
            .collect(),

        FormTab::Projects => record
            .projects
            .iter()
            .enumerate()
            .flat_map(|(i, entry)| {
                vec![
                    row(
                        format!("Project {} · Title", i + 1),
                        entry.title.as_str(),
                        EditTarget::Project(i, ProjectField::Title),
                    ),
                    row(
                        "  Description",
                        entry.description.as_str(),
                        EditTarget::Project(i, ProjectField::Description),
                    ),
                    row(
                        "  Technologies",
                        entry.technologies.as_str(),
                        EditTarget::Project(i, ProjectField::Technologies),
                    ),
                    row(
                        "  Link (optional)",
                        entry.link.as_deref().unwrap_or(""),
                        EditTarget::Project(i, ProjectField::Link),
                    ),
                ]
            })
            .collect(),

        FormTab::Customize => vec![
            row("Theme", record.theme.to_string(), EditTarget::Theme),
            row("Layout", record.layout.to_string(), EditTarget::Layout),
        ],
    }
}

/// Effects the host loop carries out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    AttemptLogin,
    Export,
    Import(PathBuf),
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputTarget {
    Row(EditTarget),
    ImportPath,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputState {
    pub target: InputTarget,
    pub buffer: String,
}

pub struct App {
    pub screen: Screen,
    pub login: LoginState,
    pub record: Portfolio,
    pub tab: FormTab,
    pub cursor: usize,
    pub input: Option<InputState>,
    pub show_preview: bool,
    pub status: Option<String>,
}

impl App {
    pub fn new(record: Portfolio, logged_in: bool) -> Self {
        Self {
            screen: if logged_in {
                Screen::Editor
            } else {
                Screen::Login
            },
            login: LoginState::default(),
            record,
            tab: FormTab::Basic,
            cursor: 0,
            input: None,
            show_preview: true,
            status: None,
        }
    }

    pub fn rows(&self) -> Vec<FormRow> {
        rows_for_tab(&self.record, self.tab)
    }

    pub fn clamp_cursor(&mut self) {
        self.cursor = self.cursor.min(self.rows().len().saturating_sub(1));
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Action> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Action::Quit);
        }

        match self.screen {
            Screen::Login => self.handle_login_key(key),
            Screen::Editor => self.handle_editor_key(key),
        }
    }

    fn handle_login_key(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Esc => return Some(Action::Quit),
            KeyCode::Enter => return Some(Action::AttemptLogin),
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.login.focus = match self.login.focus {
                    LoginFocus::Email => LoginFocus::Password,
                    LoginFocus::Password => LoginFocus::Email,
                };
            }
            KeyCode::Backspace => {
                self.focused_login_field().pop();
            }
            KeyCode::Char(c) => {
                self.focused_login_field().push(c);
            }
            _ => {}
        }
        None
    }

    fn focused_login_field(&mut self) -> &mut String {
        match self.login.focus {
            LoginFocus::Email => &mut self.login.email,
            LoginFocus::Password => &mut self.login.password,
        }
    }

    fn handle_editor_key(&mut self, key: KeyEvent) -> Option<Action> {
        if self.input.is_some() {
            return self.handle_input_key(key);
        }

        match key.code {
            KeyCode::Char('q') => return Some(Action::Quit),
            KeyCode::Tab => {
                self.tab = self.tab.next();
                self.cursor = 0;
            }
            KeyCode::BackTab => {
                self.tab = self.tab.prev();
                self.cursor = 0;
            }
            KeyCode::Up => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Down => {
                let len = self.rows().len();
                if len > 0 {
                    self.cursor = (self.cursor + 1).min(len - 1);
                }
            }
            KeyCode::Enter => self.begin_edit(),
            KeyCode::Char('a') => self.add_entry(),
            KeyCode::Char('d') => self.delete_current_entry(),
            KeyCode::Char('t') => {
                self.record = editor::set_theme(&self.record, self.record.theme.toggled());
            }
            KeyCode::Char('y') => {
                self.record = editor::set_layout(&self.record, self.record.layout.cycled());
            }
            KeyCode::Char('p') => self.show_preview = !self.show_preview,
            KeyCode::Char('e') => return Some(Action::Export),
            KeyCode::Char('i') => {
                self.input = Some(InputState {
                    target: InputTarget::ImportPath,
                    buffer: String::new(),
                });
            }
            _ => {}
        }
        None
    }

    fn handle_input_key(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Esc => {
                self.input = None;
            }
            KeyCode::Enter => return self.commit_input(),
            KeyCode::Backspace => {
                if let Some(input) = self.input.as_mut() {
                    input.buffer.pop();
                }
            }
            KeyCode::Char(c) => {
                if let Some(input) = self.input.as_mut() {
                    input.buffer.push(c);
                }
            }
            _ => {}
        }
        None
    }

    fn begin_edit(&mut self) {
        let rows = self.rows();
        let Some(row) = rows.get(self.cursor) else {
            return;
        };

        match row.target {
            // Selection rows toggle in place; there is nothing to type.
            EditTarget::Theme => {
                self.record = editor::set_theme(&self.record, self.record.theme.toggled());
            }
            EditTarget::Layout => {
                self.record = editor::set_layout(&self.record, self.record.layout.cycled());
            }
            _ => {
                self.input = Some(InputState {
                    target: InputTarget::Row(row.target.clone()),
                    buffer: row.value.clone(),
                });
            }
        }
    }

    fn commit_input(&mut self) -> Option<Action> {
        let Some(input) = self.input.take() else {
            return None;
        };

        match input.target {
            InputTarget::ImportPath => return Some(Action::Import(PathBuf::from(input.buffer))),
            InputTarget::Row(target) => {
                let value = input.buffer;
                self.record = match target {
                    EditTarget::Scalar(field) => editor::set_field(&self.record, field, value),
                    EditTarget::Skills => editor::set_skills_from_text(&self.record, &value),
                    EditTarget::Social(platform) => {
                        editor::set_social(&self.record, platform, value)
                    }
                    EditTarget::Experience(index, field) => {
                        editor::update_experience_field(&self.record, index, field, value)
                    }
                    EditTarget::Project(index, field) => {
                        editor::update_project_field(&self.record, index, field, value)
                    }
                    // Handled in begin_edit; never reaches an input line.
                    EditTarget::Theme | EditTarget::Layout => return None,
                };
            }
        }
        None
    }

    fn add_entry(&mut self) {
        match self.tab {
            FormTab::Experience => {
                self.record = editor::add_experience(&self.record);
                self.status = Some("Added experience entry".to_string());
            }
            FormTab::Projects => {
                self.record = editor::add_project(&self.record);
                self.status = Some("Added project entry".to_string());
            }
            _ => return,
        }
        // Land on the first row of the appended entry.
        self.cursor = self.rows().len().saturating_sub(4);
    }

    fn delete_current_entry(&mut self) {
        let rows = self.rows();
        let Some(row) = rows.get(self.cursor) else {
            return;
        };

        match row.target {
            EditTarget::Experience(index, _) => {
                self.record = editor::delete_experience(&self.record, index);
                self.status = Some("Deleted experience entry".to_string());
            }
            EditTarget::Project(index, _) => {
                self.record = editor::delete_project(&self.record, index);
                self.status = Some("Deleted project entry".to_string());
            }
            _ => return,
        }
        self.clamp_cursor();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_types::{Layout, Theme};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn editor_app() -> App {
        App::new(Portfolio::starter(), true)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_starts_on_login_when_logged_out() {
        assert_eq!(App::new(Portfolio::starter(), false).screen, Screen::Login);
        assert_eq!(editor_app().screen, Screen::Editor);
    }

    #[test]
    fn test_login_typing_and_submit() {
        let mut app = App::new(Portfolio::starter(), false);

        type_text(&mut app, "a@b.c");
        app.handle_key(key(KeyCode::Tab));
        type_text(&mut app, "Password123!");

        assert_eq!(app.login.email, "a@b.c");
        assert_eq!(app.login.password, "Password123!");
        assert_eq!(
            app.handle_key(key(KeyCode::Enter)),
            Some(Action::AttemptLogin)
        );
    }

    #[test]
    fn test_edit_commit_replaces_scalar_field() {
        let mut app = editor_app();

        app.handle_key(key(KeyCode::Enter));
        assert!(app.input.is_some());

        // Clear the seeded value, then type a new one.
        for _ in 0.."Your Name".len() {
            app.handle_key(key(KeyCode::Backspace));
        }
        type_text(&mut app, "Ada");
        app.handle_key(key(KeyCode::Enter));

        assert!(app.input.is_none());
        assert_eq!(app.record.name, "Ada");
    }

    #[test]
    fn test_escape_cancels_edit_without_touching_record() {
        let mut app = editor_app();
        let before = app.record.clone();

        app.handle_key(key(KeyCode::Enter));
        type_text(&mut app, "garbage");
        app.handle_key(key(KeyCode::Esc));

        assert_eq!(app.record, before);
        assert!(app.input.is_none());
    }

    #[test]
    fn test_q_inside_edit_is_text_not_quit() {
        let mut app = editor_app();
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.handle_key(key(KeyCode::Char('q'))), None);
        assert_eq!(app.handle_key(key(KeyCode::Char('q'))), None);
        app.handle_key(key(KeyCode::Enter));
        assert!(app.record.name.ends_with("qq"));
    }

    #[test]
    fn test_add_and_delete_project_entry() {
        let mut app = editor_app();
        app.tab = FormTab::Projects;

        app.handle_key(key(KeyCode::Char('a')));
        assert_eq!(app.record.projects.len(), 2);
        // Cursor lands on the new entry's first row.
        assert!(matches!(
            app.rows()[app.cursor].target,
            EditTarget::Project(1, ProjectField::Title)
        ));

        app.handle_key(key(KeyCode::Char('d')));
        assert_eq!(app.record.projects.len(), 1);
    }

    #[test]
    fn test_delete_on_empty_tab_is_noop() {
        let mut app = editor_app();
        app.record.experience.clear();
        app.tab = FormTab::Experience;
        app.cursor = 0;

        app.handle_key(key(KeyCode::Char('d')));
        assert!(app.record.experience.is_empty());
    }

    #[test]
    fn test_theme_toggle_and_layout_cycle_keys() {
        let mut app = editor_app();

        app.handle_key(key(KeyCode::Char('t')));
        assert_eq!(app.record.theme, Theme::Light);

        app.handle_key(key(KeyCode::Char('y')));
        assert_eq!(app.record.layout, Layout::Creative);
    }

    #[test]
    fn test_preview_toggle_leaves_record_alone() {
        let mut app = editor_app();
        let before = app.record.clone();

        app.handle_key(key(KeyCode::Char('p')));
        assert!(!app.show_preview);
        assert_eq!(app.record, before);

        app.handle_key(key(KeyCode::Char('p')));
        assert!(app.show_preview);
    }

    #[test]
    fn test_import_prompt_emits_action_with_typed_path() {
        let mut app = editor_app();

        app.handle_key(key(KeyCode::Char('i')));
        type_text(&mut app, "/tmp/p.json");
        assert_eq!(
            app.handle_key(key(KeyCode::Enter)),
            Some(Action::Import(PathBuf::from("/tmp/p.json")))
        );
    }

    #[test]
    fn test_ctrl_c_quits_from_any_screen() {
        let mut app = App::new(Portfolio::starter(), false);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(app.handle_key(ctrl_c), Some(Action::Quit));

        let mut app = editor_app();
        assert_eq!(app.handle_key(ctrl_c), Some(Action::Quit));
    }

    #[test]
    fn test_tab_switch_resets_cursor() {
        let mut app = editor_app();
        app.handle_key(key(KeyCode::Down));
        assert_eq!(app.cursor, 1);

        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.tab, FormTab::Contact);
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn test_skills_row_round_trips_comma_text() {
        let mut app = editor_app();
        // Move to the skills row (last row of the Basic tab).
        app.cursor = app.rows().len() - 1;

        app.handle_key(key(KeyCode::Enter));
        let buffer = app.input.as_ref().unwrap().buffer.clone();
        assert_eq!(buffer, "React, TypeScript, Node.js, CSS, Web Design");

        for _ in 0..buffer.len() {
            app.handle_key(key(KeyCode::Backspace));
        }
        type_text(&mut app, "Rust,  , Go");
        app.handle_key(key(KeyCode::Enter));

        assert_eq!(app.record.skills, vec!["Rust", "Go"]);
    }
}
