use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use ratatui::{
    backend::CrosstermBackend,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

use crate::config::Settings;
use crate::state::{AppState, Screen};

use super::components::{
    ActivityFeed, AuthPopup, DetailPanel, HelpPopup, Landing, ModelShares, Sidebar, StatCards,
    StatusBar, UsageChart, UsageTable,
};
use super::Layout;

/// Main application
pub struct App {
    state: AppState,
    settings: Settings,
    layout: Layout,
}

impl App {
    /// Create a new application
    pub fn new(settings: Settings) -> Self {
        let state = AppState::new();
        let layout = Layout::new().with_ui_settings(
            settings.ui.show_sidebar,
            settings.ui.sidebar_width,
            settings.ui.chart_height,
        );

        Self {
            state,
            settings,
            layout,
        }
    }

    /// Start with an already-authenticated demo session (`--signed-in`)
    pub fn sign_in_demo_user(&mut self) {
        self.state.session.sign_in(quotadeck_core::auth::User {
            name: "Demo User".to_string(),
            email: "demo@example.com".to_string(),
        });
        self.state.navigate("/dashboard");
    }

    /// Run the application
    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        crossterm::terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        crossterm::execute!(stdout, crossterm::terminal::EnterAlternateScreen)?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Main loop
        let result = self.main_loop(&mut terminal).await;

        // Restore terminal
        crossterm::terminal::disable_raw_mode()?;
        crossterm::execute!(
            terminal.backend_mut(),
            crossterm::terminal::LeaveAlternateScreen
        )?;
        terminal.show_cursor()?;

        result
    }

    async fn main_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        let tick_rate = Duration::from_millis(self.settings.tick_rate_ms);

        loop {
            if !self.state.running {
                break;
            }

            terminal.draw(|frame| {
                let state = &self.state;
                let areas = self.layout.calculate(frame.area());

                // The landing screen has no sidebar
                if state.screen() != Screen::Landing {
                    if let Some(sidebar_area) = areas.sidebar {
                        Sidebar::render(frame, sidebar_area, state);
                    }
                }

                match state.screen() {
                    Screen::Landing => {
                        let content = match areas.sidebar {
                            Some(sidebar_area) => areas.content.union(sidebar_area),
                            None => areas.content,
                        };
                        Landing::render(frame, content, state);
                    }
                    Screen::Overview => {
                        let overview = self.layout.overview_areas(areas.content);
                        StatCards::render(frame, overview.stat_cards);
                        ModelShares::render(frame, overview.model_shares);
                        ActivityFeed::render(frame, overview.activity_feed);
                    }
                    Screen::Usage => {
                        let usage = self
                            .layout
                            .usage_areas(areas.content, state.detail.current().is_some());
                        UsageChart::render(frame, usage.chart, &state.analytics);
                        UsageTable::render(frame, usage.table, state);
                        if let (Some(detail_area), Some(view)) =
                            (usage.detail, state.detail.current())
                        {
                            DetailPanel::render(frame, detail_area, view);
                        }
                    }
                    Screen::Placeholder(title) => {
                        Self::render_placeholder(frame, areas.content, title);
                    }
                }

                StatusBar::render(frame, areas.status_bar, state);

                // Popups
                if let Some(form) = &state.auth_form {
                    let popup_area = self.layout.popup_area(frame.area(), 50, 60);
                    AuthPopup::render(frame, popup_area, form);
                }
                if state.show_help {
                    let popup_area = self.layout.popup_area(frame.area(), 60, 80);
                    HelpPopup::render(frame, popup_area);
                }
            })?;

            // Handle events with timeout
            if event::poll(tick_rate)? {
                if let Event::Key(key) = event::read()? {
                    self.handle_key(key.code, key.modifiers);
                }
            }
        }

        Ok(())
    }

    /// Screen for routes without dedicated content
    fn render_placeholder(frame: &mut Frame, area: Rect, title: &str) {
        let block = Block::default()
            .title(format!(" {} ", title))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Gray));

        let paragraph = Paragraph::new("Nothing here yet.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);

        frame.render_widget(paragraph, area);
    }

    fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        // A transient message lives until the next key press
        self.state.status_message = None;

        // Handle help popup first
        if self.state.show_help {
            self.state.show_help = false;
            return;
        }

        if self.state.auth_form.is_some() {
            self.handle_form_key(code, modifiers);
        } else if self.state.drag.is_dragging() {
            self.handle_grab_key(code);
        } else {
            self.handle_normal_key(code);
        }
    }

    /// Handle keys while the login/signup modal is open
    fn handle_form_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        match code {
            KeyCode::Esc => {
                self.state.close_auth_form();
            }
            KeyCode::Enter => {
                self.state.submit_auth_form();
            }
            KeyCode::Tab => {
                if let Some(form) = self.state.auth_form.as_mut() {
                    form.focus_next();
                }
            }
            KeyCode::BackTab => {
                if let Some(form) = self.state.auth_form.as_mut() {
                    form.focus_previous();
                }
            }
            KeyCode::Char('s') if modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.switch_auth_form();
            }
            KeyCode::Char(c) => {
                if let Some(form) = self.state.auth_form.as_mut() {
                    form.input_char(c);
                }
            }
            KeyCode::Backspace => {
                if let Some(form) = self.state.auth_form.as_mut() {
                    form.input_backspace();
                }
            }
            KeyCode::Left => {
                if let Some(form) = self.state.auth_form.as_mut() {
                    form.cursor_left();
                }
            }
            KeyCode::Right => {
                if let Some(form) = self.state.auth_form.as_mut() {
                    form.cursor_right();
                }
            }
            _ => {}
        }
    }

    /// Handle keys during a grab-reorder gesture
    fn handle_grab_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('j') | KeyCode::Down => self.state.select_next(),
            KeyCode::Char('k') | KeyCode::Up => self.state.select_previous(),
            KeyCode::Char('g') => self.state.select_first(),
            KeyCode::Char('G') => self.state.select_last(),
            KeyCode::Enter => self.state.drop_row(),
            KeyCode::Esc => self.state.cancel_grab(),
            KeyCode::Char('q') => self.state.quit(),
            _ => {}
        }
    }

    /// Handle keys in normal (navigation) mode
    fn handle_normal_key(&mut self, code: KeyCode) {
        // Keys available everywhere
        match code {
            KeyCode::Char('q') => {
                self.state.quit();
                return;
            }
            KeyCode::Char('?') => {
                self.state.toggle_help();
                return;
            }
            KeyCode::Char('b') => {
                self.layout.toggle_sidebar();
                return;
            }
            _ => {}
        }

        if self.state.screen() == Screen::Landing {
            match code {
                KeyCode::Char('l') => self.state.open_login(),
                KeyCode::Char('s') => self.state.open_signup(),
                _ => {}
            }
            return;
        }

        // Signed-in keys
        match code {
            KeyCode::Tab => self.state.nav_next(),
            KeyCode::BackTab => self.state.nav_previous(),
            KeyCode::Char('o') => self.state.sign_out(),
            _ => {}
        }

        if self.state.screen() != Screen::Usage {
            return;
        }

        // Usage screen keys
        match code {
            KeyCode::Char('j') | KeyCode::Down => self.state.select_next(),
            KeyCode::Char('k') | KeyCode::Up => self.state.select_previous(),
            KeyCode::Char('g') => self.state.select_first(),
            KeyCode::Char('G') => self.state.select_last(),
            KeyCode::Char(' ') => self.state.toggle_selected(),
            KeyCode::Char('a') => self.state.toggle_select_all(),
            KeyCode::Char('m') => self.state.grab_row(),
            KeyCode::Char('t') => self.state.cycle_time_range(),
            KeyCode::Enter => self.state.open_detail(),
            KeyCode::Esc => self.state.close_detail(),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signed_in_app() -> App {
        let mut app = App::new(Settings::default());
        app.state.open_login();
        for c in "a@b.com".chars() {
            app.state.auth_form.as_mut().unwrap().input_char(c);
        }
        app.state.auth_form.as_mut().unwrap().focus_next();
        for c in "123456".chars() {
            app.state.auth_form.as_mut().unwrap().input_char(c);
        }
        app.state.submit_auth_form();
        app.state.navigate("/dashboard/usage");
        app
    }

    #[test]
    fn test_app_creation() {
        let app = App::new(Settings::default());
        assert_eq!(app.state.screen(), Screen::Landing);
    }

    #[test]
    fn test_quit_key() {
        let mut app = App::new(Settings::default());
        app.handle_key(KeyCode::Char('q'), KeyModifiers::NONE);
        assert!(!app.state.running);
    }

    #[test]
    fn test_landing_keys_open_forms() {
        let mut app = App::new(Settings::default());
        app.handle_key(KeyCode::Char('l'), KeyModifiers::NONE);
        assert!(app.state.auth_form.is_some());
        app.handle_key(KeyCode::Esc, KeyModifiers::NONE);
        assert!(app.state.auth_form.is_none());
    }

    #[test]
    fn test_form_keys_type_and_submit() {
        let mut app = App::new(Settings::default());
        app.handle_key(KeyCode::Char('l'), KeyModifiers::NONE);
        for c in "a@b.com".chars() {
            app.handle_key(KeyCode::Char(c), KeyModifiers::NONE);
        }
        app.handle_key(KeyCode::Tab, KeyModifiers::NONE);
        for c in "123456".chars() {
            app.handle_key(KeyCode::Char(c), KeyModifiers::NONE);
        }
        app.handle_key(KeyCode::Enter, KeyModifiers::NONE);

        assert!(app.state.session.is_authenticated());
        assert_eq!(app.state.route(), "/dashboard");
    }

    #[test]
    fn test_usage_keys_drive_table() {
        let mut app = signed_in_app();
        assert_eq!(app.state.screen(), Screen::Usage);

        app.handle_key(KeyCode::Char('j'), KeyModifiers::NONE);
        assert_eq!(app.state.cursor, 1);

        app.handle_key(KeyCode::Char(' '), KeyModifiers::NONE);
        assert_eq!(app.state.selection.len(), 1);

        app.handle_key(KeyCode::Enter, KeyModifiers::NONE);
        assert!(app.state.detail.current().is_some());
        app.handle_key(KeyCode::Esc, KeyModifiers::NONE);
        assert!(app.state.detail.current().is_none());
    }

    #[test]
    fn test_grab_mode_keys() {
        let mut app = signed_in_app();
        let first = app.state.rows.at(0).unwrap().id.clone();

        app.handle_key(KeyCode::Char('m'), KeyModifiers::NONE);
        assert!(app.state.drag.is_dragging());

        // Selection keys are not reachable while grabbing
        app.handle_key(KeyCode::Char(' '), KeyModifiers::NONE);
        assert!(app.state.selection.is_empty());

        app.handle_key(KeyCode::Char('j'), KeyModifiers::NONE);
        app.handle_key(KeyCode::Char('j'), KeyModifiers::NONE);
        app.handle_key(KeyCode::Enter, KeyModifiers::NONE);

        assert!(!app.state.drag.is_dragging());
        assert_eq!(app.state.rows.at(1).unwrap().id, first);
    }

    #[test]
    fn test_help_closes_on_any_key() {
        let mut app = signed_in_app();
        app.handle_key(KeyCode::Char('?'), KeyModifiers::NONE);
        assert!(app.state.show_help);
        app.handle_key(KeyCode::Char('j'), KeyModifiers::NONE);
        assert!(!app.state.show_help);
        // The key that closed help is swallowed
        assert_eq!(app.state.cursor, 0);
    }

    #[test]
    fn test_tab_cycles_screens() {
        let mut app = signed_in_app();
        app.handle_key(KeyCode::Tab, KeyModifiers::NONE);
        assert_ne!(app.state.route(), "/dashboard/usage");
    }

    #[test]
    fn test_sign_out_key() {
        let mut app = signed_in_app();
        app.handle_key(KeyCode::Char('o'), KeyModifiers::NONE);
        assert!(!app.state.session.is_authenticated());
        assert_eq!(app.state.screen(), Screen::Landing);
    }
}
