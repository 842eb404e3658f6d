use tracing::debug;

use quotadeck_core::auth::{
    authenticate, check, validate_login, validate_signup, FormState, RouteOutcome, Session,
};
use quotadeck_core::metrics::UsageAnalytics;
use quotadeck_core::overview::NAV_ITEMS;
use quotadeck_core::{Aggregate, DetailProjector, DragController, RowStore, SelectionSet};

/// Which screen the current route renders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Public welcome screen with the auth modals
    Landing,
    /// Protected overview: stat cards, model shares, activity feed
    Overview,
    /// Protected usage screen: chart, table, detail panel
    Usage,
    /// Protected route without a dedicated screen yet
    Placeholder(&'static str),
}

/// Which auth modal is open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthFormKind {
    Login,
    Signup,
}

/// Focusable auth form field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthField {
    Name,
    Email,
    Password,
}

/// State of the open login/signup modal
#[derive(Debug, Clone)]
pub struct AuthForm {
    pub kind: AuthFormKind,
    pub focus: AuthField,
    pub name: String,
    pub email: String,
    pub password: String,
    /// Byte offset of the cursor within the focused field
    pub cursor: usize,
    /// Outcome of the last submission, if any
    pub result: Option<FormState>,
}

impl AuthForm {
    fn new(kind: AuthFormKind) -> Self {
        let focus = match kind {
            AuthFormKind::Login => AuthField::Email,
            AuthFormKind::Signup => AuthField::Name,
        };
        Self {
            kind,
            focus,
            name: String::new(),
            email: String::new(),
            password: String::new(),
            cursor: 0,
            result: None,
        }
    }

    /// Fields in focus order for this form kind
    pub fn fields(&self) -> &'static [AuthField] {
        match self.kind {
            AuthFormKind::Login => &[AuthField::Email, AuthField::Password],
            AuthFormKind::Signup => &[AuthField::Name, AuthField::Email, AuthField::Password],
        }
    }

    /// Value of a field
    pub fn value(&self, field: AuthField) -> &str {
        match field {
            AuthField::Name => &self.name,
            AuthField::Email => &self.email,
            AuthField::Password => &self.password,
        }
    }

    fn value_mut(&mut self) -> &mut String {
        match self.focus {
            AuthField::Name => &mut self.name,
            AuthField::Email => &mut self.email,
            AuthField::Password => &mut self.password,
        }
    }

    /// Move focus to the next field, wrapping
    pub fn focus_next(&mut self) {
        self.shift_focus(1);
    }

    /// Move focus to the previous field, wrapping
    pub fn focus_previous(&mut self) {
        self.shift_focus(-1);
    }

    fn shift_focus(&mut self, delta: isize) {
        let fields = self.fields();
        let len = fields.len() as isize;
        let current = fields.iter().position(|f| *f == self.focus).unwrap_or(0) as isize;
        let next = (current + delta).rem_euclid(len) as usize;
        self.focus = fields[next];
        self.cursor = self.value(self.focus).len();
    }

    /// Insert a character at the cursor in the focused field
    pub fn input_char(&mut self, c: char) {
        let cursor = self.cursor;
        self.value_mut().insert(cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Delete the character before the cursor
    pub fn input_backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let cursor = self.cursor;
        let value = self.value_mut();
        let prev_boundary = value[..cursor]
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .unwrap_or(0);
        value.remove(prev_boundary);
        self.cursor = prev_boundary;
    }

    /// Move cursor left within the focused field
    pub fn cursor_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.value(self.focus)[..self.cursor]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    /// Move cursor right within the focused field
    pub fn cursor_right(&mut self) {
        let value = self.value(self.focus);
        if self.cursor < value.len() {
            if let Some(c) = value[self.cursor..].chars().next() {
                self.cursor += c.len_utf8();
            }
        }
    }
}

/// Application state. All mutation happens through these methods, in
/// the order input events arrive; there is no background writer.
#[derive(Debug)]
pub struct AppState {
    /// Session value read by every consumer
    pub session: Session,
    /// Current route path
    route: String,
    /// Ordered usage rows
    pub rows: RowStore,
    /// Selected row ids
    pub selection: SelectionSet,
    /// In-progress grab-reorder gesture
    pub drag: DragController,
    /// Detail side panel projection
    pub detail: DetailProjector,
    /// Time-ranged analytics chart state
    pub analytics: UsageAnalytics,
    /// Table cursor position
    pub cursor: usize,
    /// Sidebar cursor position
    pub nav_index: usize,
    /// Open auth modal, if any
    pub auth_form: Option<AuthForm>,
    /// Whether help popup is shown
    pub show_help: bool,
    /// Transient status line message
    pub status_message: Option<String>,
    /// Whether the app is running
    pub running: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            session: Session::unauthenticated(),
            route: "/".to_string(),
            rows: RowStore::seeded(),
            selection: SelectionSet::new(),
            drag: DragController::new(),
            detail: DetailProjector::new(),
            analytics: UsageAnalytics::new(),
            cursor: 0,
            nav_index: 0,
            auth_form: None,
            show_help: false,
            status_message: None,
            running: true,
        }
    }

    pub fn route(&self) -> &str {
        &self.route
    }

    /// Screen derived from the current route
    pub fn screen(&self) -> Screen {
        match self.route.as_str() {
            "/" => Screen::Landing,
            "/dashboard" => Screen::Overview,
            "/dashboard/usage" => Screen::Usage,
            other => {
                let title = NAV_ITEMS
                    .iter()
                    .find(|item| item.route == other)
                    .map(|item| item.title)
                    .unwrap_or("Not found");
                Screen::Placeholder(title)
            }
        }
    }

    /// Request navigation. The route guard decides the outcome; an
    /// unauthenticated visit to a protected path lands on the root.
    pub fn navigate(&mut self, path: &str) {
        let target = match check(path, self.session.is_authenticated()) {
            RouteOutcome::PassThrough => path.to_string(),
            RouteOutcome::Redirect(to) => to,
        };
        debug!(requested = path, resolved = %target, "navigate");

        if target != self.route {
            // Leaving the usage screen abandons any open gesture/panel
            self.drag.cancel();
            self.detail.close();
        }
        self.route = target;
        if let Some(index) = NAV_ITEMS.iter().position(|item| item.route == self.route) {
            self.nav_index = index;
        }
    }

    /// Stop the application
    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    // =========================================
    // Table cursor and selection
    // =========================================

    /// Row id under the table cursor
    pub fn cursor_row_id(&self) -> Option<String> {
        self.rows.at(self.cursor).map(|row| row.id.clone())
    }

    /// Move the table cursor down; while grabbing, the hover target
    /// follows the cursor.
    pub fn select_next(&mut self) {
        if !self.rows.is_empty() && self.cursor < self.rows.len() - 1 {
            self.cursor += 1;
            self.sync_hover();
        }
    }

    /// Move the table cursor up
    pub fn select_previous(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.sync_hover();
        }
    }

    pub fn select_first(&mut self) {
        if !self.rows.is_empty() {
            self.cursor = 0;
            self.sync_hover();
        }
    }

    pub fn select_last(&mut self) {
        if !self.rows.is_empty() {
            self.cursor = self.rows.len() - 1;
            self.sync_hover();
        }
    }

    fn sync_hover(&mut self) {
        if self.drag.is_dragging() {
            match self.cursor_row_id() {
                Some(id) => self.drag.hover_over(&id),
                None => self.drag.hover_leave(),
            }
        }
    }

    /// Toggle selection of the row under the cursor
    pub fn toggle_selected(&mut self) {
        if let Some(id) = self.cursor_row_id() {
            self.selection.toggle(&id);
        }
    }

    /// Header checkbox semantics: everything selected clears, anything
    /// less selects all current rows.
    pub fn toggle_select_all(&mut self) {
        match self.aggregate() {
            Aggregate::All => self.selection.clear(),
            Aggregate::None | Aggregate::Some => self.selection.select_all(self.rows.ids()),
        }
    }

    /// Tri-state selection aggregate against current store membership
    pub fn aggregate(&self) -> Aggregate {
        self.selection.aggregate(&self.rows.ids())
    }

    // =========================================
    // Grab-reorder gesture
    // =========================================

    /// Pick up the row under the cursor
    pub fn grab_row(&mut self) {
        if let Some(id) = self.cursor_row_id() {
            self.drag.grab(&id);
        }
    }

    /// Drop the grabbed row onto the row under the cursor
    pub fn drop_row(&mut self) {
        let Some(target) = self.cursor_row_id() else {
            self.drag.cancel();
            return;
        };
        let dragged = self.drag.dragged_id().map(str::to_string);
        if self.drag.drop_on(&target, &mut self.rows) {
            // Keep the cursor on the row that moved
            if let Some(position) = dragged.as_deref().and_then(|id| self.rows.position(id)) {
                self.cursor = position;
            }
        }
    }

    /// Abandon the gesture without touching the row order
    pub fn cancel_grab(&mut self) {
        self.drag.cancel();
    }

    // =========================================
    // Detail panel and chart
    // =========================================

    /// Open the detail panel for the row under the cursor
    pub fn open_detail(&mut self) {
        if let Some(row) = self.rows.at(self.cursor).cloned() {
            self.detail.open(&row);
        }
    }

    pub fn close_detail(&mut self) {
        self.detail.close();
    }

    /// Cycle the analytics chart time range
    pub fn cycle_time_range(&mut self) {
        self.analytics.cycle_range();
    }

    // =========================================
    // Sidebar navigation
    // =========================================

    /// Move the sidebar cursor and navigate to its route
    pub fn nav_next(&mut self) {
        self.nav_to((self.nav_index + 1) % NAV_ITEMS.len());
    }

    pub fn nav_previous(&mut self) {
        self.nav_to((self.nav_index + NAV_ITEMS.len() - 1) % NAV_ITEMS.len());
    }

    fn nav_to(&mut self, index: usize) {
        self.nav_index = index;
        let route = NAV_ITEMS[index].route.to_string();
        self.navigate(&route);
    }

    // =========================================
    // Auth forms and session
    // =========================================

    pub fn open_login(&mut self) {
        self.auth_form = Some(AuthForm::new(AuthFormKind::Login));
    }

    pub fn open_signup(&mut self) {
        self.auth_form = Some(AuthForm::new(AuthFormKind::Signup));
    }

    /// Switch the open modal between login and signup
    pub fn switch_auth_form(&mut self) {
        match self.auth_form.as_ref().map(|form| form.kind) {
            Some(AuthFormKind::Login) => self.open_signup(),
            Some(AuthFormKind::Signup) => self.open_login(),
            None => {}
        }
    }

    pub fn close_auth_form(&mut self) {
        self.auth_form = None;
    }

    /// Validate the open form; on success sign in and move to the
    /// dashboard, on failure keep the modal open with field errors.
    pub fn submit_auth_form(&mut self) {
        let Some(form) = self.auth_form.as_mut() else {
            return;
        };

        let state = match form.kind {
            AuthFormKind::Login => validate_login(&form.email, &form.password),
            AuthFormKind::Signup => validate_signup(&form.name, &form.email, &form.password),
        };
        if !state.success {
            form.result = Some(state);
            return;
        }

        match authenticate(&form.email, &form.password) {
            Ok(mut user) => {
                // Signup supplies its own display name
                if form.kind == AuthFormKind::Signup {
                    user.name = form.name.trim().to_string();
                }
                self.session.sign_in(user);
                self.status_message = Some(state.message);
                self.auth_form = None;
                self.navigate("/dashboard");
            }
            Err(err) => {
                form.result = Some(FormState {
                    success: false,
                    message: err.to_string(),
                    errors: Default::default(),
                });
            }
        }
    }

    /// Sign out and follow the post-logout redirect
    pub fn sign_out(&mut self) {
        let redirect = self.session.sign_out().to_string();
        self.status_message = Some("Signed out".to_string());
        self.navigate(&redirect);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
