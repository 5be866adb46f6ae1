use std::time::{Duration, Instant};

use chrono::{Local, Utc};
use crossterm::event::{self, Event, KeyEvent};
use tokio::sync::watch;

use domain::{
    seed, Assistant, BudgetCategory, BudgetDraft, MonthCursor, SendOutcome, SpendingSlice,
    TimeFrame, Transaction, TransactionDraft, TransactionQuery,
};
use identity::{
    AuthSession, IdentityGateway, RestConfig, RestProvider, SessionEvent,
};

use crate::{
    config::AppConfig,
    error::{AppError, Result},
    ui,
    ui::keymap::AppAction,
};

const TOAST_LIFETIME: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Home,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Overview,
    Transactions,
    Budget,
    Assistant,
    Profile,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Overview,
        Section::Transactions,
        Section::Budget,
        Section::Assistant,
        Section::Profile,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Transactions => "Transactions",
            Self::Budget => "Budget",
            Self::Assistant => "Assistant",
            Self::Profile => "Profile",
        }
    }

    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Overview => Self::Transactions,
            Self::Transactions => Self::Budget,
            Self::Budget => Self::Assistant,
            Self::Assistant => Self::Profile,
            Self::Profile => Self::Overview,
        }
    }

    #[must_use]
    pub fn prev(self) -> Self {
        match self {
            Self::Overview => Self::Profile,
            Self::Transactions => Self::Overview,
            Self::Budget => Self::Transactions,
            Self::Assistant => Self::Budget,
            Self::Profile => Self::Assistant,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    Email,
    Password,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    SignIn,
    SignUp,
}

impl AuthMode {
    pub fn label(self) -> &'static str {
        match self {
            Self::SignIn => "Log In",
            Self::SignUp => "Sign Up",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::SignIn => Self::SignUp,
            Self::SignUp => Self::SignIn,
        }
    }
}

#[derive(Debug)]
pub struct LoginState {
    pub email: String,
    pub password: String,
    pub focus: LoginField,
    pub mode: AuthMode,
    pub busy: bool,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionsMode {
    List,
    Search,
    Add,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionField {
    Title,
    Amount,
}

#[derive(Debug)]
pub struct TransactionsState {
    pub ledger: Vec<Transaction>,
    pub query: TransactionQuery,
    pub selected: usize,
    pub mode: TransactionsMode,
    pub draft: TransactionDraft,
    pub draft_focus: TransactionField,
    pub category_index: usize,
}

impl TransactionsState {
    fn new() -> Self {
        Self {
            ledger: seed::transactions(),
            query: TransactionQuery::default(),
            selected: 0,
            mode: TransactionsMode::List,
            draft: TransactionDraft::new(Local::now().date_naive()),
            draft_focus: TransactionField::Title,
            category_index: 0,
        }
    }

    /// The filtered view, recomputed on demand.
    pub fn visible(&self) -> Vec<&Transaction> {
        domain::filter(&self.ledger, &self.query)
    }

    fn select_next(&mut self) {
        let len = self.visible().len();
        if len > 0 {
            self.selected = (self.selected + 1).min(len - 1);
        }
    }

    fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn reset_draft(&mut self) {
        self.draft = TransactionDraft::new(Local::now().date_naive());
        self.draft_focus = TransactionField::Title;
        self.category_index = 0;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetMode {
    View,
    Add,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetField {
    Name,
    Amount,
}

#[derive(Debug)]
pub struct BudgetState {
    pub categories: Vec<BudgetCategory>,
    pub month: MonthCursor,
    pub selected: usize,
    pub mode: BudgetMode,
    pub draft: BudgetDraft,
    pub draft_focus: BudgetField,
}

impl BudgetState {
    fn new() -> Self {
        Self {
            categories: seed::budgets(),
            month: MonthCursor::at(Local::now().date_naive()),
            selected: 0,
            mode: BudgetMode::View,
            draft: BudgetDraft::default(),
            draft_focus: BudgetField::Name,
        }
    }

    fn select_next(&mut self) {
        if !self.categories.is_empty() {
            self.selected = (self.selected + 1).min(self.categories.len() - 1);
        }
    }

    fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }
}

#[derive(Debug)]
pub struct OverviewState {
    pub account: domain::AccountOverview,
    pub slices: Vec<SpendingSlice>,
    pub time_frame: TimeFrame,
}

#[derive(Debug)]
pub struct AssistantState {
    pub log: Assistant,
    pub input: String,
}

#[derive(Debug)]
pub struct ProfileState {
    pub confirm_sign_out: bool,
    pub notifications: bool,
    pub dark_mode: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Error,
}

#[derive(Debug)]
pub struct ToastState {
    pub message: String,
    pub level: ToastLevel,
    expires: Instant,
}

#[derive(Debug)]
pub struct AppState {
    pub screen: Screen,
    pub section: Section,
    pub login: LoginState,
    pub overview: OverviewState,
    pub transactions: TransactionsState,
    pub budget: BudgetState,
    pub assistant: AssistantState,
    pub profile: ProfileState,
    pub session: AuthSession,
    pub toast: Option<ToastState>,
}

pub struct App {
    gateway: IdentityGateway<RestProvider>,
    session_rx: watch::Receiver<AuthSession>,
    pub state: AppState,
    should_quit: bool,
}

impl App {
    pub fn new(config: AppConfig) -> Result<Self> {
        let provider = RestProvider::new(&RestConfig {
            api_key: config.api_key.clone(),
            base_url: config.auth_url.clone(),
        })
        .map_err(|err| AppError::Terminal(err.to_string()))?;
        let gateway = IdentityGateway::new(provider);
        let session_rx = gateway.subscribe();

        let state = AppState {
            screen: Screen::Login,
            section: Section::Overview,
            login: LoginState {
                email: config.email.clone(),
                password: String::new(),
                focus: LoginField::Email,
                mode: AuthMode::SignIn,
                busy: false,
                message: None,
            },
            overview: OverviewState {
                account: seed::overview(),
                slices: seed::spending_slices(),
                time_frame: TimeFrame::default(),
            },
            transactions: TransactionsState::new(),
            budget: BudgetState::new(),
            assistant: AssistantState {
                log: Assistant::new(seed::ASSISTANT_WELCOME),
                input: String::new(),
            },
            profile: ProfileState {
                confirm_sign_out: false,
                notifications: true,
                dark_mode: false,
            },
            session: AuthSession::default(),
            toast: None,
        };

        Ok(Self {
            gateway,
            session_rx,
            state,
            should_quit: false,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        let mut terminal = ui::setup_terminal()?;
        let result = self.event_loop(&mut terminal).await;
        ui::restore_terminal(&mut terminal)?;
        result
    }

    async fn event_loop(&mut self, terminal: &mut ui::Terminal) -> Result<()> {
        let tick_rate = Duration::from_millis(200);

        while !self.should_quit {
            self.on_tick().await;

            terminal
                .draw(|frame| ui::render(frame, &self.state))
                .map_err(|err| AppError::Terminal(err.to_string()))?;

            if event::poll(tick_rate)? {
                match event::read()? {
                    Event::Key(key) => self.handle_key(key).await,
                    Event::Resize(_, _) => {}
                    _ => {}
                }
            }
        }

        Ok(())
    }

    /// Tick work: pending assistant reply, toast expiry, session changes,
    /// token expiry.
    async fn on_tick(&mut self) {
        let now = Instant::now();

        self.state.assistant.log.poll(now);

        if self
            .state
            .toast
            .as_ref()
            .is_some_and(|toast| toast.expires <= now)
        {
            self.state.toast = None;
        }

        if self.session_rx.has_changed().unwrap_or(false) {
            let snapshot = self.session_rx.borrow_and_update().clone();
            self.apply_session(snapshot);
        }

        // Mirror token expiry through the dispatcher like any other
        // externally observed change.
        if let Some(user) = &self.state.session.user {
            if user.expires_at <= Utc::now() {
                self.gateway.emit(SessionEvent::SignedOut).await;
                self.toast("Session expired. Please sign in again.", ToastLevel::Info);
            }
        }
    }

    fn apply_session(&mut self, snapshot: AuthSession) {
        let was_authenticated = self.state.session.authenticated;
        self.state.session = snapshot;

        if self.state.session.authenticated {
            self.state.screen = Screen::Home;
            self.state.login.busy = false;
            self.state.login.message = None;
            self.state.login.password.clear();
        } else {
            self.state.screen = Screen::Login;
            self.state.login.busy = false;
            if was_authenticated {
                self.state.profile.confirm_sign_out = false;
            }
            if let Some(error) = self.state.session.last_error.clone() {
                self.state.login.message = Some(error);
            }
        }
    }

    fn toast(&mut self, message: &str, level: ToastLevel) {
        self.state.toast = Some(ToastState {
            message: message.to_string(),
            level,
            expires: Instant::now() + TOAST_LIFETIME,
        });
    }

    async fn handle_key(&mut self, key: KeyEvent) {
        let action = ui::keymap::map_key(key);
        if action == AppAction::Quit {
            self.should_quit = true;
            return;
        }

        match self.state.screen {
            Screen::Login => self.handle_login_key(action).await,
            Screen::Home => self.handle_home_key(action).await,
        }
    }

    async fn handle_login_key(&mut self, action: AppAction) {
        match action {
            AppAction::NextField => {
                self.state.login.focus = match self.state.login.focus {
                    LoginField::Email => LoginField::Password,
                    LoginField::Password => LoginField::Email,
                };
            }
            AppAction::ToggleMode => {
                self.state.login.mode = self.state.login.mode.toggled();
                self.state.login.message = None;
            }
            AppAction::ResetPassword => self.request_password_reset().await,
            AppAction::Submit => self.attempt_auth().await,
            AppAction::Backspace => {
                self.active_login_field_mut().pop();
            }
            AppAction::Input(ch) => {
                self.active_login_field_mut().push(ch);
            }
            AppAction::Cancel => {
                self.state.login.message = None;
            }
            _ => {}
        }
    }

    fn active_login_field_mut(&mut self) -> &mut String {
        match self.state.login.focus {
            LoginField::Email => &mut self.state.login.email,
            LoginField::Password => &mut self.state.login.password,
        }
    }

    async fn attempt_auth(&mut self) {
        let email = self.state.login.email.trim().to_string();
        let password = self.state.login.password.trim().to_string();

        if email.is_empty() || password.is_empty() {
            self.state.login.message = Some("Enter your email and password.".to_string());
            return;
        }

        self.state.login.busy = true;
        let result = match self.state.login.mode {
            AuthMode::SignIn => self.gateway.sign_in(&email, &password).await,
            AuthMode::SignUp => self.gateway.sign_up(&email, &password).await,
        };
        self.state.login.busy = false;

        // Success flips the session watch channel; the next tick moves us
        // to the home screen. Failures surface verbatim.
        if let Err(err) = result {
            self.state.login.message = Some(err.to_string());
        }
    }

    async fn request_password_reset(&mut self) {
        let email = self.state.login.email.trim().to_string();
        if email.is_empty() {
            self.state.login.message = Some("Please enter your email address".to_string());
            return;
        }

        match self.gateway.request_password_reset(&email).await {
            Ok(()) => {
                self.state.login.message =
                    Some("Password reset email sent. Please check your inbox.".to_string());
            }
            Err(err) => {
                self.state.login.message = Some(err.to_string());
            }
        }
    }

    async fn handle_home_key(&mut self, action: AppAction) {
        // Editing contexts capture input before navigation.
        match self.state.section {
            Section::Transactions if self.state.transactions.mode != TransactionsMode::List => {
                self.handle_transactions_editing(action);
                return;
            }
            Section::Budget if self.state.budget.mode == BudgetMode::Add => {
                self.handle_budget_editing(action);
                return;
            }
            Section::Assistant => {
                if self.handle_assistant_key(action) {
                    return;
                }
            }
            Section::Profile if self.state.profile.confirm_sign_out => {
                self.handle_sign_out_confirm(action).await;
                return;
            }
            _ => {}
        }

        match action {
            AppAction::Left => self.state.section = self.state.section.prev(),
            AppAction::Right => self.state.section = self.state.section.next(),
            AppAction::Up => match self.state.section {
                Section::Transactions => self.state.transactions.select_prev(),
                Section::Budget => self.state.budget.select_prev(),
                _ => {}
            },
            AppAction::Down => match self.state.section {
                Section::Transactions => self.state.transactions.select_next(),
                Section::Budget => self.state.budget.select_next(),
                _ => {}
            },
            AppAction::Input(ch) => self.handle_home_char(ch),
            _ => {}
        }
    }

    fn handle_home_char(&mut self, ch: char) {
        match ch {
            'q' | 'Q' => {
                self.should_quit = true;
                return;
            }
            'o' | 'O' => {
                self.state.section = Section::Overview;
                return;
            }
            't' | 'T' => {
                self.state.section = Section::Transactions;
                return;
            }
            'b' | 'B' => {
                self.state.section = Section::Budget;
                return;
            }
            'a' | 'A' => {
                self.state.section = Section::Assistant;
                return;
            }
            'p' | 'P' => {
                self.state.section = Section::Profile;
                return;
            }
            _ => {}
        }

        match self.state.section {
            Section::Overview => {
                if ch == 'f' {
                    self.state.overview.time_frame = self.state.overview.time_frame.next();
                }
            }
            Section::Transactions => match ch {
                '/' => self.state.transactions.mode = TransactionsMode::Search,
                'f' => {
                    self.state.transactions.query.class =
                        self.state.transactions.query.class.next();
                    self.state.transactions.selected = 0;
                }
                'c' => {
                    self.state.transactions.query = TransactionQuery::default();
                    self.state.transactions.selected = 0;
                }
                'n' => {
                    self.state.transactions.reset_draft();
                    self.state.transactions.mode = TransactionsMode::Add;
                }
                'j' => self.state.transactions.select_next(),
                'k' => self.state.transactions.select_prev(),
                _ => {}
            },
            Section::Budget => match ch {
                '[' => self.state.budget.month = self.state.budget.month.prev(),
                ']' => self.state.budget.month = self.state.budget.month.next(),
                'n' => {
                    self.state.budget.draft = BudgetDraft::default();
                    self.state.budget.draft_focus = BudgetField::Name;
                    self.state.budget.mode = BudgetMode::Add;
                }
                'j' => self.state.budget.select_next(),
                'k' => self.state.budget.select_prev(),
                _ => {}
            },
            Section::Assistant => {}
            Section::Profile => match ch {
                's' => self.state.profile.confirm_sign_out = true,
                'n' => self.state.profile.notifications = !self.state.profile.notifications,
                'd' => self.state.profile.dark_mode = !self.state.profile.dark_mode,
                _ => {}
            },
        }
    }

    fn handle_transactions_editing(&mut self, action: AppAction) {
        match self.state.transactions.mode {
            TransactionsMode::Search => match action {
                AppAction::Input(ch) => {
                    self.state.transactions.query.search.push(ch);
                    self.state.transactions.selected = 0;
                }
                AppAction::Backspace => {
                    self.state.transactions.query.search.pop();
                    self.state.transactions.selected = 0;
                }
                AppAction::Submit => self.state.transactions.mode = TransactionsMode::List,
                AppAction::Cancel => {
                    self.state.transactions.query.search.clear();
                    self.state.transactions.selected = 0;
                    self.state.transactions.mode = TransactionsMode::List;
                }
                _ => {}
            },
            TransactionsMode::Add => match action {
                AppAction::NextField => {
                    self.state.transactions.draft_focus = match self.state.transactions.draft_focus
                    {
                        TransactionField::Title => TransactionField::Amount,
                        TransactionField::Amount => TransactionField::Title,
                    };
                }
                AppAction::Left | AppAction::Right => {
                    let len = domain::CATEGORIES.len();
                    let index = &mut self.state.transactions.category_index;
                    *index = if action == AppAction::Left {
                        (*index + len - 1) % len
                    } else {
                        (*index + 1) % len
                    };
                    self.state.transactions.draft.category =
                        domain::CATEGORIES[*index].to_string();
                }
                AppAction::Up | AppAction::Down => {
                    self.state.transactions.draft.kind =
                        self.state.transactions.draft.kind.toggled();
                }
                AppAction::Input(ch) => match self.state.transactions.draft_focus {
                    TransactionField::Title => self.state.transactions.draft.title.push(ch),
                    TransactionField::Amount => self.state.transactions.draft.amount.push(ch),
                },
                AppAction::Backspace => {
                    match self.state.transactions.draft_focus {
                        TransactionField::Title => self.state.transactions.draft.title.pop(),
                        TransactionField::Amount => self.state.transactions.draft.amount.pop(),
                    };
                }
                AppAction::Submit => self.save_transaction_draft(),
                AppAction::Cancel => self.state.transactions.mode = TransactionsMode::List,
                _ => {}
            },
            TransactionsMode::List => {}
        }
    }

    /// Validation gates the save; the save itself never touches the seed
    /// ledger (the sample data is read-only by design of the app).
    fn save_transaction_draft(&mut self) {
        match self.state.transactions.draft.validate() {
            Ok(amount) => {
                tracing::debug!(%amount, "transaction draft accepted (not persisted)");
                self.state.transactions.mode = TransactionsMode::List;
                self.toast("Transaction saved.", ToastLevel::Success);
            }
            Err(err) => self.toast(&err.to_string(), ToastLevel::Error),
        }
    }

    fn handle_budget_editing(&mut self, action: AppAction) {
        match action {
            AppAction::NextField => {
                self.state.budget.draft_focus = match self.state.budget.draft_focus {
                    BudgetField::Name => BudgetField::Amount,
                    BudgetField::Amount => BudgetField::Name,
                };
            }
            AppAction::Input(ch) => match self.state.budget.draft_focus {
                BudgetField::Name => self.state.budget.draft.name.push(ch),
                BudgetField::Amount => self.state.budget.draft.amount.push(ch),
            },
            AppAction::Backspace => {
                match self.state.budget.draft_focus {
                    BudgetField::Name => self.state.budget.draft.name.pop(),
                    BudgetField::Amount => self.state.budget.draft.amount.pop(),
                };
            }
            AppAction::Submit => match self.state.budget.draft.validate() {
                Ok(limit) => {
                    tracing::debug!(%limit, "budget draft accepted (not persisted)");
                    self.state.budget.mode = BudgetMode::View;
                    self.toast("Budget category saved.", ToastLevel::Success);
                }
                Err(err) => self.toast(&err.to_string(), ToastLevel::Error),
            },
            AppAction::Cancel => self.state.budget.mode = BudgetMode::View,
            _ => {}
        }
    }

    /// Returns `true` when the action was consumed by the assistant input.
    fn handle_assistant_key(&mut self, action: AppAction) -> bool {
        match action {
            AppAction::Input(ch) => {
                // Digits pick a suggestion chip while the input is empty.
                if self.state.assistant.input.is_empty() {
                    if let Some(index) = ch.to_digit(10) {
                        let index = index as usize;
                        if (1..=seed::ASSISTANT_SUGGESTIONS.len()).contains(&index) {
                            self.send_chat(seed::ASSISTANT_SUGGESTIONS[index - 1].to_string());
                            return true;
                        }
                    }
                }
                self.state.assistant.input.push(ch);
                true
            }
            AppAction::Backspace => {
                self.state.assistant.input.pop();
                true
            }
            AppAction::Submit => {
                let text = self.state.assistant.input.clone();
                self.send_chat(text);
                true
            }
            AppAction::Cancel => {
                self.state.assistant.input.clear();
                true
            }
            _ => false,
        }
    }

    fn send_chat(&mut self, text: String) {
        match self.state.assistant.log.send(&text, Instant::now()) {
            SendOutcome::Sent => self.state.assistant.input.clear(),
            SendOutcome::Busy => {
                self.toast("Still thinking about the last question…", ToastLevel::Info);
            }
            SendOutcome::Empty => {}
        }
    }

    async fn handle_sign_out_confirm(&mut self, action: AppAction) {
        match action {
            AppAction::Submit => {
                self.gateway.sign_out().await;
                self.state.profile.confirm_sign_out = false;
            }
            AppAction::Cancel => self.state.profile.confirm_sign_out = false,
            AppAction::Input('y') => {
                self.gateway.sign_out().await;
                self.state.profile.confirm_sign_out = false;
            }
            AppAction::Input('n') => self.state.profile.confirm_sign_out = false,
            _ => {}
        }
    }
}
