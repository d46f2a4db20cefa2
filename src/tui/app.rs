use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{Frame, Terminal};
use tokio::runtime::Handle;
use tokio::sync::oneshot::{self, error::TryRecvError};
use tracing::{debug, info, warn};

use crate::model::RegistrationRecord;
use crate::submit::{SubmissionHandler, SubmissionResponse};
use crate::wizard::SubmissionStatus;

use super::action::{Action, ScreenState};
use super::error::AppError;
use super::screens::{
    ConfirmationState, HelpState, LandingState, RegisterState, draw_confirmation, draw_help,
    draw_landing, draw_register,
};

/// All screens the app can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// Welcome text and entry into registration.
    Landing,
    /// The multi-step registration form.
    Register,
    /// Shown after the handler accepts a registration.
    Confirmation,
    /// Show keybinding help.
    Help,
}

impl Screen {
    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Landing => "Home",
            Self::Register => "Registration",
            Self::Confirmation => "Confirmation",
            Self::Help => "Help",
        }
    }
}

/// Top-level application state.
///
/// Submissions run on `runtime` while the event loop keeps drawing; the
/// response comes back over a oneshot channel polled on every tick.
pub struct App<H> {
    screen: Screen,
    landing: LandingState,
    register: RegisterState,
    confirmation: ConfirmationState,
    help: HelpState,
    handler: Arc<H>,
    runtime: Handle,
    pending: Option<oneshot::Receiver<SubmissionResponse>>,
    tick_rate: Duration,
    should_quit: bool,
}

impl<H: SubmissionHandler + 'static> App<H> {
    /// Creates a new `App` starting on the [`Screen::Landing`] screen.
    pub fn new(handler: H, runtime: Handle) -> Self {
        Self {
            screen: Screen::Landing,
            landing: LandingState,
            register: RegisterState::default(),
            confirmation: ConfirmationState::new(),
            help: HelpState::new(),
            handler: Arc::new(handler),
            runtime,
            pending: None,
            tick_rate: Duration::from_millis(100),
            should_quit: false,
        }
    }

    /// Sets how long the event loop waits for input before ticking.
    pub fn with_tick_rate(mut self, tick_rate: Duration) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    /// Sets how long failure toasts stay visible.
    pub fn with_toast_duration(mut self, ttl: Duration) -> Self {
        self.register = RegisterState::new(ttl);
        self
    }

    /// Main event loop: draw → poll for input → dispatch → tick.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    pub fn run<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            if event::poll(self.tick_rate)? {
                if let Event::Key(key) = event::read()? {
                    self.handle_key(key);
                }
            }
            self.tick();
        }
        Ok(())
    }

    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        match self.screen {
            Screen::Landing => draw_landing(frame, area),
            Screen::Register => draw_register(&self.register, frame, area),
            Screen::Confirmation => draw_confirmation(&self.confirmation, frame, area),
            Screen::Help => draw_help(&self.help, frame, area),
        }
    }

    /// Handles a key event: global keys first, then screen-specific.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        // Help stays closed while a submission is in flight.
        if key.code == KeyCode::F(1) && self.screen != Screen::Help && !self.is_submitting() {
            self.help.open_from(self.screen);
            self.screen = Screen::Help;
            return;
        }

        let action = match self.screen {
            Screen::Landing => self.landing.handle_key(key),
            Screen::Register => self.register.handle_key(key),
            Screen::Confirmation => self.confirmation.handle_key(key),
            Screen::Help => self.help.handle_key(key),
        };
        self.apply(action);
    }

    /// Collects a finished submission and advances timers.
    pub fn tick(&mut self) {
        if let Some(rx) = self.pending.as_mut() {
            let response = match rx.try_recv() {
                Ok(response) => Some(response),
                Err(TryRecvError::Empty) => None,
                Err(TryRecvError::Closed) => {
                    warn!("submission handler dropped without responding");
                    Some(SubmissionResponse::rejected(""))
                }
            };
            if let Some(response) = response {
                self.pending = None;
                self.complete(response);
            }
        }
        self.register.tick(Instant::now());
    }

    fn complete(&mut self, response: SubmissionResponse) {
        match self.register.finish(response) {
            Ok(SubmissionStatus::Succeeded(message)) => {
                self.confirmation.set_message(message);
                self.register.acknowledge();
                self.screen = Screen::Confirmation;
            }
            Ok(_) => {}
            Err(e) => warn!(error = %e, "discarding submission response"),
        }
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Navigate(screen) => {
                if self.screen == Screen::Register && screen == Screen::Landing {
                    self.abandon();
                }
                debug!(from = ?self.screen, to = ?screen, "navigate");
                self.screen = screen;
            }
            Action::StartRegistration => {
                self.abandon();
                self.screen = Screen::Register;
            }
            Action::Submit(record) => self.dispatch(record),
            Action::Quit => self.should_quit = true,
        }
    }

    /// Hands `record` to the handler without blocking the event loop.
    fn dispatch(&mut self, record: RegistrationRecord) {
        let (tx, rx) = oneshot::channel();
        let handler = Arc::clone(&self.handler);
        info!("dispatching registration to handler");
        self.runtime.spawn(async move {
            let response = handler.submit(record).await;
            let _ = tx.send(response);
        });
        self.pending = Some(rx);
    }

    /// Drops any in-flight submission and clears the form.
    fn abandon(&mut self) {
        if self.pending.take().is_some() {
            info!("abandoning in-flight submission");
        }
        self.register.reset();
    }

    /// Returns the current screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Returns `true` if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns `true` while a submission awaits its response.
    pub fn is_submitting(&self) -> bool {
        self.pending.is_some()
    }

    /// Returns the registration screen state.
    pub fn register(&self) -> &RegisterState {
        &self.register
    }

    /// Returns the confirmation screen state.
    pub fn confirmation(&self) -> &ConfirmationState {
        &self.confirmation
    }
}
