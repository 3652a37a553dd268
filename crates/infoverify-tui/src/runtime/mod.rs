//! TUI runtime: owns the terminal, runs the event loop, executes effects.
//!
//! All side effects happen here. The reducer stays pure and produces effects;
//! this module carries them out.
//!
//! ## Inbox Pattern
//!
//! Spawned tasks send their `TaskStarted`/`TaskCompleted` events to
//! `inbox_tx`; the loop drains `inbox_rx` every frame and feeds them to the
//! reducer alongside terminal input.

mod handlers;
mod inbox;

use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use inbox::{UiEventReceiver, UiEventSender};
use infoverify_core::config::Config;
use infoverify_core::processing::DocumentProcessor;
use infoverify_core::session::Session;
use infoverify_core::storage::LocalStorage;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::common::{TaskCompleted, TaskId, TaskKind, TaskStarted};
use crate::effects::UiEffect;
use crate::events::{TaskResult, UiEvent};
use crate::router::{self, Route};
use crate::state::AppState;
use crate::terminal::{self, Tui};
use crate::{render, update};

/// Tick interval while something is happening (~60fps).
pub const FRAME_DURATION: Duration = Duration::from_millis(16);

/// Tick interval when idle.
pub const IDLE_POLL_DURATION: Duration = Duration::from_millis(100);

pub struct TuiRuntime {
    terminal: Tui,
    pub state: AppState,
    storage: LocalStorage,
    processor: Arc<dyn DocumentProcessor>,
    inbox_tx: UiEventSender,
    inbox_rx: UiEventReceiver,
    last_tick: Instant,
    last_terminal_event: Instant,
}

impl TuiRuntime {
    /// Takes over the terminal and opens `start` (subject to the session guard).
    pub fn new(
        config: Config,
        storage: LocalStorage,
        session: Session,
        processor: Arc<dyn DocumentProcessor>,
        start: Route,
    ) -> Result<Self> {
        // Hook first so a panic during setup still restores the terminal.
        terminal::install_panic_hook();
        let terminal = terminal::setup_terminal().context("Failed to setup terminal")?;

        let (inbox_tx, inbox_rx) = mpsc::unbounded_channel();
        let now = Instant::now();
        let mut runtime = Self {
            terminal,
            state: AppState::new(config, session),
            storage,
            processor,
            inbox_tx,
            inbox_rx,
            last_tick: now,
            last_terminal_event: now,
        };

        let effects = router::navigate(&mut runtime.state, start);
        runtime.execute_effects(effects);
        Ok(runtime)
    }

    /// Runs until a quit effect is executed.
    pub fn run(&mut self) -> Result<()> {
        tracing::info!(route = %self.state.tui.route, "tui started");
        let mut dirty = true;

        while !self.state.tui.should_quit {
            let events = self.collect_events()?;

            for event in events {
                if matches!(event, UiEvent::Terminal(_)) {
                    self.last_terminal_event = Instant::now();
                }
                // Rendering is batched to tick cadence.
                if matches!(event, UiEvent::Tick) {
                    dirty = true;
                }
                self.dispatch_event(event);
            }

            if dirty {
                self.terminal.draw(|frame| render::render(&self.state, frame))?;
                dirty = false;
            }
        }

        tracing::info!("tui stopped");
        Ok(())
    }

    // ========================================================================
    // Event Collection
    // ========================================================================

    fn collect_events(&mut self) -> Result<Vec<UiEvent>> {
        let mut events = Vec::new();

        let needs_fast_poll = self.state.tui.tasks.is_any_running()
            || !self.state.tui.notifications.is_empty()
            || self.last_terminal_event.elapsed() < IDLE_POLL_DURATION;
        let tick_interval = if needs_fast_poll {
            FRAME_DURATION
        } else {
            IDLE_POLL_DURATION
        };

        while let Ok(ev) = self.inbox_rx.try_recv() {
            events.push(ev);
        }

        // Block until the next tick is due unless there is already work queued.
        let poll_duration = if events.is_empty() {
            tick_interval.saturating_sub(self.last_tick.elapsed())
        } else {
            Duration::ZERO
        };
        if event::poll(poll_duration)? {
            events.push(UiEvent::Terminal(event::read()?));
            while event::poll(Duration::ZERO)? {
                events.push(UiEvent::Terminal(event::read()?));
            }
        }

        if self.last_tick.elapsed() >= tick_interval {
            events.push(UiEvent::Tick);
            self.last_tick = Instant::now();
        }

        Ok(events)
    }

    // ========================================================================
    // Effect Dispatch
    // ========================================================================

    fn dispatch_event(&mut self, event: UiEvent) {
        let effects = update::update(&mut self.state, event);
        self.execute_effects(effects);
    }

    fn execute_effects(&mut self, effects: Vec<UiEffect>) {
        for effect in effects {
            self.execute_effect(effect);
        }
    }

    /// Spawns `f` with a uniform `TaskStarted`/`TaskCompleted` lifecycle.
    fn spawn_task<F, Fut>(&self, kind: TaskKind, id: TaskId, cancelable: bool, f: F)
    where
        F: FnOnce(Option<CancellationToken>) -> Fut + Send + 'static,
        Fut: Future<Output = TaskResult> + Send + 'static,
    {
        let tx = self.inbox_tx.clone();
        let cancel = cancelable.then(CancellationToken::new);
        let started = TaskStarted {
            id,
            cancel: cancel.clone(),
        };
        tracing::debug!(?kind, id = id.0, "spawn task");
        // Sends only fail once the runtime has dropped the receiver during shutdown.
        if tx.send(UiEvent::TaskStarted { kind, started }).is_err() {
            tracing::trace!(?kind, "inbox closed before task start");
        }
        tokio::spawn(async move {
            let result = f(cancel).await;
            let completed = UiEvent::TaskCompleted {
                kind,
                completed: TaskCompleted { id, result },
            };
            if tx.send(completed).is_err() {
                tracing::trace!(?kind, "inbox closed before task completion");
            }
        });
    }

    fn execute_effect(&mut self, effect: UiEffect) {
        match effect {
            UiEffect::Quit => {
                self.state.tui.should_quit = true;
            }

            UiEffect::CancelTask { kind, token } => {
                tracing::debug!(?kind, "cancel task");
                if let Some(cancel) = token {
                    cancel.cancel();
                }
            }

            UiEffect::StartAuthRequest { task, delay } => {
                self.spawn_task(TaskKind::AuthRequest, task, true, move |cancel| {
                    handlers::auth_request(delay, cancel)
                });
            }

            UiEffect::PersistSession => {
                if let Err(err) = self.state.tui.session.persist(&self.storage) {
                    let message = format!("{err:#}");
                    tracing::warn!(error = %message, "failed to persist session");
                    self.dispatch_event(UiEvent::SessionPersistFailed(message));
                }
            }

            UiEffect::DiscoverFiles { task } => {
                let root = self.state.tui.config.documents.root.clone();
                self.spawn_task(TaskKind::FileDiscovery, task, true, move |cancel| {
                    handlers::file_discovery(root, cancel)
                });
            }

            UiEffect::ProcessDocuments { task, records } => {
                let processor = Arc::clone(&self.processor);
                self.spawn_task(TaskKind::DocumentProcessing, task, false, move |_| {
                    handlers::process_documents(processor, records)
                });
            }
        }
    }
}

impl Drop for TuiRuntime {
    fn drop(&mut self) {
        let _ = terminal::restore_terminal();
    }
}
