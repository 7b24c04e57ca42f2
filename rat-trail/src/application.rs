//! Terminal host runtime.
//!
//! Plays the part of the browser chrome around a [`Navigator`]: owns the
//! terminal, draws the document through a [`Screen`], and translates key and
//! mouse input into the navigator's two event sources (history traversal and
//! document clicks). The window title follows the document title.
//!
//! Keys: Tab/Down/j and Shift-Tab/Up/k move link focus, Enter follows the
//! focused link, Backspace/b goes back, f goes forward, q or Esc quits.
//! Left mouse clicks land on whatever link sits under the cursor.

use crate::document::NodePath;
use crate::error::TerminalSnafu;
use crate::history::MemoryHistory;
use crate::router::navigator::{HostEvent, Navigator};
use crate::screen::Screen;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event as CrosstermEvent, KeyCode,
        KeyEventKind, MouseButton, MouseEventKind,
    },
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::prelude::*;
use snafu::ResultExt;
use std::io::{self, stdout};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::runtime::Runtime;
use tokio::sync::mpsc;

/// Application context handed to the setup closure.
#[derive(Clone)]
pub struct AppContext {
    /// The navigator to drive, once provided by the user.
    navigator: Arc<Mutex<Option<Navigator<MemoryHistory>>>>,
    /// Internal: channel to trigger a re-render.
    re_render_tx: mpsc::UnboundedSender<()>,
}

impl AppContext {
    /// Hand the runtime the navigator it should drive.
    pub fn set_navigator(&self, navigator: Navigator<MemoryHistory>) -> crate::Result<()> {
        let mut guard = self
            .navigator
            .lock()
            .map_err(|_| crate::Error::LockPoisoned)?;
        *guard = Some(navigator);
        self.refresh();
        Ok(())
    }

    /// Trigger a re-render.
    pub fn refresh(&self) {
        let _ = self.re_render_tx.send(());
    }
}

/// Main application handle.
pub struct Application;

impl Application {
    /// Create a new application instance.
    pub fn new() -> Self {
        Self
    }

    /// Run the application with the given setup closure. The closure must
    /// provide a navigator via [`AppContext::set_navigator`].
    pub fn run<F>(self, setup: F) -> anyhow::Result<()>
    where
        F: FnOnce(&AppContext) -> anyhow::Result<()>,
    {
        let rt = Runtime::new().map_err(|e| anyhow::anyhow!("Failed to start tokio: {}", e))?;

        let (re_render_tx, re_render_rx) = mpsc::unbounded_channel();
        let slot = Arc::new(Mutex::new(None));
        let app_context = AppContext {
            navigator: Arc::clone(&slot),
            re_render_tx: re_render_tx.clone(),
        };

        let _guard = rt.enter();
        setup(&app_context)?;
        drop(_guard);

        let navigator = {
            let mut guard = slot
                .lock()
                .map_err(|_| anyhow::anyhow!("Navigator mutex poisoned"))?;
            guard
                .take()
                .ok_or_else(|| anyhow::anyhow!("setup did not provide a navigator"))?
        };

        rt.block_on(async move { self.run_loop(navigator, re_render_tx, re_render_rx).await })?;
        Ok(())
    }

    async fn run_loop(
        &self,
        mut navigator: Navigator<MemoryHistory>,
        re_render_tx: mpsc::UnboundedSender<()>,
        re_render_rx: mpsc::UnboundedReceiver<()>,
    ) -> crate::Result<()> {
        enable_raw_mode().context(TerminalSnafu)?;
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture).context(TerminalSnafu)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).context(TerminalSnafu)?;

        // Mount the shell and render the starting location before the first
        // frame; from here on the loop delivers events.
        navigator.init();

        let result = self
            .run_app_loop(&mut terminal, navigator, re_render_tx, re_render_rx)
            .await;

        disable_raw_mode().context(TerminalSnafu)?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )
        .context(TerminalSnafu)?;
        terminal.show_cursor().context(TerminalSnafu)?;

        result
    }

    async fn run_app_loop(
        &self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        mut navigator: Navigator<MemoryHistory>,
        re_render_tx: mpsc::UnboundedSender<()>,
        mut re_render_rx: mpsc::UnboundedReceiver<()>,
    ) -> crate::Result<()> {
        let mut screen = Screen::new();
        let mut window_title = String::new();

        // Initial render
        let _ = re_render_tx.send(());

        loop {
            tokio::select! {
                _ = re_render_rx.recv() => {
                    if navigator.document().title() != window_title {
                        window_title = navigator.document().title().to_string();
                        execute!(terminal.backend_mut(), SetTitle(&window_title))
                            .context(TerminalSnafu)?;
                    }
                    terminal
                        .draw(|frame| screen.draw(frame, navigator.document()))
                        .context(TerminalSnafu)?;
                }
                event_ready = async { event::poll(Duration::from_millis(100)) } => {
                    if let Ok(true) = event_ready {
                        match event::read().context(TerminalSnafu)? {
                            CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                                match key.code {
                                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                                    KeyCode::Tab | KeyCode::Down | KeyCode::Char('j') => {
                                        screen.focus_next();
                                    }
                                    KeyCode::BackTab | KeyCode::Up | KeyCode::Char('k') => {
                                        screen.focus_prev();
                                    }
                                    KeyCode::Enter => {
                                        if let Some(link) = screen.focused() {
                                            let target = link.target.clone();
                                            navigator.handle_event(HostEvent::Click { target });
                                        }
                                    }
                                    KeyCode::Backspace | KeyCode::Char('b') => {
                                        navigator.back();
                                    }
                                    KeyCode::Char('f') => {
                                        navigator.forward();
                                    }
                                    _ => {}
                                }
                                let _ = re_render_tx.send(());
                            }
                            CrosstermEvent::Mouse(mouse) => {
                                if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
                                    // Clicks away from any link walk up from the
                                    // body and fall through untouched.
                                    let target = screen
                                        .link_at(mouse.column, mouse.row)
                                        .map(|link| link.target.clone())
                                        .unwrap_or_else(NodePath::root);
                                    navigator.handle_event(HostEvent::Click { target });
                                    let _ = re_render_tx.send(());
                                }
                            }
                            CrosstermEvent::Resize(_, _) => {
                                let _ = re_render_tx.send(());
                            }
                            _ => {}
                        }
                    }
                }
            }
        }
    }
}

impl Default for Application {
    fn default() -> Self {
        Self::new()
    }
}
