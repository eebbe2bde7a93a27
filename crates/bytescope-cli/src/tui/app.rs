//! Watch-loop application state and event loop.
//!
//! One logical stream of execution: fetch a frame from the server, feed it
//! to the window, recompute statistics, draw, then wait the configured
//! interval before the next tick. The next tick is never scheduled while
//! one is in flight, so there is no overlap and no queueing. A failed fetch
//! logs a warning and skips that cycle's render data and statistics update.

use std::io;
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::warn;
use ratatui::prelude::*;

use bytescope_core::render::RenderMode;
use bytescope_core::window::{SampleWindow, SummaryStatistics};

use crate::client::ApiClient;

/// Source ids the watcher can cycle through, in display order.
pub const SOURCES: [&str; 3] = ["urandom", "lcg", "math"];

pub struct App {
    client: ApiClient,
    source_idx: usize,
    mode: RenderMode,
    window: SampleWindow,
    frame: Vec<u8>,
    stats: SummaryStatistics,
    count: usize,
    interval: Duration,
    ticks: u64,
    skipped: u64,
    last_tick_ms: u128,
    last_error: Option<String>,
    paused: bool,
    quit: bool,
}

impl App {
    pub fn new(
        url: &str,
        source: &str,
        mode: RenderMode,
        count: usize,
        interval: Duration,
    ) -> Self {
        let source_idx = SOURCES.iter().position(|&s| s == source).unwrap_or(1);
        Self {
            client: ApiClient::new(url),
            source_idx,
            mode,
            window: SampleWindow::new(),
            frame: Vec::new(),
            stats: SummaryStatistics::EMPTY,
            count,
            interval,
            ticks: 0,
            skipped: 0,
            last_tick_ms: 0,
            last_error: None,
            paused: false,
            quit: false,
        }
    }

    // -- accessors for the renderer --

    pub fn source(&self) -> &'static str {
        SOURCES[self.source_idx]
    }

    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    pub fn frame(&self) -> &[u8] {
        &self.frame
    }

    pub fn window(&self) -> &SampleWindow {
        &self.window
    }

    pub fn stats(&self) -> &SummaryStatistics {
        &self.stats
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn skipped(&self) -> u64 {
        self.skipped
    }

    pub fn last_tick_ms(&self) -> u128 {
        self.last_tick_ms
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    /// Run the terminal UI until the user quits.
    pub fn run(&mut self) -> io::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal);

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        result
    }

    fn event_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
        while !self.quit {
            if !self.paused {
                self.tick();
            }
            terminal.draw(|f| super::ui::draw(f, self))?;

            // Fixed delay after the completed tick, spent draining input.
            let deadline = Instant::now() + self.interval;
            loop {
                let remaining = deadline.saturating_duration_since(Instant::now());
                if remaining.is_zero() {
                    break;
                }
                if event::poll(remaining)? {
                    if let Event::Key(key) = event::read()? {
                        if key.kind == KeyEventKind::Press {
                            self.handle_key(key.code);
                            terminal.draw(|f| super::ui::draw(f, self))?;
                        }
                    }
                }
                if self.quit {
                    break;
                }
            }
        }
        Ok(())
    }

    /// One fetch/accumulate/summarize cycle.
    fn tick(&mut self) {
        let t0 = Instant::now();
        match self.client.fetch_random(self.source(), self.count) {
            Ok(frame) => {
                self.frame = frame.bytes;
                self.window.append(&self.frame);
                self.stats = self.window.summarize();
                self.last_error = None;
            }
            Err(e) => {
                // Skip this cycle's data; the next tick proceeds on schedule.
                warn!("tick skipped: {e}");
                self.skipped += 1;
                self.last_error = Some(e.to_string());
            }
        }
        self.ticks += 1;
        self.last_tick_ms = t0.elapsed().as_millis();
    }

    fn handle_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            KeyCode::Char('m') | KeyCode::Tab => self.mode = self.mode.next(),
            KeyCode::Char('s') => self.select_source((self.source_idx + 1) % SOURCES.len()),
            KeyCode::Char('1') => self.select_source(0),
            KeyCode::Char('2') => self.select_source(1),
            KeyCode::Char('3') => self.select_source(2),
            KeyCode::Char('r') => {
                self.window.reset();
                self.stats = self.window.summarize();
            }
            KeyCode::Char('p') | KeyCode::Char(' ') => self.paused = !self.paused,
            _ => {}
        }
    }

    /// Switch source. The window is reset so statistics never blend two
    /// distributions.
    fn select_source(&mut self, idx: usize) {
        if idx == self.source_idx {
            return;
        }
        self.source_idx = idx;
        self.window.reset();
        self.stats = self.window.summarize();
        self.frame.clear();
    }
}
