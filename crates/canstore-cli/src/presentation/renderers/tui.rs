//! TUI Renderer for the catalog view
//!
//! This module implements the TUI event loop and screen rendering.
//! The catalog arrives once via channel from the loader thread; every
//! selection change re-runs the filter synchronously on this thread.
//!
//! ## Design:
//! - Renderer owns view state (catalog, selection, focus, scroll)
//! - Presenter turns that state into a ViewModel on every frame
//! - Views draw the ViewModel
//! - Keyboard input only mutates the selection, focus and scroll

use std::io;
use std::sync::mpsc::{Receiver, TryRecvError};
use std::time::Duration;

use anyhow::Result;
use canstore_engine::FilterEngine;
use canstore_runtime::LoadEvent;
use canstore_types::{Category, Selection};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
};

use crate::presentation::presenters::build_screen_view_model;
use crate::presentation::view_models::{CatalogScreenViewModel, FocusTarget};
use crate::presentation::views::tui::{
    ControlsView, FooterView, HeaderView, ProductListView, StatusBarView,
};
use crate::state::{CatalogState, ViewSettings};

const PAGE_SIZE: usize = 5;

/// TUI Renderer application state
pub struct TuiRenderer {
    settings: ViewSettings,

    /// Full product list, once loaded
    catalog: CatalogState,

    /// User filter inputs
    selection: Selection,

    /// Visible subset for the current selection
    engine: FilterEngine,

    /// UI State: control receiving typed keys
    focus: FocusTarget,

    /// UI State: cards skipped from the top of the list
    list_scroll: usize,

    /// UI State: Should quit flag
    should_quit: bool,
}

impl TuiRenderer {
    pub fn new(settings: ViewSettings, selection: Selection) -> Self {
        Self {
            settings,
            catalog: CatalogState::Loading,
            selection,
            engine: FilterEngine::new(),
            focus: FocusTarget::default(),
            list_scroll: 0,
            should_quit: false,
        }
    }

    /// Main event loop for TUI rendering
    ///
    /// This function:
    /// 1. Sets up terminal in raw mode
    /// 2. Receives the catalog load outcome via channel
    /// 3. Handles keyboard input
    /// 4. Renders the screen using Views
    /// 5. Cleans up terminal on exit
    pub fn run(mut self, rx: Receiver<LoadEvent>) -> Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Run event loop
        let result = self.event_loop(&mut terminal, rx);

        // Cleanup terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        rx: Receiver<LoadEvent>,
    ) -> Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            // Handle events with timeout so the load result is picked up promptly
            if event::poll(Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    self.handle_key_event(key);
                }
            }

            self.poll_loader(&rx);

            if self.should_quit {
                tracing::info!("catalog view closed");
                break;
            }
        }

        Ok(())
    }

    /// Check for the load outcome (non-blocking).
    ///
    /// A loader that hangs up while the catalog is still loading counts as
    /// a failed load.
    pub fn poll_loader(&mut self, rx: &Receiver<LoadEvent>) {
        match rx.try_recv() {
            Ok(load_event) => self.handle_load_event(load_event),
            Err(TryRecvError::Disconnected) => {
                if matches!(self.catalog, CatalogState::Loading) {
                    self.handle_load_event(LoadEvent::Failed(
                        "catalog loader stopped without a result".to_string(),
                    ));
                }
            }
            Err(TryRecvError::Empty) => {}
        }
    }

    /// Replace the catalog with the load outcome and filter it with the
    /// selection made so far
    pub fn handle_load_event(&mut self, event: LoadEvent) {
        self.catalog = CatalogState::from(event);
        self.refilter();
    }

    /// Handle keyboard input
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        // Only handle key press events, not release
        if key.kind != KeyEventKind::Press {
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab | KeyCode::BackTab => self.focus = self.focus.toggle(),
            KeyCode::PageUp => self.scroll_up(PAGE_SIZE),
            KeyCode::PageDown => self.scroll_down(PAGE_SIZE),
            KeyCode::Home => self.list_scroll = 0,
            _ => match self.focus {
                FocusTarget::Category => self.handle_category_key(key),
                FocusTarget::Search => self.handle_search_key(key, ctrl),
            },
        }
    }

    fn handle_category_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left | KeyCode::Up => self.set_category(self.selection.category.previous()),
            KeyCode::Right | KeyCode::Down => self.set_category(self.selection.category.next()),
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('/') => self.focus = FocusTarget::Search,
            KeyCode::Char('j') => self.scroll_down(1),
            KeyCode::Char('k') => self.scroll_up(1),
            _ => {}
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent, ctrl: bool) {
        match key.code {
            KeyCode::Char('u') if ctrl => self.set_search_term(String::new()),
            KeyCode::Char(c) if !ctrl => {
                let mut term = self.selection.search_term.clone();
                term.push(c);
                self.set_search_term(term);
            }
            KeyCode::Backspace => {
                let mut term = self.selection.search_term.clone();
                if term.pop().is_some() {
                    self.set_search_term(term);
                }
            }
            KeyCode::Enter => self.focus = FocusTarget::Category,
            _ => {}
        }
    }

    pub fn set_category(&mut self, category: Category) {
        self.selection.category = category;
        self.refilter();
    }

    pub fn set_search_term(&mut self, term: String) {
        self.selection.search_term = term;
        self.refilter();
    }

    /// Full pass over the catalog; an unloaded catalog filters to nothing
    fn refilter(&mut self) {
        let products = self
            .catalog
            .catalog()
            .map(|c| c.products())
            .unwrap_or_default();
        self.engine.recompute(products, &self.selection);
        self.list_scroll = 0;
        tracing::debug!(
            category = %self.selection.category,
            search = %self.selection.search_term,
            visible = self.engine.visible_count(),
            total = self.engine.total(),
            "filter recomputed"
        );
    }

    fn scroll_up(&mut self, by: usize) {
        self.list_scroll = self.list_scroll.saturating_sub(by);
    }

    fn scroll_down(&mut self, by: usize) {
        let max = self.engine.visible_count().saturating_sub(1);
        self.list_scroll = (self.list_scroll + by).min(max);
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn focus(&self) -> FocusTarget {
        self.focus
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn list_scroll(&self) -> usize {
        self.list_scroll
    }

    /// Names of the currently visible products, in catalog order
    pub fn visible_names(&self) -> Vec<&str> {
        let products = self
            .catalog
            .catalog()
            .map(|c| c.products())
            .unwrap_or_default();
        self.engine
            .visible(products)
            .map(|p| p.name.as_str())
            .collect()
    }

    pub fn screen_view_model(&self) -> CatalogScreenViewModel {
        build_screen_view_model(
            &self.settings,
            &self.catalog,
            self.engine.visible_indices(),
            &self.selection,
            self.focus,
            self.list_scroll,
        )
    }

    /// Render the screen using Views
    ///
    /// Layout: [Header | Controls + Products | Status Bar | Footer]
    pub fn render(&self, f: &mut Frame) {
        let screen = self.screen_view_model();

        let main_chunks = Layout::vertical([
            Constraint::Length(3), // Header
            Constraint::Min(8),    // Controls + product list
            Constraint::Length(3), // Status bar
            Constraint::Length(3), // Attribution
        ])
        .split(f.area());

        f.render_widget(HeaderView::new(&screen.header), main_chunks[0]);

        let body_chunks = Layout::horizontal([Constraint::Length(28), Constraint::Min(20)])
            .split(main_chunks[1]);

        f.render_widget(ControlsView::new(&screen.controls), body_chunks[0]);
        f.render_widget(ProductListView::new(&screen.product_list), body_chunks[1]);
        f.render_widget(StatusBarView::new(&screen.status_bar), main_chunks[2]);
        f.render_widget(FooterView::new(&screen.footer), main_chunks[3]);
    }
}

impl Default for TuiRenderer {
    fn default() -> Self {
        Self::new(ViewSettings::default(), Selection::default())
    }
}
