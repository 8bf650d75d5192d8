use std::io;

use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
    widgets::TableState,
};
use tracing::{info, warn};

use crate::{
    api::SeriesFetcher,
    app::{
        dashboard::run_pass,
        form::InputForm,
        present::{Presentation, present},
        ui,
    },
};

const PAGE_STEP: usize = 10;

pub struct App<F: SeriesFetcher> {
    fetcher: F,
    form: InputForm,
    presentation: Option<Presentation>,
    table_state: TableState,
    popup_message: Option<String>,
}

impl<F: SeriesFetcher> App<F> {
    pub fn new(fetcher: F, form: InputForm) -> Self {
        Self {
            fetcher,
            form,
            presentation: None,
            table_state: TableState::default(),
            popup_message: None,
        }
    }

    pub fn form(&self) -> &InputForm {
        &self.form
    }

    pub fn presentation(&self) -> Option<&Presentation> {
        self.presentation.as_ref()
    }

    fn show_popup(&mut self, message: &str) {
        self.popup_message = Some(message.to_string());
    }

    fn clear_popup(&mut self) {
        self.popup_message = None;
    }

    /// Runs one full pass from the current widget values. Nothing from the
    /// previous pass survives.
    pub async fn refresh(&mut self) {
        let query = self.form.query();
        info!(
            ticker = %query.ticker(),
            start = %query.start_date(),
            interval = %query.interval(),
            "running pass"
        );

        let outcome = run_pass(&self.fetcher, &query).await;
        match &outcome {
            Ok(dashboard) => info!(
                rows = dashboard.series().len(),
                percent_change = dashboard.metric().percent_change(),
                "results displayed"
            ),
            Err(e) => warn!(error = %e, "error displayed"),
        }

        self.presentation = Some(present(&outcome));
        self.table_state = TableState::default();
    }

    /// Applies a key press. Returns `true` when the user asked to quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Esc => return true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return true,
            KeyCode::PageDown => self.scroll_table(PAGE_STEP as isize),
            KeyCode::PageUp => self.scroll_table(-(PAGE_STEP as isize)),
            _ => self.form.handle_key(key),
        }
        false
    }

    fn scroll_table(&mut self, delta: isize) {
        let Some(Presentation::Results(results)) = &self.presentation else {
            return;
        };
        let len = results.table().rows().len();
        if len == 0 {
            return;
        }

        let current = self.table_state.selected().unwrap_or(0) as isize;
        let next = (current + delta).clamp(0, len as isize - 1) as usize;
        self.table_state.select(Some(next));
    }

    pub async fn run(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.run_app(&mut terminal).await;

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        result
    }

    fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        terminal.draw(|frame| {
            ui::render(
                frame,
                &self.form,
                self.presentation.as_ref(),
                &mut self.table_state,
                &self.popup_message,
            )
        })?;
        Ok(())
    }

    async fn run_app<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        loop {
            if self.form.take_run_request() {
                let message = format!("Fetching {}...", self.form.query().ticker());
                self.show_popup(&message);
                self.draw(terminal)?;

                self.refresh().await;
                self.clear_popup();
            }

            self.draw(terminal)?;

            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                if self.handle_key(key) {
                    return Ok(());
                }
            }
        }
    }
}
