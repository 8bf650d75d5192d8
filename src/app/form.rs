use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent};
use derive_getters::Getters;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

use crate::{
    app::utils::{DATE_FORMAT, parse_date},
    models::{Interval, QueryParams},
};

pub const DEFAULT_TICKER: &str = "^GSPC";
pub const DEFAULT_START_DATE: &str = "2025-01-20";

#[derive(Clone, Copy, Debug, Default, EnumIter, Eq, PartialEq)]
pub enum Focus {
    #[default]
    Ticker,
    StartDate,
    Interval,
    Refresh,
}

impl Focus {
    fn step(&self, forward: bool) -> Focus {
        let all: Vec<Focus> = Focus::iter().collect();
        let i = all.iter().position(|f| f == self).unwrap_or(0);
        if forward {
            all[(i + 1) % all.len()]
        } else {
            all[(i + all.len() - 1) % all.len()]
        }
    }
}

/// Sidebar widget state. A pass always reads it through [`InputForm::query`].
#[derive(Clone, Debug, Getters)]
pub struct InputForm {
    ticker: String,
    start_date_input: String,
    start_date: NaiveDate,
    interval: Interval,
    focus: Focus,
    #[getter(skip)]
    run_requested: bool,
}

impl InputForm {
    /// The first draw always runs a pass, so a new form starts with a
    /// pending run request.
    pub fn new(ticker: &str, start_date: NaiveDate, interval: Interval) -> Self {
        Self {
            ticker: ticker.to_string(),
            start_date_input: start_date.format(DATE_FORMAT).to_string(),
            start_date,
            interval,
            focus: Focus::default(),
            run_requested: true,
        }
    }

    pub fn query(&self) -> QueryParams {
        QueryParams::new(&self.ticker, self.start_date, self.interval)
    }

    pub fn is_start_date_valid(&self) -> bool {
        parse_date(&self.start_date_input).is_ok()
    }

    pub fn request_run(&mut self) {
        self.run_requested = true;
    }

    /// Returns whether a pass is pending and clears the request.
    pub fn take_run_request(&mut self) -> bool {
        std::mem::take(&mut self.run_requested)
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::F(5) => self.request_run(),
            KeyCode::Tab | KeyCode::Down => self.focus = self.focus.step(true),
            KeyCode::BackTab | KeyCode::Up => self.focus = self.focus.step(false),
            KeyCode::Enter => self.commit(),
            KeyCode::Left if self.focus == Focus::Interval => {
                self.interval = self.interval.previous();
                self.request_run();
            }
            KeyCode::Right if self.focus == Focus::Interval => {
                self.interval = self.interval.next();
                self.request_run();
            }
            KeyCode::Char(' ') if self.focus == Focus::Refresh => self.request_run(),
            KeyCode::Char(c) => match self.focus {
                Focus::Ticker => self.ticker.push(c),
                Focus::StartDate => self.start_date_input.push(c),
                _ => {}
            },
            KeyCode::Backspace => match self.focus {
                Focus::Ticker => {
                    self.ticker.pop();
                }
                Focus::StartDate => {
                    self.start_date_input.pop();
                }
                _ => {}
            },
            _ => {}
        }
    }

    fn commit(&mut self) {
        match self.focus {
            Focus::StartDate => {
                // Invalid text leaves the last good date in effect
                if let Ok(date) = parse_date(&self.start_date_input) {
                    self.start_date = date;
                    self.request_run();
                }
            }
            Focus::Ticker | Focus::Interval | Focus::Refresh => self.request_run(),
        }
    }
}

impl Default for InputForm {
    fn default() -> Self {
        let start_date = parse_date(DEFAULT_START_DATE).unwrap_or(NaiveDate::MIN);
        Self::new(DEFAULT_TICKER, start_date, Interval::default())
    }
}
