use std::{fmt, str::FromStr};

use anyhow::{Error, Result};
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

#[derive(Clone, Copy, Debug, Default, EnumIter, Eq, Hash, PartialEq)]
pub enum Interval {
    #[default]
    Daily,
    Weekly,
    Monthly,
}

impl Interval {
    pub fn label(&self) -> &'static str {
        match self {
            Interval::Daily => "Daily",
            Interval::Weekly => "Weekly",
            Interval::Monthly => "Monthly",
        }
    }

    /// Granularity code understood by the chart API.
    pub fn api_code(&self) -> &'static str {
        match self {
            Interval::Daily => "1d",
            Interval::Weekly => "1wk",
            Interval::Monthly => "1mo",
        }
    }

    pub fn next(&self) -> Interval {
        let all: Vec<Interval> = Interval::iter().collect();
        let i = all.iter().position(|x| x == self).unwrap_or(0);
        all[(i + 1) % all.len()]
    }

    pub fn previous(&self) -> Interval {
        let all: Vec<Interval> = Interval::iter().collect();
        let i = all.iter().position(|x| x == self).unwrap_or(0);
        all[(i + all.len() - 1) % all.len()]
    }
}

impl FromStr for Interval {
    type Err = Error;

    fn from_str(s: &str) -> Result<Interval> {
        match s.trim().to_ascii_lowercase().as_str() {
            "daily" | "1d" => Ok(Interval::Daily),
            "weekly" | "1wk" => Ok(Interval::Weekly),
            "monthly" | "1mo" => Ok(Interval::Monthly),
            other => Err(anyhow::anyhow!(
                "Unknown interval '{}' (expected daily, weekly or monthly)",
                other
            )),
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
