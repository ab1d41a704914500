//! Named trailing windows for chart range selection.

use serde::{Deserialize, Serialize};
use std::fmt;

use navlens_core::{Date, NavlensResult};

/// A named trailing period used to filter the chart's date axis.
///
/// Every variant resolves its start relative to the latest date on the
/// axis, except [`ChartWindow::Itd`], which uses a caller-supplied start —
/// the earliest inception among the entities in view, so that all series
/// on one chart share a single window start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartWindow {
    /// Since inception (caller supplies the shared start date).
    #[serde(rename = "ITD")]
    Itd,

    /// Trailing five calendar years.
    #[serde(rename = "5Y")]
    FiveYears,

    /// Trailing three calendar years.
    #[serde(rename = "3Y")]
    ThreeYears,

    /// Trailing one calendar year.
    #[serde(rename = "1Y")]
    OneYear,

    /// Since January 1 of the latest date's year.
    #[serde(rename = "YTD")]
    YearToDate,

    /// Trailing one calendar month.
    #[serde(rename = "1M")]
    OneMonth,
}

impl ChartWindow {
    /// Resolves the window's start date.
    ///
    /// `latest` is the last date on the chart axis; `itd_start` is the
    /// shared range start used by the [`ChartWindow::Itd`] variant and
    /// ignored by every other.
    ///
    /// # Errors
    ///
    /// Returns `NavlensError::InvalidDate` if the calendar arithmetic
    /// leaves the supported date range.
    pub fn start_date(&self, latest: Date, itd_start: Date) -> NavlensResult<Date> {
        Ok(match self {
            Self::Itd => itd_start,
            Self::FiveYears => latest.add_years(-5)?,
            Self::ThreeYears => latest.add_years(-3)?,
            Self::OneYear => latest.add_years(-1)?,
            Self::YearToDate => latest.start_of_year(),
            Self::OneMonth => latest.add_months(-1)?,
        })
    }
}

impl fmt::Display for ChartWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Itd => "ITD",
            Self::FiveYears => "5Y",
            Self::ThreeYears => "3Y",
            Self::OneYear => "1Y",
            Self::YearToDate => "YTD",
            Self::OneMonth => "1M",
        };
        write!(f, "{label}")
    }
}
