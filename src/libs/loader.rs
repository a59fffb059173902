//! The report loader: one user action, one request, one render.
//!
//! [`ReportLoader::load_report`] reads the date range from an [`InputSource`],
//! resets the [`RenderTarget`], fetches the report from a [`ReportApi`] and
//! renders it. Problems are reported in three different ways:
//!
//! | Condition                          | Network call | Notice | Log   |
//! |------------------------------------|--------------|--------|-------|
//! | start or end date empty            | no           | yes    | no    |
//! | transport or JSON failure          | yes          | yes    | error |
//! | JSON is not a report (bad `rows`)  | yes          | no     | error |
//!
//! The view is cleared and its totals zeroed before every request, so a
//! repeated load never accumulates rows and a failed load leaves an empty view.

use crate::api::ReportApi;
use crate::libs::messages::Message;
use crate::libs::report::{DateRange, ReportResponse, TableRow, TotalsView};

/// Where the date range comes from.
pub trait InputSource {
    fn start_date(&self) -> String;
    fn end_date(&self) -> String;
}

/// Where the report is drawn.
pub trait RenderTarget {
    /// Removes every rendered row.
    fn clear(&mut self);
    fn append_row(&mut self, row: &TableRow);
    fn set_totals(&mut self, totals: &TotalsView);
}

/// Blocking notices shown to the user.
pub trait Notifier {
    fn alert(&mut self, message: &str);
}

/// How a load ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// A date was missing; nothing was requested.
    InvalidInput,
    /// The report was drawn with this many rows.
    Rendered { rows: usize },
    /// The source answered with something that is not a report.
    Malformed,
    /// The source could not be reached or did not answer with JSON.
    Failed,
}

impl LoadOutcome {
    /// Whether the report could not be read at all. The CLI exits non-zero on it.
    pub fn is_failure(&self) -> bool {
        matches!(self, LoadOutcome::Failed)
    }
}

pub struct ReportLoader<A: ReportApi> {
    api: A,
}

impl<A: ReportApi> ReportLoader<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub async fn load_report<I, R, N>(&self, input: &I, target: &mut R, notifier: &mut N) -> LoadOutcome
    where
        I: InputSource + ?Sized,
        R: RenderTarget + ?Sized,
        N: Notifier + ?Sized,
    {
        let range = DateRange::new(input.start_date(), input.end_date());
        if !range.is_complete() {
            notifier.alert(&Message::DateRangeRequired.to_string());
            return LoadOutcome::InvalidInput;
        }

        target.clear();
        target.set_totals(&TotalsView::zeroed());

        let body = match self.api.fetch_report(&range).await {
            Ok(body) => body,
            Err(e) => {
                tracing::error!(error = %e, start = %range.start, end = %range.end, "failed to load report");
                notifier.alert(&Message::ReportLoadFailed.to_string());
                return LoadOutcome::Failed;
            }
        };
        tracing::debug!(%body, "report received");

        let report = match ReportResponse::from_value(body) {
            Ok(report) => report,
            Err(e) => {
                tracing::error!(reason = %e, "unexpected report format");
                return LoadOutcome::Malformed;
            }
        };

        for row in &report.rows {
            target.append_row(&TableRow::from(row));
        }
        target.set_totals(&TotalsView::from(&report.totals));

        LoadOutcome::Rendered { rows: report.rows.len() }
    }
}
