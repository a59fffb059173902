//! Display implementation for shiftrep messages.
//!
//! Single source of truth for the text of every [`Message`] variant.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === REPORT MESSAGES ===
            Message::DateRangeRequired => "Enter the start and end date".to_string(),
            Message::ReportLoadFailed => "Error loading report".to_string(),
            Message::ReportHeader(start, end) => format!("Workshift report from {} to {}", start, end),
            Message::ReportRowsRendered(count) => format!("{} row(s) loaded", count),
            Message::ApiUrlMissing => {
                "No attendance API URL. Pass --api-url, set SHIFTREP_API_URL or run `shiftrep init`".to_string()
            }

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigModuleApi => "Attendance API settings".to_string(),
            Message::ConfigModuleReport => "Report settings".to_string(),

            // === PROMPTS ===
            Message::PromptSelectModules => "Select modules to configure".to_string(),
            Message::PromptApiUrl => "Enter the attendance API URL".to_string(),
            Message::PromptStandardShiftMinutes => "Enter the standard shift length (minutes)".to_string(),
            Message::PromptStartDate => "Start date (YYYY-MM-DD)".to_string(),
            Message::PromptEndDate => "End date (YYYY-MM-DD)".to_string(),
        };

        write!(f, "{}", text)
    }
}
