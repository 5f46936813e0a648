use chrono::{DateTime, Local};

use super::ServiceRecord;
use crate::utils::formatting::format_call_time;

/// A simulated call recorded in the history panel
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub service_name: String,
    pub number: String,
    pub called_at: DateTime<Local>,
}

impl HistoryEntry {
    pub fn new(service: &ServiceRecord, called_at: DateTime<Local>) -> Self {
        Self {
            service_name: service.name.to_string(),
            number: service.number.to_string(),
            called_at,
        }
    }

    /// Display timestamp (`hh:mm:ss AM/PM`)
    pub fn time_label(&self) -> String {
        format_call_time(&self.called_at)
    }
}
