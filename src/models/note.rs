//! Monthly reflection notes

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::period::MonthPeriod;

/// Free-form notes and a reflection for one month; at most one per month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyNote {
    pub month: MonthPeriod,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub reflection: String,
    pub updated_at: DateTime<Utc>,
}

impl MonthlyNote {
    pub fn new(month: MonthPeriod, notes: impl Into<String>, reflection: impl Into<String>) -> Self {
        Self {
            month,
            notes: notes.into(),
            reflection: reflection.into(),
            updated_at: Utc::now(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.notes.trim().is_empty() && self.reflection.trim().is_empty()
    }
}
