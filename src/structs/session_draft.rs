use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use crate::enums::session_form_error::SessionFormError;

/// Fields sent to `POST /sessions`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionDraft {
    pub classe: String,
    pub specialite: String,
    pub promotion: String,
    pub niveau: String,
    pub semestre: String,
    #[serde(rename = "dateD")]
    pub date_d: NaiveDate,
    #[serde(rename = "dateF")]
    pub date_f: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formateur_id: Option<i64>,
}

impl SessionDraft {
    /// Start must not be before `today`; end must be strictly after start.
    pub fn validate(&self, today: NaiveDate) -> Result<(), SessionFormError> {
        validate_dates(self.date_d, self.date_f, today)
    }
}

pub fn validate_dates(start: NaiveDate, end: NaiveDate, today: NaiveDate) -> Result<(), SessionFormError> {
    if start < today {
        return Err(SessionFormError::StartInPast { start, today });
    }
    if end <= start {
        return Err(SessionFormError::EndNotAfterStart { start, end });
    }
    Ok(())
}
