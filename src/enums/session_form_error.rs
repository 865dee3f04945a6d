use chrono::NaiveDate;
use thiserror::Error;

/// Problems caught by the session form before anything is sent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionFormError {
    #[error("The start date must be today or later")]
    StartInPast { start: NaiveDate, today: NaiveDate },

    #[error("The end date must be after the start date")]
    EndNotAfterStart { start: NaiveDate, end: NaiveDate },

    #[error("The field '{field}' is required")]
    MissingField { field: &'static str },

    #[error("The date '{value}' in '{field}' is not a valid YYYY-MM-DD date")]
    InvalidDate { field: &'static str, value: String },

    #[error("The trainer id '{value}' is not a number")]
    InvalidTrainerId { value: String },
}

impl SessionFormError {
    pub fn field(&self) -> &'static str {
        match self {
            Self::StartInPast { .. } => "dateD",
            Self::EndNotAfterStart { .. } => "dateF",
            Self::MissingField { field } => field,
            Self::InvalidDate { field, .. } => field,
            Self::InvalidTrainerId { .. } => "formateurId",
        }
    }

    pub fn value(&self) -> String {
        match self {
            Self::StartInPast { start, .. } => start.to_string(),
            Self::EndNotAfterStart { end, .. } => end.to_string(),
            Self::MissingField { .. } => String::new(),
            Self::InvalidDate { value, .. } => value.clone(),
            Self::InvalidTrainerId { value } => value.clone(),
        }
    }
}
