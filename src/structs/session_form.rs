use chrono::NaiveDate;
use crate::enums::session_form_error::SessionFormError;
use crate::structs::session::Session;
use crate::structs::session_draft::SessionDraft;

/// Form state as typed by the user; parsed into a draft on submit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionForm {
    pub classe: String,
    pub specialite: String,
    pub promotion: String,
    pub niveau: String,
    pub semestre: String,
    pub date_d: String,
    pub date_f: String,
    pub formateur_id: String,
}

impl SessionForm {
    /// Prefill from an existing session, keeping its first trainer.
    pub fn from_session(session: &Session) -> Self {
        Self {
            classe: session.classe.clone(),
            specialite: session.specialite.clone(),
            promotion: session.promotion.clone(),
            niveau: session.niveau.clone(),
            semestre: session.semestre.clone(),
            date_d: session.date_d.to_string(),
            date_f: session.date_f.to_string(),
            formateur_id: session
                .assigned_trainer()
                .map(|trainer| trainer.id.to_string())
                .unwrap_or_default(),
        }
    }

    pub fn to_draft(&self) -> Result<SessionDraft, SessionFormError> {
        let formateur_id = match self.formateur_id.trim() {
            "" => None,
            raw => Some(raw.parse::<i64>().map_err(|_| SessionFormError::InvalidTrainerId {
                value: raw.to_string(),
            })?),
        };

        Ok(SessionDraft {
            classe: required("classe", &self.classe)?,
            specialite: required("specialite", &self.specialite)?,
            promotion: required("promotion", &self.promotion)?,
            niveau: required("niveau", &self.niveau)?,
            semestre: required("semestre", &self.semestre)?,
            date_d: parse_date("dateD", &self.date_d)?,
            date_f: parse_date("dateF", &self.date_f)?,
            formateur_id,
        })
    }
}

fn required(field: &'static str, value: &str) -> Result<String, SessionFormError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(SessionFormError::MissingField { field });
    }
    Ok(trimmed.to_string())
}

fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate, SessionFormError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(SessionFormError::MissingField { field });
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|_| SessionFormError::InvalidDate {
        field,
        value: trimmed.to_string(),
    })
}
