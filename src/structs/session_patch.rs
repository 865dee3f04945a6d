use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use crate::structs::session_draft::SessionDraft;

/// Partial body for `PUT /sessions/{id}`; unset fields are not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classe: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialite: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promotion: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub niveau: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semestre: Option<String>,
    #[serde(default, rename = "dateD", skip_serializing_if = "Option::is_none")]
    pub date_d: Option<NaiveDate>,
    #[serde(default, rename = "dateF", skip_serializing_if = "Option::is_none")]
    pub date_f: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formateur_id: Option<i64>,
}

impl From<SessionDraft> for SessionPatch {
    fn from(draft: SessionDraft) -> Self {
        Self {
            classe: Some(draft.classe),
            specialite: Some(draft.specialite),
            promotion: Some(draft.promotion),
            niveau: Some(draft.niveau),
            semestre: Some(draft.semestre),
            date_d: Some(draft.date_d),
            date_f: Some(draft.date_f),
            formateur_id: draft.formateur_id,
        }
    }
}
