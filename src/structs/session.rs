use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use crate::enums::session_row_state::SessionRowState;
use crate::helpers::date_helper::DateHelper;
use crate::helpers::serde_helper::null_as_default;
use crate::structs::user::User;

/// A scheduled training class, as served by `/sessions`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id_session: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub classe: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub specialite: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub promotion: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub niveau: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub semestre: String,
    #[serde(rename = "dateD")]
    pub date_d: NaiveDate,
    #[serde(rename = "dateF")]
    pub date_f: NaiveDate,
    #[serde(default, deserialize_with = "null_as_default")]
    pub formateurs: Vec<User>,
}

impl Session {
    pub fn row_state(&self) -> SessionRowState {
        match self.assigned_trainer() {
            Some(trainer) => SessionRowState::Assigned { trainer: trainer.clone() },
            None => SessionRowState::Unassigned,
        }
    }

    pub fn assigned_trainer(&self) -> Option<&User> {
        self.formateurs.first()
    }

    pub fn has_trainer(&self, trainer_id: i64) -> bool {
        self.formateurs.iter().any(|trainer| trainer.id == trainer_id)
    }

    pub fn duration_days(&self) -> i64 {
        DateHelper::days_between(self.date_d, self.date_f)
    }
}
