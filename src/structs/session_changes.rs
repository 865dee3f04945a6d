use clap::Args;
use crate::structs::session_form::SessionForm;

/// Field overrides for `edit`; anything left out keeps its current value.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionChanges {
    #[clap(long)]
    pub classe: Option<String>,
    #[clap(long)]
    pub specialite: Option<String>,
    #[clap(long)]
    pub promotion: Option<String>,
    #[clap(long)]
    pub niveau: Option<String>,
    #[clap(long)]
    pub semestre: Option<String>,
    /// Start date, YYYY-MM-DD
    #[clap(long)]
    pub start: Option<String>,
    /// End date, YYYY-MM-DD
    #[clap(long)]
    pub end: Option<String>,
    /// Trainer id to put on the session
    #[clap(long)]
    pub trainer: Option<i64>,
}

impl SessionChanges {
    pub fn apply_to(self, form: &mut SessionForm) {
        let overrides = [
            (&mut form.classe, self.classe),
            (&mut form.specialite, self.specialite),
            (&mut form.promotion, self.promotion),
            (&mut form.niveau, self.niveau),
            (&mut form.semestre, self.semestre),
            (&mut form.date_d, self.start),
            (&mut form.date_f, self.end),
            (&mut form.formateur_id, self.trainer.map(|id| id.to_string())),
        ];
        for (field, value) in overrides {
            if let Some(value) = value {
                *field = value;
            }
        }
    }
}
