use clap::Subcommand;
use crate::structs::session_changes::SessionChanges;

#[derive(Subcommand)]
pub enum Commands {
    /// Write a sample configuration file
    Init,
    /// Check the configuration file
    Validate,
    /// List every session (coordinator view)
    Sessions,
    /// List the sessions assigned to the signed-in trainer
    Mine,
    /// List trainers that can be assigned
    Trainers,
    /// Create a session
    Create {
        #[clap(long)]
        classe: String,
        #[clap(long)]
        specialite: String,
        #[clap(long)]
        promotion: String,
        #[clap(long)]
        niveau: String,
        #[clap(long)]
        semestre: String,
        /// Start date, YYYY-MM-DD
        #[clap(long)]
        start: String,
        /// End date, YYYY-MM-DD
        #[clap(long)]
        end: String,
        #[clap(long)]
        trainer: Option<i64>,
    },
    /// Edit an existing session; omitted fields keep their value
    Edit {
        id: i64,
        #[clap(flatten)]
        changes: SessionChanges,
    },
    /// Delete a session
    Delete {
        id: i64,
        /// Skip the confirmation prompt
        #[clap(short, long)]
        yes: bool,
    },
    /// Assign a trainer to an unassigned session
    Assign {
        session: i64,
        trainer: i64,
    },
    /// Remove a trainer from a session
    Unassign {
        session: i64,
        trainer: i64,
    },
    /// List every account (admin only)
    Users,
    /// Interactive dashboard
    Shell,
}
