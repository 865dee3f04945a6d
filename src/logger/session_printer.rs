use std::collections::BTreeMap;
use std::time::Instant;
use terminal_size::{terminal_size, Width};
use crate::enums::panel::Panel;
use crate::enums::session_row_state::SessionRowState;
use crate::structs::banner::Banner;
use crate::structs::role_set::RoleSet;
use crate::structs::session::Session;
use crate::structs::user::User;
use crate::services::trainer_view::TrainerSessionRow;

const FALLBACK_WIDTH: usize = 100;

pub struct SessionPrinter {}

impl SessionPrinter {

    fn width() -> usize {
        terminal_size()
            .map(|(Width(w), _)| w as usize)
            .unwrap_or(FALLBACK_WIDTH)
    }

    fn rule() -> String {
        "━".repeat(Self::width().min(FALLBACK_WIDTH))
    }

    pub fn format_session_row(session: &Session) -> String {
        let assignment = match session.row_state() {
            SessionRowState::Unassigned => "— unassigned".to_string(),
            SessionRowState::Assigned { trainer } => format!("👨‍🏫 {} (#{})", trainer.full_name(), trainer.id),
        };
        format!(
            "#{:<5} {:<10} {:<18} {:<8} niv. {:<4} {:<4} {} → {}  {}",
            session.id_session,
            session.classe,
            session.specialite,
            session.promotion,
            session.niveau,
            session.semestre,
            session.date_d,
            session.date_f,
            assignment
        )
    }

    pub fn print_sessions(sessions: &[Session]) {
        println!("\n📚 Sessions ({})", sessions.len());
        println!("{}", Self::rule());
        if sessions.is_empty() {
            println!("   No sessions.");
            return;
        }
        for session in sessions {
            println!("{}", Self::format_session_row(session));
        }
    }

    pub fn print_trainers(trainers: &[User]) {
        println!("\n👨‍🏫 Trainers ({})", trainers.len());
        println!("{}", Self::rule());
        if trainers.is_empty() {
            println!("   No trainers available.");
        }
        for trainer in trainers {
            println!("#{:<5} {:<30} {}", trainer.id, trainer.full_name(), trainer.email);
        }
    }

    pub fn format_user_row(user: &User) -> String {
        let roles: Vec<&str> = user.role_set().iter().map(|r| r.as_str()).collect();
        format!("#{:<5} {:<30} {:<32} {}", user.id, user.full_name(), user.email, roles.join(", "))
    }

    pub fn print_users(users: &[User]) {
        println!("\n👥 Users ({})", users.len());
        println!("{}", Self::rule());
        for user in users {
            println!("{}", Self::format_user_row(user));
        }
    }

    pub fn format_trainer_row(row: &TrainerSessionRow) -> String {
        let days = if row.duration_days == 1 { "day" } else { "days" };
        format!(
            "#{:<5} {:<10} {:<18} {} → {}  {} {}",
            row.session.id_session,
            row.session.classe,
            row.session.specialite,
            row.session.date_d,
            row.session.date_f,
            row.duration_days,
            days
        )
    }

    pub fn print_trainer_sessions(rows: &[TrainerSessionRow], load_failure: Option<&str>) {
        println!("\n🗓️ My sessions");
        println!("{}", Self::rule());
        if rows.is_empty() {
            println!("   No sessions assigned to you yet.");
        }
        for row in rows {
            println!("{}", Self::format_trainer_row(row));
        }
        if !rows.is_empty() {
            println!("{}", Self::rule());
            println!("   Total: {} session(s) assigned", rows.len());
        }
        if let Some(reason) = load_failure {
            log::debug!("Trainer sessions unavailable: {}", reason);
        }
    }

    pub fn print_profile(profile: &User, roles: &RoleSet, panels: &[Panel]) {
        let role_names: Vec<&str> = roles.iter().map(|r| r.as_str()).collect();
        println!("\n👤 {} <{}>", profile.full_name(), profile.email);
        println!("   Roles: {}", if role_names.is_empty() { "none".to_string() } else { role_names.join(", ") });
        let titles: Vec<&str> = panels.iter().map(Panel::title).collect();
        println!("   Panels: {}", titles.join(" · "));
    }

    pub fn print_features(features: &BTreeMap<String, String>) {
        if features.is_empty() {
            return;
        }
        println!("\n🧩 Features");
        for (key, label) in features {
            println!("   • {} ({})", label, key);
        }
    }

    pub fn print_banner(banner: Option<&Banner>, now: Instant) {
        match banner.filter(|b| b.is_visible_at(now)) {
            Some(Banner::Success { message, .. }) => println!("\x1b[32m✅ {}\x1b[0m", message),
            Some(Banner::Error { message }) => eprintln!("\x1b[31m❌ {}\x1b[0m", message),
            None => {}
        }
    }
}
