use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use crate::config::config_manager::ConfigManager;
use crate::config::constants::PASSWORD_ENV;
use crate::enums::capability::Capability;
use crate::enums::commands::Commands;
use crate::errors::{ErrorHandler, SessionDeskError, SessionDeskResult};
use crate::helpers::date_helper::DateHelper;
use crate::helpers::prompt_helper::{PromptHelper, StdinConfirmer};
use crate::logger::session_printer::SessionPrinter;
use crate::services::api_client::ApiClient;
use crate::services::coordinator_view::CoordinatorView;
use crate::services::dashboard::DashboardShell;
use crate::structs::auth::Credentials;
use crate::structs::config::config::Config;
use crate::structs::config::ui_config::UiConfig;
use crate::structs::session_form::SessionForm;
use crate::traits::confirmer::Confirmer;

type Dashboard = DashboardShell<ApiClient>;

pub struct CommandRunner {
    start_time: Option<Instant>,
    config_path: Option<PathBuf>,
    email: Option<String>,
}

impl CommandRunner {
    pub fn new(config_path: Option<PathBuf>, email: Option<String>) -> Self {
        Self {
            start_time: None,
            config_path,
            email,
        }
    }

    pub fn load_config(&self) -> SessionDeskResult<Config> {
        match &self.config_path {
            Some(path) => ConfigManager::load_from(path),
            None => ConfigManager::load(),
        }
    }

    pub async fn run_command(&mut self, command: Commands) -> SessionDeskResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Init => self.init_command(),
            Commands::Validate => self.validate_command(),
            command => self.dashboard_command(command).await,
        };

        if let Some(start) = self.start_time {
            let duration = start.elapsed();
            log::info!("⏱️  Command completed in {:.2}s", duration.as_secs_f64());
        }

        result
    }

    fn init_command(&self) -> SessionDeskResult<()> {
        log::info!("🚀 Initializing session-desk configuration...");

        let path = match &self.config_path {
            Some(path) => {
                ConfigManager::write_sample_config(path)?;
                path.clone()
            }
            None => ConfigManager::create_sample_config()?,
        };

        log::info!("📝 Edit {} to point at your sessions backend.", path.display());
        log::info!("🔧 Run 'session-desk validate' to check your configuration.");
        Ok(())
    }

    fn validate_command(&self) -> SessionDeskResult<()> {
        let config = self.load_config()?;
        let result = ConfigManager::validate_config(&config);
        result.print_summary();

        if result.is_valid {
            Ok(())
        } else {
            Err(SessionDeskError::config_error(
                &format!("{} problem(s) found", result.errors.len()),
                None,
                Some("Fix the listed fields and run validate again"),
            ))
        }
    }

    async fn dashboard_command(&self, command: Commands) -> SessionDeskResult<()> {
        let config = self.load_config()?;
        let client = Arc::new(ApiClient::new(&config.api)?);
        self.sign_in(&client).await?;

        let mut dashboard = DashboardShell::open(client.as_ref(), Arc::clone(&client), &config.ui).await?;
        let result = self.dispatch(&mut dashboard, &client, &config, command).await;

        if let Err(e) = client.logout().await {
            log::warn!("⚠️ Sign out failed: {}", e.banner_message());
        }
        result
    }

    async fn sign_in(&self, client: &ApiClient) -> SessionDeskResult<()> {
        let email = match &self.email {
            Some(email) => email.clone(),
            None => PromptHelper::ask("Email", "")?,
        };
        if email.is_empty() {
            return Err(SessionDeskError::user_input_error(
                "",
                "an email address",
                "Pass --email or set SESSION_DESK_EMAIL",
            ));
        }

        let password = match std::env::var(PASSWORD_ENV) {
            Ok(password) if !password.is_empty() => password,
            _ => PromptHelper::ask("Password", "")?,
        };

        let response = client.login(&Credentials { email, password }).await?;
        log::info!("✅ Signed in as {}", response.user.full_name());
        Ok(())
    }

    async fn dispatch(
        &self,
        dashboard: &mut Dashboard,
        client: &ApiClient,
        config: &Config,
        command: Commands,
    ) -> SessionDeskResult<()> {
        match command {
            Commands::Sessions => {
                let view = dashboard.coordinator()?;
                view.show().await;
                SessionPrinter::print_sessions(view.sessions());
                Ok(())
            }
            Commands::Mine => {
                let view = dashboard.trainer()?;
                view.set_visible(true).await;
                SessionPrinter::print_trainer_sessions(&view.rows(), view.load_failure());
                Ok(())
            }
            Commands::Trainers => {
                let view = dashboard.coordinator()?;
                view.show().await;
                SessionPrinter::print_trainers(view.trainers());
                Ok(())
            }
            Commands::Create { classe, specialite, promotion, niveau, semestre, start, end, trainer } => {
                let view = dashboard.coordinator()?;
                view.show().await;
                *view.begin_create() = SessionForm {
                    classe,
                    specialite,
                    promotion,
                    niveau,
                    semestre,
                    date_d: start,
                    date_f: end,
                    formateur_id: trainer.map(|id| id.to_string()).unwrap_or_default(),
                };
                Self::submit_and_report(view).await
            }
            Commands::Edit { id, changes } => {
                let view = dashboard.coordinator()?;
                view.show().await;
                changes.apply_to(view.begin_edit(id)?);
                Self::submit_and_report(view).await
            }
            Commands::Delete { id, yes } => {
                let confirmer = Self::delete_confirmer(&config.ui, yes);
                let view = dashboard.coordinator()?;
                view.show().await;
                let result = view.delete(id, confirmer.as_ref(), Instant::now()).await;
                Self::report(view, result.map(|deleted| {
                    if !deleted {
                        log::info!("⏭️ Deletion cancelled.");
                    }
                }))
            }
            Commands::Assign { session, trainer } => {
                let view = dashboard.coordinator()?;
                view.show().await;
                let result = view.assign(session, trainer, Instant::now()).await;
                Self::report(view, result)
            }
            Commands::Unassign { session, trainer } => {
                let view = dashboard.coordinator()?;
                view.show().await;
                let result = view.unassign(session, trainer, Instant::now()).await;
                Self::report(view, result)
            }
            Commands::Users => {
                dashboard.require(Capability::ManageUsers)?;
                let users = client.get_users().await?;
                SessionPrinter::print_users(&users);
                Ok(())
            }
            Commands::Shell => self.interactive_shell(dashboard, &config.ui).await,
            Commands::Init | Commands::Validate => Ok(()),
        }
    }

    async fn submit_and_report(view: &mut CoordinatorView<ApiClient>) -> SessionDeskResult<()> {
        let result = view.submit(DateHelper::today(), Instant::now()).await;
        Self::report(view, result.map(|_| ()))
    }

    fn report(view: &CoordinatorView<ApiClient>, result: SessionDeskResult<()>) -> SessionDeskResult<()> {
        SessionPrinter::print_banner(view.banner(Instant::now()), Instant::now());
        if result.is_ok() {
            SessionPrinter::print_sessions(view.sessions());
        }
        result
    }

    /// `--yes` or `confirm_deletes = false` skips the prompt.
    fn delete_confirmer(ui: &UiConfig, yes: bool) -> Box<dyn Confirmer> {
        if yes || !ui.confirm_deletes {
            Box::new(|_: &str| true)
        } else {
            Box::new(StdinConfirmer)
        }
    }

    async fn interactive_shell(&self, dashboard: &mut Dashboard, ui: &UiConfig) -> SessionDeskResult<()> {
        dashboard.show_all().await;
        SessionPrinter::print_profile(dashboard.profile(), dashboard.roles(), &dashboard.panels());
        SessionPrinter::print_features(dashboard.features());
        Self::print_help();

        loop {
            let line = match PromptHelper::ask("\nsession-desk", "") {
                Ok(line) => line,
                Err(e) if PromptHelper::is_eof(&e) => {
                    println!();
                    log::info!("👋 Input closed, leaving the shell");
                    return Ok(());
                }
                Err(e) => return Err(e.into()),
            };
            let words: Vec<&str> = line.split_whitespace().collect();
            let outcome = match words.as_slice() {
                [] => continue,
                ["quit"] | ["exit"] | ["q"] => return Ok(()),
                ["help"] => {
                    Self::print_help();
                    Ok(())
                }
                ["list"] => dashboard.coordinator().map(|view| SessionPrinter::print_sessions(view.sessions())),
                ["reload"] => match dashboard.coordinator() {
                    Ok(view) => {
                        view.reload().await;
                        SessionPrinter::print_sessions(view.sessions());
                        Ok(())
                    }
                    Err(e) => Err(e),
                },
                ["trainers"] => dashboard.coordinator().map(|view| SessionPrinter::print_trainers(view.trainers())),
                ["mine"] => match dashboard.trainer() {
                    Ok(view) => {
                        view.refresh().await;
                        SessionPrinter::print_trainer_sessions(&view.rows(), view.load_failure());
                        Ok(())
                    }
                    Err(e) => Err(e),
                },
                ["assign", session, trainer] => match (Self::parse_id(session), Self::parse_id(trainer)) {
                    (Ok(session), Ok(trainer)) => match dashboard.coordinator() {
                        Ok(view) => {
                            let result = view.assign(session, trainer, Instant::now()).await;
                            Self::report(view, result)
                        }
                        Err(e) => Err(e),
                    },
                    (Err(e), _) | (_, Err(e)) => Err(e),
                },
                ["unassign", session, trainer] => match (Self::parse_id(session), Self::parse_id(trainer)) {
                    (Ok(session), Ok(trainer)) => match dashboard.coordinator() {
                        Ok(view) => {
                            let result = view.unassign(session, trainer, Instant::now()).await;
                            Self::report(view, result)
                        }
                        Err(e) => Err(e),
                    },
                    (Err(e), _) | (_, Err(e)) => Err(e),
                },
                ["delete", id] => match (Self::parse_id(id), dashboard.coordinator()) {
                    (Ok(id), Ok(view)) => {
                        let confirmer = Self::delete_confirmer(ui, false);
                        let result = view.delete(id, confirmer.as_ref(), Instant::now()).await;
                        Self::report(view, result.map(|_| ()))
                    }
                    (Err(e), _) | (_, Err(e)) => Err(e),
                },
                ["create"] => match dashboard.coordinator() {
                    Ok(view) => {
                        match Self::fill_form(view.begin_create()) {
                            Ok(()) => Self::submit_and_report(view).await,
                            Err(e) => Err(e),
                        }
                    }
                    Err(e) => Err(e),
                },
                ["edit", id] => match (Self::parse_id(id), dashboard.coordinator()) {
                    (Ok(id), Ok(view)) => match view.begin_edit(id) {
                        Ok(form) => match Self::fill_form(form) {
                            Ok(()) => Self::submit_and_report(view).await,
                            Err(e) => Err(e),
                        },
                        Err(e) => Err(e),
                    },
                    (Err(e), _) | (_, Err(e)) => Err(e),
                },
                ["dismiss"] => dashboard.coordinator().map(|view| view.dismiss_banner()),
                _ => Err(SessionDeskError::user_input_error(&line, "a shell command", "Type 'help' to list commands")),
            };

            if let Err(e) = outcome {
                ErrorHandler::handle_error(&e);
            }
        }
    }

    fn fill_form(form: &mut SessionForm) -> SessionDeskResult<()> {
        form.classe = PromptHelper::ask("Classe", &form.classe)?;
        form.specialite = PromptHelper::ask("Spécialité", &form.specialite)?;
        form.promotion = PromptHelper::ask("Promotion", &form.promotion)?;
        form.niveau = PromptHelper::ask("Niveau", &form.niveau)?;
        form.semestre = PromptHelper::ask("Semestre", &form.semestre)?;
        form.date_d = PromptHelper::ask("Start date (YYYY-MM-DD)", &form.date_d)?;
        form.date_f = PromptHelper::ask("End date (YYYY-MM-DD)", &form.date_f)?;
        form.formateur_id = PromptHelper::ask("Trainer id (optional)", &form.formateur_id)?;
        Ok(())
    }

    fn parse_id(raw: &str) -> SessionDeskResult<i64> {
        raw.parse::<i64>()
            .map_err(|_| SessionDeskError::user_input_error(raw, "a numeric id", "Ids are shown as #<id> in listings"))
    }

    fn print_help() {
        println!("\nCommands:");
        println!("  list | reload | trainers | mine");
        println!("  assign <session> <trainer> | unassign <session> <trainer>");
        println!("  create | edit <session> | delete <session>");
        println!("  dismiss | help | quit");
    }
}
