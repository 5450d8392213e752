use carescreen::cli::{self, Commands, ReportFormat};
use carescreen::collab::auth::{AuthProvider, FileAuth};
use carescreen::collab::store::JsonlResultStore;
use carescreen::collab::LoadState;
use carescreen::error::ScreenError;
use carescreen::report::{self, OutputFormat};
use carescreen::session::{load_history, ScreeningSession};
use carescreen::types::config::ScreenConfig;
use carescreen::types::report::{HistoryReport, ScoreReport};
use carescreen::{catalog, config, intake, logging};
use clap::Parser;
use std::path::Path;
use std::sync::Arc;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn output_format(format: ReportFormat) -> OutputFormat {
    match format {
        ReportFormat::Json => OutputFormat::Json,
        ReportFormat::Md => OutputFormat::Md,
    }
}

fn collaborators(root: &Path, cfg: &ScreenConfig) -> (Arc<FileAuth>, Arc<JsonlResultStore>) {
    let auth = FileAuth::new(&cfg.data_dir(root));
    let store = JsonlResultStore::new(cfg.history_file(root));
    (Arc::new(auth), Arc::new(store))
}

fn run() -> Result<i32, ScreenError> {
    let cli = cli::Cli::parse();
    let cfg = config::load_config(&cli.root)?;
    logging::init(logging::level_for(cli.verbose, cli.quiet).unwrap_or(cfg.log_level()));
    tracing::debug!(root = %cli.root.display(), "configuration loaded");

    match cli.command {
        Commands::List => {
            let entries = catalog::discover(&cfg.assessments_dir(&cli.root))?;
            if entries.is_empty() {
                println!("list: no assessments");
                return Ok(exit_code::SUCCESS);
            }
            for entry in &entries {
                println!(
                    "{}\t{}\t{} question(s)\t{}",
                    entry.definition.id,
                    entry.definition.kind,
                    entry.definition.question_count(),
                    entry.definition.title
                );
            }
            Ok(exit_code::SUCCESS)
        }
        Commands::Score(cmd) => {
            let definition =
                catalog::resolve(&cfg.assessments_dir(&cli.root), &cmd.assessment)?;
            let answers = intake::load_answers(&cmd.answers)?;
            let (auth, store) = collaborators(&cli.root, &cfg);

            let mut session = ScreeningSession::new(Arc::new(definition), auth, store);
            session.answer_all(&answers)?;

            let score_report = if cmd.save {
                let submission = session.submit()?;
                ScoreReport::new(session.definition(), submission.result)
                    .with_saved(submission.record)
            } else {
                ScoreReport::new(session.definition(), session.result())
            };

            let rendered = report::render_score(&score_report, output_format(cmd.format))?;
            println!("{rendered}");

            if score_report.result.is_partial() {
                eprintln!(
                    "warning: {} of {} questions answered",
                    session.answers().len(),
                    score_report.question_count
                );
                Ok(exit_code::WARNINGS)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
        Commands::Login(cmd) => {
            let (auth, _) = collaborators(&cli.root, &cfg);
            let respondent = cmd
                .respondent
                .as_deref()
                .or(cfg.default_respondent())
                .unwrap_or_default();
            let session = auth.sign_in(respondent)?;
            println!("signed in as {}", session.respondent);
            Ok(exit_code::SUCCESS)
        }
        Commands::Logout => {
            let (auth, _) = collaborators(&cli.root, &cfg);
            auth.sign_out()?;
            println!("signed out");
            Ok(exit_code::SUCCESS)
        }
        Commands::Whoami => {
            let (auth, _) = collaborators(&cli.root, &cfg);
            match auth.current_session()? {
                Some(session) => {
                    println!(
                        "{} (since {})",
                        session.respondent,
                        session.signed_in_at.to_rfc3339()
                    );
                    Ok(exit_code::SUCCESS)
                }
                None => {
                    println!("not signed in");
                    Ok(exit_code::WARNINGS)
                }
            }
        }
        Commands::History(cmd) => {
            let (auth, store) = collaborators(&cli.root, &cfg);
            let respondent = auth
                .current_session()?
                .map(|session| session.respondent)
                .unwrap_or_default();

            match load_history(auth.as_ref(), store.as_ref()) {
                LoadState::Loaded(records) => {
                    let history = HistoryReport {
                        respondent,
                        records,
                    };
                    let rendered = report::render_history(&history, output_format(cmd.format))?;
                    println!("{rendered}");
                    Ok(exit_code::SUCCESS)
                }
                LoadState::Failed(message) => {
                    eprintln!("error: {message}");
                    Ok(exit_code::RUNTIME_FAILURE)
                }
                LoadState::Loading => Ok(exit_code::SUCCESS),
            }
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
