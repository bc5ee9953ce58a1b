//! internship-eval: terminal front-end for the internship evaluation tracker.
//!
//! Usage:
//!   internship-eval login <username> [--password <pw>]
//!   internship-eval logout
//!   internship-eval show <page>
//!   internship-eval progress add -f date=2026-10-19 -f task="Write tests"
//!   internship-eval feedback clear --yes
//!   internship-eval company save -f name=Acme -f mentor=Dana

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dialoguer::Confirm as ConfirmPrompt;
use internship_cli::commands::{
    logout, open_context, CompanyCommand, ListCommand, LoginCommand, ShowCommand,
};
use internship_core::{default_log_level, init_logging, CoreConfig, EditMode};
use log::info;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "internship-eval")]
#[command(about = "Track internship progress, assessments, company details and feedback")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// SQLite database file
    #[arg(
        long,
        global = true,
        env = "INTERNSHIP_EVAL_DB",
        default_value = "internship_eval.sqlite3"
    )]
    db: PathBuf,

    /// Directory for rolling log files (default: ./logs)
    #[arg(long, global = true, env = "INTERNSHIP_EVAL_LOG_DIR")]
    log_dir: Option<PathBuf>,

    /// trace|debug|info|warn|error (default: debug builds `debug`, release `info`)
    #[arg(long, global = true, env = "INTERNSHIP_EVAL_LOG_LEVEL")]
    log_level: Option<String>,

    /// in-place keeps an edited entry where it is; take-out removes it until resubmitted
    #[arg(
        long,
        global = true,
        env = "INTERNSHIP_EVAL_EDIT_MODE",
        default_value = "in-place"
    )]
    edit_mode: EditMode,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in with the demo credentials
    Login(LoginCommand),
    /// End the current session
    Logout,
    /// Load a page through the session guard and print it
    Show(ShowCommand),
    /// Daily progress log
    Progress(ListCommand),
    /// Assessment records
    Assessments(ListCommand),
    /// Feedback items
    Feedback(ListCommand),
    /// Company and mentor profile
    Company(CompanyCommand),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let cwd = std::env::current_dir().context("failed to resolve current directory")?;

    let log_dir = absolutize(&cwd, cli.log_dir.as_deref().unwrap_or(Path::new("logs")));
    let log_level = cli.log_level.as_deref().unwrap_or(default_log_level());
    init_logging(log_level, &log_dir.to_string_lossy()).map_err(anyhow::Error::msg)?;

    let db_path = absolutize(&cwd, &cli.db);
    info!("event=cli_start module=cli status=ok edit_mode={}", cli.edit_mode);

    let config = CoreConfig::with_edit_mode(cli.edit_mode);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let ask = |prompt: &str| {
        ConfirmPrompt::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
            .unwrap_or(false)
    };

    open_context(&db_path, config, |ctx| match &cli.command {
        Commands::Login(cmd) => cmd.run(ctx, &mut out),
        Commands::Logout => logout(ctx, &mut out),
        Commands::Show(cmd) => cmd.run(ctx, &mut out),
        Commands::Progress(cmd) => cmd.run(ctx, &ctx.progress(), &mut out, &ask),
        Commands::Assessments(cmd) => cmd.run(ctx, &ctx.assessments(), &mut out, &ask),
        Commands::Feedback(cmd) => cmd.run(ctx, &ctx.feedback(), &mut out, &ask),
        Commands::Company(cmd) => cmd.run(ctx, &mut out),
    })?;

    out.flush()?;
    Ok(())
}

fn absolutize(cwd: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}
