use std::path::PathBuf;

use crate::commands::{run_check, run_jobs, run_submit};
use crate::server;
use clap::{Args, Parser, Subcommand};
use nirvahatech::error::AppError;
use nirvahatech::forms::FormKind;

#[derive(Parser, Debug)]
#[command(
    name = "nirvahatech",
    about = "Serve the nirvahatech marketing site and exercise its lead-capture forms",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Validate a JSON file of form values and print every field error
    Check(FormArgs),
    /// Validate and deliver a JSON file of form values to the intake API once
    Submit(SubmitArgs),
    /// List the open positions
    Jobs,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Override the intake API base URL (API_BASE_URL)
    #[arg(long)]
    pub(crate) api_base: Option<String>,
}

#[derive(Args, Debug)]
pub(crate) struct FormArgs {
    /// Which form the values belong to: contact or application
    #[arg(value_parser = parse_form_kind)]
    pub(crate) kind: FormKind,
    /// JSON object mapping field names to values
    #[arg(long)]
    pub(crate) values: PathBuf,
    /// Resume file attached to an application
    #[arg(long)]
    pub(crate) resume: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct SubmitArgs {
    #[command(flatten)]
    pub(crate) form: FormArgs,
    /// Override the intake API base URL (API_BASE_URL)
    #[arg(long)]
    pub(crate) api_base: Option<String>,
}

fn parse_form_kind(raw: &str) -> Result<FormKind, String> {
    FormKind::parse(raw).ok_or_else(|| format!("unknown form '{raw}' (expected contact or application)"))
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Check(args) => run_check(args),
        Command::Submit(args) => run_submit(args).await,
        Command::Jobs => {
            run_jobs();
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serve_is_the_default_command() {
        let cli = Cli::try_parse_from(["nirvahatech"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn check_accepts_form_aliases() {
        let cli = Cli::try_parse_from(["nirvahatech", "check", "apply", "--values", "a.json"])
            .expect("parses");
        let Some(Command::Check(args)) = cli.command else {
            panic!("expected check command");
        };
        assert_eq!(args.kind, FormKind::Application);
        assert!(args.resume.is_none());
    }

    #[test]
    fn unknown_form_kind_is_rejected() {
        assert!(Cli::try_parse_from(["nirvahatech", "check", "newsletter", "--values", "a.json"]).is_err());
    }

    #[test]
    fn serve_accepts_overrides() {
        let cli = Cli::try_parse_from([
            "nirvahatech",
            "serve",
            "--port",
            "8080",
            "--api-base",
            "https://intake.example.com",
        ])
        .expect("parses");
        let Some(Command::Serve(args)) = cli.command else {
            panic!("expected serve command");
        };
        assert_eq!(args.port, Some(8080));
        assert_eq!(args.api_base.as_deref(), Some("https://intake.example.com"));
    }
}
