use crate::commands::{
    run_climate_batch, run_climate_report, run_loan_check, ClimateBatchArgs, ClimateReportArgs,
    LoanCheckArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use risk_screen::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Risk Screen",
    about = "Climate risk pre-screening and loan eligibility checks from the command line or over HTTP",
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
    /// Screen companies for ESG exclusions and climate risk
    Climate {
        #[command(subcommand)]
        command: ClimateCommand,
    },
    /// Check loan eligibility from an externally supplied risk score
    Loan {
        #[command(subcommand)]
        command: LoanCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ClimateCommand {
    /// Generate a climate risk screening report for one company
    Report(ClimateReportArgs),
    /// Screen every company in a CSV export
    Batch(ClimateBatchArgs),
}

#[derive(Subcommand, Debug)]
enum LoanCommand {
    /// Decide a single loan application
    Check(LoanCheckArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Climate {
            command: ClimateCommand::Report(args),
        } => run_climate_report(args),
        Command::Climate {
            command: ClimateCommand::Batch(args),
        } => run_climate_batch(args),
        Command::Loan {
            command: LoanCommand::Check(args),
        } => run_loan_check(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serve_is_the_default_command() {
        let cli = Cli::try_parse_from(["risk-screen"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn parses_climate_report_factors() {
        let cli = Cli::try_parse_from([
            "risk-screen",
            "climate",
            "report",
            "--company-name",
            "GreenTech Solutions",
            "--factor",
            "flood_risk=5",
            "--factor",
            "heat_stress_score=4.5",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Climate {
                command: ClimateCommand::Report(args),
            }) => {
                assert_eq!(args.company_name.as_deref(), Some("GreenTech Solutions"));
                assert_eq!(
                    args.factors,
                    vec![
                        ("flood_risk".to_string(), 5.0),
                        ("heat_stress_score".to_string(), 4.5)
                    ]
                );
            }
            other => panic!("expected climate report, got {other:?}"),
        }
    }

    #[test]
    fn loan_check_requires_a_risk_score() {
        let result = Cli::try_parse_from([
            "risk-screen",
            "loan",
            "check",
            "--user-id",
            "CUST-1",
            "--amount",
            "50000",
        ]);
        assert!(result.is_err());
    }
}
