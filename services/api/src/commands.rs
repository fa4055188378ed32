use crate::infra::{climate_engine, loan_service};
use clap::Args;
use risk_screen::config::AppConfig;
use risk_screen::error::AppError;
use risk_screen::screening::climate::batch::{screen_batch, BatchEntry, CompanyCsvImporter};
use risk_screen::screening::climate::{ClimateRiskReport, CompanySubmission};
use risk_screen::screening::loan::{LoanApplication, LoanDecisionReport};
use risk_screen::telemetry;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Args, Debug, Default)]
pub(crate) struct ClimateReportArgs {
    /// JSON file with the company details; flags below override its fields
    #[arg(long)]
    pub(crate) input: Option<PathBuf>,
    #[arg(long)]
    pub(crate) company_name: Option<String>,
    #[arg(long)]
    pub(crate) industry: Option<String>,
    #[arg(long)]
    pub(crate) location: Option<String>,
    /// Revenue (USD)
    #[arg(long)]
    pub(crate) revenue: Option<f64>,
    /// Carbon footprint (tons CO2e)
    #[arg(long)]
    pub(crate) carbon_footprint: Option<f64>,
    #[arg(long)]
    pub(crate) physical_risk_score: Option<f64>,
    #[arg(long)]
    pub(crate) transition_risk_score: Option<f64>,
    /// Sub-factor score as NAME=VALUE (e.g. flood_risk=5.0); repeatable
    #[arg(long = "factor", value_parser = parse_factor)]
    pub(crate) factors: Vec<(String, f64)>,
    /// Write the report as JSON; a directory receives `<company>_climate_risk_report.json`
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
    /// Print JSON instead of the text summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ClimateBatchArgs {
    /// CSV export with one company per row
    #[arg(long)]
    pub(crate) csv: PathBuf,
    /// Print JSON instead of the text summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct LoanCheckArgs {
    #[arg(long)]
    pub(crate) user_id: String,
    /// Loan amount (KES)
    #[arg(long)]
    pub(crate) amount: f64,
    /// Risk score returned by the scoring provider
    #[arg(long)]
    pub(crate) risk_score: f64,
    /// Print JSON instead of the text summary
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn parse_factor(raw: &str) -> Result<(String, f64), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, found '{raw}'"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing factor name in '{raw}'"));
    }
    let value = value
        .trim()
        .parse::<f64>()
        .map_err(|err| format!("failed to parse '{value}' as a number ({err})"))?;
    Ok((name.to_string(), value))
}

fn load_cli_config() -> Result<AppConfig, AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    Ok(config)
}

pub(crate) fn run_climate_report(args: ClimateReportArgs) -> Result<(), AppError> {
    let config = load_cli_config()?;
    let engine = climate_engine(&config)?;

    let output = args.output.clone();
    let as_json = args.json;
    let submission = build_submission(args)?;
    let report = engine.assess_submission(submission)?;

    if let Some(path) = output {
        let target = download_target(&path, &report);
        std::fs::write(&target, report.to_pretty_json()?)?;
        info!(path = %target.display(), "climate report written");
    }

    if as_json {
        println!("{}", report.to_pretty_json()?);
    } else {
        println!("{}", render_climate_report(&report));
    }

    Ok(())
}

pub(crate) fn run_climate_batch(args: ClimateBatchArgs) -> Result<(), AppError> {
    let config = load_cli_config()?;
    let engine = climate_engine(&config)?;

    let rows = CompanyCsvImporter::from_path(&args.csv)?;
    let entries = screen_batch(&engine, rows);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        println!("{}", render_batch(&entries));
    }

    Ok(())
}

pub(crate) fn run_loan_check(args: LoanCheckArgs) -> Result<(), AppError> {
    let config = load_cli_config()?;
    let service = loan_service(&config);

    let application = LoanApplication::new(args.user_id, args.amount, args.risk_score);
    let evaluation = service.evaluate(&application)?;
    let audit = serde_json::to_string(&evaluation.audit)?;
    info!(audit = %audit, "loan decision recorded");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&evaluation.report)?);
    } else {
        println!("{}", render_loan_decision(&evaluation.report));
    }

    Ok(())
}

fn build_submission(args: ClimateReportArgs) -> Result<CompanySubmission, AppError> {
    let mut submission = match &args.input {
        Some(path) => {
            let raw = std::fs::read_to_string(path)?;
            serde_json::from_str::<CompanySubmission>(&raw)?
        }
        None => CompanySubmission::default(),
    };

    if args.company_name.is_some() {
        submission.company_name = args.company_name;
    }
    if args.industry.is_some() {
        submission.industry = args.industry;
    }
    if args.location.is_some() {
        submission.location = args.location;
    }
    if args.revenue.is_some() {
        submission.revenue = args.revenue;
    }
    if args.carbon_footprint.is_some() {
        submission.carbon_footprint = args.carbon_footprint;
    }
    if args.physical_risk_score.is_some() {
        submission.physical_risk_score = args.physical_risk_score;
    }
    if args.transition_risk_score.is_some() {
        submission.transition_risk_score = args.transition_risk_score;
    }
    for (name, value) in args.factors {
        let key = if name.ends_with("_score") {
            name
        } else {
            format!("{name}_score")
        };
        submission.factor_scores.insert(key, value);
    }

    Ok(submission)
}

fn download_target(path: &Path, report: &ClimateRiskReport) -> PathBuf {
    if path.is_dir() {
        path.join(report.download_file_name())
    } else {
        path.to_path_buf()
    }
}

fn list_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "None".to_string()
    } else {
        items.join(", ")
    }
}

pub(crate) fn render_climate_report(report: &ClimateRiskReport) -> String {
    let lines = [
        "Climate Risk Screening Report".to_string(),
        format!("Company Name: {}", report.company_name),
        format!(
            "ESG Compliant: {}",
            if report.esg_compliant { "Yes" } else { "No" }
        ),
        format!("ESG Violations: {}", list_or_none(&report.esg_violations)),
        format!("Climate Risk Score: {}/10", report.climate_risk_score),
        format!("ESG Risks: {}", list_or_none(&report.esg_risks)),
        format!(
            "Climate Opportunities: {}",
            list_or_none(&report.climate_opportunities)
        ),
        format!("Recommendation: {}", report.recommendation),
    ];
    lines.join("\n")
}

pub(crate) fn render_batch(entries: &[BatchEntry]) -> String {
    let mut lines = Vec::with_capacity(entries.len() + 1);
    let failed = entries
        .iter()
        .filter(|entry| entry.report().is_none())
        .count();
    lines.push(format!(
        "Screened {} companies ({} failed)",
        entries.len(),
        failed
    ));

    for entry in entries {
        match entry {
            BatchEntry::Screened { row, report } => lines.push(format!(
                "- row {}: {} | score {}/10 | {}",
                row, report.company_name, report.climate_risk_score, report.recommendation
            )),
            BatchEntry::Failed {
                row,
                company_name,
                error,
            } => lines.push(format!(
                "- row {}: {} | error: {}",
                row,
                company_name.as_deref().unwrap_or("<unnamed>"),
                error
            )),
        }
    }

    lines.join("\n")
}

pub(crate) fn render_loan_decision(report: &LoanDecisionReport) -> String {
    format!(
        "Results\nUser: {}\nRisk Score: {}\nDecision: {}\nReason: {}",
        report.user_id,
        report.risk_score,
        report.decision.label(),
        report.reason
    )
}
