use std::fmt::Write as _;
use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use tracing::info;

use persona_insight::config::AppConfig;
use persona_insight::diagnosis::{self, DiagnosisCalculationResult, JobProfile};
use persona_insight::error::AppError;
use persona_insight::{intake, telemetry};

#[derive(Parser, Debug)]
#[command(
    name = "Persona Insight",
    about = "Run the personality diagnosis engine from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a diagnosis over an exported answer sheet
    Diagnose(DiagnoseArgs),
    /// Inspect the job requirement table
    Jobs {
        #[command(subcommand)]
        command: JobsCommand,
    },
}

#[derive(Args, Debug)]
struct DiagnoseArgs {
    /// Answer sheet exported by the survey platform (.json or .csv)
    #[arg(long)]
    answers: PathBuf,
    /// Emit the full result as JSON instead of the text report
    #[arg(long)]
    json: bool,
    /// Override the configured number of job-fit rows in the text report
    #[arg(long)]
    limit: Option<usize>,
}

#[derive(Subcommand, Debug)]
enum JobsCommand {
    /// List every job type known to the fit scorer
    List,
    /// Show the weighted requirement profile for one job type
    Show { job_type: String },
}

fn main() {
    if let Err(err) = run_cli() {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();

    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    match cli.command {
        Command::Diagnose(args) => run_diagnose(args, config.report.job_limit),
        Command::Jobs { command } => {
            run_jobs(command);
            Ok(())
        }
    }
}

fn run_diagnose(args: DiagnoseArgs, configured_limit: usize) -> Result<(), AppError> {
    let answers = intake::from_path(&args.answers)?;
    info!(count = answers.len(), "imported answer sheet");

    let result = diagnosis::calculate(&answers);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        let limit = args.limit.unwrap_or(configured_limit);
        print!(
            "{}",
            render_diagnosis(&result, limit, Local::now().date_naive())
        );
    }

    Ok(())
}

fn run_jobs(command: JobsCommand) {
    match command {
        JobsCommand::List => {
            for job_type in diagnosis::job_types() {
                println!("{job_type}");
            }
        }
        JobsCommand::Show { job_type } => match diagnosis::job_profile(&job_type) {
            Some(profile) => print!("{}", render_job_profile(profile)),
            None => println!("unknown job type: {job_type}"),
        },
    }
}

fn render_diagnosis(
    result: &DiagnosisCalculationResult,
    job_limit: usize,
    generated_on: NaiveDate,
) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Personality diagnosis report ({generated_on})");
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Type: {} ({})",
        result.type_result.type_name,
        result.type_result.type_code.label()
    );
    let _ = writeln!(
        out,
        "Features: {}",
        result.type_result.feature_labels.join(", ")
    );

    let _ = writeln!(out, "\nBig Five (T-scores)");
    let big_five = &result.big_five;
    let _ = writeln!(out, "- Extraversion: {}", big_five.extraversion);
    let _ = writeln!(out, "- Openness: {}", big_five.openness);
    let _ = writeln!(out, "- Agreeableness: {}", big_five.agreeableness);
    let _ = writeln!(out, "- Conscientiousness: {}", big_five.conscientiousness);
    let _ = writeln!(out, "- Neuroticism: {}", big_five.neuroticism);

    let _ = writeln!(out, "\nThinking pattern");
    let thinking = &result.thinking;
    let _ = writeln!(out, "- Leadership: {}", thinking.leader);
    let _ = writeln!(out, "- Analytical Thinking: {}", thinking.analyst);
    let _ = writeln!(out, "- Supportiveness: {}", thinking.supporter);
    let _ = writeln!(out, "- Energy: {}", thinking.energetic);

    let _ = writeln!(out, "\nBehavior pattern");
    let behavior = &result.behavior;
    let _ = writeln!(out, "- Efficiency: {}", behavior.efficiency);
    let _ = writeln!(out, "- Friendliness: {}", behavior.friendliness);
    let _ = writeln!(out, "- Knowledge: {}", behavior.knowledge);
    let _ = writeln!(out, "- Appearance: {}", behavior.appearance);
    let _ = writeln!(out, "- Challenge: {}", behavior.challenge);

    let _ = writeln!(
        out,
        "\nStress tolerance: {}",
        result.stress_tolerance.label()
    );

    let _ = writeln!(
        out,
        "\nReliability: {} (score {})",
        result.reliability.status.label(),
        result.reliability.score
    );
    for issue in &result.reliability.issues {
        let _ = writeln!(out, "- {issue}");
    }

    let shown = job_limit.min(result.job_potential.len());
    let _ = writeln!(
        out,
        "\nJob potential (top {shown} of {})",
        result.job_potential.len()
    );
    for potential in result.job_potential.iter().take(job_limit) {
        let matches = if potential.matching_factors.is_empty() {
            String::new()
        } else {
            format!(" | matches: {}", potential.matching_factors.join(", "))
        };
        let _ = writeln!(
            out,
            "- [{}] {:3} {}{}",
            potential.grade.label(),
            potential.score,
            potential.job_type,
            matches
        );
    }

    out
}

fn render_job_profile(profile: &JobProfile) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", profile.job_type);
    let _ = writeln!(out, "{}", profile.description);
    let _ = writeln!(out, "\nWeighted requirements");
    for requirement in &profile.requirements {
        let _ = writeln!(
            out,
            "- {} (weight {:.1}, ideal {:?})",
            requirement.factor.label(),
            requirement.weight,
            requirement.ideal
        );
    }

    out
}
