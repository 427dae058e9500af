use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, error, info, warn};

use startup_eval::batch::Ranking;
use startup_eval::config::Config;
use startup_eval::output::{self, ScoredStartup};
use startup_eval::EvalError;

const EXIT_SUCCESS: i32 = 0;
const EXIT_FAILURE: i32 = 1;
const EXIT_INVALID_INPUT: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ReportFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum RankFormat {
    Table,
    Tsv,
    Json,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate a single startup profile (YAML or JSON)
    Evaluate {
        /// Path to the profile file
        profile: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
        format: ReportFormat,

        /// Show the factors behind each sub-score
        #[arg(short, long)]
        explain: bool,

        /// Also write the JSON result to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Evaluate many profiles and list them best first
    Rank {
        /// Profile files or glob patterns (e.g. "profiles/*.yaml")
        #[arg(required = true)]
        patterns: Vec<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = RankFormat::Table)]
        format: RankFormat,

        /// Only show the top N startups
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Print the effective configuration as YAML
    Config,
}

#[derive(Parser, Debug)]
#[command(name = "startup-eval")]
#[command(about = "Startup investability scoring CLI", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    log_json: bool,

    /// Path to config file (defaults to ~/.config/startup-eval/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    startup_eval::telemetry::init_tracing(
        cli.log_json,
        startup_eval::telemetry::level_for(cli.verbose),
    );
    let start_time = Instant::now();

    // Load config
    let config_path = cli.config.map(PathBuf::from);
    let config = match startup_eval::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            error!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    // Validate scoring config at startup
    let scoring = config.effective_scoring();
    if let Err(errors) = startup_eval::scoring::validate_scoring(&scoring) {
        error!("Scoring config errors:");
        for e in errors {
            error!("  - {}", e);
        }
        std::process::exit(EXIT_CONFIG);
    }

    let use_colors = output::should_use_colors(config.color_mode());

    let code = match cli.command {
        Commands::Evaluate {
            profile,
            format,
            explain,
            output,
        } => run_evaluate(&profile, format, explain, output, &scoring, use_colors),
        Commands::Rank {
            patterns,
            format,
            limit,
        } => run_rank(&patterns, format, limit, &scoring, use_colors).await,
        Commands::Config => run_show_config(&config),
    };

    debug!("Finished in {:?}", start_time.elapsed());
    std::process::exit(code);
}

fn exit_code_for(err: &EvalError) -> i32 {
    match err {
        EvalError::InvalidConfig(_) => EXIT_CONFIG,
        e if e.is_invalid_input() => EXIT_INVALID_INPUT,
        _ => EXIT_FAILURE,
    }
}

fn run_evaluate(
    path: &std::path::Path,
    format: ReportFormat,
    explain: bool,
    output_path: Option<PathBuf>,
    scoring: &startup_eval::scoring::ScoringConfig,
    use_colors: bool,
) -> i32 {
    let profile = match startup_eval::profile::load_profile(path) {
        Ok(p) => p,
        Err(e) => {
            error!("{}", e);
            return exit_code_for(&e);
        }
    };

    let evaluation = match startup_eval::scoring::evaluate_detailed(&profile, scoring) {
        Ok(ev) => ev,
        Err(e) => {
            error!("{}", e);
            return exit_code_for(&e);
        }
    };

    match format {
        ReportFormat::Text => {
            println!(
                "{}",
                output::format_evaluation_detail(&profile, &evaluation, explain, use_colors)
            );
        }
        ReportFormat::Json => match output::format_json(&evaluation.result) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                error!("Failed to serialize result: {}", e);
                return EXIT_FAILURE;
            }
        },
    }

    if let Some(out) = output_path {
        if let Err(e) = output::save_result(&out, &evaluation.result) {
            error!("{:#}", e);
            return EXIT_FAILURE;
        }
        info!("Saved result to {}", out.display());
    }

    EXIT_SUCCESS
}

async fn run_rank(
    patterns: &[String],
    format: RankFormat,
    limit: Option<usize>,
    scoring: &startup_eval::scoring::ScoringConfig,
    use_colors: bool,
) -> i32 {
    let ranking: Ranking = match startup_eval::batch::load_and_rank(patterns, scoring).await {
        Ok(r) => r,
        Err(e) => {
            error!("{:#}", e);
            return match e.downcast_ref::<EvalError>() {
                Some(err) => exit_code_for(err),
                None => EXIT_FAILURE,
            };
        }
    };

    debug!(
        "Ranked {} startups, rejected {}",
        ranking.ranked.len(),
        ranking.rejected.len()
    );

    let shown = limit.unwrap_or(ranking.ranked.len()).min(ranking.ranked.len());
    let entries = &ranking.ranked[..shown];

    match format {
        RankFormat::Table | RankFormat::Tsv => {
            let scored: Vec<ScoredStartup> = entries
                .iter()
                .map(|r| ScoredStartup {
                    profile: &r.profile,
                    path: &r.path,
                    overall_score: r.overall_score(),
                })
                .collect();
            if matches!(format, RankFormat::Table) {
                println!("{}", output::format_ranked_table(&scored, use_colors));
            } else {
                println!("{}", output::format_tsv(&scored));
            }
        }
        RankFormat::Json => {
            let rows: Vec<serde_json::Value> = entries
                .iter()
                .map(|r| {
                    serde_json::json!({
                        "path": r.path.display().to_string(),
                        "company_name": r.profile.company_name,
                        "industry": r.profile.industry,
                        "evaluation": r.evaluation.result,
                    })
                })
                .collect();
            match serde_json::to_string_pretty(&rows) {
                Ok(json) => println!("{}", json),
                Err(e) => {
                    error!("Failed to serialize ranking: {}", e);
                    return EXIT_FAILURE;
                }
            }
        }
    }

    if !ranking.rejected.is_empty() {
        warn!("{} profiles skipped", ranking.rejected.len());
    }

    EXIT_SUCCESS
}

fn run_show_config(config: &Config) -> i32 {
    let effective = Config {
        scoring: Some(config.effective_scoring()),
        output: config.output.clone(),
    };
    match serde_saphyr::to_string(&effective) {
        Ok(yaml) => {
            print!("{}", yaml);
            EXIT_SUCCESS
        }
        Err(e) => {
            error!("Failed to serialize config: {}", e);
            EXIT_FAILURE
        }
    }
}
