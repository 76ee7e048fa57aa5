use clap::{Parser, Subcommand, ValueEnum};
use std::io::Read;
use std::path::{Path, PathBuf};

use career_compass::bank::QuestionBank;
use career_compass::config::Config;
use career_compass::scoring::{AnswerSet, Catalog};
use tracing_subscriber::EnvFilter;

const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 2;
const EXIT_IO: i32 = 3;
const EXIT_CONFIG: i32 = 4;

#[derive(ValueEnum, Clone, Copy, Debug)]
enum OutputFormat {
    Table,
    Tsv,
    Json,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Take the assessment interactively (default if no subcommand)
    Take {
        /// Save the result to your profile without asking
        #[arg(long)]
        save: bool,
    },
    /// Score answers given as JSON or ID=CHOICE pairs
    Score {
        /// JSON file mapping question ids to choice keys ("-" for stdin)
        #[arg(long)]
        answers: Option<String>,

        /// Single answer as QUESTION_ID=CHOICE (repeatable)
        #[arg(short = 'a', long = "answer")]
        pairs: Vec<String>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        /// Show every weight that contributed to the scores
        #[arg(long)]
        explain: bool,

        /// Save the result to your profile
        #[arg(long)]
        save: bool,
    },
    /// List the questions in the loaded bank
    Questions,
    /// List saved assessments
    History {
        /// Only show assessments newer than this (e.g. "30d", "2w")
        #[arg(long)]
        since: Option<String>,
    },
    /// Open a job search for a field from your latest saved assessment
    Open {
        /// Rank of the field to search for (1-based, as shown in results)
        index: usize,
    },
}

#[derive(Parser, Debug)]
#[command(name = "career-compass")]
#[command(about = "Career assessment that ranks the fields that fit you", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/career-compass/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("career_compass={}", default_level))
        }))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn exit_with(code: i32, message: impl std::fmt::Display) -> ! {
    eprintln!("{}", message);
    std::process::exit(code);
}

fn load_bank(config: &Config) -> QuestionBank {
    match career_compass::bank::load_question_bank(config.builtin_bank, &config.banks) {
        Ok(bank) => bank,
        Err(e) => exit_with(EXIT_CONFIG, format!("Question bank error: {:#}", e)),
    }
}

fn profile_path(config: &Config) -> PathBuf {
    match &config.profile_path {
        Some(p) => PathBuf::from(p),
        None => match career_compass::profile::get_profile_path() {
            Ok(p) => p,
            Err(e) => exit_with(EXIT_IO, format!("Profile error: {:#}", e)),
        },
    }
}

fn read_answers(source: Option<&str>, pairs: &[String]) -> AnswerSet {
    let mut answers = match source {
        Some(source) => {
            let json = if source == "-" {
                let mut buf = String::new();
                if let Err(e) = std::io::stdin().read_to_string(&mut buf) {
                    exit_with(EXIT_IO, format!("Failed to read answers from stdin: {}", e));
                }
                buf
            } else {
                match std::fs::read_to_string(source) {
                    Ok(s) => s,
                    Err(e) => exit_with(EXIT_IO, format!("Failed to read {}: {}", source, e)),
                }
            };
            match AnswerSet::from_json(&json) {
                Ok(a) => a,
                Err(e) => exit_with(EXIT_INPUT, e),
            }
        }
        None => AnswerSet::new(),
    };

    for pair in pairs {
        if let Err(e) = answers.insert_pair(pair) {
            exit_with(EXIT_INPUT, e);
        }
    }
    answers
}

fn save_to_profile(
    path: &Path,
    answers: AnswerSet,
    report: career_compass::session::AssessmentReport,
) {
    let mut state = match career_compass::profile::load_profile(path) {
        Ok(s) => s,
        Err(e) => exit_with(EXIT_IO, format!("Profile error: {:#}", e)),
    };
    state.record(answers, report);
    if let Err(e) = career_compass::profile::save_profile(path, &state) {
        exit_with(EXIT_IO, format!("Profile error: {:#}", e));
    }
    eprintln!("Saved to {}", path.display());
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let command = cli.command.unwrap_or(Commands::Take { save: false });

    // Load config
    let config_path = cli.config.map(PathBuf::from);
    let config = match career_compass::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => exit_with(EXIT_CONFIG, format!("Config error: {:#}", e)),
    };

    // Validate scoring config at startup
    let scoring = config.effective_scoring();
    if let Err(errors) = career_compass::scoring::validate_scoring(&scoring) {
        eprintln!("Scoring config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    let catalog = Catalog::builtin();
    let use_colors = career_compass::output::should_use_colors();

    match command {
        Commands::Take { save } => {
            let bank = load_bank(&config);
            let stdin = std::io::stdin();
            let mut input = stdin.lock();
            let mut stdout = std::io::stdout();

            let answers = match career_compass::wizard::run_questionnaire(
                &bank,
                &mut input,
                &mut stdout,
                use_colors,
            ) {
                Ok(a) => a,
                Err(e) => exit_with(EXIT_IO, format!("Questionnaire failed: {:#}", e)),
            };

            let report = career_compass::session::assess(&answers, &bank, &catalog, &scoring);
            println!("{}", career_compass::output::format_report(&report, use_colors));
            println!();

            let should_save = save
                || (!answers.is_empty()
                    && match career_compass::wizard::prompt_yes_no(
                        &mut input,
                        &mut stdout,
                        "Save this result to your profile?",
                        true,
                    ) {
                        Ok(yes) => yes,
                        Err(e) => exit_with(EXIT_IO, format!("Save prompt failed: {:#}", e)),
                    });
            if should_save {
                save_to_profile(&profile_path(&config), answers, report);
            }
        }
        Commands::Score {
            answers,
            pairs,
            format,
            explain,
            save,
        } => {
            let bank = load_bank(&config);
            let answers = read_answers(answers.as_deref(), &pairs);
            let (report, sheet) =
                career_compass::session::assess_with_sheet(&answers, &bank, &catalog, &scoring);

            match format {
                OutputFormat::Table => {
                    println!("{}", career_compass::output::format_report(&report, use_colors));
                }
                OutputFormat::Tsv => {
                    let tsv = career_compass::output::format_tsv(&report.ranked);
                    if !tsv.is_empty() {
                        println!("{}", tsv);
                    }
                }
                OutputFormat::Json => match serde_json::to_string_pretty(&report) {
                    Ok(json) => println!("{}", json),
                    Err(e) => exit_with(EXIT_IO, format!("Failed to serialize report: {}", e)),
                },
            }

            if explain {
                eprintln!();
                eprintln!("{}", career_compass::output::format_breakdown(&sheet));
            }

            if save {
                save_to_profile(&profile_path(&config), answers, report);
            }
        }
        Commands::Questions => {
            let bank = load_bank(&config);
            println!(
                "{}",
                career_compass::output::format_question_list(bank.questions(), use_colors)
            );
        }
        Commands::History { since } => {
            let state = match career_compass::profile::load_profile(&profile_path(&config)) {
                Ok(s) => s,
                Err(e) => exit_with(EXIT_IO, format!("Profile error: {:#}", e)),
            };
            let now = chrono::Utc::now();
            let cutoff = match since {
                Some(s) => match career_compass::profile::since_cutoff(now, &s) {
                    Ok(cutoff) => cutoff,
                    Err(e) => exit_with(EXIT_INPUT, e),
                },
                None => chrono::DateTime::<chrono::Utc>::MIN_UTC,
            };
            let entries = state.since(cutoff);
            println!(
                "{}",
                career_compass::output::format_history(&entries, now, use_colors)
            );
        }
        Commands::Open { index } => {
            let state = match career_compass::profile::load_profile(&profile_path(&config)) {
                Ok(s) => s,
                Err(e) => exit_with(EXIT_IO, format!("Profile error: {:#}", e)),
            };
            let Some(latest) = state.latest() else {
                exit_with(
                    EXIT_INPUT,
                    "No saved assessment. Run `career-compass take --save` first.",
                );
            };
            let ranked = &latest.report.ranked;

            // Validate index bounds (1-based)
            if index < 1 || index > ranked.len() {
                exit_with(
                    EXIT_INPUT,
                    format!(
                        "Invalid index {}. Must be between 1 and {}.",
                        index,
                        ranked.len()
                    ),
                );
            }

            let field = &ranked[index - 1];
            let url = career_compass::browser::job_search_url(
                config.effective_job_search_url(),
                &field.title,
            );
            if let Err(e) = career_compass::browser::open_url(&url) {
                exit_with(EXIT_IO, format!("Failed to open browser: {:#}", e));
            }
            println!("Opening job search for {} in browser: {}", field.title, url);
        }
    }

    std::process::exit(EXIT_SUCCESS);
}
