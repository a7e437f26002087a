use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use eyre::Result;
use intake_check::{check_file, controller_config, FormSummary};
use intake_core::dates;
use intake_forms::all_forms;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "intake-check")]
#[command(about = "Validate intake form submissions against the registration forms")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    log_json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a submission through a form's validation and progress tracking
    Check {
        /// Form identifier, e.g. sperm_donor
        form: String,

        /// JSON object of field name to value
        values: PathBuf,

        /// Treat this date (YYYY-MM-DD) as today
        #[arg(long)]
        today: Option<String>,

        /// Controller config file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the registered forms and their fields
    Forms {
        #[arg(long)]
        json: bool,
    },
}

fn init_tracing(json: bool) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn main() -> Result<ExitCode> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_tracing(cli.log_json);

    match cli.command {
        Commands::Check {
            form,
            values,
            today,
            config,
            json,
        } => {
            let today = match today {
                Some(value) => dates::parse_iso_date(&value)?,
                None => dates::today(),
            };
            let config = controller_config(config.as_deref())?;
            let report = check_file(&form, &values, config, today)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", report.render_text());
            }
            Ok(if report.submitted {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Commands::Forms { json } => {
            let forms = all_forms();
            if json {
                let summaries: Vec<FormSummary<'_>> =
                    forms.iter().map(|f| FormSummary::of(f.as_ref())).collect();
                println!("{}", serde_json::to_string_pretty(&summaries)?);
            } else {
                for form in &forms {
                    println!("{}", form.describe());
                }
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}
