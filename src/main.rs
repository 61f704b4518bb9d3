use clap::{Parser, Subcommand};
use dynparam::config::DISPLAY_NAME;
use dynparam::{EnvVars, Result};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "dynparam")]
#[command(about = "Dynamic build parameter lookup", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the options of a parameter (the second list when --selected is given).
    Options {
        #[arg(long)]
        config: String,

        #[arg(long)]
        job: String,

        #[arg(long)]
        parameter: String,

        #[arg(long)]
        selected: Option<String>,
    },

    /// Print the environment a build would receive for two chosen values.
    Env {
        #[arg(long)]
        config: String,

        #[arg(long)]
        job: String,

        #[arg(long)]
        parameter: String,

        #[arg(long)]
        value: String,

        #[arg(long)]
        dependent_value: String,
    },

    /// Validate a job file and report skipped option lines.
    Check {
        #[arg(long)]
        config: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.cmd {
        Commands::Options {
            config,
            job,
            parameter,
            selected,
        } => {
            let registry = dynparam::load_jobs_file(&config)?;
            let options = match selected {
                Some(chosen) => {
                    dynparam::list_dependent_options(&registry, &job, &parameter, &chosen)?
                }
                None => dynparam::list_independent_options(&registry, &job, &parameter)?,
            };
            for option in options {
                println!("{}", option);
            }
        }
        Commands::Env {
            config,
            job,
            parameter,
            value,
            dependent_value,
        } => {
            let registry = dynparam::load_jobs_file(&config)?;
            let definition = dynparam::locate(&registry, &job, &parameter)?;

            let paired = definition.create_value(&value, &dependent_value);
            let mut env = EnvVars::new();
            paired.export_environment(&mut env);
            for (key, val) in &env {
                println!("{}={}", key, val);
            }
        }
        Commands::Check { config } => {
            let registry = dynparam::load_jobs_file(&config)?;

            let mut parameters = 0usize;
            let mut malformed = 0usize;
            for (job, set) in registry.jobs() {
                for definition in set.iter() {
                    parameters += 1;
                    for err in definition.catalog().malformed_lines() {
                        malformed += 1;
                        println!("{}/{}: {}", job, definition.name(), err);
                    }
                }
            }
            println!(
                "{}: {} jobs, {} parameters ({}), {} skipped lines",
                config,
                registry.jobs().count(),
                parameters,
                DISPLAY_NAME,
                malformed
            );
        }
    }

    Ok(())
}
