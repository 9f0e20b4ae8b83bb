use clap::Parser;
use cli::{commands::Commands, error::CliError, output};
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "flyql",
    version = "0.1.0",
    about = "Compile flyql filter trees into SQL predicates"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    // Logs go to stderr so stdout carries only the result
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}

fn run(command: Commands) -> Result<(), CliError> {
    match command {
        Commands::Render {
            fields,
            tree,
            where_clause,
            output,
        } => {
            let sql = cli::render(&fields, &tree, where_clause)?;
            match output {
                Some(path) => {
                    output::write_sql(&sql, &path)?;
                    info!(path = %path.display(), "Wrote predicate");
                }
                None => output::print_sql(&sql),
            }
        }
        Commands::Normalize { types } => {
            let rows = cli::normalize(&types);
            println!("{}", output::format_normalized(&rows));
        }
        Commands::Fields { fields } => {
            println!("{}", cli::describe_fields(&fields)?);
        }
    }

    Ok(())
}
