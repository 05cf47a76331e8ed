//! recipe-sql CLI - Convert a recipe spreadsheet to SQL INSERT statements
//!
//! ```bash
//! recipe-sql Gourmet_Pizza_Sauces.xlsx              # Print SQL to stdout
//! recipe-sql Gourmet_Pizza_Sauces.xlsx output.sql   # Write SQL to a file
//! recipe-sql sauces.csv --delimiter ';'             # Delimited text input
//! ```

use clap::Parser;
use recipe_sql::{convert_file, write_sql, ConvertOptions};
use std::error::Error;
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "recipe-sql")]
#[command(about = "Convert a recipe spreadsheet to SQL INSERT statements", long_about = None)]
struct Cli {
    /// Input spreadsheet (.xlsx, .xls, .ods, .csv, ...)
    input: PathBuf,

    /// Output .sql file (default: stdout)
    output: Option<PathBuf>,

    /// Worksheet to read (default: first sheet)
    #[arg(short, long)]
    sheet: Option<String>,

    /// Delimiter for CSV/TSV input (auto-detect if not specified)
    #[arg(short, long)]
    delimiter: Option<char>,
}

fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();

    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));
    fmt()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let options = ConvertOptions {
        sheet: cli.sheet,
        delimiter: cli.delimiter,
    };

    if let Err(e) = cmd_convert(&cli.input, cli.output.as_deref(), &options) {
        eprintln!("❌ Error: {}", e);
        let mut source = e.source();
        while let Some(cause) = source {
            eprintln!("   caused by: {}", cause);
            source = cause.source();
        }
        std::process::exit(1);
    }
}

fn cmd_convert(
    input: &Path,
    output: Option<&Path>,
    options: &ConvertOptions,
) -> Result<(), Box<dyn Error>> {
    eprintln!("📄 Processing: {}", input.display());

    let result = convert_file(input, options)?;

    for warning in &result.warnings {
        eprintln!("⚠️  Warning: {}", warning);
    }

    match output {
        Some(path) => {
            write_sql(&result, path)?;
            eprintln!("✅ SQL file generated: {}", path.display());
            eprintln!("   {} recipes converted", result.row_count);
        }
        None => {
            println!("{}", result.sql);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_input_is_required() {
        assert!(Cli::try_parse_from(["recipe-sql"]).is_err());
    }

    #[test]
    fn test_positional_output() {
        let cli = Cli::try_parse_from(["recipe-sql", "in.xlsx", "out.sql", "-s", "Sauces"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("in.xlsx"));
        assert_eq!(cli.output, Some(PathBuf::from("out.sql")));
        assert_eq!(cli.sheet.as_deref(), Some("Sauces"));
        assert_eq!(cli.delimiter, None);
    }
}
