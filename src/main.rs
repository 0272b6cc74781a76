use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::num::IntErrorKind;
use std::path::PathBuf;
use tracing::{info, warn};

use numerology::catalog;
use numerology::config::{Config, OutputFormat};
use numerology::constants;
use numerology::error::NumerologyError;
use numerology::logging;
use numerology::validator;
use numerology::{Calculator, Explanation, Reading};

#[derive(Parser)]
#[command(name = "numerology")]
#[command(about = "Numerology value and interpretation for a full name")]
#[command(version)]
struct Cli {
    /// Config file (defaults to $NUMEROLOGY_CONFIG or numerology.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a name and print its reading
    Calculate {
        /// First name and last name; separate words are joined with spaces
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
        /// Print the reading as JSON
        #[arg(long)]
        json: bool,
        /// Show the letter weights and the reduction steps
        #[arg(long)]
        explain: bool,
    },
    /// Only check whether a name is acceptable (exit code 1 when it is not)
    Validate {
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },
    /// Print the interpretation for a value
    Describe {
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Print the letter weights and the catalog keys
    Table,
    /// Read one name per line from stdin until EOF or an empty line
    Interactive {
        #[arg(long)]
        json: bool,
    },
}

struct Printer {
    format: OutputFormat,
    explain: bool,
}

impl Printer {
    fn print(&self, out: &mut impl Write, reading: &Reading) -> Result<()> {
        let explanation = (self.explain && reading.valid).then(|| Explanation::of(&reading.name));

        match self.format {
            OutputFormat::Json => {
                let mut doc = serde_json::to_value(reading).map_err(NumerologyError::from)?;
                if let Some(explanation) = &explanation {
                    doc["explanation"] =
                        serde_json::to_value(explanation).map_err(NumerologyError::from)?;
                }
                writeln!(out, "{}", serde_json::to_string(&doc).map_err(NumerologyError::from)?)?;
            }
            OutputFormat::Text => {
                if let Some(explanation) = &explanation {
                    writeln!(out, "{}", explanation.render())?;
                }
                match (reading.value, reading.archetype) {
                    (Some(value), Some(title)) => writeln!(out, "{} - {}\n", value, title)?,
                    (Some(value), None) => writeln!(out, "{}\n", value)?,
                    _ => {}
                }
                writeln!(out, "{}", reading.text)?;
            }
        }
        Ok(())
    }
}

/// Catalog text for a raw CLI value. Integers too large for `i64` are simply not in the
/// catalog; anything that is not an integer is an error.
fn describe_arg(raw: &str) -> Result<&'static str, NumerologyError> {
    match raw.trim().parse::<i64>() {
        Ok(value) => {
            if u32::try_from(value).map(catalog::is_known).unwrap_or(false) {
                info!(value, "Describing value");
            } else {
                warn!(value, "Value is not in the catalog");
            }
            Ok(catalog::describe_signed(value))
        }
        Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
            warn!("Value is out of range");
            Ok(constants::UNRECOGNIZED_NUMBER_MESSAGE)
        }
        Err(_) => Err(NumerologyError::InvalidValue(raw.to_string())),
    }
}

/// Print the verdict for a name and return the process exit status
fn validate_name(name: &str, out: &mut impl Write) -> Result<i32> {
    if validator::is_valid(name) {
        writeln!(out, "valid")?;
        Ok(0)
    } else {
        writeln!(out, "invalid")?;
        Ok(1)
    }
}

/// One reading per input line; stops at EOF or the first empty line
fn run_interactive(
    calculator: &Calculator,
    printer: &Printer,
    input: impl BufRead,
    out: &mut impl Write,
) -> Result<()> {
    for line in input.lines() {
        let line = line?;
        if line.is_empty() {
            break;
        }
        let reading = calculator.calculate(&line);
        printer.print(out, &reading)?;
        out.flush()?;
    }
    Ok(())
}

fn print_table(out: &mut impl Write) -> Result<()> {
    writeln!(out, "Letters:")?;
    for (letter, weight) in constants::weight_table() {
        writeln!(out, "  {} = {}", letter, weight)?;
    }
    writeln!(out, "\nValues:")?;
    for &key in catalog::keys() {
        let title = catalog::archetype(key).unwrap_or_default();
        let marker = if numerology::engine::is_master(key) {
            " (master)"
        } else {
            ""
        };
        writeln!(out, "  {:>2} - {}{}", key, title, marker)?;
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    logging::init_logging(&config.logging);

    let calculator = Calculator::new(config.messages.clone());
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Calculate { name, json, explain } => {
            let name = name.join(" ");
            info!("Calculating reading");
            let printer = Printer {
                format: if json { OutputFormat::Json } else { config.output.format },
                explain: explain || config.output.show_breakdown,
            };
            let reading = calculator.calculate(&name);
            printer.print(&mut out, &reading)?;
        }
        Commands::Validate { name } => {
            let status = validate_name(&name.join(" "), &mut out)?;
            if status != 0 {
                out.flush()?;
                std::process::exit(status);
            }
        }
        Commands::Describe { value } => {
            writeln!(out, "{}", describe_arg(&value)?)?;
        }
        Commands::Table => print_table(&mut out)?,
        Commands::Interactive { json } => {
            info!("Starting interactive session");
            let printer = Printer {
                format: if json { OutputFormat::Json } else { config.output.format },
                explain: config.output.show_breakdown,
            };
            run_interactive(&calculator, &printer, io::stdin().lock(), &mut out)?;
        }
    }
    Ok(())
}
