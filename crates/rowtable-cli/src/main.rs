//! rowtable CLI - append to and inspect table files

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use rowtable::prelude::*;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "rowtable")]
#[command(author, version, about = "Append to and inspect rowtable files")]
struct Cli {
    /// How the last used row is found
    #[arg(long, value_enum, global = true, default_value = "scan")]
    policy: Policy,

    /// How far right a row is read
    #[arg(long, value_enum, global = true, default_value = "until-empty")]
    extent: Extent,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Append a comma-separated row, creating the file and sheet if needed
    Append {
        /// Table file
        file: PathBuf,
        /// Sheet name
        sheet: String,
        /// Comma-separated fields
        data: String,
    },

    /// Print the number of the last used row in a sheet
    Count {
        /// Table file
        file: PathBuf,
        /// Sheet name
        sheet: String,
    },

    /// Print one row (1-based) as comma-joined text
    Read {
        /// Table file
        file: PathBuf,
        /// Sheet name
        sheet: String,
        /// Row number, starting at 1
        row: u32,
    },

    /// List the sheets in a table file with their row counts
    Sheets {
        /// Table file
        file: PathBuf,
    },

    /// Print every counted row of one sheet, or of all sheets
    Dump {
        /// Table file
        file: PathBuf,
        /// Only this sheet
        #[arg(short, long)]
        sheet: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Policy {
    Scan,
    Tracked,
}

#[derive(Clone, Copy, ValueEnum)]
enum Extent {
    UntilEmpty,
    LastNonEmpty,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let options = TableOptions {
        row_count: match cli.policy {
            Policy::Scan => RowCountPolicy::Scan,
            Policy::Tracked => RowCountPolicy::Tracked,
        },
        column_extent: match cli.extent {
            Extent::UntilEmpty => ColumnExtent::UntilEmpty,
            Extent::LastNonEmpty => ColumnExtent::LastNonEmpty,
        },
        ..Default::default()
    };

    match cli.command {
        Commands::Append { file, sheet, data } => append(&file, &sheet, &data, options),
        Commands::Count { file, sheet } => count(&file, &sheet, options),
        Commands::Read { file, sheet, row } => read(&file, &sheet, row, options),
        Commands::Sheets { file } => list_sheets(&file, options),
        Commands::Dump { file, sheet } => dump(&file, sheet.as_deref(), options),
    }
}

fn open(file: &Path, options: TableOptions) -> Result<FileTable> {
    FileTable::open_with(file, options)
        .with_context(|| format!("Failed to open '{}'", file.display()))
}

fn append(file: &Path, sheet: &str, data: &str, options: TableOptions) -> Result<()> {
    let fields = RowCodec::default().split(data);
    let mut table = FileTable::open_or_create_with(file, options)
        .with_context(|| format!("Failed to open or create '{}'", file.display()))?;
    let row = table
        .append_row(sheet, &fields)
        .with_context(|| format!("Failed to append to sheet '{}'", sheet))?;
    println!("{}", row);
    Ok(())
}

fn count(file: &Path, sheet: &str, options: TableOptions) -> Result<()> {
    let table = open(file, options)?;
    if table.sheet(sheet).is_none() {
        bail!("Sheet '{}' not found in '{}'", sheet, file.display());
    }
    println!("{}", table.row_count(sheet));
    Ok(())
}

fn read(file: &Path, sheet: &str, row: u32, options: TableOptions) -> Result<()> {
    let table = open(file, options)?;
    let fields = table
        .read_row(sheet, row)
        .with_context(|| format!("Failed to read row {} of '{}'", row, sheet))?;
    println!("{}", join(&fields));
    Ok(())
}

fn list_sheets(file: &Path, options: TableOptions) -> Result<()> {
    let table = open(file, options)?;

    if table.sheet_names().is_empty() {
        eprintln!("Warning: '{}' has no sheets", file.display());
        return Ok(());
    }

    println!("Sheets in '{}':", file.display());
    for (i, name) in table.sheet_names().into_iter().enumerate() {
        println!("  {}: {} ({} rows)", i, name, table.row_count(name));
    }
    Ok(())
}

fn dump(file: &Path, sheet: Option<&str>, options: TableOptions) -> Result<()> {
    let table = open(file, options)?;

    let names: Vec<&str> = match sheet {
        Some(name) if table.sheet(name).is_some() => vec![name],
        Some(name) => bail!("Sheet '{}' not found in '{}'", name, file.display()),
        None => table.sheet_names(),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for name in &names {
        if names.len() > 1 {
            writeln!(out, "[{}]", name)?;
        }
        for row in 1..=table.row_count(name) {
            writeln!(out, "{}", join(&table.read_row(name, row)?))?;
        }
    }
    out.flush()?;
    Ok(())
}

fn join(fields: &[String]) -> String {
    String::from_utf8_lossy(&RowCodec::default().encode(fields)).into_owned()
}
