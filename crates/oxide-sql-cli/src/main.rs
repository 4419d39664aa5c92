//! oxide-sql CLI
//!
//! Command-line tool for quoting SQL identifiers, values and fragments, and
//! for rendering column definitions, for a chosen platform.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{Level, debug};
use tracing_subscriber::FmtSubscriber;

use oxide_sql_ddl::{render, Column, ColumnType, Expression};
use oxide_sql_platform::{Platform, PlatformConfig, PlatformKind};

/// Dialect-aware SQL quoting.
#[derive(Parser, Debug)]
#[command(name = "oxide-sql")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Target platform (sqlserver, mysql, postgresql, sqlite, oracle, sql92, ibmdb2).
    #[arg(short, long, env = "OXIDE_SQL_PLATFORM", default_value = "sql92")]
    platform: PlatformKind,

    /// JSON platform configuration file. Takes precedence over --platform.
    #[arg(short, long, env = "OXIDE_SQL_CONFIG")]
    config: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Quote a single identifier.
    Identifier {
        /// The identifier.
        name: String,
    },

    /// Quote an identifier chain, one segment per argument.
    Chain {
        /// Chain segments (a single argument is split on the separator).
        #[arg(required = true)]
        segments: Vec<String>,
    },

    /// Quote a value.
    Value {
        /// The value.
        value: String,

        /// Treat the value as trusted (no security warning).
        #[arg(long)]
        trusted: bool,
    },

    /// Quote a list of values.
    Values {
        /// The values.
        #[arg(required = true)]
        values: Vec<String>,
    },

    /// Quote the identifiers inside a SQL fragment.
    Fragment {
        /// The fragment.
        fragment: String,

        /// Word to leave unquoted (repeatable, case-insensitive).
        #[arg(short, long = "safe-word")]
        safe_words: Vec<String>,
    },

    /// Render a column definition.
    Column {
        /// Column type.
        #[arg(value_enum)]
        column_type: ColumnKind,

        /// Column name.
        name: String,

        /// Declare the column NOT NULL.
        #[arg(long)]
        not_null: bool,

        /// Default value.
        #[arg(long)]
        default: Option<String>,

        /// Length for sized types.
        #[arg(long)]
        length: Option<u32>,

        /// Precision (DECIMAL) or total digits (FLOAT).
        #[arg(long)]
        precision: Option<u16>,

        /// Scale (DECIMAL) or decimal digits (FLOAT).
        #[arg(long)]
        scale: Option<u16>,

        /// Print the expression data as JSON instead of rendered SQL.
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ColumnKind {
    BigInteger,
    Integer,
    Boolean,
    Date,
    Time,
    Datetime,
    Timestamp,
    Text,
    Blob,
    Char,
    Varchar,
    Binary,
    Varbinary,
    Decimal,
    Float,
}

impl ColumnKind {
    fn column_type(
        self,
        length: Option<u32>,
        precision: Option<u16>,
        scale: Option<u16>,
    ) -> anyhow::Result<ColumnType> {
        let length = || length.with_context(|| format!("--length is required for {self:?}"));
        let precision =
            || precision.with_context(|| format!("--precision is required for {self:?}"));
        Ok(match self {
            Self::BigInteger => ColumnType::BigInteger,
            Self::Integer => ColumnType::Integer,
            Self::Boolean => ColumnType::Boolean,
            Self::Date => ColumnType::Date,
            Self::Time => ColumnType::Time,
            Self::Datetime => ColumnType::Datetime,
            Self::Timestamp => ColumnType::Timestamp,
            Self::Text => ColumnType::Text,
            Self::Blob => ColumnType::Blob { length: length().ok() },
            Self::Char => ColumnType::Char { length: length()? },
            Self::Varchar => ColumnType::Varchar { length: length()? },
            Self::Binary => ColumnType::Binary { length: length()? },
            Self::Varbinary => ColumnType::Varbinary { length: length()? },
            Self::Decimal => ColumnType::Decimal {
                precision: precision()?,
                scale,
            },
            Self::Float => ColumnType::Float {
                digits: precision()?,
                decimal: scale.unwrap_or(0),
            },
        })
    }
}

fn load_platform(cli: &Cli) -> anyhow::Result<Platform> {
    let config = match &cli.config {
        Some(path) => PlatformConfig::from_path(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => PlatformConfig::new(cli.platform),
    };
    debug!(platform = %config.platform, "Building platform");
    Ok(config.build()?)
}

fn run(cli: &Cli) -> anyhow::Result<String> {
    let platform = load_platform(cli)?;

    let output = match &cli.command {
        Commands::Identifier { name } => platform.quote_identifier(name)?,
        Commands::Chain { segments } => match segments.as_slice() {
            [single] => platform.quote_identifier_chain(single.as_str())?,
            many => platform.quote_identifier_chain(many)?,
        },
        Commands::Value { value, trusted } => {
            if *trusted {
                platform.quote_trusted_value(value)
            } else {
                platform.quote_value(value)
            }
        }
        Commands::Values { values } => platform.quote_value_list(values),
        Commands::Fragment {
            fragment,
            safe_words,
        } => {
            let safe_words: Vec<&str> = safe_words.iter().map(String::as_str).collect();
            platform.quote_identifier_in_fragment(fragment, &safe_words)
        }
        Commands::Column {
            column_type,
            name,
            not_null,
            default,
            length,
            precision,
            scale,
            json,
        } => {
            let mut column =
                Column::new(name, column_type.column_type(*length, *precision, *scale)?);
            column.set_nullable(!not_null);
            if let Some(default) = default {
                column.set_default(default);
            }
            if *json {
                serde_json::to_string_pretty(&column.expression_data())?
            } else {
                render(&column, &platform)?
            }
        }
    };
    Ok(output)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    println!("{}", run(&cli)?);
    Ok(())
}
