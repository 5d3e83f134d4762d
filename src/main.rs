//! CLI entry point for `mailbits`.

use std::path::{Path, PathBuf};

use clap::{CommandFactory, Parser, Subcommand};

use mailbits::config::Config;
use mailbits::{csv, parse_address_list, split_address_list, text, timestamp};

#[derive(Parser)]
#[command(name = "mailbits", version, about = "Mail-adjacent string utilities")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose logging (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Config file to use instead of the standard location
    #[arg(long, value_name = "FILE", global = true, env = "MAILBITS_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a comma-separated address list
    Parse {
        list: String,
        #[arg(long)]
        json: bool,
        /// Exit with an error if any candidate fails to parse
        #[arg(long)]
        strict: bool,
    },
    /// Show how an address list is split into candidates
    Split { list: String },
    /// Print the trailing labels of an address's domain
    Domain {
        address: String,
        /// Number of labels to keep
        #[arg(short = 'n', long, allow_hyphen_values = true)]
        labels: Option<i64>,
    },
    /// Read a CSV file
    Csv {
        path: PathBuf,
        #[arg(short, long)]
        separator: Option<String>,
        #[arg(long)]
        json: bool,
        /// Print one line per column instead of per row
        #[arg(long, conflicts_with = "json")]
        columns: bool,
    },
    /// Format a timestamp (now, unless --ms is given)
    Timestamp {
        /// Epoch milliseconds
        #[arg(long, allow_hyphen_values = true)]
        ms: Option<i64>,
        /// Separate date components with this delimiter
        #[arg(short, long)]
        delimiter: Option<String>,
        /// Separate date components with the configured delimiter
        #[arg(long)]
        delimited: bool,
    },
    /// Normalize a label into separator-joined lowercase words
    Parameterize {
        label: String,
        #[arg(short, long, default_value = "-")]
        separator: char,
    },
    /// Write the default configuration file
    InitConfig {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match cli.config.as_deref() {
        Some(path) => mailbits::config::load_config_from(path),
        None => mailbits::config::load_config(),
    };

    let log_level = match cli.verbose {
        0 => config.general.log_level.as_str(),
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    setup_logging(log_level, &config);

    match cli.command {
        Commands::Parse { list, json, strict } => cmd_parse(&list, json, strict),
        Commands::Split { list } => cmd_split(&list),
        Commands::Domain { address, labels } => {
            cmd_domain(&address, labels.unwrap_or(config.domain.labels))
        }
        Commands::Csv {
            path,
            separator,
            json,
            columns,
        } => cmd_csv(
            &path,
            separator.as_deref().unwrap_or(&config.csv.separator),
            json,
            columns,
        ),
        Commands::Timestamp {
            ms,
            delimiter,
            delimited,
        } => {
            let delimiter =
                delimiter.or_else(|| delimited.then(|| config.timestamp.delimiter.clone()));
            cmd_timestamp(ms, delimiter.as_deref())
        }
        Commands::Parameterize { label, separator } => {
            println!("{}", text::parameterize(&label, separator));
            Ok(())
        }
        Commands::InitConfig { force } => cmd_init_config(cli.config.as_deref(), force),
        Commands::Completions { shell } => cmd_completions(shell),
    }
}

/// Set up tracing with stderr output and optional file logging.
fn setup_logging(level: &str, config: &Config) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    let stderr_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    let log_dir = mailbits::config::cache_dir(config);
    if std::fs::create_dir_all(&log_dir).is_ok() {
        let file_appender = tracing_appender::rolling::never(&log_dir, "mailbits.log");
        let file_layer = tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_writer(file_appender);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(stderr_layer)
            .with(file_layer)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(stderr_layer)
            .init();
    }
}

/// Parse an address list and print one line per candidate.
fn cmd_parse(list: &str, json: bool, strict: bool) -> anyhow::Result<()> {
    let results = parse_address_list(list);
    let failed = results.iter().filter(|r| r.is_err()).count();

    if json {
        let out: Vec<serde_json::Value> = results
            .iter()
            .map(|r| match r {
                Ok(addr) => serde_json::json!({ "ok": addr }),
                Err(e) => serde_json::json!({ "error": e, "message": e.to_string() }),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        for result in &results {
            match result {
                Ok(addr) if addr.personal_name.is_empty() => println!("ok     {}", addr.address),
                Ok(addr) => println!("ok     {} | {}", addr.address, addr.personal_name),
                Err(e) => println!("error  {e}"),
            }
        }
    }

    if strict && failed > 0 {
        anyhow::bail!("{failed} of {} address candidate(s) failed to parse", results.len());
    }
    Ok(())
}

fn cmd_split(list: &str) -> anyhow::Result<()> {
    for candidate in split_address_list(list) {
        match candidate {
            mailbits::Candidate::Complete(s) => println!("{s}"),
            mailbits::Candidate::Unterminated(s) => println!("{s}  (unterminated quote)"),
        }
    }
    Ok(())
}

fn cmd_domain(address: &str, n: i64) -> anyhow::Result<()> {
    println!("{}", mailbits::domain_from_address(address, n)?);
    Ok(())
}

/// Read a CSV file and print its rows (or columns).
fn cmd_csv(path: &Path, separator: &str, json: bool, columns: bool) -> anyhow::Result<()> {
    if !path.exists() {
        anyhow::bail!("File not found: {}", path.display());
    }

    if columns {
        let parsed = csv::parse_columns(path, separator)?;
        for header in &parsed.headers {
            let values = parsed.column(header).unwrap_or_default();
            println!("{header}: {}", values.join(" | "));
        }
        return Ok(());
    }

    let parsed = csv::parse_rows(path, separator)?;
    if json {
        let mut headers: Vec<(&String, usize)> =
            parsed.headers.iter().map(|(h, &i)| (h, i)).collect();
        headers.sort_by_key(|&(_, i)| i);

        let out: Vec<serde_json::Map<String, serde_json::Value>> = parsed
            .rows
            .iter()
            .map(|row| {
                headers
                    .iter()
                    .filter_map(|&(h, i)| {
                        row.get(i)
                            .map(|v| (h.clone(), serde_json::Value::String(v.clone())))
                    })
                    .collect()
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        for row in &parsed.rows {
            println!("{}", row.join(" | "));
        }
        eprintln!("  {} row(s), {} column(s)", parsed.rows.len(), parsed.headers.len());
    }
    Ok(())
}

fn cmd_timestamp(ms: Option<i64>, delimiter: Option<&str>) -> anyhow::Result<()> {
    let dt = match ms {
        Some(ms) => timestamp::ms_to_time(ms)
            .ok_or_else(|| anyhow::anyhow!("Timestamp out of range: {ms} ms"))?,
        None => chrono::Utc::now(),
    };
    match delimiter {
        Some(d) => println!("{}", timestamp::timestamp_with_delimiter(&dt, d)),
        None => println!("{}", timestamp::timestamp(&dt)),
    }
    Ok(())
}

/// Write a default config to `path`, or to the standard location.
fn cmd_init_config(path: Option<&Path>, force: bool) -> anyhow::Result<()> {
    let target = match path {
        Some(p) => p.to_path_buf(),
        None => mailbits::config::config_file_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config file path"))?,
    };
    if target.exists() && !force {
        anyhow::bail!("{} already exists (use --force to overwrite)", target.display());
    }

    let config = Config::default();
    match path {
        Some(p) => mailbits::config::save_config_to(&config, p)?,
        None => mailbits::config::save_config(&config)?,
    }
    println!("  Wrote {}", target.display());
    Ok(())
}

/// Generate shell completions and print to stdout.
fn cmd_completions(shell: clap_complete::Shell) -> anyhow::Result<()> {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "mailbits", &mut std::io::stdout());
    Ok(())
}
