//! sqlgraph CLI
//!
//! Command-line tool for inspecting, normalizing and translating queries.

use std::fmt::Write as _;
use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use sqlgraph_core::{ParseOptions, parse_with_options, tokenize};
use tracing::{Level, debug, info};
use tracing_subscriber::FmtSubscriber;

/// Parse single-statement SELECT queries and translate them to Cypher.
#[derive(Parser)]
#[command(name = "sqlgraph")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON file with parse options (`max_depth`, `max_query_length`).
    #[arg(short, long, env = "SQLGRAPH_CONFIG")]
    config: Option<PathBuf>,

    /// Maximum parenthesis nesting depth in a condition.
    #[arg(long, env = "SQLGRAPH_MAX_DEPTH")]
    max_depth: Option<usize>,

    /// Maximum query length in characters.
    #[arg(long, env = "SQLGRAPH_MAX_LENGTH", conflicts_with = "no_length_limit")]
    max_length: Option<usize>,

    /// Accept queries of any length.
    #[arg(long)]
    no_length_limit: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the tokens of a query, one per line.
    Tokens {
        /// Query text (read from stdin if not given).
        query: Option<String>,
    },

    /// Print the syntax tree of a query as JSON.
    Parse {
        /// Query text (read from stdin if not given).
        query: Option<String>,

        /// Indent the JSON output.
        #[arg(short, long)]
        pretty: bool,
    },

    /// Print a query in canonical form.
    Format {
        /// Query text (read from stdin if not given).
        query: Option<String>,
    },

    /// Translate a query to Cypher.
    Translate {
        /// Query text (read from stdin if not given).
        query: Option<String>,

        /// Print the translation time on stderr.
        #[arg(short, long)]
        timing: bool,
    },

    /// Show example translations.
    Examples,
}

impl Commands {
    /// The options a command starts from when no config file is given.
    fn base_options(&self) -> ParseOptions {
        match self {
            Self::Translate { .. } => sqlgraph_cypher::default_options(),
            _ => ParseOptions::default(),
        }
    }
}

impl Cli {
    /// Builds parse options from the config file (or the command's
    /// defaults), then applies flags.
    fn parse_options(&self) -> anyhow::Result<ParseOptions> {
        let mut options = match &self.config {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config {}", path.display()))?;
                serde_json::from_str(&text)
                    .with_context(|| format!("Invalid config {}", path.display()))?
            }
            None => self.command.base_options(),
        };

        if let Some(max_depth) = self.max_depth {
            options = options.with_max_depth(max_depth);
        }
        if self.no_length_limit {
            options = options.with_max_query_length(None);
        } else if let Some(max_length) = self.max_length {
            options = options.with_max_query_length(Some(max_length));
        }

        Ok(options)
    }
}

fn read_query(query: Option<String>) -> anyhow::Result<String> {
    if let Some(query) = query {
        return Ok(query);
    }
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("Failed to read query from stdin")?;
    Ok(buf)
}

fn render_tokens(query: &str) -> anyhow::Result<String> {
    let tokens = tokenize(query)?;
    let mut out = String::new();
    for token in tokens {
        writeln!(out, "{} {:?} '{}'", token.position, token.kind, token.text)?;
    }
    Ok(out)
}

fn render_tree(query: &str, options: &ParseOptions, pretty: bool) -> anyhow::Result<String> {
    let tree = parse_with_options(query, options)?;
    let json = if pretty {
        serde_json::to_string_pretty(&tree)?
    } else {
        serde_json::to_string(&tree)?
    };
    Ok(json + "\n")
}

fn render_canonical(query: &str, options: &ParseOptions) -> anyhow::Result<String> {
    Ok(format!("{}\n", parse_with_options(query, options)?))
}

fn render_examples() -> anyhow::Result<String> {
    let mut out = String::new();
    for example in sqlgraph_cypher::examples() {
        writeln!(out, "-- {}", example.description)?;
        writeln!(out, "{}", example.sql)?;
        writeln!(out, "{}", example.cypher)?;
        writeln!(out)?;
    }
    Ok(out)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging; stdout is reserved for command output.
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let options = cli.parse_options()?;
    debug!(?options, "parse options");

    let output = match cli.command {
        Commands::Tokens { query } => render_tokens(&read_query(query)?)?,
        Commands::Parse { query, pretty } => render_tree(&read_query(query)?, &options, pretty)?,
        Commands::Format { query } => render_canonical(&read_query(query)?, &options)?,
        Commands::Translate { query, timing } => {
            let translation = sqlgraph_cypher::translate(&read_query(query)?, &options)?;
            if timing {
                info!("Translated in {:.3} ms", translation.elapsed_ms());
            }
            translation.cypher + "\n"
        }
        Commands::Examples => render_examples()?,
    };

    print!("{output}");
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
    fn test_flags_override_defaults() {
        let cli =
            Cli::try_parse_from(["sqlgraph", "--max-depth", "4", "format", "SELECT * FROM t"])
                .unwrap();
        let options = cli.parse_options().unwrap();
        assert_eq!(options.max_depth, 4);
        assert_eq!(options.max_query_length, None);
    }

    #[test]
    fn test_translate_limits_length_by_default() {
        let cli = Cli::try_parse_from(["sqlgraph", "translate", "SELECT * FROM t"]).unwrap();
        assert_eq!(
            cli.parse_options().unwrap().max_query_length,
            Some(sqlgraph_cypher::MAX_QUERY_LENGTH)
        );

        let cli = Cli::try_parse_from(["sqlgraph", "--no-length-limit", "translate"]).unwrap();
        assert_eq!(cli.parse_options().unwrap().max_query_length, None);
    }

    #[test]
    fn test_no_length_limit() {
        let cli = Cli::try_parse_from(["sqlgraph", "--no-length-limit", "examples"]).unwrap();
        assert_eq!(cli.parse_options().unwrap().max_query_length, None);
    }

    #[test]
    fn test_length_flags_conflict() {
        assert!(
            Cli::try_parse_from([
                "sqlgraph",
                "--max-length",
                "10",
                "--no-length-limit",
                "examples"
            ])
            .is_err()
        );
    }

    #[test]
    fn test_render_tokens() {
        let out = render_tokens("SELECT a\nFROM t").unwrap();
        assert_eq!(
            out,
            "1:1 Select 'SELECT'\n\
             1:8 Identifier 'a'\n\
             2:1 From 'FROM'\n\
             2:6 Identifier 't'\n\
             2:7 EndOfInput ''\n"
        );
    }

    #[test]
    fn test_render_tree() {
        let out = render_tree("SELECT * FROM t", &ParseOptions::default(), false).unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["statement"]["table"], "t");
    }

    #[test]
    fn test_render_canonical() {
        let out = render_canonical(
            "select a,b from t where (x = 1)",
            &ParseOptions::default(),
        )
        .unwrap();
        assert_eq!(out, "SELECT a, b FROM t WHERE x = 1\n");
    }

    #[test]
    fn test_render_reports_errors() {
        let err = render_canonical("SELECT FROM t", &ParseOptions::default()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unexpected FROM at 1:8: expected '*' or identifier"
        );
    }

    #[test]
    fn test_render_examples() {
        let out = render_examples().unwrap();
        assert!(out.starts_with(
            "-- Select every column\nSELECT * FROM Users\nMATCH (n:Users)\nRETURN n\n"
        ));
    }
}
