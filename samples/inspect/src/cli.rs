use std::path::PathBuf;

use clap::ValueHint;
use trimesh::{ImportOptions, ParseMode};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, clap::ValueEnum)]
pub enum LogFormat {
    Compact,
    Full,
    Pretty,
    Json,
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormat::Compact => f.write_str("compact"),
            LogFormat::Full => f.write_str("full"),
            LogFormat::Pretty => f.write_str("pretty"),
            LogFormat::Json => f.write_str("json"),
        }
    }
}

#[derive(Debug, clap::Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// Logging output filters; comma-separated
    #[arg(
        short,
        long,
        default_value = "warn,trimesh=info,inspect=info",
        env = "INSPECT_LOG_FILTER"
    )]
    pub log_filter: String,
    /// Logging output format
    #[arg(long, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
    /// Fail on malformed records instead of substituting zero for them
    #[arg(short, long)]
    pub strict: bool,
    /// Read coordinates as 64-bit floats
    #[arg(short, long)]
    pub double: bool,
    /// Mesh files to import (.obj, .unv)
    #[arg(num_args = 1.., required = true, value_hint = ValueHint::FilePath)]
    pub files: Vec<PathBuf>,
}

impl Cli {
    pub fn import_options(&self) -> ImportOptions {
        ImportOptions::default().with_mode(if self.strict {
            ParseMode::Strict
        } else {
            ParseMode::Lenient
        })
    }
}

/// Set up log output
pub(crate) fn initialize_tracing(log_filter: &str, log_format: LogFormat) {
    let tsub = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_timer(tracing_subscriber::fmt::time::OffsetTime::new(
            time::UtcOffset::current_local_offset().unwrap_or_else(|e| {
                tracing::warn!("couldn't get local time offset: {:?}", e);
                time::UtcOffset::UTC
            }),
            time::macros::format_description!("[hour]:[minute]:[second]"),
        ))
        .with_env_filter(log_filter);

    match log_format {
        LogFormat::Compact => tsub.compact().init(),
        LogFormat::Full => tsub.init(),
        LogFormat::Pretty => tsub.pretty().init(),
        LogFormat::Json => tsub.json().init(),
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["inspect", "a.obj", "b.unv"]).unwrap();
        assert_eq!(cli.files, vec![PathBuf::from("a.obj"), PathBuf::from("b.unv")]);
        assert_eq!(cli.log_format, LogFormat::Compact);
        assert_eq!(cli.import_options().mode, ParseMode::Lenient);
        assert!(!cli.double);
    }

    #[test]
    fn strict() {
        let cli = Cli::try_parse_from(["inspect", "--strict", "a.obj"]).unwrap();
        assert_eq!(cli.import_options().mode, ParseMode::Strict);
    }

    #[test]
    fn requires_files() {
        assert!(Cli::try_parse_from(["inspect"]).is_err());
    }
}
