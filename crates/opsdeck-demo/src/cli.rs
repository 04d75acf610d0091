#![forbid(unsafe_code)]

//! Command-line argument parsing for the demo.
//!
//! Parses args manually (no external dependencies) to keep the binary
//! lean. Supports environment variable overrides via `OPSDECK_DEMO_*`.

use std::env;
use std::process;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const HELP_TEXT: &str = "\
OpsDeck Demo — headless walkthrough of the dashboard navigation core

USAGE:
    opsdeck-demo [OPTIONS]

OPTIONS:
    --system=ID      Select a system by id (default: first in catalog)
    --env=NAME       Select an environment: prod, staging or load
    --link=QUERY     Render the monitoring view for a deep-link query,
                     e.g. '?system=Atlas%20Telemetry&env=prod'
    --format=FORMAT  Output format: 'text' (default) or 'json'
    --help, -h       Show this help message
    --version, -V    Show version

ENVIRONMENT VARIABLES:
    OPSDECK_DEMO_SYSTEM   Override --system
    OPSDECK_DEMO_ENV      Override --env
    OPSDECK_DEMO_FORMAT   Override --format
    OPSDECK_DEMO_LOG      Enable tracing output (env-filter syntax)";

/// Output format for rendered views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Parsed command-line options.
pub struct Opts {
    /// System id to select (catalog default when absent).
    pub system: Option<String>,
    /// Environment wire name to select.
    pub environment: Option<String>,
    /// Deep-link query; switches the demo to the monitoring view.
    pub link: Option<String>,
    /// Output format.
    pub format: OutputFormat,
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            system: None,
            environment: None,
            link: None,
            format: OutputFormat::Text,
        }
    }
}

impl Opts {
    /// Parse command-line arguments and environment variables.
    ///
    /// Environment variables take precedence over defaults but are
    /// overridden by explicit command-line flags.
    pub fn parse() -> Self {
        let mut opts = Self::default();

        // Apply environment variable defaults first
        if let Ok(val) = env::var("OPSDECK_DEMO_SYSTEM") {
            opts.system = Some(val);
        }
        if let Ok(val) = env::var("OPSDECK_DEMO_ENV") {
            opts.environment = Some(val);
        }
        if let Ok(val) = env::var("OPSDECK_DEMO_FORMAT") {
            opts.format = parse_format(&val);
        }

        // Parse command-line args (override env vars)
        let args: Vec<String> = env::args().skip(1).collect();
        for arg in &args {
            match arg.as_str() {
                "--help" | "-h" => {
                    println!("{HELP_TEXT}");
                    process::exit(0);
                }
                "--version" | "-V" => {
                    println!("opsdeck-demo {VERSION}");
                    process::exit(0);
                }
                other => {
                    if let Some(val) = other.strip_prefix("--system=") {
                        opts.system = Some(val.to_string());
                    } else if let Some(val) = other.strip_prefix("--env=") {
                        opts.environment = Some(val.to_string());
                    } else if let Some(val) = other.strip_prefix("--link=") {
                        opts.link = Some(val.to_string());
                    } else if let Some(val) = other.strip_prefix("--format=") {
                        opts.format = parse_format(val);
                    } else {
                        eprintln!("Unknown argument: {other}");
                        eprintln!("Run with --help for usage information.");
                        process::exit(1);
                    }
                }
            }
        }

        opts
    }
}

fn parse_format(value: &str) -> OutputFormat {
    match value {
        "text" => OutputFormat::Text,
        "json" => OutputFormat::Json,
        other => {
            eprintln!("Invalid --format value: {other} (expected 'text' or 'json')");
            process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_opts() {
        let opts = Opts::default();
        assert_eq!(opts.system, None);
        assert_eq!(opts.environment, None);
        assert_eq!(opts.link, None);
        assert_eq!(opts.format, OutputFormat::Text);
    }

    #[test]
    fn version_string_nonempty() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn help_text_covers_every_flag() {
        for flag in ["--system", "--env", "--link", "--format"] {
            assert!(HELP_TEXT.contains(flag), "missing {flag} in help");
        }
    }

    #[test]
    fn help_text_contains_env_vars() {
        assert!(HELP_TEXT.contains("OPSDECK_DEMO_SYSTEM"));
        assert!(HELP_TEXT.contains("OPSDECK_DEMO_LOG"));
    }
}
