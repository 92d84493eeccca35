//! Command-line interface for the Digital Twin Service
//!
//! Provides argument parsing and subcommand handling for the binary.

use clap::{Parser, Subcommand};

/// HTTP gateway to a locally hosted chat model
#[derive(Parser)]
#[command(name = "digital-twin")]
#[command(version)]
#[command(about = "HTTP gateway exposing chat completions from a locally hosted Ollama model")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml", global = true)]
    pub config: String,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate a template configuration file
    Config {
        /// Output file path (prints to stdout if not specified)
        #[arg(short, long)]
        output: Option<String>,
    },
}

/// Generate template configuration content
pub fn generate_config_template() -> &'static str {
    r#"# Digital Twin Service Configuration
# ==================================

[server]
# IP address to bind to (0.0.0.0 for all interfaces, 127.0.0.1 for localhost only)
host = "0.0.0.0"

# Port to listen on
port = 8080

[model]
# Base URL of the Ollama instance
base_url = "http://localhost:11434"

# Model name passed to the chat endpoint
name = "llama3.2"

# Sampling temperature (0.0-2.0)
temperature = 0.7

# Upper bound on a single generation in seconds, streaming included
request_timeout_seconds = 300

[observability]
# Log level: "trace", "debug", "info", "warn", "error"
log_level = "info"
"#
}
