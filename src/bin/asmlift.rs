// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Command line front end
//!
//! Reads a disassembly listing, translates it and prints the pseudocode.

use asmlift::core::listing::parse_listing;
use asmlift::core::{translate, Isa, RegisterStyle, Result, TranslatorConfig};
use clap::{Parser, ValueEnum};
use log::{error, info};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// Environment variable naming a default configuration file
const CONFIG_ENV: &str = "ASMLIFT_CONFIG";

/// Output encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Header line followed by the pseudocode blocks
    Text,
    /// JSON array of the pseudocode blocks
    Json,
}

/// MIPS, ARM and Thumb to pseudocode translator
#[derive(Parser)]
#[command(name = "asmlift")]
#[command(about = "Translate a disassembly listing into pseudocode", long_about = None)]
struct Args {
    /// Listing to translate
    #[arg(default_value = "input.txt")]
    input: PathBuf,

    /// Instruction set of the listing
    #[arg(short = 'i', long, value_enum, default_value_t = Isa::Mips)]
    isa: Isa,

    /// TOML configuration file (falls back to $ASMLIFT_CONFIG)
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Override the configured register style
    #[arg(short = 'r', long, value_enum)]
    register_style: Option<RegisterStyle>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Write the output to a file instead of stdout
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,
}

/// Resolve the configuration: `--config`, then `$ASMLIFT_CONFIG`, then defaults
fn load_config(args: &Args) -> Result<TranslatorConfig> {
    let path = args
        .config
        .clone()
        .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from));

    let config = match path {
        Some(path) => {
            info!("Loading config from: {}", path.display());
            TranslatorConfig::load(&path)?
        }
        None => TranslatorConfig::default(),
    };

    Ok(match args.register_style {
        Some(style) => config.with_register_style(style),
        None => config,
    })
}

fn run(args: &Args) -> Result<()> {
    let config = load_config(args)?;

    info!("Reading {} listing from: {}", args.isa, args.input.display());
    let text = fs::read_to_string(&args.input)?;
    let words = parse_listing(&text, args.isa);

    let Some(&(start, _)) = words.first() else {
        eprintln!("No code found");
        return Ok(());
    };

    let lines = translate(args.isa, &words, &config)?;
    info!("Translated {} instructions", words.len());

    let rendered = match args.format {
        Format::Text => {
            let mut out = format!("Disassembly for code starting at {:x}\n", start);
            for line in &lines {
                out.push_str(line);
                out.push('\n');
            }
            out
        }
        Format::Json => serde_json::to_string_pretty(&lines)? + "\n",
    };

    match &args.output {
        Some(path) => {
            fs::write(path, rendered)?;
            info!("Output written to: {}", path.display());
        }
        None => std::io::stdout().write_all(rendered.as_bytes())?,
    }

    Ok(())
}

fn main() -> Result<()> {
    // Load .env file if present (RUST_LOG, ASMLIFT_CONFIG)
    if let Err(e) = dotenvy::dotenv() {
        if !e.to_string().contains("not found") {
            eprintln!("Warning: Failed to load .env file: {}", e);
        }
    }

    // Initialize logger with default level INFO
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("asmlift v{}", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();
    if let Err(e) = run(&args) {
        error!("Translation failed: {}", e);
        return Err(e);
    }

    Ok(())
}
