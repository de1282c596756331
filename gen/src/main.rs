//! Enumclad Code Generator
//!
//! Generates C++ enumeration wrapper classes from shipped definitions.

use std::path::Path;

use clap::Parser;
use colored::Colorize;
use enumclad_define::EnumSpec;
use enumclad_define::specs::{define_compression_spec, define_write_channels_spec};
use enumclad_gen::errors::GeneratorError;
use enumclad_gen::output::generate_and_write;

/// Enumclad code generator - transforms enumeration definitions into C++
/// wrapper classes for TCLAP argument parsing
#[derive(Parser, Debug)]
#[command(name = "enumclad-gen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Definition to generate a wrapper for ("compression", "channels", or "all")
    #[arg(short, long, default_value = "all")]
    spec: String,

    /// Output path for the generated header
    #[arg(short, long, default_value = "generated/enum_args.h")]
    output: String,

    /// Print generated code without writing files
    #[arg(long)]
    dry_run: bool,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<(), GeneratorError> {
    let cli = Cli::parse();

    if cli.verbose > 0 {
        eprintln!("Generating wrappers for: {}", cli.spec);
        eprintln!("Output path: {}", cli.output);
        if cli.dry_run {
            eprintln!("Dry run mode - no files will be written");
        }
    }

    let specs: Vec<EnumSpec> = match cli.spec.as_str() {
        "compression" => vec![define_compression_spec()],
        "channels" => vec![define_write_channels_spec()],
        "all" => vec![define_compression_spec(), define_write_channels_spec()],
        other => {
            return Err(GeneratorError::ConfigError(format!(
                "Unknown spec: '{}'. Available specs: compression, channels, all",
                other
            )));
        }
    };

    if cli.verbose > 1 {
        for spec in &specs {
            eprintln!(
                "  - {} wraps {} ({} values, default {})",
                spec.class_name,
                spec.underlying_type,
                spec.entries.len(),
                spec.default_value
            );
        }
    }

    let spec_refs: Vec<&EnumSpec> = specs.iter().collect();
    generate_and_write(&spec_refs, Path::new(&cli.output), cli.dry_run)?;

    if !cli.dry_run && cli.verbose > 0 {
        eprintln!("{} generated {}", "Successfully".green(), cli.output);
    }

    Ok(())
}
