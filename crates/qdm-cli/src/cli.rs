//! CLI argument definitions for Quick Data Mapper.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "qdm",
    version,
    about = "Quick Data Mapper - map CSV columns to target fields",
    long_about = "Map CSV columns to a target field vocabulary and convert data in both\n\
                  directions: CSV to JSON through a mapping, and JSON back to CSV through\n\
                  its inverse. Named mappings persist in a local store for reuse."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Directory holding the saved-mapping store.
    #[arg(
        long = "store-dir",
        value_name = "DIR",
        default_value = ".qdm",
        global = true
    )]
    pub store_dir: PathBuf,
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert a CSV file to JSON through a mapping.
    Convert(ConvertArgs),

    /// Convert a JSON record array back to CSV through a mapping's inverse.
    Reverse(ReverseArgs),

    /// Manage the saved-mapping store.
    Mappings(MappingsArgs),

    /// Show the target field vocabulary, optionally with session additions.
    Targets(TargetsArgs),
}

#[derive(Parser)]
pub struct ConvertArgs {
    /// Path to the source CSV file (headers become source fields).
    #[arg(value_name = "CSV_FILE")]
    pub input: PathBuf,

    /// Id of a saved mapping to apply.
    #[arg(long = "mapping-id", value_name = "ID", conflicts_with = "schema")]
    pub mapping_id: Option<String>,

    /// JSON file holding a mapping object ({"source": "target", ...}).
    #[arg(long = "schema", value_name = "FILE")]
    pub schema: Option<PathBuf>,

    /// Write JSON output here instead of stdout.
    #[arg(long = "out", value_name = "FILE")]
    pub out: Option<PathBuf>,

    /// Print a preview table of the first rows instead of full JSON.
    #[arg(long = "preview")]
    pub preview: bool,

    /// Save the applied schema to the store under this name.
    #[arg(long = "save-as", value_name = "NAME")]
    pub save_as: Option<String>,
}

#[derive(Parser)]
pub struct ReverseArgs {
    /// Path to a JSON file holding an array of records keyed by target names.
    #[arg(value_name = "JSON_FILE")]
    pub input: PathBuf,

    /// Id of a saved mapping whose inverse to apply.
    #[arg(long = "mapping-id", value_name = "ID", conflicts_with = "schema")]
    pub mapping_id: Option<String>,

    /// JSON file holding a mapping object ({"source": "target", ...}).
    #[arg(long = "schema", value_name = "FILE")]
    pub schema: Option<PathBuf>,

    /// Write CSV output here instead of stdout.
    #[arg(long = "out", value_name = "FILE")]
    pub out: Option<PathBuf>,
}

#[derive(Parser)]
pub struct MappingsArgs {
    #[command(subcommand)]
    pub command: MappingsCommand,
}

#[derive(Subcommand)]
pub enum MappingsCommand {
    /// List saved mappings, most recently touched first.
    List,

    /// Show one saved mapping in full.
    Show {
        /// Id of the mapping to show.
        #[arg(value_name = "ID")]
        id: String,
    },

    /// Save a schema file as a named mapping.
    Save {
        /// Name for the new mapping (empty picks a positional default).
        #[arg(value_name = "NAME")]
        name: String,

        /// JSON file holding the mapping object.
        #[arg(long = "schema", value_name = "FILE")]
        schema: PathBuf,
    },

    /// Update a saved mapping's name and/or schema.
    Edit {
        /// Id of the mapping to update.
        #[arg(value_name = "ID")]
        id: String,

        /// New name.
        #[arg(long = "name", value_name = "NAME")]
        name: Option<String>,

        /// JSON file holding a replacement mapping object.
        #[arg(long = "schema", value_name = "FILE")]
        schema: Option<PathBuf>,
    },

    /// Delete a saved mapping (succeeds even if the id is unknown).
    Delete {
        /// Id of the mapping to delete.
        #[arg(value_name = "ID")]
        id: String,
    },

    /// Remove all saved mappings.
    Clear,
}

#[derive(Parser)]
pub struct TargetsArgs {
    /// Session target names to add ahead of the base vocabulary.
    #[arg(long = "add", value_name = "NAME")]
    pub add: Vec<String>,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
