use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use watson_core::AbsentFields;

use crate::model::ModelKind;

/// Watson model tool
#[derive(Debug, Parser)]
#[command(name = "watson", about = "Validate and normalize Watson service payloads")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, env = "WATSON_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Decode a JSON payload into a model and encode it again
    Normalize {
        /// Model the payload describes
        #[arg(short, long, value_enum)]
        model: ModelKind,

        /// Override `encoding.absent_fields` from the configuration
        #[arg(long, value_enum)]
        absent_fields: Option<AbsentFieldsArg>,

        /// Payload file, or `-` for stdin
        #[arg(default_value = "-")]
        input: PathBuf,
    },
    /// Print a model's field table
    Fields {
        #[arg(short, long, value_enum)]
        model: ModelKind,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AbsentFieldsArg {
    Omit,
    Null,
}

impl From<AbsentFieldsArg> for AbsentFields {
    fn from(value: AbsentFieldsArg) -> Self {
        match value {
            AbsentFieldsArg::Omit => Self::Omit,
            AbsentFieldsArg::Null => Self::Null,
        }
    }
}
