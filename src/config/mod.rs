pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::mapper::DEFAULT_SOURCE_LABEL;
#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{
    parse_delimiter, validate_file_extension, validate_non_empty_string, validate_path, Validate,
};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

pub const DEFAULT_OUTPUT_PATH: &str = "./output";
pub const DEFAULT_OUTPUT_FILENAME: &str = "kw_command_import.csv";
pub const INPUT_EXTENSIONS: [&str; 3] = ["csv", "tsv", "txt"];

#[cfg(feature = "cli")]
fn delimiter_arg(value: &str) -> std::result::Result<u8, String> {
    parse_delimiter("--delimiter", value).map_err(|e| e.to_string())
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "contact-convert")]
#[command(about = "Convert a Real Intent lead export into a KW Command contact import file")]
pub struct CliConfig {
    /// Lead export to convert
    #[arg(short, long)]
    pub input: String,

    /// Directory the import file is written to
    #[arg(long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output_path: String,

    #[arg(long, default_value = DEFAULT_OUTPUT_FILENAME)]
    pub output_filename: String,

    /// Free-text tags added to every contact, e.g. "realintent, seller"
    #[arg(long, default_value = "")]
    pub tags: String,

    #[arg(long, default_value = DEFAULT_SOURCE_LABEL)]
    pub source: String,

    /// Input field delimiter; use "tab" for tab-separated exports
    #[arg(long, default_value = ",", value_parser = delimiter_arg)]
    pub delimiter: u8,

    /// Print the first N converted rows as JSON keyed by display labels
    #[arg(long, default_value = "0")]
    pub preview: usize,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn input_file(&self) -> &str {
        &self.input
    }

    fn input_delimiter(&self) -> u8 {
        self.delimiter
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn output_filename(&self) -> &str {
        &self.output_filename
    }

    fn tags(&self) -> &str {
        &self.tags
    }

    fn source_label(&self) -> &str {
        &self.source
    }

    fn preview_rows(&self) -> usize {
        self.preview
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("--input", &self.input)?;
        validate_file_extension("--input", &self.input, &INPUT_EXTENSIONS)?;
        validate_path("--output-path", &self.output_path)?;
        validate_non_empty_string("--output-filename", &self.output_filename)?;
        Ok(())
    }
}
