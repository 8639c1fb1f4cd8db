use clap::Args;
use disclosure::{Codec, RawDisclosedData};
use inputs::PublicInputs;
use mrzpack::decoder::Decoder;

use crate::error::Result;
use crate::output::OutputFormat;
use crate::utils::{format_hex_dump, layout, read_text, reference_year};

#[derive(Args)]
pub(crate) struct Config {
    /// Path to the proof JSON file (object with `publicInputs`, or a bare
    /// array). If not specified, reads from stdin
    file: Option<String>,

    /// Year two-digit years are resolved against. Defaults to the current year
    #[arg(long, env = "MRZPACK_REFERENCE_YEAR")]
    reference_year: Option<i32>,

    /// Public-input layout version
    #[arg(long, default_value_t = 1)]
    layout_version: u8,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    output: OutputFormat,

    /// Print a hex dump of the raw record instead of decoding it
    #[arg(long, conflicts_with = "output")]
    raw: bool,
}

pub(crate) fn execute(config: Config) -> Result<()> {
    let contents = read_text(config.file.as_deref())?;
    let public_inputs: PublicInputs = contents.as_str().decode()?;
    tracing::debug!(entries = public_inputs.len(), "read public inputs");

    let layout = layout(config.layout_version)?;

    if config.raw {
        let raw = RawDisclosedData::from_public_inputs(layout, &public_inputs)?;
        print!("{}", format_hex_dump(raw.as_bytes()));
        return Ok(());
    }

    let codec = Codec::new(reference_year(config.reference_year)).with_layout(layout);
    let data = codec.decode(&public_inputs)?;

    match config.output {
        OutputFormat::Text => {
            println!("{}", data);
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&data)?;
            println!("{}", json);
        }
        OutputFormat::Yaml => {
            // Convert to JSON value first, then to YAML
            let json_value = serde_json::to_value(&data)?;
            let yaml = serde_yml::to_string(&json_value)?;
            print!("{}", yaml);
        }
    }

    Ok(())
}
