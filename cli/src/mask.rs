use clap::Args;
use disclosure::{DiscloseMask, FieldId, MrzFormat};

use crate::error::Result;
use crate::utils::layout;

#[derive(Args)]
pub(crate) struct Config {
    /// Fields to disclose (comma separated)
    #[arg(long, value_delimiter = ',')]
    disclose: Vec<FieldId>,

    /// MRZ format of the document: passport or id_card
    #[arg(long, default_value_t = MrzFormat::Passport)]
    mrz_format: MrzFormat,

    /// Public-input layout version
    #[arg(long, default_value_t = 1)]
    layout_version: u8,
}

pub(crate) fn execute(config: Config) -> Result<()> {
    let layout = layout(config.layout_version)?;
    let mask = DiscloseMask::for_fields(layout, &config.disclose)?;
    let input = mask.circuit_input(config.mrz_format);
    tracing::debug!(
        format = %config.mrz_format,
        fields = ?mask.disclosed_fields(),
        "built disclose mask"
    );

    println!("{}", serde_json::to_string(&input)?);
    Ok(())
}
