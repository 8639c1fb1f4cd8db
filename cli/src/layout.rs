use clap::Args;

use crate::error::Result;
use crate::utils::layout;

#[derive(Args)]
pub(crate) struct Config {
    /// Public-input layout version
    #[arg(long, default_value_t = 1)]
    layout_version: u8,
}

pub(crate) fn execute(config: Config) -> Result<()> {
    let layout = layout(config.layout_version)?;
    let input_range = layout.input_range();

    println!(
        "Layout {}: public inputs {}..{}, raw record {} bytes",
        layout.version(),
        input_range.start,
        input_range.end,
        layout.raw_width()
    );
    println!("{:<16} {:>6} {:>6}  {}", "FIELD", "OFFSET", "WIDTH", "INPUTS");
    for (spec, range) in layout.ranges() {
        println!(
            "{:<16} {:>6} {:>6}  {}..{}",
            spec.id.as_str(),
            range.start,
            spec.width,
            layout.offset() + range.start,
            layout.offset() + range.end
        );
    }

    Ok(())
}
