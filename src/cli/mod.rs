pub mod meals;
pub mod week;

use clap::ValueEnum;
use serde::Serialize;

#[derive(Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Pretty,
    Json,
}

pub fn print<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let out = match format {
        OutputFormat::Pretty => serde_json::to_string_pretty(value)?,
        OutputFormat::Json => serde_json::to_string(value)?,
    };

    println!("{out}");

    Ok(())
}
