use crate::config::OutputFormat;
use anyhow::Result;
use tally_prelude::Calculation;

/// Executes `calculation` and formats the outcome for stdout.
pub fn render(calculation: &Calculation, format: OutputFormat) -> Result<String> {
    let record = calculation.record()?;
    match format {
        OutputFormat::Text => Ok(calculation.to_string()),
        OutputFormat::Json => Ok(serde_json::to_string(&record)?),
    }
}
