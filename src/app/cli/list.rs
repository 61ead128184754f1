use std::path::Path;

use super::OutputFormat;
use crate::domain::AppError;

pub fn run_list(format: OutputFormat, orders: Option<&Path>) -> Result<(), AppError> {
    let summaries = crate::app::api::list(orders)?;

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    let width = summaries.iter().map(|summary| summary.id.chars().count()).max().unwrap_or(0);
    for summary in &summaries {
        if summary.step.is_some() {
            println!("{:<width$}  {}", summary.id, summary.status);
        } else {
            println!("{:<width$}  {}  (unrecognized status)", summary.id, summary.status);
        }
    }
    Ok(())
}
