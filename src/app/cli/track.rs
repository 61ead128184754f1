use std::path::Path;

use super::OutputFormat;
use super::render::render_view;
use crate::domain::AppError;

pub fn run_track(id: &str, format: OutputFormat, orders: Option<&Path>) -> Result<i32, AppError> {
    let outcome = crate::app::api::track(id, orders)?;

    match format {
        OutputFormat::Text => println!("{}", render_view(&outcome.view)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&outcome)?),
    }

    Ok(outcome.exit_code())
}
