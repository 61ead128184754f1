//! Interactive tracking session.

use std::io::{self, BufRead, ErrorKind, IsTerminal, Lines, StdinLock};
use std::path::Path;

use dialoguer::{Error as DialoguerError, Input};

use super::render::render_view;
use crate::app::commands::track;
use crate::app::view::TrackingView;
use crate::domain::AppError;

/// Where order IDs come from: a prompt on a terminal, raw lines otherwise.
enum LineInput {
    Prompt,
    Piped(Lines<StdinLock<'static>>),
}

impl LineInput {
    fn detect() -> Self {
        let stdin = io::stdin();
        if stdin.is_terminal() { LineInput::Prompt } else { LineInput::Piped(stdin.lock().lines()) }
    }

    /// Next submitted ID, or `None` at end of input.
    fn next_line(&mut self) -> Result<Option<String>, AppError> {
        match self {
            LineInput::Prompt => prompt_order_id(),
            LineInput::Piped(lines) => lines.next().transpose().map_err(AppError::from),
        }
    }
}

fn prompt_order_id() -> Result<Option<String>, AppError> {
    match Input::<String>::new().with_prompt("Enter Order ID").allow_empty(true).interact_text() {
        Ok(value) => Ok(Some(value)),
        Err(DialoguerError::IO(err))
            if matches!(err.kind(), ErrorKind::Interrupted | ErrorKind::UnexpectedEof) =>
        {
            Ok(None)
        }
        Err(err) => Err(AppError::Prompt(err.to_string())),
    }
}

pub fn run_session(orders: Option<&Path>) -> Result<(), AppError> {
    let ctx = crate::app::api::create_context(orders)?;
    println!("{}", render_view(&TrackingView::idle()));

    let mut input = LineInput::detect();
    while let Some(line) = input.next_line()? {
        let outcome = track::execute(&ctx, &line);
        println!("\n{}", render_view(&outcome.view));
    }
    Ok(())
}
