//! Plain-text rendering of tracking views.

use crate::app::view::TrackingView;
use crate::domain::Mark;

fn step_box(mark: Mark) -> &'static str {
    match mark {
        Mark::Completed => "[x]",
        Mark::Pending => "[ ]",
    }
}

fn arrow(mark: Mark) -> &'static str {
    match mark {
        Mark::Completed => "-->",
        Mark::Pending => "..>",
    }
}

/// Progress line followed by the status message.
pub fn render_view(view: &TrackingView) -> String {
    let mut line = String::new();
    for (index, step) in view.steps.iter().enumerate() {
        if index > 0 {
            let connector = view.connectors.get(index - 1).copied().unwrap_or(Mark::Pending);
            line.push(' ');
            line.push_str(arrow(connector));
            line.push(' ');
        }
        line.push_str(step_box(step.mark));
        line.push(' ');
        line.push_str(step.label);
    }

    format!("{line}\n{}", view.message)
}
