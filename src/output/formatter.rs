use std::io::IsTerminal;

use owo_colors::OwoColorize;

use crate::index::{AssessmentRecord, IndexResult};

/// Format one computed assessment as a single line.
/// Format: "{ii} | A{..} V{..} M{..} O{..} C{..} Ar{..} | {index}"
pub fn format_result_line(
    assessment: u32,
    record: &AssessmentRecord,
    result: &IndexResult,
    use_colors: bool,
) -> String {
    let subscores = format!(
        "A{} V{} M{} O{} C{} Ar{}",
        record.auditory,
        record.visual,
        record.motor,
        record.oromotor,
        record.communication,
        record.arousal
    );

    if use_colors {
        format!(
            "{} | {} | {}",
            assessment.bold(),
            subscores.cyan(),
            format!("{:.2}", result.index).green()
        )
    } else {
        format!("{} | {} | {:.2}", assessment, subscores, result.index)
    }
}

/// Multi-line detail of the quantities behind an index (for verbose mode).
pub fn format_breakdown(result: &IndexResult) -> String {
    let b = &result.breakdown;
    format!(
        "  RB fraction: {:.2} (table row {})\n  CMB fraction: {:.2} (table column {})\n  Base value: {:.2}\n  Arousal term: {:.2}",
        b.reflex_fraction,
        b.reflex_position,
        b.cognitive_fraction,
        b.cognitive_position,
        b.base_value,
        b.arousal_term
    )
}

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}
