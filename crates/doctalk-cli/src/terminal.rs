//! Plain-text rendering of the quiz for a terminal.

use doctalk_core::models::QuizResult;
use doctalk_quiz::session::QuizSession;

pub const DISCLAIMER: &str = "These results are based on your responses and are for \
informational purposes only. They do not constitute a medical diagnosis. Please consult \
with a qualified healthcare professional for proper evaluation and advice.";

pub const HELP: &str = "Enter an option number to select it (multi-answer questions toggle), \
'n' for next, 'b' for back, 'q' to quit.";

/// A line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// 1-based option number.
    Select(usize),
    Next,
    Back,
    Quit,
}

pub fn parse_command(line: &str) -> Option<Command> {
    match line.trim().to_ascii_lowercase().as_str() {
        "n" | "next" | "" => Some(Command::Next),
        "b" | "back" => Some(Command::Back),
        "q" | "quit" => Some(Command::Quit),
        other => other
            .parse::<usize>()
            .ok()
            .filter(|n| *n > 0)
            .map(Command::Select),
    }
}

pub fn render_question(session: &QuizSession<'_>) -> String {
    let question = session.current_question();
    let mut out = format!(
        "Question {} of {}  [{}]  {:.0}% complete\n{}\n",
        session.step() + 1,
        session.len(),
        question.category.section_title(),
        session.progress_percent(),
        question.text,
    );
    if question.allows_multiple_answers {
        out.push_str("(select all that apply)\n");
    }

    for (i, option) in question.options.iter().enumerate() {
        let selected = session.is_selected(&option.id);
        let marker = match (question.allows_multiple_answers, selected) {
            (true, true) => "[x]",
            (true, false) => "[ ]",
            (false, true) => "(*)",
            (false, false) => "( )",
        };
        out.push_str(&format!("  {marker} {}. {}\n", i + 1, option.text));
    }

    let action = if session.is_last() { "see results" } else { "next" };
    out.push_str(&format!("'n' {action}, 'b' back, 'q' quit\n"));
    out
}

pub fn render_result(result: &QuizResult) -> String {
    let mut out = format!(
        "Overall risk assessment: {}\n{}\n\n",
        result.overall_tier,
        result.overall_tier.summary(),
    );

    for score in result.category_scores.reported() {
        out.push_str(&format!(
            "  {:<14} {}\n",
            score.category.display_name(),
            score.tier
        ));
    }

    if !result.recommendations.is_empty() {
        out.push_str("\nRecommendations:\n");
        for recommendation in &result.recommendations {
            out.push_str(&format!("  - {recommendation}\n"));
        }
    }

    out.push_str(&format!("\n{DISCLAIMER}\n"));
    out
}

pub fn render_history(results: &[QuizResult]) -> String {
    if results.is_empty() {
        return "No saved quiz results.\n".to_string();
    }

    let mut out = String::new();
    for (i, result) in results.iter().enumerate() {
        let tiers: Vec<String> = result
            .category_scores
            .reported()
            .map(|s| format!("{} {}", s.category.display_name(), s.tier))
            .collect();
        out.push_str(&format!(
            "{:>3}. {}  {}  ({})\n",
            i + 1,
            result.timestamp.strftime("%Y-%m-%d %H:%M"),
            result.overall_tier,
            tiers.join(", "),
        ));
    }
    out
}
