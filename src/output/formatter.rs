use std::io::IsTerminal;
use std::path::Path;
use owo_colors::OwoColorize;
use terminal_size::{Width, terminal_size};

use crate::config::ColorMode;
use crate::profile::StartupProfile;
use crate::scoring::{Evaluation, EvaluationResult};

const BAR_WIDTH: usize = 20;

/// Decide whether to colour output: `auto` colours only when stdout is a TTY
pub fn should_use_colors(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => std::io::stdout().is_terminal(),
    }
}

/// Format a sub-score with up to two decimals, trailing zeros trimmed
/// (90, 57.5, 68.75)
pub fn format_metric(value: f64) -> String {
    let formatted = format!("{:.2}", value);
    formatted
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

/// Horizontal bar for a 0-100 value, e.g. "##########----------" for 50
pub fn score_bar(value: f64) -> String {
    let filled = ((value.clamp(0.0, 100.0) / 100.0) * BAR_WIDTH as f64).round() as usize;
    format!("{}{}", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}

/// Colour a piece of text by score band (75+ green, 50+ yellow, else red)
fn colorize_by_score(text: &str, score: f64) -> String {
    if score >= 75.0 {
        text.green().to_string()
    } else if score >= 50.0 {
        text.yellow().to_string()
    } else {
        text.red().to_string()
    }
}

fn format_list(title: &str, items: &[String], use_colors: bool) -> String {
    let heading = if use_colors {
        title.bold().to_string()
    } else {
        title.to_string()
    };
    if items.is_empty() {
        return format!("{}\n  (none)", heading);
    }
    let body = items
        .iter()
        .map(|item| format!("  - {}", item))
        .collect::<Vec<_>>()
        .join("\n");
    format!("{}\n{}", heading, body)
}

/// Format one evaluation as a multi-line report.
/// With `explain`, each metric is followed by the factors that produced it.
pub fn format_evaluation_detail(
    profile: &StartupProfile,
    evaluation: &Evaluation,
    explain: bool,
    use_colors: bool,
) -> String {
    let result = &evaluation.result;
    let overall = f64::from(result.overall_score);
    let mut lines = Vec::new();

    if use_colors {
        lines.push(profile.company_name.bold().to_string());
    } else {
        lines.push(profile.company_name.clone());
    }
    lines.push(format!("  Industry: {}", profile.industry));
    lines.push(format!("  Founded: {}", profile.founding_date.format("%Y-%m-%d")));

    let overall_str = format!("{}/100", result.overall_score);
    if use_colors {
        lines.push(format!("  Overall: {}", colorize_by_score(&overall_str, overall).bold()));
    } else {
        lines.push(format!("  Overall: {}", overall_str));
    }
    lines.push(String::new());

    for dim in &evaluation.breakdown.dimensions {
        let value = format!("{:>6}", format_metric(dim.score));
        let bar = score_bar(dim.score);
        if use_colors {
            lines.push(format!(
                "  {:<18}{}  {}",
                dim.dimension.label(),
                colorize_by_score(&value, dim.score),
                colorize_by_score(&bar, dim.score)
            ));
        } else {
            lines.push(format!("  {:<18}{}  {}", dim.dimension.label(), value, bar));
        }

        if explain {
            for factor in &dim.factors {
                let line = format!(
                    "      {}: {} ({} -> {})",
                    factor.label,
                    factor.description,
                    format_metric(factor.before),
                    format_metric(factor.after)
                );
                if use_colors {
                    lines.push(line.dimmed().to_string());
                } else {
                    lines.push(line);
                }
            }
        }
    }

    lines.push(String::new());
    lines.push(format_list("Strengths", &result.insights.strengths, use_colors));
    lines.push(format_list("Weaknesses", &result.insights.weaknesses, use_colors));
    lines.push(format_list(
        "Recommendations",
        &result.insights.recommendations,
        use_colors,
    ));

    lines.join("\n")
}

/// Serialize a result as pretty JSON
pub fn format_json(result: &EvaluationResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(result)
}

/// A startup with its overall score for display
pub struct ScoredStartup<'a> {
    pub profile: &'a StartupProfile,
    pub path: &'a Path,
    pub overall_score: u8,
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate a name to fit available width, accounting for Unicode
fn truncate_name(name: &str, max_width: usize) -> String {
    let chars: Vec<char> = name.chars().collect();
    if chars.len() <= max_width {
        name.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Format startups as a ranked table with columns: Index, Score, Company, Industry
/// No headers.
/// Index column: 3 chars (fits "99."), right-aligned
/// Score column is right-aligned, 3 chars wide
pub fn format_ranked_table(startups: &[ScoredStartup], use_colors: bool) -> String {
    if startups.is_empty() {
        return "No startups found.".to_string();
    }

    let term_width = get_terminal_width();

    let index_width = 3;
    let score_width = 3;
    let separator = "  ";

    startups
        .iter()
        .enumerate()
        .map(|(idx, scored)| {
            // 1-based index, right-aligned with trailing dot
            let index_str = format!("{:>2}.", idx + 1);
            let score_padded = format!("{:>width$}", scored.overall_score, width = score_width);
            let industry = scored.profile.industry.as_str();

            let fixed_width = index_width + 1 + score_width + separator.len() * 2 + industry.len();

            let name = if let Some(width) = term_width {
                if width > fixed_width + 10 {
                    truncate_name(&scored.profile.company_name, width - fixed_width)
                } else {
                    // Very narrow terminal, show truncated
                    truncate_name(&scored.profile.company_name, 20)
                }
            } else {
                // No terminal (pipe), don't truncate
                scored.profile.company_name.clone()
            };

            if use_colors {
                format!(
                    "{} {}{}{}{}{}",
                    index_str.dimmed(),
                    colorize_by_score(&score_padded, f64::from(scored.overall_score)).bold(),
                    separator,
                    name,
                    separator,
                    industry.cyan()
                )
            } else {
                format!(
                    "{} {}{}{}{}{}",
                    index_str, score_padded, separator, name, separator, industry
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format startups as tab-separated values for scripting
/// Columns: score, company, industry, path (no headers, no colors)
pub fn format_tsv(startups: &[ScoredStartup]) -> String {
    if startups.is_empty() {
        return String::new();
    }

    startups
        .iter()
        .map(|scored| {
            format!(
                "{}\t{}\t{}\t{}",
                scored.overall_score,
                scored.profile.company_name,
                scored.profile.industry,
                scored.path.display()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
