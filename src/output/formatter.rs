use chrono::{DateTime, Duration, Utc};
use owo_colors::OwoColorize;
use std::io::IsTerminal;
use terminal_size::{terminal_size, Width};

use crate::bank::Question;
use crate::profile::SavedAssessment;
use crate::scoring::{RankedField, ScoreSheet};
use crate::session::AssessmentReport;

const NO_RESULTS: &str = "No career fields scored. Answer a few questions first.";

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format a score in compact notation (1.5k, 2.3M, 847)
pub fn format_score(score: u32) -> String {
    let score = score as f64;
    let formatted = if score >= 1_000_000.0 {
        format!("{:.1}M", score / 1_000_000.0)
    } else if score >= 1_000.0 {
        format!("{:.1}k", score / 1_000.0)
    } else {
        format!("{:.0}", score)
    };

    // Trim trailing .0 (e.g., "1.0k" -> "1k")
    formatted.replace(".0M", "M").replace(".0k", "k")
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate title to fit available width, accounting for Unicode
fn truncate_title(title: &str, max_width: usize) -> String {
    let chars: Vec<char> = title.chars().collect();
    if chars.len() <= max_width {
        title.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Format ranked fields as a table: Index, Score, Title, Path category.
/// Index column: 3 chars (fits "99."), right-aligned
/// Score column is right-aligned, 5 chars wide
pub fn format_ranked_table(ranked: &[RankedField], use_colors: bool) -> String {
    if ranked.is_empty() {
        return NO_RESULTS.to_string();
    }

    let term_width = get_terminal_width();
    let index_width = 3;
    let score_width = 5;
    let separator = "  ";

    ranked
        .iter()
        .enumerate()
        .map(|(idx, entry)| {
            let index_str = format!("{:>2}.", idx + 1);
            let score_padded = format!("{:>width$}", format_score(entry.score), width = score_width);
            let category = format!("({})", entry.path_category);

            let fixed_width =
                index_width + 1 + score_width + separator.len() * 2 + category.chars().count();
            let title = match term_width {
                Some(width) if width > fixed_width + 10 => {
                    truncate_title(&entry.title, width - fixed_width)
                }
                Some(_) => truncate_title(&entry.title, 20),
                None => entry.title.clone(),
            };

            if use_colors {
                format!(
                    "{} {}{}{}{}{}",
                    index_str.dimmed(),
                    score_padded.bold(),
                    separator,
                    title.cyan(),
                    separator,
                    category.dimmed()
                )
            } else {
                format!(
                    "{} {}{}{}{}{}",
                    index_str, score_padded, separator, title, separator, category
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format ranked fields as tab-separated values for scripting
/// Columns: score, field, title, path category (no headers, no colors)
pub fn format_tsv(ranked: &[RankedField]) -> String {
    ranked
        .iter()
        .map(|entry| {
            format!(
                "{}\t{}\t{}\t{}",
                entry.score, entry.field, entry.title, entry.path_category
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_list(heading: &str, items: &[String], use_colors: bool) -> String {
    let heading = if use_colors {
        heading.bold().to_string()
    } else {
        heading.to_string()
    };
    let mut lines = vec![heading];
    lines.extend(items.iter().map(|item| format!("  - {}", item)));
    lines.join("\n")
}

/// Format a whole report: ranked table, then skills and qualifications.
pub fn format_report(report: &AssessmentReport, use_colors: bool) -> String {
    let mut sections = vec![format_ranked_table(&report.ranked, use_colors)];
    sections.push(format_list("Skills to develop:", &report.skills, use_colors));
    sections.push(format_list(
        "Qualifications to consider:",
        &report.qualifications,
        use_colors,
    ));
    if !report.ignored_answers.is_empty() {
        sections.push(format!(
            "Ignored answers for unknown questions: {}",
            report.ignored_answers.join(", ")
        ));
    }
    sections.join("\n\n")
}

/// Format every weight applied while scoring (for `--explain`)
/// Format: "{question}={choice}  {field} +{weight}"
pub fn format_breakdown(sheet: &ScoreSheet) -> String {
    if sheet.contributions.is_empty() {
        return "No weights applied.".to_string();
    }
    let id_width = sheet
        .contributions
        .iter()
        .map(|c| c.question_id.len() + c.choice.len() + 1)
        .max()
        .unwrap_or(0);

    sheet
        .contributions
        .iter()
        .map(|c| {
            let answer = format!("{}={}", c.question_id, c.choice);
            format!("{:<width$}  {} +{}", answer, c.field, c.weight, width = id_width)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format a question with its options
/// `position` is 1-based
pub fn format_question(question: &Question, position: usize, total: usize, use_colors: bool) -> String {
    let header = format!("[{}/{}] {}", position, total, question.prompt);
    let mut lines = vec![if use_colors {
        header.bold().to_string()
    } else {
        header
    }];
    for (key, text) in &question.options {
        if use_colors {
            lines.push(format!("  {}) {}", key.yellow(), text));
        } else {
            lines.push(format!("  {}) {}", key, text));
        }
    }
    lines.join("\n")
}

/// Format the whole bank for the `questions` listing
pub fn format_question_list(questions: &[Question], use_colors: bool) -> String {
    if questions.is_empty() {
        return "No questions loaded.".to_string();
    }
    questions
        .iter()
        .map(|q| {
            let id = if use_colors {
                q.id.dimmed().to_string()
            } else {
                q.id.clone()
            };
            let options = q
                .options
                .iter()
                .map(|(key, text)| format!("  {}) {}", key, text))
                .collect::<Vec<_>>()
                .join("\n");
            format!("{}  {}\n{}", id, q.prompt, options)
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Format saved assessments, one line each: "{age} ago  {top field} ({score}), ..."
pub fn format_history(entries: &[&SavedAssessment], now: DateTime<Utc>, use_colors: bool) -> String {
    if entries.is_empty() {
        return "No saved assessments.".to_string();
    }
    entries
        .iter()
        .map(|entry| {
            let age = format!("{:>4}", format_age(now - entry.taken_at));
            let fields = if entry.report.ranked.is_empty() {
                "(no fields scored)".to_string()
            } else {
                entry
                    .report
                    .ranked
                    .iter()
                    .take(3)
                    .map(|r| format!("{} ({})", r.title, r.score))
                    .collect::<Vec<_>>()
                    .join(", ")
            };
            if use_colors {
                format!("{}  {}", age.dimmed(), fields)
            } else {
                format!("{}  {}", age, fields)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format a duration into a human-readable age string
/// "2h" for hours, "3d" for days, "1w" for weeks
pub fn format_age(duration: Duration) -> String {
    let hours = duration.num_hours();
    let days = duration.num_days();
    let weeks = days / 7;

    if weeks >= 1 {
        format!("{}w", weeks)
    } else if days >= 1 {
        format!("{}d", days)
    } else if hours >= 1 {
        format!("{}h", hours)
    } else {
        let minutes = duration.num_minutes();
        if minutes >= 1 {
            format!("{}m", minutes)
        } else {
            "now".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::{AnswerSet, Contribution};
    use std::collections::BTreeMap;

    fn ranked_field(field: &str, title: &str, score: u32) -> RankedField {
        RankedField {
            field: field.to_string(),
            score,
            title: title.to_string(),
            path_category: "Business & Finance".to_string(),
        }
    }

    fn sample_report() -> AssessmentReport {
        AssessmentReport {
            ranked: vec![
                ranked_field("finance", "Finance & Investment", 10),
                ranked_field("accounting", "Accounting & Auditing", 5),
            ],
            skills: vec!["Financial Modeling".to_string(), "Budgeting".to_string()],
            qualifications: vec!["Bachelor's in Finance".to_string()],
            ignored_answers: vec![],
        }
    }

    #[test]
    fn test_format_age_hours() {
        assert_eq!(format_age(Duration::hours(3)), "3h");
    }

    #[test]
    fn test_format_age_days() {
        assert_eq!(format_age(Duration::days(2)), "2d");
    }

    #[test]
    fn test_format_age_weeks() {
        assert_eq!(format_age(Duration::weeks(2)), "2w");
    }

    #[test]
    fn test_format_age_now() {
        assert_eq!(format_age(Duration::seconds(30)), "now");
    }

    #[test]
    fn test_format_score_small() {
        assert_eq!(format_score(17), "17");
        assert_eq!(format_score(0), "0");
    }

    #[test]
    fn test_format_score_thousand() {
        assert_eq!(format_score(1000), "1k");
        assert_eq!(format_score(1500), "1.5k");
    }

    #[test]
    fn test_truncate_title_long() {
        assert_eq!(truncate_title("This is a very long title", 15), "This is a ve...");
        assert_eq!(truncate_title("Short", 20), "Short");
        assert_eq!(truncate_title("Hello world", 3), "Hel");
    }

    #[test]
    fn test_format_ranked_table_empty() {
        assert_eq!(format_ranked_table(&[], false), NO_RESULTS);
    }

    #[test]
    fn test_format_ranked_table_rows() {
        let report = sample_report();
        let result = format_ranked_table(&report.ranked, false);
        let lines: Vec<&str> = result.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with(" 1."));
        assert!(lines[0].contains("10"));
        assert!(lines[0].contains("(Business & Finance)"));
        assert!(lines[1].starts_with(" 2."));
    }

    #[test]
    fn test_format_tsv() {
        let report = sample_report();
        let result = format_tsv(&report.ranked);
        let lines: Vec<&str> = result.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].split('\t').count(), 4);
        assert_eq!(lines[0], "10\tfinance\tFinance & Investment\tBusiness & Finance");
    }

    #[test]
    fn test_format_tsv_empty() {
        assert_eq!(format_tsv(&[]), "");
    }

    #[test]
    fn test_format_report_sections() {
        let mut report = sample_report();
        report.ignored_answers = vec!["old-1".to_string()];
        let result = format_report(&report, false);
        assert!(result.contains("Skills to develop:\n  - Financial Modeling"));
        assert!(result.contains("Qualifications to consider:\n  - Bachelor's in Finance"));
        assert!(result.contains("unknown questions: old-1"));
    }

    #[test]
    fn test_format_breakdown() {
        let sheet = ScoreSheet {
            totals: vec![],
            contributions: vec![
                Contribution {
                    question_id: "core-1".to_string(),
                    choice: "c".to_string(),
                    field: "finance".to_string(),
                    weight: 3,
                },
                Contribution {
                    question_id: "core-12".to_string(),
                    choice: "b".to_string(),
                    field: "finance".to_string(),
                    weight: 2,
                },
            ],
            ignored: vec![],
        };
        let result = format_breakdown(&sheet);
        let lines: Vec<&str> = result.lines().collect();
        assert_eq!(lines[0], "core-1=c   finance +3");
        assert_eq!(lines[1], "core-12=b  finance +2");
    }

    #[test]
    fn test_format_breakdown_empty() {
        assert_eq!(format_breakdown(&ScoreSheet::default()), "No weights applied.");
    }

    #[test]
    fn test_format_question() {
        let question = Question {
            id: "q1".to_string(),
            prompt: "Pick one".to_string(),
            options: BTreeMap::from([
                ("a".to_string(), "First".to_string()),
                ("b".to_string(), "Second".to_string()),
            ]),
            weights: BTreeMap::new(),
        };
        let result = format_question(&question, 2, 18, false);
        assert_eq!(result, "[2/18] Pick one\n  a) First\n  b) Second");
    }

    #[test]
    fn test_format_history() {
        let now = Utc::now();
        let saved = SavedAssessment {
            taken_at: now - Duration::days(3),
            answers: AnswerSet::new(),
            report: sample_report(),
        };
        let result = format_history(&[&saved], now, false);
        assert_eq!(
            result,
            "  3d  Finance & Investment (10), Accounting & Auditing (5)"
        );
        assert_eq!(format_history(&[], now, false), "No saved assessments.");
    }
}
