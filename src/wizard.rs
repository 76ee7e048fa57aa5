use anyhow::{Context, Result};
use std::io::{BufRead, Write};

use crate::bank::{Question, QuestionBank};
use crate::output::format_question;
use crate::scoring::AnswerSet;

/// What the user typed for one question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Choice(String),
    Skip,
    Quit,
}

/// Interpret one line of input for `question`.
///
/// Blank input skips, `q` quits (unless "q" is an option key), and anything
/// else must be one of the option keys.
pub fn parse_reply(question: &Question, input: &str) -> Result<Reply, String> {
    let input = input.trim().to_lowercase();
    if input.is_empty() {
        return Ok(Reply::Skip);
    }
    if question.has_option(&input) {
        return Ok(Reply::Choice(input));
    }
    if input == "q" || input == "quit" {
        return Ok(Reply::Quit);
    }
    let keys: Vec<&str> = question.options.keys().map(String::as_str).collect();
    Err(format!("'{}' is not an option; choose one of {}", input, keys.join(", ")))
}

/// Prompt user with a message and return their trimmed input.
fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, message: &str) -> Result<Option<String>> {
    write!(output, "{}", message).context("Failed to write prompt")?;
    output.flush().context("Failed to flush stdout")?;
    let mut line = String::new();
    let read = input.read_line(&mut line).context("Failed to read input")?;
    if read == 0 {
        // EOF
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Prompt user with a yes/no question. Returns bool based on input and default.
///
/// EOF always answers no, whatever the default.
pub fn prompt_yes_no<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
    default_yes: bool,
) -> Result<bool> {
    let hint = if default_yes { "Y/n" } else { "y/N" };
    let Some(answer) = prompt(input, output, &format!("{} [{}]: ", message, hint))? else {
        return Ok(false);
    };
    let answer = answer.to_lowercase();
    if answer.is_empty() {
        Ok(default_yes)
    } else {
        Ok(answer == "y" || answer == "yes")
    }
}

/// Walk the user through every question in the bank.
///
/// Invalid keys are re-prompted. Blank input skips a question, `q` or EOF
/// ends the questionnaire early with whatever was answered so far.
pub fn run_questionnaire<R: BufRead, W: Write>(
    bank: &QuestionBank,
    input: &mut R,
    output: &mut W,
    use_colors: bool,
) -> Result<AnswerSet> {
    let mut answers = AnswerSet::new();
    let total = bank.len();

    writeln!(
        output,
        "Answer each question with its letter. Press Enter to skip, 'q' to finish early.\n"
    )?;

    'questions: for (i, question) in bank.questions().iter().enumerate() {
        writeln!(output, "{}", format_question(question, i + 1, total, use_colors))?;
        loop {
            let Some(line) = prompt(input, output, "> ")? else {
                break 'questions;
            };
            match parse_reply(question, &line) {
                Ok(Reply::Choice(choice)) => {
                    answers.insert(&question.id, &choice)?;
                    break;
                }
                Ok(Reply::Skip) => break,
                Ok(Reply::Quit) => break 'questions,
                Err(message) => writeln!(output, "  {}", message)?,
            }
        }
        writeln!(output)?;
    }

    tracing::debug!(answered = answers.len(), total, "questionnaire finished");
    Ok(answers)
}
