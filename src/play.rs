use crate::error::{QuizError, Result};
use crate::navigation::{NavState, Navigator, ShareOutcome, StartScreen, UnavailableClipboard};
use crate::report::{self, OutputFormat};
use crate::store::StateBackend;
use crate::types::config::QuizConfig;
use crate::types::level::ResultCode;
use crate::types::result_type::ResultCatalog;
use std::io::{BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartChoice {
    Ask,
    Resume,
    Restart,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEnd {
    Completed(ResultCode),
    /// Input ran out; progress stays in the store.
    Suspended,
}

pub fn run_session<B, R, W>(
    nav: &mut Navigator<B>,
    config: &QuizConfig,
    catalog: &ResultCatalog,
    choice: StartChoice,
    input: &mut R,
    output: &mut W,
) -> Result<SessionEnd>
where
    B: StateBackend,
    R: BufRead,
    W: Write,
{
    writeln!(
        output,
        "{} ({} questions)",
        nav.path().config.name,
        nav.total_questions()
    )?;

    match nav.enter_start() {
        StartScreen::Fresh => {
            nav.restart();
        }
        StartScreen::Resumable {
            next_question,
            answered,
        } => match choice {
            StartChoice::Resume => {
                nav.resume();
            }
            StartChoice::Restart => {
                nav.restart();
            }
            StartChoice::Ask => {
                match next_question {
                    Some(next) => writeln!(
                        output,
                        "saved progress: {answered} answered, next is question {next}"
                    )?,
                    None => writeln!(
                        output,
                        "saved progress: all {answered} answered, resume to see the result"
                    )?,
                }
                loop {
                    let Some(line) = prompt(input, output, "[r]esume or [s]tart over? ")? else {
                        return suspend(nav, output);
                    };
                    match line.as_str() {
                        "" | "r" | "resume" => {
                            nav.resume();
                            break;
                        }
                        "s" | "restart" => {
                            nav.restart();
                            break;
                        }
                        _ => writeln!(output, "please answer r or s")?,
                    }
                }
            }
        },
    }

    loop {
        match nav.state().clone() {
            NavState::Start => {
                nav.restart();
            }
            NavState::AtQuestion(ordinal) => {
                let Some(question) = nav.path().question(ordinal) else {
                    return Err(QuizError::InvalidQuestion(ordinal));
                };
                let option_count = question.options.len();
                writeln!(output, "\n[{ordinal}/{}] {}", nav.total_questions(), question.text)?;
                if let Some(heading) = &question.heading {
                    writeln!(output, "({heading})")?;
                }
                for (index, option) in question.options.iter().enumerate() {
                    writeln!(output, "  {}. {}", index + 1, option.text)?;
                }

                let Some(line) = prompt(input, output, &format!("answer [1-{option_count}]: "))?
                else {
                    return suspend(nav, output);
                };
                match line.parse::<usize>() {
                    Ok(choice) if (1..=option_count).contains(&choice) => {
                        nav.select_answer(choice - 1)?;
                    }
                    _ => writeln!(output, "please enter a number between 1 and {option_count}")?,
                }
            }
            NavState::ShowingEducational(ordinal) => {
                if let Some(question) = nav.path().question(ordinal) {
                    for text in [&question.reveal, &question.context, &question.quote]
                        .into_iter()
                        .flatten()
                    {
                        writeln!(output, "\n{text}")?;
                    }
                }
                if prompt(input, output, "press enter to continue ")?.is_none() {
                    return suspend(nav, output);
                }
                nav.confirm()?;
            }
            NavState::AtResult(code) => {
                let view = report::build_view(
                    config,
                    &nav.path().config,
                    &code,
                    catalog,
                    nav.answer_token(),
                );
                writeln!(output, "\n{}", report::render(&view, OutputFormat::Md)?)?;
                match nav.share(&mut UnavailableClipboard)? {
                    ShareOutcome::Copied => writeln!(output, "link copied")?,
                    ShareOutcome::ManualCopy(address) => {
                        writeln!(output, "Copy this link: {address}")?
                    }
                }
                return Ok(SessionEnd::Completed(code));
            }
        }
    }
}

fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, text: &str) -> Result<Option<String>> {
    write!(output, "{text}")?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_ascii_lowercase()))
}

fn suspend<B: StateBackend, W: Write>(nav: &Navigator<B>, output: &mut W) -> Result<SessionEnd> {
    writeln!(
        output,
        "\nprogress saved at {}; run play again to resume",
        nav.destination()
    )?;
    Ok(SessionEnd::Suspended)
}
