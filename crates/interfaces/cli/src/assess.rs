use std::io::{self, Write};

use anyhow::{Context, Result, bail};

use mindspace_assessment::{AssessmentResults, AssessmentSession, LIKERT_SCALE};

pub(crate) fn run_scripted(list: &str, json: bool) -> Result<()> {
    let results = scripted_results(list)?;
    print_results(&results, json)
}

/// Answer the whole questionnaire from a comma-separated list.  Any bad value,
/// or the wrong number of answers, aborts with the session's error.
pub(crate) fn scripted_results(list: &str) -> Result<AssessmentResults> {
    let mut session = AssessmentSession::new();
    session.start();

    for (position, item) in list.split(',').map(str::trim).enumerate() {
        let score: u8 = item
            .parse()
            .with_context(|| format!("answer #{} ({item:?}) is not a number", position + 1))?;
        session.submit_answer(score)?;
    }

    Ok(session.results()?)
}

pub(crate) fn run_interactive(json: bool) -> Result<()> {
    let mut session = AssessmentSession::new();
    session.start();

    let stdin = io::stdin();
    while let Some(question) = session.current_question() {
        let label = session.question_label().unwrap_or_default();
        println!();
        println!("{label}  [{:>3.0}%]", session.progress_fraction() * 100.0);
        println!("{}", question.text);
        for (value, text) in LIKERT_SCALE {
            println!("  {value}) {text}");
        }
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            bail!("assessment aborted before the last question");
        }
        let Ok(score) = line.trim().parse::<u8>() else {
            println!("please enter a number from 1 to 5");
            continue;
        };
        if let Err(err) = session.submit_answer(score) {
            println!("{err}");
        }
    }

    let results = session.results()?;
    println!();
    print_results(&results, json)
}

fn print_results(results: &AssessmentResults, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(results)?);
        return Ok(());
    }

    println!("Your Personality Type: {}", results.personality_type);
    println!("{}", results.personality_type.description());
    println!();
    for row in results.trait_scores.display_rows() {
        let filled = (row.percent.min(100) / 5) as usize;
        println!(
            "  {:<24} {:<20} {:>3}%",
            row.label,
            "█".repeat(filled),
            row.percent
        );
    }
    Ok(())
}
