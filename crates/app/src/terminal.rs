//! Line-oriented terminal driver for the scored, non-resumable run.

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use console::{Term, style};
use litter_core::Rank;
use services::{RunReport, ScoredRun};

const RULE: &str = "========================================";

/// Output sink that may also know how to wipe the screen between cases.
pub trait Screen: Write {
    fn clear(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Screen for Term {
    fn clear(&mut self) -> io::Result<()> {
        self.clear_screen()
    }
}

impl Screen for Vec<u8> {}

/// Cosmetic delays. None of them affect scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    pub per_char: Duration,
    pub beat: Duration,
}

impl Pacing {
    #[must_use]
    pub fn instant() -> Self {
        Self {
            per_char: Duration::ZERO,
            beat: Duration::ZERO,
        }
    }

    #[must_use]
    pub fn interactive() -> Self {
        Self {
            per_char: Duration::from_millis(20),
            beat: Duration::from_millis(500),
        }
    }

    fn pause(self, factor: u32) {
        if !self.beat.is_zero() {
            thread::sleep(self.beat * factor / 2);
        }
    }
}

fn typed_line<W: Write>(out: &mut W, text: &str, pacing: Pacing) -> io::Result<()> {
    if pacing.per_char.is_zero() {
        return writeln!(out, "{text}");
    }
    for ch in text.chars() {
        write!(out, "{ch}")?;
        out.flush()?;
        thread::sleep(pacing.per_char);
    }
    writeln!(out)
}

/// Read one line; `None` means the input was closed.
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Parse a 1-based menu choice into a 0-based option index.
fn parse_choice(raw: &str, option_count: usize) -> Option<usize> {
    let n: usize = raw.parse().ok()?;
    (1..=option_count).contains(&n).then(|| n - 1)
}

fn styled_rank(rank: Rank) -> String {
    let title = format!("[{}]", rank.title());
    match rank {
        Rank::Legend => style(title).magenta().to_string(),
        Rank::Gold => style(title).cyan().to_string(),
        Rank::Veteran => style(title).yellow().to_string(),
        Rank::Novice => style(title).red().to_string(),
    }
}

/// Play every case of `run` once, scoring first answers only.
///
/// Returns the final report, or `None` if the input closed before the end.
///
/// # Errors
///
/// Returns `io::Error` if reading input or writing output fails.
pub fn play<R: BufRead, S: Screen>(
    run: &mut ScoredRun,
    mut input: R,
    out: &mut S,
    pacing: Pacing,
) -> io::Result<Option<RunReport>> {
    out.clear()?;
    writeln!(out, "{}", style(RULE).yellow().bold())?;
    writeln!(out, "{}", style("   Sibi's Fifty Messes: Chief Examiner").yellow().bold())?;
    writeln!(out, "{}", style(RULE).yellow().bold())?;

    let total = run.total();
    while let Some(case) = run.current() {
        let option_count = case.option_count();
        writeln!(out)?;
        writeln!(
            out,
            "{}",
            style(format!("Sample {}/{total}", run.position() + 1)).bold()
        )?;
        pacing.pause(1);
        writeln!(out, "{}", style(case.camera()).cyan())?;
        pacing.pause(2);
        writeln!(out, "Found at: {}", case.location())?;
        writeln!(out, "Key evidence: {}", case.evidence().join(", "))?;
        writeln!(out)?;
        writeln!(out, "Start your deduction:")?;
        for index in 0..option_count {
            let label = case.display_option(index).unwrap_or_default();
            writeln!(out, "  ({}) {label}", index + 1)?;
        }

        let choice = loop {
            write!(out, "\nSubmit your verdict (1-{option_count}): ")?;
            out.flush()?;
            let Some(line) = read_line(&mut input)? else {
                writeln!(out)?;
                writeln!(out, "Input closed; the investigation is abandoned.")?;
                return Ok(None);
            };
            match parse_choice(&line, option_count) {
                Some(choice) => break choice,
                None => writeln!(out, "Please enter an option number.")?,
            }
        };

        let verdict = run
            .answer(choice)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))?;
        writeln!(out)?;
        if verdict.correct {
            writeln!(
                out,
                "{}",
                style(format!("Case closed! This is: [{}]", verdict.title)).green()
            )?;
            writeln!(out, "{}", verdict.wiki)?;
        } else {
            writeln!(
                out,
                "{}",
                style("Logic error! Sibi's mess is not that simple.").red()
            )?;
        }

        write!(out, "\n{}", style("[Press Enter for the next mess]").yellow())?;
        out.flush()?;
        if read_line(&mut input)?.is_none() && !run.is_finished() {
            writeln!(out)?;
            return Ok(None);
        }
        out.clear()?;
    }

    let report = run.finish().map_err(io::Error::other)?;

    writeln!(out, "{}", style(RULE).magenta().bold())?;
    writeln!(out, "{}", style("        Final Forensic Report").magenta().bold())?;
    writeln!(out, "{}", style(RULE).magenta().bold())?;
    writeln!(out)?;
    typed_line(
        out,
        &format!("Success rate: {} / {}", style(report.score).bold(), report.total),
        pacing,
    )?;
    typed_line(out, &format!("Title: {}", styled_rank(report.rank)), pacing)?;
    typed_line(out, &format!("Expert verdict: {}", report.rank.verdict()), pacing)?;
    writeln!(out, "\n{}", style(RULE).magenta())?;
    typed_line(out, "Sibi lets out a satisfied burp somewhere far away.", pacing)?;

    Ok(Some(report))
}
