use litter_core::Rank;
use litter_core::model::Case;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::error::SessionError;

/// Feedback for one answered case in a scored run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub correct: bool,
    pub title: String,
    pub wiki: String,
}

/// Final tally of a scored run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunReport {
    pub score: usize,
    pub total: usize,
    pub rank: Rank,
}

/// Single-pass, first-attempt-only quiz over a freshly shuffled dataset.
///
/// Every case is asked exactly once and scored on the first answer. Nothing is
/// persisted; this is the terminal mode and is independent of `SessionController`.
#[derive(Debug, Clone)]
pub struct ScoredRun {
    cases: Vec<Case>,
    position: usize,
    score: usize,
}

impl ScoredRun {
    /// Shuffle `cases` with the thread RNG.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` if there are no cases.
    pub fn new(cases: Vec<Case>) -> Result<Self, SessionError> {
        Self::shuffled(cases, &mut rand::rng())
    }

    /// Shuffle `cases` deterministically.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` if there are no cases.
    pub fn with_seed(cases: Vec<Case>, seed: u64) -> Result<Self, SessionError> {
        Self::shuffled(cases, &mut StdRng::seed_from_u64(seed))
    }

    fn shuffled<R: rand::Rng + ?Sized>(
        mut cases: Vec<Case>,
        rng: &mut R,
    ) -> Result<Self, SessionError> {
        if cases.is_empty() {
            return Err(SessionError::Empty);
        }
        cases.shuffle(rng);
        Ok(Self {
            cases,
            position: 0,
            score: 0,
        })
    }

    #[must_use]
    pub fn current(&self) -> Option<&Case> {
        self.cases.get(self.position)
    }

    /// Zero-based index of the case being asked.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.cases.len()
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.position >= self.cases.len()
    }

    /// Score the current case and move on, right or wrong.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` after the last case and
    /// `SessionError::ChoiceOutOfRange` for an index past the options.
    pub fn answer(&mut self, choice: usize) -> Result<Verdict, SessionError> {
        let case = self.current().ok_or(SessionError::Completed)?;
        let len = case.option_count();
        if choice >= len {
            return Err(SessionError::ChoiceOutOfRange { choice, len });
        }

        let verdict = Verdict {
            correct: case.is_correct(choice),
            title: case.title().to_string(),
            wiki: case.wiki().to_string(),
        };
        if verdict.correct {
            self.score += 1;
        }
        self.position += 1;
        Ok(verdict)
    }

    /// Final tally once every case has been answered.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Unfinished` while cases remain.
    pub fn finish(&self) -> Result<RunReport, SessionError> {
        if !self.is_finished() {
            return Err(SessionError::Unfinished {
                remaining: self.cases.len() - self.position,
            });
        }
        Ok(RunReport {
            score: self.score,
            total: self.cases.len(),
            rank: Rank::from_score(self.score, self.cases.len()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use litter_core::model::CaseDraft;

    fn build_case(id: usize, correct: usize) -> Case {
        CaseDraft {
            location: format!("Spot {id}"),
            name: None,
            camera: String::new(),
            evidence: Vec::new(),
            options: vec!["a".into(), "b".into()],
            correct,
            wiki: format!("wiki {id}"),
        }
        .validate()
        .unwrap()
    }

    fn cases() -> Vec<Case> {
        (0..5).map(|i| build_case(i, i % 2)).collect()
    }

    #[test]
    fn empty_run_is_rejected() {
        assert!(matches!(ScoredRun::new(Vec::new()), Err(SessionError::Empty)));
    }

    #[test]
    fn every_case_is_asked_once() {
        let mut run = ScoredRun::with_seed(cases(), 3).unwrap();
        let mut seen = Vec::new();
        while let Some(case) = run.current() {
            seen.push(case.location().to_string());
            run.answer(0).unwrap();
        }
        seen.sort();
        let expected: Vec<String> = (0..5).map(|i| format!("Spot {i}")).collect();
        assert_eq!(seen, expected);
    }

    #[test]
    fn wrong_answers_move_on_without_scoring() {
        let mut run = ScoredRun::with_seed(cases(), 9).unwrap();
        let correct = run.current().unwrap().correct();

        let verdict = run.answer(1 - correct).unwrap();
        assert!(!verdict.correct);
        assert_eq!(run.position(), 1);
        assert_eq!(run.score(), 0);
    }

    #[test]
    fn perfect_run_is_legendary() {
        let mut run = ScoredRun::with_seed(cases(), 1).unwrap();
        assert!(matches!(run.finish(), Err(SessionError::Unfinished { remaining: 5 })));

        while let Some(case) = run.current() {
            let correct = case.correct();
            assert!(run.answer(correct).unwrap().correct);
        }
        let report = run.finish().unwrap();
        assert_eq!(report.score, 5);
        assert_eq!(report.total, 5);
        assert_eq!(report.rank, Rank::Legend);
        assert!(matches!(run.answer(0), Err(SessionError::Completed)));
    }

    #[test]
    fn out_of_range_choice_does_not_consume_the_case() {
        let mut run = ScoredRun::with_seed(cases(), 5).unwrap();
        assert!(matches!(
            run.answer(2),
            Err(SessionError::ChoiceOutOfRange { choice: 2, len: 2 })
        ));
        assert_eq!(run.position(), 0);
    }
}
