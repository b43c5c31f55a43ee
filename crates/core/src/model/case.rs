use serde::{Deserialize, Serialize};
use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CaseError {
    #[error("case location cannot be empty")]
    EmptyLocation,

    #[error("case must offer at least one option")]
    NoOptions,

    #[error("correct option {correct} is out of range for {len} options")]
    CorrectOutOfRange { correct: usize, len: usize },
}

//
// ─── DRAFT ─────────────────────────────────────────────────────────────────────
//

/// Raw case shape as it appears in a dataset file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseDraft {
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, alias = "narrative")]
    pub camera: String,
    #[serde(default)]
    pub evidence: Vec<String>,
    pub options: Vec<String>,
    pub correct: usize,
    #[serde(default)]
    pub wiki: String,
}

impl CaseDraft {
    /// Validate the draft into an immutable `Case`.
    ///
    /// # Errors
    ///
    /// Returns `CaseError::EmptyLocation` if the location is blank,
    /// `CaseError::NoOptions` if there is nothing to choose from, and
    /// `CaseError::CorrectOutOfRange` if `correct` does not index into `options`.
    pub fn validate(self) -> Result<Case, CaseError> {
        let location = self.location.trim();
        if location.is_empty() {
            return Err(CaseError::EmptyLocation);
        }
        if self.options.is_empty() {
            return Err(CaseError::NoOptions);
        }
        if self.correct >= self.options.len() {
            return Err(CaseError::CorrectOutOfRange {
                correct: self.correct,
                len: self.options.len(),
            });
        }

        let name = self
            .name
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty());

        Ok(Case {
            location: location.to_string(),
            name,
            camera: self.camera,
            evidence: self.evidence,
            options: self.options,
            correct: self.correct,
            wiki: self.wiki,
        })
    }
}

//
// ─── CASE ──────────────────────────────────────────────────────────────────────
//

/// A single quiz item: a mess, its evidence, and the candidate explanations.
///
/// Invariant: `options` is non-empty and `correct < options.len()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Case {
    location: String,
    name: Option<String>,
    camera: String,
    evidence: Vec<String>,
    options: Vec<String>,
    correct: usize,
    wiki: String,
}

impl Case {
    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[must_use]
    pub fn camera(&self) -> &str {
        &self.camera
    }

    #[must_use]
    pub fn evidence(&self) -> &[String] {
        &self.evidence
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn option_count(&self) -> usize {
        self.options.len()
    }

    /// Zero-based index of the right explanation.
    #[must_use]
    pub fn correct(&self) -> usize {
        self.correct
    }

    #[must_use]
    pub fn wiki(&self) -> &str {
        &self.wiki
    }

    #[must_use]
    pub fn is_correct(&self, choice: usize) -> bool {
        choice == self.correct
    }

    /// Option label with any leading enumerator (`"A. "`) and answer marker (`"(√)"`) removed.
    #[must_use]
    pub fn display_option(&self, index: usize) -> Option<String> {
        self.options.get(index).map(|raw| clean_option_label(raw))
    }

    /// Title shown once the case is solved; falls back to the location.
    #[must_use]
    pub fn title(&self) -> &str {
        self.name().unwrap_or(&self.location)
    }
}

fn clean_option_label(raw: &str) -> String {
    let label = raw.rsplit(". ").next().unwrap_or(raw);
    label.replace("(√)", "").trim().to_string()
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(options: &[&str], correct: usize) -> CaseDraft {
        CaseDraft {
            location: "Kitchen".into(),
            name: Some("The Bowl Incident".into()),
            camera: "The feeder clicked twice.".into(),
            evidence: vec!["kibble".into(), "a single whisker".into()],
            options: options.iter().map(|s| (*s).to_string()).collect(),
            correct,
            wiki: "Cats overeat when bored.".into(),
        }
    }

    #[test]
    fn valid_draft_becomes_case() {
        let case = draft(&["A. Boredom", "B. Revenge"], 1).validate().unwrap();
        assert_eq!(case.location(), "Kitchen");
        assert_eq!(case.option_count(), 2);
        assert!(case.is_correct(1));
        assert!(!case.is_correct(0));
        assert_eq!(case.title(), "The Bowl Incident");
    }

    #[test]
    fn empty_options_are_rejected() {
        let err = draft(&[], 0).validate().unwrap_err();
        assert_eq!(err, CaseError::NoOptions);
    }

    #[test]
    fn correct_index_must_point_into_options() {
        let err = draft(&["A", "B"], 2).validate().unwrap_err();
        assert_eq!(err, CaseError::CorrectOutOfRange { correct: 2, len: 2 });
    }

    #[test]
    fn blank_location_is_rejected() {
        let mut d = draft(&["A"], 0);
        d.location = "   ".into();
        assert_eq!(d.validate().unwrap_err(), CaseError::EmptyLocation);
    }

    #[test]
    fn blank_name_falls_back_to_location() {
        let mut d = draft(&["A"], 0);
        d.name = Some("  ".into());
        let case = d.validate().unwrap();
        assert_eq!(case.name(), None);
        assert_eq!(case.title(), "Kitchen");
    }

    #[test]
    fn display_option_strips_enumerator_and_marker() {
        let case = draft(&["A. Hairball (√)", "plain"], 0).validate().unwrap();
        assert_eq!(case.display_option(0).as_deref(), Some("Hairball"));
        assert_eq!(case.display_option(1).as_deref(), Some("plain"));
        assert_eq!(case.display_option(5), None);
    }

    #[test]
    fn narrative_alias_fills_camera() {
        let json = r#"{"location":"Hall","narrative":"dark","options":["x"],"correct":0}"#;
        let draft: CaseDraft = serde_json::from_str(json).unwrap();
        assert_eq!(draft.camera, "dark");
        assert_eq!(draft.name, None);
        assert!(draft.evidence.is_empty());
    }
}
