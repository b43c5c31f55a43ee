use litter_core::model::Case;
use services::SessionProgress;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub index: usize,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CaseVm {
    pub location: String,
    pub camera: String,
    pub evidence_label: String,
    pub options: Vec<OptionVm>,
    pub title: String,
    pub wiki: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgressVm {
    pub label: String,
    pub is_complete: bool,
}

#[must_use]
pub fn map_case(case: &Case) -> CaseVm {
    // Raw option text may carry the answer marker, so buttons show the cleaned label.
    let options = (0..case.option_count())
        .map(|index| OptionVm {
            index,
            label: format!(
                "{}. {}",
                index + 1,
                case.display_option(index).unwrap_or_default()
            ),
        })
        .collect();

    CaseVm {
        location: case.location().to_string(),
        camera: case.camera().to_string(),
        evidence_label: case.evidence().join(", "),
        options,
        title: case.title().to_string(),
        wiki: case.wiki().to_string(),
    }
}

#[must_use]
pub fn map_progress(progress: SessionProgress) -> ProgressVm {
    let label = if progress.is_complete {
        format!("All {} cases closed (saved)", progress.total)
    } else {
        format!(
            "Case file {} / {} (saved)",
            progress.display_position(),
            progress.total
        )
    };
    ProgressVm {
        label,
        is_complete: progress.is_complete,
    }
}
