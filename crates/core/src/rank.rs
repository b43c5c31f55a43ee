/// Closing title awarded by the terminal run, derived from `score / total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rank {
    Legend,
    Gold,
    Veteran,
    Novice,
}

impl Rank {
    /// A perfect score is `Legend`; then `>= 0.8` is `Gold`, `>= 0.6` is `Veteran`.
    #[must_use]
    pub fn from_score(score: usize, total: usize) -> Self {
        if total == 0 {
            return Self::Novice;
        }
        if score >= total {
            return Self::Legend;
        }
        // Compare on integers so 4/5 lands on Gold without float rounding.
        if score * 10 >= total * 8 {
            Self::Gold
        } else if score * 10 >= total * 6 {
            Self::Veteran
        } else {
            Self::Novice
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Legend => "Legendary Litter Forensics Master",
            Self::Gold => "Gold Medal Head Scooper",
            Self::Veteran => "Seasoned Litter Handler",
            Self::Novice => "Rookie Cat-Feeding Machine",
        }
    }

    #[must_use]
    pub fn verdict(self) -> &'static str {
        match self {
            Self::Legend => "Sibi bows before you. You have seen through every one of its schemes.",
            Self::Gold => "You know Sibi's stomach inside out. The house is in safe hands.",
            Self::Veteran => "You can mostly tell a surprise from a scare.",
            Self::Novice => "Keep at it. Sibi is going to have a hard time with you like this.",
        }
    }
}
