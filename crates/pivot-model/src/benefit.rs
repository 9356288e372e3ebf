//! Benefit category taxonomy and the description-matching rules.

use crate::cell::Cell;

/// Benefit category derived from a claim's benefit description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BenefitCategory {
    Outpatient,
    Inpatient,
    Dental,
    Optical,
    LastExpense,
    Maternity,
    /// Description matched no category rule.
    NoMatch,
}

// Production keyword lists, matched case-insensitively by containment.
// Order matters twice over: categories are tested top to bottom (NON
// ACCIDENTAL DENTAL is an inpatient keyword and must win over the bare
// DENTAL rule), and the tokens themselves are the exact strings the
// upstream claim systems emit, including their spellings.
const OUTPATIENT_KEYWORDS: &[&str] = &[
    "OUT PATIENT OVERALL",
    "ANTE AND POST NATAL CARE",
    "IMMUNIZATION",
    "HEALTH CHECKUP",
    "WELLBEING BENEFIT",
    "COPAY KES 1000",
    "COPAY 1 TIER",
];

const INPATIENT_KEYWORDS: &[&str] = &[
    "CONGENITAL",
    "CHILDBRITH",
    "NEO NATAL",
    "PREMATURITY",
    "EXTERNAL MEDICAL APPLIANCES",
    "NON ACCIDENTAL DENTAL",
    "NON ACCIDENTAL OPTICAL",
    "HOSPITALIZATION",
    "PRE-EXISTING",
    "CHRONIC",
    "PSYCHIATRY",
    "PSYCHOTHERAPY",
    "POST HOSPITALIZATION",
];

const DENTAL_KEYWORDS: &[&str] = &["DENTAL"];

const OPTICAL_KEYWORDS: &[&str] = &["OPTICAL", "FRAMES"];

const LAST_EXPENSE_KEYWORDS: &[&str] = &["LAST EXPENSE"];

const MATERNITY_KEYWORDS: &[&str] = &["NORMAL DELIVERY", "EMERGENCY CEASEREAN"];

impl BenefitCategory {
    /// Category label as written into reports.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Outpatient => "OUTPATIENT",
            Self::Inpatient => "INPATIENT",
            Self::Dental => "DENTAL",
            Self::Optical => "OPTICAL",
            Self::LastExpense => "LAST EXPENSE",
            Self::Maternity => "MATERNITY",
            Self::NoMatch => "No Match",
        }
    }

    /// Classify a benefit description.
    ///
    /// Matching is case-insensitive containment against the keyword
    /// lists, first category with a hit wins. `None` (a non-text cell)
    /// classifies as `NoMatch`.
    #[must_use]
    pub fn classify(description: Option<&str>) -> Self {
        let Some(text) = description else {
            return Self::NoMatch;
        };
        let upper = text.to_uppercase();
        let rules: &[(&[&str], Self)] = &[
            (OUTPATIENT_KEYWORDS, Self::Outpatient),
            (INPATIENT_KEYWORDS, Self::Inpatient),
            (DENTAL_KEYWORDS, Self::Dental),
            (OPTICAL_KEYWORDS, Self::Optical),
            (LAST_EXPENSE_KEYWORDS, Self::LastExpense),
            (MATERNITY_KEYWORDS, Self::Maternity),
        ];
        for (keywords, category) in rules {
            if keywords.iter().any(|keyword| upper.contains(keyword)) {
                return *category;
            }
        }
        Self::NoMatch
    }

    /// Classify the benefit-description cell of a row.
    #[must_use]
    pub fn classify_cell(cell: &Cell) -> Self {
        Self::classify(cell.as_str())
    }
}

impl std::fmt::Display for BenefitCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_match_case_insensitively() {
        assert_eq!(
            BenefitCategory::classify(Some("Out Patient Overall Limit")),
            BenefitCategory::Outpatient
        );
        assert_eq!(
            BenefitCategory::classify(Some("chronic conditions cover")),
            BenefitCategory::Inpatient
        );
        assert_eq!(
            BenefitCategory::classify(Some("Optical frames top-up")),
            BenefitCategory::Optical
        );
        assert_eq!(
            BenefitCategory::classify(Some("LAST EXPENSE RIDER")),
            BenefitCategory::LastExpense
        );
        assert_eq!(
            BenefitCategory::classify(Some("NORMAL DELIVERY PACKAGE")),
            BenefitCategory::Maternity
        );
    }

    #[test]
    fn inpatient_wins_over_the_bare_dental_rule() {
        assert_eq!(
            BenefitCategory::classify(Some("NON ACCIDENTAL DENTAL")),
            BenefitCategory::Inpatient
        );
        assert_eq!(
            BenefitCategory::classify(Some("ROUTINE DENTAL")),
            BenefitCategory::Dental
        );
    }

    #[test]
    fn unmatched_and_non_text_fall_through() {
        assert_eq!(
            BenefitCategory::classify(Some("TRAVEL INSURANCE")),
            BenefitCategory::NoMatch
        );
        assert_eq!(BenefitCategory::classify(None), BenefitCategory::NoMatch);
        assert_eq!(
            BenefitCategory::classify_cell(&Cell::Number(17.0)),
            BenefitCategory::NoMatch
        );
        assert_eq!(BenefitCategory::NoMatch.label(), "No Match");
    }
}
