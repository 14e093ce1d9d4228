//! The closed symptom schema tracked by the classifier.
//!
//! 27 binary/fractional indicators matching the training data of the
//! endometriosis prediction model. The set is fixed: it must never grow or
//! shrink between vector construction and scoring, and keys outside it are
//! rejected at the construction boundary (silently ignored, by design).

use serde::{Deserialize, Serialize};

/// Number of symptom indicators in the fixed schema.
pub const SYMPTOM_COUNT: usize = 27;

/// One of the 27 symptom indicators in the fixed input schema.
///
/// Each key has a stable API name (underscore-separated, as accepted on the
/// wire) and a human-readable display label. Discriminants double as dense
/// vector indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SymptomKey {
    IrregularMissedPeriods,
    Cramping,
    MenstrualClots,
    Infertility,
    ChronicPain,
    Diarrhea,
    LongMenstruation,
    Vomiting,
    Migraines,
    ExtremeBloating,
    LegPain,
    Depression,
    FertilityIssues,
    OvarianCysts,
    PainfulUrination,
    PainAfterIntercourse,
    DigestiveProblems,
    Anaemia,
    HipPain,
    VaginalPainPressure,
    CystsUnspecified,
    AbnormalUterineBleeding,
    HormonalProblems,
    FeelingSick,
    IntercourseCramps,
    Insomnia,
    LossOfAppetite,
}

impl SymptomKey {
    /// All keys in canonical (model feature) order.
    pub const ALL: [SymptomKey; SYMPTOM_COUNT] = [
        SymptomKey::IrregularMissedPeriods,
        SymptomKey::Cramping,
        SymptomKey::MenstrualClots,
        SymptomKey::Infertility,
        SymptomKey::ChronicPain,
        SymptomKey::Diarrhea,
        SymptomKey::LongMenstruation,
        SymptomKey::Vomiting,
        SymptomKey::Migraines,
        SymptomKey::ExtremeBloating,
        SymptomKey::LegPain,
        SymptomKey::Depression,
        SymptomKey::FertilityIssues,
        SymptomKey::OvarianCysts,
        SymptomKey::PainfulUrination,
        SymptomKey::PainAfterIntercourse,
        SymptomKey::DigestiveProblems,
        SymptomKey::Anaemia,
        SymptomKey::HipPain,
        SymptomKey::VaginalPainPressure,
        SymptomKey::CystsUnspecified,
        SymptomKey::AbnormalUterineBleeding,
        SymptomKey::HormonalProblems,
        SymptomKey::FeelingSick,
        SymptomKey::IntercourseCramps,
        SymptomKey::Insomnia,
        SymptomKey::LossOfAppetite,
    ];

    /// High-risk subset: weighted 2.0 by the heuristic scorer.
    pub const HIGH_RISK: [SymptomKey; 6] = [
        SymptomKey::ChronicPain,
        SymptomKey::Cramping,
        SymptomKey::PainAfterIntercourse,
        SymptomKey::OvarianCysts,
        SymptomKey::ExtremeBloating,
        SymptomKey::Infertility,
    ];

    /// Moderate-risk subset: weighted 1.0 by the heuristic scorer.
    pub const MODERATE_RISK: [SymptomKey; 6] = [
        SymptomKey::IrregularMissedPeriods,
        SymptomKey::MenstrualClots,
        SymptomKey::Migraines,
        SymptomKey::Depression,
        SymptomKey::DigestiveProblems,
        SymptomKey::PainfulUrination,
    ];

    /// Dense index of this key into a feature vector.
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Stable wire name of this key (underscore-separated).
    #[must_use]
    pub fn api_name(self) -> &'static str {
        match self {
            Self::IrregularMissedPeriods => "Irregular_Missed_periods",
            Self::Cramping => "Cramping",
            Self::MenstrualClots => "Menstrual_clots",
            Self::Infertility => "Infertility",
            Self::ChronicPain => "Pain_Chronic_pain",
            Self::Diarrhea => "Diarrhea",
            Self::LongMenstruation => "Long_menstruation",
            Self::Vomiting => "Vomiting_constant_vomiting",
            Self::Migraines => "Migraines",
            Self::ExtremeBloating => "Extreme_Bloating",
            Self::LegPain => "Leg_pain",
            Self::Depression => "Depression",
            Self::FertilityIssues => "Fertility_Issues",
            Self::OvarianCysts => "Ovarian_cysts",
            Self::PainfulUrination => "Painful_urination",
            Self::PainAfterIntercourse => "Pain_after_Intercourse",
            Self::DigestiveProblems => "Digestive_GI_problems",
            Self::Anaemia => "Anaemia_Iron_deficiency",
            Self::HipPain => "Hip_pain",
            Self::VaginalPainPressure => "Vaginal_Pain_Pressure",
            Self::CystsUnspecified => "Cysts_unspecified",
            Self::AbnormalUterineBleeding => "Abnormal_uterine_bleeding",
            Self::HormonalProblems => "Hormonal_problems",
            Self::FeelingSick => "Feeling_sick",
            Self::IntercourseCramps => "Abdominal_Cramps_during_Intercourse",
            Self::Insomnia => "Insomnia_Sleeplessness",
            Self::LossOfAppetite => "Loss_of_appetite",
        }
    }

    /// Human-readable display label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::IrregularMissedPeriods => "Irregular / Missed periods",
            Self::Cramping => "Cramping",
            Self::MenstrualClots => "Menstrual clots",
            Self::Infertility => "Infertility",
            Self::ChronicPain => "Pain / Chronic pain",
            Self::Diarrhea => "Diarrhea",
            Self::LongMenstruation => "Long menstruation",
            Self::Vomiting => "Vomiting / constant vomiting",
            Self::Migraines => "Migraines",
            Self::ExtremeBloating => "Extreme Bloating",
            Self::LegPain => "Leg pain",
            Self::Depression => "Depression",
            Self::FertilityIssues => "Fertility Issues",
            Self::OvarianCysts => "Ovarian cysts",
            Self::PainfulUrination => "Painful urination",
            Self::PainAfterIntercourse => "Pain after Intercourse",
            Self::DigestiveProblems => "Digestive / GI problems",
            Self::Anaemia => "Anaemia / Iron deficiency",
            Self::HipPain => "Hip pain",
            Self::VaginalPainPressure => "Vaginal Pain/Pressure",
            Self::CystsUnspecified => "Cysts (unspecified)",
            Self::AbnormalUterineBleeding => "Abnormal uterine bleeding",
            Self::HormonalProblems => "Hormonal problems",
            Self::FeelingSick => "Feeling sick",
            Self::IntercourseCramps => "Abdominal Cramps during Intercourse",
            Self::Insomnia => "Insomnia / Sleeplessness",
            Self::LossOfAppetite => "Loss of appetite",
        }
    }

    /// Look up a key by its wire name.
    #[must_use]
    pub fn from_api_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.api_name() == name)
    }

    /// Whether this key belongs to the high-risk subset.
    #[must_use]
    pub fn is_high_risk(self) -> bool {
        Self::HIGH_RISK.contains(&self)
    }

    /// Whether this key belongs to the moderate-risk subset.
    #[must_use]
    pub fn is_moderate_risk(self) -> bool {
        Self::MODERATE_RISK.contains(&self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indices_are_dense_and_ordered() {
        for (i, key) in SymptomKey::ALL.iter().enumerate() {
            assert_eq!(key.index(), i);
        }
    }

    #[test]
    fn test_api_names_are_unique() {
        for a in SymptomKey::ALL {
            for b in SymptomKey::ALL {
                if a != b {
                    assert_ne!(a.api_name(), b.api_name());
                }
            }
        }
    }

    #[test]
    fn test_from_api_name_round_trip() {
        for key in SymptomKey::ALL {
            assert_eq!(SymptomKey::from_api_name(key.api_name()), Some(key));
        }
        assert_eq!(SymptomKey::from_api_name("Not_a_symptom"), None);
    }

    #[test]
    fn test_risk_subsets_are_disjoint() {
        for key in SymptomKey::HIGH_RISK {
            assert!(!key.is_moderate_risk(), "{key:?} in both subsets");
        }
        assert_eq!(SymptomKey::HIGH_RISK.len(), 6);
        assert_eq!(SymptomKey::MODERATE_RISK.len(), 6);
    }
}
