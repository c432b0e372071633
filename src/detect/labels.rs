use serde::Serialize;

/// Body-part classes reported by the nudity detector.
///
/// Variant order matches the class index order of the 320x320 NudeNet
/// detector head; serialized names are the wire labels the filter
/// reports in scores and messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Label {
    #[serde(rename = "COVERED_GENITALIA_F")]
    CoveredGenitaliaF,
    #[serde(rename = "FACE_F")]
    FaceF,
    #[serde(rename = "EXPOSED_BUTTOCKS")]
    ExposedButtocks,
    #[serde(rename = "EXPOSED_BREAST_F")]
    ExposedBreastF,
    #[serde(rename = "EXPOSED_GENITALIA_F")]
    ExposedGenitaliaF,
    #[serde(rename = "EXPOSED_BREAST_M")]
    ExposedBreastM,
    #[serde(rename = "EXPOSED_ANUS")]
    ExposedAnus,
    #[serde(rename = "EXPOSED_FEET")]
    ExposedFeet,
    #[serde(rename = "COVERED_BELLY")]
    CoveredBelly,
    #[serde(rename = "COVERED_FEET")]
    CoveredFeet,
    #[serde(rename = "COVERED_ARMPITS")]
    CoveredArmpits,
    #[serde(rename = "EXPOSED_ARMPITS")]
    ExposedArmpits,
    #[serde(rename = "FACE_M")]
    FaceM,
    #[serde(rename = "EXPOSED_BELLY")]
    ExposedBelly,
    #[serde(rename = "EXPOSED_GENITALIA_M")]
    ExposedGenitaliaM,
    #[serde(rename = "COVERED_ANUS")]
    CoveredAnus,
    #[serde(rename = "COVERED_BREAST_F")]
    CoveredBreastF,
    #[serde(rename = "COVERED_BUTTOCKS")]
    CoveredButtocks,
}

impl Label {
    /// Wire name as it appears in score maps and verdict messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::CoveredGenitaliaF => "COVERED_GENITALIA_F",
            Label::FaceF => "FACE_F",
            Label::ExposedButtocks => "EXPOSED_BUTTOCKS",
            Label::ExposedBreastF => "EXPOSED_BREAST_F",
            Label::ExposedGenitaliaF => "EXPOSED_GENITALIA_F",
            Label::ExposedBreastM => "EXPOSED_BREAST_M",
            Label::ExposedAnus => "EXPOSED_ANUS",
            Label::ExposedFeet => "EXPOSED_FEET",
            Label::CoveredBelly => "COVERED_BELLY",
            Label::CoveredFeet => "COVERED_FEET",
            Label::CoveredArmpits => "COVERED_ARMPITS",
            Label::ExposedArmpits => "EXPOSED_ARMPITS",
            Label::FaceM => "FACE_M",
            Label::ExposedBelly => "EXPOSED_BELLY",
            Label::ExposedGenitaliaM => "EXPOSED_GENITALIA_M",
            Label::CoveredAnus => "COVERED_ANUS",
            Label::CoveredBreastF => "COVERED_BREAST_F",
            Label::CoveredButtocks => "COVERED_BUTTOCKS",
        }
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<usize> for Label {
    type Error = usize;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Label::CoveredGenitaliaF),
            1 => Ok(Label::FaceF),
            2 => Ok(Label::ExposedButtocks),
            3 => Ok(Label::ExposedBreastF),
            4 => Ok(Label::ExposedGenitaliaF),
            5 => Ok(Label::ExposedBreastM),
            6 => Ok(Label::ExposedAnus),
            7 => Ok(Label::ExposedFeet),
            8 => Ok(Label::CoveredBelly),
            9 => Ok(Label::CoveredFeet),
            10 => Ok(Label::CoveredArmpits),
            11 => Ok(Label::ExposedArmpits),
            12 => Ok(Label::FaceM),
            13 => Ok(Label::ExposedBelly),
            14 => Ok(Label::ExposedGenitaliaM),
            15 => Ok(Label::CoveredAnus),
            16 => Ok(Label::CoveredBreastF),
            17 => Ok(Label::CoveredButtocks),
            other => Err(other),
        }
    }
}
