use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Dog gender as stored on the dog record, matched case-insensitively
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Gender {
    Male,
    Female,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown gender: {0}")]
pub struct UnknownGender(pub String);

impl FromStr for Gender {
    type Err = UnknownGender;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            _ => Err(UnknownGender(s.to_string())),
        }
    }
}

impl TryFrom<String> for Gender {
    type Error = UnknownGender;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "Male"),
            Gender::Female => write!(f, "Female"),
        }
    }
}

/// Dog listing, owned by the external dog store
///
/// The engine only ever reads these; nothing here is mutated while scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dog {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "ownerId")]
    pub owner_id: String,
    #[serde(default)]
    pub name: String,
    pub breed: String,
    /// Years; fractional for puppies
    #[serde(default)]
    pub age: f64,
    pub gender: Gender,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub photos: Vec<String>,
    #[serde(rename = "medicalInfo", default)]
    pub medical_info: Option<MedicalInfo>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// Health and eligibility flags attached to a dog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedicalInfo {
    #[serde(default)]
    pub vaccinated: bool,
    #[serde(default)]
    pub neutered: bool,
    #[serde(rename = "lastCheckup", default)]
    pub last_checkup: Option<chrono::DateTime<chrono::Utc>>,
}

/// Breed group classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BreedGroup {
    Sporting,
    Hound,
    Working,
    Terrier,
    Toy,
    #[serde(rename = "Non-Sporting")]
    NonSporting,
    Herding,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown breed group: {0}")]
pub struct UnknownBreedGroup(pub String);

impl BreedGroup {
    pub const ALL: [BreedGroup; 7] = [
        BreedGroup::Sporting,
        BreedGroup::Hound,
        BreedGroup::Working,
        BreedGroup::Terrier,
        BreedGroup::Toy,
        BreedGroup::NonSporting,
        BreedGroup::Herding,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BreedGroup::Sporting => "Sporting",
            BreedGroup::Hound => "Hound",
            BreedGroup::Working => "Working",
            BreedGroup::Terrier => "Terrier",
            BreedGroup::Toy => "Toy",
            BreedGroup::NonSporting => "Non-Sporting",
            BreedGroup::Herding => "Herding",
        }
    }
}

impl FromStr for BreedGroup {
    type Err = UnknownBreedGroup;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BreedGroup::ALL
            .into_iter()
            .find(|group| group.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownBreedGroup(s.to_string()))
    }
}

impl fmt::Display for BreedGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decode a stored group name, keeping the rest of the record when it is unknown
fn deserialize_group<'de, D>(deserializer: D) -> Result<Option<BreedGroup>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(name) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };

    match name.parse::<BreedGroup>() {
        Ok(group) => Ok(Some(group)),
        Err(e) => {
            tracing::warn!("{}, scoring breed without a group", e);
            Ok(None)
        }
    }
}

/// Breed characteristics record from the breed store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreedInfo {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    /// `None` when the stored group is missing or not a known group
    #[serde(rename = "type", default, deserialize_with = "deserialize_group")]
    pub group: Option<BreedGroup>,
    #[serde(default)]
    pub height: Option<String>,
    /// Free text such as `"40-50"` or `"about 70 lbs"`
    #[serde(default)]
    pub weight: String,
    #[serde(rename = "healthProblems", default)]
    pub health_problems: String,
    #[serde(rename = "yearlyExpenses", default)]
    pub yearly_expenses: f64,
    #[serde(rename = "avgPuppyPrice", default)]
    pub avg_puppy_price: f64,
    #[serde(default)]
    pub intelligence: u32,
    #[serde(default)]
    pub popularity: Option<u32>,
    #[serde(default)]
    pub longevity: Option<String>,
}

/// How a reason string should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReasonKind {
    Benefit,
    Warning,
    Neutral,
}

/// Human-readable explanation emitted by a dimension scorer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reason {
    pub kind: ReasonKind,
    pub text: String,
}

impl Reason {
    pub fn benefit(text: impl Into<String>) -> Self {
        Self { kind: ReasonKind::Benefit, text: text.into() }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self { kind: ReasonKind::Warning, text: text.into() }
    }

    pub fn neutral(text: impl Into<String>) -> Self {
        Self { kind: ReasonKind::Neutral, text: text.into() }
    }
}

/// The five scoring dimensions, in aggregation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Health,
    Size,
    Type,
    Genetics,
    Cost,
}

/// Sub-score (0-100) for a single dimension plus its reasons
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionScore {
    pub dimension: Dimension,
    pub score: u8,
    pub reasons: Vec<Reason>,
}

/// Compatibility of a candidate dog with the dog it was paired against
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityResult {
    pub dog: Dog,
    #[serde(rename = "breedInfo")]
    pub breed_info: Option<BreedInfo>,
    pub score: u8,
    pub benefits: Vec<String>,
    pub warnings: Vec<String>,
    #[serde(rename = "neutralNotes")]
    pub neutral_notes: Vec<String>,
    pub breakdown: Vec<DimensionScore>,
}

impl CompatibilityResult {
    /// Sub-score for one dimension
    pub fn dimension_score(&self, dimension: Dimension) -> Option<u8> {
        self.breakdown
            .iter()
            .find(|d| d.dimension == dimension)
            .map(|d| d.score)
    }
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum WeightsError {
    #[error("Scoring weights must sum to 1.0, got {0}")]
    InvalidSum(f64),

    #[error("Scoring weight for {0:?} must be within [0, 1], got {1}")]
    OutOfRange(Dimension, f64),
}

/// Scoring weights
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub health: f64,
    pub size: f64,
    pub breed_group: f64,
    pub genetics: f64,
    pub cost: f64,
}

impl ScoringWeights {
    const SUM_TOLERANCE: f64 = 1e-9;

    pub fn weight_for(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::Health => self.health,
            Dimension::Size => self.size,
            Dimension::Type => self.breed_group,
            Dimension::Genetics => self.genetics,
            Dimension::Cost => self.cost,
        }
    }

    /// Check that every weight is in [0, 1] and that they sum to 1.0
    pub fn validate(&self) -> Result<(), WeightsError> {
        let entries = [
            (Dimension::Health, self.health),
            (Dimension::Size, self.size),
            (Dimension::Type, self.breed_group),
            (Dimension::Genetics, self.genetics),
            (Dimension::Cost, self.cost),
        ];

        for (dimension, weight) in entries {
            if !(0.0..=1.0).contains(&weight) {
                return Err(WeightsError::OutOfRange(dimension, weight));
            }
        }

        let sum: f64 = entries.iter().map(|(_, w)| w).sum();
        if (sum - 1.0).abs() > Self::SUM_TOLERANCE {
            return Err(WeightsError::InvalidSum(sum));
        }

        Ok(())
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            health: 0.35,
            size: 0.30,
            breed_group: 0.15,
            genetics: 0.15,
            cost: 0.05,
        }
    }
}
