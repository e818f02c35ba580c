use serde::{Deserialize, Serialize};
use crate::models::BreedInfo;

/// Average weight used when a weight string carries no number at all
pub const DEFAULT_AVERAGE_WEIGHT: f64 = 50.0;

/// Size class derived from average adult weight, smallest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeBucket {
    Toy,
    Small,
    Medium,
    Large,
    Giant,
}

impl SizeBucket {
    /// Bucket for an average weight
    pub fn from_weight(average_weight: f64) -> Self {
        if average_weight < 15.0 {
            SizeBucket::Toy
        } else if average_weight < 30.0 {
            SizeBucket::Small
        } else if average_weight < 60.0 {
            SizeBucket::Medium
        } else if average_weight < 100.0 {
            SizeBucket::Large
        } else {
            SizeBucket::Giant
        }
    }

    /// Bucket for a breed, `None` when there is no usable weight
    pub fn for_breed(breed_info: Option<&BreedInfo>) -> Option<Self> {
        let weight = breed_info?.weight.as_str();
        if weight.is_empty() {
            return None;
        }
        Some(Self::from_weight(parse_average_weight(weight)))
    }

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Number of buckets between two sizes
    #[inline]
    pub fn distance(self, other: SizeBucket) -> usize {
        self.index().abs_diff(other.index())
    }
}

/// Parse an average weight from free text
///
/// The first `<low>-<high>` pair is averaged. Failing that the first number
/// is used, and text with no digits at all falls back to
/// [`DEFAULT_AVERAGE_WEIGHT`].
pub fn parse_average_weight(weight: &str) -> f64 {
    let runs = digit_runs(weight);

    for (start, end) in &runs {
        let rest = &weight[*end..];
        if let Some(after_dash) = rest.strip_prefix('-') {
            let high_len = after_dash.bytes().take_while(u8::is_ascii_digit).count();
            if high_len > 0 {
                let low = to_number(&weight[*start..*end]);
                let high = to_number(&after_dash[..high_len]);
                return (low + high) / 2.0;
            }
        }
    }

    runs.first()
        .map(|(start, end)| to_number(&weight[*start..*end]))
        .unwrap_or(DEFAULT_AVERAGE_WEIGHT)
}

/// Byte ranges of maximal ASCII digit runs, in order
fn digit_runs(text: &str) -> Vec<(usize, usize)> {
    let bytes = text.as_bytes();
    let mut runs = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i].is_ascii_digit() {
            let start = i;
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
            runs.push((start, i));
        } else {
            i += 1;
        }
    }

    runs
}

#[inline]
fn to_number(digits: &str) -> f64 {
    digits.parse::<f64>().unwrap_or(DEFAULT_AVERAGE_WEIGHT)
}
