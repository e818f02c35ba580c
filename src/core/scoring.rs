use crate::core::size::SizeBucket;
use crate::models::{
    BreedGroup, BreedInfo, CompatibilityResult, Dimension, DimensionScore, Dog, Gender, Reason,
    ReasonKind, ScoringWeights,
};

/// Hereditary conditions checked for overlap between two breeds
pub const SERIOUS_HEALTH_ISSUES: [&str; 6] = [
    "hip dysplasia",
    "elbow dysplasia",
    "heart disease",
    "cancer",
    "epilepsy",
    "progressive retinal atrophy",
];

/// Score used by every dimension that lacks the data to judge
pub const NEUTRAL_SCORE: u8 = 50;

/// Score a pair of dogs whose breed records have already been resolved
///
/// Scoring formula:
/// score = round(
///     health_score * 0.35 +        # Fewer shared hereditary issues = higher
///     size_score * 0.30 +          # Closer size buckets = higher
///     type_score * 0.15 +          # Same or compatible breed groups = higher
///     genetics_score * 0.15 +      # Cross-breeding = higher
///     cost_score * 0.05            # Puppy value vs upkeep = higher
/// )
///
/// The returned result describes `dog_b`, the candidate side of the pair.
pub fn score_pair(
    dog_a: &Dog,
    breed_a: Option<&BreedInfo>,
    dog_b: &Dog,
    breed_b: Option<&BreedInfo>,
    weights: &ScoringWeights,
) -> CompatibilityResult {
    let breakdown = vec![
        calculate_health_compatibility(breed_a, breed_b),
        calculate_size_compatibility(dog_a, breed_a, dog_b, breed_b),
        calculate_type_compatibility(breed_a, breed_b),
        calculate_genetic_diversity(dog_a, dog_b),
        calculate_cost_efficiency(breed_a, breed_b),
    ];

    let aggregate = aggregate(&breakdown, weights);

    CompatibilityResult {
        dog: dog_b.clone(),
        breed_info: breed_b.cloned(),
        score: aggregate.score,
        benefits: aggregate.benefits,
        warnings: aggregate.warnings,
        neutral_notes: aggregate.neutral_notes,
        breakdown,
    }
}

/// Weighted score and classified reasons for a set of dimension scores
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Aggregate {
    pub score: u8,
    pub benefits: Vec<String>,
    pub warnings: Vec<String>,
    pub neutral_notes: Vec<String>,
}

/// Combine dimension scores into one 0-100 score
///
/// Reasons keep the order they were emitted in, dimension by dimension.
pub fn aggregate(dimensions: &[DimensionScore], weights: &ScoringWeights) -> Aggregate {
    let weighted: f64 = dimensions
        .iter()
        .map(|d| f64::from(d.score) * weights.weight_for(d.dimension))
        .sum();

    let mut result = Aggregate {
        score: weighted.round().clamp(0.0, 100.0) as u8,
        ..Aggregate::default()
    };

    for reason in dimensions.iter().flat_map(|d| &d.reasons) {
        let bucket = match reason.kind {
            ReasonKind::Benefit => &mut result.benefits,
            ReasonKind::Warning => &mut result.warnings,
            ReasonKind::Neutral => &mut result.neutral_notes,
        };
        bucket.push(reason.text.clone());
    }

    result
}

#[inline]
fn dimension(dimension: Dimension, score: u8, reasons: Vec<Reason>) -> DimensionScore {
    DimensionScore { dimension, score, reasons }
}

/// Health score: penalize hereditary conditions both breeds are prone to
pub fn calculate_health_compatibility(
    breed_a: Option<&BreedInfo>,
    breed_b: Option<&BreedInfo>,
) -> DimensionScore {
    let (Some(a), Some(b)) = (breed_a, breed_b) else {
        return dimension(
            Dimension::Health,
            NEUTRAL_SCORE,
            vec![Reason::neutral("Insufficient health data for comparison")],
        );
    };

    let health_a = a.health_problems.to_lowercase();
    let health_b = b.health_problems.to_lowercase();

    let shared: Vec<&str> = SERIOUS_HEALTH_ISSUES
        .iter()
        .copied()
        .filter(|issue| health_a.contains(issue) && health_b.contains(issue))
        .collect();

    match shared.as_slice() {
        [] => dimension(
            Dimension::Health,
            95,
            vec![Reason::neutral("No shared genetic health issues detected")],
        ),
        [issue] => dimension(
            Dimension::Health,
            60,
            vec![Reason::warning(format!(
                "Both breeds prone to {} - genetic counseling recommended",
                issue
            ))],
        ),
        issues => dimension(
            Dimension::Health,
            30,
            vec![Reason::warning(format!(
                "Multiple shared health risks: {}",
                issues.join(", ")
            ))],
        ),
    }
}

/// Size score: compare size buckets, guarding against a small dam and large sire
pub fn calculate_size_compatibility(
    dog_a: &Dog,
    breed_a: Option<&BreedInfo>,
    dog_b: &Dog,
    breed_b: Option<&BreedInfo>,
) -> DimensionScore {
    let (Some(size_a), Some(size_b)) = (SizeBucket::for_breed(breed_a), SizeBucket::for_breed(breed_b))
    else {
        return dimension(
            Dimension::Size,
            NEUTRAL_SCORE,
            vec![Reason::neutral("Insufficient size data for comparison")],
        );
    };

    match size_a.distance(size_b) {
        0 => dimension(
            Dimension::Size,
            100,
            vec![Reason::benefit("Perfect size match - similar build")],
        ),
        1 => dimension(
            Dimension::Size,
            85,
            vec![Reason::benefit("Good size compatibility - manageable difference")],
        ),
        2 => dimension(
            Dimension::Size,
            60,
            vec![Reason::warning("Moderate size difference - breeding may require assistance")],
        ),
        _ => {
            // Two females: dog_a counts as the female. Two males: dog_a counts as the male.
            let female_size = if dog_a.gender == Gender::Female { size_a } else { size_b };
            let male_size = if dog_a.gender == Gender::Male { size_a } else { size_b };

            if female_size < male_size {
                dimension(
                    Dimension::Size,
                    20,
                    vec![
                        Reason::warning("Significant size mismatch - female is smaller than male"),
                        Reason::warning("High risk pregnancy - not recommended"),
                    ],
                )
            } else {
                dimension(
                    Dimension::Size,
                    40,
                    vec![Reason::warning("Large size difference - veterinary supervision required")],
                )
            }
        }
    }
}

/// Groups that pair well with `group`, looked up from the first dog's side
pub fn compatible_groups(group: BreedGroup) -> &'static [BreedGroup] {
    use BreedGroup::*;

    match group {
        Sporting => &[Sporting, Working, Herding],
        Working => &[Working, Sporting, Herding],
        Herding => &[Herding, Working, Sporting],
        Hound => &[Hound, Sporting],
        Terrier => &[Terrier, Working],
        Toy => &[Toy, NonSporting],
        NonSporting => &[NonSporting, Toy, Sporting],
    }
}

/// Breed group score: same or compatible groups give more predictable litters
pub fn calculate_type_compatibility(
    breed_a: Option<&BreedInfo>,
    breed_b: Option<&BreedInfo>,
) -> DimensionScore {
    let (Some(a), Some(b)) = (breed_a.and_then(|info| info.group), breed_b.and_then(|info| info.group))
    else {
        return dimension(
            Dimension::Type,
            NEUTRAL_SCORE,
            vec![Reason::neutral("Insufficient breed group data for comparison")],
        );
    };

    if a == b {
        return dimension(
            Dimension::Type,
            90,
            vec![Reason::benefit(format!("Same group ({}) - consistent traits", a))],
        );
    }

    if compatible_groups(a).contains(&b) {
        dimension(
            Dimension::Type,
            75,
            vec![Reason::benefit(format!("Compatible groups ({} × {})", a, b))],
        )
    } else {
        dimension(
            Dimension::Type,
            55,
            vec![Reason::warning(format!(
                "Different groups ({} × {}) - varied offspring traits",
                a, b
            ))],
        )
    }
}

/// Genetic diversity score: same-breed pairings carry inbreeding risk
pub fn calculate_genetic_diversity(dog_a: &Dog, dog_b: &Dog) -> DimensionScore {
    if dog_a.breed == dog_b.breed {
        return dimension(
            Dimension::Genetics,
            60,
            vec![
                Reason::warning("Same breed - ensure parents are not related"),
                Reason::warning("Consider checking pedigrees for inbreeding coefficient"),
            ],
        );
    }

    dimension(
        Dimension::Genetics,
        95,
        vec![
            Reason::benefit("Cross-breeding provides genetic diversity"),
            Reason::benefit("May produce hybrid vigor in offspring"),
        ],
    )
}

/// Cost score: expected puppy value relative to yearly upkeep
pub fn calculate_cost_efficiency(
    breed_a: Option<&BreedInfo>,
    breed_b: Option<&BreedInfo>,
) -> DimensionScore {
    let (Some(a), Some(b)) = (breed_a, breed_b) else {
        return dimension(Dimension::Cost, NEUTRAL_SCORE, Vec::new());
    };

    let avg_cost = (a.yearly_expenses + b.yearly_expenses) / 2.0;
    let avg_puppy_price = (a.avg_puppy_price + b.avg_puppy_price) / 2.0;

    let reasons = vec![
        Reason::neutral(format!("Expected yearly cost per puppy: {}", format_dollars(avg_cost))),
        Reason::neutral(format!("Expected puppy value: {}", format_dollars(avg_puppy_price))),
    ];

    // Zero upkeep gives an infinite ratio; zero over zero is NaN and scores lowest
    let ratio = avg_puppy_price / avg_cost;

    let score = if ratio > 3.0 {
        90
    } else if ratio > 2.0 {
        75
    } else if ratio > 1.0 {
        60
    } else {
        45
    };

    dimension(Dimension::Cost, score, reasons)
}

/// Whole-dollar amount with thousands separators, e.g. `$12,500`
pub fn format_dollars(amount: f64) -> String {
    let rounded = amount.round() as i64;
    let digits = rounded.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if rounded < 0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}
