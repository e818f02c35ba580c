// Unit tests for Breed Match scoring

use breed_match::core::{
    scoring::{
        calculate_cost_efficiency, calculate_genetic_diversity, calculate_health_compatibility,
        calculate_size_compatibility, calculate_type_compatibility, score_pair,
    },
    breed_key, CompatibilityBadge,
};
use breed_match::models::{BreedGroup, BreedInfo, Dimension, Dog, Gender, ScoringWeights};

fn create_dog(id: &str, owner: &str, breed: &str, gender: Gender) -> Dog {
    Dog {
        id: id.to_string(),
        owner_id: owner.to_string(),
        name: format!("Dog {}", id),
        breed: breed.to_string(),
        age: 4.0,
        gender,
        description: None,
        photos: vec![],
        medical_info: None,
        created_at: None,
    }
}

fn create_breed(
    name: &str,
    group: BreedGroup,
    weight: &str,
    health_problems: &str,
    yearly_expenses: f64,
    avg_puppy_price: f64,
) -> BreedInfo {
    BreedInfo {
        id: None,
        name: name.to_string(),
        group: Some(group),
        height: None,
        weight: weight.to_string(),
        health_problems: health_problems.to_string(),
        yearly_expenses,
        avg_puppy_price,
        intelligence: 20,
        popularity: None,
        longevity: None,
    }
}

fn alpha() -> BreedInfo {
    create_breed("Alpha", BreedGroup::Sporting, "40-50", "hip dysplasia", 1000.0, 4000.0)
}

fn beta() -> BreedInfo {
    create_breed("Beta", BreedGroup::Toy, "10-14", "hip dysplasia", 1000.0, 3000.0)
}

#[test]
fn test_worked_example_alpha_beta() {
    let dog_a = create_dog("a", "owner-a", "Alpha", Gender::Male);
    let dog_b = create_dog("b", "owner-b", "Beta", Gender::Female);
    let (alpha, beta) = (alpha(), beta());

    let result = score_pair(&dog_a, Some(&alpha), &dog_b, Some(&beta), &ScoringWeights::default());

    assert_eq!(result.dimension_score(Dimension::Size), Some(60));
    assert_eq!(result.dimension_score(Dimension::Health), Some(60));
    assert_eq!(result.dimension_score(Dimension::Type), Some(55));
    assert_eq!(result.dimension_score(Dimension::Genetics), Some(95));
    assert_eq!(result.dimension_score(Dimension::Cost), Some(90));

    // 0.35*60 + 0.30*60 + 0.15*55 + 0.15*95 + 0.05*90 = 66
    assert_eq!(result.score, 66);
    assert_eq!(result.dog.id, "b");
    assert_eq!(result.breed_info.as_ref().map(|b| b.name.as_str()), Some("Beta"));
    assert!(result
        .warnings
        .contains(&"Both breeds prone to hip dysplasia - genetic counseling recommended".to_string()));
    assert!(result
        .warnings
        .contains(&"Different groups (Sporting × Toy) - varied offspring traits".to_string()));
}

#[test]
fn test_same_breed_without_breed_info() {
    let dog_a = create_dog("a", "owner-a", "Mystery", Gender::Male);
    let dog_b = create_dog("b", "owner-b", "Mystery", Gender::Female);

    let result = score_pair(&dog_a, None, &dog_b, None, &ScoringWeights::default());

    assert_eq!(result.dimension_score(Dimension::Genetics), Some(60));
    assert_eq!(result.dimension_score(Dimension::Health), Some(50));
    assert_eq!(result.dimension_score(Dimension::Size), Some(50));
    assert_eq!(result.dimension_score(Dimension::Type), Some(50));
    assert_eq!(result.dimension_score(Dimension::Cost), Some(50));
    // 17.5 + 15 + 7.5 + 9 + 2.5 = 51.5, rounded half away from zero
    assert_eq!(result.score, 52);

    assert!(result.breed_info.is_none());
    assert_eq!(result.neutral_notes.len(), 3);
    assert!(result.neutral_notes.iter().all(|note| note.starts_with("Insufficient")));
    assert_eq!(
        result.warnings,
        vec![
            "Same breed - ensure parents are not related".to_string(),
            "Consider checking pedigrees for inbreeding coefficient".to_string(),
        ]
    );
    assert!(result.benefits.is_empty());
}

#[test]
fn test_scoring_is_deterministic() {
    let dog_a = create_dog("a", "owner-a", "Alpha", Gender::Female);
    let dog_b = create_dog("b", "owner-b", "Beta", Gender::Male);
    let (alpha, beta) = (alpha(), beta());
    let weights = ScoringWeights::default();

    let first = score_pair(&dog_a, Some(&alpha), &dog_b, Some(&beta), &weights);
    let second = score_pair(&dog_a, Some(&alpha), &dog_b, Some(&beta), &weights);

    assert_eq!(first, second);
}

#[test]
fn test_reasons_follow_dimension_order() {
    let dog_a = create_dog("a", "owner-a", "Alpha", Gender::Male);
    let dog_b = create_dog("b", "owner-b", "Beta", Gender::Female);
    let (alpha, beta) = (alpha(), beta());

    let result = score_pair(&dog_a, Some(&alpha), &dog_b, Some(&beta), &ScoringWeights::default());

    let dimensions: Vec<Dimension> = result.breakdown.iter().map(|d| d.dimension).collect();
    assert_eq!(
        dimensions,
        vec![Dimension::Health, Dimension::Size, Dimension::Type, Dimension::Genetics, Dimension::Cost]
    );
    // health, size and type warnings in that order
    assert_eq!(result.warnings.len(), 3);
    assert!(result.warnings[0].starts_with("Both breeds prone to"));
    assert!(result.warnings[1].starts_with("Moderate size difference"));
    assert!(result.warnings[2].starts_with("Different groups"));
    assert_eq!(
        result.benefits,
        vec![
            "Cross-breeding provides genetic diversity".to_string(),
            "May produce hybrid vigor in offspring".to_string(),
        ]
    );
}

#[test]
fn test_score_bounds_across_breed_grid() {
    let weights = ScoringWeights::default();
    let weights_pool = ["1-5", "15-20", "40-50", "70-90", "120-160", "", "unknown"];
    let health_pool = ["", "hip dysplasia", "cancer, epilepsy, heart disease", "allergies"];

    let breeds: Vec<BreedInfo> = BreedGroup::ALL
        .iter()
        .zip(weights_pool.iter().cycle())
        .zip(health_pool.iter().cycle())
        .enumerate()
        .map(|(i, ((group, weight), health))| {
            create_breed(&format!("Breed {}", i), *group, weight, health, 500.0 * i as f64, 900.0 * i as f64)
        })
        .collect();

    for (i, a) in breeds.iter().enumerate() {
        for (j, b) in breeds.iter().enumerate() {
            let dog_a = create_dog("a", "x", &a.name, if i % 2 == 0 { Gender::Male } else { Gender::Female });
            let dog_b = create_dog("b", "y", &b.name, if j % 2 == 0 { Gender::Female } else { Gender::Male });

            for (info_a, info_b) in [(Some(a), Some(b)), (None, Some(b)), (Some(a), None), (None, None)] {
                let result = score_pair(&dog_a, info_a, &dog_b, info_b, &weights);
                assert!(result.score <= 100);
                assert!(result.breakdown.iter().all(|d| d.score <= 100));
            }
        }
    }
}

#[test]
fn test_health_shared_conditions() {
    let a = create_breed("A", BreedGroup::Working, "60-80", "Hip Dysplasia, Heart Disease, bloat", 0.0, 0.0);
    let b = create_breed("B", BreedGroup::Working, "60-80", "heart disease and hip dysplasia", 0.0, 0.0);
    let c = create_breed("C", BreedGroup::Working, "60-80", "Cancer", 0.0, 0.0);

    let multiple = calculate_health_compatibility(Some(&a), Some(&b));
    assert_eq!(multiple.score, 30);
    assert_eq!(
        multiple.reasons[0].text,
        "Multiple shared health risks: hip dysplasia, heart disease"
    );

    let none = calculate_health_compatibility(Some(&a), Some(&c));
    assert_eq!(none.score, 95);

    let missing = calculate_health_compatibility(Some(&a), None);
    assert_eq!(missing.score, 50);
    assert_eq!(missing.reasons[0].text, "Insufficient health data for comparison");
}

#[test]
fn test_size_scores_by_bucket_distance() {
    let male = create_dog("m", "x", "M", Gender::Male);
    let female = create_dog("f", "y", "F", Gender::Female);

    let toy = create_breed("Toy", BreedGroup::Toy, "4-6", "", 0.0, 0.0);
    let small = create_breed("Small", BreedGroup::Terrier, "18-22", "", 0.0, 0.0);
    let medium = create_breed("Medium", BreedGroup::Herding, "35-45", "", 0.0, 0.0);
    let large = create_breed("Large", BreedGroup::Working, "65-90", "", 0.0, 0.0);

    let score = |a: &BreedInfo, b: &BreedInfo| calculate_size_compatibility(&male, Some(a), &female, Some(b)).score;

    assert_eq!(score(&medium, &medium), 100);
    assert_eq!(score(&medium, &small), 85);
    assert_eq!(score(&medium, &toy), 60);
    // Female is the toy, male is large
    assert_eq!(score(&large, &toy), 20);
    // Female is large, male is the toy
    assert_eq!(score(&toy, &large), 40);
}

#[test]
fn test_size_female_smaller_reasons() {
    let male = create_dog("m", "x", "Large", Gender::Male);
    let female = create_dog("f", "y", "Toy", Gender::Female);
    let toy = create_breed("Toy", BreedGroup::Toy, "4-6", "", 0.0, 0.0);
    let large = create_breed("Large", BreedGroup::Working, "65-90", "", 0.0, 0.0);

    let size = calculate_size_compatibility(&male, Some(&large), &female, Some(&toy));

    let texts: Vec<&str> = size.reasons.iter().map(|r| r.text.as_str()).collect();
    assert_eq!(
        texts,
        vec![
            "Significant size mismatch - female is smaller than male",
            "High risk pregnancy - not recommended",
        ]
    );
}

#[test]
fn test_size_without_weight_data() {
    let dog_a = create_dog("a", "x", "A", Gender::Male);
    let dog_b = create_dog("b", "y", "B", Gender::Female);
    let empty = create_breed("A", BreedGroup::Hound, "", "", 0.0, 0.0);
    let unparsed = create_breed("B", BreedGroup::Hound, "varies", "", 0.0, 0.0);

    let size = calculate_size_compatibility(&dog_a, Some(&empty), &dog_b, Some(&unparsed));
    assert_eq!(size.score, 50);
    assert_eq!(size.reasons[0].text, "Insufficient size data for comparison");

    // Unparseable weight falls back to a medium-sized average
    let medium = create_breed("C", BreedGroup::Hound, "40-50", "", 0.0, 0.0);
    let size = calculate_size_compatibility(&dog_a, Some(&unparsed), &dog_b, Some(&medium));
    assert_eq!(size.score, 100);

    // Whitespace is a present but unparseable weight, not a missing one
    let blank = create_breed("D", BreedGroup::Hound, "  ", "", 0.0, 0.0);
    let size = calculate_size_compatibility(&dog_a, Some(&blank), &dog_b, Some(&medium));
    assert_eq!(size.score, 100);
}

#[test]
fn test_type_compatibility_table() {
    let breed = |group| create_breed("X", group, "", "", 0.0, 0.0);

    assert_eq!(calculate_type_compatibility(Some(&breed(BreedGroup::Hound)), Some(&breed(BreedGroup::Hound))).score, 90);
    assert_eq!(calculate_type_compatibility(Some(&breed(BreedGroup::Hound)), Some(&breed(BreedGroup::Sporting))).score, 75);
    assert_eq!(calculate_type_compatibility(Some(&breed(BreedGroup::Terrier)), Some(&breed(BreedGroup::Toy))).score, 55);

    // The table is read from the first breed's side
    assert_eq!(calculate_type_compatibility(Some(&breed(BreedGroup::NonSporting)), Some(&breed(BreedGroup::Sporting))).score, 75);
    assert_eq!(calculate_type_compatibility(Some(&breed(BreedGroup::Sporting)), Some(&breed(BreedGroup::NonSporting))).score, 55);

    let compatible = calculate_type_compatibility(Some(&breed(BreedGroup::Toy)), Some(&breed(BreedGroup::NonSporting)));
    assert_eq!(compatible.reasons[0].text, "Compatible groups (Toy × Non-Sporting)");
}

#[test]
fn test_genetic_diversity_depends_on_exact_breed_name() {
    let a = create_dog("a", "x", "Poodle", Gender::Male);
    let b = create_dog("b", "y", "Poodle", Gender::Female);
    let c = create_dog("c", "z", "poodle", Gender::Female);

    assert_eq!(calculate_genetic_diversity(&a, &b).score, 60);
    assert_eq!(calculate_genetic_diversity(&a, &c).score, 95);
}

#[test]
fn test_cost_efficiency_thresholds() {
    let breed = |expenses, price| create_breed("X", BreedGroup::Toy, "", "", expenses, price);

    assert_eq!(calculate_cost_efficiency(Some(&breed(1000.0, 3500.0)), Some(&breed(1000.0, 3500.0))).score, 90);
    assert_eq!(calculate_cost_efficiency(Some(&breed(1000.0, 2500.0)), Some(&breed(1000.0, 2500.0))).score, 75);
    assert_eq!(calculate_cost_efficiency(Some(&breed(1000.0, 1500.0)), Some(&breed(1000.0, 1500.0))).score, 60);
    assert_eq!(calculate_cost_efficiency(Some(&breed(1000.0, 1000.0)), Some(&breed(1000.0, 1000.0))).score, 45);

    // Zero upkeep with a positive price is an infinite ratio
    assert_eq!(calculate_cost_efficiency(Some(&breed(0.0, 800.0)), Some(&breed(0.0, 800.0))).score, 90);
    // Zero over zero never passes a threshold
    assert_eq!(calculate_cost_efficiency(Some(&breed(0.0, 0.0)), Some(&breed(0.0, 0.0))).score, 45);

    let missing = calculate_cost_efficiency(None, Some(&breed(1000.0, 3500.0)));
    assert_eq!(missing.score, 50);
    assert!(missing.reasons.is_empty());
}

#[test]
fn test_cost_reason_formatting() {
    let a = create_breed("A", BreedGroup::Toy, "", "", 1250.0, 12000.0);
    let b = create_breed("B", BreedGroup::Toy, "", "", 1252.0, 13000.0);

    let cost = calculate_cost_efficiency(Some(&a), Some(&b));

    assert_eq!(cost.reasons[0].text, "Expected yearly cost per puppy: $1,251");
    assert_eq!(cost.reasons[1].text, "Expected puppy value: $12,500");
}

#[test]
fn test_badge_thresholds() {
    assert_eq!(CompatibilityBadge::from_score(100), CompatibilityBadge::Excellent);
    assert_eq!(CompatibilityBadge::from_score(85), CompatibilityBadge::Excellent);
    assert_eq!(CompatibilityBadge::from_score(84), CompatibilityBadge::Good);
    assert_eq!(CompatibilityBadge::from_score(70), CompatibilityBadge::Good);
    assert_eq!(CompatibilityBadge::from_score(69), CompatibilityBadge::Fair);
    assert_eq!(CompatibilityBadge::from_score(55), CompatibilityBadge::Fair);
    assert_eq!(CompatibilityBadge::from_score(54), CompatibilityBadge::Poor);
    assert_eq!(CompatibilityBadge::from_score(0), CompatibilityBadge::Poor);
}

#[test]
fn test_breed_key_canonicalization() {
    assert_eq!(breed_key("German Shepherd Dog"), "german-shepherd-dog");
    assert_eq!(breed_key("Cavalier  King\tCharles Spaniel"), "cavalier-king-charles-spaniel");
    assert_eq!(breed_key("St. Bernard"), "st-bernard");
}

#[test]
fn test_custom_weights_change_aggregate() {
    let dog_a = create_dog("a", "x", "Alpha", Gender::Male);
    let dog_b = create_dog("b", "y", "Beta", Gender::Female);
    let (alpha, beta) = (alpha(), beta());

    let genetics_only = ScoringWeights {
        health: 0.0,
        size: 0.0,
        breed_group: 0.0,
        genetics: 1.0,
        cost: 0.0,
    };
    assert!(genetics_only.validate().is_ok());

    let result = score_pair(&dog_a, Some(&alpha), &dog_b, Some(&beta), &genetics_only);
    assert_eq!(result.score, 95);
}
