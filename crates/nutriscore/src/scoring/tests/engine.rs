use super::common::{cereal_profile, profile};
use crate::scoring::{
    compute_score_and_grade, evaluate, NutriGrade, NutrientKind, PointsCategory,
};

#[test]
fn cereal_profile_scores_minus_three_grade_a() {
    let outcome = evaluate(&cereal_profile());

    assert_eq!(outcome.points_to_limit, 4);
    assert_eq!(outcome.points_to_favor, 7);
    assert_eq!(outcome.score, -3);
    assert_eq!(outcome.grade, NutriGrade::A);
}

#[test]
fn outcome_carries_one_component_per_nutrient() {
    let outcome = evaluate(&cereal_profile());

    assert_eq!(outcome.components.len(), 6);
    for (component, kind) in outcome.components.iter().zip(NutrientKind::ordered()) {
        assert_eq!(component.nutrient, kind);
        assert_eq!(component.category, kind.category());
        assert!(component.tier <= kind.max_tier());
        assert!(component.notes.contains(kind.label()));
    }

    let limit_total: u8 = outcome
        .components
        .iter()
        .filter(|component| component.category == PointsCategory::Limit)
        .map(|component| component.tier)
        .sum();
    assert_eq!(limit_total, outcome.points_to_limit);
}

#[test]
fn evaluation_is_deterministic() {
    let first = evaluate(&cereal_profile());
    let second = evaluate(&cereal_profile());
    assert_eq!(first, second);
}

#[test]
fn score_and_grade_wrapper_agrees_with_the_full_outcome() {
    let outcome = evaluate(&cereal_profile());
    let (score, grade) = compute_score_and_grade(500.0, 2.0, 5.0, 3.0, 5.0, 100.0);

    assert_eq!(score, outcome.score);
    assert_eq!(grade, outcome.grade);
}

#[test]
fn zero_profile_scores_zero_grade_b() {
    let outcome = evaluate(&profile(0.0, 0.0, 0.0, 0.0, 0.0, 0.0));

    assert_eq!(outcome.points_to_limit, 0);
    assert_eq!(outcome.points_to_favor, 0);
    assert_eq!(outcome.score, 0);
    assert_eq!(outcome.grade, NutriGrade::B);
}

#[test]
fn worst_case_profile_reaches_the_score_ceiling() {
    let outcome = evaluate(&profile(5000.0, 50.0, 80.0, 0.0, 0.0, 2000.0));

    assert_eq!(outcome.points_to_limit, 40);
    assert_eq!(outcome.points_to_favor, 0);
    assert_eq!(outcome.score, 40);
    assert_eq!(outcome.grade, NutriGrade::E);
}

#[test]
fn best_case_profile_reaches_the_score_floor() {
    let outcome = evaluate(&profile(0.0, 0.0, 0.0, 10.0, 20.0, 0.0));

    assert_eq!(outcome.points_to_limit, 0);
    assert_eq!(outcome.points_to_favor, 10);
    assert_eq!(outcome.score, -10);
    assert_eq!(outcome.grade, NutriGrade::A);
}

#[test]
fn grade_always_matches_the_score_in_the_same_outcome() {
    let profiles = [
        cereal_profile(),
        profile(1200.0, 6.0, 22.0, 0.5, 2.0, 700.0),
        profile(2500.0, 9.5, 44.0, 1.4, 8.0, 450.0),
        profile(100.0, 0.2, 1.0, 4.0, 9.0, 20.0),
    ];

    for sample in profiles {
        let outcome = evaluate(&sample);
        assert_eq!(outcome.grade, NutriGrade::from_score(outcome.score));
    }
}
