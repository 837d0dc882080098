use super::common::*;
use crate::advisor::domain::{DietaryPreference, FitnessGoal, HealthCondition};
use crate::advisor::pipeline::{rank, recommend, try_recommend, RECOMMENDATION_LIMIT};

#[test]
fn adult_woman_gets_top_five_by_vitamin_c() {
    let recommendations = recommend(&female(25), &catalog_labels(), lookup);

    assert_eq!(
        recommended_fruits(&recommendations),
        [
            "Strawberry_Ripe",
            "Orange_Ripe",
            "Orange_Unripe",
            "Strawberry_Overripe",
            "Mango_Ripe",
        ]
    );
}

#[test]
fn senior_list_drops_sugary_fruit() {
    let recommendations = recommend(&male(70), &catalog_labels(), lookup);

    assert_eq!(
        recommended_fruits(&recommendations),
        [
            "Strawberry_Ripe",
            "Orange_Ripe",
            "Orange_Unripe",
            "Strawberry_Overripe",
            "Orange_Overripe",
        ]
    );
    assert_eq!(
        recommendations[0].reason,
        "moderate sugar content, high vitamin C supports immune system"
    );
    assert!(recommendations
        .iter()
        .all(|recommendation| recommendation.nutrition.sugar <= 10.0));
}

#[test]
fn ties_keep_catalog_order() {
    let candidates = vec![
        fruit("First", 1.0, 50.0, 40.0),
        fruit("Second", 1.0, 50.0, 40.0),
        fruit("Third", 1.0, 50.0, 41.0),
    ];

    let recommendations = rank(&male(30), candidates);

    assert_eq!(
        recommended_fruits(&recommendations),
        ["Third", "First", "Second"]
    );
}

#[test]
fn never_returns_more_than_the_limit() {
    let recommendations = recommend(&male(30), &catalog_labels(), lookup);

    assert_eq!(recommendations.len(), RECOMMENDATION_LIMIT);
    for pair in recommendations.windows(2) {
        assert!(pair[0].nutrition.vitamin_c >= pair[1].nutrition.vitamin_c);
    }
}

#[test]
fn unknown_labels_are_skipped() {
    let labels = ["Kiwi_Ripe", "Orange_Ripe", "Durian_Ripe"];

    let recommendations = recommend(&male(30), &labels, lookup);

    assert_eq!(recommended_fruits(&recommendations), ["Orange_Ripe"]);
}

#[test]
fn stacked_constraints_narrow_the_list() {
    let profile = with_goal(
        with_diet(male(30), DietaryPreference::Keto),
        FitnessGoal::MuscleGain,
    );
    let profile = with_condition(profile, HealthCondition::Allergies);

    let recommendations = recommend(&profile, &catalog_labels(), lookup);

    assert_eq!(
        recommended_fruits(&recommendations),
        ["Mango_Unripe", "Banana_Unripe"]
    );
}

#[test]
fn no_survivors_is_an_empty_list() {
    let labels = ["Apple_Unripe", "Apple_Ripe", "Apple_Overripe", "Dragonfruit_Ripe"];

    let recommendations = recommend(&female(30), &labels, lookup);

    assert!(recommendations.is_empty());
}

#[test]
fn recommendations_carry_reason_benefits_and_facts() {
    let profile = with_diet(female(25), DietaryPreference::Vegan);

    let recommendations = recommend(&profile, &["Orange_Ripe"], lookup);

    assert_eq!(recommendations.len(), 1);
    let orange = &recommendations[0];
    assert_eq!(
        orange.reason,
        "excellent vitamin C for women's health, perfect for plant-based diet"
    );
    assert_eq!(
        orange.nutritional_benefits,
        ["High Vitamin C", "Low Calorie", "Antioxidants", "Fiber"]
    );
    assert_eq!(orange.nutrition, catalog_fruit("Orange_Ripe").facts());
}

#[test]
fn repeated_runs_are_identical() {
    let profile = with_condition(female(45), HealthCondition::Hypertension);

    let first = recommend(&profile, &catalog_labels(), lookup);
    let second = recommend(&profile, &catalog_labels(), lookup);

    assert_eq!(first, second);
}

#[test]
fn empty_catalog_is_an_empty_list() {
    let recommendations = recommend(&male(30), &[] as &[&str], lookup);

    assert!(recommendations.is_empty());
}

#[test]
fn unresolvable_catalog_is_an_empty_list() {
    let recommendations = recommend(&male(30), &["Kiwi", "Papaya_Ripe"], |_: &str| None);
    assert!(recommendations.is_empty());

    let unknown_only = recommend(&female(25), &["Kiwi"], lookup);
    assert!(unknown_only.is_empty());
}

#[test]
fn lookup_error_stops_resolution() {
    let mut seen = Vec::new();
    let outcome = try_recommend(
        &female(25),
        &["Orange_Ripe", "Broken", "Strawberry_Ripe"],
        |label| {
            seen.push(label.to_string());
            if label == "Broken" {
                Err("store offline")
            } else {
                Ok(lookup(label))
            }
        },
    );

    assert_eq!(outcome, Err("store offline"));
    assert_eq!(seen, ["Orange_Ripe", "Broken"]);
}

#[test]
fn fallible_lookup_matches_infallible_ranking() {
    let labels = catalog_labels();
    let fallible = try_recommend(&female(25), &labels, |label| Ok::<_, ()>(lookup(label)))
        .expect("no lookup fails");

    assert_eq!(fallible, recommend(&female(25), &labels, lookup));
}
