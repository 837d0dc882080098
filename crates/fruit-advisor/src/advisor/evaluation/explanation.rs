use super::super::domain::{FitnessGoal, Gender, HealthCondition, Nutrition, Profile};
use super::rules::{
    DIABETES_MAX_SUGAR, MUSCLE_GAIN_MIN_VITAMIN_C, SENIOR_AGE, WEIGHT_LOSS_MAX_CALORIES,
};

// Explanation-only cutoffs with no matching rejection rule.
const SENIOR_IMMUNE_VITAMIN_C: f64 = 20.0;
const FEMALE_PRAISE_VITAMIN_C: f64 = 10.0;

const HIGH_VITAMIN_C: f64 = 20.0;
const GOOD_VITAMIN_C: f64 = 10.0;
const LOW_CALORIE: f64 = 50.0;
const ENERGY_RICH_CALORIES: f64 = 70.0;
const LOW_SUGAR: f64 = 6.0;
const NATURAL_SUGARS: f64 = 12.0;

const FALLBACK_REASON: &str = "nutritionally balanced for your profile";

/// Comma-joined rationale for recommending `fruit` to `profile`.
///
/// Clauses are checked independently of the rule verdict and always appear in
/// the same order.
pub fn explain(fruit: &Nutrition, profile: &Profile) -> String {
    let mut reasons = Vec::new();

    if profile.fitness_goal == FitnessGoal::WeightLoss
        && fruit.calories() <= WEIGHT_LOSS_MAX_CALORIES
    {
        reasons.push("low in calories for weight management");
    }

    if profile.fitness_goal == FitnessGoal::MuscleGain
        && fruit.vitamin_c_mg() >= MUSCLE_GAIN_MIN_VITAMIN_C
    {
        reasons.push("high vitamin C supports muscle recovery");
    }

    if !profile.has_condition(&HealthCondition::Diabetes)
        && fruit.sugar_grams() <= DIABETES_MAX_SUGAR
    {
        reasons.push("moderate sugar content");
    }

    if profile.age > SENIOR_AGE && fruit.vitamin_c_mg() > SENIOR_IMMUNE_VITAMIN_C {
        reasons.push("high vitamin C supports immune system");
    }

    if profile.gender == Gender::Female && fruit.vitamin_c_mg() > FEMALE_PRAISE_VITAMIN_C {
        reasons.push("excellent vitamin C for women's health");
    }

    if profile.dietary_preference.is_plant_based() {
        reasons.push("perfect for plant-based diet");
    }

    if reasons.is_empty() {
        reasons.push(FALLBACK_REASON);
    }

    reasons.join(", ")
}

/// Benefit tags derived from the nutrition values alone.
pub fn benefits(fruit: &Nutrition) -> Vec<String> {
    let mut tags = Vec::with_capacity(5);

    if fruit.vitamin_c_mg() > HIGH_VITAMIN_C {
        tags.push("High Vitamin C");
    } else if fruit.vitamin_c_mg() > GOOD_VITAMIN_C {
        tags.push("Good Vitamin C");
    }

    if fruit.calories() < LOW_CALORIE {
        tags.push("Low Calorie");
    } else if fruit.calories() > ENERGY_RICH_CALORIES {
        tags.push("Energy Rich");
    }

    if fruit.sugar_grams() < LOW_SUGAR {
        tags.push("Low Sugar");
    } else if fruit.sugar_grams() > NATURAL_SUGARS {
        tags.push("Natural Sugars");
    }

    tags.push("Antioxidants");
    tags.push("Fiber");

    tags.into_iter().map(str::to_string).collect()
}
