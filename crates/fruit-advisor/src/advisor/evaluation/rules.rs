use super::super::domain::{
    DietaryPreference, FitnessGoal, Gender, HealthCondition, Nutrition, Profile,
};

pub(crate) const SENIOR_AGE: u32 = 60;
const YOUTH_AGE: u32 = 18;
const SENIOR_MAX_SUGAR: f64 = 10.0;
const YOUTH_MIN_CALORIES: f64 = 40.0;
const FEMALE_MIN_VITAMIN_C: f64 = 5.0;
pub(crate) const DIABETES_MAX_SUGAR: f64 = 8.0;
const HYPERTENSION_MAX_CALORIES: f64 = 60.0;
const ALLERGEN_PREFIX: &str = "Strawberry";
const KETO_MAX_SUGAR: f64 = 6.0;
const VEGAN_MIN_VITAMIN_C: f64 = 10.0;
const VEGETARIAN_MIN_VITAMIN_C: f64 = 5.0;
pub(crate) const WEIGHT_LOSS_MAX_CALORIES: f64 = 55.0;
const MUSCLE_GAIN_MIN_CALORIES: f64 = 50.0;
pub(crate) const MUSCLE_GAIN_MIN_VITAMIN_C: f64 = 8.0;

/// First rule a fruit failed, kept for diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub enum RuleViolation {
    SeniorSugar { sugar: f64 },
    YouthCalories { calories: f64 },
    FemaleVitaminC { vitamin_c: f64 },
    Diabetes { sugar: f64 },
    Hypertension { calories: f64 },
    Allergen,
    Keto { sugar: f64 },
    Vegan { vitamin_c: f64 },
    Vegetarian { vitamin_c: f64 },
    WeightLoss { calories: f64 },
    MuscleGain { calories: f64, vitamin_c: f64 },
}

impl RuleViolation {
    pub fn summary(&self) -> String {
        match self {
            RuleViolation::SeniorSugar { sugar } => {
                format!("senior age rule (sugar {sugar} > {SENIOR_MAX_SUGAR})")
            }
            RuleViolation::YouthCalories { calories } => {
                format!("young age rule (calories {calories} < {YOUTH_MIN_CALORIES})")
            }
            RuleViolation::FemaleVitaminC { vitamin_c } => format!(
                "female gender rule (vitaminC {vitamin_c} < {FEMALE_MIN_VITAMIN_C})"
            ),
            RuleViolation::Diabetes { sugar } => {
                format!("diabetes rule (sugar {sugar} > {DIABETES_MAX_SUGAR})")
            }
            RuleViolation::Hypertension { calories } => format!(
                "hypertension rule (calories {calories} > {HYPERTENSION_MAX_CALORIES})"
            ),
            RuleViolation::Allergen => format!("allergies rule ({ALLERGEN_PREFIX})"),
            RuleViolation::Keto { sugar } => format!("keto rule (sugar {sugar} > {KETO_MAX_SUGAR})"),
            RuleViolation::Vegan { vitamin_c } => {
                format!("vegan rule (vitaminC {vitamin_c} < {VEGAN_MIN_VITAMIN_C})")
            }
            RuleViolation::Vegetarian { vitamin_c } => format!(
                "vegetarian rule (vitaminC {vitamin_c} < {VEGETARIAN_MIN_VITAMIN_C})"
            ),
            RuleViolation::WeightLoss { calories } => format!(
                "weight loss rule (calories {calories} > {WEIGHT_LOSS_MAX_CALORIES})"
            ),
            RuleViolation::MuscleGain {
                calories,
                vitamin_c,
            } => format!(
                "muscle gain rule (calories {calories} < {MUSCLE_GAIN_MIN_CALORIES} or vitaminC {vitamin_c} < {MUSCLE_GAIN_MIN_VITAMIN_C})"
            ),
        }
    }
}

pub(crate) fn check_profile(fruit: &Nutrition, profile: &Profile) -> Result<(), RuleViolation> {
    check_age(fruit, profile.age)?;
    check_gender(fruit, &profile.gender)?;
    for condition in &profile.health_conditions {
        check_condition(fruit, condition)?;
    }
    check_diet(fruit, &profile.dietary_preference)?;
    check_goal(fruit, &profile.fitness_goal)
}

fn check_age(fruit: &Nutrition, age: u32) -> Result<(), RuleViolation> {
    if age > SENIOR_AGE {
        if fruit.sugar_grams() > SENIOR_MAX_SUGAR {
            return Err(RuleViolation::SeniorSugar {
                sugar: fruit.sugar_grams(),
            });
        }
    } else if age < YOUTH_AGE && fruit.calories() < YOUTH_MIN_CALORIES {
        return Err(RuleViolation::YouthCalories {
            calories: fruit.calories(),
        });
    }

    Ok(())
}

fn check_gender(fruit: &Nutrition, gender: &Gender) -> Result<(), RuleViolation> {
    match gender {
        Gender::Female if fruit.vitamin_c_mg() < FEMALE_MIN_VITAMIN_C => {
            Err(RuleViolation::FemaleVitaminC {
                vitamin_c: fruit.vitamin_c_mg(),
            })
        }
        Gender::Female | Gender::Male | Gender::Other(_) => Ok(()),
    }
}

fn check_condition(fruit: &Nutrition, condition: &HealthCondition) -> Result<(), RuleViolation> {
    match condition {
        HealthCondition::Diabetes if fruit.sugar_grams() > DIABETES_MAX_SUGAR => {
            Err(RuleViolation::Diabetes {
                sugar: fruit.sugar_grams(),
            })
        }
        HealthCondition::Hypertension if fruit.calories() > HYPERTENSION_MAX_CALORIES => {
            Err(RuleViolation::Hypertension {
                calories: fruit.calories(),
            })
        }
        HealthCondition::Allergies if fruit.name().starts_with(ALLERGEN_PREFIX) => {
            Err(RuleViolation::Allergen)
        }
        HealthCondition::Diabetes
        | HealthCondition::Hypertension
        | HealthCondition::Allergies
        | HealthCondition::Other(_) => Ok(()),
    }
}

fn check_diet(fruit: &Nutrition, preference: &DietaryPreference) -> Result<(), RuleViolation> {
    match preference {
        DietaryPreference::Keto if fruit.sugar_grams() > KETO_MAX_SUGAR => {
            Err(RuleViolation::Keto {
                sugar: fruit.sugar_grams(),
            })
        }
        DietaryPreference::Vegan if fruit.vitamin_c_mg() < VEGAN_MIN_VITAMIN_C => {
            Err(RuleViolation::Vegan {
                vitamin_c: fruit.vitamin_c_mg(),
            })
        }
        DietaryPreference::Vegetarian if fruit.vitamin_c_mg() < VEGETARIAN_MIN_VITAMIN_C => {
            Err(RuleViolation::Vegetarian {
                vitamin_c: fruit.vitamin_c_mg(),
            })
        }
        DietaryPreference::Keto
        | DietaryPreference::Vegan
        | DietaryPreference::Vegetarian
        | DietaryPreference::Unspecified
        | DietaryPreference::Other(_) => Ok(()),
    }
}

fn check_goal(fruit: &Nutrition, goal: &FitnessGoal) -> Result<(), RuleViolation> {
    match goal {
        FitnessGoal::WeightLoss if fruit.calories() > WEIGHT_LOSS_MAX_CALORIES => {
            Err(RuleViolation::WeightLoss {
                calories: fruit.calories(),
            })
        }
        FitnessGoal::MuscleGain
            if fruit.calories() < MUSCLE_GAIN_MIN_CALORIES
                || fruit.vitamin_c_mg() < MUSCLE_GAIN_MIN_VITAMIN_C =>
        {
            Err(RuleViolation::MuscleGain {
                calories: fruit.calories(),
                vitamin_c: fruit.vitamin_c_mg(),
            })
        }
        FitnessGoal::WeightLoss
        | FitnessGoal::MuscleGain
        | FitnessGoal::Unspecified
        | FitnessGoal::Other(_) => Ok(()),
    }
}
