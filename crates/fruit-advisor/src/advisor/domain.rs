use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Macro nutrition facts for a single catalog label.
#[derive(Debug, Clone, PartialEq)]
pub struct Nutrition {
    name: String,
    sugar_grams: f64,
    calories: f64,
    vitamin_c_mg: f64,
}

impl Nutrition {
    pub fn new(
        name: impl Into<String>,
        sugar_grams: f64,
        calories: f64,
        vitamin_c_mg: f64,
    ) -> Result<Self, InvalidNutrition> {
        for (field, value) in [
            ("sugar", sugar_grams),
            ("calories", calories),
            ("vitaminC", vitamin_c_mg),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(InvalidNutrition { field, value });
            }
        }

        Ok(Self {
            name: name.into(),
            sugar_grams,
            calories,
            vitamin_c_mg,
        })
    }

    pub(crate) fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sugar_grams(&self) -> f64 {
        self.sugar_grams
    }

    pub fn calories(&self) -> f64 {
        self.calories
    }

    pub fn vitamin_c_mg(&self) -> f64 {
        self.vitamin_c_mg
    }

    pub fn facts(&self) -> NutritionFacts {
        NutritionFacts {
            calories: self.calories,
            sugar: self.sugar_grams,
            vitamin_c: self.vitamin_c_mg,
        }
    }
}

/// Raised when a nutrition value is negative or not a finite number.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{field} must be a non-negative number (found {value})")]
pub struct InvalidNutrition {
    pub field: &'static str,
    pub value: f64,
}

/// Wire shape of the nutrition block attached to each recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutritionFacts {
    pub calories: f64,
    pub sugar: f64,
    #[serde(rename = "vitaminC")]
    pub vitamin_c: f64,
}

/// Accepted, explained catalog entry. Position in the returned list is its rank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub fruit: String,
    pub reason: String,
    pub nutritional_benefits: Vec<String>,
    pub nutrition: NutritionFacts,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Gender {
    #[default]
    Female,
    Male,
    Other(String),
}

impl Gender {
    pub fn label(&self) -> &str {
        match self {
            Gender::Female => "Female",
            Gender::Male => "Male",
            Gender::Other(raw) => raw,
        }
    }
}

impl From<String> for Gender {
    fn from(value: String) -> Self {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("female") {
            Gender::Female
        } else if trimmed.eq_ignore_ascii_case("male") {
            Gender::Male
        } else {
            Gender::Other(trimmed.to_string())
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FitnessGoal {
    WeightLoss,
    MuscleGain,
    /// Wire label `"None"`.
    #[default]
    Unspecified,
    Other(String),
}

impl FitnessGoal {
    pub fn label(&self) -> &str {
        match self {
            FitnessGoal::WeightLoss => "Weight Loss",
            FitnessGoal::MuscleGain => "Muscle Gain",
            FitnessGoal::Unspecified => "None",
            FitnessGoal::Other(raw) => raw,
        }
    }
}

impl From<String> for FitnessGoal {
    fn from(value: String) -> Self {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("none") {
            FitnessGoal::Unspecified
        } else if trimmed.eq_ignore_ascii_case("weight loss") {
            FitnessGoal::WeightLoss
        } else if trimmed.eq_ignore_ascii_case("muscle gain") {
            FitnessGoal::MuscleGain
        } else {
            FitnessGoal::Other(trimmed.to_string())
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DietaryPreference {
    Keto,
    Vegan,
    Vegetarian,
    /// Wire label `"None"`.
    #[default]
    Unspecified,
    Other(String),
}

impl DietaryPreference {
    pub fn label(&self) -> &str {
        match self {
            DietaryPreference::Keto => "Keto",
            DietaryPreference::Vegan => "Vegan",
            DietaryPreference::Vegetarian => "Vegetarian",
            DietaryPreference::Unspecified => "None",
            DietaryPreference::Other(raw) => raw,
        }
    }

    pub fn is_plant_based(&self) -> bool {
        matches!(self, DietaryPreference::Vegan | DietaryPreference::Vegetarian)
    }
}

impl From<String> for DietaryPreference {
    fn from(value: String) -> Self {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("none") {
            DietaryPreference::Unspecified
        } else if trimmed.eq_ignore_ascii_case("keto") {
            DietaryPreference::Keto
        } else if trimmed.eq_ignore_ascii_case("vegan") {
            DietaryPreference::Vegan
        } else if trimmed.eq_ignore_ascii_case("vegetarian") {
            DietaryPreference::Vegetarian
        } else {
            DietaryPreference::Other(trimmed.to_string())
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum HealthCondition {
    Diabetes,
    Hypertension,
    Allergies,
    Other(String),
}

impl HealthCondition {
    pub fn label(&self) -> &str {
        match self {
            HealthCondition::Diabetes => "Diabetes",
            HealthCondition::Hypertension => "Hypertension",
            HealthCondition::Allergies => "Allergies",
            HealthCondition::Other(raw) => raw,
        }
    }
}

impl From<String> for HealthCondition {
    fn from(value: String) -> Self {
        let trimmed = value.trim();
        if trimmed.eq_ignore_ascii_case("diabetes") {
            HealthCondition::Diabetes
        } else if trimmed.eq_ignore_ascii_case("hypertension") {
            HealthCondition::Hypertension
        } else if trimmed.eq_ignore_ascii_case("allergies") {
            HealthCondition::Allergies
        } else {
            HealthCondition::Other(trimmed.to_string())
        }
    }
}

macro_rules! label_conversions {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl From<$ty> for String {
                fn from(value: $ty) -> Self {
                    value.label().to_string()
                }
            }

            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.label())
                }
            }
        )+
    };
}

label_conversions!(Gender, FitnessGoal, DietaryPreference, HealthCondition);

/// Validated personalization inputs for a single request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub age: u32,
    pub gender: Gender,
    pub fitness_goal: FitnessGoal,
    pub dietary_preference: DietaryPreference,
    pub health_conditions: BTreeSet<HealthCondition>,
}

impl Profile {
    /// Profile with the given age and every other field at its default.
    pub fn with_age(age: u32) -> Self {
        Self {
            age,
            gender: Gender::default(),
            fitness_goal: FitnessGoal::default(),
            dietary_preference: DietaryPreference::default(),
            health_conditions: BTreeSet::new(),
        }
    }

    pub fn has_condition(&self, condition: &HealthCondition) -> bool {
        self.health_conditions.contains(condition)
    }
}

/// Raw profile payload as received from clients, prior to validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSubmission {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub age: Option<serde_json::Number>,
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub fitness_goal: Option<FitnessGoal>,
    #[serde(default)]
    pub dietary_preference: Option<DietaryPreference>,
    #[serde(default)]
    pub health_conditions: Vec<HealthCondition>,
}

/// Echo of the accepted profile, defaults applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileView {
    pub name: String,
    #[serde(flatten)]
    pub profile: Profile,
}

/// Response body for a profile submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub success: bool,
    pub message: String,
    pub profile: ProfileView,
    pub recommendations: Vec<Recommendation>,
}
