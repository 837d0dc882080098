use crate::infra::load_advisor;
use clap::Args;
use fruit_advisor::advisor::{
    DietaryPreference, FitnessGoal, Gender, HealthCondition, Nutrition, NutritionView,
    ProfileResponse, ProfileSubmission,
};
use fruit_advisor::config::AppConfig;
use fruit_advisor::error::AppError;

#[derive(Args, Debug)]
pub(crate) struct RecommendArgs {
    /// Name echoed in the summary line
    #[arg(long, default_value = "cli")]
    pub(crate) name: String,
    /// Age in whole years
    #[arg(long)]
    pub(crate) age: u64,
    /// Female (default), Male, or any other value
    #[arg(long)]
    pub(crate) gender: Option<String>,
    /// "Weight Loss", "Muscle Gain", or "None"
    #[arg(long)]
    pub(crate) fitness_goal: Option<String>,
    /// Keto, Vegan, Vegetarian, or "None"
    #[arg(long)]
    pub(crate) dietary_preference: Option<String>,
    /// Repeat for each condition (Diabetes, Hypertension, Allergies)
    #[arg(long = "health-condition")]
    pub(crate) health_conditions: Vec<String>,
    /// Print the response as JSON instead of a table
    #[arg(long)]
    pub(crate) json: bool,
}

impl RecommendArgs {
    fn into_submission(self) -> ProfileSubmission {
        ProfileSubmission {
            name: Some(self.name),
            age: Some(self.age.into()),
            gender: self.gender.map(Gender::from),
            fitness_goal: self.fitness_goal.map(FitnessGoal::from),
            dietary_preference: self.dietary_preference.map(DietaryPreference::from),
            health_conditions: self
                .health_conditions
                .into_iter()
                .map(HealthCondition::from)
                .collect(),
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct NutritionArgs {
    /// Fruit label, e.g. Orange_Ripe
    pub(crate) fruit: String,
    /// Print the facts as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let advisor = load_advisor(&config.catalog)?;
    let as_json = args.json;

    let response = advisor.submit_profile(args.into_submission())?;

    if as_json {
        match serde_json::to_string_pretty(&response) {
            Ok(json) => println!("{json}"),
            Err(err) => println!("Recommendation payload unavailable: {err}"),
        }
    } else {
        print!("{}", render_recommendations(&response));
    }
    Ok(())
}

pub(crate) fn run_nutrition(args: NutritionArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let advisor = load_advisor(&config.catalog)?;

    let nutrition = advisor.nutrition(&args.fruit)?;

    if args.json {
        match serde_json::to_string_pretty(&NutritionView::from(nutrition)) {
            Ok(json) => println!("{json}"),
            Err(err) => println!("Nutrition payload unavailable: {err}"),
        }
    } else {
        print!("{}", render_nutrition(&nutrition));
    }
    Ok(())
}

pub(crate) fn render_recommendations(response: &ProfileResponse) -> String {
    let profile = &response.profile.profile;
    let conditions = if profile.health_conditions.is_empty() {
        "none".to_string()
    } else {
        profile
            .health_conditions
            .iter()
            .map(HealthCondition::label)
            .collect::<Vec<_>>()
            .join(", ")
    };

    let mut out = format!(
        "{}\nAge {} | {} | goal: {} | diet: {} | conditions: {}\n",
        response.message,
        profile.age,
        profile.gender,
        profile.fitness_goal,
        profile.dietary_preference,
        conditions
    );

    if response.recommendations.is_empty() {
        out.push_str("\nNo fruit in the catalog suits this profile.\n");
        return out;
    }

    out.push_str("\nRecommendations\n");
    for (rank, recommendation) in response.recommendations.iter().enumerate() {
        let facts = &recommendation.nutrition;
        out.push_str(&format!(
            "{:>2}. {:<20} vitamin C {:>5.1} mg | {:>5.1} kcal | sugar {:>4.1} g\n",
            rank + 1,
            recommendation.fruit,
            facts.vitamin_c,
            facts.calories,
            facts.sugar
        ));
        out.push_str(&format!("    why: {}\n", recommendation.reason));
        out.push_str(&format!(
            "    benefits: {}\n",
            recommendation.nutritional_benefits.join(", ")
        ));
    }
    out
}

pub(crate) fn render_nutrition(nutrition: &Nutrition) -> String {
    format!(
        "{}\n  calories:  {} kcal\n  sugar:     {} g\n  vitamin C: {} mg\n",
        nutrition.name(),
        nutrition.calories(),
        nutrition.sugar_grams(),
        nutrition.vitamin_c_mg()
    )
}
