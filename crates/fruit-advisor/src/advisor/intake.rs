use super::domain::{Profile, ProfileSubmission};

/// Validation errors raised before any recommendation logic runs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileViolation {
    #[error("name is required")]
    MissingName,
    #[error("age must be a positive number")]
    InvalidAge,
}

/// A submission that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptedProfile {
    pub name: String,
    pub profile: Profile,
}

/// Guard responsible for turning raw submissions into `Profile` values.
#[derive(Debug, Clone, Default)]
pub struct ProfileGuard;

impl ProfileGuard {
    pub fn accept(
        &self,
        submission: ProfileSubmission,
    ) -> Result<AcceptedProfile, ProfileViolation> {
        let name = submission
            .name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .ok_or(ProfileViolation::MissingName)?
            .to_string();

        let age = submission
            .age
            .as_ref()
            .and_then(serde_json::Number::as_u64)
            .filter(|age| *age > 0)
            .and_then(|age| u32::try_from(age).ok())
            .ok_or(ProfileViolation::InvalidAge)?;

        let profile = Profile {
            age,
            gender: submission.gender.unwrap_or_default(),
            fitness_goal: submission.fitness_goal.unwrap_or_default(),
            dietary_preference: submission.dietary_preference.unwrap_or_default(),
            health_conditions: submission.health_conditions.into_iter().collect(),
        };

        Ok(AcceptedProfile { name, profile })
    }
}
