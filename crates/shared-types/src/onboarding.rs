use serde::{Deserialize, Serialize};

/// Number of steps in the onboarding wizard.
pub const TOTAL_STEPS: u8 = 4;

/// Lowercased substrings that mark a location as a known tech hub.
pub const TECH_HUBS: &[&str] = &["san francisco", "seattle", "austin", "new york"];

/// Share of regional jobs that are in tech, reported for every hub.
///
/// A single mock figure stands in for the real regional-statistics lookup.
pub const TECH_JOB_SHARE_PCT: f64 = 12.3;

/// Everything the onboarding wizard collects before creating a profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OnboardingForm {
    pub full_name: String,
    pub email: String,
    pub location: String,
    pub skills: Vec<String>,
    pub career_goals: String,
}

impl OnboardingForm {
    /// Whether the fields required by the given step are filled in.
    ///
    /// Blank means empty after trimming; a skills selection counts as
    /// filled once it is non-empty. Steps outside `1..=TOTAL_STEPS` are
    /// never valid.
    pub fn step_valid(&self, step: u8) -> bool {
        match step {
            1 => !self.full_name.trim().is_empty() && !self.email.trim().is_empty(),
            2 => !self.location.trim().is_empty(),
            3 => !self.skills.is_empty(),
            4 => !self.career_goals.trim().is_empty(),
            _ => false,
        }
    }
}

/// Result of asking the wizard to move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The current step's required fields are incomplete; nothing moved.
    Blocked,
    /// Moved to the next step.
    Moved,
    /// Advanced past the final step; the caller should finish onboarding.
    Completed,
}

/// Linear step machine driving the onboarding flow.
///
/// `step` stays within `[1, TOTAL_STEPS]`; skipping steps is not possible.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wizard {
    pub step: u8,
    pub form: OnboardingForm,
}

impl Default for Wizard {
    fn default() -> Self {
        Self {
            step: 1,
            form: OnboardingForm::default(),
        }
    }
}

impl Wizard {
    /// Whether the current step's required fields are complete.
    pub fn can_advance(&self) -> bool {
        self.form.step_valid(self.step)
    }

    /// Move forward one step, or report completion from the final step.
    pub fn advance(&mut self) -> StepOutcome {
        if !self.can_advance() {
            return StepOutcome::Blocked;
        }
        if self.step < TOTAL_STEPS {
            self.step += 1;
            StepOutcome::Moved
        } else {
            StepOutcome::Completed
        }
    }

    /// Move back one step, flooring at step 1.
    pub fn retreat(&mut self) {
        if self.step > 1 {
            self.step -= 1;
        }
    }

    /// Completion percentage for the progress bar.
    pub fn progress(&self) -> f64 {
        (self.step as f64 / TOTAL_STEPS as f64) * 100.0
    }
}

/// Outcome of the simulated tech-hub lookup for a hub location.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TechHubReport {
    pub tech_job_share: f64,
}

/// Simulated regional lookup: match the location against known hubs.
///
/// Returns `None` for locations outside the fixed hub list. Matching is
/// case-insensitive substring search, so "Greater Seattle Area" counts.
pub fn check_tech_hub(location: &str) -> Option<TechHubReport> {
    let needle = location.to_lowercase();
    TECH_HUBS
        .iter()
        .any(|hub| needle.contains(hub))
        .then_some(TechHubReport {
            tech_job_share: TECH_JOB_SHARE_PCT,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn filled_form() -> OnboardingForm {
        OnboardingForm {
            full_name: "Sarah Johnson".into(),
            email: "sarah@example.com".into(),
            location: "Portland, OR".into(),
            skills: vec!["Python".into()],
            career_goals: "Move into technical leadership".into(),
        }
    }

    #[test]
    fn step_one_requires_name_and_email() {
        let mut form = filled_form();
        assert!(form.step_valid(1));

        form.full_name = "   ".into();
        assert!(!form.step_valid(1));

        form.full_name = "Sarah".into();
        form.email = String::new();
        assert!(!form.step_valid(1));
    }

    #[test]
    fn step_two_requires_location() {
        let mut form = filled_form();
        assert!(form.step_valid(2));

        form.location = " ".into();
        assert!(!form.step_valid(2));
    }

    #[test]
    fn step_three_requires_a_skill() {
        let mut form = filled_form();
        assert!(form.step_valid(3));

        form.skills.clear();
        assert!(!form.step_valid(3));
    }

    #[test]
    fn step_four_requires_goals() {
        let mut form = filled_form();
        assert!(form.step_valid(4));

        form.career_goals = "\n".into();
        assert!(!form.step_valid(4));
    }

    #[test]
    fn out_of_range_steps_are_invalid() {
        let form = filled_form();
        assert!(!form.step_valid(0));
        assert!(!form.step_valid(5));
    }

    #[test]
    fn advance_is_blocked_on_empty_form() {
        let mut wizard = Wizard::default();
        assert_eq!(wizard.advance(), StepOutcome::Blocked);
        assert_eq!(wizard.step, 1);
    }

    #[test]
    fn advance_walks_every_step_then_completes() {
        let mut wizard = Wizard {
            step: 1,
            form: filled_form(),
        };
        assert_eq!(wizard.advance(), StepOutcome::Moved);
        assert_eq!(wizard.advance(), StepOutcome::Moved);
        assert_eq!(wizard.advance(), StepOutcome::Moved);
        assert_eq!(wizard.step, TOTAL_STEPS);

        // The final step reports completion and never walks past the end.
        assert_eq!(wizard.advance(), StepOutcome::Completed);
        assert_eq!(wizard.step, TOTAL_STEPS);
    }

    #[test]
    fn retreat_floors_at_step_one() {
        let mut wizard = Wizard {
            step: 2,
            form: filled_form(),
        };
        wizard.retreat();
        assert_eq!(wizard.step, 1);
        wizard.retreat();
        assert_eq!(wizard.step, 1);
    }

    #[test]
    fn progress_is_a_quarter_per_step() {
        let mut wizard = Wizard::default();
        assert_eq!(wizard.progress(), 25.0);
        wizard.step = 4;
        assert_eq!(wizard.progress(), 100.0);
    }

    #[test]
    fn hub_lookup_matches_case_insensitively() {
        assert!(check_tech_hub("San Francisco, CA").is_some());
        assert!(check_tech_hub("Greater Seattle Area").is_some());
        assert!(check_tech_hub("NEW YORK").is_some());
    }

    #[test]
    fn hub_lookup_misses_other_locations() {
        assert_eq!(check_tech_hub("Omaha, NE"), None);
        assert_eq!(check_tech_hub(""), None);
    }

    #[test]
    fn hub_report_carries_the_share_constant() {
        let report = check_tech_hub("Austin, TX").unwrap();
        assert_eq!(report.tech_job_share, TECH_JOB_SHARE_PCT);
    }

    #[test]
    fn form_serde_roundtrip() {
        let form = filled_form();
        let json = serde_json::to_string(&form).unwrap();
        let back: OnboardingForm = serde_json::from_str(&json).unwrap();
        assert_eq!(form, back);
    }
}
