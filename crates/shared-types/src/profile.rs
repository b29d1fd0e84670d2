use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// When the user is available for mentorship sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    Weekdays,
    #[default]
    Weekends,
    Flexible,
}

impl Availability {
    /// Internal key used for `<select>` values.
    pub fn as_key(&self) -> &'static str {
        match self {
            Availability::Weekdays => "weekdays",
            Availability::Weekends => "weekends",
            Availability::Flexible => "flexible",
        }
    }

    /// Human-readable name for display in UI.
    pub fn label(&self) -> &'static str {
        match self {
            Availability::Weekdays => "Weekdays",
            Availability::Weekends => "Weekends",
            Availability::Flexible => "Flexible",
        }
    }

    /// Parse a select value, falling back to the default.
    pub fn from_key(key: &str) -> Self {
        match key {
            "weekdays" => Availability::Weekdays,
            "flexible" => Availability::Flexible,
            _ => Availability::Weekends,
        }
    }

    /// All options in display order.
    pub const ALL: &'static [Availability] = &[
        Availability::Weekdays,
        Availability::Weekends,
        Availability::Flexible,
    ];
}

/// How the user prefers mentorship sessions to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MentorshipStyle {
    #[default]
    OneOnOne,
    Group,
    Async,
}

impl MentorshipStyle {
    pub fn as_key(&self) -> &'static str {
        match self {
            MentorshipStyle::OneOnOne => "one_on_one",
            MentorshipStyle::Group => "group",
            MentorshipStyle::Async => "async",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MentorshipStyle::OneOnOne => "1:1 Sessions",
            MentorshipStyle::Group => "Group Sessions",
            MentorshipStyle::Async => "Async Communication",
        }
    }

    pub fn from_key(key: &str) -> Self {
        match key {
            "group" => MentorshipStyle::Group,
            "async" => MentorshipStyle::Async,
            _ => MentorshipStyle::OneOnOne,
        }
    }

    pub const ALL: &'static [MentorshipStyle] = &[
        MentorshipStyle::OneOnOne,
        MentorshipStyle::Group,
        MentorshipStyle::Async,
    ];
}

/// The signed-in user's profile record.
///
/// Held in screen-local state only; `save` on the profile page logs the
/// record instead of writing it anywhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub full_name: String,
    pub email: String,
    pub location: String,
    pub bio: String,
    pub skills: Vec<String>,
    pub career_goals: String,
    pub availability: Availability,
    pub mentorship_style: MentorshipStyle,
    pub open_to_mentoring: bool,
    pub joined: NaiveDate,
}

impl UserProfile {
    /// "Member since" label, e.g. "Jan 2024".
    pub fn member_since(&self) -> String {
        self.joined.format("%b %Y").to_string()
    }

    /// Mock signed-in user shown until real accounts exist.
    pub fn sample() -> Self {
        Self {
            full_name: "Sarah Johnson".into(),
            email: "sarah.johnson@email.com".into(),
            location: "San Francisco, CA".into(),
            bio: "Passionate software engineer with 5 years of experience in \
                  full-stack development. Love building user-centric applications \
                  and mentoring junior developers."
                .into(),
            skills: vec![
                "React".into(),
                "JavaScript".into(),
                "Python".into(),
                "Leadership".into(),
            ],
            career_goals: "Transition to a technical leadership role within the \
                           next 2 years, focusing on team management and \
                           architectural decisions."
                .into(),
            availability: Availability::Weekends,
            mentorship_style: MentorshipStyle::OneOnOne,
            open_to_mentoring: true,
            joined: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn availability_key_roundtrip() {
        for option in Availability::ALL {
            assert_eq!(Availability::from_key(option.as_key()), *option);
        }
        assert_eq!(Availability::from_key("garbage"), Availability::Weekends);
    }

    #[test]
    fn mentorship_style_key_roundtrip() {
        for option in MentorshipStyle::ALL {
            assert_eq!(MentorshipStyle::from_key(option.as_key()), *option);
        }
        assert_eq!(
            MentorshipStyle::from_key("garbage"),
            MentorshipStyle::OneOnOne
        );
    }

    #[test]
    fn member_since_formats_month_and_year() {
        assert_eq!(UserProfile::sample().member_since(), "Jan 2024");
    }

    #[test]
    fn profile_serde_roundtrip() {
        let profile = UserProfile::sample();
        let json = serde_json::to_string(&profile).unwrap();
        let back: UserProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(profile, back);
    }
}
