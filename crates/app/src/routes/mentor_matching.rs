use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdHeart, LdMapPin, LdStar, LdUsers, LdX};
use dioxus_free_icons::Icon;
use shared_types::{Deck, Decision, Mentor};
use shared_ui::{
    use_toast, Avatar, AvatarFallback, AvatarImage, Badge, BadgeVariant, Card, CardContent,
    CardDescription, CardHeader, CardTitle, PageHeader, PageSubtitle, PageTitle, ToastOptions,
};

use crate::format_helpers::initials;
use crate::notify;

/// The fixed mentor roster shown until real matching exists.
pub fn mock_mentors() -> Vec<Mentor> {
    vec![
        Mentor {
            id: "1".into(),
            name: "Jennifer Chen".into(),
            title: "Senior Software Engineer".into(),
            company: "Google".into(),
            skills: vec![
                "React".into(),
                "JavaScript".into(),
                "Leadership".into(),
                "Mentoring".into(),
            ],
            experience_years: 8,
            location: "San Francisco, CA".into(),
            rating: 4.9,
            bio: "Passionate about helping women break into tech leadership roles. \
                  I've mentored 50+ engineers and love sharing knowledge about \
                  technical growth and career advancement."
                .into(),
            mentees: 12,
            avatar_url: None,
        },
        Mentor {
            id: "2".into(),
            name: "Maria Rodriguez".into(),
            title: "VP of Product".into(),
            company: "Stripe".into(),
            skills: vec![
                "Product Management".into(),
                "Strategy".into(),
                "Leadership".into(),
                "Growth".into(),
            ],
            experience_years: 12,
            location: "New York, NY".into(),
            rating: 4.8,
            bio: "Former founder turned product leader. I help ambitious women \
                  navigate the transition from IC to leadership roles in product \
                  and strategy."
                .into(),
            mentees: 8,
            avatar_url: None,
        },
        Mentor {
            id: "3".into(),
            name: "Dr. Aisha Patel".into(),
            title: "Director of Data Science".into(),
            company: "Netflix".into(),
            skills: vec![
                "Data Science".into(),
                "Machine Learning".into(),
                "Python".into(),
                "Analytics".into(),
            ],
            experience_years: 10,
            location: "Los Angeles, CA".into(),
            rating: 4.9,
            bio: "PhD in Computer Science with a focus on AI/ML. I love helping \
                  women enter and excel in data science and AI fields."
                .into(),
            mentees: 15,
            avatar_url: None,
        },
    ]
}

/// Mentor discovery carousel: one card at a time, pass or connect.
#[component]
pub fn MentorMatching() -> Element {
    let toast = use_toast();
    let mentors = use_hook(mock_mentors);
    let mut deck = use_signal(Deck::default);

    let Some(mentor) = mentors.get(deck().index).cloned() else {
        return rsx! {
            PageHeader {
                PageTitle { "No more mentors to show!" }
                PageSubtitle { "Check back later for new mentor profiles." }
            }
        };
    };

    let len = mentors.len();
    let mentor_name = mentor.name.clone();
    let on_decide = EventHandler::new(move |decision: Decision| {
        if decision == Decision::Connect {
            tracing::info!(mentor = %mentor_name, "connection request sent");
            toast.success(
                format!(
                    "You've connected with {mentor_name}. They'll be notified about your interest."
                ),
                ToastOptions::new(),
            );
            notify::send("Great choice!", &format!("You've connected with {mentor_name}."));
        }
        deck.write().advance(len);
    });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./mentor_matching.css") }

        PageHeader {
            PageTitle { "Find Your Perfect Mentor" }
            PageSubtitle { "Connect with mentors who align with your goals, or pass to see the next one." }
        }

        div { class: "mentor-deck",
            Card {
                CardHeader {
                    div { class: "mentor-avatar-wrap",
                        Avatar {
                            if let Some(url) = &mentor.avatar_url {
                                AvatarImage { src: url.clone() }
                            }
                            AvatarFallback { {initials(&mentor.name)} }
                        }
                        span { class: "mentor-rating",
                            Icon::<LdStar> { icon: LdStar, width: 12, height: 12 }
                            "{mentor.rating}"
                        }
                    }
                    CardTitle { "{mentor.name}" }
                    CardDescription { "{mentor.title}" }
                    p { class: "mentor-company", "{mentor.company}" }
                }

                CardContent {
                    div { class: "mentor-facts",
                        span { class: "mentor-fact",
                            Icon::<LdMapPin> { icon: LdMapPin, width: 14, height: 14 }
                            "{mentor.location}"
                        }
                        span { class: "mentor-fact",
                            Icon::<LdUsers> { icon: LdUsers, width: 14, height: 14 }
                            "{mentor.mentees} mentees"
                        }
                    }

                    h4 { class: "mentor-section-title", "Experience" }
                    p { class: "mentor-section-body", "{mentor.experience_years} years in industry" }

                    h4 { class: "mentor-section-title", "Skills & Expertise" }
                    div { class: "mentor-skills",
                        for skill in &mentor.skills {
                            Badge { variant: BadgeVariant::Secondary, "{skill}" }
                        }
                    }

                    h4 { class: "mentor-section-title", "About" }
                    p { class: "mentor-section-body", "{mentor.bio}" }

                    div { class: "mentor-actions",
                        button {
                            class: "mentor-action mentor-action-pass",
                            aria_label: "Pass",
                            onclick: move |_| on_decide.call(Decision::Pass),
                            Icon::<LdX> { icon: LdX, width: 24, height: 24 }
                        }
                        button {
                            class: "mentor-action mentor-action-connect",
                            aria_label: "Connect",
                            onclick: move |_| on_decide.call(Decision::Connect),
                            Icon::<LdHeart> { icon: LdHeart, width: 24, height: 24 }
                        }
                    }

                    p { class: "mentor-counter", "{deck().index + 1} of {len} mentors" }
                }
            }
        }
    }
}
