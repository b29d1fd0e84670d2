use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdArrowRight, LdBookOpen, LdStar, LdUser, LdUsers};
use dioxus_free_icons::Icon;
use shared_types::{overall_progress, UserProfile};
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle, PageHeader,
    PageSubtitle, PageTitle, Progress, ProgressIndicator,
};

use crate::routes::{career_planner, mentor_matching, Route};

/// Home screen after onboarding: a snapshot of goals and mentors.
#[component]
pub fn Dashboard() -> Element {
    let profile = use_hook(UserProfile::sample);
    let goals = use_hook(career_planner::initial_goals);
    let mentors = use_hook(mentor_matching::mock_mentors);

    let first_name = profile
        .full_name
        .split_whitespace()
        .next()
        .unwrap_or("there")
        .to_string();
    let progress = overall_progress(&goals);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        PageHeader {
            PageTitle { "Welcome back, {first_name}!" }
            PageSubtitle { "Here's where your journey stands today." }
        }

        div { class: "dashboard-stats",
            StatCard {
                label: "Skill Goals",
                value: goals.len().to_string(),
                icon: rsx! { Icon::<LdBookOpen> { icon: LdBookOpen, width: 20, height: 20 } },
            }
            StatCard {
                label: "Mentors to Explore",
                value: mentors.len().to_string(),
                icon: rsx! { Icon::<LdUsers> { icon: LdUsers, width: 20, height: 20 } },
            }
            StatCard {
                label: "Skills on Profile",
                value: profile.skills.len().to_string(),
                icon: rsx! { Icon::<LdStar> { icon: LdStar, width: 20, height: 20 } },
            }
        }

        Card {
            CardContent {
                div { class: "dashboard-progress-row",
                    CardTitle { "Overall Goal Progress" }
                    span { class: "dashboard-progress-value", "{progress}%" }
                }
                Progress { value: Some(progress as f64),
                    ProgressIndicator {}
                }
            }
        }

        div { class: "dashboard-links",
            QuickLink {
                to: Route::MentorMatching {},
                title: "Find Mentors",
                description: "Browse mentors and send connection requests.",
                icon: rsx! { Icon::<LdUsers> { icon: LdUsers, width: 20, height: 20 } },
            }
            QuickLink {
                to: Route::CareerPlanner {},
                title: "Career Planner",
                description: "Reorder your goals and dig into learning resources.",
                icon: rsx! { Icon::<LdBookOpen> { icon: LdBookOpen, width: 20, height: 20 } },
            }
            QuickLink {
                to: Route::Profile {},
                title: "Your Profile",
                description: "Keep your skills and mentorship preferences current.",
                icon: rsx! { Icon::<LdUser> { icon: LdUser, width: 20, height: 20 } },
            }
        }

        Card {
            CardHeader {
                CardTitle { "Upcoming Sessions" }
                CardDescription { "Your scheduled mentorship sessions" }
            }
            CardContent {
                SessionRow {
                    title: "1:1 with Jennifer Chen",
                    detail: "Tomorrow, 2:00 PM - Career Development",
                }
                SessionRow {
                    title: "Group Session: Technical Leadership",
                    detail: "Friday, 4:00 PM - with 5 other mentees",
                }
            }
        }
    }
}

#[component]
fn SessionRow(title: String, detail: String) -> Element {
    rsx! {
        div { class: "dashboard-session",
            div {
                p { class: "dashboard-session-title", "{title}" }
                p { class: "dashboard-session-detail", "{detail}" }
            }
            Button { variant: ButtonVariant::Outline, "Join" }
        }
    }
}

#[component]
fn StatCard(label: String, value: String, icon: Element) -> Element {
    rsx! {
        Card {
            CardContent {
                div { class: "dashboard-stat",
                    div { class: "dashboard-stat-icon", {icon} }
                    div {
                        p { class: "dashboard-stat-value", "{value}" }
                        p { class: "dashboard-stat-label", "{label}" }
                    }
                }
            }
        }
    }
}

#[component]
fn QuickLink(to: Route, title: String, description: String, icon: Element) -> Element {
    rsx! {
        Link { to,
            Card {
                CardContent {
                    div { class: "dashboard-link",
                        div { class: "dashboard-stat-icon", {icon} }
                        div { class: "dashboard-link-text",
                            CardTitle { "{title}" }
                            CardDescription { "{description}" }
                        }
                        Icon::<LdArrowRight> { icon: LdArrowRight, width: 18, height: 18 }
                    }
                }
            }
        }
    }
}
