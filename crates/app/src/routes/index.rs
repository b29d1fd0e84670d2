use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdArrowRight, LdBookOpen, LdSparkles, LdUsers};
use dioxus_free_icons::Icon;
use shared_ui::{Button, ButtonVariant, Card, CardContent, CardDescription, CardTitle};

use crate::routes::Route;

/// Public landing page.
#[component]
pub fn Index() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./index.css") }

        div { class: "landing",
            div { class: "landing-hero",
                div { class: "landing-eyebrow",
                    Icon::<LdSparkles> { icon: LdSparkles, width: 16, height: 16 }
                    "Mentorship for women in tech"
                }
                h1 { class: "landing-title", "Your career, guided by women who've been there" }
                p { class: "landing-tagline",
                    "Herizon connects you with experienced mentors, helps you map your "
                    "skills, and keeps your career goals on track."
                }
                div { class: "landing-actions",
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: move |_| {
                            navigator().push(Route::Onboarding {});
                        },
                        "Get Started"
                        Icon::<LdArrowRight> { icon: LdArrowRight, width: 16, height: 16 }
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| {
                            navigator().push(Route::Dashboard {});
                        },
                        "Sign In"
                    }
                }
            }

            div { class: "landing-features",
                FeatureCard {
                    title: "Find Your Mentor",
                    description: "Browse experienced mentors from top companies and connect with the ones who fit your path.",
                    icon: rsx! { Icon::<LdUsers> { icon: LdUsers, width: 24, height: 24 } },
                }
                FeatureCard {
                    title: "Plan Your Growth",
                    description: "Track skill goals with curated courses, books, and certifications, prioritized your way.",
                    icon: rsx! { Icon::<LdBookOpen> { icon: LdBookOpen, width: 24, height: 24 } },
                }
                FeatureCard {
                    title: "Own Your Story",
                    description: "A profile that highlights your skills and goals, so mentors know exactly how to help.",
                    icon: rsx! { Icon::<LdSparkles> { icon: LdSparkles, width: 24, height: 24 } },
                }
            }
        }
    }
}

#[component]
fn FeatureCard(title: String, description: String, icon: Element) -> Element {
    rsx! {
        Card {
            CardContent {
                div { class: "landing-feature-icon", {icon} }
                CardTitle { "{title}" }
                CardDescription { "{description}" }
            }
        }
    }
}
