use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdArrowLeft, LdArrowRight, LdMapPin, LdSparkles};
use dioxus_free_icons::Icon;
use shared_types::{check_tech_hub, skills, StepOutcome, TechHubReport, Wizard, SKILL_CATALOG, TOTAL_STEPS};
use shared_ui::{
    use_toast, Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle,
    Input, Progress, ProgressIndicator, Textarea, ToastOptions,
};

use crate::notify;
use crate::routes::Route;

/// Four-step onboarding wizard that collects a new member's profile.
#[component]
pub fn Onboarding() -> Element {
    let toast = use_toast();
    let mut wizard = use_signal(Wizard::default);
    let mut hub_report = use_signal(|| None::<TechHubReport>);
    // Monotonic token so a slow lookup for an old location never
    // overwrites the report for the current one.
    let mut lookup_seq = use_signal(|| 0u64);

    let step = wizard().step;
    let can_advance = wizard().can_advance();

    let on_location_input = move |evt: FormEvent| {
        let value = evt.value();
        wizard.write().form.location = value.clone();

        let token = lookup_seq() + 1;
        lookup_seq.set(token);

        if value.trim().len() > 3 {
            spawn(async move {
                tracing::info!(location = %value, "checking tech hub status");
                let report = check_tech_hub(&value);
                if lookup_seq() == token {
                    let was_hit = hub_report().is_some();
                    hub_report.set(report);
                    if let Some(report) = report {
                        if !was_hit {
                            toast.success(
                                format!(
                                    "You're in a tech hub! {}% of jobs in your region are in tech.",
                                    report.tech_job_share
                                ),
                                ToastOptions::new(),
                            );
                        }
                    }
                }
            });
        } else {
            hub_report.set(None);
        }
    };

    let on_next = move |_| {
        let outcome = wizard.write().advance();
        if outcome == StepOutcome::Completed {
            let name = wizard().form.full_name;
            tracing::info!(full_name = %name, "onboarding complete, profile created");
            toast.success("Welcome to Herizon!".to_string(), ToastOptions::new());
            notify::send("Welcome to Herizon!", "Your profile is ready.");
            navigator().push(Route::Dashboard {});
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./onboarding.css") }

        div { class: "onboarding",
            div { class: "onboarding-progress",
                span { class: "onboarding-progress-label", "Step {step} of {TOTAL_STEPS}" }
                Progress { value: Some(wizard().progress()),
                    ProgressIndicator {}
                }
            }

            Card {
                match step {
                    1 => rsx! {
                        CardHeader {
                            CardTitle { "Welcome! Let's get to know you" }
                            CardDescription { "Tell us who you are so mentors can find you." }
                        }
                        CardContent {
                            Input {
                                label: "Full Name",
                                placeholder: "Jane Doe",
                                value: wizard().form.full_name,
                                on_input: move |evt: FormEvent| wizard.write().form.full_name = evt.value(),
                            }
                            Input {
                                label: "Email",
                                input_type: "email",
                                placeholder: "jane@example.com",
                                value: wizard().form.email,
                                on_input: move |evt: FormEvent| wizard.write().form.email = evt.value(),
                            }
                        }
                    },
                    2 => rsx! {
                        CardHeader {
                            CardTitle { "Where are you based?" }
                            CardDescription { "We use your location to surface regional insights." }
                        }
                        CardContent {
                            Input {
                                label: "Location",
                                placeholder: "City, State",
                                value: wizard().form.location,
                                on_input: on_location_input,
                            }
                            if let Some(report) = hub_report() {
                                div { class: "onboarding-hub-card",
                                    Icon::<LdMapPin> { icon: LdMapPin, width: 18, height: 18 }
                                    div {
                                        p { class: "onboarding-hub-title", "You're in a tech hub!" }
                                        p { class: "onboarding-hub-body",
                                            "About {report.tech_job_share}% of jobs in your area are in tech."
                                        }
                                    }
                                }
                            }
                        }
                    },
                    3 => rsx! {
                        CardHeader {
                            CardTitle { "What are your skills?" }
                            CardDescription { "Pick everything that applies. You can change this later." }
                        }
                        CardContent {
                            div { class: "onboarding-skill-grid",
                                for skill in SKILL_CATALOG {
                                    SkillChip {
                                        name: skill.to_string(),
                                        selected: skills::is_selected(&wizard().form.skills, skill),
                                        on_toggle: move |name: String| {
                                            skills::toggle(&mut wizard.write().form.skills, &name);
                                        },
                                    }
                                }
                            }
                            if !wizard().form.skills.is_empty() {
                                p { class: "onboarding-skill-count",
                                    "Selected {wizard().form.skills.len()} "
                                    if wizard().form.skills.len() == 1 { "skill" } else { "skills" }
                                }
                            }
                        }
                    },
                    _ => rsx! {
                        CardHeader {
                            CardTitle { "What are your career goals?" }
                            CardDescription { "A few sentences help mentors understand where you're headed." }
                        }
                        CardContent {
                            Textarea {
                                label: "Career Goals",
                                placeholder: "In two years I want to...",
                                rows: 5,
                                value: wizard().form.career_goals,
                                on_input: move |evt: FormEvent| wizard.write().form.career_goals = evt.value(),
                            }
                        }
                    },
                }

                div { class: "onboarding-nav",
                    if step > 1 {
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| wizard.write().retreat(),
                            Icon::<LdArrowLeft> { icon: LdArrowLeft, width: 16, height: 16 }
                            "Back"
                        }
                    } else {
                        div {}
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        disabled: !can_advance,
                        onclick: on_next,
                        if step == TOTAL_STEPS {
                            "Finish"
                            Icon::<LdSparkles> { icon: LdSparkles, width: 16, height: 16 }
                        } else {
                            "Next"
                            Icon::<LdArrowRight> { icon: LdArrowRight, width: 16, height: 16 }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SkillChip(name: String, selected: bool, on_toggle: EventHandler<String>) -> Element {
    rsx! {
        button {
            class: "onboarding-skill-chip",
            "data-selected": selected,
            onclick: move |_| on_toggle.call(name.clone()),
            "{name}"
        }
    }
}
