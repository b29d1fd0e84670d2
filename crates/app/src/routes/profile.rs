use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdCalendar, LdMail, LdMapPin, LdPencil, LdUsers};
use dioxus_free_icons::Icon;
use shared_types::{skills, Availability, MentorshipStyle, UserProfile, SKILL_CATALOG};
use shared_ui::{
    use_toast, Avatar, AvatarFallback, Badge, BadgeVariant, Button, ButtonVariant, Card,
    CardContent, CardDescription, CardHeader, CardTitle, FormSelect, Input, Label, Separator,
    Switch, SwitchThumb, Textarea, ToastOptions,
};

use crate::format_helpers::initials;
use crate::notify;

/// The signed-in user's profile, viewable always and editable on demand.
#[component]
pub fn Profile() -> Element {
    let toast = use_toast();
    let mut profile = use_signal(UserProfile::sample);
    let mut editing = use_signal(|| false);

    let on_header_button = move |_| {
        if editing() {
            let saved = profile();
            tracing::info!(full_name = %saved.full_name, "profile saved");
            toast.success(
                "Your profile has been successfully updated.".to_string(),
                ToastOptions::new(),
            );
            notify::send("Profile Updated", "Your profile has been successfully updated.");
            editing.set(false);
        } else {
            editing.set(true);
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./profile.css") }

        div { class: "profile-header",
            h1 { class: "profile-title", "My Profile" }
            Button {
                variant: ButtonVariant::Primary,
                onclick: on_header_button,
                if editing() {
                    "Save Changes"
                } else {
                    Icon::<LdPencil> { icon: LdPencil, width: 16, height: 16 }
                    "Edit Profile"
                }
            }
        }

        div { class: "profile-grid",
            div { class: "profile-sidebar",
                Card {
                    CardContent {
                        div { class: "profile-overview",
                            Avatar {
                                AvatarFallback { {initials(&profile().full_name)} }
                            }
                            h2 { class: "profile-name", "{profile().full_name}" }
                            p { class: "profile-email",
                                Icon::<LdMail> { icon: LdMail, width: 14, height: 14 }
                                "{profile().email}"
                            }
                            div { class: "profile-facts",
                                span { class: "profile-fact",
                                    Icon::<LdMapPin> { icon: LdMapPin, width: 14, height: 14 }
                                    "{profile().location}"
                                }
                                span { class: "profile-fact",
                                    Icon::<LdUsers> { icon: LdUsers, width: 14, height: 14 }
                                    "3 Active Mentorships"
                                }
                                span { class: "profile-fact",
                                    Icon::<LdCalendar> { icon: LdCalendar, width: 14, height: 14 }
                                    "Member since {profile().member_since()}"
                                }
                            }
                        }
                    }
                }

                Card {
                    CardHeader {
                        CardTitle { "Skills" }
                    }
                    CardContent {
                        div { class: "profile-skill-badges",
                            for skill in profile().skills {
                                Badge { variant: BadgeVariant::Secondary, "{skill}" }
                            }
                        }
                    }
                }
            }

            div { class: "profile-details",
                Card {
                    CardHeader {
                        CardTitle { "Basic Information" }
                        CardDescription { "Your personal and contact details" }
                    }
                    CardContent {
                        div { class: "profile-field-row",
                            Input {
                                label: "Full Name",
                                value: profile().full_name,
                                disabled: !editing(),
                                on_input: move |evt: FormEvent| profile.write().full_name = evt.value(),
                            }
                            Input {
                                label: "Email",
                                input_type: "email",
                                value: profile().email,
                                disabled: !editing(),
                                on_input: move |evt: FormEvent| profile.write().email = evt.value(),
                            }
                        }
                        Input {
                            label: "Location",
                            value: profile().location,
                            disabled: !editing(),
                            on_input: move |evt: FormEvent| profile.write().location = evt.value(),
                        }
                        Textarea {
                            label: "Bio",
                            rows: 3,
                            value: profile().bio,
                            disabled: !editing(),
                            on_input: move |evt: FormEvent| profile.write().bio = evt.value(),
                        }
                    }
                }

                if editing() {
                    Card {
                        CardHeader {
                            CardTitle { "Skills" }
                            CardDescription { "Select all skills that apply to you" }
                        }
                        CardContent {
                            div { class: "profile-skill-grid",
                                for skill in SKILL_CATALOG {
                                    button {
                                        class: "profile-skill-chip",
                                        "data-selected": skills::is_selected(&profile().skills, skill),
                                        onclick: move |_| {
                                            skills::toggle(&mut profile.write().skills, skill);
                                        },
                                        "{skill}"
                                    }
                                }
                            }
                        }
                    }
                }

                Card {
                    CardHeader {
                        CardTitle { "Career Goals" }
                        CardDescription { "Your professional aspirations and objectives" }
                    }
                    CardContent {
                        Textarea {
                            rows: 4,
                            placeholder: "Describe your career goals and how mentorship can help you achieve them...",
                            value: profile().career_goals,
                            disabled: !editing(),
                            on_input: move |evt: FormEvent| profile.write().career_goals = evt.value(),
                        }
                    }
                }

                Card {
                    CardHeader {
                        CardTitle { "Mentorship Preferences" }
                        CardDescription { "How you prefer to engage in mentorship" }
                    }
                    CardContent {
                        div { class: "profile-field-row",
                            FormSelect {
                                label: "Availability",
                                value: profile().availability.as_key().to_string(),
                                disabled: !editing(),
                                onchange: move |evt: Event<FormData>| {
                                    profile.write().availability = Availability::from_key(&evt.value());
                                },
                                for option in Availability::ALL {
                                    option { value: option.as_key(), {option.label()} }
                                }
                            }
                            FormSelect {
                                label: "Preferred Style",
                                value: profile().mentorship_style.as_key().to_string(),
                                disabled: !editing(),
                                onchange: move |evt: Event<FormData>| {
                                    profile.write().mentorship_style = MentorshipStyle::from_key(&evt.value());
                                },
                                for option in MentorshipStyle::ALL {
                                    option { value: option.as_key(), {option.label()} }
                                }
                            }
                        }

                        Separator { horizontal: true }

                        div { class: "profile-mentoring-row",
                            div {
                                Label { "Available for Mentoring Others" }
                                p { class: "profile-mentoring-hint",
                                    "Share your knowledge and help other women in tech"
                                }
                            }
                            Switch {
                                checked: profile().open_to_mentoring,
                                on_checked_change: move |checked: bool| {
                                    if editing() {
                                        profile.write().open_to_mentoring = checked;
                                    }
                                },
                                SwitchThumb {}
                            }
                        }
                    }
                }
            }
        }
    }
}
