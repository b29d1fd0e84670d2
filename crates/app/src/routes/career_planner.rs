use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdAward, LdBookOpen, LdExternalLink, LdGripVertical};
use dioxus_free_icons::Icon;
use shared_types::{
    overall_progress, reorder, resource_count, GoalCategory, LearningResource, ResourceKind,
    SkillGoal,
};
use shared_ui::{
    Badge, BadgeVariant, Card, CardContent, CardDescription, CardHeader, CardTitle, PageHeader,
    PageSubtitle, PageTitle, Progress, ProgressIndicator,
};

fn resource(name: &str, kind: ResourceKind) -> LearningResource {
    LearningResource {
        name: name.into(),
        kind,
        url: "#".into(),
    }
}

/// Starter goal list shown until goals are persisted somewhere.
pub fn initial_goals() -> Vec<SkillGoal> {
    vec![
        SkillGoal {
            id: "1".into(),
            name: "Cloud Computing".into(),
            category: GoalCategory::Technical,
            progress: 65,
            priority: 1,
            resources: vec![
                resource("AWS Cloud Practitioner", ResourceKind::Certification),
                resource("Cloud Computing Fundamentals", ResourceKind::Course),
            ],
        },
        SkillGoal {
            id: "2".into(),
            name: "Leadership".into(),
            category: GoalCategory::SoftSkills,
            progress: 40,
            priority: 2,
            resources: vec![
                resource("Leadership in Tech", ResourceKind::Course),
                resource("The Manager's Path", ResourceKind::Book),
            ],
        },
        SkillGoal {
            id: "3".into(),
            name: "Machine Learning".into(),
            category: GoalCategory::Technical,
            progress: 30,
            priority: 3,
            resources: vec![
                resource("Google ML Crash Course", ResourceKind::Course),
                resource("TensorFlow Developer Certificate", ResourceKind::Certification),
            ],
        },
        SkillGoal {
            id: "4".into(),
            name: "Product Strategy".into(),
            category: GoalCategory::Business,
            progress: 20,
            priority: 4,
            resources: vec![
                resource("Product Management Fundamentals", ResourceKind::Course),
                resource("Inspired: How to Create Products", ResourceKind::Book),
            ],
        },
    ]
}

/// Career planner: a drag-to-prioritize goal list with a progress sidebar.
#[component]
pub fn CareerPlanner() -> Element {
    let mut goals = use_signal(initial_goals);
    // Index of the card being dragged; view state only, the list is
    // untouched until the drop lands.
    let mut drag_from = use_signal(|| None::<usize>);

    let progress = overall_progress(&goals());
    let resources = resource_count(&goals());
    let goal_count = goals().len();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./career_planner.css") }

        PageHeader {
            PageTitle { "Career Planner" }
            PageSubtitle { "Drag and drop to prioritize your skill development goals." }
        }

        div { class: "planner-grid",
            Card {
                CardHeader {
                    CardTitle { "Your Skill Development Path" }
                    CardDescription { "Reorder skills by dragging to set your learning priorities." }
                }
                CardContent {
                    div { class: "planner-goals",
                        for (index, goal) in goals().into_iter().enumerate() {
                            GoalCard {
                                key: "{goal.id}",
                                goal,
                                index,
                                dragging: drag_from() == Some(index),
                                on_drag_start: move |index: usize| drag_from.set(Some(index)),
                                on_drop: move |dest: usize| {
                                    let source = drag_from();
                                    if let Some(source) = source {
                                        reorder(&mut goals.write(), source, Some(dest));
                                    }
                                    drag_from.set(None);
                                },
                                on_drag_end: move |_| drag_from.set(None),
                            }
                        }
                    }
                }
            }

            div { class: "planner-sidebar",
                Card {
                    CardHeader {
                        CardTitle { "Skills Overview" }
                    }
                    CardContent {
                        div { class: "planner-overall",
                            span { "Overall Progress" }
                            span { class: "planner-overall-value", "{progress}%" }
                        }
                        Progress { value: Some(progress as f64),
                            ProgressIndicator {}
                        }
                        div { class: "planner-stats",
                            div { class: "planner-stat planner-stat-orange",
                                p { class: "planner-stat-value", "{goal_count}" }
                                p { class: "planner-stat-label", "Active Skills" }
                            }
                            div { class: "planner-stat planner-stat-yellow",
                                p { class: "planner-stat-value", "{resources}" }
                                p { class: "planner-stat-label", "Resources" }
                            }
                        }
                    }
                }

                Card {
                    CardHeader {
                        CardTitle { "Recommended Resources" }
                    }
                    CardContent {
                        div { class: "planner-reco",
                            Icon::<LdBookOpen> { icon: LdBookOpen, width: 20, height: 20 }
                            div {
                                p { class: "planner-reco-name", "AWS Solutions Architect" }
                                p { class: "planner-reco-hint", "Based on your Cloud Computing goal" }
                            }
                        }
                        div { class: "planner-reco",
                            Icon::<LdBookOpen> { icon: LdBookOpen, width: 20, height: 20 }
                            div {
                                p { class: "planner-reco-name", "Leadership Communication" }
                                p { class: "planner-reco-hint", "Trending in your network" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn GoalCard(
    goal: SkillGoal,
    index: usize,
    dragging: bool,
    on_drag_start: EventHandler<usize>,
    on_drop: EventHandler<usize>,
    on_drag_end: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "planner-goal",
            "data-dragging": dragging,
            draggable: true,
            ondragstart: move |_| on_drag_start.call(index),
            ondragover: move |evt| evt.prevent_default(),
            ondrop: move |_| on_drop.call(index),
            ondragend: move |_| on_drag_end.call(()),

            span { class: "planner-goal-grip",
                Icon::<LdGripVertical> { icon: LdGripVertical, width: 20, height: 20 }
            }

            div { class: "planner-goal-body",
                div { class: "planner-goal-head",
                    span { class: "planner-goal-rank", "#{goal.priority}" }
                    h3 { class: "planner-goal-name", "{goal.name}" }
                    span { "data-category": goal.category.css_class(),
                        Badge { variant: BadgeVariant::Outline, {goal.category.label()} }
                    }
                }

                div { class: "planner-goal-progress",
                    div { class: "planner-goal-progress-row",
                        span { "Progress" }
                        span { class: "planner-goal-progress-value", "{goal.progress}%" }
                    }
                    Progress { value: Some(goal.progress as f64),
                        ProgressIndicator {}
                    }
                }

                div { class: "planner-goal-resources",
                    for res in &goal.resources {
                        a { class: "planner-resource", href: "{res.url}",
                            ResourceIcon { kind: res.kind }
                            "{res.name}"
                            Icon::<LdExternalLink> { icon: LdExternalLink, width: 12, height: 12 }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ResourceIcon(kind: ResourceKind) -> Element {
    match kind {
        ResourceKind::Course | ResourceKind::Book => rsx! {
            Icon::<LdBookOpen> { icon: LdBookOpen, width: 14, height: 14 }
        },
        ResourceKind::Certification => rsx! {
            Icon::<LdAward> { icon: LdAward, width: 14, height: 14 }
        },
    }
}
