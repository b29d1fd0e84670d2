pub mod career_planner;
pub mod dashboard;
pub mod index;
pub mod mentor_matching;
pub mod not_found;
pub mod onboarding;
pub mod profile;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBookOpen, LdHeart, LdLayoutDashboard, LdUser, LdUsers,
};
use dioxus_free_icons::Icon;
use shared_ui::Navbar;

use career_planner::CareerPlanner;
use dashboard::Dashboard;
use index::Index;
use mentor_matching::MentorMatching;
use not_found::NotFound;
use onboarding::Onboarding;
use profile::Profile;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Index {},
    #[route("/onboarding")]
    Onboarding {},
    #[layout(AppLayout)]
    #[route("/dashboard")]
    Dashboard {},
    #[route("/mentors")]
    MentorMatching {},
    #[route("/planner")]
    CareerPlanner {},
    #[route("/profile")]
    Profile {},
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Main app layout with the top navbar.
#[component]
fn AppLayout() -> Element {
    let route: Route = use_route();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        Navbar {
            div { class: "navbar-bar",
                Link { to: Route::Dashboard {},
                    div { class: "navbar-brand",
                        Icon::<LdHeart> { icon: LdHeart, width: 20, height: 20 }
                        span { class: "navbar-brand-name", "Herizon" }
                    }
                }

                div { class: "navbar-spacer" }

                div { class: "navbar-links",
                    NavLink {
                        to: Route::Dashboard {},
                        active: matches!(route, Route::Dashboard {}),
                        label: "Dashboard",
                        icon: rsx! { Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 } },
                    }
                    NavLink {
                        to: Route::MentorMatching {},
                        active: matches!(route, Route::MentorMatching {}),
                        label: "Find Mentors",
                        icon: rsx! { Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 } },
                    }
                    NavLink {
                        to: Route::CareerPlanner {},
                        active: matches!(route, Route::CareerPlanner {}),
                        label: "Career Planner",
                        icon: rsx! { Icon::<LdBookOpen> { icon: LdBookOpen, width: 18, height: 18 } },
                    }
                    NavLink {
                        to: Route::Profile {},
                        active: matches!(route, Route::Profile {}),
                        label: "Profile",
                        icon: rsx! { Icon::<LdUser> { icon: LdUser, width: 18, height: 18 } },
                    }
                }
            }
        }

        div { class: "page-content",
            Outlet::<Route> {}
        }
    }
}

#[component]
fn NavLink(to: Route, active: bool, label: String, icon: Element) -> Element {
    rsx! {
        Link { to,
            span {
                class: "navbar-link",
                "data-active": active,
                {icon}
                "{label}"
            }
        }
    }
}
