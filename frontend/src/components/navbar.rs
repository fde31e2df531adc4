//! Side navigation bar component.

use dioxus::prelude::*;

use crate::components::error_boundary::GlobalErrorBoundary;
use crate::routes::Route;

use dioxus_free_icons::icons::md_action_icons::{MdDashboard, MdHome, MdWork};
use dioxus_free_icons::icons::md_maps_icons::MdMap;
use dioxus_free_icons::icons::md_social_icons::{MdPublic, MdSchool};
use dioxus_free_icons::{Icon, IconShape};


/// Shared navbar component.
#[component]
pub fn Navbar() -> Element {
    rsx! {

        div {
            id:"x-nav-container",

            style:"
                display:flex;
                flex-direction: row;
                width: 100%;
                height: 100%;
            ",


            div {
                id:"x-nav-sidebar",
                style:"
                    display:flex;
                    flex-direction: column;
                    gap: 40px;
                    width: 86px;
                    height: 100%;
                    background-color: #0F172A;
                    border-right: 1px solid #1E293B;
                    padding: 16px 8px;
                    box-sizing: border-box;
                ",

                NavbarTopLogo{},
                NavbarIconLinks{},

                // empty space
                div {
                    style: "flex-grow:1;"
                }
            },

            div {
                id:"x-page-container",
                style: "flex-grow:1; min-width: 100px; overflow-y: auto;",
                GlobalErrorBoundary {
                    boundary_name: "Navbar".to_string(),
                    Outlet::<Route> {}
                }
            }
        }

    }
}

#[component]
fn NavbarTopLogo() -> Element {
    rsx! {
        Link {
            to: Route::HomePage { },
            div {
                style: "font-size: 30px; text-align: center;",
                "📈"
            }
        }
    }
}

#[component]
fn NavbarIconLinks() -> Element {
    rsx! {
        div {
            style: "
                display:flex;
                flex-direction: column;
                gap: 18px;
                align-items: center;
                justify-content: center;
            ",
            IconLink { to: Route::HomePage { }, icon: MdHome, label: "Home" }
            IconLink { to: Route::DashboardPage { }, icon: MdDashboard, label: "Dashboard" }
            IconLink { to: Route::jobs(), icon: MdWork, label: "Jobs" }
            IconLink { to: Route::CountriesPage { }, icon: MdPublic, label: "Countries" }
            IconLink { to: Route::SkillsPage { }, icon: MdSchool, label: "Skills" }
            IconLink { to: Route::MapPage { }, icon: MdMap, label: "Map" }
        }
    }
}

/// Same page regardless of query parameters.
fn same_page(a: &Route, b: &Route) -> bool {
    std::mem::discriminant(a) == std::mem::discriminant(b)
}

#[component]
fn IconLink<T: IconShape + Clone + PartialEq + 'static> (to: Route, icon: T, label: String) -> Element {
    let current = use_route::<Route>();
    let active = same_page(&current, &to);
    let color = if active { "#A78BFA" } else { "#CBD5E1" };
    let background = if active { "rgba(139, 92, 246, 0.18)" } else { "transparent" };
    rsx! {
        Link {
            to: to,
            span {
                style: "
                    display:flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 4px;
                    width: 70px;
                    padding: 6px 0;
                    border-radius: 10px;
                    color: {color};
                    background: {background};
                    font-size: 11px;
                ",
                Icon { icon: icon, style: "width: 26px; height: 26px;" }
                "{label}"
            }
        }
    }
}
