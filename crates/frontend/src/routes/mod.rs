use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Redirect, Route, Router, Routes};
use leptos_router::path;

use crate::dashboards::admin_home::AdminHomePage;
use crate::domain::a001_health_center::resolve::{CenterScope, MyCenterRedirect};
use crate::domain::a001_health_center::ui::admin_list::CentersPage;
use crate::domain::a001_health_center::ui::bookings::CenterBookingsPage;
use crate::domain::a001_health_center::ui::details::CenterDetailsPage;
use crate::domain::a001_health_center::ui::home::CenterHomePage;
use crate::domain::a001_health_center::ui::tests::CenterTestsPage;
use crate::domain::a002_lab_guideline::ui::details::GuidelineDetailsPage;
use crate::domain::a002_lab_guideline::ui::form::GuidelineFormPage;
use crate::domain::a002_lab_guideline::ui::list::GuidelinesPage;
use crate::domain::a003_free_event::ui::FreeEventsPage;
use crate::domain::a004_health_awareness::ui::HealthAwarenessPage;
use crate::system::auth::guard::RequireAuth;
use crate::system::pages::login::LoginPage;
use crate::system::pages::register::RegisterPage;

/// URL surface. The admin area and the per-center area are both behind
/// `RequireAuth`; the per-center subtree additionally runs through
/// `CenterScope`, which owns the ownership check.
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <Redirect path="/" /> }>
                // public
                <Route path=path!("/") view=LoginPage />
                <Route path=path!("/register") view=RegisterPage />

                // admin area
                <Route
                    path=path!("/home")
                    view=|| view! { <RequireAuth><AdminHomePage /></RequireAuth> }
                />
                <Route
                    path=path!("/free-events")
                    view=|| view! { <RequireAuth><FreeEventsPage /></RequireAuth> }
                />
                <Route
                    path=path!("/guidelines")
                    view=|| view! { <RequireAuth><GuidelinesPage /></RequireAuth> }
                />
                <Route
                    path=path!("/guidelines/:id")
                    view=|| view! { <RequireAuth><GuidelineDetailsPage /></RequireAuth> }
                />
                <Route
                    path=path!("/guideline-form")
                    view=|| view! { <RequireAuth><GuidelineFormPage /></RequireAuth> }
                />
                <Route
                    path=path!("/guideline-form/:id")
                    view=|| view! { <RequireAuth><GuidelineFormPage /></RequireAuth> }
                />
                <Route
                    path=path!("/centers")
                    view=|| view! { <RequireAuth><CentersPage /></RequireAuth> }
                />
                <Route
                    path=path!("/admin/health-awareness")
                    view=|| view! { <RequireAuth><HealthAwarenessPage /></RequireAuth> }
                />

                // health-center area; the old /healthcenter/home URL stays
                // as an alias for "my center"
                <Route
                    path=path!("/healthcenter/home")
                    view=|| view! { <Redirect path="/healthcenter/me" /> }
                />
                <Route
                    path=path!("/healthcenter/me")
                    view=|| view! { <RequireAuth><MyCenterRedirect /></RequireAuth> }
                />
                <ParentRoute
                    path=path!("/healthcenter/:centerId")
                    view=|| view! { <RequireAuth><CenterScope /></RequireAuth> }
                >
                    <Route path=path!("") view=CenterHomePage />
                    <Route path=path!("home") view=CenterHomePage />
                    <Route path=path!("bookings") view=CenterBookingsPage />
                    <Route path=path!("tests") view=CenterTestsPage />
                    <Route path=path!("details") view=CenterDetailsPage />
                </ParentRoute>
            </Routes>
        </Router>
    }
}
