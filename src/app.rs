//! Root application component with routing and context providers.
//!
//! ARCHITECTURE
//! ============
//! `App` owns the two shared signals (session, toasts), starts the identity
//! bridge subscription exactly once, and declares the route table. Access
//! control is expressed here by wrapping route views in `RequireAuth` /
//! `RequireAdmin`; pages never gate themselves.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::footer::Footer;
use crate::components::guards::{RequireAdmin, RequireAuth};
use crate::components::navbar::Navbar;
use crate::components::toast_host::ToastHost;
use crate::pages::auth_callback::AuthCallbackPage;
use crate::pages::dashboard::add_lesson::AddLessonPage;
use crate::pages::dashboard::admin_home::AdminHomePage;
use crate::pages::dashboard::admin_profile::AdminProfilePage;
use crate::pages::dashboard::home::DashboardHomePage;
use crate::pages::dashboard::manage_lessons::ManageLessonsPage;
use crate::pages::dashboard::manage_users::ManageUsersPage;
use crate::pages::dashboard::my_favorites::MyFavoritesPage;
use crate::pages::dashboard::my_lessons::MyLessonsPage;
use crate::pages::dashboard::profile::ProfilePage;
use crate::pages::dashboard::reported_lessons::ReportedLessonsPage;
use crate::pages::dashboard::update_lesson::UpdateLessonPage;
use crate::pages::home::HomePage;
use crate::pages::lesson_details::LessonDetailsPage;
use crate::pages::login::LoginPage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::payment_result::{PaymentCancelPage, PaymentSuccessPage};
use crate::pages::pricing::PricingPage;
use crate::pages::public_lessons::PublicLessonsPage;
use crate::pages::register::RegisterPage;
use crate::state::session;
use crate::state::toasts::ToastsState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = session::provide_session();
    let toasts = RwSignal::new(ToastsState::default());
    provide_context(toasts);

    // One bridge subscription for the process lifetime; this also kicks off
    // persisted-session restore and the first identity-changed event.
    session::init_session(session);

    view! {
        <Stylesheet id="leptos" href="/pkg/life-lessons.css"/>
        <Title text="Digital Life Lessons"/>

        <Router>
            <Navbar/>
            <main class="app-main">
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("public-lessons") view=PublicLessonsPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route
                        path=(StaticSegment("auth"), StaticSegment("callback"))
                        view=AuthCallbackPage
                    />
                    <Route
                        path=(StaticSegment("lessons"), ParamSegment("id"))
                        view=|| view! { <RequireAuth><LessonDetailsPage/></RequireAuth> }
                    />
                    <Route
                        path=StaticSegment("pricing")
                        view=|| view! { <RequireAuth><PricingPage/></RequireAuth> }
                    />
                    <Route
                        path=(StaticSegment("pricing"), StaticSegment("success"))
                        view=PaymentSuccessPage
                    />
                    <Route
                        path=(StaticSegment("pricing"), StaticSegment("cancel"))
                        view=PaymentCancelPage
                    />

                    <Route
                        path=StaticSegment("dashboard")
                        view=|| view! { <RequireAuth><DashboardHomePage/></RequireAuth> }
                    />
                    <Route
                        path=(StaticSegment("dashboard"), StaticSegment("add-lesson"))
                        view=|| view! { <RequireAuth><AddLessonPage/></RequireAuth> }
                    />
                    <Route
                        path=(StaticSegment("dashboard"), StaticSegment("my-lessons"))
                        view=|| view! { <RequireAuth><MyLessonsPage/></RequireAuth> }
                    />
                    <Route
                        path=(
                            StaticSegment("dashboard"),
                            StaticSegment("update-lesson"),
                            ParamSegment("id"),
                        )
                        view=|| view! { <RequireAuth><UpdateLessonPage/></RequireAuth> }
                    />
                    <Route
                        path=(StaticSegment("dashboard"), StaticSegment("my-favorites"))
                        view=|| view! { <RequireAuth><MyFavoritesPage/></RequireAuth> }
                    />
                    <Route
                        path=(StaticSegment("dashboard"), StaticSegment("profile"))
                        view=|| view! { <RequireAuth><ProfilePage/></RequireAuth> }
                    />

                    <Route
                        path=(StaticSegment("dashboard"), StaticSegment("admin"))
                        view=|| view! { <RequireAdmin><AdminHomePage/></RequireAdmin> }
                    />
                    <Route
                        path=(
                            StaticSegment("dashboard"),
                            StaticSegment("admin"),
                            StaticSegment("manage-users"),
                        )
                        view=|| view! { <RequireAdmin><ManageUsersPage/></RequireAdmin> }
                    />
                    <Route
                        path=(
                            StaticSegment("dashboard"),
                            StaticSegment("admin"),
                            StaticSegment("manage-lessons"),
                        )
                        view=|| view! { <RequireAdmin><ManageLessonsPage/></RequireAdmin> }
                    />
                    <Route
                        path=(
                            StaticSegment("dashboard"),
                            StaticSegment("admin"),
                            StaticSegment("reported-lessons"),
                        )
                        view=|| view! { <RequireAdmin><ReportedLessonsPage/></RequireAdmin> }
                    />
                    <Route
                        path=(
                            StaticSegment("dashboard"),
                            StaticSegment("admin"),
                            StaticSegment("profile"),
                        )
                        view=|| view! { <RequireAdmin><AdminProfilePage/></RequireAdmin> }
                    />
                </Routes>
            </main>
            <Footer/>
            <ToastHost/>
        </Router>
    }
}
