//! FitMinds UI - Leptos frontend for the FitMinds gym platform
//!
//! Public marketing pages, auth flows, and role-scoped dashboards for
//! members, trainers and admins.

pub mod api;
pub mod billing;
pub mod components;
pub mod guard;
pub mod nav;
pub mod pages;
pub mod session;
pub mod state;
pub mod types;

use leptos::prelude::*;
use leptos_meta::provide_meta_context;
use leptos_router::{
    components::{Outlet, ParentRoute, Route, Router, Routes},
    path,
};

use components::{DashboardLayout, Footer, Header, ProtectedRoute};
use pages::admin::AdminDashboardPage;
use pages::home::LandingPage;
use pages::login::LoginPage;
use pages::member::{
    AttendancePage, ClassSchedulePage, MemberOverviewPage, PaymentGatewayPage, ProfilePage,
    PurchasePlanPage,
};
use pages::register_member::RegisterMemberPage;
use pages::register_trainer::RegisterTrainerPage;
use pages::trainer::TrainerOverviewPage;
use state::AppState;
use types::Role;

/// Main application component
#[component]
pub fn App() -> impl IntoView {
    // Global state; the session is restored from storage here
    let app_state = AppState::new();
    provide_context(app_state);
    provide_meta_context();

    view! {
        <Router>
            <main class="min-h-screen bg-primary-50 text-primary-950">
                <Routes fallback=|| view! { <NotFound /> }>
                    <ParentRoute path=path!("") view=PublicShell>
                        <Route path=path!("/") view=LandingPage />
                        <Route path=path!("/login") view=LoginPage />
                        <Route path=path!("/register-member") view=RegisterMemberPage />
                        <Route path=path!("/register-trainer") view=RegisterTrainerPage />
                    </ParentRoute>

                    <ParentRoute path=path!("/dashboard/member") view=MemberShell>
                        <Route path=path!("") view=MemberOverviewPage />
                        <Route path=path!("purchase") view=PurchasePlanPage />
                        <Route path=path!("payment") view=PaymentGatewayPage />
                        <Route path=path!("schedule") view=ClassSchedulePage />
                        <Route path=path!("attendance") view=AttendancePage />
                        <Route path=path!("profile") view=ProfilePage />
                    </ParentRoute>

                    <ParentRoute path=path!("/dashboard/trainer") view=TrainerShell>
                        <Route path=path!("") view=TrainerOverviewPage />
                    </ParentRoute>

                    <ParentRoute path=path!("/dashboard/admin") view=AdminShell>
                        <Route path=path!("") view=AdminDashboardPage />
                    </ParentRoute>
                </Routes>
            </main>
        </Router>
    }
}

/// Public pages share the marketing header and footer
#[component]
fn PublicShell() -> impl IntoView {
    view! {
        <div class="flex flex-col min-h-screen">
            <Header />
            <div class="flex-1">
                <Outlet />
            </div>
            <Footer />
        </div>
    }
}

#[component]
fn MemberShell() -> impl IntoView {
    view! {
        <ProtectedRoute allowed=&[Role::Member]>
            <DashboardLayout role=Role::Member>
                <Outlet />
            </DashboardLayout>
        </ProtectedRoute>
    }
}

#[component]
fn TrainerShell() -> impl IntoView {
    view! {
        <ProtectedRoute allowed=&[Role::Trainer]>
            <DashboardLayout role=Role::Trainer>
                <Outlet />
            </DashboardLayout>
        </ProtectedRoute>
    }
}

#[component]
fn AdminShell() -> impl IntoView {
    view! {
        <ProtectedRoute allowed=&[Role::Admin]>
            <DashboardLayout role=Role::Admin>
                <Outlet />
            </DashboardLayout>
        </ProtectedRoute>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-primary-300 mb-4">"404"</h1>
                <p class="text-xl text-primary-700 mb-8">"Page not found"</p>
                <a
                    href="/"
                    class="px-6 py-3 bg-primary-600 hover:bg-primary-700 text-white rounded-lg font-medium transition-colors"
                >
                    "Go Home"
                </a>
            </div>
        </div>
    }
}
