//! Root application component with routing and context providers.
//!
//! ARCHITECTURE
//! ============
//! All shared state (session store, notifier) is created here and provided
//! via context; pages never construct their own. Access requirements are
//! declared per route with `RoleGate`, so the table below is the single
//! place to read who may see what.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::role_gate::RoleGate;
use crate::components::site_header::SiteHeader;
use crate::components::toast_host::ToastHost;
use crate::net::types::Role;
use crate::pages::admin_dashboard::AdminDashboardPage;
use crate::pages::auth::AuthPage;
use crate::pages::client_dashboard::ClientDashboardPage;
use crate::pages::kyc::{KycIntakePage, KycResubmitPage};
use crate::pages::landing::LandingPage;
use crate::pages::rfq_detail::RfqDetailPage;
use crate::pages::root::RootPage;
use crate::pages::vendor_dashboard::VendorDashboardPage;
use crate::state::notify::Notifier;
use crate::state::session::SessionStore;
use crate::util::gate::RouteRequirement;

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
///
/// Provides the session store and notifier, kicks off the initial session
/// resolution, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = SessionStore::new();
    let notify = Notifier::new();
    provide_context(session);
    provide_context(notify);

    // Initial resolution; sign-in and sign-out flows call refresh() again.
    session.refresh();

    view! {
        <Stylesheet id="leptos" href="/pkg/procura.css"/>
        <Title text="Procura"/>

        <Router>
            <SiteHeader/>
            <ToastHost/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=RootPage/>
                    <Route path=StaticSegment("landing") view=LandingPage/>
                    <Route path=StaticSegment("auth") view=AuthPage/>
                    <Route
                        path=StaticSegment("dashboard")
                        view=|| view! {
                            <RoleGate requirement=RouteRequirement::only(&[Role::Client])>
                                <ClientDashboardPage/>
                            </RoleGate>
                        }
                    />
                    <Route
                        path=StaticSegment("client-dashboard")
                        view=|| view! {
                            <RoleGate requirement=RouteRequirement::only(&[Role::Client])>
                                <ClientDashboardPage/>
                            </RoleGate>
                        }
                    />
                    <Route
                        path=StaticSegment("vendor-dashboard")
                        view=|| view! {
                            <RoleGate requirement=RouteRequirement::only(&[Role::Vendor])>
                                <VendorDashboardPage/>
                            </RoleGate>
                        }
                    />
                    <Route
                        path=StaticSegment("supplier-dashboard")
                        view=|| view! {
                            <RoleGate requirement=RouteRequirement::only(&[Role::Vendor])>
                                <VendorDashboardPage/>
                            </RoleGate>
                        }
                    />
                    <Route
                        path=StaticSegment("admin")
                        view=|| view! {
                            <RoleGate requirement=RouteRequirement::only(&[Role::Admin])>
                                <AdminDashboardPage/>
                            </RoleGate>
                        }
                    />
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("dashboard"))
                        view=|| view! {
                            <RoleGate requirement=RouteRequirement::only(&[Role::Admin])>
                                <AdminDashboardPage/>
                            </RoleGate>
                        }
                    />
                    <Route
                        path=StaticSegment("kyc")
                        view=|| view! {
                            <RoleGate requirement=RouteRequirement::only(&[Role::Client])>
                                <KycIntakePage/>
                            </RoleGate>
                        }
                    />
                    <Route
                        path=(StaticSegment("kyc"), StaticSegment("resubmit"))
                        view=|| view! {
                            <RoleGate requirement=RouteRequirement::only(&[Role::Client])>
                                <KycResubmitPage/>
                            </RoleGate>
                        }
                    />
                    <Route
                        path=(StaticSegment("rfq"), ParamSegment("id"))
                        view=|| view! {
                            <RoleGate requirement=RouteRequirement::any_authenticated()>
                                <RfqDetailPage/>
                            </RoleGate>
                        }
                    />
                </Routes>
            </main>
        </Router>
    }
}
