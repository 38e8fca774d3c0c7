use leptos::*;
use leptos_meta::{provide_meta_context, Meta, Stylesheet, Title};
use leptos_router::{Redirect, Route, Router, Routes};

pub mod components;
pub mod i18n;
pub mod models;
pub mod pages;
pub mod routes;
pub mod session;
pub mod utils;

use components::guard::ProtectedShell;
use components::toast::{provide_toaster, ToastHost};
use pages::admin::AdminPage;
use pages::dashboard::DashboardPage;
use pages::inventory::InventoryPage;
use pages::issues::IssuesPage;
use pages::login::LoginPage;
use pages::not_found::NotFoundPage;
use pages::payment::PaymentPage;
use pages::purchase::PurchasePage;
use pages::sales::SalesPage;
use session::{default_marker_store, provide_session, Session};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_session(Session::restore(default_marker_store()));
    provide_toaster();

    view! {
        <Title text="Mall Magic"/>
        <Meta name="description" content="Mall Magic administration console"/>
        <Stylesheet id="leptos" href="/styles.css"/>

        <ToastHost/>
        <Router>
            <main>
                <Routes>
                    <Route path="/login" view=LoginPage/>
                    <Route path="/" view=|| view! { <Redirect path="/login"/> }/>
                    <Route path="" view=ProtectedShell>
                        <Route path="/dashboard" view=DashboardPage/>
                        <Route path="/admin" view=AdminPage/>
                        <Route path="/sales" view=SalesPage/>
                        <Route path="/inventory" view=InventoryPage/>
                        <Route path="/purchase" view=PurchasePage/>
                        <Route path="/payment" view=PaymentPage/>
                        <Route path="/issues" view=IssuesPage/>
                    </Route>
                    <Route path="/*any" view=NotFoundPage/>
                </Routes>
            </main>
        </Router>
    }
}
