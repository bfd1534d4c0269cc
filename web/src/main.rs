use dioxus::prelude::*;

use api::ApiClient;
use ui::{AuthProvider, CurrencyProvider, Navbar, ToastHost, ToastProvider};
use views::{Dashboard, Login, Profile, Register};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Root {},
        #[route("/login")]
        Login {},
        #[route("/register")]
        Register {},
        #[route("/dashboard")]
        Dashboard {},
        #[route("/profile")]
        Profile {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // One backend client for the whole tree; the token is read from storage
    // per request, so the client itself is session-agnostic.
    use_context_provider(ApiClient::default);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            CurrencyProvider {
                ToastProvider {
                    Router::<Route> {}
                }
            }
        }
    }
}

/// App chrome around every route: the navbar (self-hiding while logged out)
/// and the toast host, which must outlive the view that raised a toast.
#[component]
fn Shell() -> Element {
    let nav = use_navigator();

    rsx! {
        div {
            class: "app",
            Navbar {
                on_navigate_dashboard: move |_| { nav.push(Route::Dashboard {}); },
                on_navigate_profile: move |_| { nav.push(Route::Profile {}); },
                on_logged_out: move |_| { nav.push(Route::Login {}); },
            }
            main { class: "main-content", Outlet::<Route> {} }
            ToastHost {}
        }
    }
}

/// Redirect `/` to `/dashboard`; the dashboard's own guard bounces
/// unauthenticated visitors on to the login view.
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Dashboard {});
    rsx! {}
}
