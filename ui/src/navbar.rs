//! Top navigation bar: brand, dashboard/profile links, currency selector,
//! and logout. Hidden entirely while logged out.

use dioxus::prelude::*;

use crate::icons::{FaChevronDown, FaRightFromBracket, FaShieldHalved, FaTableColumns, FaUser};
use crate::{log_out, set_currency, use_auth, use_currency, Icon, SUPPORTED_CURRENCIES};

#[component]
pub fn Navbar(
    on_navigate_dashboard: EventHandler<()>,
    on_navigate_profile: EventHandler<()>,
    on_logged_out: EventHandler<()>,
) -> Element {
    let auth = use_auth();
    let currency = use_currency();
    let mut show_currencies = use_signal(|| false);

    let Some(user) = auth().user else {
        return rsx! {};
    };

    rsx! {
        nav {
            class: "navbar",
            div {
                class: "navbar-brand",
                Icon { icon: FaShieldHalved, width: 22, height: 22 }
                h1 { "SecureBank" }
            }

            div {
                class: "navbar-menu",
                button {
                    class: "nav-link",
                    onclick: move |_| on_navigate_dashboard.call(()),
                    Icon { icon: FaTableColumns, width: 16, height: 16 }
                    "Dashboard"
                }
                button {
                    class: "nav-link",
                    onclick: move |_| on_navigate_profile.call(()),
                    Icon { icon: FaUser, width: 16, height: 16 }
                    "Profile"
                }

                div {
                    class: "currency-selector",
                    button {
                        class: "currency-btn",
                        onclick: move |_| show_currencies.set(!show_currencies()),
                        span { "{currency().code()}" }
                        Icon { icon: FaChevronDown, width: 12, height: 12 }
                    }

                    if show_currencies() {
                        div {
                            class: "currency-dropdown",
                            for option in SUPPORTED_CURRENCIES {
                                button {
                                    key: "{option.code}",
                                    class: if currency().code() == option.code {
                                        "currency-option active"
                                    } else {
                                        "currency-option"
                                    },
                                    onclick: move |_| {
                                        set_currency(currency, option.code);
                                        show_currencies.set(false);
                                    },
                                    span { class: "currency-symbol", "{option.symbol}" }
                                    span { class: "currency-name", "{option.name}" }
                                    span { class: "currency-code", "{option.code}" }
                                }
                            }
                        }
                    }
                }

                div {
                    class: "navbar-user",
                    span { class: "user-name", "{user.display_name()}" }
                    button {
                        class: "logout-btn",
                        onclick: move |_| {
                            log_out(auth);
                            on_logged_out.call(());
                        },
                        Icon { icon: FaRightFromBracket, width: 14, height: 14 }
                        "Sign out"
                    }
                }
            }
        }
    }
}
