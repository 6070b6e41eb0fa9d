use dioxus::prelude::*;
use crate::config::AppConfig;
use crate::types::USER_MENU_ENTRIES;

const LOGO: Asset = asset!("/assets/logo.svg");

#[component]
pub fn NavBar() -> Element {
    let config = use_context::<AppConfig>();
    let notifications = config.notification_count;

    rsx! {
        div { class: "nav-container",
            header {
                div { class: "nav-logo",
                    img { src: LOGO, class: "svg-logo", alt: "logo" }
                    a { "{config.brand_name}" }
                }

                ul { class: "nav-right",
                    // Search
                    li {
                        form {
                            onsubmit: move |evt| evt.prevent_default(),
                            input { r#type: "text" }
                            button { r#type: "submit",
                                i { class: "fas fa-search" }
                            }
                        }
                    }

                    // Notifications
                    li {
                        button { class: "nav-bell-btn",
                            i { class: "far fa-bell nav-bell-svg" }
                            if notifications > 0 {
                                i { class: "nav-bell-notification", "{notifications}" }
                            }
                        }
                    }

                    li {
                        crate::components::navigation::ToggleMenu {
                            label: config.user_display_name.clone(),
                            entries: USER_MENU_ENTRIES,
                        }
                    }
                }
            }
        }
    }
}
