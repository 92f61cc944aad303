use leptos::prelude::*;

/// SVG icon served from `/icons`
#[component]
pub fn Icon(
    /// Icon file name (without the .svg extension)
    name: &'static str,
    /// CSS classes
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=""
            aria-hidden="true"
            draggable=false
        />
    }
}

/// Icon names used across the landing page
pub mod icons {
    pub const ALERT_CIRCLE: &str = "alert-circle";
    pub const CHECK: &str = "check";
    pub const CHEVRON_DOWN: &str = "chevron-down";
    pub const LOADER: &str = "loader";
    pub const LOGO: &str = "brightline";
    pub const MENU: &str = "menu";
    pub const X: &str = "x";
}
