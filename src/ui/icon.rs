use leptos::prelude::*;

/// Inline stroke icon
#[component]
pub fn Icon(
    /// Icon name, one of [`icons`]
    name: &'static str,
    /// CSS classes for sizing and color
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            class=class
            fill="none"
            stroke="currentColor"
            viewBox="0 0 24 24"
            aria-hidden="true"
        >
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d=icons::path(name) />
        </svg>
    }
}

/// Predefined icons
pub mod icons {
    pub const CHECK: &str = "check";
    pub const LOADER: &str = "loader";
    pub const HOME: &str = "home";

    /// SVG path data for an icon name; unknown names draw nothing
    pub fn path(name: &str) -> &'static str {
        match name {
            CHECK => "M5 13l4 4L19 7",
            LOADER => "M12 4v2m0 12v2m8-8h-2M6 12H4m12.95 4.95l-1.414-1.414M8.464 8.464L7.05 7.05m9.9 0l-1.414 1.414M8.464 15.536L7.05 16.95",
            HOME => "M3 12l9-9 9 9M5 10v10h5v-6h4v6h5V10",
            _ => "",
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_known_icons_have_paths() {
            for name in [CHECK, LOADER, HOME] {
                assert!(!path(name).is_empty(), "missing path for {}", name);
            }
        }

        #[test]
        fn test_unknown_icon_is_empty() {
            assert_eq!(path("does-not-exist"), "");
        }
    }
}
