//! Theme
//!
//! Dark/light display mode. Components never thread a flag through props;
//! they read the theme from the global state context and ask it for the
//! utility classes of each surface.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    /// Root page background and default text color.
    pub fn app(&self) -> &'static str {
        match self {
            Theme::Dark => "bg-gray-900 text-white",
            Theme::Light => "bg-gray-50 text-gray-900",
        }
    }

    /// Card surface used by metric cards, chart panels and the table panel.
    pub fn card(&self) -> &'static str {
        match self {
            Theme::Dark => "bg-gray-800 border border-gray-700",
            Theme::Light => "bg-white border border-gray-200 shadow-sm",
        }
    }

    /// Header/footer chrome.
    pub fn chrome(&self) -> &'static str {
        match self {
            Theme::Dark => "bg-gray-800 border-gray-700",
            Theme::Light => "bg-white border-gray-200",
        }
    }

    pub fn text_muted(&self) -> &'static str {
        match self {
            Theme::Dark => "text-gray-400",
            Theme::Light => "text-gray-500",
        }
    }

    pub fn divider(&self) -> &'static str {
        match self {
            Theme::Dark => "border-gray-700",
            Theme::Light => "border-gray-200",
        }
    }

    /// Text inputs and inactive buttons.
    pub fn input(&self) -> &'static str {
        match self {
            Theme::Dark => "bg-gray-700 border-gray-600 text-white placeholder-gray-400",
            Theme::Light => "bg-gray-50 border-gray-200 text-gray-900 placeholder-gray-500",
        }
    }

    pub fn button_idle(&self) -> &'static str {
        match self {
            Theme::Dark => "bg-gray-700 text-gray-300 hover:bg-gray-600",
            Theme::Light => "bg-gray-100 text-gray-600 hover:bg-gray-200",
        }
    }

    pub fn row_hover(&self) -> &'static str {
        match self {
            Theme::Dark => "hover:bg-gray-700",
            Theme::Light => "hover:bg-gray-50",
        }
    }

    pub fn skeleton(&self) -> &'static str {
        match self {
            Theme::Dark => "bg-gray-700",
            Theme::Light => "bg-gray-300",
        }
    }

    // Canvas colors for the chart renderers.

    pub fn canvas_bg(&self) -> &'static str {
        match self {
            Theme::Dark => "#1f2937",
            Theme::Light => "#ffffff",
        }
    }

    pub fn grid_line(&self) -> &'static str {
        match self {
            Theme::Dark => "#374151",
            Theme::Light => "#e5e7eb",
        }
    }

    pub fn axis_label(&self) -> &'static str {
        match self {
            Theme::Dark => "#9ca3af",
            Theme::Light => "#6b7280",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trips() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }

    #[test]
    fn test_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Theme::Light).unwrap(), "\"light\"");
        assert_eq!(
            serde_json::from_str::<Theme>("\"dark\"").unwrap(),
            Theme::Dark
        );
    }
}
