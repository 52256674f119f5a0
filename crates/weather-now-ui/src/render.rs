//! Plain-text rendering of the view state.

use weather_now_lookup::WeatherReport;

use crate::models::weather_model::ViewState;

pub const TITLE: &str = "🌤 Weather Now";
pub const PROMPT: &str = "Enter city name...";
pub const LOADING: &str = "Loading...";

/// Observation times are local to the place, minute precision
const OBSERVED_FORMAT: &str = "%Y-%m-%d %H:%M";

#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    /// Emoji glyphs; when off, symbolic icon names are shown in brackets
    pub show_icons: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { show_icons: true }
    }
}

/// Render the whole screen below the title.
pub fn render(state: &ViewState, options: RenderOptions) -> String {
    if state.loading {
        return LOADING.to_string();
    }

    let mut lines = Vec::new();
    if let Some(message) = &state.error_message {
        lines.push(message.clone());
    }
    if let Some(report) = &state.report {
        lines.push(render_report(report, options));
    }
    lines.join("\n")
}

pub fn render_report(report: &WeatherReport, options: RenderOptions) -> String {
    let d = &report.descriptor;
    let (icon, temp_icon, wind_icon) = if options.show_icons {
        (d.glyph.to_string(), "🌡 ", "💨 ")
    } else {
        (format!("[{}]", d.icon), "", "")
    };

    let mut text = format!(
        "{} {}\n{}\n{}Temperature: {:.1}°C\n{}Wind Speed: {:.1} km/h",
        icon,
        report.display_name(),
        d.label,
        temp_icon,
        report.current.temperature,
        wind_icon,
        report.current.wind_speed,
    );
    if let Some(observed_at) = report.current.observed_at {
        text.push_str(&format!("\nObserved: {}", observed_at.format(OBSERVED_FORMAT)));
    }
    text
}
