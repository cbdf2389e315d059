//! Maps NWS weather icon references to display symbols.
//!
//! The NWS API identifies conditions through icon URLs such as
//! `https://api.weather.gov/icons/land/day/tsra_sct,40?size=medium`. The final
//! path segment, stripped of its query string and of any probability variant
//! after a comma, is a short condition code drawn from a fixed vocabulary.

/// Symbol returned for icon codes outside the known vocabulary.
pub const UNKNOWN_SYMBOL: &str = "❓";

/// Extracts the condition code from an icon reference.
///
/// Takes the last `/` segment, drops everything from the first `?` (query
/// string) and from the first `,` (probability variant). A bare code like
/// `"skc"` passes through unchanged.
pub fn icon_code(icon_reference: &str) -> &str {
    let segment = icon_reference
        .rsplit('/')
        .next()
        .unwrap_or(icon_reference);
    let segment = segment.split('?').next().unwrap_or(segment);
    segment.split(',').next().unwrap_or(segment)
}

/// Returns the display symbol for an icon reference.
///
/// Total over all input: unrecognized codes (and arbitrary text) map to
/// [`UNKNOWN_SYMBOL`] rather than an error.
pub fn symbol_for_icon(icon_reference: &str) -> &'static str {
    match icon_code(icon_reference) {
        "skc" => "☀️",
        "few" => "🌤️",
        "sct" => "⛅",
        "bkn" => "🌥️",
        "ovc" => "☁️",
        "wind" => "🌬️",
        "rain" => "🌧️",
        "rain_showers" => "🌦️",
        "tsra" | "tsra_hi" | "tsra_sct" => "⛈️",
        "snow" => "❄️",
        "fog" => "🌫️",
        _ => UNKNOWN_SYMBOL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_code_from_full_url() {
        let url = "https://api.weather.gov/icons/land/day/tsra_sct,40?size=medium";
        assert_eq!(icon_code(url), "tsra_sct");
    }

    #[test]
    fn scattered_thunderstorm_url_maps_to_thunderstorm_symbol() {
        let url = "https://api.weather.gov/icons/land/day/tsra_sct?size=medium";
        assert_eq!(symbol_for_icon(url), "⛈️");
    }

    #[test]
    fn bare_codes_map_directly() {
        assert_eq!(symbol_for_icon("skc"), "☀️");
        assert_eq!(symbol_for_icon("rain_showers"), "🌦️");
        assert_eq!(symbol_for_icon("fog"), "🌫️");
    }

    #[test]
    fn unknown_input_falls_back_to_placeholder() {
        assert_eq!(symbol_for_icon(""), UNKNOWN_SYMBOL);
        assert_eq!(symbol_for_icon("not_a_code"), UNKNOWN_SYMBOL);
        assert_eq!(symbol_for_icon("https://example.com/icons/mystery?x=1"), UNKNOWN_SYMBOL);
    }
}
