use chrono::NaiveDate;
use shoresquad_core::IconCategory;

const AVATARS: &[&str] = &["👨‍💼", "👩‍💼", "👨‍🔧", "👩‍🌾", "👨‍⚕️", "👩‍💻", "👨‍🎨", "👩‍🍳"];

pub(super) fn avatar_for(index: usize) -> &'static str {
    AVATARS[index % AVATARS.len()]
}

/// Render a stored `YYYY-MM-DD` date as e.g. `28 Nov 2025`. Dates that fail
/// to parse (possible only in foreign snapshots) display as stored.
pub(super) fn event_date_label(date: &str) -> String {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").map_or_else(
        |_| date.to_string(),
        |parsed| parsed.format("%-d %b %Y").to_string(),
    )
}

pub(super) fn beach_emoji(location: &str) -> &'static str {
    match location {
        "East Coast Park" => "🏖️",
        "Sentosa Beach" => "🏝️",
        "Pasir Ris Park" => "🏄‍♂️",
        "Changi Beach" => "☂️",
        _ => "🌊",
    }
}

pub(super) const fn icon_symbol(icon: IconCategory) -> &'static str {
    match icon {
        IconCategory::Storm => "⛈️",
        IconCategory::Rain => "🌧️",
        IconCategory::Cloud => "☁️",
        IconCategory::Sun => "☀️",
        IconCategory::Haze => "🌫️",
        IconCategory::Wind => "💨",
        IconCategory::Partly => "🌤️",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn avatars_wrap_around() {
        assert_eq!(avatar_for(0), avatar_for(AVATARS.len()));
    }

    #[test]
    fn date_labels_fall_back_to_raw_text() {
        assert_eq!(event_date_label("2025-11-28"), "28 Nov 2025");
        assert_eq!(event_date_label("soon"), "soon");
    }

    #[test]
    fn unknown_locations_get_the_wave() {
        assert_eq!(beach_emoji("Punggol Point"), "🌊");
        assert_eq!(beach_emoji("Sentosa Beach"), "🏝️");
    }
}
