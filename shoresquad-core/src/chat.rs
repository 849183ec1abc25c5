//! Canned-response squad chat bot.
use rand::Rng;

/// What a chat message appears to be asking about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatIntent {
    Weather,
    Map,
    Cleanup,
    Impact,
    Slang,
    Default,
}

// Ordered: the first keyword group with a hit decides the intent.
const INTENT_KEYWORDS: &[(&[&str], ChatIntent)] = &[
    (
        &["weather", "forecast", "rain", "temperature"],
        ChatIntent::Weather,
    ),
    (&["map", "beach", "location", "where"], ChatIntent::Map),
    (&["cleanup", "clean", "trash", "plan"], ChatIntent::Cleanup),
    (&["impact", "kg", "removed", "track"], ChatIntent::Impact),
    (&["lah", "lor", "sia", "singlish"], ChatIntent::Slang),
];

/// Classify a message by ordered lower-cased keyword tests.
#[must_use]
pub fn detect_intent(message: &str) -> ChatIntent {
    let message = message.to_lowercase();
    for (needles, intent) in INTENT_KEYWORDS {
        if needles.iter().any(|needle| message.contains(needle)) {
            return *intent;
        }
    }
    ChatIntent::Default
}

/// The response pool for an intent. Never empty.
#[must_use]
pub const fn responses(intent: ChatIntent) -> &'static [&'static str] {
    match intent {
        ChatIntent::Weather => &[
            "🌤️ The forecast comes straight from Singapore's NEA! Check the Weather Vibes section for temperature, rain, and wind across the next four days.",
            "🌊 Perfect beach weather depends on rain and wind. Our 4-day forecast helps you pick the best day for a cleanup.",
        ],
        ChatIntent::Map => &[
            "🗺️ We cover four beaches: Pasir Ris Park, Sentosa Beach, East Coast Park, and Changi. Use the beach selector to see each one on the map!",
            "📍 The map shows exactly where to meet for cleanups. Pick a beach and zoom in for the precise spot.",
        ],
        ChatIntent::Cleanup => &[
            "📅 Planning a cleanup is easy! Pick a date, grab your crew, choose a beach, and let's make a difference.",
            "👥 Beach cleanups are more fun with friends. Invite your crew, set a time, and ShoreSquad tracks your impact in kg removed. 💪",
        ],
        ChatIntent::Impact => &[
            "📊 The impact tracker shows exactly how much trash you and your crew have removed, month by month. 🌍",
            "💚 Every kg of trash removed is a win for marine life. We celebrate your environmental wins here!",
        ],
        ChatIntent::Slang => &[
            "🇸🇬 Lah! This is Singapore, lor! The app is super straightforward - just tap around and you'll figure it out quickly, sia.",
            "😄 You're speaking our language! Let's do this cleanup together, lah!",
        ],
        ChatIntent::Default => &[
            "🌊 Thanks for your message! Ask me about the weather, the map, planning a cleanup, or our impact tracker.",
            "👋 Great question! Feel free to ask anything about ShoreSquad - I'm here to help you plan amazing beach cleanups.",
            "💬 Love the enthusiasm! Let me know if you need a hand getting your first cleanup going.",
        ],
    }
}

/// Pick one response from the intent's pool.
pub fn pick_response<R: Rng + ?Sized>(intent: ChatIntent, rng: &mut R) -> &'static str {
    let pool = responses(intent);
    pool[rng.gen_range(0..pool.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn weather_keywords_win_over_later_groups() {
        // "rain" and "where" both appear; weather is tested first.
        assert_eq!(
            detect_intent("Where does the rain data come from?"),
            ChatIntent::Weather
        );
        assert_eq!(detect_intent("What's the FORECAST like?"), ChatIntent::Weather);
    }

    #[test]
    fn each_intent_has_a_trigger() {
        assert_eq!(detect_intent("show me the map"), ChatIntent::Map);
        assert_eq!(detect_intent("how do I plan one?"), ChatIntent::Cleanup);
        assert_eq!(detect_intent("how many kg so far"), ChatIntent::Impact);
        assert_eq!(detect_intent("steady lah"), ChatIntent::Slang);
        assert_eq!(detect_intent("hello there"), ChatIntent::Default);
    }

    #[test]
    fn picked_response_always_comes_from_the_pool() {
        let mut rng = SmallRng::seed_from_u64(7);
        for intent in [
            ChatIntent::Weather,
            ChatIntent::Map,
            ChatIntent::Cleanup,
            ChatIntent::Impact,
            ChatIntent::Slang,
            ChatIntent::Default,
        ] {
            let pool = responses(intent);
            assert!(!pool.is_empty());
            for _ in 0..8 {
                let reply = pick_response(intent, &mut rng);
                assert!(pool.contains(&reply));
            }
        }
    }
}
