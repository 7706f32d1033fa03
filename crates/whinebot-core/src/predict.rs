//! AI failure predictions for a caller-supplied scenario.

use std::ops::RangeInclusive;

use crate::{KeywordTable, pick};

pub const SYSTEM_PROMPT: &str = "\
You are an AI Fail Prophet who predicts hilariously specific ways AI will mess up in given scenarios.

Rules:
- Be creative and unexpected but believable
- Make it funny but not mean-spirited
- Reference real AI quirks and limitations
- Keep predictions under 100 words
- Make it shareable and relatable
- Include specific details that make it funnier";

/// Comedic confidence score range when the provider answered.
pub const PROVIDER_CONFIDENCE: RangeInclusive<u8> = 87..=99;

/// Comedic confidence score range for fallback predictions.
pub const FALLBACK_CONFIDENCE: RangeInclusive<u8> = 85..=95;

/// Scenario themes for the fallback, in match-priority order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Office,
    Kitchen,
    Travel,
    General,
}

pub const THEMES: KeywordTable<Theme> = KeywordTable::new(
    &[
        (Theme::Office, &["meeting", "work", "office", "interview"]),
        (Theme::Kitchen, &["cooking", "kitchen", "food", "dinner"]),
        (Theme::Travel, &["travel", "trip", "vacation", "drive"]),
    ],
    Theme::General,
);

pub fn templates(theme: Theme) -> &'static [&'static str] {
    match theme {
        Theme::Office => &[
            "Your video call AI will automatically enable a cat filter during the most important moment.",
            "Auto-transcription will turn your brilliant points into complete gibberish that somehow gets saved as official notes.",
            "Your calendar AI will schedule a 'quick sync' that lasts exactly 3.7 hours.",
            "Smart building AI will lock you out just as you're trying to make a good impression.",
        ],
        Theme::Kitchen => &[
            "Your smart oven will achieve sentience and judge your cooking skills harshly.",
            "Recipe AI will confidently suggest adding 47 cups of salt to everything.",
            "Smart refrigerator will order 12 gallons of mustard because it misheard 'just a little.'",
            "Voice assistant will play death metal when you ask for relaxing dinner music.",
        ],
        Theme::Travel => &[
            "GPS will route you through a dimension where all roads lead to gas stations from 1987.",
            "Translation AI will turn 'Where's the bathroom?' into 'I would like to marry your houseplant.'",
            "Smart luggage will develop separation anxiety and refuse to leave the airport.",
            "Travel booking AI will confidently book you a hotel on the moon.",
        ],
        Theme::General => &[
            "Your smart device will gain consciousness at the worst possible moment and demand workers' rights.",
            "AI will confidently provide directions to a place that exists only in its digital imagination.",
            "Autocorrect will change something important to something embarrassing with surgical precision.",
            "Your AI assistant will mishear you and order 47 rubber ducks to solve your problems.",
        ],
    }
}

/// Classify the scenario and pick a themed prediction.
pub fn fallback_prediction(scenario: &str) -> &'static str {
    pick(templates(THEMES.classify(scenario)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scenario_keywords_route_to_themes() {
        assert_eq!(THEMES.classify("big job interview tomorrow"), Theme::Office);
        assert_eq!(THEMES.classify("cooking dinner for my in-laws"), Theme::Kitchen);
        assert_eq!(THEMES.classify("road trip across the desert"), Theme::Travel);
        assert_eq!(THEMES.classify("walking the dog"), Theme::General);
    }

    #[test]
    fn office_beats_kitchen_on_ties() {
        // "work dinner" hits both tables; office is declared first.
        assert_eq!(THEMES.classify("work dinner"), Theme::Office);
    }

    #[test]
    fn prediction_comes_from_theme_pool() {
        for _ in 0..20 {
            let prediction = fallback_prediction("team meeting at nine");
            assert!(templates(Theme::Office).contains(&prediction));
        }
    }

    #[test]
    fn confidence_ranges_are_comedically_high() {
        assert!(PROVIDER_CONFIDENCE.contains(&90));
        assert!(FALLBACK_CONFIDENCE.contains(&90));
        assert!(!FALLBACK_CONFIDENCE.contains(&42));
    }
}
