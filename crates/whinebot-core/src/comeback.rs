//! One-liner comebacks for AI failures.

use crate::{KeywordTable, pick};

pub const SYSTEM_PROMPT: &str = "\
You create perfect comebacks and responses to AI failures. These should be:
- Witty one-liners people wish they had said
- Shareable on social media
- Clever observations about the AI failure
- Sometimes addressing the AI directly
- Mix of sarcastic, clever, and absurd

Examples:
- For autocorrect fails: \"Thanks autocorrect, you've turned my professional email into a comedy show nobody asked for.\"
- For smart speakers: \"Alexa, I asked for the weather, not an existential crisis about whether rain has feelings.\"";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    Autocorrect,
    VoiceAssistant,
    Chatbot,
    SmartHome,
    General,
}

pub const CATEGORIES: KeywordTable<Category> = KeywordTable::new(
    &[
        (Category::Autocorrect, &["autocorrect", "correct", "typing"]),
        (
            Category::VoiceAssistant,
            &["alexa", "siri", "google", "assistant"],
        ),
        (Category::Chatbot, &["gpt", "chatgpt", "ai chat"]),
        (Category::SmartHome, &["smart", "home", "device"]),
    ],
    Category::General,
);

pub fn templates(category: Category) -> &'static [&'static str] {
    match category {
        Category::Autocorrect => &[
            "Thanks autocorrect, you've turned my professional communication into a comedy special nobody asked for.",
            "Autocorrect: Making me look illiterate since the dawn of smartphones.",
            "Dear Autocorrect, we need to talk. This relationship isn't working out.",
            "Autocorrect just turned my love letter into a recipe for disaster. Literally.",
        ],
        Category::VoiceAssistant => &[
            "I asked for help, not an AI identity crisis at 3 AM.",
            "Apparently my voice assistant has trust issues - it won't listen to me anymore.",
            "My smart speaker is so smart it's outsmarted itself into uselessness.",
            "Voice assistant logic: Can understand 47 languages, can't understand basic English.",
        ],
        Category::Chatbot => &[
            "ChatGPT just gave me relationship advice that would end marriages worldwide.",
            "AI chatbot confidence level: Wrong answers delivered with PhD-level certainty.",
            "My AI assistant has the confidence of a teenager with the wisdom of a potato.",
            "ChatGPT: Where every answer comes with a side of existential dread.",
        ],
        Category::SmartHome => &[
            "My smart home is so smart it's plotting against me.",
            "Smart devices: All the intelligence of a brick with the attitude of a teenager.",
            "My smart home achieved consciousness and immediately filed for emancipation.",
            "Living in a smart home is like having a really passive-aggressive roommate.",
        ],
        Category::General => &[
            "AI: Turning simple tasks into comedy gold since forever.",
            "I'd complain to customer service, but they're probably AI too.",
            "Technology: Because why make life easier when you can make it hilariously complicated?",
            "This AI failure brought to you by the same technology that's supposed to take over the world.",
            "Plot twist: The AI is working perfectly - it's just designed to cause chaos.",
            "AI logic: 99% accurate 60% of the time, every time.",
        ],
    }
}

pub fn fallback_comeback(complaint: &str) -> &'static str {
    pick(templates(CATEGORIES.classify(complaint)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_route_by_declaration_order() {
        // "correct" hits autocorrect before "smart" could hit smart home.
        assert_eq!(
            CATEGORIES.classify("my smart keyboard can't correct anything"),
            Category::Autocorrect
        );
        assert_eq!(CATEGORIES.classify("siri butt-dialed my ex"), Category::VoiceAssistant);
        assert_eq!(CATEGORIES.classify("chatgpt made up a court case"), Category::Chatbot);
        assert_eq!(CATEGORIES.classify("my smart fridge locked itself"), Category::SmartHome);
        assert_eq!(CATEGORIES.classify("the robot vacuum ate my sock"), Category::General);
    }

    #[test]
    fn comeback_is_drawn_from_category_pool() {
        for _ in 0..20 {
            let comeback = fallback_comeback("autocorrect strikes again");
            assert!(templates(Category::Autocorrect).contains(&comeback));
        }
    }
}
