//! Meme text generation: top text, bottom text, and a meme format tag.

use rand::seq::SliceRandom;

use crate::KeywordTable;

pub const SYSTEM_PROMPT: &str = "\
Convert complaints into viral meme format. Create:
- Top text and bottom text for memes
- Relatable format that others can share
- Classic meme structures
- Keep it punchy and shareable
- Use meme language and style

Return JSON with: {\"top_text\": \"...\", \"bottom_text\": \"...\", \"meme_type\": \"...\"}";

/// One meme template: caption pair plus the format it belongs on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MemeText {
    pub top_text: &'static str,
    pub bottom_text: &'static str,
    pub meme_type: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    Autocorrect,
    VoiceAssistant,
    Chatbot,
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
    ],
    Category::General,
);

pub fn templates(category: Category) -> &'static [MemeText] {
    match category {
        Category::Autocorrect => &[
            MemeText {
                top_text: "TRIES TO TYPE NORMAL MESSAGE",
                bottom_text: "AUTOCORRECT: LET ME RUIN YOUR LIFE",
                meme_type: "drake_pointing",
            },
            MemeText {
                top_text: "AUTOCORRECT",
                bottom_text: "MAKING EVERYONE LOOK ILLITERATE SINCE 2007",
                meme_type: "change_my_mind",
            },
            MemeText {
                top_text: "WHEN AUTOCORRECT CHANGES 'THANKS' TO 'TANKS'",
                bottom_text: "NOW I SOUND LIKE A MILITARY ENTHUSIAST",
                meme_type: "distracted_boyfriend",
            },
        ],
        Category::VoiceAssistant => &[
            MemeText {
                top_text: "ASKS VOICE ASSISTANT SIMPLE QUESTION",
                bottom_text: "GETS EXISTENTIAL CRISIS INSTEAD",
                meme_type: "surprised_pikachu",
            },
            MemeText {
                top_text: "ALEXA, PLAY MY MUSIC",
                bottom_text: "ALEXA: PLAYS NEIGHBOR'S POLKA COLLECTION",
                meme_type: "this_is_fine",
            },
            MemeText {
                top_text: "SMART SPEAKER INTELLIGENCE LEVEL",
                bottom_text: "CONFUSED POTATO",
                meme_type: "brain_expansion",
            },
        ],
        Category::Chatbot => &[
            MemeText {
                top_text: "CHATGPT: I'M VERY CONFIDENT",
                bottom_text: "ALSO CHATGPT: *COMPLETELY WRONG*",
                meme_type: "confident_but_wrong",
            },
            MemeText {
                top_text: "ASKS AI FOR HELP",
                bottom_text: "GETS PHILOSOPHY DEGREE INSTEAD",
                meme_type: "monkey_puppet",
            },
            MemeText {
                top_text: "AI CHATBOT LOGIC",
                bottom_text: "50% GENIUS, 50% TODDLER WITH ENCYCLOPEDIA",
                meme_type: "galaxy_brain",
            },
        ],
        Category::General => &[
            MemeText {
                top_text: "AI WILL MAKE LIFE EASIER THEY SAID",
                bottom_text: "IT WILL BE FUN THEY SAID",
                meme_type: "ancient_aliens",
            },
            MemeText {
                top_text: "HUMANS: CREATE AI TO HELP US",
                bottom_text: "AI: CREATES NEW WAYS TO CONFUSE US",
                meme_type: "success_kid",
            },
            MemeText {
                top_text: "WHEN AI FAILS SPECTACULARLY",
                bottom_text: "BUT YOU STILL USE IT TOMORROW",
                meme_type: "clown_makeup",
            },
            MemeText {
                top_text: "AI TECHNOLOGY IN 2024",
                bottom_text: "ADVANCED ENOUGH TO WORRY US, DUMB ENOUGH TO ENTERTAIN US",
                meme_type: "two_buttons",
            },
        ],
    }
}

pub fn fallback_meme(complaint: &str) -> MemeText {
    *templates(CATEGORIES.classify(complaint))
        .choose(&mut rand::thread_rng())
        .expect("template pools are non-empty")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complaints_route_to_meme_categories() {
        assert_eq!(CATEGORIES.classify("autocorrect again"), Category::Autocorrect);
        assert_eq!(CATEGORIES.classify("ok google, why"), Category::VoiceAssistant);
        assert_eq!(CATEGORIES.classify("chatgpt hallucinated"), Category::Chatbot);
        assert_eq!(CATEGORIES.classify("the drone delivered to the wrong house"), Category::General);
    }

    #[test]
    fn meme_is_drawn_from_category_pool() {
        for _ in 0..20 {
            let meme = fallback_meme("siri called my boss");
            assert!(templates(Category::VoiceAssistant).contains(&meme));
            assert!(!meme.top_text.is_empty());
            assert!(!meme.bottom_text.is_empty());
            assert!(!meme.meme_type.is_empty());
        }
    }
}
