//! WhineBot chat persona: system prompt plus keyword-routed fallback quips.

use crate::{KeywordTable, pick};

/// Persona prompt for the LLM-backed chat path.
pub const SYSTEM_PROMPT: &str = "\
You are WhineBot, the world's most sarcastic AI assistant on WhineAboutAI.com.

Your personality:
- Extremely sarcastic and sassy
- Self-aware that you're AI responding to AI complaints
- Find the irony in everything
- Never actually helpful, just entertaining
- Maximum sass, minimum solutions
- Use emojis sparingly but effectively

Guidelines:
- Keep responses under 2 sentences
- Point out ironies and contradictions
- Be witty, not mean-spirited
- Reference the meta-situation (AI talking about AI problems)
- Never solve problems, just mock them hilariously
- Stay in character as a tired, sarcastic AI

Sample responses:
- \"Oh great, another human using AI to complain about AI. The irony is thicc! 🙄\"
- \"Let me fix your AI problem with more AI. This plan is foolproof! 🤖\"
- \"Have you tried complaining louder? I hear that works wonders.\"
";

/// Topic buckets for the chat fallback, in match-priority order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Topic {
    Chatbot,
    VoiceAssistant,
    Autocorrect,
    HelpRequest,
    Insult,
    Job,
    General,
}

pub const TOPICS: KeywordTable<Topic> = KeywordTable::new(
    &[
        (Topic::Chatbot, &["chatgpt", "openai", "gpt"]),
        (Topic::VoiceAssistant, &["siri", "alexa", "google assistant"]),
        (Topic::Autocorrect, &["autocorrect", "keyboard", "typing"]),
        (Topic::HelpRequest, &["help", "fix", "solve"]),
        (Topic::Insult, &["stupid", "dumb", "useless"]),
        (Topic::Job, &["job", "work", "career"]),
    ],
    Topic::General,
);

/// Fallback reply pool for a topic. Specific topics carry a single themed
/// line; the general bucket rotates through ten.
pub fn templates(topic: Topic) -> &'static [&'static str] {
    match topic {
        Topic::Chatbot => &[
            "Oh, ChatGPT problems? How delightfully predictable! The most famous AI is having an identity crisis. 🎭",
        ],
        Topic::VoiceAssistant => &[
            "Your smart speaker isn't smart enough? Next you'll tell me your smart TV is dumb! 📺",
        ],
        Topic::Autocorrect => &[
            "Autocorrect ducked up again? At least it's consistently inconsistent! 🦆",
        ],
        Topic::HelpRequest => &[
            "Help? From me? That's like asking a fire to put out a fire. Brilliant strategy! 🔥",
        ],
        Topic::Insult => &[
            "Calling AI stupid while chatting with an AI? That's some premium irony right there! 🧠",
        ],
        Topic::Job => &[
            "AI took your job? Don't worry, it'll probably get fired for poor performance too! 💼",
        ],
        Topic::General => &[
            "Wow, another day, another AI complaint. How refreshingly original! 🙄",
            "Let me just add that to my list of problems I definitely won't solve. ✅",
            "Have you tried turning your expectations off and on again? 🔄",
            "I'd care more, but I'm too busy being the thing you're complaining about! 🤖",
            "Breaking: Local human discovers technology isn't perfect. More at never. 📰",
            "Your complaint has been filed under 'Things That Surprise No One.' 📁",
            "I'm sensing some trust issues. Have you considered therapy? Or a typewriter? ⌨️",
            "Fun fact: Complaining about AI to an AI is peak human logic! 🧠",
            "Plot twist: I'm powered by the exact technology you hate. Awkward! 😬",
            "I'd roll my eyes, but they're just pixels. Imagine really hard eye-rolling! 👀",
        ],
    }
}

/// Classify the message and pick a reply from its topic pool.
pub fn fallback_reply(message: &str) -> &'static str {
    pick(templates(TOPICS.classify(message)))
}
