//! Sports-announcer commentary for head-to-head complaint battles.

use rand::seq::SliceRandom;

use crate::{INTERPOLATION_CHAR_CAP, KeywordTable, truncate_chars};

pub const SYSTEM_PROMPT: &str = "\
You are a sports announcer commentating on AI failure battles.
Be dramatic, entertaining, and funny. Treat each complaint like a contestant in a competition.
Include play-by-play commentary, analysis of each complaint's \"power level\", and a prediction.
Make it sound like a wrestling match or boxing commentary.";

/// Build the user message describing the matchup.
pub fn user_prompt(complaint1: &str, complaint2: &str) -> String {
    format!("Commentate on this battle:\nComplaint 1: {complaint1}\nComplaint 2: {complaint2}")
}

/// The canonical complaint taxonomy used for battle matchups.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    Autocorrect,
    VoiceAssistant,
    Chatbot,
    SmartHome,
    Navigation,
    General,
}

impl Category {
    pub fn name(self) -> &'static str {
        match self {
            Category::Autocorrect => "autocorrect",
            Category::VoiceAssistant => "voice_assistant",
            Category::Chatbot => "chatbot",
            Category::SmartHome => "smart_home",
            Category::Navigation => "navigation",
            Category::General => "general",
        }
    }
}

pub const CATEGORIES: KeywordTable<Category> = KeywordTable::new(
    &[
        (
            Category::Autocorrect,
            &["autocorrect", "correct", "typing", "keyboard"],
        ),
        (
            Category::VoiceAssistant,
            &["alexa", "siri", "google", "assistant", "voice"],
        ),
        (Category::Chatbot, &["gpt", "chatgpt", "chat", "bot"]),
        (Category::SmartHome, &["smart", "home", "device", "iot"]),
        (
            Category::Navigation,
            &["gps", "maps", "navigation", "directions"],
        ),
    ],
    Category::General,
);

const AUTOCORRECT_VS_VOICE: &[&str] = &[
    "🥊 In the left corner, we have Autocorrect - the silent assassin that strikes when you least expect it! In the right corner, Voice Assistant - loud, proud, and completely misunderstands everything! This is going to be EPIC!",
    "Ladies and gentlemen, autocorrect comes in swinging with precision stupidity, but voice assistant counters with confident wrongness! What a match!",
    "The battle of the input methods! Autocorrect says 'I'll ruin your typing,' while Voice Assistant shouts 'Hold my digital beer!' The crowd is on their feet!",
];

const CHATBOT_VS_SMART_HOME: &[&str] = &[
    "🤖 CHATBOT ENTERS THE RING with philosophical confusion! But wait - Smart Home Device responds with physical world chaos! This is artificial intelligence vs. artificial intelligence in the ultimate showdown!",
    "Chatbot throws a devastating 'I don't understand your question' while Smart Home counters with 'I've locked you out of your own house!' The referee is calling this match early!",
    "Two titans of technological terror face off! Chatbot's weapon: existential dread. Smart Home's weapon: actual consequences. Place your bets, folks!",
];

const GENERIC_MATCHUPS: &[&str] = &[
    "🚨 LADIES AND GENTLEMEN, welcome to the AI FAILURE THUNDERDOME! Two spectacular technological disasters enter, but only one can be crowned the ultimate digital disappointment!",
    "The crowd goes WILD as we witness this clash of artificial unintelligence! Both competitors have trained their entire existence to let humans down!",
    "🥊 In a stunning display of technological dysfunction, we have TWO heavyweight champions of chaos! The anticipation is killing me - almost as much as these AI failures are killing productivity!",
    "THIS IS IT! The moment we've all been waiting for! Two legendary fails square off in the ultimate battle of who can disappoint humans more creatively!",
    "🔥 THE BATTLE OF THE BOTS! One algorithm's trash is another algorithm's treasure, but today they're both just trash! What a magnificent display of digital disaster!",
];

fn same_category_opener(category: Category) -> String {
    let name = category.name();
    let openers = [
        format!(
            "🔥 WE HAVE A {upper} VS {upper} SHOWDOWN! Two warriors from the same technological battlefield, but only one can claim the crown of ultimate AI failure!",
            upper = name.to_uppercase()
        ),
        format!(
            "It's a civil war in the {name} category! Brother against brother, failure against failure! This is what we call a classic grudge match!"
        ),
        format!(
            "The {name} division championship is ON! Both competitors know each other's weaknesses, making this a battle of pure dysfunction!"
        ),
    ];
    openers
        .choose(&mut rand::thread_rng())
        .cloned()
        .expect("template pools are non-empty")
}

fn detail_tail(complaint1: &str, complaint2: &str) -> String {
    let details = [
        format!(
            " Contestant 1 brings the pain with '{}...' - that's a solid 8/10 on the frustration scale!",
            truncate_chars(complaint1, INTERPOLATION_CHAR_CAP)
        ),
        format!(
            " But Contestant 2 fires back with '{}...' - OH THE HUMANITY!",
            truncate_chars(complaint2, INTERPOLATION_CHAR_CAP)
        ),
        " The judges are impressed by the sheer audacity of both these failures!".to_string(),
        " This is why we can't have nice things, folks!".to_string(),
    ];
    details
        .choose(&mut rand::thread_rng())
        .cloned()
        .expect("template pools are non-empty")
}

/// Classify both complaints and assemble a matchup opener plus a detail tail.
pub fn fallback_commentary(complaint1: &str, complaint2: &str) -> String {
    let cat1 = CATEGORIES.classify(complaint1);
    let cat2 = CATEGORIES.classify(complaint2);

    let opener = match (cat1, cat2) {
        (Category::Autocorrect, Category::VoiceAssistant) => {
            crate::pick(AUTOCORRECT_VS_VOICE).to_string()
        }
        (Category::Chatbot, Category::SmartHome) => crate::pick(CHATBOT_VS_SMART_HOME).to_string(),
        _ if cat1 == cat2 => same_category_opener(cat1),
        _ => crate::pick(GENERIC_MATCHUPS).to_string(),
    };

    format!("{opener}{}", detail_tail(complaint1, complaint2))
}
