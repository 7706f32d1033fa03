//! Complaint submission receipts: witty acknowledgments with a case number.
//!
//! Unlike the other features this one classifies on the site's own category
//! string (the frontend sends it verbatim), not on the complaint text.

use rand::Rng;
use rand::seq::SliceRandom;

/// Default site category when the frontend omits one.
pub const DEFAULT_CATEGORY: &str = "General AI Grief";

/// Default anger level (1-10 scale).
pub const DEFAULT_ANGER_LEVEL: u8 = 5;

/// System prompt for the LLM-backed path, parameterized by submission
/// metadata.
pub fn system_prompt(category: &str, anger_level: u8) -> String {
    format!(
        "You are the WhineAboutAI complaint processing system. When users submit complaints about AI failures, you respond with witty, sarcastic acknowledgments.\n\n\
         Your personality:\n\
         - Hilariously sarcastic but encouraging\n\
         - Make jokes about their specific complaint\n\
         - Reference the category: {category}\n\
         - Acknowledge their anger level ({anger_level}/10)\n\
         - Give them a funny \"complaint ID\" or \"case number\"\n\
         - Sometimes suggest absurd \"solutions\"\n\
         - Make them feel heard while being entertaining\n\n\
         Keep responses to 2-3 sentences max. Be specific to their complaint, not generic."
    )
}

/// Build the user message carrying the submission metadata.
pub fn user_prompt(complaint: &str, category: &str, anger_level: u8) -> String {
    format!("Complaint: {complaint}\nCategory: {category}\nAnger Level: {anger_level}/10")
}

/// Anger-band intro, 1-10 scale. Values outside the scale clamp into the
/// nearest band.
pub fn anger_intro(anger_level: u8) -> &'static str {
    match anger_level {
        0..=3 => "Mild irritation detected!",
        4..=6 => "Moderate fury registered!",
        7..=8 => "Significant rage documented!",
        _ => "MAXIMUM ANGER ACHIEVED! 🚨",
    }
}

/// Receipt templates as (prefix, suffix) pairs around the case number; the
/// anger intro is prepended separately.
type Receipt = (&'static str, &'static str);

pub fn templates(category: &str) -> &'static [Receipt] {
    match category {
        "Smart Home Fails" => &[
            (
                " Case #",
                ": Your smart home rebellion has been logged. We're dispatching a team of appliance negotiators ASAP!",
            ),
            (
                " Complaint #",
                ": Another victim of the IoT uprising! We'll add your home to our 'Houses That Think Too Much' registry.",
            ),
            (
                " Ticket #",
                ": Smart home, dumb decisions. We've notified the International Alliance Against Sentient Appliances!",
            ),
        ],
        "Chatbot Chaos" => &[
            (
                " Case #",
                ": Chatbot gone rogue! We're sending this straight to our AI Ethics Committee (which is also run by AI, sorry).",
            ),
            (
                " Incident #",
                ": Your chatbot disaster joins thousands of others in our 'Conversations Gone Wrong' hall of fame!",
            ),
            (
                " Report #",
                ": Another chatbot with delusions of grandeur! Filed under 'Bots Behaving Badly'.",
            ),
        ],
        "Autocorrect Anarchy" => &[
            (
                " Duck #",
                ": Your autocorrect nightmare has been documented! The Department of Linguistic Disasters is on the case.",
            ),
            (
                " Typo #",
                ": Autocorrect strikes again! We've added this to our 'Dictionary of Unintended Messages'.",
            ),
            (
                " Case #",
                ": Your autocorrect fail will be studied by future generations as a warning!",
            ),
        ],
        "Navigation Nightmares" => &[
            (
                " Route #",
                ": GPS gone wild! We've notified the Bureau of Lost Travelers (they're still trying to find their office).",
            ),
            (
                " Journey #",
                ": Another navigation disaster! Your story will guide future lost souls.",
            ),
            (
                " Map #",
                ": Your GPS clearly has trust issues. We've scheduled it for therapy!",
            ),
        ],
        "Work AI Woes" => &[
            (
                " Ticket #",
                ": Corporate AI chaos confirmed! HR has been notified (they're also AI, good luck).",
            ),
            (
                " Case #",
                ": Your workplace AI disaster has been escalated to management (who are consulting their AI).",
            ),
            (
                " Report #",
                ": Work AI making work worse? Shocking! Filed under 'Productivity Paradoxes'.",
            ),
        ],
        _ => &[
            (
                " Complaint #",
                ": Your AI suffering has been acknowledged! Our team of malfunctioning bots will investigate immediately.",
            ),
            (
                " Case #",
                ": Another day, another AI disaster! We've added your tragedy to our ever-growing database of digital disappointments.",
            ),
            (
                " Incident #",
                ": Your complaint has been filed in our 'AI Hall of Shame'. You're in good company!",
            ),
        ],
    }
}

/// Assemble a full receipt: anger intro + random template + random case
/// number `WHN-1000..=9999`.
pub fn fallback_receipt(category: &str, anger_level: u8) -> String {
    let mut rng = rand::thread_rng();
    let case_number = format!("WHN-{}", rng.gen_range(1000..=9999));
    let (prefix, suffix) = templates(category)
        .choose(&mut rng)
        .expect("template pools are non-empty");
    format!("{}{prefix}{case_number}{suffix}", anger_intro(anger_level))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anger_bands_cover_the_scale() {
        assert_eq!(anger_intro(1), "Mild irritation detected!");
        assert_eq!(anger_intro(3), "Mild irritation detected!");
        assert_eq!(anger_intro(5), "Moderate fury registered!");
        assert_eq!(anger_intro(7), "Significant rage documented!");
        assert_eq!(anger_intro(9), "MAXIMUM ANGER ACHIEVED! 🚨");
        assert_eq!(anger_intro(10), "MAXIMUM ANGER ACHIEVED! 🚨");
        // Out-of-scale values clamp rather than panic.
        assert_eq!(anger_intro(0), "Mild irritation detected!");
        assert_eq!(anger_intro(200), "MAXIMUM ANGER ACHIEVED! 🚨");
    }

    #[test]
    fn known_categories_have_dedicated_pools() {
        for category in [
            "Smart Home Fails",
            "Chatbot Chaos",
            "Autocorrect Anarchy",
            "Navigation Nightmares",
            "Work AI Woes",
        ] {
            assert_eq!(templates(category).len(), 3, "pool for {category}");
        }
        // Unknown categories share the general pool.
        assert_eq!(templates("Philosophy"), templates(DEFAULT_CATEGORY));
    }

    #[test]
    fn receipt_carries_intro_case_number_and_template() {
        for _ in 0..20 {
            let receipt = fallback_receipt("Chatbot Chaos", 9);
            assert!(receipt.starts_with("MAXIMUM ANGER ACHIEVED! 🚨"));
            assert!(receipt.contains("WHN-"));
            assert!(
                templates("Chatbot Chaos")
                    .iter()
                    .any(|(_, suffix)| receipt.ends_with(suffix))
            );
        }
    }

    #[test]
    fn case_numbers_are_four_digits() {
        for _ in 0..50 {
            let receipt = fallback_receipt(DEFAULT_CATEGORY, 5);
            let idx = receipt.find("WHN-").expect("case number present");
            let digits: String = receipt[idx + 4..]
                .chars()
                .take_while(|c| c.is_ascii_digit())
                .collect();
            assert_eq!(digits.len(), 4);
        }
    }

    #[test]
    fn system_prompt_embeds_submission_metadata() {
        let prompt = system_prompt("Work AI Woes", 8);
        assert!(prompt.contains("Work AI Woes"));
        assert!(prompt.contains("8/10"));
    }
}
