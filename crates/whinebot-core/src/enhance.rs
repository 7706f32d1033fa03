//! Complaint enhancement: rewrite a complaint in a chosen comedic style.

use rand::seq::SliceRandom;

/// Rewrite style requested by the caller. Unknown strings map to sarcastic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Style {
    Sarcastic,
    Dramatic,
    Absurd,
    Professional,
}

impl Style {
    pub fn parse(s: &str) -> Style {
        match s {
            "dramatic" => Style::Dramatic,
            "absurd" => Style::Absurd,
            "professional" => Style::Professional,
            _ => Style::Sarcastic,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Style::Sarcastic => "sarcastic",
            Style::Dramatic => "dramatic",
            Style::Absurd => "absurd",
            Style::Professional => "professional",
        }
    }

    /// Style-specific instruction folded into the system prompt.
    pub fn instruction(self) -> &'static str {
        match self {
            Style::Sarcastic => {
                "Make this complaint hilariously sarcastic while keeping the core frustration. Add witty observations and relatable metaphors."
            }
            Style::Dramatic => {
                "Turn this complaint into an overly dramatic, theatrical piece. Make it sound like a Shakespearean tragedy about technology."
            }
            Style::Absurd => {
                "Make this complaint completely absurd and over-the-top while keeping it relatable. Add unexpected comparisons."
            }
            Style::Professional => {
                "Rewrite this complaint as if it's a professional email that's trying too hard to be polite about AI failures."
            }
        }
    }
}

/// System prompt for the LLM-backed path, parameterized by style.
pub fn system_prompt(style: Style) -> String {
    format!(
        "You are a comedy writer specializing in AI failures. {}\n\n\
         Rules:\n\
         - Keep it under 280 characters for shareability\n\
         - Make it funnier than the original\n\
         - Don't lose the core frustration\n\
         - Add an unexpected twist or punchline\n\
         - Make it relatable to others",
        style.instruction()
    )
}

/// Fallback enhancement templates as (prefix, suffix) pairs wrapped around
/// the original complaint text.
pub fn templates(style: Style) -> &'static [(&'static str, &'static str)] {
    match style {
        Style::Sarcastic => &[
            ("", " ...because apparently AI perfection is just a myth! 🙄"),
            ("", " Thanks AI, you really nailed that one! 😏"),
            ("", " ...and they say AI will take over the world! 🤖💀"),
        ],
        Style::Dramatic => &[
            ("BEHOLD! ", " ...a tragedy of epic technological proportions! 🎭"),
            (
                "In the darkest hour of digital despair: ",
                " ...shall we ever recover? 💔",
            ),
            ("Oh cruel fate! ", " ...why must AI torment us so? ⚡"),
        ],
        Style::Absurd => &[
            (
                "",
                " ...I blame the robot uprising that clearly started in my living room! 🤖👽",
            ),
            ("", " ...my toaster probably orchestrated this whole thing! 🍞🔥"),
            ("", " ...somewhere, a programmer is laughing maniacally! 😈💻"),
        ],
        Style::Professional => &[
            (
                "Dear AI Development Team, ",
                " I trust this matter will receive your immediate attention. Regards! 📧",
            ),
            (
                "Per our previous discussion with reality, ",
                " Please advise on next steps. Best! 💼",
            ),
            (
                "Following up on the incident where ",
                " Looking forward to your response! 📋",
            ),
        ],
    }
}

/// Wrap the original complaint in a random template for the style.
/// The text is interpolated verbatim, untruncated.
pub fn fallback_enhancement(text: &str, style: Style) -> String {
    let (prefix, suffix) = templates(style)
        .choose(&mut rand::thread_rng())
        .expect("template pools are non-empty");
    format!("{prefix}{text}{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_style_defaults_to_sarcastic() {
        assert_eq!(Style::parse("sarcastic"), Style::Sarcastic);
        assert_eq!(Style::parse("dramatic"), Style::Dramatic);
        assert_eq!(Style::parse("interpretive-dance"), Style::Sarcastic);
        assert_eq!(Style::parse(""), Style::Sarcastic);
    }

    #[test]
    fn style_round_trips_through_as_str() {
        for style in [
            Style::Sarcastic,
            Style::Dramatic,
            Style::Absurd,
            Style::Professional,
        ] {
            assert_eq!(Style::parse(style.as_str()), style);
        }
    }

    #[test]
    fn enhancement_wraps_original_text() {
        let text = "my GPS sent me into a lake";
        for style in [
            Style::Sarcastic,
            Style::Dramatic,
            Style::Absurd,
            Style::Professional,
        ] {
            let enhanced = fallback_enhancement(text, style);
            assert!(enhanced.contains(text));
            let matched = templates(style)
                .iter()
                .any(|(pre, suf)| enhanced == format!("{pre}{text}{suf}"));
            assert!(matched, "enhancement not drawn from {style:?} pool");
        }
    }

    #[test]
    fn system_prompt_carries_style_instruction() {
        let prompt = system_prompt(Style::Dramatic);
        assert!(prompt.contains(Style::Dramatic.instruction()));
        assert!(prompt.contains("280 characters"));
    }
}
