use gamermind_core::chat::ChatColor;
use rand::Rng;

/// A scripted support bot that can be quoted into the chat feed.
///
/// Personas carry a fixed display color and a pool of canned lines.
/// The simulator picks a persona and a line at random on each bot tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotPersona {
    /// Display name shown as the message author.
    pub name: &'static str,
    /// Fixed presentation color for this persona.
    pub color: ChatColor,
    /// Pool of canned lines this persona can say.
    pub lines: &'static [&'static str],
}

/// SupportBot: encouragement and coping techniques.
///
/// Focuses on reassurance, celebrating progress, and simple in-the-moment
/// tools like breathing exercises.
pub static SUPPORT_BOT: BotPersona = BotPersona {
    name: "SupportBot",
    color: ChatColor::Cyan,
    lines: &[
        "Remember, it's okay to take breaks when you need them. Your mental health comes first! 💙",
        "You're not alone in this journey. Many gamers face similar challenges, and recovery is possible.",
        "Small steps lead to big changes. Celebrate every victory, no matter how small! ⭐",
        "If you're feeling overwhelmed, try the 4-7-8 breathing technique: inhale for 4, hold for 7, exhale for 8.",
        "Gaming can be part of a healthy lifestyle when balanced with other activities. You've got this! 🎮",
    ],
};

/// WellnessGuide: practical habit-building advice.
///
/// Offers concrete suggestions around timers, sleep, exercise, and keeping
/// gaming in balance with the rest of life.
pub static WELLNESS_GUIDE: BotPersona = BotPersona {
    name: "WellnessGuide",
    color: ChatColor::Purple,
    lines: &[
        "Have you tried setting gaming timers? They can help build awareness of time spent playing.",
        "Physical activity between gaming sessions can boost mood and energy. Even 5 minutes helps!",
        "Sleep is crucial for mental health. Consider setting a gaming curfew 1 hour before bed.",
        "Connecting with friends outside of gaming can provide valuable perspective and support.",
        "Mindful gaming means being present and intentional with your play time. Quality over quantity! 🧘",
    ],
};

/// All personas that participate in the simulated chat.
pub static BUILTIN_PERSONAS: [&BotPersona; 2] = [&SUPPORT_BOT, &WELLNESS_GUIDE];

impl BotPersona {
    /// Picks one of this persona's canned lines at random.
    pub fn random_line<R: Rng + ?Sized>(&self, rng: &mut R) -> &'static str {
        self.lines[rng.gen_range(0..self.lines.len())]
    }
}

/// Picks one of the built-in personas at random.
pub fn random_persona<R: Rng + ?Sized>(rng: &mut R) -> &'static BotPersona {
    BUILTIN_PERSONAS[rng.gen_range(0..BUILTIN_PERSONAS.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_persona_count() {
        assert_eq!(BUILTIN_PERSONAS.len(), 2);
    }

    #[test]
    fn test_builtin_persona_names_are_unique() {
        let names: HashSet<&str> = BUILTIN_PERSONAS.iter().map(|p| p.name).collect();
        assert_eq!(names.len(), BUILTIN_PERSONAS.len());
    }

    #[test]
    fn test_each_persona_has_lines() {
        for persona in BUILTIN_PERSONAS {
            assert_eq!(persona.lines.len(), 5, "{} should have 5 lines", persona.name);
            for line in persona.lines {
                assert!(!line.is_empty());
            }
        }
    }

    #[test]
    fn test_persona_colors() {
        assert_eq!(SUPPORT_BOT.color, ChatColor::Cyan);
        assert_eq!(WELLNESS_GUIDE.color, ChatColor::Purple);
    }

    #[test]
    fn test_random_line_comes_from_pool() {
        let mut rng = rand::thread_rng();
        for _ in 0..20 {
            let line = SUPPORT_BOT.random_line(&mut rng);
            assert!(SUPPORT_BOT.lines.contains(&line));
        }
    }

    #[test]
    fn test_random_persona_is_builtin() {
        let mut rng = rand::thread_rng();
        for _ in 0..20 {
            let persona = random_persona(&mut rng);
            assert!(BUILTIN_PERSONAS.iter().any(|p| p.name == persona.name));
        }
    }
}
