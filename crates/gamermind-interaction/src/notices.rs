//! Canned wellness notices broadcast into the chat feed.

use rand::Rng;

/// Notices posted periodically under the platform author name.
pub static WELLNESS_NOTICES: [&str; 5] = [
    "Remember: You're not alone in this journey. 💙",
    "Take breaks when you need them. Self-care is important. 🌟",
    "This is a safe space for everyone. Please be kind. 💚",
    "If you're in crisis, please reach out to a professional. 🆘",
    "Small steps lead to big changes. Keep going! ⭐",
];

/// Picks one of the wellness notices at random.
pub fn random_notice<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    WELLNESS_NOTICES[rng.gen_range(0..WELLNESS_NOTICES.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_notice_count() {
        assert_eq!(WELLNESS_NOTICES.len(), 5);
    }

    #[test]
    fn test_notices_are_unique_and_non_empty() {
        let unique: HashSet<&str> = WELLNESS_NOTICES.iter().copied().collect();
        assert_eq!(unique.len(), WELLNESS_NOTICES.len());
        for notice in WELLNESS_NOTICES {
            assert!(!notice.is_empty());
        }
    }

    #[test]
    fn test_random_notice_comes_from_pool() {
        let mut rng = rand::thread_rng();
        for _ in 0..20 {
            let notice = random_notice(&mut rng);
            assert!(WELLNESS_NOTICES.contains(&notice));
        }
    }
}
