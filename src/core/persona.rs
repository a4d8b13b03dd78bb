use crate::models::{CrafterType, Mood};

/// Derive the crafter archetype from the quiz mood
///
/// Total over every mood value: buckets are checked in the order
/// stash-buster, quick, take-time, with Creative Maker as the fallback
/// for anything else. The same mood always produces the same archetype.
pub fn classify(mood: Mood) -> CrafterType {
    match mood {
        Mood::StashBuster => CrafterType {
            title: "Stash Buster Extraordinaire".to_string(),
            emoji: "♻️".to_string(),
            description: "You're a resourceful crafter who loves using what you already have! \
                          Your fabric stash doesn't stand a chance against your creativity."
                .to_string(),
        },
        Mood::Quick => CrafterType {
            title: "Quick Win Queen".to_string(),
            emoji: "⚡".to_string(),
            description: "You love the satisfaction of finishing projects fast! Quick, \
                          beautiful, and rewarding - that's your crafting style."
                .to_string(),
        },
        Mood::TakeTime => CrafterType {
            title: "Patient Perfectionist".to_string(),
            emoji: "🎨".to_string(),
            description: "You appreciate the journey as much as the destination. Your \
                          projects are labors of love worth every stitch!"
                .to_string(),
        },
        Mood::Unset => CrafterType {
            title: "Creative Maker".to_string(),
            emoji: "✨".to_string(),
            description: "You're ready to create something special! Your AccuQuilt dies \
                          are about to make magic."
                .to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_covers_all_moods() {
        assert_eq!(classify(Mood::StashBuster).title, "Stash Buster Extraordinaire");
        assert_eq!(classify(Mood::Quick).title, "Quick Win Queen");
        assert_eq!(classify(Mood::TakeTime).title, "Patient Perfectionist");
        assert_eq!(classify(Mood::Unset).title, "Creative Maker");
    }

    #[test]
    fn test_classify_is_deterministic() {
        assert_eq!(classify(Mood::Quick), classify(Mood::Quick));
        assert_eq!(classify(Mood::Unset), classify(Mood::Unset));
    }

    #[test]
    fn test_persona_tag_shape() {
        let tag = classify(Mood::StashBuster).tag();
        assert_eq!(tag, "stash-buster-extraordinaire");
        assert_eq!(classify(Mood::Unset).tag(), "creative-maker");
    }
}
