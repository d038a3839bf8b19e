//! Fixed interpretation tables, one entry per [`NumerologyNumber`] in
//! [`NumerologyNumber::ALL`] order.

use crate::number::NumerologyNumber;
use serde::Serialize;

/// Descriptive data attached to a Life Path number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Archetype {
    pub title: &'static str,
    pub strengths: &'static [&'static str],
    pub lucky_color: &'static str,
    pub lucky_day: &'static str,
}

const PERSONALITY_TRAITS: [&str; 12] = [
    "You are a natural-born leader with strong independence and determination. Your innovative thinking and self-reliance make you a pioneer in whatever field you choose.",
    "You possess a gentle, diplomatic nature with exceptional intuition. Your ability to see both sides of any situation makes you an excellent mediator and peacemaker.",
    "Your creativity and self-expression are your greatest gifts. You have a natural talent for communication and inspire others with your optimism and artistic vision.",
    "You are practical, organized, and dependable. Your strong work ethic and attention to detail create solid foundations for lasting success.",
    "Freedom and adventure drive your spirit. Your adaptability and curiosity lead you to diverse experiences that enrich your understanding of life.",
    "You are nurturing, responsible, and family-oriented. Your sense of duty and ability to create harmony make you a pillar of support for those around you.",
    "You possess deep wisdom and analytical abilities. Your spiritual nature and quest for truth lead you to profound insights and understanding.",
    "You have natural business acumen and leadership abilities. Your ambition and organizational skills position you for material and professional success.",
    "You are compassionate, humanitarian, and selfless. Your wisdom and universal love inspire you to make a positive difference in the world.",
    "As a Master Number 11, you have heightened intuition and spiritual insight. You are a visionary with the potential to inspire and uplift humanity.",
    "As a Master Number 22, you are the Master Builder with extraordinary potential to turn dreams into reality on a grand scale.",
    "As a Master Number 33, you embody the Master Teacher energy with profound compassion and the ability to heal and guide others.",
];

const CAREER_INSIGHTS: [&str; 12] = [
    "Leadership roles, entrepreneurship, and independent ventures suit you best. Consider careers in management, innovation, or starting your own business.",
    "Collaborative environments where you can use your diplomatic skills thrive. Consider counseling, human resources, or creative partnerships.",
    "Creative fields and communication-based careers align with your talents. Explore writing, performing arts, marketing, or teaching.",
    "Structured careers with clear progression suit your nature. Engineering, architecture, finance, or project management are excellent choices.",
    "Dynamic careers with variety and travel appeal to you. Sales, journalism, travel industry, or consulting offer the freedom you crave.",
    "Helping professions and creative arts resonate with you. Healthcare, education, design, or family counseling are fulfilling paths.",
    "Research, analysis, and spiritual pursuits match your depth. Academia, science, technology, or wellness industries are ideal.",
    "Business, finance, and executive roles harness your abilities. Corporate leadership, investment, or entrepreneurship bring success.",
    "Humanitarian work and creative expression fulfill you. Non-profits, arts, healing professions, or international work bring meaning.",
    "Spiritual teaching, counseling, and inspirational leadership align with your higher calling. The creative arts and metaphysical fields suit you.",
    "Large-scale projects, architecture, politics, or international business allow you to manifest your grand visions.",
    "Teaching, healing arts, counseling, and humanitarian leadership let you express your nurturing mastery.",
];

const RELATIONSHIP_INSIGHTS: [&str; 12] = [
    "In relationships, you need a partner who respects your independence while providing emotional support. Avoid being too controlling and remember that partnership requires balance.",
    "You seek deep emotional connections and harmony. Your sensitivity is a gift; find partners who appreciate and reciprocate your nurturing nature.",
    "Your charm and wit attract many admirers. Seek partners who share your love of fun and creativity while providing emotional stability.",
    "Loyalty and stability are paramount in your relationships. You need a dependable partner who values commitment as much as you do.",
    "Freedom within relationships is essential. Find partners who understand your need for space and share your love of adventure.",
    "You are natural caregivers who thrive in committed relationships. Seek partners who appreciate your devotion and reciprocate your love.",
    "You need intellectual and spiritual connection with your partner. Find someone who respects your need for solitude and deep conversation.",
    "You seek partners who match your ambition and drive. Balance your focus on success with quality time and emotional intimacy.",
    "Your universal love extends to your relationships. Find partners who share your humanitarian values and support your giving nature.",
    "You need a spiritually aware partner who understands your sensitivity and visionary nature.",
    "Seek partners who support your ambitious goals and understand the pressures of your master builder energy.",
    "You need a partner who appreciates your nurturing nature and shares your commitment to serving others.",
];

const DESTINY_PURPOSE: [&str; 12] = [
    "Your destiny is to lead and innovate. You are here to forge new paths and inspire others through your independence and originality.",
    "Your destiny is to bring harmony and cooperation. You are here to unite people and create peace through your diplomatic gifts.",
    "Your destiny is to express and create. You are here to inspire joy and beauty through your artistic talents and communication.",
    "Your destiny is to build and establish. You are here to create lasting structures and bring order through your dedication.",
    "Your destiny is to experience and liberate. You are here to embrace change and show others the beauty of freedom.",
    "Your destiny is to heal and nurture. You are here to create harmony and care for others through your loving presence.",
    "Your destiny is to seek and understand. You are here to uncover truth and share wisdom through your spiritual journey.",
    "Your destiny is to achieve and empower. You are here to master the material world and help others achieve abundance.",
    "Your destiny is to serve and complete. You are here to bring humanitarian ideals to life and heal on a universal level.",
    "Your destiny is to illuminate and inspire. You are here to channel higher wisdom and guide others toward spiritual awakening.",
    "Your destiny is to manifest and build on a grand scale. You are here to turn visionary ideas into practical reality for humanity.",
    "Your destiny is to teach and heal. You are here to embody unconditional love and guide humanity toward higher consciousness.",
];

const SOUL_URGE: [&str; 12] = [
    "Your soul craves independence and recognition. Deep down, you desire to be number one and lead others.",
    "Your soul craves love and partnership. Deep down, you desire harmony, peace, and meaningful connections.",
    "Your soul craves creative expression. Deep down, you desire to express yourself and bring joy to others.",
    "Your soul craves security and order. Deep down, you desire stability, structure, and lasting accomplishments.",
    "Your soul craves freedom and adventure. Deep down, you desire variety, excitement, and new experiences.",
    "Your soul craves love and family. Deep down, you desire to nurture, protect, and create a beautiful home.",
    "Your soul craves knowledge and solitude. Deep down, you desire understanding, wisdom, and spiritual truth.",
    "Your soul craves success and power. Deep down, you desire abundance, recognition, and material mastery.",
    "Your soul craves to serve humanity. Deep down, you desire to make a difference and leave a positive legacy.",
    "Your soul craves spiritual enlightenment. Deep down, you desire to inspire and illuminate the path for others.",
    "Your soul craves to build something lasting. Deep down, you desire to create something that benefits all humanity.",
    "Your soul craves to heal and teach. Deep down, you desire to embody unconditional love and uplift others.",
];

const OUTER_PERSONALITY: [&str; 12] = [
    "Others see you as confident, independent, and pioneering. You project an image of leadership and self-reliance.",
    "Others see you as gentle, cooperative, and diplomatic. You project an image of sensitivity and supportiveness.",
    "Others see you as charming, creative, and entertaining. You project an image of optimism and artistic flair.",
    "Others see you as reliable, practical, and hardworking. You project an image of stability and trustworthiness.",
    "Others see you as dynamic, adventurous, and versatile. You project an image of freedom and excitement.",
    "Others see you as caring, responsible, and nurturing. You project an image of warmth and domesticity.",
    "Others see you as mysterious, intellectual, and reserved. You project an image of depth and wisdom.",
    "Others see you as powerful, ambitious, and successful. You project an image of authority and competence.",
    "Others see you as compassionate, sophisticated, and worldly. You project an image of elegance and humanitarianism.",
    "Others see you as inspiring, intuitive, and visionary. You project an image of spiritual depth and illumination.",
    "Others see you as powerful, capable, and masterful. You project an image of someone who can accomplish great things.",
    "Others see you as loving, wise, and nurturing. You project an image of a spiritual teacher and healer.",
];

const ARCHETYPES: [Archetype; 12] = [
    Archetype {
        title: "The Leader",
        strengths: &["Leadership", "Innovation", "Independence", "Determination", "Courage"],
        lucky_color: "Gold",
        lucky_day: "Sunday",
    },
    Archetype {
        title: "The Diplomat",
        strengths: &["Diplomacy", "Intuition", "Cooperation", "Sensitivity", "Patience"],
        lucky_color: "Silver",
        lucky_day: "Monday",
    },
    Archetype {
        title: "The Communicator",
        strengths: &["Creativity", "Communication", "Optimism", "Artistic talent", "Charisma"],
        lucky_color: "Orange",
        lucky_day: "Thursday",
    },
    Archetype {
        title: "The Builder",
        strengths: &["Organization", "Discipline", "Reliability", "Patience", "Practicality"],
        lucky_color: "Forest Green",
        lucky_day: "Saturday",
    },
    Archetype {
        title: "The Adventurer",
        strengths: &["Adaptability", "Versatility", "Curiosity", "Freedom-loving", "Resourcefulness"],
        lucky_color: "Turquoise",
        lucky_day: "Wednesday",
    },
    Archetype {
        title: "The Nurturer",
        strengths: &["Nurturing", "Responsibility", "Compassion", "Harmony", "Healing"],
        lucky_color: "Royal Blue",
        lucky_day: "Friday",
    },
    Archetype {
        title: "The Seeker",
        strengths: &["Wisdom", "Analysis", "Intuition", "Spirituality", "Introspection"],
        lucky_color: "Violet",
        lucky_day: "Monday",
    },
    Archetype {
        title: "The Achiever",
        strengths: &["Ambition", "Authority", "Organization", "Efficiency", "Material mastery"],
        lucky_color: "Brown",
        lucky_day: "Saturday",
    },
    Archetype {
        title: "The Humanitarian",
        strengths: &["Compassion", "Generosity", "Wisdom", "Creativity", "Universal love"],
        lucky_color: "Crimson",
        lucky_day: "Tuesday",
    },
    Archetype {
        title: "The Illuminator",
        strengths: &["Spiritual insight", "Inspiration", "Sensitivity", "Idealism", "Visionary thinking"],
        lucky_color: "Lavender",
        lucky_day: "Monday",
    },
    Archetype {
        title: "The Master Builder",
        strengths: &["Master planning", "Practical idealism", "Leadership", "Discipline", "Vision"],
        lucky_color: "Gold",
        lucky_day: "Saturday",
    },
    Archetype {
        title: "The Master Teacher",
        strengths: &["Unconditional love", "Healing", "Teaching", "Compassion", "Spiritual mastery"],
        lucky_color: "Sky Blue",
        lucky_day: "Friday",
    },
];

pub fn personality_trait(life_path: NumerologyNumber) -> &'static str {
    PERSONALITY_TRAITS[life_path.ordinal()]
}

pub fn career_insight(destiny: NumerologyNumber) -> &'static str {
    CAREER_INSIGHTS[destiny.ordinal()]
}

pub fn relationship_insight(life_path: NumerologyNumber) -> &'static str {
    RELATIONSHIP_INSIGHTS[life_path.ordinal()]
}

pub fn destiny_purpose(destiny: NumerologyNumber) -> &'static str {
    DESTINY_PURPOSE[destiny.ordinal()]
}

pub fn soul_urge_insight(soul_urge: NumerologyNumber) -> &'static str {
    SOUL_URGE[soul_urge.ordinal()]
}

pub fn outer_personality_insight(personality: NumerologyNumber) -> &'static str {
    OUTER_PERSONALITY[personality.ordinal()]
}

pub fn archetype(life_path: NumerologyNumber) -> &'static Archetype {
    &ARCHETYPES[life_path.ordinal()]
}

/// Fills the future-guidance template with both core numbers.
pub fn future_guidance(life_path: NumerologyNumber, destiny: NumerologyNumber) -> String {
    format!(
        "With Life Path {life_path} and Destiny {destiny}, you are positioned for a journey of growth \
         and self-discovery. The coming period is favorable for taking decisive action on long-held dreams. \
         Trust your intuition and remain open to unexpected opportunities. Focus on aligning your daily \
         actions with your deeper purpose."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_number_has_distinct_texts() {
        for number in NumerologyNumber::ALL {
            for text in [
                personality_trait(number),
                career_insight(number),
                relationship_insight(number),
                destiny_purpose(number),
                soul_urge_insight(number),
                outer_personality_insight(number),
            ] {
                assert!(!text.is_empty(), "missing text for {number}");
            }
            assert!(!archetype(number).title.is_empty());
            assert_eq!(archetype(number).strengths.len(), 5);
        }
        let careers: std::collections::HashSet<_> =
            NumerologyNumber::ALL.iter().map(|n| career_insight(*n)).collect();
        assert_eq!(careers.len(), NumerologyNumber::ALL.len());
    }

    #[test]
    fn test_master_texts_mention_their_number() {
        assert!(personality_trait(NumerologyNumber::Eleven).contains("Master Number 11"));
        assert!(personality_trait(NumerologyNumber::TwentyTwo).contains("Master Number 22"));
        assert!(personality_trait(NumerologyNumber::ThirtyThree).contains("Master Number 33"));
        assert_eq!(archetype(NumerologyNumber::TwentyTwo).title, "The Master Builder");
    }

    #[test]
    fn test_future_guidance_interpolates_numbers() {
        let text = future_guidance(NumerologyNumber::Five, NumerologyNumber::Eleven);
        assert!(text.starts_with("With Life Path 5 and Destiny 11, you are positioned"));
        assert!(text.ends_with("deeper purpose."));
    }
}
