//! Static copy for the landing page.

use chrono::NaiveDate;

/// Palette accent, maps to the theme's color classes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Accent {
    Magic,
    Ember,
    Frost,
    Wilderness,
    Foreground,
}

impl Accent {
    pub fn text(self) -> &'static str {
        match self {
            Accent::Magic => "text-magic",
            Accent::Ember => "text-ember",
            Accent::Frost => "text-frost",
            Accent::Wilderness => "text-wilderness",
            Accent::Foreground => "text-foreground",
        }
    }

    pub fn bg(self) -> &'static str {
        match self {
            Accent::Magic => "bg-magic",
            Accent::Ember => "bg-ember",
            Accent::Frost => "bg-frost",
            Accent::Wilderness => "bg-wilderness",
            Accent::Foreground => "bg-foreground",
        }
    }

    pub fn border(self) -> &'static str {
        match self {
            Accent::Magic => "border-magic",
            Accent::Ember => "border-ember",
            Accent::Frost => "border-frost",
            Accent::Wilderness => "border-wilderness",
            Accent::Foreground => "border-foreground",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub accent: Accent,
}

pub const STORY_FEATURES: [Feature; 3] = [
    Feature {
        title: "Immersive Combat",
        description: "Master fluid swordplay and devastating magic in visceral real-time battles",
        icon: "⚔️",
        accent: Accent::Magic,
    },
    Feature {
        title: "Living World",
        description: "Explore a dynamic ecosystem where your choices reshape the wilderness",
        icon: "🌲",
        accent: Accent::Wilderness,
    },
    Feature {
        title: "Epic Storyline",
        description: "Uncover ancient mysteries in a narrative that adapts to your journey",
        icon: "📜",
        accent: Accent::Ember,
    },
];

pub const STORY_TAGS: [(&str, Accent); 3] = [
    ("OPEN WORLD", Accent::Wilderness),
    ("DYNAMIC COMBAT", Accent::Magic),
    ("EPIC QUESTS", Accent::Ember),
];

pub const GAMEPLAY_HIGHLIGHTS: [Feature; 4] = [
    Feature {
        title: "Real-time Combat",
        description: "Fluid sword fighting with magical abilities",
        icon: "⚔️",
        accent: Accent::Magic,
    },
    Feature {
        title: "Environmental Interaction",
        description: "Use the world around you as a weapon",
        icon: "🌿",
        accent: Accent::Wilderness,
    },
    Feature {
        title: "Character Progression",
        description: "Unlock new abilities and equipment",
        icon: "⭐",
        accent: Accent::Ember,
    },
    Feature {
        title: "Boss Encounters",
        description: "Face legendary beasts in epic battles",
        icon: "🐉",
        accent: Accent::Frost,
    },
];

pub const HERO_STATS: [(&str, &str, &str, Accent); 3] = [
    ("⚔️", "COMBAT", "Master", Accent::Magic),
    ("🛡️", "DEFENSE", "Elite", Accent::Ember),
    ("🔮", "MAGIC", "Adept", Accent::Frost),
];

pub const HERO_ABILITIES: [(&str, Accent); 4] = [
    ("Dragon's Fury", Accent::Magic),
    ("Shadow Step", Accent::Ember),
    ("Frost Shield", Accent::Frost),
    ("Nature's Bond", Accent::Wilderness),
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Character {
    pub name: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub abilities: [&'static str; 3],
    pub glyph: &'static str,
    pub accent: Accent,
}

pub const CHARACTERS: [Character; 3] = [
    Character {
        name: "The Wanderer",
        title: "Exiled Warrior",
        description: "A skilled swordsman seeking redemption in the wilds, master of both blade and forgotten arts.",
        abilities: ["Sword Mastery", "Survival Instinct", "Ancient Knowledge"],
        glyph: "⚔️",
        accent: Accent::Magic,
    },
    Character {
        name: "The Shaman",
        title: "Nature's Voice",
        description: "A mystic who speaks with the spirits of the wild, channeling primal magic through sacred rituals.",
        abilities: ["Elemental Magic", "Beast Communication", "Healing Arts"],
        glyph: "🌟",
        accent: Accent::Wilderness,
    },
    Character {
        name: "The Hunter",
        title: "Shadow Stalker",
        description: "A relentless tracker who moves unseen through the wilderness, striking from the shadows.",
        abilities: ["Stealth", "Precision Archery", "Trap Setting"],
        glyph: "🏹",
        accent: Accent::Ember,
    },
];

/// One row of the stat comparison, values indexed like `CHARACTERS`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StatGroup {
    pub stat: &'static str,
    pub values: [u8; 3],
}

pub const STAT_GROUPS: [StatGroup; 3] = [
    StatGroup { stat: "Combat", values: [95, 70, 85] },
    StatGroup { stat: "Magic", values: [60, 95, 40] },
    StatGroup { stat: "Stealth", values: [40, 60, 95] },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Release {
    Year(i32),
    Date(NaiveDate),
}

impl Release {
    pub fn label(&self) -> String {
        match self {
            Release::Year(year) => format!("Coming {}", year),
            Release::Date(date) => date.format("%B %-d, %Y").to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlatformAction {
    JoinBeta,
    Notify,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Platform {
    pub name: &'static str,
    pub icon: &'static str,
    pub accent: Accent,
    pub features: [&'static str; 4],
    pub release: Release,
    pub action: PlatformAction,
}

pub fn platforms() -> Vec<Platform> {
    vec![
        Platform {
            name: "Xbox Series X|S",
            icon: "🎮",
            accent: Accent::Wilderness,
            features: ["4K HDR Gaming", "120 FPS Support", "Quick Resume", "Smart Delivery"],
            release: Release::Year(2025),
            action: PlatformAction::Notify,
        },
        Platform {
            name: "PlayStation 5",
            icon: "🕹️",
            accent: Accent::Frost,
            features: ["DualSense Haptics", "3D Audio", "Ray Tracing", "Activity Cards"],
            release: Release::Year(2025),
            action: PlatformAction::Notify,
        },
        Platform {
            name: "PC (Steam)",
            icon: "💻",
            accent: Accent::Magic,
            features: ["Ultra Settings", "Mod Support", "Cross-Platform", "Early Access"],
            release: NaiveDate::from_ymd_opt(2025, 9, 11)
                .map(Release::Date)
                .unwrap_or(Release::Year(2025)),
            action: PlatformAction::JoinBeta,
        },
    ]
}

pub const MINIMUM_REQUIREMENTS: [(&str, &str); 5] = [
    ("OS", "Windows 10 64-bit"),
    ("Processor", "Intel i5-8400 / AMD Ryzen 5 2600"),
    ("Memory", "8 GB RAM"),
    ("Graphics", "GTX 1060 6GB / RX 580 8GB"),
    ("Storage", "50 GB available space"),
];

pub const RECOMMENDED_REQUIREMENTS: [(&str, &str); 5] = [
    ("OS", "Windows 11 64-bit"),
    ("Processor", "Intel i7-10700K / AMD Ryzen 7 3700X"),
    ("Memory", "16 GB RAM"),
    ("Graphics", "RTX 3070 / RX 6700 XT"),
    ("Storage", "50 GB SSD space"),
];

pub const BETA_BENEFITS: [Feature; 3] = [
    Feature {
        title: "Early Access",
        description: "Play 2 weeks before official launch",
        icon: "⏰",
        accent: Accent::Magic,
    },
    Feature {
        title: "Exclusive Content",
        description: "Unique beta tester rewards and items",
        icon: "🎁",
        accent: Accent::Ember,
    },
    Feature {
        title: "Shape the Game",
        description: "Your feedback directly influences development",
        icon: "🛠️",
        accent: Accent::Wilderness,
    },
];

pub const SOCIAL_LINKS: [(&str, &str, Accent); 5] = [
    ("Discord", "💬", Accent::Frost),
    ("Twitter", "🐦", Accent::Magic),
    ("YouTube", "▶️", Accent::Ember),
    ("Twitch", "📺", Accent::Wilderness),
    ("GitHub", "🐙", Accent::Foreground),
];

pub const FOOTER_COLUMNS: [(&str, [&str; 4]); 4] = [
    ("Game", ["Features", "Characters", "Gameplay", "System Requirements"]),
    ("Community", ["Discord", "Forums", "Reddit", "Fan Art"]),
    ("Support", ["Contact Us", "Bug Reports", "FAQ", "Documentation"]),
    ("Company", ["About Us", "Careers", "Press Kit", "Legal"]),
];

pub const CONSOLES: [(&str, Accent); 3] = [
    ("Xbox Series X|S", Accent::Wilderness),
    ("PlayStation 5", Accent::Frost),
    ("PC Steam", Accent::Magic),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stat_rows_cover_every_character() {
        for group in STAT_GROUPS.iter() {
            assert_eq!(group.values.len(), CHARACTERS.len());
            assert!(group.values.iter().all(|v| *v <= 100));
        }
    }

    #[test]
    fn release_labels() {
        assert_eq!(Release::Year(2025).label(), "Coming 2025");
        let pc = platforms().into_iter().find(|p| p.name.contains("PC")).unwrap();
        assert_eq!(pc.release.label(), "September 11, 2025");
        assert_eq!(pc.action, PlatformAction::JoinBeta);
    }

    #[test]
    fn accent_classes() {
        assert_eq!(Accent::Ember.text(), "text-ember");
        assert_eq!(Accent::Frost.bg(), "bg-frost");
        assert_eq!(Accent::Magic.border(), "border-magic");
    }
}
