#[derive(Debug, Clone, Copy)]
pub struct Swatch {
    pub name: &'static str,
    pub hex: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct TypeStyle {
    pub role: &'static str,
    pub family: &'static str,
    pub weight: &'static str,
}

pub const KIT_NAME: &str = "Premium Collection";

pub const SWATCHES: [Swatch; 5] = [
    Swatch {
        name: "Primary",
        hex: "#8b5cf6",
    },
    Swatch {
        name: "Secondary",
        hex: "#ec4899",
    },
    Swatch {
        name: "Accent",
        hex: "#06b6d4",
    },
    Swatch {
        name: "Ink",
        hex: "#111827",
    },
    Swatch {
        name: "Paper",
        hex: "#f9fafb",
    },
];

pub const TYPOGRAPHY: [TypeStyle; 3] = [
    TypeStyle {
        role: "Headline",
        family: "Inter",
        weight: "Bold",
    },
    TypeStyle {
        role: "Body",
        family: "Inter",
        weight: "Regular",
    },
    TypeStyle {
        role: "Caption",
        family: "JetBrains Mono",
        weight: "Medium",
    },
];

pub const VOICE_GUIDELINES: [&str; 4] = [
    "Confident, never boastful",
    "Speak to the adventure, not the spec sheet",
    "Short sentences, active verbs",
    "No more than one exclamation mark per asset",
];
