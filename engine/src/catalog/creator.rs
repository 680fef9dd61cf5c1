use super::Tone;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreativeKind {
    Image,
    Video,
    Copy,
    Design,
}

impl CreativeKind {
    pub const ALL: [CreativeKind; 4] = [
        CreativeKind::Image,
        CreativeKind::Video,
        CreativeKind::Copy,
        CreativeKind::Design,
    ];

    pub fn label(self) -> &'static str {
        match self {
            CreativeKind::Image => "Image Ads",
            CreativeKind::Video => "Video Ads",
            CreativeKind::Copy => "Ad Copy",
            CreativeKind::Design => "Creative Design",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateRating {
    High,
    Medium,
    Low,
}

impl TemplateRating {
    pub fn label(self) -> &'static str {
        match self {
            TemplateRating::High => "High",
            TemplateRating::Medium => "Medium",
            TemplateRating::Low => "Low",
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            TemplateRating::High => Tone::Positive,
            TemplateRating::Medium => Tone::Caution,
            TemplateRating::Low => Tone::Negative,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Template {
    pub name: &'static str,
    pub kind: CreativeKind,
    pub rating: TemplateRating,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreativeStatus {
    Generated,
    Generating,
}

impl CreativeStatus {
    pub fn label(self) -> &'static str {
        match self {
            CreativeStatus::Generated => "generated",
            CreativeStatus::Generating => "generating",
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            CreativeStatus::Generated => Tone::Positive,
            CreativeStatus::Generating => Tone::Caution,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct GeneratedCreative {
    pub name: &'static str,
    pub status: CreativeStatus,
    pub variations: u8,
}

#[derive(Debug, Clone, Copy)]
pub struct BrandAsset {
    pub name: &'static str,
    pub kind: &'static str,
}

pub const TOOLS: [&str; 7] = ["Select", "Text", "Shapes", "Images", "Crop", "Filter", "Paint"];

pub const TEMPLATES: [Template; 4] = [
    Template {
        name: "Holiday Sale Banner",
        kind: CreativeKind::Image,
        rating: TemplateRating::High,
    },
    Template {
        name: "Product Showcase Video",
        kind: CreativeKind::Video,
        rating: TemplateRating::Medium,
    },
    Template {
        name: "Social Media Post",
        kind: CreativeKind::Image,
        rating: TemplateRating::High,
    },
    Template {
        name: "Email Header Design",
        kind: CreativeKind::Design,
        rating: TemplateRating::Low,
    },
];

pub const GENERATED: [GeneratedCreative; 3] = [
    GeneratedCreative {
        name: "Jeep Adventure Campaign",
        status: CreativeStatus::Generated,
        variations: 4,
    },
    GeneratedCreative {
        name: "Off-Road Experience",
        status: CreativeStatus::Generating,
        variations: 3,
    },
    GeneratedCreative {
        name: "Desert Explorer",
        status: CreativeStatus::Generated,
        variations: 5,
    },
];

pub const BRAND_ASSETS: [BrandAsset; 6] = [
    BrandAsset {
        name: "Primary Logo",
        kind: "logo",
    },
    BrandAsset {
        name: "Secondary Logo",
        kind: "logo",
    },
    BrandAsset {
        name: "Product Shot 1",
        kind: "image",
    },
    BrandAsset {
        name: "Product Shot 2",
        kind: "image",
    },
    BrandAsset {
        name: "Background 1",
        kind: "background",
    },
    BrandAsset {
        name: "Background 2",
        kind: "background",
    },
];

pub const BRAND_KITS: [&str; 3] = ["Default Brand Kit", "Premium Collection", "Minimal Style"];

pub const LOGO_PLACEMENTS: [&str; 5] = [
    "Top Left",
    "Top Right",
    "Bottom Left",
    "Bottom Right",
    "Center",
];

pub const FORMAT_STYLES: [&str; 5] = ["Modern", "Classic", "Bold", "Minimal", "Creative"];

/// Briefs the prompt field cycles through; the terminal has no free-text
/// prompt entry.
pub const PROMPT_PRESETS: [&str; 4] = [
    "Rugged off-road SUV at golden hour, adventure tone",
    "Minimal product flat-lay for the holiday sale",
    "Short vertical video hook for spring launch",
    "Bold headline copy for retargeting audience",
];
