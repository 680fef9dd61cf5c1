//! # Mock Catalog
//!
//! Static datasets rendered by the eight dashboard sections. None of the values
//! are derived; they are literals standing in for a backend that does not
//! exist. Status-like fields expose a [`Tone`] so the renderer can colour them
//! without matching on strings.

pub mod admin;
pub mod agents;
pub mod brand_kit;
pub mod creator;
pub mod dashboard;
pub mod performance;
pub mod simulations;
pub mod strategy;

/// Semantic colouring for a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    Positive,
    Caution,
    Info,
    Negative,
    Neutral,
}

/// Headline number shown on a metric card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metric {
    pub title: &'static str,
    pub value: &'static str,
    pub change: &'static str,
}

impl Metric {
    /// Leading `+` means an improvement. Everything else is treated as a
    /// decline, `-$0.08` included.
    pub fn is_positive(&self) -> bool {
        self.change.starts_with('+')
    }

    pub fn tone(&self) -> Tone {
        if self.is_positive() {
            Tone::Positive
        } else {
            Tone::Negative
        }
    }
}

/// Qualitative performance grade shared by several sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Performance {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl Performance {
    pub fn label(self) -> &'static str {
        match self {
            Performance::Excellent => "excellent",
            Performance::Good => "good",
            Performance::Fair => "fair",
            Performance::Poor => "poor",
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            Performance::Excellent => Tone::Positive,
            Performance::Good => Tone::Info,
            Performance::Fair => Tone::Caution,
            Performance::Poor => Tone::Negative,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_direction() {
        let up = Metric {
            title: "Conversion Rate",
            value: "3.2%",
            change: "+0.8%",
        };
        let down = Metric {
            title: "Cost per Click",
            value: "$0.42",
            change: "-$0.08",
        };
        assert!(up.is_positive());
        assert_eq!(up.tone(), Tone::Positive);
        assert!(!down.is_positive());
        assert_eq!(down.tone(), Tone::Negative);
    }

    #[test]
    fn test_performance_tones() {
        assert_eq!(Performance::Excellent.tone(), Tone::Positive);
        assert_eq!(Performance::Good.tone(), Tone::Info);
        assert_eq!(Performance::Fair.tone(), Tone::Caution);
        assert_eq!(Performance::Poor.label(), "poor");
    }
}
