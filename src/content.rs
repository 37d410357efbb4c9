//! Static landing page copy
//!
//! Everything the page displays lives here. Sections have fixed heights so
//! the scroll-spy can reason about positions without rendering.

/// Page sections in document order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Home,
    Features,
    Stats,
    Testimonials,
    Pricing,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 6] = [
        SectionId::Home,
        SectionId::Features,
        SectionId::Stats,
        SectionId::Testimonials,
        SectionId::Pricing,
        SectionId::Contact,
    ];

    /// Anchor name, as shown in the navbar
    pub fn anchor(&self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::Features => "features",
            SectionId::Stats => "stats",
            SectionId::Testimonials => "testimonials",
            SectionId::Pricing => "pricing",
            SectionId::Contact => "contact",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::Features => "Features",
            SectionId::Stats => "Stats",
            SectionId::Testimonials => "Reviews",
            SectionId::Pricing => "Pricing",
            SectionId::Contact => "Contact",
        }
    }

    /// Rows the section occupies on the page
    pub fn height(&self) -> usize {
        match self {
            SectionId::Home => 12,
            SectionId::Features => 16,
            SectionId::Stats => 8,
            SectionId::Testimonials => 14,
            SectionId::Pricing => 16,
            SectionId::Contact => 16,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone)]
pub struct Stat {
    pub label: &'static str,
    pub target: u64,
    pub suffix: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Testimonial {
    pub author: &'static str,
    pub role: &'static str,
    pub quote: &'static str,
    pub rating: u8,
}

#[derive(Debug, Clone)]
pub struct PricingPlan {
    pub name: &'static str,
    pub price: &'static str,
    pub highlights: &'static [&'static str],
}

pub const PRODUCT_NAME: &str = "TechNova Pro";

pub const TAGLINE: &str = "The smart home hub that thinks ahead.";

pub const HERO_BLURB: &str = "Voice control, adaptive automation and bank-grade \
encryption in a device that fits in your palm.";

pub fn features() -> Vec<Feature> {
    vec![
        Feature {
            title: "Adaptive Automation",
            description: "Learns your routines and adjusts lights, heat and music before you ask.",
        },
        Feature {
            title: "Private by Default",
            description: "All voice processing happens on the device. Nothing leaves your home.",
        },
        Feature {
            title: "Works With Everything",
            description: "Zigbee, Z-Wave, Matter and Wi-Fi accessories in one app.",
        },
        Feature {
            title: "Energy Insights",
            description: "Real-time usage reports that cut the average bill by a fifth.",
        },
    ]
}

pub fn stats() -> Vec<Stat> {
    vec![
        Stat {
            label: "Happy customers",
            target: 50_000,
            suffix: "+",
        },
        Stat {
            label: "Connected devices",
            target: 1_200,
            suffix: "+",
        },
        Stat {
            label: "Countries",
            target: 45,
            suffix: "",
        },
        Stat {
            label: "Uptime",
            target: 99,
            suffix: "%",
        },
    ]
}

pub fn testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            author: "Sarah Johnson",
            role: "Interior Designer",
            quote: "TechNova Pro completely changed how my clients live in their homes. \
                    Setup took ten minutes and it has not missed a beat since.",
            rating: 5,
        },
        Testimonial {
            author: "Michael Chen",
            role: "Software Engineer",
            quote: "Finally a hub that respects privacy. Local processing, open \
                    protocols and an API I actually enjoy using.",
            rating: 5,
        },
        Testimonial {
            author: "Emily Rodriguez",
            role: "Small Business Owner",
            quote: "The energy reports paid for the device within three months. \
                    My shop has never been this efficient.",
            rating: 4,
        },
    ]
}

pub fn pricing_plans() -> Vec<PricingPlan> {
    vec![
        PricingPlan {
            name: "Starter",
            price: "$99",
            highlights: &["1 hub", "Up to 20 devices", "Email support"],
        },
        PricingPlan {
            name: "Pro",
            price: "$199",
            highlights: &["1 hub + 2 sensors", "Unlimited devices", "Priority support"],
        },
        PricingPlan {
            name: "Enterprise",
            price: "$499",
            highlights: &["5 hubs", "Fleet dashboard", "Dedicated manager"],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_have_unique_anchors() {
        let mut anchors: Vec<_> = SectionId::ALL.iter().map(|s| s.anchor()).collect();
        anchors.sort();
        anchors.dedup();
        assert_eq!(anchors.len(), SectionId::ALL.len());
    }

    #[test]
    fn test_content_is_populated() {
        assert!(!features().is_empty());
        assert!(!stats().is_empty());
        assert!(!testimonials().is_empty());
        assert_eq!(pricing_plans().len(), 3);
    }
}
