//! # Static Content
//!
//! Build-time content tables for the landing page. Marketing copy is opaque
//! display text.
//!
//! ## Table of Contents
//! 1. Shared types
//! 2. Brand and hero copy
//! 3. Products
//! 4. Technologies
//! 5. Footer

use crate::style::gradient_style;

// ============================================================================
// 1. Shared types
// ============================================================================

/// Icons drawn by the web crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Activity,
    BarChart,
    Cpu,
    Github,
    Linkedin,
    Menu,
    Close,
    ArrowRight,
    /// First letter of the item title, set in the heading font.
    Monogram,
}

/// Color treatment of a content item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Gradient {
        from: &'static str,
        to: &'static str,
    },
    Solid(&'static str),
}

impl Accent {
    /// Dominant color, used for strokes and glows.
    pub fn primary(&self) -> &'static str {
        match *self {
            Accent::Gradient { from, .. } => from,
            Accent::Solid(color) => color,
        }
    }

    /// Background style for icon tiles.
    pub fn background_style(&self) -> String {
        match *self {
            Accent::Gradient { from, to } => gradient_style(from, to),
            Accent::Solid(color) => format!("background-color:{}", color),
        }
    }
}

/// One product, capability or technology entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentItem {
    pub title: &'static str,
    pub subtitle: Option<&'static str>,
    pub description: &'static str,
    pub icon: Icon,
    pub accent: Accent,
    pub tag: Option<&'static str>,
    /// Logical asset path of the preview image, if the item has one.
    pub preview: Option<&'static str>,
}

impl ContentItem {
    /// First character of the title, for monogram icons.
    pub fn monogram(&self) -> String {
        self.title.chars().next().map(String::from).unwrap_or_default()
    }

    /// Stable key for keyed lists.
    pub fn key(&self) -> &'static str {
        self.title
    }
}

/// Eyebrow + title pair above a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionHeading {
    pub eyebrow: &'static str,
    pub title: &'static str,
}

// ============================================================================
// 2. Brand and hero copy
// ============================================================================

pub const BRAND: &str = "XYVOX";
pub const BRAND_MARK: &str = "/assets/brand/xyvox-mark.svg";

pub const PAGE_TITLE: &str = "XYVOX | The Convergence of Crypto Intelligence";
pub const PAGE_DESCRIPTION: &str =
    "High-frequency arbitrage ecosystem and on-chain analytics powered by event-driven architecture.";
pub const THEME_COLOR: &str = "#000000";

pub const HERO_EYEBROW: &str = "High-Frequency Trading Ecosystem";
pub const HERO_HEADLINE: [&str; 2] = ["The Convergence of", "Crypto Intelligence."];
pub const HERO_LEDE: &str =
    "High-frequency arbitrage ecosystem and on-chain analytics powered by event-driven architecture.";
pub const HERO_CTA: &str = "Explore the Ecosystem";
pub const HERO_CTA_HREF: &str = "#ecosystem";

pub const LAUNCH_APP: &str = "Launch App";

// ============================================================================
// 3. Products
// ============================================================================

pub const ECOSYSTEM_HEADING: SectionHeading = SectionHeading {
    eyebrow: "The Ecosystem",
    title: "Our Products",
};

pub const PRODUCTS: [ContentItem; 3] = [
    ContentItem {
        title: "XYVOX Spreads",
        subtitle: Some("HF Arbitrage Scanner"),
        description: "Ultra-low-latency spread detection engine built on Java and Redis. \
            Identifies cross-exchange arbitrage opportunities in microseconds with real-time \
            order book analysis and predictive modeling.",
        icon: Icon::Activity,
        accent: Accent::Gradient {
            from: "#8b5cf6",
            to: "#6d28d9",
        },
        tag: Some("Live"),
        preview: Some("/assets/previews/spreads.webp"),
    },
    ContentItem {
        title: "XYVOX Memes",
        subtitle: Some("On-chain Tracker"),
        description: "Deep analytics for Solana and Base meme token ecosystems. Tracks wallet \
            clusters, token creation patterns, and liquidity flows with sub-second on-chain \
            data indexing.",
        icon: Icon::BarChart,
        accent: Accent::Gradient {
            from: "#a78bfa",
            to: "#8b5cf6",
        },
        tag: Some("Beta"),
        preview: Some("/assets/previews/memes.webp"),
    },
    ContentItem {
        title: "XYVOX Core",
        subtitle: Some("Trading Engine Prototype"),
        description: "Foundational event-driven architecture powering the entire XYVOX \
            ecosystem. Built for horizontal scaling with Spring Boot microservices, Docker \
            orchestration, and Redis pub/sub messaging.",
        icon: Icon::Cpu,
        accent: Accent::Gradient {
            from: "#7c3aed",
            to: "#4c1d95",
        },
        tag: Some("Alpha"),
        preview: Some("/assets/previews/core.webp"),
    },
];

// ============================================================================
// 4. Technologies
// ============================================================================

pub const TECH_HEADING: SectionHeading = SectionHeading {
    eyebrow: "Infrastructure",
    title: "Powered by Deep Tech",
};

const fn tech(title: &'static str, color: &'static str) -> ContentItem {
    ContentItem {
        title,
        subtitle: None,
        description: "",
        icon: Icon::Monogram,
        accent: Accent::Solid(color),
        tag: None,
        preview: None,
    }
}

pub const TECHNOLOGIES: [ContentItem; 8] = [
    tech("Java", "#ED8B00"),
    tech("Spring Boot", "#6DB33F"),
    tech("Redis", "#DC382D"),
    tech("Docker", "#2496ED"),
    tech("React", "#61DAFB"),
    tech("Solana", "#9945FF"),
    tech("TypeScript", "#3178C6"),
    tech("PostgreSQL", "#4169E1"),
];

// ============================================================================
// 5. Footer
// ============================================================================

/// External profile link in the footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: Icon,
}

pub const SOCIAL_LINKS: [SocialLink; 2] = [
    SocialLink {
        label: "GitHub",
        href: "https://github.com",
        icon: Icon::Github,
    },
    SocialLink {
        label: "LinkedIn",
        href: "https://linkedin.com",
        icon: Icon::Linkedin,
    },
];

pub const COPYRIGHT: &str = "\u{a9} 2026";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_products_are_complete() {
        for product in &PRODUCTS {
            assert!(product.title.starts_with(BRAND));
            assert!(product.subtitle.is_some());
            assert!(product.tag.is_some());
            assert!(product.preview.is_some());
            assert!(!product.description.is_empty());
        }
    }

    #[test]
    fn test_technology_monograms() {
        let letters: String = TECHNOLOGIES.iter().map(ContentItem::monogram).collect();
        assert_eq!(letters, "JSRDRSTP");
        assert_eq!(TECHNOLOGIES[2].accent.primary(), "#DC382D");
    }

    #[test]
    fn test_keys_are_unique() {
        let mut keys: Vec<&str> = PRODUCTS.iter().chain(TECHNOLOGIES.iter()).map(ContentItem::key).collect();
        let total = keys.len();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), total);
    }

    #[test]
    fn test_accent_background() {
        assert_eq!(
            PRODUCTS[0].accent.background_style(),
            "background-image:linear-gradient(to bottom right, #8b5cf6, #6d28d9)"
        );
        assert_eq!(
            Accent::Solid("#ED8B00").background_style(),
            "background-color:#ED8B00"
        );
    }
}
