//! Static site content: routes, asset paths, navigation and hero statistics.
//!
//! Everything here is fixed at build time. Components read these tables
//! directly; nothing mutates them at runtime.

use crate::components::{ICON_EARTH_LEAF, ICON_LEAF, ICON_WALLET};
use crate::types::{LabelPart, NavLink, StatItem};

/// Version string shown in the console banner (single source of truth)
pub const VERSION: &str = "v0.3.2";

// Routes
pub const HOME_ROUTE: &str = "/";
pub const LOGIN_ROUTE: &str = "/login";
pub const DASHBOARD_ROUTE: &str = "/dashboard";

// Static assets, resolved by the host (trunk copies `public/`)
pub const LOGO_IMAGE: &str = "vite.svg";
pub const HERO_BACKGROUND_IMAGE: &str = "/assets/images/home-bg-hero.png";
pub const HERO_CERTIFICATE_IMAGE: &str = "/assets/images/hero_certificate.png";

/// Navbar gradient. Every route shares it.
pub const NAVBAR_BACKGROUND: &str = "bg-gradient-to-t from-[#11909d] to-blue-900";

/// Drop shadow applied once the page is scrolled past the threshold.
pub const SHADOW_CLASS: &str = "shadow-2xl";

pub const NAV_LINKS: [NavLink; 2] = [
    NavLink {
        id: 1,
        label: "Token Issuance",
        to: "/token-issuance",
    },
    NavLink {
        id: 2,
        label: "Offset Project",
        to: "/offset-project",
    },
];

pub const HERO_HEADLINE: &str = "Own, Track, and Showcase Verified Carbon Removal";
pub const HERO_SUBTEXT: &str =
    "Reverse climate change with the most transparent carbon removal marketplace";

pub const STAT_ITEMS: [StatItem; 3] = [
    StatItem {
        id: 1,
        icon: ICON_LEAF,
        label: &[LabelPart::Text("18+")],
        description: "Carbon Removal Projects",
    },
    StatItem {
        id: 2,
        icon: ICON_EARTH_LEAF,
        label: &[LabelPart::Text("123k"), LabelPart::Superscript("+")],
        description: "Tonnes of Carbon Removed",
    },
    StatItem {
        id: 3,
        icon: ICON_WALLET,
        label: &[LabelPart::Text("$1.8m"), LabelPart::Superscript("+")],
        description: "Paid to Farmers",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn nav_link_ids_are_unique_and_ordered() {
        let ids: Vec<u32> = NAV_LINKS.iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn stat_labels_project_to_plain_text() {
        let labels: Vec<String> = STAT_ITEMS.iter().map(StatItem::plain_label).collect();
        assert_eq!(labels, vec!["18+", "123k+", "$1.8m+"]);
    }

    #[test]
    fn nav_links_point_at_absolute_routes() {
        assert!(NAV_LINKS.iter().all(|l| l.to.starts_with('/')));
    }
}
