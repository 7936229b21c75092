//! Data types for the static landing content.

/// A top-level navigation entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub id: u32,
    pub label: &'static str,
    /// Target route
    pub to: &'static str,
}

/// One piece of a statistic label.
///
/// Labels carry inline markup (`123k<sup>+</sup>`), so they are stored as
/// typed parts and rendered as elements instead of being parsed at runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LabelPart {
    Text(&'static str),
    Superscript(&'static str),
}

/// A marketing metric shown under the hero copy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatItem {
    pub id: u32,
    /// SVG path data for the icon
    pub icon: &'static str,
    pub label: &'static [LabelPart],
    pub description: &'static str,
}

impl StatItem {
    /// Label with the markup stripped, e.g. `123k+`.
    pub fn plain_label(&self) -> String {
        self.label.iter().fold(String::new(), |mut out, part| {
            let (LabelPart::Text(text) | LabelPart::Superscript(text)) = part;
            out.push_str(text);
            out
        })
    }
}
