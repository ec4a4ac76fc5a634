use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// One of the four fixed views inside an open detail session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    Overview,
    Methodology,
    Findings,
    Conclusion,
}

impl Section {
    /// Sections in tab order
    pub const ALL: [Section; 4] = [
        Section::Overview,
        Section::Methodology,
        Section::Findings,
        Section::Conclusion,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Overview => "overview",
            Section::Methodology => "methodology",
            Section::Findings => "findings",
            Section::Conclusion => "conclusion",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Section::Overview => "Overview",
            Section::Methodology => "Methodology",
            Section::Findings => "Findings",
            Section::Conclusion => "Conclusion",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Section::Overview => 0,
            Section::Methodology => 1,
            Section::Findings => 2,
            Section::Conclusion => 3,
        }
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Section {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|section| section.as_str() == s)
            .ok_or_else(|| Error::InvalidSection(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_section_is_overview() {
        assert_eq!(Section::default(), Section::Overview);
    }

    #[test]
    fn next_cycles_through_all_sections() {
        let mut section = Section::Overview;
        let mut seen = Vec::new();
        for _ in 0..4 {
            seen.push(section);
            section = section.next();
        }
        assert_eq!(seen, Section::ALL);
        assert_eq!(section, Section::Overview);
    }

    #[test]
    fn previous_from_overview_wraps_to_conclusion() {
        assert_eq!(Section::Overview.previous(), Section::Conclusion);
    }

    #[test]
    fn parse_rejects_unknown_section() {
        assert_eq!(
            "summary".parse::<Section>(),
            Err(Error::InvalidSection("summary".to_string()))
        );
        assert_eq!("findings".parse::<Section>(), Ok(Section::Findings));
    }
}
