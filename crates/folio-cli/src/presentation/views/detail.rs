use std::fmt;

use crate::presentation::view_models::{DetailViewModel, SectionBodyViewModel};

pub struct DetailView<'a> {
    data: &'a DetailViewModel,
}

impl<'a> DetailView<'a> {
    pub fn new(data: &'a DetailViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for DetailView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}  [{}]", self.data.title, self.data.category)?;
        if !self.data.tools.is_empty() {
            writeln!(f, "Tools: {}", self.data.tools.join(", "))?;
        }
        if !self.data.image.is_empty() {
            writeln!(f, "Image: {}", self.data.image)?;
        }
        writeln!(f)?;

        let tabs: Vec<String> = self
            .data
            .sections
            .iter()
            .map(|tab| {
                if tab.active {
                    format!("[{}]", tab.label)
                } else {
                    tab.label.clone()
                }
            })
            .collect();
        writeln!(f, "{}", tabs.join("  "))?;
        writeln!(f)?;

        write!(f, "{}", SectionBodyView::new(&self.data.body))?;

        if !self.data.links.is_empty() {
            writeln!(f)?;
            for link in &self.data.links {
                writeln!(f, "{}: {}", link.label, link.target)?;
            }
        }

        Ok(())
    }
}

pub struct SectionBodyView<'a> {
    body: &'a SectionBodyViewModel,
}

impl<'a> SectionBodyView<'a> {
    pub fn new(body: &'a SectionBodyViewModel) -> Self {
        Self { body }
    }
}

impl<'a> fmt::Display for SectionBodyView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.body {
            SectionBodyViewModel::Overview {
                description,
                objectives,
            } => {
                writeln!(f, "{}", or_placeholder(description))?;
                if !objectives.is_empty() {
                    writeln!(f)?;
                    writeln!(f, "Objectives:")?;
                    for objective in objectives {
                        writeln!(f, "  • {}", objective)?;
                    }
                }
            }
            SectionBodyViewModel::Methodology { text }
            | SectionBodyViewModel::Conclusion { text } => {
                writeln!(f, "{}", or_placeholder(text))?;
            }
            SectionBodyViewModel::Findings { items } => {
                if items.is_empty() {
                    writeln!(f, "{}", or_placeholder(""))?;
                }
                for item in items {
                    writeln!(f, "  • {}", item)?;
                }
            }
        }
        Ok(())
    }
}

fn or_placeholder(text: &str) -> &str {
    if text.trim().is_empty() {
        "(nothing here yet)"
    } else {
        text
    }
}
