use serde::Serialize;
use std::fmt;

use crate::presentation::views::DetailView;

#[derive(Debug, Clone, Serialize)]
pub struct DetailViewModel {
    /// Id the caller asked for; differs from `id` after a fallback
    pub requested_id: String,
    pub fell_back: bool,
    pub id: String,
    pub title: String,
    pub category: String,
    pub image: String,
    pub tools: Vec<String>,
    pub active_section: String,
    pub sections: Vec<SectionTabViewModel>,
    pub body: SectionBodyViewModel,
    pub links: Vec<LinkViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SectionTabViewModel {
    pub section: String,
    pub label: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "section", rename_all = "lowercase")]
pub enum SectionBodyViewModel {
    Overview {
        description: String,
        objectives: Vec<String>,
    },
    Methodology {
        text: String,
    },
    Findings {
        items: Vec<String>,
    },
    Conclusion {
        text: String,
    },
}

#[derive(Debug, Clone, Serialize)]
pub struct LinkViewModel {
    pub label: String,
    pub target: String,
}

impl fmt::Display for DetailViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", DetailView::new(self))
    }
}
