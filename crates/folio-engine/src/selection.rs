use folio_types::{ProjectId, Section};

use crate::catalog::Catalog;

/// Detail view state machine
///
/// `Closed` carries nothing, so a closed view can never keep a stale
/// selection or section around for the next open.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Closed,
    Open {
        project_id: ProjectId,
        section: Section,
    },
}

/// Result of [`Selection::open`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opened {
    /// Id that was asked for
    pub requested: ProjectId,
    /// Id of the project actually shown
    pub resolved: ProjectId,
    /// Whether the fallback project was substituted
    pub fell_back: bool,
}

/// Result of [`Selection::select_section`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionChange {
    Changed { from: Section, to: Section },
    Unchanged,
    /// Detail view is closed
    Ignored,
}

impl Selection {
    pub fn is_detail_open(&self) -> bool {
        matches!(self, Selection::Open { .. })
    }

    pub fn selected_project_id(&self) -> Option<&ProjectId> {
        match self {
            Selection::Open { project_id, .. } => Some(project_id),
            Selection::Closed => None,
        }
    }

    /// Active section; `Overview` while closed
    pub fn active_section(&self) -> Section {
        match self {
            Selection::Open { section, .. } => *section,
            Selection::Closed => Section::Overview,
        }
    }

    /// Open `id`, always starting at the overview section
    ///
    /// Ids missing from the catalog entries open the catalog's fallback
    /// project. Asking for the standalone fallback by its own id still counts
    /// as a fallback.
    pub fn open(&mut self, catalog: &Catalog, id: &ProjectId) -> Opened {
        let project = resolve(id, catalog);
        let fell_back = !catalog.contains(id);

        *self = Selection::Open {
            project_id: project.id.clone(),
            section: Section::Overview,
        };

        Opened {
            requested: id.clone(),
            resolved: project.id.clone(),
            fell_back,
        }
    }

    pub fn select_section(&mut self, target: Section) -> SectionChange {
        match self {
            Selection::Closed => SectionChange::Ignored,
            Selection::Open { section, .. } if *section == target => SectionChange::Unchanged,
            Selection::Open { section, .. } => {
                let from = std::mem::replace(section, target);
                SectionChange::Changed { from, to: target }
            }
        }
    }

    /// Close the detail view; returns the id that was open, if any
    pub fn close(&mut self) -> Option<ProjectId> {
        match std::mem::take(self) {
            Selection::Open { project_id, .. } => Some(project_id),
            Selection::Closed => None,
        }
    }
}

/// Total lookup used by the detail view: never comes back empty-handed
pub fn resolve<'a>(id: &ProjectId, catalog: &'a Catalog) -> &'a folio_types::Project {
    catalog.resolve(id)
}
