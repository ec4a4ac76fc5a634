use std::collections::HashSet;

use folio_types::{Category, CategoryFilter, Error, Project, ProjectId, Result};

use crate::builtin;

/// Where `resolve` lands when an id is not in the catalog
#[derive(Debug, Clone, PartialEq)]
enum Fallback {
    /// A catalog entry, by position
    Entry(usize),
    /// A project that is not part of the browsable list
    Standalone(Box<Project>),
}

/// The full, externally supplied ordered list of projects
///
/// Immutable after construction. Ids are unique across the entries and the
/// fallback target, so every id handed out by [`Catalog::resolve`] can be
/// looked up again with [`Catalog::get`].
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    projects: Vec<Project>,
    fallback: Fallback,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids
    ///
    /// The fallback target starts as the built-in showcase project.
    pub fn new(projects: Vec<Project>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(projects.len());
        for project in &projects {
            if !seen.insert(&project.id) {
                return Err(Error::DuplicateProjectId(project.id.clone()));
            }
        }

        let catalog = Self {
            projects,
            fallback: Fallback::Entry(0),
        };
        Ok(catalog.with_fallback(builtin::showcase_project()))
    }

    /// Replace the fallback target with `project`
    ///
    /// A catalog entry with the same id wins over the supplied record.
    pub fn with_fallback(mut self, project: Project) -> Self {
        self.fallback = match self.position(&project.id) {
            Some(index) => Fallback::Entry(index),
            None => Fallback::Standalone(Box::new(project)),
        };
        self
    }

    /// Use the catalog entry `id` as the fallback target
    pub fn with_default_id(mut self, id: &ProjectId) -> Result<Self> {
        let index = self
            .position(id)
            .ok_or_else(|| Error::UnknownProject(id.clone()))?;
        self.fallback = Fallback::Entry(index);
        Ok(self)
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Look up an id among the entries, then the fallback target
    pub fn get(&self, id: &ProjectId) -> Option<&Project> {
        self.position(id)
            .map(|index| &self.projects[index])
            .or_else(|| match &self.fallback {
                Fallback::Standalone(project) if &project.id == id => Some(project.as_ref()),
                _ => None,
            })
    }

    pub fn contains(&self, id: &ProjectId) -> bool {
        self.position(id).is_some()
    }

    /// The project shown when an id cannot be resolved
    pub fn fallback(&self) -> &Project {
        match &self.fallback {
            // Entry indices are only created from `position`, and the list never shrinks.
            Fallback::Entry(index) => &self.projects[*index],
            Fallback::Standalone(project) => project,
        }
    }

    /// Whether the fallback target is one of the catalog entries
    pub fn fallback_is_entry(&self) -> bool {
        matches!(self.fallback, Fallback::Entry(_))
    }

    /// Total resolution: the matching entry, or the fallback project
    pub fn resolve(&self, id: &ProjectId) -> &Project {
        self.get(id).unwrap_or_else(|| self.fallback())
    }

    /// Ordered subsequence of entries passing `filter`
    pub fn filtered(&self, filter: CategoryFilter) -> Vec<&Project> {
        self.projects
            .iter()
            .filter(|project| filter.matches(project.category))
            .collect()
    }

    /// Number of entries passing `filter`
    pub fn count(&self, filter: CategoryFilter) -> usize {
        self.projects
            .iter()
            .filter(|project| filter.matches(project.category))
            .count()
    }

    /// Entry counts per category, in tab order
    pub fn category_counts(&self) -> Vec<(Category, usize)> {
        Category::ALL
            .into_iter()
            .map(|category| (category, self.count(category.into())))
            .collect()
    }

    fn position(&self, id: &ProjectId) -> Option<usize> {
        self.projects.iter().position(|project| &project.id == id)
    }
}

/// Catalog plus the active filter; owns the derived gallery view
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogStore {
    catalog: Catalog,
    active_filter: CategoryFilter,
}

impl CatalogStore {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            active_filter: CategoryFilter::All,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn active_filter(&self) -> CategoryFilter {
        self.active_filter
    }

    /// Replace the active filter, returning the previous one
    pub fn set_filter(&mut self, filter: CategoryFilter) -> CategoryFilter {
        std::mem::replace(&mut self.active_filter, filter)
    }

    /// Projects matching the active filter, in catalog order
    pub fn visible_projects(&self) -> Vec<&Project> {
        self.catalog.filtered(self.active_filter)
    }
}
