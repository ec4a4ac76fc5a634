use folio_types::{CategoryFilter, Project, ProjectId, Section};

use crate::catalog::{Catalog, CatalogStore};
use crate::selection::{Opened, SectionChange, Selection};

/// Inbound user events; the complete input surface of the browser
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SetFilter(CategoryFilter),
    Open(ProjectId),
    SelectSection(Section),
    Close,
}

/// What a single action did, for logging and redraw decisions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    FilterChanged {
        from: CategoryFilter,
        to: CategoryFilter,
    },
    FilterUnchanged(CategoryFilter),
    Opened(Opened),
    SectionChanged {
        from: Section,
        to: Section,
    },
    SectionUnchanged(Section),
    Closed(ProjectId),
    /// Action had no meaning in the current state
    Ignored,
}

impl Transition {
    /// Whether any observable state changed
    pub fn is_change(&self) -> bool {
        matches!(
            self,
            Transition::FilterChanged { .. }
                | Transition::Opened(_)
                | Transition::SectionChanged { .. }
                | Transition::Closed(_)
        )
    }
}

/// Catalog store and detail controller composed into one state value
#[derive(Debug, Clone, PartialEq)]
pub struct Browser {
    store: CatalogStore,
    selection: Selection,
}

impl Browser {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            store: CatalogStore::new(catalog),
            selection: Selection::default(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        self.store.catalog()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn active_filter(&self) -> CategoryFilter {
        self.store.active_filter()
    }

    pub fn visible_projects(&self) -> Vec<&Project> {
        self.store.visible_projects()
    }

    /// Project shown in the detail view, when open
    pub fn open_project(&self) -> Option<&Project> {
        self.selection
            .selected_project_id()
            .map(|id| self.store.catalog().resolve(id))
    }
}

/// Apply one action to the browser state
pub fn reduce(browser: &mut Browser, action: Action) -> Transition {
    match action {
        Action::SetFilter(filter) => {
            let from = browser.store.set_filter(filter);
            if from == filter {
                Transition::FilterUnchanged(filter)
            } else {
                Transition::FilterChanged { from, to: filter }
            }
        }
        Action::Open(id) => {
            let opened = browser.selection.open(browser.store.catalog(), &id);
            Transition::Opened(opened)
        }
        Action::SelectSection(section) => match browser.selection.select_section(section) {
            SectionChange::Changed { from, to } => Transition::SectionChanged { from, to },
            SectionChange::Unchanged => Transition::SectionUnchanged(section),
            SectionChange::Ignored => Transition::Ignored,
        },
        Action::Close => match browser.selection.close() {
            Some(id) => Transition::Closed(id),
            None => Transition::Ignored,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_types::Category;

    fn scenario_browser() -> Browser {
        let categories = [
            Category::Dashboard,
            Category::Analysis,
            Category::Visualization,
            Category::Analysis,
            Category::Dashboard,
            Category::Visualization,
        ];
        let projects = categories
            .iter()
            .enumerate()
            .map(|(i, c)| {
                Project::new((i + 1).to_string(), format!("Project {}", i + 1), "", *c, "")
            })
            .collect();
        Browser::new(Catalog::new(projects).unwrap())
    }

    fn visible_ids(browser: &Browser) -> Vec<String> {
        browser
            .visible_projects()
            .iter()
            .map(|p| p.id.to_string())
            .collect()
    }

    fn open(browser: &mut Browser, id: &str) -> Transition {
        reduce(browser, Action::Open(ProjectId::new(id)))
    }

    #[test]
    fn scenario_a_analysis_filter() {
        let mut browser = scenario_browser();
        reduce(&mut browser, Action::SetFilter(Category::Analysis.into()));
        assert_eq!(visible_ids(&browser), vec!["2", "4"]);
    }

    #[test]
    fn scenario_b_open_select_reopen() {
        let mut browser = scenario_browser();

        open(&mut browser, "3");
        assert!(browser.selection().is_detail_open());
        assert_eq!(
            browser.selection().selected_project_id(),
            Some(&ProjectId::new("3"))
        );
        assert_eq!(browser.selection().active_section(), Section::Overview);

        reduce(&mut browser, Action::SelectSection(Section::Findings));
        assert_eq!(browser.selection().active_section(), Section::Findings);
        assert_eq!(
            browser.selection().selected_project_id(),
            Some(&ProjectId::new("3"))
        );

        open(&mut browser, "5");
        assert_eq!(
            browser.selection().selected_project_id(),
            Some(&ProjectId::new("5"))
        );
        assert_eq!(browser.selection().active_section(), Section::Overview);
    }

    #[test]
    fn scenario_c_close_then_reopen() {
        let mut browser = scenario_browser();
        open(&mut browser, "5");
        reduce(&mut browser, Action::SelectSection(Section::Conclusion));

        let transition = reduce(&mut browser, Action::Close);
        assert_eq!(transition, Transition::Closed(ProjectId::new("5")));
        assert!(!browser.selection().is_detail_open());
        assert_eq!(browser.selection().selected_project_id(), None);

        open(&mut browser, "5");
        assert_eq!(browser.selection().active_section(), Section::Overview);
    }

    #[test]
    fn scenario_d_dashboard_then_all() {
        let mut browser = scenario_browser();
        reduce(&mut browser, Action::SetFilter(Category::Dashboard.into()));
        reduce(&mut browser, Action::SetFilter(CategoryFilter::All));
        assert_eq!(visible_ids(&browser), vec!["1", "2", "3", "4", "5", "6"]);
    }

    #[test]
    fn repeated_filter_reports_unchanged() {
        let mut browser = scenario_browser();
        let first = reduce(&mut browser, Action::SetFilter(Category::Analysis.into()));
        let second = reduce(&mut browser, Action::SetFilter(Category::Analysis.into()));

        assert!(first.is_change());
        assert_eq!(
            second,
            Transition::FilterUnchanged(CategoryFilter::Only(Category::Analysis))
        );
        assert!(!second.is_change());
    }

    #[test]
    fn fallback_open_reports_substitution() {
        let mut browser = scenario_browser();
        let transition = open(&mut browser, "nonexistent-id");

        let Transition::Opened(opened) = transition else {
            panic!("expected an open transition");
        };
        assert!(opened.fell_back);
        assert_eq!(
            browser.open_project().map(|p| &p.id),
            Some(&browser.catalog().fallback().id)
        );
    }

    #[test]
    fn filter_change_does_not_touch_selection() {
        let mut browser = scenario_browser();
        open(&mut browser, "1");
        reduce(&mut browser, Action::SelectSection(Section::Methodology));

        reduce(&mut browser, Action::SetFilter(Category::Visualization.into()));

        assert_eq!(
            browser.selection().selected_project_id(),
            Some(&ProjectId::new("1"))
        );
        assert_eq!(browser.selection().active_section(), Section::Methodology);
    }

    #[test]
    fn section_and_close_are_ignored_while_closed() {
        let mut browser = scenario_browser();
        assert_eq!(
            reduce(&mut browser, Action::SelectSection(Section::Findings)),
            Transition::Ignored
        );
        assert_eq!(reduce(&mut browser, Action::Close), Transition::Ignored);
        assert_eq!(browser.selection(), &Selection::Closed);
    }

    #[test]
    fn open_invariant_holds_across_random_walk() {
        let mut browser = scenario_browser();
        let actions = vec![
            Action::Open(ProjectId::new("2")),
            Action::SelectSection(Section::Findings),
            Action::SetFilter(Category::Dashboard.into()),
            Action::Open(ProjectId::new("ghost")),
            Action::SelectSection(Section::Conclusion),
            Action::Close,
            Action::Close,
            Action::SelectSection(Section::Methodology),
            Action::Open(ProjectId::new("6")),
        ];

        for action in actions {
            reduce(&mut browser, action);
            if browser.selection().is_detail_open() {
                let id = browser.selection().selected_project_id().unwrap();
                assert!(browser.catalog().get(id).is_some());
            } else {
                assert_eq!(browser.selection().selected_project_id(), None);
            }
        }
    }
}
