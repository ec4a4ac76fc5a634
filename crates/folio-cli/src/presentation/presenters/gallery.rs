use folio_engine::Browser;
use folio_types::{CategoryFilter, Project};

use crate::presentation::view_models::{
    CommandResultViewModel, FilterTabViewModel, GalleryViewModel, Guidance, ProjectCardViewModel,
};

/// Tool badges a card shows before collapsing the rest into "+N"
pub const MAX_TOOL_BADGES: usize = 2;

pub fn present_gallery(browser: &Browser) -> GalleryViewModel {
    let catalog = browser.catalog();
    let active = browser.active_filter();

    let tabs = CategoryFilter::TABS
        .into_iter()
        .map(|filter| FilterTabViewModel {
            filter: filter.as_str().to_string(),
            label: filter.label().to_string(),
            count: catalog.count(filter),
            active: filter == active,
        })
        .collect();

    let projects = browser
        .visible_projects()
        .into_iter()
        .map(present_card)
        .collect();

    GalleryViewModel {
        active_filter: active.as_str().to_string(),
        tabs,
        projects,
    }
}

pub fn present_card(project: &Project) -> ProjectCardViewModel {
    let tool_badges: Vec<String> = project
        .tools
        .iter()
        .take(MAX_TOOL_BADGES)
        .cloned()
        .collect();

    ProjectCardViewModel {
        id: project.id.to_string(),
        title: project.title.clone(),
        description: project.description.clone(),
        category: project.category.as_str().to_string(),
        image: project.image.clone(),
        hidden_tool_count: project.tools.len() - tool_badges.len(),
        tool_badges,
    }
}

pub fn present_list(browser: &Browser) -> CommandResultViewModel<GalleryViewModel> {
    let gallery = present_gallery(browser);
    let mut result = CommandResultViewModel::new(gallery);

    if let Some(first) = browser.visible_projects().first() {
        result = result.with_suggestion(
            Guidance::new("Open a project").with_command(format!("folio show {}", first.id)),
        );
    } else {
        result = result.with_suggestion(
            Guidance::new("Show every project").with_command("folio list --filter all"),
        );
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_engine::{browser_from_projects, reduce, Action};
    use folio_types::Category;

    fn browser() -> Browser {
        browser_from_projects(vec![
            Project::new("a", "Alpha", "first", Category::Dashboard, "a.png")
                .with_tools(["Tableau", "SQL", "Excel", "Python"]),
            Project::new("b", "Beta", "second", Category::Analysis, "b.png")
                .with_tools(["R"]),
        ])
        .unwrap()
    }

    #[test]
    fn test_card_collapses_extra_tools() {
        let browser = browser();
        let gallery = present_gallery(&browser);

        let alpha = &gallery.projects[0];
        assert_eq!(alpha.tool_badges, vec!["Tableau", "SQL"]);
        assert_eq!(alpha.hidden_tool_count, 2);

        let beta = &gallery.projects[1];
        assert_eq!(beta.tool_badges, vec!["R"]);
        assert_eq!(beta.hidden_tool_count, 0);
    }

    #[test]
    fn test_tabs_carry_counts_and_active_marker() {
        let mut browser = browser();
        reduce(
            &mut browser,
            Action::SetFilter(CategoryFilter::Only(Category::Analysis)),
        );
        let gallery = present_gallery(&browser);

        let tabs: Vec<(&str, usize, bool)> = gallery
            .tabs
            .iter()
            .map(|t| (t.label.as_str(), t.count, t.active))
            .collect();
        assert_eq!(
            tabs,
            vec![
                ("All Projects", 2, false),
                ("Visualization", 0, false),
                ("Analysis", 1, true),
                ("Dashboards", 1, false),
            ]
        );
        assert_eq!(gallery.active_filter, "analysis");
        assert_eq!(gallery.projects.len(), 1);
        assert_eq!(gallery.projects[0].id, "b");
    }

    #[test]
    fn test_empty_tab_suggests_all() {
        let mut browser = browser();
        reduce(
            &mut browser,
            Action::SetFilter(CategoryFilter::Only(Category::Visualization)),
        );

        let result = present_list(&browser);
        assert!(result.content.projects.is_empty());
        assert_eq!(
            result.suggestions[0].command.as_deref(),
            Some("folio list --filter all")
        );
    }
}
