use std::fmt;

use crate::presentation::view_models::{FilterTabViewModel, GalleryViewModel, ProjectCardViewModel};

// --------------------------------------------------------
// Gallery View
// --------------------------------------------------------

pub struct GalleryView<'a> {
    data: &'a GalleryViewModel,
}

impl<'a> GalleryView<'a> {
    pub fn new(data: &'a GalleryViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for GalleryView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let tabs: Vec<String> = self.data.tabs.iter().map(tab_label).collect();
        writeln!(f, "{}", tabs.join("  "))?;
        writeln!(f)?;

        if self.data.projects.is_empty() {
            writeln!(f, "No projects in this category.")?;
            return Ok(());
        }

        for (i, card) in self.data.projects.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", CardView::new(card))?;
        }

        Ok(())
    }
}

fn tab_label(tab: &FilterTabViewModel) -> String {
    if tab.active {
        format!("[{} ({})]", tab.label, tab.count)
    } else {
        format!("{} ({})", tab.label, tab.count)
    }
}

// --------------------------------------------------------
// Card View
// --------------------------------------------------------

pub struct CardView<'a> {
    card: &'a ProjectCardViewModel,
}

impl<'a> CardView<'a> {
    pub fn new(card: &'a ProjectCardViewModel) -> Self {
        Self { card }
    }
}

impl<'a> fmt::Display for CardView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "{}  {}  [{}]",
            self.card.id, self.card.title, self.card.category
        )?;
        writeln!(f, "    {}", self.card.description)?;

        if !self.card.tool_badges.is_empty() {
            write!(f, "    Tools: {}", self.card.tool_badges.join(", "))?;
            if self.card.hidden_tool_count > 0 {
                write!(f, " +{}", self.card.hidden_tool_count)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::presenters::present_gallery;
    use folio_engine::{browser_from_projects, reduce, Action};
    use folio_types::{Category, CategoryFilter, Project};

    #[test]
    fn test_gallery_layout() {
        let mut browser = browser_from_projects(vec![
            Project::new("1", "Sales Board", "Weekly sales", Category::Dashboard, "s.png")
                .with_tools(["Tableau", "SQL", "Excel"]),
            Project::new("2", "Churn", "Who leaves", Category::Analysis, "c.png")
                .with_tools(["Python"]),
            Project::new("3", "Map", "Store map", Category::Visualization, "m.png"),
        ])
        .unwrap();
        reduce(
            &mut browser,
            Action::SetFilter(CategoryFilter::Only(Category::Dashboard)),
        );

        let output = present_gallery(&browser).to_string();
        insta::assert_snapshot!(output, @r"
        All Projects (3)  Visualization (1)  Analysis (1)  [Dashboards (1)]

        1  Sales Board  [dashboard]
            Weekly sales
            Tools: Tableau, SQL +1
        ");
    }

    #[test]
    fn test_empty_tab_message() {
        let mut browser = browser_from_projects(vec![Project::new(
            "2",
            "Churn",
            "Who leaves",
            Category::Analysis,
            "c.png",
        )])
        .unwrap();
        reduce(
            &mut browser,
            Action::SetFilter(CategoryFilter::Only(Category::Visualization)),
        );

        let output = present_gallery(&browser).to_string();
        assert!(output.ends_with("No projects in this category.\n"));
    }
}
