use folio_engine::{detail_links, section_content, Opened, SectionContent};
use folio_types::{Project, Section};

use crate::presentation::view_models::{
    CommandResultViewModel, DetailViewModel, Guidance, LinkViewModel, SectionBodyViewModel,
    SectionTabViewModel, StatusBadge,
};

/// Detail of `project` as shown; fallback fields are filled in by [`present_show`]
pub fn present_detail(project: &Project, section: Section) -> DetailViewModel {
    let sections = Section::ALL
        .into_iter()
        .map(|s| SectionTabViewModel {
            section: s.as_str().to_string(),
            label: s.label().to_string(),
            active: s == section,
        })
        .collect();

    let links = detail_links(project)
        .into_iter()
        .map(|link| LinkViewModel {
            label: link.label().to_string(),
            target: link.target().to_string(),
        })
        .collect();

    DetailViewModel {
        requested_id: project.id.to_string(),
        fell_back: false,
        id: project.id.to_string(),
        title: project.title.clone(),
        category: project.category.as_str().to_string(),
        image: project.image.clone(),
        tools: project.tools.clone(),
        active_section: section.as_str().to_string(),
        sections,
        body: present_section_body(section_content(project, section)),
        links,
    }
}

fn present_section_body(content: SectionContent<'_>) -> SectionBodyViewModel {
    match content {
        SectionContent::Overview {
            description,
            objectives,
        } => SectionBodyViewModel::Overview {
            description: description.to_string(),
            objectives: objectives.to_vec(),
        },
        SectionContent::Methodology(text) => SectionBodyViewModel::Methodology {
            text: text.to_string(),
        },
        SectionContent::Findings(items) => SectionBodyViewModel::Findings {
            items: items.to_vec(),
        },
        SectionContent::Conclusion(text) => SectionBodyViewModel::Conclusion {
            text: text.to_string(),
        },
    }
}

pub fn present_show(
    project: &Project,
    section: Section,
    opened: &Opened,
) -> CommandResultViewModel<DetailViewModel> {
    let mut detail = present_detail(project, section);
    detail.requested_id = opened.requested.to_string();
    detail.fell_back = opened.fell_back;

    let fell_back = detail.fell_back;
    let next = section.next();
    let id = detail.id.clone();

    let mut result = CommandResultViewModel::new(detail);
    if fell_back {
        result = result
            .with_badge(StatusBadge::warning(format!(
                "Project '{}' not found; showing '{}'",
                opened.requested, project.title
            )))
            .with_suggestion(Guidance::new("See available projects").with_command("folio list"));
    }

    if next != Section::Overview {
        result = result.with_suggestion(
            Guidance::new(format!("Read the {} section", next.label()))
                .with_command(format!("folio show {} --section {}", id, next.as_str())),
        );
    }

    result
}
