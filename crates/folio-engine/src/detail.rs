use folio_types::{Project, Section};

/// Body of one detail section, borrowed from the project
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionContent<'a> {
    Overview {
        description: &'a str,
        objectives: &'a [String],
    },
    Methodology(&'a str),
    Findings(&'a [String]),
    Conclusion(&'a str),
}

/// Select the part of `project` that `section` displays
pub fn section_content(project: &Project, section: Section) -> SectionContent<'_> {
    match section {
        Section::Overview => SectionContent::Overview {
            description: &project.description,
            objectives: &project.objectives,
        },
        Section::Methodology => SectionContent::Methodology(&project.methodology),
        Section::Findings => SectionContent::Findings(&project.findings),
        Section::Conclusion => SectionContent::Conclusion(&project.conclusion),
    }
}

/// Outbound link shown under the detail body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailLink<'a> {
    ViewProject(&'a str),
    DownloadReport(&'a str),
}

impl DetailLink<'_> {
    pub fn label(&self) -> &'static str {
        match self {
            DetailLink::ViewProject(_) => "View Project",
            DetailLink::DownloadReport(_) => "Download Report",
        }
    }

    pub fn target(&self) -> &str {
        match self {
            DetailLink::ViewProject(url) | DetailLink::DownloadReport(url) => url,
        }
    }
}

/// Links that exist for `project`, view link first
pub fn detail_links(project: &Project) -> Vec<DetailLink<'_>> {
    let mut links = Vec::with_capacity(2);
    if let Some(link) = &project.link {
        links.push(DetailLink::ViewProject(link));
    }
    if let Some(download) = &project.download_link {
        links.push(DetailLink::DownloadReport(download));
    }
    links
}
