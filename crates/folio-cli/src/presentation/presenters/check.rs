use folio_engine::Catalog;
use folio_runtime::CatalogSource;
use folio_types::ProjectId;

use crate::presentation::view_models::{
    CategoryCountViewModel, CheckViewModel, CommandResultViewModel, FallbackViewModel, Guidance,
    StatusBadge,
};

pub fn present_check(
    catalog: &Catalog,
    source: &CatalogSource,
    missing_default: Option<&ProjectId>,
) -> CommandResultViewModel<CheckViewModel> {
    let fallback = catalog.fallback();

    let content = CheckViewModel {
        source: source.to_string(),
        project_count: catalog.len(),
        categories: catalog
            .category_counts()
            .into_iter()
            .map(|(category, count)| CategoryCountViewModel {
                category: category.as_str().to_string(),
                count,
            })
            .collect(),
        fallback: FallbackViewModel {
            id: fallback.id.to_string(),
            title: fallback.title.clone(),
            in_catalog: catalog.fallback_is_entry(),
        },
    };

    let mut result = CommandResultViewModel::new(content);

    if let Some(id) = missing_default {
        result = result
            .with_badge(StatusBadge::warning(format!(
                "Configured default project '{}' is not in the catalog",
                id
            )))
            .with_suggestion(
                Guidance::new("Point default_project at an existing id in config.toml"),
            );
    } else if catalog.is_empty() {
        result = result
            .with_badge(StatusBadge::warning("Catalog is empty"))
            .with_suggestion(
                Guidance::new("Write the bundled catalog").with_command("folio init --with-sample"),
            );
    } else {
        result = result.with_badge(StatusBadge::success("Catalog OK"));
    }

    result
}
