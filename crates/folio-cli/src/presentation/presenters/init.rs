use folio_runtime::InitResult;

use crate::presentation::view_models::{
    CommandResultViewModel, ConfigStatus, Guidance, InitResultViewModel, StatusBadge,
};

pub fn present_init_result(result: InitResult) -> CommandResultViewModel<InitResultViewModel> {
    let config_status = match result.config_status {
        folio_runtime::ConfigStatus::Created => ConfigStatus::Created,
        folio_runtime::ConfigStatus::LoadedExisting => ConfigStatus::LoadedExisting,
    };

    let content = InitResultViewModel {
        config_path: result.config_path.display().to_string(),
        config_status,
        sample_catalog: result
            .sample_catalog
            .as_ref()
            .map(|path| path.display().to_string()),
        catalog: result
            .config
            .catalog
            .as_ref()
            .map(|path| path.display().to_string()),
    };

    let badge = match (config_status, content.sample_catalog.is_some()) {
        (ConfigStatus::Created, _) => StatusBadge::success("Workspace initialized"),
        (ConfigStatus::LoadedExisting, true) => StatusBadge::success("Sample catalog written"),
        (ConfigStatus::LoadedExisting, false) => StatusBadge::info("Workspace already initialized"),
    };

    CommandResultViewModel::new(content)
        .with_badge(badge)
        .with_suggestion(Guidance::new("Validate the catalog").with_command("folio check"))
        .with_suggestion(Guidance::new("Browse the gallery").with_command("folio browse"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::StatusLevel;
    use folio_runtime::Config;
    use std::path::PathBuf;

    #[test]
    fn test_existing_config_without_sample_is_info() {
        let result = present_init_result(InitResult {
            config_path: PathBuf::from("/data/folio/config.toml"),
            config_status: folio_runtime::ConfigStatus::LoadedExisting,
            sample_catalog: None,
            config: Config::default(),
        });

        assert_eq!(result.content.config_status, ConfigStatus::LoadedExisting);
        assert_eq!(result.badge.map(|b| b.level), Some(StatusLevel::Info));
        assert_eq!(result.suggestions.len(), 2);
    }
}
