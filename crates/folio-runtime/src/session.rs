use std::path::PathBuf;

use folio_engine::{reduce, Action, Browser, Catalog, Transition};
use folio_types::{CategoryFilter, Project};
use tracing::{debug, info, warn};

use crate::catalog_source::CatalogSource;
use crate::config::Config;
use crate::Result;

/// Inputs that select the catalog for a session
#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    /// Directory that holds `config.toml`; relative catalog paths start here
    pub data_dir: PathBuf,
    /// Catalog file that overrides `config.catalog`
    pub catalog_override: Option<PathBuf>,
}

impl SessionOptions {
    pub fn source(&self, config: &Config) -> CatalogSource {
        self.catalog_override
            .clone()
            .or_else(|| config.catalog_path(&self.data_dir))
            .map(CatalogSource::File)
            .unwrap_or(CatalogSource::Builtin)
    }
}

/// One browsing session: the browser state plus where its catalog came from
///
/// Every action goes through [`BrowserSession::dispatch`] so transitions are
/// traced in one place.
#[derive(Debug, Clone)]
pub struct BrowserSession {
    browser: Browser,
    source: CatalogSource,
}

impl BrowserSession {
    /// Load the configured catalog and apply config defaults
    pub fn start(config: &Config, options: &SessionOptions) -> Result<Self> {
        let source = options.source(config);
        let projects = source.load()?;
        Self::with_projects(source, projects, config)
    }

    /// Build a session from already loaded records
    pub fn with_projects(
        source: CatalogSource,
        projects: Vec<Project>,
        config: &Config,
    ) -> Result<Self> {
        let mut catalog = Catalog::new(projects)?;

        if let Some(id) = &config.default_project {
            if catalog.contains(id) {
                catalog = catalog.with_default_id(id)?;
                debug!(project = %id, "using configured default project as fallback");
            } else {
                warn!(
                    project = %id,
                    "configured default project is not in the catalog; using showcase project"
                );
            }
        }

        info!(
            source = %source,
            projects = catalog.len(),
            "catalog loaded"
        );

        let mut session = Self {
            browser: Browser::new(catalog),
            source,
        };

        if let Some(filter) = config.initial_filter {
            session.dispatch(Action::SetFilter(filter));
        }

        Ok(session)
    }

    pub fn browser(&self) -> &Browser {
        &self.browser
    }

    pub fn source(&self) -> &CatalogSource {
        &self.source
    }

    /// Apply one action and trace what happened
    pub fn dispatch(&mut self, action: Action) -> Transition {
        let transition = reduce(&mut self.browser, action);

        match &transition {
            Transition::Opened(opened) if opened.fell_back => warn!(
                requested = %opened.requested,
                resolved = %opened.resolved,
                "project not found; showing fallback project"
            ),
            Transition::Opened(opened) => debug!(project = %opened.resolved, "detail opened"),
            Transition::FilterChanged { from, to } => {
                debug!(from = %from, to = %to, "filter changed")
            }
            Transition::SectionChanged { from, to } => {
                debug!(from = %from, to = %to, "section changed")
            }
            Transition::Closed(id) => debug!(project = %id, "detail closed"),
            Transition::FilterUnchanged(_)
            | Transition::SectionUnchanged(_)
            | Transition::Ignored => {}
        }

        transition
    }

    /// Apply a raw filter value
    ///
    /// Unknown values fail with `InvalidFilterValue` and leave the session
    /// as it was.
    pub fn set_filter_str(&mut self, raw: &str) -> Result<Transition> {
        let filter: CategoryFilter = raw.parse().inspect_err(|_| {
            warn!(value = raw, "rejected filter value");
        })?;
        Ok(self.dispatch(Action::SetFilter(filter)))
    }
}
