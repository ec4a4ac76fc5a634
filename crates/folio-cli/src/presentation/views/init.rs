use std::fmt;

use crate::presentation::view_models::{ConfigStatus, InitResultViewModel};

pub struct InitView<'a> {
    data: &'a InitResultViewModel,
}

impl<'a> InitView<'a> {
    pub fn new(data: &'a InitResultViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for InitView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.data.config_status {
            ConfigStatus::Created => writeln!(f, "Created {}", self.data.config_path)?,
            ConfigStatus::LoadedExisting => {
                writeln!(f, "Using existing {}", self.data.config_path)?
            }
        }

        if let Some(sample) = &self.data.sample_catalog {
            writeln!(f, "Wrote sample catalog to {}", sample)?;
        }

        match &self.data.catalog {
            Some(catalog) => writeln!(f, "Catalog: {}", catalog)?,
            None => writeln!(f, "Catalog: built-in")?,
        }
        Ok(())
    }
}
