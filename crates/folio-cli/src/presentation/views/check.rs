use std::fmt;

use crate::presentation::view_models::CheckViewModel;

pub struct CheckView<'a> {
    data: &'a CheckViewModel,
}

impl<'a> CheckView<'a> {
    pub fn new(data: &'a CheckViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for CheckView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Catalog:  {}", self.data.source)?;
        writeln!(f, "Projects: {}", self.data.project_count)?;
        for entry in &self.data.categories {
            writeln!(f, "  {:<15} {}", entry.category, entry.count)?;
        }

        let origin = if self.data.fallback.in_catalog {
            "from catalog"
        } else {
            "built-in"
        };
        writeln!(
            f,
            "Fallback: {} ({}, {})",
            self.data.fallback.title, self.data.fallback.id, origin
        )?;
        Ok(())
    }
}
