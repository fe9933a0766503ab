use std::fmt;

/// Alphabetical view of the catalog's recipe names.
///
/// Built fresh for every listing; the catalog's own storage order is
/// never changed by it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeListing {
    names: Vec<String>,
}

impl RecipeListing {
    /// Wraps names that are already sorted.
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl fmt::Display for RecipeListing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.names.is_empty() {
            return writeln!(f, "No recipes available.");
        }
        writeln!(f, "Recipes:")?;
        for name in &self.names {
            writeln!(f, "{name}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_listing() {
        let listing = RecipeListing::default();
        assert!(listing.is_empty());
        assert_eq!(listing.to_string(), "No recipes available.\n");
    }

    #[test]
    fn test_listing_one_name_per_line() {
        let listing = RecipeListing::new(vec!["Banana Bread".into(), "apple pie".into()]);
        assert_eq!(listing.to_string(), "Recipes:\nBanana Bread\napple pie\n");
    }
}
