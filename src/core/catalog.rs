use crate::core::Package;
use crate::utils::error::{BoothError, Result};
use crate::utils::validation::{validate_non_empty_string, Validate};
use std::collections::HashSet;

/// The package list shown to visitors. Fixed once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    packages: Vec<Package>,
}

impl Catalog {
    /// Builds a catalog, rejecting duplicate ids, blank titles and bad prices.
    pub fn new(packages: Vec<Package>) -> Result<Self> {
        let catalog = Self { packages };
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn get(&self, id: u32) -> Result<&Package> {
        self.packages
            .iter()
            .find(|p| p.id == id)
            .ok_or(BoothError::UnknownPackage { id })
    }

    pub fn packages(&self) -> &[Package] {
        &self.packages
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            packages: vec![
                Package::new(1, "Formule 1 (numérique)", 150.0, 0),
                Package::new(2, "Formule 2", 200.0, 150),
                Package::new(3, "Formule 3", 300.0, 300),
                Package::new(4, "Formule 4", 400.0, 450),
            ],
        }
    }
}

impl Validate for Catalog {
    fn validate(&self) -> Result<()> {
        if self.packages.is_empty() {
            return Err(BoothError::ConfigError {
                message: "Catalog must contain at least one package".to_string(),
            });
        }

        let mut seen = HashSet::new();
        for package in &self.packages {
            if !seen.insert(package.id) {
                return Err(BoothError::InvalidConfigValueError {
                    field: "packages.id".to_string(),
                    value: package.id.to_string(),
                    reason: "Duplicate package id".to_string(),
                });
            }
            validate_non_empty_string("packages.title", &package.title)?;
            if !package.price_amount.is_finite() || package.price_amount < 0.0 {
                return Err(BoothError::InvalidConfigValueError {
                    field: "packages.price".to_string(),
                    value: package.price_amount.to_string(),
                    reason: "Price must be a finite, non-negative amount".to_string(),
                });
            }
        }
        Ok(())
    }
}
