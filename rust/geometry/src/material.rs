// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Materials as seen by the geometry importer.

/// A material in the global material collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub id: i32,
    pub name: String,
    /// Density in g/cm3.
    pub density: Option<f64>,
    /// Nuclide names with atom fractions.
    pub nuclides: Vec<(String, f64)>,
    /// Default temperature in K for cells filled with this material.
    pub temperature: Option<f64>,
}

impl Material {
    /// Creates a material with no composition or temperature.
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            density: None,
            nuclides: Vec::new(),
            temperature: None,
        }
    }

    /// Sets the default temperature.
    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Returns the default temperature if one is set and positive.
    pub fn default_temperature(&self) -> Option<f64> {
        self.temperature.filter(|t| *t > 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_positive_temperature_is_not_a_default() {
        assert_eq!(Material::new(1, "a").default_temperature(), None);
        assert_eq!(
            Material::new(1, "a").with_temperature(0.0).default_temperature(),
            None
        );
        assert_eq!(
            Material::new(1, "a").with_temperature(600.0).default_temperature(),
            Some(600.0)
        );
    }
}
