use std::collections::HashSet;

use crate::models::hydraulics::hose_lay::{InvalidInput, Nozzle};

/// The nozzles a user may pick from.
///
/// The catalog is handed to the coordinator when it is built rather than
/// looked up from shared state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NozzleCatalog {
    nozzles: Vec<Nozzle>,
}

impl NozzleCatalog {
    /// Builds a catalog, keeping the given order.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput::DuplicateNozzle`] if two nozzles share an id.
    pub fn new(nozzles: impl IntoIterator<Item = Nozzle>) -> Result<Self, InvalidInput> {
        let nozzles: Vec<Nozzle> = nozzles.into_iter().collect();
        let mut seen = HashSet::new();
        for nozzle in &nozzles {
            if !seen.insert(nozzle.id.as_str()) {
                return Err(InvalidInput::DuplicateNozzle {
                    id: nozzle.id.clone(),
                });
            }
        }
        Ok(Self { nozzles })
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Nozzle> {
        self.nozzles.iter().find(|nozzle| nozzle.id == id)
    }

    /// Looks up a nozzle by id.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput::UnknownNozzle`] if the id is not in the catalog.
    pub fn resolve(&self, id: &str) -> Result<Nozzle, InvalidInput> {
        self.get(id)
            .cloned()
            .ok_or_else(|| InvalidInput::UnknownNozzle { id: id.to_owned() })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Nozzle> {
        self.nozzles.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nozzles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nozzles.is_empty()
    }
}
