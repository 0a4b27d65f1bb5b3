//! Read-only weave and yarn reference tables
//!
//! The built-in tables are validated once and shared process-wide through
//! [`Catalog::builtin`]. Callers that need their own tables build them with
//! [`Catalog::new`], which applies the same validation.

/// Parametric interlacement matrix generators
pub mod generators;
/// Weave structure definitions
pub mod weave;
/// Built-in weave table
pub mod weaves;
/// Yarn specifications
pub mod yarn;
/// Built-in yarn table
pub mod yarns;

use crate::io::error::{FabricError, Result, unresolved};
use std::collections::HashMap;
use std::sync::LazyLock;
use weave::{WeaveCategory, WeaveDefinition, WeaveTrait};
use yarn::{YarnCategory, YarnSpec};

static BUILTIN: LazyLock<Catalog> = LazyLock::new(|| {
    Catalog::load_builtin().unwrap_or_else(|error| {
        tracing::error!(%error, "built-in catalog failed validation");
        Catalog::default()
    })
});

/// Indexed collection of weave and yarn definitions
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    weaves: Vec<WeaveDefinition>,
    yarns: Vec<YarnSpec>,
    weave_index: HashMap<String, usize>,
    yarn_index: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog from explicit tables
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A weave fails [`WeaveDefinition::validate`]
    /// - Two weaves or two yarns share an id
    pub fn new(weaves: Vec<WeaveDefinition>, yarns: Vec<YarnSpec>) -> Result<Self> {
        let mut weave_index = HashMap::with_capacity(weaves.len());
        for (position, weave) in weaves.iter().enumerate() {
            weave.validate()?;
            if weave_index.insert(weave.id.clone(), position).is_some() {
                return Err(FabricError::InvalidWeave {
                    weave_id: weave.id.clone(),
                    reason: "duplicate weave id".to_string(),
                });
            }
        }

        let mut yarn_index = HashMap::with_capacity(yarns.len());
        for (position, yarn) in yarns.iter().enumerate() {
            if yarn_index.insert(yarn.id().to_string(), position).is_some() {
                return Err(FabricError::InvalidYarn {
                    yarn_id: yarn.id().to_string(),
                    reason: "duplicate yarn id".to_string(),
                });
            }
        }

        Ok(Self {
            weaves,
            yarns,
            weave_index,
            yarn_index,
        })
    }

    /// Build and validate the built-in tables
    ///
    /// # Errors
    ///
    /// Returns an error if a built-in entry is malformed
    pub fn load_builtin() -> Result<Self> {
        Self::new(weaves::builtin_weaves(), yarns::builtin_yarns()?)
    }

    /// Shared built-in catalog
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// All weaves in catalog order
    pub fn weaves(&self) -> &[WeaveDefinition] {
        &self.weaves
    }

    /// All yarns in catalog order
    pub fn yarns(&self) -> &[YarnSpec] {
        &self.yarns
    }

    /// Look a weave up by id
    pub fn weave(&self, id: &str) -> Option<&WeaveDefinition> {
        self.weave_index
            .get(id)
            .and_then(|&position| self.weaves.get(position))
    }

    /// Look a yarn up by id
    pub fn yarn(&self, id: &str) -> Option<&YarnSpec> {
        self.yarn_index
            .get(id)
            .and_then(|&position| self.yarns.get(position))
    }

    /// Look a weave up, treating absence as an error
    ///
    /// # Errors
    ///
    /// Returns [`FabricError::UnresolvedReference`] if no weave has this id
    pub fn require_weave(&self, id: &str) -> Result<&WeaveDefinition> {
        self.weave(id).ok_or_else(|| unresolved("weave", &id))
    }

    /// Look a yarn up, treating absence as an error
    ///
    /// # Errors
    ///
    /// Returns [`FabricError::UnresolvedReference`] if no yarn has this id
    pub fn require_yarn(&self, id: &str) -> Result<&YarnSpec> {
        self.yarn(id).ok_or_else(|| unresolved("yarn", &id))
    }

    /// Weaves of one structural family
    pub fn weaves_in(&self, category: WeaveCategory) -> Vec<&WeaveDefinition> {
        self.weaves
            .iter()
            .filter(|weave| weave.category == category)
            .collect()
    }

    /// Yarns of one fibre class
    pub fn yarns_in(&self, category: YarnCategory) -> Vec<&YarnSpec> {
        self.yarns
            .iter()
            .filter(|yarn| yarn.category() == category)
            .collect()
    }

    /// Weaves scoring at least the given minimum on every listed trait
    ///
    /// An empty threshold list matches every weave.
    pub fn weaves_meeting(&self, thresholds: &[(WeaveTrait, u8)]) -> Vec<&WeaveDefinition> {
        self.weaves
            .iter()
            .filter(|weave| {
                thresholds
                    .iter()
                    .all(|&(trait_, minimum)| weave.characteristics.score(trait_) >= minimum)
            })
            .collect()
    }

    /// Weaves with an end use containing `application`, ignoring case
    pub fn weaves_for_application(&self, application: &str) -> Vec<&WeaveDefinition> {
        let needle = application.to_lowercase();
        self.weaves
            .iter()
            .filter(|weave| {
                weave
                    .applications
                    .iter()
                    .any(|candidate| candidate.to_lowercase().contains(&needle))
            })
            .collect()
    }
}
