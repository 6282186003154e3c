//! Node-type families: the tables the generator consumes.
//!
//! A [`FamilySpec`] keys its concrete types by name in a `BTreeMap`, so every
//! pass over the types (kind-tag numbering, visitor methods, type blocks) sees
//! them in the same lexicographic order and regenerated output never shifts.

use crate::config::Config;
use crate::debug_println;
use crate::error::{AstgenError, ErrorKind, Result};
use nonempty::NonEmpty;
use serde::Deserialize;
use std::collections::BTreeMap;

/// Whether a family carries an integer kind enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Emit `<Family>Kind`, a `Kind()` accessor, and the specific error pointer
    #[default]
    Tagged,
    /// No enumeration; methods return the general `error` value
    Untagged,
}

impl Mode {
    pub fn emits_kind(self) -> bool {
        matches!(self, Mode::Tagged)
    }
}

/// One concrete node type, borrowed from its family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeSpec<'a> {
    pub name: &'a str,
    /// `"Name type-descriptor"` declarations, emitted verbatim
    pub fields: &'a [String],
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FamilySpec {
    pub name: String,
    #[serde(default)]
    pub mode: Mode,
    pub types: BTreeMap<String, Vec<String>>,
}

impl FamilySpec {
    pub fn new(name: impl Into<String>, mode: Mode) -> Self {
        Self {
            name: name.into(),
            mode,
            types: BTreeMap::new(),
        }
    }

    pub fn tagged(name: impl Into<String>) -> Self {
        Self::new(name, Mode::Tagged)
    }

    pub fn untagged(name: impl Into<String>) -> Self {
        Self::new(name, Mode::Untagged)
    }

    /// Add a concrete type. Re-adding a name replaces its field list.
    pub fn with_type(mut self, name: &str, fields: &[&str]) -> Self {
        self.types.insert(
            name.to_string(),
            fields.iter().map(|field| field.to_string()).collect(),
        );
        self
    }

    /// Concrete types in emission order
    pub fn types(&self) -> impl Iterator<Item = TypeSpec<'_>> {
        self.types.iter().map(|(name, fields)| TypeSpec {
            name: name.as_str(),
            fields: fields.as_slice(),
        })
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Output file name: the lower-cased family name plus `extension`
    pub fn file_name(&self, extension: &str) -> String {
        format!("{}.{}", self.name.to_lowercase(), extension)
    }
}

/// Every family generated in one run, plus the target settings
#[derive(Debug, Clone, PartialEq)]
pub struct Grammar {
    pub config: Config,
    pub families: NonEmpty<FamilySpec>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct GrammarManifest {
    #[serde(default)]
    config: Config,
    families: Vec<FamilySpec>,
}

impl Grammar {
    pub fn new(first: FamilySpec) -> Self {
        Self {
            config: Config::default(),
            families: NonEmpty::new(first),
        }
    }

    pub fn with_family(mut self, family: FamilySpec) -> Self {
        self.families.push(family);
        self
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Load a grammar from its JSON manifest form, e.g. from a build script.
    pub fn from_json(text: &str) -> Result<Self> {
        let manifest: GrammarManifest = serde_json::from_str(text)?;
        let families = NonEmpty::from_vec(manifest.families).ok_or_else(|| {
            AstgenError::new(ErrorKind::ManifestError, "grammar has no families")
                .with_help("add at least one entry to \"families\"")
        })?;
        debug_println!("loaded grammar manifest with {} families", families.len());
        Ok(Self {
            config: manifest.config,
            families,
        })
    }

    pub fn families(&self) -> impl Iterator<Item = &FamilySpec> {
        self.families.iter()
    }
}
