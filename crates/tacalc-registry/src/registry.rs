//! Name-keyed table of indicator definitions and lifecycle-gated dispatch.
//!
//! [`Registry::builtin`] holds one record for every indicator in `tacalc`,
//! built once on first use. Custom registries start empty
//! ([`Registry::new`]) or from a copy of the built-in table
//! ([`Registry::with_builtins`]) and can add or replace records.
//!
//! Names are matched case-insensitively and stored upper-case.
//!
//! # Example
//!
//! ```
//! use tacalc::Context;
//! use tacalc_registry::Registry;
//!
//! let ctx = Context::ready();
//! let registry = Registry::builtin();
//!
//! let out = registry
//!     .call(&ctx, "sma", &[&[1.0, 2.0, 3.0, 4.0, 5.0]], &[("timeperiod", 3.into())])
//!     .unwrap();
//! let sma = out[0].as_real().unwrap();
//! assert!(sma[1].is_nan());
//! assert_eq!(sma[2..], [2.0, 3.0, 4.0]);
//! ```

use std::collections::HashMap;
use std::sync::OnceLock;

use tacalc::{Context, Error, Result};

use crate::builtins;
use crate::def::{Group, IndicatorDef, Output};
use crate::params::ParamValue;

/// Table of indicator definitions keyed by upper-case name.
///
/// # Thread Safety
///
/// Lookups and calls take `&self`, so a registry can be shared freely once
/// built. Registration needs `&mut self`; wrap the registry in a lock if it
/// must change while shared.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    defs: HashMap<String, IndicatorDef>,
}

impl Registry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty registry with room for `capacity` records.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            defs: HashMap::with_capacity(capacity),
        }
    }

    /// Returns the shared table of every built-in indicator.
    #[must_use]
    pub fn builtin() -> &'static Self {
        static BUILTIN: OnceLock<Registry> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            let mut registry = Self::with_capacity(192);
            builtins::register_all(&mut registry);
            log::debug!("built-in registry holds {} indicators", registry.len());
            registry
        })
    }

    /// Returns an owned copy of the built-in table, for extension.
    #[must_use]
    pub fn with_builtins() -> Self {
        Self::builtin().clone()
    }

    /// Adds a record, returning the one it replaced under the same name.
    pub fn register(&mut self, def: IndicatorDef) -> Option<IndicatorDef> {
        self.defs.insert(def.name().to_ascii_uppercase(), def)
    }

    /// Removes a record by name.
    pub fn unregister(&mut self, name: &str) -> Option<IndicatorDef> {
        self.defs.remove(&name.to_ascii_uppercase())
    }

    /// Looks up a record by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&IndicatorDef> {
        self.defs.get(&name.to_ascii_uppercase())
    }

    /// Looks up a record by name, failing for unknown names.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnknownIndicator` if no record has this name.
    pub fn require(&self, name: &str) -> Result<&IndicatorDef> {
        self.get(name).ok_or_else(|| Error::UnknownIndicator {
            name: name.to_string(),
        })
    }

    /// Checks whether a record with this name exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.defs.len()
    }

    /// Returns `true` if the registry has no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    /// All names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.defs.values().map(IndicatorDef::name).collect();
        names.sort_unstable();
        names
    }

    /// Iterates over all records in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &IndicatorDef> {
        self.defs.values()
    }

    /// Records in `group`, sorted by name.
    #[must_use]
    pub fn by_group(&self, group: Group) -> Vec<&IndicatorDef> {
        let mut defs: Vec<_> = self.defs.values().filter(|d| d.group() == group).collect();
        defs.sort_unstable_by_key(|d| d.name());
        defs
    }

    /// Returns the lookback of `name` with `overrides` applied to its
    /// default parameters.
    ///
    /// # Errors
    ///
    /// Returns the lookup, parameter resolution and parameter validation
    /// errors.
    pub fn lookback(&self, name: &str, overrides: &[(&str, ParamValue)]) -> Result<usize> {
        let def = self.require(name)?;
        def.lookback(&def.resolve(overrides)?)
    }

    /// Computes `name` over `inputs` with `overrides` applied to its default
    /// parameters.
    ///
    /// Inputs are passed in the order of [`IndicatorDef::inputs`].
    ///
    /// # Errors
    ///
    /// - `Error::Lifecycle` unless `ctx` is ready; nothing else is checked.
    /// - `Error::UnknownIndicator`, `Error::UnknownParameter`,
    ///   `Error::ParameterType` and `Error::InputCount` from the lookup.
    /// - The indicator's own errors.
    pub fn call(
        &self,
        ctx: &Context,
        name: &str,
        inputs: &[&[f64]],
        overrides: &[(&str, ParamValue)],
    ) -> Result<Vec<Output>> {
        ctx.run(|| {
            let def = self.require(name)?;
            let params = def.resolve(overrides)?;
            log::trace!(
                "dispatch {} over {} inputs of {} bars",
                def.name(),
                inputs.len(),
                inputs.first().map_or(0, |s| s.len())
            );
            def.compute(inputs, &params)
        })
    }
}
