//! Convention registry: name lookup and joint-name based detection.
//!
//! The built-in registry is populated once, on first access, and is read-only
//! afterwards. It is shared across threads without locking.

use hashbrown::HashSet;
use indexmap::IndexMap;
use once_cell::sync::Lazy;

use crate::conventions;
use crate::definition::SkeletonDefinition;
use crate::error::SkeletonError;

static BUILTIN: Lazy<SkeletonRegistry> = Lazy::new(SkeletonRegistry::with_builtin);

/// Ordered catalog of skeleton definitions keyed by normalized name.
#[derive(Debug, Clone, Default)]
pub struct SkeletonRegistry {
    entries: IndexMap<String, SkeletonDefinition>,
}

/// Registry keys are trimmed and lowercased.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

impl SkeletonRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every compiled-in convention. A table that fails
    /// validation is logged and left out; the rest stay usable.
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        for (name, built) in conventions::builtin() {
            match built {
                Ok(definition) => {
                    if let Err(err) = registry.register(name, definition) {
                        log::error!("skipping built-in skeleton '{name}': {err}");
                    }
                }
                Err(err) => log::error!("skipping built-in skeleton '{name}': {err}"),
            }
        }
        registry
    }

    /// Add a definition under `name`. Names collide after normalization.
    pub fn register(
        &mut self,
        name: &str,
        definition: SkeletonDefinition,
    ) -> Result<(), SkeletonError> {
        let key = normalize_name(name);
        if self.entries.contains_key(&key) {
            return Err(SkeletonError::DuplicateName { name: key });
        }
        log::debug!(
            "registered skeleton '{key}' ({} joints)",
            definition.joint_count()
        );
        self.entries.insert(key, definition);
        Ok(())
    }

    /// Case-insensitive, whitespace-trimmed lookup.
    pub fn lookup(&self, name: &str) -> Result<&SkeletonDefinition, SkeletonError> {
        self.entries
            .get(&normalize_name(name))
            .ok_or_else(|| SkeletonError::NotFound {
                name: name.to_string(),
                available: self.names().into_iter().map(str::to_string).collect(),
            })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(&normalize_name(name))
    }

    /// Registered keys in insertion order.
    pub fn names(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SkeletonDefinition)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Key of the first registered convention whose joint-name set equals
    /// `joint_names` as a set. Exact match only: order and duplicates are
    /// ignored, but one renamed or missing joint means no match.
    pub fn detect<I, S>(&self, joint_names: I) -> Option<&str>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.detect_definition(joint_names).map(|(name, _)| name)
    }

    /// Like [`detect`](Self::detect) but also returns the matched definition.
    pub fn detect_definition<I, S>(&self, joint_names: I) -> Option<(&str, &SkeletonDefinition)>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let owned: Vec<S> = joint_names.into_iter().collect();
        let wanted: HashSet<&str> = owned.iter().map(AsRef::as_ref).collect();

        let found = self
            .iter()
            .find(|(_, def)| def.joint_count() >= wanted.len() && def.joint_name_set() == wanted);
        if found.is_none() {
            log::debug!("no skeleton matches a set of {} joint names", wanted.len());
        }
        found
    }
}

/// The process-wide built-in registry.
pub fn registry() -> &'static SkeletonRegistry {
    &BUILTIN
}

/// Look up a built-in convention by name.
pub fn get_definition(name: &str) -> Result<&'static SkeletonDefinition, SkeletonError> {
    BUILTIN.lookup(name)
}

/// Detect a built-in convention from a set of joint names.
pub fn detect_skeleton<I, S>(joint_names: I) -> Option<&'static str>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    BUILTIN.detect(joint_names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roles::{Role, RoleMap};

    fn tiny(name: &str, joints: &[&str]) -> SkeletonDefinition {
        let parents: Vec<i64> = (0..joints.len() as i64).map(|i| i - 1).collect();
        SkeletonDefinition::from_table(name, joints, &parents, RoleMap::new().with(Role::Hips, 0))
            .unwrap()
    }

    fn sample_registry() -> SkeletonRegistry {
        let mut reg = SkeletonRegistry::new();
        reg.register("Alpha", tiny("Alpha", &["a", "b", "c"])).unwrap();
        reg.register("  beta ", tiny("Beta", &["x", "y"])).unwrap();
        reg
    }

    #[test]
    fn keys_are_normalized_and_ordered() {
        let reg = sample_registry();
        assert_eq!(reg.names(), vec!["alpha", "beta"]);
        assert_eq!(reg.len(), 2);
        assert!(reg.contains("ALPHA"));
        assert!(!reg.contains("gamma"));
    }

    #[test]
    fn lookup_ignores_case_and_whitespace() {
        let reg = sample_registry();
        let a = reg.lookup("alpha").unwrap();
        assert!(std::ptr::eq(a, reg.lookup(" ALPHA\t").unwrap()));
        assert_eq!(reg.lookup("Beta").unwrap().name(), "Beta");
    }

    #[test]
    fn unknown_name_lists_registered_names() {
        let reg = sample_registry();
        match reg.lookup("gamma") {
            Err(SkeletonError::NotFound { name, available }) => {
                assert_eq!(name, "gamma");
                assert_eq!(available, vec!["alpha".to_string(), "beta".to_string()]);
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let mut reg = sample_registry();
        let err = reg.register("ALPHA", tiny("Other", &["q"])).unwrap_err();
        assert_eq!(err, SkeletonError::DuplicateName { name: "alpha".into() });
        assert_eq!(reg.len(), 2);
    }

    #[test]
    fn detect_uses_exact_set_equality() {
        let reg = sample_registry();
        assert_eq!(reg.detect(["c", "a", "b"]), Some("alpha"));
        assert_eq!(reg.detect(vec!["y", "x", "x"]), Some("beta"));
        assert_eq!(reg.detect(["a", "b"]), None);
        assert_eq!(reg.detect(["a", "b", "c", "d"]), None);
        assert_eq!(reg.detect(["A", "b", "c"]), None);
        assert_eq!(reg.detect(Vec::<String>::new()), None);
    }

    #[test]
    fn detect_definition_returns_matched_definition() {
        let reg = sample_registry();
        let names = vec!["x".to_string(), "y".to_string()];
        let (key, def) = reg.detect_definition(&names).unwrap();
        assert_eq!(key, "beta");
        assert_eq!(def.name(), "Beta");
    }
}
