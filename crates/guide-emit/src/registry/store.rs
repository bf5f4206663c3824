//! Editor registry storage

use super::{EditorCategory, EditorRegistration};
use std::collections::HashMap;

/// Lookup table over the fixed editor catalog.
pub struct EditorRegistry {
    editors: HashMap<&'static str, EditorRegistration>,
}

impl EditorRegistry {
    /// Create a registry populated with all built-in editors.
    ///
    /// The disjoint-output-path invariant over the catalog is fixed at
    /// compile time and verified by the builtins test suite; the debug
    /// assertion here guards against regressions during development.
    pub fn with_builtins() -> Self {
        let mut editors = HashMap::new();
        for reg in super::builtins::builtin_registrations() {
            debug_assert!(
                !editors.contains_key(reg.slug),
                "duplicate editor slug {}",
                reg.slug
            );
            editors.insert(reg.slug, reg);
        }
        Self { editors }
    }

    /// Register an editor.
    ///
    /// Later registrations replace earlier ones with the same slug. The
    /// caller is responsible for keeping output roots disjoint from the
    /// rest of the catalog.
    pub fn register(&mut self, registration: EditorRegistration) {
        self.editors.insert(registration.slug, registration);
    }

    /// Get a registration by slug.
    pub fn get(&self, slug: &str) -> Option<&EditorRegistration> {
        self.editors.get(slug)
    }

    /// Check if an editor is registered.
    pub fn contains(&self, slug: &str) -> bool {
        self.editors.contains_key(slug)
    }

    /// Number of registered editors.
    pub fn len(&self) -> usize {
        self.editors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.editors.is_empty()
    }

    /// List all registered slugs (sorted).
    pub fn list(&self) -> Vec<&'static str> {
        let mut slugs: Vec<_> = self.editors.keys().copied().collect();
        slugs.sort_unstable();
        slugs
    }

    /// List slugs in one category (sorted).
    pub fn by_category(&self, category: EditorCategory) -> Vec<&'static str> {
        let mut slugs: Vec<_> = self
            .editors
            .values()
            .filter(|r| r.category == category)
            .map(|r| r.slug)
            .collect();
        slugs.sort_unstable();
        slugs
    }

    /// Iterate over all registrations in slug order.
    pub fn iter(&self) -> impl Iterator<Item = &EditorRegistration> {
        let mut regs: Vec<_> = self.editors.values().collect();
        regs.sort_unstable_by_key(|r| r.slug);
        regs.into_iter()
    }
}

impl Default for EditorRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}
