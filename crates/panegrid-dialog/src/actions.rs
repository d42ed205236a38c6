#![forbid(unsafe_code)]

//! Action-id to URL registry.
//!
//! Text lines carry compact [`ActionId`]s instead of URL strings; the
//! registry resolves an id back to its URL when a click lands. URLs are
//! deduplicated and ids from removed entries are reused.

use std::collections::HashMap;

use panegrid_text::ActionId;

/// Registry mapping action IDs to URLs.
#[derive(Debug, Clone, Default)]
pub struct ActionRegistry {
    /// URL slots indexed by raw id.
    urls: Vec<Option<String>>,
    /// URL to id lookup for deduplication.
    lookup: HashMap<String, ActionId>,
    /// Reusable ids from removed entries.
    free_list: Vec<ActionId>,
}

impl ActionRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a URL and return its action ID.
    ///
    /// If the URL is already registered, returns the existing ID.
    pub fn register(&mut self, url: &str) -> ActionId {
        if let Some(&id) = self.lookup.get(url) {
            return id;
        }

        let id = if let Some(id) = self.free_list.pop() {
            id
        } else {
            let id = ActionId::new(self.urls.len() as u32);
            self.urls.push(None);
            id
        };

        self.urls[id.get() as usize] = Some(url.to_string());
        self.lookup.insert(url.to_string(), id);
        id
    }

    /// Get the URL for an action ID.
    #[must_use]
    pub fn url(&self, id: ActionId) -> Option<&str> {
        self.urls
            .get(id.get() as usize)
            .and_then(|slot| slot.as_deref())
    }

    /// Remove an entry by ID, freeing it for reuse.
    pub fn unregister(&mut self, id: ActionId) {
        let Some(slot) = self.urls.get_mut(id.get() as usize) else {
            return;
        };
        if let Some(url) = slot.take() {
            self.lookup.remove(&url);
            self.free_list.push(id);
        }
    }

    /// Remove all entries.
    pub fn clear(&mut self) {
        self.urls.clear();
        self.lookup.clear();
        self.free_list.clear();
    }

    /// Number of registered URLs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lookup.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lookup.is_empty()
    }

    /// Check if an action ID resolves to a URL.
    #[must_use]
    pub fn contains(&self, id: ActionId) -> bool {
        self.url(id).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::ActionRegistry;

    #[test]
    fn register_and_resolve() {
        let mut registry = ActionRegistry::new();
        let id = registry.register("https://example.com");
        assert_eq!(registry.url(id), Some("https://example.com"));
        assert!(registry.contains(id));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn duplicate_urls_share_an_id() {
        let mut registry = ActionRegistry::new();
        let a = registry.register("https://example.com");
        let b = registry.register("https://example.com");
        assert_eq!(a, b);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn unregister_frees_the_id_for_reuse() {
        let mut registry = ActionRegistry::new();
        let a = registry.register("https://a.example");
        let _b = registry.register("https://b.example");

        registry.unregister(a);
        assert_eq!(registry.url(a), None);
        assert_eq!(registry.len(), 1);

        let c = registry.register("https://c.example");
        assert_eq!(c, a);
        assert_eq!(registry.url(c), Some("https://c.example"));
    }

    #[test]
    fn unregister_unknown_id_is_a_no_op() {
        let mut registry = ActionRegistry::new();
        registry.unregister(panegrid_text::ActionId::new(42));
        assert!(registry.is_empty());
    }

    #[test]
    fn clear_empties_everything() {
        let mut registry = ActionRegistry::new();
        registry.register("https://a.example");
        registry.register("https://b.example");
        registry.clear();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }
}
