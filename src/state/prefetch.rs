use std::collections::HashSet;

/// Remembers which URLs already received a prefetch hint so each one is
/// injected at most once per page load.
#[derive(Default, Debug)]
pub struct PrefetchRegistry {
    seen: HashSet<String>,
}

impl PrefetchRegistry {
    /// True the first time a URL is seen.
    pub fn mark(&mut self, url: &str) -> bool {
        self.seen.insert(url.to_string())
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marks_each_url_once() {
        let mut reg = PrefetchRegistry::default();
        assert!(reg.mark("https://apps.example.com/chordly"));
        assert!(!reg.mark("https://apps.example.com/chordly"));
        assert!(!reg.mark("https://apps.example.com/chordly"));
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn test_distinct_urls_tracked_separately() {
        let mut reg = PrefetchRegistry::default();
        assert!(reg.mark("https://a.example.com"));
        assert!(reg.mark("https://b.example.com"));
        assert!(!reg.mark("https://a.example.com"));
        assert_eq!(reg.len(), 2);
    }
}
