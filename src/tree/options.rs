//! Edit session options

/// Options for a [`super::SyntaxTree`] edit session
#[derive(Debug, Clone)]
pub struct TreeOptions {
    /// Cache `find_children_by_group` results between edits
    pub cache_children: bool,
    /// Only cache results with more elements than this
    pub children_cache_threshold: usize,
    /// Remove the trivia between a deleted list element and its separator
    pub trim_separator_trivia: bool,
}

impl Default for TreeOptions {
    fn default() -> Self {
        Self {
            cache_children: true,
            children_cache_threshold: 10,
            trim_separator_trivia: true,
        }
    }
}

impl TreeOptions {
    /// Options with caching disabled, for comparing cached and uncached reads
    pub fn uncached() -> Self {
        Self {
            cache_children: false,
            ..Self::default()
        }
    }

    pub fn should_cache(&self, count: usize) -> bool {
        self.cache_children && count > self.children_cache_threshold
    }
}
