//! Ordered recognizer registry.

use crate::recognizer::{
    DragRecognizer, HoldRecognizer, Recognizer, ReleaseRecognizer, SwipeRecognizer, TapRecognizer,
    TouchRecognizer, TransformRecognizer,
};

/// Holds the recognizers in detection order.
///
/// Registration re-sorts the whole list ascending by priority, stable
/// with respect to insertion order on ties, because recognizers may be
/// added at arbitrary times and later ones may need to run before or
/// after existing ones.
pub struct GestureRegistry {
    items: Vec<Box<dyn Recognizer>>,
}

impl GestureRegistry {
    /// An empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// A registry with all built-in recognizers.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(TouchRecognizer));
        registry.register(Box::new(HoldRecognizer));
        registry.register(Box::new(SwipeRecognizer));
        registry.register(Box::<TransformRecognizer>::default());
        registry.register(Box::<DragRecognizer>::default());
        registry.register(Box::new(TapRecognizer));
        registry.register(Box::new(ReleaseRecognizer));
        registry
    }

    /// Add a recognizer and restore detection order.
    pub fn register(&mut self, recognizer: Box<dyn Recognizer>) {
        self.items.push(recognizer);
        self.items.sort_by_key(|r| r.priority());
    }

    /// Recognizers in detection order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Box<dyn Recognizer>> {
        self.items.iter_mut()
    }

    /// Number of registered recognizers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for GestureRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl std::fmt::Debug for GestureRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GestureRegistry")
            .field("len", &self.items.len())
            .finish()
    }
}
