//! Atomically swapped immutable values.
//!
//! Both the per-network mode grammar and the bot's access configuration
//! can change while lines are being parsed (capability renegotiation,
//! configuration reload). Neither is ever mutated in place: a new value is
//! built and swapped in, and readers keep whichever whole value they
//! loaded.
//!
//! # Example
//!
//! ```
//! use slirc_events::mode::{ModeCategory, ModeGrammarBuilder, ModeGrammarConfig, ModeParser};
//! use slirc_events::Snapshot;
//!
//! let grammar = Snapshot::new(ModeGrammarConfig::default());
//! let before = ModeParser::new(grammar.load());
//!
//! grammar.store(
//!     ModeGrammarBuilder::new()
//!         .category(ModeCategory::A, "beIq")
//!         .build()
//!         .unwrap(),
//! );
//!
//! // parsers built before the swap keep the grammar they loaded
//! assert!(before.classify('q').is_err());
//! assert!(ModeParser::new(grammar.load()).classify('q').is_ok());
//! ```

use std::fmt;
use std::sync::Arc;

use arc_swap::ArcSwap;

/// A shared slot holding an immutable `T` that can be replaced wholesale.
pub struct Snapshot<T> {
    current: ArcSwap<T>,
}

impl<T> Snapshot<T> {
    pub fn new(value: T) -> Self {
        Self {
            current: ArcSwap::from_pointee(value),
        }
    }

    /// The current value. Later swaps do not affect the returned `Arc`.
    pub fn load(&self) -> Arc<T> {
        self.current.load_full()
    }

    /// Replace the current value.
    pub fn store(&self, value: T) {
        self.current.store(Arc::new(value));
    }

    /// Replace the current value with an already shared one.
    pub fn store_arc(&self, value: Arc<T>) {
        self.current.store(value);
    }

    /// Replace the current value, returning the previous one.
    pub fn swap(&self, value: T) -> Arc<T> {
        self.current.swap(Arc::new(value))
    }
}

impl<T: Default> Default for Snapshot<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for Snapshot<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Snapshot").field(&self.load()).finish()
    }
}
