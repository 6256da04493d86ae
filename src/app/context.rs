use crate::ports::{ClipboardWriter, KeyValueStore, TextEnhancer};
use crate::services::ProfileStore;

/// Application context holding dependencies for command execution.
pub struct AppContext<E: TextEnhancer, S: KeyValueStore, C: ClipboardWriter> {
    enhancer: E,
    profile: ProfileStore<S>,
    clipboard: C,
}

impl<E: TextEnhancer, S: KeyValueStore, C: ClipboardWriter> AppContext<E, S, C> {
    /// Create a new application context.
    pub fn new(enhancer: E, profile: ProfileStore<S>, clipboard: C) -> Self {
        Self { enhancer, profile, clipboard }
    }

    /// Get a reference to the text enhancer.
    pub fn enhancer(&self) -> &E {
        &self.enhancer
    }

    /// Get a reference to the profile store.
    pub fn profile(&self) -> &ProfileStore<S> {
        &self.profile
    }

    /// Get mutable access to the clipboard.
    pub fn clipboard_mut(&mut self) -> &mut C {
        &mut self.clipboard
    }
}
