// Copyright 2026 the Floorplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Outcome of [`Focus::select_with`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FocusChange<K> {
    /// The key is now focused. `previous` is the key focused before, if any
    /// (it may equal the new key when a region is re-selected).
    Focused {
        /// Previously focused key.
        previous: Option<K>,
    },
    /// The key does not exist; focus is unchanged.
    Missed(K),
}

/// At most one focused key plus a revision counter.
///
/// States are `Idle` (no key) and `Focused(key)`. The revision is bumped only
/// when the focused key actually changes, so observers can cheaply ask
/// whether anything happened.
#[derive(Clone, Debug, Default)]
pub struct Focus<K> {
    current: Option<K>,
    revision: u64,
}

impl<K> Focus<K> {
    /// Creates an idle focus.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            current: None,
            revision: 0,
        }
    }

    /// Returns the focused key, if any.
    #[must_use]
    pub fn current(&self) -> Option<&K> {
        self.current.as_ref()
    }

    /// Returns `true` when no key is focused.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.current.is_none()
    }

    /// Returns the revision counter.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Returns to `Idle`, yielding the key that was focused.
    pub fn clear(&mut self) -> Option<K> {
        let previous = self.current.take();
        if previous.is_some() {
            self.bump_revision();
        }
        previous
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

impl<K: PartialEq> Focus<K> {
    /// Returns `true` if `key` is focused.
    #[must_use]
    pub fn is_focused(&self, key: &K) -> bool {
        self.current.as_ref() == Some(key)
    }

    /// Focuses `key` if `exists` accepts it.
    ///
    /// An unknown key is returned as [`FocusChange::Missed`] and the current
    /// focus, idle or not, is kept.
    pub fn select_with(&mut self, key: K, exists: impl FnOnce(&K) -> bool) -> FocusChange<K> {
        if !exists(&key) {
            return FocusChange::Missed(key);
        }
        let changed = self.current.as_ref() != Some(&key);
        let previous = self.current.replace(key);
        if changed {
            self.bump_revision();
        }
        FocusChange::Focused { previous }
    }
}

#[cfg(test)]
mod tests {
    use super::{Focus, FocusChange};

    const KNOWN: [u32; 3] = [1, 2, 3];

    fn exists(k: &u32) -> bool {
        KNOWN.contains(k)
    }

    #[test]
    fn idle_to_focused_and_back() {
        let mut focus = Focus::new();
        assert!(focus.is_idle());
        assert_eq!(
            focus.select_with(1, exists),
            FocusChange::Focused { previous: None }
        );
        assert!(focus.is_focused(&1));
        assert_eq!(focus.revision(), 1);

        assert_eq!(focus.clear(), Some(1));
        assert!(focus.is_idle());
        assert_eq!(focus.revision(), 2);

        // Clearing while idle is a no-op.
        assert_eq!(focus.clear(), None);
        assert_eq!(focus.revision(), 2);
    }

    #[test]
    fn refocusing_moves_between_keys() {
        let mut focus = Focus::new();
        focus.select_with(1, exists);
        assert_eq!(
            focus.select_with(2, exists),
            FocusChange::Focused { previous: Some(1) }
        );
        assert_eq!(focus.current(), Some(&2));
        assert_eq!(focus.revision(), 2);

        // Same key again reports focus but does not bump the revision.
        assert_eq!(
            focus.select_with(2, exists),
            FocusChange::Focused { previous: Some(2) }
        );
        assert_eq!(focus.revision(), 2);
    }

    #[test]
    fn misses_leave_state_unchanged() {
        let mut focus = Focus::new();
        assert_eq!(focus.select_with(9, exists), FocusChange::Missed(9));
        assert!(focus.is_idle());
        assert_eq!(focus.revision(), 0);

        focus.select_with(3, exists);
        assert_eq!(focus.select_with(9, exists), FocusChange::Missed(9));
        assert_eq!(focus.current(), Some(&3));
        assert_eq!(focus.revision(), 1);
    }
}
