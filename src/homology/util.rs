// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::mem::take;

/// Links of a cell in a [`CellSet`].
#[derive(Debug, Default, Clone)]
struct CellLink {
    prev: Option<u32>,
    next: Option<u32>,
    present: bool,
}

/// A set of cells `0..capacity` implemented as a doubly linked list whose
/// nodes are stored in a vector indexed by cell. This provides O(1)
/// insertion, removal of a known cell and extraction of an arbitrary cell
/// without hashing.
///
/// The extraction order is last in, first out; callers must not rely on it.
#[derive(Debug, Default, Clone)]
pub(crate) struct CellSet {
    links: Vec<CellLink>,
    front: Option<u32>,
    len: usize,
}

impl CellSet {
    /// Create an empty set able to hold the cells `0..capacity`.
    pub fn new(capacity: u32) -> Self {
        CellSet {
            links: vec![CellLink::default(); capacity as usize],
            front: None,
            len: 0,
        }
    }

    /// The number of cells in the set.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the set holds no cells.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether `cell` is in the set.
    pub fn contains(&self, cell: u32) -> bool {
        self.links[cell as usize].present
    }

    /// Add `cell` to the set. Returns `false` if it was already present.
    pub fn insert(&mut self, cell: u32) -> bool {
        if self.contains(cell) {
            return false;
        }

        let next = self.front.replace(cell);
        if let Some(old_front) = next {
            self.links[old_front as usize].prev = Some(cell);
        }
        self.links[cell as usize] = CellLink {
            prev: None,
            next,
            present: true,
        };
        self.len += 1;
        true
    }

    /// Remove `cell` from the set. Returns `false` if it was not present.
    pub fn remove(&mut self, cell: u32) -> bool {
        if !self.contains(cell) {
            return false;
        }

        let CellLink { prev, next, .. } = take(&mut self.links[cell as usize]);

        // Update the neighbors' pointers, or the front if `cell` was first
        match prev {
            Some(prev) => self.links[prev as usize].next = next,
            None => self.front = next,
        }
        if let Some(next) = next {
            self.links[next as usize].prev = prev;
        }

        self.len -= 1;
        true
    }

    /// Remove and return some cell of the set, or `None` if it is empty.
    pub fn pop(&mut self) -> Option<u32> {
        let front = self.front?;
        self.remove(front);
        Some(front)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_contains() {
        let mut set = CellSet::new(5);
        assert!(set.is_empty());

        assert!(set.insert(3));
        assert!(set.insert(0));
        assert!(!set.insert(3));

        assert_eq!(set.len(), 2);
        assert!(set.contains(0));
        assert!(set.contains(3));
        assert!(!set.contains(4));
    }

    #[test]
    fn test_remove_front_middle_and_back() {
        let mut set = CellSet::new(5);
        for cell in 0..5 {
            set.insert(cell);
        }

        // List order is 4, 3, 2, 1, 0
        assert!(set.remove(4));
        assert!(set.remove(2));
        assert!(set.remove(0));
        assert!(!set.remove(2));
        assert_eq!(set.len(), 2);

        let mut popped = Vec::new();
        while let Some(cell) = set.pop() {
            popped.push(cell);
        }
        popped.sort();
        assert_eq!(popped, vec![1, 3]);
        assert!(set.is_empty());
    }

    #[test]
    fn test_reinsert_after_pop() {
        let mut set = CellSet::new(3);
        set.insert(1);
        assert_eq!(set.pop(), Some(1));
        assert_eq!(set.pop(), None);

        assert!(set.insert(1));
        assert!(set.insert(2));
        assert!(set.remove(1));
        assert_eq!(set.pop(), Some(2));
        assert!(set.is_empty());
    }
}
