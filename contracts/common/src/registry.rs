//! Participant Registry
//!
//! Compact, order-unstable set of the addresses currently holding a
//! nonzero deposit. Membership add and remove are O(1); removal is a
//! swap-remove that moves the last participant into the vacated slot and
//! fixes up its stored index.
//!
//! Invariant: for every participant `u`, `participants[index_of[u]] == u`;
//! `index_of` holds no entries for non-participants; the sequence has no
//! duplicates.

use std::collections::HashMap;

use crate::errors::{PoolError, PoolResult};
use crate::types::Address;

/// Dense participant set with an index map for O(1) membership updates.
#[derive(Debug, Clone, Default)]
pub struct ParticipantRegistry {
    /// Dense participant sequence; order is not semantically meaningful
    /// but is stable between mutations.
    participants: Vec<Address>,
    /// Position of each participant in `participants`.
    index_of: HashMap<Address, usize>,
}

impl ParticipantRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an address. No-op if already a participant. O(1).
    pub fn add(&mut self, user: Address) {
        if self.index_of.contains_key(&user) {
            return;
        }
        self.index_of.insert(user, self.participants.len());
        self.participants.push(user);
    }

    /// Deregister an address via swap-remove. O(1).
    ///
    /// The final participant takes the vacated slot and its stored index
    /// is updated, preserving the registry invariant for the moved entry.
    pub fn remove(&mut self, user: Address) -> PoolResult<()> {
        let idx = self
            .index_of
            .remove(&user)
            .ok_or(PoolError::NotParticipant { user })?;

        let last = self.participants.len() - 1;
        if idx != last {
            let moved = self.participants[last];
            self.participants[idx] = moved;
            self.index_of.insert(moved, idx);
        }
        self.participants.pop();

        Ok(())
    }

    /// Pure membership lookup
    pub fn contains(&self, user: &Address) -> bool {
        self.index_of.contains_key(user)
    }

    /// Current position of a participant, if registered
    pub fn position_of(&self, user: &Address) -> Option<usize> {
        self.index_of.get(user).copied()
    }

    /// Number of participants
    pub fn len(&self) -> usize {
        self.participants.len()
    }

    /// True when no addresses are registered
    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    /// Iterate over participants in sequence order
    pub fn iter(&self) -> impl Iterator<Item = &Address> {
        self.participants.iter()
    }

    /// The dense participant sequence
    pub fn as_slice(&self) -> &[Address] {
        &self.participants
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(n: u8) -> Address {
        [n; 32]
    }

    /// Every stored index must point back at its own entry and the map
    /// must cover exactly the sequence.
    fn assert_invariant(reg: &ParticipantRegistry) {
        assert_eq!(reg.participants.len(), reg.index_of.len());
        for (i, user) in reg.participants.iter().enumerate() {
            assert_eq!(reg.index_of.get(user), Some(&i));
        }
    }

    #[test]
    fn test_add_and_contains() {
        let mut reg = ParticipantRegistry::new();
        assert!(reg.is_empty());

        reg.add(addr(1));
        reg.add(addr(2));

        assert!(reg.contains(&addr(1)));
        assert!(reg.contains(&addr(2)));
        assert!(!reg.contains(&addr(3)));
        assert_eq!(reg.len(), 2);
        assert_invariant(&reg);
    }

    #[test]
    fn test_add_is_idempotent() {
        let mut reg = ParticipantRegistry::new();
        reg.add(addr(1));
        reg.add(addr(1));

        assert_eq!(reg.len(), 1);
        assert_eq!(reg.position_of(&addr(1)), Some(0));
        assert_invariant(&reg);
    }

    #[test]
    fn test_swap_remove_updates_moved_index() {
        // [A, B, C] with indices 0, 1, 2; removing B moves C into slot 1
        let mut reg = ParticipantRegistry::new();
        reg.add(addr(1));
        reg.add(addr(2));
        reg.add(addr(3));

        reg.remove(addr(2)).unwrap();

        assert_eq!(reg.as_slice(), &[addr(1), addr(3)]);
        assert_eq!(reg.position_of(&addr(1)), Some(0));
        assert_eq!(reg.position_of(&addr(3)), Some(1));
        assert!(!reg.contains(&addr(2)));
        assert_invariant(&reg);
    }

    #[test]
    fn test_remove_last_element() {
        let mut reg = ParticipantRegistry::new();
        reg.add(addr(1));
        reg.add(addr(2));

        reg.remove(addr(2)).unwrap();

        assert_eq!(reg.as_slice(), &[addr(1)]);
        assert_invariant(&reg);
    }

    #[test]
    fn test_remove_only_element() {
        let mut reg = ParticipantRegistry::new();
        reg.add(addr(1));

        reg.remove(addr(1)).unwrap();

        assert!(reg.is_empty());
        assert_invariant(&reg);
    }

    #[test]
    fn test_remove_unknown_fails() {
        let mut reg = ParticipantRegistry::new();
        reg.add(addr(1));

        let result = reg.remove(addr(9));
        assert!(matches!(result, Err(PoolError::NotParticipant { .. })));
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn test_interleaved_mutations_hold_invariant() {
        let mut reg = ParticipantRegistry::new();

        for n in 1..=8 {
            reg.add(addr(n));
        }
        assert_invariant(&reg);

        // Remove from the middle, front, and back, re-adding in between
        reg.remove(addr(4)).unwrap();
        assert_invariant(&reg);
        reg.remove(addr(1)).unwrap();
        assert_invariant(&reg);
        reg.add(addr(9));
        assert_invariant(&reg);
        reg.remove(addr(8)).unwrap();
        assert_invariant(&reg);
        reg.add(addr(1));
        assert_invariant(&reg);

        assert_eq!(reg.len(), 7);
        for n in [1u8, 2, 3, 5, 6, 7, 9] {
            assert!(reg.contains(&addr(n)));
        }
        for n in [4u8, 8] {
            assert!(!reg.contains(&addr(n)));
        }
    }
}
