//! Fixed-capacity entity pools
//!
//! Everything is allocated once at startup; "destruction" tags a slot Free,
//! hides its entity, and recycles it in place. The shot pool additionally
//! runs a round-robin cursor: a fire request claims the next slot only if
//! the previous shot there has expired, otherwise the request is dropped.
//! Slot state is an explicit tag rather than overloading the visibility
//! flag, though the two are kept in lockstep for the render/collision
//! filters.

use super::entity::Entity;

/// Whether a pool slot currently holds a live entity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotState {
    Free,
    Alive,
}

#[derive(Debug, Clone)]
pub struct Slot {
    pub entity: Entity,
    pub state: SlotState,
}

/// A fixed ring of recyclable entity slots
#[derive(Debug, Clone)]
pub struct Pool {
    slots: Vec<Slot>,
    cursor: usize,
}

impl Pool {
    /// Build a pool over pre-positioned entities, all starting in `initial`.
    /// Visibility mirrors the slot state.
    pub fn new(entities: Vec<Entity>, initial: SlotState) -> Self {
        let slots = entities
            .into_iter()
            .map(|mut entity| {
                entity.visible = initial == SlotState::Alive;
                Slot {
                    entity,
                    state: initial,
                }
            })
            .collect();
        Self { slots, cursor: 0 }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[inline]
    pub fn get(&self, idx: usize) -> &Slot {
        &self.slots[idx]
    }

    #[inline]
    pub fn get_mut(&mut self, idx: usize) -> &mut Slot {
        &mut self.slots[idx]
    }

    /// Current ring cursor (the slot the last claim attempt targeted)
    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Advance the ring cursor and claim the slot there if it is free.
    ///
    /// The cursor moves on *every* attempt, so one still-in-flight slot
    /// never stalls the ring. Returns the claimed entity for the caller to
    /// arm, or None when the request is dropped - there is no queueing.
    pub fn claim_next(&mut self) -> Option<&mut Entity> {
        self.cursor = (self.cursor + 1) % self.slots.len();
        let slot = &mut self.slots[self.cursor];
        match slot.state {
            SlotState::Alive => None,
            SlotState::Free => {
                slot.state = SlotState::Alive;
                slot.entity.visible = true;
                Some(&mut slot.entity)
            }
        }
    }

    /// Tag a slot free and hide its entity (expired shot, destroyed rock)
    pub fn kill(&mut self, idx: usize) {
        let slot = &mut self.slots[idx];
        slot.state = SlotState::Free;
        slot.entity.visible = false;
    }

    /// Reveal every free slot again - the shared batch-respawn path
    pub fn revive_all(&mut self) {
        for slot in &mut self.slots {
            if slot.state == SlotState::Free {
                slot.state = SlotState::Alive;
                slot.entity.visible = true;
            }
        }
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn slots_mut(&mut self) -> &mut [Slot] {
        &mut self.slots
    }

    /// Live entities with their slot indices
    pub fn iter_alive(&self) -> impl Iterator<Item = (usize, &Entity)> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.state == SlotState::Alive)
            .map(|(idx, slot)| (idx, &slot.entity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn pool_of(capacity: usize, initial: SlotState) -> Pool {
        let entities = (0..capacity)
            .map(|_| Entity::new(Vec2::ZERO, 3.0, 1, 3.0))
            .collect();
        Pool::new(entities, initial)
    }

    #[test]
    fn test_claim_walks_the_ring() {
        let mut pool = pool_of(3, SlotState::Free);
        assert!(pool.claim_next().is_some());
        assert_eq!(pool.cursor(), 1);
        assert!(pool.claim_next().is_some());
        assert_eq!(pool.cursor(), 2);
        assert!(pool.claim_next().is_some());
        assert_eq!(pool.cursor(), 0);
    }

    #[test]
    fn test_busy_slot_drops_request_without_stalling() {
        let mut pool = pool_of(3, SlotState::Free);
        // Slot 0 is occupied from an earlier volley
        pool.get_mut(0).state = SlotState::Alive;

        assert!(pool.claim_next().is_some()); // slot 1
        assert!(pool.claim_next().is_some()); // slot 2
        pool.kill(1); // slot 1's shot expires

        // Third attempt lands on the busy slot 0 and is dropped
        assert!(pool.claim_next().is_none());
        assert_eq!(pool.cursor(), 0);

        // Fourth attempt targets slot 1 and succeeds, independent of slot 0
        assert!(pool.claim_next().is_some());
        assert_eq!(pool.cursor(), 1);
    }

    #[test]
    fn test_claim_shows_the_entity() {
        let mut pool = pool_of(2, SlotState::Free);
        assert!(!pool.get(1).entity.visible);
        pool.claim_next();
        assert!(pool.get(1).entity.visible);
        assert_eq!(pool.get(1).state, SlotState::Alive);
    }

    #[test]
    fn test_kill_hides_and_frees() {
        let mut pool = pool_of(2, SlotState::Alive);
        pool.kill(0);
        assert_eq!(pool.get(0).state, SlotState::Free);
        assert!(!pool.get(0).entity.visible);
        assert_eq!(pool.iter_alive().count(), 1);
    }

    #[test]
    fn test_revive_all_is_batch() {
        let mut pool = pool_of(4, SlotState::Alive);
        pool.kill(1);
        pool.kill(3);
        pool.revive_all();
        assert_eq!(pool.iter_alive().count(), 4);
        assert!(pool.get(1).entity.visible);
        assert!(pool.get(3).entity.visible);
    }
}
