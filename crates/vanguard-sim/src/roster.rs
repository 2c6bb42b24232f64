//! The director's live roster of spawned, not yet destroyed enemies.

use hecs::{Entity, World};

use vanguard_core::components::PoolMember;

#[derive(Debug, Clone, Default)]
pub struct ActiveRoster {
    members: Vec<Entity>,
}

impl ActiveRoster {
    /// Add a freshly spawned enemy. Adding a member twice is a no-op.
    pub fn add(&mut self, entity: Entity) {
        if !self.members.contains(&entity) {
            self.members.push(entity);
        }
    }

    /// Returns false if the entity was not on the roster.
    pub fn remove(&mut self, entity: Entity) -> bool {
        match self.members.iter().position(|e| *e == entity) {
            Some(idx) => {
                self.members.swap_remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, entity: Entity) -> bool {
        self.members.contains(&entity)
    }

    /// Drop entries whose entity is gone or back in its pool.
    /// Returns how many were dropped.
    pub fn sweep(&mut self, world: &World) -> usize {
        let before = self.members.len();
        self.members.retain(|e| {
            world
                .get::<&PoolMember>(*e)
                .map(|m| m.active)
                .unwrap_or(false)
        });
        before - self.members.len()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Entity> + '_ {
        self.members.iter().copied()
    }

    pub fn clear(&mut self) {
        self.members.clear();
    }
}
