//! Tag-keyed entity pool.
//!
//! Every pooled instance is a hecs entity carrying a [`PoolMember`]. The pool
//! never despawns anything: `release` flips the member inactive and queues the
//! entity for the next `acquire` under the same tag, and `acquire` constructs
//! a new entity only when that queue is empty.

use std::collections::{HashMap, VecDeque};

use glam::Vec2;
use hecs::{Component, Entity, World};
use tracing::{debug, warn};

use vanguard_behavior::EnemyBehavior;
use vanguard_core::components::{Enemy, PoolMember, Projectile};
use vanguard_core::error::PoolError;
use vanguard_core::pooled::PooledEntity;
use vanguard_core::state::PoolView;
use vanguard_core::types::Transform;

/// Blueprint registered under a pool tag.
pub trait Archetype: Send + Sync {
    /// Spawn a fresh entity with all of its components. The pool adds the
    /// [`PoolMember`] and [`Transform`] afterwards; `on_spawn` is not called.
    fn construct(&self, world: &mut World) -> Entity;

    /// Reset per-life state. Runs once per acquire, after the transform.
    fn on_spawn(&self, world: &mut World, entity: Entity, position: Vec2) {
        reset::<Enemy>(world, entity, position);
        reset::<Projectile>(world, entity, position);
        reset::<Box<dyn EnemyBehavior>>(world, entity, position);
    }
}

fn reset<T: PooledEntity + Component>(world: &mut World, entity: Entity, position: Vec2) {
    if let Ok(mut state) = world.get::<&mut T>(entity) {
        state.on_spawn(position);
    }
}

/// Inactive queue plus construction count for one tag.
#[derive(Default)]
struct PoolSlot {
    inactive: VecDeque<Entity>,
    constructed: u32,
}

#[derive(Default)]
pub struct EntityPool {
    archetypes: HashMap<String, Box<dyn Archetype>>,
    slots: HashMap<String, PoolSlot>,
}

impl EntityPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an archetype. Re-registering a tag replaces its blueprint.
    pub fn register(&mut self, tag: impl Into<String>, archetype: impl Archetype + 'static) {
        let tag = tag.into();
        self.slots.entry(tag.clone()).or_default();
        self.archetypes.insert(tag, Box::new(archetype));
    }

    pub fn is_registered(&self, tag: &str) -> bool {
        self.archetypes.contains_key(tag)
    }

    /// Build `count` inactive instances ahead of demand.
    pub fn prewarm(&mut self, world: &mut World, tag: &str, count: usize) -> Result<(), PoolError> {
        for _ in 0..count {
            let entity = self.construct(world, tag)?;
            if let Some(slot) = self.slots.get_mut(tag) {
                slot.inactive.push_back(entity);
            }
        }
        Ok(())
    }

    /// Hand out an inactive instance for `tag`, constructing one if none is
    /// queued. The transform is applied and `on_spawn` has run before the
    /// entity is marked active.
    pub fn acquire(&mut self, world: &mut World, tag: &str, transform: Transform) -> Result<Entity, PoolError> {
        if !self.is_registered(tag) {
            return Err(PoolError::UnknownTag(tag.to_string()));
        }

        let reused = self.slots.get_mut(tag).and_then(|slot| {
            // Entities can vanish if a caller clears the world behind our back.
            std::iter::from_fn(|| slot.inactive.pop_front()).find(|e| world.contains(*e))
        });
        let entity = match reused {
            Some(entity) => entity,
            None => self.construct(world, tag)?,
        };

        if let Ok(mut t) = world.get::<&mut Transform>(entity) {
            *t = transform;
        }
        if let Some(archetype) = self.archetypes.get(tag) {
            archetype.on_spawn(world, entity, transform.position);
        }
        if let Ok(mut member) = world.get::<&mut PoolMember>(entity) {
            member.active = true;
        }
        Ok(entity)
    }

    /// Return an active instance to its queue. Releasing an inactive
    /// instance is logged and refused, so nothing is ever queued twice.
    pub fn release(&mut self, world: &mut World, tag: &str, entity: Entity) -> Result<(), PoolError> {
        let bits = entity.to_bits().get();
        let result = match world.get::<&mut PoolMember>(entity) {
            Err(_) => Err(PoolError::NotPooled { entity: bits }),
            Ok(member) if member.tag != tag => Err(PoolError::TagMismatch {
                requested: tag.to_string(),
                actual: member.tag.clone(),
                entity: bits,
            }),
            Ok(member) if !member.active => Err(PoolError::AlreadyInactive {
                tag: tag.to_string(),
                entity: bits,
            }),
            Ok(mut member) => {
                member.active = false;
                Ok(())
            }
        };

        match result {
            Ok(()) => {
                if let Some(slot) = self.slots.get_mut(tag) {
                    slot.inactive.push_back(entity);
                }
                Ok(())
            }
            Err(err) => {
                warn!(%err, "pool release refused");
                Err(err)
            }
        }
    }

    /// Release using the tag stored on the entity itself.
    pub fn release_member(&mut self, world: &mut World, entity: Entity) -> Result<(), PoolError> {
        let tag = match world.get::<&PoolMember>(entity) {
            Ok(member) => member.tag.clone(),
            Err(_) => {
                let err = PoolError::NotPooled {
                    entity: entity.to_bits().get(),
                };
                warn!(%err, "pool release refused");
                return Err(err);
            }
        };
        self.release(world, &tag, entity)
    }

    pub fn inactive_count(&self, tag: &str) -> usize {
        self.slots.get(tag).map(|s| s.inactive.len()).unwrap_or(0)
    }

    pub fn constructed_count(&self, tag: &str) -> u32 {
        self.slots.get(tag).map(|s| s.constructed).unwrap_or(0)
    }

    pub fn stats(&self) -> PoolView {
        PoolView {
            constructed: self.slots.values().map(|s| s.constructed).sum(),
            inactive: self.slots.values().map(|s| s.inactive.len() as u32).sum(),
        }
    }

    /// Forget every instance while keeping the registered archetypes.
    /// Pair with clearing the world.
    pub fn clear(&mut self) {
        for slot in self.slots.values_mut() {
            *slot = PoolSlot::default();
        }
    }

    fn construct(&mut self, world: &mut World, tag: &str) -> Result<Entity, PoolError> {
        let archetype = self
            .archetypes
            .get(tag)
            .ok_or_else(|| PoolError::UnknownTag(tag.to_string()))?;
        let entity = archetype.construct(world);
        let _ = world.insert(
            entity,
            (
                PoolMember {
                    tag: tag.to_string(),
                    active: false,
                },
                Transform::default(),
            ),
        );
        let slot = self.slots.entry(tag.to_string()).or_default();
        slot.constructed += 1;
        debug!(tag, constructed = slot.constructed, "pool grew");
        Ok(entity)
    }
}
