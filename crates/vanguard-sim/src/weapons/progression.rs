//! Per-weapon unlock and level state.
//!
//! `Basic` starts unlocked at level 1 and is never offered. Every other
//! weapon starts locked at level 0 and sits in the offerable list until it
//! reaches the max level.

use std::collections::BTreeMap;

use rand::seq::SliceRandom;
use rand::Rng;

use vanguard_core::enums::WeaponType;
use vanguard_core::state::WeaponView;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WeaponState {
    pub unlocked: bool,
    pub level: u8,
}

/// Result of one grant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grant {
    pub weapon: WeaponType,
    /// Level after the grant.
    pub level: u8,
    /// True if the grant unlocked the weapon rather than upgrading it.
    pub unlocked: bool,
}

#[derive(Debug, Clone)]
pub struct WeaponProgression {
    states: BTreeMap<WeaponType, WeaponState>,
    offerable: Vec<WeaponType>,
    max_level: u8,
}

impl WeaponProgression {
    pub fn new(max_level: u8) -> Self {
        let mut progression = Self {
            states: BTreeMap::new(),
            offerable: Vec::new(),
            max_level: max_level.max(1),
        };
        progression.reset();
        progression
    }

    pub fn reset(&mut self) {
        self.states = WeaponType::ALL
            .iter()
            .map(|w| (*w, WeaponState::default()))
            .collect();
        self.states.insert(
            WeaponType::Basic,
            WeaponState {
                unlocked: true,
                level: 1,
            },
        );
        self.offerable = WeaponType::GRANTABLE.to_vec();
    }

    pub fn max_level(&self) -> u8 {
        self.max_level
    }

    pub fn is_unlocked(&self, weapon: WeaponType) -> bool {
        self.state(weapon).unlocked
    }

    pub fn level(&self, weapon: WeaponType) -> u8 {
        self.state(weapon).level
    }

    pub fn state(&self, weapon: WeaponType) -> WeaponState {
        self.states.get(&weapon).copied().unwrap_or_default()
    }

    /// Weapons still tracked as offerable, in roster order.
    pub fn offerable(&self) -> &[WeaponType] {
        &self.offerable
    }

    /// Unlock at level 1. Returns the new level, or None if already unlocked.
    pub fn unlock(&mut self, weapon: WeaponType) -> Option<u8> {
        let state = self.states.entry(weapon).or_default();
        if state.unlocked {
            return None;
        }
        state.unlocked = true;
        state.level = 1;
        self.retire_if_maxed(weapon);
        Some(1)
    }

    /// Raise the level by one. Returns the new level, or None if the weapon
    /// is locked or maxed.
    pub fn upgrade(&mut self, weapon: WeaponType) -> Option<u8> {
        let max = self.max_level;
        let state = self.states.entry(weapon).or_default();
        if !state.unlocked || state.level >= max {
            return None;
        }
        state.level += 1;
        let level = state.level;
        self.retire_if_maxed(weapon);
        Some(level)
    }

    /// Offerable weapons that are below max or still locked.
    pub fn eligible(&self) -> Vec<WeaponType> {
        self.offerable
            .iter()
            .copied()
            .filter(|w| {
                let s = self.state(*w);
                s.level < self.max_level || !s.unlocked
            })
            .collect()
    }

    /// Pick an eligible weapon uniformly and unlock or upgrade it.
    pub fn grant<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Grant> {
        let weapon = *self.eligible().choose(rng)?;
        if self.is_unlocked(weapon) {
            let level = self.upgrade(weapon)?;
            Some(Grant {
                weapon,
                level,
                unlocked: false,
            })
        } else {
            let level = self.unlock(weapon)?;
            Some(Grant {
                weapon,
                level,
                unlocked: true,
            })
        }
    }

    pub fn views(&self) -> Vec<WeaponView> {
        self.states
            .iter()
            .map(|(weapon, s)| WeaponView {
                weapon: *weapon,
                unlocked: s.unlocked,
                level: s.level,
            })
            .collect()
    }

    fn retire_if_maxed(&mut self, weapon: WeaponType) {
        if self.state(weapon).level >= self.max_level {
            self.offerable.retain(|w| *w != weapon);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_basic_starts_unlocked() {
        let p = WeaponProgression::new(3);
        assert!(p.is_unlocked(WeaponType::Basic));
        assert_eq!(p.level(WeaponType::Basic), 1);
        assert!(!p.offerable().contains(&WeaponType::Basic));
        for w in WeaponType::GRANTABLE {
            assert!(!p.is_unlocked(w));
            assert_eq!(p.level(w), 0);
        }
    }

    #[test]
    fn test_unlock_and_upgrade_rules() {
        let mut p = WeaponProgression::new(3);
        assert_eq!(p.upgrade(WeaponType::Twin), None, "locked weapons do not upgrade");
        assert_eq!(p.unlock(WeaponType::Twin), Some(1));
        assert_eq!(p.unlock(WeaponType::Twin), None);
        assert_eq!(p.upgrade(WeaponType::Twin), Some(2));
        assert_eq!(p.upgrade(WeaponType::Twin), Some(3));
        assert_eq!(p.upgrade(WeaponType::Twin), None);
        assert_eq!(p.level(WeaponType::Twin), 3);
        assert!(!p.offerable().contains(&WeaponType::Twin));
    }

    #[test]
    fn test_eligibility_excludes_only_unlocked_and_maxed() {
        let mut p = WeaponProgression::new(3);
        // A = Twin unlocked at 3, B = Double locked, C = Missile unlocked at 1
        p.unlock(WeaponType::Twin);
        p.upgrade(WeaponType::Twin);
        p.upgrade(WeaponType::Twin);
        p.unlock(WeaponType::Missile);

        let eligible = p.eligible();
        assert!(!eligible.contains(&WeaponType::Twin));
        assert!(eligible.contains(&WeaponType::Double));
        assert!(eligible.contains(&WeaponType::Missile));
    }

    #[test]
    fn test_grants_exhaust_the_roster() {
        let mut p = WeaponProgression::new(3);
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut grants = 0;
        while let Some(grant) = p.grant(&mut rng) {
            assert!(grant.level >= 1 && grant.level <= 3);
            grants += 1;
            assert!(grants <= 15, "more grants than levels available");
        }
        // Five weapons, three levels each.
        assert_eq!(grants, 15);
        assert!(p.eligible().is_empty());
        assert!(p.offerable().is_empty());
    }

    #[test]
    fn test_same_seed_same_grants() {
        let run = |seed| {
            let mut p = WeaponProgression::new(3);
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            (0..6).filter_map(|_| p.grant(&mut rng)).collect::<Vec<_>>()
        };
        assert_eq!(run(11), run(11));
    }

    #[test]
    fn test_max_level_one_retires_on_unlock() {
        let mut p = WeaponProgression::new(1);
        p.unlock(WeaponType::Shield);
        assert!(!p.offerable().contains(&WeaponType::Shield));
        assert!(!p.eligible().contains(&WeaponType::Shield));
    }
}
