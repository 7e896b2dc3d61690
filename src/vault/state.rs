use serde::{Deserialize, Serialize};
use super::{prelude::*, color::*};

///
/// What the vault currently shows: for each solution slot either nothing, or the hint most
/// recently applied to it.
///
/// A slot holding an all green hint is solved, and solved is permanent: nothing applied afterwards
/// replaces it. Completion is always derived from the stored hints, never tracked separately.
///
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaultState {
    slots: [Option<Hint>; NUM_SLOTS],
}

impl VaultState {
    ///
    /// Stores the hint for the slot unless the slot is already solved. Returns whether the stored
    /// hint changed.
    ///
    pub fn apply(&mut self, slot: usize, hint: Hint) -> bool {
        let stored = match self.slots.get_mut(slot) {
            Some(stored) => stored,
            None => {
                log::warn!("ignoring hint for slot {} (only {} slots)", slot, NUM_SLOTS);
                return false;
            }
        };

        match stored {
            Some(existing) if existing.is_solved() => false,
            Some(existing) if *existing == hint => false,
            _ => {
                *stored = Some(hint);
                true
            }
        }
    }

    /// Applies one hint per slot, in slot order. Returns how many slots changed.
    pub fn apply_all(&mut self, hints: &[Hint; NUM_SLOTS]) -> usize {
        hints.iter()
            .enumerate()
            .filter(|(slot, hint)| self.apply(*slot, **hint))
            .count()
    }

    pub fn get(&self, slot: usize) -> Option<&Hint> {
        self.slots.get(slot)?.as_ref()
    }

    pub fn is_solved(&self, slot: usize) -> bool {
        self.get(slot).map(Hint::is_solved).unwrap_or(false)
    }

    pub fn is_game_complete(&self) -> bool {
        (0..NUM_SLOTS).all(|slot| self.is_solved(slot))
    }

    pub fn num_solved(&self) -> usize {
        (0..NUM_SLOTS).filter(|slot| self.is_solved(*slot)).count()
    }

    /// Whether any slot shows a hint which isn't a solution
    pub fn has_unsolved_hints(&self) -> bool {
        self.slots.iter().flatten().any(|h| !h.is_solved())
    }

    /// Empties every slot which isn't solved. Returns how many slots were emptied.
    pub fn clear_unsolved(&mut self) -> usize {
        let mut cleared = 0;
        for stored in self.slots.iter_mut() {
            if matches!(stored, Some(hint) if !hint.is_solved()) {
                *stored = None;
                cleared += 1;
            }
        }
        cleared
    }

    pub fn iter(&self) -> impl Iterator<Item = Option<&Hint>> {
        self.slots.iter().map(|s| s.as_ref())
    }
}
