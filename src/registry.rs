//! Generation-checked arena of edit buffers.
//!
//! Hosts that cannot hold Rust references (FFI, scripting bridges) address
//! buffers through a [`BufferId`]: a slot index plus the slot's generation.
//! Destroying a buffer bumps its slot's generation, so an id that outlives its
//! buffer is rejected instead of reaching whatever reuses the slot.
//!
//! Renderers that want to read the text without copying take a
//! [`StorageRef`], which also records the content revision. The reference is
//! only honoured while the buffer is alive and unmodified; after any edit the
//! host must fetch a new one.
//!
//! # Invariants
//!
//! - Generations only grow; a destroyed id never validates again
//! - Freed slots are reused LIFO from the free list
//! - A slot whose generation is exhausted is retired, never reused
//! - A `StorageRef` resolves only if both generation and revision match

use crate::error::{Error, Result};
use crate::event::{LogLevel, emit_event, emit_log};
use crate::handle::BufferState;
use crate::text::{EditBuffer, LineStore};
use crate::unicode::WidthConfig;

/// Id of a buffer in a [`BufferRegistry`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BufferId {
    index: u32,
    generation: u32,
}

impl BufferId {
    #[must_use]
    pub const fn index(self) -> u32 {
        self.index
    }

    #[must_use]
    pub const fn generation(self) -> u32 {
        self.generation
    }

    /// Pack into a single integer for hosts that pass ids as numbers.
    #[must_use]
    pub const fn to_bits(self) -> u64 {
        ((self.generation as u64) << 32) | self.index as u64
    }

    /// Inverse of [`to_bits`](Self::to_bits).
    #[must_use]
    pub const fn from_bits(bits: u64) -> Self {
        Self {
            index: bits as u32,
            generation: (bits >> 32) as u32,
        }
    }
}

/// Read-only reference to a buffer's line storage at one revision.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StorageRef {
    id: BufferId,
    revision: u64,
}

impl StorageRef {
    #[must_use]
    pub const fn buffer(self) -> BufferId {
        self.id
    }

    #[must_use]
    pub const fn revision(self) -> u64 {
        self.revision
    }
}

#[derive(Debug)]
struct Slot {
    generation: u32,
    state: BufferState,
}

/// Arena of edit buffers addressed by generation-checked ids.
#[derive(Debug, Default)]
pub struct BufferRegistry {
    slots: Vec<Slot>,
    free_list: Vec<u32>,
}

impl BufferRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a buffer and return its id.
    pub fn create(&mut self, config: WidthConfig) -> BufferId {
        let id = if let Some(index) = self.free_list.pop() {
            let slot = &mut self.slots[index as usize];
            slot.state = BufferState::live(config);
            BufferId {
                index,
                generation: slot.generation,
            }
        } else {
            let index = self.slots.len() as u32;
            self.slots.push(Slot {
                generation: 0,
                state: BufferState::live(config),
            });
            BufferId {
                index,
                generation: 0,
            }
        };
        emit_event(
            "edit_buffer.created",
            &format!("slot={} generation={}", id.index, id.generation),
        );
        id
    }

    /// Destroy a buffer. Its id, and every storage reference taken from it,
    /// is rejected from now on.
    pub fn destroy(&mut self, id: BufferId) -> Result<()> {
        let slot = self.slot_mut(id)?;
        slot.state.destroy()?;
        if let Some(next) = slot.generation.checked_add(1) {
            slot.generation = next;
            self.free_list.push(id.index);
            emit_log(
                LogLevel::Debug,
                &format!("edit buffer slot {} released", id.index),
            );
        } else {
            // Keeping the generation means `id` now hits a destroyed state
            emit_log(
                LogLevel::Warn,
                &format!("edit buffer slot {} retired: generations exhausted", id.index),
            );
        }
        emit_event(
            "edit_buffer.destroyed",
            &format!("slot={} generation={}", id.index, id.generation),
        );
        Ok(())
    }

    /// Borrow a live buffer.
    pub fn get(&self, id: BufferId) -> Result<&EditBuffer> {
        self.slot(id)?.state.get()
    }

    /// Mutably borrow a live buffer.
    pub fn get_mut(&mut self, id: BufferId) -> Result<&mut EditBuffer> {
        self.slot_mut(id)?.state.get_mut()
    }

    /// Whether `id` names a live buffer.
    #[must_use]
    pub fn contains(&self, id: BufferId) -> bool {
        self.get(id).is_ok()
    }

    /// Number of live buffers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.state.is_live()).count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Take a read-only reference to a buffer's storage at its current revision.
    pub fn storage_ref(&self, id: BufferId) -> Result<StorageRef> {
        let buffer = self.get(id)?;
        Ok(StorageRef {
            id,
            revision: buffer.revision(),
        })
    }

    /// Resolve a storage reference taken earlier.
    pub fn resolve(&self, storage: StorageRef) -> Result<&LineStore> {
        let store = self.get(storage.id)?.store();
        if store.revision() != storage.revision {
            return Err(Error::StaleReference {
                expected: storage.revision,
                actual: store.revision(),
            });
        }
        Ok(store)
    }

    fn slot(&self, id: BufferId) -> Result<&Slot> {
        let slot = self
            .slots
            .get(id.index as usize)
            .ok_or(Error::UnknownBuffer { index: id.index })?;
        if slot.generation != id.generation {
            return Err(Error::Destroyed);
        }
        Ok(slot)
    }

    fn slot_mut(&mut self, id: BufferId) -> Result<&mut Slot> {
        let slot = self
            .slots
            .get_mut(id.index as usize)
            .ok_or(Error::UnknownBuffer { index: id.index })?;
        if slot.generation != id.generation {
            return Err(Error::Destroyed);
        }
        Ok(slot)
    }
}
