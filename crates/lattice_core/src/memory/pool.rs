//! # Slot Pool
//!
//! Fixed-capacity slot arena partitioned into one free list and N
//! caller-defined used lists ("categories").
//!
//! Membership is tracked with intrusive index links threaded through
//! the slots themselves: every list is circular through a sentinel
//! node stored in the same arena, so moving a slot between lists is a
//! pure O(1) splice and releasing never needs to know which category a
//! slot is on.
//!
//! ## Free policy
//!
//! The free list is LIFO: `allocate` pops the free head and `release`
//! pushes it, so the most recently freed slot is reused first. This is
//! part of the public contract.
//!
//! ## Handles
//!
//! Every allocation returns a [`SlotHandle`] carrying the slot index
//! and the slot's generation at allocation time. Releasing bumps the
//! generation, so a stale handle (double free, use-after-release) is
//! rejected instead of corrupting the lists.

use crate::error::{CoreError, CoreResult};

/// Handle to an allocated slot in a pool.
///
/// The handle is split into two parts:
/// - Lower 32 bits: index into the slot arena
/// - Upper 32 bits: generation counter for detecting stale handles
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct SlotHandle(u64);

impl SlotHandle {
    /// Creates a handle from index and generation.
    #[inline]
    #[must_use]
    const fn new(index: u32, generation: u32) -> Self {
        Self(((generation as u64) << 32) | (index as u64))
    }

    /// Returns the index portion of the handle.
    #[inline]
    #[must_use]
    pub const fn index(self) -> u32 {
        self.0 as u32
    }

    /// Returns the generation portion of the handle.
    #[inline]
    #[must_use]
    pub const fn generation(self) -> u32 {
        (self.0 >> 32) as u32
    }

    /// Null/invalid handle.
    pub const NULL: Self = Self(u64::MAX);

    /// Checks if this handle is null/invalid.
    #[inline]
    #[must_use]
    pub const fn is_null(self) -> bool {
        self.0 == u64::MAX
    }
}

impl Default for SlotHandle {
    fn default() -> Self {
        Self::NULL
    }
}

/// One arena cell: the stored value plus its intrusive list links.
///
/// Liveness is `value.is_some()`. Sentinel cells never hold a value.
struct Slot<T> {
    value: Option<T>,
    generation: u32,
    prev: u32,
    next: u32,
}

/// A fixed-capacity slot pool with categorised used lists.
///
/// At any instant every slot is a member of exactly one list: the free
/// list or one used category. `free_count() + live_count()` always
/// equals `capacity()`.
///
/// # Thread Safety
///
/// This pool is NOT thread-safe. Use one pool per thread or wrap in a
/// mutex.
///
/// # Example
///
/// ```rust,ignore
/// let mut pool: SlotPool<Particle> = SlotPool::new(10_000, 2)?;
///
/// // O(1), no heap allocation
/// let handle = pool.allocate_with(0, Particle::default())?;
///
/// // O(1), no heap deallocation; the value comes back out
/// let particle = pool.release(handle)?;
/// ```
pub struct SlotPool<T> {
    /// The arena. Indices `[0, capacity)` are real slots; index
    /// `capacity` is the free-list sentinel; indices `capacity + 1 ..`
    /// are the category sentinels.
    slots: Box<[Slot<T>]>,
    capacity: usize,
    category_count: usize,
    free_count: usize,
}

impl<T> SlotPool<T> {
    /// Creates a pool with `capacity` slots and `category_count` used
    /// lists. All slots start on the free list.
    ///
    /// # Errors
    ///
    /// `InvalidCapacity` if either count is zero or the arena would
    /// not fit in the u32 index space.
    pub fn new(capacity: usize, category_count: usize) -> CoreResult<Self> {
        if capacity == 0 {
            return Err(CoreError::InvalidCapacity(capacity));
        }
        if category_count == 0 {
            return Err(CoreError::InvalidCapacity(category_count));
        }
        let arena_len = capacity + 1 + category_count;
        if arena_len >= u32::MAX as usize {
            return Err(CoreError::InvalidCapacity(capacity));
        }

        let free_sentinel = capacity as u32;
        let mut slots: Vec<Slot<T>> = Vec::with_capacity(arena_len);

        // Real slots, chained into one run that the free sentinel closes.
        for i in 0..capacity as u32 {
            slots.push(Slot {
                value: None,
                generation: 0,
                prev: if i == 0 { free_sentinel } else { i - 1 },
                next: if i as usize == capacity - 1 { free_sentinel } else { i + 1 },
            });
        }

        // Free-list sentinel closes the circle over all real slots.
        slots.push(Slot {
            value: None,
            generation: 0,
            prev: capacity as u32 - 1,
            next: 0,
        });

        // Category sentinels start as empty circles.
        for c in 0..category_count {
            let idx = (capacity + 1 + c) as u32;
            slots.push(Slot {
                value: None,
                generation: 0,
                prev: idx,
                next: idx,
            });
        }

        Ok(Self {
            slots: slots.into_boxed_slice(),
            capacity,
            category_count,
            free_count: capacity,
        })
    }

    /// Returns the total slot capacity.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of used categories.
    #[inline]
    #[must_use]
    pub const fn category_count(&self) -> usize {
        self.category_count
    }

    /// Returns the number of free slots.
    #[inline]
    #[must_use]
    pub const fn free_count(&self) -> usize {
        self.free_count
    }

    /// Returns the number of live slots across all categories.
    #[inline]
    #[must_use]
    pub const fn live_count(&self) -> usize {
        self.capacity - self.free_count
    }

    /// True when no slot is free.
    #[inline]
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.free_count == 0
    }

    #[inline]
    const fn free_sentinel(&self) -> u32 {
        self.capacity as u32
    }

    #[inline]
    fn category_sentinel(&self, category: usize) -> CoreResult<u32> {
        if category >= self.category_count {
            return Err(CoreError::IndexOutOfRange {
                index: category,
                len: self.category_count,
            });
        }
        Ok((self.capacity + 1 + category) as u32)
    }

    /// Splices `idx` out of whichever list currently holds it.
    ///
    /// `idx`'s own links are left dangling; callers relink immediately.
    fn unlink(&mut self, idx: u32) {
        let prev = self.slots[idx as usize].prev;
        let next = self.slots[idx as usize].next;
        self.slots[prev as usize].next = next;
        self.slots[next as usize].prev = prev;
    }

    /// Links `idx` directly before `pos` (tail append when `pos` is a
    /// sentinel).
    fn link_before(&mut self, pos: u32, idx: u32) {
        let prev = self.slots[pos as usize].prev;
        self.slots[idx as usize].prev = prev;
        self.slots[idx as usize].next = pos;
        self.slots[prev as usize].next = idx;
        self.slots[pos as usize].prev = idx;
    }

    /// Links `idx` directly after `pos` (head push when `pos` is a
    /// sentinel).
    fn link_after(&mut self, pos: u32, idx: u32) {
        let next = self.slots[pos as usize].next;
        self.slots[idx as usize].prev = pos;
        self.slots[idx as usize].next = next;
        self.slots[next as usize].prev = idx;
        self.slots[pos as usize].next = idx;
    }

    /// Allocates a slot in `category`, default-constructing the value.
    ///
    /// Pops the most recently freed slot (LIFO free policy) and appends
    /// it to the tail of the category list, so iteration order reflects
    /// allocation order. Existing handles are never invalidated.
    ///
    /// # Errors
    ///
    /// `PoolExhausted` when no slot is free; `IndexOutOfRange` for a
    /// bad category.
    pub fn allocate(&mut self, category: usize) -> CoreResult<SlotHandle>
    where
        T: Default,
    {
        self.allocate_with(category, T::default())
    }

    /// Allocates a slot in `category` holding `value`.
    ///
    /// Same policy and errors as [`SlotPool::allocate`].
    pub fn allocate_with(&mut self, category: usize, value: T) -> CoreResult<SlotHandle> {
        let tail = self.category_sentinel(category)?;
        let free = self.free_sentinel();
        let idx = self.slots[free as usize].next;
        if idx == free {
            return Err(CoreError::PoolExhausted {
                capacity: self.capacity,
            });
        }

        self.unlink(idx);
        self.link_before(tail, idx);

        let slot = &mut self.slots[idx as usize];
        slot.value = Some(value);
        self.free_count -= 1;
        Ok(SlotHandle::new(idx, slot.generation))
    }

    /// Releases an allocated slot and returns its value.
    ///
    /// The slot is unlinked from its used list purely through its own
    /// links (no category needed), pushed onto the free-list head, and
    /// its generation is bumped so the released handle goes stale.
    ///
    /// # Errors
    ///
    /// `DoubleFree` if the handle's slot is not live at the handle's
    /// generation. The pool is untouched in that case.
    pub fn release(&mut self, handle: SlotHandle) -> CoreResult<T> {
        let stale = CoreError::DoubleFree {
            index: handle.index(),
            generation: handle.generation(),
        };

        let idx = handle.index() as usize;
        if idx >= self.capacity || self.slots[idx].generation != handle.generation() {
            return Err(stale);
        }
        let value = self.slots[idx].value.take().ok_or(stale)?;

        let idx = handle.index();
        self.unlink(idx);
        let free = self.free_sentinel();
        self.link_after(free, idx);

        let slot = &mut self.slots[idx as usize];
        slot.generation = slot.generation.wrapping_add(1);
        self.free_count += 1;
        Ok(value)
    }

    /// Gets a reference to an allocated value, or None for a stale
    /// handle.
    #[inline]
    #[must_use]
    pub fn get(&self, handle: SlotHandle) -> Option<&T> {
        let slot = self.slots.get(handle.index() as usize)?;
        if slot.generation != handle.generation() {
            return None;
        }
        slot.value.as_ref()
    }

    /// Gets a mutable reference to an allocated value, or None for a
    /// stale handle.
    #[inline]
    pub fn get_mut(&mut self, handle: SlotHandle) -> Option<&mut T> {
        let slot = self.slots.get_mut(handle.index() as usize)?;
        if slot.generation != handle.generation() {
            return None;
        }
        slot.value.as_mut()
    }

    /// Iterates over the live members of `category` in allocation
    /// order (head to tail). Lazy, finite, restartable.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` for a bad category.
    pub fn iter(&self, category: usize) -> CoreResult<SlotIter<'_, T>> {
        let sentinel = self.category_sentinel(category)?;
        Ok(SlotIter {
            pool: self,
            cursor: self.slots[sentinel as usize].next,
            sentinel,
        })
    }

    /// Delete-safe traversal of `category`: the current element may be
    /// removed and the walk continues with its successor.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` for a bad category.
    pub fn cursor_mut(&mut self, category: usize) -> CoreResult<CursorMut<'_, T>> {
        let sentinel = self.category_sentinel(category)?;
        Ok(CursorMut {
            pool: self,
            at: sentinel,
            sentinel,
        })
    }
}

/// Iterator over the live members of one category.
pub struct SlotIter<'a, T> {
    pool: &'a SlotPool<T>,
    cursor: u32,
    sentinel: u32,
}

impl<'a, T> Iterator for SlotIter<'a, T> {
    type Item = (SlotHandle, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor == self.sentinel {
            return None;
        }
        let idx = self.cursor;
        let slot = &self.pool.slots[idx as usize];
        self.cursor = slot.next;
        slot.value
            .as_ref()
            .map(|v| (SlotHandle::new(idx, slot.generation), v))
    }
}

/// Mutable cursor over one category with delete-safe traversal.
///
/// The cursor starts before the first element; [`CursorMut::advance`]
/// steps to the next element and returns its handle, or None past the
/// tail (after which another `advance` restarts from the head).
pub struct CursorMut<'a, T> {
    pool: &'a mut SlotPool<T>,
    /// Current position: a live slot index, or the sentinel when the
    /// cursor is before the first / past the last element.
    at: u32,
    sentinel: u32,
}

impl<T> CursorMut<'_, T> {
    /// Steps to the next element, returning its handle, or None past
    /// the tail.
    pub fn advance(&mut self) -> Option<SlotHandle> {
        self.at = self.pool.slots[self.at as usize].next;
        self.handle()
    }

    /// Handle of the current element, or None when the cursor is not
    /// on an element.
    #[must_use]
    pub fn handle(&self) -> Option<SlotHandle> {
        if self.at == self.sentinel {
            return None;
        }
        let slot = &self.pool.slots[self.at as usize];
        Some(SlotHandle::new(self.at, slot.generation))
    }

    /// Reference to the current element's value.
    #[must_use]
    pub fn get(&self) -> Option<&T> {
        if self.at == self.sentinel {
            return None;
        }
        self.pool.slots[self.at as usize].value.as_ref()
    }

    /// Mutable reference to the current element's value.
    pub fn get_mut(&mut self) -> Option<&mut T> {
        if self.at == self.sentinel {
            return None;
        }
        self.pool.slots[self.at as usize].value.as_mut()
    }

    /// Removes the current element, returning its value.
    ///
    /// The cursor moves back to the predecessor, so the next
    /// [`CursorMut::advance`] continues with the removed element's
    /// successor.
    pub fn remove(&mut self) -> Option<T> {
        let handle = self.handle()?;
        let prev = self.pool.slots[self.at as usize].prev;
        match self.pool.release(handle) {
            Ok(value) => {
                self.at = prev;
                Some(value)
            }
            Err(_) => None,
        }
    }
}
