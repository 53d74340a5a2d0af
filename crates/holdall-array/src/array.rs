//! The [`BoxArray`] owning slot container.
//!
//! Storage is a `SmallVec` of `Option<Box<T>>` slots: arrays of up to
//! [`INLINE_SLOTS`] handles keep their spine inline and spill to the
//! heap transparently beyond that. Slot order is insertion order and is
//! semantically significant — removal shifts subsequent slots down, so
//! indices stay contiguous over `[0, len)`.

use smallvec::SmallVec;

use crate::error::ArrayError;

/// Number of inline slots before the spine spills to the heap.
pub const INLINE_SLOTS: usize = 4;

/// An ordered sequence of exclusively owned, optionally vacant boxed
/// elements.
///
/// Every occupied slot is uniquely owned by the array: handles enter via
/// [`push`](BoxArray::push), [`from_slots`](BoxArray::from_slots), or
/// [`replace`](BoxArray::replace), and leave only by being returned
/// ([`take`](BoxArray::take), [`replace`](BoxArray::replace)) or
/// dropped ([`remove_at`](BoxArray::remove_at),
/// [`clear`](BoxArray::clear), array drop). Vacant slots model null
/// entries and occupy an index like any other slot.
#[derive(Debug)]
pub struct BoxArray<T> {
    slots: SmallVec<[Option<Box<T>>; INLINE_SLOTS]>,
}

impl<T> BoxArray<T> {
    /// Create an empty array.
    pub fn new() -> Self {
        Self {
            slots: SmallVec::new(),
        }
    }

    /// Take ownership of pre-built slots, vacant entries included.
    ///
    /// The resulting length equals the number of slots supplied.
    pub fn from_slots<I>(slots: I) -> Self
    where
        I: IntoIterator<Item = Option<Box<T>>>,
    {
        Self {
            slots: slots.into_iter().collect(),
        }
    }

    /// Number of slots, occupied and vacant alike.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the array has no slots at all.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Append an owned handle. The new element lands at `len() - 1`.
    pub fn push(&mut self, handle: Box<T>) {
        self.slots.push(Some(handle));
    }

    /// Append a vacant slot.
    pub fn push_vacant(&mut self) {
        self.slots.push(None);
    }

    /// Bounds-checked read of the element at `index`.
    ///
    /// `Ok(None)` means the slot exists but is vacant.
    pub fn get(&self, index: usize) -> Result<Option<&T>, ArrayError> {
        self.check_bounds(index)?;
        Ok(self.slots[index].as_deref())
    }

    /// Bounds-checked mutable access to the element at `index`.
    pub fn get_mut(&mut self, index: usize) -> Result<Option<&mut T>, ArrayError> {
        self.check_bounds(index)?;
        Ok(self.slots[index].as_deref_mut())
    }

    /// Bounds-checked mutable access to the slot itself.
    ///
    /// Overwriting through the returned reference drops the previous
    /// handle; there is no way to leak it from safe code.
    pub fn slot_mut(&mut self, index: usize) -> Result<&mut Option<Box<T>>, ArrayError> {
        self.check_bounds(index)?;
        Ok(&mut self.slots[index])
    }

    /// Store `handle` at `index`, returning the displaced handle if the
    /// slot was occupied.
    pub fn replace(&mut self, index: usize, handle: Box<T>) -> Result<Option<Box<T>>, ArrayError> {
        self.check_bounds(index)?;
        Ok(self.slots[index].replace(handle))
    }

    /// Remove and return the handle at `index`, leaving the slot vacant.
    ///
    /// The slot itself stays in place: `len()` is unchanged and no
    /// elements shift.
    pub fn take(&mut self, index: usize) -> Result<Option<Box<T>>, ArrayError> {
        self.check_bounds(index)?;
        Ok(self.slots[index].take())
    }

    /// Destroy the slot at `index`, shifting subsequent slots down one.
    ///
    /// An out-of-range index is a silent no-op, not an error — unlike
    /// indexed access. Both halves of that asymmetry are load-bearing
    /// contracts.
    pub fn remove_at(&mut self, index: usize) {
        if index < self.slots.len() {
            self.slots.remove(index);
        }
    }

    /// Destroy every slot. `len()` is 0 afterwards.
    pub fn clear(&mut self) {
        self.slots.clear();
    }

    /// Iterate over slots in index order, vacant slots as `None`.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.slots.iter(),
        }
    }

    fn check_bounds(&self, index: usize) -> Result<(), ArrayError> {
        if index >= self.slots.len() {
            return Err(ArrayError::OutOfBounds {
                index,
                len: self.slots.len(),
            });
        }
        Ok(())
    }
}

impl<T> Default for BoxArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for BoxArray<T> {
    /// Deep copy: every occupied slot is duplicated through `T::clone`
    /// into a newly allocated handle. The copy shares no ownership with
    /// the source.
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.iter().map(clone_slot).collect(),
        }
    }

    /// Drops the destination's current elements before copying, the
    /// same order a destroy-then-copy assignment uses. Aliasing between
    /// `self` and `source` is unrepresentable under `&mut`, so no
    /// identity check exists.
    fn clone_from(&mut self, source: &Self) {
        self.slots.clear();
        self.slots.extend(source.slots.iter().map(clone_slot));
    }
}

fn clone_slot<T: Clone>(slot: &Option<Box<T>>) -> Option<Box<T>> {
    slot.as_ref().map(|handle| Box::new(T::clone(handle)))
}

/// Iterator over slots in index order.
///
/// Yields `Option<&T>`: `None` for vacant slots, so positions are
/// preserved and `enumerate` gives true indices.
pub struct Iter<'a, T> {
    inner: std::slice::Iter<'a, Option<Box<T>>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = Option<&'a T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|slot| slot.as_deref())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a BoxArray<T> {
    type Item = Option<&'a T>;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
