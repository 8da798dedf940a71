//! Value cells with observable mutation.
//!
//! # Design
//!
//! A property is a cell holding a value of type `T` plus one owned
//! [`Event<T>`]. Every mutating operation (`set`, `set_from`, `update`)
//! writes the value first and then triggers the event exactly once with a
//! mutable reference to the new value. Reads (`get`, `get_mut`, deref)
//! never trigger.
//!
//! Two concrete ownership modes exist, chosen permanently at construction:
//!
//! - [`RefProperty<'a, T>`] borrows caller-owned storage. Writes pass
//!   through to the original location, so pre-existing state becomes
//!   observable without copying it.
//! - [`OwnedProperty<T>`] owns its value outright; the construction
//!   argument is moved in and never aliased.
//!
//! Both implement the [`PropertyCell`] trait, the shared capability surface
//! for code generic over the mode.
//!
//! # Invariants
//!
//! 1. After any successful mutating operation the held value reflects the
//!    new value and the owned event has been triggered exactly once.
//! 2. Reads never trigger, including mutable access via `get_mut`/`DerefMut`.
//! 3. Observers run in registration order and share one `&mut T` per
//!    fan-out (see [`Event`]).
//! 4. Properties are neither `Clone` nor `Copy`; the only way state leaves
//!    one property for another is an explicit `set_from` (values) or a
//!    native move of the whole property (transfer construction).
//!
//! # Failure Modes
//!
//! None at runtime. The hazards the design calls out — dangling storage
//! behind a `RefProperty`, use after move, a property assigned from itself —
//! are all rejected by the borrow checker at compile time.

use tracing::trace;

use crate::event::Event;

/// Shared capability surface for both property ownership modes.
///
/// Embedding code that does not care whether a property borrows or owns its
/// storage can take `impl PropertyCell<T>`.
pub trait PropertyCell<T> {
    /// Current value, by shared reference. Never triggers observers.
    fn get(&self) -> &T;

    /// Current value, by mutable reference. Writing through this reference
    /// never triggers observers.
    fn get_mut(&mut self) -> &mut T;

    /// Overwrite the value, then trigger observers once with the new value.
    fn set(&mut self, value: T);

    /// Mutate the value in place, then trigger observers once.
    fn update(&mut self, f: impl FnOnce(&mut T));

    /// Register an observer on the property's change event.
    ///
    /// Delegates to [`Event::register`]: observers run on every subsequent
    /// mutation, in registration order, and cannot be removed.
    fn observe(&mut self, listener: impl FnMut(&mut T) + 'static);

    /// Number of registered observers.
    fn observers(&self) -> usize;

    /// Copy another property's current value into this one, then trigger
    /// this property's observers once. The source's observers are untouched.
    ///
    /// The source may be of either ownership mode. Assigning a property
    /// from itself does not borrow-check, so no aliasing check is needed
    /// here.
    fn set_from<P: PropertyCell<T> + ?Sized>(&mut self, other: &P)
    where
        T: Clone,
    {
        self.set(other.get().clone());
    }
}

/// A property borrowing caller-owned storage.
///
/// Writes pass through to the borrowed location; the caller sees every
/// mutation once the property is released. The borrow ties the property's
/// lifetime to the storage, so the storage cannot dangle, and binding a
/// second property to the same storage is rejected while this one lives.
///
/// Transfer construction is a native move: `let q = p;` hands the borrow
/// and the event (with all registered observers) to `q`, and any later use
/// of `p` is a compile error.
pub struct RefProperty<'a, T> {
    slot: &'a mut T,
    changed: Event<T>,
}

impl<'a, T> RefProperty<'a, T> {
    /// Bind a property to existing storage.
    ///
    /// The event starts empty. Nothing is copied; `slot` keeps its current
    /// value until the first mutating operation.
    #[must_use]
    pub fn bind(slot: &'a mut T) -> Self {
        Self {
            slot,
            changed: Event::new(),
        }
    }

    /// Current value of the bound storage.
    #[must_use]
    pub fn get(&self) -> &T {
        self.slot
    }

    /// Mutable access to the bound storage. Writes through this reference
    /// never trigger observers.
    #[must_use]
    pub fn get_mut(&mut self) -> &mut T {
        self.slot
    }

    /// Overwrite the bound storage, then trigger observers once with a
    /// mutable reference to the updated storage.
    pub fn set(&mut self, value: T) {
        *self.slot = value;
        trace!(observers = self.changed.len(), "ref property set");
        self.changed.trigger(self.slot);
    }

    /// Mutate the bound storage in place, then trigger observers once.
    pub fn update(&mut self, f: impl FnOnce(&mut T)) {
        f(self.slot);
        trace!(observers = self.changed.len(), "ref property update");
        self.changed.trigger(self.slot);
    }

    /// Copy another property's current value in, then trigger observers.
    pub fn set_from<P: PropertyCell<T> + ?Sized>(&mut self, other: &P)
    where
        T: Clone,
    {
        self.set(other.get().clone());
    }

    /// Register an observer. See [`Event::register`].
    pub fn observe(&mut self, listener: impl FnMut(&mut T) + 'static) {
        self.changed.register(listener);
    }

    /// Number of registered observers.
    #[must_use]
    pub fn observers(&self) -> usize {
        self.changed.len()
    }
}

impl<T> PropertyCell<T> for RefProperty<'_, T> {
    fn get(&self) -> &T {
        RefProperty::get(self)
    }

    fn get_mut(&mut self) -> &mut T {
        RefProperty::get_mut(self)
    }

    fn set(&mut self, value: T) {
        RefProperty::set(self, value);
    }

    fn update(&mut self, f: impl FnOnce(&mut T)) {
        RefProperty::update(self, f);
    }

    fn observe(&mut self, listener: impl FnMut(&mut T) + 'static) {
        RefProperty::observe(self, listener);
    }

    fn observers(&self) -> usize {
        RefProperty::observers(self)
    }
}

impl<T> std::ops::Deref for RefProperty<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.slot
    }
}

impl<T> std::ops::DerefMut for RefProperty<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        self.slot
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for RefProperty<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RefProperty")
            .field("value", &*self.slot)
            .field("observers", &self.changed.len())
            .finish()
    }
}

/// A property owning its value outright.
///
/// The construction argument is moved in, so the cell is fully encapsulated:
/// no external alias of the value exists, and mutations are only visible
/// through the property itself.
pub struct OwnedProperty<T> {
    value: T,
    changed: Event<T>,
}

impl<T> OwnedProperty<T> {
    /// Create a property owning `value`. Any value works, including
    /// temporaries; the event starts empty.
    #[must_use]
    pub fn new(value: T) -> Self {
        Self {
            value,
            changed: Event::new(),
        }
    }

    /// Current value.
    #[must_use]
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Mutable access to the value. Writes through this reference never
    /// trigger observers.
    #[must_use]
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Overwrite the value, then trigger observers once with a mutable
    /// reference to the new value.
    pub fn set(&mut self, value: T) {
        self.value = value;
        trace!(observers = self.changed.len(), "owned property set");
        self.changed.trigger(&mut self.value);
    }

    /// Mutate the value in place, then trigger observers once.
    pub fn update(&mut self, f: impl FnOnce(&mut T)) {
        f(&mut self.value);
        trace!(observers = self.changed.len(), "owned property update");
        self.changed.trigger(&mut self.value);
    }

    /// Copy another property's current value in, then trigger observers.
    pub fn set_from<P: PropertyCell<T> + ?Sized>(&mut self, other: &P)
    where
        T: Clone,
    {
        self.set(other.get().clone());
    }

    /// Register an observer. See [`Event::register`].
    pub fn observe(&mut self, listener: impl FnMut(&mut T) + 'static) {
        self.changed.register(listener);
    }

    /// Number of registered observers.
    #[must_use]
    pub fn observers(&self) -> usize {
        self.changed.len()
    }

    /// Consume the property, discarding the event and its observers, and
    /// return the owned value. No notification is sent.
    #[must_use]
    pub fn into_value(self) -> T {
        self.value
    }
}

impl<T> PropertyCell<T> for OwnedProperty<T> {
    fn get(&self) -> &T {
        OwnedProperty::get(self)
    }

    fn get_mut(&mut self) -> &mut T {
        OwnedProperty::get_mut(self)
    }

    fn set(&mut self, value: T) {
        OwnedProperty::set(self, value);
    }

    fn update(&mut self, f: impl FnOnce(&mut T)) {
        OwnedProperty::update(self, f);
    }

    fn observe(&mut self, listener: impl FnMut(&mut T) + 'static) {
        OwnedProperty::observe(self, listener);
    }

    fn observers(&self) -> usize {
        OwnedProperty::observers(self)
    }
}

impl<T> std::ops::Deref for OwnedProperty<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T> std::ops::DerefMut for OwnedProperty<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.value
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for OwnedProperty<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OwnedProperty")
            .field("value", &self.value)
            .field("observers", &self.changed.len())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
