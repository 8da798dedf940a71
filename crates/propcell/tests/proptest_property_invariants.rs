//! Property-based invariant tests for the propcell event/property pair.
//!
//! These verify the structural invariants that must hold for **any** number
//! of observers and any sequence of mutations:
//!
//! 1. Fan-out count: each trigger invokes every observer exactly once.
//! 2. Registration order is preserved regardless of observer count.
//! 3. `set` is last-write-wins: the final stored value is the last value set.
//! 4. Observer call count equals the number of mutating operations.
//! 5. Observers share one mutable value per fan-out (mutations chain).
//! 6. Copy-mode properties never write back to the construction argument.
//! 7. Cross-mode assignment copies the source value and fires only the
//!    destination's observers.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use proptest::prelude::*;

use propcell::{Event, OwnedProperty, PropertyCell, RefProperty};

proptest! {
    #[test]
    fn fanout_invokes_each_observer_exactly_once(
        observers in 0usize..32,
        value in any::<i32>(),
    ) {
        let mut event = Event::new();
        let calls = Rc::new(Cell::new(0usize));

        for _ in 0..observers {
            let calls = Rc::clone(&calls);
            event.register(move |_: &mut i32| calls.set(calls.get() + 1));
        }

        let mut v = value;
        event.trigger(&mut v);

        prop_assert_eq!(calls.get(), observers);
        prop_assert_eq!(v, value);
    }

    #[test]
    fn registration_order_is_preserved(observers in 1usize..24) {
        let mut event = Event::new();
        let log = Rc::new(RefCell::new(Vec::new()));

        for i in 0..observers {
            let log = Rc::clone(&log);
            event.register(move |_: &mut u8| log.borrow_mut().push(i));
        }

        let mut v = 0u8;
        event.trigger(&mut v);

        let expected: Vec<usize> = (0..observers).collect();
        prop_assert_eq!(&*log.borrow(), &expected);
    }

    #[test]
    fn set_is_last_write_wins(
        initial in any::<i32>(),
        writes in proptest::collection::vec(any::<i32>(), 1..50),
    ) {
        let mut storage = initial;
        let last = *writes.last().unwrap();
        let calls = Rc::new(Cell::new(0usize));

        {
            let mut p = RefProperty::bind(&mut storage);
            let calls = Rc::clone(&calls);
            p.observe(move |_| calls.set(calls.get() + 1));

            for w in &writes {
                p.set(*w);
            }
            prop_assert_eq!(*p.get(), last);
        }

        prop_assert_eq!(storage, last);
        prop_assert_eq!(calls.get(), writes.len());
    }

    #[test]
    fn observers_chain_mutations(observers in 0usize..16, start in -1000i64..1000) {
        let mut p = OwnedProperty::new(0i64);
        for _ in 0..observers {
            p.observe(|v| *v += 1);
        }

        p.set(start);
        prop_assert_eq!(*p.get(), start + observers as i64);
    }

    #[test]
    fn owned_property_never_touches_construction_argument(
        initial in any::<i32>(),
        replacement in any::<i32>(),
    ) {
        let argument = initial;
        let mut p = OwnedProperty::new(argument);

        p.set(replacement);
        prop_assert_eq!(*p.get(), replacement);
        prop_assert_eq!(argument, initial);
    }

    #[test]
    fn cross_mode_assignment_fires_destination_only(
        dest_initial in any::<i32>(),
        source_value in any::<i32>(),
    ) {
        let mut storage = dest_initial;
        let mut dest = RefProperty::bind(&mut storage);
        let mut source = OwnedProperty::new(source_value);

        let dest_calls = Rc::new(Cell::new(0usize));
        let source_calls = Rc::new(Cell::new(0usize));

        let c = Rc::clone(&dest_calls);
        dest.observe(move |_| c.set(c.get() + 1));
        let c = Rc::clone(&source_calls);
        source.observe(move |_| c.set(c.get() + 1));

        dest.set_from(&source);

        prop_assert_eq!(*dest.get(), source_value);
        prop_assert_eq!(*source.get(), source_value);
        prop_assert_eq!(dest_calls.get(), 1);
        prop_assert_eq!(source_calls.get(), 0);
    }

    #[test]
    fn update_triggers_once_per_call(ops in 1usize..40) {
        let mut p = OwnedProperty::new(0usize);
        let calls = Rc::new(Cell::new(0usize));

        let c = Rc::clone(&calls);
        p.observe(move |_| c.set(c.get() + 1));

        for _ in 0..ops {
            p.update(|v| *v += 1);
        }

        prop_assert_eq!(*p.get(), ops);
        prop_assert_eq!(calls.get(), ops);
    }
}
