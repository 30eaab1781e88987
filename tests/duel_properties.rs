mod common;

use common::started_machine;
use duel_companion::duel::{
    DuelIntent, LifePointChange, Multiplier, PlayerSlot, MAXIMUM_LIFE_POINTS,
};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum KeypadPress {
    Digit(u8),
    Times(Multiplier),
}

fn keypad_press() -> impl Strategy<Value = KeypadPress> {
    prop_oneof![
        (0u8..=9).prop_map(KeypadPress::Digit),
        prop_oneof![
            Just(Multiplier::Ten),
            Just(Multiplier::Hundred),
            Just(Multiplier::Thousand),
        ]
        .prop_map(KeypadPress::Times),
    ]
}

fn slot() -> impl Strategy<Value = PlayerSlot> {
    prop_oneof![Just(PlayerSlot::PlayerOne), Just(PlayerSlot::PlayerTwo)]
}

fn change() -> impl Strategy<Value = LifePointChange> {
    prop_oneof![Just(LifePointChange::Add), Just(LifePointChange::Subtract)]
}

fn duel_intent() -> impl Strategy<Value = DuelIntent> {
    prop_oneof![
        4 => (0u8..=9).prop_map(DuelIntent::AppendDigit),
        2 => keypad_press().prop_map(|press| match press {
            KeypadPress::Digit(digit) => DuelIntent::AppendDigit(digit),
            KeypadPress::Times(multiplier) => DuelIntent::ApplyMultiplier(multiplier),
        }),
        1 => Just(DuelIntent::ClearPendingEntry),
        3 => (slot(), change())
            .prop_map(|(slot, change)| DuelIntent::ModifyLifePoints { slot, change }),
        1 => Just(DuelIntent::RollDice),
        1 => Just(DuelIntent::FlipCoin),
        1 => any::<bool>().prop_map(DuelIntent::SetSnarkEnabled),
        1 => any::<bool>().prop_map(DuelIntent::SetMockEnabled),
    ]
}

proptest! {
    #[test]
    fn pending_entry_never_exceeds_maximum(presses in prop::collection::vec(keypad_press(), 0..40)) {
        let (mut machine, _rx) = started_machine(0);
        for press in presses {
            let before = machine.session().pending_entry;
            let candidate = match &press {
                KeypadPress::Digit(digit) => u64::from(before) * 10 + u64::from(*digit),
                KeypadPress::Times(multiplier) => u64::from(before) * u64::from(multiplier.factor()),
            };
            match press {
                KeypadPress::Digit(digit) => machine.append_digit(digit),
                KeypadPress::Times(multiplier) => machine.apply_multiplier(multiplier),
            }
            let after = machine.session().pending_entry;
            prop_assert!(after <= MAXIMUM_LIFE_POINTS);
            if candidate > u64::from(MAXIMUM_LIFE_POINTS) {
                prop_assert_eq!(after, before);
            } else {
                prop_assert_eq!(u64::from(after), candidate);
            }
        }
    }

    #[test]
    fn modify_always_clears_entry(intents in prop::collection::vec(duel_intent(), 0..60)) {
        let (mut machine, _rx) = started_machine(0);
        for intent in intents {
            let modifies = matches!(intent, DuelIntent::ModifyLifePoints { .. });
            machine.dispatch(intent);
            if modifies {
                prop_assert_eq!(machine.session().pending_entry, 0);
            }
        }
    }

    #[test]
    fn life_points_stay_in_bounds_and_freeze_when_locked(
        intents in prop::collection::vec(duel_intent(), 0..80),
    ) {
        let (mut machine, _rx) = started_machine(0);
        for intent in intents {
            let was_locked = machine.session().is_locked;
            let before = machine.session().duelists().clone();
            machine.dispatch(intent);

            let session = machine.session();
            for duelist in session.duelists() {
                prop_assert!(duelist.life_points <= MAXIMUM_LIFE_POINTS);
            }
            if was_locked {
                prop_assert!(session.is_locked);
                prop_assert_eq!(session.duelists(), &before);
                prop_assert_eq!(session.pending_entry, 0);
            }
            if session.is_locked {
                prop_assert!(session.loser().is_some());
            }
        }
    }

    #[test]
    fn at_most_one_shame_per_duel(intents in prop::collection::vec(duel_intent(), 0..80)) {
        let (mut machine, rx) = started_machine(0);
        machine.set_snark_enabled(true);
        for intent in intents {
            machine.dispatch(intent);
        }
        let shames = rx
            .drain()
            .into_iter()
            .filter(|toast| toast.kind == duel_companion::duel::ToastKind::Shame)
            .count();
        prop_assert!(shames <= 1);
    }
}
