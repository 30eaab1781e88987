//! Shared test helpers.

#![allow(dead_code)]

use duel_companion::duel::{
    toast_channel, DuelStateMachine, LifePointChange, PlayerSlot, Toast, ToastReceiver,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

pub type TestMachine = DuelStateMachine<ChaCha8Rng>;

/// Machine with a seeded RNG, reset to starting life points.
pub fn started_machine(seed: u64) -> (TestMachine, ToastReceiver) {
    let (tx, rx) = toast_channel();
    let mut machine = DuelStateMachine::with_rng(tx, ChaCha8Rng::seed_from_u64(seed));
    machine.reset();
    (machine, rx)
}

/// Type `value` on the keypad digit by digit.
pub fn enter(machine: &mut TestMachine, value: u32) {
    for ch in value.to_string().chars() {
        let digit = ch.to_digit(10).expect("decimal digit") as u8;
        machine.append_digit(digit);
    }
}

/// Enter `amount` and apply it to `slot`.
pub fn apply(machine: &mut TestMachine, slot: PlayerSlot, change: LifePointChange, amount: u32) {
    enter(machine, amount);
    machine.modify_life_points(slot, change);
}

pub fn messages(rx: &ToastReceiver) -> Vec<String> {
    rx.drain().into_iter().map(|toast: Toast| toast.message).collect()
}

pub fn life(machine: &TestMachine, slot: PlayerSlot) -> u32 {
    machine.session().duelist(slot).life_points
}
