//! One-shot notifications emitted by the duel state machine.
//!
//! Toasts travel over a single-consumer channel so that the machine never
//! waits on whoever presents them. Delivery order matches emission order and
//! each toast is received exactly once.

use std::fmt;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    DiceRoll,
    CoinFlip,
    Shame,
    Loss,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

impl Toast {
    pub fn new(kind: ToastKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for Toast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Producer half, owned by the state machine.
#[derive(Debug)]
pub struct ToastSender {
    tx: Sender<Toast>,
}

impl ToastSender {
    /// Queue a toast. A receiver that has gone away is not an error.
    pub fn send(&self, toast: Toast) {
        if let Err(mpsc::SendError(toast)) = self.tx.send(toast) {
            tracing::trace!("Toast dropped (receiver gone): {}", toast);
        }
    }
}

/// Consumer half, owned by the presentation layer.
#[derive(Debug)]
pub struct ToastReceiver {
    rx: Receiver<Toast>,
}

impl ToastReceiver {
    /// Next pending toast, without blocking.
    pub fn try_next(&self) -> Option<Toast> {
        match self.rx.try_recv() {
            Ok(toast) => Some(toast),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Every pending toast in emission order.
    pub fn drain(&self) -> Vec<Toast> {
        self.rx.try_iter().collect()
    }
}

pub fn toast_channel() -> (ToastSender, ToastReceiver) {
    let (tx, rx) = mpsc::channel();
    (ToastSender { tx }, ToastReceiver { rx })
}
