use std::io::Write;
use std::sync::Mutex;

use crate::domain::FormState;
use crate::subscription_controller::SubscribeView;

/// A `SubscribeView` for command-line hosts.
///
/// The form is pre-filled from arguments and notifications are written as lines to `out`.
/// There is no modal on a terminal, so hiding it only records that it happened.
pub struct TerminalView<W> {
    form: Mutex<FormState>,
    out: Mutex<W>,
    modal_open: Mutex<bool>,
}

impl<W: Write> TerminalView<W> {
    pub fn new(form: FormState, out: W) -> Self {
        Self {
            form: Mutex::new(form),
            out: Mutex::new(out),
            modal_open: Mutex::new(true),
        }
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal_open.lock().map(|open| *open).unwrap_or(false)
    }

    pub fn into_output(self) -> W {
        match self.out.into_inner() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl<W: Write> SubscribeView for TerminalView<W> {
    fn read_form(&self) -> FormState {
        match self.form.lock() {
            Ok(form) => form.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn write_form(&self, state: FormState) {
        match self.form.lock() {
            Ok(mut form) => *form = state,
            Err(poisoned) => *poisoned.into_inner() = state,
        }
    }

    fn notify(&self, message: &str) {
        let Ok(mut out) = self.out.lock() else {
            tracing::warn!("Terminal output is poisoned, dropping notification");
            return;
        };
        if let Err(e) = writeln!(out, "{}", message).and_then(|_| out.flush()) {
            tracing::warn!(error.message = %e, "Failed to write the notification");
        }
    }

    fn hide_modal(&self) {
        if let Ok(mut open) = self.modal_open.lock() {
            *open = false;
        }
        tracing::debug!("Subscribe modal dismissed");
    }
}
