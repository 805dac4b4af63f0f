//! Which contact is holding which control.

use std::collections::HashMap;

use crate::event::ContactId;
use crate::zones::ControlId;

/// Result of trying to bind a contact to a control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bind {
    Bound,
    /// The joystick changed hands; the previous holder lost its binding.
    TookOver(ContactId),
    /// A button is already held by another contact.
    Rejected { holder: ContactId },
}

/// Contact → control bindings.
///
/// A contact holds at most one control. Buttons are first-come: a second
/// contact landing on a held button is turned away. The joystick is
/// last-come: a new contact takes it over and the previous one is unbound,
/// so its later moves and ends are no-ops.
#[derive(Debug, Default, Clone)]
pub struct ContactTracker {
    bindings: HashMap<ContactId, ControlId>,
}

impl ContactTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind(&mut self, contact: ContactId, control: ControlId) -> Bind {
        // A contact id reused before its end arrived drops its old binding first.
        self.bindings.remove(&contact);

        let outcome = match self.holder(control) {
            None => Bind::Bound,
            Some(prev) if control == ControlId::Joystick => {
                self.bindings.remove(&prev);
                Bind::TookOver(prev)
            }
            Some(holder) => return Bind::Rejected { holder },
        };
        self.bindings.insert(contact, control);
        outcome
    }

    pub fn control_of(&self, contact: ContactId) -> Option<ControlId> {
        self.bindings.get(&contact).copied()
    }

    pub fn holder(&self, control: ControlId) -> Option<ContactId> {
        self.bindings
            .iter()
            .find(|(_, c)| **c == control)
            .map(|(id, _)| *id)
    }

    pub fn unbind(&mut self, contact: ContactId) -> Option<ControlId> {
        self.bindings.remove(&contact)
    }

    /// Remove every binding, yielding what each contact held.
    pub fn drain(&mut self) -> impl Iterator<Item = (ContactId, ControlId)> + '_ {
        self.bindings.drain()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
