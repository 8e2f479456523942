//! The control that opens a popup menu and regains focus when it closes.

use crate::menu::entry::{FocusOwner, FocusTarget};

/// External button collaborating with a `NavigableMenu`. The menu only uses
/// it for dismissal side effects; it is not part of navigation state.
pub trait TriggerControl {
    fn press(&mut self);

    fn unpress(&mut self);

    /// Move input focus back onto the control.
    fn focus(&mut self);

    fn is_pressed(&self) -> bool;

    /// Identity of the control's primary sub-element. Blur dismissal skips
    /// closing when focus is moving onto this element, since that is the
    /// control toggling itself.
    fn primary_target(&self) -> FocusTarget;
}

/// A control-bar button that toggles a popup menu open and closed.
pub struct ToggleButton {
    label: String,
    pressed: bool,
    target: FocusTarget,
    primary: FocusTarget,
    focus_owner: FocusOwner,
}

impl ToggleButton {
    pub fn new(label: impl Into<String>, focus_owner: FocusOwner) -> Self {
        Self {
            label: label.into(),
            pressed: false,
            // The button and its inner label element are distinct focus
            // identities, mirroring a container with a first child.
            target: FocusTarget::next(),
            primary: FocusTarget::next(),
            focus_owner,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn target(&self) -> FocusTarget {
        self.target
    }
}

impl TriggerControl for ToggleButton {
    fn press(&mut self) {
        self.pressed = true;
    }

    fn unpress(&mut self) {
        self.pressed = false;
    }

    fn focus(&mut self) {
        self.focus_owner.set(Some(self.target));
    }

    fn is_pressed(&self) -> bool {
        self.pressed
    }

    fn primary_target(&self) -> FocusTarget {
        self.primary
    }
}
