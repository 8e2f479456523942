//! The popup menu's focus-cursor state machine.
//!
//! A `NavigableMenu` owns an ordered child list mixing selectable items and
//! decorations (a leading title). Directional input moves a single logical
//! cursor over the *filtered* selectable subsequence; the entry under the
//! cursor is told to take input focus. All index arithmetic clamps instead
//! of erroring, and a menu with no selectable entries ignores navigation
//! entirely.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::input::map;
use crate::menu::entry::{BlurEvent, FocusTarget, ItemEvent, MENU_TITLE_CLASS, MenuEntry};
use crate::menu::trigger::TriggerControl;

pub type SharedEntry = Rc<RefCell<dyn MenuEntry>>;
pub type SharedTrigger = Rc<RefCell<dyn TriggerControl>>;

pub struct NavigableMenu {
    children: Vec<SharedEntry>,
    /// Targets of every child, cached at add time so blur handlers can test
    /// membership without borrowing the entry that is mid-emit.
    child_targets: Rc<RefCell<Vec<FocusTarget>>>,
    /// Cursor into the filtered (selectable, title-stripped) list. `None`
    /// only before the first navigation; there is no way back to `None`.
    focused_child: Option<usize>,
    trigger: Option<SharedTrigger>,
}

impl NavigableMenu {
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
            child_targets: Rc::new(RefCell::new(Vec::new())),
            focused_child: None,
            trigger: None,
        }
    }

    /// A menu wired to the button that opens it. The trigger must be set
    /// before items are added; subscriptions capture it.
    pub fn with_trigger(trigger: SharedTrigger) -> Self {
        let mut menu = Self::new();
        menu.trigger = Some(trigger);
        menu
    }

    /// Append an entry and subscribe to its notifications.
    ///
    /// Activate unpresses the trigger and hands focus back to it, unless the
    /// entry's activation moves focus elsewhere on its own. Blur evaluates
    /// the outside-click dismissal rule.
    pub fn add_item(&mut self, entry: SharedEntry) {
        self.child_targets
            .borrow_mut()
            .push(entry.borrow().focus_target());

        let settings_item = entry.borrow().moves_focus_elsewhere();
        let trigger = self.trigger.as_ref().map(Rc::downgrade);

        {
            let trigger = trigger.clone();
            entry.borrow_mut().events().on(move |event| {
                if let ItemEvent::Activate = event {
                    let Some(button) = trigger.as_ref().and_then(Weak::upgrade) else {
                        return;
                    };
                    let mut button = button.borrow_mut();
                    button.unpress();
                    if !settings_item {
                        button.focus();
                    }
                }
            });
        }

        let targets = Rc::downgrade(&self.child_targets);
        entry.borrow_mut().events().on(move |event| {
            let ItemEvent::Blur(blur) = event else {
                return;
            };
            let Some(targets) = targets.upgrade() else {
                return;
            };
            // Cannot determine where focus went, so do not close.
            let Some(related) = blur.resolve() else {
                return;
            };
            // Focus stayed inside the menu.
            if targets.borrow().iter().any(|t| *t == related) {
                return;
            }
            let Some(button) = trigger.as_ref().and_then(Weak::upgrade) else {
                return;
            };
            let mut button = button.borrow_mut();
            if button.is_pressed() && related != button.primary_target() {
                button.unpress();
            }
        });

        self.children.push(entry);
    }

    /// Route a raw input code into cursor movement.
    ///
    /// Returns true when the code was consumed (the caller should suppress
    /// any default handling). Accept/cancel and unrecognized codes are not
    /// consumed here.
    pub fn handle_input(&mut self, code: u16, extended_pad: bool) -> bool {
        match map::classify(code, extended_pad) {
            Some(intent) if intent.is_forward() => {
                self.step_forward();
                true
            }
            Some(intent) if intent.is_backward() => {
                self.step_back();
                true
            }
            _ => false,
        }
    }

    /// Advance the cursor. With no prior focus the candidate bases at -1,
    /// landing on 0.
    pub fn step_forward(&mut self) {
        let candidate = self.focused_child.map(|i| i as isize + 1).unwrap_or(0);
        self.focus(Some(candidate));
    }

    /// Retreat the cursor. With no prior focus the candidate bases at 0,
    /// yielding -1 which `focus` clamps back to 0. The asymmetry with
    /// `step_forward` is intentional, long-standing observable behavior.
    pub fn step_back(&mut self) {
        let candidate = self.focused_child.map(|i| i as isize).unwrap_or(0) - 1;
        self.focus(Some(candidate));
    }

    /// Place the cursor and transfer input focus.
    ///
    /// `None` targets the currently selected entry (first `is_selected` in
    /// filtered order), falling back to 0; explicit indices clamp into
    /// range. On a menu with no focusable entries this is a total no-op.
    pub fn focus(&mut self, index: Option<isize>) {
        let focusable = self.focusable();
        if focusable.is_empty() {
            return;
        }

        let mut index = match index {
            Some(i) => i,
            None => focusable
                .iter()
                .position(|entry| entry.borrow().is_selected())
                .unwrap_or(0) as isize,
        };

        if index < 0 {
            index = 0;
        } else if index as usize >= focusable.len() {
            index = focusable.len() as isize - 1;
        }

        let index = index as usize;
        self.focused_child = Some(index);
        focusable[index].borrow_mut().take_focus();
    }

    /// The selectable children in order, minus a leading title entry.
    fn focusable(&self) -> Vec<SharedEntry> {
        let mut focusable: Vec<SharedEntry> = self
            .children
            .iter()
            .filter(|entry| entry.borrow().selectable())
            .cloned()
            .collect();

        let leading_title = focusable
            .first()
            .is_some_and(|entry| entry.borrow().class_name().contains(MENU_TITLE_CLASS));
        if leading_title {
            focusable.remove(0);
        }

        focusable
    }

    pub fn focused_child(&self) -> Option<usize> {
        self.focused_child
    }

    pub fn entries(&self) -> &[SharedEntry] {
        &self.children
    }

    /// The entry currently under the cursor, if any.
    pub fn focused_entry(&self) -> Option<SharedEntry> {
        let index = self.focused_child?;
        self.focusable().get(index).cloned()
    }

    /// Fire the focused entry's activate notification (tap/click/accept).
    pub fn activate_focused(&mut self) {
        if let Some(entry) = self.focused_entry() {
            entry.borrow_mut().events().emit(&ItemEvent::Activate);
        }
    }

    /// Deliver a blur notification to the child at `child_index` (raw child
    /// order, not filtered order).
    pub fn notify_blur(&mut self, child_index: usize, blur: BlurEvent) {
        if let Some(entry) = self.children.get(child_index).cloned() {
            entry.borrow_mut().events().emit(&ItemEvent::Blur(blur));
        }
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl Default for NavigableMenu {
    fn default() -> Self {
        Self::new()
    }
}
