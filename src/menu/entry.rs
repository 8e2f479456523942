//! Menu entries and the focus-identity plumbing around them.

use std::cell::Cell;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::menu::emitter::Emitter;

/// Class marker that tags a leading heading entry. A title is never a focus
/// target and is not counted toward focus indices.
pub const MENU_TITLE_CLASS: &str = "menu-title";

/// Opaque identity of something that can hold input focus.
///
/// Focus transfer and blur dismissal compare these tokens, so an entry must
/// keep the same target for its whole life.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FocusTarget(u64);

static NEXT_TARGET: AtomicU64 = AtomicU64::new(1);

impl FocusTarget {
    /// Allocate a fresh, process-unique target.
    pub fn next() -> Self {
        Self(NEXT_TARGET.fetch_add(1, Ordering::Relaxed))
    }
}

/// Shared cell tracking which target currently holds input focus, the
/// equivalent of querying the globally focused element. `take_focus`
/// implementations write it; blur handling reads it as a fallback when an
/// event does not report a related target.
pub type FocusOwner = Rc<Cell<Option<FocusTarget>>>;

pub fn new_focus_owner() -> FocusOwner {
    Rc::new(Cell::new(None))
}

/// Payload of a blur notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlurEvent {
    /// The target about to receive focus, if the event source knows it.
    pub related_target: Option<FocusTarget>,
    /// Snapshot of the global focus owner, used when `related_target` is
    /// missing.
    pub focus_owner: Option<FocusTarget>,
}

impl BlurEvent {
    /// The target focus is moving to, or `None` if it cannot be determined
    /// (in which case dismissal must not trigger).
    pub fn resolve(&self) -> Option<FocusTarget> {
        self.related_target.or(self.focus_owner)
    }
}

/// Notifications a menu entry publishes to its owning menu.
pub enum ItemEvent {
    /// The entry was tapped/clicked or accepted.
    Activate,
    /// The entry lost input focus.
    Blur(BlurEvent),
}

/// Capability a menu requires of its children.
pub trait MenuEntry {
    fn label(&self) -> &str;

    /// Whether this entry is eligible to receive focus and represent a
    /// choice. Decorative entries return false.
    fn selectable(&self) -> bool;

    /// Whether this entry is the currently active choice.
    fn is_selected(&self) -> bool;

    fn set_selected(&mut self, selected: bool);

    /// CSS-like class string; only used to detect the title marker.
    fn class_name(&self) -> &str;

    /// Take input focus. The menu calls this on the entry object itself,
    /// never on a copy.
    fn take_focus(&mut self);

    fn focus_target(&self) -> FocusTarget;

    /// True for entries whose activation intentionally moves focus elsewhere
    /// (e.g. a caption-settings sub-item opening its own panel), so the menu
    /// must not hand focus back to the trigger control.
    fn moves_focus_elsewhere(&self) -> bool {
        false
    }

    fn events(&mut self) -> &mut Emitter<ItemEvent>;
}

/// The standard text entry used by the player's menus.
pub struct TextItem {
    label: String,
    class: String,
    selectable: bool,
    selected: bool,
    settings_item: bool,
    target: FocusTarget,
    focus_owner: FocusOwner,
    events: Emitter<ItemEvent>,
}

impl TextItem {
    pub fn new(label: impl Into<String>, focus_owner: FocusOwner) -> Self {
        Self {
            label: label.into(),
            class: "menu-item".to_string(),
            selectable: true,
            selected: false,
            settings_item: false,
            target: FocusTarget::next(),
            focus_owner,
            events: Emitter::new(),
        }
    }

    /// A non-interactive heading shown at the top of a menu.
    pub fn title(label: impl Into<String>, focus_owner: FocusOwner) -> Self {
        let mut item = Self::new(label, focus_owner);
        item.class = format!("menu-item {MENU_TITLE_CLASS}");
        item.selectable = false;
        item
    }

    /// A sub-item whose activation opens its own panel instead of returning
    /// focus to the trigger control.
    pub fn settings(label: impl Into<String>, focus_owner: FocusOwner) -> Self {
        let mut item = Self::new(label, focus_owner);
        item.settings_item = true;
        item
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn with_selectable(mut self, selectable: bool) -> Self {
        self.selectable = selectable;
        self
    }
}

impl MenuEntry for TextItem {
    fn label(&self) -> &str {
        &self.label
    }

    fn selectable(&self) -> bool {
        self.selectable
    }

    fn is_selected(&self) -> bool {
        self.selected
    }

    fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    fn class_name(&self) -> &str {
        &self.class
    }

    fn take_focus(&mut self) {
        self.focus_owner.set(Some(self.target));
    }

    fn focus_target(&self) -> FocusTarget {
        self.target
    }

    fn moves_focus_elsewhere(&self) -> bool {
        self.settings_item
    }

    fn events(&mut self) -> &mut Emitter<ItemEvent> {
        &mut self.events
    }
}
