pub mod emitter;
pub mod entry;
pub mod navigable;
pub mod trigger;

pub use entry::{BlurEvent, FocusOwner, FocusTarget, ItemEvent, MenuEntry, TextItem, new_focus_owner};
pub use navigable::NavigableMenu;
pub use trigger::{ToggleButton, TriggerControl};
