use std::cell::RefCell;
use std::rc::Rc;

use crate::config::{CAPTION_TRACKS, Config, QUALITY_LEVELS};
use crate::input::map::{self, Intent};
use crate::menu::entry::{
    BlurEvent, FocusOwner, FocusTarget, MENU_TITLE_CLASS, MenuEntry, TextItem, new_focus_owner,
};
use crate::menu::navigable::{NavigableMenu, SharedEntry, SharedTrigger};
use crate::menu::trigger::{ToggleButton, TriggerControl};
use crate::ui::theme::Theme;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuId {
    Captions,
    Quality,
}

/// Control-bar slots in left-to-right order: play/pause, captions, quality.
pub const BAR_SLOTS: usize = 3;
pub const SLOT_PLAY: usize = 0;
pub const SLOT_CAPTIONS: usize = 1;
pub const SLOT_QUALITY: usize = 2;

pub struct App {
    pub config: Config,
    pub theme: &'static Theme,
    pub focus_owner: FocusOwner,
    pub extended_pad: bool,
    pub playing: bool,
    pub position_secs: u64,
    pub duration_secs: u64,
    pub bar_focus: usize,
    pub captions_button: Rc<RefCell<ToggleButton>>,
    pub quality_button: Rc<RefCell<ToggleButton>>,
    pub captions_menu: NavigableMenu,
    pub quality_menu: NavigableMenu,
    /// The caption-settings panel is its own focus surface; activating the
    /// settings sub-item moves focus here instead of back to the trigger.
    pub caption_settings_open: bool,
    settings_panel_target: FocusTarget,
    play_target: FocusTarget,
    pub should_quit: bool,
}

fn shared(item: TextItem) -> SharedEntry {
    Rc::new(RefCell::new(item))
}

/// "off" -> "Off", "1080p" -> "1080p".
fn display_label(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn build_captions_menu(
    button: &Rc<RefCell<ToggleButton>>,
    owner: &FocusOwner,
    current: &str,
) -> NavigableMenu {
    let mut menu = NavigableMenu::with_trigger(Rc::clone(button) as SharedTrigger);
    menu.add_item(shared(TextItem::title("Subtitles", Rc::clone(owner))));
    for track in CAPTION_TRACKS {
        menu.add_item(shared(
            TextItem::new(display_label(track), Rc::clone(owner)).selected(*track == current),
        ));
    }
    menu.add_item(shared(TextItem::settings(
        "Caption settings",
        Rc::clone(owner),
    )));
    menu
}

fn build_quality_menu(
    button: &Rc<RefCell<ToggleButton>>,
    owner: &FocusOwner,
    current: &str,
) -> NavigableMenu {
    let mut menu = NavigableMenu::with_trigger(Rc::clone(button) as SharedTrigger);
    menu.add_item(shared(TextItem::title("Quality", Rc::clone(owner))));
    for level in QUALITY_LEVELS {
        menu.add_item(shared(
            TextItem::new(display_label(level), Rc::clone(owner)).selected(*level == current),
        ));
    }
    menu
}

impl App {
    pub fn new(mut config: Config) -> Self {
        config.normalize();

        let loaded_theme = Theme::load(&config.theme).unwrap_or_default();
        let theme: &'static Theme = Box::leak(Box::new(loaded_theme));

        let focus_owner = new_focus_owner();
        let captions_button = Rc::new(RefCell::new(ToggleButton::new(
            "CC",
            Rc::clone(&focus_owner),
        )));
        let quality_button = Rc::new(RefCell::new(ToggleButton::new(
            "HD",
            Rc::clone(&focus_owner),
        )));

        let captions_menu =
            build_captions_menu(&captions_button, &focus_owner, &config.caption_track);
        let quality_menu = build_quality_menu(&quality_button, &focus_owner, &config.quality);

        let extended_pad = config.extended_pad;
        let play_target = FocusTarget::next();
        focus_owner.set(Some(play_target));

        Self {
            config,
            theme,
            focus_owner,
            extended_pad,
            playing: false,
            position_secs: 0,
            duration_secs: 542,
            bar_focus: SLOT_PLAY,
            captions_button,
            quality_button,
            captions_menu,
            quality_menu,
            caption_settings_open: false,
            settings_panel_target: FocusTarget::next(),
            play_target,
            should_quit: false,
        }
    }

    pub fn open_menu(&self) -> Option<MenuId> {
        if self.captions_button.borrow().is_pressed() {
            Some(MenuId::Captions)
        } else if self.quality_button.borrow().is_pressed() {
            Some(MenuId::Quality)
        } else {
            None
        }
    }

    fn menu_mut(&mut self, id: MenuId) -> &mut NavigableMenu {
        match id {
            MenuId::Captions => &mut self.captions_menu,
            MenuId::Quality => &mut self.quality_menu,
        }
    }

    pub fn menu(&self, id: MenuId) -> &NavigableMenu {
        match id {
            MenuId::Captions => &self.captions_menu,
            MenuId::Quality => &self.quality_menu,
        }
    }

    fn button(&self, id: MenuId) -> Rc<RefCell<ToggleButton>> {
        match id {
            MenuId::Captions => Rc::clone(&self.captions_button),
            MenuId::Quality => Rc::clone(&self.quality_button),
        }
    }

    fn slot_target(&self, slot: usize) -> FocusTarget {
        match slot {
            SLOT_CAPTIONS => self.captions_button.borrow().target(),
            SLOT_QUALITY => self.quality_button.borrow().target(),
            _ => self.play_target,
        }
    }

    pub fn slot_focused(&self, slot: usize) -> bool {
        self.focus_owner.get() == Some(self.slot_target(slot))
    }

    /// Open a popup: press its trigger and re-sync the cursor with the
    /// currently selected entry.
    pub fn press(&mut self, id: MenuId) {
        if let Some(open) = self.open_menu() {
            if open != id {
                self.dismiss(open);
            }
        }
        self.button(id).borrow_mut().press();
        self.menu_mut(id).focus(None);
    }

    /// Close a popup and hand focus back to its trigger.
    pub fn dismiss(&mut self, id: MenuId) {
        let button = self.button(id);
        let mut button = button.borrow_mut();
        button.unpress();
        button.focus();
        self.bar_focus = match id {
            MenuId::Captions => SLOT_CAPTIONS,
            MenuId::Quality => SLOT_QUALITY,
        };
    }

    /// Sole entry point for raw navigation codes.
    pub fn handle_code(&mut self, code: u16) {
        let extended_pad = self.extended_pad;

        if self.caption_settings_open {
            if matches!(map::classify(code, extended_pad), Some(Intent::Cancel)) {
                self.close_caption_settings();
            }
            return;
        }

        if let Some(id) = self.open_menu() {
            if self.menu_mut(id).handle_input(code, extended_pad) {
                return;
            }
            match map::classify(code, extended_pad) {
                Some(Intent::Accept) => self.activate_focused(id),
                Some(Intent::Cancel) => self.dismiss(id),
                _ => {}
            }
            return;
        }

        match map::classify(code, extended_pad) {
            Some(Intent::Left) => self.focus_bar_slot(self.bar_focus.saturating_sub(1)),
            Some(Intent::Right) => self.focus_bar_slot((self.bar_focus + 1).min(BAR_SLOTS - 1)),
            Some(Intent::Accept) => self.activate_slot(self.bar_focus),
            _ => {}
        }
    }

    pub fn activate_slot(&mut self, slot: usize) {
        match slot {
            SLOT_CAPTIONS => self.press(MenuId::Captions),
            SLOT_QUALITY => self.press(MenuId::Quality),
            _ => self.playing = !self.playing,
        }
    }

    /// Activate the entry under the cursor: update the selection, fire the
    /// entry's activate notification (which unpresses the trigger), and
    /// record the choice in config.
    pub fn activate_focused(&mut self, id: MenuId) {
        let Some(entry) = self.menu(id).focused_entry() else {
            return;
        };

        if entry.borrow().moves_focus_elsewhere() {
            self.menu_mut(id).activate_focused();
            self.caption_settings_open = true;
            self.focus_owner.set(Some(self.settings_panel_target));
            return;
        }

        let label = entry.borrow().label().to_string();
        let target = entry.borrow().focus_target();
        for child in self.menu(id).entries() {
            let mut child = child.borrow_mut();
            if child.selectable()
                && !child.moves_focus_elsewhere()
                && !child.class_name().contains(MENU_TITLE_CLASS)
            {
                let selected = child.focus_target() == target;
                child.set_selected(selected);
            }
        }
        self.menu_mut(id).activate_focused();
        self.bar_focus = match id {
            MenuId::Captions => SLOT_CAPTIONS,
            MenuId::Quality => SLOT_QUALITY,
        };

        let value = label.to_lowercase();
        match id {
            MenuId::Captions => self.config.caption_track = value,
            MenuId::Quality => self.config.quality = value,
        }
    }

    pub fn close_caption_settings(&mut self) {
        self.caption_settings_open = false;
        self.captions_button.borrow_mut().focus();
        self.bar_focus = SLOT_CAPTIONS;
    }

    /// Move control-bar focus, synthesizing a blur notification for the
    /// menu item losing focus when a popup is open. The menu decides for
    /// itself whether that means dismissal.
    pub fn focus_bar_slot(&mut self, slot: usize) {
        let slot = slot.min(BAR_SLOTS - 1);
        let target = self.slot_target(slot);
        let open = self.open_menu();

        self.bar_focus = slot;
        self.focus_owner.set(Some(target));

        if let Some(id) = open {
            let menu = self.menu_mut(id);
            if let Some(entry) = menu.focused_entry() {
                let leaving = entry.borrow().focus_target();
                let index = menu
                    .entries()
                    .iter()
                    .position(|child| child.borrow().focus_target() == leaving);
                if let Some(index) = index {
                    menu.notify_blur(
                        index,
                        BlurEvent {
                            related_target: Some(target),
                            focus_owner: Some(target),
                        },
                    );
                }
            }
        }
    }

    pub fn cycle_bar_focus(&mut self) {
        self.focus_bar_slot((self.bar_focus + 1) % BAR_SLOTS);
    }

    /// Advance the mock playback clock.
    pub fn tick(&mut self) {
        if self.playing {
            self.position_secs += 1;
            if self.position_secs >= self.duration_secs {
                self.position_secs = self.duration_secs;
                self.playing = false;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::input::codes;

    use super::*;

    fn app() -> App {
        App::new(Config::default())
    }

    #[test]
    fn pressing_a_button_opens_its_menu_on_the_selected_entry() {
        let mut app = app();
        app.press(MenuId::Quality);

        assert_eq!(app.open_menu(), Some(MenuId::Quality));
        // config default "auto" is the first quality level
        assert_eq!(app.quality_menu.focused_child(), Some(0));
    }

    #[test]
    fn opening_one_menu_closes_the_other() {
        let mut app = app();
        app.press(MenuId::Captions);
        app.press(MenuId::Quality);
        assert!(!app.captions_button.borrow().is_pressed());
        assert!(app.quality_button.borrow().is_pressed());
    }

    #[test]
    fn menu_open_resyncs_to_a_preselected_entry() {
        let mut config = Config::default();
        config.quality = "720p".to_string();
        let mut app = App::new(config);

        app.press(MenuId::Quality);
        // auto, 1080p, 720p -> filtered index 2
        assert_eq!(app.quality_menu.focused_child(), Some(2));
    }

    #[test]
    fn accept_selects_the_focused_entry_and_closes_the_menu() {
        let mut app = app();
        app.press(MenuId::Quality);
        app.handle_code(codes::DOWN_ARROW); // auto -> 1080p
        app.handle_code(codes::ENTER);

        assert_eq!(app.open_menu(), None);
        assert_eq!(app.config.quality, "1080p");
        // focus returned to the trigger
        assert_eq!(
            app.focus_owner.get(),
            Some(app.quality_button.borrow().target())
        );
    }

    #[test]
    fn cancel_dismisses_without_changing_the_selection() {
        let mut app = app();
        app.press(MenuId::Captions);
        app.handle_code(codes::DOWN_ARROW);
        app.handle_code(codes::BACKSPACE);

        assert_eq!(app.open_menu(), None);
        assert_eq!(app.config.caption_track, "off");
    }

    #[test]
    fn tabbing_away_from_an_open_menu_dismisses_it() {
        let mut app = app();
        app.press(MenuId::Captions);
        app.handle_code(codes::DOWN_ARROW);

        app.focus_bar_slot(SLOT_QUALITY);
        assert!(!app.captions_button.borrow().is_pressed());
    }

    #[test]
    fn caption_settings_item_opens_the_panel_without_refocusing_the_trigger() {
        let mut app = app();
        app.press(MenuId::Captions);
        // title stripped: off, english, spanish, caption settings
        app.captions_menu.focus(Some(3));
        app.handle_code(codes::ENTER);

        assert!(app.caption_settings_open);
        assert_eq!(app.open_menu(), None);
        assert_ne!(
            app.focus_owner.get(),
            Some(app.captions_button.borrow().target())
        );
        // the choice itself did not change
        assert_eq!(app.config.caption_track, "off");
    }

    #[test]
    fn cancel_closes_the_caption_settings_panel() {
        let mut app = app();
        app.press(MenuId::Captions);
        app.captions_menu.focus(Some(3));
        app.handle_code(codes::ENTER);
        app.handle_code(codes::BACKSPACE);

        assert!(!app.caption_settings_open);
        assert_eq!(
            app.focus_owner.get(),
            Some(app.captions_button.borrow().target())
        );
    }

    #[test]
    fn gamepad_codes_navigate_only_when_the_capability_is_on() {
        let mut app = app();
        app.extended_pad = false;
        app.press(MenuId::Quality);
        app.handle_code(codes::GAMEPAD_DPAD_DOWN);
        assert_eq!(app.quality_menu.focused_child(), Some(0));

        app.extended_pad = true;
        app.handle_code(codes::GAMEPAD_DPAD_DOWN);
        assert_eq!(app.quality_menu.focused_child(), Some(1));
    }

    #[test]
    fn bar_navigation_moves_between_slots_and_clamps() {
        let mut app = app();
        assert_eq!(app.bar_focus, SLOT_PLAY);
        app.handle_code(codes::LEFT_ARROW);
        assert_eq!(app.bar_focus, SLOT_PLAY);
        app.handle_code(codes::RIGHT_ARROW);
        app.handle_code(codes::RIGHT_ARROW);
        app.handle_code(codes::RIGHT_ARROW);
        assert_eq!(app.bar_focus, SLOT_QUALITY);
    }

    #[test]
    fn accept_on_the_play_slot_toggles_playback() {
        let mut app = app();
        app.handle_code(codes::SPACE);
        assert!(app.playing);
        app.tick();
        assert_eq!(app.position_secs, 1);
        app.handle_code(codes::SPACE);
        assert!(!app.playing);
    }

    #[test]
    fn playback_stops_at_the_end() {
        let mut app = app();
        app.playing = true;
        app.position_secs = app.duration_secs - 1;
        app.tick();
        assert_eq!(app.position_secs, app.duration_secs);
        assert!(!app.playing);
        app.tick();
        assert_eq!(app.position_secs, app.duration_secs);
    }

    #[test]
    fn display_labels_capitalize_plain_words_only() {
        assert_eq!(display_label("off"), "Off");
        assert_eq!(display_label("english"), "English");
        assert_eq!(display_label("1080p"), "1080p");
        assert_eq!(display_label(""), "");
    }
}
