use std::io;

use log::{debug, error, info};
use termion::event::Key;

use crate::engine::level::{BlockReason, Level, MoveResult, PickUpResult};
use crate::error::errors::GameError;
use crate::map::position::Side;
use crate::settings::Settings;
use crate::ui::bindings::action_bindings::{build_default_action_bindings, Action, ActionKeyBindings};
use crate::ui::bindings::input_bindings::KeyBindings;
use crate::view::{FrameData, GameView, Popup};

const BLOCKED_MESSAGE : &str = "You can't go that way.";
const NOTHING_HERE_MESSAGE : &str = "There is nothing here to pick up.";
const EMPTY_INVENTORY_MESSAGE : &str = "Your inventory is empty.";
const CLOSE_POPUP_HINT : &str = "Press any key to close.";
const HELP_HINT : &str = "Press h for help.";

/*
    Owns the game state and the view, turning one key press at a time into a state change and a redraw
 */
pub struct GameEngine<V : GameView> {
    view : V,
    level : Level,
    settings : Settings,
    bindings : ActionKeyBindings,
    message : Option<String>,
    popup : Option<Popup>,
    game_running : bool
}

impl <V : GameView> GameEngine<V> {
    pub fn new(view: V, level: Level, settings: Settings) -> GameEngine<V> {
        GameEngine {
            view,
            level,
            settings,
            bindings: build_default_action_bindings(),
            message: None,
            popup: None,
            game_running: false
        }
    }

    pub fn get_level(&self) -> &Level {
        &self.level
    }

    pub fn get_view(&self) -> &V {
        &self.view
    }

    pub fn get_message(&self) -> Option<&String> {
        self.message.as_ref()
    }

    pub fn get_popup(&self) -> Option<&Popup> {
        self.popup.as_ref()
    }

    pub fn is_running(&self) -> bool {
        self.game_running
    }

    fn build_status(&self) -> Vec<String> {
        let position = self.level.get_player().get_position();
        let here = match self.level.item_under_player() {
            Some(item) => format!("Here: {}", item.describe()),
            None => String::from("Here: nothing")
        };
        let inventory_count = self.level.get_items().held_count();

        vec![
            format!("{} at {}, {}", self.level.get_player().get_name(), position.x, position.y),
            format!("Terrain: {}", self.level.terrain_under_player()),
            here,
            format!("Carrying: {} item(s), weight {}", inventory_count, self.level.total_inventory_weight()),
            self.message.clone().unwrap_or_else(|| String::from(HELP_HINT))
        ]
    }

    pub fn build_frame_data(&self) -> FrameData {
        let viewport = self.level.render_viewport(self.settings.view_width, self.settings.view_height, &self.settings.theme);
        FrameData {
            viewport,
            status: self.build_status(),
            popup: self.popup.clone()
        }
    }

    fn build_inventory_popup(&self) -> Popup {
        let inventory = self.level.get_inventory();
        let mut lines = Vec::new();
        if inventory.is_empty() {
            lines.push(String::from(EMPTY_INVENTORY_MESSAGE));
        } else {
            for (index, item) in inventory.iter().enumerate() {
                lines.push(format!("{}. {} ({}, {}) weight {}, value {}", index + 1, item.get_name(),
                                   item.item_type.name(), item.get_rarity(), item.get_weight(), item.get_value()));
                lines.push(format!("   {}", item.describe()));
            }
            lines.push(format!("Total weight: {}", self.level.total_inventory_weight()));
        }
        lines.push(String::from(CLOSE_POPUP_HINT));
        Popup { title: String::from("Inventory"), lines }
    }

    fn build_help_popup(&self) -> Popup {
        let mut lines = self.bindings.describe();
        lines.push(String::from(CLOSE_POPUP_HINT));
        Popup { title: String::from("Help"), lines }
    }

    fn handle_move(&mut self, side: Side) {
        self.message = match self.level.move_player(side) {
            MoveResult::Moved(_) => None,
            MoveResult::Blocked(BlockReason::OutOfBounds) => Some(String::from(BLOCKED_MESSAGE)),
            MoveResult::Blocked(BlockReason::Impassable(description)) => Some(format!("{} {}", BLOCKED_MESSAGE, description))
        };
    }

    fn handle_pick_up(&mut self) {
        self.message = match self.level.pick_up() {
            PickUpResult::PickedUp(item) => Some(format!("You picked up the {}.", item.get_name())),
            PickUpResult::NothingHere => Some(String::from(NOTHING_HERE_MESSAGE))
        };
    }

    pub fn handle_action(&mut self, action: Action) {
        debug!("Handling action: {:?}", action);
        match action {
            Action::Move(side) => self.handle_move(side),
            Action::PickUp => self.handle_pick_up(),
            Action::ShowInventory => self.popup = Some(self.build_inventory_popup()),
            Action::ShowHelp => self.popup = Some(self.build_help_popup()),
            Action::Quit => {
                info!("Quit requested");
                self.game_running = false;
            }
        }
    }

    /*
        Any key closes an open popup and is otherwise ignored.
        Unbound keys do nothing
     */
    pub fn handle_key(&mut self, key: Key) {
        if self.popup.is_some() {
            self.popup = None;
            return;
        }

        let action = self.bindings.get_input(key).copied();
        match action {
            Some(a) => self.handle_action(a),
            None => debug!("No action bound to key: {:?}", key)
        }
    }

    pub fn draw(&mut self) -> Result<(), GameError> {
        let frame_data = self.build_frame_data();
        self.view.draw(&frame_data)
    }

    fn game_loop<I>(&mut self, keys: I) -> Result<(), GameError>
        where I: IntoIterator<Item = Result<Key, io::Error>> {
        self.view.clear()?;
        self.draw()?;

        for key in keys {
            let key = key?;
            self.handle_key(key);
            if !self.game_running {
                break;
            }
            self.draw()?;
        }
        Ok(())
    }

    /*
        Draws, then reads and handles keys until Quit or the input runs out.
        The view is always finished, even when the loop fails part way
     */
    pub fn run<I>(&mut self, keys: I) -> Result<(), GameError>
        where I: IntoIterator<Item = Result<Key, io::Error>> {
        info!("Starting game loop");
        self.game_running = true;
        let result = self.game_loop(keys);
        self.game_running = false;

        let finished = self.view.finish();
        if let Err(e) = &result {
            error!("Game loop failed: {}", e);
        }
        info!("Game loop finished");
        result.and(finished)
    }
}
