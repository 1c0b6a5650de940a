use log::{debug, info, warn};

use crate::document;
use crate::print::PrintSpooler;
use crate::types::contract::{ContractRecord, HeaderField, PartyField, Side};

use super::screen::{CurrentScreen, FormColors, FormField, FormSlot, PALETTES};

pub struct App {
    pub record: ContractRecord,
    pub current_screen: CurrentScreen,
    pub selected_side: Side,
    pub selected_field: FormField,
    pub form_colors: FormColors,
    pub prints_submitted: usize,
    pub spooler: Box<dyn PrintSpooler>,
}

impl App {
    pub fn new(spooler: Box<dyn PrintSpooler>) -> App {
        App {
            record: ContractRecord::placeholder(),
            current_screen: CurrentScreen::Editing,
            selected_side: Side::Supplier,
            selected_field: FormField::ContractNumber,
            form_colors: FormColors::new(&PALETTES[1]),
            prints_submitted: 0,
            spooler,
        }
    }

    pub fn set_field(&mut self, field: HeaderField, value: &str) {
        self.record = self.record.set_header(field, value);
    }

    pub fn update_field(&mut self, side: Side, field: PartyField, value: &str) {
        self.record = self.record.update_party(side, field, value);
    }

    pub fn toggle_editing(&mut self) {
        self.current_screen = match self.current_screen {
            CurrentScreen::Editing => CurrentScreen::Viewing,
            CurrentScreen::Viewing => CurrentScreen::Editing,
        };
        debug!("switched to {:?} screen", self.current_screen);
    }

    // hands the rendered document to the platform spooler; the platform owns
    // everything past that point, so a refusal is logged and swallowed
    pub fn trigger_print(&mut self) {
        let document = document::render(&self.record);
        self.prints_submitted += 1;
        info!(
            "print job {} for contract {} handed to the spooler",
            self.prints_submitted, self.record.contract_number
        );
        if let Err(error) = self.spooler.spool(&document) {
            warn!("print spooler unavailable: {}", error);
        }
    }

    pub fn focused_value(&self) -> &str {
        match self.selected_field.slot() {
            FormSlot::Header(field) => self.record.header(field),
            FormSlot::Party(field) => self.record.party(self.selected_side).get(field),
        }
    }

    pub fn push_input(&mut self, value: char) {
        let mut text = self.focused_value().to_string();
        text.push(value);
        self.replace_focused(text);
    }

    pub fn pop_input(&mut self) {
        let mut text = self.focused_value().to_string();
        text.pop();
        self.replace_focused(text);
    }

    fn replace_focused(&mut self, value: String) {
        match self.selected_field.slot() {
            FormSlot::Header(field) => self.set_field(field, &value),
            FormSlot::Party(field) => self.update_field(self.selected_side, field, &value),
        }
    }

    pub fn advance_field(&mut self) {
        self.selected_field = self.selected_field.next();
    }

    pub fn retreat_field(&mut self) {
        self.selected_field = self.selected_field.previous();
    }

    pub fn advance_side(&mut self) {
        self.selected_side = self.selected_side.next();
    }

    pub fn retreat_side(&mut self) {
        self.selected_side = self.selected_side.previous();
    }
}
