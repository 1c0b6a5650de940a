use ratatui::style::{palette::tailwind, Color};
use strum::FromRepr;

use crate::types::contract::{HeaderField, PartyField};

pub const PALETTES: [tailwind::Palette; 4] = [
    tailwind::BLUE,
    tailwind::EMERALD,
    tailwind::INDIGO,
    tailwind::RED,
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CurrentScreen {
    Editing,
    Viewing,
}

// the focus order walks the document top to bottom: contract header first,
// then the nine requisite fields of the selected party
#[derive(Clone, Copy, Debug, PartialEq, Eq, FromRepr)]
pub enum FormField {
    ContractNumber,
    ContractDate,
    Name,
    Address,
    Inn,
    Kpp,
    Ogrn,
    Bank,
    Bik,
    AccountNumber,
    Director,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormSlot {
    Header(HeaderField),
    Party(PartyField),
}

impl FormField {
    pub fn previous(self) -> Self {
        let current = self as usize;
        let prev = current.saturating_sub(1);
        Self::from_repr(prev).unwrap_or(self)
    }
    pub fn next(self) -> Self {
        let current = self as usize;
        let next = current.saturating_add(1);
        Self::from_repr(next).unwrap_or(self)
    }

    pub fn slot(self) -> FormSlot {
        match self {
            FormField::ContractNumber => FormSlot::Header(HeaderField::Number),
            FormField::ContractDate => FormSlot::Header(HeaderField::Date),
            FormField::Name => FormSlot::Party(PartyField::Name),
            FormField::Address => FormSlot::Party(PartyField::Address),
            FormField::Inn => FormSlot::Party(PartyField::Inn),
            FormField::Kpp => FormSlot::Party(PartyField::Kpp),
            FormField::Ogrn => FormSlot::Party(PartyField::Ogrn),
            FormField::Bank => FormSlot::Party(PartyField::Bank),
            FormField::Bik => FormSlot::Party(PartyField::Bik),
            FormField::AccountNumber => FormSlot::Party(PartyField::AccountNumber),
            FormField::Director => FormSlot::Party(PartyField::Director),
        }
    }
}

pub struct FormColors {
    pub block_bg: Color,
    pub heading_fg: Color,
    pub label_fg: Color,
    pub value_fg: Color,
    pub focused_fg: Color,
    pub muted_fg: Color,
}

impl FormColors {
    pub const fn new(color: &tailwind::Palette) -> Self {
        Self {
            block_bg: tailwind::SLATE.c900,
            heading_fg: tailwind::SLATE.c100,
            label_fg: tailwind::SLATE.c400,
            value_fg: tailwind::SLATE.c200,
            focused_fg: color.c400,
            muted_fg: tailwind::SLATE.c500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_cycling_saturates_at_both_ends() {
        assert_eq!(FormField::ContractNumber.previous(), FormField::ContractNumber);
        assert_eq!(FormField::Director.next(), FormField::Director);
        assert_eq!(FormField::ContractNumber.next(), FormField::ContractDate);
        assert_eq!(FormField::Name.previous(), FormField::ContractDate);
    }

    #[test]
    fn every_field_resolves_to_a_slot() {
        let mut field = FormField::ContractNumber;
        loop {
            match field.slot() {
                FormSlot::Header(_) | FormSlot::Party(_) => {}
            }
            let next = field.next();
            if next == field {
                break;
            }
            field = next;
        }
        assert_eq!(field, FormField::Director);
    }
}
