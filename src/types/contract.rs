use chrono::Local;
use strum::{Display, EnumIter, EnumString, FromRepr};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumIter, EnumString, FromRepr)]
pub enum Side {
    #[strum(to_string = "Supplier")]
    Supplier,
    #[strum(to_string = "Customer")]
    Customer,
}

impl Side {
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
    pub fn other(self) -> Self {
        match self {
            Side::Supplier => Side::Customer,
            Side::Customer => Side::Supplier,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumIter, EnumString, FromRepr)]
pub enum PartyField {
    #[strum(to_string = "Name")]
    Name,
    #[strum(to_string = "Address")]
    Address,
    #[strum(to_string = "INN")]
    Inn,
    #[strum(to_string = "KPP")]
    Kpp,
    #[strum(to_string = "OGRN")]
    Ogrn,
    #[strum(to_string = "Bank")]
    Bank,
    #[strum(to_string = "BIK")]
    Bik,
    #[strum(to_string = "Account No.")]
    AccountNumber,
    #[strum(to_string = "Director")]
    Director,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
pub enum HeaderField {
    #[strum(to_string = "Contract No.")]
    Number,
    #[strum(to_string = "Contract Date")]
    Date,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Party {
    pub name: String,
    pub address: String,
    pub inn: String,
    pub kpp: String,
    pub ogrn: String,
    pub bank: String,
    pub bik: String,
    pub account_number: String,
    pub director: String,
}

impl Party {
    pub fn get(&self, field: PartyField) -> &str {
        match field {
            PartyField::Name => &self.name,
            PartyField::Address => &self.address,
            PartyField::Inn => &self.inn,
            PartyField::Kpp => &self.kpp,
            PartyField::Ogrn => &self.ogrn,
            PartyField::Bank => &self.bank,
            PartyField::Bik => &self.bik,
            PartyField::AccountNumber => &self.account_number,
            PartyField::Director => &self.director,
        }
    }

    pub fn set(&mut self, field: PartyField, value: String) {
        match field {
            PartyField::Name => self.name = value,
            PartyField::Address => self.address = value,
            PartyField::Inn => self.inn = value,
            PartyField::Kpp => self.kpp = value,
            PartyField::Ogrn => self.ogrn = value,
            PartyField::Bank => self.bank = value,
            PartyField::Bik => self.bik = value,
            PartyField::AccountNumber => self.account_number = value,
            PartyField::Director => self.director = value,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContractRecord {
    pub contract_number: String,
    pub contract_date: String,
    pub supplier: Party,
    pub customer: Party,
}

impl ContractRecord {
    pub fn placeholder() -> ContractRecord {
        ContractRecord {
            contract_number: "001/2025".to_string(),
            contract_date: Local::now().format("%d.%m.%Y").to_string(),
            supplier: Party {
                name: "Postavshchik LLC".to_string(),
                address: "Moscow, Primernaya st. 1".to_string(),
                inn: "1234567890".to_string(),
                kpp: "123456789".to_string(),
                ogrn: "1234567890123".to_string(),
                bank: "Bank PJSC".to_string(),
                bik: "044525225".to_string(),
                account_number: "40702810000000000000".to_string(),
                director: "Ivanov I.I.".to_string(),
            },
            customer: Party {
                name: "Zakazchik LLC".to_string(),
                address: "St. Petersburg, Obraztsovaya st. 2".to_string(),
                inn: "0987654321".to_string(),
                kpp: "987654321".to_string(),
                ogrn: "3210987654321".to_string(),
                bank: "Drugoy Bank PJSC".to_string(),
                bik: "044030653".to_string(),
                account_number: "40702810111111111111".to_string(),
                director: "Petrov P.P.".to_string(),
            },
        }
    }

    pub fn party(&self, side: Side) -> &Party {
        match side {
            Side::Supplier => &self.supplier,
            Side::Customer => &self.customer,
        }
    }

    pub fn header(&self, field: HeaderField) -> &str {
        match field {
            HeaderField::Number => &self.contract_number,
            HeaderField::Date => &self.contract_date,
        }
    }

    // updates replace the whole record so a keystroke can never touch a
    // sibling field in place
    pub fn set_header(&self, field: HeaderField, value: &str) -> ContractRecord {
        let mut next = self.clone();
        match field {
            HeaderField::Number => next.contract_number = value.to_string(),
            HeaderField::Date => next.contract_date = value.to_string(),
        }
        next
    }

    pub fn update_party(&self, side: Side, field: PartyField, value: &str) -> ContractRecord {
        let mut next = self.clone();
        match side {
            Side::Supplier => next.supplier.set(field, value.to_string()),
            Side::Customer => next.customer.set(field, value.to_string()),
        }
        next
    }
}
