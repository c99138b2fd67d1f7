//! Addresses

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

/// Countries offered in the checkout country selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Country {
    /// United Kingdom
    #[default]
    GB,
    /// United States
    US,
    /// Canada
    CA,
    /// Australia
    AU,
    /// Germany
    DE,
    /// France
    FR,
    /// Italy
    IT,
    /// Spain
    ES,
    /// Netherlands
    NL,
    /// Belgium
    BE,
    /// Switzerland
    CH,
    /// Austria
    AT,
    /// Ireland
    IE,
    /// Norway
    NO,
    /// Sweden
    SE,
    /// Denmark
    DK,
    /// Finland
    FI,
    /// Japan
    JP,
}

impl Country {
    /// Every selectable country, in selector order.
    pub const ALL: [Country; 18] = [
        Country::GB,
        Country::US,
        Country::CA,
        Country::AU,
        Country::DE,
        Country::FR,
        Country::IT,
        Country::ES,
        Country::NL,
        Country::BE,
        Country::CH,
        Country::AT,
        Country::IE,
        Country::NO,
        Country::SE,
        Country::DK,
        Country::FI,
        Country::JP,
    ];

    /// ISO 3166-1 alpha-2 code.
    pub const fn code(self) -> &'static str {
        match self {
            Country::GB => "GB",
            Country::US => "US",
            Country::CA => "CA",
            Country::AU => "AU",
            Country::DE => "DE",
            Country::FR => "FR",
            Country::IT => "IT",
            Country::ES => "ES",
            Country::NL => "NL",
            Country::BE => "BE",
            Country::CH => "CH",
            Country::AT => "AT",
            Country::IE => "IE",
            Country::NO => "NO",
            Country::SE => "SE",
            Country::DK => "DK",
            Country::FI => "FI",
            Country::JP => "JP",
        }
    }

    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            Country::GB => "United Kingdom",
            Country::US => "United States",
            Country::CA => "Canada",
            Country::AU => "Australia",
            Country::DE => "Germany",
            Country::FR => "France",
            Country::IT => "Italy",
            Country::ES => "Spain",
            Country::NL => "Netherlands",
            Country::BE => "Belgium",
            Country::CH => "Switzerland",
            Country::AT => "Austria",
            Country::IE => "Ireland",
            Country::NO => "Norway",
            Country::SE => "Sweden",
            Country::DK => "Denmark",
            Country::FI => "Finland",
            Country::JP => "Japan",
        }
    }

    /// Look up a selectable country by its alpha-2 code.
    pub fn from_code(code: &str) -> Option<Self> {
        Country::ALL
            .into_iter()
            .find(|country| country.code().eq_ignore_ascii_case(code.trim()))
    }
}

impl Display for Country {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.name())
    }
}

/// Editable address fields, excluding the country which is chosen from [`Country`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AddressField {
    /// First name
    FirstName,
    /// Last name
    LastName,
    /// Company (optional)
    Company,
    /// Address line 1
    AddressLine1,
    /// Address line 2 (optional)
    AddressLine2,
    /// City
    City,
    /// State or province (optional)
    State,
    /// Postal code
    PostalCode,
    /// Phone (optional)
    Phone,
}

/// A postal address as entered on the checkout form.
///
/// Optional fields are empty strings when not filled in. `country` holds a raw alpha-2 code: the
/// form only offers [`Country`] values, but codes arriving from elsewhere are carried as-is.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    /// First name
    pub first_name: String,

    /// Last name
    pub last_name: String,

    /// Company
    pub company: String,

    /// Address line 1
    pub address_line1: String,

    /// Address line 2
    pub address_line2: String,

    /// City
    pub city: String,

    /// State or province
    pub state: String,

    /// Postal code
    pub postal_code: String,

    /// Country code
    pub country: String,

    /// Phone
    pub phone: String,
}

impl Address {
    /// An empty address in the given country.
    pub fn new(country: Country) -> Self {
        Self {
            country: country.code().to_string(),
            ..Self::default()
        }
    }

    /// Set one field.
    pub fn set(&mut self, field: AddressField, value: impl Into<String>) {
        let value = value.into();

        match field {
            AddressField::FirstName => self.first_name = value,
            AddressField::LastName => self.last_name = value,
            AddressField::Company => self.company = value,
            AddressField::AddressLine1 => self.address_line1 = value,
            AddressField::AddressLine2 => self.address_line2 = value,
            AddressField::City => self.city = value,
            AddressField::State => self.state = value,
            AddressField::PostalCode => self.postal_code = value,
            AddressField::Phone => self.phone = value,
        }
    }

    /// Read one field.
    pub fn get(&self, field: AddressField) -> &str {
        match field {
            AddressField::FirstName => &self.first_name,
            AddressField::LastName => &self.last_name,
            AddressField::Company => &self.company,
            AddressField::AddressLine1 => &self.address_line1,
            AddressField::AddressLine2 => &self.address_line2,
            AddressField::City => &self.city,
            AddressField::State => &self.state,
            AddressField::PostalCode => &self.postal_code,
            AddressField::Phone => &self.phone,
        }
    }

    /// The selectable country matching `country`, if it is one of the offered codes.
    pub fn selected_country(&self) -> Option<Country> {
        Country::from_code(&self.country)
    }
}
