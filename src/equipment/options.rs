// Predefined pick lists offered when registering equipment.
//
// These are suggestions for forms and the CLI; the store accepts any value
// that passes `Equipment::validate`.

use crate::lifecycle::EquipmentState;

pub const CUSTOMERS: &[&str] = &[
    "RuIIuR",
    "AFG",
    "ContruMadeira",
    "Acail",
    "Facal",
    "EcoFiltra",
    "JMM",
    "Curvar",
];

pub const CATEGORIES: &[&str] = &[
    "Torre",
    "Portátil",
    "Monitor",
    "Impressora",
    "Servidor",
    "Router",
    "Switch",
    "Tablet",
    "Smartphone",
    "NAS",
    "PDA",
];

pub const BRANDS: &[&str] = &["Lenovo", "Dell", "HP", "Samsung", "Toshiba"];

pub const RESPONSIBLE: &[&str] = &["Daniel Marques", "Rúben Marques", "Miguel Lemos"];

pub const STATES: [EquipmentState; 5] = EquipmentState::ALL;

/// Case-insensitive lookup of a value in one of the pick lists, returning the
/// list's own spelling.
pub fn canonical<'a>(options: &[&'a str], value: &str) -> Option<&'a str> {
    let wanted = value.trim().to_lowercase();
    options
        .iter()
        .copied()
        .find(|option| option.to_lowercase() == wanted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_lookup() {
        assert_eq!(canonical(CUSTOMERS, "ruiiur"), Some("RuIIuR"));
        assert_eq!(canonical(CATEGORIES, " PORTÁTIL "), Some("Portátil"));
        assert_eq!(canonical(BRANDS, "Apple"), None);
    }
}
