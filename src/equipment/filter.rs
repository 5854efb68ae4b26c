use super::model::Equipment;

/// Date layout used when matching the registration date.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Keep the records where any text field contains `search_term`, ignoring case.
///
/// A blank term returns the records unchanged. Absent optional fields never match.
pub fn filter_equipment(search_term: &str, records: Vec<Equipment>) -> Vec<Equipment> {
    if search_term.trim().is_empty() {
        return records;
    }

    let needle = search_term.to_lowercase();
    records
        .into_iter()
        .filter(|equipment| matches(equipment, &needle))
        .collect()
}

fn matches(equipment: &Equipment, needle: &str) -> bool {
    let contains = |value: &str| value.to_lowercase().contains(needle);

    let date = equipment.date_register.format(DATE_FORMAT).to_string();
    let always_present = [
        equipment.id.to_string(),
        date,
        equipment.state.as_str().to_string(),
    ];
    if always_present.iter().any(|value| contains(value.as_str())) {
        return true;
    }

    [
        Some(&equipment.customer),
        equipment.user.as_ref(),
        Some(&equipment.category),
        Some(&equipment.brand),
        equipment.model.as_ref(),
        equipment.serial_number.as_ref(),
        equipment.processor.as_ref(),
        equipment.memory_ram.as_ref(),
        equipment.storage.as_ref(),
        equipment.operating_system.as_ref(),
        equipment.note.as_ref(),
        Some(&equipment.responsible),
    ]
    .into_iter()
    .flatten()
    .any(|value| contains(value.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::EquipmentState;
    use chrono::NaiveDate;

    fn records() -> Vec<Equipment> {
        let date = NaiveDate::from_ymd_opt(2025, 8, 30).unwrap();
        let mut first = Equipment::new(EquipmentState::Broken, "RuIIuR", "Portátil", "Lenovo", "Daniel Marques")
            .with_date_register(date)
            .with_serial_number("PF3XK2");
        first.id = 7;
        let mut second = Equipment::new(EquipmentState::Repaired, "AFG", "Monitor", "Dell", "Miguel Lemos")
            .with_date_register(date.succ_opt().unwrap())
            .with_note("Ecrã partido");
        second.id = 12;
        vec![first, second]
    }

    #[test]
    fn test_blank_term_is_identity() {
        assert_eq!(filter_equipment("", records()), records());
        assert_eq!(filter_equipment("   ", records()), records());
    }

    #[test]
    fn test_matches_customer_ignoring_case() {
        let found = filter_equipment("ruiiur", records());
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].customer, "RuIIuR");
    }

    #[test]
    fn test_matches_id_date_and_state() {
        assert_eq!(filter_equipment("12", records())[0].id, 12);
        assert_eq!(filter_equipment("30/08/2025", records())[0].id, 7);
        assert_eq!(filter_equipment("reparado", records())[0].id, 12);
    }

    #[test]
    fn test_matches_optional_fields_and_skips_absent_ones() {
        assert_eq!(filter_equipment("pf3x", records())[0].id, 7);
        assert_eq!(filter_equipment("ECRÃ", records())[0].id, 12);
        assert!(filter_equipment("windows", records()).is_empty());
    }
}
