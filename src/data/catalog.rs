//! Compiled-in catalog of national helplines

use std::collections::HashSet;

use crate::models::ServiceRecord;

pub const SERVICES: &[ServiceRecord] = &[
    ServiceRecord {
        id: 1,
        icon: "emergency.png",
        name: "National Emergency Number",
        short_name: "National Emergency",
        number: "999",
        category: "All",
    },
    ServiceRecord {
        id: 2,
        icon: "police.png",
        name: "Police Helpline Number",
        short_name: "Police",
        number: "999",
        category: "Police",
    },
    ServiceRecord {
        id: 3,
        icon: "fire-service.png",
        name: "Fire Service Number",
        short_name: "Fire Service",
        number: "999",
        category: "Fire",
    },
    ServiceRecord {
        id: 4,
        icon: "ambulance.png",
        name: "Ambulance Service",
        short_name: "Ambulance",
        number: "1994-999999",
        category: "Health",
    },
    ServiceRecord {
        id: 5,
        icon: "women.png",
        name: "Women & Child Helpline",
        short_name: "Women & Child Helpline",
        number: "109",
        category: "Help",
    },
    ServiceRecord {
        id: 6,
        icon: "stop-corruption.png",
        name: "Anti-Corruption Helpline",
        short_name: "Anti-Corruption",
        number: "106",
        category: "Govt.",
    },
    ServiceRecord {
        id: 7,
        icon: "eco-house.png",
        name: "Electricity Helpline",
        short_name: "Electricity Outage",
        number: "16216",
        category: "Electricity",
    },
    ServiceRecord {
        id: 8,
        icon: "brac.png",
        name: "Brac Helpline",
        short_name: "Brac",
        number: "16445",
        category: "NGO",
    },
    ServiceRecord {
        id: 9,
        icon: "Bangladesh-Railway.png",
        name: "Bangladesh Railway Helpline",
        short_name: "Bangladesh Railway",
        number: "163",
        category: "Travel",
    },
];

/// Look up a service by id
pub fn find(id: u32) -> Option<&'static ServiceRecord> {
    SERVICES.iter().find(|service| service.id == id)
}

/// Return the first id that appears more than once, if any
pub fn duplicate_id(services: &[ServiceRecord]) -> Option<u32> {
    let mut seen = HashSet::new();
    services
        .iter()
        .map(|service| service.id)
        .find(|id| !seen.insert(*id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_ids_are_unique() {
        assert_eq!(duplicate_id(SERVICES), None);
    }

    #[test]
    fn test_every_id_resolves() {
        for service in SERVICES {
            assert_eq!(find(service.id), Some(service));
        }
        assert!(find(0).is_none());
        assert!(find(42).is_none());
    }

    #[test]
    fn test_duplicate_id_detected() {
        let services = [SERVICES[0], SERVICES[1], SERVICES[0]];
        assert_eq!(duplicate_id(&services), Some(1));
    }

    #[test]
    fn test_numbers_keep_formatting() {
        let ambulance = find(4).unwrap();
        assert_eq!(ambulance.number, "1994-999999");
        assert_eq!(ambulance.category, "Health");
    }
}
