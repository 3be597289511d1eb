//! Curated list of popular market names

use devicename_types::Device;
use std::collections::HashSet;

/// Market names that make it into `popular-devices.json` and the static table
pub const POPULAR_DEVICES: &[&str] = &[
    // Acer
    "Iconia Tab 10",
    "Iconia Tab 7",
    "Iconia Tab 8",
    "Liquid",
    "Liquid E3",
    "Liquid Jade",
    "Liquid Jade S",
    "Liquid S3",
    "Liquid Z5",
    // Asus
    "MeMO Pad 7",
    "Nexus 7 (2012)",
    "Nexus 7 (2013)",
    "ZenFone 5",
    // Dell
    "Venue 7",
    "Venue 8",
    // Google
    "Pixel",
    "Pixel XL",
    "Pixel C",
    // HTC
    "HTC One",
    "HTC One (E8)",
    "HTC One (M8)",
    "HTC One A9",
    "HTC One M9",
    "HTC One S",
    "Nexus 9",
    // Huawei
    "Honor3",
    "Mate S",
    "Nexus 6P",
    // LGE
    "LG G Flex",
    "LG G Flex2",
    "LG G2",
    "LG G3",
    "LG G4",
    "LG Leon 4G LTE",
    "LG M1",
    "LG Optimus 3D",
    "LG Optimus G",
    "LG Optimus G Pro",
    "LG Optimus L9",
    "Nexus 4",
    "Nexus 5",
    "Nexus 5X",
    "Optimus 2X",
    "Optimus 3D",
    "Optimus 3D MAX",
    "Optimus Black",
    "Optimus L5",
    "Optimus LTE",
    "Optimus One",
    "Optimus Pad",
    // Lenovo
    "Lenovo A7-30GC",
    // Motorola
    "DROID Turbo",
    "MOTO E",
    "MOTO G",
    "Moto G (1st Gen)",
    "Moto G (2nd Gen)",
    "MOTO X",
    "Moto X Style",
    "Nexus 6",
    "XOOM",
    // OnePlus
    "OnePlus",
    "OnePlus One",
    "OnePlus2",
    // Samsung
    "Galaxy A3",
    "Galaxy A5",
    "Galaxy A8",
    "Galaxy Ace 4",
    "Galaxy Ace Duos",
    "Galaxy Ace Plus",
    "Galaxy Ace Style",
    "Galaxy Ace4",
    "Galaxy Alpha",
    "Galaxy Core Prime",
    "Galaxy Core2",
    "Galaxy E5",
    "Galaxy E7",
    "Galaxy Fame",
    "Galaxy Go Prime",
    "Galaxy Grand Neo",
    "Galaxy Grand Prime",
    "Galaxy Grand2",
    "Galaxy J1",
    "Galaxy J1 Ace",
    "Galaxy J5",
    "Galaxy J7",
    "Galaxy Nexus",
    "Galaxy Note 10.1",
    "Galaxy Note Edge",
    "Galaxy Note Pro 12.2",
    "Galaxy Note2",
    "Galaxy Note3",
    "Galaxy Note3 Neo",
    "Galaxy Note4",
    "Galaxy Note5",
    "Galaxy Note7",
    "Galaxy On5",
    "Galaxy On7",
    "Galaxy S Duos",
    "Galaxy S Duos2",
    "Galaxy S Duos3",
    "Galaxy S2",
    "Galaxy S3",
    "Galaxy S3 Mini",
    "Galaxy S3 Neo",
    "Galaxy S4",
    "Galaxy S4 Mini",
    "Galaxy S5",
    "Galaxy S5 Neo",
    "Galaxy S6",
    "Galaxy S6 Edge",
    "Galaxy S6 Edge+",
    "Galaxy S7",
    "Galaxy S7 Edge",
    "Galaxy Tab 10.1",
    "Galaxy Tab 7.0 Plus",
    "Galaxy Tab E 8.0",
    "Galaxy Tab E 9.6",
    "Galaxy Tab4 7.0",
    "Galaxy View",
    "Galaxy Y",
    "Nexus 10",
    // Sony and Sony Ericsson
    "Xperia E1 dual",
    "Xperia E3",
    "Xperia M5",
    "Xperia M5 Dual",
    "Xperia S",
    "Xperia T2 Ultra",
    "Xperia Tablet S",
    "Xperia Tablet Z",
    "Xperia Z2",
    "Xperia Z3",
    "Xperia Z4",
    "Xperia Z5 Compact",
];

/// Records whose market name is in `names`, ignoring case
///
/// Output follows the order of `names`, then corpus order within a name. A
/// name listed twice contributes its records once.
pub fn select_popular<S: AsRef<str>>(devices: &[Device], names: &[S]) -> Vec<Device> {
    let mut seen = HashSet::new();
    let mut popular = Vec::new();
    for name in names {
        let name = name.as_ref();
        if !seen.insert(name.to_lowercase()) {
            continue;
        }
        popular.extend(
            devices
                .iter()
                .filter(|device| device.market_name.eq_ignore_ascii_case(name))
                .cloned(),
        );
    }
    popular
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_popular_order_and_case() {
        let devices = vec![
            Device::new(Some("Samsung"), "galaxy s6", "zeroflte", "SM-G920F"),
            Device::new(Some("Motorola"), "Moto X Style", "clark", "XT1572"),
            Device::new(Some("Acme"), "Obscure", "obscure", "O1"),
            Device::new(Some("Samsung"), "Galaxy S6", "zerofltetmo", "SM-G920T"),
        ];
        let popular = select_popular(&devices, &["Moto X Style", "Galaxy S6", "galaxy s6"]);
        let codenames: Vec<_> = popular.iter().map(|d| d.codename.as_str()).collect();
        assert_eq!(codenames, vec!["clark", "zeroflte", "zerofltetmo"]);
    }

    #[test]
    fn test_builtin_list_has_no_duplicates() {
        let mut seen = HashSet::new();
        for name in POPULAR_DEVICES {
            assert!(seen.insert(name.to_lowercase()), "duplicate: {}", name);
        }
    }
}
