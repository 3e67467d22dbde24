//! Reference data of the periodic table: symbol, name, atomic number,
//! standard atomic mass (g/mol) and category for all 118 elements.
//!
//! The table is a `const` slice, so it is read-only and shared by every caller.
use serde::Serialize;

/// category of an element; used for display only, never by the balancing logic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ElementCategory {
    Nonmetal,
    NobleGas,
    AlkaliMetal,
    AlkalineEarthMetal,
    Metalloid,
    Halogen,
    PostTransitionMetal,
    TransitionMetal,
    Lanthanide,
    Actinide,
    Unknown,
}

impl ElementCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementCategory::Nonmetal => "nonmetal",
            ElementCategory::NobleGas => "noble gas",
            ElementCategory::AlkaliMetal => "alkali metal",
            ElementCategory::AlkalineEarthMetal => "alkaline earth metal",
            ElementCategory::Metalloid => "metalloid",
            ElementCategory::Halogen => "halogen",
            ElementCategory::PostTransitionMetal => "post-transition metal",
            ElementCategory::TransitionMetal => "transition metal",
            ElementCategory::Lanthanide => "lanthanide",
            ElementCategory::Actinide => "actinide",
            ElementCategory::Unknown => "unknown",
        }
    }
}

// Define a struct to hold element data
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    pub symbol: &'static str,
    pub name: &'static str,
    pub atomic_number: u8,
    pub atomic_mass: f64,
    pub category: ElementCategory,
}

// Define a list of elements and their atomic masses
pub const ELEMENTS: &[Element] = &[
    Element {
        symbol: "H",
        name: "Hydrogen",
        atomic_number: 1,
        atomic_mass: 1.008,
        category: ElementCategory::Nonmetal,
    },
    Element {
        symbol: "He",
        name: "Helium",
        atomic_number: 2,
        atomic_mass: 4.0026,
        category: ElementCategory::NobleGas,
    },
    Element {
        symbol: "Li",
        name: "Lithium",
        atomic_number: 3,
        atomic_mass: 6.94,
        category: ElementCategory::AlkaliMetal,
    },
    Element {
        symbol: "Be",
        name: "Beryllium",
        atomic_number: 4,
        atomic_mass: 9.0122,
        category: ElementCategory::AlkalineEarthMetal,
    },
    Element {
        symbol: "B",
        name: "Boron",
        atomic_number: 5,
        atomic_mass: 10.81,
        category: ElementCategory::Metalloid,
    },
    Element {
        symbol: "C",
        name: "Carbon",
        atomic_number: 6,
        atomic_mass: 12.011,
        category: ElementCategory::Nonmetal,
    },
    Element {
        symbol: "N",
        name: "Nitrogen",
        atomic_number: 7,
        atomic_mass: 14.007,
        category: ElementCategory::Nonmetal,
    },
    Element {
        symbol: "O",
        name: "Oxygen",
        atomic_number: 8,
        atomic_mass: 15.999,
        category: ElementCategory::Nonmetal,
    },
    Element {
        symbol: "F",
        name: "Fluorine",
        atomic_number: 9,
        atomic_mass: 18.998,
        category: ElementCategory::Halogen,
    },
    Element {
        symbol: "Ne",
        name: "Neon",
        atomic_number: 10,
        atomic_mass: 20.180,
        category: ElementCategory::NobleGas,
    },
    Element {
        symbol: "Na",
        name: "Sodium",
        atomic_number: 11,
        atomic_mass: 22.990,
        category: ElementCategory::AlkaliMetal,
    },
    Element {
        symbol: "Mg",
        name: "Magnesium",
        atomic_number: 12,
        atomic_mass: 24.305,
        category: ElementCategory::AlkalineEarthMetal,
    },
    Element {
        symbol: "Al",
        name: "Aluminium",
        atomic_number: 13,
        atomic_mass: 26.982,
        category: ElementCategory::PostTransitionMetal,
    },
    Element {
        symbol: "Si",
        name: "Silicon",
        atomic_number: 14,
        atomic_mass: 28.085,
        category: ElementCategory::Metalloid,
    },
    Element {
        symbol: "P",
        name: "Phosphorus",
        atomic_number: 15,
        atomic_mass: 30.974,
        category: ElementCategory::Nonmetal,
    },
    Element {
        symbol: "S",
        name: "Sulfur",
        atomic_number: 16,
        atomic_mass: 32.06,
        category: ElementCategory::Nonmetal,
    },
    Element {
        symbol: "Cl",
        name: "Chlorine",
        atomic_number: 17,
        atomic_mass: 35.45,
        category: ElementCategory::Halogen,
    },
    Element {
        symbol: "Ar",
        name: "Argon",
        atomic_number: 18,
        atomic_mass: 39.948,
        category: ElementCategory::NobleGas,
    },
    Element {
        symbol: "K",
        name: "Potassium",
        atomic_number: 19,
        atomic_mass: 39.098,
        category: ElementCategory::AlkaliMetal,
    },
    Element {
        symbol: "Ca",
        name: "Calcium",
        atomic_number: 20,
        atomic_mass: 40.078,
        category: ElementCategory::AlkalineEarthMetal,
    },
    Element {
        symbol: "Sc",
        name: "Scandium",
        atomic_number: 21,
        atomic_mass: 44.956,
        category: ElementCategory::TransitionMetal,
    },
    Element {
        symbol: "Ti",
        name: "Titanium",
        atomic_number: 22,
        atomic_mass: 47.867,
        category: ElementCategory::TransitionMetal,
    },
    Element {
        symbol: "V",
        name: "Vanadium",
        atomic_number: 23,
        atomic_mass: 50.942,
        category: ElementCategory::TransitionMetal,
    },
    Element {
        symbol: "Cr",
        name: "Chromium",
        atomic_number: 24,
        atomic_mass: 51.996,
        category: ElementCategory::TransitionMetal,
    },
    Element {
        symbol: "Mn",
        name: "Manganese",
        atomic_number: 25,
        atomic_mass: 54.938,
        category: ElementCategory::TransitionMetal,
    },
    Element {
        symbol: "Fe",
        name: "Iron",
        atomic_number: 26,
        atomic_mass: 55.845,
        category: ElementCategory::TransitionMetal,
    },
    Element {
        symbol: "Co",
        name: "Cobalt",
        atomic_number: 27,
        atomic_mass: 58.933,
        category: ElementCategory::TransitionMetal,
    },
    Element {
        symbol: "Ni",
        name: "Nickel",
        atomic_number: 28,
        atomic_mass: 58.693,
        category: ElementCategory::TransitionMetal,
    },
    Element {
        symbol: "Cu",
        name: "Copper",
        atomic_number: 29,
        atomic_mass: 63.546,
        category: ElementCategory::TransitionMetal,
    },
    Element {
        symbol: "Zn",
        name: "Zinc",
        atomic_number: 30,
        atomic_mass: 65.38,
        category: ElementCategory::TransitionMetal,
    },
    Element {
        symbol: "Ga",
        name: "Gallium",
        atomic_number: 31,
        atomic_mass: 69.723,
        category: ElementCategory::PostTransitionMetal,
    },
    Element {
        symbol: "Ge",
        name: "Germanium",
        atomic_number: 32,
        atomic_mass: 72.630,
        category: ElementCategory::Metalloid,
    },
    Element {
        symbol: "As",
        name: "Arsenic",
        atomic_number: 33,
        atomic_mass: 74.922,
        category: ElementCategory::Metalloid,
    },
    Element {
        symbol: "Se",
        name: "Selenium",
        atomic_number: 34,
        atomic_mass: 78.971,
        category: ElementCategory::Nonmetal,
    },
    Element {
        symbol: "Br",
        name: "Bromine",
        atomic_number: 35,
        atomic_mass: 79.904,
        category: ElementCategory::Halogen,
    },
    Element {
        symbol: "Kr",
        name: "Krypton",
        atomic_number: 36,
        atomic_mass: 83.798,
        category: ElementCategory::NobleGas,
    },
    Element {
        symbol: "Rb",
        name: "Rubidium",
        atomic_number: 37,
        atomic_mass: 85.468,
        category: ElementCategory::AlkaliMetal,
    },
    Element {
        symbol: "Sr",
        name: "Strontium",
        atomic_number: 38,
        atomic_mass: 87.62,
        category: ElementCategory::AlkalineEarthMetal,
    },
    Element {
        symbol: "Y",
        name: "Yttrium",
        atomic_number: 39,
        atomic_mass: 88.906,
        category: ElementCategory::TransitionMetal,
    },
    Element {
        symbol: "Zr",
        name: "Zirconium",
        atomic_number: 40,
        atomic_mass: 91.224,
        category: ElementCategory::TransitionMetal,
    },
    Element {
        symbol: "Nb",
        name: "Niobium",
        atomic_number: 41,
        atomic_mass: 92.906,
        category: ElementCategory::TransitionMetal,
    },
    Element {
        symbol: "Mo",
        name: "Molybdenum",
        atomic_number: 42,
        atomic_mass: 95.95,
        category: ElementCategory::TransitionMetal,
    },
    Element {
        symbol: "Tc",
        name: "Technetium",
        atomic_number: 43,
        atomic_mass: 98.0,
        category: ElementCategory::TransitionMetal,
    },
    Element {
        symbol: "Ru",
        name: "Ruthenium",
        atomic_number: 44,
        atomic_mass: 101.07,
        category: ElementCategory::TransitionMetal,
    },
    Element {
        symbol: "Rh",
        name: "Rhodium",
        atomic_number: 45,
        atomic_mass: 102.91,
        category: ElementCategory::TransitionMetal,
    },
    Element {
        symbol: "Pd",
        name: "Palladium",
        atomic_number: 46,
        atomic_mass: 106.42,
        category: ElementCategory::TransitionMetal,
    },
    Element {
        symbol: "Ag",
        name: "Silver",
        atomic_number: 47,
        atomic_mass: 107.87,
        category: ElementCategory::TransitionMetal,
    },
    Element {
        symbol: "Cd",
        name: "Cadmium",
        atomic_number: 48,
        atomic_mass: 112.41,
        category: ElementCategory::TransitionMetal,
    },
    Element {
        symbol: "In",
        name: "Indium",
        atomic_number: 49,
        atomic_mass: 114.82,
        category: ElementCategory::PostTransitionMetal,
    },
    Element {
        symbol: "Sn",
        name: "Tin",
        atomic_number: 50,
        atomic_mass: 118.71,
        category: ElementCategory::PostTransitionMetal,
    },
    Element {
        symbol: "Sb",
        name: "Antimony",
        atomic_number: 51,
        atomic_mass: 121.76,
        category: ElementCategory::Metalloid,
    },
    Element {
        symbol: "Te",
        name: "Tellurium",
        atomic_number: 52,
        atomic_mass: 127.60,
        category: ElementCategory::Metalloid,
    },
    Element {
        symbol: "I",
        name: "Iodine",
        atomic_number: 53,
        atomic_mass: 126.90,
        category: ElementCategory::Halogen,
    },
    Element {
        symbol: "Xe",
        name: "Xenon",
        atomic_number: 54,
        atomic_mass: 131.29,
        category: ElementCategory::NobleGas,
    },
    Element {
        symbol: "Cs",
        name: "Caesium",
        atomic_number: 55,
        atomic_mass: 132.91,
        category: ElementCategory::AlkaliMetal,
    },
    Element {
        symbol: "Ba",
        name: "Barium",
        atomic_number: 56,
        atomic_mass: 137.33,
        category: ElementCategory::AlkalineEarthMetal,
    },
    Element {
        symbol: "La",
        name: "Lanthanum",
        atomic_number: 57,
        atomic_mass: 138.91,
        category: ElementCategory::Lanthanide,
    },
    Element {
        symbol: "Ce",
        name: "Cerium",
        atomic_number: 58,
        atomic_mass: 140.12,
        category: ElementCategory::Lanthanide,
    },
    Element {
        symbol: "Pr",
        name: "Praseodymium",
        atomic_number: 59,
        atomic_mass: 140.91,
        category: ElementCategory::Lanthanide,
    },
    Element {
        symbol: "Nd",
        name: "Neodymium",
        atomic_number: 60,
        atomic_mass: 144.24,
        category: ElementCategory::Lanthanide,
    },
    Element {
        symbol: "Pm",
        name: "Promethium",
        atomic_number: 61,
        atomic_mass: 145.0,
        category: ElementCategory::Lanthanide,
    },
    Element {
        symbol: "Sm",
        name: "Samarium",
        atomic_number: 62,
        atomic_mass: 150.36,
        category: ElementCategory::Lanthanide,
    },
    Element {
        symbol: "Eu",
        name: "Europium",
        atomic_number: 63,
        atomic_mass: 151.96,
        category: ElementCategory::Lanthanide,
    },
    Element {
        symbol: "Gd",
        name: "Gadolinium",
        atomic_number: 64,
        atomic_mass: 157.25,
        category: ElementCategory::Lanthanide,
    },
    Element {
        symbol: "Tb",
        name: "Terbium",
        atomic_number: 65,
        atomic_mass: 158.93,
        category: ElementCategory::Lanthanide,
    },
    Element {
        symbol: "Dy",
        name: "Dysprosium",
        atomic_number: 66,
        atomic_mass: 162.50,
        category: ElementCategory::Lanthanide,
    },
    Element {
        symbol: "Ho",
        name: "Holmium",
        atomic_number: 67,
        atomic_mass: 164.93,
        category: ElementCategory::Lanthanide,
    },
    Element {
        symbol: "Er",
        name: "Erbium",
        atomic_number: 68,
        atomic_mass: 167.26,
        category: ElementCategory::Lanthanide,
    },
    Element {
        symbol: "Tm",
        name: "Thulium",
        atomic_number: 69,
        atomic_mass: 168.93,
        category: ElementCategory::Lanthanide,
    },
    Element {
        symbol: "Yb",
        name: "Ytterbium",
        atomic_number: 70,
        atomic_mass: 173.05,
        category: ElementCategory::Lanthanide,
    },
    Element {
        symbol: "Lu",
        name: "Lutetium",
        atomic_number: 71,
        atomic_mass: 174.97,
        category: ElementCategory::Lanthanide,
    },
    Element {
        symbol: "Hf",
        name: "Hafnium",
        atomic_number: 72,
        atomic_mass: 178.49,
        category: ElementCategory::TransitionMetal,
    },
    Element {
        symbol: "Ta",
        name: "Tantalum",
        atomic_number: 73,
        atomic_mass: 180.95,
        category: ElementCategory::TransitionMetal,
    },
    Element {
        symbol: "W",
        name: "Tungsten",
        atomic_number: 74,
        atomic_mass: 183.84,
        category: ElementCategory::TransitionMetal,
    },
    Element {
        symbol: "Re",
        name: "Rhenium",
        atomic_number: 75,
        atomic_mass: 186.21,
        category: ElementCategory::TransitionMetal,
    },
    Element {
        symbol: "Os",
        name: "Osmium",
        atomic_number: 76,
        atomic_mass: 190.23,
        category: ElementCategory::TransitionMetal,
    },
    Element {
        symbol: "Ir",
        name: "Iridium",
        atomic_number: 77,
        atomic_mass: 192.22,
        category: ElementCategory::TransitionMetal,
    },
    Element {
        symbol: "Pt",
        name: "Platinum",
        atomic_number: 78,
        atomic_mass: 195.08,
        category: ElementCategory::TransitionMetal,
    },
    Element {
        symbol: "Au",
        name: "Gold",
        atomic_number: 79,
        atomic_mass: 196.97,
        category: ElementCategory::TransitionMetal,
    },
    Element {
        symbol: "Hg",
        name: "Mercury",
        atomic_number: 80,
        atomic_mass: 200.59,
        category: ElementCategory::TransitionMetal,
    },
    Element {
        symbol: "Tl",
        name: "Thallium",
        atomic_number: 81,
        atomic_mass: 204.38,
        category: ElementCategory::PostTransitionMetal,
    },
    Element {
        symbol: "Pb",
        name: "Lead",
        atomic_number: 82,
        atomic_mass: 207.2,
        category: ElementCategory::PostTransitionMetal,
    },
    Element {
        symbol: "Bi",
        name: "Bismuth",
        atomic_number: 83,
        atomic_mass: 208.98,
        category: ElementCategory::PostTransitionMetal,
    },
    Element {
        symbol: "Po",
        name: "Polonium",
        atomic_number: 84,
        atomic_mass: 209.0,
        category: ElementCategory::PostTransitionMetal,
    },
    Element {
        symbol: "At",
        name: "Astatine",
        atomic_number: 85,
        atomic_mass: 210.0,
        category: ElementCategory::Halogen,
    },
    Element {
        symbol: "Rn",
        name: "Radon",
        atomic_number: 86,
        atomic_mass: 222.0,
        category: ElementCategory::NobleGas,
    },
    Element {
        symbol: "Fr",
        name: "Francium",
        atomic_number: 87,
        atomic_mass: 223.0,
        category: ElementCategory::AlkaliMetal,
    },
    Element {
        symbol: "Ra",
        name: "Radium",
        atomic_number: 88,
        atomic_mass: 226.0,
        category: ElementCategory::AlkalineEarthMetal,
    },
    Element {
        symbol: "Ac",
        name: "Actinium",
        atomic_number: 89,
        atomic_mass: 227.0,
        category: ElementCategory::Actinide,
    },
    Element {
        symbol: "Th",
        name: "Thorium",
        atomic_number: 90,
        atomic_mass: 232.04,
        category: ElementCategory::Actinide,
    },
    Element {
        symbol: "Pa",
        name: "Protactinium",
        atomic_number: 91,
        atomic_mass: 231.04,
        category: ElementCategory::Actinide,
    },
    Element {
        symbol: "U",
        name: "Uranium",
        atomic_number: 92,
        atomic_mass: 238.03,
        category: ElementCategory::Actinide,
    },
    Element {
        symbol: "Np",
        name: "Neptunium",
        atomic_number: 93,
        atomic_mass: 237.0,
        category: ElementCategory::Actinide,
    },
    Element {
        symbol: "Pu",
        name: "Plutonium",
        atomic_number: 94,
        atomic_mass: 244.0,
        category: ElementCategory::Actinide,
    },
    Element {
        symbol: "Am",
        name: "Americium",
        atomic_number: 95,
        atomic_mass: 243.0,
        category: ElementCategory::Actinide,
    },
    Element {
        symbol: "Cm",
        name: "Curium",
        atomic_number: 96,
        atomic_mass: 247.0,
        category: ElementCategory::Actinide,
    },
    Element {
        symbol: "Bk",
        name: "Berkelium",
        atomic_number: 97,
        atomic_mass: 247.0,
        category: ElementCategory::Actinide,
    },
    Element {
        symbol: "Cf",
        name: "Californium",
        atomic_number: 98,
        atomic_mass: 251.0,
        category: ElementCategory::Actinide,
    },
    Element {
        symbol: "Es",
        name: "Einsteinium",
        atomic_number: 99,
        atomic_mass: 252.0,
        category: ElementCategory::Actinide,
    },
    Element {
        symbol: "Fm",
        name: "Fermium",
        atomic_number: 100,
        atomic_mass: 257.0,
        category: ElementCategory::Actinide,
    },
    Element {
        symbol: "Md",
        name: "Mendelevium",
        atomic_number: 101,
        atomic_mass: 258.0,
        category: ElementCategory::Actinide,
    },
    Element {
        symbol: "No",
        name: "Nobelium",
        atomic_number: 102,
        atomic_mass: 259.0,
        category: ElementCategory::Actinide,
    },
    Element {
        symbol: "Lr",
        name: "Lawrencium",
        atomic_number: 103,
        atomic_mass: 266.0,
        category: ElementCategory::Actinide,
    },
    Element {
        symbol: "Rf",
        name: "Rutherfordium",
        atomic_number: 104,
        atomic_mass: 267.0,
        category: ElementCategory::TransitionMetal,
    },
    Element {
        symbol: "Db",
        name: "Dubnium",
        atomic_number: 105,
        atomic_mass: 268.0,
        category: ElementCategory::TransitionMetal,
    },
    Element {
        symbol: "Sg",
        name: "Seaborgium",
        atomic_number: 106,
        atomic_mass: 269.0,
        category: ElementCategory::TransitionMetal,
    },
    Element {
        symbol: "Bh",
        name: "Bohrium",
        atomic_number: 107,
        atomic_mass: 270.0,
        category: ElementCategory::TransitionMetal,
    },
    Element {
        symbol: "Hs",
        name: "Hassium",
        atomic_number: 108,
        atomic_mass: 277.0,
        category: ElementCategory::TransitionMetal,
    },
    Element {
        symbol: "Mt",
        name: "Meitnerium",
        atomic_number: 109,
        atomic_mass: 278.0,
        category: ElementCategory::Unknown,
    },
    Element {
        symbol: "Ds",
        name: "Darmstadtium",
        atomic_number: 110,
        atomic_mass: 281.0,
        category: ElementCategory::Unknown,
    },
    Element {
        symbol: "Rg",
        name: "Roentgenium",
        atomic_number: 111,
        atomic_mass: 282.0,
        category: ElementCategory::Unknown,
    },
    Element {
        symbol: "Cn",
        name: "Copernicium",
        atomic_number: 112,
        atomic_mass: 285.0,
        category: ElementCategory::TransitionMetal,
    },
    Element {
        symbol: "Nh",
        name: "Nihonium",
        atomic_number: 113,
        atomic_mass: 286.0,
        category: ElementCategory::Unknown,
    },
    Element {
        symbol: "Fl",
        name: "Flerovium",
        atomic_number: 114,
        atomic_mass: 289.0,
        category: ElementCategory::Unknown,
    },
    Element {
        symbol: "Mc",
        name: "Moscovium",
        atomic_number: 115,
        atomic_mass: 290.0,
        category: ElementCategory::Unknown,
    },
    Element {
        symbol: "Lv",
        name: "Livermorium",
        atomic_number: 116,
        atomic_mass: 293.0,
        category: ElementCategory::Unknown,
    },
    Element {
        symbol: "Ts",
        name: "Tennessine",
        atomic_number: 117,
        atomic_mass: 294.0,
        category: ElementCategory::Unknown,
    },
    Element {
        symbol: "Og",
        name: "Oganesson",
        atomic_number: 118,
        atomic_mass: 294.0,
        category: ElementCategory::Unknown,
    },
];

/// look up an element by its (case-sensitive) symbol
pub fn get_element(symbol: &str) -> Option<&'static Element> {
    ELEMENTS.iter().find(|element| element.symbol == symbol)
}

pub fn is_valid_element(symbol: &str) -> bool {
    get_element(symbol).is_some()
}

pub fn atomic_mass(symbol: &str) -> Option<f64> {
    get_element(symbol).map(|element| element.atomic_mass)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::collections::HashSet;

    #[test]
    fn test_table_is_complete_and_ordered() {
        assert_eq!(ELEMENTS.len(), 118);
        for (i, element) in ELEMENTS.iter().enumerate() {
            assert_eq!(element.atomic_number as usize, i + 1, "{}", element.symbol);
        }
        let symbols: HashSet<&str> = ELEMENTS.iter().map(|e| e.symbol).collect();
        assert_eq!(symbols.len(), 118);
    }

    #[test]
    fn test_lookup() {
        let ca = get_element("Ca").unwrap();
        assert_eq!(ca.name, "Calcium");
        assert_eq!(ca.category, ElementCategory::AlkalineEarthMetal);
        assert_relative_eq!(atomic_mass("O").unwrap(), 15.999);
        assert!(is_valid_element("Og"));
        // symbols are case-sensitive
        assert!(!is_valid_element("CL"));
        assert!(!is_valid_element("Xx"));
        assert!(atomic_mass("").is_none());
    }
}
