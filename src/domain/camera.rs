//! Embedded camera gear catalog.
//!
//! Categories are ordered as presented in the form; models and lenses are
//! only meaningful relative to their category.

/// One camera category with its available models and lenses.
#[derive(Debug, Clone, Copy)]
pub struct CameraCategory {
    pub name: &'static str,
    pub models: &'static [&'static str],
    pub lenses: &'static [&'static str],
}

/// Category whose bare selection still contributes to the prompt when no
/// model is chosen.
pub const ANALOG_FILM: &str = "Analog Film";

/// Aesthetic fallback used when the analog category is selected without a model.
pub const ANALOG_FILM_AESTHETIC: &str = "Analog Film aesthetic";

const CATALOG: &[CameraCategory] = &[
    CameraCategory {
        name: "Digital Cinema",
        models: &[
            "ARRI Alexa Mini LF",
            "ARRI Alexa 65",
            "Sony Venice 2",
            "RED V-Raptor XL",
            "IMAX Digital Camera",
        ],
        lenses: &[
            "Arri Signature Primes",
            "Panavision C-Series Anamorphic",
            "Cooke S4/i Primes",
            "Zeiss Supreme Primes",
        ],
    },
    CameraCategory {
        name: "Mirrorless",
        models: &["Sony A7S III", "Canon EOS R5 C", "Panasonic Lumix S1H", "Fujifilm X-H2S"],
        lenses: &[
            "Sony G Master Primes",
            "Canon RF L-Series",
            "Sigma Art Series",
            "Voigtländer Nokton",
        ],
    },
    CameraCategory {
        name: ANALOG_FILM,
        models: &["Arriflex 435", "Panavision Panaflex Millennium", "Kodak Super 8"],
        lenses: &["Zeiss Super Speeds", "Cooke Panchro Classics", "Canon K-35"],
    },
    CameraCategory {
        name: "Photography",
        models: &["Leica M6", "Hasselblad 500C/M", "Mamiya RZ67", "Polaroid SX-70"],
        lenses: &["Leica Summilux-M 35mm", "Carl Zeiss Planar 80mm", "Mamiya Sekor Z"],
    },
];

/// All category names in presentation order.
pub fn category_names() -> Vec<&'static str> {
    CATALOG.iter().map(|c| c.name).collect()
}

/// Look up a category by exact name.
pub fn find_category(name: &str) -> Option<&'static CameraCategory> {
    CATALOG.iter().find(|c| c.name == name)
}

/// Models for a category; empty when the category is unset or unknown.
pub fn models_for(category: &str) -> &'static [&'static str] {
    find_category(category).map(|c| c.models).unwrap_or(&[])
}

/// Lenses for a category; empty when the category is unset or unknown.
pub fn lenses_for(category: &str) -> &'static [&'static str] {
    find_category(category).map(|c| c.lenses).unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_four_categories() {
        assert_eq!(
            category_names(),
            vec!["Digital Cinema", "Mirrorless", "Analog Film", "Photography"]
        );
    }

    #[test]
    fn unknown_category_yields_no_gear() {
        assert!(models_for("").is_empty());
        assert!(lenses_for("Pinhole").is_empty());
    }

    #[test]
    fn analog_film_category_exists() {
        let analog = find_category(ANALOG_FILM).unwrap();
        assert!(analog.models.contains(&"Kodak Super 8"));
    }
}
