//! Product and Storage Catalog
//!
//! Thermal properties of the goods a cold store typically holds, the packing
//! factors of the common storage methods, and the respiration curves of fresh
//! produce.
//!
//! Names match the product names used in input documents. A name that is not
//! in the catalog resolves to "General Food Items" (or "Palletized" for the
//! storage method) with a warning, so a typo never aborts a calculation.

use crate::lookup::RespirationCurve;

/// Name used when a product is not in the catalog
pub const DEFAULT_PRODUCT: &str = "General Food Items";

/// Name used when a storage method is not in the catalog
pub const DEFAULT_STORAGE: &str = "Palletized";

/// Thermal and storage properties of a product
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ProductProperties {
    /// Specific heat above freezing (kJ/kg·K)
    pub specific_heat_above: f64,
    /// Specific heat below freezing (kJ/kg·K)
    pub specific_heat_below: f64,
    /// Latent heat of fusion (kJ/kg)
    pub latent_heat: f64,
    /// Highest freezing point (°C)
    pub freezing_point: f64,
    /// Bulk density as stored (kg/m³)
    pub density: f64,
    /// Fraction of the room volume usable for stock
    pub storage_efficiency: f64,
}

impl ProductProperties {
    /// Replace the thermal properties the user entered explicitly
    pub fn with_overrides(mut self, overrides: &PropertyOverrides) -> Self {
        if let Some(cp) = overrides.specific_heat_above {
            self.specific_heat_above = cp;
        }
        if let Some(cp) = overrides.specific_heat_below {
            self.specific_heat_below = cp;
        }
        if let Some(latent) = overrides.latent_heat {
            self.latent_heat = latent;
        }
        self
    }
}

/// User-entered thermal properties that replace the catalog values
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PropertyOverrides {
    pub specific_heat_above: Option<f64>,
    pub specific_heat_below: Option<f64>,
    pub latent_heat: Option<f64>,
}

/// One catalog entry
#[derive(Debug, Clone, Copy)]
pub struct Product {
    /// Name as used in input documents
    pub name: &'static str,
    /// Thermal and storage properties
    pub properties: ProductProperties,
    /// Respiration heat curve (zero for non-living goods)
    pub respiration: RespirationCurve,
}

const fn product(
    name: &'static str,
    cp_above: f64,
    cp_below: f64,
    latent: f64,
    freezing_point: f64,
    density: f64,
    storage_efficiency: f64,
    respiration: RespirationCurve,
) -> Product {
    Product {
        name,
        properties: ProductProperties {
            specific_heat_above: cp_above,
            specific_heat_below: cp_below,
            latent_heat: latent,
            freezing_point,
            density,
            storage_efficiency,
        },
        respiration,
    }
}

/// Product catalog
///
/// Source: ASHRAE Refrigeration Handbook, thermal properties of foods
/// (rounded); respiration in W/tonne at 0/5/10 °C.
pub static PRODUCTS: [Product; 14] = [
    product(DEFAULT_PRODUCT, 3.50, 1.80, 250.0, -2.0, 500.0, 0.70, RespirationCurve::NONE),
    product("Beef", 3.14, 1.67, 232.0, -1.7, 600.0, 0.75, RespirationCurve::NONE),
    product("Poultry", 3.32, 1.77, 247.0, -2.8, 550.0, 0.70, RespirationCurve::NONE),
    product("Fish", 3.60, 1.90, 276.0, -2.2, 550.0, 0.70, RespirationCurve::NONE),
    product("Ice Cream", 2.95, 1.63, 220.0, -5.6, 550.0, 0.75, RespirationCurve::NONE),
    product("Dairy Products", 3.80, 2.00, 270.0, -0.6, 600.0, 0.70, RespirationCurve::NONE),
    product("Beverages", 3.90, 2.00, 300.0, -1.0, 800.0, 0.80, RespirationCurve::NONE),
    product("Pharmaceutical", 3.00, 1.60, 200.0, -1.0, 300.0, 0.60, RespirationCurve::NONE),
    product("Apples", 3.60, 1.90, 280.0, -1.5, 480.0, 0.65, RespirationCurve::new(12.0, 25.0, 48.0)),
    product("Potatoes", 3.60, 1.80, 260.0, -0.6, 650.0, 0.70, RespirationCurve::new(8.0, 15.0, 28.0)),
    product("Carrots", 3.80, 1.90, 290.0, -1.4, 550.0, 0.65, RespirationCurve::new(10.0, 20.0, 35.0)),
    product("Tomatoes", 4.00, 2.00, 310.0, -0.5, 500.0, 0.60, RespirationCurve::new(15.0, 30.0, 55.0)),
    product("Vegetables (Mixed)", 3.90, 1.95, 290.0, -1.0, 450.0, 0.65, RespirationCurve::new(12.0, 24.0, 45.0)),
    product("Fruits (Mixed)", 3.70, 1.90, 280.0, -1.5, 450.0, 0.65, RespirationCurve::new(15.0, 28.0, 50.0)),
];

/// How goods are stacked in the room; sets the usable share of the volume
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StorageType {
    #[default]
    Palletized,
    Boxed,
    Bulk,
    Racked,
}

impl StorageType {
    /// Every storage method
    pub const ALL: [Self; 4] = [Self::Palletized, Self::Boxed, Self::Bulk, Self::Racked];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Palletized => DEFAULT_STORAGE,
            Self::Boxed => "Boxed",
            Self::Bulk => "Bulk",
            Self::Racked => "Racked",
        }
    }

    /// Packing factor applied to the product's storage efficiency
    pub fn factor(&self) -> f64 {
        match self {
            Self::Palletized => 0.75,
            Self::Boxed => 0.85,
            Self::Bulk => 0.95,
            Self::Racked => 0.70,
        }
    }

    /// Parse a storage method name (ASCII case ignored)
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL.iter().copied().find(|s| s.name().eq_ignore_ascii_case(name))
    }

    /// Parse a storage method name, falling back to "Palletized"
    pub fn from_name_or_default(name: &str) -> Self {
        Self::from_name(name).unwrap_or_else(|| {
            log_warn!("Unknown storage type '{}', using '{}'", name, DEFAULT_STORAGE);
            Self::default()
        })
    }
}

/// Find a product by exact name (ASCII case ignored)
pub fn find_product(name: &str) -> Option<&'static Product> {
    let name = name.trim();
    PRODUCTS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

/// Resolve a product name, falling back to "General Food Items"
pub fn product_or_default(name: &str) -> &'static Product {
    match find_product(name) {
        Some(p) => p,
        None => {
            log_warn!("Unknown product '{}', using '{}'", name, DEFAULT_PRODUCT);
            default_product()
        }
    }
}

/// The "General Food Items" entry
pub fn default_product() -> &'static Product {
    &PRODUCTS[0]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_product_is_first() {
        assert_eq!(default_product().name, DEFAULT_PRODUCT);
        assert_eq!(StorageType::default().name(), DEFAULT_STORAGE);
    }

    #[test]
    fn lookup_ignores_case() {
        let beef = find_product("beef").map(|p| p.name);
        assert_eq!(beef, Some("Beef"));
        assert!(find_product("Unobtainium").is_none());
    }

    #[test]
    fn unknown_product_falls_back() {
        assert_eq!(product_or_default("Unobtainium").name, DEFAULT_PRODUCT);
        assert_eq!(StorageType::from_name_or_default("Floating"), StorageType::Palletized);
        assert_eq!(StorageType::from_name_or_default("boxed").factor(), 0.85);
    }

    #[test]
    fn frozen_side_specific_heat_is_lower() {
        for p in PRODUCTS.iter() {
            assert!(p.properties.specific_heat_below < p.properties.specific_heat_above, "{}", p.name);
            assert!(p.properties.freezing_point < 0.0, "{}", p.name);
        }
    }

    #[test]
    fn only_fresh_produce_respires() {
        let apples = find_product("Apples").map(|p| p.respiration.is_inert());
        assert_eq!(apples, Some(false));
        let beef = find_product("Beef").map(|p| p.respiration.is_inert());
        assert_eq!(beef, Some(true));
    }

    #[test]
    fn overrides_replace_only_given_fields() {
        let base = product_or_default(DEFAULT_PRODUCT).properties;
        let custom = base.with_overrides(&PropertyOverrides {
            specific_heat_above: Some(4.0),
            ..PropertyOverrides::default()
        });
        assert_eq!(custom.specific_heat_above, 4.0);
        assert_eq!(custom.specific_heat_below, base.specific_heat_below);
        assert_eq!(custom.latent_heat, base.latent_heat);
    }
}
