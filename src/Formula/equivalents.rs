use crate::Formula::classifier::CompoundClass;
use crate::Formula::formula_errors::FormulaError;

// a missing or zero divisor leaves the molar mass unchanged
fn divide_or_keep(molar_mass: f64, divisor: Option<f64>) -> f64 {
    match divisor {
        Some(divisor) if divisor != 0.0 => molar_mass / divisor,
        _ => molar_mass,
    }
}

/// Number of reactive units per formula unit that the class implies, if any
pub fn reactive_units(class: &CompoundClass) -> Option<f64> {
    match *class {
        CompoundClass::Acid { hydrogens } => Some(hydrogens),
        CompoundClass::Base { valence } | CompoundClass::Salt { valence } => Some(valence),
        CompoundClass::Oxidation { oxidation, valence } => oxidation
            .filter(|oxidation| *oxidation != 0.0)
            .or(valence),
        CompoundClass::Biomass => None,
    }
}

/// Equivalent weight in g/eq.
///
/// Acids divide by the number of hydrogens, bases and salts by the valence,
/// oxidation species by the oxidation count (or the valence when no oxidation
/// count is given); biomass keeps its molar mass. The result is the divisor of
/// [`equivalents`], so a zero weight is reported as `DivisionByZero`.
pub fn equivalent_weight(class: &CompoundClass, molar_mass: f64) -> Result<f64, FormulaError> {
    let weight = divide_or_keep(molar_mass, reactive_units(class));
    if !weight.is_finite() {
        return Err(FormulaError::ComputationError(format!(
            "equivalent weight of {} is not finite",
            class
        )));
    }
    if weight == 0.0 {
        return Err(FormulaError::DivisionByZero(format!(
            "equivalent weight of {} is zero",
            class
        )));
    }
    Ok(weight)
}

/// Reactive units per mole, `molar_mass / equivalent_weight`
pub fn equivalents(molar_mass: f64, equivalent_weight: f64) -> Result<f64, FormulaError> {
    if equivalent_weight == 0.0 {
        return Err(FormulaError::DivisionByZero(
            "equivalent weight is zero".to_string(),
        ));
    }
    let equivalents = molar_mass / equivalent_weight;
    if !equivalents.is_finite() {
        return Err(FormulaError::ComputationError(
            "number of equivalents is not finite".to_string(),
        ));
    }
    Ok(equivalents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_acid_base_salt() {
        let acid = CompoundClass::Acid { hydrogens: 2.0 };
        assert_relative_eq!(equivalent_weight(&acid, 98.08).unwrap(), 49.04);
        let base = CompoundClass::Base { valence: 2.0 };
        assert_relative_eq!(equivalent_weight(&base, 74.09).unwrap(), 37.045);
        let salt = CompoundClass::Salt { valence: 3.0 };
        assert_relative_eq!(equivalent_weight(&salt, 342.15).unwrap(), 114.05, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_divisor_keeps_molar_mass() {
        let acid = CompoundClass::Acid { hydrogens: 0.0 };
        assert_eq!(equivalent_weight(&acid, 18.0).unwrap(), 18.0);
        let salt = CompoundClass::Salt { valence: 0.0 };
        assert_eq!(equivalent_weight(&salt, 58.4).unwrap(), 58.4);
    }

    #[test]
    fn test_oxidation_prefers_oxidation_count() {
        let class = CompoundClass::Oxidation {
            oxidation: Some(4.0),
            valence: Some(2.0),
        };
        assert_eq!(equivalent_weight(&class, 44.0).unwrap(), 11.0);
        let class = CompoundClass::Oxidation {
            oxidation: None,
            valence: Some(2.0),
        };
        assert_eq!(equivalent_weight(&class, 44.0).unwrap(), 22.0);
        let class = CompoundClass::Oxidation {
            oxidation: Some(0.0),
            valence: Some(2.0),
        };
        assert_eq!(equivalent_weight(&class, 44.0).unwrap(), 22.0);
        let class = CompoundClass::Oxidation {
            oxidation: None,
            valence: None,
        };
        assert_eq!(equivalent_weight(&class, 44.0).unwrap(), 44.0);
    }

    #[test]
    fn test_biomass_equivalent_weight_is_molar_mass() {
        assert_eq!(
            equivalent_weight(&CompoundClass::Biomass, 24.03).unwrap(),
            24.03
        );
        assert_eq!(equivalents(24.03, 24.03).unwrap(), 1.0);
    }

    #[test]
    fn test_zero_molar_mass_fails() {
        let acid = CompoundClass::Acid { hydrogens: 2.0 };
        assert!(matches!(
            equivalent_weight(&acid, 0.0),
            Err(FormulaError::DivisionByZero(_))
        ));
        assert!(matches!(
            equivalents(0.0, 0.0),
            Err(FormulaError::DivisionByZero(_))
        ));
    }

    #[test]
    fn test_equivalents() {
        assert_relative_eq!(equivalents(98.08, 49.04).unwrap(), 2.0);
    }
}
