/// Periodic table: element symbols and atomic masses
pub mod elements;
/// error types of the formula engine
pub mod formula_errors;
/// Scanner for element symbols with optional decimal counts
pub mod tokenizer;
/// Biomass empirical formulas CH<h>O<o>N<n>
pub mod biomass;
/// Syntactic check of user-typed formulas
///
///  # Examples
/// ```
/// use ChemCalc::Formula::elements::ElementTable;
/// use ChemCalc::Formula::validator::validate;
/// let table = ElementTable::standard();
/// assert!(validate("Ca(OH)2", &table));
/// assert!(!validate("Xx2", &table));
/// ```
pub mod validator;
/// Expansion of parenthesized groups: the formula is parsed into a tree of groups and
/// flattened into a list of (element, count) tokens, each count multiplied by all
/// enclosing group multipliers.
///  # Examples
/// ```
/// use ChemCalc::Formula::expander::expand_to_string;
/// assert_eq!(expand_to_string("Al2(SO4)3").unwrap(), "Al2S3O12");
/// ```
pub mod expander;
/// Module to calculate the atomic composition and molar mass of a chemical formula
///
///  # Examples
/// ```
/// use ChemCalc::Formula::elements::ElementTable;
/// use ChemCalc::Formula::molmass::{calculate_molar_mass, parse_formula};
/// let table = ElementTable::standard();
/// let (molar_mass, element_composition) = calculate_molar_mass("C6H8O6", &table).unwrap();
/// println!("Element counts: {:?}", element_composition);
/// println!("Molar mass: {:?} g/mol", molar_mass);
/// let atomic_composition = parse_formula("Na(NO3)2").unwrap();
/// assert_eq!(atomic_composition["O"], 6.0);
/// ```
pub mod molmass;
/// Curated tables: known compounds, reference densities, valences, atomic volumes
pub mod reference_data;
/// Compound classification: biomass, known compounds, structural heuristic
///
///  # Examples
/// ```
/// use ChemCalc::Formula::classifier::{classify, CompoundClass};
/// assert_eq!(classify("HCl"), Some(CompoundClass::Acid { hydrogens: 1.0 }));
/// ```
pub mod classifier;
/// Equivalent weight and number of equivalents per mole
pub mod equivalents;
/// Reference densities and the additive-volume density estimate
pub mod density;
/// Full analysis pipeline and its public entry points
pub mod analysis;
