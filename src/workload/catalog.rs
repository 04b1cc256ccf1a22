use std::fmt;

/// Countries accepted by country-typed arguments.
pub const COUNTRIES: [&str; 10] = [
    "Netherlands",
    "Norway",
    "Sweden",
    "Switzerland",
    "Germany",
    "Canada",
    "Australia",
    "Belgium",
    "Israel",
    "Egypt",
];

/// Inclusive bounds for bound-typed arguments.
pub const BOUND_MIN: u32 = 1;
pub const BOUND_MAX: u32 = 10;
/// Inclusive bounds for count-typed arguments (6-7 decimal digits).
pub const COUNT_MIN: u32 = 100_000;
pub const COUNT_MAX: u32 = 9_999_999;
/// Inclusive bounds for the trailing zone tag.
pub const ZONE_MIN: u8 = 1;
pub const ZONE_MAX: u8 = 5;

/// Type of a single argument slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArgKind {
    Country,
    Bound,
    Count,
}

impl ArgKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ArgKind::Country => "country",
            ArgKind::Bound => "bound",
            ArgKind::Count => "count",
        }
    }

    /// Inclusive numeric range for integer slots.
    #[must_use]
    pub const fn int_range(self) -> Option<(u32, u32)> {
        match self {
            ArgKind::Country => None,
            ArgKind::Bound => Some((BOUND_MIN, BOUND_MAX)),
            ArgKind::Count => Some((COUNT_MIN, COUNT_MAX)),
        }
    }
}

impl fmt::Display for ArgKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A callable function of the zone query API.
///
/// Signatures are plain data: the generator and the parser walk `args` in
/// order instead of branching on the function name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FunctionSignature {
    pub name: &'static str,
    pub args: &'static [ArgKind],
    pub zoned: bool,
}

impl FunctionSignature {
    /// Number of whitespace-separated tokens in a request line for this
    /// signature: name, arguments, and the zone tag when present.
    #[must_use]
    pub const fn token_count(&self) -> usize {
        let zone = if self.zoned { 1 } else { 0 };
        self.args.len().saturating_add(1).saturating_add(zone)
    }
}

const GET_POPULATION_OF_COUNTRY: FunctionSignature = FunctionSignature {
    name: "getPopulationofCountry",
    args: &[ArgKind::Country],
    zoned: true,
};

const GET_NUMBER_OF_CITIES: FunctionSignature = FunctionSignature {
    name: "getNumberofCities",
    args: &[ArgKind::Country, ArgKind::Count],
    zoned: true,
};

const GET_NUMBER_OF_COUNTRIES: FunctionSignature = FunctionSignature {
    name: "getNumberofCountries",
    args: &[ArgKind::Bound, ArgKind::Count],
    zoned: true,
};

const GET_NUMBER_OF_COUNTRIES_MAX: FunctionSignature = FunctionSignature {
    name: "getNumberofCountriesMax",
    args: &[ArgKind::Bound, ArgKind::Count, ArgKind::Count],
    zoned: true,
};

pub const CATALOG: [FunctionSignature; 4] = [
    GET_POPULATION_OF_COUNTRY,
    GET_NUMBER_OF_CITIES,
    GET_NUMBER_OF_COUNTRIES,
    GET_NUMBER_OF_COUNTRIES_MAX,
];

/// Finds a catalog entry by its exact function name.
#[must_use]
pub fn lookup(name: &str) -> Option<&'static FunctionSignature> {
    CATALOG.iter().find(|signature| signature.name == name)
}

/// Catalog entry used when a random source hands back an index the catalog
/// cannot satisfy.
pub(super) const FALLBACK: FunctionSignature = GET_POPULATION_OF_COUNTRY;
