//! Quiz answer codes → catalog vocabulary.
//!
//! The quiz speaks in short answer codes; the catalog speaks in display
//! names. The tables here are the single place that translation lives.
//! Unmapped codes are dropped from the criteria set: unknown input never
//! constrains (and never empties) a result set on its own.

/// Sentinel answer code meaning "no category preference".
pub const SURPRISE: &str = "surprise";

/// Answer code → catalog category name
static CATEGORY_MAP: &[(&str, &str)] = &[
    ("gifts", "Gifts"),
    ("home-decor", "Home Decor"),
    ("kitchen", "Kitchen"),
    ("baby-kids", "Baby"),
    ("seasonal", "Seasonal"),
];

/// Answer code → catalog machine name
static MACHINE_MAP: &[(&str, &str)] = &[
    ("accuquilt", "AccuQuilt"),
    ("embroidery", "Embroidery"),
    ("scan-n-cut", "Scan N Cut"),
];

/// Map a single category answer code to its catalog term
#[inline]
pub fn map_category(code: &str) -> Option<&'static str> {
    CATEGORY_MAP
        .iter()
        .find(|(quiz, _)| *quiz == code)
        .map(|(_, catalog)| *catalog)
}

/// Map a single machine answer code to its catalog term
#[inline]
pub fn map_machine(code: &str) -> Option<&'static str> {
    MACHINE_MAP
        .iter()
        .find(|(quiz, _)| *quiz == code)
        .map(|(_, catalog)| *catalog)
}

/// Map a list of category codes, dropping any that have no mapping
pub fn map_categories(codes: &[String]) -> Vec<String> {
    codes
        .iter()
        .filter_map(|code| map_category(code))
        .map(String::from)
        .collect()
}

/// Map a list of machine codes, dropping any that have no mapping
pub fn map_machines(codes: &[String]) -> Vec<String> {
    codes
        .iter()
        .filter_map(|code| map_machine(code))
        .map(String::from)
        .collect()
}
