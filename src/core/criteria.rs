use crate::models::{CoffeeBean, Dimension, PreferenceVector, RoastLevel};

/// Origins known for a bright, acidic cup
pub const ACIDIC_ORIGINS: [&str; 2] = ["Ethiopia", "Kenya"];

/// Origins known for a heavy, full-bodied cup
pub const FULL_BODY_ORIGINS: [&str; 3] = ["Indonesia", "Brazil", "Kenya"];

/// Flavor-tag keywords counted as chocolate/nut notes
pub const CHOCOLATE_NUT_FLAVORS: [&str; 6] = [
    "chocolate",
    "nut",
    "caramel",
    "cocoa",
    "dark chocolate",
    "brown sugar",
];

/// Flavor-tag keywords counted as fruity/floral notes
pub const FRUITY_FLORAL_FLAVORS: [&str; 6] = [
    "floral",
    "citrus",
    "bergamot",
    "blackcurrant",
    "wine",
    "tomato",
];

const ROAST_EXACT_POINTS: u32 = 30;
const ROAST_NEAR_POINTS: u32 = 20;
const ACIDITY_MATCH_POINTS: u32 = 25;
const ACIDITY_MELLOW_POINTS: u32 = 15;
const BODY_MATCH_POINTS: u32 = 20;
const BODY_LIGHT_POINTS: u32 = 10;
const CHOCOLATE_NUT_POINTS: u32 = 25;
const FRUITY_FLORAL_POINTS: u32 = 25;

/// Highest total a single bean can score across all dimensions.
///
/// Derived from the point constants above so the display percentage stays
/// in lock-step with the rule table.
pub const MAX_POSSIBLE_SCORE: u32 = ROAST_EXACT_POINTS
    + ACIDITY_MATCH_POINTS
    + BODY_MATCH_POINTS
    + CHOCOLATE_NUT_POINTS
    + FRUITY_FLORAL_POINTS;

/// Evaluate one dimension's rule for one bean
///
/// Returns the point contribution and the reason shown to the user when
/// the rule is satisfied. Rules are independent: a bean can score on
/// several dimensions at once, and roast level intentionally feeds the
/// acidity and body heuristics as well as the roast rule itself.
pub fn evaluate(
    dimension: Dimension,
    bean: &CoffeeBean,
    prefs: &PreferenceVector,
) -> Option<(u32, &'static str)> {
    let likes = prefs.get(dimension);

    match dimension {
        Dimension::DarkRoast => evaluate_roast(bean, likes),
        Dimension::Acidity => evaluate_acidity(bean, likes),
        Dimension::FullBody => evaluate_body(bean, likes),
        Dimension::ChocolateNut => evaluate_chocolate_nut(bean, likes),
        Dimension::FruityFloral => evaluate_fruity_floral(bean, likes),
    }
}

fn evaluate_roast(bean: &CoffeeBean, likes_dark_roast: bool) -> Option<(u32, &'static str)> {
    if likes_dark_roast {
        match bean.roast_level {
            RoastLevel::Dark => Some((ROAST_EXACT_POINTS, "dark roast")),
            RoastLevel::MediumDark => Some((ROAST_NEAR_POINTS, "medium-dark roast")),
            _ => None,
        }
    } else {
        match bean.roast_level {
            RoastLevel::Light => Some((ROAST_EXACT_POINTS, "light roast")),
            RoastLevel::Medium => Some((ROAST_NEAR_POINTS, "medium roast")),
            _ => None,
        }
    }
}

fn evaluate_acidity(bean: &CoffeeBean, likes_acidity: bool) -> Option<(u32, &'static str)> {
    let bright = origin_matches(&bean.origin, &ACIDIC_ORIGINS)
        || bean.roast_level == RoastLevel::Light;

    if likes_acidity && bright {
        Some((ACIDITY_MATCH_POINTS, "bright acidity"))
    } else if !likes_acidity && !bright {
        Some((ACIDITY_MELLOW_POINTS, "smooth flavor"))
    } else {
        None
    }
}

fn evaluate_body(bean: &CoffeeBean, likes_full_body: bool) -> Option<(u32, &'static str)> {
    let full = origin_matches(&bean.origin, &FULL_BODY_ORIGINS)
        || bean.roast_level == RoastLevel::Dark
        || bean.roast_level == RoastLevel::MediumDark;

    if likes_full_body && full {
        Some((BODY_MATCH_POINTS, "full body"))
    } else if !likes_full_body && !full {
        Some((BODY_LIGHT_POINTS, "light body"))
    } else {
        None
    }
}

fn evaluate_chocolate_nut(
    bean: &CoffeeBean,
    likes_chocolate_nut: bool,
) -> Option<(u32, &'static str)> {
    if likes_chocolate_nut && flavor_matches(&bean.flavor, &CHOCOLATE_NUT_FLAVORS) {
        Some((CHOCOLATE_NUT_POINTS, "chocolate/nut notes"))
    } else {
        None
    }
}

fn evaluate_fruity_floral(
    bean: &CoffeeBean,
    likes_fruity_floral: bool,
) -> Option<(u32, &'static str)> {
    if likes_fruity_floral && flavor_matches(&bean.flavor, &FRUITY_FLORAL_FLAVORS) {
        Some((FRUITY_FLORAL_POINTS, "fruity/floral notes"))
    } else {
        None
    }
}

/// Substring containment against a closed region list, case-sensitive
#[inline]
fn origin_matches(origin: &str, regions: &[&str]) -> bool {
    regions.iter().any(|region| origin.contains(region))
}

/// Any flavor tag containing any keyword, case-sensitive
#[inline]
fn flavor_matches(flavors: &[String], keywords: &[&str]) -> bool {
    flavors
        .iter()
        .any(|tag| keywords.iter().any(|keyword| tag.contains(keyword)))
}
