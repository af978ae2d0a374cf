#![allow(dead_code)]
use glass_tower::prelude::*;

/// Four-row tower A..J, every glass holding at most 250.
pub fn tower4() -> Tower {
    Tower::with_rows(4)
}

/// Quantity of glass `uid`; panics if the tower has no such glass.
pub fn q(tower: &Tower, uid: &str) -> f64 {
    tower
        .get_glass(uid)
        .unwrap_or_else(|| panic!("no glass {uid}"))
        .quantity()
}

/// Quantities of every glass in insertion order.
pub fn quantities(tower: &Tower) -> Vec<f64> {
    tower.glasses().iter().map(Glass::quantity).collect()
}

/// Labels of a list of glasses.
pub fn uids(glasses: &[&Glass]) -> Vec<String> {
    glasses.iter().map(|g| g.uid().to_owned()).collect()
}
