//! Stop-count fare table

/// Fare in currency units for a journey spanning `stops` stations
pub fn calculate_fare(stops: usize) -> u32 {
    match stops {
        0..=2 => 10,
        3..=5 => 20,
        6..=12 => 30,
        13..=21 => 40,
        _ => 50,
    }
}
