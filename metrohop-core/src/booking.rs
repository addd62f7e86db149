//! Ticket bookings and reference generation

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::model::Station;
use crate::routing::Route;

const REFERENCE_PREFIX: &str = "MBS-";
const REFERENCE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const REFERENCE_LENGTH: usize = 8;

/// Random booking reference like `MBS-7K2Q9FA4`
pub fn generate_booking_reference() -> String {
    let mut rng = rand::rng();
    let mut reference = String::with_capacity(REFERENCE_PREFIX.len() + REFERENCE_LENGTH);
    reference.push_str(REFERENCE_PREFIX);
    for _ in 0..REFERENCE_LENGTH {
        let index = rng.random_range(0..REFERENCE_ALPHABET.len());
        reference.push(char::from(REFERENCE_ALPHABET[index]));
    }
    reference
}

/// A confirmed ticket for one journey
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub reference: String,
    pub source: Station,
    pub destination: Station,
    pub route: Route,
    pub booked_at: DateTime<Utc>,
    /// Encoded into the QR code scanned at the entry gate
    pub qr_payload: String,
}

impl Booking {
    pub fn create(source: Station, destination: Station, route: Route) -> Self {
        let reference = generate_booking_reference();
        let booked_at = Utc::now();
        let qr_payload = format!(
            "METROBOOK:{reference}:{}:{}:{}",
            source.id,
            destination.id,
            booked_at.timestamp_millis()
        );
        Self {
            reference,
            source,
            destination,
            route,
            booked_at,
            qr_payload,
        }
    }
}

#[cfg(test)]
mod tests {
    use hashbrown::HashSet;

    use super::*;
    use crate::model::MetroNetwork;

    #[test]
    fn reference_has_the_expected_shape() {
        for _ in 0..10 {
            let reference = generate_booking_reference();
            assert_eq!(reference.len(), REFERENCE_PREFIX.len() + REFERENCE_LENGTH);
            let suffix = reference.strip_prefix(REFERENCE_PREFIX).unwrap();
            assert!(suffix.bytes().all(|b| REFERENCE_ALPHABET.contains(&b)));
        }
    }

    #[test]
    fn references_vary() {
        let references: HashSet<String> =
            (0..50).map(|_| generate_booking_reference()).collect();
        assert!(references.len() > 1);
    }

    #[test]
    fn booking_carries_a_scannable_payload() {
        let network = MetroNetwork::seeded();
        let source = network.station("rajiv-chowk").unwrap().clone();
        let destination = network.station("kashmere-gate").unwrap().clone();
        let route = network.find_routes("rajiv-chowk", "kashmere-gate")[0].clone();

        let booking = Booking::create(source, destination, route);
        let expected_prefix = format!(
            "METROBOOK:{}:rajiv-chowk:kashmere-gate:",
            booking.reference
        );
        assert!(booking.qr_payload.starts_with(&expected_prefix));
        assert_eq!(booking.source.id, "rajiv-chowk");
        assert_eq!(booking.destination.id, "kashmere-gate");
    }
}
