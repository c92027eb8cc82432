use proptest::prelude::*;

use spend_charts::core::sector::{sector_at, sweep};

proptest! {
    #[test]
    fn sweep_covers_exactly_the_full_circle(
        amounts in prop::collection::vec(1i64..1_000_000, 1..=12)
    ) {
        let sectors = sweep(&amounts);

        prop_assert_eq!(sectors[0].start_deg, 0.0);
        prop_assert_eq!(sectors[sectors.len() - 1].end_deg, 360.0);

        for pair in sectors.windows(2) {
            prop_assert_eq!(pair[0].end_deg, pair[1].start_deg);
        }

        let span_sum: f64 = sectors.iter().map(|sector| sector.span_deg()).sum();
        prop_assert_eq!(span_sum, 360.0);
    }

    #[test]
    fn every_boundary_resolves_to_the_starting_sector(
        amounts in prop::collection::vec(1i64..1_000_000, 1..=12)
    ) {
        let sectors = sweep(&amounts);

        for (index, sector) in sectors.iter().enumerate() {
            prop_assert_eq!(sector_at(&sectors, sector.start_deg), Some(index));
        }
    }

    #[test]
    fn every_interior_angle_resolves_to_exactly_one_sector(
        amounts in prop::collection::vec(1i64..1_000_000, 1..=12),
        fraction in 0.0f64..1.0
    ) {
        let sectors = sweep(&amounts);
        let angle = fraction * 360.0;

        let matches = sectors
            .iter()
            .filter(|sector| sector.contains(angle))
            .count();
        prop_assert_eq!(matches, 1);
    }
}

#[test]
fn zero_amount_sector_never_captures_its_boundary() {
    // The shared boundary of the empty middle sector belongs to its successor.
    let sectors = sweep(&[100, 0, 300]);

    assert_eq!(sectors[1].span_deg(), 0.0);
    assert_eq!(sector_at(&sectors, sectors[1].start_deg), Some(2));
}
