use chart_compose::core::{BandScale, ValueScale};
use proptest::prelude::*;

proptest! {
    #[test]
    fn value_scale_round_trip_property(
        domain_min in -1_000_000.0f64..1_000_000.0,
        domain_span in 0.001f64..1_000_000.0,
        value_factor in 0.0f64..1.0
    ) {
        let domain_max = domain_min + domain_span;
        let value = domain_min + value_factor * domain_span;

        let scale = ValueScale::new((domain_min, domain_max), (1024.0, 0.0)).expect("valid scale");

        let px = scale.value_to_pixel(value).expect("to pixel");
        let recovered = scale.pixel_to_value(px).expect("from pixel");

        prop_assert!((recovered - value).abs() <= 1e-6 * domain_span.max(1.0));
    }

    #[test]
    fn nice_never_shrinks_domain(
        min in -1_000_000.0f64..0.0,
        max in 0.001f64..1_000_000.0
    ) {
        let scale = ValueScale::niced((min, max), (500.0, 0.0)).expect("niced scale");
        let (start, end) = scale.domain();

        let tolerance = 1e-9 * min.abs().max(max.abs()).max(1.0);
        prop_assert!(start <= min + tolerance);
        prop_assert!(end >= max - tolerance);
        prop_assert!(start <= 0.0 && end >= 0.0);
    }

    #[test]
    fn band_scale_fits_inside_extent(
        n in 1usize..64,
        padding in 0.1f64..=0.8,
        extent in 1.0f64..5_000.0
    ) {
        let keys: Vec<String> = (0..n).map(|i| format!("k{i}")).collect();
        let scale = BandScale::new(keys.iter().cloned(), (0.0, extent), padding).expect("band scale");

        prop_assert!(scale.bandwidth() > 0.0);
        prop_assert!(n as f64 * scale.step() <= extent + 1e-9);

        let last = scale.position_at(n - 1).expect("last band");
        prop_assert!(last + scale.bandwidth() <= extent + 1e-9);
        prop_assert!(scale.position_at(0).expect("first band") >= 0.0);

        for i in 1..n {
            let previous = scale.position_at(i - 1).expect("previous band");
            let current = scale.position_at(i).expect("current band");
            prop_assert!(previous + scale.bandwidth() <= current + 1e-9);
        }
    }
}
