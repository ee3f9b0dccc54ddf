use approx::assert_abs_diff_eq;
use chart_compose::ChartError;
use chart_compose::core::{BandScale, ValueScale};

#[test]
fn value_scale_round_trip_within_tolerance() {
    let scale = ValueScale::new((10.0, 110.0), (0.0, 1000.0)).expect("valid scale");

    let original = 42.5;
    let px = scale.value_to_pixel(original).expect("to pixel");
    let recovered = scale.pixel_to_value(px).expect("from pixel");

    assert_abs_diff_eq!(recovered, original, epsilon = 1e-9);
}

#[test]
fn value_scale_with_reversed_range_puts_minimum_at_bottom() {
    let scale = ValueScale::new((0.0, 100.0), (600.0, 0.0)).expect("valid scale");

    assert_eq!(scale.value_to_pixel(0.0).expect("bottom"), 600.0);
    assert_eq!(scale.value_to_pixel(100.0).expect("top"), 0.0);
    assert_eq!(scale.baseline(), 600.0);
}

#[test]
fn niced_domain_extends_outward_only() {
    let scale = ValueScale::niced((-5.0, 20.0), (0.0, 260.0)).expect("niced scale");
    let (start, end) = scale.domain();

    assert!(start <= -5.0);
    assert!(end >= 20.0);
    assert_eq!((start, end), (-6.0, 20.0));
}

#[test]
fn niced_domain_keeps_round_bounds() {
    let scale = ValueScale::niced((0.0, 100.0), (0.0, 500.0)).expect("niced scale");
    assert_eq!(scale.domain(), (0.0, 100.0));

    let scale = ValueScale::niced((0.0, 0.93), (0.0, 500.0)).expect("niced scale");
    assert_eq!(scale.domain(), (0.0, 1.0));
}

#[test]
fn zero_span_domain_maps_to_range_middle() {
    let scale = ValueScale::new((0.0, 0.0), (200.0, 0.0)).expect("degenerate scale");
    assert_eq!(scale.value_to_pixel(0.0).expect("pixel"), 100.0);
    assert_eq!(scale.ticks(10), vec![0.0]);
}

#[test]
fn value_ticks_cover_domain_with_round_steps() {
    let scale = ValueScale::new((-6.0, 20.0), (0.0, 100.0)).expect("valid scale");
    let ticks = scale.ticks(10);

    assert_eq!(ticks.first().copied(), Some(-6.0));
    assert_eq!(ticks.last().copied(), Some(20.0));
    assert_eq!(ticks.len(), 14);
    assert!(ticks.windows(2).all(|pair| (pair[1] - pair[0] - 2.0).abs() < 1e-12));
}

#[test]
fn value_scale_rejects_invalid_input() {
    assert!(ValueScale::new((f64::NAN, 1.0), (0.0, 1.0)).is_err());
    assert!(ValueScale::new((5.0, 1.0), (0.0, 1.0)).is_err());
    assert!(ValueScale::new((0.0, 1.0), (0.0, f64::INFINITY)).is_err());

    let scale = ValueScale::new((0.0, 1.0), (0.0, 1.0)).expect("valid scale");
    assert!(matches!(
        scale.value_to_pixel(f64::NAN),
        Err(ChartError::InvalidData(_))
    ));
}

#[test]
fn band_scale_centers_bands_in_their_step() {
    let scale = BandScale::new(["A", "B", "C"], (0.0, 300.0), 0.1).expect("band scale");

    assert_abs_diff_eq!(scale.step(), 100.0, epsilon = 1e-9);
    assert_abs_diff_eq!(scale.bandwidth(), 90.0, epsilon = 1e-9);
    assert_abs_diff_eq!(scale.position("A").expect("A"), 5.0, epsilon = 1e-9);
    assert_abs_diff_eq!(scale.position("B").expect("B"), 105.0, epsilon = 1e-9);
    assert_abs_diff_eq!(scale.position("C").expect("C"), 205.0, epsilon = 1e-9);
    assert_abs_diff_eq!(scale.center("C").expect("C"), 250.0, epsilon = 1e-9);
}

#[test]
fn band_scale_follows_input_order_not_sorted_order() {
    let scale = BandScale::new(["zeta", "alpha", "mid"], (0.0, 90.0), 0.5).expect("band scale");

    let domain: Vec<&str> = scale.domain().collect();
    assert_eq!(domain, vec!["zeta", "alpha", "mid"]);
    assert!(scale.position("zeta").expect("zeta") < scale.position("alpha").expect("alpha"));
    assert_eq!(scale.index_of("mid"), Some(2));
}

#[test]
fn band_scale_unknown_key_has_no_position() {
    let scale = BandScale::new(["A"], (0.0, 10.0), 0.2).expect("band scale");
    assert_eq!(scale.position("B"), None);
    assert_eq!(scale.position_at(1), None);
}

#[test]
fn empty_band_scale_is_degenerate_not_an_error() {
    let scale = BandScale::new(Vec::<String>::new(), (0.0, 500.0), 0.3).expect("band scale");

    assert!(scale.is_empty());
    assert_eq!(scale.bandwidth(), 0.0);
    assert_eq!(scale.step(), 0.0);
    assert_eq!(scale.position_at(0), None);
}

#[test]
fn band_scale_rejects_padding_outside_unit_interval() {
    let result = BandScale::new(["A"], (0.0, 10.0), 1.0);
    assert!(matches!(result, Err(ChartError::InvalidPadding(_))));
}
