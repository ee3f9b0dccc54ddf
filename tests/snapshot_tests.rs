use chart_compose::api::{
    COMPOSITION_SNAPSHOT_JSON_SCHEMA_V1, CompositionSnapshot, CompositionSnapshotJsonContractV1,
};
use chart_compose::core::{ChartSpec, DataEntry, Dataset, Lane, Margins, MeasureValues, Viewport};
use chart_compose::{CombinationChart, CompositionConfig};

fn chart() -> CombinationChart {
    let config = CompositionConfig::builder()
        .set_margins(Margins::uniform(0.0))
        .add_chart(ChartSpec::bar("x", "#000"))
        .add_chart(ChartSpec::area("x", "#111"))
        .build()
        .expect("config");
    let mut chart = CombinationChart::new(config).expect("chart");
    chart
        .set_data(
            Dataset::from_entries([
                DataEntry::new("A", MeasureValues::new().with("x", 3.0)),
                DataEntry::new("B", MeasureValues::new().with("x", 9.0)),
            ])
            .expect("dataset"),
        )
        .expect("data");
    chart
}

#[test]
fn snapshot_without_container_has_no_layout() {
    let snapshot = chart().snapshot();

    assert_eq!(snapshot.categories, vec!["A", "B"]);
    assert_eq!(snapshot.value_extent, (0.0, 9.0));
    assert_eq!(snapshot.value_domain, (0.0, 9.0));
    assert_eq!(snapshot.viewport, None);
    assert_eq!(snapshot.plot_area, None);
    assert_eq!(snapshot.bandwidth, None);
    assert_eq!(snapshot.charts.len(), 2);
    assert!(snapshot.charts.iter().all(|chart| chart.lane.is_none()));
}

#[test]
fn snapshot_lists_charts_with_lanes_once_ready() {
    let mut chart = chart();
    chart
        .set_container_size(Viewport::new(200, 100))
        .expect("container size");

    let snapshot = chart.snapshot();

    assert_eq!(snapshot.bandwidth, Some(90.0));
    assert_eq!(snapshot.charts[0].kind.as_deref(), Some("bar"));
    assert!(snapshot.charts[0].requires_space);
    assert_eq!(snapshot.charts[0].extent, Some((3.0, 9.0)));
    assert_eq!(snapshot.charts[0].lane, Some(Lane::new(90.0, 0.0)));
    assert_eq!(snapshot.charts[1].kind.as_deref(), Some("area"));
    assert!(!snapshot.charts[1].requires_space);
    assert_eq!(snapshot.revision, chart.store().revision());
}

#[test]
fn json_contract_wraps_snapshot_with_schema_version() {
    let mut chart = chart();
    chart
        .set_container_size(Viewport::new(200, 100))
        .expect("container size");
    let snapshot = chart.snapshot();

    let json = chart
        .store()
        .snapshot_json_contract_v1_pretty()
        .expect("json");
    let payload: CompositionSnapshotJsonContractV1 =
        serde_json::from_str(&json).expect("contract payload");

    assert_eq!(payload.schema_version, COMPOSITION_SNAPSHOT_JSON_SCHEMA_V1);
    assert_eq!(payload.snapshot, snapshot);
    assert_eq!(
        CompositionSnapshot::from_json_compat_str(&json).expect("compat parse"),
        snapshot
    );
}

#[test]
fn compat_parser_accepts_bare_snapshot() {
    let snapshot = chart().snapshot();
    let bare = serde_json::to_string(&snapshot).expect("json");

    let parsed = CompositionSnapshot::from_json_compat_str(&bare).expect("compat parse");
    assert_eq!(parsed, snapshot);
}

#[test]
fn compat_parser_rejects_unknown_schema_version() {
    let snapshot = chart().snapshot();
    let payload = serde_json::json!({
        "schema_version": 99,
        "snapshot": snapshot,
    });

    let result = CompositionSnapshot::from_json_compat_str(&payload.to_string());
    assert!(result.is_err());
}
