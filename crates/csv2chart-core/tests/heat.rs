// File: crates/csv2chart-core/tests/heat.rs
// Purpose: Point cloud construction, color scale resolution and chart assembly.

use csv2chart_core::chart::RectangleEdge;
use csv2chart_core::config::{LIGHT_GRAY, PASTEL_BLUE, PASTEL_RED, PASTEL_YELLOW};
use csv2chart_core::heat::assemble_chart;
use csv2chart_core::{
    build_heat_chart, build_point_cloud, resolve_color_scale, resolve_header_counts, ColorScale, Error, HeatChart,
    LoaderOptions, Matrix, Overrides, PaintScale, PlotOrientation, Rgb, TableLoader,
};

fn grid(rows: usize, cols: usize) -> Matrix {
    let mut m = Matrix::new();
    for y in 0..rows {
        for x in 0..cols {
            m.set(x, y, format!("{}", y * cols + x));
        }
    }
    m
}

#[test]
fn point_cloud_without_headers_uses_indices() {
    let (rows, cols) = (3, 4);
    let cloud = build_point_cloud(&grid(rows, cols), 0, 0, false).unwrap();
    assert_eq!(cloud.len(), rows * cols);
    for r in 0..rows {
        assert_eq!(cloud.xs.iter().filter(|&&x| x == r as f64).count(), cols);
    }
    for c in 0..cols {
        assert_eq!(cloud.ys.iter().filter(|&&y| y == c as f64).count(), rows);
    }
    // row-major order
    assert_eq!(&cloud.xs[..5], &[0.0, 0.0, 0.0, 0.0, 1.0]);
    assert_eq!(&cloud.ys[..5], &[0.0, 1.0, 2.0, 3.0, 0.0]);
    assert_eq!((cloud.min_z, cloud.max_z), (0.0, 11.0));
}

#[test]
fn point_cloud_reads_numeric_headers() {
    let m = Matrix::from_rows([
        vec!["", "10", "20"],
        vec!["1.5", "7", "8"],
        vec!["2.5", "9", "-1"],
    ]);
    let cloud = build_point_cloud(&m, 1, 1, false).unwrap();
    assert_eq!(cloud.xs, vec![1.5, 1.5, 2.5, 2.5]);
    assert_eq!(cloud.ys, vec![10.0, 20.0, 10.0, 20.0]);
    assert_eq!(cloud.zs, vec![7.0, 8.0, 9.0, -1.0]);
    assert_eq!((cloud.min_z, cloud.max_z), (-1.0, 9.0));
}

#[test]
fn header_counts_prefer_detection_then_flags() {
    let detected = Matrix::from_rows([vec!["a", "b"], vec!["1", "2"]]);
    let mut o = Overrides::new();
    assert_eq!(resolve_header_counts(&detected, &o), (1, 0));

    let numeric = grid(2, 2);
    assert_eq!(resolve_header_counts(&numeric, &o), (0, 0));
    o.header_row = Some(true);
    o.header_column = Some(true);
    assert_eq!(resolve_header_counts(&numeric, &o), (1, 1));
}

#[test]
fn unparsable_value_names_its_position() {
    let m = Matrix::from_rows([vec!["1", "2"], vec!["3", "n/a"]]);
    let err = build_point_cloud(&m, 0, 0, false).unwrap_err();
    match err {
        Error::InvalidValue { column, row, value } => {
            assert_eq!((column, row), (1, 1));
            assert_eq!(value, "n/a");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn non_numeric_row_header_is_an_error() {
    let (m, mut o) = TableLoader::default().ingest("x,1,2\ncat,10,20\ndog,30,40\n").unwrap();
    o.header_row = Some(true);
    o.header_column = Some(true);
    let err = build_heat_chart(&m, &o).unwrap_err();
    assert!(matches!(err, Error::InvalidValue { column: 0, row: 1, .. }));
}

#[test]
fn missing_cell_and_empty_region() {
    let mut m = grid(2, 2);
    m.set(2, 0, "5");
    assert!(matches!(build_point_cloud(&m, 0, 0, false), Err(Error::MissingCell { column: 2, row: 1 })));

    let headers_only = Matrix::from_rows([vec!["a", "b"]]);
    assert!(matches!(build_point_cloud(&headers_only, 1, 0, false), Err(Error::EmptyData)));
}

#[test]
fn three_stop_scale_hits_anchors_and_blends() {
    let mut o = Overrides::new();
    o.color_scale_min_value = Some(0.0);
    o.color_scale_mid_value = Some(50.0);
    o.color_scale_max_value = Some(100.0);
    o.color_scale_min_color = Some(Rgb::new(0, 0, 255));
    o.color_scale_mid_color = Some(Rgb::new(255, 255, 255));
    o.color_scale_max_color = Some(Rgb::new(255, 0, 0));
    let (_, scale) = resolve_color_scale(&o, 3.0, 97.0);

    assert!(matches!(scale, ColorScale::ThreeStop(_)));
    assert_eq!(scale.paint(0.0), Rgb::new(0, 0, 255));
    assert_eq!(scale.paint(50.0), Rgb::new(255, 255, 255));
    assert_eq!(scale.paint(100.0), Rgb::new(255, 0, 0));

    let quarter = scale.paint(25.0);
    for (got, want) in [(quarter.r, 127.5), (quarter.g, 127.5), (quarter.b, 255.0)] {
        assert!((f64::from(got) - want).abs() <= 1.0, "{quarter:?}");
    }
    assert_eq!(scale.paint(75.0), Rgb::new(255, 128, 128));
}

#[test]
fn out_of_domain_uses_default_color_for_every_shape() {
    let default = Rgb::new(1, 2, 3);
    let shapes = [(Some(0.0), Some(5.0), Some(10.0)), (Some(0.0), Some(20.0), Some(10.0)), (Some(0.0), Some(0.0), Some(10.0))];
    for (min, mid, max) in shapes {
        let mut o = Overrides::new();
        o.color_scale_min_value = min;
        o.color_scale_mid_value = mid;
        o.color_scale_max_value = max;
        o.color_scale_default_color = Some(default);
        let (_, scale) = resolve_color_scale(&o, 0.0, 10.0);
        assert_eq!(scale.paint(-0.001), default, "{scale:?}");
        assert_eq!(scale.paint(10.001), default, "{scale:?}");
        assert_ne!(scale.paint(5.0), default, "{scale:?}");
    }
}

#[test]
fn defaults_come_from_data_and_fallback_colors() {
    let (settings, scale) = resolve_color_scale(&Overrides::new(), -4.0, 8.0);
    assert_eq!((settings.min_value, settings.mid_value, settings.max_value), (-4.0, 0.0, 8.0));
    assert_eq!(settings.min_color, PASTEL_BLUE);
    assert_eq!(settings.mid_color, PASTEL_YELLOW);
    assert_eq!(settings.max_color, PASTEL_RED);
    assert_eq!(settings.default_color, LIGHT_GRAY);
    assert!(matches!(scale, ColorScale::ThreeStop(_)));
    assert_eq!(scale.paint(0.0), PASTEL_YELLOW);
}

#[test]
fn mid_value_is_midpoint_when_mid_color_given_and_min_non_negative() {
    let mut o = Overrides::new();
    o.color_scale_min_value = Some(5.0);
    o.color_scale_mid_color = Some(Rgb::new(0, 0, 0));
    let (settings, _) = resolve_color_scale(&o, 0.0, 25.0);
    assert_eq!(settings.mid_value, (25.0 - 5.0) / 2.0 + 5.0);

    // without an explicit mid color the midpoint stays at zero
    o.color_scale_mid_color = None;
    let (settings, _) = resolve_color_scale(&o, 0.0, 25.0);
    assert_eq!(settings.mid_value, 0.0);

    // negative minimum keeps zero as midpoint
    o.color_scale_mid_color = Some(Rgb::new(0, 0, 0));
    o.color_scale_min_value = Some(-5.0);
    let (settings, _) = resolve_color_scale(&o, 0.0, 25.0);
    assert_eq!(settings.mid_value, 0.0);
}

#[test]
fn positive_data_without_overrides_uses_mid_to_max_two_stop() {
    let (settings, scale) = resolve_color_scale(&Overrides::new(), 2.0, 9.0);
    assert_eq!(settings.mid_value, 0.0);
    match scale {
        ColorScale::TwoStop(s) => {
            assert_eq!((s.lower, s.upper), (2.0, 9.0));
            assert_eq!((s.low_color, s.high_color), (PASTEL_YELLOW, PASTEL_RED));
        }
        other => panic!("expected two-stop scale, got {other:?}"),
    }
}

#[test]
fn mid_above_max_inverts_to_min_color() {
    let mut o = Overrides::new();
    o.color_scale_mid_value = Some(50.0);
    let (_, scale) = resolve_color_scale(&o, 0.0, 10.0);
    match scale {
        ColorScale::TwoStop(s) => {
            assert_eq!((s.lower, s.upper), (0.0, 10.0));
            assert_eq!((s.low_color, s.high_color), (PASTEL_YELLOW, PASTEL_BLUE));
        }
        other => panic!("expected two-stop scale, got {other:?}"),
    }
}

#[test]
fn tiny_data_range_still_reaches_high_color() {
    let mut o = Overrides::new();
    o.color_scale_mid_value = Some(0.0);
    o.color_scale_mid_color = Some(Rgb::new(0, 0, 0));
    o.color_scale_max_color = Some(Rgb::new(255, 255, 255));
    let (_, scale) = resolve_color_scale(&o, 1e-17, 3e-17);

    assert!(matches!(scale, ColorScale::TwoStop(_)));
    assert_eq!(scale.paint(1e-17), Rgb::new(0, 0, 0));
    assert_eq!(scale.paint(3e-17), Rgb::new(255, 255, 255));
    let middle = scale.paint(2e-17);
    assert!((127..=128).contains(&middle.g), "{middle:?}");
}

#[test]
fn z_extent_ignores_scale_overrides() {
    let mut o = Overrides::new();
    o.color_scale_min_value = Some(-100.0);
    o.color_scale_max_value = Some(100.0);
    let chart = build_heat_chart(&grid(2, 3), &o).unwrap();
    assert_eq!(chart.z_extent, (0.0, 5.0));
    assert_eq!((chart.scale().lower_bound(), chart.scale().upper_bound()), (-100.0, 100.0));
    assert_eq!((chart.header_rows, chart.header_columns), (0, 0));
}

#[test]
fn assembled_chart_layout() {
    let text = "\
# csv2chart.title=Load
# csv2chart.xAxisLabel=hour
# csv2chart.yAxisLabel=day
# csv2chart.zAxisLabel=kW
# csv2chart.headerColumn=true
# csv2chart.headerRow=true
day,0,1,2
1,3,4,5
2,6,7,8
";
    let (m, o) = TableLoader::default().ingest(text).unwrap();
    let chart = build_heat_chart(&m, &o).unwrap();

    assert_eq!(chart.title.as_deref(), Some("Load"));
    assert_eq!((chart.header_rows, chart.header_columns), (1, 1));
    assert_eq!(chart.z_extent, (3.0, 8.0));
    assert_eq!(chart.plot.orientation, PlotOrientation::Horizontal);
    assert_eq!(chart.plot.dataset.len(), 6);

    let rows = chart.vertical_axis();
    assert_eq!(rows.label.as_deref(), Some("day"));
    assert_eq!((rows.min, rows.max), (0.5, 2.5));
    assert!(!rows.auto_range_includes_zero);
    let columns = chart.horizontal_axis();
    assert_eq!(columns.label.as_deref(), Some("hour"));
    assert_eq!((columns.min, columns.max), (-0.5, 2.5));

    let legend = chart.legend.as_ref().expect("legend");
    assert_eq!(legend.position, RectangleEdge::Right);
    assert_eq!(legend.axis.label.as_deref(), Some("kW"));
    assert_eq!((legend.axis.min, legend.axis.max), (3.0, 8.0));
    assert_eq!(legend.strip_width, 10.0);
    assert_eq!(legend.axis.tick_label_font.as_ref().map(|f| f.size), Some(7.0));
    assert_eq!(legend.strip(2).len(), 2);

    let first = chart.cells().next().unwrap();
    assert_eq!((first.0, first.1), (1.0, 0.0));
    assert_eq!(first.2, PASTEL_YELLOW);
}

#[test]
fn legend_can_be_disabled() {
    let cloud = build_point_cloud(&grid(2, 2), 0, 0, false).unwrap();
    let mut o = Overrides::new();
    o.legend = Some(false);
    let (settings, scale) = resolve_color_scale(&o, cloud.min_z, cloud.max_z);
    let chart = assemble_chart(cloud, scale, &settings, &o);
    assert!(chart.legend.is_none());
    assert!(chart.title.is_none());
}

#[test]
fn chart_from_file() {
    let out = std::path::PathBuf::from("target/test_out/heat_from_file.csv");
    std::fs::create_dir_all(out.parent().unwrap()).unwrap();
    std::fs::write(&out, "# csv2chart.colorScaleMidColor=white\n1;2\n3;4\n").unwrap();

    let chart = HeatChart::from_path(&out, &LoaderOptions::new(b';', "#")).expect("chart");
    assert_eq!(chart.plot.dataset.zs, vec![1.0, 2.0, 3.0, 4.0]);
    match chart.scale() {
        ColorScale::ThreeStop(s) => assert_eq!(s.mid, 2.5),
        other => panic!("expected three-stop scale, got {other:?}"),
    }
}
