use std::fs;
use std::path::{Path, PathBuf};

use glam::{DVec2, UVec2};

use cellgraph::loaders::load_map_yaml;
use cellgraph::types::{FREE, OCCUPIED};
use cellgraph::visualization::{binary_map_to_image, cost_map_to_image};
use cellgraph::{CellGraphBuilder, GraphError};

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn corridor() -> CellGraphBuilder {
    CellGraphBuilder::from_files(fixture("corridor.pgm"), fixture("corridor.yaml"), Some(1.0))
        .expect("corridor map should load")
}

#[test]
fn loads_corridor_metadata() {
    let map = load_map_yaml(fixture("corridor.yaml")).expect("yaml should load");
    assert_eq!(map.info.resolution, 0.25);
    assert_eq!(map.info.origin, DVec2::new(-1.0, -0.5));
    assert_eq!(map.image, Some(fixture("corridor.pgm")));
}

#[test]
fn corridor_cost_map_marks_the_wall_block() {
    let result = corridor().build().expect("pipeline should succeed");
    let costs = &result.cost_map;

    assert_eq!(costs.unit_length(), 4);
    assert_eq!((costs.h_units(), costs.v_units()), (3, 2));
    assert_eq!(costs.data(), &[FREE, FREE, OCCUPIED, FREE, FREE, FREE]);
}

#[test]
fn corridor_pixel_graph() {
    let (_, pixel) = corridor().build_graph().expect("pipeline should succeed");
    let p = UVec2::new;

    let expected = [
        (p(2, 2), vec![p(2, 6), p(6, 6)]),
        (p(2, 6), vec![p(2, 2), p(6, 6)]),
        (p(6, 6), vec![p(2, 6), p(10, 6), p(2, 2), p(10, 2)]),
        (p(10, 2), vec![p(10, 6), p(6, 6)]),
        (p(10, 6), vec![p(10, 2), p(6, 6)]),
    ];

    assert_eq!(pixel.len(), expected.len());
    for (vertex, (position, neighbors)) in pixel.iter().zip(expected) {
        assert_eq!(vertex.position, position);
        assert_eq!(vertex.neighbors, neighbors);
    }
}

#[test]
fn corridor_metric_graph() {
    let result = corridor().build().expect("pipeline should succeed");
    // origin (-1.0, -0.5) at 0.25 m/px on an 8 px tall raster -> origin pixel (4, 6)
    assert_eq!(result.mapper.origin_px(), glam::IVec2::new(4, 6));

    let d = DVec2::new;
    let positions: Vec<_> = result.metric.iter().map(|v| v.position).collect();
    assert_eq!(
        positions,
        [
            d(-0.5, 1.0),
            d(-0.5, 0.0),
            d(0.5, 0.0),
            d(1.5, 1.0),
            d(1.5, 0.0)
        ]
    );
    assert_eq!(
        result.metric.neighbors(&d(0.5, 0.0)).unwrap(),
        &[d(-0.5, 0.0), d(1.5, 0.0), d(-0.5, 1.0), d(1.5, 1.0)]
    );
}

#[test]
fn yaml_image_entry_locates_the_raster() {
    let from_yaml = CellGraphBuilder::from_yaml(fixture("corridor.yaml"), Some(1.0))
        .expect("map should load from yaml")
        .build_graph()
        .unwrap();
    let from_files = corridor().build_graph().unwrap();
    assert_eq!(from_yaml, from_files);
}

#[test]
fn default_unit_length_is_point_eight_meters() {
    let builder =
        CellGraphBuilder::from_files(fixture("corridor.pgm"), fixture("corridor.yaml"), None)
            .unwrap();
    assert_eq!(builder.config().unit_length_m, 0.8);
    // 0.8 m at 0.25 m/px truncates to 3 px cells.
    let result = builder.build().unwrap();
    assert_eq!(result.cost_map.unit_length(), 3);
    assert_eq!((result.cost_map.h_units(), result.cost_map.v_units()), (4, 2));
}

#[test]
fn missing_resolution_is_a_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let yaml = dir.path().join("map.yaml");
    fs::write(&yaml, "image: corridor.pgm\norigin: [0.0, 0.0, 0.0]\n").unwrap();

    let err = CellGraphBuilder::from_files(fixture("corridor.pgm"), &yaml, None).unwrap_err();
    assert!(matches!(err, GraphError::Config(_)), "{err}");
}

#[test]
fn yaml_without_image_cannot_locate_raster() {
    let dir = tempfile::tempdir().unwrap();
    let yaml = dir.path().join("map.yaml");
    fs::write(&yaml, "resolution: 0.05\norigin: [0.0, 0.0, 0.0]\n").unwrap();

    let err = CellGraphBuilder::from_yaml(&yaml, None).unwrap_err();
    assert!(matches!(err, GraphError::Config(_)), "{err}");
}

#[test]
fn raster_without_magic_is_a_format_error() {
    let dir = tempfile::tempdir().unwrap();
    let pgm = dir.path().join("map.pgm");
    fs::write(&pgm, b"P6\n2 2\n255\n\0\0\0\0").unwrap();

    let err = CellGraphBuilder::from_files(&pgm, fixture("corridor.yaml"), None).unwrap_err();
    assert!(matches!(err, GraphError::Format(_)), "{err}");
}

#[test]
fn truncated_raster_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let pgm = dir.path().join("map.pgm");
    fs::write(&pgm, b"P5\n4 4\n255\n\0\0\0\0\0").unwrap();

    let err = CellGraphBuilder::from_files(&pgm, fixture("corridor.yaml"), None).unwrap_err();
    assert!(matches!(
        err,
        GraphError::TruncatedData {
            expected: 16,
            found: 5
        }
    ));
}

#[test]
fn sixteen_bit_raster_builds_the_same_graph() {
    let raster = fs::read(fixture("corridor.pgm")).unwrap();
    let header_len = b"P5\n# CREATOR: cellgraph test fixture\n12 8\n255\n".len();

    let mut wide = b"P5\n12 8\n65535\n".to_vec();
    for &sample in &raster[header_len..] {
        // Scale 8-bit samples to 16 bits, big-endian.
        wide.extend_from_slice(&(u16::from(sample) * 257).to_be_bytes());
    }

    let dir = tempfile::tempdir().unwrap();
    let pgm = dir.path().join("wide.pgm");
    fs::write(&pgm, wide).unwrap();

    // 254 * 257 is far above the 8-bit threshold, 0 stays below it.
    let wide_graph = CellGraphBuilder::from_files(&pgm, fixture("corridor.yaml"), Some(1.0))
        .unwrap()
        .build_graph()
        .unwrap();
    assert_eq!(wide_graph, corridor().build_graph().unwrap());
}

#[test]
fn missing_files_are_io_errors() {
    let err = CellGraphBuilder::from_files(
        fixture("does-not-exist.pgm"),
        fixture("corridor.yaml"),
        None,
    )
    .unwrap_err();
    assert!(matches!(err, GraphError::Io(_)));
}

#[test]
fn previews_are_written_as_raster_aligned_pngs() {
    let result = corridor().build().unwrap();
    let dir = tempfile::tempdir().unwrap();
    let cells = dir.path().join("cells.png");
    let pixels = dir.path().join("pixels.png");

    cost_map_to_image(&result.cost_map).save(&cells).unwrap();
    binary_map_to_image(&result.binary_map).save(&pixels).unwrap();

    let cells = image::open(&cells).unwrap().into_luma8();
    assert_eq!(cells.dimensions(), (3, 2));
    assert_eq!(cells.get_pixel(1, 0).0[0], 0);
    assert_eq!(cells.get_pixel(0, 0).0[0], 254);

    // Wall block covers raster x 5..=8, y 0..=4.
    let pixels = image::open(&pixels).unwrap().into_luma8();
    assert_eq!(pixels.dimensions(), (12, 8));
    assert_eq!(pixels.get_pixel(6, 2).0[0], 0);
    assert_eq!(pixels.get_pixel(0, 7).0[0], 254);
    assert_eq!(pixels.get_pixel(11, 0).0[0], 254);
}
