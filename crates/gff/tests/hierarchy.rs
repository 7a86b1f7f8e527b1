mod common;

use std::path::Path;

use common::*;
use glam::{Mat4, Vec3, Vec4};
use gff::{
    Document, DocumentError, DocumentHeader, Error, Loader, LoaderConfig, MemoryProvider,
    ModelHierarchy, labels,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// Follow `At` wrappers down to the underlying error.
fn root_cause(error: &Error) -> &Error {
    match error {
        Error::At { source, .. } => root_cause(source),
        other => other,
    }
}

fn door_model() -> gff::MemoryNode {
    let quarter = std::f32::consts::FRAC_1_SQRT_2;
    hierarchy(
        "door.msh",
        vec![root(vec![
            translation(10.0, 0.0, 0.0),
            rotation([0.0, 0.0, quarter, quarter]),
            part("panel", "body", vec![translation(1.0, 0.0, 0.0)])
                .with(labels::CAST_BAKED_SHADOW, 1u32)
                .with(labels::RECEIVE_BAKED_SHADOW, 0u32),
            tag_node(b"lght"),
            part("frame", "blocker", vec![]),
        ])],
    )
}

fn tag_node(bytes: &[u8; 4]) -> gff::MemoryNode {
    gff::MemoryNode::new(tag(bytes))
}

fn provider(model: gff::MemoryNode) -> MemoryProvider {
    MemoryProvider::new()
        .with("props/door.mmh", model.into_document())
        .with("props/door.msh", sample_mesh().into_document())
}

#[test]
fn parts_are_read_in_source_order() {
    init_tracing();
    let loader = Loader::new(provider(door_model()));
    let model = loader.load_model("props/door.mmh").unwrap();

    let parts = model.parts();
    assert_eq!(parts.len(), 2);
    assert_eq!(parts[0].name, "panel");
    assert_eq!(parts[0].mesh_group, "body");
    assert!(parts[0].casts_baked_shadow);
    assert!(!parts[0].receives_baked_shadow);
    assert_eq!(parts[1].name, "frame");
    assert!(!parts[1].casts_baked_shadow);
    assert!(!parts[1].receives_baked_shadow);
    assert_eq!(model.mesh().chunks().len(), 2);
}

#[test]
fn part_transforms_are_composed_with_the_root() {
    let model = Loader::new(provider(door_model()))
        .load_model("props/door.mmh")
        .unwrap();

    // Root: quarter turn about z, then move to x = 10. The panel's own
    // x offset is rotated onto y.
    let panel = &model.parts()[0].local_transform;
    let origin = panel.transform_point3(Vec3::ZERO);
    assert!(origin.abs_diff_eq(Vec3::new(10.0, 1.0, 0.0), 1e-5), "{origin}");

    // The frame has no transform children, so it sits at the root.
    let frame = &model.parts()[1].local_transform;
    assert!(frame.w_axis.abs_diff_eq(Vec4::new(10.0, 0.0, 0.0, 1.0), 1e-6));
}

#[test]
fn instantiate_applies_the_instance_transform_first() {
    let model = Loader::new(provider(door_model()))
        .load_model("props/door.mmh")
        .unwrap();
    let instance = Mat4::from_translation(Vec3::new(0.0, 0.0, 100.0));

    let placed = model.instantiate(&instance).unwrap();
    assert_eq!(placed.len(), 2);
    assert_eq!(placed[0].name, "panel");
    assert_eq!(placed[0].chunk.name, "body");
    assert_eq!(placed[1].chunk.name, "blocker");

    let origin = placed[0].transform.transform_point3(Vec3::ZERO);
    assert!(origin.abs_diff_eq(Vec3::new(10.0, 1.0, 100.0), 1e-5), "{origin}");
}

#[test]
fn instance_transforms_can_come_from_row_major_floats() {
    let rows = [
        1.0, 0.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, -5.0, //
        0.0, 0.0, 1.0, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    ];
    let instance = gff::matrix_from_row_major(&rows).unwrap();
    let model = Loader::new(provider(door_model()))
        .load_model("props/door.mmh")
        .unwrap();
    let placed = model.instantiate(&instance).unwrap();
    let origin = placed[1].transform.transform_point3(Vec3::ZERO);
    assert!(origin.abs_diff_eq(Vec3::new(10.0, -5.0, 0.0), 1e-6));
}

#[test]
fn unknown_mesh_group_fails_instantiation() {
    let model = hierarchy(
        "door.msh",
        vec![root(vec![part("ghost", "nowhere", vec![])])],
    );
    let model = Loader::new(provider(model))
        .load_model("props/door.mmh")
        .unwrap();

    let error = model.instantiate(&Mat4::IDENTITY).unwrap_err();
    assert!(
        matches!(&error, Error::UnknownMeshGroup { part, group } if part == "ghost" && group == "nowhere")
    );
}

#[test]
fn two_roots_are_rejected() {
    let model = hierarchy(
        "door.msh",
        vec![
            root(vec![part("a", "body", vec![])]),
            root(vec![part("b", "body", vec![])]),
        ],
    );
    let error = Loader::new(provider(model))
        .load_model("props/door.mmh")
        .unwrap_err();
    assert!(matches!(root_cause(&error), Error::RootCount(2)));
    assert!(error.to_string().contains("props/door.mmh"));
}

#[test]
fn zero_roots_are_rejected() {
    let error = Loader::new(provider(hierarchy("door.msh", vec![])))
        .load_model("props/door.mmh")
        .unwrap_err();
    assert!(matches!(root_cause(&error), Error::RootCount(0)));
}

#[test]
fn models_without_mesh_parts_are_rejected() {
    let model = hierarchy(
        "door.msh",
        vec![root(vec![translation(1.0, 2.0, 3.0), tag_node(b"lght")])],
    );
    let error = Loader::new(provider(model))
        .load_model("props/door.mmh")
        .unwrap_err();
    assert!(matches!(root_cause(&error), Error::NoParts));
}

#[test]
fn missing_mesh_document_aborts_the_model() {
    let provider = MemoryProvider::new().with("props/door.mmh", door_model().into_document());
    let error = Loader::new(provider)
        .load_model("props/door.mmh")
        .unwrap_err();
    assert!(matches!(
        &error,
        Error::MissingMeshReference { mesh, .. } if mesh == Path::new("props/door.msh")
    ));
}

#[test]
fn unsupported_versions_are_rejected() {
    let mut document = door_model().into_document();
    document.header = DocumentHeader {
        version: *b"V3.2",
        ..DocumentHeader::V4
    };
    let provider = provider(door_model()).with("props/old.mmh", document);

    let error = Loader::new(provider)
        .load_model("props/old.mmh")
        .unwrap_err();
    assert!(matches!(
        error,
        Error::Document(DocumentError::BadVersion { .. })
    ));
}

#[test]
fn depth_limit_comes_from_config() {
    let config = LoaderConfig { max_depth: 2 };
    let error = Loader::with_config(provider(door_model()), config)
        .load_model("props/door.mmh")
        .unwrap_err();
    assert!(matches!(root_cause(&error), Error::DepthExceeded(2)));

    let relaxed = LoaderConfig { max_depth: 3 };
    assert!(
        Loader::with_config(provider(door_model()), relaxed)
            .load_model("props/door.mmh")
            .is_ok()
    );
}

#[test]
fn hierarchy_decodes_directly_from_nodes() {
    let mesh = gff::MeshDocument::from_node(&sample_mesh()).unwrap();
    let top = door_model();
    assert_eq!(ModelHierarchy::mesh_reference(&top).unwrap(), "door.msh");

    let model = ModelHierarchy::from_node(&top, mesh, 16).unwrap();
    assert_eq!(model.parts().len(), 2);
}

#[test]
fn documents_default_to_gff_v4() {
    let document = Document::new(std::sync::Arc::new(sample_mesh()));
    assert_eq!(document.header, DocumentHeader::V4);
}
