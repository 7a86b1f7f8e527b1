//! Fixture builders shared by the integration tests.

#![allow(dead_code)]

use gff::{MemoryNode, MemoryValue, StructType, labels};

pub const POSITION: u32 = 0;
pub const NORMAL: u32 = 3;
pub const TEXCOORD: u32 = 5;
pub const TANGENT: u32 = 6;

pub const FLOAT2: u32 = 1;
pub const FLOAT3: u32 = 2;
pub const FLOAT4: u32 = 3;
pub const FLOAT16_2: u32 = 15;

pub fn tag(bytes: &[u8; 4]) -> StructType {
    StructType::from_bytes(*bytes)
}

pub fn floats(values: &[f32]) -> Vec<u8> {
    values.iter().flat_map(|f| f.to_le_bytes()).collect()
}

pub fn u16s(values: &[u16]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_le_bytes()).collect()
}

pub fn declarator(usage: u32, usage_index: u32, offset: u32, data_type: u32) -> MemoryNode {
    MemoryNode::new(tag(b"decl"))
        .with(labels::DECLARATOR_USAGE, usage)
        .with(labels::DECLARATOR_USAGE_INDEX, usage_index)
        .with(labels::DECLARATOR_OFFSET, offset)
        .with(labels::DECLARATOR_DATATYPE, data_type)
}

/// Chunk metadata; unset fields describe an empty triangle list.
#[derive(Default)]
pub struct ChunkSpec {
    pub name: &'static str,
    pub primitive: u32,
    pub vertex_size: u32,
    pub vertex_count: u32,
    pub vertex_offset: u32,
    pub index_format: u32,
    pub start_index: u32,
    pub index_count: u32,
    pub sphere: [f32; 4],
    pub declarators: Vec<MemoryNode>,
}

impl ChunkSpec {
    pub fn build(self) -> MemoryNode {
        MemoryNode::new(tag(b"chnk"))
            .with(labels::NAME, self.name)
            .with(labels::CHUNK_PRIMITIVE_TYPE, self.primitive)
            .with(labels::CHUNK_VERTEX_SIZE, self.vertex_size)
            .with(labels::CHUNK_VERTEX_COUNT, self.vertex_count)
            .with(labels::CHUNK_VERTEX_OFFSET, self.vertex_offset)
            .with(labels::CHUNK_INDEX_FORMAT, self.index_format)
            .with(labels::CHUNK_START_INDEX, self.start_index)
            .with(labels::CHUNK_INDEX_COUNT, self.index_count)
            .with(
                labels::CHUNK_BOUNDS,
                MemoryNode::new(tag(b"bnds")).with(labels::BOUNDS_SPHERE, self.sphere.to_vec()),
            )
            .with(
                labels::CHUNK_VERTEX_DECLARATOR,
                MemoryValue::structs(self.declarators),
            )
    }
}

pub fn mesh_document(vertex_data: Vec<u8>, index_data: Vec<u8>, chunks: Vec<MemoryNode>) -> MemoryNode {
    MemoryNode::new(tag(b"mesh"))
        .with(labels::VERTEX_DATA, vertex_data)
        .with(labels::INDEX_DATA, index_data)
        .with(labels::CHUNKS, MemoryValue::structs(chunks))
}

/// Mesh with a lit chunk "body" and an occlusion-only chunk "blocker".
///
/// - "body": 3 vertices of 32 bytes (position, uv channel 1, normal), with a
///   uv channel 0 that must be ignored. Indices 0..3.
/// - "blocker": 3 vertices of 16 bytes (float4 position only) at byte 96.
///   Indices start at element 5.
pub fn sample_mesh() -> MemoryNode {
    let mut vertex_data = Vec::new();
    for (i, uv) in [[0.0, 0.2], [1.0, 0.2], [0.5, 1.0]].iter().enumerate() {
        #[allow(clippy::cast_precision_loss)]
        let x = i as f32;
        vertex_data.extend(floats(&[x, 0.0, 0.0]));
        vertex_data.extend(floats(uv));
        vertex_data.extend(floats(&[0.0, 0.0, 1.0]));
    }
    for w in [1.0, 2.0, 3.0] {
        vertex_data.extend(floats(&[w, w, w, w]));
    }

    let index_data = u16s(&[0, 1, 2, 9, 9, 2, 1, 0]);

    let body = ChunkSpec {
        name: "body",
        vertex_size: 32,
        vertex_count: 3,
        index_count: 3,
        sphere: [0.5, 0.0, 0.0, 1.0],
        declarators: vec![
            declarator(POSITION, 0, 0, FLOAT3),
            declarator(TEXCOORD, 0, 0, FLOAT2),
            declarator(TEXCOORD, 1, 12, FLOAT2),
            declarator(NORMAL, 0, 20, FLOAT3),
            declarator(TANGENT, 0, 0, 99),
        ],
        ..ChunkSpec::default()
    }
    .build();

    let blocker = ChunkSpec {
        name: "blocker",
        vertex_size: 16,
        vertex_count: 3,
        vertex_offset: 96,
        start_index: 5,
        index_count: 3,
        sphere: [2.0, 2.0, 2.0, 3.5],
        declarators: vec![declarator(POSITION, 0, 0, FLOAT4)],
        ..ChunkSpec::default()
    }
    .build();

    mesh_document(vertex_data, index_data, vec![body, blocker])
}

pub fn translation(x: f32, y: f32, z: f32) -> MemoryNode {
    MemoryNode::new(StructType::TRANSLATION).with(labels::TRANSLATION, vec![x, y, z, 1.0])
}

pub fn rotation(q: [f32; 4]) -> MemoryNode {
    MemoryNode::new(StructType::ROTATION).with(labels::ROTATION, q.to_vec())
}

pub fn part(name: &str, mesh_group: &str, children: Vec<MemoryNode>) -> MemoryNode {
    MemoryNode::new(StructType::MESH)
        .with(labels::MMH_NAME, name)
        .with(labels::MESH_GROUP_NAME, mesh_group)
        .with(labels::CHILDREN, MemoryValue::references(children))
}

pub fn root(children: Vec<MemoryNode>) -> MemoryNode {
    MemoryNode::new(tag(b"node"))
        .with(labels::MMH_NAME, "root")
        .with(labels::CHILDREN, MemoryValue::references(children))
}

pub fn hierarchy(mesh_name: &str, roots: Vec<MemoryNode>) -> MemoryNode {
    MemoryNode::new(tag(b"mmh "))
        .with(labels::MODEL_DATA_NAME, mesh_name)
        .with(labels::CHILDREN, MemoryValue::references(roots))
}
