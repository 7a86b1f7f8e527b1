//! Fixed label registry shared with the document provider.

use crate::Label;

/// Generic name field (mesh chunks).
pub const NAME: Label = Label(2);

/// Name of a hierarchy node.
pub const MMH_NAME: Label = Label(6000);
/// File name of the companion mesh document.
pub const MODEL_DATA_NAME: Label = Label(6005);
/// Mesh group (chunk) a hierarchy mesh node draws.
pub const MESH_GROUP_NAME: Label = Label(6006);
/// Translation vector of a `trsl` node.
pub const TRANSLATION: Label = Label(6047);
/// Rotation quaternion of a `rota` node.
pub const ROTATION: Label = Label(6048);
pub const CAST_BAKED_SHADOW: Label = Label(6177);
pub const RECEIVE_BAKED_SHADOW: Label = Label(6301);
/// Child references of a hierarchy node (or of the document root).
pub const CHILDREN: Label = Label(6999);

pub const CHUNK_VERTEX_SIZE: Label = Label(8000);
pub const CHUNK_VERTEX_COUNT: Label = Label(8001);
pub const CHUNK_INDEX_COUNT: Label = Label(8002);
pub const CHUNK_PRIMITIVE_TYPE: Label = Label(8003);
pub const CHUNK_INDEX_FORMAT: Label = Label(8004);
pub const CHUNK_VERTEX_OFFSET: Label = Label(8006);
pub const CHUNK_START_INDEX: Label = Label(8009);
/// Bounding sphere inside a chunk's bounds struct: center xyz, radius.
pub const BOUNDS_SPHERE: Label = Label(8019);
pub const CHUNK_BOUNDS: Label = Label(8020);
/// List of chunk structs in a mesh document.
pub const CHUNKS: Label = Label(8021);
/// Vertex blob shared by every chunk.
pub const VERTEX_DATA: Label = Label(8022);
/// Index blob shared by every chunk.
pub const INDEX_DATA: Label = Label(8023);
pub const CHUNK_VERTEX_DECLARATOR: Label = Label(8025);
pub const DECLARATOR_OFFSET: Label = Label(8027);
pub const DECLARATOR_DATATYPE: Label = Label(8028);
pub const DECLARATOR_USAGE: Label = Label(8029);
pub const DECLARATOR_USAGE_INDEX: Label = Label(8030);
