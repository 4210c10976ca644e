use super::*;
use std::fs;

const STATIC_GLTF: &str = r#"{
    "asset": { "version": "2.0" },
    "scene": 0,
    "scenes": [ { "nodes": [0] } ],
    "nodes": [ { "name": "root", "children": [1] }, { "name": "child" } ]
}"#;

// Two keyframes at t = 0 and t = 1 moving the root from the origin to y = 2.
const ANIMATED_GLTF: &str = r#"{
    "asset": { "version": "2.0" },
    "scene": 0,
    "scenes": [ { "nodes": [0] } ],
    "nodes": [ { "name": "root" } ],
    "buffers": [ {
        "byteLength": 32,
        "uri": "data:application/octet-stream;base64,AAAAAAAAgD8AAAAAAAAAAAAAAAAAAAAAAAAAQAAAAAA="
    } ],
    "bufferViews": [
        { "buffer": 0, "byteOffset": 0, "byteLength": 8 },
        { "buffer": 0, "byteOffset": 8, "byteLength": 24 }
    ],
    "accessors": [
        { "bufferView": 0, "componentType": 5126, "count": 2, "type": "SCALAR", "min": [0.0], "max": [1.0] },
        { "bufferView": 1, "componentType": 5126, "count": 2, "type": "VEC3" }
    ],
    "animations": [ {
        "name": "Bob",
        "samplers": [ { "input": 0, "output": 1, "interpolation": "LINEAR" } ],
        "channels": [ { "sampler": 0, "target": { "node": 0, "path": "translation" } } ]
    } ]
}"#;

// Same keyframes, but driving a child bone instead of the root.
const BONE_GLTF: &str = r#"{
    "asset": { "version": "2.0" },
    "scene": 0,
    "scenes": [ { "nodes": [0] } ],
    "nodes": [ { "name": "armature", "children": [1] }, { "name": "hips" } ],
    "buffers": [ {
        "byteLength": 32,
        "uri": "data:application/octet-stream;base64,AAAAAAAAgD8AAAAAAAAAAAAAAAAAAAAAAAAAQAAAAAA="
    } ],
    "bufferViews": [
        { "buffer": 0, "byteOffset": 0, "byteLength": 8 },
        { "buffer": 0, "byteOffset": 8, "byteLength": 24 }
    ],
    "accessors": [
        { "bufferView": 0, "componentType": 5126, "count": 2, "type": "SCALAR", "min": [0.0], "max": [1.0] },
        { "bufferView": 1, "componentType": 5126, "count": 2, "type": "VEC3" }
    ],
    "animations": [ {
        "name": "Dance",
        "samplers": [ { "input": 0, "output": 1, "interpolation": "LINEAR" } ],
        "channels": [ { "sampler": 0, "target": { "node": 1, "path": "translation" } } ]
    } ]
}"#;

fn write_temp(name: &str, contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    (dir, path)
}

#[test]
fn test_extensions() {
    assert_eq!(GltfDecoder::new().extensions(), &["gltf", "glb"]);
}

#[test]
fn test_decode_static_model() {
    let (_dir, path) = write_temp("rock.gltf", STATIC_GLTF);
    let visual = GltfDecoder::new().decode(&path).unwrap();

    assert_eq!(visual.node_count(), 2);
    assert_eq!(visual.mesh_count(), 0);
    assert!(!visual.has_clips());
}

#[test]
fn test_decode_extracts_root_clip() {
    let (_dir, path) = write_temp("bird.gltf", ANIMATED_GLTF);
    let visual = GltfDecoder::new().decode(&path).unwrap();

    assert_eq!(visual.clips().len(), 1);
    let clip = &visual.clips()[0];
    assert_eq!(clip.name(), "Bob");
    assert_eq!(clip.duration(), 1.0);
    assert_eq!(clip.tracks().len(), 1);

    let pose = clip.sample(0.5);
    assert!((pose.translation.y - 1.0).abs() < 1e-5);
}

#[test]
fn test_decode_missing_file_is_load_failure() {
    let dir = tempfile::tempdir().unwrap();
    let result = GltfDecoder::new().decode(&dir.path().join("missing.glb"));
    assert!(matches!(result, Err(Error::LoadFailed(_))));
}

#[test]
fn test_decode_garbage_is_decode_failure() {
    let (_dir, path) = write_temp("broken.gltf", "{ this is not gltf");
    let result = GltfDecoder::new().decode(&path);
    assert!(matches!(result, Err(Error::DecodeFailed(_))));
}

#[test]
fn test_cubic_spline_keeps_middle_values() {
    let values = vec![0, 1, 2, 3, 4, 5];
    assert_eq!(keyframe_values(values.clone(), Interpolation::CubicSpline), vec![1, 4]);
    assert_eq!(keyframe_values(values.clone(), Interpolation::Linear), values);
}

#[test]
fn test_decode_bone_only_clip_is_static() {
    let (_dir, path) = write_temp("stormtrooper.gltf", BONE_GLTF);
    let visual = GltfDecoder::new().decode(&path).unwrap();

    let clip = &visual.clips()[0];
    assert_eq!(clip.name(), "Dance");
    assert_eq!(clip.duration(), 1.0);
    assert!(clip.tracks().is_empty());
    assert!(clip.is_static());
}
