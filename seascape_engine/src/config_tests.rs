use super::*;
use crate::asset::InstancePlacement;

const WATER_WORLD: &str = r#"{
    "name": "Water World",
    "asset_root": "models",
    "sky": { "elevation": 2, "azimuth": 180 },
    "water": { "distortion_scale": 3.7 },
    "load_timeout_secs": 30,
    "seed": 11,
    "assets": [
        { "name": "box", "source": "builtin:box", "transform": { "position": [0, 10, 0] } },
        { "name": "whale", "source": "whale.glb", "animated": true,
          "motions": [ { "kind": "drift", "axis": "z", "rate": { "per_tick": 0.8 }, "min": -5000, "max": 5000 } ] }
    ]
}"#;

#[test]
fn test_parse_scene() {
    let config = SceneConfig::from_json(WATER_WORLD).unwrap();
    assert_eq!(config.name, "Water World");
    assert_eq!(config.asset_root, PathBuf::from("models"));
    assert_eq!(config.assets.len(), 2);
    assert_eq!(config.seed, Some(11));
    assert_eq!(config.load_timeout().unwrap(), Some(Duration::from_secs(30)));
    assert_eq!(config.frame.surface_step, DEFAULT_SURFACE_STEP);
    assert_eq!(config.camera, CameraSettings::default());
    assert!(config.validate().is_ok());
}

#[test]
fn test_minimal_scene_uses_defaults() {
    let config = SceneConfig::from_json(r#"{ "name": "Empty" }"#).unwrap();
    assert_eq!(config, SceneConfig::new("Empty"));
    assert!(config.validate().is_ok());
}

#[test]
fn test_malformed_json_is_config_error() {
    assert!(matches!(SceneConfig::from_json("{ name: "), Err(Error::ConfigError(_))));
}

#[test]
fn test_missing_name_is_rejected() {
    assert!(SceneConfig::from_json(r#"{ "assets": [] }"#).is_err());
}

#[test]
fn test_validate_reports_bad_descriptor() {
    let mut config = SceneConfig::new("Grove");
    config.assets.push(AssetDescriptor::new("tree", "tree.glb").with_instances(0, InstancePlacement::Fixed));
    let err = config.validate().unwrap_err();
    assert!(matches!(err, Error::ConfigError(ref msg) if msg.contains("tree")));
}

#[test]
fn test_validate_rejects_bad_timeout_and_step() {
    let mut config = SceneConfig::new("Bad");
    config.load_timeout_secs = Some(0.0);
    assert!(config.validate().is_err());

    let mut config = SceneConfig::new("Bad");
    config.frame.surface_step = f32::INFINITY;
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_rejects_oversized_timeout() {
    let config = SceneConfig::from_json(r#"{ "name": "Water World", "load_timeout_secs": 1e30 }"#).unwrap();
    assert!(matches!(config.load_timeout(), Err(Error::ConfigError(_))));
    assert!(matches!(config.validate(), Err(Error::ConfigError(ref msg)) if msg.contains("out of range")));
}

#[test]
fn test_from_file_resolves_asset_root() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("water_world.json");
    std::fs::write(&path, WATER_WORLD).unwrap();

    let config = SceneConfig::from_file(&path).unwrap();
    assert_eq!(config.asset_root, dir.path().join("models"));
}

#[test]
fn test_from_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = SceneConfig::from_file(dir.path().join("nope.json"));
    assert!(matches!(result, Err(Error::ConfigError(_))));
}
