//! Published classpath lookups against a real export-classpath tree

use pants_ide::{
    ClasspathRunExtension, Config,
    services::{DefaultPathResolver, JsonModule, PantsProjectLayout},
};
use serde_json::json;
use std::fs;
use tempfile::TempDir;

fn module_with_infos(infos: serde_json::Value) -> JsonModule {
    serde_json::from_value(json!({
        "name": "app",
        "options": {
            "pants.target.addresses": ["src/java/app:bin"],
            "pants.target.address.infos": infos,
        }
    }))
    .unwrap()
}

#[test]
fn test_published_classpath_per_target() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    let export = root.join("dist/export-classpath");
    fs::create_dir_all(export.join("src.java.util.util-0")).unwrap();
    fs::write(export.join("src.java.app.bin-0.jar"), "").unwrap();
    fs::write(export.join("src.java.app.bin-1.jar"), "").unwrap();
    // Not reached: the scan stops at the first gap
    fs::write(export.join("src.java.app.bin-3.jar"), "").unwrap();

    let module = module_with_infos(json!([
        { "id": "src.java.app.bin", "targetAddresses": ["src/java/app:bin"] },
        { "id": "src.java.util.util", "targetAddresses": ["src/java/util:util"] },
    ]));

    let config = Config::default();
    let layout = PantsProjectLayout::new(root, DefaultPathResolver);
    let extension = ClasspathRunExtension::new(&config, &layout, &DefaultPathResolver);
    let classpath = extension.find_published_classpath(&module).unwrap();

    let expected: Vec<String> = [
        export.join("src.java.app.bin-0.jar"),
        export.join("src.java.app.bin-1.jar"),
        export.join("src.java.util.util-0"),
    ]
    .iter()
    .map(|p| p.to_string_lossy().into_owned())
    .collect();
    assert_eq!(classpath, expected);
}

#[test]
fn test_missing_export_dir_yields_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let module = module_with_infos(json!([{ "id": "foo", "targetAddresses": [] }]));

    let config = Config::default();
    let layout = PantsProjectLayout::new(temp_dir.path(), DefaultPathResolver);
    let extension = ClasspathRunExtension::new(&config, &layout, &DefaultPathResolver);

    assert!(extension.find_published_classpath(&module).unwrap().is_empty());
}

#[test]
fn test_malformed_infos_are_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let module = module_with_infos(json!({ "id": "not-a-list" }));

    let config = Config::default();
    let layout = PantsProjectLayout::new(temp_dir.path(), DefaultPathResolver);
    let extension = ClasspathRunExtension::new(&config, &layout, &DefaultPathResolver);

    assert!(extension.find_published_classpath(&module).is_err());
}
