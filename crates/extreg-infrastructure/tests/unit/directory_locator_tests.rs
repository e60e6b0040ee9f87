//! Directory locator tests

use std::io::BufRead;
use std::path::Path;

use extreg_domain::ResourceLocator;
use extreg_infrastructure::discovery::DirectoryResourceLocator;
use tempfile::TempDir;

const RESOURCE: &str = "extensions/app::codec::Codec";

fn write_resource(root: &Path, contents: &str) {
    let dir = root.join("extensions");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("app::codec::Codec"), contents).unwrap();
}

#[test]
fn test_locates_resources_in_search_path_order() {
    let first = TempDir::new().unwrap();
    let empty = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    write_resource(first.path(), "app::codec::Json\n");
    write_resource(second.path(), "app::codec::Yaml\n");

    let locator = DirectoryResourceLocator::new([first.path(), empty.path()])
        .with_search_path(second.path());
    assert_eq!(locator.search_paths().len(), 3);

    let resources = locator.locate(RESOURCE).unwrap();
    assert_eq!(resources.len(), 2);
    assert!(resources[0].origin().starts_with(&first.path().display().to_string()));
    assert!(resources[1].origin().starts_with(&second.path().display().to_string()));

    let lines: Vec<String> = resources[1]
        .open()
        .unwrap()
        .lines()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(lines, vec!["app::codec::Yaml"]);
}

#[test]
fn test_other_resource_names_are_not_matched() {
    let root = TempDir::new().unwrap();
    write_resource(root.path(), "app::codec::Json\n");

    let locator = DirectoryResourceLocator::new([root.path()]);
    assert!(locator.locate("extensions/app::codec::Other").unwrap().is_empty());
}

#[test]
fn test_directory_named_like_resource_is_skipped() {
    let root = TempDir::new().unwrap();
    std::fs::create_dir_all(root.path().join("extensions").join("app::codec::Codec")).unwrap();

    let locator = DirectoryResourceLocator::new([root.path()]);
    assert!(locator.locate(RESOURCE).unwrap().is_empty());
}

#[test]
fn test_names_escaping_the_search_path_are_not_read() {
    let root = TempDir::new().unwrap();
    let search_path = root.path().join("search");
    std::fs::create_dir_all(search_path.join("extensions")).unwrap();
    std::fs::write(root.path().join("secret"), "app::codec::Json\n").unwrap();

    let locator = DirectoryResourceLocator::new([&search_path]);
    assert!(search_path.join("extensions/../../secret").is_file());
    assert!(locator.locate("extensions/../../secret").unwrap().is_empty());
}
