//! Discovery tests

use std::sync::Arc;

use extreg_application::domain::{ClassResolver, ExtensionPoint};
use extreg_application::registry::Discovery;
use extreg_application::{
    ChainedResourceLocator, EmbeddedResourceLocator, LinkedClassResolver, MemoryResourceLocator,
};

use crate::fixtures::{
    BAR_PLAIN_CLASS, BazService, FOO_MANIFEST_CONTENTS, FOO_PROVIDER_0_CLASS,
    FOO_PROVIDER_1_CLASS, FooService, isolated_loader, manifest,
};

fn foo_name() -> &'static str {
    <dyn FooService as ExtensionPoint>::name()
}

#[test]
fn test_scan_embedded_manifest() {
    let locator = EmbeddedResourceLocator::new();
    let resolver = LinkedClassResolver::new();
    let discovery = Discovery::new(foo_name(), &locator, &resolver);

    assert_eq!(discovery.resource_name(), "extensions/unit::fixtures::FooService");

    let found = discovery.scan(|_| true).unwrap();
    let classes: Vec<_> = found
        .iter()
        .map(|found| (found.origin.as_str(), found.line, found.class.name))
        .collect();
    assert_eq!(
        classes,
        vec![
            ("unit::fixtures", 3, FOO_PROVIDER_0_CLASS),
            ("unit::fixtures", 4, FOO_PROVIDER_1_CLASS),
        ]
    );
}

#[test]
fn test_chained_resources_keep_locator_order() {
    let extra = MemoryResourceLocator::new()
        .with_manifest::<dyn FooService>("extra", manifest(&[FOO_PROVIDER_1_CLASS]));
    let locator = ChainedResourceLocator::new()
        .with(Arc::new(EmbeddedResourceLocator::new()))
        .with(Arc::new(extra));
    let resolver = LinkedClassResolver::new();
    let discovery = Discovery::new(foo_name(), &locator, &resolver);

    let origins: Vec<_> = discovery
        .resources()
        .unwrap()
        .iter()
        .map(|resource| resource.origin().to_string())
        .collect();
    assert_eq!(origins, vec!["unit::fixtures", "extra"]);

    let found = discovery.scan(|_| true).unwrap();
    assert_eq!(found.len(), 3);
    assert_eq!(found[2].origin, "extra");
    assert_eq!(found[2].line, 1);
}

#[test]
fn test_memory_locator_matches_resource_name() {
    let locator = MemoryResourceLocator::new()
        .with_resource("extensions/other", "other", FOO_PROVIDER_0_CLASS)
        .with_manifest::<dyn FooService>("foo", FOO_MANIFEST_CONTENTS);
    let resolver = LinkedClassResolver::new();

    let found = Discovery::new(foo_name(), &locator, &resolver)
        .scan(|_| true)
        .unwrap();
    assert!(found.iter().all(|found| found.origin == "foo"));
}

#[test]
fn test_malformed_line_names_resource_and_line() {
    let contents = format!("{FOO_PROVIDER_0_CLASS}\nnot a class\n");
    let loader = isolated_loader(
        MemoryResourceLocator::new().with_manifest::<dyn FooService>("broken", contents),
    );

    let err = loader.registry::<dyn FooService>().unwrap_err();
    assert!(err.is_configuration());
    let message = err.to_string();
    assert!(message.contains("broken:2:"), "unexpected message: {message}");
    assert!(message.contains("Illegal configuration-file syntax"));
}

#[test]
fn test_illegal_class_name_is_rejected() {
    let loader = isolated_loader(
        MemoryResourceLocator::new().with_manifest::<dyn FooService>("dotted", "unit.fixtures.Foo"),
    );

    let err = loader.registry::<dyn FooService>().unwrap_err();
    assert!(err.to_string().contains("dotted:1: Illegal provider class name"));
}

#[test]
fn test_unknown_class_is_rejected() {
    let loader = isolated_loader(
        MemoryResourceLocator::new()
            .with_manifest::<dyn FooService>("missing", "unit::fixtures::DoesNotExist"),
    );

    let err = loader.registry::<dyn FooService>().unwrap_err();
    assert!(err.is_configuration());
    assert!(
        err.to_string()
            .contains("Provider unit::fixtures::DoesNotExist not found")
    );
}

#[test]
fn test_foreign_class_is_rejected() {
    let loader = isolated_loader(
        MemoryResourceLocator::new()
            .with_manifest::<dyn BazService>("foreign", manifest(&[BAR_PLAIN_CLASS])),
    );

    let err = loader.registry::<dyn BazService>().unwrap_err();
    assert!(err.is_configuration());
    assert!(err.to_string().contains(&format!("Provider {BAR_PLAIN_CLASS} not a subtype")));
}

#[test]
fn test_linked_resolver_knows_fixture_classes() {
    let resolver = LinkedClassResolver::new();

    let class = resolver.resolve(FOO_PROVIDER_0_CLASS).unwrap();
    assert_eq!(class.extension_point().name(), foo_name());
    assert!(resolver.resolve("unit::fixtures::DoesNotExist").is_none());
    assert!(
        resolver
            .classes()
            .iter()
            .any(|class| class.name == BAR_PLAIN_CLASS)
    );
    assert_eq!(resolver.len(), resolver.classes().len());
}

#[test]
fn test_locate_lists_resources_without_reading_them() {
    let locator = MemoryResourceLocator::new()
        .with_manifest::<dyn FooService>("unparsed", "not a class\n")
        .with_manifest::<dyn BazService>("baz", "");

    let origins: Vec<_> = Discovery::locate(foo_name(), &locator)
        .unwrap()
        .iter()
        .map(|resource| resource.origin().to_string())
        .collect();
    assert_eq!(origins, vec!["unparsed"]);
}
