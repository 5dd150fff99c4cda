//! Test that the catalog and its building blocks are Sync + Send

fn assert_sync_send<T: Sync + Send>() {}

#[test]
fn test_catalog_is_sync_send() {
    assert_sync_send::<lingo_core::Catalog>();
}

#[test]
fn test_descriptor_is_sync_send() {
    assert_sync_send::<lingo_core::Descriptor>();
    assert_sync_send::<lingo_core::MagicRule>();
}

#[test]
fn test_builder_is_sync_send() {
    assert_sync_send::<lingo_core::CatalogBuilder>();
}
