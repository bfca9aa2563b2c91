//! Expansion tests that exercise the macros through real generated items.

use pack_assets::ResourceKind;

pack_assets::color_resources! {
    Vegetable.carrot,
    Vegetable.orange,
    carrotFill,
}

pack_assets::image_resources! {
    Icons.save,
    Icons.Toolbar.save,    // Same leaf name as Icons.save - should NOT conflict!
    Icons.Toolbar.open,
    splash,
}

// An empty invocation must expand to nothing, silently.
pack_assets::color_resources! {}

#[test]
fn flat_binding_carries_its_own_name() {
    assert_eq!(carrotFill.name(), "carrotFill");
    assert_eq!(carrotFill.leaf(), "carrotFill");
    assert_eq!(carrotFill.kind(), ResourceKind::Color);
}

#[test]
fn shared_prefix_groups_under_one_module() {
    assert_eq!(Vegetable::carrot.name(), "Vegetable.carrot");
    assert_eq!(Vegetable::orange.name(), "Vegetable.orange");
    assert_eq!(Vegetable::carrot.leaf(), "carrot");
}

#[test]
fn same_leaf_name_under_different_namespaces() {
    assert_eq!(Icons::save.name(), "Icons.save");
    assert_eq!(Icons::Toolbar::save.name(), "Icons.Toolbar.save");
    assert_ne!(Icons::save.name(), Icons::Toolbar::save.name());
}

#[test]
fn image_macro_constructs_image_handles() {
    assert_eq!(splash.kind(), ResourceKind::Image);
    assert_eq!(Icons::Toolbar::open.kind(), ResourceKind::Image);
    assert_eq!(Icons::Toolbar::open.to_string(), "Icons.Toolbar.open");
}
