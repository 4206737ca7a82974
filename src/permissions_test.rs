use super::*;

// =============================================================
// Role parsing
// =============================================================

#[test]
fn parse_recognizes_known_roles() {
    assert_eq!(Role::parse(Some("admin")), Role::Admin);
    assert_eq!(Role::parse(Some("editor")), Role::Editor);
    assert_eq!(Role::parse(Some("viewer")), Role::Viewer);
}

#[test]
fn parse_is_case_insensitive() {
    assert_eq!(Role::parse(Some("Admin")), Role::Admin);
    assert_eq!(Role::parse(Some("EDITOR")), Role::Editor);
    assert_eq!(Role::parse(Some("ViEwEr")), Role::Viewer);
}

#[test]
fn parse_trims_whitespace() {
    assert_eq!(Role::parse(Some("  editor  ")), Role::Editor);
    assert_eq!(Role::parse(Some("\tadmin\n")), Role::Admin);
}

#[test]
fn parse_unknown_is_unprivileged() {
    assert_eq!(Role::parse(Some("root")), Role::Unprivileged);
    assert_eq!(Role::parse(Some("admins")), Role::Unprivileged);
    assert_eq!(Role::parse(Some("")), Role::Unprivileged);
    assert_eq!(Role::parse(Some("   ")), Role::Unprivileged);
    assert_eq!(Role::parse(None), Role::Unprivileged);
}

#[test]
fn role_default_is_unprivileged() {
    assert_eq!(Role::default(), Role::Unprivileged);
}

#[test]
fn labels_are_display_names_not_debug() {
    assert_eq!(Role::Admin.label(), "Admin");
    assert_eq!(Role::Editor.label(), "Editor");
    assert_eq!(Role::Viewer.label(), "Viewer");
    assert_eq!(Role::parse(Some("root")).label(), "No role");
}

// =============================================================
// Capability table
// =============================================================

#[test]
fn admin_has_all_capabilities() {
    let can = Role::Admin.capabilities();
    assert!(can.can_read);
    assert!(can.can_comment);
    assert!(can.can_like);
    assert!(can.can_delete);
    assert!(can.can_update);
}

#[test]
fn editor_can_update_but_not_delete() {
    let can = Role::Editor.capabilities();
    assert!(can.can_read);
    assert!(can.can_comment);
    assert!(can.can_like);
    assert!(!can.can_delete);
    assert!(can.can_update);
}

#[test]
fn viewer_cannot_mutate_posts() {
    let can = Role::Viewer.capabilities();
    assert!(can.can_read);
    assert!(can.can_comment);
    assert!(can.can_like);
    assert!(!can.can_delete);
    assert!(!can.can_update);
}

#[test]
fn unprivileged_has_no_capabilities() {
    assert_eq!(Role::Unprivileged.capabilities(), Capabilities::none());
}

#[test]
fn capabilities_none_is_all_false() {
    let can = Capabilities::none();
    assert!(!can.can_read);
    assert!(!can.can_comment);
    assert!(!can.can_like);
    assert!(!can.can_delete);
    assert!(!can.can_update);
    assert_eq!(can, Capabilities::default());
}

// =============================================================
// resolve()
// =============================================================

#[test]
fn resolve_mixed_case_editor() {
    let can = resolve(Some("Editor"));
    assert!(can.can_read);
    assert!(can.can_comment);
    assert!(can.can_like);
    assert!(!can.can_delete);
    assert!(can.can_update);
}

#[test]
fn resolve_without_identity_denies_everything() {
    assert_eq!(resolve(None), Capabilities::none());
}
