//! Tests for console colors and name registries.

use markup::{ColorParseError, ConsoleColor, NameRegistry, RegistryError, default_registry};

// ============================================================================
// Console Colors
// ============================================================================

#[test]
fn parse_every_color_name() {
    for color in ConsoleColor::ALL {
        assert_eq!(color.name().parse::<ConsoleColor>(), Ok(color));
    }
}

#[test]
fn parse_case_insensitive() {
    assert_eq!("RED".parse::<ConsoleColor>(), Ok(ConsoleColor::Red));
    assert_eq!("Red".parse::<ConsoleColor>(), Ok(ConsoleColor::Red));
    assert_eq!("dArKgReY".parse::<ConsoleColor>().ok(), None);
    assert_eq!("DarkGray".parse::<ConsoleColor>(), Ok(ConsoleColor::DarkGray));
}

#[test]
fn parse_unknown_names() {
    for name in ["orange", "bright_red", "", "dark red"] {
        assert_eq!(
            name.parse::<ConsoleColor>(),
            Err(ColorParseError::UnknownName(name.to_string()))
        );
    }
}

#[test]
fn error_messages() {
    let err = "orange".parse::<ConsoleColor>().unwrap_err();
    assert_eq!(err.to_string(), "unknown color name: orange");

    let err = NameRegistry::new([("dark-red", ())]).unwrap_err();
    assert_eq!(err.to_string(), "invalid tag name: \"dark-red\"");

    let err = NameRegistry::new([("a", ()), ("A", ())]).unwrap_err();
    assert_eq!(err.to_string(), "duplicate tag name: a");
}

// ============================================================================
// Registries
// ============================================================================

#[test]
fn default_registry_maps_names_to_colors() {
    let registry = default_registry();
    for (name, color) in registry.iter() {
        assert_eq!(color.name(), name);
    }
    assert_eq!(registry.get("darkyellow"), Some(&ConsoleColor::DarkYellow));
    assert_eq!(registry.get("DARKYELLOW"), Some(&ConsoleColor::DarkYellow));
}

#[test]
fn default_registry_is_shared() {
    assert!(std::ptr::eq(default_registry(), default_registry()));
}

#[test]
fn custom_registry_holds_any_attribute() {
    let registry = NameRegistry::new([("title", "bold"), ("note", "dim")]).unwrap();
    assert_eq!(registry.len(), 2);
    assert_eq!(registry.get("Title"), Some(&"bold"));
    assert!(!registry.is_empty());
}

#[test]
fn registry_rejects_bad_names() {
    assert_eq!(
        NameRegistry::new([("red", 1), ("x y", 2)]),
        Err(RegistryError::InvalidName("x y".to_string()))
    );
}

#[test]
fn registry_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<NameRegistry<ConsoleColor>>();
}
