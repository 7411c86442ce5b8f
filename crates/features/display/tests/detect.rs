use nbgate_display::{CAPABILITIES_ENV, CapabilitySet, detect_with};
use std::collections::HashMap;

fn env_of(vars: &[(&str, &str)]) -> HashMap<String, String> {
    vars.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect()
}

#[test]
fn bare_environment_detects_nothing() {
    let env = env_of(&[]);

    assert_eq!(detect_with(|key| env.get(key).cloned()), CapabilitySet::empty());
}

#[test]
fn jupyter_frontend_enables_all_capabilities() {
    let env = env_of(&[("JPY_PARENT_PID", "4242")]);

    assert_eq!(detect_with(|key| env.get(key).cloned()), CapabilitySet::ALL);
}

#[test]
fn override_enables_named_capabilities() {
    let env = env_of(&[(CAPABILITIES_ENV, "rich-display, interactive-map")]);

    assert_eq!(detect_with(|key| env.get(key).cloned()), CapabilitySet::ALL);

    let env = env_of(&[(CAPABILITIES_ENV, "rich-display")]);
    assert_eq!(detect_with(|key| env.get(key).cloned()), CapabilitySet::RICH_DISPLAY);
}

#[test]
fn unknown_override_names_are_ignored() {
    let env = env_of(&[(CAPABILITIES_ENV, "holograms")]);

    assert_eq!(detect_with(|key| env.get(key).cloned()), CapabilitySet::empty());
}

#[test]
fn wildcard_override_enables_everything() {
    let env = env_of(&[(CAPABILITIES_ENV, "*")]);

    assert_eq!(detect_with(|key| env.get(key).cloned()), CapabilitySet::ALL);
}
