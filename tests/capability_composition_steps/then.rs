//! Then steps for capability composition BDD scenarios.

use super::world::{CompositionWorld, split_names};
use gropius::composition::{
    domain::SkipReason, ports::CompositionRoot, services::ComposeError,
};
use gropius::error::ConfigurationError;
use rstest_bdd_macros::then;

fn expect_skip(
    world: &CompositionWorld,
    name: &str,
    expected: SkipReason,
) -> Result<(), eyre::Report> {
    let report = world.last_report()?;
    let reason = report
        .skipped()
        .iter()
        .find(|(skipped, _)| skipped.as_str() == name)
        .map(|(_, reason)| *reason);
    if reason != Some(expected) {
        return Err(eyre::eyre!(
            "expected '{name}' to be skipped with {expected}, got {reason:?}"
        ));
    }
    Ok(())
}

#[then(r#"the registered units are "{names}""#)]
fn registered_units_are(world: &CompositionWorld, names: String) -> Result<(), eyre::Report> {
    world.last_report()?;
    let registered: Vec<String> = world
        .root
        .unit_names()
        .into_iter()
        .map(String::from)
        .collect();
    let expected = split_names(&names);
    if registered != expected {
        return Err(eyre::eyre!(
            "expected units {expected:?}, found {registered:?}"
        ));
    }
    Ok(())
}

#[then(r#""{name}" was added by implication"#)]
fn added_by_implication(world: &CompositionWorld, name: String) -> Result<(), eyre::Report> {
    let resolved = world.composer.resolve(&world.configuration);
    if !resolved.implied().iter().any(|implied| implied.as_str() == name) {
        return Err(eyre::eyre!("expected '{name}' to be implied"));
    }
    Ok(())
}

#[then("no capability was added by implication")]
fn nothing_implied(world: &CompositionWorld) -> Result<(), eyre::Report> {
    let resolved = world.composer.resolve(&world.configuration);
    if !resolved.implied().is_empty() {
        return Err(eyre::eyre!(
            "expected no implied capabilities, found {:?}",
            resolved.implied()
        ));
    }
    Ok(())
}

#[then(r#""{name}" is skipped because it has no service unit"#)]
fn skipped_without_unit(world: &CompositionWorld, name: String) -> Result<(), eyre::Report> {
    expect_skip(world, &name, SkipReason::NoServiceUnit)
}

#[then(r#""{name}" is skipped because it is already registered"#)]
fn skipped_as_registered(world: &CompositionWorld, name: String) -> Result<(), eyre::Report> {
    expect_skip(world, &name, SkipReason::AlreadyRegistered)
}

#[then(r#"composition fails with invalid settings for "{name}""#)]
fn fails_with_invalid_settings(world: &CompositionWorld, name: String) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing composition result in scenario world"))?;
    match result {
        Err(ComposeError::Configuration(ConfigurationError::InvalidUnitSettings {
            capability,
            ..
        })) if *capability == name => Ok(()),
        other => Err(eyre::eyre!(
            "expected invalid settings for '{name}', got {other:?}"
        )),
    }
}
