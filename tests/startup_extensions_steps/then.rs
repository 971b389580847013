//! Then steps for startup extension BDD scenarios.

use super::world::StartupWorld;
use gropius::application::StartupError;
use gropius::composition::services::ExtensionRunError;
use gropius::error::ConfigurationError;
use rstest_bdd_macros::then;
use serde_json::json;

#[then("startup succeeds")]
fn startup_succeeds(world: &StartupWorld) -> Result<(), eyre::Report> {
    if let Err(err) = world.last_outcome()? {
        return Err(eyre::eyre!("expected startup to succeed, got {err}"));
    }
    Ok(())
}

#[then(r#"the extension events are "{events}""#)]
fn extension_events_are(world: &StartupWorld, events: String) -> Result<(), eyre::Report> {
    let expected: Vec<String> = events.split(',').map(str::to_owned).collect();
    let recorded = world.recorded_events()?;
    if recorded != expected {
        return Err(eyre::eyre!("expected events {expected:?}, found {recorded:?}"));
    }
    Ok(())
}

#[then(r#"the "{name}" integration saw {count:usize} units"#)]
fn integration_saw_units(
    world: &StartupWorld,
    name: String,
    count: usize,
) -> Result<(), eyre::Report> {
    let application = world
        .slot
        .get()
        .map_err(|err| eyre::eyre!("application unavailable: {err}"))?;
    let integration = application.root().integration(&name);
    if integration != Some(&json!({ "units": count })) {
        return Err(eyre::eyre!(
            "expected '{name}' to record {count} units, found {integration:?}"
        ));
    }
    Ok(())
}

#[then(r#"startup fails naming the extension "{name}""#)]
fn startup_fails_naming(world: &StartupWorld, name: String) -> Result<(), eyre::Report> {
    match world.last_outcome()? {
        Err(StartupError::Extension(ExtensionRunError::Configuration(
            ConfigurationError::UnknownExtension(unknown),
        ))) if *unknown == name => Ok(()),
        other => Err(eyre::eyre!(
            "expected unresolved extension '{name}', got {other:?}"
        )),
    }
}

#[then("no extension events were recorded")]
fn no_extension_events(world: &StartupWorld) -> Result<(), eyre::Report> {
    let recorded = world.recorded_events()?;
    if !recorded.is_empty() {
        return Err(eyre::eyre!("expected no extension events, found {recorded:?}"));
    }
    if world.slot.is_initialized() {
        return Err(eyre::eyre!("failed startup must leave the slot empty"));
    }
    Ok(())
}

#[then("the second start is rejected as already initialised")]
fn second_start_rejected(world: &StartupWorld) -> Result<(), eyre::Report> {
    match world.outcomes.as_slice() {
        [Ok(()), Err(StartupError::AlreadyInitialized)] => Ok(()),
        other => Err(eyre::eyre!(
            "expected one success then a rejection, got {other:?}"
        )),
    }
}
