//! Then steps for backend resolution BDD scenarios.

use super::world::{ResolutionWorld, split_values};
use gropius::error::ConfigurationError;
use gropius::generation::services::ResolveError;
use rstest_bdd_macros::then;

#[then(r#"the backend family is "{family}""#)]
fn backend_family_is(world: &ResolutionWorld, family: String) -> Result<(), eyre::Report> {
    let resolved = world.generator()?.family();
    if resolved.as_str() != family {
        return Err(eyre::eyre!("expected family '{family}', found '{resolved}'"));
    }
    Ok(())
}

#[then(r#"the generator identifier is "{identifier}""#)]
fn generator_identifier_is(
    world: &ResolutionWorld,
    identifier: String,
) -> Result<(), eyre::Report> {
    let resolved = world.generator()?.identifier();
    if resolved.as_str() != identifier {
        return Err(eyre::eyre!(
            "expected identifier '{identifier}', found '{resolved}'"
        ));
    }
    Ok(())
}

#[then(r#"resolution fails naming "{name}""#)]
fn resolution_fails_naming(world: &ResolutionWorld, name: String) -> Result<(), eyre::Report> {
    let result = world
        .generator
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing generator result in scenario world"))?;
    match result {
        Err(ResolveError::Configuration(ConfigurationError::UnknownBackendFamily(family)))
            if *family == name =>
        {
            Ok(())
        }
        Err(err) => Err(eyre::eyre!("expected unknown family '{name}', got {err}")),
        Ok(generator) => Err(eyre::eyre!(
            "expected resolution to fail, resolved family '{}'",
            generator.family()
        )),
    }
}

#[then(r#"the outputs are "{outputs}""#)]
fn outputs_are(world: &ResolutionWorld, outputs: String) -> Result<(), eyre::Report> {
    let output = world
        .output
        .clone()
        .ok_or_else(|| eyre::eyre!("missing generation output in scenario world"))?
        .map_err(|err| eyre::eyre!("generation failed: {err}"))?;
    let expected = split_values(&outputs);
    let actual = output.into_batch();
    if actual != expected {
        return Err(eyre::eyre!("expected outputs {expected:?}, found {actual:?}"));
    }
    Ok(())
}
