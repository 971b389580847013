//! Given steps for capability composition BDD scenarios.

use super::world::{CompositionWorld, split_names};
use eyre::WrapErr;
use gropius::composition::domain::{CapabilityName, Configuration};
use rstest_bdd_macros::given;
use serde_json::Value;

#[given(r#"a configuration declaring "{names}""#)]
fn configuration_declaring(world: &mut CompositionWorld, names: String) -> Result<(), eyre::Report> {
    let entries = split_names(&names)
        .into_iter()
        .map(|name| (name, Value::Null));
    world.configuration =
        Configuration::from_entries(entries).wrap_err("build declared configuration")?;
    Ok(())
}

#[given(r#"the capability "{name}" is configured with settings "{settings}""#)]
fn capability_with_settings(
    world: &mut CompositionWorld,
    name: String,
    settings: String,
) -> Result<(), eyre::Report> {
    let value: Value = serde_json::from_str(&settings).wrap_err("parse settings argument")?;
    let name = CapabilityName::new(name).wrap_err("validate capability name")?;
    world
        .configuration
        .insert(name, value)
        .wrap_err("declare capability settings")?;
    Ok(())
}
