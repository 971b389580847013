//! Given steps for startup extension BDD scenarios.

use super::world::StartupWorld;
use eyre::WrapErr;
use gropius::composition::domain::Configuration;
use rstest_bdd_macros::given;
use serde_json::Value;

#[given(r#"the environment sets "{key}" to "{value}""#)]
fn environment_sets(world: &mut StartupWorld, key: String, value: String) {
    world.environment.insert(key, value);
}

#[given(r#"a configuration declaring "{names}""#)]
fn configuration_declaring(world: &mut StartupWorld, names: String) -> Result<(), eyre::Report> {
    let entries = names
        .split(',')
        .map(|name| (name.trim().to_owned(), Value::Null));
    world.configuration =
        Configuration::from_entries(entries).wrap_err("build declared configuration")?;
    Ok(())
}
