//! When steps for startup extension BDD scenarios.

use super::world::StartupWorld;
use gropius::application::{Startup, StartupSettings};
use rstest_bdd_macros::when;
use std::sync::Arc;

fn start(world: &mut StartupWorld) {
    let settings = StartupSettings::from_lookup(|key| world.environment.get(key).cloned());
    let startup = Startup::standard(Arc::new(world.extension_catalog()));
    let configuration = world.configuration.clone();
    let outcome = world
        .slot
        .initialize(|| startup.run_with_configuration(configuration, &settings))
        .map(|_| ());
    world.outcomes.push(outcome);
}

#[when("the application starts")]
fn application_starts(world: &mut StartupWorld) {
    start(world);
}

#[when("the application starts again")]
fn application_starts_again(world: &mut StartupWorld) {
    start(world);
}
