//! When steps for capability composition BDD scenarios.

use super::world::CompositionWorld;
use rstest_bdd_macros::when;

fn compose(world: &mut CompositionWorld) {
    let resolved = world.composer.resolve(&world.configuration);
    world.last_result = Some(world.composer.compose(
        &resolved,
        &world.configuration,
        &mut world.root,
    ));
}

#[when("the configuration is composed")]
fn configuration_is_composed(world: &mut CompositionWorld) {
    compose(world);
}

#[when("the configuration is composed again into the same root")]
fn configuration_is_composed_again(world: &mut CompositionWorld) -> Result<(), eyre::Report> {
    world.last_report()?;
    compose(world);
    Ok(())
}
