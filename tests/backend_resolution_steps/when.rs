//! When steps for backend resolution BDD scenarios.

use super::world::{ResolutionWorld, run_async, split_values};
use gropius::generation::{
    domain::{BackendOptions, GenerationInput, GenerationOptions},
    services::Generator,
};
use rstest_bdd_macros::when;

#[when("the generator is created")]
fn generator_is_created(world: &mut ResolutionWorld) {
    world.generator = Some(Generator::new(
        &world.resolver,
        world.identifier.as_deref(),
        world.method.as_deref(),
        &BackendOptions::new(),
    ));
}

#[when(r#"the prompts "{prompts}" are generated with max length {max_length:usize}"#)]
fn prompts_are_generated(
    world: &mut ResolutionWorld,
    prompts: String,
    max_length: usize,
) -> Result<(), eyre::Report> {
    let generator = world.generator()?;
    let input = GenerationInput::from(split_values(&prompts));
    let output = run_async(generator.generate(input, max_length, &GenerationOptions::new()));
    world.output = Some(output);
    Ok(())
}
