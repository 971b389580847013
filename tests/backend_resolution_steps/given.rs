//! Given steps for backend resolution BDD scenarios.

use super::world::ResolutionWorld;
use rstest_bdd_macros::given;

#[given(r#"the identifier "{identifier}""#)]
fn the_identifier(world: &mut ResolutionWorld, identifier: String) {
    world.identifier = Some(identifier);
}

#[given(r#"the method "{method}""#)]
fn the_method(world: &mut ResolutionWorld, method: String) {
    world.method = Some(method);
}
