//! Behaviour tests for generation backend resolution.

mod backend_resolution_steps;

use backend_resolution_steps::world::{ResolutionWorld, world};
use rstest_bdd_macros::scenario;

#[scenario(
    path = "tests/features/backend_resolution.feature",
    name = "GGUF artifacts resolve to llama.cpp"
)]
#[tokio::test(flavor = "multi_thread")]
async fn gguf_resolves_to_llama_cpp(world: ResolutionWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/backend_resolution.feature",
    name = "Remote provider routes resolve to litellm"
)]
#[tokio::test(flavor = "multi_thread")]
async fn remote_route_resolves_to_litellm(world: ResolutionWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/backend_resolution.feature",
    name = "Hub models resolve to transformers"
)]
#[tokio::test(flavor = "multi_thread")]
async fn hub_model_resolves_to_transformers(world: ResolutionWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/backend_resolution.feature",
    name = "A missing identifier uses the default model"
)]
#[tokio::test(flavor = "multi_thread")]
async fn missing_identifier_uses_default(world: ResolutionWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/backend_resolution.feature",
    name = "An explicit method overrides inference"
)]
#[tokio::test(flavor = "multi_thread")]
async fn explicit_method_overrides_inference(world: ResolutionWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/backend_resolution.feature",
    name = "An unknown method is a configuration error"
)]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_method_is_rejected(world: ResolutionWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/backend_resolution.feature",
    name = "Batch generation preserves order"
)]
#[tokio::test(flavor = "multi_thread")]
async fn batch_generation_preserves_order(world: ResolutionWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/backend_resolution.feature",
    name = "Output is bounded by the maximum length"
)]
#[tokio::test(flavor = "multi_thread")]
async fn output_is_bounded(world: ResolutionWorld) {
    let _ = world;
}
