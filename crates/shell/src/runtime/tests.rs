use std::sync::Arc;

use atrium_primitives::{ApplicationDescriptor, View};
use atrium_registry::{AppMeta, LoadError, Module, RegistryBuilder};
use pretty_assertions::assert_eq;

use super::*;
use crate::testing::{capture, counting, gated, module};

fn runtime_with(build: impl FnOnce(&mut RegistryBuilder)) -> SlotRuntime {
	let mut builder = RegistryBuilder::new();
	build(&mut builder);
	SlotRuntime::new("main", AppLoader::new(Arc::new(builder.build())))
}

#[tokio::test]
async fn registered_id_reaches_ready_with_descriptor_props() {
	let (_, load) = counting("Hogwarts");
	let mut runtime = runtime_with(|b| {
		b.register("hogwartslearning", AppMeta::runtime("Hogwarts", "learning"), load).unwrap();
	});
	let descriptor = ApplicationDescriptor::with_id("hogwartslearning");

	let state = runtime.open(descriptor.clone()).await;
	let ready = state.ready().expect("ready");
	assert_eq!(ready.component.name(), "Hogwarts");
	assert_eq!(ready.props, descriptor);
	assert_eq!(runtime.view(&PresentationConfig::default()), View::text("Hogwarts:hogwartslearning"));
}

#[tokio::test]
async fn unregistered_id_fails_naming_the_key() {
	let mut runtime = runtime_with(|_| {});
	let state = runtime.open(ApplicationDescriptor::with_id("doesNotExist")).await;
	let message = state.message().expect("failed");
	assert!(message.contains("doesNotExist"), "got: {message}");
}

#[tokio::test]
async fn empty_descriptor_fails_with_missing_descriptor_message() {
	let (_, load) = counting("Any");
	let mut runtime = runtime_with(|b| {
		b.register("any", AppMeta::runtime("Any", "g"), load).unwrap();
	});
	let state = runtime.open(ApplicationDescriptor::default()).await;
	assert_eq!(state.message(), Some("No application data available."));
	assert!(state.ready().is_none());
}

#[tokio::test]
async fn rejecting_loader_fails_with_its_cause() {
	let mut runtime = runtime_with(|b| {
		b.register("flaky", AppMeta::runtime("Flaky", "g"), || async { Err::<Module, _>(LoadError::fetch("network error")) })
			.unwrap();
	});
	let state = runtime.open(ApplicationDescriptor::with_id("flaky")).await;
	let message = state.message().expect("failed");
	assert!(message.contains("network error"), "got: {message}");
	assert_eq!(message, "Could not load application: network error");
}

fn explode() -> Result<Module, LoadError> {
	panic!("chunk evaluation exploded")
}

#[tokio::test]
async fn panicking_loader_is_contained_in_the_slot() {
	let mut runtime = runtime_with(|b| {
		b.register("boom", AppMeta::runtime("Boom", "g"), || async { explode() }).unwrap();
	});
	let state = runtime.open(ApplicationDescriptor::with_id("boom")).await;
	assert_eq!(state.message(), Some("Could not load application: loader panicked: chunk evaluation exploded"));
}

#[tokio::test]
async fn later_request_wins_when_earlier_settles_last() {
	let (release_a, load_a) = gated();
	let (release_b, load_b) = gated();
	let mut runtime = runtime_with(|b| {
		b.register("a", AppMeta::runtime("A", "g"), load_a).unwrap();
		b.register("b", AppMeta::runtime("B", "g"), load_b).unwrap();
	});

	let token_a = runtime.navigate(ApplicationDescriptor::with_id("a"));
	let token_b = runtime.navigate(ApplicationDescriptor::with_id("b"));
	assert!(token_b > token_a);

	release_b.send(Ok(module("B"))).unwrap();
	assert_eq!(runtime.next_completion().await, Some(Settle::Applied));
	assert_eq!(runtime.state().ready().unwrap().key, "b");

	release_a.send(Ok(module("A"))).unwrap();
	assert_eq!(runtime.next_completion().await, Some(Settle::Stale));
	assert_eq!(runtime.state().ready().unwrap().key, "b");
}

#[tokio::test]
async fn earlier_failure_arriving_first_does_not_end_the_later_load() {
	let (release_a, load_a) = gated();
	let (release_b, load_b) = gated();
	let mut runtime = runtime_with(|b| {
		b.register("a", AppMeta::runtime("A", "g"), load_a).unwrap();
		b.register("b", AppMeta::runtime("B", "g"), load_b).unwrap();
	});

	runtime.navigate(ApplicationDescriptor::with_id("a"));
	runtime.navigate(ApplicationDescriptor::with_id("b"));

	release_a.send(Err(LoadError::fetch("network error"))).unwrap();
	assert_eq!(runtime.next_completion().await, Some(Settle::Stale));
	assert!(runtime.state().is_loading());

	release_b.send(Ok(module("B"))).unwrap();
	let state = runtime.settle().await;
	assert_eq!(state.ready().unwrap().key, "b");
}

#[tokio::test]
async fn settle_returns_immediately_when_nothing_is_loading() {
	let mut runtime = runtime_with(|_| {});
	assert_eq!(runtime.settle().await.label(), "idle");
}

#[tokio::test]
async fn retry_is_a_fresh_load() {
	let mut runtime = runtime_with(|b| {
		b.register("flaky", AppMeta::runtime("Flaky", "g"), || async { Err::<Module, _>(LoadError::fetch("offline")) })
			.unwrap();
	});
	runtime.open(ApplicationDescriptor::with_id("flaky")).await;
	let token = runtime.navigate(ApplicationDescriptor::with_id("flaky"));
	assert!(matches!(runtime.state(), LoadState::Loading { token: t, .. } if *t == token));
	assert!(runtime.settle().await.message().is_some());
}

#[tokio::test]
async fn load_diagnostics_are_observable() {
	let (captured, _guard) = capture();
	let (_, load) = counting("Speakeasy");
	let mut runtime = runtime_with(|b| {
		b.register("speakeasy", AppMeta::runtime("Speakeasy", "speakeasy"), load).unwrap();
	});

	runtime.open(ApplicationDescriptor::with_id("speakeasy")).await;

	let ready = captured.named("slot.ready");
	assert_eq!(ready.len(), 1);
	assert_eq!(ready[0].field("app"), Some("speakeasy"));
	assert_eq!(ready[0].field("component"), Some("Speakeasy"));
	assert_eq!(captured.named("loader.fetch").len(), 1);
	assert!(captured.events().iter().any(|e| e.message == "resolve.hit"));
}
