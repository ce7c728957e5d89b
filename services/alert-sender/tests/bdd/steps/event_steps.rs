//! BDD step definitions shared by the composition features

use cucumber::given;

use alert_sender::{Event, State, TriggerData};

use crate::world::AlertWorld;

pub fn parse_state(s: &str) -> State {
    match s {
        "OK" => State::Ok,
        "WARN" => State::Warn,
        "ERROR" => State::Error,
        "NODATA" => State::NoData,
        "EXCEPTION" => State::Exception,
        "TEST" => State::Test,
        other => panic!("Unknown state: {}", other),
    }
}

fn event(old_state: State, state: State) -> Event {
    Event {
        timestamp: 1_700_000_000,
        metric: "cpu.user".to_string(),
        value: Some(42.0),
        old_state,
        state,
        message: None,
    }
}

#[given(expr = "a trigger named {string} with description {string}")]
fn trigger_with_description(world: &mut AlertWorld, name: String, desc: String) {
    world.trigger = TriggerData {
        id: "trigger-1".to_string(),
        name,
        desc,
        tags: Vec::new(),
    };
}

#[given(expr = "a trigger named {string} with tags {string}")]
fn trigger_with_tags(world: &mut AlertWorld, name: String, tags: String) {
    world.trigger = TriggerData {
        id: "trigger-1".to_string(),
        name,
        desc: String::new(),
        tags: tags.split(',').map(|t| t.trim().to_string()).collect(),
    };
}

#[given(expr = "a trigger with a description of {int} characters")]
fn trigger_with_long_description(world: &mut AlertWorld, len: usize) {
    world.trigger = TriggerData {
        id: "trigger-1".to_string(),
        name: "Long".to_string(),
        desc: "x".repeat(len),
        tags: Vec::new(),
    };
}

#[given(expr = "a trigger with a description of {int} characters and {int} trailing spaces")]
fn trigger_with_padded_description(world: &mut AlertWorld, len: usize, spaces: usize) {
    world.trigger = TriggerData {
        id: "trigger-1".to_string(),
        name: "Padded".to_string(),
        desc: format!("{}{}", "x".repeat(len), " ".repeat(spaces)),
        tags: Vec::new(),
    };
}

#[given(expr = "{int} events changing from {string} to {string}")]
fn events_changing(world: &mut AlertWorld, count: usize, from: String, to: String) {
    let (from, to) = (parse_state(&from), parse_state(&to));
    world.events = (0..count).map(|_| event(from, to)).collect();
}

#[given(expr = "events with new states {string}")]
fn events_with_states(world: &mut AlertWorld, states: String) {
    world.events = states
        .split(',')
        .map(|s| event(State::Ok, parse_state(s.trim())))
        .collect();
}

#[given("the trigger is throttled")]
fn throttled(world: &mut AlertWorld) {
    world.throttled = true;
}
