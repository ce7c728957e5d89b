//! BDD step definitions for priority classification

use cucumber::{then, when};

use alert_sender::Priority;

use crate::world::AlertWorld;

fn parse_priority(s: &str) -> Priority {
    match s {
        "P1" => Priority::P1,
        "P2" => Priority::P2,
        "P3" => Priority::P3,
        "P4" => Priority::P4,
        "P5" => Priority::P5,
        other => panic!("Unknown priority: {}", other),
    }
}

#[when("the priority is classified")]
fn classify(world: &mut AlertWorld) {
    world.priority = Some(Priority::classify(&world.batch()));
}

#[then(expr = "the priority should be {string}")]
fn priority_is(world: &mut AlertWorld, expected: String) {
    assert_eq!(world.priority, Some(parse_priority(&expected)));
}
