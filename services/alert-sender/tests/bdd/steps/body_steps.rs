//! BDD step definitions for body composition

use std::sync::Arc;

use cucumber::{then, when};

use alert_sender::body::BodyComposer;
use alert_sender::event_list::{elision_marker, render_events, EventFormat, THROTTLE_NOTICE};
use alert_sender::markdown::ComrakRenderer;
use alert_sender::text::char_len;

use crate::world::AlertWorld;

#[when(expr = "the body is composed with a budget of {int} characters")]
fn compose_body(world: &mut AlertWorld, budget: usize) {
    let composer = BodyComposer::new(Arc::new(ComrakRenderer::new()), EventFormat::default());
    let body = composer.compose(
        &world.trigger.desc,
        &world.batch(),
        world.throttled,
        budget as i64,
    );
    world.body = Some(body);
    world.body_budget = Some(budget);
}

#[when(expr = "the event list is rendered with room for {int} events")]
fn render_with_room(world: &mut AlertWorld, room: usize) {
    let format = EventFormat::default();
    let events = world.batch();
    let first = events.iter().next().expect("no events");
    let mut budget = room * char_len(&format.line(first));
    if room < events.len() {
        budget += char_len(&elision_marker(events.len() - room));
    }
    if world.throttled {
        budget += char_len(THROTTLE_NOTICE);
    }
    world.body = Some(render_events(
        &events,
        budget as i64,
        world.throttled,
        &format,
    ));
    world.body_budget = Some(budget);
}

fn body(world: &AlertWorld) -> &str {
    world.body.as_deref().expect("no body composed")
}

#[then(expr = "the body should start with the paragraph {string}")]
fn starts_with_paragraph(world: &mut AlertWorld, text: String) {
    let expected = format!("<p>{}</p>\n", text);
    assert!(body(world).starts_with(&expected), "{}", body(world));
}

#[then(expr = "the body should contain {int} event lines")]
fn contains_event_lines(world: &mut AlertWorld, count: usize) {
    let lines = body(world).lines().filter(|l| l.contains(" = ")).count();
    assert_eq!(lines, count);
}

#[then("the body should not mention omitted events")]
fn no_elision(world: &mut AlertWorld) {
    assert!(!body(world).contains("more events."));
}

#[then(expr = "the body should end with {string}")]
fn ends_with(world: &mut AlertWorld, suffix: String) {
    assert!(body(world).ends_with(&suffix), "{}", body(world));
}

#[then(expr = "the body should contain {string}")]
fn contains(world: &mut AlertWorld, text: String) {
    assert!(body(world).contains(&text), "{}", body(world));
}

#[then("the body should end with the throttle notice")]
fn ends_with_throttle_notice(world: &mut AlertWorld) {
    assert!(body(world).ends_with(THROTTLE_NOTICE), "{}", body(world));
}

#[then("the body should fit its budget")]
fn fits_budget(world: &mut AlertWorld) {
    let budget = world.body_budget.expect("no budget");
    assert!(char_len(body(world)) <= budget);
}

#[then("the description should be cut with an ellipsis")]
fn description_ellipsis(world: &mut AlertWorld) {
    assert!(body(world).contains("...</p>"), "{}", body(world));
}

#[then("every event line should be complete")]
fn lines_complete(world: &mut AlertWorld) {
    for line in body(world).lines().filter(|l| l.contains(" = ")) {
        assert!(line.ends_with(')'), "{line}");
    }
}
