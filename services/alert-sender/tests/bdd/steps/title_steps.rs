//! BDD step definitions for title composition

use cucumber::{then, when};

use alert_sender::text::char_len;
use alert_sender::title::compose_title;

use crate::world::AlertWorld;

#[when(expr = "the title is composed with a limit of {int} characters")]
fn compose(world: &mut AlertWorld, limit: usize) {
    world.title = Some(compose_title(&world.batch(), &world.trigger, limit));
}

#[then(expr = "the title should be {string}")]
fn title_is(world: &mut AlertWorld, expected: String) {
    assert_eq!(world.title.as_deref(), Some(expected.as_str()));
}

#[then(expr = "the title should be at most {int} characters")]
fn title_within(world: &mut AlertWorld, limit: usize) {
    let title = world.title.as_deref().expect("no title composed");
    assert!(char_len(title) <= limit, "{title}");
}
