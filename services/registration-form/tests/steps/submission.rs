use cucumber::{then, when};

use registration::domain::Mode;
use registration::form::Outcome;

use crate::state;

#[when("the user submits the form")]
fn submits(world: &mut state::TestWorld) {
    world.outcome = Some(world.controller.submit());
}

#[then(regex = r#"^the form asks for the "(\S+)" mode (\d+) times?$"#)]
fn asks_for_mode(world: &mut state::TestWorld, mode: String, count: usize) {
    let mode: Mode = mode.parse().expect("mode");
    let modes = world.requested_modes();
    assert_eq!(modes.len(), count, "requested modes: {modes:?}");
    assert!(modes.iter().all(|requested| *requested == mode));
}

#[then("no mode change is requested")]
fn no_mode_change(world: &mut state::TestWorld) {
    assert!(world.requested_modes().is_empty());
}

#[then("the passwords mismatch error is shown")]
fn mismatch_shown(world: &mut state::TestWorld) {
    assert!(world.controller.form().repeat_password_error());
}

#[then("no passwords mismatch error is shown")]
fn mismatch_hidden(world: &mut state::TestWorld) {
    assert!(!world.controller.form().repeat_password_error());
}

#[then(regex = r"^the submission is (updated|mismatch|completed|blocked)$")]
fn submission_outcome(world: &mut state::TestWorld, outcome: String) {
    let expected = match outcome.as_str() {
        "updated" => Outcome::Updated,
        "mismatch" => Outcome::Mismatch,
        "completed" => Outcome::Completed,
        "blocked" => Outcome::Blocked,
        _ => unreachable!("outcome {outcome} is constrained by the step regex"),
    };
    assert_eq!(world.outcome, Some(expected));
}
