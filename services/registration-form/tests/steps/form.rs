use cucumber::{given, then, when};

use registration::domain::NamePattern;
use registration::form::FormEvent;

use crate::state;

#[given("a new registration form")]
fn new_form(world: &mut state::TestWorld) {
    *world = state::TestWorld::new();
}

#[given(regex = r#"^a new registration form accepting names matching "(.*)"$"#)]
fn new_form_with_pattern(world: &mut state::TestWorld, pattern: String) {
    let pattern = NamePattern::parse(&pattern).expect("name pattern");
    *world = state::TestWorld::with_pattern(pattern);
}

#[when(regex = r#"^the user types "(.*)" as (name|email|password|repeated password)$"#)]
fn types(world: &mut state::TestWorld, value: String, field: String) {
    let event = match field.as_str() {
        "name" => FormEvent::NameChanged { value },
        "email" => FormEvent::EmailChanged { value },
        "password" => FormEvent::PasswordChanged { value },
        "repeated password" => FormEvent::RepeatPasswordChanged { value },
        _ => unreachable!("field {field} is constrained by the step regex"),
    };
    world.outcome = Some(world.controller.dispatch(event));
}

#[given(
    regex = r#"^the user filled in "(.*)", "(.*)", "(.*)" and "(.*)"$"#
)]
fn fills_in(
    world: &mut state::TestWorld,
    name: String,
    email: String,
    password: String,
    repeat_password: String,
) {
    for event in [
        FormEvent::NameChanged { value: name },
        FormEvent::EmailChanged { value: email },
        FormEvent::PasswordChanged { value: password },
        FormEvent::RepeatPasswordChanged {
            value: repeat_password,
        },
    ] {
        world.outcome = Some(world.controller.dispatch(event));
    }
}

#[then("the name error is shown")]
fn name_error_shown(world: &mut state::TestWorld) {
    assert!(world.controller.form().name_error());
}

#[then("no name error is shown")]
fn name_error_hidden(world: &mut state::TestWorld) {
    assert!(!world.controller.form().name_error());
}

#[then("the submit button is enabled")]
fn submit_enabled(world: &mut state::TestWorld) {
    assert!(world.controller.submit_enabled());
}

#[then("the submit button is disabled")]
fn submit_disabled(world: &mut state::TestWorld) {
    assert!(!world.controller.submit_enabled());
}
