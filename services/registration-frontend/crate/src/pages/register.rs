use registration::domain::Mode;
use yew::prelude::*;

use crate::components::registration_form::RegistrationForm;

/// Shows the registration form until it reports a completed registration.
#[function_component(Register)]
pub fn register() -> Html {
    let mode = use_state(Mode::default);

    let set_mode = {
        let mode = mode.clone();
        use_callback((), move |next: Mode, _| {
            gloo_console::log!("Switching to mode", next.as_str());
            mode.set(next);
        })
    };

    match *mode {
        Mode::Register => html! {
            <RegistrationForm {set_mode} class={classes!("page_form")} />
        },
        Mode::Complete => html! {
            <div class={classes!("page", "page_complete")}>
                <p class="text text_type_main-large">{"Thank you for registering"}</p>
                <p class="text text_type_main-default text_color_inactive">
                    {"You are now on the list of contributors."}
                </p>
            </div>
        },
    }
}
