use registration::domain::{Mode, NamePattern};
use registration::form::{FormEvent, Outcome, RegistrationController};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::dom_validity::DomValidity;

type ModeCallback = Box<dyn Fn(Mode)>;

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Called with `Mode::Complete` once the registration is submitted.
    pub set_mode: Callback<Mode>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub name_pattern: NamePattern,
}

pub enum Msg {
    Form(FormEvent),
}

pub struct RegistrationForm {
    controller: RegistrationController<DomValidity, ModeCallback>,
    // Latest `set_mode` prop, read by the controller's sink on each emit.
    set_mode: Rc<RefCell<Callback<Mode>>>,
    form_ref: NodeRef,
}

// Reads the value of the input which fired the event.
fn input_value(e: InputEvent) -> String {
    e.target_unchecked_into::<HtmlInputElement>().value()
}

impl Component for RegistrationForm {
    type Message = Msg;
    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        let form_ref = NodeRef::default();
        let set_mode = Rc::new(RefCell::new(props.set_mode.clone()));
        let sink: ModeCallback = {
            let set_mode = set_mode.clone();
            Box::new(move |mode| {
                let callback = set_mode.borrow().clone();
                callback.emit(mode)
            })
        };
        Self {
            controller: RegistrationController::new(
                props.name_pattern.clone(),
                DomValidity(form_ref.clone()),
                sink,
            ),
            set_mode,
            form_ref,
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        let props = ctx.props();
        if props.set_mode != old_props.set_mode {
            *self.set_mode.borrow_mut() = props.set_mode.clone();
        }
        if props.name_pattern != old_props.name_pattern {
            self.controller.set_pattern(props.name_pattern.clone());
        }
        true
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Form(event) => {
                let outcome = self.controller.dispatch(event);
                if outcome == Outcome::Blocked {
                    gloo_console::log!("Registration form is not valid");
                }
                // The submit button reads the DOM validity, so every event re-renders.
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let form = self.controller.form();
        let fields = form.fields();

        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Form(FormEvent::Submit)
        });
        let on_name = link.callback(|e: InputEvent| {
            Msg::Form(FormEvent::NameChanged {
                value: input_value(e),
            })
        });
        let on_email = link.callback(|e: InputEvent| {
            Msg::Form(FormEvent::EmailChanged {
                value: input_value(e),
            })
        });
        let on_password = link.callback(|e: InputEvent| {
            Msg::Form(FormEvent::PasswordChanged {
                value: input_value(e),
            })
        });
        let on_repeat_password = link.callback(|e: InputEvent| {
            Msg::Form(FormEvent::RepeatPasswordChanged {
                value: input_value(e),
            })
        });

        html! {
            <form
                class={classes!("form", ctx.props().class.clone())}
                data-testid="form"
                ref={&self.form_ref}
                {onsubmit}
            >
                <div class="text_box">
                    <p class="text text_type_main-large">{"We need your strength!"}</p>
                    <p class="text text_type_main-medium">
                        {"Register on our platform to join the list of contributors"}
                    </p>
                </div>
                <fieldset class="fieldset">
                    <input
                        class="text input__textfield text_type_main-default"
                        data-testid="name-input"
                        name="name"
                        type="text"
                        placeholder="Name"
                        required=true
                        value={fields.name.clone()}
                        oninput={on_name}
                    />
                    if form.name_error() {
                        <p class="text input__error text_type_main-default">
                            {"Invalid name format"}
                        </p>
                    }
                    <input
                        class="text input__textfield text_type_main-default"
                        data-testid="email-input"
                        name="email"
                        type="email"
                        placeholder="E-mail"
                        required=true
                        value={fields.email.clone()}
                        oninput={on_email}
                    />
                    <input
                        class="text input__textfield text_type_main-default"
                        data-testid="password-input"
                        name="password"
                        type="password"
                        placeholder="Password"
                        required=true
                        value={fields.password.clone()}
                        oninput={on_password}
                    />
                    <input
                        class="text input__textfield text_type_main-default"
                        data-testid="repeat-password-input"
                        name="repeatPassword"
                        type="password"
                        placeholder="Repeat password"
                        required=true
                        value={fields.repeat_password.clone()}
                        oninput={on_repeat_password}
                    />
                    if form.repeat_password_error() {
                        <p class="text input__error text_type_main-default mt-2 mb-2">
                            {"Passwords do not match"}
                        </p>
                    }
                    <button
                        class="button button_type_primary button_size_medium"
                        type="submit"
                        disabled={!self.controller.submit_enabled()}
                    >
                        {"Register"}
                    </button>
                </fieldset>
            </form>
        }
    }
}
