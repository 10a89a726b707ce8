use registration::form::{FormFields, FormValiditySource};
use web_sys::HtmlFormElement;
use yew::NodeRef;

/// Asks the mounted `<form>` element for its constraint validity.
///
/// The form is invalid until the element is mounted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DomValidity(pub NodeRef);

impl FormValiditySource for DomValidity {
    fn check_validity(&self, _fields: &FormFields) -> bool {
        self.0
            .cast::<HtmlFormElement>()
            .map(|form| form.check_validity())
            .unwrap_or(false)
    }
}
