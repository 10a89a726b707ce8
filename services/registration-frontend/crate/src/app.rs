use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::page_not_found::PageNotFound;
use crate::pages::register::Register;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Register,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[allow(clippy::let_unit_value)]
fn switch(routes: Route) -> Html {
    match routes {
        Route::Register => {
            html! { <Register/> }
        }
        Route::NotFound => {
            html! { <PageNotFound/> }
        }
    }
}

#[function_component(Main)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}
