use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;

#[function_component(PageNotFound)]
pub fn page_not_found() -> Html {
    html! {
        <div class={classes!("page", "page_not_found")}>
            <h1 class="text text_type_main-large">{"Not Found"}</h1>
            <Link<Route> to={Route::Register} classes="text text_type_main-default">
                {"Back to registration"}
            </Link<Route>>
        </div>
    }
}
