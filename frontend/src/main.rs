mod env_variable_utils;
mod gallery;
mod models;
mod router;
mod utils;

use crate::env_variable_utils::GALLERY_ENV;
use crate::router::{switch, Route};
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    let env = &*GALLERY_ENV;
    if env.debug {
        web_sys::console::log_1(
            &format!(
                "{} gallery: loading {} (first {} items shown)",
                env.app_name,
                env.videos_url(),
                gallery::PAGE_SIZE
            )
            .into(),
        );
    }

    yew::Renderer::<App>::new().render();
}
