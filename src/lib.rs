pub mod analytics;
pub mod components;
pub mod driver;
pub mod error;
pub mod haptics;
pub mod logging;
pub mod pages;
pub mod reactor;

use components::App;
use leptos::*;
use leptos_router::*;
use pages::NotFoundPage;
use wasm_bindgen::prelude::*;

/// Root component with routing
#[component]
fn Root() -> impl IntoView {
    view! {
        <ErrorBoundary fallback=|errors| view! {
            <main class="container">
                <div class="error-container">
                    <h2>"Что-то пошло не так"</h2>
                    <p>"Эксперимент прерван. Перезагрузите страницу, чтобы начать заново."</p>
                    <ul>
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect_view()
                        }
                    </ul>
                    <button on:click=move |_| {
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().reload();
                        }
                    }>"Перезагрузить"</button>
                </div>
            </main>
        }>
            <Router>
                <Routes>
                    <Route path="/" view=App/>
                    <Route path="/*" view=NotFoundPage/>
                </Routes>
            </Router>
        </ErrorBoundary>
    }
}

/// Mount the application to the DOM
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    logging::init();
    mount_to_body(Root);
}
