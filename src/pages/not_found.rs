use leptos::*;
use leptos_router::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <main class="container not-found">
            <header>
                <h1>"404"</h1>
                <p class="tagline">"Такой лаборатории нет"</p>
            </header>

            <nav class="back-nav">
                <A href="/">"< К порталу"</A>
            </nav>
        </main>
    }
}
