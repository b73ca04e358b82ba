use crate::components::{ControlPanel, PortalOverlay, ReactorView};
use crate::driver::ReactorDriver;
use crate::reactor::format_celsius;
use leptos::*;

#[component]
pub fn App() -> impl IntoView {
    let driver = ReactorDriver::new();
    let state = driver.state();

    // Narrow memos so each part of the page only re-renders on what it shows
    let temperature = create_memo(move |_| state.with(|r| r.temperature()));
    let stage = create_memo(move |_| state.with(|r| r.stage()));
    let animating = create_memo(move |_| state.with(|r| r.is_animating()));
    let portal_open = create_memo(move |_| state.with(|r| r.portal_open()));
    let reset_offered = create_memo(move |_| state.with(|r| r.reset_offered()));
    let lab_class = move || format!("container lab {}", state.with(|r| r.phase().css_class()));

    view! {
        <div class="page">
            <header class="site-header">
                <div class="site-header-inner">
                    <h1>"Портал Петровича"</h1>
                    <div class="header-temp">
                        <span class="icon thermometer">"🌡"</span>
                        <span>{move || format_celsius(temperature.get())}</span>
                    </div>
                </div>
            </header>

            <main class=lab_class>
                <Show when=move || portal_open.get()>
                    <PortalOverlay driver=driver/>
                </Show>

                <ControlPanel
                    driver=driver
                    stage=stage
                    animating=animating
                    reset_offered=reset_offered
                />
                <ReactorView
                    temperature=temperature
                    stage=stage
                />
            </main>

            <footer class="site-footer">
                <p>"© 2025 Портал Петровича | Исследование высоких температур"</p>
            </footer>
        </div>
    }
}
