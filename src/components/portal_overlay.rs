use crate::driver::ReactorDriver;
use leptos::*;

/// Black hole shown once the Planck temperature is reached.
#[component]
pub fn PortalOverlay(driver: ReactorDriver) -> impl IntoView {
    view! {
        <div class="portal-overlay">
            <div class="portal-backdrop"></div>
            <div class="portal-content">
                <div class="black-hole"></div>
                <p class="portal-message">"Пространственно-временной портал открыт"</p>
                <button class="reset-button portal-reset" on:click=move |_| driver.reset()>
                    <span class="icon">"✕"</span>
                    "Завершить эксперимент"
                </button>
            </div>
        </div>
    }
}
