use crate::driver::ReactorDriver;
use crate::reactor::Stage;
use leptos::*;

#[component]
pub fn ControlPanel(
    driver: ReactorDriver,
    stage: Memo<Stage>,
    animating: Memo<bool>,
    reset_offered: Memo<bool>,
) -> impl IntoView {
    let profile = move || stage.get().profile();
    let start_disabled = move || animating.get() || stage.get().is_terminal();

    view! {
        <div class="panel controls">
            <h2>"Панель управления"</h2>

            <div class="configuration">
                <h3>"Текущая конфигурация:"</h3>
                <p>"Конденсаторы: " {move || format!("{} единиц", profile().capacitors)}</p>
                <p>"Катушки индуктивности: " {move || format!("{} единиц", profile().inductors)}</p>
                <p class="spaced">"Экранирование: " {move || profile().shielding}</p>

                <div class="shield-row">
                    <span class="icon shield">"🛡"</span>
                    <div class="shield-track">
                        <div
                            class="shield-fill"
                            style=move || format!("width: {}%", profile().shield_pct)
                        ></div>
                    </div>
                </div>
                <p class="muted small">"Уровень защиты: " {move || profile().protection}</p>
            </div>

            <button
                class="start-button"
                class:busy=start_disabled
                prop:disabled=start_disabled
                on:click=move |_| driver.start()
            >
                <span class="icon">"⏻"</span>
                {move || stage.get().start_label()}
            </button>

            <Show when=move || reset_offered.get()>
                <button class="reset-button" on:click=move |_| driver.reset()>
                    "Сбросить эксперимент"
                </button>
            </Show>
        </div>
    }
}
