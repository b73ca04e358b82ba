use crate::reactor::{band_for, core_glow, format_celsius, Band, Stage};
use leptos::*;

// Capacitors and inductors alternate around the core, 45° apart
const RING_SLOTS: usize = 8;

#[component]
pub fn ReactorView(temperature: Memo<f64>, stage: Memo<Stage>) -> impl IntoView {
    let upgraded = move || stage.get().is_upgraded();
    let band = create_memo(move |_| -> Band { *band_for(temperature.get()) });

    let core_class = move || format!("core {}", band.get().color.css_class());
    let core_style = move || {
        let (blur, spread) = core_glow(temperature.get());
        format!(
            "box-shadow: 0 0 {:.1}px {:.1}px {}",
            blur,
            spread,
            band.get().color.glow_rgba()
        )
    };

    let capacitors = (0..RING_SLOTS)
        .map(|i| {
            view! {
                <div
                    class="capacitor"
                    style=format!("transform: rotate({}deg) translateY(-120px)", i * 45)
                ></div>
            }
        })
        .collect_view();

    let inductors = (0..RING_SLOTS)
        .map(|i| {
            view! {
                <div
                    class="inductor"
                    style=format!("transform: rotate({}deg) translateY(-100px)", i as f64 * 45.0 + 22.5)
                ></div>
            }
        })
        .collect_view();

    view! {
        <div class="panel visualization">
            <h2>"Визуализация эксперимента"</h2>

            <div class="reactor-stage">
                <div class="reactor">
                    <div class="core-wrap">
                        <div class=core_class style=core_style></div>
                    </div>
                    {capacitors}
                    {inductors}
                    <div class="shielding"></div>
                    <Show when=upgraded>
                        <div class="shielding upgraded"></div>
                    </Show>
                </div>

                <div class="readout">
                    <p class="readout-temp">
                        "Текущая температура: "
                        <span class="bold">{move || format_celsius(temperature.get())}</span>
                    </p>
                    <p class="advisory">{move || band.get().message}</p>
                </div>
            </div>
        </div>
    }
}
