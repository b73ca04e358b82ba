use web_sys::window;

fn vibrate(ms: u32) {
    if let Some(window) = window() {
        let _ = window.navigator().vibrate_with_duration(ms);
    }
}

/// Short haptic tick for button presses (if supported)
pub fn vibrate_tick() {
    vibrate(10);
}

/// Long rumble when the portal opens
pub fn vibrate_rumble() {
    vibrate(400);
}
