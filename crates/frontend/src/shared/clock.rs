use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

fn clock_now() -> (String, String) {
    let now = js_sys::Date::new_0();
    let time = now.to_locale_time_string("en-US").as_string().unwrap_or_default();
    let date = now
        .to_locale_date_string("en-US", &wasm_bindgen::JsValue::UNDEFINED)
        .as_string()
        .unwrap_or_default();
    (time, date)
}

/// Live date/time card, ticking once per second. The tick loop stops on its
/// own once the component is gone and the signal write starts failing.
#[component]
pub fn LiveClock() -> impl IntoView {
    let (now, set_now) = signal(clock_now());

    spawn_local(async move {
        loop {
            TimeoutFuture::new(1_000).await;
            if set_now.try_set(clock_now()).is_some() {
                break;
            }
        }
    });

    view! {
        <div class="small-datetime-card">
            <div class="small-datetime-text">
                <span class="small-time">{move || now.get().0}</span>
                <span class="small-date">{move || now.get().1}</span>
            </div>
        </div>
    }
}
