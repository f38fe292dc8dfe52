//! Circular upload progress indicator.
//!
//! DESIGN
//! ======
//! A single SVG arc whose dash offset encodes the percentage, with the value
//! rendered as `NN%` in the center.

#[cfg(test)]
#[path = "progress_ring_test.rs"]
mod progress_ring_test;

use leptos::prelude::*;

const RING_RADIUS: f64 = 46.0;

/// Length of the ring's stroke path.
pub fn ring_circumference() -> f64 {
    2.0 * std::f64::consts::PI * RING_RADIUS
}

/// Stroke offset that leaves `percent` of the ring visible.
pub fn ring_dash_offset(percent: u8) -> f64 {
    let clamped = f64::from(percent.min(100));
    ring_circumference() * (1.0 - clamped / 100.0)
}

/// Text shown inside the ring.
pub fn ring_label(percent: u8) -> String {
    format!("{percent}%")
}

#[component]
pub fn ProgressRing(#[prop(into)] percent: Signal<u8>) -> impl IntoView {
    let circumference = ring_circumference();
    view! {
        <div class="progress-ring" role="progressbar" aria-valuemin="0" aria-valuemax="100" aria-valuenow=move || percent.get().to_string()>
            <svg class="progress-ring__svg" viewBox="0 0 100 100">
                <circle class="progress-ring__trail" cx="50" cy="50" r=RING_RADIUS.to_string()></circle>
                <circle
                    class="progress-ring__path"
                    cx="50"
                    cy="50"
                    r=RING_RADIUS.to_string()
                    stroke-dasharray=circumference.to_string()
                    stroke-dashoffset=move || ring_dash_offset(percent.get()).to_string()
                    transform="rotate(-90 50 50)"
                ></circle>
                <text class="progress-ring__text" x="50" y="50" text-anchor="middle" dominant-baseline="central">
                    {move || ring_label(percent.get())}
                </text>
            </svg>
        </div>
    }
}
