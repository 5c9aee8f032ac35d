//! Micro click feedback via WebAudio.
//!
//! Audio is strictly decorative and platform restrictions (autoplay
//! policies, missing hardware) are expected, so every failure is
//! swallowed and nothing else is affected.

use web_sys::{AudioContext, OscillatorType};

const FREQ_HZ: f32 = 2400.0;
const PEAK_GAIN: f32 = 0.02;
const FLOOR_GAIN: f32 = 0.0001;
const DECAY_S: f64 = 0.08;

pub fn click_blip() {
    let _ = try_blip();
}

fn try_blip() -> Option<()> {
    let ctx = AudioContext::new().ok()?;
    let osc = ctx.create_oscillator().ok()?;
    let gain = ctx.create_gain().ok()?;

    osc.set_type(OscillatorType::Square);
    osc.frequency().set_value(FREQ_HZ);
    osc.connect_with_audio_node(&gain).ok()?;
    gain.connect_with_audio_node(&ctx.destination()).ok()?;

    let now = ctx.current_time();
    gain.gain().set_value_at_time(PEAK_GAIN, now).ok()?;
    gain.gain()
        .exponential_ramp_to_value_at_time(FLOOR_GAIN, now + DECAY_S)
        .ok()?;
    osc.start().ok()?;
    osc.stop_with_when(now + DECAY_S).ok()?;
    Some(())
}
