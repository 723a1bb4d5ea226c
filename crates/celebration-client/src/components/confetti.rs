//! Confetti overlay - renders the emitter's live particles.

use std::rc::Rc;

use celebration_core::Particle;
use yew::prelude::*;

/// Inline style positioning and animating one particle.
pub fn particle_style(particle: &Particle) -> String {
    format!(
        "background-color: {}; left: {:.2}vw; top: {}px; transform: rotate({:.1}deg); \
         animation-duration: {:.2}s; animation-delay: {:.2}s;",
        particle.color,
        particle.left_vw,
        particle.top_px,
        particle.rotation_deg,
        particle.fall_duration_s,
        particle.fall_delay_s,
    )
}

/// Props for the Confetti component.
#[derive(Properties, PartialEq)]
pub struct ConfettiProps {
    pub particles: Rc<Vec<Particle>>,
}

/// Full-screen, click-through layer of falling confetti.
#[function_component(Confetti)]
pub fn confetti(props: &ConfettiProps) -> Html {
    html! {
        <div class="confetti-layer">
            { for props.particles.iter().map(|particle| html! {
                <div
                    key={particle.id.to_string()}
                    class="confetti-particle"
                    style={particle_style(particle)}
                />
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use celebration_core::{BatchId, Color};
    use wasm_bindgen_test::wasm_bindgen_test;

    #[wasm_bindgen_test]
    fn test_particle_style() {
        let particle = Particle {
            id: 3,
            batch: BatchId::new(0),
            color: Color::GOLD,
            left_vw: 12.5,
            top_px: -20.0,
            rotation_deg: 90.0,
            fall_duration_s: 2.5,
            fall_delay_s: 0.25,
        };

        let style = particle_style(&particle);
        assert!(style.contains("background-color: #FFD700;"));
        assert!(style.contains("left: 12.50vw;"));
        assert!(style.contains("top: -20px;"));
        assert!(style.contains("rotate(90.0deg)"));
        assert!(style.contains("animation-duration: 2.50s;"));
        assert!(style.contains("animation-delay: 0.25s;"));
    }
}
