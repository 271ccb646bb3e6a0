// Host-side tests for scroll-reveal configuration and class output.

use site_core::*;

fn attrs(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
    move |name: &str| {
        pairs
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v.to_string())
    }
}

#[test]
fn defaults() {
    let cfg = RevealConfig::default();
    assert_eq!(cfg.animation, Animation::FadeIn);
    assert_eq!(cfg.delay_ms, 0);
    assert_eq!(cfg.duration_ms, 600);
    assert_eq!(cfg.threshold, 0.1);
    assert!(cfg.visibility_options().trigger_once);
}

#[test]
fn class_list_switches_on_visibility() {
    let cfg = RevealConfig {
        class_name: "card".into(),
        ..RevealConfig::default()
    };
    assert_eq!(
        cfg.class_list(false),
        "transition-all ease-out opacity-0 translate-y-8 card"
    );
    assert_eq!(
        cfg.class_list(true),
        "transition-all ease-out opacity-100 translate-y-0 card"
    );
}

#[test]
fn every_animation_hides_with_zero_opacity() {
    for name in ["fade-in", "slide-up", "slide-left", "slide-right", "scale-in", "bounce-in"] {
        let a: Animation = name.parse().unwrap();
        assert!(a.hidden_classes().starts_with("opacity-0"));
        assert!(a.active_classes().starts_with("opacity-100"));
    }
}

#[test]
fn bounce_uses_overshoot_easing() {
    assert!(Animation::BounceIn.transition_classes().contains("cubic-bezier(0.68,-0.55"));
    assert_eq!(Animation::SlideLeft.transition_classes(), "transition-all ease-out");
    assert_eq!(Animation::SlideLeft.hidden_classes(), "opacity-0 -translate-x-16");
}

#[test]
fn style_carries_timing() {
    let cfg = RevealConfig {
        delay_ms: 250,
        duration_ms: 900,
        ..RevealConfig::default()
    };
    assert_eq!(
        cfg.style(),
        "transition-duration: 900ms; transition-delay: 250ms;"
    );
}

#[test]
fn config_from_attributes() {
    let (cfg, errors) = RevealConfig::from_attributes(attrs(&[
        ("data-reveal", "slide-right"),
        ("data-reveal-delay", "200"),
        ("data-reveal-duration", "800"),
        ("data-reveal-threshold", "0.25"),
    ]));
    assert!(errors.is_empty());
    assert_eq!(cfg.animation, Animation::SlideRight);
    assert_eq!(cfg.delay_ms, 200);
    assert_eq!(cfg.duration_ms, 800);
    assert_eq!(cfg.threshold, 0.25);
    assert_eq!(cfg.visibility_options().threshold, 0.25);
}

#[test]
fn bare_reveal_attribute_uses_default_animation() {
    let (cfg, errors) = RevealConfig::from_attributes(attrs(&[("data-reveal", "")]));
    assert!(errors.is_empty());
    assert_eq!(cfg.animation, Animation::FadeIn);
}

#[test]
fn unreadable_values_keep_defaults_and_report() {
    let (cfg, errors) = RevealConfig::from_attributes(attrs(&[
        ("data-reveal", "spin"),
        ("data-reveal-delay", "-5"),
    ]));
    assert_eq!(cfg, RevealConfig::default());
    assert_eq!(
        errors,
        vec![
            ConfigError::UnknownAnimation("spin".into()),
            ConfigError::InvalidNumber {
                attr: "data-reveal-delay".into(),
                value: "-5".into()
            },
        ]
    );
}

#[test]
fn out_of_range_threshold_passes_through() {
    let (cfg, _) = RevealConfig::from_attributes(attrs(&[("data-reveal-threshold", "4")]));
    assert_eq!(cfg.threshold, 4.0);
}

#[test]
fn stagger_delays_each_child() {
    let configs = stagger(4, 150, Animation::ScaleIn);
    let delays: Vec<u32> = configs.iter().map(|c| c.delay_ms).collect();
    assert_eq!(delays, [0, 150, 300, 450]);
    assert!(configs.iter().all(|c| c.animation == Animation::ScaleIn));
    assert!(stagger(0, 100, Animation::FadeIn).is_empty());
}
