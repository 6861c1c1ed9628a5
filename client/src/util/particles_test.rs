use super::*;

#[test]
fn layout_has_fixed_count() {
    assert_eq!(layout().len(), PARTICLE_COUNT);
}

#[test]
fn layout_is_deterministic() {
    assert_eq!(layout(), layout());
}

#[test]
fn particles_stay_within_bounds() {
    for p in layout() {
        assert!((0.0..100.0).contains(&p.x_pct), "{p:?}");
        assert!((0.0..100.0).contains(&p.y_pct), "{p:?}");
        assert!((MIN_RADIUS_PX..=MAX_RADIUS_PX).contains(&p.radius_px), "{p:?}");
        assert!(p.delay_s <= 0.0 && -p.delay_s <= p.duration_s, "{p:?}");
    }
}

#[test]
fn particles_are_spread_out() {
    let field = layout();
    let left = field.iter().filter(|p| p.x_pct < 50.0).count();
    assert!(left > 5 && left < PARTICLE_COUNT - 5, "left half holds {left}");
}

#[test]
fn style_carries_color_and_size() {
    let p = Particle { x_pct: 10.0, y_pct: 20.0, radius_px: 2.5, duration_s: 15.0, delay_s: -3.0 };
    let style = p.style();
    assert!(style.contains("left:10.00%"));
    assert!(style.contains("width:5.00px"));
    assert!(style.contains(PARTICLE_COLOR));
    assert!(style.contains("animation-delay:-3.00s"));
}
