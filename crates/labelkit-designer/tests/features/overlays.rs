use labelkit_core::{Point, Size};
use labelkit_designer::overlays::{container_size, refresh_aspect_ratio};
use labelkit_designer::{BatchSimulation, BoxLabelSimulation, PositioningGuide};
use labelkit_settings::OverlaySettings;

#[test]
fn test_batch_initial_view() {
    let sim = BatchSimulation::default();
    let view = sim.active().unwrap();
    assert_eq!(view.id, "1");
    assert_eq!(view.name, "Vista Principal");
    assert_eq!((view.position_x, view.position_y), (50.0, 50.0));
    assert_eq!(view.font_size, 5.0);
    assert_eq!(view.text_color, "#000000");
    assert!(!view.is_laser);
}

#[test]
fn test_batch_remove_active_falls_back_to_first() {
    let mut sim = BatchSimulation::default();
    let added = sim.add_view().unwrap().to_string();
    assert!(sim.remove_view(&added));
    assert_eq!(sim.active_id(), "1");
    assert!(!sim.remove_view("1"));
    assert!(!sim.set_active("ghost"));
}

#[test]
fn test_batch_limit_from_settings() {
    let settings = OverlaySettings {
        max_views: 2,
        ..Default::default()
    };
    let mut sim = BatchSimulation::new(settings);
    assert!(sim.add_view().is_some());
    assert!(sim.add_view().is_none());
}

#[test]
fn test_batch_image_aspect() {
    let mut sim = BatchSimulation::default();
    sim.set_image(Some("data:image/jpeg;base64,AAAA".into()));
    assert!(sim.on_image_loaded(Size::new(300.0, 400.0)));
    assert_eq!(sim.active().unwrap().aspect_ratio, Some(0.75));
    assert!(!sim.on_image_loaded(Size::new(301.0, 400.0)));
}

#[test]
fn test_guide_defaults() {
    let guide = PositioningGuide::default();
    assert_eq!(guide.guide_y, 85.0);
    assert!(guide.show_guide);
    assert_eq!(guide.aspect_ratio, Some(0.75));
}

#[test]
fn test_box_rotation_and_slider() {
    let mut sim = BoxLabelSimulation::default();
    sim.rotate_left();
    assert_eq!(sim.rotation, -90.0);
    sim.set_rotation(-400.0);
    assert_eq!(sim.rotation, -180.0);
}

#[test]
fn test_box_drag_in_portrait_photo() {
    let mut sim = BoxLabelSimulation::default();
    sim.on_image_loaded(Size::new(600.0, 800.0));
    let container = container_size(sim.aspect_ratio.unwrap(), 300.0);
    assert_eq!(container, Size::new(300.0, 400.0));

    sim.begin_drag(Point::new(150.0, 200.0), container);
    sim.drag_to(Point::new(0.0, 0.0), container);
    assert_eq!((sim.position_x, sim.position_y), (0.0, 0.0));
    sim.end_drag();
    assert!(!sim.drag_to(Point::new(150.0, 200.0), container));
}

#[test]
fn test_aspect_unset_always_updates() {
    let mut ratio = None;
    assert!(refresh_aspect_ratio(&mut ratio, Size::new(100.0, 100.0)));
    assert_eq!(ratio, Some(1.0));
}
