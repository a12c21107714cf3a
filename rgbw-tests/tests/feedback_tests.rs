//! Integration Tests für die Ausgaben
//!
//! Prüft was der Controller an den PixelSink übergibt: Haupt-Strip,
//! Indikator und Tasten-LEDs.

mod common;

use common::{MemoryMedium, MockButtons, MockPixels, MockSlider};
use rgb::RGB8;
use rgbw_core::{
    ChannelValues, Controller, ControllerConfig, Feedback, Instant, LedError, PixelSink,
    PresetStore, render,
};

type TestController = Controller<MockButtons, MockSlider, MockPixels, MemoryMedium>;

fn controller_with(values: Option<ChannelValues>, raw: u16) -> TestController {
    let mut store = PresetStore::new(MemoryMedium::new(), 0);
    if let Some(values) = values {
        store.save(values).unwrap();
    }
    Controller::new(
        MockButtons::new(),
        MockSlider::new(raw),
        MockPixels::new(),
        store.into_medium(),
        ControllerConfig::default(),
    )
}

fn tap(controller: &mut TestController, index: usize, ms: u64) {
    controller.buttons_mut().press(index);
    controller.tick(Instant::from_millis(ms));
    controller.buttons_mut().release_all();
    controller.tick(Instant::from_millis(ms + 10));
}

fn last_feedback(controller: &TestController) -> Feedback {
    controller.pixels().last.expect("feedback pushed")
}

// ============================================================================
// Tests: MockPixels
// ============================================================================

#[test]
fn test_mock_pixels_show() {
    let mut mock = MockPixels::new();
    let feedback = render(ChannelValues::new(10, 0, 0, 0), &Default::default());

    assert_eq!(mock.show_count, 0);
    assert_eq!(mock.last, None);

    mock.show(&feedback).unwrap();

    assert_eq!(mock.show_count, 1);
    assert_eq!(mock.last, Some(feedback));
}

#[test]
fn test_mock_pixels_recovers_after_fail() {
    let mut mock = MockPixels::new();
    mock.fail_next_write = true;
    let feedback = render(ChannelValues::ZERO, &Default::default());

    assert_eq!(mock.show(&feedback), Err(LedError::WriteFailed));
    assert_eq!(mock.show_count, 0);

    assert!(mock.show(&feedback).is_ok());
    assert_eq!(mock.show_count, 1);
}

// ============================================================================
// Tests: Startzustand
// ============================================================================

#[test]
fn test_startup_pushes_idle_feedback() {
    let controller = controller_with(None, 0);
    let feedback = last_feedback(&controller);

    assert_eq!(controller.pixels().show_count, 1);
    assert_eq!(feedback.primary, ChannelValues::ZERO);
    assert_eq!(feedback.indicator, RGB8 { r: 10, g: 10, b: 10 });
    assert_eq!(feedback.keys, [RGB8::default(); 4]);
}

#[test]
fn test_startup_keys_show_restored_values_dimmed() {
    let controller = controller_with(Some(ChannelValues::new(80, 160, 240, 16)), 0);
    let feedback = last_feedback(&controller);

    assert_eq!(feedback.primary, ChannelValues::new(80, 160, 240, 16));
    assert_eq!(feedback.keys[0], RGB8 { r: 10, g: 0, b: 0 });
    assert_eq!(feedback.keys[1], RGB8 { r: 0, g: 20, b: 0 });
    assert_eq!(feedback.keys[2], RGB8 { r: 0, g: 0, b: 30 });
    assert_eq!(feedback.keys[3], RGB8 { r: 2, g: 2, b: 2 });
}

// ============================================================================
// Tests: Auswahl
// ============================================================================

#[test]
fn test_single_selection_shows_channel_color() {
    let mut controller = controller_with(None, 0);
    tap(&mut controller, 2, 0);

    let feedback = last_feedback(&controller);
    assert_eq!(feedback.indicator, RGB8 { r: 0, g: 0, b: 255 });
    assert_eq!(feedback.keys[2], RGB8 { r: 0, g: 0, b: 255 });
}

#[test]
fn test_mixed_selection_shows_additive_color() {
    let mut controller = controller_with(None, 0);
    tap(&mut controller, 0, 0);
    tap(&mut controller, 1, 100);

    assert_eq!(last_feedback(&controller).indicator, RGB8 { r: 255, g: 255, b: 0 });
}

#[test]
fn test_white_in_mix_brightens_indicator() {
    let mut controller = controller_with(None, 0);
    tap(&mut controller, 2, 0);
    tap(&mut controller, 3, 100);

    assert_eq!(last_feedback(&controller).indicator, RGB8 { r: 128, g: 128, b: 255 });
}

#[test]
fn test_deselect_all_returns_to_idle_indicator() {
    let mut controller = controller_with(None, 0);
    tap(&mut controller, 0, 0);
    tap(&mut controller, 0, 100);

    assert_eq!(last_feedback(&controller).indicator, RGB8 { r: 10, g: 10, b: 10 });
}

// ============================================================================
// Tests: Werte
// ============================================================================

#[test]
fn test_slider_change_updates_primary_output() {
    let mut controller = controller_with(None, 0);
    tap(&mut controller, 0, 0);

    controller.slider_mut().raw = 1023;
    controller.tick(Instant::from_millis(100));

    let feedback = last_feedback(&controller);
    assert_eq!(feedback.primary, ChannelValues::new(255, 0, 0, 0));
    // Ausgewählte Taste bleibt auf voller Farbe
    assert_eq!(feedback.keys[0], RGB8 { r: 255, g: 0, b: 0 });
}

#[test]
fn test_rgb_strip_uses_white_as_brightness() {
    assert_eq!(
        ChannelValues::new(200, 100, 50, 0).to_rgb_scaled(),
        RGB8 { r: 200, g: 100, b: 50 }
    );
    assert_eq!(
        ChannelValues::new(200, 100, 50, 255).to_rgb_scaled(),
        RGB8 { r: 200, g: 100, b: 50 }
    );
    assert_eq!(
        ChannelValues::new(200, 100, 50, 51).to_rgb_scaled(),
        RGB8 { r: 40, g: 20, b: 10 }
    );
}
