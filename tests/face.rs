mod common;

use antikythera::{ClockTime, Color, Face, FaceCommand, FaceConfig, FixedTrig, SkyState};
use common::Frame;

fn render(sky: &SkyState, time: ClockTime) -> Frame {
    let config = FaceConfig::default();
    let mut frame = Frame::new(config.width as usize, config.height as usize);
    Face::new(config).render(&mut frame.canvas(), &FixedTrig::new(), sky, time);
    frame
}

fn sky_from(lines: &[&str]) -> SkyState {
    let mut sky = SkyState::default();
    for line in lines {
        sky.apply(line.parse::<FaceCommand>().unwrap());
    }
    sky
}

#[test]
fn background_and_hands_without_a_sky() {
    let frame = render(&SkyState::default(), ClockTime::new(3, 0, 10));

    assert_eq!(frame.pixel(1, 166), Color::WHITE);
    assert_eq!(frame.pixel(72, 10), Color::WHITE);
    // Hour arc covers twelve to three
    assert_eq!(frame.pixel(77, 77), Color::BLACK);
    assert_eq!(frame.pixel(67, 77), Color::WHITE);
    // Five second markers, the first at 4s
    assert_eq!(frame.pixel(82, 62), Color::BLACK);
    assert_eq!(frame.pixel(72, 59), Color::WHITE);
}

#[test]
fn sky_pass_draws_horizon_and_beams() {
    let sky = sky_from(&[
        "sunrise 0",
        "sunset 180deg",
        "sun 0",
        "moon 270deg",
        "venus 0",
        "mars 0",
        "jupiter 0",
    ]);
    let frame = render(&sky, ClockTime::new(3, 0, 10));

    // Below the horizon
    assert_eq!(frame.pixel(1, 166), Color::BLACK);
    assert_eq!(frame.pixel(20, 100), Color::BLACK);
    // Moon beam straight up
    assert_eq!(frame.pixel(72, 10), Color::BLACK);
    assert_eq!(frame.pixel(20, 20), Color::WHITE);
    // Time disc over the horizon
    assert_eq!(frame.pixel(92, 84), Color::WHITE);
    assert_eq!(frame.pixel(77, 77), Color::BLACK);
}

#[test]
fn sunrise_alone_leaves_the_sky_blank() {
    let sky = sky_from(&["sunrise 90deg", "sunset 270deg"]);
    assert_eq!(sky.bodies, None);
    let frame = render(&sky, ClockTime::new(0, 0, 0));
    assert_eq!(frame.pixel(1, 166), Color::WHITE);
}

#[test]
fn rendering_is_repeatable() {
    let sky = sky_from(&["sun 1234", "moon 40000", "mars 9000", "venus 20000", "jupiter 50000"]);
    let time = ClockTime::new(22, 47, 41);
    assert_eq!(render(&sky, time).data, render(&sky, time).data);
}
