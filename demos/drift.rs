use antikythera::{Angle, FaceCommand, FaceConfig, Orrery};
use rand::Rng;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Larger window and a faster tick so the drift is visible
    let config = FaceConfig::builder()
        .window_scale(4)
        .redraw_interval(Duration::from_millis(100))
        .build();

    let mut orrery = Orrery::new(config);

    let (sender, receiver) = mpsc::channel();

    // Random walk for every body, plus a slowly wobbling horizon
    thread::spawn(move || {
        let mut rng = rand::rng();
        let mut angles = [0i32; 7];
        for angle in angles.iter_mut() {
            *angle = rng.random_range(0..antikythera::FULL_TURN);
        }
        loop {
            for angle in angles.iter_mut() {
                *angle = (*angle + rng.random_range(-200..600)).rem_euclid(antikythera::FULL_TURN);
            }
            let [sunrise, sunset, sun, moon, mars, venus, jupiter] = angles.map(Angle);
            let commands = [
                FaceCommand::SetSunrise(Angle(sunrise.units() % 4000)),
                FaceCommand::SetSunset(Angle(Angle::DEG_180.units() - sunset.units() % 4000)),
                FaceCommand::SetSun(sun),
                FaceCommand::SetMoon(moon),
                FaceCommand::SetMars(mars),
                FaceCommand::SetVenus(venus),
                FaceCommand::SetJupiter(jupiter),
            ];

            if commands.iter().any(|cmd| sender.send(*cmd).is_err()) {
                break;
            }

            thread::sleep(Duration::from_millis(100));
        }
    });

    println!("Displaying the face with drifting sky angles");
    println!("Press Ctrl+C to exit");

    orrery.show_with_commands(receiver)?;
    Ok(())
}
