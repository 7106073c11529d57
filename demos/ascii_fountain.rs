use particle_sim::{
    core::{ColliderConfig, EmitterConfig, ForceConfig},
    IntegrationMethod, ParticleSimulator, ParticleType, SimulationConfig, UniformRange, Vector3,
};
use std::io::{stdout, Write};
use std::thread::sleep;
use std::time::{Duration, Instant};
use crossterm::{
    ExecutableCommand, QueueableCommand,
    terminal::{Clear, ClearType, size},
    cursor::{Hide, Show, MoveTo},
    style::{Color, Print, SetForegroundColor, ResetColor},
};

const FRAME_DURATION: Duration = Duration::from_millis(33); // ~30 FPS
const SIMULATION_DURATION: f32 = 15.0; // seconds
const WORLD_HALF_WIDTH: f32 = 20.0;
const WORLD_HEIGHT: f32 = 25.0;
const FLOOR_Y: f32 = -5.0;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = SimulationConfig::new()
        .with_particle_type(ParticleType::new(UniformRange::new(1.0, 1.0), UniformRange::new(1.5, 3.0)))
        .with_particle_type(ParticleType::new(UniformRange::new(3.0, 5.0), UniformRange::new(2.0, 4.0)))
        .with_emitter(EmitterConfig::disk(
            Vector3::new(0.0, FLOOR_Y + 1.0, 0.0),
            Vector3::new(0.1, 1.0, 0.0),
            1.5,
            vec![0, 1],
            80.0,
            600,
            UniformRange::new(10.0, 16.0),
        ))
        .with_force(ForceConfig::Gravity { acceleration: Vector3::new(0.0, -9.81, 0.0) })
        .with_force(ForceConfig::Drag { wind: Vector3::new(2.0, 0.0, 0.0), drag: 0.1 })
        .with_collider(ColliderConfig::Plane {
            position: Vector3::new(0.0, FLOOR_Y, 0.0),
            normal: Vector3::unit_y(),
        })
        .with_method(IntegrationMethod::Rk4);

    let mut simulator = ParticleSimulator::new(&config)?;

    let mut stdout = stdout();
    stdout.execute(Hide)?;
    stdout.execute(Clear(ClearType::All))?;

    let (width, height) = size()?;
    let floor_row = to_screen(Vector3::new(0.0, FLOOR_Y, 0.0), width, height).map(|(_, row)| row);

    let start_time = Instant::now();
    let mut last_update_time = Instant::now();

    while start_time.elapsed().as_secs_f32() < SIMULATION_DURATION {
        let frame_time = Instant::now();
        let dt = last_update_time.elapsed().as_secs_f32();
        last_update_time = Instant::now();

        simulator.update(dt)?;

        stdout.queue(Clear(ClearType::All))?;

        if let Some(row) = floor_row {
            stdout.queue(SetForegroundColor(Color::White))?;
            for x in 0..width {
                stdout.queue(MoveTo(x, row))?.queue(Print("▬"))?;
            }
        }

        // Heavier particles get a bolder glyph
        for particle in simulator.snapshot() {
            if let Some((x, y)) = to_screen(particle.position, width, height) {
                let (glyph, color) = if particle.mass > 2.0 {
                    ('●', Color::Yellow)
                } else {
                    ('·', Color::Cyan)
                };
                stdout
                    .queue(MoveTo(x, y))?
                    .queue(SetForegroundColor(color))?
                    .queue(Print(glyph))?;
            }
        }

        let stats = simulator.last_stats();
        stdout
            .queue(MoveTo(0, 0))?
            .queue(SetForegroundColor(Color::Grey))?
            .queue(Print(format!(
                "particles {:5}  emitted {:3}  expired {:3}  bounces {:3}",
                stats.active, stats.emitted, stats.expired, stats.collisions
            )))?
            .queue(ResetColor)?;

        stdout.flush()?;

        let elapsed = frame_time.elapsed();
        if elapsed < FRAME_DURATION {
            sleep(FRAME_DURATION - elapsed);
        }
    }

    stdout.execute(Show)?;
    stdout.execute(MoveTo(0, height.saturating_sub(1)))?;

    Ok(())
}

/// Projects the x/y plane onto the terminal; y is inverted
fn to_screen(position: Vector3, width: u16, height: u16) -> Option<(u16, u16)> {
    let u = (position.x + WORLD_HALF_WIDTH) / (2.0 * WORLD_HALF_WIDTH);
    let v = (position.y - FLOOR_Y) / WORLD_HEIGHT;
    if !(0.0..1.0).contains(&u) || !(0.0..1.0).contains(&v) {
        return None;
    }
    let x = (u * width as f32) as u16;
    let y = ((1.0 - v) * (height.saturating_sub(1)) as f32) as u16;
    Some((x, y))
}
