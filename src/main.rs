//! Headless sandbox driver.
//!
//! Builds a small world (two scaled ground slabs cooked from a quad, a
//! procedural terrain patch, one capsule character) and walks the character
//! at a fixed 60 Hz simulation rate while the outer loop runs as fast as it
//! likes, printing the character position as it goes.

use std::error::Error;
use std::thread;
use std::time::Duration;

use glam::{Quat, Vec3};
use playfield_core::{FixedRateClock, Heightmap, SimulationConfig};
use playfield_physics::PhysicsEngine;

/// Gentle rolling hills, normalized to [0, 1].
fn rolling_heightmap(size: u32) -> Result<Heightmap, Box<dyn Error>> {
    let mut samples = Vec::with_capacity((size * size) as usize);
    for y in 0..size {
        for x in 0..size {
            let u = x as f32 / (size - 1) as f32;
            let v = y as f32 / (size - 1) as f32;
            let height = 0.5
                + 0.25 * (u * std::f32::consts::TAU).sin()
                + 0.25 * (v * std::f32::consts::TAU).cos();
            samples.push(height.clamp(0.0, 1.0));
        }
    }
    Ok(Heightmap::new(size, size, samples)?)
}

fn main() -> Result<(), Box<dyn Error>> {
    let mut engine = PhysicsEngine::new(SimulationConfig::default())?;

    let character = engine.create_character_controller(Vec3::ZERO, 125.0, 20.0)?;

    let vertices = vec![
        Vec3::new(-1.0, 0.0, -1.0),
        Vec3::new(-1.0, 0.0, 1.0),
        Vec3::new(1.0, 0.0, -1.0),
        Vec3::new(1.0, 0.0, 1.0),
    ];
    let indices: Vec<u32> = vec![3, 2, 0, 3, 0, 1];
    let mesh = engine.create_triangle_mesh(&vertices, &indices)?;

    engine.create_static_actor(
        mesh,
        Vec3::new(0.0, -250.0, 0.0),
        Quat::IDENTITY,
        Vec3::new(500.0, 1.0, 500.0),
    )?;
    engine.create_static_actor(
        mesh,
        Vec3::new(100.0, -400.0, 0.0),
        Quat::IDENTITY,
        Vec3::new(800.0, 1.0, 800.0),
    )?;

    let heightmap = rolling_heightmap(64)?;
    engine.create_terrain(
        Vec3::new(500.0, -400.0, -500.0),
        Vec3::new(1000.0, 1.0, 1000.0),
        &heightmap,
        0.0,
        80.0,
    )?;

    let mut clock = FixedRateClock::new();
    let mut steps = 0u32;
    while steps < 600 {
        let stepped = engine.tick(&mut clock, 60.0, |engine, elapsed| {
            let _flags = engine.move_character(character, Vec3::new(7.0, 0.0, 0.0), elapsed, true);
        });

        if stepped {
            steps += 1;
            if steps % 30 == 0 {
                let position = engine.controller_position(character)?;
                println!(
                    "step {steps:3}: character at {:8.1} {:8.1} {:8.1}",
                    position.x, position.y, position.z
                );
            }
        }

        // Rendering would go here.
        thread::sleep(Duration::from_millis(1));
    }

    Ok(())
}
