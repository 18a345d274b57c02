use bevy::math::primitives::Circle;
use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::window::PrimaryWindow;
use log::{error, info};

use crate::simulation::engine::step;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::Bounds;

#[derive(Component)]
struct BallIndex(pub usize);

pub fn run_2d(scenario: Scenario) {
    info!(
        "run_2d: starting Bevy 2D viewer with {} balls",
        scenario.system.balls.len()
    );

    App::new()
        .insert_resource(scenario)
        .add_plugins(DefaultPlugins)
        .add_systems(Startup, setup_balls_system)
        .add_systems(Update, (physics_step_system, sync_transforms_system).chain())
        .run();
}

fn setup_balls_system(
    mut commands: Commands,
    scenario: Res<Scenario>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    // 2D camera
    commands.spawn(Camera2dBundle::default());

    let n = scenario.system.balls.len().max(1);
    for (i, ball) in scenario.system.balls.iter().enumerate() {
        // Colors live here, never on the ball itself
        let color = Color::hsl(360.0 * i as f32 / n as f32, 0.8, 0.6);
        let (sx, sy) = to_screen(ball.x.x, ball.x.y, &scenario.bounds);

        commands.spawn((
            MaterialMesh2dBundle {
                mesh: Mesh2dHandle(meshes.add(Circle::new(ball.radius as f32))),
                material: materials.add(ColorMaterial::from(color)),
                transform: Transform::from_xyz(sx, sy, 0.0),
                ..Default::default()
            },
            BallIndex(i),
        ));
    }
}

fn physics_step_system(
    mut scenario: ResMut<Scenario>,
    windows: Query<&Window, With<PrimaryWindow>>,
) {
    // Split &mut Scenario into &mut fields in one destructuring step
    let Scenario {
        system,
        parameters,
        bounds,
    } = &mut *scenario;

    // The window is the live bounds provider: resizing it resizes the arena
    // for the next tick.
    if let Ok(window) = windows.get_single() {
        *bounds = Bounds {
            left: 0.0,
            top: 0.0,
            right: window.width() as f64,
            bottom: window.height() as f64,
        };
    }

    if let Err(e) = step(system, parameters.h0, bounds, parameters) {
        error!("physics step failed: {e}");
    }
}

fn sync_transforms_system(scenario: Res<Scenario>, mut query: Query<(&BallIndex, &mut Transform)>) {
    for (BallIndex(i), mut transform) in &mut query {
        if let Some(b) = scenario.system.balls.get(*i) {
            let (sx, sy) = to_screen(b.x.x, b.x.y, &scenario.bounds);
            transform.translation.x = sx;
            transform.translation.y = sy;
        }
    }
}

// Simulation y grows downward; the 2D camera's y grows upward and sits on
// the arena center.
fn to_screen(x: f64, y: f64, bounds: &Bounds) -> (f32, f32) {
    let cx = (bounds.left + bounds.right) * 0.5;
    let cy = (bounds.top + bounds.bottom) * 0.5;
    ((x - cx) as f32, (cy - y) as f32)
}
