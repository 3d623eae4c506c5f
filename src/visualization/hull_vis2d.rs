//! Bevy 2D viewer and interactive driver
//!
//! Thin adapter around the simulation core: a physics system feeds the frame
//! delta into `Scenario::step` every update (the animation-frame loop), and
//! the remaining systems only read state: hull rectangle, waterline, CG/CB
//! and load markers, force arrows, and a small HUD.
//!
//! Keys: Left/Right move the load, `W` toggles waves, `R` resets.

use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::math::primitives::{Circle, Rectangle};
use log::{info, warn};

use crate::simulation::scenario::Scenario;
use crate::simulation::states::NVec2;

/// World-space (cm) -> screen-space scaling factor
const SCALE: f32 = 2.0;

/// Load traverse speed while an arrow key is held, cm/s
const LOAD_SPEED: f64 = 40.0;

/// Force-arrow length in screen units
const ARROW_LEN: f32 = 50.0;

#[derive(Component)]
struct HullPivot;

#[derive(Component)]
enum MarkerKind {
    Cg,
    Cb,
    Load,
}

#[derive(Component)]
struct HudText;

pub fn run_2d(scenario: Scenario) {
    println!(
        "run_2d: starting Bevy 2D viewer, hull {}x{} cm",
        scenario.parameters.hull_width, scenario.parameters.hull_height
    );

    App::new()
        .insert_resource(scenario)
        .add_plugins(DefaultPlugins)
        .add_systems(Startup, setup_scene_system)
        .add_systems(
            Update,
            (
                input_system,
                physics_step_system,
                sync_transforms_system,
                hud_system,
                gizmos_system,
            )
                .chain(),
        )
        .run();
}

fn setup_scene_system(
    mut commands: Commands,
    scenario: Res<Scenario>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    // 2D camera
    commands.spawn(Camera2dBundle::default());

    let w = scenario.parameters.hull_width as f32 * SCALE;
    let h = scenario.parameters.hull_height as f32 * SCALE;

    // Pivot at the hull's bottom-center; everything hull-fixed is a child
    // so a single rotation tilts the whole assembly
    commands
        .spawn((SpatialBundle::default(), HullPivot))
        .with_children(|parent| {
            // Hull rectangle, bottom edge on the pivot
            parent.spawn(MaterialMesh2dBundle {
                mesh: Mesh2dHandle(meshes.add(Rectangle::new(w, h))),
                material: materials.add(ColorMaterial::from(Color::srgb(0.40, 0.26, 0.13))),
                transform: Transform::from_xyz(0.0, h / 2.0, 1.0),
                ..Default::default()
            });

            // CG marker (red), CB marker (green), load marker (blue);
            // positions are synced from the derived geometry each frame
            for (kind, color) in [
                (MarkerKind::Cg, Color::srgb(1.0, 0.0, 0.0)),
                (MarkerKind::Cb, Color::srgb(0.0, 0.67, 0.0)),
                (MarkerKind::Load, Color::srgb(0.0, 0.0, 1.0)),
            ] {
                parent.spawn((
                    MaterialMesh2dBundle {
                        mesh: Mesh2dHandle(meshes.add(Circle::new(5.0))),
                        material: materials.add(ColorMaterial::from(color)),
                        transform: Transform::from_xyz(0.0, 0.0, 2.0),
                        ..Default::default()
                    },
                    kind,
                ));
            }
        });

    commands.spawn((
        TextBundle::from_section(
            "",
            TextStyle {
                font_size: 18.0,
                color: Color::WHITE,
                ..Default::default()
            },
        )
        .with_style(Style {
            position_type: PositionType::Absolute,
            top: Val::Px(8.0),
            left: Val::Px(8.0),
            ..Default::default()
        }),
        HudText,
    ));
}

/// Keyboard input standing in for sliders and buttons
fn input_system(
    mut scenario: ResMut<Scenario>,
    keys: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
) {
    let dt = time.delta_seconds() as f64;
    let half_width = scenario.parameters.hull_width / 2.0;

    let mut offset = scenario.load.offset;
    if keys.pressed(KeyCode::ArrowLeft) {
        offset -= LOAD_SPEED * dt;
    }
    if keys.pressed(KeyCode::ArrowRight) {
        offset += LOAD_SPEED * dt;
    }
    if offset != scenario.load.offset {
        // keep the load on the hull
        let clamped = offset.clamp(-half_width, half_width);
        if let Err(e) = scenario.set_load_offset(clamped) {
            warn!("load offset rejected: {}", e);
        }
    }

    if keys.just_pressed(KeyCode::KeyW) {
        scenario.engine.waves_enabled = !scenario.engine.waves_enabled;
        info!("waves {}", if scenario.engine.waves_enabled { "on" } else { "off" });
    }

    if keys.just_pressed(KeyCode::KeyR) {
        scenario.reset();
        info!("simulation reset");
    }
}

/// Feed the frame delta into the integrator; this is the whole driver
fn physics_step_system(
    mut scenario: ResMut<Scenario>,
    time: Res<Time>,
    mut was_capsized: Local<bool>,
) {
    let dt = time.delta_seconds() as f64;
    match scenario.step(dt) {
        Ok(snapshot) => {
            if snapshot.body.capsized && !*was_capsized {
                info!(
                    "capsized at t = {:.2} s, angle = {:.1} deg",
                    snapshot.body.t,
                    snapshot.body.angle.to_degrees()
                );
            }
            *was_capsized = snapshot.body.capsized;
        }
        Err(e) => warn!("step skipped: {}", e),
    }
}

fn sync_transforms_system(
    scenario: Res<Scenario>,
    mut pivot: Query<&mut Transform, (With<HullPivot>, Without<MarkerKind>)>,
    mut markers: Query<(&MarkerKind, &mut Transform)>,
) {
    let geometry = scenario.derived_geometry();

    // Screen y is up, hull-local y is down; flip the rotation sign so a
    // positive tilt leans to the right on screen
    let rot = -(scenario.display_angle() as f32);
    let draft = geometry.submerged_depth as f32 * SCALE;

    for mut transform in &mut pivot {
        transform.rotation = Quat::from_rotation_z(rot);
        transform.translation.y = -draft;
    }

    for (kind, mut transform) in &mut markers {
        let local = match kind {
            MarkerKind::Cg => &geometry.combined_cg,
            MarkerKind::Cb => &geometry.center_of_buoyancy,
            MarkerKind::Load => &geometry.load_cg,
        };
        transform.translation.x = local.x as f32 * SCALE;
        transform.translation.y = -(local.y as f32) * SCALE;
    }
}

fn hud_system(scenario: Res<Scenario>, mut query: Query<&mut Text, With<HudText>>) {
    let body = scenario.body_state();
    let geometry = scenario.derived_geometry();
    for mut text in &mut query {
        text.sections[0].value = format!(
            "angle: {:.1} deg\ncapsized: {}\nload offset: {:.0} cm\ndraft: {:.1} cm\nwaves: {}\n[arrows] load  [W] waves  [R] reset",
            body.angle.to_degrees(),
            if body.capsized { "yes" } else { "no" },
            scenario.load.offset,
            geometry.submerged_depth,
            if scenario.engine.waves_enabled { "on" } else { "off" },
        );
    }
}

/// Waterline and force arrows, drawn in world space every frame
fn gizmos_system(scenario: Res<Scenario>, mut gizmos: Gizmos) {
    let geometry = scenario.derived_geometry();
    let rot = -(scenario.display_angle() as f32);
    let pivot_y = -(geometry.submerged_depth as f32) * SCALE;

    // Waterline stays horizontal; the hull rotates, not the water
    gizmos.line_2d(
        Vec2::new(-2000.0, 0.0),
        Vec2::new(2000.0, 0.0),
        Color::srgb(0.0, 0.0, 1.0),
    );

    let cg = to_screen(&geometry.combined_cg, rot, pivot_y);
    let cb = to_screen(&geometry.center_of_buoyancy, rot, pivot_y);

    // Weight pulls down through the CG, buoyancy pushes up through the CB
    draw_arrow(&mut gizmos, cg, cg + Vec2::NEG_Y * ARROW_LEN, Color::srgb(1.0, 0.0, 0.0));
    draw_arrow(&mut gizmos, cb, cb + Vec2::Y * ARROW_LEN, Color::srgb(0.0, 0.67, 0.0));
}

/// Hull-local point -> screen space under the current tilt
fn to_screen(point: &NVec2, rot: f32, pivot_y: f32) -> Vec2 {
    let local = Vec2::new(point.x as f32, -point.y as f32) * SCALE;
    Vec2::from_angle(rot).rotate(local) + Vec2::new(0.0, pivot_y)
}

fn draw_arrow(gizmos: &mut Gizmos, from: Vec2, to: Vec2, color: Color) {
    gizmos.line_2d(from, to, color);

    // small V at the tip
    let dir = (to - from).normalize_or_zero();
    let side = dir.perp() * 5.0;
    let back = to - dir * 10.0;
    gizmos.line_2d(back + side, to, color);
    gizmos.line_2d(back - side, to, color);
}
