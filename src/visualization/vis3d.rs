use bevy::math::primitives::Cuboid;
use bevy::prelude::*;
use rand::Rng;

use crate::simulation::motion::drift_step;
use crate::simulation::report::distance_block;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::NVec3;
use crate::visualization::camera::{orbit_input_system, orbit_update_system, OrbitCamera};

/// Component tagging each cuboid with its cube index into Scenario.system.cubes
#[derive(Component)]
struct CubeIndex(pub usize);

/// Component tagging each connector with its link index into Scenario.links
#[derive(Component)]
struct LinkIndex(pub usize);

/// Marker for the distance report text node
#[derive(Component)]
struct DistanceReadout;

/// Convenience entrypoint: hand a built scenario to the Bevy viewer
pub fn run_viewer(scenario: Scenario) {
    println!(
        "run_viewer: starting Bevy viewer with {} cubes and {} links",
        scenario.system.cubes.len(),
        scenario.links.len()
    );

    let orbit = OrbitCamera::new(
        scenario.view.camera_distance,
        scenario.view.damping,
        scenario.view.far,
    );

    App::new()
        .insert_resource(scenario)
        .insert_resource(orbit)
        .add_plugins(DefaultPlugins)
        .add_systems(Startup, setup_scene)
        .add_systems(
            Update,
            (
                drift_system,
                sync_cube_transforms,
                sync_link_transforms,
                report_system,
                orbit_input_system,
                orbit_update_system,
            )
                .chain(),
        )
        .run();
}

/// Simulation positions are f64; Bevy wants f32 world coordinates
fn to_render(x: &NVec3) -> Vec3 {
    Vec3::new(x.x as f32, x.y as f32, x.z as f32)
}

/// Place a unit-length connector cuboid between two endpoints: midpoint
/// translation, rotation from +X onto the segment, length via x-scale
fn link_transform(a: Vec3, b: Vec3) -> Transform {
    let delta = b - a;
    let len = delta.length();
    let rotation = if len > 1e-6 {
        Quat::from_rotation_arc(Vec3::X, delta / len)
    } else {
        Quat::IDENTITY
    };
    Transform {
        translation: (a + b) * 0.5,
        rotation,
        scale: Vec3::new(len.max(1e-6), 1.0, 1.0),
    }
}

/// Startup system: spawn camera, axes, one cuboid per cube, one connector
/// per link, and the distance readout overlay
fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    scenario: Res<Scenario>,
) {
    let view = &scenario.view;

    // Perspective camera on the +Z axis looking at the origin
    commands.spawn(Camera3dBundle {
        camera: Camera {
            clear_color: ClearColorConfig::Custom(Color::srgb(0.0, 0.0, 0.0)),
            ..Default::default()
        },
        projection: PerspectiveProjection {
            fov: view.fov_deg.to_radians(),
            near: view.near,
            far: view.far,
            ..Default::default()
        }
        .into(),
        transform: Transform::from_xyz(0.0, 0.0, view.camera_distance)
            .looking_at(Vec3::ZERO, Vec3::Y),
        ..Default::default()
    });

    // =====================================================================
    // AXES: three thin boxes along X, Y, Z
    spawn_axes(&mut commands, &mut meshes, &mut materials, view.axis_length);
    // =====================================================================

    // Spawn one cuboid per cube, each with a random base color. Colors are
    // cosmetic only and deliberately outside the seeded simulation RNG
    let mut rng = rand::thread_rng();
    let cube_mesh = meshes.add(Cuboid::new(view.cube_size, view.cube_size, view.cube_size).mesh());

    for (i, cube) in scenario.system.cubes.iter().enumerate() {
        commands.spawn((
            PbrBundle {
                mesh: cube_mesh.clone(),
                material: materials.add(StandardMaterial {
                    base_color: Color::srgb(
                        rng.gen_range(0.1..1.0),
                        rng.gen_range(0.1..1.0),
                        rng.gen_range(0.1..1.0),
                    ),
                    unlit: true,
                    ..Default::default()
                }),
                transform: Transform::from_translation(to_render(&cube.x)),
                ..Default::default()
            },
            CubeIndex(i),
        ));
    }

    // One red connector per link; the sync system stretches a shared
    // unit-length mesh between the live endpoints every frame
    let link_mesh = meshes.add(Cuboid::new(1.0, view.line_thickness, view.line_thickness).mesh());
    let link_material = materials.add(StandardMaterial {
        base_color: Color::srgb(1.0, 0.0, 0.0),
        unlit: true,
        ..Default::default()
    });

    for (k, link) in scenario.links.links.iter().enumerate() {
        let a = to_render(&scenario.system.cubes[link.a].x);
        let b = to_render(&scenario.system.cubes[link.b].x);
        commands.spawn((
            PbrBundle {
                mesh: link_mesh.clone(),
                material: link_material.clone(),
                transform: link_transform(a, b),
                ..Default::default()
            },
            LinkIndex(k),
        ));
    }

    // Distance readout overlay, fully replaced each report cycle
    commands.spawn((
        TextBundle::from_section(
            "",
            TextStyle {
                font_size: 14.0,
                color: Color::WHITE,
                ..Default::default()
            },
        )
        .with_style(Style {
            position_type: PositionType::Absolute,
            top: Val::Px(12.0),
            left: Val::Px(12.0),
            ..Default::default()
        }),
        DistanceReadout,
    ));

    info!(
        "scene ready: {} cubes, {} links, bound ±{}",
        scenario.system.cubes.len(),
        scenario.links.len(),
        scenario.parameters.bound
    );
}

/// Per-frame drift + boundary reflection
fn drift_system(mut scenario: ResMut<Scenario>) {
    // Split &mut Scenario into &mut fields in one destructuring step
    let Scenario {
        system, parameters, ..
    } = &mut *scenario;

    drift_step(system, parameters);
}

/// Copy simulation positions onto the cuboid transforms
fn sync_cube_transforms(
    scenario: Res<Scenario>,
    mut query: Query<(&CubeIndex, &mut Transform)>,
) {
    for (CubeIndex(i), mut transform) in &mut query {
        if let Some(cube) = scenario.system.cubes.get(*i) {
            transform.translation = to_render(&cube.x);
        }
    }
}

/// Re-stretch every connector between its cubes' current positions
fn sync_link_transforms(
    scenario: Res<Scenario>,
    mut query: Query<(&LinkIndex, &mut Transform), Without<CubeIndex>>,
) {
    for (LinkIndex(k), mut transform) in &mut query {
        if let Some(link) = scenario.links.links.get(*k) {
            let a = to_render(&scenario.system.cubes[link.a].x);
            let b = to_render(&scenario.system.cubes[link.b].x);
            *transform = link_transform(a, b);
        }
    }
}

/// Once per interval, rewrite the readout with the full distance table
fn report_system(
    time: Res<Time>,
    mut scenario: ResMut<Scenario>,
    mut query: Query<&mut Text, With<DistanceReadout>>,
) {
    let now_ms = time.elapsed_seconds_f64() * 1000.0;

    let Scenario {
        system,
        links,
        clock,
        ..
    } = &mut *scenario;

    if clock.fire(now_ms) {
        let block = distance_block(system, links);
        debug!("distance report at {:.0} ms ({} lines)", now_ms, links.len());
        for mut text in &mut query {
            text.sections[0].value = block.clone();
        }
    }
}

// =========================================================================================
// Axes for visual reference
// =========================================================================================

fn spawn_axes(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    half_length: f32,
) {
    let axis_len = 2.0 * half_length;
    let axis_thickness = 0.02;

    // X axis: red, along +X/-X
    commands.spawn(PbrBundle {
        mesh: meshes.add(Cuboid::new(axis_len, axis_thickness, axis_thickness).mesh()),
        material: materials.add(StandardMaterial {
            base_color: Color::srgb(1.0, 0.0, 0.0),
            unlit: true,
            ..Default::default()
        }),
        // Cuboid is centered at its transform origin, so this puts it crossing the world origin
        transform: Transform::from_xyz(0.0, 0.0, 0.0),
        ..Default::default()
    });

    // Y axis: green, along +Y/-Y
    commands.spawn(PbrBundle {
        mesh: meshes.add(Cuboid::new(axis_thickness, axis_len, axis_thickness).mesh()),
        material: materials.add(StandardMaterial {
            base_color: Color::srgb(0.0, 1.0, 0.0),
            unlit: true,
            ..Default::default()
        }),
        transform: Transform::from_xyz(0.0, 0.0, 0.0),
        ..Default::default()
    });

    // Z axis: blue, along +Z/-Z
    commands.spawn(PbrBundle {
        mesh: meshes.add(Cuboid::new(axis_thickness, axis_thickness, axis_len).mesh()),
        material: materials.add(StandardMaterial {
            base_color: Color::srgb(0.0, 0.0, 1.0),
            unlit: true,
            ..Default::default()
        }),
        transform: Transform::from_xyz(0.0, 0.0, 0.0),
        ..Default::default()
    });
}
