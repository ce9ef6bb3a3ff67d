pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{Cube, System, NVec2, NVec3};
pub use simulation::params::Parameters;
pub use simulation::motion::drift_step;
pub use simulation::links::{Link, LinkSet};
pub use simulation::report::{ReportClock, distance_block};
pub use simulation::scenario::{Scenario, View};

pub use configuration::config::{SceneConfig, ParametersConfig, ViewConfig};

pub use visualization::camera::OrbitCamera;
pub use visualization::vis3d::run_viewer;

pub use benchmark::benchmark::bench_tick;
