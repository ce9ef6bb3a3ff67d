use cubelink::{bench_tick, run_viewer, SceneConfig, Scenario};

use anyhow::Result;
use clap::Parser;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short, default_value = "cubes.yaml")]
    file_name: String,

    /// Run the headless tick benchmark instead of the viewer
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scene_from_yaml(file_name: &str) -> Result<SceneConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenes")
        .join(file_name);
    let file = File::open(&config_path)?;
    let reader = BufReader::new(file);
    let scene_cfg: SceneConfig = serde_yaml::from_reader(reader)?;

    Ok(scene_cfg)
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.bench {
        bench_tick();
        return Ok(());
    }

    let scene_cfg = load_scene_from_yaml(&args.file_name)?;
    let scenario = Scenario::build_scenario(scene_cfg);
    run_viewer(scenario);

    Ok(())
}
