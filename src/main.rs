use std::path::PathBuf;

use anyhow::Result;

fn main() -> Result<()> {
    env_logger::init();

    let scene_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| roomflow::resources::asset_path("scene.json"));

    roomflow::app::run(scene_path)
}
