//! Studio demo application
//!
//! Plays the role of the host: owns a small scene and material registry,
//! registers the two swap commands in a command table, and runs them
//! back-to-back, surfacing each report the way a host notification area
//! would. Pass a path to a `.toml` or `.ron` mapping file to override the
//! built-in red/blue + green/yellow example mapping.

use swap_engine::prelude::*;

/// The demo host: scene, registry, and the registered command table
pub struct StudioApp {
    scene: Scene,
    registry: MaterialRegistry,
    commands: CommandTable,
}

impl StudioApp {
    /// Build the host state from a mapping configuration
    pub fn new(config: &MappingConfig) -> Result<Self, Box<dyn std::error::Error>> {
        log::info!("Setting up studio scene...");

        let mut registry = MaterialRegistry::new();
        let mut scene = Scene::new();

        // Register both sides of every pair so every swap target resolves,
        // and put a few objects on the render side of each pair.
        for (index, entry) in config.entries.iter().enumerate() {
            let render = registry.register(
                Material::new(entry.render.clone()).with_base_color(0.8, 0.3, 0.2),
            )?;
            registry.register(
                Material::new(entry.export.clone()).with_base_color(0.2, 0.3, 0.8),
            )?;

            scene.add_object_with_slots(format!("mesh_{}a", index), vec![render]);
            scene.add_object_with_slots(format!("mesh_{}b", index), vec![render]);
        }
        scene.add_object("camera");
        scene.add_object("key_light");

        let mapping = config.mapping()?;
        let engine = SwapEngine::with_config(config.swap_config());

        let mut commands = CommandTable::new();
        commands.register(Box::new(SwapToRenderCommand::new(engine.clone(), mapping.clone())))?;
        commands.register(Box::new(SwapToExportCommand::new(engine, mapping)))?;

        log::info!(
            "Scene ready: {} objects, {} materials, {} commands",
            scene.object_count(),
            registry.material_count(),
            commands.len()
        );

        Ok(Self {
            scene,
            registry,
            commands,
        })
    }

    /// Execute one registered command and surface its report
    pub fn run_command(&mut self, name: &str) -> Result<(), Box<dyn std::error::Error>> {
        log::info!("Executing '{}'", name);

        let mut ctx = CommandContext {
            scene: &mut self.scene,
            registry: &self.registry,
        };
        let report = self.commands.execute(name, &mut ctx)?;

        for entry in report.entries() {
            match entry.outcome.severity() {
                Severity::Info => log::info!("  {}", entry),
                Severity::Warning => log::warn!("  {}", entry),
                Severity::Error => log::error!("  {}", entry),
            }
        }
        log::info!("  {} objects reassigned in total", report.assigned_total());

        Ok(())
    }
}

fn load_config() -> Result<MappingConfig, Box<dyn std::error::Error>> {
    if let Some(path) = std::env::args().nth(1) {
        log::info!("Loading mapping config from {}", path);
        return Ok(MappingConfig::load_from_file(path)?);
    }

    // Built-in example mapping.
    Ok(MappingConfig {
        match_mode: MatchMode::PrimarySlot,
        entries: vec![
            MappingEntry::new("red_mat", "blue_mat"),
            MappingEntry::new("green_mat", "yellow_mat"),
        ],
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    swap_engine::foundation::logging::init();

    let config = load_config()?;
    let mut app = StudioApp::new(&config)?;

    // Switch everything to export materials, then back: the second command
    // restores the original assignments, and running it twice in a row
    // would only produce warnings.
    app.run_command(SwapToExportCommand::NAME)?;
    app.run_command(SwapToRenderCommand::NAME)?;

    Ok(())
}
