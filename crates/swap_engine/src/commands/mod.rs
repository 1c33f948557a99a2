//! Host command capability
//!
//! Plain-interface replacement for host operator base classes: each swap
//! direction is a named command a host integration layer can register in
//! its own command/UI table and invoke against the live scene. Command
//! names reuse the upstream operator identifiers so a host binding maps
//! one-to-one.

use std::fmt;

use crate::materials::MaterialRegistry;
use crate::scene::Scene;
use crate::swap::{SwapEngine, SwapMapping, SwapReport};

/// Errors raised by the command table
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// No command with the given name is registered
    #[error("unknown command '{0}'")]
    UnknownCommand(String),
    /// A command with the same name is already registered
    #[error("command '{0}' is already registered")]
    DuplicateCommand(String),
}

/// Borrowed host state a command executes against
pub struct CommandContext<'a> {
    /// The active scene
    pub scene: &'a mut Scene,
    /// The host's material registry
    pub registry: &'a MaterialRegistry,
}

/// A user-invokable swap command
pub trait SwapCommand {
    /// Stable command identifier, unique within a [`CommandTable`]
    fn name(&self) -> &str;

    /// Run the command against the host's current scene
    fn execute(&self, ctx: &mut CommandContext<'_>) -> SwapReport;
}

/// Command switching every mapped object to its render/bake material
pub struct SwapToRenderCommand {
    engine: SwapEngine,
    mapping: SwapMapping,
}

impl SwapToRenderCommand {
    /// Command identifier, matching the upstream operator idname
    pub const NAME: &'static str = "materials.change_to_render_material";

    /// Create the command around an engine and a validated mapping
    pub fn new(engine: SwapEngine, mapping: SwapMapping) -> Self {
        Self { engine, mapping }
    }
}

impl SwapCommand for SwapToRenderCommand {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> SwapReport {
        self.engine
            .swap_to_render_materials(ctx.scene, ctx.registry, &self.mapping)
    }
}

/// Command switching every mapped object to its export material
pub struct SwapToExportCommand {
    engine: SwapEngine,
    mapping: SwapMapping,
}

impl SwapToExportCommand {
    /// Command identifier, matching the upstream operator idname
    pub const NAME: &'static str = "materials.change_to_export_material";

    /// Create the command around an engine and a validated mapping
    pub fn new(engine: SwapEngine, mapping: SwapMapping) -> Self {
        Self { engine, mapping }
    }
}

impl SwapCommand for SwapToExportCommand {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> SwapReport {
        self.engine
            .swap_to_export_materials(ctx.scene, ctx.registry, &self.mapping)
    }
}

/// Registration-ordered table of swap commands
///
/// The seam the host integration layer drives: it registers commands on
/// plugin load, executes them from its UI, and unregisters on unload.
#[derive(Default)]
pub struct CommandTable {
    commands: Vec<Box<dyn SwapCommand>>,
}

impl CommandTable {
    /// Create an empty command table
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a command under its own name
    ///
    /// # Errors
    /// Returns [`CommandError::DuplicateCommand`] if the name is taken.
    pub fn register(&mut self, command: Box<dyn SwapCommand>) -> Result<(), CommandError> {
        if self.find(command.name()).is_some() {
            return Err(CommandError::DuplicateCommand(command.name().to_string()));
        }
        log::debug!("Registered command '{}'", command.name());
        self.commands.push(command);
        Ok(())
    }

    /// Remove a command by name, returning it if present
    pub fn unregister(&mut self, name: &str) -> Option<Box<dyn SwapCommand>> {
        let index = self.find(name)?;
        log::debug!("Unregistered command '{}'", name);
        Some(self.commands.remove(index))
    }

    /// Execute a registered command against the given context
    ///
    /// # Errors
    /// Returns [`CommandError::UnknownCommand`] if no command carries the
    /// given name.
    pub fn execute(
        &self,
        name: &str,
        ctx: &mut CommandContext<'_>,
    ) -> Result<SwapReport, CommandError> {
        let index = self
            .find(name)
            .ok_or_else(|| CommandError::UnknownCommand(name.to_string()))?;
        Ok(self.commands[index].execute(ctx))
    }

    /// Registered command names, in registration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().map(|command| command.name())
    }

    /// Number of registered commands
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Check whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    fn find(&self, name: &str) -> Option<usize> {
        self.commands.iter().position(|command| command.name() == name)
    }
}

impl fmt::Debug for CommandTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}
