use crate::cli::display::{format_error, format_status};
use crate::cli::validation::parse_move_script;
use crate::game::GameFactory;
use crate::session::{AddMoveFromNetworkUseCase, GameError, GameId, GameStatus, InitNewGameUseCase};
use crate::storage::{
    ChannelListener, GameNetworkListener, GameRepository, InMemoryGameRepository,
    InMemoryListenerRegistry, ListenerRegistry,
};
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing::{debug, info, warn};

/// Environment variable that overrides the configuration directory
pub const CONFIG_DIR_ENV: &str = "TICTAC_CONFIG_DIR";

/// How statuses and errors are printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Filter directive for the log subscriber, `RUST_LOG` takes precedence
    pub log_filter: String,
    /// Output format for statuses
    pub output: OutputFormat,
    /// Draw the board under each text status
    pub show_board: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: "info".to_string(),
            output: OutputFormat::Text,
            show_board: true,
        }
    }
}

impl Config {
    /// Get the default config directory
    pub fn default_config_dir() -> Result<PathBuf> {
        if let Ok(custom_dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(custom_dir));
        }

        ProjectDirs::from("dev", "tictac", "tictac")
            .map(|proj_dirs| proj_dirs.config_dir().to_path_buf())
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
    }

    /// Get the default config file path
    pub fn default_config_file() -> Result<PathBuf> {
        Ok(Self::default_config_dir()?.join("config.toml"))
    }

    /// Load configuration from file, creating default if it doesn't exist
    pub fn load_or_create_default() -> Result<Self> {
        let config_file = Self::default_config_file()?;

        if config_file.exists() {
            Self::load_from(&config_file)
        } else {
            let config = Config::default();
            config.save_to(&config_file)?;
            Ok(config)
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
        toml::from_str(&content).context("Failed to parse configuration file")
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure config directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        std::fs::write(path, content).context("Failed to write configuration file")?;

        Ok(())
    }
}

/// Counts from one `play` run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaySummary {
    pub game_id: GameId,
    /// Statuses pushed to the listener, in order
    pub pushed: Vec<GameStatus>,
    pub rejected: Vec<GameError>,
    pub final_status: GameStatus,
}

/// Main application state
pub struct App {
    pub config: Config,
    repository: Arc<InMemoryGameRepository>,
    registry: Arc<InMemoryListenerRegistry>,
    init_game: InitNewGameUseCase,
    add_move: AddMoveFromNetworkUseCase,
}

impl App {
    /// Create a new App from the configuration on disk
    pub fn new() -> Result<Self> {
        let config =
            Config::load_or_create_default().context("Failed to initialize configuration")?;
        Ok(Self::with_config(config))
    }

    /// Create an App with fresh in-memory stores
    pub fn with_config(config: Config) -> Self {
        let repository = Arc::new(InMemoryGameRepository::new());
        let registry = Arc::new(InMemoryListenerRegistry::new());

        let init_game = InitNewGameUseCase::new(repository.clone(), GameFactory::new());
        let add_move = AddMoveFromNetworkUseCase::new(repository.clone(), registry.clone());

        Self {
            config,
            repository,
            registry,
            init_game,
            add_move,
        }
    }

    pub fn repository(&self) -> &InMemoryGameRepository {
        &self.repository
    }

    fn create_game(&self) -> Result<GameStatus> {
        let ready = Mutex::new(None);
        self.init_game.execute(&|status: GameStatus| {
            *ready.lock().unwrap_or_else(|e| e.into_inner()) = Some(status);
        });

        let status = ready
            .into_inner()
            .unwrap_or_else(|e| e.into_inner())
            .context("New game was not delivered")?;
        debug!(
            "Game {} created, {} game(s) stored: {:?}",
            status.id(),
            self.repository.len(),
            self.repository.ids()
        );
        Ok(status)
    }

    /// Handle the 'new' command
    pub fn handle_new(&self) -> Result<GameStatus> {
        let status = self.create_game()?;
        println!(
            "{}",
            format_status(&status, self.config.output, self.config.show_board)?
        );
        Ok(status)
    }

    /// Handle the 'play' command: feed the moves through the network path of a new game
    pub async fn handle_play(&self, moves: &[String], json: bool) -> Result<PlaySummary> {
        let moves = parse_move_script(moves).context("Invalid move script")?;
        let output = if json {
            OutputFormat::Json
        } else {
            self.config.output
        };
        let show_board = self.config.show_board;

        let status = self.create_game()?;
        let game_id = status.id();
        info!("Replaying {} move(s) on game {}", moves.len(), game_id);

        let (listener, mut receiver) = ChannelListener::new();
        let listener: Arc<dyn GameNetworkListener> = Arc::new(listener);
        self.registry.register(game_id, Arc::clone(&listener));

        let printer = tokio::spawn(async move {
            let mut pushed = Vec::new();
            while let Some(status) = receiver.recv().await {
                match format_status(&status, output, show_board) {
                    Ok(line) => println!("{}", line),
                    Err(e) => warn!("Failed to print status: {}", e),
                }
                pushed.push(status);
            }
            pushed
        });

        let rejected = Mutex::new(Vec::new());
        for mv in moves {
            debug!("Applying {}", mv);
            self.add_move.execute(mv, game_id, &|error: GameError| {
                match format_error(&error, output) {
                    Ok(line) => eprintln!("{}", line),
                    Err(e) => warn!("Failed to print error: {}", e),
                }
                rejected
                    .lock()
                    .unwrap_or_else(|e| e.into_inner())
                    .push(error);
            });
        }

        // Closing the channel lets the printer finish
        self.registry.unregister(game_id, &listener);
        drop(listener);
        let pushed = printer.await.context("Status printer task failed")?;

        let final_status = self
            .repository
            .get_game(game_id)
            .context("Game vanished from the repository")?
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .make_status(game_id);

        Ok(PlaySummary {
            game_id,
            pushed,
            rejected: rejected.into_inner().unwrap_or_else(|e| e.into_inner()),
            final_status,
        })
    }

    /// Handle the 'config' command
    pub fn handle_config(&self) -> Result<()> {
        let path = Config::default_config_file()?;
        println!("Configuration file: {}", path.display());
        print!(
            "{}",
            toml::to_string_pretty(&self.config).context("Failed to serialize configuration")?
        );
        Ok(())
    }
}
