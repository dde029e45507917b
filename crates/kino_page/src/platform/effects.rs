use kino_core::{format_preference, Effect};
use kino_logging::{kino_debug, kino_info};
use kino_prefs::{KeyValueStore, PreferenceStore};

use super::ui::dom::DomCommand;

/// Executes core effects: storage writes directly, DOM work as commands.
pub struct EffectRunner<S> {
    store: PreferenceStore<S>,
    preference_key: String,
}

impl<S: KeyValueStore> EffectRunner<S> {
    pub fn new(store: PreferenceStore<S>, preference_key: String) -> Self {
        Self {
            store,
            preference_key,
        }
    }

    pub fn store(&self) -> &PreferenceStore<S> {
        &self.store
    }

    pub fn preference_key(&self) -> &str {
        &self.preference_key
    }

    pub fn run(&mut self, effects: Vec<Effect>) -> Vec<DomCommand> {
        let mut commands = Vec::with_capacity(effects.len());
        for effect in effects {
            match effect {
                Effect::PersistPreference { use_custom_player } => {
                    kino_info!(
                        "Persisting {}={}",
                        self.preference_key,
                        use_custom_player
                    );
                    self.store
                        .set(&self.preference_key, format_preference(use_custom_player));
                }
                Effect::ConfigureVideo {
                    index,
                    native_controls,
                    preload,
                } => commands.push(DomCommand::ConfigureVideo {
                    index,
                    controls: native_controls,
                    preload,
                }),
                Effect::PauseVideo { index } => {
                    kino_debug!("Pausing inline video {}", index);
                    commands.push(DomCommand::PauseVideo { index });
                }
                Effect::CreatePlayer => commands.push(DomCommand::CreatePlayer),
                Effect::PausePlayer => commands.push(DomCommand::PausePlayer),
                Effect::LoadPlayer { src } => {
                    kino_debug!("Loading {} into lightbox", src);
                    commands.push(DomCommand::LoadPlayer { src });
                }
                Effect::PlayPlayer => commands.push(DomCommand::PlayPlayer),
                Effect::RemovePlayer => commands.push(DomCommand::RemovePlayer),
            }
        }
        commands
    }
}
