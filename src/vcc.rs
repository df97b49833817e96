use log::{debug, error, info, warn};
use rand::rngs::StdRng;
use rand::Rng;
use vcc_model::{
    Mood, Outcome, ResourceError, ResponseTable, EMPTY_PHRASE, NO_MOOD_SELECTED,
    TRANSLATION_FAILED,
};
use vibe_engine::{Detection, VibeEngine, VibePipeline};

use crate::utils::join;
use config::Config;
use responder::Responder;
use ui_state::{Notification, UiCommand, UiState, UiUpdate};

pub mod config;
pub mod responder;
pub mod store;
pub mod ui_state;

/// Application state, owned by the UI event loop.
///
/// Holds the read-only response table and the single output slot that
/// translate and reroll overwrite.
pub struct Vcc<R = StdRng> {
    table: ResponseTable,
    responder: Responder<R>,
    pipeline: VibePipeline,
    output: String,
    status: Option<String>,
    pending_updates: Vec<UiUpdate>,
}

impl Vcc<StdRng> {
    /// Loads every resource named by the config. Load failures are reported
    /// through [`Vcc::take_updates`] and the status line; they never abort startup.
    pub fn from_config(config: &Config) -> Self {
        let mut pending_updates = Vec::new();
        let mut notices = Vec::new();

        let table = match store::load_responses(&config.responses_path) {
            Ok((table, rejected)) => {
                if !rejected.is_empty() {
                    notices.push(format!(
                        "Ignored moods without responses: {}",
                        join(&rejected, ", ")
                    ));
                }
                table
            }
            Err(e) => {
                error!("{e}");
                pending_updates.push(UiUpdate::Notify(Notification::error("Error", e.to_string())));
                ResponseTable::default()
            }
        };

        let patterns = or_notice(store::load_patterns(&config.patterns_path), &mut notices);
        let synonyms = or_notice(store::load_synonyms(&config.synonyms_path), &mut notices);
        let lexicon = or_notice(
            store::load_sentiment_lexicon(&config.sentiment_lexicon_path),
            &mut notices,
        );
        let pipeline = VibePipeline::new(VibeEngine::new(patterns, synonyms), lexicon);

        let responder = match config.rng_seed {
            Some(seed) => {
                info!("Using fixed RNG seed {seed}");
                Responder::seeded(seed)
            }
            None => Responder::from_entropy(),
        };

        let mut vcc = Vcc::new(table, pipeline, responder);
        vcc.pending_updates = pending_updates;
        if !notices.is_empty() {
            vcc.status = Some(notices.join("; "));
        }
        vcc
    }
}

fn or_notice<T: Default>(result: Result<T, ResourceError>, notices: &mut Vec<String>) -> T {
    result.unwrap_or_else(|e| {
        warn!("{e}");
        notices.push(e.to_string());
        T::default()
    })
}

impl<R: Rng> Vcc<R> {
    pub fn new(table: ResponseTable, pipeline: VibePipeline, responder: Responder<R>) -> Self {
        Vcc {
            table,
            responder,
            pipeline,
            output: String::new(),
            status: None,
            pending_updates: Vec::new(),
        }
    }

    pub fn dispatch_ui_command(&mut self, ui_command: UiCommand) {
        match ui_command {
            UiCommand::Translate { mood, phrase } => {
                self.translate(&mood, &phrase);
            }
            UiCommand::Reroll { mood } => {
                self.reroll(&mood);
            }
            UiCommand::VibeCheck { phrase } => {
                self.vibe_check(&phrase);
            }
        }
    }

    /// Picks a response for `mood`. The phrase only has to be non-blank.
    pub fn translate(&mut self, mood: &str, phrase: &str) -> Outcome {
        debug!("translate({mood:?}, {phrase:?})");
        if phrase.trim().is_empty() {
            self.warn_empty_phrase();
            return Outcome::EmptyPhrase;
        }
        let outcome = self.pick(mood, TRANSLATION_FAILED);
        self.set_output(&outcome);
        outcome
    }

    /// Picks a fresh response for `mood` without looking at the phrase.
    pub fn reroll(&mut self, mood: &str) -> Outcome {
        debug!("reroll({mood:?})");
        let outcome = self.pick(mood, NO_MOOD_SELECTED);
        self.set_output(&outcome);
        outcome
    }

    /// Suggests a mood for the phrase. The output is left alone; the result
    /// goes to the status line and, for known moods, to the mood selector.
    pub fn vibe_check(&mut self, phrase: &str) -> Option<Detection> {
        debug!("vibe_check({phrase:?})");
        if phrase.trim().is_empty() {
            self.warn_empty_phrase();
            return None;
        }
        let detection = self.pipeline.run(phrase);
        self.status = Some(match &detection.category {
            Some(mood) => format!(
                "Vibe check: {mood} ({}% confidence). {}",
                detection.confidence, detection.response
            ),
            None => format!("Vibe check: {}", detection.response),
        });
        match &detection.category {
            Some(mood) if self.table.contains(mood.as_str()) => {
                self.pending_updates.push(UiUpdate::SelectMood(mood.clone()));
            }
            _ => {}
        }
        Some(detection)
    }

    fn pick(&mut self, mood: &str, failure: &'static str) -> Outcome {
        let mood = mood.trim();
        match self
            .table
            .responses(mood)
            .and_then(|responses| self.responder.respond(responses))
        {
            Some(response) => Outcome::Response(response.to_owned()),
            None => {
                info!("Mood {mood:?} not in database");
                Outcome::Failed(failure)
            }
        }
    }

    fn set_output(&mut self, outcome: &Outcome) {
        if let Some(output) = outcome.output() {
            self.output = output.to_owned();
        }
    }

    fn warn_empty_phrase(&mut self) {
        debug!("Empty phrase");
        self.pending_updates
            .push(UiUpdate::Notify(Notification::warning("Oops!", EMPTY_PHRASE)));
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    /// Drains the updates produced since the last call.
    pub fn take_updates(&mut self) -> Vec<UiUpdate> {
        std::mem::take(&mut self.pending_updates)
    }

    pub fn ui_state(&self) -> UiState {
        UiState {
            moods: self.table.moods().cloned().collect(),
            output: self.output().to_owned(),
            status: self.status.clone(),
        }
    }
}
