use anyhow::Result;
use tracing::{debug, info, warn};

use crate::audio::{
    AudioConfig, PlaybackTrigger, SampleLoadTask, SampleSlot, TriggerKind, TriggerOutcome,
    VoiceScheduler,
};
use crate::input::tracker::{self, KeyResponse, KeyTransition};
use crate::input::{KeyState, LogicalKey};
use crate::panel::PanelView;
use crate::pitch::{self, Direction};
use crate::traits::audio::AudioBackend;
use crate::traits::input::{KeyEventSource, RawKeyEvent};

/// Result of one key event: the tracker response plus any voice it triggered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyOutcome {
    pub response: KeyResponse,
    pub trigger: Option<TriggerOutcome>,
}

impl KeyOutcome {
    pub fn suppress_default(&self) -> bool {
        self.response.suppress_default
    }
}

/// Owns the organ state and wires key events to voices.
///
/// Single-threaded: every method runs on the UI thread. The host calls
/// `key_down`/`key_up` for each keyboard event and `update` once per frame.
pub struct OrganController<A: AudioBackend> {
    backend: A,
    keys: KeyState,
    direction: Direction,
    main: SampleSlot,
    easter_egg: SampleSlot,
    trigger: PlaybackTrigger,
    scheduler: VoiceScheduler,
}

impl<A: AudioBackend> OrganController<A> {
    /// Controller with both samples pending. Call [`Self::begin_loading`] to
    /// start loading them.
    pub fn new(backend: A, config: &AudioConfig) -> Self {
        Self::with_slots(
            backend,
            config,
            SampleSlot::pending("main"),
            SampleSlot::pending("easter-egg"),
        )
    }

    pub fn with_slots(
        mut backend: A,
        config: &AudioConfig,
        main: SampleSlot,
        easter_egg: SampleSlot,
    ) -> Self {
        if let Err(e) = backend.set_master_volume(config.clamped_volume()) {
            warn!("failed to set master volume: {e:#}");
        }
        Self {
            backend,
            keys: KeyState::new(),
            direction: Direction::None,
            main,
            easter_egg,
            trigger: PlaybackTrigger::from_config(config),
            scheduler: VoiceScheduler::new(),
        }
    }

    /// Start both fire-once sample loads. Presses before they finish are dropped.
    pub fn begin_loading(&mut self, config: &AudioConfig) {
        info!(
            "loading samples: {} / {}",
            config.main_sample_path, config.easter_egg_sample_path
        );
        self.main = SampleSlot::loading("main", SampleLoadTask::start(&config.main_sample_path));
        self.easter_egg = SampleSlot::loading(
            "easter-egg",
            SampleLoadTask::start(&config.easter_egg_sample_path),
        );
    }

    pub fn key_down(&mut self, name: &str, now_us: u64) -> KeyOutcome {
        let response = tracker::key_down(&mut self.keys, name, now_us);
        if response.transition.changed_state() {
            self.direction = pitch::resolve(&self.keys);
        }
        let trigger = response
            .transition
            .rising_edge()
            .and_then(|key| self.fire(key, now_us));
        KeyOutcome { response, trigger }
    }

    pub fn key_up(&mut self, name: &str, now_us: u64) -> KeyOutcome {
        let response = tracker::key_up(&mut self.keys, name, now_us);
        if let KeyTransition::Released(key) = response.transition {
            if let Some(held_us) = self.keys.latch(key).held_us() {
                debug!("{key:?} released after {held_us}us");
            }
            self.direction = pitch::resolve(&self.keys);
        }
        KeyOutcome {
            response,
            trigger: None,
        }
    }

    pub fn handle_event(&mut self, event: &RawKeyEvent) -> KeyOutcome {
        if event.pressed {
            self.key_down(&event.key, event.time_us)
        } else {
            self.key_up(&event.key, event.time_us)
        }
    }

    /// Feed every pending event from `source` through the controller.
    pub fn pump<S: KeyEventSource>(&mut self, source: &mut S) -> Vec<KeyOutcome> {
        source
            .poll_events()
            .iter()
            .map(|event| self.handle_event(event))
            .collect()
    }

    /// Finish sample loads and release voices whose lifetime has elapsed.
    pub fn update(&mut self, now_us: u64) {
        self.main.poll(&mut self.backend);
        self.easter_egg.poll(&mut self.backend);

        for voice in self.scheduler.drain_due(now_us) {
            match self.backend.release_voice(voice) {
                Ok(()) => debug!("voice {} released", voice.0),
                Err(e) => warn!("failed to release voice {}: {e:#}", voice.0),
            }
        }
    }

    /// Release both samples. Voices still playing are left to their timers.
    pub fn shutdown(&mut self) -> Result<()> {
        let in_flight = self.scheduler.pending_count();
        if in_flight > 0 {
            debug!("shutting down with {in_flight} voice(s) awaiting release");
        }
        // Both slots are released even when the first one fails.
        let main = self.main.release(&mut self.backend);
        let easter_egg = self.easter_egg.release(&mut self.backend);
        if let (Err(_), Err(e)) = (&main, &easter_egg) {
            warn!("easter-egg sample release failed: {e:#}");
        }
        main.and(easter_egg)
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn octave_shift(&self) -> bool {
        self.keys.octave_shift()
    }

    pub fn key_state(&self) -> &KeyState {
        &self.keys
    }

    pub fn panel_view(&self) -> PanelView {
        PanelView::new(self.direction, self.octave_shift())
    }

    /// Playback rate a main trigger would use right now.
    pub fn current_rate(&self) -> f64 {
        pitch::pitch(self.direction, self.octave_shift())
    }

    pub fn pending_voices(&self) -> usize {
        self.scheduler.pending_count()
    }

    pub fn main_slot(&self) -> &SampleSlot {
        &self.main
    }

    pub fn easter_egg_slot(&self) -> &SampleSlot {
        &self.easter_egg
    }

    pub fn backend(&self) -> &A {
        &self.backend
    }

    fn fire(&mut self, key: LogicalKey, now_us: u64) -> Option<TriggerOutcome> {
        let (kind, slot, rate) = match key {
            LogicalKey::Play => (TriggerKind::Main, &self.main, self.current_rate()),
            LogicalKey::EasterEgg => (TriggerKind::EasterEgg, &self.easter_egg, 1.0),
            _ => return None,
        };
        Some(
            self.trigger
                .fire(kind, rate, slot, &mut self.backend, &mut self.scheduler, now_us),
        )
    }
}
