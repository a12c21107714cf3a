//! Steuerungs-Logik pro Tick
//!
//! [`ControlState`] enthält den gesamten veränderlichen Zustand und die
//! reine Update-Logik (Flanken → Auswahl, Slider → Kanalwerte).
//! [`Controller`] verbindet diesen Zustand mit den Hardware-Traits,
//! dem Preset-Speicher und dem Auto-Save.

use embassy_time::Instant;

use crate::autosave::{AutoSaveScheduler, SaveOutcome, SaveState};
use crate::config::{ControllerConfig, LogFilter};
use crate::debounce::EdgeDetector;
use crate::logic::map_slider_to_byte;
use crate::preset::PresetStore;
use crate::render::{Feedback, render};
use crate::traits::{ButtonSource, PixelSink, SliderSource, StorageError, StorageMedium};
use crate::types::{CHANNEL_COUNT, Channel, ChannelValues, SelectionSet};

/// Was sich in einem Tick geändert hat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickReport {
    /// Erkannte Tasten-Flanken
    pub edges: [bool; CHANNEL_COUNT],
    /// Auf die ausgewählten Kanäle angewendeter Wert
    pub applied: Option<u8>,
    /// Ergebnis des Auto-Save (nur vom [`Controller`] gesetzt)
    pub save: Option<SaveOutcome>,
}

impl TickReport {
    pub fn selection_changed(&self) -> bool {
        self.edges.iter().any(|&edge| edge)
    }

    pub fn values_changed(&self) -> bool {
        self.applied.is_some()
    }

    /// Ausgaben müssen neu berechnet werden
    pub fn needs_render(&self) -> bool {
        self.selection_changed() || self.values_changed()
    }
}

/// Gesamter Zustand der Steuerung
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ControlState {
    pub values: ChannelValues,
    pub selection: SelectionSet,
    edges: EdgeDetector,
    /// Zuletzt angewendeter Slider-Wert (`None` bis zur ersten Anwendung)
    last_applied: Option<u8>,
}

impl ControlState {
    pub fn new(values: ChannelValues) -> Self {
        Self {
            values,
            ..Default::default()
        }
    }

    /// Verarbeitet Tasten-Pegel und Slider-Rohwert eines Ticks
    ///
    /// 1. Flanken erkennen, bei Flanke Kanal umschalten
    /// 2. Slider abbilden
    /// 3. Neuer Wert und mindestens ein Kanal ausgewählt: auf alle
    ///    ausgewählten Kanäle anwenden
    ///
    /// `raw = None` (Lesefehler) überspringt Schritt 2 und 3.
    pub fn apply_inputs(&mut self, levels: [bool; CHANNEL_COUNT], raw: Option<u16>) -> TickReport {
        let edges = self.edges.update(levels);
        for (channel, _) in Channel::ALL.into_iter().zip(edges).filter(|(_, edge)| *edge) {
            self.selection.toggle(channel);
        }

        let mut applied = None;
        if let Some(raw) = raw {
            let byte = map_slider_to_byte(raw);
            if !self.selection.is_empty() && self.last_applied != Some(byte) {
                self.apply_value(byte);
                applied = Some(byte);
            }
        }

        TickReport {
            edges,
            applied,
            save: None,
        }
    }

    fn apply_value(&mut self, byte: u8) {
        self.last_applied = Some(byte);
        for channel in self.selection.iter() {
            self.values.set(channel, byte);
        }
    }

    pub fn last_applied(&self) -> Option<u8> {
        self.last_applied
    }

    pub fn feedback(&self) -> Feedback {
        render(self.values, &self.selection)
    }
}

/// Polling-Steuerung über den Hardware-Traits
///
/// Single-threaded: jeder Aufruf von [`tick`](Self::tick) liest die
/// Eingänge, aktualisiert den Zustand, schreibt bei Änderung die Ausgaben
/// und führt den Auto-Save aus. Fehler werden geloggt, der Tick läuft
/// weiter.
pub struct Controller<B, S, P, M> {
    buttons: B,
    slider: S,
    pixels: P,
    store: PresetStore<M>,
    state: ControlState,
    autosave: AutoSaveScheduler,
    log: LogFilter,
}

impl<B, S, P, M> Controller<B, S, P, M>
where
    B: ButtonSource,
    S: SliderSource,
    P: PixelSink,
    M: StorageMedium,
{
    /// Lädt das Preset (Fallback: alles 0) und zeigt den Startzustand an
    pub fn new(buttons: B, slider: S, pixels: P, medium: M, config: ControllerConfig) -> Self {
        let mut store = PresetStore::new(medium, config.storage_offset);
        let values = match store.load() {
            Some(values) => {
                info!(
                    "Restored preset: R={} G={} B={} W={}",
                    values.r,
                    values.g,
                    values.b,
                    values.w
                );
                values
            }
            None => {
                info!("Starting with default values (all zeros)");
                ChannelValues::ZERO
            }
        };

        let mut controller = Self {
            buttons,
            slider,
            pixels,
            store,
            state: ControlState::new(values),
            autosave: AutoSaveScheduler::new(values, config.quiet_delay),
            log: config.log,
        };
        controller.push_feedback();
        controller
    }

    /// Ein Durchlauf der Hauptschleife
    pub fn tick(&mut self, now: Instant) -> TickReport {
        let levels = self.buttons.read_buttons().unwrap_or_else(|e| {
            warn!("Button read failed, treating as released: {}", e);
            [false; CHANNEL_COUNT]
        });
        let raw = match self.slider.read_slider() {
            Ok(raw) => Some(raw),
            Err(e) => {
                warn!("Slider read failed: {}", e);
                None
            }
        };

        let mut report = self.state.apply_inputs(levels, raw);

        if report.selection_changed() {
            self.log_selection(&report);
        }
        if let Some(byte) = report.applied {
            self.log_values(byte);
            self.autosave.mark_changed(now);
        }
        if report.needs_render() {
            self.push_feedback();
        }

        report.save = Some(self.autosave.poll(self.state.values, now, &mut self.store));
        report
    }

    /// Löscht das gespeicherte Preset
    ///
    /// Die aktuellen Werte bleiben erhalten; die nächste Änderung wird
    /// wieder gespeichert.
    pub fn clear_preset(&mut self) -> Result<(), StorageError> {
        self.store.clear()
    }

    fn push_feedback(&mut self) {
        if let Err(e) = self.pixels.show(&self.state.feedback()) {
            error!("Failed to update pixels: {}", e);
        }
    }

    fn log_selection(&self, report: &TickReport) {
        if !self.log.channel_changes {
            return;
        }
        for (channel, _) in Channel::ALL.into_iter().zip(report.edges).filter(|(_, edge)| *edge) {
            if self.state.selection.is_selected(channel) {
                info!("Selected {} channel", channel.name());
            } else {
                info!("Deselected {} channel", channel.name());
            }
        }
        info!("Active channels: {}", self.state.selection.selected_string().as_str());
    }

    fn log_values(&self, byte: u8) {
        if !self.log.value_changes {
            return;
        }
        info!(
            "Updated {} to {}",
            self.state.selection.selected_string().as_str(),
            byte
        );
        let values = self.state.values;
        info!(
            "Current RGBW: [{}, {}, {}, {}]",
            values.r,
            values.g,
            values.b,
            values.w
        );
    }

    pub fn state(&self) -> &ControlState {
        &self.state
    }

    pub fn values(&self) -> ChannelValues {
        self.state.values
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.state.selection
    }

    pub fn save_state(&self) -> SaveState {
        self.autosave.state()
    }

    pub fn store(&self) -> &PresetStore<M> {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut PresetStore<M> {
        &mut self.store
    }

    pub fn pixels(&self) -> &P {
        &self.pixels
    }

    pub fn buttons_mut(&mut self) -> &mut B {
        &mut self.buttons
    }

    pub fn slider_mut(&mut self) -> &mut S {
        &mut self.slider
    }
}
