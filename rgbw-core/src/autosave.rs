//! Auto-Save mit Ruhezeit
//!
//! Zustände:
//! - `Clean`: keine offene Änderung
//! - `Dirty`: Änderung offen, Ruhezeit läuft ab `last_change`
//! - `Saving`: Schreiben + Verifizieren läuft (synchron innerhalb von `poll`)
//!
//! Jede weitere Änderung erneuert `last_change` und verlängert damit die
//! Ruhezeit. Ein fehlgeschlagenes Speichern bleibt `Dirty` und wird beim
//! nächsten passenden Tick erneut versucht (kein Backoff, kein Limit).

use embassy_time::{Duration, Instant};

use crate::preset::{PresetStore, SaveError};
use crate::traits::StorageMedium;
use crate::types::ChannelValues;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveState {
    Clean,
    Dirty,
    Saving,
}

/// Ergebnis eines [`AutoSaveScheduler::poll`] Aufrufs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Nichts offen
    Idle,
    /// Änderung offen, Ruhezeit noch nicht abgelaufen
    Waiting,
    /// Werte entsprechen wieder dem gespeicherten Stand, nichts geschrieben
    Unchanged,
    Saved,
    Failed(SaveError),
}

pub struct AutoSaveScheduler {
    state: SaveState,
    committed: ChannelValues,
    last_change: Instant,
    quiet_delay: Duration,
}

impl AutoSaveScheduler {
    /// `committed` ist der Stand, der bereits im Speicher liegt
    pub fn new(committed: ChannelValues, quiet_delay: Duration) -> Self {
        Self {
            state: SaveState::Clean,
            committed,
            last_change: Instant::from_ticks(0),
            quiet_delay,
        }
    }

    /// Meldet eine Änderung der Kanalwerte
    pub fn mark_changed(&mut self, now: Instant) {
        self.state = SaveState::Dirty;
        self.last_change = now;
    }

    /// Prüft, ob gespeichert werden muss, und speichert ggf.
    pub fn poll<M: StorageMedium>(
        &mut self,
        current: ChannelValues,
        now: Instant,
        store: &mut PresetStore<M>,
    ) -> SaveOutcome {
        if self.state != SaveState::Dirty {
            return SaveOutcome::Idle;
        }
        if now.saturating_duration_since(self.last_change) < self.quiet_delay {
            return SaveOutcome::Waiting;
        }
        if current == self.committed {
            debug!("Values match last saved preset, nothing to write");
            self.state = SaveState::Clean;
            return SaveOutcome::Unchanged;
        }

        self.state = SaveState::Saving;
        match store.save(current) {
            Ok(()) => {
                self.committed = current;
                self.state = SaveState::Clean;
                SaveOutcome::Saved
            }
            Err(e) => {
                warn!("Auto-save failed, retrying next tick: {}", e);
                self.state = SaveState::Dirty;
                SaveOutcome::Failed(e)
            }
        }
    }

    pub fn state(&self) -> SaveState {
        self.state
    }

    pub fn committed(&self) -> ChannelValues {
        self.committed
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for SaveState {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            SaveState::Clean => defmt::write!(fmt, "Clean"),
            SaveState::Dirty => defmt::write!(fmt, "Dirty"),
            SaveState::Saving => defmt::write!(fmt, "Saving"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::StorageError;

    #[derive(Default)]
    struct CountingMedium {
        data: [u8; 6],
        writes: usize,
        fail_writes: usize,
    }

    impl StorageMedium for CountingMedium {
        fn read(&mut self, _offset: u32, buf: &mut [u8]) -> Result<(), StorageError> {
            buf.copy_from_slice(&self.data[..buf.len()]);
            Ok(())
        }

        fn write(&mut self, _offset: u32, data: &[u8]) -> Result<(), StorageError> {
            if self.fail_writes > 0 {
                self.fail_writes -= 1;
                return Err(StorageError::WriteFailed);
            }
            self.data[..data.len()].copy_from_slice(data);
            self.writes += 1;
            Ok(())
        }
    }

    fn ms(value: u64) -> Instant {
        Instant::from_millis(value)
    }

    #[test]
    fn test_clean_scheduler_is_idle() {
        let mut store = PresetStore::new(CountingMedium::default(), 0);
        let mut scheduler = AutoSaveScheduler::new(ChannelValues::ZERO, Duration::from_secs(2));
        assert_eq!(scheduler.poll(ChannelValues::ZERO, ms(10_000), &mut store), SaveOutcome::Idle);
        assert_eq!(store.medium().writes, 0);
    }

    #[test]
    fn test_waits_for_quiet_period() {
        let mut store = PresetStore::new(CountingMedium::default(), 0);
        let mut scheduler = AutoSaveScheduler::new(ChannelValues::ZERO, Duration::from_secs(2));
        let values = ChannelValues::new(0, 127, 0, 0);

        scheduler.mark_changed(ms(1000));
        assert_eq!(scheduler.poll(values, ms(2999), &mut store), SaveOutcome::Waiting);
        assert_eq!(scheduler.poll(values, ms(3000), &mut store), SaveOutcome::Saved);
        assert_eq!(scheduler.state(), SaveState::Clean);
        assert_eq!(scheduler.committed(), values);
        assert_eq!(store.medium().writes, 1);
    }

    #[test]
    fn test_late_change_restarts_timer() {
        let mut store = PresetStore::new(CountingMedium::default(), 0);
        let mut scheduler = AutoSaveScheduler::new(ChannelValues::ZERO, Duration::from_secs(2));
        let values = ChannelValues::new(5, 0, 0, 0);

        scheduler.mark_changed(ms(0));
        scheduler.mark_changed(ms(1500));
        assert_eq!(scheduler.poll(values, ms(2500), &mut store), SaveOutcome::Waiting);
        assert_eq!(scheduler.poll(values, ms(3500), &mut store), SaveOutcome::Saved);
    }

    #[test]
    fn test_failed_save_stays_dirty_and_retries() {
        let medium = CountingMedium {
            fail_writes: 1,
            ..Default::default()
        };
        let mut store = PresetStore::new(medium, 0);
        let mut scheduler = AutoSaveScheduler::new(ChannelValues::ZERO, Duration::from_secs(2));
        let values = ChannelValues::new(1, 2, 3, 4);

        scheduler.mark_changed(ms(0));
        assert_eq!(
            scheduler.poll(values, ms(2000), &mut store),
            SaveOutcome::Failed(SaveError::Storage(StorageError::WriteFailed))
        );
        assert_eq!(scheduler.state(), SaveState::Dirty);
        assert_eq!(scheduler.committed(), ChannelValues::ZERO);

        assert_eq!(scheduler.poll(values, ms(2010), &mut store), SaveOutcome::Saved);
        assert_eq!(scheduler.committed(), values);
    }

    #[test]
    fn test_return_to_committed_values_skips_write() {
        let committed = ChannelValues::new(9, 9, 9, 9);
        let mut store = PresetStore::new(CountingMedium::default(), 0);
        let mut scheduler = AutoSaveScheduler::new(committed, Duration::from_secs(2));

        scheduler.mark_changed(ms(0));
        assert_eq!(scheduler.poll(committed, ms(2000), &mut store), SaveOutcome::Unchanged);
        assert_eq!(scheduler.state(), SaveState::Clean);
        assert_eq!(store.medium().writes, 0);
    }
}
