// Task-Modul: Enthält alle Embassy Tasks
//
// Ein einziger Task pollt Eingänge und schreibt Ausgaben; der gesamte
// Zustand lebt im Controller, es gibt keine geteilten Daten.

pub mod control;

// Re-export Tasks für einfachen Import
pub use control::{control_logic, control_task};
