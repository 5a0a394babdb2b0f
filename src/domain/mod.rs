//! Domain layer - Core business logic with no I/O
//!
//! This layer contains:
//! - Entities: TipRecord, TipSession, ComicPanel, GameRule
//! - Value Objects: AgeGroup, Routine, story options, generation settings
//! - Aggregates: the reference TipTable
//! - Domain Services: comic panel extraction

pub mod aggregates;
pub mod entities;
pub mod services;
pub mod value_objects;
